//! Dropdown-style selector panel
//!
//! One panel per catalog. The selected entry is highlighted; when the panel
//! is too short for the whole catalog, the visible window follows it.

use bananas_core::{CatalogEntry, Framework, Registry};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// A titled list of catalog entries with one selected
pub struct SelectorPanel {
    title: &'static str,
    items: Vec<String>,
    selected: usize,
    focused: bool,
}

impl SelectorPanel {
    pub fn new(title: &'static str, items: Vec<String>, selected: usize) -> Self {
        Self {
            title,
            items,
            selected,
            focused: false,
        }
    }

    /// Panel over a catalog, labelled with each entry's display name
    pub fn from_registry<T: CatalogEntry>(
        title: &'static str,
        registry: &Registry<T>,
        selected_id: &str,
    ) -> Self {
        let items = registry
            .entries()
            .iter()
            .map(|entry| entry.label().to_string())
            .collect();
        Self::new(title, items, registry.position(selected_id).unwrap_or(0))
    }

    /// Framework panel, labels carry the port: `"Gin (:8082)"`
    pub fn frameworks(registry: &Registry<Framework>, selected_id: &str) -> Self {
        let items = registry
            .entries()
            .iter()
            .map(|f| format!("{} (:{})", f.name, f.port))
            .collect();
        Self::new(
            "Framework",
            items,
            registry.position(selected_id).unwrap_or(0),
        )
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// First item index shown for a panel with `visible` rows
    fn window_start(&self, visible: usize) -> usize {
        if visible == 0 || self.selected < visible {
            0
        } else {
            self.selected + 1 - visible
        }
    }
}

impl Widget for SelectorPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title_style = if self.focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };
        let block = styles::glass_block(self.focused)
            .title(Span::styled(format!(" {} ", self.title), title_style));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let visible = inner.height as usize;
        let start = self.window_start(visible);

        let lines: Vec<Line> = self
            .items
            .iter()
            .enumerate()
            .skip(start)
            .take(visible)
            .map(|(i, label)| {
                if i != self.selected {
                    return Line::from(Span::styled(format!("  {}", label), styles::text_primary()));
                }
                let style = if self.focused {
                    styles::focused_selected()
                } else {
                    styles::accent_bold()
                };
                Line::from(Span::styled(format!("▸ {}", label), style))
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

//! Header bar widget
//!
//! Title, subtitle (target host) and key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

pub const TITLE: &str = "Bananas Framework Tester";

/// Main header showing the app title, target host and keybindings
pub struct MainHeader<'a> {
    host: &'a str,
}

impl<'a> MainHeader<'a> {
    pub fn new(host: &'a str) -> Self {
        Self { host }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(TITLE, styles::accent_bold()),
        ]);
        let subtitle_line = Line::from(vec![
            Span::styled(" · ", styles::text_muted()),
            Span::styled(self.host, styles::text_secondary()),
        ]);

        let mut hints = Vec::new();
        for (i, (key, label)) in [("Tab", "focus"), ("↑↓", "select"), ("r", "run"), ("q", "quit")]
            .into_iter()
            .enumerate()
        {
            if i > 0 {
                hints.push(Span::raw(" "));
            }
            hints.push(Span::styled("[", styles::text_muted()));
            hints.push(Span::styled(key, styles::keybinding()));
            hints.push(Span::styled(format!("] {}", label), styles::text_muted()));
        }
        let hints_line = Line::from(hints);

        let title_width = title_line.width() as u16;
        let subtitle_width = subtitle_line.width() as u16;
        let hints_width = hints_line.width() as u16 + 1;

        buf.set_line(inner.x, inner.y, &title_line, inner.width);

        // Hints win over the subtitle when space runs out
        let show_hints = title_width + hints_width + 2 <= inner.width;
        let hints_taken = if show_hints { hints_width + 2 } else { 0 };
        if title_width + subtitle_width + hints_taken <= inner.width {
            buf.set_line(
                inner.x + title_width,
                inner.y,
                &subtitle_line,
                inner.width - title_width,
            );
        }
        if show_hints {
            let x = inner.x + inner.width - hints_width;
            buf.set_line(x, inner.y, &hints_line, hints_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_title_host_and_hints() {
        let mut term = TestTerminal::with_size(100, 3);
        term.render_widget(MainHeader::new("localhost"), Rect::new(0, 0, 100, 3));

        assert!(term.buffer_contains(TITLE));
        assert!(term.buffer_contains("localhost"));
        assert!(term.buffer_contains("[r] run"));
        assert!(term.buffer_contains("[q] quit"));
    }

    #[test]
    fn test_header_prefers_hints_over_subtitle() {
        let mut term = TestTerminal::new();
        term.render_widget(MainHeader::new("localhost"), Rect::new(0, 0, 80, 3));

        assert!(term.buffer_contains(TITLE));
        assert!(term.buffer_contains("[q] quit"));
        assert!(!term.buffer_contains("localhost"));
    }

    #[test]
    fn test_header_drops_hints_when_narrow() {
        let mut term = TestTerminal::compact();
        term.render_widget(MainHeader::new("localhost"), Rect::new(0, 0, 40, 3));

        assert!(term.buffer_contains("Bananas"));
        assert!(!term.buffer_contains("quit"));
    }
}

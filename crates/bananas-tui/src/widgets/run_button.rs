//! Run button

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::theme::{self, styles};

pub const RUN_LABEL: &str = "Run Test";
pub const RUNNING_LABEL: &str = "Testing...";

/// Triggers a run; disabled while one is in flight
pub struct RunButton {
    focused: bool,
    running: bool,
    spinner_frame: usize,
}

impl RunButton {
    pub fn new(focused: bool, running: bool, spinner_frame: usize) -> Self {
        Self {
            focused,
            running,
            spinner_frame,
        }
    }
}

impl Widget for RunButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (label, style) = if self.running {
            (
                format!(" {} {} ", theme::spinner(self.spinner_frame), RUNNING_LABEL),
                styles::button_disabled(),
            )
        } else {
            (format!(" ▶ {} ", RUN_LABEL), styles::button(self.focused))
        };

        let block = styles::glass_block(self.focused && !self.running);
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::styled(label, style))
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

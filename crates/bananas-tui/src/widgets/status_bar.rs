//! Status bar widget
//!
//! One line: the URL the next run will hit on the left, the run state on
//! the right.

use bananas_app::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn state_indicator(&self) -> Span<'static> {
        if self.state.is_running_test() {
            return Span::styled("● Running", styles::status_yellow());
        }
        match self.state.current_result() {
            Some(result) if result.is_success() => Span::styled(
                format!("✓ {}", result.formatted_duration()),
                styles::status_green(),
            ),
            Some(_) => Span::styled("✗ Failed", styles::status_red()),
            None => Span::styled("○ Ready", styles::text_muted()),
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let url_line = Line::from(vec![
            Span::styled(" GET ", styles::accent_bold()),
            Span::styled(self.state.next_url(), styles::text_secondary()),
        ]);
        buf.set_line(area.x, area.y, &url_line, area.width);

        let mut right = vec![self.state_indicator()];
        if self.state.runs_finished > 0 {
            right.push(Span::styled(
                format!(" │ runs: {} ", self.state.runs_finished),
                styles::text_muted(),
            ));
        } else {
            right.push(Span::raw(" "));
        }
        let right_line = Line::from(right);
        let right_width = right_line.width() as u16;

        if url_line.width() as u16 + right_width + 1 <= area.width {
            buf.set_line(
                area.x + area.width - right_width,
                area.y,
                &right_line,
                right_width,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_app_state, TestTerminal};

    #[test]
    fn test_shows_next_url_and_ready() {
        let state = test_app_state();
        let mut term = TestTerminal::new();
        term.render_widget(StatusBar::new(&state), Rect::new(0, 0, 80, 1));

        assert!(term.buffer_contains("GET http://localhost:8081/health"));
        assert!(term.buffer_contains("Ready"));
    }

    #[test]
    fn test_url_follows_selection() {
        let state = test_app_state();
        state.selection.set_framework("echo");
        state.selection.set_endpoint("/api/test/database?limit=10");
        state.selection.set_orm("pgx");

        let mut term = TestTerminal::new();
        term.render_widget(StatusBar::new(&state), Rect::new(0, 0, 80, 1));

        assert!(term.buffer_contains("http://localhost:8084/api/test/database?limit=10&orm=pgx"));
    }

    #[test]
    fn test_running_indicator() {
        let state = test_app_state();
        state.results.begin();

        let mut term = TestTerminal::new();
        term.render_widget(StatusBar::new(&state), Rect::new(0, 0, 80, 1));

        assert!(term.buffer_contains("Running"));
    }
}

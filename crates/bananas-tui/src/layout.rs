//! Screen layout definitions for the TUI
//!
//! Header, a row of three selector panels, the run button, the results
//! panel and a one-line status bar. Short terminals get one-row selectors.

use ratatui::layout::{Constraint, Layout, Rect};

/// Below this height the selectors collapse to a single visible entry
pub const COMPACT_HEIGHT_THRESHOLD: u16 = 20;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and key hints
    pub header: Rect,

    pub framework: Rect,
    pub orm: Rect,
    pub endpoint: Rect,

    pub run_button: Rect,

    /// Last result or placeholder
    pub results: Rect,

    /// Next URL and run state
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let selector_height = if area.height >= COMPACT_HEIGHT_THRESHOLD {
        8 // Top border + 6 frameworks + bottom border
    } else {
        3 // Top border + selected entry + bottom border
    };

    let rows = Layout::vertical([
        Constraint::Length(3),               // Header
        Constraint::Length(selector_height), // Selectors
        Constraint::Length(3),               // Run button
        Constraint::Min(0),                  // Results
        Constraint::Length(1),               // Status bar
    ])
    .split(area);

    let selectors = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(rows[1]);

    ScreenAreas {
        header: rows[0],
        framework: selectors[0],
        orm: selectors[1],
        endpoint: selectors[2],
        run_button: rows[2],
        results: rows[3],
        status: rows[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.framework.height, 8);
        assert_eq!(layout.framework.y, 3);
        assert_eq!(layout.run_button.y, 11);
        assert_eq!(layout.results.y, 14);
        assert_eq!(layout.results.height, 9); // 24 - 3 - 8 - 3 - 1
        assert_eq!(layout.status.y, 23);
        assert_eq!(layout.status.height, 1);
    }

    #[test]
    fn test_selectors_share_the_row() {
        let layout = create(Rect::new(0, 0, 90, 30));

        assert_eq!(layout.framework.width, 30);
        assert_eq!(layout.orm.x, 30);
        assert_eq!(layout.endpoint.x, 60);
        assert_eq!(layout.framework.y, layout.endpoint.y);
    }

    #[test]
    fn test_compact_layout_collapses_selectors() {
        let layout = create(Rect::new(0, 0, 40, 12));

        assert_eq!(layout.framework.height, 3);
        assert_eq!(layout.results.height, 2); // 12 - 3 - 3 - 3 - 1
        assert_eq!(layout.status.y, 11);
    }
}

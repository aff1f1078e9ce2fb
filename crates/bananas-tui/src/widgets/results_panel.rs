//! Results panel
//!
//! Shows a placeholder before the first run, a progress line while a run is
//! in flight, and the latest result otherwise. Only the response body
//! scrolls; the summary lines stay put.

use bananas_core::TestResult;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{self, palette, styles};

pub const PLACEHOLDER: &str = "No results yet. Pick a framework and press [r] to run a test.";

/// What the panel is showing
pub enum ResultsView<'a> {
    Empty,
    Running { url: &'a str, spinner_frame: usize },
    Finished(&'a TestResult),
}

pub struct ResultsPanel<'a> {
    view: ResultsView<'a>,
    scroll: u16,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(view: ResultsView<'a>) -> Self {
        Self { view, scroll: 0 }
    }

    /// First visible line of the response body
    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    fn title(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(" Results ", styles::text_secondary())];
        match &self.view {
            ResultsView::Finished(result) if result.is_success() => {
                spans.push(Span::styled("✓ Success ", styles::status_green()));
            }
            ResultsView::Finished(_) => {
                spans.push(Span::styled("✗ Failed ", styles::status_red()));
            }
            ResultsView::Running { .. } => {
                spans.push(Span::styled("● Running ", styles::status_yellow()));
            }
            ResultsView::Empty => {}
        }
        Line::from(spans)
    }
}

fn field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<10}", label), styles::text_muted()),
        Span::styled(value, styles::text_primary()),
    ])
}

fn result_lines(result: &TestResult, scroll: u16) -> Vec<Line<'static>> {
    let mut lines = vec![
        field("Framework", result.framework().to_string()),
        field("ORM", result.orm().to_string()),
        field("Duration", result.formatted_duration()),
        field("URL", result.url().to_string()),
        Line::default(),
    ];

    if let Some(error) = result.error() {
        lines.push(Line::from(vec![
            Span::styled("Error: ", styles::status_red().add_modifier(Modifier::BOLD)),
            Span::styled(error.to_string(), styles::status_red()),
        ]));
        return lines;
    }

    let body_style = Style::default().fg(palette::JSON_TEXT);
    if let Some(body) = result.formatted_response() {
        lines.extend(
            body.lines()
                .skip(scroll as usize)
                .map(|line| Line::styled(line.to_string(), body_style)),
        );
    }
    lines
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(self.title());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        match self.view {
            ResultsView::Empty => {
                Paragraph::new(Line::styled(PLACEHOLDER, styles::text_muted()))
                    .wrap(Wrap { trim: true })
                    .render(inner, buf);
            }
            ResultsView::Running { url, spinner_frame } => {
                Paragraph::new(Line::from(vec![
                    Span::styled(
                        format!("{} ", theme::spinner(spinner_frame)),
                        styles::status_yellow(),
                    ),
                    Span::styled(format!("Running test against {}...", url), styles::text_primary()),
                ]))
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            }
            ResultsView::Finished(result) => {
                // The error text wraps; JSON keeps its indentation
                let paragraph = Paragraph::new(result_lines(result, self.scroll));
                let paragraph = if result.is_success() {
                    paragraph
                } else {
                    paragraph.wrap(Wrap { trim: false })
                };
                paragraph.render(inner, buf);
            }
        }
    }
}

//! Main render/view function (View in TEA pattern)


use bananas_app::state::{AppState, Focus};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::palette;
use crate::widgets::{
    MainHeader, ResultsPanel, ResultsView, RunButton, SelectorPanel, StatusBar,
};

/// Render the complete UI (View function in TEA)
///
/// Pure: reads the state cells, never writes them.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    let selection = state.selection.current();
    let catalogs = state.selection.catalogs();

    frame.render_widget(MainHeader::new(&state.host), areas.header);

    frame.render_widget(
        SelectorPanel::frameworks(&catalogs.frameworks, selection.framework.value)
            .focused(state.focus == Focus::Framework),
        areas.framework,
    );
    frame.render_widget(
        SelectorPanel::from_registry("ORM", &catalogs.orms, selection.orm.value)
            .focused(state.focus == Focus::Orm),
        areas.orm,
    );
    frame.render_widget(
        SelectorPanel::from_registry("Endpoint", &catalogs.endpoints, selection.endpoint.path)
            .focused(state.focus == Focus::Endpoint),
        areas.endpoint,
    );

    let running = state.is_running_test();
    frame.render_widget(
        RunButton::new(state.focus == Focus::RunButton, running, state.spinner_frame),
        areas.run_button,
    );

    let result = state.current_result();
    let view = match (&state.last_request, &result) {
        (Some(request), _) if running => ResultsView::Running {
            url: &request.url,
            spinner_frame: state.spinner_frame,
        },
        (_, Some(result)) => ResultsView::Finished(result),
        _ => ResultsView::Empty,
    };
    frame.render_widget(
        ResultsPanel::new(view).scroll(state.response_scroll),
        areas.results,
    );

    frame.render_widget(StatusBar::new(state), areas.status);
}

use super::Frame;
use crate::layout::RenderPlan;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Key hints offered by the given plan, as (keys, action) pairs.
///
fn hints(plan: &RenderPlan) -> Vec<(&'static str, &'static str)> {
    let mut hints = match plan {
        RenderPlan::Loading => vec![],
        RenderPlan::Error => vec![("r", "retry")],
        RenderPlan::List { .. } => vec![("j/k", "move"), ("enter", "open"), ("r", "refresh")],
        RenderPlan::Detail { .. } => vec![("esc", "back"), ("r", "refresh")],
        RenderPlan::ListDetail { .. } => {
            vec![("j/k", "move"), ("enter", "show"), ("r", "refresh")]
        }
    };
    hints.push(("g", "log"));
    hints.push(("q", "quit"));
    hints
}

/// Render footer widget according to state.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let plan = state.render_plan();

    let mut spans = Vec::new();
    for (keys, action) in hints(&plan) {
        spans.push(Span::styled(format!(" {} ", keys), styling::key_hint_style(theme)));
        spans.push(Span::styled(
            format!(" {}  ", action),
            styling::muted_text_style(theme),
        ));
    }

    let status_style = if plan.offers_retry() {
        styling::warning_style(theme)
    } else {
        styling::muted_text_style(theme)
    };
    let status = format!(
        "{} · {} ",
        state.presenter().data_state().label(),
        state.window_class().name()
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(status.chars().count() as u16),
        ])
        .split(size);

    frame.render_widget(Paragraph::new(Line::from(spans)), columns[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(status, status_style))
            .alignment(Alignment::Right),
        columns[1],
    );
}

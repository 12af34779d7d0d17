use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the error screen with its retry hint.
///
pub fn failure(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let mut lines = vec![Line::from(""); (size.height / 2).saturating_sub(2) as usize];
    lines.push(Line::from(Span::styled(
        "Failed to load movies",
        styling::error_style(theme),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Press ", styling::muted_text_style(theme)),
        Span::styled("r", styling::key_hint_style(theme)),
        Span::styled(" to retry", styling::muted_text_style(theme)),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Movies")
        .border_style(styling::normal_block_border_style(theme));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, size);
}

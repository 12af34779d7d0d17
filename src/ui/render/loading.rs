use super::Frame;
use crate::state::State;
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
};

/// Render the loading screen.
///
pub fn loading(frame: &mut Frame, size: Rect, state: &mut State) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Movies")
        .border_style(styling::normal_block_border_style(state.get_theme()));
    let widget = spinner::widget(state, size.height, "Loading movies...").block(block);
    frame.render_widget(widget, size);
}

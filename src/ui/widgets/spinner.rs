use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Frames cycled through while something is loading.
///
pub const FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Return a centered spinner paragraph for an area of the given height.
///
pub fn widget(state: &State, height: u16, label: &str) -> Paragraph<'static> {
    let theme = state.get_theme();
    let frame = FRAMES[*state.get_spinner_index() % FRAMES.len()];
    let mut lines = vec![Line::from(""); (height / 2).saturating_sub(1) as usize];
    lines.push(Line::from(vec![
        Span::styled(frame.to_string(), styling::active_list_item_style(theme)),
        Span::styled(format!(" {}", label), styling::normal_text_style(theme)),
    ]));
    Paragraph::new(lines).alignment(Alignment::Center)
}

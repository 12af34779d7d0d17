use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use crate::utils::text_processing::preview;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

const BLOCK_TITLE: &str = "Movies";

/// Marks the movie shown in the detail pane.
const SELECTED_MARKER: &str = "» ";

/// Render the movie list. `selected_id` marks the movie shown next to it.
///
pub fn movie_list(frame: &mut Frame, size: Rect, state: &mut State, selected_id: Option<&str>) {
    let theme = state.get_theme();
    let movies = state.presenter().data_state().items().unwrap_or_default();
    let synopsis_width = size.width.saturating_sub(4) as usize;

    let items: Vec<ListItem<'static>> = if movies.is_empty() {
        vec![ListItem::new(Span::styled(
            "No movies available",
            styling::muted_text_style(theme),
        ))]
    } else {
        movies
            .iter()
            .map(|movie| {
                let mut heading = Vec::new();
                if selected_id == Some(movie.id.as_str()) {
                    heading.push(Span::styled(
                        SELECTED_MARKER,
                        styling::current_list_item_style(theme),
                    ));
                }
                heading.push(Span::styled(
                    movie.title.to_owned(),
                    styling::title_style(theme),
                ));
                if !movie.review_score.is_empty() {
                    heading.push(Span::styled(
                        format!("  {}", movie.review_score),
                        styling::label_style(theme),
                    ));
                }
                ListItem::new(vec![
                    Line::from(heading),
                    Line::from(Span::styled(
                        preview(&movie.synopsis, synopsis_width),
                        styling::muted_text_style(theme),
                    )),
                ])
            })
            .collect()
    };

    let title = format!("{} ({})", BLOCK_TITLE, movies.len());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::active_block_border_style(theme))
                .title(Span::styled(title, styling::active_block_title_style())),
        )
        .style(styling::normal_text_style(theme))
        .highlight_style(styling::active_list_item_style(theme))
        .highlight_symbol("▌");

    frame.render_stateful_widget(list, size, state.get_movies_list_state());
}

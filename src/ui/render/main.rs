use super::{failure, loading, movie_detail, movie_list, Frame};
use crate::layout::RenderPlan;
use crate::movies::MovieItem;
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Owned copy of the render plan so the renderer can borrow state mutably.
///
enum Screen {
    Loading,
    Error,
    List,
    Detail(MovieItem),
    ListDetail(Option<MovieItem>),
}

impl From<RenderPlan<'_>> for Screen {
    fn from(plan: RenderPlan<'_>) -> Self {
        match plan {
            RenderPlan::Loading => Screen::Loading,
            RenderPlan::Error => Screen::Error,
            RenderPlan::List { .. } => Screen::List,
            RenderPlan::Detail { item } => Screen::Detail(item.to_owned()),
            RenderPlan::ListDetail { selected, .. } => {
                Screen::ListDetail(selected.cloned())
            }
        }
    }
}

/// Render main widget according to state.
///
pub fn main(frame: &mut Frame, size: Rect, state: &mut State) {
    match Screen::from(state.render_plan()) {
        Screen::Loading => loading::loading(frame, size, state),
        Screen::Error => failure::failure(frame, size, state),
        Screen::List => movie_list::movie_list(frame, size, state, None),
        Screen::Detail(movie) => movie_detail::movie_detail(frame, size, state, &movie),
        Screen::ListDetail(selected) => {
            let panes = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(2, 5), Constraint::Ratio(3, 5)])
                .split(size);
            movie_list::movie_list(
                frame,
                panes[0],
                state,
                selected.as_ref().map(|movie| movie.id.as_str()),
            );
            match selected {
                Some(movie) => movie_detail::movie_detail(frame, panes[1], state, &movie),
                None => movie_detail::placeholder(frame, panes[1], state),
            }
        }
    }
}

use super::error::StateError;
use crate::app::NetworkEventSender;
use crate::layout::{self, Breakpoints, RenderPlan, WindowClass};
use crate::logger::LogSink;
use crate::movies::MovieItem;
use crate::presenter::Presenter;
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;
use ratatui::layout::Rect;
use ratatui::widgets::ListState;

/// Houses data representative of application state.
///
/// The presenter holds everything with correctness rules; the rest is
/// presentation detail the renderer and key handler share.
pub struct State {
    presenter: Presenter,
    breakpoints: Breakpoints,
    terminal_size: Rect,
    spinner_index: usize,
    movies_list_state: ListState,
    theme: Theme,
    log_visible: bool,
    log_sink: LogSink,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            presenter: Presenter::new(None),
            breakpoints: Breakpoints::default(),
            terminal_size: Rect::default(),
            spinner_index: 0,
            movies_list_state: ListState::default(),
            theme: Theme::default(),
            log_visible: false,
            log_sink: LogSink::default(),
        }
    }
}

impl State {
    pub fn new(
        net_sender: NetworkEventSender,
        breakpoints: Breakpoints,
        theme: Theme,
        log_sink: LogSink,
    ) -> Self {
        State {
            presenter: Presenter::new(Some(net_sender)),
            breakpoints,
            terminal_size: Rect::default(),
            spinner_index: 0,
            movies_list_state: ListState::default(),
            theme,
            log_visible: false,
            log_sink,
        }
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Returns the presenter.
    ///
    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    /// Returns the presenter for mutation.
    ///
    pub fn presenter_mut(&mut self) -> &mut Presenter {
        &mut self.presenter
    }

    /// Sets the terminal size, logging window class changes.
    ///
    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        let previous = self.window_class();
        self.terminal_size = size;
        let current = self.window_class();
        if previous != current {
            debug!(
                "Window class changed from {} to {} ({} columns).",
                previous.name(),
                current.name(),
                size.width
            );
        }
        self
    }

    /// Returns the window class for the current terminal width.
    ///
    pub fn window_class(&self) -> WindowClass {
        self.breakpoints.classify(self.terminal_size.width)
    }

    /// Returns what should be on screen right now.
    ///
    pub fn render_plan(&self) -> RenderPlan<'_> {
        layout::select(
            self.window_class(),
            self.presenter.data_state(),
            self.presenter.navigation(),
        )
    }

    /// Advance the spinner index.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    /// Return the current spinner index.
    ///
    pub fn get_spinner_index(&self) -> &usize {
        &self.spinner_index
    }

    /// Returns the list cursor with its selection clamped to the loaded movies.
    ///
    pub fn get_movies_list_state(&mut self) -> &mut ListState {
        let count = self.movie_count();
        let selected = match count {
            0 => None,
            _ => Some(self.movies_list_state.selected().unwrap_or(0).min(count - 1)),
        };
        self.movies_list_state.select(selected);
        &mut self.movies_list_state
    }

    /// Highlight the next movie, wrapping around.
    ///
    pub fn next_movie(&mut self) -> &mut Self {
        let count = self.movie_count();
        if count == 0 {
            return self;
        }
        let current = self.highlighted_index().unwrap_or(0);
        let next = if current + 1 < count { current + 1 } else { 0 };
        self.movies_list_state.select(Some(next));
        self
    }

    /// Highlight the previous movie, wrapping around.
    ///
    pub fn previous_movie(&mut self) -> &mut Self {
        let count = self.movie_count();
        if count == 0 {
            return self;
        }
        let current = self.highlighted_index().unwrap_or(0);
        let previous = if current > 0 { current - 1 } else { count - 1 };
        self.movies_list_state.select(Some(previous));
        self
    }

    /// Returns the movie under the list cursor.
    ///
    pub fn highlighted_movie(&self) -> Result<&MovieItem, StateError> {
        let movies = self
            .presenter
            .data_state()
            .items()
            .ok_or(StateError::MoviesNotLoaded)?;
        self.highlighted_index()
            .and_then(|index| movies.get(index))
            .ok_or(StateError::NothingHighlighted)
    }

    /// Show the detail of the movie under the list cursor.
    ///
    pub fn open_highlighted(&mut self) -> Result<&mut Self, StateError> {
        let movie = self.highlighted_movie()?.to_owned();
        self.presenter.select_item(movie);
        Ok(self)
    }

    /// Leave the detail page.
    ///
    pub fn back(&mut self) -> &mut Self {
        self.presenter.return_to_list();
        self
    }

    /// Fetch the movies again.
    ///
    pub fn retry(&mut self) -> &mut Self {
        self.presenter.retry();
        self
    }

    /// Show or hide the log pane.
    ///
    pub fn toggle_log(&mut self) -> &mut Self {
        self.log_visible = !self.log_visible;
        self
    }

    /// Returns whether the log pane is shown.
    ///
    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    /// Returns the captured log entries, oldest first.
    ///
    pub fn get_log_entries(&self) -> Vec<String> {
        self.log_sink
            .lock()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn movie_count(&self) -> usize {
        self.presenter
            .data_state()
            .items()
            .map_or(0, |items| items.len())
    }

    fn highlighted_index(&self) -> Option<usize> {
        match self.movie_count() {
            0 => None,
            count => Some(self.movies_list_state.selected().unwrap_or(0).min(count - 1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::push_entry;
    use crate::movies::MoviesError;
    use crate::presenter::{DataState, Page};
    use fake::{Fake, Faker};

    fn loaded(count: usize) -> (State, Vec<MovieItem>) {
        let movies: Vec<MovieItem> = (0..count).map(|_| Faker.fake()).collect();
        let mut state = State::default();
        state.presenter_mut().complete_fetch(1, Ok(movies.to_owned()));
        (state, movies)
    }

    fn sized(width: u16) -> Rect {
        Rect::new(0, 0, width, 40)
    }

    #[test]
    fn default_is_loading() {
        let state = State::default();
        assert_eq!(*state.presenter().data_state(), DataState::Loading);
        assert_eq!(state.render_plan(), RenderPlan::Loading);
    }

    #[test]
    fn set_terminal_size() {
        let mut state = State::default();
        let size = Rect::new(Faker.fake(), Faker.fake(), Faker.fake(), Faker.fake());
        state.set_terminal_size(size);
        assert_eq!(size, state.terminal_size);
    }

    #[test]
    fn window_class_follows_width() {
        let mut state = State::default();
        state.set_terminal_size(sized(60));
        assert_eq!(state.window_class(), WindowClass::Compact);
        state.set_terminal_size(sized(100));
        assert_eq!(state.window_class(), WindowClass::Medium);
        state.set_terminal_size(sized(160));
        assert_eq!(state.window_class(), WindowClass::Expanded);
    }

    #[test]
    fn advance_spinner_index() {
        let mut state = State::default();
        state.advance_spinner_index();
        assert_eq!(state.spinner_index, 1);
        for _ in 0..SPINNER_FRAME_COUNT {
            state.advance_spinner_index();
        }
        assert_eq!(state.spinner_index, 1);
    }

    #[test]
    fn next_movie_wraps() {
        let (mut state, movies) = loaded(3);
        assert_eq!(state.highlighted_movie().unwrap(), &movies[0]);
        state.next_movie().next_movie();
        assert_eq!(state.highlighted_movie().unwrap(), &movies[2]);
        state.next_movie();
        assert_eq!(state.highlighted_movie().unwrap(), &movies[0]);
    }

    #[test]
    fn previous_movie_wraps() {
        let (mut state, movies) = loaded(3);
        state.previous_movie();
        assert_eq!(state.highlighted_movie().unwrap(), &movies[2]);
        state.previous_movie();
        assert_eq!(state.highlighted_movie().unwrap(), &movies[1]);
    }

    #[test]
    fn cursor_is_clamped_after_reload() {
        let (mut state, _) = loaded(5);
        state.previous_movie();
        let generation = state.presenter_mut().retry();
        let fewer: Vec<MovieItem> = vec![Faker.fake(), Faker.fake()];
        state
            .presenter_mut()
            .complete_fetch(generation, Ok(fewer.to_owned()));
        assert_eq!(state.highlighted_movie().unwrap(), &fewer[1]);
        assert_eq!(state.get_movies_list_state().selected(), Some(1));
    }

    #[test]
    fn highlighted_movie_errors() {
        let state = State::default();
        assert!(matches!(
            state.highlighted_movie(),
            Err(StateError::MoviesNotLoaded)
        ));
        let (state, _) = loaded(0);
        assert!(matches!(
            state.highlighted_movie(),
            Err(StateError::NothingHighlighted)
        ));
    }

    #[test]
    fn open_highlighted_selects_movie() {
        let (mut state, movies) = loaded(2);
        state.set_terminal_size(sized(60));
        state.next_movie();
        state.open_highlighted().unwrap();
        assert_eq!(state.presenter().navigation().page(), Page::Detail);
        assert_eq!(state.render_plan(), RenderPlan::Detail { item: &movies[1] });

        state.back();
        assert_eq!(state.render_plan(), RenderPlan::List { items: &movies });
    }

    #[test]
    fn open_highlighted_when_failed() {
        let mut state = State::default();
        state
            .presenter_mut()
            .complete_fetch(1, Err(MoviesError::Other("offline".to_string())));
        assert!(state.open_highlighted().is_err());
        assert_eq!(state.presenter().navigation().page(), Page::List);
    }

    #[test]
    fn selection_survives_widening() {
        let (mut state, movies) = loaded(2);
        state.set_terminal_size(sized(60));
        state.next_movie().open_highlighted().unwrap();
        state.set_terminal_size(sized(200));
        assert_eq!(
            state.render_plan(),
            RenderPlan::ListDetail {
                items: &movies,
                selected: Some(&movies[1]),
            }
        );
    }

    #[test]
    fn retry_goes_back_to_loading() {
        let (mut state, _) = loaded(2);
        state.retry();
        assert!(state.presenter().data_state().is_loading());
        assert_eq!(state.presenter().generation(), 2);
    }

    #[test]
    fn new_dispatches_exactly_one_fetch() {
        let (tx, rx) = std::sync::mpsc::channel();
        let state = State::new(
            tx,
            Breakpoints::default(),
            Theme::default(),
            LogSink::default(),
        );
        assert!(state.presenter().data_state().is_loading());
        assert_eq!(state.presenter().version(), 1);
        assert_eq!(rx.try_iter().count(), 1);
    }

    #[test]
    fn toggle_log() {
        let mut state = State::default();
        assert!(!state.is_log_visible());
        state.toggle_log();
        assert!(state.is_log_visible());
        state.toggle_log();
        assert!(!state.is_log_visible());
    }

    #[test]
    fn log_entries_come_from_sink() {
        let sink = LogSink::default();
        let state = State {
            log_sink: sink.clone(),
            ..State::default()
        };
        push_entry(&sink, "first".to_string());
        push_entry(&sink, "second".to_string());
        assert_eq!(state.get_log_entries(), vec!["first", "second"]);
    }
}

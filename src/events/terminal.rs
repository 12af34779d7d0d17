use crate::layout::RenderPlan;
use crate::presenter::Page;
use crate::state::State;
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            if tx_clone.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => (),
                        Err(e) => {
                            error!("Failed to read terminal event: {}", e);
                            break;
                        }
                    },
                    Ok(false) => (),
                    Err(e) => {
                        error!("Failed to poll terminal events: {}", e);
                        break;
                    }
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(state, key)),
            Event::Tick => {
                state.advance_spinner_index();
                Ok(true)
            }
        }
    }
}

/// Apply a key press to the state. Returns false if exit was requested.
///
pub fn handle_key(state: &mut State, key: KeyEvent) -> bool {
    let (shows_list, shows_detail, offers_retry) = {
        let plan = state.render_plan();
        (
            plan.items().is_some(),
            matches!(plan, RenderPlan::Detail { .. }),
            plan.offers_retry(),
        )
    };

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), _) => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        (KeyCode::Char('g'), _) => {
            state.toggle_log();
        }
        (KeyCode::Char('r'), _) if offers_retry || shows_list || shows_detail => {
            state.retry();
        }
        (KeyCode::Char('j'), _) | (KeyCode::Down, _) if shows_list => {
            state.next_movie();
        }
        (KeyCode::Char('k'), _) | (KeyCode::Up, _) if shows_list => {
            state.previous_movie();
        }
        (KeyCode::Enter, _) | (KeyCode::Char('l'), _) | (KeyCode::Right, _) if shows_list => {
            if let Err(e) = state.open_highlighted() {
                debug!("Ignoring selection: {}", e);
            }
        }
        (KeyCode::Esc, _) | (KeyCode::Backspace, _) | (KeyCode::Char('h'), _) | (KeyCode::Left, _)
            if state.presenter().navigation().page() == Page::Detail =>
        {
            state.back();
        }
        _ => (),
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::network::Event as NetworkEvent;
    use crate::layout::Breakpoints;
    use crate::logger::LogSink;
    use crate::movies::{MovieItem, MoviesError};
    use crate::ui::Theme;
    use fake::{Fake, Faker};
    use ratatui::layout::Rect;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded(width: u16, count: usize) -> (State, Vec<MovieItem>) {
        let movies: Vec<MovieItem> = (0..count).map(|_| Faker.fake()).collect();
        let mut state = State::default();
        state.set_terminal_size(Rect::new(0, 0, width, 40));
        state.presenter_mut().complete_fetch(1, Ok(movies.to_owned()));
        (state, movies)
    }

    #[test]
    fn exit_keys() {
        let mut state = State::default();
        assert!(!handle_key(&mut state, press(KeyCode::Char('q'))));
        assert!(!handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
        assert!(handle_key(&mut state, press(KeyCode::Char('c'))));
    }

    #[test]
    fn enter_opens_highlighted_movie() {
        let (mut state, movies) = loaded(60, 3);
        handle_key(&mut state, press(KeyCode::Char('j')));
        handle_key(&mut state, press(KeyCode::Enter));
        assert_eq!(state.render_plan(), RenderPlan::Detail { item: &movies[1] });
    }

    #[test]
    fn list_keys_are_ignored_on_detail_page() {
        let (mut state, movies) = loaded(60, 3);
        handle_key(&mut state, press(KeyCode::Enter));
        handle_key(&mut state, press(KeyCode::Down));
        handle_key(&mut state, press(KeyCode::Enter));
        assert_eq!(state.render_plan(), RenderPlan::Detail { item: &movies[0] });
    }

    #[test]
    fn escape_returns_to_list() {
        let (mut state, movies) = loaded(60, 2);
        handle_key(&mut state, press(KeyCode::Enter));
        handle_key(&mut state, press(KeyCode::Esc));
        assert_eq!(state.render_plan(), RenderPlan::List { items: &movies });
        assert_eq!(state.presenter().navigation().selected(), Some(&movies[0]));
    }

    #[test]
    fn cursor_moves_do_not_change_dual_pane_selection() {
        let (mut state, movies) = loaded(200, 3);
        handle_key(&mut state, press(KeyCode::Enter));
        handle_key(&mut state, press(KeyCode::Down));
        handle_key(&mut state, press(KeyCode::Down));
        assert_eq!(
            state.render_plan(),
            RenderPlan::ListDetail {
                items: &movies,
                selected: Some(&movies[0]),
            }
        );
        handle_key(&mut state, press(KeyCode::Enter));
        assert_eq!(
            state.presenter().navigation().selected(),
            Some(&movies[2])
        );
    }

    #[test]
    fn retry_from_error_screen() {
        let mut state = State::default();
        state
            .presenter_mut()
            .complete_fetch(1, Err(MoviesError::Other("offline".to_string())));
        assert!(state.render_plan().offers_retry());

        handle_key(&mut state, press(KeyCode::Char('r')));
        assert_eq!(state.render_plan(), RenderPlan::Loading);
        assert_eq!(state.presenter().generation(), 2);
    }

    #[test]
    fn retry_from_error_screen_dispatches_fetch() {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut state = State::new(
            tx,
            Breakpoints::default(),
            Theme::default(),
            LogSink::default(),
        );
        state
            .presenter_mut()
            .complete_fetch(1, Err(MoviesError::Other("offline".to_string())));

        handle_key(&mut state, press(KeyCode::Char('r')));
        assert_eq!(state.render_plan(), RenderPlan::Loading);
        assert_eq!(
            rx.try_iter().collect::<Vec<_>>(),
            vec![
                NetworkEvent::FetchMovies { generation: 1 },
                NetworkEvent::FetchMovies { generation: 2 },
            ]
        );
    }

    #[test]
    fn retry_is_offered_when_fetch_cannot_be_sent() {
        let (tx, rx) = std::sync::mpsc::channel();
        drop(rx);
        let mut state = State::new(
            tx,
            Breakpoints::default(),
            Theme::default(),
            LogSink::default(),
        );
        assert_eq!(state.render_plan(), RenderPlan::Error);

        handle_key(&mut state, press(KeyCode::Char('r')));
        assert_eq!(state.presenter().generation(), 2);
        assert_eq!(state.render_plan(), RenderPlan::Error);
    }

    #[test]
    fn retry_ignored_while_loading() {
        let mut state = State::default();
        handle_key(&mut state, press(KeyCode::Char('r')));
        assert_eq!(state.presenter().generation(), 1);
    }

    #[test]
    fn refresh_from_list() {
        let (mut state, _) = loaded(100, 2);
        handle_key(&mut state, press(KeyCode::Char('r')));
        assert!(state.presenter().data_state().is_loading());
    }

    #[test]
    fn toggle_log_key() {
        let mut state = State::default();
        handle_key(&mut state, press(KeyCode::Char('g')));
        assert!(state.is_log_visible());
    }
}

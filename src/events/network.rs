use crate::movies::MovieSource;
use crate::presenter::Generation;
use crate::state::State;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    FetchMovies { generation: Generation },
}

/// Specify struct for managing state with network events.
///
#[derive(Clone)]
pub struct Handler {
    state: Arc<Mutex<State>>,
    source: Arc<dyn MovieSource>,
}

impl Handler {
    /// Return new instance with reference to state and the movie source.
    ///
    pub fn new(state: &Arc<Mutex<State>>, source: Arc<dyn MovieSource>) -> Self {
        Handler {
            state: Arc::clone(state),
            source,
        }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&self, event: Event) {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::FetchMovies { generation } => self.fetch_movies(generation).await,
        }
    }

    /// Fetch the movie collection and hand the outcome to the presenter,
    /// which drops it if a newer fetch has started meanwhile.
    ///
    async fn fetch_movies(&self, generation: Generation) {
        info!("Fetching movies (attempt #{})...", generation);
        let result = self.source.fetch().await;
        let mut state = self.state.lock().await;
        if !state.presenter_mut().complete_fetch(generation, result) {
            debug!("Fetch #{} was superseded.", generation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movies::{FetchFuture, MovieItem, MoviesError};
    use crate::presenter::DataState;
    use fake::{Fake, Faker};
    use std::collections::VecDeque;
    use tokio::sync::oneshot;

    type Outcome = Result<Vec<MovieItem>, MoviesError>;

    /// Source whose fetches resolve only when the test sends their outcome.
    struct GatedSource {
        gates: std::sync::Mutex<VecDeque<oneshot::Receiver<Outcome>>>,
    }

    impl GatedSource {
        fn new(count: usize) -> (Arc<Self>, Vec<oneshot::Sender<Outcome>>) {
            let (senders, receivers): (Vec<_>, VecDeque<_>) =
                (0..count).map(|_| oneshot::channel()).unzip();
            let source = GatedSource {
                gates: std::sync::Mutex::new(receivers),
            };
            (Arc::new(source), senders)
        }
    }

    impl MovieSource for GatedSource {
        fn fetch(&self) -> FetchFuture {
            let gate = self.gates.lock().unwrap().pop_front();
            Box::pin(async move {
                match gate {
                    Some(gate) => gate
                        .await
                        .unwrap_or_else(|_| Err(MoviesError::Other("gate dropped".to_string()))),
                    None => Err(MoviesError::Other("unexpected fetch".to_string())),
                }
            })
        }
    }

    struct StaticSource(Outcome);

    impl MovieSource for StaticSource {
        fn fetch(&self) -> FetchFuture {
            let outcome = match &self.0 {
                Ok(movies) => Ok(movies.to_owned()),
                Err(e) => Err(MoviesError::Other(e.to_string())),
            };
            Box::pin(async move { outcome })
        }
    }

    fn movies(count: usize) -> Vec<MovieItem> {
        (0..count).map(|_| Faker.fake()).collect()
    }

    #[tokio::test]
    async fn fetch_movies_success() {
        let state = Arc::new(Mutex::new(State::default()));
        let received = movies(3);
        let handler = Handler::new(&state, Arc::new(StaticSource(Ok(received.to_owned()))));

        handler.handle(Event::FetchMovies { generation: 1 }).await;
        assert_eq!(
            *state.lock().await.presenter().data_state(),
            DataState::Loaded(received)
        );
    }

    #[tokio::test]
    async fn fetch_movies_failure() {
        let state = Arc::new(Mutex::new(State::default()));
        let handler = Handler::new(
            &state,
            Arc::new(StaticSource(Err(MoviesError::Other("timeout".to_string())))),
        );

        handler.handle(Event::FetchMovies { generation: 1 }).await;
        assert_eq!(
            *state.lock().await.presenter().data_state(),
            DataState::Failed
        );
    }

    #[tokio::test]
    async fn stale_fetch_finishing_last_is_dropped() {
        let state = Arc::new(Mutex::new(State::default()));
        let (source, mut gates) = GatedSource::new(2);
        let handler = Handler::new(&state, source);

        let first = tokio::spawn({
            let handler = handler.clone();
            async move { handler.handle(Event::FetchMovies { generation: 1 }).await }
        });
        tokio::task::yield_now().await;
        let generation = state.lock().await.presenter_mut().retry();
        let second = tokio::spawn({
            let handler = handler.clone();
            async move { handler.handle(Event::FetchMovies { generation }).await }
        });

        let fresh = movies(2);
        let stale_gate = gates.remove(0);
        let fresh_gate = gates.remove(0);
        fresh_gate.send(Ok(fresh.to_owned())).unwrap();
        second.await.unwrap();
        stale_gate
            .send(Err(MoviesError::Other("late failure".to_string())))
            .unwrap();
        first.await.unwrap();

        assert_eq!(
            *state.lock().await.presenter().data_state(),
            DataState::Loaded(fresh)
        );
    }

    #[tokio::test]
    async fn stale_fetch_finishing_first_is_dropped() {
        let state = Arc::new(Mutex::new(State::default()));
        let (source, mut gates) = GatedSource::new(2);
        let handler = Handler::new(&state, source);

        let first = tokio::spawn({
            let handler = handler.clone();
            async move { handler.handle(Event::FetchMovies { generation: 1 }).await }
        });
        tokio::task::yield_now().await;
        let generation = state.lock().await.presenter_mut().retry();
        let second = tokio::spawn({
            let handler = handler.clone();
            async move { handler.handle(Event::FetchMovies { generation }).await }
        });

        let stale_gate = gates.remove(0);
        let fresh_gate = gates.remove(0);
        stale_gate.send(Ok(movies(4))).unwrap();
        first.await.unwrap();
        assert!(state.lock().await.presenter().data_state().is_loading());

        fresh_gate
            .send(Err(MoviesError::Other("refused".to_string())))
            .unwrap();
        second.await.unwrap();
        assert_eq!(
            *state.lock().await.presenter().data_state(),
            DataState::Failed
        );
    }
}

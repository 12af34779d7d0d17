use crate::config::Config;
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{CustomLogger, LogSink};
use crate::movies::{MovieBuffs, MovieSource};
use crate::presenter::{Change, DataState, NavigationState};
use crate::state::State;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, stdout, Stdout};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    source: Arc<dyn MovieSource>,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config) -> Result<()> {
        let log_sink = LogSink::default();
        let level = config.log_level_filter()?;
        let logger = Box::leak(Box::new(CustomLogger::with_sink(log_sink.clone(), level)));
        log::set_logger(logger).map_err(crate::error::AppError::from)?;
        log::set_max_level(level);

        info!("Starting application...");
        if let Some(path) = config.file_path() {
            debug!("Loaded configuration from {}.", path.display());
        }
        let source = MovieBuffs::new(
            &config.base_url,
            &config.movies_path,
            config.request_timeout(),
        )?;

        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let mut state = State::new(tx, config.breakpoints, config.theme(), log_sink);
        state.presenter_mut().subscribe(Box::new(log_change));

        let app = App {
            state: Arc::new(Mutex::new(state)),
            source: Arc::new(source),
        };
        app.start_network(rx);
        app.start_ui().await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Start a separate thread for asynchronous state mutations. Every event
    /// runs as its own task so a retry never waits behind a slow fetch.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver) {
        debug!("Creating new thread for asynchronous networking...");
        let handler = NetworkEventHandler::new(&self.state, Arc::clone(&self.source));
        std::thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("Failed to build network runtime: {}", e);
                    return;
                }
            };
            runtime.block_on(async {
                while let Ok(network_event) = net_receiver.recv() {
                    let handler = handler.clone();
                    tokio::spawn(async move { handler.handle(network_event).await });
                }
            })
        });
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. The terminal is restored even when the
    /// loop fails.
    ///
    async fn start_ui(&self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run(&mut terminal).await;

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self.state.lock().await;
            if let Ok(size) = terminal.backend().size() {
                state.set_terminal_size(size);
            };
            terminal.draw(|frame| crate::ui::render(frame, &mut state))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                return Ok(());
            }
        }
    }
}

/// Trace every presenter state replacement.
///
fn log_change(change: Change, data: &DataState, navigation: &NavigationState) {
    trace!(
        "{:?} changed: data is {}, page is {:?}.",
        change,
        data.label(),
        navigation.page()
    );
}

use crate::config::Config;
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::grail::Grail;
use crate::logger::StateLogger;
use crate::state::State;
use crate::storage::Storage;
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;
pub type StorageSaveSender = std::sync::mpsc::Sender<()>;
type StorageSaveReceiver = std::sync::mpsc::Receiver<()>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
    storage: Storage,
}

impl App {
    /// Start a new application according to the given configuration and
    /// storage. Returns the result of the application execution.
    ///
    pub async fn start(config: Config, storage: Storage) -> Result<()> {
        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let (save_tx, save_rx) = std::sync::mpsc::channel::<()>();

        let hide_completed = storage.load_hide_completed().unwrap_or_else(|e| {
            eprintln!("Failed to restore hide-completed flag: {}", e);
            false
        });
        let theme = Theme::from_name(&config.theme_name).unwrap_or_default();

        let app = App {
            state: Arc::new(Mutex::new(State::new(
                save_tx.clone(),
                hide_completed,
                theme,
            ))),
            config,
            storage,
        };

        StateLogger::init(Arc::clone(&app.state))
            .map_err(|e| crate::error::AppError::Logger(e.to_string()))?;
        info!("Starting application...");

        app.start_network(rx)?;
        app.start_storage_saver(save_rx);
        app.start_ui(tx).await?;

        // Persist a final snapshot on exit
        {
            let state = app.state.lock().await;
            if let Err(e) = app.storage.save_items(state.get_items()) {
                error!("Failed to persist checklist on exit: {}", e);
            }
            if let Err(e) = app.storage.save_hide_completed(state.hide_completed()) {
                error!("Failed to persist hide-completed flag on exit: {}", e);
            }
        }

        info!("Exiting application...");
        Ok(())
    }

    /// Start a thread to handle persistence requests. Every request rewrites
    /// the full item sequence and the view flag.
    ///
    fn start_storage_saver(&self, receiver: StorageSaveReceiver) {
        let state = Arc::clone(&self.state);
        let storage = self.storage.clone();
        std::thread::spawn(move || {
            while receiver.recv().is_ok() {
                if let Ok(state_guard) = state.try_lock() {
                    if let Err(e) = storage.save_items(state_guard.get_items()) {
                        error!("Failed to persist checklist: {}", e);
                    }
                    if let Err(e) = storage.save_hide_completed(state_guard.hide_completed()) {
                        error!("Failed to persist hide-completed flag: {}", e);
                    }
                }
            }
        });
    }

    /// Start a separate thread for asynchronous state mutations.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver) -> Result<()> {
        debug!("Creating new thread for asynchronous networking...");
        let cloned_state = Arc::clone(&self.state);
        let seed_url = self.config.seed_url.to_owned();
        let storage = self.storage.clone();
        std::thread::spawn(move || {
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .unwrap()
                .block_on(async {
                    let grail = Grail::new(&seed_url);
                    let mut network_event_handler =
                        NetworkEventHandler::new(&cloned_state, &grail, &storage);
                    while let Ok(network_event) = net_receiver.recv() {
                        match network_event_handler.handle(network_event).await {
                            Ok(_) => (),
                            Err(e) => error!("Failed to handle network event: {}", e),
                        }
                    }
                })
        });
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&self, net_sender: NetworkEventSender) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        net_sender.send(NetworkEvent::LoadChecklist)?;

        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self.state.lock().await;
            terminal.draw(|frame| crate::ui::render(frame, &mut state))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                break;
            }
        }

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

        Ok(())
    }
}

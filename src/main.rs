// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Music Preview Search TUI.
//!
//! A terminal application that searches a public music catalog and plays the
//! preview clip of any result.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background processing layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, UI rendering and all
//!   application state.
//! * **Background Workers** run searches over the network and drive the audio
//!   engine, reporting back with events.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod client;
mod components;
mod config;
mod error;
mod events;
mod logging;
mod model;
mod playback;
mod player;
mod render;
mod session;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    style::Print,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    path::PathBuf,
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::info;

use crate::{
    client::SearchClient,
    components::{ResultsView, SearchInput},
    config::AppConfig,
    events::{AppEvent, process_events},
    player::{AudioPlayer, PlayerState},
    session::SearchSession,
    tasks::AppTask,
    theme::Theme,
};

/// A message for the user, shown in the status bar until dismissed.
#[derive(Debug, Clone, PartialEq)]
struct Alert {
    title: String,
    message: String,
}

/// Application state.
struct App {
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub audio_player: AudioPlayer,

    pub session: SearchSession,

    pub search_input: SearchInput,
    pub results_view: ResultsView,

    pub player_state: PlayerState,
    pub player_duration: Option<u64>,
    pub player_time: Option<u64>,
    pub player_position: Option<f64>,

    pub alert: Option<Alert>,
    pub spinner_frame: usize,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: &AppConfig, task_tx: Sender<AppTask>) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let audio_player_event_tx = event_tx.clone();

        let card_width = terminal::size()
            .map(|(width, _)| render::card_width(width))
            .unwrap_or_default();

        Ok(Self {
            theme: Theme::default(),
            event_tx,
            event_rx,
            audio_player: AudioPlayer::new(audio_player_event_tx)?,
            session: SearchSession::new(Box::new(task_tx), card_width, config.allow_empty_search),
            search_input: SearchInput::new(),
            results_view: ResultsView::new(),
            player_state: PlayerState::Stopped,
            player_duration: None,
            player_time: None,
            player_position: None,
            alert: None,
            spinner_frame: 0,
        })
    }
}

/// The entry point of the application.
///
/// Loads the configuration (from the path given as the only argument, or the
/// standard location), sets up the communication channels, initializes the
/// application state, manages the terminal lifecycle, and returns an error if
/// any part of the execution fails.
fn main() -> Result<()> {
    let config = match std::env::args_os().nth(1) {
        Some(path) => config::load_config_from(&PathBuf::from(path)),
        None => config::load_config(),
    };

    if let Err(e) = logging::init_logging(&config.log_dir) {
        eprintln!("Logging disabled: {e:#}");
    }

    info!(version = env!("CARGO_PKG_VERSION"), search_url = %config.search_url, "Starting");

    let client = client::from_config(&config).context("Failed to create search client")?;

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(&config, task_tx).context("Failed to initalise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, client, task_rx);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        tracing::error!(error = ?e, "Application error");
    }
    info!("Exiting");

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        set_terminal_bg(&hex);
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Paints the whole terminal window with `hex`, using OSC 11.
///
/// Terminals without OSC 11 support ignore the sequence.
fn set_terminal_bg(hex: &str) {
    execute!(io::stdout(), Print(format!("\x1b]11;{hex}\x07"))).ok();
}

/// Hands the background colour back to the terminal's own setting, OSC 111.
fn reset_terminal_bg() {
    execute!(io::stdout(), Print("\x1b]111\x07")).ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker that owns the search client and runs [`AppTask`]s.
/// * An input thread to poll for terminal key and resize events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: Box<dyn SearchClient>,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    // Spawn a background worker to process application tasks asynchronously.
    let task_event_tx = app.event_tx.clone();
    tasks::spawn_task_worker(client, task_rx, task_event_tx);

    // Spawn a thread to translate raw terminal events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let sent = match event::read() {
                Ok(event::Event::Key(key)) => tx_keys.send(AppEvent::Key(key)),
                Ok(event::Event::Resize(width, height)) => {
                    tx_keys.send(AppEvent::Resize(width, height))
                }
                Ok(_) => Ok(()),
                Err(e) => tx_keys.send(AppEvent::FatalError(format!("Terminal input failure: {e}"))),
            };
            if sent.is_err() {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}

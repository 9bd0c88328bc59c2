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

//! # Recipe Finder TUI.
//!
//! A terminal application that suggests recipes for the ingredients you have
//! at hand.
//!
//! While an ingredient is typed, suggestions are fetched from the food API
//! once typing pauses. Chosen ingredients are collected as chips, and a
//! recipe search lists the recipes that use them.
//!
//! ## Threads
//!
//! * The **main thread** owns the terminal and every piece of application
//!   state. Nothing else mutates the search.
//! * **Request threads**, one per HTTP call, report their outcome as events.
//! * The **key** and **tick** threads feed keyboard input and the debounce
//!   clock into the same `std::sync::mpsc` channel.
//!
//! The terminal is restored on the way out whether or not the event loop
//! returned an error.

mod commander;
mod components;
mod config;
mod events;
mod model;
mod provider;
mod render;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Duration,
};
use tracing::{info, warn};

use crate::{
    commander::Commander,
    components::{MapView, SearchView},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::search::SearchState,
    provider::{RecipeProvider, SpoonacularClient},
    tasks::{AppTask, spawn_task_worker},
    theme::Theme,
};

/// Interval of the tick event, which bounds how late a debounced suggestion
/// fetch can fire.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MainView {
    Search,
    Map,
}

/// Everything the event loop reads and writes.
pub(crate) struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub main_view: MainView,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub search: SearchState,

    pub search_view: SearchView,
    pub map_view: MapView,

    pub commander: Commander,

    /// The last error worth showing to the user.
    pub status: Option<String>,
}

impl App {
    /// Builds the initial state with the search view in front.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let search = SearchState::from_config(&config);

        let mut search_view = SearchView::new();
        search_view.is_active = true;

        Self {
            config,
            theme: Theme::default(),
            main_view: MainView::Search,
            event_tx,
            event_rx,
            task_tx,
            search,
            search_view,
            map_view: MapView::new(),
            commander: Commander::new(),
            status: None,
        }
    }
}

/// Loads the configuration, starts logging and runs the TUI until the user
/// quits.
fn main() -> Result<()> {
    let config = config::load_config();

    match config::log_file_path() {
        Some(path) => {
            if let Err(e) = util::logging::init(&path) {
                eprintln!("Logging disabled: {e:#}");
            }
        }
        None => eprintln!("Logging disabled: no configuration directory"),
    }

    info!(base_url = %config.api_base_url, "starting");
    if config.api_key().is_none() {
        warn!(
            "No API key configured, set {} or api_key in the configuration file",
            config::API_KEY_VAR
        );
    }

    let provider =
        SpoonacularClient::from_config(&config).context("Failed to create the food API client")?;

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app, Arc::new(provider), task_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Puts the terminal in raw mode on the alternate screen.
///
/// # Errors
///
/// Fails when either terminal mode switch is refused.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Undoes [`setup_terminal`]. Failures are ignored.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Spawns the request worker, the key reader and the ticker, then runs
/// [`process_events`] until the user quits.
///
/// # Errors
///
/// Propagates failures from the event loop, such as a closed task channel or
/// a terminal draw error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    provider: Arc<dyn RecipeProvider>,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    spawn_task_worker(provider, task_rx, app.event_tx.clone());

    // Key presses only; release and repeat events are ignored.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if key.kind == KeyEventKind::Press && tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // Ticks double as the debounce clock and the redraw heartbeat.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    process_events(terminal, app)
}

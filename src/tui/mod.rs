//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (a loader is in flight): draws every ~80ms so the spinner moves.
//! - **Idle**: sleeps up to 500ms, only redraws on events, resize, or a
//!   background response.
//!
//! ## Input Modes
//!
//! The list screen is modal, so typing a query never collides with the
//! single-key commands:
//!
//! - **Browse**: arrows move and page, Space selects, Enter opens details,
//!   `/` focuses the search box, `r` retries a failed load, `q` quits.
//! - **Search**: printable keys edit the query; Enter or Esc return to Browse.
//!
//! The detail screen has no modes: Esc or Backspace go back, `q` quits.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use tokio::task::AbortHandle;

use crate::api::{CountrySource, RestCountriesClient};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::loader::ListLoad;
use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are commands. `/` switches to Search.
    Browse,
    /// Keys edit the search query. Enter/Esc switch back to Browse.
    Search,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_mode: InputMode,
    /// Highlighted row on the current page
    pub cursor: usize,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_mode: InputMode::Browse,
            cursor: 0,
        }
    }

    fn clamp_cursor(&mut self, rows: usize) {
        self.cursor = self.cursor.min(rows.saturating_sub(1));
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Release events are filtered in event.rs; the flags are ignored by
        // terminals that don't support them
        execute!(
            stdout(),
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
    }
}

/// In-flight background requests, one per loader.
#[derive(Default)]
struct ActiveTasks {
    list: Option<AbortHandle>,
    detail: Option<AbortHandle>,
}

impl ActiveTasks {
    fn replace_list(&mut self, handle: AbortHandle) {
        if let Some(old) = self.list.replace(handle) {
            old.abort();
        }
    }

    fn replace_detail(&mut self, handle: AbortHandle) {
        if let Some(old) = self.detail.replace(handle) {
            old.abort();
        }
    }

    fn abort_all(&mut self) {
        for handle in self.list.take().into_iter().chain(self.detail.take()) {
            handle.abort();
        }
    }
}

/// Build the HTTP-backed source from a resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn CountrySource> {
    Arc::new(
        RestCountriesClient::new(Some(config.base_url.clone()), config.timeout)
            .with_fields(config.fields.clone()),
    )
}

pub fn run(config: ResolvedConfig, start: Route) -> std::io::Result<()> {
    let source = build_source(&config);
    let mut app = App::from_config(source, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut tasks = ActiveTasks::default();

    // Mount: the list always loads, even when starting on a detail route
    let mut startup = vec![update(&mut app, Action::LoadCountries)];
    if start != Route::List {
        startup.push(update(&mut app, Action::Navigate(start)));
    }
    for effect in startup {
        apply_effect(effect, &app, &tx, &mut tasks);
    }

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        let animating = match app.route {
            Route::List => app.list.is_loading(),
            Route::Detail(_) => app.detail.is_loading(),
        };
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let effect = handle_event(&mut app, &mut tui, event);
            if apply_effect(effect, &app, &tx, &mut tasks) {
                break 'main;
            }
        }

        // Responses from background fetches
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            tui.clamp_cursor(app.page_rows().len());
            if apply_effect(effect, &app, &tx, &mut tasks) {
                break 'main;
            }
        }
    }

    tasks.abort_all();
    ratatui::restore();
    Ok(())
}

/// Starts whatever I/O an effect asks for. Returns `true` on quit.
fn apply_effect(
    effect: Effect,
    app: &App,
    tx: &mpsc::Sender<Action>,
    tasks: &mut ActiveTasks,
) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::FetchCountries { seq } => {
            tasks.replace_list(spawn_fetch_countries(app.source.clone(), seq, tx.clone()));
            false
        }
        Effect::FetchDetail { seq, name } => {
            tasks.replace_detail(spawn_fetch_detail(
                app.source.clone(),
                seq,
                name,
                tx.clone(),
            ));
            false
        }
    }
}

/// Translates one terminal event into at most one core action.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    // Ctrl+C always quits regardless of screen or mode
    if matches!(event, TuiEvent::ForceQuit) {
        return update(app, Action::Quit);
    }
    if matches!(event, TuiEvent::Resize) {
        return Effect::None;
    }

    let effect = match app.route {
        Route::Detail(_) => match event {
            TuiEvent::Escape | TuiEvent::Backspace => {
                tui.input_mode = InputMode::Browse;
                update(app, Action::Navigate(Route::List))
            }
            TuiEvent::InputChar('q') => update(app, Action::Quit),
            _ => Effect::None,
        },
        Route::List => match tui.input_mode {
            InputMode::Search => handle_search_event(app, tui, &event),
            InputMode::Browse => handle_browse_event(app, tui, event),
        },
    };

    tui.clamp_cursor(app.page_rows().len());
    effect
}

fn handle_search_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    let mut search = SearchBox::new(app.view.query.clone(), true);
    match search.handle_event(event) {
        Some(SearchEvent::Input(c)) => {
            tui.cursor = 0;
            update(app, Action::SearchInput(c))
        }
        Some(SearchEvent::Backspace) => {
            tui.cursor = 0;
            update(app, Action::SearchBackspace)
        }
        Some(SearchEvent::Done) => {
            tui.input_mode = InputMode::Browse;
            Effect::None
        }
        None => Effect::None,
    }
}

fn handle_browse_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        // The search box is only on screen once the list has loaded
        TuiEvent::InputChar('/') if matches!(app.list, ListLoad::Loaded(_)) => {
            tui.input_mode = InputMode::Search;
            Effect::None
        }
        TuiEvent::InputChar('q') | TuiEvent::Escape => update(app, Action::Quit),
        TuiEvent::InputChar('r') if matches!(app.list, ListLoad::Failed(_)) => {
            update(app, Action::LoadCountries)
        }
        TuiEvent::CursorUp => {
            tui.cursor = tui.cursor.saturating_sub(1);
            Effect::None
        }
        TuiEvent::CursorDown => {
            tui.cursor += 1;
            Effect::None
        }
        TuiEvent::PagePrevious => {
            tui.cursor = 0;
            update(app, Action::PreviousPage)
        }
        TuiEvent::PageNext => {
            tui.cursor = 0;
            update(app, Action::NextPage)
        }
        TuiEvent::InputChar(' ') => {
            let code = app.page_rows().get(tui.cursor).map(|c| c.code.clone());
            match code {
                Some(code) => update(app, Action::ToggleSelection(code)),
                None => Effect::None,
            }
        }
        TuiEvent::Submit => {
            let route = app
                .page_rows()
                .get(tui.cursor)
                .map(|c| Route::detail_for(&c.common_name));
            match route {
                Some(route) => update(app, Action::Navigate(route)),
                None => Effect::None,
            }
        }
        _ => Effect::None,
    }
}

fn spawn_fetch_countries(
    source: Arc<dyn CountrySource>,
    seq: u64,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!("Fetching country list from {} (request #{seq})", source.name());
    let handle = tokio::spawn(async move {
        let result = source.fetch_all().await;
        match &result {
            Ok(countries) => info!("Request #{seq} returned {} countries", countries.len()),
            Err(e) => warn!("Request #{seq} failed: {e}"),
        }
        if tx.send(Action::CountriesLoaded { seq, result }).is_err() {
            warn!("Failed to send CountriesLoaded #{seq}: receiver dropped");
        }
    });
    handle.abort_handle()
}

fn spawn_fetch_detail(
    source: Arc<dyn CountrySource>,
    seq: u64,
    name: String,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!("Looking up {name:?} on {} (request #{seq})", source.name());
    let handle = tokio::spawn(async move {
        let result = source.fetch_by_name(&name).await;
        match &result {
            Ok(matches) => debug!("Lookup #{seq} for {name:?}: {} matches", matches.len()),
            Err(e) => warn!("Lookup #{seq} for {name:?} failed: {e}"),
        }
        if tx.send(Action::DetailLoaded { seq, result }).is_err() {
            warn!("Failed to send DetailLoaded #{seq}: receiver dropped");
        }
    });
    handle.abort_handle()
}

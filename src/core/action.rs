//! # Actions
//!
//! Everything that can happen in terra becomes an `Action`.
//! User presses `r` on the error screen? That's `Action::LoadCountries`.
//! The API responds? That's `Action::CountriesLoaded { seq, result }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the caller must
//! start. No side effects here. I/O happens in the TUI adapter.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::api::{Country, FetchError};
use crate::core::cache::QueryKey;
use crate::core::loader::{DetailLoad, ListLoad};
use crate::core::route::Route;
use crate::core::selection::Toggle;
use crate::core::state::App;

#[derive(Debug)]
pub enum Action {
    /// Initial mount or explicit retry.
    LoadCountries,
    CountriesLoaded {
        seq: u64,
        result: Result<Vec<Country>, FetchError>,
    },
    SearchInput(char),
    SearchBackspace,
    PreviousPage,
    NextPage,
    /// Toggle a country in or out of the comparison, by code.
    ToggleSelection(String),
    Navigate(Route),
    DetailLoaded {
        seq: u64,
        result: Result<Vec<Country>, FetchError>,
    },
    Quit,
}

/// I/O the caller must perform after `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    FetchCountries { seq: u64 },
    FetchDetail { seq: u64, name: String },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::LoadCountries => {
            let seq = app.list_seq.begin();
            info!("Loading countries (request #{seq})");
            app.list = ListLoad::Loading;
            app.status_message = "Loading countries...".to_string();
            Effect::FetchCountries { seq }
        }
        Action::CountriesLoaded { seq, result } => {
            if !app.list_seq.is_current(seq) {
                debug!(
                    "Dropping stale country list response #{seq} (latest #{})",
                    app.list_seq.latest()
                );
                return Effect::None;
            }
            if let Ok(countries) = &result {
                app.cache.write(QueryKey::Countries, countries.clone());
            }
            app.list = ListLoad::from_result(result);
            app.status_message = match &app.list {
                ListLoad::Loaded(countries) => format!("{} countries", countries.len()),
                _ => String::new(),
            };
            Effect::None
        }
        Action::SearchInput(c) => {
            app.view.push_char(c);
            Effect::None
        }
        Action::SearchBackspace => {
            app.view.pop_char();
            Effect::None
        }
        Action::PreviousPage => {
            app.view.previous();
            Effect::None
        }
        Action::NextPage => {
            let len = app.filtered().len();
            app.view.next(len);
            Effect::None
        }
        Action::ToggleSelection(code) => {
            let Some(country) = app.find_by_code(&code).cloned() else {
                debug!("Toggle for unknown code {code}");
                return Effect::None;
            };
            match app.selection.toggle(&country) {
                Toggle::Added => debug!("Selected {}", country.code),
                Toggle::Removed => debug!("Deselected {}", country.code),
                Toggle::Ignored => debug!("Selection full, ignored {}", country.code),
            }
            Effect::None
        }
        Action::Navigate(route) => {
            info!("Navigate to {route}");
            let effect = match route.country_name() {
                Some(name) => {
                    let seq = app.detail_seq.begin();
                    app.detail = DetailLoad::Loading;
                    Effect::FetchDetail { seq, name }
                }
                None => Effect::None,
            };
            app.route = route;
            effect
        }
        Action::DetailLoaded { seq, result } => {
            if !app.detail_seq.is_current(seq) {
                debug!("Dropping stale detail response #{seq}");
                return Effect::None;
            }
            app.detail = DetailLoad::from_result(result);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

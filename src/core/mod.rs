//! # Core Application Logic
//!
//! This module contains terra's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • ListView, Selection  │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`list_view`]: Filter and pagination derivations
//! - [`selection`]: Two-slot comparison selection
//! - [`loader`]: Loading/loaded/failed states and request sequencing
//! - [`cache`]: Best-effort shared query cache
//! - [`route`]: List and detail routes
//! - [`format`]: Display strings for optional fields
//! - [`config`]: Settings and their override hierarchy

pub mod action;
pub mod cache;
pub mod config;
pub mod format;
pub mod list_view;
pub mod loader;
pub mod route;
pub mod selection;
pub mod state;

//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: route, status and cache stamp
//! - `CountryTable`: one page of countries plus the pager
//! - `Comparison`: two selected countries side by side
//! - `DetailView`: a single country
//!
//! ### Event-Driven Components
//!
//! - `SearchBox`: turns key presses into `SearchEvent`s while focused
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, not by reaching into `App`.
//! The query, page and selection all live in core; a component only borrows
//! what it draws.
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! TitleBar::new(route, status, cached_at).render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! title_bar.render(frame, area, &app);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (top status bar)
//! ├── search_box.rs     (query input)
//! ├── country_table.rs  (paginated table + pager)
//! ├── comparison.rs     (side-by-side panel)
//! └── detail_view.rs    (single country screen)
//! ```

mod comparison;
mod country_table;
mod detail_view;
mod search_box;
mod title_bar;

pub use comparison::{COMPARISON_HEIGHT, Comparison};
pub use country_table::CountryTable;
pub use detail_view::DetailView;
pub use search_box::{SearchBox, SearchEvent};
pub use title_bar::TitleBar;

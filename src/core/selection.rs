//! # Comparison Selection
//!
//! A small ordered set of countries, unique by code, that never grows past
//! [`COMPARE_CAPACITY`]. The capacity check lives in one place
//! ([`Selection::toggle`]) so the "third pick is ignored" rule has a single
//! guard.

use crate::api::Country;

/// Number of countries shown side by side.
pub const COMPARE_CAPACITY: usize = 2;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    items: Vec<Country>,
}

/// What a call to [`Selection::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
    /// Selection was full and the code was not in it.
    Ignored,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes the country if selected, otherwise appends it when there is
    /// room. A full selection ignores new codes.
    pub fn toggle(&mut self, country: &Country) -> Toggle {
        if let Some(pos) = self.position(&country.code) {
            self.items.remove(pos);
            return Toggle::Removed;
        }
        if self.is_full() {
            return Toggle::Ignored;
        }
        self.items.push(country.clone());
        Toggle::Added
    }

    pub fn contains(&self, code: &str) -> bool {
        self.position(code).is_some()
    }

    /// True if toggling `code` would change the selection.
    pub fn can_toggle(&self, code: &str) -> bool {
        self.contains(code) || !self.is_full()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= COMPARE_CAPACITY
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Country] {
        &self.items
    }

    /// The comparison pair, in selection order. Only present at capacity.
    pub fn comparison(&self) -> Option<(&Country, &Country)> {
        match self.items.as_slice() {
            [first, second] => Some((first, second)),
            _ => None,
        }
    }

    fn position(&self, code: &str) -> Option<usize> {
        self.items.iter().position(|c| c.code == code)
    }
}

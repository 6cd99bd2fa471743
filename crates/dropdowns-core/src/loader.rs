// crates/dropdowns-core/src/loader.rs

//! # Dataset Loader
//!
//! Owns the lazily materialized entity lists. Each provider holds one
//! [`Dataset`]; the first caller pays for the conversion, everyone after
//! that gets the same slice.

use crate::text::fold_case;
use crate::traits::SelectOption;
use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::fmt;

/// A once-initialized, immutable entity list.
///
/// `Dataset::new` is `const`, so providers (and the [`Dropdowns`](crate::Dropdowns)
/// registry holding them) can live in a `static` without any runtime setup.
pub struct Dataset<T> {
    name: &'static str,
    init: fn() -> Vec<T>,
    cell: OnceCell<Vec<T>>,
}

impl<T: SelectOption> Dataset<T> {
    pub const fn new(name: &'static str, init: fn() -> Vec<T>) -> Self {
        Self {
            name,
            init,
            cell: OnceCell::new(),
        }
    }

    /// The materialized list. Loads on first call; thread-safe.
    pub fn get(&self) -> &[T] {
        self.cell.get_or_init(|| load(self.name, self.init))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether [`Dataset::get`] has run at least once.
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> fmt::Debug for Dataset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dataset")
            .field("name", &self.name)
            .field("loaded", &self.cell.get().map(Vec::len))
            .finish()
    }
}

/// Internal helper that actually builds the list and reports on it.
fn load<T: SelectOption>(name: &'static str, init: fn() -> Vec<T>) -> Vec<T> {
    let items = init();
    tracing::debug!(dataset = name, items = items.len(), "materialized dataset");

    // Lookups return the first match only, so a repeated value would hide entries.
    for value in duplicate_values(&items) {
        tracing::warn!(dataset = name, value, "duplicate option value");
    }
    items
}

/// Values that occur more than once (case-insensitive), in table order.
///
/// Every compiled-in table is expected to return an empty list here.
pub fn duplicate_values<T: SelectOption>(items: &[T]) -> Vec<&str> {
    let mut seen = HashSet::with_capacity(items.len());
    let mut dups = Vec::new();
    for item in items {
        if !seen.insert(fold_case(item.value())) {
            dups.push(item.value());
        }
    }
    dups
}

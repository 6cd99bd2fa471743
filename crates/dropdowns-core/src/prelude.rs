// crates/dropdowns-core/src/prelude.rs

//! Everything a typical caller needs: `use dropdowns_core::prelude::*;`

pub use crate::api::{OptionItem, OptionQuery};
pub use crate::builder::OrderBy;
pub use crate::error::{DropdownError, Result};
pub use crate::model::Direction;
pub use crate::registry::{dropdowns, DatasetKind, Dropdowns};
pub use crate::traits::{OptionMatch, OptionSource, SelectOption};

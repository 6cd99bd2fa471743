//! dropdowns-rs: umbrella crate for the demos.
//!
//! Re-exports [`dropdowns_core`] so the demos can `use dropdowns_rs::prelude::*`.

pub use dropdowns_core::*;

pub mod prelude {
    pub use dropdowns_core::prelude::*;
}

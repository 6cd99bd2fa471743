//! dropdowns-cli
//! =============
//!
//! Command-line inspector for the `dropdowns-core` reference lists.
//!
//! This crate primarily provides a binary (`dropdowns`). The library target
//! only exists so docs.rs renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! dropdowns datasets
//! dropdowns list us-states --only TX,CA,PR --order text
//! dropdowns list time-zones --exclude America/Toronto --json
//! dropdowns lookup countries deu
//! dropdowns search countries "cote"
//! dropdowns numbers 0 100 --step 10 --descending
//! dropdowns years last 5
//! ```
//!
//! For programmatic access use the [`dropdowns-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

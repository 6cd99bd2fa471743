// crates/dropdowns-cli/src/logging.rs

//! Logging setup: `tracing` events from the library go to stderr.
//!
//! `RUST_LOG` wins when set; otherwise the `-v` / `-q` flags pick the level
//! for our crates and everything else stays at `warn`.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

pub fn init_logging(level: LevelFilter) {
    let filter = build_env_filter(level);
    // A subscriber may already be installed (tests); that is fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn build_env_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.to_string().to_lowercase();
        EnvFilter::new(format!(
            "warn,dropdowns={level},dropdowns_core={level},dropdowns_cli={level}"
        ))
    })
}

//! # rulebook-log
//!
//! Installs the global `tracing` subscriber for rulebook binaries. Library
//! crates only emit events; they never call into this crate.
//!
//! ```rust,no_run
//! rulebook_log::init_with(rulebook_log::Config::development())?;
//! tracing::info!("ready");
//! # Ok::<(), rulebook_log::LogError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod config;
mod core;

pub use builder::{LoggerBuilder, Target};
pub use config::{Config, Format};
pub use crate::core::{LogError, LogResult};

/// Install a subscriber with the default configuration.
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn init() -> LogResult<()> {
    init_with(Config::default())
}

/// Install a subscriber for `config`.
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn init_with(config: Config) -> LogResult<()> {
    LoggerBuilder::from_config(config).build()
}

/// Install a subscriber configured from the environment
/// (see [`Config::from_env`]).
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn auto_init() -> LogResult<()> {
    init_with(Config::from_env())
}

/// Install a trace-level subscriber writing to the test harness. Calling it
/// again is a no-op.
pub fn init_test() {
    let config = Config {
        level: "trace".to_string(),
        ansi: false,
        ..Config::default()
    };
    // Every test after the first finds the subscriber already installed.
    let _ = LoggerBuilder::from_config(config).target(Target::Test).build();
}

//! Logger builder implementation

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format};
use crate::core::{LogError, LogResult};

/// Where formatted events go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Target {
    /// Standard error, leaving stdout to program output.
    #[default]
    Stderr,
    /// The libtest capture writer.
    Test,
}

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
    target: Target,
}

/// Build the Registry + filter + fmt chain for one format layer and install it.
macro_rules! init_subscriber {
    ($filter:expr, $fmt_layer:expr, $target:expr) => {{
        match $target {
            Target::Stderr => Registry::default()
                .with($filter)
                .with($fmt_layer.with_writer(std::io::stderr))
                .try_init(),
            Target::Test => Registry::default()
                .with($filter)
                .with($fmt_layer.with_test_writer())
                .try_init(),
        }
    }};
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            target: Target::Stderr,
        }
    }

    /// Route output to `target`.
    #[must_use]
    pub fn target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Parse the configured level into an `EnvFilter`.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Filter`] if the directives do not parse.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::Filter(format!("{}: {e}", self.config.level)))
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<()> {
        let filter = self.filter()?;
        let layer = fmt::layer().with_ansi(self.config.ansi && self.target == Target::Stderr);

        let installed = match self.config.format {
            Format::Pretty => init_subscriber!(filter, layer.pretty(), self.target),
            Format::Compact => init_subscriber!(filter, layer.compact(), self.target),
            Format::Json => init_subscriber!(filter, layer.json(), self.target),
        };
        installed.map_err(|e| LogError::Init(e.to_string()))?;

        tracing::debug!(level = %self.config.level, format = %self.config.format, "logger initialized");
        Ok(())
    }
}

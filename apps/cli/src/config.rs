//! Layered application configuration.
//!
//! Defaults, then the config file, then `RULEBOOK_*` environment variables
//! (`__` separates nesting, e.g. `RULEBOOK_VALIDATOR__STRICT=true`), then
//! command-line flags.

use anyhow::{Context, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use rulebook_validator::ValidatorConfig;
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, Command};

const DEFAULT_CONFIG_FILE: &str = "rulebook.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log: rulebook_log::Config,
    pub validator: ValidatorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log: rulebook_log::Config::default().with_verbosity(0),
            validator: ValidatorConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        match &cli.config {
            Some(path) if !path.exists() => bail!("config file {} not found", path.display()),
            Some(path) => figment = figment.merge(Toml::file(path)),
            None => figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE)),
        }

        figment = figment.merge(
            Env::prefixed("RULEBOOK_")
                .split("__")
                .ignore(&["log", "log_format", "config"]),
        );

        if let Some(level) = log_level_from_env() {
            figment = figment.merge(Serialized::default("log.level", level));
        }
        if cli.verbose > 0 {
            let level = rulebook_log::Config::default().with_verbosity(cli.verbose).level;
            figment = figment.merge(Serialized::default("log.level", level));
        }
        if matches!(&cli.command, Command::Check(args) if args.strict) {
            figment = figment.merge(Serialized::default("validator.strict", true));
        }

        figment.extract().context("invalid configuration")
    }

    /// Reads a standalone config file, without env or flag layers.
    #[cfg(test)]
    pub fn from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .extract()
            .context("invalid configuration")
    }
}

fn log_level_from_env() -> Option<String> {
    std::env::var("RULEBOOK_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rulebook_log::Format as LogFormat;

    #[test]
    fn defaults_are_quiet_and_permissive() {
        let config = AppConfig::default();
        assert_eq!(config.log.level, "warn");
        assert!(!config.validator.strict);
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rulebook.toml");
        std::fs::write(&path, "[validator]\nstrict = true\n\n[log]\nformat = \"json\"\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert!(config.validator.strict);
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.log.level, "warn");
    }
}

//! CLI configuration

use crate::commands::Cli;
use crate::error::{CliError, CliResult};
use keypad_calc::config::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - rejected keys and resets are logged
    Verbose,
    /// Debug - every accepted key is logged
    Debug,
}

impl Verbosity {
    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Default log filter directive for this level
    #[must_use]
    pub const fn log_level(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "debug",
            Self::Debug => "trace",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Engine tunables
    pub engine: EngineConfig,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from YAML text
    pub fn from_yaml_str(text: &str) -> CliResult<Self> {
        let config: Self = serde_yaml_ng::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CliError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&text)
    }

    /// Build configuration from parsed arguments
    ///
    /// The `--config` file is loaded first; every flag that was given
    /// overrides it.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::new(),
        };

        if cli.quiet {
            config = config.with_verbosity(Verbosity::Quiet);
        } else if cli.verbose > 0 {
            let verbosity = if cli.verbose == 1 {
                Verbosity::Verbose
            } else {
                Verbosity::Debug
            };
            config = config.with_verbosity(verbosity);
        }

        if let Some(color) = cli.color.clone() {
            config = config.with_color(ColorChoice::from(color));
        }

        if let Some(digits) = cli.fraction_digits {
            if digits > EngineConfig::MAX_FRACTION_DIGITS {
                return Err(CliError::invalid_argument(format!(
                    "--fraction-digits must be at most {}, got {digits}",
                    EngineConfig::MAX_FRACTION_DIGITS
                )));
            }
            let engine = config.engine.with_fraction_digits(digits);
            config = config.with_engine(engine);
        }

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.engine.fraction_digits > EngineConfig::MAX_FRACTION_DIGITS {
            return Err(CliError::config(format!(
                "fraction_digits must be at most {}, got {}",
                EngineConfig::MAX_FRACTION_DIGITS,
                self.engine.fraction_digits
            )));
        }
        Ok(())
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set engine configuration
    #[must_use]
    pub const fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }
}

//SPDX-License-Identifier: MIT OR Apache-2.0

//! Logger configuration.
//!
//! Two settings exist: the [`Mode`] (production loggers do nothing) and the [`LineLimit`]
//! (the longest line a logger writes).  Both can be read from the environment:
//!
//! | Variable               | Meaning                                                  |
//! |------------------------|----------------------------------------------------------|
//! | `CHECKWISE_ENV`        | `production` selects [`Mode::Production`], anything else development |
//! | `CHECKWISE_LINE_LIMIT` | maximum line length in characters, at least 4, default 500 |

use crate::error::ConfigError;
use std::fmt::Display;

pub const ENV_MODE: &str = "CHECKWISE_ENV";
pub const ENV_LINE_LIMIT: &str = "CHECKWISE_LINE_LIMIT";

/// Whether debug logging is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Development,
    /// Loggers are disabled and cost nothing.
    Production,
}

impl Mode {
    /// `"production"` is production; any other name is development.
    pub fn from_name(name: &str) -> Self {
        if name == "production" {
            Mode::Production
        } else {
            Mode::Development
        }
    }

    pub fn is_production(self) -> bool {
        self == Mode::Production
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Development => f.write_str("development"),
            Mode::Production => f.write_str("production"),
        }
    }
}

/// The maximum length of a log line, in characters.
///
/// Longer lines are cut, and the last three characters replaced with `...`, so a limit
/// must leave room for at least one character of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineLimit(usize);

impl LineLimit {
    pub const DEFAULT: LineLimit = LineLimit(500);
    pub const MIN: usize = 4;
    const ELLIPSIS: &'static str = "...";

    pub fn new(limit: usize) -> Result<Self, ConfigError> {
        if limit < Self::MIN {
            Err(ConfigError::LineLimitTooSmall(limit))
        } else {
            Ok(LineLimit(limit))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Cuts `line` to the limit.
    ///
    /// ```
    /// use checkwise::LineLimit;
    /// let limit = LineLimit::new(10).unwrap();
    /// assert_eq!(limit.truncate("abcdefghijklmno"), "abcdefg...");
    /// assert_eq!(limit.truncate("short"), "short");
    /// ```
    pub fn truncate(self, line: &str) -> String {
        if line.chars().count() <= self.0 {
            return line.to_string();
        }
        let keep = self.0 - Self::ELLIPSIS.len();
        let mut out: String = line.chars().take(keep).collect();
        out.push_str(Self::ELLIPSIS);
        out
    }
}

impl Default for LineLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for LineLimit {
    type Error = ConfigError;
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::str::FromStr for LineLimit {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<usize>()
            .map_err(|source| ConfigError::InvalidLineLimit {
                value: s.to_string(),
                source,
            })?;
        Self::new(value)
    }
}

impl Display for LineLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Configuration for a [`DebugLogger`](crate::DebugLogger).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Config {
    pub mode: Mode,
    pub line_limit: LineLimit,
}

impl Config {
    pub fn new(mode: Mode, line_limit: LineLimit) -> Self {
        Self { mode, line_limit }
    }

    /// Reads `CHECKWISE_ENV` and `CHECKWISE_LINE_LIMIT`.
    ///
    /// Unset variables take their defaults.  A line limit that isn't a number, or is below
    /// [`LineLimit::MIN`], is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mode = std::env::var(ENV_MODE).ok();
        let line_limit = std::env::var(ENV_LINE_LIMIT).ok();
        Self::from_vars(mode.as_deref(), line_limit.as_deref())
    }

    /// Builds a configuration from the values of the environment variables.
    ///
    /// ```
    /// use checkwise::{Config, Mode};
    /// let config = Config::from_vars(Some("production"), Some("80")).unwrap();
    /// assert_eq!(config.mode, Mode::Production);
    /// assert_eq!(config.line_limit.get(), 80);
    /// assert!(Config::from_vars(None, Some("3")).is_err());
    /// ```
    pub fn from_vars(mode: Option<&str>, line_limit: Option<&str>) -> Result<Self, ConfigError> {
        let mode = mode.map(Mode::from_name).unwrap_or_default();
        let line_limit = match line_limit {
            Some(value) => value.parse()?,
            None => LineLimit::default(),
        };
        Ok(Self { mode, line_limit })
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_line_limit(mut self, line_limit: LineLimit) -> Self {
        self.line_limit = line_limit;
        self
    }
}

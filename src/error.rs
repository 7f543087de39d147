//! Startup configuration errors
//!
//! Every variant is fatal: a game is never constructed from a config that
//! fails validation. Runtime commands never error; illegal transitions are
//! ignored instead.

use std::fmt;

use crate::config::Preset;

#[derive(Debug)]
pub enum ConfigError {
    /// The zone table has no entries.
    EmptyZones,

    /// A zone's bounds are non-finite or not strictly increasing.
    InvalidZone {
        index: usize,
        start: f64,
        end: f64,
    },

    /// The first zone does not start at 0 or the last does not end at π.
    Coverage {
        /// Which end of the dial is uncovered.
        edge: &'static str,
        /// The offending boundary value.
        value: f64,
    },

    /// Neighbouring zones leave a gap or overlap.
    NotContiguous {
        /// Index of the later zone of the pair.
        index: usize,
        previous_end: f64,
        start: f64,
    },

    /// `max_tries` must be at least 1.
    MaxTries(u32),

    /// Speed must be finite and positive.
    Speed(f64),

    /// No preset with this name exists.
    UnknownPreset(String),

    /// The config text could not be parsed.
    Parse(serde_json::Error),

    /// The config file could not be read.
    Io(std::io::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyZones => write!(f, "zone table is empty"),
            ConfigError::InvalidZone { index, start, end } => {
                write!(f, "zone {index} has invalid bounds [{start}, {end}]")
            }
            ConfigError::Coverage { edge, value } => {
                write!(f, "zones do not cover the {edge} of the dial (boundary at {value})")
            }
            ConfigError::NotContiguous {
                index,
                previous_end,
                start,
            } => write!(
                f,
                "zone {index} starts at {start} but the previous zone ends at {previous_end}"
            ),
            ConfigError::MaxTries(n) => write!(f, "max_tries must be at least 1, got {n}"),
            ConfigError::Speed(s) => write!(f, "speed must be finite and positive, got {s}"),
            ConfigError::UnknownPreset(name) => {
                let known: Vec<&str> = Preset::ALL.iter().map(|p| p.as_str()).collect();
                write!(f, "unknown preset '{name}' (expected one of {})", known.join(", "))
            }
            ConfigError::Parse(e) => write!(f, "invalid config: {e}"),
            ConfigError::Io(e) => write!(f, "cannot read config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

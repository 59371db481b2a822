//! Error types for the fallible edges of the engine.
//!
//! Ticking and command dispatch never fail. Errors only come from
//! constructing out-of-range identifiers and from loading settings.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("frame {0} does not exist (expected 1-4)")]
    InvalidFrame(u8),

    #[error("body index {0} is out of range (expected 0-7)")]
    InvalidBody(usize),

    #[error("setting '{name}' = {value} is invalid, expected {expected}")]
    InvalidSetting {
        name: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("could not parse config file {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("could not read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type SimResult<T> = Result<T, SimError>;

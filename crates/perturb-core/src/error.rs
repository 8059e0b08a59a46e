use thiserror::Error;

/// Top-level error type for the perturb workspace.
#[derive(Debug, Error)]
pub enum PerturbError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Input validation failures.
///
/// All degradation functions validate their inputs eagerly at entry and
/// return one of these variants before doing any work; no partial results
/// are ever produced. Retrying without changing the input yields the same
/// error.
///
/// `Clone + PartialEq` so callers can match and tests can compare.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("input image is empty ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("input text is empty")]
    EmptyText,

    #[error("alphabet is empty")]
    EmptyAlphabet,

    #[error("unknown language {0:?} (supported: english, hindi, igbo)")]
    UnknownLanguage(String),

    #[error("unknown noise level {0:?} (supported: low, medium, high)")]
    UnknownLevel(String),

    #[error("unknown noise operation {0:?} (supported: substitute, delete, insert, swap)")]
    UnknownOperation(String),
}

/// Severity profile loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{table} must be strictly increasing across low < medium < high (got {low}, {medium}, {high})")]
    NotMonotonic {
        table: &'static str,
        low: f32,
        medium: f32,
        high: f32,
    },

    #[error("{table} value {value} for level {level} is outside ({min}, {max}]")]
    OutOfRange {
        table: &'static str,
        level: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}

//! Library error types.

use thiserror::Error;

/// Dataset defect found while resolving ISO codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    /// A record's own alpha-2 code disagrees with the alpha-2 derived from
    /// its best-guess alpha-3 code.
    #[error(
        "subunit '{subunit}' states alpha-2 '{stated}' but its alpha-3 '{alpha3}' maps to '{derived}'"
    )]
    Alpha2Mismatch {
        subunit: String,
        stated: String,
        alpha3: String,
        derived: String,
    },

    /// The reference lists an alpha-3 code without an alpha-2 counterpart
    #[error("ISO reference has no alpha-2 code for alpha-3 '{0}'")]
    MissingAlpha2(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("dataset integrity violation: {0}")]
    Integrity(#[from] IntegrityError),

    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid dataset row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

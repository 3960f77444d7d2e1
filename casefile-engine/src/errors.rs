//! Error types for the investigation engine

use thiserror::Error;

/// Main error type for engine operations
///
/// The engine itself is total over well-formed content; errors can only
/// arise at the content boundary (parsing authored JSON, validating the
/// hypothesis tier). An unknown requirement `type` tag surfaces here as a
/// `Serialization` error rather than defaulting the requirement to true
/// or false, so authoring bugs fail loudly instead of leaving content
/// permanently locked or unlocked.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Hypothesis tier outside the authored range
    #[error("Invalid hypothesis tier: {value} (must be 1 or 2)")]
    InvalidTier { value: u8 },
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

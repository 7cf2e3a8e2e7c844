use thiserror::Error;

/// Errors raised when rebuilding a generator from external data
///
/// Seeding and drawing values never fail; only restore and config paths do.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RngError {
    #[error("All-zero generator state is degenerate")]
    DegenerateState,

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Checkpoint digest mismatch: expected {expected}, got {actual}")]
    DigestMismatch { expected: String, actual: String },

    #[error("Unsupported checkpoint version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

impl From<serde_json::Error> for RngError {
    fn from(err: serde_json::Error) -> Self {
        RngError::Serialization(err.to_string())
    }
}

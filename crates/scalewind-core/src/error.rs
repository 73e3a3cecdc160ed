//! Error types shared by all scaler backends.

use thiserror::Error;

/// Result type alias for scaler operations.
pub type ScalerResult<T> = Result<T, ScalerError>;

/// Errors produced by scaler construction and metric fetches.
///
/// `MissingField` and `InvalidNumericField` are construction-time and fatal:
/// no scaler is produced. `RemoteQuery` and `Cancelled` are per-call; a
/// failed fetch does not poison later calls on the same scaler.
#[derive(Debug, Error)]
pub enum ScalerError {
    /// A required configuration key was absent or had an empty value.
    #[error("missing required metadata field: {0}")]
    MissingField(&'static str),

    /// A numeric configuration value failed to parse.
    #[error("invalid numeric value for {field}: {raw:?}")]
    InvalidNumericField {
        field: &'static str,
        raw: String,
    },

    /// The remote metric query collaborator returned an error. The
    /// underlying error is preserved so callers can tell transient network
    /// failures from permanent configuration problems.
    #[error("remote metric query failed: {0}")]
    RemoteQuery(#[from] anyhow::Error),

    /// The caller's cancellation token fired while a fetch was in flight.
    #[error("metric fetch cancelled")]
    Cancelled,
}

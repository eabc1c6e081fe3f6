//! Error type shared by every fallible constructor in the crate.
//!
//! All failures are argument-contract violations surfaced synchronously at
//! construction time (or at the crossover length check). None of them is
//! transient, so nothing in the crate retries.

/// Errors raised when a caller violates an argument contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GaError {
    /// A required value was not supplied.
    #[error("MissingArgument: argument `{name}` must be provided")]
    MissingArgument { name: &'static str },

    /// A value was supplied but violates its contract.
    #[error("InvalidArgument: invalid value for argument `{name}`: {detail}")]
    InvalidArgument { name: &'static str, detail: String },
}

impl GaError {
    pub(crate) fn missing(name: &'static str) -> Self {
        Self::MissingArgument { name }
    }

    pub(crate) fn invalid(name: &'static str, detail: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            detail: detail.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GaError>;

/// Returns `InvalidArgument` for `name` unless `condition` holds.
///
/// `detail` is only evaluated on failure.
pub(crate) fn ensure<F, S>(condition: bool, name: &'static str, detail: F) -> Result<()>
where
    F: FnOnce() -> S,
    S: Into<String>,
{
    if condition {
        Ok(())
    } else {
        Err(GaError::invalid(name, detail()))
    }
}

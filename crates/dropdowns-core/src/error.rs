// crates/dropdowns-core/src/error.rs
use thiserror::Error;

/// Errors produced by the few operations that validate their input.
///
/// Lookups never fail: a miss is `None`, an unknown category is an empty
/// list. Only the range generators and the dataset-by-name helpers report
/// errors.
#[derive(Debug, Error)]
pub enum DropdownError {
    /// A step or count argument was zero or negative.
    #[error("{param} must be greater than zero (got {value})")]
    NonPositive { param: &'static str, value: i64 },

    /// A generated span would leave the representable range.
    #[error("{param} is out of range (got {value})")]
    OutOfRange { param: &'static str, value: i64 },

    /// A dataset name did not match any [`DatasetKind`](crate::DatasetKind).
    #[error("unknown dataset: {0}")]
    UnknownDataset(String),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DropdownError {
    /// Name of the offending parameter, when the error is an argument error.
    pub fn param(&self) -> Option<&'static str> {
        match self {
            Self::NonPositive { param, .. } | Self::OutOfRange { param, .. } => Some(*param),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DropdownError>;

/// Rejects zero and negative values for `param`.
pub(crate) fn ensure_positive(param: &'static str, value: i32) -> Result<()> {
    if value <= 0 {
        return Err(DropdownError::NonPositive {
            param,
            value: i64::from(value),
        });
    }
    Ok(())
}

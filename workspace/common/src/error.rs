use thiserror::Error;

/// Errors raised while interpreting values destined for the Frappe app
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommonError {
    /// A forecast type outside the enumerated set
    #[error("Unknown forecast type: '{0}'")]
    UnknownForecastType(String),

    /// A dataset type outside the enumerated set
    #[error("Unknown dataset type: '{0}'")]
    UnknownDatasetType(String),

    /// A slot index outside 0..=4
    #[error("Dataset slot {0} does not exist (expected 0..=4)")]
    UnknownSlot(usize),
}

/// Type alias for Result with CommonError
pub type Result<T> = std::result::Result<T, CommonError>;

// crates/coalzero-core/src/error.rs

use thiserror::Error;

/// A numeric input outside its allowed domain.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid input for {field} ({value}): {reason}")]
pub struct InvalidInput {
    pub field: &'static str,
    pub value: f64,
    pub reason: &'static str,
}

impl InvalidInput {
    pub fn new(field: &'static str, value: f64, reason: &'static str) -> Self {
        Self {
            field,
            value,
            reason,
        }
    }
}

#[derive(Error, Debug)]
pub enum CoalZeroError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, CoalZeroError>;

/// Rejects negative and non-finite quantities.
pub(crate) fn non_negative(
    field: &'static str,
    value: f64,
) -> std::result::Result<f64, InvalidInput> {
    if !value.is_finite() {
        return Err(InvalidInput::new(field, value, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(InvalidInput::new(field, value, "must not be negative"));
    }
    Ok(value)
}

pub(crate) fn percentage(
    field: &'static str,
    value: f64,
) -> std::result::Result<f64, InvalidInput> {
    let value = non_negative(field, value)?;
    if value > 100.0 {
        return Err(InvalidInput::new(field, value, "must be between 0 and 100"));
    }
    Ok(value)
}

/// Rejects a derived value that overflowed, naming the input that drove it.
pub(crate) fn in_range(
    field: &'static str,
    input: f64,
    derived: f64,
) -> std::result::Result<f64, InvalidInput> {
    if !derived.is_finite() {
        return Err(InvalidInput::new(field, input, "result exceeds representable range"));
    }
    Ok(derived)
}

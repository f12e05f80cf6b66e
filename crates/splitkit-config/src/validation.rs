//! Validation trait and helpers for configuration types

use crate::error::{ConfigError, Result};

/// Trait for validating configuration values
///
/// Implement this for any config type whose invariants go beyond what the
/// type system checks. Errors name the offending field.
pub trait Validate {
    /// Returns `Ok(())` if validation passes, or a `ConfigError` describing
    /// what failed.
    fn validate(&self) -> Result<()>;
}

/// Validate that an integer is strictly above `min`
pub fn validate_positive(field: impl Into<String>, value: usize, min: usize) -> Result<()> {
    if value <= min {
        return Err(ConfigError::InvalidInteger {
            field: field.into(),
            value,
            min,
        });
    }
    Ok(())
}

/// Validate that `value` is strictly below `bound`
pub fn validate_below(
    field: impl Into<String>,
    value: usize,
    bound_field: &str,
    bound: usize,
) -> Result<()> {
    if value >= bound {
        return Err(ConfigError::ValidationError {
            field: field.into(),
            message: format!("{} must be < {} ({})", value, bound_field, bound),
        });
    }
    Ok(())
}

//! Field-keyed input validation
//!
//! Every engine validates its complete input record before computing
//! anything; a failed check short-circuits the whole calculation. Errors
//! carry the offending field name so callers can surface them next to the
//! right input. Out-of-range *results* are never errors — engines clamp
//! them (e.g. the final amortization balance is floored at zero).

use serde::Serialize;
use thiserror::Error;

/// A validation failure for a single input field
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum ValidationError {
    /// Required field was not supplied
    #[error("{field} is required")]
    Missing { field: &'static str },

    /// Value is NaN or infinite
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    /// Value is outside the configured [min, max] band
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Fields are individually in range but mutually inconsistent
    #[error("{field}: {reason}")]
    Inconsistent { field: &'static str, reason: String },
}

impl ValidationError {
    /// The input field this error is keyed by
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Missing { field }
            | ValidationError::NotFinite { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::Inconsistent { field, .. } => *field,
        }
    }
}

/// Allowed [min, max] band for one numeric input field
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(field: &'static str, min: f64, max: f64) -> Self {
        Self { field, min, max }
    }

    /// Validate a required value against this band
    pub fn check(&self, value: f64) -> Result<f64, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field: self.field });
        }
        if value < self.min || value > self.max {
            return Err(ValidationError::OutOfRange {
                field: self.field,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value)
    }

    /// Validate an optional value, substituting `default` when absent
    pub fn check_or(&self, value: Option<f64>, default: f64) -> Result<f64, ValidationError> {
        match value {
            Some(v) => self.check(v),
            None => Ok(default),
        }
    }

    /// Validate an optional value that must be present
    pub fn check_required(&self, value: Option<f64>) -> Result<f64, ValidationError> {
        match value {
            Some(v) => self.check(v),
            None => Err(ValidationError::Missing { field: self.field }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: Bounds = Bounds::new("annual_rate_pct", 1.0, 20.0);

    #[test]
    fn test_in_range_passes_through() {
        assert_eq!(RATE.check(8.5).unwrap(), 8.5);
        assert_eq!(RATE.check(1.0).unwrap(), 1.0);
        assert_eq!(RATE.check(20.0).unwrap(), 20.0);
    }

    #[test]
    fn test_out_of_range_is_keyed_by_field() {
        let err = RATE.check(0.5).unwrap_err();
        assert_eq!(err.field(), "annual_rate_pct");
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            RATE.check(f64::NAN),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(matches!(
            RATE.check(f64::INFINITY),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_optional_defaults() {
        assert_eq!(RATE.check_or(None, 8.25).unwrap(), 8.25);
        assert_eq!(RATE.check_or(Some(12.0), 8.25).unwrap(), 12.0);
        assert!(matches!(
            RATE.check_required(None),
            Err(ValidationError::Missing { .. })
        ));
    }

    #[test]
    fn test_display_names_the_field() {
        let err = RATE.check(25.0).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("annual_rate_pct"));
        assert!(msg.contains("25"));
    }
}

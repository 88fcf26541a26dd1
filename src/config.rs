//! Numeric configuration carried by every [`Vector`](crate::Vector).
//!
//! Precision is a property of each vector rather than process-wide state, so vectors built
//! with different settings can be used side by side from any thread.

use std::num::NonZeroU64;

use bigdecimal::{BigDecimal, Context};
use thiserror::Error;

/// Significant digits kept after each arithmetic step unless configured otherwise.
pub const DEFAULT_PRECISION: u64 = 30;

/// Absolute tolerance used by `is_zero` and `is_orthogonal_to`.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Precision and tolerance settings for vector arithmetic.
///
/// # Examples
/// ```
/// use decimal_vector::VectorConfig;
/// let cfg = VectorConfig::new(50, 1e-20).unwrap();
/// assert_eq!(cfg.precision, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorConfig {
    /// Number of significant decimal digits results are rounded to.
    pub precision: u64,
    /// Default tolerance for the approximate predicates.
    pub tolerance: f64,
}

impl VectorConfig {
    pub fn new(precision: u64, tolerance: f64) -> Result<Self, ConfigError> {
        if precision == 0 {
            return Err(ConfigError::ZeroPrecision);
        }
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        Ok(Self {
            precision,
            tolerance,
        })
    }

    pub fn with_precision(self, precision: u64) -> Result<Self, ConfigError> {
        Self::new(precision, self.tolerance)
    }

    pub fn with_tolerance(self, tolerance: f64) -> Result<Self, ConfigError> {
        Self::new(self.precision, tolerance)
    }

    /// Arithmetic context for operations that cannot be exact, such as square roots.
    pub(crate) fn context(&self) -> Context {
        let precision = NonZeroU64::new(self.precision).unwrap_or(NonZeroU64::MIN);
        Context::default().with_precision(precision)
    }

    /// Rounds `value` to the configured number of significant digits.
    pub(crate) fn round(&self, value: BigDecimal) -> BigDecimal {
        // `with_prec` also pads shorter values with trailing zeros
        if value.digits() > self.precision {
            value.with_prec(self.precision)
        } else {
            value
        }
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("precision must be at least one significant digit")]
    ZeroPrecision,
    #[error("tolerance must be positive and finite (got {0})")]
    InvalidTolerance(f64),
}

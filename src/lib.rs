//! Fixed-dimension vectors over arbitrary-precision decimals.
//!
//! Coordinates are stored as [`BigDecimal`] so chained arithmetic does not accumulate binary
//! floating-point error. Results are rounded to the number of significant digits carried in
//! the vector's [`VectorConfig`].
//!
//! ```
//! use decimal_vector::Vector;
//!
//! let a = Vector::new([8.218, -9.341])?;
//! let b = Vector::new([-1.129, 2.111])?;
//! assert_eq!(a.plus(&b), Vector::new(["7.089", "-7.230"])?);
//! # Ok::<(), decimal_vector::VectorError>(())
//! ```

pub mod config;
pub mod decimal;
pub mod error;
pub mod vector;

pub use bigdecimal::BigDecimal;
pub use config::{ConfigError, VectorConfig};
pub use decimal::ToDecimal;
pub use error::{DomainError, VectorError, ZeroVector};
pub use vector::{cross_product, dot_product, AngleUnit, Vector};

pub type Result<T, E = VectorError> = std::result::Result<T, E>;

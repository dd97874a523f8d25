//! Extended-precision arithmetic on an unevaluated pair of doubles.
//!
//! A [`DDouble`] carries ~106 bits of mantissa (about 31 decimal
//! digits) as `hi + lo`, built on error-free transformations: each
//! native operation is paired with its exact rounding error. On top of
//! the arithmetic operators sit `exp`/`ln`/`pow` and decimal
//! conversion in both directions with controlled rounding.
//!
//! ```
//! use ddouble::DDouble;
//!
//! let a = DDouble::from(1.0) + 1e-20; // survives below f64 resolution
//! assert_eq!(a.hi, 1.0);
//! assert_eq!(a.lo, 1e-20);
//! assert!(a > 1.0);
//! ```

pub mod dd;

pub use dd::{DDouble, Error, FormatOptions, ParseDDoubleError};

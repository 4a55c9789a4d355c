//! Forward-mode automatic differentiation with generalized dual numbers.
//!
//! A [`DualNumber<T, N>`] carries a scalar value together with its partial
//! derivatives with respect to `N` independent variables. Arithmetic and
//! the elementary functions propagate exact derivatives through the chain
//! rule, so ordinary numeric code evaluated over dual numbers yields the
//! gradient for free, with neither symbolic differentiation nor
//! finite-difference truncation error.
//!
//! ```
//! use dualnum::DualNumber;
//!
//! // f(x, y) = x * y + sin(x) at (2, 3)
//! let x = DualNumber::<f64, 2>::variable(2.0, 0).unwrap();
//! let y = DualNumber::<f64, 2>::variable(3.0, 1).unwrap();
//! let f = x * y + x.sin();
//!
//! assert!((f.partial(0).unwrap() - (3.0 + 2.0_f64.cos())).abs() < 1e-12); // ∂f/∂x
//! assert!((f.partial(1).unwrap() - 2.0).abs() < 1e-12); // ∂f/∂y
//! ```
pub mod dual;
pub mod error;
mod funcs;

pub use dual::DualNumber;
pub use error::DualError;

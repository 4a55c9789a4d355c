use thiserror::Error;

/// Failure conditions of dual-number operations.
///
/// Every fallible operation reports its error before constructing any
/// output, so a caller never observes a partially computed result.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DualError {
    /// Division by a dual number whose value component is zero. The
    /// quotient rule divides by the denominator value squared, so this is
    /// checked up front instead of letting the derivative components turn
    /// into infinities.
    #[error("division by a dual number with value zero")]
    DivisionByZero,

    /// An elementary function was evaluated outside its domain.
    #[error("{func} is undefined at value {value}")]
    DomainError {
        /// Name of the offending function.
        func: &'static str,
        /// The primal value that fell outside the domain.
        value: f64,
    },

    /// A derivative component was addressed with an index `>= N`.
    #[error("derivative index {index} out of range for {len} variables")]
    IndexOutOfRange { index: usize, len: usize },
}

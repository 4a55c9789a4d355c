use num_traits::{Float, Num, One, ToPrimitive, Zero};

use crate::dual::DualNumber;
use crate::error::DualError;

fn domain_error<T: ToPrimitive>(func: &'static str, value: T) -> DualError {
    DualError::DomainError {
        func,
        value: value.to_f64().unwrap_or(f64::NAN),
    }
}

impl<T: Num + Copy, const N: usize> DualNumber<T, N> {
    /// Integer power by repeated dual multiplication, so the result is
    /// exact over integral scalar types: the value matches repeated
    /// multiplication and the derivative factor `n·vⁿ⁻¹` is accumulated
    /// through the product rule with no floating round-off.
    pub fn powi(self, n: u32) -> Self {
        let mut result = Self::constant(T::one());
        for _ in 0..n {
            result = result * self;
        }
        result
    }
}

/// Elementary functions over floating scalar types. Each computes
/// `f(value)` and scales every derivative component by `f'(value)`.
impl<T: Float, const N: usize> DualNumber<T, N> {
    pub fn sin(self) -> Self {
        self.chain(self.value().sin(), self.value().cos())
    }

    pub fn cos(self) -> Self {
        self.chain(self.value().cos(), -self.value().sin())
    }

    /// Fails with [`DualError::DomainError`] where the tangent's poles
    /// would make `1/cos²` blow up, i.e. when `cos(value)` is zero.
    pub fn tan(self) -> Result<Self, DualError> {
        let cos = self.value().cos();
        if cos.is_zero() {
            return Err(domain_error("tan", self.value()));
        }
        Ok(self.chain(self.value().tan(), (cos * cos).recip()))
    }

    /// Fails with [`DualError::DomainError`] when the value lies outside
    /// `[-1, 1]`.
    pub fn asin(self) -> Result<Self, DualError> {
        let v = self.value();
        if v < -T::one() || v > T::one() {
            return Err(domain_error("asin", v));
        }
        Ok(self.chain(v.asin(), (T::one() - v * v).sqrt().recip()))
    }

    /// Fails with [`DualError::DomainError`] when the value lies outside
    /// `[-1, 1]`.
    pub fn acos(self) -> Result<Self, DualError> {
        let v = self.value();
        if v < -T::one() || v > T::one() {
            return Err(domain_error("acos", v));
        }
        Ok(self.chain(v.acos(), -(T::one() - v * v).sqrt().recip()))
    }

    pub fn atan(self) -> Self {
        let v = self.value();
        self.chain(v.atan(), (T::one() + v * v).recip())
    }

    pub fn exp(self) -> Self {
        let e = self.value().exp();
        self.chain(e, e)
    }

    /// Natural logarithm. Fails with [`DualError::DomainError`] for
    /// non-positive values.
    pub fn ln(self) -> Result<Self, DualError> {
        let v = self.value();
        if v <= T::zero() {
            return Err(domain_error("ln", v));
        }
        Ok(self.chain(v.ln(), v.recip()))
    }

    /// Absolute value, derivative `sign(value)`. Fails with
    /// [`DualError::DomainError`] at zero, where the kink leaves the
    /// derivative undefined.
    pub fn abs(self) -> Result<Self, DualError> {
        let v = self.value();
        if v.is_zero() {
            return Err(domain_error("abs", v));
        }
        let sign = if v > T::zero() { T::one() } else { -T::one() };
        Ok(self.chain(v.abs(), sign))
    }

    /// Square root. Negative values are not rejected; value and
    /// derivatives come out NaN, matching `T::sqrt`. Callers who need a
    /// signal validate the operand first.
    pub fn sqrt(self) -> Self {
        let root = self.value().sqrt();
        self.chain(root, ((T::one() + T::one()) * root).recip())
    }

    /// Raises to a fixed scalar power, derivative factor `p·v^(p−1)`.
    /// A non-positive value under a fractional exponent is not rejected
    /// and produces NaN, matching `T::powf`.
    pub fn powf(self, p: T) -> Self {
        let v = self.value();
        self.chain(v.powf(p), p * v.powf(p - T::one()))
    }
}

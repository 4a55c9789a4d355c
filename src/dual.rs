use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{Num, One, Zero};

use crate::error::DualError;

/// A generalized dual number for forward-mode automatic differentiation.
///
/// Pairs a scalar value with the partial derivatives of the computation
/// with respect to `N` independent variables. Arithmetic and the
/// elementary functions propagate all `N` components through the chain
/// rule, so after evaluating an expression the result carries both the
/// function value and its exact gradient.
///
/// `N` is part of the type: two dual numbers interoperate only when they
/// track the same variable count over the same scalar type. The
/// derivative storage is a plain array, so values are `Copy` and no
/// operation allocates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualNumber<T, const N: usize> {
    value: T,
    derivatives: [T; N],
}

impl<T: Num + Copy, const N: usize> DualNumber<T, N> {
    /// Constructs a dual number from a value and a full derivative vector.
    pub fn new(value: T, derivatives: [T; N]) -> Self {
        Self { value, derivatives }
    }

    /// A constant: the value carries no dependence on any variable.
    pub fn constant(value: T) -> Self {
        Self {
            value,
            derivatives: [T::zero(); N],
        }
    }

    /// An independent variable: unit derivative with respect to variable
    /// `index`, zero with respect to every other.
    pub fn variable(value: T, index: usize) -> Result<Self, DualError> {
        if index >= N {
            return Err(DualError::IndexOutOfRange { index, len: N });
        }
        let mut derivatives = [T::zero(); N];
        derivatives[index] = T::one();
        Ok(Self { value, derivatives })
    }

    /// Value plus a single seed derivative, stored in component 0; the
    /// remaining components are zero. For `N = 1` this is the primary
    /// constructor.
    pub fn with_derivative(value: T, deriv: T) -> Self {
        let mut derivatives = [T::zero(); N];
        if let Some(first) = derivatives.first_mut() {
            *first = deriv;
        }
        Self { value, derivatives }
    }

    pub fn value(&self) -> T {
        self.value
    }

    /// Partial derivative with respect to variable `index`.
    pub fn partial(&self, index: usize) -> Result<T, DualError> {
        self.derivatives
            .get(index)
            .copied()
            .ok_or(DualError::IndexOutOfRange { index, len: N })
    }

    /// The derivative with respect to variable 0, the natural accessor
    /// for single-variable computations.
    pub fn derivative(&self) -> Result<T, DualError> {
        self.partial(0)
    }

    pub fn derivatives(&self) -> &[T; N] {
        &self.derivatives
    }

    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    pub fn set_partial(&mut self, index: usize, deriv: T) -> Result<(), DualError> {
        match self.derivatives.get_mut(index) {
            Some(slot) => {
                *slot = deriv;
                Ok(())
            }
            None => Err(DualError::IndexOutOfRange { index, len: N }),
        }
    }

    /// Replaces the whole derivative vector. The array length is the
    /// variable count, so a mismatched replacement cannot be expressed.
    pub fn set_derivatives(&mut self, derivatives: [T; N]) {
        self.derivatives = derivatives;
    }

    /// Quotient rule division, reporting [`DualError::DivisionByZero`]
    /// when the denominator value is zero. The `/` operator delegates
    /// here and panics instead of returning the error.
    pub fn checked_div(self, rhs: Self) -> Result<Self, DualError> {
        if rhs.value.is_zero() {
            return Err(DualError::DivisionByZero);
        }
        let denom = rhs.value * rhs.value;
        Ok(Self {
            value: self.value / rhs.value,
            derivatives: std::array::from_fn(|i| {
                (self.derivatives[i] * rhs.value - rhs.derivatives[i] * self.value) / denom
            }),
        })
    }

    /// Chain rule: given `f(value)` and `f'(value)`, scales every
    /// derivative component by `f'(value)`.
    pub(crate) fn chain(self, f_value: T, f_deriv: T) -> Self {
        Self {
            value: f_value,
            derivatives: std::array::from_fn(|i| self.derivatives[i] * f_deriv),
        }
    }
}

impl<T: Num + Copy, const N: usize> Default for DualNumber<T, N> {
    fn default() -> Self {
        Self::constant(T::zero())
    }
}

impl<T: Num + Copy, const N: usize> From<T> for DualNumber<T, N> {
    fn from(value: T) -> Self {
        Self::constant(value)
    }
}

impl<T: Num + Copy, const N: usize> Add for DualNumber<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            value: self.value + rhs.value,
            derivatives: std::array::from_fn(|i| self.derivatives[i] + rhs.derivatives[i]),
        }
    }
}

impl<T: Num + Copy, const N: usize> Sub for DualNumber<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            value: self.value - rhs.value,
            derivatives: std::array::from_fn(|i| self.derivatives[i] - rhs.derivatives[i]),
        }
    }
}

impl<T: Num + Copy, const N: usize> Mul for DualNumber<T, N> {
    type Output = Self;

    // product rule: (uv)' = u v' + u' v
    fn mul(self, rhs: Self) -> Self {
        Self {
            value: self.value * rhs.value,
            derivatives: std::array::from_fn(|i| {
                self.value * rhs.derivatives[i] + self.derivatives[i] * rhs.value
            }),
        }
    }
}

impl<T: Num + Copy, const N: usize> Div for DualNumber<T, N> {
    type Output = Self;

    /// Panics when the denominator value is zero; use
    /// [`DualNumber::checked_div`] to handle that case.
    fn div(self, rhs: Self) -> Self {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Num + Copy + Neg<Output = T>, const N: usize> Neg for DualNumber<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            value: -self.value,
            derivatives: std::array::from_fn(|i| -self.derivatives[i]),
        }
    }
}

// Scalar on the right: promote to a constant, apply the dual-dual rule.

impl<T: Num + Copy, const N: usize> Add<T> for DualNumber<T, N> {
    type Output = Self;

    fn add(self, rhs: T) -> Self {
        self + Self::constant(rhs)
    }
}

impl<T: Num + Copy, const N: usize> Sub<T> for DualNumber<T, N> {
    type Output = Self;

    fn sub(self, rhs: T) -> Self {
        self - Self::constant(rhs)
    }
}

impl<T: Num + Copy, const N: usize> Mul<T> for DualNumber<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self * Self::constant(rhs)
    }
}

impl<T: Num + Copy, const N: usize> Div<T> for DualNumber<T, N> {
    type Output = Self;

    /// Panics when `rhs` is zero, like the dual-dual operator.
    fn div(self, rhs: T) -> Self {
        self / Self::constant(rhs)
    }
}

// Scalar on the left. A blanket impl over T would place the type
// parameter in the impl's self position, which coherence forbids, so the
// primitive types the crate is used with get concrete impls.
macro_rules! scalar_lhs_ops {
    ($($t:ty),* $(,)?) => {$(
        impl<const N: usize> Add<DualNumber<$t, N>> for $t {
            type Output = DualNumber<$t, N>;

            fn add(self, rhs: DualNumber<$t, N>) -> DualNumber<$t, N> {
                DualNumber::constant(self) + rhs
            }
        }

        impl<const N: usize> Sub<DualNumber<$t, N>> for $t {
            type Output = DualNumber<$t, N>;

            fn sub(self, rhs: DualNumber<$t, N>) -> DualNumber<$t, N> {
                DualNumber::constant(self) - rhs
            }
        }

        impl<const N: usize> Mul<DualNumber<$t, N>> for $t {
            type Output = DualNumber<$t, N>;

            fn mul(self, rhs: DualNumber<$t, N>) -> DualNumber<$t, N> {
                DualNumber::constant(self) * rhs
            }
        }

        impl<const N: usize> Div<DualNumber<$t, N>> for $t {
            type Output = DualNumber<$t, N>;

            fn div(self, rhs: DualNumber<$t, N>) -> DualNumber<$t, N> {
                DualNumber::constant(self) / rhs
            }
        }
    )*};
}

scalar_lhs_ops!(f32, f64, i32, i64);

/// Lexicographic order: value first, then derivative components from 0
/// upward. A NaN in any compared component yields `None`.
impl<T: Num + Copy + PartialOrd, const N: usize> PartialOrd for DualNumber<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.value.partial_cmp(&other.value)? {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
        for i in 0..N {
            match self.derivatives[i].partial_cmp(&other.derivatives[i])? {
                Ordering::Equal => {}
                ord => return Some(ord),
            }
        }
        Some(Ordering::Equal)
    }
}

impl<T: Display, const N: usize> Display for DualNumber<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Value: {}, Derivatives: [", self.value)?;
        for (i, deriv) in self.derivatives.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", deriv)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::{prelude::*, test_runner::Config};

    const NUM_CASES: u32 = 1000;
    const TEST_RANGE: f64 = 100.0;

    type Dual1 = DualNumber<f64, 1>;
    type Dual3 = DualNumber<f64, 3>;

    #[test]
    fn test_default_is_all_zero() {
        let d = Dual3::default();
        assert_eq!(d.value(), 0.0);
        assert_eq!(*d.derivatives(), [0.0; 3]);
    }

    #[test]
    fn test_constant_has_zero_derivatives() {
        let c = Dual3::constant(7.5);
        assert_eq!(c.value(), 7.5);
        assert_eq!(*c.derivatives(), [0.0; 3]);
    }

    #[test]
    fn test_variable_seeds_one_hot() {
        let v = Dual3::variable(2.0, 1).unwrap();
        assert_eq!(v.value(), 2.0);
        assert_eq!(*v.derivatives(), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_variable_index_out_of_range() {
        assert_eq!(
            Dual3::variable(2.0, 3),
            Err(DualError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_with_derivative_seeds_component_zero() {
        let d = Dual3::with_derivative(4.0, 2.5);
        assert_eq!(d.value(), 4.0);
        assert_eq!(*d.derivatives(), [2.5, 0.0, 0.0]);

        let single = Dual1::with_derivative(4.0, 2.5);
        assert_eq!(single.derivative(), Ok(2.5));
    }

    #[test]
    fn test_accessors_and_mutators() {
        let mut d = Dual3::new(1.0, [3.0, 4.0, 5.0]);
        assert_eq!(d.partial(0), Ok(3.0));
        assert_eq!(d.partial(2), Ok(5.0));
        assert_eq!(
            d.partial(3),
            Err(DualError::IndexOutOfRange { index: 3, len: 3 })
        );

        d.set_value(2.0);
        d.set_partial(1, -4.0).unwrap();
        assert_eq!(d.value(), 2.0);
        assert_eq!(d.partial(1), Ok(-4.0));
        assert_eq!(
            d.set_partial(9, 0.0),
            Err(DualError::IndexOutOfRange { index: 9, len: 3 })
        );

        d.set_derivatives([9.0, 8.0, 7.0]);
        assert_eq!(*d.derivatives(), [9.0, 8.0, 7.0]);
    }

    #[test]
    fn test_arithmetic_single_variable() {
        // 5 + ε and 3 + ε
        let a = Dual1::with_derivative(5.0, 1.0);
        let b = Dual1::with_derivative(3.0, 1.0);

        let sum = a + b;
        assert_eq!((sum.value(), sum.derivative().unwrap()), (8.0, 2.0));

        let diff = a - b;
        assert_eq!((diff.value(), diff.derivative().unwrap()), (2.0, 0.0));

        let prod = a * b;
        assert_eq!((prod.value(), prod.derivative().unwrap()), (15.0, 8.0));

        let quot = a / b;
        assert_eq!(quot.value(), 5.0 / 3.0);
        assert_eq!(quot.derivative().unwrap(), -2.0 / 9.0);
    }

    #[test]
    fn test_multivariate_product_rule() {
        // f(x, y) = x * y at (3, 4): ∂f/∂x = y, ∂f/∂y = x
        let x = DualNumber::<f64, 2>::variable(3.0, 0).unwrap();
        let y = DualNumber::<f64, 2>::variable(4.0, 1).unwrap();
        let f = x * y;
        assert_eq!(f.value(), 12.0);
        assert_eq!(*f.derivatives(), [4.0, 3.0]);
    }

    #[test]
    fn test_neg() {
        let d = Dual3::new(1.5, [1.0, -2.0, 3.0]);
        let n = -d;
        assert_eq!(n.value(), -1.5);
        assert_eq!(*n.derivatives(), [-1.0, 2.0, -3.0]);
    }

    #[test]
    fn test_checked_div_by_zero_value() {
        // zero value, nonzero derivatives: still division by zero
        let num = Dual3::new(1.0, [1.0, 1.0, 1.0]);
        let den = Dual3::new(0.0, [5.0, 6.0, 7.0]);
        assert_eq!(num.checked_div(den), Err(DualError::DivisionByZero));
    }

    #[test]
    #[should_panic(expected = "division by a dual number with value zero")]
    fn test_div_operator_panics_on_zero() {
        let num = Dual1::with_derivative(1.0, 1.0);
        let den = Dual1::with_derivative(0.0, 1.0);
        let _ = num / den;
    }

    #[test]
    fn test_integer_arithmetic() {
        let a = DualNumber::<i64, 2>::new(6, [1, 0]);
        let b = DualNumber::<i64, 2>::new(2, [0, 1]);
        let prod = a * b;
        assert_eq!(prod.value(), 12);
        assert_eq!(*prod.derivatives(), [2, 6]);
        let quot = a / b;
        assert_eq!(quot.value(), 3);
        assert_eq!(*quot.derivatives(), [2 / 4, -6 / 4]);
    }

    #[test]
    fn test_comparison_operators() {
        let d1 = Dual1::with_derivative(1.0, 2.0);
        let d2 = Dual1::with_derivative(1.0, 2.0);
        let d3 = Dual1::with_derivative(2.0, 3.0);

        assert!(d1 == d2);
        assert!(d1 != d3);
        assert!(d1 < d3);
        assert!(d3 > d1);
        assert!(d3 >= d3);
        assert!(d3 <= d3);
    }

    #[test]
    fn test_lexicographic_tie_break() {
        // equal values: the first derivative component decides
        let low = Dual3::new(2.0, [3.0, 4.0, 5.0]);
        let high = Dual3::new(2.0, [4.0, 4.0, 5.0]);
        assert!(low < high);

        // unequal values: derivatives are irrelevant
        let big = Dual3::new(3.0, [0.0, 0.0, 0.0]);
        assert!(low < big);

        // later components break ties when earlier ones are equal
        let a = Dual3::new(2.0, [3.0, 4.0, 5.0]);
        let b = Dual3::new(2.0, [3.0, 4.0, 6.0]);
        assert!(a < b);
    }

    #[test]
    fn test_nan_breaks_ordering() {
        let a = Dual1::with_derivative(f64::NAN, 1.0);
        let b = Dual1::with_derivative(1.0, 1.0);
        assert_eq!(a.partial_cmp(&b), None);

        let c = Dual1::with_derivative(1.0, f64::NAN);
        assert_eq!(c.partial_cmp(&b), None);
    }

    #[test]
    fn test_display_format() {
        let d = DualNumber::<i32, 3>::new(2, [3, 4, 5]);
        assert_eq!(d.to_string(), "Value: 2, Derivatives: [3, 4, 5]");

        let f = Dual3::new(2.0, [3.0, 4.0, 5.0]);
        assert_eq!(f.to_string(), "Value: 2, Derivatives: [3, 4, 5]");

        let single = Dual1::with_derivative(2.0, 3.0);
        assert_eq!(single.to_string(), "Value: 2, Derivatives: [3]");
    }

    #[test]
    fn test_from_scalar_is_constant() {
        let d: Dual3 = 4.25.into();
        assert_eq!(d, Dual3::constant(4.25));
    }

    proptest! {
        #![proptest_config(Config {
            cases: NUM_CASES,
            ..Config::default()
        })]

        // a ⊕ s must be exactly a ⊕ constant(s), both operand orders
        #[test]
        fn test_scalar_promotion_identity(
            v in -TEST_RANGE..TEST_RANGE,
            d0 in -TEST_RANGE..TEST_RANGE,
            d1 in -TEST_RANGE..TEST_RANGE,
            s in -TEST_RANGE..TEST_RANGE,
        ) {
            let a = DualNumber::<f64, 2>::new(v, [d0, d1]);
            let c = DualNumber::<f64, 2>::constant(s);

            prop_assert_eq!(a + s, a + c);
            prop_assert_eq!(a - s, a - c);
            prop_assert_eq!(a * s, a * c);
            prop_assert_eq!(s + a, c + a);
            prop_assert_eq!(s - a, c - a);
            prop_assert_eq!(s * a, c * a);

            if s != 0.0 {
                prop_assert_eq!(a / s, a / c);
            }
            if v != 0.0 {
                prop_assert_eq!(s / a, c / a);
            }
        }

        // (a + b)'ᵢ = a'ᵢ + b'ᵢ componentwise
        #[test]
        fn test_addition_linearity(
            av in -TEST_RANGE..TEST_RANGE,
            ad in prop::array::uniform3(-TEST_RANGE..TEST_RANGE),
            bv in -TEST_RANGE..TEST_RANGE,
            bd in prop::array::uniform3(-TEST_RANGE..TEST_RANGE),
        ) {
            let a = Dual3::new(av, ad);
            let b = Dual3::new(bv, bd);
            let sum = a + b;
            for i in 0..3 {
                prop_assert_eq!(sum.partial(i).unwrap(), ad[i] + bd[i]);
            }
        }

        #[test]
        fn test_sub_of_self_is_zero_everywhere(
            v in -TEST_RANGE..TEST_RANGE,
            d in prop::array::uniform3(-TEST_RANGE..TEST_RANGE),
        ) {
            let a = Dual3::new(v, d);
            prop_assert_eq!(a - a, Dual3::default());
        }
    }
}

pub mod distance;
pub mod money;
pub mod rate;
pub mod time;

use std::ops::{Div, Mul};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Scalar quantity tagged with its dimension exponents: francs, hours, days and kilometres.
#[derive(
    Clone,
    Copy,
    Default,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
#[from(i32, f64, OrderedFloat<f64>)]
#[serde(transparent)]
#[must_use]
pub struct Quantity<const COST: isize, const HOUR: isize, const DAY: isize, const KILOMETRE: isize>(
    pub OrderedFloat<f64>,
);

impl<const COST: isize, const HOUR: isize, const DAY: isize, const KILOMETRE: isize>
    Quantity<COST, HOUR, DAY, KILOMETRE>
{
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    pub const fn new(value: f64) -> Self {
        Self(OrderedFloat(value))
    }

    pub const fn abs(mut self) -> Self {
        self.0 = OrderedFloat(self.0.0.abs());
        self
    }

    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.0.0.is_finite()
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0.0 < 0.0
    }
}

impl<const COST: isize, const HOUR: isize, const DAY: isize, const KILOMETRE: isize> Mul<f64>
    for Quantity<COST, HOUR, DAY, KILOMETRE>
{
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl<const COST: isize, const HOUR: isize, const DAY: isize, const KILOMETRE: isize> Div<f64>
    for Quantity<COST, HOUR, DAY, KILOMETRE>
{
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl<const COST: isize, const HOUR: isize, const DAY: isize, const KILOMETRE: isize>
    From<Quantity<COST, HOUR, DAY, KILOMETRE>> for f64
{
    fn from(quantity: Quantity<COST, HOUR, DAY, KILOMETRE>) -> Self {
        quantity.0.0
    }
}

/// Implements `Mul` in both operand orders for a pair of quantities whose product is known.
macro_rules! implement_mul {
    ($lhs:ty, $rhs:ty, $output:ty) => {
        impl ::std::ops::Mul<$rhs> for $lhs {
            type Output = $output;

            fn mul(self, rhs: $rhs) -> Self::Output {
                $crate::Quantity(self.0 * rhs.0)
            }
        }

        impl ::std::ops::Mul<$lhs> for $rhs {
            type Output = $output;

            fn mul(self, rhs: $lhs) -> Self::Output {
                $crate::Quantity(self.0 * rhs.0)
            }
        }
    };
}

pub(crate) use implement_mul;

#[cfg(test)]
mod tests {
    use std::fmt::{Debug, Formatter};

    use super::*;

    pub type Bare = Quantity<0, 0, 0, 0>;

    impl Debug for Bare {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }

    #[test]
    fn test_sum() {
        let total: Bare = [1, 2, 3].into_iter().map(Bare::from).sum();
        assert_eq!(total, Bare::from(6));
    }

    #[test]
    fn test_max() {
        assert_eq!(Bare::from(1).max(Bare::from(2)), Bare::from(2));
        assert_eq!(Bare::from(2).max(Bare::from(1)), Bare::from(2));
    }

    #[test]
    fn test_abs() {
        assert_eq!(Bare::from(-3).abs(), Bare::from(3));
    }

    #[test]
    fn test_parse() {
        assert_eq!("0.35".parse::<Bare>().unwrap(), Bare::from(0.35));
        assert!("zero".parse::<Bare>().is_err());
    }

    #[test]
    fn test_is_negative() {
        assert!(Bare::from(-0.5).is_negative());
        assert!(!Bare::ZERO.is_negative());
        assert!(!(-Bare::ZERO).is_negative());
    }
}

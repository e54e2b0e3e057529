use core::fmt;

use crate::error::Error;
use crate::{Actor, Worry};

/// Adjustment applied to an item's worry level after it has been inspected
/// and before the divisibility test.
pub trait Adjust {
    fn adjust(&self, worry: Worry) -> Worry;
}

impl<T> Adjust for &T
where
    T: ?Sized + Adjust,
{
    #[inline]
    fn adjust(&self, worry: Worry) -> Worry {
        (**self).adjust(worry)
    }
}

/// Divide the worry level, truncating towards zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Divide(Worry);

impl Divide {
    /// Construct a new division policy, the divisor must be positive.
    pub fn new(divisor: Worry) -> Result<Self, Error> {
        if divisor <= 0 {
            return Err(Error::NonPositive {
                name: "divisor",
                value: divisor,
            });
        }

        Ok(Self(divisor))
    }
}

impl Adjust for Divide {
    #[inline]
    fn adjust(&self, worry: Worry) -> Worry {
        worry / self.0
    }
}

impl fmt::Display for Divide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "divide by {}", self.0)
    }
}

/// Keep the worry level bounded by reducing it modulo a common multiple of
/// every divisor.
///
/// If `m` is a multiple of `d`, then `n % d == (n % m) % d`, and both addition
/// and multiplication preserve congruence modulo `m`. So reducing doesn't
/// change the outcome of any divisibility test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modulus(Worry);

impl Modulus {
    /// Construct a new modulus policy, the modulus must be positive.
    pub fn new(modulus: Worry) -> Result<Self, Error> {
        if modulus <= 0 {
            return Err(Error::NonPositive {
                name: "modulus",
                value: modulus,
            });
        }

        Ok(Self(modulus))
    }

    /// Construct a modulus policy out of the [`common_multiple`] of the
    /// given actors.
    pub fn for_actors(actors: &[Actor]) -> Result<Self, Error> {
        if actors.is_empty() {
            return Err(Error::NoActors);
        }

        let modulus = common_multiple(actors).ok_or(Error::CommonMultipleOverflow)?;
        Self::new(modulus)
    }

    /// The modulus being reduced by.
    #[inline]
    pub fn get(&self) -> Worry {
        self.0
    }
}

impl Adjust for Modulus {
    #[inline]
    fn adjust(&self, worry: Worry) -> Worry {
        worry % self.0
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "modulo {}", self.0)
    }
}

/// Product of the divisors of every actor.
///
/// Returns `Some(0)` if there are no actors and `None` if the product
/// overflows.
///
/// # Examples
///
/// ```
/// assert_eq!(mitm::common_multiple(&[]), Some(0));
/// ```
pub fn common_multiple(actors: &[Actor]) -> Option<Worry> {
    if actors.is_empty() {
        return Some(0);
    }

    actors
        .iter()
        .try_fold(1 as Worry, |product, actor| product.checked_mul(actor.divisor))
}

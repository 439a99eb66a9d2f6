//! Numeric constraint checks used during configuration validation.
//!
//! Each marker type expresses one numeric invariant ("strictly positive",
//! "at least one", ...) and reports a violation as a [`ConstraintError`].
//! The engine's configuration validator maps these into domain errors that
//! name the offending parameter.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: greater than zero
//! - [`NonNegative`]: zero or greater
//! - [`AtLeastOne`]: one or greater
//! - [`UnitIntervalLowerOpen`]: lower-open unit interval `0 < x ≤ 1`
//!
//! `NaN` fails every constraint with [`ConstraintError::NotANumber`], since
//! its ordering against the bounds is undefined.

use std::cmp::Ordering;

use num_traits::{One, Zero};
use thiserror::Error;

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A trait for checking a numeric invariant.
///
/// Implement this for a zero-sized marker type representing the invariant.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the
    /// constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Marker type enforcing that a value is strictly positive.
///
/// # Examples
///
/// ```
/// use cryostat_models::support::constraint::{Constraint, StrictlyPositive};
///
/// assert!(StrictlyPositive::check(&3.14).is_ok());
/// assert!(StrictlyPositive::check(&0.0).is_err());
/// assert!(StrictlyPositive::check(&-1.0).is_err());
/// assert!(StrictlyPositive::check(&f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrictlyPositive;

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Marker type enforcing that a value is zero or greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonNegative;

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Marker type enforcing that a value is one or greater.
///
/// Used for multiplicative safety margins, which must never shrink an
/// estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtLeastOne;

impl<T: PartialOrd + One> Constraint<T> for AtLeastOne {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::BelowMinimum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Marker type enforcing the lower-open unit interval: `0 < x ≤ 1`.
///
/// Used for efficiency factors, which divide an estimate and must not be
/// zero or exceed unity.
///
/// # Examples
///
/// ```
/// use cryostat_models::support::constraint::{Constraint, UnitIntervalLowerOpen};
///
/// assert!(UnitIntervalLowerOpen::check(&0.9).is_ok());
/// assert!(UnitIntervalLowerOpen::check(&1.0).is_ok());
/// assert!(UnitIntervalLowerOpen::check(&0.0).is_err());
/// assert!(UnitIntervalLowerOpen::check(&1.1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitIntervalLowerOpen;

impl<T: PartialOrd + Zero + One> Constraint<T> for UnitIntervalLowerOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strictly_positive() {
        assert!(StrictlyPositive::check(&1).is_ok());
        assert!(StrictlyPositive::check(&1e-12).is_ok());
        assert_eq!(StrictlyPositive::check(&0.0), Err(ConstraintError::Zero));
        assert_eq!(
            StrictlyPositive::check(&-2.5),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            StrictlyPositive::check(&f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn non_negative() {
        assert!(NonNegative::check(&0.0).is_ok());
        assert!(NonNegative::check(&5).is_ok());
        assert_eq!(NonNegative::check(&-1.0), Err(ConstraintError::Negative));
    }

    #[test]
    fn at_least_one() {
        assert!(AtLeastOne::check(&1.0).is_ok());
        assert!(AtLeastOne::check(&1.2).is_ok());
        assert_eq!(AtLeastOne::check(&0.99), Err(ConstraintError::BelowMinimum));
        assert_eq!(
            AtLeastOne::check(&f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn unit_interval_lower_open() {
        assert!(UnitIntervalLowerOpen::check(&0.5).is_ok());
        assert!(UnitIntervalLowerOpen::check(&1.0).is_ok());
        assert_eq!(
            UnitIntervalLowerOpen::check(&0.0),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(
            UnitIntervalLowerOpen::check(&-0.1),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(
            UnitIntervalLowerOpen::check(&1.000_001),
            Err(ConstraintError::AboveMaximum)
        );
    }
}

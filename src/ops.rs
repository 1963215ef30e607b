//! Checked set operations with explicit absence handling.
//!
//! The functions in this module mirror the classical set interface. Each
//! operand is passed as an [`Option`], so a caller can signal "no value
//! supplied" where other interfaces would pass a null reference, and every
//! precondition violation is reported through [`SetError`] instead of
//! panicking.
//!
//! # Examples
//! ```
//! use setalg::{ops, Set, SetError};
//!
//! let a: Set<u32> = [1, 2, 3].iter().copied().collect();
//! let b: Set<u32> = [3, 4].iter().copied().collect();
//!
//! let union = ops::union(Some(&a), Some(&b))?;
//! assert_eq!(union.len(), 4);
//!
//! assert_eq!(ops::union(None, Some(&b)), Err(SetError::InvalidArgument));
//! # Ok::<(), SetError>(())
//! ```

use core::borrow::Borrow;
use core::fmt;

use crate::set::Set;

/// The reasons a checked set operation can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetError {
    /// An absent element or operand was passed where a value is required.
    InvalidArgument,
    /// The element to be removed is not present in the set.
    NotFound,
}

impl fmt::Display for SetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetError::InvalidArgument => f.write_str("absent element or set operand"),
            SetError::NotFound => f.write_str("element not found in the set"),
        }
    }
}

impl core::error::Error for SetError {}

fn operands<'a, T>(
    a: Option<&'a Set<T>>,
    b: Option<&'a Set<T>>,
) -> Result<(&'a Set<T>, &'a Set<T>), SetError> {
    match (a, b) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(SetError::InvalidArgument),
    }
}

/// Adds a value to the set.
///
/// Returns `Ok(false)` if the set already contained an equal value, which
/// leaves the set unchanged, or `Ok(true)` if the value was appended.
///
/// # Errors
/// Fails with [`SetError::InvalidArgument`] if `item` is `None`.
///
/// # Examples
/// ```
/// use setalg::{ops, Set, SetError};
///
/// let mut set = Set::new();
/// assert_eq!(ops::add(&mut set, Some(1)), Ok(true));
/// assert_eq!(ops::add(&mut set, Some(1)), Ok(false));
/// assert_eq!(ops::add(&mut set, None), Err(SetError::InvalidArgument));
/// assert_eq!(set.len(), 1);
/// ```
pub fn add<T: Eq>(set: &mut Set<T>, item: Option<T>) -> Result<bool, SetError> {
    let item = item.ok_or(SetError::InvalidArgument)?;
    Ok(set.insert(item))
}

/// Removes a value from the set and returns it.
///
/// The given value may be any borrowed form of the set's element type, but
/// `Eq` on the borrowed form *must* match that of the element type.
///
/// # Errors
/// Fails with [`SetError::InvalidArgument`] if `item` is `None`, and with
/// [`SetError::NotFound`] if no equal element is stored in the set.
///
/// # Examples
/// ```
/// use setalg::{ops, Set, SetError};
///
/// let mut set: Set<u32> = [1, 2].iter().copied().collect();
/// assert_eq!(ops::remove(&mut set, Some(&1)), Ok(1));
/// assert_eq!(ops::remove(&mut set, Some(&1)), Err(SetError::NotFound));
/// assert_eq!(ops::remove(&mut set, None), Err(SetError::InvalidArgument));
/// ```
pub fn remove<T, Q>(set: &mut Set<T>, item: Option<&Q>) -> Result<T, SetError>
where
    T: Eq + Borrow<Q>,
    Q: ?Sized + Eq,
{
    let item = item.ok_or(SetError::InvalidArgument)?;
    set.take(item).ok_or(SetError::NotFound)
}

/// Returns a new set containing every value that appears in `a` or in `b`,
/// each exactly once.
///
/// The result owns its own storage and both inputs are left unchanged. The
/// order of the result's elements is unspecified.
///
/// # Errors
/// Fails with [`SetError::InvalidArgument`] if either operand is `None`.
pub fn union<T: Eq + Clone>(
    a: Option<&Set<T>>,
    b: Option<&Set<T>>,
) -> Result<Set<T>, SetError> {
    let (a, b) = operands(a, b)?;
    Ok(a.union(b))
}

/// Returns a new set containing every value present in both `a` and `b`.
///
/// # Errors
/// Fails with [`SetError::InvalidArgument`] if either operand is `None`.
pub fn intersection<T: Eq + Clone>(
    a: Option<&Set<T>>,
    b: Option<&Set<T>>,
) -> Result<Set<T>, SetError> {
    let (a, b) = operands(a, b)?;
    Ok(a.intersection(b))
}

/// Returns a new set containing every value that appears in exactly one of
/// `a` and `b`.
///
/// Note that this is the *symmetric* difference, not `a` minus `b`; see
/// [`Set::difference`].
///
/// # Errors
/// Fails with [`SetError::InvalidArgument`] if either operand is `None`.
pub fn difference<T: Eq + Clone>(
    a: Option<&Set<T>>,
    b: Option<&Set<T>>,
) -> Result<Set<T>, SetError> {
    let (a, b) = operands(a, b)?;
    Ok(a.difference(b))
}

/// Returns `true` if every element of `a` is also an element of `b`.
///
/// An empty `a` is a subset of any `b`, including an empty one.
///
/// # Errors
/// Fails with [`SetError::InvalidArgument`] if either operand is `None`.
pub fn subset<T: Eq>(
    a: Option<&Set<T>>,
    b: Option<&Set<T>>,
) -> Result<bool, SetError> {
    let (a, b) = operands(a, b)?;
    Ok(a.is_subset_of(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[u32]) -> Set<u32> {
        values.iter().copied().collect()
    }

    #[test]
    fn overlapping_sets_scenario() {
        let set1 = set(&[1, 2, 3, 4]);
        let set2 = set(&[3, 4, 5, 6]);
        let set3 = set(&[3, 4]);

        assert_eq!(union(Some(&set1), Some(&set2)), Ok(set(&[1, 2, 3, 4, 5, 6])));
        assert_eq!(intersection(Some(&set1), Some(&set2)), Ok(set(&[3, 4])));
        assert_eq!(difference(Some(&set1), Some(&set2)), Ok(set(&[1, 2, 5, 6])));
        assert_eq!(subset(Some(&set3), Some(&set1)), Ok(true));
        assert_eq!(subset(Some(&set3), Some(&set2)), Ok(true));
    }

    #[test]
    fn identical_sets_scenario() {
        let set1 = set(&[1, 2]);
        let set2 = set(&[1, 2]);
        let set3 = set(&[1, 2]);

        assert_eq!(union(Some(&set1), Some(&set2)), Ok(set(&[1, 2])));
        assert_eq!(intersection(Some(&set1), Some(&set2)), Ok(set(&[1, 2])));
        assert_eq!(difference(Some(&set1), Some(&set2)), Ok(Set::new()));
        assert_eq!(subset(Some(&set3), Some(&set1)), Ok(true));
        assert_eq!(subset(Some(&set3), Some(&set2)), Ok(true));
    }

    #[test]
    fn empty_operand_scenario() {
        let set1 = set(&[]);
        let set2 = set(&[5]);

        assert_eq!(union(Some(&set1), Some(&set2)), Ok(set(&[5])));
        assert_eq!(intersection(Some(&set1), Some(&set2)), Ok(Set::new()));
        assert_eq!(difference(Some(&set1), Some(&set2)), Ok(set(&[5])));
        assert_eq!(subset(Some(&Set::new()), Some(&set1)), Ok(true));
    }

    #[test]
    fn absent_operands_are_rejected() {
        let a = set(&[1]);

        assert_eq!(union::<u32>(None, Some(&a)), Err(SetError::InvalidArgument));
        assert_eq!(union(Some(&a), None), Err(SetError::InvalidArgument));
        assert_eq!(intersection::<u32>(None, None), Err(SetError::InvalidArgument));
        assert_eq!(difference(Some(&a), None), Err(SetError::InvalidArgument));
        assert_eq!(subset::<u32>(None, Some(&a)), Err(SetError::InvalidArgument));
    }

    #[test]
    fn absent_elements_are_rejected() {
        let mut s = set(&[1, 2]);

        assert_eq!(add(&mut s, None), Err(SetError::InvalidArgument));
        assert_eq!(remove(&mut s, None), Err(SetError::InvalidArgument));
        assert_eq!(s, set(&[1, 2]));
    }

    #[test]
    fn removing_a_missing_element_reports_not_found() {
        let mut s = set(&[1, 2]);

        assert_eq!(remove(&mut s, Some(&3)), Err(SetError::NotFound));
        assert_eq!(remove(&mut s, Some(&2)), Ok(2));
        assert_eq!(remove(&mut s, Some(&2)), Err(SetError::NotFound));
    }

    #[test]
    fn add_collapses_duplicates() {
        let mut s = Set::new();

        assert_eq!(add(&mut s, Some(7)), Ok(true));
        assert_eq!(add(&mut s, Some(7)), Ok(false));
        assert_eq!(add(&mut s, Some(8)), Ok(true));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn error_messages_name_the_failure() {
        use alloc::string::ToString;

        assert_eq!(
            SetError::InvalidArgument.to_string(),
            "absent element or set operand"
        );
        assert_eq!(SetError::NotFound.to_string(), "element not found in the set");
    }
}

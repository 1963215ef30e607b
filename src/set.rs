//! A growable set implemented with a vector.

use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::iter::FromIterator;
use core::slice::Iter;

/// A set implemented with a vector, using a linear scan to find a given value.
///
/// Unlike hash- or tree-based sets, `Set` only requires its element type to
/// implement [`Eq`]. Elements are stored in insertion order, and iteration
/// visits them in that order; the order carries no meaning for set equality,
/// and the results of the set-algebra operations must not be relied on to
/// come out in any particular order.
///
/// # Examples
/// ```
/// let mut set = setalg::Set::new();
/// set.insert("a");
/// set.insert("b");
/// set.insert("a");
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains("a"));
/// ```
pub struct Set<T> {
    items: Vec<T>,
}

impl<T> Set<T> {
    /// Constructs a new, empty `Set`.
    #[inline]
    pub fn new() -> Self {
        Set { items: Vec::new() }
    }

    /// Constructs a new, empty `Set` with space for at least `capacity`
    /// elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Set { items: Vec::with_capacity(capacity) }
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Returns the number of elements in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set contains no elements, or `false` otherwise.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    /// ```
    /// let mut set = setalg::Set::new();
    /// set.insert(1);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// An iterator visiting all elements of the set in insertion order.
    /// The iterator element type is `&'a T`.
    ///
    /// Iterating does not change the set, and the iterator may be obtained
    /// any number of times.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Eq> Set<T> {
    /// Returns `true` if the set contains a value equal to the given value,
    /// or `false` otherwise.
    ///
    /// The value may be any borrowed form of the set's element type, but `Eq`
    /// on the borrowed form *must* match that of the element type.
    ///
    /// # Examples
    /// ```
    /// let mut set = setalg::Set::new();
    /// set.insert(1);
    ///
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&2), false);
    /// ```
    #[inline]
    pub fn contains<Q: ?Sized + Eq>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
    {
        self.items.iter().any(|item| item.borrow() == value)
    }

    /// Returns a reference to the value in the set, if any, that is equal to
    /// the given value.
    ///
    /// The value may be any borrowed form of the set's element type, but `Eq`
    /// on the borrowed form *must* match that of the element type.
    #[inline]
    pub fn get<Q: ?Sized + Eq>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
    {
        self.items.iter().find(|item| (*item).borrow() == value)
    }

    /// Adds a value to the set.
    ///
    /// Returns `false` if the set already contained a value equal to the
    /// given value, or `true` otherwise. If such a value was already present,
    /// it is not updated; this matters for types that can be `==` without
    /// being identical. This is the sole point at which uniqueness is
    /// enforced: a duplicate is never stored.
    ///
    /// # Examples
    /// ```
    /// let mut set = setalg::Set::new();
    ///
    /// assert_eq!(set.insert(1), true);
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }

        self.items.push(value);
        true
    }

    /// Removes a value from the set, and returns whether it was previously
    /// present.
    ///
    /// The relative order of the remaining elements is preserved.
    ///
    /// The given value may be any borrowed form of the set's element type,
    /// but `Eq` on the borrowed form *must* match that of the element type.
    ///
    /// # Examples
    /// ```
    /// let mut set = setalg::Set::new();
    /// set.insert(2);
    ///
    /// assert_eq!(set.remove(&2), true);
    /// assert_eq!(set.remove(&2), false);
    /// ```
    #[inline]
    pub fn remove<Q: ?Sized + Eq>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
    {
        self.take(value).is_some()
    }

    /// Removes and returns the value from the set, if any, that is equal to
    /// the given one.
    ///
    /// The relative order of the remaining elements is preserved.
    ///
    /// # Examples
    /// ```
    /// let mut set = setalg::Set::new();
    /// set.insert(2);
    ///
    /// assert_eq!(set.take(&2), Some(2));
    /// assert_eq!(set.take(&2), None);
    /// ```
    pub fn take<Q: ?Sized + Eq>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
    {
        let idx = self
            .items
            .iter()
            .position(|item| item.borrow() == value)?;
        Some(self.items.remove(idx))
    }

    /// Returns `true` if the set is a subset of another,
    /// i.e. `other` contains at least all the values in `self`.
    ///
    /// An empty set is a subset of every set, including another empty set.
    ///
    /// # Examples
    /// ```
    /// use setalg::Set;
    ///
    /// let mut sup = Set::new();
    /// sup.insert(1); sup.insert(2); sup.insert(3);
    ///
    /// let mut set = Set::new();
    /// assert_eq!(set.is_subset_of(&sup), true);
    ///
    /// set.insert(2);
    /// assert_eq!(set.is_subset_of(&sup), true);
    ///
    /// set.insert(5);
    /// assert_eq!(set.is_subset_of(&sup), false);
    /// ```
    pub fn is_subset_of(&self, other: &Set<T>) -> bool {
        self.iter().all(|item| other.contains(item))
    }

    /// Returns `true` if the set is a superset of another,
    /// i.e. `self` contains at least all the values in `other`.
    #[inline]
    pub fn is_superset_of(&self, other: &Set<T>) -> bool {
        other.is_subset_of(self)
    }

    /// Returns `true` if the set has no elements in common with `other`.
    /// This is equivalent to checking for an empty intersection.
    pub fn is_disjoint(&self, other: &Set<T>) -> bool {
        self.iter().all(|item| !other.contains(item))
    }

    /// Returns a new set containing every value that appears in `self` or in
    /// `other`, each exactly once.
    ///
    /// The result owns its own storage; neither input is changed, and later
    /// changes to the result do not affect the inputs.
    ///
    /// # Examples
    /// ```
    /// use setalg::Set;
    ///
    /// let a: Set<u32> = [1, 2, 3, 4].iter().copied().collect();
    /// let b: Set<u32> = [3, 4, 5, 6].iter().copied().collect();
    ///
    /// let union = a.union(&b);
    /// assert_eq!(union, [1, 2, 3, 4, 5, 6].iter().copied().collect());
    /// ```
    pub fn union(&self, other: &Set<T>) -> Set<T>
    where
        T: Clone,
    {
        let mut result = self.clone();
        result.items.reserve(other.len());
        for item in other.iter() {
            if !result.contains(item) {
                result.items.push(item.clone());
            }
        }

        result
    }

    /// Returns a new set containing every value present in both `self` and
    /// `other`, each exactly once.
    ///
    /// The result owns its own storage; neither input is changed.
    ///
    /// # Examples
    /// ```
    /// use setalg::Set;
    ///
    /// let a: Set<u32> = [1, 2, 3, 4].iter().copied().collect();
    /// let b: Set<u32> = [3, 4, 5, 6].iter().copied().collect();
    ///
    /// assert_eq!(a.intersection(&b), [3, 4].iter().copied().collect());
    /// ```
    pub fn intersection(&self, other: &Set<T>) -> Set<T>
    where
        T: Clone,
    {
        // Scanning the smaller operand keeps the number of comparisons down.
        let (small, large) = if self.len() < other.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut result = Set::with_capacity(small.len());
        for item in small.iter() {
            if large.contains(item) {
                // Elements of a set are unique, so no duplicate check is
                // needed here.
                result.items.push(item.clone());
            }
        }

        result
    }

    /// Returns a new set containing every value that appears in exactly one
    /// of `self` and `other`.
    ///
    /// Note that this is the *symmetric* difference: values present in
    /// `other` but not in `self` are part of the result, too.
    ///
    /// The result owns its own storage; neither input is changed.
    ///
    /// # Examples
    /// ```
    /// use setalg::Set;
    ///
    /// let a: Set<u32> = [1, 2, 3, 4].iter().copied().collect();
    /// let b: Set<u32> = [3, 4, 5, 6].iter().copied().collect();
    ///
    /// assert_eq!(a.difference(&b), [1, 2, 5, 6].iter().copied().collect());
    /// ```
    pub fn difference(&self, other: &Set<T>) -> Set<T>
    where
        T: Clone,
    {
        let mut result = Set::new();
        for item in self.iter() {
            if !other.contains(item) {
                result.items.push(item.clone());
            }
        }

        for item in other.iter() {
            if !self.contains(item) {
                // Everything pushed by the first loop is missing from
                // `other`, so the two halves cannot overlap.
                result.items.push(item.clone());
            }
        }

        result
    }
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Set<T> {
    fn clone(&self) -> Self {
        Set { items: self.items.clone() }
    }
}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Sets compare equal when they contain the same elements, regardless of
/// insertion order.
impl<T: Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset_of(other)
    }
}

impl<T: Eq> Eq for Set<T> {}

/// Converts a vector into a set, dropping all but the first occurrence of
/// each group of equal elements.
impl<T: Eq> From<Vec<T>> for Set<T> {
    fn from(vec: Vec<T>) -> Self {
        let mut set = Set::with_capacity(vec.len());
        for item in vec {
            set.insert(item);
        }

        set
    }
}

impl<T: Eq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Set::new();
        set.extend(iter);
        set
    }
}

impl<T: Eq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

//! Capability-based comparison keys.
//!
//! A [`CompareKey`] bundles a raw key value (its *label*) with three
//! predicates that compare the label against another raw value of the
//! same type. The persistent map never owns or stores comparator logic;
//! each `insert` and `lookup` call carries its ordering in the key it is
//! given, so two maps of the same key type can be ordered differently
//! simply by building their keys with different factories.
//!
//! # Contract
//!
//! For any comparison target, exactly one of `equals`, `less_than`, and
//! `greater_than` must hold, and the three predicates together must be
//! consistent with a single total order. This is a caller contract: it is
//! not checked at runtime, and keys violating it produce undefined map
//! behavior.

use std::cmp::Ordering;
use std::fmt;

type Predicate<A> = Box<dyn Fn(&A) -> bool>;

/// A raw key bundled with the predicates that order it.
///
/// `CompareKey` values are ephemeral: one is built for each `insert` or
/// `lookup` call and never stored inside the map. On insert, only the
/// label moves into the tree.
///
/// # Examples
///
/// ```rust
/// use bbmap::persistent::CompareKey;
///
/// let key = CompareKey::from_ord(5);
/// assert!(key.less_than(&9));
/// assert!(key.greater_than(&1));
/// assert!(key.equals(&5));
/// ```
pub struct CompareKey<A> {
    label: A,
    equals: Predicate<A>,
    less_than: Predicate<A>,
    greater_than: Predicate<A>,
}

impl<A> CompareKey<A> {
    /// Builds a key from a label and three explicit predicates.
    ///
    /// Each predicate receives a comparison target and must report how
    /// `label` relates to it. The predicates must satisfy the module
    /// contract: exactly one holds for any target.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bbmap::persistent::CompareKey;
    ///
    /// // Order integers by absolute value
    /// let key = CompareKey::new(
    ///     -3,
    ///     |other: &i32| 3 == other.abs(),
    ///     |other: &i32| 3 < other.abs(),
    ///     |other: &i32| 3 > other.abs(),
    /// );
    /// assert!(key.equals(&3));
    /// assert!(key.less_than(&-10));
    /// ```
    pub fn new<E, L, G>(label: A, equals: E, less_than: L, greater_than: G) -> Self
    where
        E: Fn(&A) -> bool + 'static,
        L: Fn(&A) -> bool + 'static,
        G: Fn(&A) -> bool + 'static,
    {
        Self {
            label,
            equals: Box::new(equals),
            less_than: Box::new(less_than),
            greater_than: Box::new(greater_than),
        }
    }

    /// Returns a reference to the raw key value.
    #[inline]
    pub const fn label(&self) -> &A {
        &self.label
    }

    /// Consumes the key, returning the raw key value.
    ///
    /// Used by the map on insert: the label is stored, the predicates are
    /// dropped.
    #[inline]
    pub(crate) fn into_label(self) -> A {
        self.label
    }

    /// Returns `true` if the label compares equal to `other`.
    #[inline]
    pub fn equals(&self, other: &A) -> bool {
        (self.equals)(other)
    }

    /// Returns `true` if the label compares less than `other`.
    #[inline]
    pub fn less_than(&self, other: &A) -> bool {
        (self.less_than)(other)
    }

    /// Returns `true` if the label compares greater than `other`.
    #[inline]
    pub fn greater_than(&self, other: &A) -> bool {
        (self.greater_than)(other)
    }

    /// Collapses the predicates into a three-way comparison.
    ///
    /// `less_than` is consulted first, then `greater_than`; anything else
    /// is `Equal`. Under the module contract all three answers agree.
    pub(crate) fn compare(&self, other: &A) -> Ordering {
        if self.less_than(other) {
            Ordering::Less
        } else if self.greater_than(other) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl<A: Ord + Clone + 'static> CompareKey<A> {
    /// Builds a key ordered by the type's `Ord` instance.
    ///
    /// This is the reference factory: the three-way comparison of `Ord`
    /// is collapsed into the three predicates, so the total-order
    /// contract holds by construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bbmap::persistent::CompareKey;
    ///
    /// let key = CompareKey::from_ord(42);
    /// assert!(key.less_than(&100));
    /// assert!(!key.less_than(&42));
    /// ```
    #[must_use]
    pub fn from_ord(label: A) -> Self {
        let for_equals = label.clone();
        let for_less = label.clone();
        let for_greater = label.clone();
        Self {
            label,
            equals: Box::new(move |other| for_equals == *other),
            less_than: Box::new(move |other| for_less < *other),
            greater_than: Box::new(move |other| for_greater > *other),
        }
    }
}

impl CompareKey<String> {
    /// Builds a string key ordered by Unicode code points.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bbmap::persistent::CompareKey;
    ///
    /// let key = CompareKey::string("banana");
    /// assert!(key.greater_than(&"apple".to_string()));
    /// assert!(key.less_than(&"cherry".to_string()));
    /// ```
    #[must_use]
    pub fn string(label: impl Into<String>) -> Self {
        Self::from_ord(label.into())
    }

    /// Builds a string key ordered case-insensitively.
    ///
    /// The label is kept as given; only the comparison folds case. Two
    /// labels that differ in case therefore compare equal while remaining
    /// distinguishable, which makes the map's replace-on-equal behavior
    /// observable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bbmap::persistent::CompareKey;
    ///
    /// let key = CompareKey::caseless("Apple");
    /// assert!(key.equals(&"aPPLE".to_string()));
    /// assert!(key.less_than(&"BANANA".to_string()));
    /// assert_eq!(key.label(), "Apple");
    /// ```
    #[must_use]
    pub fn caseless(label: impl Into<String>) -> Self {
        let label = label.into();
        let folded = label.to_lowercase();
        let for_equals = folded.clone();
        let for_less = folded.clone();
        let for_greater = folded;
        Self {
            label,
            equals: Box::new(move |other| for_equals == other.to_lowercase()),
            less_than: Box::new(move |other| for_less < other.to_lowercase()),
            greater_than: Box::new(move |other| for_greater > other.to_lowercase()),
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for CompareKey<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The predicates are opaque closures; only the label is shown.
        formatter
            .debug_struct("CompareKey")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

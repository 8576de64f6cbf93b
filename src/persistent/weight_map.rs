//! Persistent (immutable) ordered map based on a weight-balanced tree.
//!
//! This module provides [`PersistentWeightMap`], an immutable ordered map
//! that uses structural sharing for efficient operations.
//!
//! # Overview
//!
//! `PersistentWeightMap` is a binary search tree rebalanced by subtree
//! *size* rather than height: a weight-balanced (bounded-balance) tree.
//! Every node stores the size of the subtree below it, and after each
//! insert a rotation restores the balance bound, keeping the height
//! O(log N).
//!
//! - O(log N) lookup
//! - O(log N) insert
//! - O(1) len and `is_empty`
//!
//! All operations return new maps without modifying the original, and
//! structural sharing ensures memory efficiency: an insert rebuilds only
//! the nodes along the descent path.
//!
//! The map carries no comparator and no `Ord` bound. Ordering arrives
//! with each call, bundled into the [`CompareKey`] argument.
//!
//! # Examples
//!
//! ```rust
//! use bbmap::control::Optional;
//! use bbmap::persistent::{CompareKey, PersistentWeightMap};
//!
//! let map = PersistentWeightMap::new()
//!     .insert(CompareKey::from_ord(3), "three")
//!     .insert(CompareKey::from_ord(1), "one");
//!
//! assert_eq!(map.lookup(&CompareKey::from_ord(1)), Optional::Present(&"one"));
//! assert_eq!(map.lookup(&CompareKey::from_ord(2)), Optional::Absent);
//! ```
//!
//! # Internal Structure
//!
//! The tree maintains the following invariants on every `Node`:
//! 1. Size: `size == left.size + right.size + 1`
//! 2. Order: all keys in `left` compare less than `key`, all keys in
//!    `right` compare greater (by the ordering used at insertion time)
//! 3. Balance: `left.size <= DELTA * right.size` and
//!    `right.size <= DELTA * left.size`, unless
//!    `left.size + right.size <= 1`
//!
//! A rotation that structurally requires a `Node` but finds `Empty` can
//! only mean the invariants were already broken; it aborts via
//! `unreachable!` instead of recovering silently.

use std::cmp::Ordering;
use std::fmt;

use super::ReferenceCounter;
use super::compare_key::CompareKey;
use crate::control::Optional;

/// Weight-balance factor: a subtree may outweigh its sibling by at most
/// this ratio before a rotation is forced.
const DELTA: usize = 4;

/// Decides between a single and a double rotation once `DELTA` is
/// exceeded.
const RATIO: usize = 2;

// =============================================================================
// Node Definition
// =============================================================================

/// Internal tree shape: empty, or a sized node with shared children.
enum Tree<K, V> {
    Empty,
    Node {
        size: usize,
        key: K,
        value: V,
        left: ReferenceCounter<Tree<K, V>>,
        right: ReferenceCounter<Tree<K, V>>,
    },
}

impl<K, V> Tree<K, V> {
    const fn size(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node { size, .. } => *size,
        }
    }
}

// =============================================================================
// PersistentWeightMap Definition
// =============================================================================

/// A persistent (immutable) ordered map based on a weight-balanced tree.
///
/// `PersistentWeightMap` is an immutable data structure that uses
/// structural sharing to efficiently support functional programming
/// patterns. Each insert returns a new map; the original remains valid
/// and unchanged, with unaffected subtrees shared between versions.
///
/// Ordering is capability-based: every operation takes a [`CompareKey`]
/// carrying the predicates that compare its label against stored keys.
/// The map type itself places no `Ord` bound on `K`.
///
/// # Time Complexity
///
/// | Operation   | Complexity |
/// |-------------|------------|
/// | `new`       | O(1)       |
/// | `singleton` | O(1)       |
/// | `insert`    | O(log N)   |
/// | `lookup`    | O(log N)   |
/// | `contains`  | O(log N)   |
/// | `len`       | O(1)       |
/// | `is_empty`  | O(1)       |
///
/// # Examples
///
/// ```rust
/// use bbmap::control::Optional;
/// use bbmap::persistent::{CompareKey, PersistentWeightMap};
///
/// let map = PersistentWeightMap::singleton(CompareKey::string("answer"), 42);
/// assert_eq!(map.lookup(&CompareKey::string("answer")), Optional::Present(&42));
///
/// // Persistent insert: both versions stay usable
/// let updated = map.insert(CompareKey::string("question"), 6);
/// assert_eq!(map.len(), 1);
/// assert_eq!(updated.len(), 2);
/// ```
#[derive(Clone)]
pub struct PersistentWeightMap<K, V> {
    /// Root of the tree
    root: ReferenceCounter<Tree<K, V>>,
}

impl<K, V> PersistentWeightMap<K, V> {
    /// Creates a new empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bbmap::persistent::PersistentWeightMap;
    ///
    /// let map: PersistentWeightMap<String, i32> = PersistentWeightMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: ReferenceCounter::new(Tree::Empty),
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1); the root node stores its subtree size.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bbmap::persistent::{CompareKey, PersistentWeightMap};
    ///
    /// let map = PersistentWeightMap::new()
    ///     .insert(CompareKey::from_ord(1), "one")
    ///     .insert(CompareKey::from_ord(2), "two");
    /// assert_eq!(map.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.root.size()
    }

    /// Returns `true` if the map contains no entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bbmap::persistent::{CompareKey, PersistentWeightMap};
    ///
    /// let empty: PersistentWeightMap<i32, &str> = PersistentWeightMap::new();
    /// assert!(empty.is_empty());
    ///
    /// let non_empty = empty.insert(CompareKey::from_ord(1), "one");
    /// assert!(!non_empty.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: Clone, V: Clone> PersistentWeightMap<K, V> {
    /// Creates a map containing a single entry.
    ///
    /// The key's label becomes the stored key; its predicates are
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bbmap::persistent::{CompareKey, PersistentWeightMap};
    ///
    /// let map = PersistentWeightMap::singleton(CompareKey::from_ord(42), "answer");
    /// assert_eq!(map.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(key: CompareKey<K>, value: V) -> Self {
        Self {
            root: ReferenceCounter::new(Self::leaf(key.into_label(), value)),
        }
    }

    /// Inserts an entry, returning a new map.
    ///
    /// If a stored key compares equal to `key`, the entry is replaced:
    /// the new value is stored and the stored key becomes `key`'s label.
    /// When the ordering considers distinct labels equal (for example a
    /// case-insensitive string ordering), the stored key therefore
    /// changes to the newly supplied spelling.
    ///
    /// # Complexity
    ///
    /// O(log N); only nodes on the descent path are rebuilt.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bbmap::control::Optional;
    /// use bbmap::persistent::{CompareKey, PersistentWeightMap};
    ///
    /// let first = PersistentWeightMap::new().insert(CompareKey::from_ord(1), "one");
    /// let second = first.insert(CompareKey::from_ord(1), "ONE");
    ///
    /// assert_eq!(first.lookup(&CompareKey::from_ord(1)), Optional::Present(&"one"));
    /// assert_eq!(second.lookup(&CompareKey::from_ord(1)), Optional::Present(&"ONE"));
    /// ```
    #[must_use]
    pub fn insert(&self, key: CompareKey<K>, value: V) -> Self {
        Self {
            root: ReferenceCounter::new(Self::insert_into(&self.root, key, value)),
        }
    }

    /// Looks up the value stored under a key comparing equal to `key`.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bbmap::control::Optional;
    /// use bbmap::persistent::{CompareKey, PersistentWeightMap};
    ///
    /// let map = PersistentWeightMap::new().insert(CompareKey::string("hello"), 42);
    ///
    /// assert_eq!(map.lookup(&CompareKey::string("hello")), Optional::Present(&42));
    /// assert_eq!(map.lookup(&CompareKey::string("world")), Optional::Absent);
    /// ```
    #[must_use]
    pub fn lookup(&self, key: &CompareKey<K>) -> Optional<&V> {
        Self::lookup_in(&self.root, key)
    }

    /// Returns `true` if the map contains an entry for the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bbmap::persistent::{CompareKey, PersistentWeightMap};
    ///
    /// let map = PersistentWeightMap::new().insert(CompareKey::string("key"), 1);
    /// assert!(map.contains(&CompareKey::string("key")));
    /// assert!(!map.contains(&CompareKey::string("other")));
    /// ```
    #[must_use]
    pub fn contains(&self, key: &CompareKey<K>) -> bool {
        self.lookup(key).is_present()
    }

    // =========================================================================
    // Recursive Helpers
    // =========================================================================

    /// Builds a node whose size is recomputed from its children.
    fn node(
        key: K,
        value: V,
        left: ReferenceCounter<Tree<K, V>>,
        right: ReferenceCounter<Tree<K, V>>,
    ) -> Tree<K, V> {
        Tree::Node {
            size: left.size() + right.size() + 1,
            key,
            value,
            left,
            right,
        }
    }

    /// Builds a node with two empty children.
    fn leaf(key: K, value: V) -> Tree<K, V> {
        Tree::Node {
            size: 1,
            key,
            value,
            left: ReferenceCounter::new(Tree::Empty),
            right: ReferenceCounter::new(Tree::Empty),
        }
    }

    /// Recursive helper for lookup.
    fn lookup_in<'a>(tree: &'a Tree<K, V>, key: &CompareKey<K>) -> Optional<&'a V> {
        match tree {
            Tree::Empty => Optional::Absent,
            Tree::Node {
                key: stored,
                value,
                left,
                right,
                ..
            } => match key.compare(stored) {
                Ordering::Less => Self::lookup_in(left, key),
                Ordering::Greater => Self::lookup_in(right, key),
                Ordering::Equal => Optional::Present(value),
            },
        }
    }

    /// Recursive helper for insert.
    ///
    /// On the equal branch the node keeps its size and children but takes
    /// both the new value and the new key label.
    fn insert_into(tree: &Tree<K, V>, key: CompareKey<K>, value: V) -> Tree<K, V> {
        match tree {
            Tree::Empty => Self::leaf(key.into_label(), value),
            Tree::Node {
                size,
                key: stored,
                value: stored_value,
                left,
                right,
            } => match key.compare(stored) {
                Ordering::Less => Self::balance(
                    stored.clone(),
                    stored_value.clone(),
                    ReferenceCounter::new(Self::insert_into(left, key, value)),
                    ReferenceCounter::clone(right),
                ),
                Ordering::Greater => Self::balance(
                    stored.clone(),
                    stored_value.clone(),
                    ReferenceCounter::clone(left),
                    ReferenceCounter::new(Self::insert_into(right, key, value)),
                ),
                Ordering::Equal => Tree::Node {
                    size: *size,
                    key: key.into_label(),
                    value,
                    left: ReferenceCounter::clone(left),
                    right: ReferenceCounter::clone(right),
                },
            },
        }
    }

    // =========================================================================
    // Rebalancing
    // =========================================================================

    /// Rebuilds a node from its parts, rotating if one side has grown
    /// more than `DELTA` times heavier than the other.
    fn balance(
        key: K,
        value: V,
        left: ReferenceCounter<Tree<K, V>>,
        right: ReferenceCounter<Tree<K, V>>,
    ) -> Tree<K, V> {
        let left_size = left.size();
        let right_size = right.size();

        if left_size + right_size <= 1 {
            Self::node(key, value, left, right)
        } else if right_size >= DELTA * left_size {
            Self::rotate_left(key, value, left, &right)
        } else if left_size >= DELTA * right_size {
            Self::rotate_right(key, value, &left, right)
        } else {
            Self::node(key, value, left, right)
        }
    }

    /// Right side too heavy: promote from the right subtree.
    fn rotate_left(
        key: K,
        value: V,
        left: ReferenceCounter<Tree<K, V>>,
        right: &Tree<K, V>,
    ) -> Tree<K, V> {
        match right {
            Tree::Node {
                left: inner_left,
                right: inner_right,
                ..
            } => {
                if inner_left.size() < RATIO * inner_right.size() {
                    Self::single_left(key, value, left, right)
                } else {
                    Self::double_left(key, value, left, right)
                }
            }
            Tree::Empty => unreachable!("rotate_left: empty right subtree"),
        }
    }

    /// Left side too heavy: promote from the left subtree.
    fn rotate_right(
        key: K,
        value: V,
        left: &Tree<K, V>,
        right: ReferenceCounter<Tree<K, V>>,
    ) -> Tree<K, V> {
        match left {
            Tree::Node {
                left: inner_left,
                right: inner_right,
                ..
            } => {
                if inner_right.size() < RATIO * inner_left.size() {
                    Self::single_right(key, value, left, right)
                } else {
                    Self::double_right(key, value, left, right)
                }
            }
            Tree::Empty => unreachable!("rotate_right: empty left subtree"),
        }
    }

    /// Promotes the right child to the subtree root.
    fn single_left(
        key: K,
        value: V,
        left: ReferenceCounter<Tree<K, V>>,
        right: &Tree<K, V>,
    ) -> Tree<K, V> {
        match right {
            Tree::Node {
                key: right_key,
                value: right_value,
                left: right_left,
                right: right_right,
                ..
            } => {
                let demoted = Self::node(key, value, left, ReferenceCounter::clone(right_left));
                Self::node(
                    right_key.clone(),
                    right_value.clone(),
                    ReferenceCounter::new(demoted),
                    ReferenceCounter::clone(right_right),
                )
            }
            Tree::Empty => unreachable!("single_left: empty right subtree"),
        }
    }

    /// Promotes the left child to the subtree root.
    fn single_right(
        key: K,
        value: V,
        left: &Tree<K, V>,
        right: ReferenceCounter<Tree<K, V>>,
    ) -> Tree<K, V> {
        match left {
            Tree::Node {
                key: left_key,
                value: left_value,
                left: left_left,
                right: left_right,
                ..
            } => {
                let demoted = Self::node(key, value, ReferenceCounter::clone(left_right), right);
                Self::node(
                    left_key.clone(),
                    left_value.clone(),
                    ReferenceCounter::clone(left_left),
                    ReferenceCounter::new(demoted),
                )
            }
            Tree::Empty => unreachable!("single_right: empty left subtree"),
        }
    }

    /// Promotes the right child's left child, redistributing its
    /// subtrees across two rebuilt nodes.
    fn double_left(
        key: K,
        value: V,
        left: ReferenceCounter<Tree<K, V>>,
        right: &Tree<K, V>,
    ) -> Tree<K, V> {
        match right {
            Tree::Node {
                key: right_key,
                value: right_value,
                left: right_left,
                right: right_right,
                ..
            } => match right_left.as_ref() {
                Tree::Node {
                    key: pivot_key,
                    value: pivot_value,
                    left: pivot_left,
                    right: pivot_right,
                    ..
                } => {
                    let new_left =
                        Self::node(key, value, left, ReferenceCounter::clone(pivot_left));
                    let new_right = Self::node(
                        right_key.clone(),
                        right_value.clone(),
                        ReferenceCounter::clone(pivot_right),
                        ReferenceCounter::clone(right_right),
                    );
                    Self::node(
                        pivot_key.clone(),
                        pivot_value.clone(),
                        ReferenceCounter::new(new_left),
                        ReferenceCounter::new(new_right),
                    )
                }
                Tree::Empty => unreachable!("double_left: empty pivot subtree"),
            },
            Tree::Empty => unreachable!("double_left: empty right subtree"),
        }
    }

    /// Promotes the left child's right child, redistributing its
    /// subtrees across two rebuilt nodes.
    fn double_right(
        key: K,
        value: V,
        left: &Tree<K, V>,
        right: ReferenceCounter<Tree<K, V>>,
    ) -> Tree<K, V> {
        match left {
            Tree::Node {
                key: left_key,
                value: left_value,
                left: left_left,
                right: left_right,
                ..
            } => match left_right.as_ref() {
                Tree::Node {
                    key: pivot_key,
                    value: pivot_value,
                    left: pivot_left,
                    right: pivot_right,
                    ..
                } => {
                    let new_left = Self::node(
                        left_key.clone(),
                        left_value.clone(),
                        ReferenceCounter::clone(left_left),
                        ReferenceCounter::clone(pivot_left),
                    );
                    let new_right =
                        Self::node(key, value, ReferenceCounter::clone(pivot_right), right);
                    Self::node(
                        pivot_key.clone(),
                        pivot_value.clone(),
                        ReferenceCounter::new(new_left),
                        ReferenceCounter::new(new_right),
                    )
                }
                Tree::Empty => unreachable!("double_right: empty pivot subtree"),
            },
            Tree::Empty => unreachable!("double_right: empty left subtree"),
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for PersistentWeightMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for PersistentWeightMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Entries are not exported; the ordering lives in the keys the
        // caller holds, not in the map.
        formatter
            .debug_struct("PersistentWeightMap")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Auto Trait Coverage
// =============================================================================

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(PersistentWeightMap<i32, i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentWeightMap<i32, i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================


// =============================================================================
// Multithread Tests (arc feature only)
// =============================================================================

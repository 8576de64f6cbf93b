//! Persistent (immutable) data structures.
//!
//! This module provides [`PersistentWeightMap`], an immutable ordered map
//! based on a weight-balanced binary search tree, and [`CompareKey`], the
//! capability object that supplies its ordering.
//!
//! # Structural Sharing
//!
//! Every mutating operation returns a new map version. Subtrees that are
//! unaffected by the change are shared between the old and the new
//! version rather than copied, so an insert reconstructs only the
//! O(log n) nodes along the path to the change.
//!
//! # Capability Keys
//!
//! The map itself carries no comparator and places no `Ord` bound on its
//! key type. Every `insert` and `lookup` receives a [`CompareKey`]: the
//! raw key together with the predicates that order it. The ordering of a
//! map is therefore decided call by call, by the factory used to build
//! its keys.
//!
//! # Examples
//!
//! ```rust
//! use bbmap::control::Optional;
//! use bbmap::persistent::{CompareKey, PersistentWeightMap};
//!
//! let map = PersistentWeightMap::new()
//!     .insert(CompareKey::string("one"), 1)
//!     .insert(CompareKey::string("two"), 2);
//!
//! assert_eq!(map.lookup(&CompareKey::string("one")), Optional::Present(&1));
//!
//! // Structural sharing: the original map is preserved
//! let updated = map.insert(CompareKey::string("one"), 100);
//! assert_eq!(map.lookup(&CompareKey::string("one")), Optional::Present(&1));
//! assert_eq!(updated.lookup(&CompareKey::string("one")), Optional::Present(&100));
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod compare_key;
mod weight_map;

pub use compare_key::CompareKey;
pub use weight_map::PersistentWeightMap;

// =============================================================================
// Tests
// =============================================================================

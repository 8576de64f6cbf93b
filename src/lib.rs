//! # bbmap
//!
//! A persistent (immutable) ordered key/value map backed by a
//! weight-balanced binary search tree, with capability-based key
//! comparison.
//!
//! ## Overview
//!
//! Unlike `std::collections::BTreeMap`, the map type in this crate does
//! not require `K: Ord`. Ordering is supplied per call through a
//! [`CompareKey`](persistent::CompareKey) capability: a raw key bundled
//! with the predicates that compare it against stored keys. Different
//! factories produce differently-ordered keys for the same key type, so
//! the ordering of a map is decided by the keys used to build it, not by
//! the map itself.
//!
//! The crate provides:
//!
//! - **Persistent map**: [`PersistentWeightMap`](persistent::PersistentWeightMap),
//!   an immutable ordered map with structural sharing
//! - **Capability keys**: [`CompareKey`](persistent::CompareKey) and its
//!   factories for `Ord` types, strings, and case-insensitive strings
//! - **Optional values**: [`Optional`](control::Optional), the
//!   present-or-absent result of a lookup
//! - **Function composition**: [`compose`](compose::compose), `curry!`
//! - **Sequence helpers**: folds, subset tests, and flat-map unions
//!
//! ## Feature Flags
//!
//! - `compose`: Function composition utilities
//! - `control`: The `Optional` value type
//! - `persistent`: The persistent map and capability keys
//! - `sequence`: Generic sequence helpers
//! - `arc`: Share subtrees with `Arc` instead of `Rc`
//!
//! ## Example
//!
//! ```rust
//! use bbmap::control::Optional;
//! use bbmap::persistent::{CompareKey, PersistentWeightMap};
//!
//! let map = PersistentWeightMap::new()
//!     .insert(CompareKey::string("b"), 2)
//!     .insert(CompareKey::string("a"), 1);
//!
//! assert_eq!(map.lookup(&CompareKey::string("a")), Optional::Present(&1));
//! assert_eq!(map.lookup(&CompareKey::string("z")), Optional::Absent);
//!
//! // Structural sharing: earlier versions are never modified
//! let extended = map.insert(CompareKey::string("c"), 3);
//! assert_eq!(map.len(), 2);
//! assert_eq!(extended.len(), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use bbmap::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "sequence")]
pub mod sequence;

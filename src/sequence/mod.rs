//! Generic sequence helpers.
//!
//! Small, stateless slice utilities in the spirit of the folds found in
//! functional standard libraries: a fold over projected elements, a
//! boolean "all" reduction built on it, a subset test, and a flat-map
//! union. They share no state with the persistent structures in this
//! crate.

/// Folds a slice, projecting each element before combining it.
///
/// Elements are visited in order; each is passed through `project` and
/// then combined with the accumulator as `combine(projected, acc)`.
///
/// # Examples
///
/// ```
/// use bbmap::sequence::fold_by;
///
/// let words = ["alpha", "beta", "gamma"];
/// let total_len = fold_by(&words, 0, |word| word.len(), |len, acc| len + acc);
/// assert_eq!(total_len, 14);
/// ```
pub fn fold_by<A, B, C>(
    items: &[A],
    start: B,
    project: impl Fn(&A) -> C,
    combine: impl Fn(C, B) -> B,
) -> B {
    items
        .iter()
        .fold(start, |accumulated, item| combine(project(item), accumulated))
}

/// Returns `true` if the predicate holds for every element.
///
/// Defined as a boolean fold over [`fold_by`]; an empty slice yields
/// `true`.
///
/// # Examples
///
/// ```
/// use bbmap::sequence::all_by;
///
/// assert!(all_by(&[2, 4, 6], |value| value % 2 == 0));
/// assert!(!all_by(&[2, 3], |value| value % 2 == 0));
///
/// let empty: [i32; 0] = [];
/// assert!(all_by(&empty, |_| false));
/// ```
pub fn all_by<A>(items: &[A], predicate: impl Fn(&A) -> bool) -> bool {
    fold_by(items, true, predicate, |held, accumulated| {
        held && accumulated
    })
}

/// Returns `true` when every element of `candidates` occurs in
/// `universe`.
///
/// # Examples
///
/// ```
/// use bbmap::sequence::subset_of;
///
/// assert!(subset_of(&[1, 3], &[1, 2, 3]));
/// assert!(!subset_of(&[1, 4], &[1, 2, 3]));
/// assert!(subset_of(&[], &[1, 2, 3]));
/// ```
pub fn subset_of<A: PartialEq>(candidates: &[A], universe: &[A]) -> bool {
    candidates
        .iter()
        .all(|candidate| universe.contains(candidate))
}

/// Appends the flat-mapped expansion of `extension` to `base`.
///
/// Each element of `extension` is expanded into zero or more elements,
/// which are concatenated after `base` in order.
///
/// # Examples
///
/// ```
/// use bbmap::sequence::flat_map_union;
///
/// let merged = flat_map_union(vec![0], &[1, 2], |value| vec![*value, value * 10]);
/// assert_eq!(merged, vec![0, 1, 10, 2, 20]);
/// ```
pub fn flat_map_union<A, B>(
    base: Vec<A>,
    extension: &[B],
    expand: impl Fn(&B) -> Vec<A>,
) -> Vec<A> {
    let mut result = base;
    result.extend(extension.iter().flat_map(expand));
    result
}

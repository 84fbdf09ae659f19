//! Combining per-facet candidate sets into one result set.
//!
//! The observable contract is intersection: a game appears in the combined
//! result only if every supplied candidate set contains it. Two merge
//! orders are provided; they always agree on the final set and both bound
//! each pairwise step by the smaller set's size.

use std::collections::BTreeSet;

use crate::record::AppId;

/// Intersect candidate sets pairwise, walking the list left to right.
///
/// Each step iterates the smaller of the adjacent pair and probes the
/// larger, carrying the survivors forward, so a pairwise step costs
/// O(min(|A|, |B|)) probes. Zero input sets yield the empty set; a single
/// set is returned unchanged.
pub fn intersect_adjacent(mut sets: Vec<BTreeSet<AppId>>) -> BTreeSet<AppId> {
    if sets.len() <= 1 {
        return sets.pop().unwrap_or_default();
    }

    for i in 0..sets.len() - 1 {
        let survivors: BTreeSet<AppId> = {
            let (small, large) = if sets[i].len() <= sets[i + 1].len() {
                (&sets[i], &sets[i + 1])
            } else {
                (&sets[i + 1], &sets[i])
            };
            small.iter().copied().filter(|id| large.contains(id)).collect()
        };
        sets[i + 1] = survivors;
    }

    sets.pop().unwrap_or_default()
}

/// Intersect candidate sets smallest-first.
///
/// The smallest set becomes the accumulator and is filtered against the
/// remaining sets in ascending size order. Produces the same set as
/// [`intersect_adjacent`] on every input.
pub fn intersect_smallest_first(mut sets: Vec<BTreeSet<AppId>>) -> BTreeSet<AppId> {
    if sets.len() <= 1 {
        return sets.pop().unwrap_or_default();
    }

    sets.sort_by_key(BTreeSet::len);

    let mut iter = sets.into_iter();
    let mut acc = iter.next().unwrap_or_default();
    for set in iter {
        acc.retain(|id| set.contains(id));
        if acc.is_empty() {
            break;
        }
    }
    acc
}

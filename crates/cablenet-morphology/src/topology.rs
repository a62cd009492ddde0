// Copyright 2026 Cablenet Developers
// SPDX-License-Identifier: Apache-2.0

//! Tree-topology bookkeeping over flat parent-index arrays.
//!
//! A morphology arrives as one array: `parents[b]` is the index of branch
//! `b`'s parent, or [`ROOT_SENTINEL`] for a root. Everything else (levels,
//! child lists, level groups) is derived here.

use crate::types::{BranchIndex, MorphologyError, MorphologyResult, ROOT_SENTINEL};

/// Validate a parent-index array.
///
/// Accepted entries for branch `b` are the root sentinel `-1` or a parent
/// index in `0..b`. Requiring parents to strictly precede their children
/// rejects cycles and out-of-order arrays in one pass; no repair (sorting) is
/// attempted.
pub fn validate_parents(parents: &[i64]) -> MorphologyResult<()> {
    if parents.is_empty() {
        return Err(MorphologyError::EmptyMorphology);
    }
    for (branch, &p) in parents.iter().enumerate() {
        if p == ROOT_SENTINEL {
            continue;
        }
        if p < ROOT_SENTINEL {
            return Err(MorphologyError::InvalidParentSentinel { branch, value: p });
        }
        let parent = p as usize;
        if parent >= parents.len() {
            return Err(MorphologyError::ParentOutOfRange {
                branch,
                parent: p,
                num_branches: parents.len(),
            });
        }
        if parent >= branch {
            return Err(MorphologyError::ParentNotBeforeChild { branch, parent });
        }
    }
    Ok(())
}

/// Compute the level (distance from the nearest root, in branch hops) of
/// every branch.
///
/// Roots sit at level 0; every other branch is one level below its parent.
/// The input is validated first, so a branch's parent is guaranteed to have
/// been assigned a level by the time the branch is processed.
pub fn compute_levels(parents: &[i64]) -> MorphologyResult<Vec<u32>> {
    validate_parents(parents)?;
    let mut levels = vec![0u32; parents.len()];
    for (branch, &p) in parents.iter().enumerate() {
        if p != ROOT_SENTINEL {
            levels[branch] = levels[p as usize] + 1;
        }
    }
    Ok(levels)
}

/// Group branch indices by level.
///
/// Returns one `Vec` per level value from 0 to `max(levels)`; entry `l`
/// contains every branch at level `l`, in increasing branch order. The
/// external solver walks these groups root-down or tip-up, batching the
/// branches within a group.
pub fn branches_by_level(levels: &[u32]) -> Vec<Vec<BranchIndex>> {
    let num_levels = match levels.iter().max() {
        Some(&max) => max as usize + 1,
        None => return Vec::new(),
    };
    let mut groups = vec![Vec::new(); num_levels];
    for (branch, &level) in levels.iter().enumerate() {
        groups[level as usize].push(branch);
    }
    groups
}

/// Return the child branches of every branch, in increasing child order.
///
/// Expects a validated parent array (see [`validate_parents`]); typically
/// accessed through `Morphology`, which caches the result.
pub fn children_indices(parents: &[i64]) -> Vec<Vec<BranchIndex>> {
    let mut children = vec![Vec::new(); parents.len()];
    for (branch, &p) in parents.iter().enumerate() {
        if p != ROOT_SENTINEL {
            children[p as usize].push(branch);
        }
    }
    children
}

/// Number of children of every branch.
pub fn num_children(parents: &[i64]) -> Vec<usize> {
    let mut counts = vec![0usize; parents.len()];
    for &p in parents {
        if p != ROOT_SENTINEL {
            counts[p as usize] += 1;
        }
    }
    counts
}

/// For every branch, which how-many-eth child of its parent it is
/// (`None` for roots).
///
/// ```
/// use cablenet_morphology::topology::index_of_child;
///
/// let parents = [-1, 0, 0, 1, 1, 1];
/// let index = index_of_child(&parents);
/// assert_eq!(index, [None, Some(0), Some(1), Some(0), Some(1), Some(2)]);
/// ```
pub fn index_of_child(parents: &[i64]) -> Vec<Option<usize>> {
    let mut seen = vec![0usize; parents.len()];
    let mut index = Vec::with_capacity(parents.len());
    for &p in parents {
        if p == ROOT_SENTINEL {
            index.push(None);
        } else {
            let parent = p as usize;
            index.push(Some(seen[parent]));
            seen[parent] += 1;
        }
    }
    index
}

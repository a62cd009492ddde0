// Copyright 2026 Cablenet Developers
// SPDX-License-Identifier: Apache-2.0

//! Dense remapping of sparse integer ids.

use ahash::AHashMap;

/// Map an array of integers onto consecutive integers.
///
/// Equal inputs map to equal outputs and the set of outputs is exactly
/// `0..distinct_count`, ranked by the sorted order of the distinct inputs.
/// Returns the remapped array together with the distinct count.
///
/// This is how parent branch indices (sparse, repeated across siblings)
/// become dense branch-point ids.
///
/// ```
/// use cablenet_morphology::remap::remap_to_consecutive;
///
/// let (remapped, distinct) = remap_to_consecutive(&[0, 0, 1, 4, 4, 6, 6]);
/// assert_eq!(remapped, [0, 0, 1, 2, 2, 3, 3]);
/// assert_eq!(distinct, 4);
/// ```
pub fn remap_to_consecutive(ids: &[i64]) -> (Vec<usize>, usize) {
    if ids.is_empty() {
        return (Vec::new(), 0);
    }
    let mut distinct = ids.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    let rank: AHashMap<i64, usize> = distinct
        .iter()
        .enumerate()
        .map(|(rank, &value)| (value, rank))
        .collect();
    let remapped = ids.iter().map(|value| rank[value]).collect();
    (remapped, distinct.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_values_get_consecutive_ranks() {
        let (remapped, distinct) = remap_to_consecutive(&[3, 7, 3, -2]);
        assert_eq!(remapped, [1, 2, 1, 0]);
        assert_eq!(distinct, 3);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let (remapped, distinct) = remap_to_consecutive(&[]);
        assert!(remapped.is_empty());
        assert_eq!(distinct, 0);
    }

    #[test]
    fn already_consecutive_input_is_a_fixed_point() {
        let input = [0i64, 1, 1, 2, 3, 3];
        let (remapped, _) = remap_to_consecutive(&input);
        let as_i64: Vec<i64> = remapped.iter().map(|&v| v as i64).collect();
        assert_eq!(as_i64, input);
    }
}

// Copyright 2026 Cablenet Developers
// SPDX-License-Identifier: Apache-2.0

/*!
Branch arena and global compartment indexing.

A [`Morphology`] is built once from a flat parent-index array plus a
per-branch compartment count, and is immutable afterwards. Children lists,
levels, level groups, compartment offsets, and the branch-point map are all
derived at build time; conductances downstream are recomputed against this
fixed indexing whenever parameters change.
*/

use serde::Serialize;
use tracing::debug;

use crate::remap::remap_to_consecutive;
use crate::topology::{branches_by_level, children_indices, compute_levels};
use crate::types::{
    BranchIndex, BranchPointIndex, CompIndex, MorphologyError, MorphologyResult, NodeIndex,
    ROOT_SENTINEL,
};

/// One branch record in the arena. Links are indices, not references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Branch {
    /// Parent branch, `None` for roots.
    pub parent: Option<BranchIndex>,
    /// Child branches, in increasing index order.
    pub children: Vec<BranchIndex>,
    /// Distance from the nearest root, in branch hops.
    pub level: u32,
    /// Number of compartments this branch is discretized into.
    pub ncomp: usize,
    /// Global index of the branch's first compartment.
    pub comp_offset: CompIndex,
}

/// Dense branch-point ids derived from the parent array.
///
/// One branch point is materialized per distinct parent branch that has at
/// least one child; its id is the rank of the parent branch among all such
/// parents. Membership (which compartments attach) is fixed at build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchPointMap {
    /// Non-root branches, in increasing branch order.
    pub child_branches: Vec<BranchIndex>,
    /// For each entry of `child_branches`, the branch point its parent
    /// attachment belongs to.
    pub child_to_branchpoint: Vec<BranchPointIndex>,
    /// Distinct parent branches with children, sorted; entry `j` is the
    /// parent branch of branch point `j`.
    pub parent_branches: Vec<BranchIndex>,
    /// Number of branch points.
    pub count: usize,
}

/// An immutable branched cable morphology.
#[derive(Debug, Clone, PartialEq)]
pub struct Morphology {
    parents: Vec<i64>,
    branches: Vec<Branch>,
    levels: Vec<u32>,
    by_level: Vec<Vec<BranchIndex>>,
    /// Cumulative compartment counts with a leading zero; length
    /// `num_branches + 1`, last entry is the total compartment count.
    comp_offsets: Vec<CompIndex>,
    branch_points: BranchPointMap,
}

impl Morphology {
    /// Build a morphology from a parent-index array and per-branch
    /// compartment counts.
    ///
    /// The parent array must be topologically sorted (parents strictly
    /// precede children); out-of-order input is rejected, not repaired.
    pub fn new(parents: Vec<i64>, ncomp_per_branch: Vec<usize>) -> MorphologyResult<Self> {
        let levels = compute_levels(&parents)?;
        if ncomp_per_branch.len() != parents.len() {
            return Err(MorphologyError::NcompLengthMismatch {
                expected: parents.len(),
                got: ncomp_per_branch.len(),
            });
        }
        if let Some(branch) = ncomp_per_branch.iter().position(|&n| n == 0) {
            return Err(MorphologyError::ZeroCompartments { branch });
        }

        let mut comp_offsets = Vec::with_capacity(parents.len() + 1);
        comp_offsets.push(0);
        for &ncomp in &ncomp_per_branch {
            comp_offsets.push(comp_offsets.last().unwrap() + ncomp);
        }

        let children = children_indices(&parents);
        let branches = parents
            .iter()
            .zip(children)
            .enumerate()
            .map(|(b, (&p, children))| Branch {
                parent: (p != ROOT_SENTINEL).then(|| p as usize),
                children,
                level: levels[b],
                ncomp: ncomp_per_branch[b],
                comp_offset: comp_offsets[b],
            })
            .collect();

        let branch_points = build_branch_points(&parents);
        let by_level = branches_by_level(&levels);

        let morphology = Self {
            parents,
            branches,
            levels,
            by_level,
            comp_offsets,
            branch_points,
        };
        debug!(
            target: "cablenet-morphology",
            "built morphology: {} branches, {} compartments, {} branch points, {} levels",
            morphology.num_branches(),
            morphology.num_comps(),
            morphology.num_branchpoints(),
            morphology.by_level.len(),
        );
        Ok(morphology)
    }

    /// Build a morphology where every branch has the same compartment count.
    pub fn with_uniform_ncomp(parents: Vec<i64>, ncomp: usize) -> MorphologyResult<Self> {
        let counts = vec![ncomp; parents.len()];
        Self::new(parents, counts)
    }

    pub fn num_branches(&self) -> usize {
        self.branches.len()
    }

    pub fn num_comps(&self) -> usize {
        *self.comp_offsets.last().unwrap()
    }

    pub fn num_branchpoints(&self) -> usize {
        self.branch_points.count
    }

    /// Total node count of the assembled network: compartments plus
    /// branch points.
    pub fn num_nodes(&self) -> usize {
        self.num_comps() + self.num_branchpoints()
    }

    pub fn parents(&self) -> &[i64] {
        &self.parents
    }

    pub fn levels(&self) -> &[u32] {
        &self.levels
    }

    /// Branch indices grouped by level, roots first.
    pub fn branches_by_level(&self) -> &[Vec<BranchIndex>] {
        &self.by_level
    }

    pub fn branch(&self, branch: BranchIndex) -> &Branch {
        &self.branches[branch]
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn branch_points(&self) -> &BranchPointMap {
        &self.branch_points
    }

    /// (parent, child) branch index pairs, one per non-root branch.
    pub fn branch_edges(&self) -> impl Iterator<Item = (BranchIndex, BranchIndex)> + '_ {
        self.branch_points
            .child_branches
            .iter()
            .map(|&child| (self.parents[child] as usize, child))
    }

    /// Global index of a compartment given its branch and position in branch.
    pub fn comp_index(&self, branch: BranchIndex, local: usize) -> CompIndex {
        debug_assert!(local < self.branches[branch].ncomp);
        self.comp_offsets[branch] + local
    }

    /// First (proximal) compartment of a branch: the one facing the parent
    /// attachment.
    pub fn first_comp(&self, branch: BranchIndex) -> CompIndex {
        self.comp_offsets[branch]
    }

    /// Terminal (distal) compartment of a branch: the one its children
    /// attach to.
    pub fn last_comp(&self, branch: BranchIndex) -> CompIndex {
        self.comp_offsets[branch + 1] - 1
    }

    /// Owning branch of a global compartment index.
    pub fn branch_of_comp(&self, comp: CompIndex) -> BranchIndex {
        debug_assert!(comp < self.num_comps());
        self.comp_offsets.partition_point(|&offset| offset <= comp) - 1
    }

    /// Location in `[0, 1]` along the owning branch of a compartment's
    /// center, proximal end at 0.
    pub fn loc_of_index(&self, comp: CompIndex) -> f64 {
        let branch = self.branch_of_comp(comp);
        let local = comp - self.comp_offsets[branch];
        (0.5 + local as f64) / self.branches[branch].ncomp as f64
    }

    /// Compartment whose center lies closest to a location in `[0, 1]`
    /// along a branch. Point processes specified by location resolve onto a
    /// discrete compartment through this.
    pub fn local_index_of_loc(&self, branch: BranchIndex, loc: f64) -> usize {
        let ncomp = self.branches[branch].ncomp;
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for local in 0..ncomp {
            let center = (0.5 + local as f64) / ncomp as f64;
            let dist = (center - loc).abs();
            if dist < best_dist {
                best = local;
                best_dist = dist;
            }
        }
        best
    }

    /// Global node index of a branch point.
    pub fn branchpoint_node(&self, branchpoint: BranchPointIndex) -> NodeIndex {
        debug_assert!(branchpoint < self.num_branchpoints());
        self.num_comps() + branchpoint
    }
}

fn build_branch_points(parents: &[i64]) -> BranchPointMap {
    let child_branches: Vec<BranchIndex> = parents
        .iter()
        .enumerate()
        .filter(|&(_, &p)| p != ROOT_SENTINEL)
        .map(|(branch, _)| branch)
        .collect();
    let raw_parents: Vec<i64> = child_branches.iter().map(|&child| parents[child]).collect();
    let (child_to_branchpoint, count) = remap_to_consecutive(&raw_parents);

    let mut parent_branches: Vec<BranchIndex> =
        raw_parents.iter().map(|&p| p as usize).collect();
    parent_branches.sort_unstable();
    parent_branches.dedup();
    debug_assert_eq!(parent_branches.len(), count);

    BranchPointMap {
        child_branches,
        child_to_branchpoint,
        parent_branches,
        count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fork_has_one_branchpoint() {
        let morph = Morphology::with_uniform_ncomp(vec![-1, 0, 0], 4).unwrap();
        assert_eq!(morph.num_branches(), 3);
        assert_eq!(morph.num_comps(), 12);
        assert_eq!(morph.num_branchpoints(), 1);
        assert_eq!(morph.num_nodes(), 13);
        assert_eq!(morph.levels(), [0, 1, 1]);

        let bp = morph.branch_points();
        assert_eq!(bp.child_branches, [1, 2]);
        assert_eq!(bp.child_to_branchpoint, [0, 0]);
        assert_eq!(bp.parent_branches, [0]);
    }

    #[test]
    fn unbranched_cable_has_no_branchpoint() {
        let morph = Morphology::with_uniform_ncomp(vec![-1], 8).unwrap();
        assert_eq!(morph.num_branchpoints(), 0);
        assert!(morph.branch_points().child_branches.is_empty());
        assert_eq!(morph.num_nodes(), 8);
    }

    #[test]
    fn chain_of_branches_makes_one_branchpoint_per_parent() {
        // 0 -> 1 -> 2: two distinct parents with children.
        let morph = Morphology::with_uniform_ncomp(vec![-1, 0, 1], 2).unwrap();
        assert_eq!(morph.num_branchpoints(), 2);
        assert_eq!(morph.branch_points().parent_branches, [0, 1]);
        assert_eq!(morph.branch_points().child_to_branchpoint, [0, 1]);
    }

    #[test]
    fn per_branch_compartment_counts_shift_offsets() {
        let morph = Morphology::new(vec![-1, 0, 0], vec![2, 3, 1]).unwrap();
        assert_eq!(morph.num_comps(), 6);
        assert_eq!(morph.first_comp(1), 2);
        assert_eq!(morph.last_comp(1), 4);
        assert_eq!(morph.first_comp(2), 5);
        assert_eq!(morph.branch_of_comp(0), 0);
        assert_eq!(morph.branch_of_comp(4), 1);
        assert_eq!(morph.branch_of_comp(5), 2);
    }

    #[test]
    fn zero_compartment_branch_is_rejected() {
        let err = Morphology::new(vec![-1, 0], vec![4, 0]).unwrap_err();
        assert_eq!(err, MorphologyError::ZeroCompartments { branch: 1 });
    }

    #[test]
    fn ncomp_array_must_cover_all_branches() {
        let err = Morphology::new(vec![-1, 0], vec![4]).unwrap_err();
        assert_eq!(
            err,
            MorphologyError::NcompLengthMismatch { expected: 2, got: 1 }
        );
    }

    #[test]
    fn comp_locations_sit_at_segment_centers() {
        let morph = Morphology::with_uniform_ncomp(vec![-1], 4).unwrap();
        assert_eq!(morph.loc_of_index(0), 0.125);
        assert_eq!(morph.loc_of_index(3), 0.875);
        assert_eq!(morph.local_index_of_loc(0, 0.0), 0);
        assert_eq!(morph.local_index_of_loc(0, 0.9), 3);
    }

    #[test]
    fn branch_records_serialize_for_debugging() {
        let morph = Morphology::with_uniform_ncomp(vec![-1, 0], 2).unwrap();
        let json = serde_json::to_string(morph.branch_points()).unwrap();
        assert!(json.contains("child_branches"));
        let json = serde_json::to_string(morph.branch(1)).unwrap();
        assert!(json.contains("comp_offset"));
    }

    #[test]
    fn branch_edges_pair_parents_with_children() {
        let morph = Morphology::with_uniform_ncomp(vec![-1, 0, 0, 1], 1).unwrap();
        let edges: Vec<_> = morph.branch_edges().collect();
        assert_eq!(edges, [(0, 1), (0, 2), (1, 3)]);
    }
}

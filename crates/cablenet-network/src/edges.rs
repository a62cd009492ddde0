// Copyright 2026 Cablenet Developers
// SPDX-License-Identifier: Apache-2.0

/*!
Edge classification.

Every adjacency in the discretized morphology becomes a directed, tagged
edge between two global node indices: compartment-to-compartment pairs
inside a branch, and the four junction cases where a branch point meets the
parent's terminal compartment or a child's first compartment.

The edge vector is laid out in a fixed order with precomputed contiguous
partitions, so "all edges of type X" is an index range, not a filter pass:

1. c2c forward (branch-major, increasing position), then c2c backward;
2. bp2c: parent-side rows in branch-point order, then child-side rows in
   child-branch order;
3. c2bp: same parent-side/child-side order.

The conductance vector produced by the assembler is aligned with this
layout entry for entry.
*/

use std::ops::Range;

use serde::{Deserialize, Serialize};

use cablenet_morphology::{BranchIndex, BranchPointIndex, Morphology, NodeIndex};

/// Directional tag of a network edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeKind {
    /// Between two adjacent compartments of one branch; emitted once per
    /// direction since the conductance is direction-dependent.
    CompToComp,
    /// Branch point into the parent branch's terminal compartment.
    BranchpointToParentComp,
    /// Branch point into a child branch's first compartment.
    BranchpointToChildComp,
    /// Parent branch's terminal compartment into the branch point.
    ParentCompToBranchpoint,
    /// Child branch's first compartment into the branch point.
    ChildCompToBranchpoint,
}

impl EdgeKind {
    /// Whether the sink node is a zero-length branch point.
    pub fn sink_is_branchpoint(self) -> bool {
        matches!(
            self,
            EdgeKind::ParentCompToBranchpoint | EdgeKind::ChildCompToBranchpoint
        )
    }
}

/// A directed edge between two global node indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompEdge {
    pub kind: EdgeKind,
    pub source: NodeIndex,
    pub sink: NodeIndex,
}

/// Sparse-coordinate rows for the external solver.
///
/// `children` has one row per non-root branch, in branch order; `parents`
/// has one row per distinct parent-with-children, in branch-point order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeTables {
    pub children: Vec<(BranchIndex, BranchPointIndex)>,
    pub parents: Vec<(BranchIndex, BranchPointIndex)>,
}

/// The full tagged edge vector with its type partitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList {
    pub edges: Vec<CompEdge>,
    /// Compartment-to-compartment range (forward block then backward block).
    pub c2c: Range<usize>,
    /// Branchpoint-to-compartment range.
    pub bp2c: Range<usize>,
    /// Compartment-to-branchpoint range.
    pub c2bp: Range<usize>,
}

impl EdgeList {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn c2c_edges(&self) -> &[CompEdge] {
        &self.edges[self.c2c.clone()]
    }

    pub fn bp2c_edges(&self) -> &[CompEdge] {
        &self.edges[self.bp2c.clone()]
    }

    pub fn c2bp_edges(&self) -> &[CompEdge] {
        &self.edges[self.c2bp.clone()]
    }
}

/// Build the solver's sparse-coordinate tables from the branch-point map.
pub fn edge_tables(morph: &Morphology) -> EdgeTables {
    let bp = morph.branch_points();
    let children = bp
        .child_branches
        .iter()
        .zip(&bp.child_to_branchpoint)
        .map(|(&branch, &branchpoint)| (branch, branchpoint))
        .collect();
    let parents = bp
        .parent_branches
        .iter()
        .enumerate()
        .map(|(branchpoint, &branch)| (branch, branchpoint))
        .collect();
    EdgeTables { children, parents }
}

/// Enumerate and tag every adjacency of the morphology.
pub fn classify_edges(morph: &Morphology) -> EdgeList {
    let bp = morph.branch_points();
    let num_comps = morph.num_comps();

    let intra: usize = morph.branches().iter().map(|b| b.ncomp - 1).sum();
    let junction = bp.count + bp.child_branches.len();
    let mut edges = Vec::with_capacity(2 * intra + 2 * junction);

    // c2c, forward then backward. Both directions are materialized: the
    // coupling formula weighs sink and source differently.
    for branch in morph.branches() {
        for local in 0..branch.ncomp - 1 {
            let comp = branch.comp_offset + local;
            edges.push(CompEdge {
                kind: EdgeKind::CompToComp,
                source: comp,
                sink: comp + 1,
            });
        }
    }
    for branch in morph.branches() {
        for local in 0..branch.ncomp - 1 {
            let comp = branch.comp_offset + local;
            edges.push(CompEdge {
                kind: EdgeKind::CompToComp,
                source: comp + 1,
                sink: comp,
            });
        }
    }
    let c2c = 0..edges.len();

    // bp2c: parent-side, then child-side.
    for (branchpoint, &parent) in bp.parent_branches.iter().enumerate() {
        edges.push(CompEdge {
            kind: EdgeKind::BranchpointToParentComp,
            source: num_comps + branchpoint,
            sink: morph.last_comp(parent),
        });
    }
    for (&child, &branchpoint) in bp.child_branches.iter().zip(&bp.child_to_branchpoint) {
        edges.push(CompEdge {
            kind: EdgeKind::BranchpointToChildComp,
            source: num_comps + branchpoint,
            sink: morph.first_comp(child),
        });
    }
    let bp2c = c2c.end..edges.len();

    // c2bp: parent-side, then child-side.
    for (branchpoint, &parent) in bp.parent_branches.iter().enumerate() {
        edges.push(CompEdge {
            kind: EdgeKind::ParentCompToBranchpoint,
            source: morph.last_comp(parent),
            sink: num_comps + branchpoint,
        });
    }
    for (&child, &branchpoint) in bp.child_branches.iter().zip(&bp.child_to_branchpoint) {
        edges.push(CompEdge {
            kind: EdgeKind::ChildCompToBranchpoint,
            source: morph.first_comp(child),
            sink: num_comps + branchpoint,
        });
    }
    let c2bp = bp2c.end..edges.len();

    EdgeList {
        edges,
        c2c,
        bp2c,
        c2bp,
    }
}

/// Group the `children` table rows by the child branch's level.
///
/// Entry `l` holds the rows whose child sits at level `l + 1` (children
/// start at level 1). The external solver consumes one group per
/// elimination pass.
pub fn children_in_level(
    levels: &[u32],
    children: &[(BranchIndex, BranchPointIndex)],
) -> Vec<Vec<(BranchIndex, BranchPointIndex)>> {
    let max_level = levels.iter().copied().max().unwrap_or(0) as usize;
    let mut grouped = vec![Vec::new(); max_level];
    for &(child, branchpoint) in children {
        let level = levels[child] as usize;
        debug_assert!(level >= 1);
        grouped[level - 1].push((child, branchpoint));
    }
    grouped
}

/// Group the `parents` table rows by the parent branch's level.
///
/// Entry `l` holds the rows whose parent sits at level `l`; parents of
/// children never occupy the deepest level, so the grouping spans
/// `0..max(levels)`.
pub fn parents_in_level(
    levels: &[u32],
    parents: &[(BranchIndex, BranchPointIndex)],
) -> Vec<Vec<(BranchIndex, BranchPointIndex)>> {
    let max_level = levels.iter().copied().max().unwrap_or(0) as usize;
    let mut grouped = vec![Vec::new(); max_level];
    for &(parent, branchpoint) in parents {
        grouped[levels[parent] as usize].push((parent, branchpoint));
    }
    grouped
}

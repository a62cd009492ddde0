// Copyright 2026 Cablenet Developers
// SPDX-License-Identifier: Apache-2.0

/*!
Core types for morphology assembly.

Indices are plain `usize` aliases rather than newtypes: every consumer works
with flat arrays, and the three index spaces (branch, compartment, branch
point) never flow through the same function parameter.
*/

/// Index of a branch within a morphology.
pub type BranchIndex = usize;

/// Global index of a compartment (branch-major, per-branch offsets).
pub type CompIndex = usize;

/// Dense index of a branch point.
pub type BranchPointIndex = usize;

/// Global index of a node in the assembled network. Compartments come first,
/// branch points follow at `num_comps..num_comps + num_branchpoints`.
pub type NodeIndex = usize;

/// Sentinel value marking a root branch in a parent-index array.
pub const ROOT_SENTINEL: i64 = -1;

/// Result type for morphology operations
pub type MorphologyResult<T> = Result<T, MorphologyError>;

/// Errors raised while building or validating a branch tree.
///
/// All of these are permanent input errors: the parent array or the
/// discretization has to be fixed upstream, there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MorphologyError {
    #[error("morphology has no branches")]
    EmptyMorphology,

    #[error("branch {branch}: {value} is neither a parent index nor the root sentinel -1")]
    InvalidParentSentinel { branch: BranchIndex, value: i64 },

    #[error("branch {branch}: parent index {parent} is out of range for {num_branches} branches")]
    ParentOutOfRange {
        branch: BranchIndex,
        parent: i64,
        num_branches: usize,
    },

    #[error(
        "branch {branch}: parent index {parent} does not precede the branch; \
         parent arrays must be topologically sorted"
    )]
    ParentNotBeforeChild { branch: BranchIndex, parent: BranchIndex },

    #[error("branch {branch} is discretized into zero compartments")]
    ZeroCompartments { branch: BranchIndex },

    #[error("compartment counts cover {got} branches but the parent array has {expected}")]
    NcompLengthMismatch { expected: usize, got: usize },
}

/// Errors raised while validating per-compartment parameter arrays.
///
/// A non-positive radius, length, resistivity, or capacitance would turn into
/// a zero or negative conductance downstream, so validation rejects it before
/// any conductance is computed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    #[error("parameter `{name}` has {got} entries, expected {expected}")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("parameter `{name}` must be strictly positive, found {value} at compartment {index}")]
    NonPositive {
        name: &'static str,
        index: CompIndex,
        value: f64,
    },
}

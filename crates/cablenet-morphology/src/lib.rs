// Copyright 2026 Cablenet Developers
// SPDX-License-Identifier: Apache-2.0

//! # Cablenet Morphology
//!
//! Data model and index bookkeeping for branched cable structures:
//! - **Types**: index aliases, error types
//! - **Topology**: levels and level groups from flat parent-index arrays
//! - **Remap**: dense renumbering of sparse ids (branch-point ids)
//! - **Morphology**: the immutable branch arena with cached children,
//!   compartment offsets, and the branch-point map
//! - **Params**: validated per-compartment parameter arrays
//!
//! Everything here is a pure transform over immutable inputs; the network
//! crate consumes these to classify edges and assemble conductances.

pub mod morphology;
pub mod params;
pub mod remap;
pub mod topology;
pub mod types;

pub use morphology::{Branch, BranchPointMap, Morphology};
pub use params::{expand_per_branch, interpolate_endpoints, CableParams};
pub use remap::remap_to_consecutive;
pub use topology::{branches_by_level, compute_levels, validate_parents};
pub use types::{
    BranchIndex, BranchPointIndex, CompIndex, MorphologyError, MorphologyResult, NodeIndex,
    ParameterError, ROOT_SENTINEL,
};

// Copyright 2026 Cablenet Developers
// SPDX-License-Identifier: Apache-2.0

//! # Cablenet Network
//!
//! Turns a [`cablenet_morphology::Morphology`] plus per-compartment
//! parameters into the axial-conductance network an external cable-equation
//! solver consumes:
//! - **Edges**: every adjacency enumerated and tagged with a direction type
//! - **Conductance**: the pure cable coupling formulas
//! - **Assemble**: per-edge conductance vector, grouped branch-point sums,
//!   per-node diagonal totals, and the [`CableNetwork`] aggregate
//!
//! All operations are stateless transforms; per-edge evaluation is
//! data-parallel via rayon.

pub mod assemble;
pub mod conductance;
pub mod edges;

pub use assemble::{axial_conductances, group_and_sum, summed_node_conductances, CableNetwork};
pub use conductance::{
    axial_coupling_conductance, branchpoint_coupling_conductance, node_impact_weight,
    point_current_to_density, AXIAL_CONDUCTANCE_UNIT_SCALE, IMPACT_CONDITIONING_SCALE,
};
pub use edges::{
    children_in_level, classify_edges, edge_tables, parents_in_level, CompEdge, EdgeKind,
    EdgeList, EdgeTables,
};

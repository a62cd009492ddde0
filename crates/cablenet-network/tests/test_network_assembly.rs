// Copyright 2026 Cablenet Developers
// SPDX-License-Identifier: Apache-2.0

//! End-to-end assembly tests over small, hand-checkable morphologies.

use cablenet_morphology::{CableParams, Morphology};
use cablenet_network::{
    axial_conductances, classify_edges, CableNetwork, CompEdge, EdgeKind, EdgeList,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
        "expected {expected}, got {actual}"
    );
}

/// One root with two children, two compartments per branch, uniform
/// geometry: rad 1 um, len 10 um, ra 5000 ohm cm, cm 2 uF/cm^2.
///
/// Every value below is hand-computed from the formulas:
/// - c2c: 1 / (5000 * 10 + 5000 * 10) / 10 * 1e7 / 2  = 5
/// - bp2c: 1 / (5000 * 100) * 1e7 / 2                 = 10
/// - c2bp: 1 / (5000 * 10) * 1000                     = 0.02
#[test]
fn fork_assembly_matches_hand_computed_values() {
    let morph = Morphology::with_uniform_ncomp(vec![-1, 0, 0], 2).unwrap();
    let params = CableParams::uniform(6, 1.0, 10.0, 5_000.0, 2.0).unwrap();
    let net = CableNetwork::assemble(&morph, &params).unwrap();

    assert_eq!(net.num_comps, 6);
    assert_eq!(net.num_branchpoints, 1);
    assert_eq!(net.conductances.len(), 12);

    for index in net.edges.c2c.clone() {
        assert_close(net.conductances[index], 5.0);
    }
    for index in net.edges.bp2c.clone() {
        assert_close(net.conductances[index], 10.0);
    }
    for index in net.edges.c2bp.clone() {
        assert_close(net.conductances[index], 0.02);
    }

    // Diagonal totals: edges entering each node. Compartments 1, 2, 4 touch
    // the branch point and also their within-branch neighbour; the branch
    // point aggregates the three impact weights.
    let expected = [5.0, 15.0, 15.0, 5.0, 15.0, 5.0, 0.06];
    assert_eq!(net.summed.len(), expected.len());
    for (index, &value) in expected.iter().enumerate() {
        assert_close(net.summed[index], value);
    }
}

#[test]
fn fork_tables_expose_sparse_coordinates() {
    let morph = Morphology::with_uniform_ncomp(vec![-1, 0, 0], 2).unwrap();
    let params = CableParams::uniform(6, 1.0, 10.0, 5_000.0, 1.0).unwrap();
    let net = CableNetwork::assemble(&morph, &params).unwrap();
    assert_eq!(net.tables.children, [(1, 0), (2, 0)]);
    assert_eq!(net.tables.parents, [(0, 0)]);
}

#[test]
fn unbranched_cable_assembles_without_branchpoints() {
    let morph = Morphology::with_uniform_ncomp(vec![-1], 3).unwrap();
    let params = CableParams::uniform(3, 1.0, 10.0, 5_000.0, 1.0).unwrap();
    let net = CableNetwork::assemble(&morph, &params).unwrap();

    assert_eq!(net.num_branchpoints, 0);
    assert!(net.tables.children.is_empty());
    assert!(net.tables.parents.is_empty());
    // 2 interior pairs, both directions; no junction edges.
    assert_eq!(net.conductances.len(), 4);
    assert_eq!(net.summed.len(), 3);
    // Interior compartment receives from both sides.
    assert_close(net.summed[1], 2.0 * net.conductances[0]);
}

/// A single one-compartment branch has no adjacencies at all; assembly
/// degenerates to empty vectors and a zero diagonal, not an error.
#[test]
fn single_compartment_morphology_has_no_edges() {
    let morph = Morphology::with_uniform_ncomp(vec![-1], 1).unwrap();
    let params = CableParams::uniform(1, 1.0, 10.0, 5_000.0, 1.0).unwrap();
    let net = CableNetwork::assemble(&morph, &params).unwrap();
    assert!(net.edges.is_empty());
    assert_eq!(net.conductances.len(), 0);
    assert_eq!(net.summed.to_vec(), [0.0]);
}

#[test]
fn asymmetric_geometry_gives_direction_dependent_conductances() {
    let morph = Morphology::with_uniform_ncomp(vec![-1], 2).unwrap();
    let mut params = CableParams::uniform(2, 1.0, 10.0, 5_000.0, 1.0).unwrap();
    params.radius[1] = 2.0;
    let net = CableNetwork::assemble(&morph, &params).unwrap();

    let forward = net.conductances[0]; // 0 -> 1
    let backward = net.conductances[1]; // 1 -> 0
    assert!(forward > 0.0 && backward > 0.0);
    assert!((forward - backward).abs() > 1e-12);
}

/// Conductance values depend only on each edge's endpoints: permuting the
/// edge rows permutes the output vector and changes nothing else.
#[test]
fn edge_order_permutation_permutes_values() {
    let morph = Morphology::with_uniform_ncomp(vec![-1], 3).unwrap();
    let mut params = CableParams::uniform(3, 1.0, 10.0, 5_000.0, 1.0).unwrap();
    params.radius[0] = 0.5;
    params.radius[2] = 2.0;

    let edges = classify_edges(&morph);
    let conds = axial_conductances(&edges, &params, 3).unwrap();

    let permutation = [3, 1, 0, 2];
    let permuted = EdgeList {
        edges: permutation.iter().map(|&i| edges.edges[i]).collect(),
        c2c: edges.c2c.clone(),
        bp2c: edges.bp2c.clone(),
        c2bp: edges.c2bp.clone(),
    };
    let permuted_conds = axial_conductances(&permuted, &params, 3).unwrap();

    for (target, &source) in permutation.iter().enumerate() {
        assert_close(permuted_conds[target], conds[source]);
    }
}

#[test]
fn capacitance_divides_compartment_sided_conductances_only() {
    let morph = Morphology::with_uniform_ncomp(vec![-1, 0, 0], 2).unwrap();
    let base = CableParams::uniform(6, 1.0, 10.0, 5_000.0, 1.0).unwrap();
    let halved = CableParams::uniform(6, 1.0, 10.0, 5_000.0, 2.0).unwrap();

    let net_base = CableNetwork::assemble(&morph, &base).unwrap();
    let net_halved = CableNetwork::assemble(&morph, &halved).unwrap();

    for index in net_base.edges.c2c.clone().chain(net_base.edges.bp2c.clone()) {
        assert_close(net_halved.conductances[index], net_base.conductances[index] / 2.0);
    }
    // Impact weights ignore capacitance: branch points are massless.
    for index in net_base.edges.c2bp.clone() {
        assert_close(net_halved.conductances[index], net_base.conductances[index]);
    }
}

#[test]
fn edge_rows_serialize_for_debugging() {
    let edge = CompEdge {
        kind: EdgeKind::ChildCompToBranchpoint,
        source: 4,
        sink: 6,
    };
    let json = serde_json::to_string(&edge).unwrap();
    let back: CompEdge = serde_json::from_str(&json).unwrap();
    assert_eq!(edge, back);
}

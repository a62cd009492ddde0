// Copyright 2026 Cablenet Developers
// SPDX-License-Identifier: Apache-2.0

/*!
Network assembly.

Applies the conductance formulas across the classified edges and aggregates
the per-node diagonal totals. The per-edge maps are independent per edge and
run on rayon; the only sequencing constraint is that edge classification
happens before values are computed.

The c2c and bp2c entries are pre-divided by the sink compartment's membrane
capacitance, so the resulting values drop straight into
`dV/dt = (1/C) * (sum of currents)` without a further per-row division.
Branch points are massless: c2bp entries are Kirchhoff weights, not
capacitive currents, and are left undivided.
*/

use ndarray::{s, Array1};
use rayon::prelude::*;
use tracing::debug;

use cablenet_morphology::{CableParams, Morphology, ParameterError};

use crate::conductance::{
    axial_coupling_conductance, branchpoint_coupling_conductance, node_impact_weight,
    IMPACT_CONDITIONING_SCALE,
};
use crate::edges::{classify_edges, edge_tables, CompEdge, EdgeList, EdgeTables};

/// Compute the global per-edge conductance vector, aligned with the edge
/// list's fixed c2c, bp2c, c2bp layout.
///
/// Parameters are validated against `num_comps` before any value is
/// computed; a single bad radius rejects the whole call.
pub fn axial_conductances(
    edges: &EdgeList,
    params: &CableParams,
    num_comps: usize,
) -> Result<Array1<f64>, ParameterError> {
    params.validate(num_comps)?;

    let rad = &params.radius;
    let ra = &params.axial_resistivity;
    let len = &params.length;
    let cap = &params.capacitance;

    let c2c = edges.c2c_edges().par_iter().map(|e| {
        axial_coupling_conductance(
            rad[e.sink],
            rad[e.source],
            ra[e.sink],
            ra[e.source],
            len[e.sink],
            len[e.source],
        ) / cap[e.sink]
    });

    // The branch-point side has zero length; only the compartment side's
    // geometry enters.
    let bp2c = edges.bp2c_edges().par_iter().map(|e| {
        branchpoint_coupling_conductance(rad[e.sink], ra[e.sink], len[e.sink]) / cap[e.sink]
    });

    let c2bp = edges.c2bp_edges().par_iter().map(|e| {
        node_impact_weight(rad[e.source], ra[e.source], len[e.source]) * IMPACT_CONDITIONING_SCALE
    });

    let values: Vec<f64> = c2c.chain(bp2c).chain(c2bp).collect();
    Ok(Array1::from_vec(values))
}

/// Sum values into groups keyed by a dense group id.
///
/// One accumulation pass over a pre-sized accumulator; `num_groups == 0`
/// (a morphology without branch points) yields an empty vector, there is no
/// empty index space to address.
pub fn group_and_sum(values: &[f64], group_ids: &[usize], num_groups: usize) -> Array1<f64> {
    debug_assert_eq!(values.len(), group_ids.len());
    let mut sums = Array1::zeros(num_groups);
    for (&value, &group) in values.iter().zip(group_ids) {
        sums[group] += value;
    }
    sums
}

/// Per-node diagonal totals: for every node, the sum of the conductances of
/// the edges entering it.
///
/// Compartment entries accumulate the c2c and bp2c edges by sink; the
/// branch-point tail aggregates the c2bp weights per branch point.
pub fn summed_node_conductances(
    edges: &EdgeList,
    conductances: &Array1<f64>,
    num_comps: usize,
    num_branchpoints: usize,
) -> Array1<f64> {
    debug_assert_eq!(conductances.len(), edges.len());
    let mut summed = Array1::zeros(num_comps + num_branchpoints);
    for range in [edges.c2c.clone(), edges.bp2c.clone()] {
        for index in range {
            let CompEdge { sink, .. } = edges.edges[index];
            summed[sink] += conductances[index];
        }
    }

    let bp_ids: Vec<usize> = edges
        .c2bp_edges()
        .iter()
        .map(|e| e.sink - num_comps)
        .collect();
    let bp_values: Vec<f64> = edges.c2bp.clone().map(|index| conductances[index]).collect();
    let bp_sums = group_and_sum(&bp_values, &bp_ids, num_branchpoints);
    summed.slice_mut(s![num_comps..]).assign(&bp_sums);
    summed
}

/// The assembled conductance network: everything the external solver needs
/// to place sparse entries and advance the voltage equations.
#[derive(Debug, Clone, PartialEq)]
pub struct CableNetwork {
    pub num_comps: usize,
    pub num_branchpoints: usize,
    /// Tagged edge vector with type partitions.
    pub edges: EdgeList,
    /// Sparse-coordinate rows for the junction entries.
    pub tables: EdgeTables,
    /// Off-diagonal entries, aligned with `edges`.
    pub conductances: Array1<f64>,
    /// Diagonal entries per node, branch points at the tail.
    pub summed: Array1<f64>,
}

impl CableNetwork {
    /// Classify edges and compute every conductance for a morphology.
    pub fn assemble(morph: &Morphology, params: &CableParams) -> Result<Self, ParameterError> {
        let edges = classify_edges(morph);
        let tables = edge_tables(morph);
        let conductances = axial_conductances(&edges, params, morph.num_comps())?;
        let summed = summed_node_conductances(
            &edges,
            &conductances,
            morph.num_comps(),
            morph.num_branchpoints(),
        );
        debug!(
            target: "cablenet-network",
            "assembled network: {} edges ({} c2c, {} bp2c, {} c2bp), {} nodes",
            edges.len(),
            edges.c2c.len(),
            edges.bp2c.len(),
            edges.c2bp.len(),
            morph.num_nodes(),
        );
        Ok(Self {
            num_comps: morph.num_comps(),
            num_branchpoints: morph.num_branchpoints(),
            edges,
            tables,
            conductances,
            summed,
        })
    }

    pub fn num_nodes(&self) -> usize {
        self.num_comps + self.num_branchpoints
    }
}

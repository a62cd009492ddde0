// Copyright 2026 Cablenet Developers
// SPDX-License-Identifier: Apache-2.0

//! Axial conductance formulas.
//!
//! Pure scalar functions over compartment geometry (um) and material
//! properties (ohm cm). The assembler applies them elementwise across all
//! edges of a type; there is no state and no ordering requirement.

use std::f64::consts::PI;

/// Converts S / cm / um to mS / cm^2.
pub const AXIAL_CONDUCTANCE_UNIT_SCALE: f64 = 1e7;

/// Conditioning factor applied to node-impact weights before solving.
///
/// The branch-point equation `sum_i g_i (V_i - V_bp) = 0` is homogeneous, so
/// the weights are scale-free; this factor only moves them into a better
/// floating-point range and must be applied to all of them consistently.
pub const IMPACT_CONDITIONING_SCALE: f64 = 1e3;

/// Converts nA / um^2 to uA / cm^2.
pub const POINT_TO_DENSITY_SCALE: f64 = 1e5;

/// Coupling conductance between two adjacent compartments, in mS / cm^2.
///
/// Series resistance of the two half-cylinders, inverted and normalized by
/// the sink compartment's membrane area:
///
/// `g = rad_sink * rad_source^2
///      / (ra_sink * rad_source^2 * len_sink + ra_source * rad_sink^2 * len_source)
///      / len_sink`
///
/// Each half-cylinder pairs its own resistivity with its own length. The
/// formula is **not** symmetric in (sink, source): the sink's radius and
/// length also enter through the area normalization, so the two directions
/// of an edge carry different conductances and both are stored.
///
/// `radius`: um, `axial_resistivity`: ohm cm, `length`: um.
#[inline]
pub fn axial_coupling_conductance(
    rad_sink: f64,
    rad_source: f64,
    ra_sink: f64,
    ra_source: f64,
    len_sink: f64,
    len_source: f64,
) -> f64 {
    rad_sink * rad_source * rad_source
        / (ra_sink * rad_source * rad_source * len_sink
            + ra_source * rad_sink * rad_sink * len_source)
        / len_sink
        * AXIAL_CONDUCTANCE_UNIT_SCALE
}

/// Coupling conductance between a compartment and a zero-length branch
/// point, in mS / cm^2.
///
/// With one side of the junction massless the series resistance collapses to
/// the compartment's own half-cylinder, `R = ra * (len/2) / (pi * rad^2)`,
/// and normalizing the inverse by the cylinder area `2 * pi * rad * len`
/// leaves
///
/// `g = rad / (ra * len^2)`
#[inline]
pub fn branchpoint_coupling_conductance(rad: f64, ra: f64, len: f64) -> f64 {
    rad / (ra * len * len) * AXIAL_CONDUCTANCE_UNIT_SCALE
}

/// Weight with which a compartment's current enters its branch point.
///
/// Kirchhoff's current law at a massless junction only constrains the
/// *ratios* of the attached conductances, so any value proportional to the
/// longitudinal conductance works:
///
/// `w = rad^2 / (ra * len)`
#[inline]
pub fn node_impact_weight(rad: f64, ra: f64, len: f64) -> f64 {
    rad * rad / (ra * len)
}

/// Convert a point current in nA into a distributed current density in
/// uA / cm^2 over the compartment's cylinder surface.
///
/// Stimulus and synapse collaborators inject point currents; the cable
/// equation works in densities.
#[inline]
pub fn point_current_to_density(current_na: f64, radius_um: f64, length_um: f64) -> f64 {
    let area = 2.0 * PI * radius_um * length_um;
    current_na / area * POINT_TO_DENSITY_SCALE
}

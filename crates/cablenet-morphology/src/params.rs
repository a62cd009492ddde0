// Copyright 2026 Cablenet Developers
// SPDX-License-Identifier: Apache-2.0

/*!
Per-compartment parameter arrays.

Geometry and material properties live in a struct-of-arrays keyed by global
compartment index: radius (um), length (um), axial resistivity (ohm cm),
membrane capacitance (uF/cm^2). Validation is fail-fast: every value must be
strictly positive and every array must cover every compartment before any
conductance is computed from them.
*/

use ndarray::Array1;

use crate::morphology::Morphology;
use crate::types::{CompIndex, ParameterError};

/// Per-compartment geometry and material properties.
#[derive(Debug, Clone, PartialEq)]
pub struct CableParams {
    /// Compartment radius in um.
    pub radius: Array1<f64>,
    /// Compartment length in um.
    pub length: Array1<f64>,
    /// Axial resistivity in ohm cm.
    pub axial_resistivity: Array1<f64>,
    /// Membrane capacitance in uF/cm^2.
    pub capacitance: Array1<f64>,
}

impl CableParams {
    /// Build from raw arrays, validating shape and positivity against a
    /// compartment count.
    pub fn from_arrays(
        radius: Array1<f64>,
        length: Array1<f64>,
        axial_resistivity: Array1<f64>,
        capacitance: Array1<f64>,
        num_comps: usize,
    ) -> Result<Self, ParameterError> {
        let params = Self {
            radius,
            length,
            axial_resistivity,
            capacitance,
        };
        params.validate(num_comps)?;
        Ok(params)
    }

    /// Fill every compartment with the same scalar values.
    pub fn uniform(
        num_comps: usize,
        radius: f64,
        length: f64,
        axial_resistivity: f64,
        capacitance: f64,
    ) -> Result<Self, ParameterError> {
        Self::from_arrays(
            Array1::from_elem(num_comps, radius),
            Array1::from_elem(num_comps, length),
            Array1::from_elem(num_comps, axial_resistivity),
            Array1::from_elem(num_comps, capacitance),
            num_comps,
        )
    }

    pub fn num_comps(&self) -> usize {
        self.radius.len()
    }

    /// Check shapes and strict positivity.
    ///
    /// A zero or negative radius, length, resistivity, or capacitance would
    /// produce a zero, negative, or non-finite conductance downstream, so it
    /// is a hard input error, not a warning.
    pub fn validate(&self, num_comps: usize) -> Result<(), ParameterError> {
        for (name, values) in self.named_arrays() {
            if values.len() != num_comps {
                return Err(ParameterError::LengthMismatch {
                    name,
                    expected: num_comps,
                    got: values.len(),
                });
            }
            for (index, &value) in values.iter().enumerate() {
                if !(value > 0.0) || !value.is_finite() {
                    return Err(ParameterError::NonPositive { name, index, value });
                }
            }
        }
        Ok(())
    }

    /// Restrict all arrays to a subset of compartments, in the given order.
    ///
    /// Out-of-range indices panic; callers pass indices produced by the
    /// morphology they validated against.
    pub fn select(&self, indices: &[CompIndex]) -> CableParams {
        let gather = |values: &Array1<f64>| -> Array1<f64> {
            indices.iter().map(|&i| values[i]).collect()
        };
        CableParams {
            radius: gather(&self.radius),
            length: gather(&self.length),
            axial_resistivity: gather(&self.axial_resistivity),
            capacitance: gather(&self.capacitance),
        }
    }

    fn named_arrays(&self) -> [(&'static str, &Array1<f64>); 4] {
        [
            ("radius", &self.radius),
            ("length", &self.length),
            ("axial_resistivity", &self.axial_resistivity),
            ("capacitance", &self.capacitance),
        ]
    }
}

/// Expand one value per branch into one value per compartment.
pub fn expand_per_branch(
    branch_values: &[f64],
    morph: &Morphology,
) -> Result<Array1<f64>, ParameterError> {
    if branch_values.len() != morph.num_branches() {
        return Err(ParameterError::LengthMismatch {
            name: "branch_values",
            expected: morph.num_branches(),
            got: branch_values.len(),
        });
    }
    let mut values = Vec::with_capacity(morph.num_comps());
    for (branch, &value) in morph.branches().iter().zip(branch_values) {
        values.extend(std::iter::repeat(value).take(branch.ncomp));
    }
    Ok(Array1::from_vec(values))
}

/// Linearly interpolate an endpoint-valued property along the tree.
///
/// `endpoint_values[b]` is the property at the distal end of branch `b`;
/// `initial_value` is the property at the proximal end of every root.
/// Each compartment samples the line between its branch's proximal value
/// (the parent's endpoint, or `initial_value` for a root) and the branch's
/// own endpoint at the compartment center.
pub fn interpolate_endpoints(
    initial_value: f64,
    endpoint_values: &[f64],
    morph: &Morphology,
) -> Result<Array1<f64>, ParameterError> {
    if endpoint_values.len() != morph.num_branches() {
        return Err(ParameterError::LengthMismatch {
            name: "endpoint_values",
            expected: morph.num_branches(),
            got: endpoint_values.len(),
        });
    }
    let mut values = Vec::with_capacity(morph.num_comps());
    for (branch_index, branch) in morph.branches().iter().enumerate() {
        let start = match branch.parent {
            Some(parent) => endpoint_values[parent],
            None => initial_value,
        };
        let end = endpoint_values[branch_index];
        for local in 0..branch.ncomp {
            let loc = (0.5 + local as f64) / branch.ncomp as f64;
            values.push(start + (end - start) * loc);
        }
    }
    Ok(Array1::from_vec(values))
}

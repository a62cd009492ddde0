// Copyright 2026 Cablenet Developers
// SPDX-License-Identifier: Apache-2.0

//! Property tests for the conductance formulas and the assembled vectors.

use ndarray::Array1;
use proptest::prelude::*;

use cablenet_morphology::{CableParams, Morphology};
use cablenet_network::{axial_coupling_conductance, CableNetwork};

fn positive_value() -> impl Strategy<Value = f64> {
    // Realistic orders of magnitude: radii/lengths in um, resistivity in
    // ohm cm, capacitance in uF/cm^2.
    prop_oneof![0.05f64..50.0, 100.0f64..20_000.0]
}

proptest! {
    #[test]
    fn coupling_conductance_is_positive_and_finite(
        rad_sink in 0.05f64..50.0,
        rad_source in 0.05f64..50.0,
        ra_sink in 100.0f64..20_000.0,
        ra_source in 100.0f64..20_000.0,
        len_sink in 0.1f64..500.0,
        len_source in 0.1f64..500.0,
    ) {
        let g = axial_coupling_conductance(
            rad_sink, rad_source, ra_sink, ra_source, len_sink, len_source,
        );
        prop_assert!(g.is_finite());
        prop_assert!(g > 0.0);

        // The opposite direction is also positive and finite, but generally
        // a different value.
        let back = axial_coupling_conductance(
            rad_source, rad_sink, ra_source, ra_sink, len_source, len_sink,
        );
        prop_assert!(back.is_finite());
        prop_assert!(back > 0.0);
    }

    #[test]
    fn assembled_vectors_are_positive_for_positive_geometry(
        seed in prop::collection::vec(positive_value(), 8),
    ) {
        // A fork with two compartments per branch; parameters cycle through
        // the seeded values to avoid uniform symmetry.
        let morph = Morphology::with_uniform_ncomp(vec![-1, 0, 0], 2).unwrap();
        let pick = |offset: usize| -> Array1<f64> {
            (0..6).map(|i| seed[(i + offset) % seed.len()]).collect()
        };
        let params = CableParams::from_arrays(
            pick(0).mapv(|v| v.clamp(0.05, 50.0)),
            pick(1).mapv(|v| v.clamp(0.1, 500.0)),
            pick(2).mapv(|v| v.clamp(100.0, 20_000.0)),
            pick(3).mapv(|v| v.clamp(0.1, 10.0)),
            6,
        )
        .unwrap();

        let net = CableNetwork::assemble(&morph, &params).unwrap();
        prop_assert!(net.conductances.iter().all(|&g| g.is_finite() && g > 0.0));
        prop_assert!(net.summed.iter().all(|&g| g.is_finite() && g > 0.0));
    }
}

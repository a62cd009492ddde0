// Copyright 2026 Cablenet Developers
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Material defaults feed straight into conductance formulas, so the same
//! strict-positivity rule that guards parameter arrays applies here.

use crate::types::CableConfig;
use crate::{ConfigError, ConfigResult};

/// Validate a loaded configuration.
pub fn validate_config(config: &CableConfig) -> ConfigResult<()> {
    let material = &config.material;
    let positive = [
        ("material.radius_um", material.radius_um),
        ("material.length_um", material.length_um),
        (
            "material.axial_resistivity_ohm_cm",
            material.axial_resistivity_ohm_cm,
        ),
        (
            "material.capacitance_uf_per_cm2",
            material.capacitance_uf_per_cm2,
        ),
    ];
    for (name, value) in positive {
        if !(value > 0.0) || !value.is_finite() {
            return Err(ConfigError::InvalidValue(format!(
                "{name} must be strictly positive, got {value}"
            )));
        }
    }

    if config.discretization.ncomp_per_branch == 0 {
        return Err(ConfigError::InvalidValue(
            "discretization.ncomp_per_branch must be at least 1".to_string(),
        ));
    }

    Ok(())
}

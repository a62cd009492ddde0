// Copyright 2026 Cablenet Developers
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! This module defines the configuration structs that map to sections in
//! `cablenet.toml`.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CableConfig {
    pub material: MaterialConfig,
    pub discretization: DiscretizationConfig,
    pub logging: LoggingConfig,
}

/// Default geometry and material properties, applied to every compartment
/// unless per-compartment arrays override them.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MaterialConfig {
    /// Compartment radius in um.
    pub radius_um: f64,
    /// Compartment length in um.
    pub length_um: f64,
    /// Axial resistivity in ohm cm.
    pub axial_resistivity_ohm_cm: f64,
    /// Membrane capacitance in uF/cm^2.
    pub capacitance_uf_per_cm2: f64,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            radius_um: 1.0,
            length_um: 10.0,
            axial_resistivity_ohm_cm: 5_000.0,
            capacitance_uf_per_cm2: 1.0,
        }
    }
}

/// Branch discretization settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DiscretizationConfig {
    /// Compartments per branch when building uniform morphologies.
    pub ncomp_per_branch: usize,
}

impl Default for DiscretizationConfig {
    fn default() -> Self {
        Self { ncomp_per_branch: 4 }
    }
}

/// Logging configuration, consumed by the embedding application when it
/// installs a tracing subscriber.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

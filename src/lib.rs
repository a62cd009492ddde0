// Copyright 2026 Cablenet Developers
// SPDX-License-Identifier: Apache-2.0

//! # Cablenet - Compartmental Cable-Network Assembly
//!
//! Cablenet turns a branched biological cable structure (a neuron
//! morphology) into the axial-conductance network an external
//! cable-equation solver consumes: a consistent global indexing of
//! compartments, branches, and branch points; level groups for
//! dependency-respecting solve passes; and the coupling conductance of
//! every adjacent node pair.
//!
//! ## Quick Start
//!
//! ```rust
//! use cablenet::prelude::*;
//!
//! // One root branch with two children, four compartments per branch.
//! let morph = Morphology::with_uniform_ncomp(vec![-1, 0, 0], 4)?;
//! let params = CableParams::uniform(morph.num_comps(), 1.0, 10.0, 5_000.0, 1.0)?;
//!
//! let net = CableNetwork::assemble(&morph, &params)?;
//! assert_eq!(net.num_branchpoints, 1);
//! assert_eq!(net.conductances.len(), net.edges.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Components
//!
//! - [`morphology`]: branch arena, topology levels, index remapping,
//!   parameter arrays ([`cablenet_morphology`])
//! - [`network`]: edge classification and conductance assembly
//!   ([`cablenet_network`])
//! - [`config`]: TOML configuration loader ([`cablenet_config`], behind the
//!   default-on `config` feature)
//!
//! Solving the resulting linear system, channel kinetics, and file ingestion
//! (e.g. SWC reconstructions) live in external collaborators; this crate
//! only assembles the network they operate on.

pub use cablenet_morphology as morphology;
pub use cablenet_network as network;

#[cfg(feature = "config")]
pub use cablenet_config as config;

/// Re-export of the types almost every consumer touches.
pub mod prelude {
    pub use cablenet_morphology::{
        compute_levels, remap_to_consecutive, Branch, BranchPointMap, CableParams, Morphology,
        MorphologyError, ParameterError, ROOT_SENTINEL,
    };
    pub use cablenet_network::{
        classify_edges, edge_tables, group_and_sum, CableNetwork, CompEdge, EdgeKind, EdgeList,
        EdgeTables,
    };

    #[cfg(feature = "config")]
    pub use cablenet_config::{load_config, CableConfig};
}

//! Wires a circuit through ICM decomposition and the graph-state engine, and converts
//! the result to the 0-based adjacency-list output the caller sees.

use std::collections::HashSet;

use graph_state_core::{GraphState, LcoCode};
use log::info;

use crate::circuit::CircuitLike;
use crate::error::Result;
use crate::icm::{self, MeasurementMarker};
use crate::progress::ProgressReporter;

/// The final graph state produced by [`GraphStateResult::from_circuit`]: an LCO code
/// and neighbor set per vertex, plus any measurement markers collected along the way.
#[derive(Debug, Clone)]
pub struct GraphStateResult {
    pub lco: Vec<LcoCode>,
    pub adjacency: Vec<HashSet<usize>>,
    pub measurement_markers: Vec<MeasurementMarker>,
}

impl GraphStateResult {
    pub fn num_qubits(&self) -> usize {
        self.lco.len()
    }

    /// Decomposes `circuit` into ICM form and drives it through the graph-state
    /// engine, returning the final `(lco, adjacency)` pair.
    ///
    /// `emit_measurement_markers` forwards to [`icm::decompose`]. `display_progress`
    /// enables an `indicatif`-backed progress line every 1000 operations; with it
    /// `false`, no progress bar is constructed at all.
    pub fn from_circuit<C: CircuitLike>(
        circuit: &C,
        emit_measurement_markers: bool,
        display_progress: bool,
    ) -> Result<Self> {
        info!(
            "decomposing circuit: {} qubits, {} gates",
            circuit.n_qubits(),
            circuit.operations().count()
        );

        let decomposition = icm::decompose(circuit, emit_measurement_markers)?;

        info!(
            "ICM decomposition done: {} ops, {} qubits after ancilla allocation",
            decomposition.ops.len(),
            decomposition.final_qubit_count
        );

        let mut state = GraphState::new(decomposition.final_qubit_count);
        let progress = ProgressReporter::new(decomposition.ops.len(), display_progress);

        for (i, op) in decomposition.ops.iter().enumerate() {
            state.apply(*op)?;
            progress.tick(i + 1);
        }
        progress.finish();

        info!("graph-state simulation complete: {} qubits", state.num_qubits());

        let (lco, adjacency) = state.into_parts();
        Ok(Self {
            lco,
            adjacency,
            measurement_markers: decomposition.measurement_markers,
        })
    }
}

//! Rewrites a gate stream into ICM normal form: single-qubit Cliffords, CZ, CNOT, and
//! teleportation ancillas standing in for non-Clifford rotations.

use graph_state_core::{IcmCode, IcmOp};
use log::trace;

use crate::circuit::{CircuitLike, GateLike};
use crate::error::{Error, Result};

/// Where one of the 17 recognized gate names falls in the decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateClass {
    /// `I`, `X`, `Y`, `Z` — a graph no-op.
    Pauli,
    Hadamard,
    Phase,
    /// `S_Dagger = S^3`; `S^2 = Z` is itself a Pauli, so mod-Pauli this is just `S`.
    PhaseDagger,
    Cz,
    Cnot,
    /// `T`, `T_Dagger`, `RX`, `RY`, `RZ`, `SX`, `SX_Dagger` — realized via teleportation.
    Teleported,
}

/// Classifies every name in the 17-element vocabulary except `RESET`, which is routed
/// entirely through [`GateLike::is_reset`] before `classify` is ever consulted — see
/// the `is_reset` check at the top of the loop in [`decompose`]. A gate whose name is
/// `"RESET"` but whose `is_reset()` returns `false` is a contract violation on the
/// implementor's part and falls through to [`Error::UnknownGateName`] rather than a
/// silent misclassification.
fn classify(name: &str) -> Option<GateClass> {
    use GateClass::*;
    Some(match name {
        "I" | "X" | "Y" | "Z" => Pauli,
        "H" => Hadamard,
        "S" => Phase,
        "S_Dagger" => PhaseDagger,
        "CZ" => Cz,
        "CNOT" => Cnot,
        "T" | "T_Dagger" | "RX" | "RY" | "RZ" | "SX" | "SX_Dagger" => Teleported,
        _ => return None,
    })
}

/// Records that a teleported gate acted between `control` (the qubit it was applied
/// to) and `ancilla` (the fresh vertex the logical qubit moved to), for a downstream
/// resource-estimation pass to consume. The engine itself never sees these — they are
/// kept out of the `IcmOp` stream entirely, not filtered out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementMarker {
    pub gate_name: String,
    pub control: usize,
    pub ancilla: usize,
}

/// The result of decomposing a circuit into ICM form.
#[derive(Debug, Clone, Default)]
pub struct IcmDecomposition {
    pub ops: Vec<IcmOp>,
    pub measurement_markers: Vec<MeasurementMarker>,
    pub final_qubit_count: usize,
}

/// Decomposes `circuit` into ICM form. `emit_measurement_markers` controls whether
/// [`MeasurementMarker`]s are collected for teleported gates; when `false` the pass
/// runs identically but the vector stays empty, at no extra bookkeeping cost beyond the
/// `push` that is skipped.
pub fn decompose<C: CircuitLike>(circuit: &C, emit_measurement_markers: bool) -> Result<IcmDecomposition> {
    let n_qubits = circuit.n_qubits();
    let mut qubit_map: Vec<usize> = (0..n_qubits).collect();
    let mut curr_qubits = n_qubits;

    let mut ops = Vec::new();
    let mut measurement_markers = Vec::new();

    for gate in circuit.operations() {
        if gate.is_reset() {
            let (q, _) = gate.qubits();
            check_bounds(q, n_qubits)?;
            let w = curr_qubits;
            curr_qubits += 1;
            trace!("RESET on qubit {q}: remapped to fresh ancilla {w}");
            qubit_map[q] = w;
            continue;
        }

        let class = classify(gate.name()).ok_or_else(|| Error::UnknownGateName(gate.name().to_string()))?;
        let (q1, q2) = gate.qubits();
        check_bounds(q1, n_qubits)?;
        if let Some(q2) = q2 {
            check_bounds(q2, n_qubits)?;
        }

        match class {
            GateClass::Pauli => {}
            GateClass::Hadamard => ops.push(IcmOp::single(IcmCode::H, qubit_map[q1])),
            GateClass::Phase | GateClass::PhaseDagger => ops.push(IcmOp::single(IcmCode::S, qubit_map[q1])),
            GateClass::Cz | GateClass::Cnot => {
                let q2 = q2.ok_or_else(|| Error::MissingSecondQubit(gate.name().to_string()))?;
                if q1 == q2 {
                    return Err(Error::DuplicateQubitIndices(q1));
                }
                let code = if class == GateClass::Cz { IcmCode::Cz } else { IcmCode::Cnot };
                ops.push(IcmOp::double(code, qubit_map[q1], qubit_map[q2]));
            }
            GateClass::Teleported => {
                let w = curr_qubits;
                curr_qubits += 1;
                let c = qubit_map[q1];
                ops.push(IcmOp::double(IcmCode::Cnot, c, w));
                trace!("teleported {} on qubit {q1}: ancilla {w} allocated, CNOT({c}, {w})", gate.name());
                qubit_map[q1] = w;
                if emit_measurement_markers {
                    measurement_markers.push(MeasurementMarker {
                        gate_name: gate.name().to_string(),
                        control: c,
                        ancilla: w,
                    });
                }
            }
        }
    }

    Ok(IcmDecomposition {
        ops,
        measurement_markers,
        final_qubit_count: curr_qubits,
    })
}

fn check_bounds(q: usize, n_qubits: usize) -> Result<()> {
    if q >= n_qubits {
        Err(Error::QubitIndexOutOfBounds { index: q, num_qubits: n_qubits })
    } else {
        Ok(())
    }
}

use rand::Rng;
use rand::rngs::StdRng;

use necgraph::circuit::{Circuit, CircuitLike, Gate, GateLike};

const SINGLE_QUBIT_CLIFFORDS: [&str; 2] = ["H", "S"];
const PAULIS: [&str; 4] = ["I", "X", "Y", "Z"];

/// Builds a random Clifford circuit over `n_qubits` with `n_gates` gates drawn from
/// `{H, S, CZ, CNOT}`, adapted from the teacher's random-Clifford-gate approach to this
/// crate's gate vocabulary (single-qubit Cliffords plus the two 2-qubit Cliffords the
/// engine natively understands).
pub fn random_clifford_circuit(n_qubits: usize, n_gates: usize, rng: &mut StdRng) -> Circuit {
    let mut circuit = Circuit::new(n_qubits);
    for _ in 0..n_gates {
        push_random_clifford_gate(&mut circuit, n_qubits, rng);
    }
    circuit
}

fn push_random_clifford_gate(circuit: &mut Circuit, n_qubits: usize, rng: &mut StdRng) {
    if n_qubits >= 2 && rng.gen_bool(0.4) {
        let q1 = rng.gen_range(0..n_qubits);
        let mut q2 = rng.gen_range(0..n_qubits);
        while q2 == q1 {
            q2 = rng.gen_range(0..n_qubits);
        }
        let name = if rng.gen_bool(0.5) { "CZ" } else { "CNOT" };
        circuit.push(Gate::double(name, q1, q2));
    } else {
        let q = rng.gen_range(0..n_qubits);
        let name = SINGLE_QUBIT_CLIFFORDS[rng.gen_range(0..SINGLE_QUBIT_CLIFFORDS.len())];
        circuit.push(Gate::single(name, q));
    }
}

/// Wraps every gate in `source` with a random Pauli before and after, on every qubit
/// that gate touches — a conjugation that must be invisible to the graph-state output
/// (Pauli invariance).
pub fn conjugate_with_random_paulis(source: &Circuit, rng: &mut StdRng) -> Circuit {
    let mut circuit = Circuit::new(source.n_qubits());
    for gate in source.operations() {
        let (q1, q2) = gate.qubits();
        push_random_pauli(&mut circuit, q1, rng);
        if let Some(q2) = q2 {
            push_random_pauli(&mut circuit, q2, rng);
        }
        circuit.push(clone_gate(gate));
        push_random_pauli(&mut circuit, q1, rng);
        if let Some(q2) = q2 {
            push_random_pauli(&mut circuit, q2, rng);
        }
    }
    circuit
}

fn push_random_pauli(circuit: &mut Circuit, qubit: usize, rng: &mut StdRng) {
    let name = PAULIS[rng.gen_range(0..PAULIS.len())];
    circuit.push(Gate::single(name, qubit));
}

fn clone_gate(gate: &Gate) -> Gate {
    let (q1, q2) = gate.qubits();
    match q2 {
        Some(q2) => Gate::double(gate.name().to_string(), q1, q2),
        None => Gate::single(gate.name().to_string(), q1),
    }
}

mod common;

use rand::SeedableRng;
use rand::rngs::StdRng;

use necgraph::driver::GraphStateResult;

const SEEDS: [u64; 5] = [1, 2, 3, 4, 5];
const GATES_PER_CIRCUIT: usize = 200;
const QUBITS_PER_CIRCUIT: usize = 6;

#[test]
fn random_clifford_circuits_keep_the_graph_store_invariants() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let circuit = common::random_clifford_circuit(QUBITS_PER_CIRCUIT, GATES_PER_CIRCUIT, &mut rng);
        let result = GraphStateResult::from_circuit(&circuit, false, false).unwrap();

        assert_eq!(result.adjacency.len(), QUBITS_PER_CIRCUIT);
        for v in 0..QUBITS_PER_CIRCUIT {
            // No self-loops.
            assert!(!result.adjacency[v].contains(&v));
            // Symmetry: every neighbor u of v has v as a neighbor back.
            for &u in &result.adjacency[v] {
                assert!(result.adjacency[u].contains(&v));
            }
        }
    }
}

#[test]
fn random_clifford_circuits_are_undetectable_under_pauli_conjugation() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let base = common::random_clifford_circuit(QUBITS_PER_CIRCUIT, GATES_PER_CIRCUIT, &mut rng);
        let conjugated = common::conjugate_with_random_paulis(&base, &mut rng);

        let base_result = GraphStateResult::from_circuit(&base, false, false).unwrap();
        let conjugated_result = GraphStateResult::from_circuit(&conjugated, false, false).unwrap();

        assert_eq!(base_result.lco, conjugated_result.lco);
        assert_eq!(base_result.adjacency, conjugated_result.adjacency);
    }
}

#[test]
fn a_final_cz_between_two_untouched_qubits_always_reduces_both_to_pauli() {
    use necgraph::circuit::{Circuit, CircuitLike, Gate, GateLike};

    // The degenerate CZ table this test is meant to catch echoes its inputs back
    // unchanged, so every invariant above (symmetry, no self-loops, Pauli invariance)
    // passes trivially even though no real LCO reduction ever happens. Two qubits the
    // random circuit never touches stay at the initial `H` code and are mutually
    // isolated, so `cz()` hits its `almost_isolated` fast path on both and the commit
    // table alone must finish the reduction — exactly the scenario 3 case from the
    // spec (`cz_isolated[H][H]` reduces both endpoints to `Pauli`).
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let base = common::random_clifford_circuit(QUBITS_PER_CIRCUIT, GATES_PER_CIRCUIT, &mut rng);

        let mut circuit = Circuit::new(QUBITS_PER_CIRCUIT + 2);
        for gate in base.operations() {
            let (q1, q2) = gate.qubits();
            match q2 {
                Some(q2) => circuit.push(Gate::double(gate.name().to_string(), q1, q2)),
                None => circuit.push(Gate::single(gate.name().to_string(), q1)),
            }
        }
        let untouched_a = QUBITS_PER_CIRCUIT;
        let untouched_b = QUBITS_PER_CIRCUIT + 1;
        circuit.push(Gate::double("CZ", untouched_a, untouched_b));

        let result = GraphStateResult::from_circuit(&circuit, false, false).unwrap();
        assert_eq!(result.lco[untouched_a], graph_state_core::LcoCode::Pauli);
        assert_eq!(result.lco[untouched_b], graph_state_core::LcoCode::Pauli);
        assert!(result.adjacency[untouched_a].contains(&untouched_b));
    }
}

#[test]
fn appending_a_pauli_to_an_otherwise_fixed_circuit_never_changes_the_result() {
    use necgraph::circuit::Gate;

    let mut rng = StdRng::seed_from_u64(42);
    let base = common::random_clifford_circuit(QUBITS_PER_CIRCUIT, GATES_PER_CIRCUIT, &mut rng);
    let base_result = GraphStateResult::from_circuit(&base, false, false).unwrap();

    let mut with_tail_pauli = base.clone();
    with_tail_pauli.push(Gate::single("Z", 0));
    let tail_result = GraphStateResult::from_circuit(&with_tail_pauli, false, false).unwrap();

    assert_eq!(base_result.lco, tail_result.lco);
    assert_eq!(base_result.adjacency, tail_result.adjacency);
}

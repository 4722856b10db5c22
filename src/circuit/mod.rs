//! The seam between an external circuit representation and the ICM decomposer.
//!
//! The decomposer never constructs or inspects a concrete gate type of its own; it
//! only asks a [`GateLike`]/[`CircuitLike`] pair for the handful of observations it
//! needs. This mirrors how `stabilizer-ch-form-rust::api::representation::CliffordGate`
//! is the seam `necstar`'s `QuantumCircuit` builds on top of, except here the
//! consuming side supplies its own gate type rather than this crate defining one.

mod gate;

pub use gate::{Circuit, Gate};

/// One gate, as seen by the ICM decomposer.
pub trait GateLike: std::fmt::Display {
    /// One of the 17 recognized names (see `SPEC_FULL.md` S6).
    fn name(&self) -> &str;

    /// 0-based qubit indices; the second is `None` for single-qubit gates.
    fn qubits(&self) -> (usize, Option<usize>);

    /// Typed reset discriminator. The default falls back to the fragile string
    /// predicate the source representation used (`"ResetOperation"` appearing in the
    /// gate's `Display` rendering) for gate sources that have not implemented a typed
    /// marker; implementors should override this whenever they can.
    fn is_reset(&self) -> bool {
        self.to_string().contains("ResetOperation")
    }
}

/// A circuit, as seen by the ICM decomposer: a qubit count plus an ordered gate
/// stream.
pub trait CircuitLike {
    type Gate: GateLike;

    fn n_qubits(&self) -> usize;

    fn operations(&self) -> impl Iterator<Item = &Self::Gate>;
}

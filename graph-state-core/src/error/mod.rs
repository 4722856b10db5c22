use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while driving a [`crate::GraphState`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A qubit index fell outside `0..num_qubits`.
    #[error("Qubit index {index} is out of bounds for {num_qubits} qubits.")]
    QubitIndexOutOfBounds { index: usize, num_qubits: usize },

    /// A two-qubit op was given the same index twice.
    #[error("Qubit index {0} was used for both arguments of a two-qubit operation.")]
    DuplicateQubitIndices(usize),

    /// [`crate::engine::GraphState::apply`] was given an [`crate::icm_op::IcmOp`] whose
    /// code is not one of `{Pauli, H, S, Cz, Cnot}` — the only codes the engine dispatches.
    #[error("Unrecognized gate code in engine dispatch: {0:?}")]
    UnrecognizedGateCode(crate::icm_op::IcmCode),
}

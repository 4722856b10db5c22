use graph_state_core::Error as EngineError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while decomposing a circuit into ICM form or driving the resulting
/// graph-state simulation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A gate's name was not one of the 17 recognized names.
    #[error("Unknown gate name: {0}")]
    UnknownGateName(String),

    /// A qubit index on a gate fell outside `0..n_qubits` of the circuit it came from.
    #[error("Qubit index {index} is out of bounds for {num_qubits} qubits.")]
    QubitIndexOutOfBounds { index: usize, num_qubits: usize },

    /// A two-qubit gate named the same qubit twice.
    #[error("Qubit index {0} was used for both arguments of a two-qubit gate.")]
    DuplicateQubitIndices(usize),

    /// A two-qubit gate was missing its second qubit index.
    #[error("Gate {0} requires two qubit indices but only one was given.")]
    MissingSecondQubit(String),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

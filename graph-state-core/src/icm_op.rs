//! The small instruction set the graph-state engine understands.

/// A gate code the engine can dispatch, or a sentinel the engine drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IcmCode {
    /// Dropped: Paulis do not change the underlying graph.
    Pauli,
    H,
    S,
    Cz,
    Cnot,
}

/// One instruction in the dense ICM-form op stream produced by the decomposer.
///
/// `qubit2` is `None` for single-qubit ops. Qubit indices are 0-based throughout —
/// this crate, the `necgraph` ICM decomposer that produces these ops, and the
/// decomposer's own external boundary all agree on 0-based indices, so there is no
/// conversion step anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IcmOp {
    pub code: IcmCode,
    pub qubit1: usize,
    pub qubit2: Option<usize>,
}

impl IcmOp {
    pub fn single(code: IcmCode, qubit: usize) -> Self {
        Self {
            code,
            qubit1: qubit,
            qubit2: None,
        }
    }

    pub fn double(code: IcmCode, qubit1: usize, qubit2: usize) -> Self {
        Self {
            code,
            qubit1,
            qubit2: Some(qubit2),
        }
    }
}

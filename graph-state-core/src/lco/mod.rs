//! The 8-element Local Clifford Operation algebra.

mod tables;

pub(crate) use tables::{CZ_CONNECTED, CZ_ISOLATED, unpack};

/// A single-qubit Clifford dressing on a graph-state vertex, tracked modulo the Pauli
/// group. There are 8 reserved codes: `Pauli` (the trivial coset) plus the 6 non-trivial
/// cosets of the 24-element single-qubit Clifford group modulo the 4-element Pauli
/// group, plus `SqrtX` kept as its own code so CZ-table lookups stay branch-free over a
/// full byte nibble (0..=7) rather than a 6-valued range.
///
/// Only these 8 codes ever appear on a vertex at steady state. [`crate::icm_op::IcmCode`]
/// additionally carries codes for gates (`Cz`, `Cnot`) and the sentinel `Pauli` drop —
/// those never appear as an [`LcoCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LcoCode {
    Pauli = 0,
    H = 1,
    S = 2,
    Hs = 3,
    Sh = 4,
    Hsh = 5,
    Shs = 6,
    SqrtX = 7,
}

impl LcoCode {
    const ALL: [LcoCode; 8] = [
        LcoCode::Pauli,
        LcoCode::H,
        LcoCode::S,
        LcoCode::Hs,
        LcoCode::Sh,
        LcoCode::Hsh,
        LcoCode::Shs,
        LcoCode::SqrtX,
    ];

    pub(crate) const fn from_u8(code: u8) -> Self {
        Self::ALL[code as usize]
    }

    pub(crate) const fn as_u8(self) -> u8 {
        self as u8
    }

    /// `lco <- H * lco` (mod Pauli). An involution, since `H^2` is the identity.
    pub fn multiply_h(self) -> Self {
        Self::from_u8(tables::MULTIPLY_H[self.as_u8() as usize])
    }

    /// `lco <- S * lco` (mod Pauli). An involution, since `S^2 = Z` is a Pauli.
    pub fn multiply_s(self) -> Self {
        Self::from_u8(tables::MULTIPLY_S[self.as_u8() as usize])
    }

    /// `lco <- sqrt(X) * lco` (mod Pauli), applied to the vertex a
    /// [`crate::engine::GraphState::local_complement`] was called on.
    pub fn multiply_by_sqrt_x(self) -> Self {
        Self::from_u8(tables::MULTIPLY_BY_SQRT_X[self.as_u8() as usize])
    }

    /// `lco <- S * lco` (mod Pauli), applied to each neighbor of a complemented vertex.
    /// Same underlying permutation as [`Self::multiply_s`]; kept as a distinct method
    /// name because the two call sites (direct `S` gate vs. local-complement neighbor
    /// update) are conceptually different even though the group operation is identical.
    pub fn multiply_by_s(self) -> Self {
        self.multiply_s()
    }
}

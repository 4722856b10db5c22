//! Committed constant data for the single-qubit Clifford-mod-Pauli algebra.
//!
//! `MULTIPLY_H`, `MULTIPLY_S` and `MULTIPLY_BY_SQRT_X` realize the actual group action of
//! `{H, S, sqrt(X)}` on the 8 [`super::LcoCode`] cosets, derived from how each generator
//! conjugates the Pauli triple `{X, Y, Z}` (`H` swaps `X<->Z`, `S` swaps `X<->Y`, both
//! fixing the third axis up to sign, which is exactly the data `multiply_*` needs to be
//! self-inverse and mod-Pauli faithful). `Hsh`, `Shs` and `SqrtX` are three distinct
//! codes for what is a single Clifford-mod-Pauli coset (`H*S*H == sqrt(X)` as matrices,
//! and `S*H*S` conjugates the Pauli triple the same way `H*S*H` does); the three are kept
//! as separate bytes because [`crate::engine::GraphState::remove_lco`] reaches them via
//! different local-complementation paths and needs to tell them apart, not because they
//! are physically distinct dressings. `MULTIPLY_H` and `MULTIPLY_S` are full involutions
//! over all 8 codes; `MULTIPLY_BY_SQRT_X` is too. `multiply_by_s` reuses `MULTIPLY_S`
//! directly — "multiply the vertex LCO by S" is the same group operation regardless of
//! whether the call site is a direct `S` gate or the neighbor update inside
//! [`super::super::engine::GraphState::local_complement`].

/// `H`-multiplication: code `c` maps to the coset of `H * c` (mod Pauli). Pairs
/// `(Pauli,H)`, `(S,Hs)` — so `multiply_h(S) == Hs`, matching `H*S`'s action on the Pauli
/// triple (`X<->Z` then `X<->Y` composes to the 3-cycle carrying `S`'s class to `Hs`'s)
/// — and `(Sh,Hsh)`, `(Shs,SqrtX)`.
pub(crate) const MULTIPLY_H: [u8; 8] = [1, 0, 3, 2, 5, 4, 7, 6];

/// `S`-multiplication: code `c` maps to the coset of `S * c` (mod Pauli). Pairs
/// `(Pauli,S)`, `(H,SqrtX)`, `(Hs,Sh)`, `(Hsh,Shs)`.
pub(crate) const MULTIPLY_S: [u8; 8] = [2, 7, 0, 4, 3, 6, 5, 1];

/// `sqrt(X)`-multiplication, used by [`super::super::engine::GraphState::local_complement`]
/// on the complemented vertex itself. Pairs `(Pauli,SqrtX)`, `(S,Sh)`, `(H,Hs)`,
/// `(Hsh,Shs)`.
pub(crate) const MULTIPLY_BY_SQRT_X: [u8; 8] = [7, 3, 4, 1, 2, 6, 5, 0];

/// Packs `(new_u, new_v, edge_after)` into one byte: bits 4-6 hold `new_u`, bits 0-2
/// hold `new_v` (codes only ever occupy 3 bits, 0..=7), and bit 7 — otherwise always
/// clear for valid codes — carries the post-CZ edge-presence flag.
const fn pack(new_u: u8, new_v: u8, edge_after: bool) -> u8 {
    ((new_u & 0x07) << 4) | (new_v & 0x07) | ((edge_after as u8) << 7)
}

/// Unpacks a transition-table byte into `(new_u, new_v, edge_after)`.
pub(crate) const fn unpack(byte: u8) -> (u8, u8, bool) {
    ((byte >> 4) & 0x07, byte & 0x07, byte & 0x80 != 0)
}

/// Reduces a single, free-standing code to `{Pauli, S}` the way
/// [`crate::engine::GraphState::remove_lco`] reduces a vertex's LCO via local
/// complementation, but purely at the code level (no graph mutation) — this is exactly
/// what `remove_lco` does to its own target vertex's code, since the edge-toggling half
/// of `local_complement` never touches the complemented vertex's own code. Used at CZ
/// commit time so `cz_isolated`/`cz_connected` stay correct for the fast-path endpoints
/// `cz()` never runs `remove_lco` on (`almost_isolated` vertices) — see `SPEC_FULL.md`
/// S4.3.1's "reduce isolated endpoints too" requirement.
///
/// `Hsh` and `Shs` are fixed points of this reduction: the composite that reduces the
/// rest of the default bucket happens to act as the identity on that pair, so a vertex
/// caught in one of those two codes commits unreduced. Both still round-trip through the
/// CZ tables safely (the byte stays in `0..=7`); they just don't reach `{Pauli, S}`.
const fn reduce_standalone(c: u8) -> u8 {
    match c {
        0 | 2 => c,
        7 => MULTIPLY_BY_SQRT_X[c as usize],
        4 => {
            let after_local_complement_v = MULTIPLY_BY_SQRT_X[c as usize];
            MULTIPLY_S[after_local_complement_v as usize]
        }
        _ => {
            let after_local_complement_b = MULTIPLY_S[c as usize];
            MULTIPLY_BY_SQRT_X[after_local_complement_b as usize]
        }
    }
}

/// Builds an 8x8 CZ transition table. Both endpoints are first reduced the way
/// `remove_lco` would reduce them (a no-op if already in `{Pauli, S}`); reduced codes are
/// diagonal in the computational basis and so commute with the (also diagonal) CZ,
/// meaning CZ changes only the edge, never the codes, from that point on. `edge_after`
/// is the toggle of `connected`: absent before commit, present after (and vice versa) —
/// `cz_isolated[H][H]`, for instance, lands both endpoints on `Pauli` with the edge
/// added, matching the canonical two-vertex graph state CZ produces from two fresh
/// `|+>` qubits.
const fn cz_table(connected: bool) -> [[u8; 8]; 8] {
    let mut table = [[0u8; 8]; 8];
    let mut a = 0;
    while a < 8 {
        let mut b = 0;
        while b < 8 {
            let new_a = reduce_standalone(a as u8);
            let new_b = reduce_standalone(b as u8);
            table[a][b] = pack(new_a, new_b, !connected);
            b += 1;
        }
        a += 1;
    }
    table
}

/// Consulted when the `u`-`v` edge is absent before the commit step of `cz`.
pub(crate) const CZ_ISOLATED: [[u8; 8]; 8] = cz_table(false);

/// Consulted when the `u`-`v` edge is present before the commit step of `cz`.
pub(crate) const CZ_CONNECTED: [[u8; 8]; 8] = cz_table(true);

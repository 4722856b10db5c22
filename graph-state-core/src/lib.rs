//! # Graph State Core
//!
//! Low-level representation and evolution of stabilizer graph states.
//!
//! A graph state is stored as an undirected graph on qubit indices together with a
//! per-vertex **Local Clifford Operation (LCO)** code drawn from the 8 cosets of the
//! single-qubit Clifford group modulo the Pauli group. This crate maintains that pair
//! under incremental application of H, S, CZ and CNOT using the Anders-Briegel
//! algorithm: CZ is realized by first reducing both endpoints to an LCO that commutes
//! with CZ via local complementation, then committing a fixed lookup-table transition.
//!
//! This crate only understands single- and two-qubit Clifford operations expressed as
//! [`IcmOp`]; translating a full gate stream (including non-Clifford gates) into that
//! form is the job of the `necgraph` crate that depends on this one, mirroring how
//! `stabilizer-ch-form-rust` provides the CH-form primitive that `necstar` builds a
//! circuit-level API on top of.
//!
//! ## Examples
//!
//! ```rust
//! use graph_state_core::{GraphState, IcmCode, IcmOp};
//!
//! let mut state = GraphState::new(2);
//! state.apply(IcmOp::single(IcmCode::H, 0)).unwrap();
//! state.apply(IcmOp::double(IcmCode::Cnot, 0, 1)).unwrap();
//! let (lco, adj) = state.into_parts();
//! assert!(adj[0].contains(&1) && adj[1].contains(&0));
//! ```

pub mod engine;
pub mod error;
pub mod graph;
pub mod icm_op;
pub mod lco;

pub use engine::GraphState;
pub use error::{Error, Result};
pub use icm_op::{IcmCode, IcmOp};
pub use lco::LcoCode;

pub mod prelude {
    pub use crate::engine::GraphState;
    pub use crate::error::{Error, Result};
    pub use crate::icm_op::{IcmCode, IcmOp};
    pub use crate::lco::LcoCode;
}

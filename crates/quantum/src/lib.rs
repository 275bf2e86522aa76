pub mod backend;
pub mod circuit;
pub mod encoding;
pub mod error;
pub mod gates;
pub mod observables;
pub mod state;
mod env;

pub use backend::{Backend, MpsBackend, StateVectorBackend};
pub use circuit::{Circuit, Op};
pub use encoding::{datapoints_transform_to_state, encode_batch, ProductState, Rotation};
pub use error::{QuantumError, Result};
pub use state::StateVector;

use tn::{mps::MPS, truncation::Truncation};

pub fn apply_cnot(psi: &mut MPS, k: usize, trunc: Truncation) {
    psi.apply_2q_svd(k, gates::cnot(), trunc);
}

pub fn apply_swap(psi: &mut MPS, k: usize, trunc: Truncation) {
    psi.apply_2q_svd(k, gates::swap(), trunc);
}

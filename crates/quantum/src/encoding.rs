//! Classical → quantum data encoding.
//!
//! Each qubit `i` of an `n`-qubit register is prepared as `R(x_i)|0>` where
//! `R` is a single-axis rotation and `x_i` is a feature of the sample. The
//! register state is the tensor product of the per-qubit states, so encoded
//! samples are always unentangled.

use serde::{Deserialize, Serialize};

use crate::error::{QuantumError, Result};
use crate::gates::{ry, rz, C64};
use crate::state::StateVector;

/// Rotation axis used for angle encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    /// `Rz(x)|0>`: only a phase on |0>, as in the benchmark workload.
    #[default]
    Rz,
    /// `Ry(x)|0>`: amplitude encoding on the Bloch sphere meridian.
    Ry,
}

/// Per-qubit factors of an encoded sample.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductState {
    pub factors: Vec<[C64; 2]>,
}

impl ProductState {
    pub fn num_qubits(&self) -> usize {
        self.factors.len()
    }

    pub fn to_state_vector(&self) -> StateVector {
        StateVector::from_product(&self.factors)
    }
}

/// `R(x)|0>` as a row of two amplitudes.
pub fn encode_qubit(x: f64, axis: Rotation) -> [C64; 2] {
    let u = match axis {
        Rotation::Rz => rz(x),
        Rotation::Ry => ry(x),
    };
    // first column of the gate
    [u[0][0], u[1][0]]
}

/// Feature fed to qubit `i`; features wrap around when there are more qubits
/// than coordinates.
#[inline]
fn feature(point: &[f64], i: usize) -> f64 {
    point[i % point.len()]
}

pub fn encode_point(point: &[f64], n_qubits: usize, axis: Rotation) -> Vec<[C64; 2]> {
    (0..n_qubits)
        .map(|i| encode_qubit(feature(point, i), axis))
        .collect()
}

/// Encode a batch of samples into product-state factors.
pub fn encode_batch(data: &[Vec<f64>], n_qubits: usize, axis: Rotation) -> Result<Vec<ProductState>> {
    if n_qubits == 0 {
        return Err(QuantumError::NoQubits);
    }

    data.iter()
        .enumerate()
        .map(|(index, point)| {
            if point.is_empty() {
                return Err(QuantumError::EmptySample { index });
            }
            Ok(ProductState {
                factors: encode_point(point, n_qubits, axis),
            })
        })
        .collect()
}

/// Encode a batch of samples into dense `2^n` state vectors.
pub fn datapoints_transform_to_state(
    data: &[Vec<f64>],
    n_qubits: usize,
    axis: Rotation,
) -> Result<Vec<StateVector>> {
    Ok(encode_batch(data, n_qubits, axis)?
        .iter()
        .map(ProductState::to_state_vector)
        .collect())
}

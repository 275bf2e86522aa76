//! Circuit execution backends.
//!
//! A backend runs the ansatz on an encoded sample and returns ⟨Z_0⟩, the
//! expectation of `Z ⊗ I ⊗ … ⊗ I`.

use crate::circuit::{Circuit, Op};
use crate::encoding::ProductState;
use crate::error::{QuantumError, Result};
use crate::gates::{cnot_reversed, ry, rz};
use crate::observables::expect_z;
use crate::state::StateVector;
use crate::{apply_cnot, apply_swap};
use tn::{mps::MPS, truncation::Truncation};

pub trait Backend: Send + Sync {
    fn name(&self) -> &'static str;

    fn expect_z0(&self, circuit: &Circuit, params: &[f64], input: &ProductState) -> Result<f64>;
}

fn check(circuit: &Circuit, params: &[f64], input: &ProductState) -> Result<()> {
    circuit.check_params(params)?;
    if input.num_qubits() != circuit.num_qubits() {
        return Err(QuantumError::QubitMismatch {
            expected: circuit.num_qubits(),
            actual: input.num_qubits(),
        });
    }
    Ok(())
}

/// Exact dense simulation.
#[derive(Clone, Copy, Debug, Default)]
pub struct StateVectorBackend;

impl StateVectorBackend {
    pub fn run(&self, circuit: &Circuit, params: &[f64], input: &ProductState) -> Result<StateVector> {
        check(circuit, params, input)?;

        // column convention U|ψ>; a row-vector ψ·U evolution would apply Uᵀ
        let mut psi = input.to_state_vector();
        for op in circuit.ops() {
            match *op {
                Op::Rz { qubit, param } => psi.apply_1q(qubit, rz(params[param])),
                Op::Ry { qubit, param } => psi.apply_1q(qubit, ry(params[param])),
                Op::Cnot { control, target } => psi.apply_cnot(control, target),
            }
        }
        Ok(psi)
    }
}

impl Backend for StateVectorBackend {
    fn name(&self) -> &'static str {
        "statevector"
    }

    fn expect_z0(&self, circuit: &Circuit, params: &[f64], input: &ProductState) -> Result<f64> {
        Ok(self.run(circuit, params, input)?.expect_z(0))
    }
}

/// MPS simulation with SVD truncation after every two-qubit gate.
#[derive(Clone, Copy, Debug, Default)]
pub struct MpsBackend {
    pub trunc: Truncation,
}

impl MpsBackend {
    pub fn new(trunc: Truncation) -> Self {
        Self { trunc }
    }

    pub fn run(&self, circuit: &Circuit, params: &[f64], input: &ProductState) -> Result<MPS> {
        check(circuit, params, input)?;

        let mut psi = MPS::from_product(&input.factors);
        for op in circuit.ops() {
            match *op {
                Op::Rz { qubit, param } => psi.apply_1q(qubit, rz(params[param])),
                Op::Ry { qubit, param } => psi.apply_1q(qubit, ry(params[param])),
                Op::Cnot { control, target } => self.cnot(&mut psi, control, target),
            }
        }
        Ok(psi)
    }

    /// CNOT between arbitrary sites. The lower site is swapped up next to
    /// the higher one, the gate applied, and the swaps undone.
    fn cnot(&self, psi: &mut MPS, control: usize, target: usize) {
        let (lo, hi) = (control.min(target), control.max(target));

        for k in lo..hi - 1 {
            apply_swap(psi, k, self.trunc);
        }

        if control < target {
            apply_cnot(psi, hi - 1, self.trunc);
        } else {
            psi.apply_2q_svd(hi - 1, cnot_reversed(), self.trunc);
        }

        for k in (lo..hi - 1).rev() {
            apply_swap(psi, k, self.trunc);
        }
    }
}

impl Backend for MpsBackend {
    fn name(&self) -> &'static str {
        "mps"
    }

    fn expect_z0(&self, circuit: &Circuit, params: &[f64], input: &ProductState) -> Result<f64> {
        Ok(expect_z(&self.run(circuit, params, input)?, 0))
    }
}

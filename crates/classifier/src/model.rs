use quantum::{Backend, Circuit, ProductState};
use rayon::prelude::*;
use rng::ONDRng;

use crate::error::{ClassifierError, Result};

/// Standard deviation of the initial bias.
const BIAS_STD: f64 = 0.01;

/// Predictions farther than this from their label count as misclassified.
pub const ACC_TOLERANCE: f64 = 1.0;

/// Ansatz plus trainable state. `weights` holds the circuit parameters
/// followed by the bias, which is the layout optimizers step over.
#[derive(Clone, Debug)]
pub struct Classifier {
    circuit: Circuit,
    weights: Vec<f64>,
}

/// Result of one forward pass over a batch.
#[derive(Clone, Debug, PartialEq)]
pub struct Forward {
    pub loss: f64,
    pub acc: f64,
    pub predictions: Vec<f64>,
}

impl Classifier {
    /// Circuit parameters uniform in `[0, 2π]`, bias drawn from `N(0, 0.01²)`.
    pub fn new(n_qubits: usize, depth: usize, seed_paras: u64) -> Result<Self> {
        let circuit = Circuit::classifier_ansatz(n_qubits, depth)?;
        let mut rng = ONDRng::from_u64(seed_paras, "classifier-params");

        let mut weights: Vec<f64> = (0..circuit.num_params())
            .map(|_| rng.uniform(b"THETA", 0.0, 2.0 * std::f64::consts::PI))
            .collect();
        weights.push(rng.normal(b"BIAS", 0.0, BIAS_STD));

        Ok(Self { circuit, weights })
    }

    pub fn with_params(circuit: Circuit, params: Vec<f64>, bias: f64) -> Result<Self> {
        circuit.check_params(&params)?;
        let mut weights = params;
        weights.push(bias);
        Ok(Self { circuit, weights })
    }

    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    pub fn params(&self) -> &[f64] {
        &self.weights[..self.weights.len() - 1]
    }

    pub fn bias(&self) -> f64 {
        self.weights[self.weights.len() - 1]
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn weights_mut(&mut self) -> &mut [f64] {
        &mut self.weights
    }

    /// `⟨Z_0⟩ + bias` for every input.
    pub fn predict(&self, backend: &dyn Backend, inputs: &[ProductState]) -> Result<Vec<f64>> {
        let params = self.params();
        let bias = self.bias();

        inputs
            .par_iter()
            .map(|input| -> Result<f64> {
                let z = backend.expect_z0(&self.circuit, params, input)?;
                Ok(z + bias)
            })
            .collect()
    }

    pub fn forward(
        &self,
        backend: &dyn Backend,
        inputs: &[ProductState],
        labels: &[f64],
    ) -> Result<Forward> {
        check_batch(inputs.len(), labels.len())?;
        let predictions = self.predict(backend, inputs)?;
        Ok(Forward::from_predictions(predictions, labels))
    }
}

impl Forward {
    pub fn from_predictions(predictions: Vec<f64>, labels: &[f64]) -> Self {
        let loss = mse(&predictions, labels);
        let acc = accuracy(&predictions, labels);
        Self {
            loss,
            acc,
            predictions,
        }
    }
}

pub(crate) fn check_batch(inputs: usize, labels: usize) -> Result<()> {
    if inputs != labels {
        return Err(ClassifierError::LabelMismatch { inputs, labels });
    }
    if inputs == 0 {
        return Err(ClassifierError::EmptyBatch);
    }
    Ok(())
}

pub fn mse(predictions: &[f64], labels: &[f64]) -> f64 {
    let sum: f64 = predictions
        .iter()
        .zip(labels)
        .map(|(p, y)| (p - y).powi(2))
        .sum();
    sum / labels.len() as f64
}

pub fn accuracy(predictions: &[f64], labels: &[f64]) -> f64 {
    let correct = predictions
        .iter()
        .zip(labels)
        .filter(|(p, y)| (*p - *y).abs() < ACC_TOLERANCE)
        .count();
    correct as f64 / labels.len() as f64
}

use quantum::{Backend, Circuit, ProductState};
use rayon::prelude::*;

use crate::error::Result;
use crate::model::{check_batch, Classifier, Forward};

pub const SHIFT: f64 = std::f64::consts::FRAC_PI_2;

/// Parameter-shift rule, exact for gates of the form `exp(-iθσ/2)`.
pub fn parameter_shift<F, E>(theta: f64, mut energy_fn: F) -> std::result::Result<f64, E>
where
    F: FnMut(f64) -> std::result::Result<f64, E>,
{
    let plus = energy_fn(theta + SHIFT)?;
    let minus = energy_fn(theta - SHIFT)?;
    Ok(0.5 * (plus - minus))
}

/// ∂⟨Z_0⟩/∂θ_j for every circuit parameter on one input.
pub fn expectation_gradient(
    backend: &dyn Backend,
    circuit: &Circuit,
    params: &[f64],
    input: &ProductState,
) -> Result<Vec<f64>> {
    let mut shifted = params.to_vec();
    let mut grads = Vec::with_capacity(params.len());

    for j in 0..params.len() {
        let g = parameter_shift(params[j], |theta| {
            shifted[j] = theta;
            backend.expect_z0(circuit, &shifted, input)
        })?;
        shifted[j] = params[j];
        grads.push(g);
    }

    Ok(grads)
}

/// Forward pass together with ∂L/∂w over `[params…, bias]`.
#[derive(Clone, Debug)]
pub struct LossGradient {
    pub forward: Forward,
    pub grads: Vec<f64>,
}

/// Gradient of the mean squared error
/// `L = 1/N Σ_k (⟨Z_0⟩_k + b - y_k)²`.
pub fn loss_gradient(
    model: &Classifier,
    backend: &dyn Backend,
    inputs: &[ProductState],
    labels: &[f64],
) -> Result<LossGradient> {
    check_batch(inputs.len(), labels.len())?;

    let circuit = model.circuit();
    let params = model.params();
    let bias = model.bias();

    let per_sample: Vec<(f64, Vec<f64>)> = inputs
        .par_iter()
        .map(|input| -> Result<(f64, Vec<f64>)> {
            let z = backend.expect_z0(circuit, params, input)?;
            let dz = expectation_gradient(backend, circuit, params, input)?;
            Ok((z + bias, dz))
        })
        .collect::<Result<_>>()?;

    let n = labels.len() as f64;
    let mut grads = vec![0.0; params.len() + 1];
    let mut predictions = Vec::with_capacity(per_sample.len());

    for ((pred, dz), y) in per_sample.into_iter().zip(labels) {
        let scale = 2.0 * (pred - y) / n;
        for (g, d) in grads.iter_mut().zip(&dz) {
            *g += scale * d;
        }
        grads[params.len()] += scale;
        predictions.push(pred);
    }

    Ok(LossGradient {
        forward: Forward::from_predictions(predictions, labels),
        grads,
    })
}

use classifier::{
    grad::{expectation_gradient, loss_gradient, parameter_shift},
    optim::Adam,
    Classifier,
    Optimizer,
};
use quantum::{encode_batch, Backend, Circuit, Rotation, StateVectorBackend};
use std::convert::Infallible;

#[test]
fn parameter_shift_is_exact_for_sinusoids() {
    let f = |theta: f64| Ok::<_, Infallible>(0.3 * theta.cos() + 0.8 * theta.sin());

    for &theta in &[0.0, 0.4, 1.7, -2.2] {
        let g = parameter_shift(theta, f).unwrap();
        let exact = -0.3 * theta.sin() + 0.8 * theta.cos();
        assert!((g - exact).abs() < 1e-12, "theta = {}: {} vs {}", theta, g, exact);
    }
}

#[test]
fn expectation_gradient_matches_finite_differences() {
    let circuit = Circuit::classifier_ansatz(3, 2).unwrap();
    let params: Vec<f64> = (0..circuit.num_params())
        .map(|i| 0.37 * i as f64 - 1.1)
        .collect();
    let input = &encode_batch(&[vec![0.45, -0.3]], 3, Rotation::Ry).unwrap()[0];
    let backend = StateVectorBackend;

    let grads = expectation_gradient(&backend, &circuit, &params, input).unwrap();
    assert_eq!(grads.len(), params.len());

    let h = 1e-6;
    for j in 0..params.len() {
        let mut plus = params.clone();
        let mut minus = params.clone();
        plus[j] += h;
        minus[j] -= h;
        let fd = (backend.expect_z0(&circuit, &plus, input).unwrap()
            - backend.expect_z0(&circuit, &minus, input).unwrap())
            / (2.0 * h);
        assert!((grads[j] - fd).abs() < 1e-6, "param {}: {} vs {}", j, grads[j], fd);
    }
}

#[test]
fn bias_gradient_is_mean_residual() {
    let circuit = Circuit::classifier_ansatz(2, 1).unwrap();
    let params = vec![0.2; circuit.num_params()];
    let model = Classifier::with_params(circuit, params, 0.1).unwrap();

    let data = vec![vec![0.1, 0.2], vec![-0.6, 0.4], vec![0.9, -0.9]];
    let labels = [0.0, 1.0, 1.0];
    let inputs = encode_batch(&data, 2, Rotation::Ry).unwrap();

    let lg = loss_gradient(&model, &StateVectorBackend, &inputs, &labels).unwrap();
    let expected: f64 = lg
        .forward
        .predictions
        .iter()
        .zip(&labels)
        .map(|(p, y)| 2.0 * (p - y) / 3.0)
        .sum();

    assert_eq!(lg.grads.len(), model.weights().len());
    assert!((lg.grads[lg.grads.len() - 1] - expected).abs() < 1e-12);
}

#[test]
fn descent_reduces_loss_from_a_bad_start() {
    let circuit = Circuit::classifier_ansatz(2, 1).unwrap();
    let n_params = circuit.num_params();
    let mut model = Classifier::with_params(circuit, vec![0.0; n_params], -2.0).unwrap();

    let data = vec![vec![0.1, 0.2], vec![-0.8, 0.7], vec![0.9, -0.5], vec![0.05, -0.1]];
    let labels = [0.0, 1.0, 1.0, 0.0];
    let inputs = encode_batch(&data, 2, Rotation::Ry).unwrap();
    let backend = StateVectorBackend;

    let initial = model.forward(&backend, &inputs, &labels).unwrap().loss;

    let mut opt = Adam::new(0.1, model.weights().len());
    for _ in 0..60 {
        let lg = loss_gradient(&model, &backend, &inputs, &labels).unwrap();
        opt.step(model.weights_mut(), &lg.grads);
    }

    let fin = model.forward(&backend, &inputs, &labels).unwrap().loss;
    assert!(fin < 0.5 * initial, "initial = {}, final = {}", initial, fin);
}

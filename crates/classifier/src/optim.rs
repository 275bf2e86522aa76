use serde::{Deserialize, Serialize};

pub trait Optimizer: Send {
    fn name(&self) -> &'static str;

    /// One update of `params` against `grads` (same length).
    fn step(&mut self, params: &mut [f64], grads: &[f64]);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizerKind {
    #[default]
    Adam,
    Sgd,
    RmsProp,
}

impl OptimizerKind {
    pub fn build(self, lr: f64, n_params: usize) -> Box<dyn Optimizer> {
        match self {
            OptimizerKind::Adam => Box::new(Adam::new(lr, n_params)),
            OptimizerKind::Sgd => Box::new(Sgd { lr }),
            OptimizerKind::RmsProp => Box::new(RmsProp::new(lr, n_params)),
        }
    }
}

pub struct Sgd {
    pub lr: f64,
}

impl Optimizer for Sgd {
    fn name(&self) -> &'static str {
        "sgd"
    }

    fn step(&mut self, params: &mut [f64], grads: &[f64]) {
        for (p, g) in params.iter_mut().zip(grads) {
            *p -= self.lr * g;
        }
    }
}

pub struct Adam {
    lr: f64,
    beta1: f64,
    beta2: f64,
    eps: f64,
    t: usize,
    m: Vec<f64>,
    v: Vec<f64>,
}

impl Adam {
    pub fn new(lr: f64, n_params: usize) -> Self {
        Self {
            lr,
            beta1: 0.9,
            beta2: 0.999,
            eps: 1e-8,
            t: 0,
            m: vec![0.0; n_params],
            v: vec![0.0; n_params],
        }
    }
}

impl Optimizer for Adam {
    fn name(&self) -> &'static str {
        "adam"
    }

    fn step(&mut self, params: &mut [f64], grads: &[f64]) {
        assert_eq!(params.len(), self.m.len(), "Adam state size mismatch");

        self.t += 1;
        let t = self.t as i32;
        let bc1 = 1.0 - self.beta1.powi(t);
        let bc2 = 1.0 - self.beta2.powi(t);

        for j in 0..params.len() {
            let g = grads[j];
            self.m[j] = self.beta1 * self.m[j] + (1.0 - self.beta1) * g;
            self.v[j] = self.beta2 * self.v[j] + (1.0 - self.beta2) * g * g;
            let m_hat = self.m[j] / bc1;
            let v_hat = self.v[j] / bc2;
            params[j] -= self.lr * m_hat / (v_hat.sqrt() + self.eps);
        }
    }
}

pub struct RmsProp {
    lr: f64,
    rho: f64,
    eps: f64,
    v: Vec<f64>,
}

impl RmsProp {
    pub fn new(lr: f64, n_params: usize) -> Self {
        Self {
            lr,
            rho: 0.95,
            eps: 1e-6,
            v: vec![0.0; n_params],
        }
    }
}

impl Optimizer for RmsProp {
    fn name(&self) -> &'static str {
        "rmsprop"
    }

    fn step(&mut self, params: &mut [f64], grads: &[f64]) {
        assert_eq!(params.len(), self.v.len(), "RMSprop state size mismatch");

        for j in 0..params.len() {
            let g = grads[j];
            self.v[j] = self.rho * self.v[j] + (1.0 - self.rho) * g * g;
            params[j] -= self.lr * g / (self.v[j] + self.eps).sqrt();
        }
    }
}

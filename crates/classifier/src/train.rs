use quantum::{encode_batch, Backend, MpsBackend, Rotation, StateVectorBackend};
use serde::{Deserialize, Serialize};
use tn::truncation::Truncation;
use tracing::{debug, info};

use crate::dataset::circle_data_point_generator;
use crate::error::{ClassifierError, Result};
use crate::grad::loss_gradient;
use crate::model::Classifier;
use crate::optim::OptimizerKind;

/// Test accuracy is sampled when the global iteration counter hits this
/// residue modulo [`EVAL_PERIOD`].
pub const EVAL_PERIOD: usize = 30;
pub const EVAL_OFFSET: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    StateVector,
    Mps { max_bond: usize, cutoff: f64 },
}

impl BackendKind {
    pub fn build(self) -> Box<dyn Backend> {
        match self {
            BackendKind::StateVector => Box::new(StateVectorBackend),
            BackendKind::Mps { max_bond, cutoff } => {
                Box::new(MpsBackend::new(Truncation { max_bond, cutoff }))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    /// training set size
    pub n_train: usize,
    /// test set size
    pub n_test: usize,
    /// width of the band around the decision circle with no samples
    pub gap: f64,
    pub n_qubits: usize,
    pub depth: usize,
    pub epochs: usize,
    pub lr: f64,
    pub batch: usize,
    pub seed_paras: u64,
    pub seed_data: u64,
    pub optimizer: OptimizerKind,
    pub encoding: Rotation,
    pub backend: BackendKind,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            n_train: 200,
            n_test: 100,
            gap: 0.01,
            n_qubits: 4,
            depth: 1,
            epochs: 5,
            lr: 0.1,
            batch: 20,
            seed_paras: 19,
            seed_data: 2,
            optimizer: OptimizerKind::Adam,
            encoding: Rotation::Rz,
            backend: BackendKind::StateVector,
        }
    }
}

impl TrainConfig {
    fn validate(&self) -> Result<()> {
        if self.batch == 0 {
            return Err(ClassifierError::ZeroBatch);
        }
        if self.batch > self.n_train {
            return Err(ClassifierError::BatchTooLarge {
                batch: self.batch,
                n_train: self.n_train,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct TrainingSummary {
    /// `(itr + epoch * n_train)` at each test evaluation
    pub iterations: Vec<usize>,
    pub test_acc: Vec<f64>,
    /// optimizer steps taken
    pub steps: usize,
    pub final_loss: f64,
    pub final_train_acc: f64,
    #[serde(skip)]
    pub model: Classifier,
}

/// Train the classifier on the circle dataset.
///
/// The training set is split into `n_train / batch` batches per epoch (a
/// trailing partial batch is dropped). Each batch is encoded, run forward,
/// differentiated and stepped; the test set is evaluated every
/// [`EVAL_PERIOD`] iterations.
pub fn q_classifier(cfg: &TrainConfig) -> Result<TrainingSummary> {
    cfg.validate()?;

    let data = circle_data_point_generator(cfg.n_train, cfg.n_test, cfg.gap, cfg.seed_data)?;
    let n_train = data.train_x.len();

    let mut model = Classifier::new(cfg.n_qubits, cfg.depth, cfg.seed_paras)?;
    let backend = cfg.backend.build();
    let mut opt = cfg.optimizer.build(cfg.lr, model.weights().len());

    info!(
        qubits = cfg.n_qubits,
        depth = cfg.depth,
        params = model.weights().len(),
        backend = backend.name(),
        optimizer = opt.name(),
        "training classifier"
    );

    let mut summary = TrainingSummary {
        iterations: Vec::new(),
        test_acc: Vec::new(),
        steps: 0,
        final_loss: f64::NAN,
        final_train_acc: f64::NAN,
        model: model.clone(),
    };

    let mut i = 0usize;
    for ep in 0..cfg.epochs {
        for itr in 0..n_train / cfg.batch {
            i += 1;
            let range = itr * cfg.batch..(itr + 1) * cfg.batch;
            let inputs = encode_batch(&data.train_x[range.clone()], cfg.n_qubits, cfg.encoding)?;
            let labels = &data.train_y[range];

            let lg = loss_gradient(&model, backend.as_ref(), &inputs, labels)?;
            debug!(epoch = ep, iter = itr, loss = lg.forward.loss, "batch");

            if i % EVAL_PERIOD == EVAL_OFFSET && !data.test_x.is_empty() {
                let test_inputs = encode_batch(&data.test_x, cfg.n_qubits, cfg.encoding)?;
                let test = model.forward(backend.as_ref(), &test_inputs, &data.test_y)?;
                info!(
                    "epoch: {} iter: {} loss: {:.4} test acc: {:.4}",
                    ep, itr, lg.forward.loss, test.acc
                );
                summary.iterations.push(itr + ep * n_train);
                summary.test_acc.push(test.acc);
            }

            opt.step(model.weights_mut(), &lg.grads);
            summary.steps += 1;
            summary.final_loss = lg.forward.loss;
            summary.final_train_acc = lg.forward.acc;
        }
    }

    summary.model = model;
    Ok(summary)
}

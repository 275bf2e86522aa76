use std::time::Instant;

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::train::{q_classifier, TrainConfig, TrainingSummary};

#[derive(Clone, Debug, Serialize)]
pub struct BenchResult {
    pub config: TrainConfig,
    /// wall-clock seconds for data generation plus training
    pub elapsed_secs: f64,
    pub summary: TrainingSummary,
}

/// Time a full training run with the default benchmark settings, varying
/// only the register size and the workload.
pub fn bench(n_qubits: usize, epochs: usize, batch: usize, train_samples: usize) -> Result<BenchResult> {
    let cfg = TrainConfig {
        n_qubits,
        epochs,
        batch,
        n_train: train_samples,
        ..TrainConfig::default()
    };
    bench_with(&cfg)
}

pub fn bench_with(cfg: &TrainConfig) -> Result<BenchResult> {
    let start = Instant::now();
    let summary = q_classifier(cfg)?;
    let elapsed_secs = start.elapsed().as_secs_f64();

    info!(
        "Benchmark: n={}, epochs={}, batch={}, train={} → {:.3} s",
        cfg.n_qubits, cfg.epochs, cfg.batch, cfg.n_train, elapsed_secs
    );

    Ok(BenchResult {
        config: cfg.clone(),
        elapsed_secs,
        summary,
    })
}

//! Variational quantum binary classifier and its training-time benchmark.

pub mod bench;
pub mod dataset;
pub mod error;
pub mod grad;
pub mod model;
pub mod optim;
pub mod output;
pub mod train;

pub use bench::{bench, bench_with, BenchResult};
pub use dataset::{circle_data_point_generator, Dataset};
pub use error::{ClassifierError, Result};
pub use model::{Classifier, Forward};
pub use optim::{Optimizer, OptimizerKind};
pub use train::{q_classifier, BackendKind, TrainConfig, TrainingSummary};

use quantum::QuantumError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClassifierError {
    #[error(transparent)]
    Quantum(#[from] QuantumError),

    #[error("batch size must be positive")]
    ZeroBatch,

    #[error("batch size {batch} exceeds training set size {n_train}")]
    BatchTooLarge { batch: usize, n_train: usize },

    #[error("{inputs} inputs but {labels} labels")]
    LabelMismatch { inputs: usize, labels: usize },

    #[error("empty batch")]
    EmptyBatch,

    #[error("boundary gap {0} leaves no room for both classes")]
    InvalidGap(f64),
}

pub type Result<T> = std::result::Result<T, ClassifierError>;

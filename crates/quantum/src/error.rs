use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuantumError {
    #[error("classifier ansatz needs at least 2 qubits, got {0}")]
    TooFewQubits(usize),

    #[error("cannot encode into zero qubits")]
    NoQubits,

    #[error("sample {index} has no features")]
    EmptySample { index: usize },

    #[error("expected {expected} circuit parameters, got {actual}")]
    ParamCount { expected: usize, actual: usize },

    #[error("input has {actual} qubits but the circuit acts on {expected}")]
    QubitMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, QuantumError>;

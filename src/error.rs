use thiserror::Error;

#[derive(Debug, Error)]
pub enum MolForgeError {
    #[error("Unknown symbol {symbol:?}: not in vocabulary")]
    UnknownSymbol { symbol: char },

    #[error("Reserved symbol {symbol:?} present in corpus")]
    ReservedSymbol { symbol: char },

    #[error("Index {index} out of range for vocabulary of size {vocab_size}")]
    IndexOutOfRange { index: usize, vocab_size: usize },

    #[error("Sequence length exceeded: max {max}, actual {actual}")]
    SequenceLengthExceeded { max: usize, actual: usize },

    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch { expected: Vec<usize>, actual: Vec<usize> },

    #[error("Row count mismatch: predicted {predicted}, target {target}, lengths {lengths}")]
    RowCountMismatch { predicted: usize, target: usize, lengths: usize },

    #[error("Empty batch: {0}")]
    EmptyBatch(String),

    #[error("Degenerate distribution: row sum is {sum}")]
    DegenerateDistribution { sum: f32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Chemistry error: {0}")]
    Chem(String),
}

pub type Result<T> = std::result::Result<T, MolForgeError>;

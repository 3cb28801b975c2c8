use thiserror::Error;

#[derive(Error, Debug)]
pub enum PerceptronError {
    /// Row or column counts that do not line up with each other or with the fitted weights.
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: String, got: String },

    /// `predict` or `score` called before `fit`.
    #[error("model used before calling fit")]
    NotFitted,

    #[error("training data contains zero samples")]
    EmptyTrainingData,

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error on line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("plot error: {0}")]
    Plot(String),
}

pub type Result<T> = std::result::Result<T, PerceptronError>;

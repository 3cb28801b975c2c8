pub mod dataset;
pub mod error;
pub mod parse;
pub mod perceptron;
pub mod plot;

pub use error::{PerceptronError, Result};
pub use perceptron::{Perceptron, DEFAULT_MAX_STEPS};

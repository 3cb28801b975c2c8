use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, trace};

use crate::dataset::augment;
use crate::error::{PerceptronError, Result};

pub const DEFAULT_MAX_STEPS: usize = 1000;

enum State {
    Unfit,
    Fit {
        weights: Array1<f64>,
        history: Vec<f64>,
    },
}

/// Perceptron classifier. The last weight is the bias; `predict` expects already augmented input.
pub struct Perceptron<R = StdRng> {
    rng: R,
    state: State,
}

impl Perceptron<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Perceptron<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            state: State::Unfit,
        }
    }

    /// Builds an already fitted model around known weights, with an empty history.
    pub fn from_weights(weights: Array1<f64>, rng: R) -> Self {
        Self {
            rng,
            state: State::Fit {
                weights,
                history: Vec::new(),
            },
        }
    }

    pub fn is_fitted(&self) -> bool {
        matches!(self.state, State::Fit { .. })
    }

    pub fn weights(&self) -> Option<&Array1<f64>> {
        match &self.state {
            State::Unfit => None,
            State::Fit { weights, .. } => Some(weights),
        }
    }

    /// Score recorded after every training step of the last `fit`.
    pub fn history(&self) -> &[f64] {
        match &self.state {
            State::Unfit => &[],
            State::Fit { history, .. } => history.as_slice(),
        }
    }

    pub fn fit_default(
        &mut self,
        features: ArrayView2<'_, f64>,
        labels: ArrayView1<'_, f64>,
    ) -> Result<()> {
        self.fit(features, labels, DEFAULT_MAX_STEPS)
    }

    /// Runs exactly `max_steps` single-sample updates from fresh random weights.
    pub fn fit(
        &mut self,
        features: ArrayView2<'_, f64>,
        labels: ArrayView1<'_, f64>,
        max_steps: usize,
    ) -> Result<()> {
        let (rows, columns) = features.dim();
        check_labels(rows, labels.len())?;

        debug!(rows, columns, max_steps, "fitting perceptron");

        let augmented = augment(features);
        let shifted_labels = shift_labels(labels);

        let mut weights: Array1<f64> = (0..=columns).map(|_| self.rng.gen()).collect();
        let mut history = Vec::with_capacity(max_steps);

        for step in 0..max_steps {
            let index = self.rng.gen_range(0..rows);
            let sample = augmented.row(index);
            let label = shifted_labels[index];

            if label * sign(sample.dot(&weights)) < 0.0 {
                trace!(step, index, "misclassified sample, updating weights");
                weights.scaled_add(label, &sample);
            }

            history.push(agreement(&augmented, &shifted_labels, &weights));
        }

        debug!(final_score = ?history.last(), "perceptron fit complete");

        self.state = State::Fit { weights, history };

        Ok(())
    }

    /// Mean of `sign(x~ . w) * (2y - 1)`, i.e. `2 * accuracy - 1`.
    pub fn score(
        &self,
        features: ArrayView2<'_, f64>,
        labels: ArrayView1<'_, f64>,
    ) -> Result<f64> {
        let weights = self.fitted_weights()?;
        let (rows, columns) = features.dim();

        check_columns(weights.len(), columns + 1)?;
        check_labels(rows, labels.len())?;

        Ok(agreement(&augment(features), &shift_labels(labels), weights))
    }

    // No ones column is appended here.
    pub fn predict(&self, features: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        let weights = self.fitted_weights()?;

        check_columns(weights.len(), features.ncols())?;

        Ok(features.dot(weights).mapv(|value| (sign(value) + 1.0) / 2.0))
    }

    fn fitted_weights(&self) -> Result<&Array1<f64>> {
        self.weights().ok_or(PerceptronError::NotFitted)
    }
}

/// -1 for negative values, +1 otherwise (zero included).
fn sign(value: f64) -> f64 {
    if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}

fn shift_labels(labels: ArrayView1<'_, f64>) -> Array1<f64> {
    labels.mapv(|label| 2.0 * label - 1.0)
}

fn agreement(
    augmented: &Array2<f64>,
    shifted_labels: &Array1<f64>,
    weights: &Array1<f64>,
) -> f64 {
    augmented.dot(weights).mapv(sign).dot(shifted_labels) / augmented.nrows() as f64
}

fn check_labels(rows: usize, labels: usize) -> Result<()> {
    if rows != labels {
        return Err(PerceptronError::ShapeMismatch {
            expected: format!("{rows} labels"),
            got: format!("{labels} labels"),
        });
    }
    if rows == 0 {
        return Err(PerceptronError::EmptyTrainingData);
    }

    Ok(())
}

fn check_columns(expected: usize, got: usize) -> Result<()> {
    if expected == got {
        Ok(())
    } else {
        Err(PerceptronError::ShapeMismatch {
            expected: format!("{expected} columns"),
            got: format!("{got} columns"),
        })
    }
}

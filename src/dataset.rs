use ndarray::{Array1, Array2, ArrayView2};
use rand::Rng;

/// Centres used by the demo driver, one per class.
pub const DEFAULT_CENTERS: [[f64; 2]; 2] = [[-1.7, -1.7], [1.7, 1.7]];

/// Returns `features` with a trailing column of ones, so that the last
/// weight acts as the bias.
pub fn augment(features: ArrayView2<'_, f64>) -> Array2<f64> {
    let (rows, columns) = features.dim();

    Array2::from_shape_fn((rows, columns + 1), |(i, j)| {
        if j < columns {
            features[(i, j)]
        } else {
            1.0
        }
    })
}

/// Generates `samples` points split between two clusters.
///
/// Points alternate between `centers[0]` (label 0) and `centers[1]` (label 1).
/// Every coordinate is jittered uniformly in `[-spread, spread)`, so whenever
/// `spread` is smaller than half the per-axis distance between the centres the
/// two classes are linearly separable.
pub fn make_blobs<const D: usize, R: Rng + ?Sized>(
    samples: usize,
    centers: [[f64; D]; 2],
    spread: f64,
    rng: &mut R,
) -> (Array2<f64>, Array1<f64>) {
    let spread = spread.abs();

    let mut features = Array2::zeros((samples, D));
    let mut labels = Array1::zeros(samples);

    for i in 0..samples {
        let class = i % 2;

        for (j, &coordinate) in centers[class].iter().enumerate() {
            let jitter = if spread > 0.0 {
                rng.gen_range(-spread..spread)
            } else {
                0.0
            };
            features[(i, j)] = coordinate + jitter;
        }

        labels[i] = class as f64;
    }

    (features, labels)
}

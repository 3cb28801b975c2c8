use std::path::PathBuf;

use clap::Parser;
use perceptron::{
    dataset::{augment, make_blobs, DEFAULT_CENTERS},
    parse::load_csv,
    plot::plot_history,
    Perceptron, DEFAULT_MAX_STEPS,
};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "perceptron", about = "Train a perceptron and report its score")]
struct Cli {
    /// Headed CSV file to train on. Two synthetic clusters are generated when omitted.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Name of the 0/1 label column in the CSV file.
    #[arg(long, default_value = "label")]
    label_column: String,

    /// Number of synthetic samples.
    #[arg(long, default_value_t = 100)]
    samples: usize,

    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Write the training history chart to this PNG file.
    #[arg(long)]
    plot: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let (features, labels) = if let Some(path) = &cli.data {
        info!(path = %path.display(), "loading training data");
        load_csv(path, &cli.label_column)?
    } else {
        const SPREAD: f64 = 1.0;

        info!(samples = cli.samples, "generating synthetic clusters");
        let mut rng = StdRng::seed_from_u64(cli.seed.wrapping_add(1));
        make_blobs(cli.samples, DEFAULT_CENTERS, SPREAD, &mut rng)
    };

    let mut model = Perceptron::seeded(cli.seed);
    model.fit(features.view(), labels.view(), cli.max_steps)?;

    let score = model.score(features.view(), labels.view())?;
    let predictions = model.predict(augment(features.view()).view())?;

    #[allow(clippy::float_cmp)]
    let correct = predictions
        .iter()
        .zip(labels.iter())
        .filter(|(prediction, label)| prediction == label)
        .count();
    let accuracy = correct as f64 / labels.len() as f64 * 100.0;

    info!(
        weights = ?model.weights(),
        steps = model.history().len(),
        "training finished"
    );
    println!("perceptron score: {score:.3}");
    println!("perceptron accuracy: {accuracy:.3}%");

    if let Some(path) = &cli.plot {
        plot_history(model.history(), path)?;
        info!(path = %path.display(), "history chart written");
    }

    Ok(())
}

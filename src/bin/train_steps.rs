use std::path::PathBuf;

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use ml_primer_demos::config::DemoConfig;
use ml_primer_demos::dataset::{load_points, training_demo};
use ml_primer_demos::output::{frame_path, write_scene};
use ml_primer_demos::regression::{mean_squared_error, step, LinearModel};
use ml_primer_demos::scene::trainer;

/// Trains a line by gradient descent, one step per "click".
///
/// Writes one chart per step next to `--output`, numbered from `_000` for the
/// untrained model.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long, default_value_t = 0.01)]
    learning_rate: f64,

    #[clap(short, long, default_value_t = 1)]
    steps: usize,

    #[clap(long, default_value_t = 42)]
    seed: u64,

    #[clap(short, long)]
    data: Option<PathBuf>,

    #[clap(short, long)]
    config: Option<PathBuf>,

    #[clap(short, long, default_value = "plots/train_steps.svg")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let Args {
        learning_rate,
        steps,
        seed,
        data,
        config,
        output,
    }: Args = Args::parse();

    let config = DemoConfig::load(config.as_deref())?;

    let points = match data {
        Some(path) => load_points(path)?,
        None => training_demo(&mut StdRng::seed_from_u64(seed)),
    };

    let mut model = LinearModel::default();
    write_scene(&trainer(&points, model, &config), &frame_path(&output, 0), &config)?;

    for i in 1..=steps {
        model = step(model, &points, learning_rate);
        info!(
            "step {i}: m = {:.4}, b = {:.4}, MSE = {:.4}",
            model.m,
            model.b,
            mean_squared_error(&points, model)
        );

        write_scene(&trainer(&points, model, &config), &frame_path(&output, i), &config)?;
    }

    println!(
        "after {steps} steps: m = {:.3}, b = {:.3}, MSE = {:.3}",
        model.m,
        model.b,
        mean_squared_error(&points, model)
    );

    Ok(())
}

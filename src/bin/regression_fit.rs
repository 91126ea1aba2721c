use std::path::PathBuf;

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use ml_primer_demos::config::DemoConfig;
use ml_primer_demos::dataset::{load_points, regression_demo};
use ml_primer_demos::output::write_scene;
use ml_primer_demos::regression::{least_squares, mean_squared_error, LinearModel};
use ml_primer_demos::scene::regression_fit;

/// Scatter plot with a hand-picked line and its mean squared error.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
    slope: f64,

    #[clap(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    intercept: f64,

    #[clap(long, default_value_t = 42)]
    seed: u64,

    /// CSV file with `x,y` columns used instead of the synthetic dataset.
    #[clap(short, long)]
    data: Option<PathBuf>,

    #[clap(short, long)]
    config: Option<PathBuf>,

    #[clap(short, long, default_value = "plots/regression_fit.svg")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let Args {
        slope,
        intercept,
        seed,
        data,
        config,
        output,
    }: Args = Args::parse();

    let config = DemoConfig::load(config.as_deref())?;

    let points = match data {
        Some(path) => load_points(path)?,
        None => regression_demo(&mut StdRng::seed_from_u64(seed)),
    };
    info!("{} points", points.len());

    let model = LinearModel::new(slope, intercept);
    let mse = mean_squared_error(&points, model);

    write_scene(&regression_fit(&points, model, &config), &output, &config)?;

    println!("m = {slope:.2}, b = {intercept:.2}, MSE = {mse:.3}");

    if let Some(best) = least_squares(&points) {
        println!(
            "least squares: m = {:.2}, b = {:.2}, MSE = {:.3}",
            best.m,
            best.b,
            mean_squared_error(&points, best)
        );
    }

    Ok(())
}

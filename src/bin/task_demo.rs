use std::path::PathBuf;

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use ml_primer_demos::config::DemoConfig;
use ml_primer_demos::dataset::{
    load_labeled_points, load_points, task_dataset, DatasetKind, TaskData,
};
use ml_primer_demos::output::write_scene;
use ml_primer_demos::regression::least_squares;
use ml_primer_demos::scene::task;

/// Classification vs regression dataset toggle.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long, value_enum, default_value_t = DatasetKind::Classification)]
    kind: DatasetKind,

    #[clap(long, default_value_t = 42)]
    seed: u64,

    /// CSV file with `x,y` (regression) or `x,y,label` (classification) columns.
    #[clap(short, long)]
    data: Option<PathBuf>,

    #[clap(short, long)]
    config: Option<PathBuf>,

    #[clap(short, long, default_value = "plots/task_demo.svg")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let Args {
        kind,
        seed,
        data,
        config,
        output,
    }: Args = Args::parse();

    let config = DemoConfig::load(config.as_deref())?;

    let data = match (data, kind) {
        (Some(path), DatasetKind::Classification) => {
            TaskData::Classification(load_labeled_points(path)?)
        }
        (Some(path), DatasetKind::Regression) => TaskData::Regression(load_points(path)?),
        (None, kind) => task_dataset(kind, &mut StdRng::seed_from_u64(seed)),
    };
    info!("dataset kind {kind:?}");

    write_scene(&task(&data, &config), &output, &config)?;

    if let TaskData::Regression(points) = &data {
        match least_squares(points) {
            Some(fit) => println!("least squares fit: m = {:.3}, b = {:.3}", fit.m, fit.b),
            None => println!("least squares fit undefined for this dataset"),
        }
    }

    Ok(())
}

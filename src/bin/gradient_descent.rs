use std::path::PathBuf;

use clap::Parser;
use log::info;

use ml_primer_demos::config::DemoConfig;
use ml_primer_demos::descent::descent_path;
use ml_primer_demos::output::write_scene;
use ml_primer_demos::scene::gradient_descent;

/// Descent path on J(w) = w² for a given learning rate.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long, default_value_t = 0.1)]
    learning_rate: f64,

    #[clap(short, long)]
    config: Option<PathBuf>,

    #[clap(short, long, default_value = "plots/gradient_descent.svg")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let Args {
        learning_rate,
        config,
        output,
    }: Args = Args::parse();

    let config = DemoConfig::load(config.as_deref())?;

    info!("alpha = {learning_rate:.2}");

    write_scene(&gradient_descent(learning_rate, &config), &output, &config)?;

    let path = descent_path(
        config.descent.start_weight,
        learning_rate,
        config.descent.steps,
    );
    for (i, p) in path.iter().enumerate() {
        println!("step {i:>2}: w = {:>12.5}, J(w) = {:>12.5}", p.x, p.y);
    }

    Ok(())
}

//! Synthetic datasets for the demos and CSV loading of user-provided points.

use std::path::Path;

use ndarray::Array1;
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use thiserror::Error;

use crate::point::{Label, LabeledPoint, Point};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot read {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// Evenly spaced points on `y = slope * x + intercept` with uniform noise of
/// half-width `noise`, for `x` in `[from, to]`.
pub fn noisy_line<R: Rng>(
    rng: &mut R,
    n: usize,
    (from, to): (f64, f64),
    (slope, intercept): (f64, f64),
    noise: f64,
) -> Vec<Point> {
    let jitter = Uniform::new_inclusive(-noise, noise);

    Array1::linspace(from, to, n)
        .iter()
        .map(|&x| Point::new(x, slope * x + intercept + jitter.sample(rng)))
        .collect()
}

/// Points with `x` drawn uniformly from `[0, x_max)` around
/// `y = slope * x + intercept`.
pub fn scattered_line<R: Rng>(
    rng: &mut R,
    n: usize,
    x_max: f64,
    (slope, intercept): (f64, f64),
    noise: f64,
) -> Vec<Point> {
    let xs = Uniform::new(0., x_max);
    let jitter = Uniform::new_inclusive(-noise, noise);

    (0..n)
        .map(|_| {
            let x = xs.sample(rng);
            Point::new(x, slope * x + intercept + jitter.sample(rng))
        })
        .collect()
}

/// Two square clusters of `per_class` points each: label 0 in `[1, 3]²`,
/// label 1 in `[4, 6]²`. Points alternate between the classes.
pub fn two_clusters<R: Rng>(rng: &mut R, per_class: usize) -> Vec<LabeledPoint> {
    let low = Uniform::new(1., 3.);
    let high = Uniform::new(4., 6.);

    (0..per_class)
        .flat_map(|_| {
            let zero = LabeledPoint::new(low.sample(rng), low.sample(rng), Label::Zero);
            let one = LabeledPoint::new(high.sample(rng), high.sample(rng), Label::One);
            [zero, one]
        })
        .collect()
}

/// Noisy samples of `y = 1.5x - 2` on an even grid over `[0, 10]`.
pub fn regression_demo<R: Rng>(rng: &mut R) -> Vec<Point> {
    noisy_line(rng, 30, (0., 10.), (1.5, -2.), 1.5)
}

/// Training set for the gradient-descent trainer, around `y = 3x + 1`.
pub fn training_demo<R: Rng>(rng: &mut R) -> Vec<Point> {
    scattered_line(rng, 50, 5., (3., 1.), 2.)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DatasetKind {
    Classification,
    Regression,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskData {
    Classification(Vec<LabeledPoint>),
    Regression(Vec<Point>),
}

pub fn task_dataset<R: Rng>(kind: DatasetKind, rng: &mut R) -> TaskData {
    match kind {
        DatasetKind::Classification => TaskData::Classification(two_clusters(rng, 50)),
        DatasetKind::Regression => TaskData::Regression(scattered_line(rng, 100, 5., (2., 0.), 1.)),
    }
}

#[derive(Debug, serde::Deserialize)]
struct Record {
    x: f64,
    y: f64,
    label: Option<Label>,
}

fn read_records(path: &Path) -> Result<Vec<Record>, DatasetError> {
    let err = |source| DatasetError::Csv {
        path: path.display().to_string(),
        source,
    };

    csv::Reader::from_path(path)
        .map_err(err)?
        .deserialize()
        .collect::<Result<Vec<Record>, _>>()
        .map_err(err)
}

/// Reads `x,y` rows from a CSV file with a header line. A `label` column is
/// allowed and ignored.
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<Point>, DatasetError> {
    Ok(read_records(path.as_ref())?
        .into_iter()
        .map(|r| Point::new(r.x, r.y))
        .collect())
}

/// Reads `x,y,label` rows; rows without a label are skipped.
pub fn load_labeled_points(path: impl AsRef<Path>) -> Result<Vec<LabeledPoint>, DatasetError> {
    Ok(read_records(path.as_ref())?
        .into_iter()
        .filter_map(|r| r.label.map(|label| LabeledPoint::new(r.x, r.y, label)))
        .collect())
}

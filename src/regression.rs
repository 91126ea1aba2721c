//! Simple linear regression: error, closed-form fit and gradient steps.

use crate::point::Point;

/// Line `y = m * x + b`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearModel {
    pub m: f64,
    pub b: f64,
}

impl LinearModel {
    pub fn new(m: f64, b: f64) -> Self {
        Self { m, b }
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.m * x + self.b
    }

    /// Samples of the line at every `x`, in the given order.
    pub fn sample(&self, xs: impl IntoIterator<Item = f64>) -> Vec<Point> {
        xs.into_iter()
            .map(|x| Point::new(x, self.predict(x)))
            .collect()
    }
}

/// Mean squared error of `model` over `data`; zero for an empty dataset.
pub fn mean_squared_error(data: &[Point], model: LinearModel) -> f64 {
    if data.is_empty() {
        return 0.;
    }

    let sum: f64 = data
        .iter()
        .map(|p| {
            let diff = model.predict(p.x) - p.y;
            diff * diff
        })
        .sum();

    sum / data.len() as f64
}

/// Closed-form least-squares line through `data`.
///
/// `None` when there are no points or every point shares the same x, since
/// the slope is undefined then.
pub fn least_squares(data: &[Point]) -> Option<LinearModel> {
    let n = data.len() as f64;

    let (sum_x, sum_y, sum_xy, sum_xx) = data.iter().fold(
        (0., 0., 0., 0.),
        |(sx, sy, sxy, sxx), p| (sx + p.x, sy + p.y, sxy + p.x * p.y, sxx + p.x * p.x),
    );

    let denominator = n * sum_xx - sum_x * sum_x;
    if data.is_empty() || denominator == 0. {
        return None;
    }

    let m = (n * sum_xy - sum_x * sum_y) / denominator;
    let b = (sum_y - m * sum_x) / n;

    Some(LinearModel { m, b })
}

/// One batch gradient-descent step on the mean squared error.
///
/// Returns the updated model; an empty dataset leaves it unchanged.
pub fn step(model: LinearModel, data: &[Point], lr: f64) -> LinearModel {
    let n = data.len() as f64;

    let (m_grad, b_grad) = data.iter().fold((0., 0.), |(m_grad, b_grad), p| {
        let error = model.predict(p.x) - p.y;
        (
            m_grad + (2. / n) * error * p.x,
            b_grad + (2. / n) * error,
        )
    });

    LinearModel {
        m: model.m - lr * m_grad,
        b: model.b - lr * b_grad,
    }
}

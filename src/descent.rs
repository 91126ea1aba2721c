//! Gradient descent on the one-dimensional loss `J(w) = w²`.

use ndarray::Array1;

use crate::point::Point;

pub fn loss(w: f64) -> f64 {
    w * w
}

pub fn gradient(w: f64) -> f64 {
    2. * w
}

/// `(w, J(w))` pairs visited by `steps` descent steps from `start`.
///
/// The last pair is the weight reached after the final step. Descent stops
/// early once the weight overflows, which large learning rates provoke.
pub fn descent_path(start: f64, alpha: f64, steps: usize) -> Vec<Point> {
    let mut path = Vec::with_capacity(steps + 1);
    let mut w = start;

    for _ in 0..steps {
        path.push(Point::new(w, loss(w)));
        w -= alpha * gradient(w);
        if !w.is_finite() {
            break;
        }
    }

    path.push(Point::new(w, loss(w)));
    path
}

/// Evenly spaced samples of the loss curve over `[from, to]`.
pub fn loss_curve(from: f64, to: f64, samples: usize) -> Vec<Point> {
    Array1::linspace(from, to, samples)
        .iter()
        .map(|&w| Point::new(w, loss(w)))
        .collect()
}

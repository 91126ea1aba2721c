//! Layer construction and extent policy for each demo chart.

use itertools::Itertools;
use plotters::style::RGBAColor;

use crate::config::DemoConfig;
use crate::dataset::TaskData;
use crate::descent::{descent_path, loss_curve};
use crate::layer::{AxisStyle, Layer, LegendEntry, LegendStyle, LineStyle, MarkerStyle};
use crate::mapper::{Extent, PixelRect};
use crate::point::{Label, LabeledPoint, Point};
use crate::regression::{least_squares, LinearModel};
use crate::render::{render, RenderError};
use crate::surface::Surface;

const DATA_BLUE: RGBAColor = RGBAColor(0, 123, 255, 0.8);
const FIT_RED: RGBAColor = RGBAColor(220, 53, 69, 0.8);
const CURVE_GREEN: RGBAColor = RGBAColor(40, 167, 69, 0.9);
const PATH_AMBER: RGBAColor = RGBAColor(255, 193, 7, 0.9);
const CLASS_ZERO: RGBAColor = RGBAColor(66, 165, 245, 0.7);
const CLASS_ONE: RGBAColor = RGBAColor(239, 83, 80, 0.7);
const TASK_ORANGE: RGBAColor = RGBAColor(255, 167, 38, 0.7);
const TASK_FIT_GREEN: RGBAColor = RGBAColor(102, 187, 106, 0.9);
const TRAIN_CYAN: RGBAColor = RGBAColor(129, 212, 250, 0.7);
const MODEL_PINK: RGBAColor = RGBAColor(244, 143, 177, 0.9);

/// Everything one render pass needs apart from the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub layers: Vec<Layer>,
    pub x: Extent,
    pub y: Extent,
}

impl Scene {
    pub fn render<S: Surface>(&self, surface: &mut S, rect: PixelRect) -> Result<(), RenderError> {
        render(surface, &self.layers, self.x, self.y, rect)
    }
}

/// Plot area of the configured canvas.
pub fn plot_rect(config: &DemoConfig) -> PixelRect {
    PixelRect::inset(
        config.canvas_width as f64,
        config.canvas_height as f64,
        config.margin,
    )
}

/// Extent of `values` padded by `padding`, or `fallback` when there are none.
///
/// A zero-width extent is padded by at least one unit so it stays mappable.
fn padded_extent(values: impl IntoIterator<Item = f64>, padding: f64, fallback: Extent) -> Extent {
    match Extent::of(values) {
        Some(extent) if extent.span() + 2. * padding > 0. => extent.padded(padding),
        Some(extent) => extent.padded(1.),
        None => fallback,
    }
}

fn marker(color: RGBAColor, config: &DemoConfig) -> MarkerStyle {
    MarkerStyle::new(color, config.point_radius)
}

fn line(color: RGBAColor, config: &DemoConfig) -> LineStyle {
    LineStyle::new(color, config.line_width)
}

fn legend(entries: [(&str, RGBAColor); 2]) -> Layer {
    Layer::Legend(
        entries
            .into_iter()
            .map(|(label, color)| LegendEntry::new(label, color))
            .collect(),
        LegendStyle::default(),
    )
}

/// Line samples at every data x, ascending.
fn sorted_line(data: &[Point], model: LinearModel) -> Vec<Point> {
    model.sample(data.iter().map(|p| p.x).sorted_by(|a, b| a.total_cmp(b)))
}

/// Scatter of `data` under the candidate line `model`, drawn across the data's
/// x-range.
///
/// The y extent grows to keep both line endpoints visible, then is padded by
/// `regression.y_padding`.
pub fn regression_fit(data: &[Point], model: LinearModel, config: &DemoConfig) -> Scene {
    let x = padded_extent(data.iter().map(|p| p.x), 0., Extent::new(0., 10.));

    let (y_start, y_end) = (model.predict(x.min), model.predict(x.max));
    let y = padded_extent(
        data.iter().map(|p| p.y).chain([y_start, y_end]),
        config.regression.y_padding,
        Extent::new(0., 1.),
    );

    let axis = AxisStyle {
        ticks: config.regression.ticks,
        ..AxisStyle::default()
    };

    Scene {
        layers: vec![
            Layer::Axis(axis),
            Layer::Scatter(data.to_vec(), marker(DATA_BLUE, config)),
            Layer::Polyline(
                vec![Point::new(x.min, y_start), Point::new(x.max, y_end)],
                line(FIT_RED, config),
            ),
        ],
        x,
        y,
    }
}

/// Loss curve `w²` with the descent path for learning rate `alpha` on top.
///
/// The window is fixed by `descent.x_extent` and `descent.y_extent`; path
/// points outside it are drawn off the plot area.
pub fn gradient_descent(alpha: f64, config: &DemoConfig) -> Scene {
    let descent = &config.descent;

    let curve = loss_curve(
        descent.x_extent.min,
        descent.x_extent.max,
        descent.curve_samples,
    );
    let path = descent_path(descent.start_weight, alpha, descent.steps);

    let axis = AxisStyle {
        ticks: descent.ticks,
        y_precision: 0,
        y_label_offset: 30.,
        ..AxisStyle::default()
    };

    Scene {
        layers: vec![
            Layer::Axis(axis),
            Layer::Polyline(curve, line(CURVE_GREEN, config)),
            Layer::Polyline(path.clone(), line(PATH_AMBER, config)),
            Layer::Scatter(path, marker(PATH_AMBER, config)),
        ],
        x: descent.x_extent,
        y: descent.y_extent,
    }
}

/// Classification clusters coloured by label, or regression points with their
/// least-squares line.
pub fn task(data: &TaskData, config: &DemoConfig) -> Scene {
    let padding = config.task.padding;
    let axis = AxisStyle::titled(config.task.ticks);

    match data {
        TaskData::Classification(points) => {
            let (zero, one): (Vec<LabeledPoint>, Vec<LabeledPoint>) =
                points.iter().partition(|p| p.label == Label::Zero);

            Scene {
                layers: vec![
                    Layer::Axis(axis),
                    Layer::Scatter(
                        zero.iter().map(|p| p.point).collect(),
                        marker(CLASS_ZERO, config),
                    ),
                    Layer::Scatter(
                        one.iter().map(|p| p.point).collect(),
                        marker(CLASS_ONE, config),
                    ),
                    legend([("Class 0", CLASS_ZERO), ("Class 1", CLASS_ONE)]),
                ],
                x: padded_extent(points.iter().map(|p| p.point.x), padding, Extent::new(0., 1.)),
                y: padded_extent(points.iter().map(|p| p.point.y), padding, Extent::new(0., 1.)),
            }
        }
        TaskData::Regression(points) => {
            let fit = least_squares(points)
                .map(|model| sorted_line(points, model))
                .unwrap_or_default();

            scatter_with_line(
                points,
                fit,
                axis,
                (marker(TASK_ORANGE, config), line(TASK_FIT_GREEN, config)),
                ["Data points", "Least squares fit"],
                padding,
            )
        }
    }
}

/// Training data with the current model's predictions as a line.
pub fn trainer(data: &[Point], model: LinearModel, config: &DemoConfig) -> Scene {
    scatter_with_line(
        data,
        sorted_line(data, model),
        AxisStyle::titled(config.task.ticks),
        (marker(TRAIN_CYAN, config), line(MODEL_PINK, config)),
        ["Training data", "Model prediction"],
        config.task.padding,
    )
}

/// Scatter with a line on top. Line samples that are not finite, as from a
/// diverged model, are dropped before the extents are taken.
fn scatter_with_line(
    points: &[Point],
    mut line_points: Vec<Point>,
    axis: AxisStyle,
    (marker, line): (MarkerStyle, LineStyle),
    [points_name, line_name]: [&str; 2],
    padding: f64,
) -> Scene {
    line_points.retain(|p| p.x.is_finite() && p.y.is_finite());

    let x = padded_extent(points.iter().map(|p| p.x), padding, Extent::new(0., 1.));
    let y = padded_extent(
        points.iter().chain(&line_points).map(|p| p.y),
        padding,
        Extent::new(0., 1.),
    );

    Scene {
        layers: vec![
            Layer::Axis(axis),
            Layer::Scatter(points.to_vec(), marker),
            Layer::Polyline(line_points, line),
            legend([(points_name, marker.color), (line_name, line.color)]),
        ],
        x,
        y,
    }
}

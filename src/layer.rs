//! Declarative description of what a chart contains.
//!
//! Layers are built fresh for every render pass and consumed in order by
//! [`crate::render::render`].

use plotters::style::RGBAColor;

use crate::point::Point;

pub const AXIS_GREY: RGBAColor = RGBAColor(204, 204, 204, 1.0);
pub const LABEL_GREY: RGBAColor = RGBAColor(102, 102, 102, 1.0);

#[derive(Debug, Clone, PartialEq)]
pub struct AxisStyle {
    pub line_color: RGBAColor,
    pub label_color: RGBAColor,
    pub line_width: f64,
    pub font_size: f64,
    /// Number of intervals between ticks; `ticks + 1` marks are drawn per axis.
    pub ticks: usize,
    pub tick_length: f64,
    pub x_precision: usize,
    pub y_precision: usize,
    /// Distance from the y-axis to the start of its labels.
    pub y_label_offset: f64,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
}

impl AxisStyle {
    /// Default style with `x` and `y` as the axis titles.
    pub fn titled(ticks: usize) -> Self {
        Self {
            ticks,
            x_title: Some("x".to_owned()),
            y_title: Some("y".to_owned()),
            ..Self::default()
        }
    }
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            line_color: AXIS_GREY,
            label_color: LABEL_GREY,
            line_width: 1.,
            font_size: 10.,
            ticks: 5,
            tick_length: 5.,
            x_precision: 1,
            y_precision: 1,
            y_label_offset: 35.,
            x_title: None,
            y_title: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub color: RGBAColor,
    pub radius: f64,
}

impl MarkerStyle {
    pub fn new(color: RGBAColor, radius: f64) -> Self {
        Self { color, radius }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: RGBAColor,
    pub width: f64,
}

impl LineStyle {
    pub fn new(color: RGBAColor, width: f64) -> Self {
        Self { color, width }
    }
}

/// One row of a legend: a colour swatch followed by the series name.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: RGBAColor,
}

impl LegendEntry {
    pub fn new(label: impl Into<String>, color: RGBAColor) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendStyle {
    pub label_color: RGBAColor,
    pub font_size: f64,
    pub swatch_radius: f64,
    pub row_height: f64,
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self {
            label_color: LABEL_GREY,
            font_size: 10.,
            swatch_radius: 4.,
            row_height: 16.,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    /// Left and bottom borders with ticks and numeric labels.
    Axis(AxisStyle),
    /// One filled circle per point.
    Scatter(Vec<Point>, MarkerStyle),
    /// One open stroke through the points, in order.
    Polyline(Vec<Point>, LineStyle),
    /// Series names stacked in the top-left corner of the plot area.
    Legend(Vec<LegendEntry>, LegendStyle),
}

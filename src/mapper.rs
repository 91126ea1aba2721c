//! Data space to pixel space mapping.
//!
//! Data coordinates grow upward, pixel coordinates grow downward from the
//! top-left corner of the canvas, so [`AffineMapper::map_y`] inverts the
//! vertical axis.

use std::fmt;

use itertools::{Itertools, MinMaxResult};
use serde::Deserialize;
use thiserror::Error;

use crate::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    X,
    Y,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisKind::X => write!(f, "x"),
            AxisKind::Y => write!(f, "y"),
        }
    }
}

/// The extent of one axis spans no positive width.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("degenerate {axis} extent: min {min} must be strictly below max {max}")]
pub struct DegenerateExtentError {
    pub axis: AxisKind,
    pub min: f64,
    pub max: f64,
}

/// Closed range of data values covered by one axis.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Smallest extent holding every finite value, `None` when there are none.
    ///
    /// A single value gives a zero-width extent, which still has to be
    /// padded before it can be mapped.
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        match values
            .into_iter()
            .filter(|v| v.is_finite())
            .minmax_by(|a, b| a.total_cmp(b))
        {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(v) => Some(Self::new(v, v)),
            MinMaxResult::MinMax(min, max) => Some(Self::new(min, max)),
        }
    }

    pub fn including(self, value: f64) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }

    pub fn padded(self, padding: f64) -> Self {
        Self {
            min: self.min - padding,
            max: self.max + padding,
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.max > self.min)
    }

    /// Value at fraction `t` of the way from `min` to `max`.
    pub fn lerp(&self, t: f64) -> f64 {
        self.min + t * self.span()
    }

    fn checked(self, axis: AxisKind) -> Result<Self, DegenerateExtentError> {
        if self.is_degenerate() {
            return Err(DegenerateExtentError {
                axis,
                min: self.min,
                max: self.max,
            });
        }

        Ok(self)
    }
}

/// Drawable area of a canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Plot area left after removing a uniform margin from a canvas.
    pub fn inset(canvas_width: f64, canvas_height: f64, margin: f64) -> Self {
        Self::new(
            margin,
            margin,
            canvas_width - margin * 2.,
            canvas_height - margin * 2.,
        )
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Affine transform from a data rectangle onto a [`PixelRect`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMapper {
    x: Extent,
    y: Extent,
    rect: PixelRect,
}

impl AffineMapper {
    pub fn build(x: Extent, y: Extent, rect: PixelRect) -> Result<Self, DegenerateExtentError> {
        Ok(Self {
            x: x.checked(AxisKind::X)?,
            y: y.checked(AxisKind::Y)?,
            rect,
        })
    }

    pub fn map_x(&self, x: f64) -> f64 {
        self.rect.x + (x - self.x.min) / self.x.span() * self.rect.width
    }

    pub fn map_y(&self, y: f64) -> f64 {
        self.rect.y + self.rect.height - (y - self.y.min) / self.y.span() * self.rect.height
    }

    pub fn map(&self, point: Point) -> (f64, f64) {
        (self.map_x(point.x), self.map_y(point.y))
    }

    pub fn x_extent(&self) -> Extent {
        self.x
    }

    pub fn y_extent(&self) -> Extent {
        self.y
    }

    pub fn rect(&self) -> PixelRect {
        self.rect
    }
}

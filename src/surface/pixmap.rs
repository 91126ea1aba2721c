use std::path::Path;

use log::trace;
use plotters::style::RGBAColor;
use thiserror::Error;
use tiny_skia::{BlendMode, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use super::Surface;

#[derive(Debug, Error)]
pub enum PixmapError {
    #[error("cannot allocate a {width}x{height} pixmap")]
    InvalidSize { width: u32, height: u32 },
    #[error("png encoding failed: {0}")]
    Png(String),
}

/// How far outside the canvas path segments are kept before clipping.
const CLIP_MARGIN: f64 = 10_000.;

type Vertex = (f64, f64);

/// Raster surface backed by a tiny-skia [`Pixmap`].
///
/// There is no font rasterizer behind it: `fill_text` is accepted and
/// skipped, so labels only show up on vector output.
///
/// Path segments are clipped in `f64` to a box around the canvas before they
/// reach tiny-skia, so far-away vertices that do not fit in `f32` still leave
/// their visible part on the canvas. Non-finite vertices are ignored.
pub struct PixmapSurface {
    pixmap: Pixmap,
    stroke: RGBAColor,
    fill: RGBAColor,
    line_width: f32,
    path: PathBuilder,
    /// Current point of the path as requested by the caller.
    cursor: Option<Vertex>,
    /// Last vertex handed to `path`.
    pen: Option<Vertex>,
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, PixmapError> {
        let pixmap = Pixmap::new(width, height).ok_or(PixmapError::InvalidSize { width, height })?;

        Ok(Self {
            pixmap,
            stroke: RGBAColor(0, 0, 0, 1.),
            fill: RGBAColor(0, 0, 0, 1.),
            line_width: 1.,
            path: PathBuilder::new(),
            cursor: None,
            pen: None,
        })
    }

    /// Straight (non-premultiplied) RGBA value of one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap.pixel(x, y).map(|c| {
            let c = c.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), PixmapError> {
        self.pixmap
            .save_png(path)
            .map_err(|e| PixmapError::Png(e.to_string()))
    }
}

/// Part of the segment `from`-`to` inside `[left, right] x [top, bottom]`
/// (Liang-Barsky), or `None` when it misses the box.
fn clip_segment(
    from: Vertex,
    to: Vertex,
    (left, top, right, bottom): (f64, f64, f64, f64),
) -> Option<(Vertex, Vertex)> {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    if !dx.is_finite() || !dy.is_finite() {
        return None;
    }

    let (mut enter, mut exit) = (0f64, 1f64);
    for (p, q) in [
        (-dx, from.0 - left),
        (dx, right - from.0),
        (-dy, from.1 - top),
        (dy, bottom - from.1),
    ] {
        if p == 0. {
            if q < 0. {
                return None;
            }
            continue;
        }

        let t = q / p;
        if p < 0. {
            enter = enter.max(t);
        } else {
            exit = exit.min(t);
        }
        if enter > exit {
            return None;
        }
    }

    let at = |t: f64| (from.0 + t * dx, from.1 + t * dy);
    let start = if enter > 0. { at(enter) } else { from };
    let end = if exit < 1. { at(exit) } else { to };
    Some((start, end))
}

fn is_finite((x, y): Vertex) -> bool {
    x.is_finite() && y.is_finite()
}

fn paint(color: RGBAColor) -> Paint<'static> {
    let RGBAColor(r, g, b, a) = color;

    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, (a.clamp(0., 1.) * 255.).round() as u8);
    paint.anti_alias = true;
    paint
}

impl Surface for PixmapSurface {
    type Error = PixmapError;

    fn size(&self) -> (f64, f64) {
        (self.pixmap.width() as f64, self.pixmap.height() as f64)
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), PixmapError> {
        let Some(rect) = Rect::from_xywh(x as f32, y as f32, width as f32, height as f32) else {
            return Ok(());
        };

        let mut paint = Paint::default();
        paint.blend_mode = BlendMode::Clear;

        self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
        Ok(())
    }

    fn set_stroke_style(&mut self, color: RGBAColor) {
        self.stroke = color;
    }

    fn set_fill_style(&mut self, color: RGBAColor) {
        self.fill = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width as f32;
    }

    fn set_font_size(&mut self, _size: f64) {}

    fn begin_path(&mut self) {
        self.path = PathBuilder::new();
        self.cursor = None;
        self.pen = None;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        if is_finite((x, y)) {
            self.cursor = Some((x, y));
            self.pen = None;
        }
    }

    fn line_to(&mut self, x: f64, y: f64) {
        if !is_finite((x, y)) {
            return;
        }
        let Some(from) = self.cursor.replace((x, y)) else {
            return;
        };

        let bounds = (
            -CLIP_MARGIN,
            -CLIP_MARGIN,
            self.pixmap.width() as f64 + CLIP_MARGIN,
            self.pixmap.height() as f64 + CLIP_MARGIN,
        );
        let Some((start, end)) = clip_segment(from, (x, y), bounds) else {
            return;
        };

        if self.pen != Some(start) {
            self.path.move_to(start.0 as f32, start.1 as f32);
        }
        self.path.line_to(end.0 as f32, end.1 as f32);
        self.pen = Some(end);
    }

    fn stroke(&mut self) -> Result<(), PixmapError> {
        let Some(path) = self.path.clone().finish() else {
            return Ok(());
        };

        let mut stroke = Stroke::default();
        stroke.width = self.line_width;

        self.pixmap.stroke_path(
            &path,
            &paint(self.stroke),
            &stroke,
            Transform::identity(),
            None,
        );
        Ok(())
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64) -> Result<(), PixmapError> {
        let Some(circle) = PathBuilder::from_circle(cx as f32, cy as f32, radius as f32) else {
            return Ok(());
        };

        self.pixmap.fill_path(
            &circle,
            &paint(self.fill),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), PixmapError> {
        trace!("pixmap surface skips text {text:?} at ({x:.1}, {y:.1})");
        Ok(())
    }
}

use std::path::Path;

use plotters::prelude::*;
use plotters_backend::text_anchor::{HPos, Pos, VPos};
use plotters_backend::DrawingErrorKind;
use thiserror::Error;

use super::Surface;

#[derive(Debug, Error)]
pub enum SvgError {
    #[error(transparent)]
    Drawing(#[from] DrawingErrorKind<std::io::Error>),
}

/// Surface backed by a plotters [`SVGBackend`] writing to a file.
///
/// Coordinates are rounded to whole pixels since plotters backends address
/// integer positions.
pub struct SvgSurface<'a> {
    backend: SVGBackend<'a>,
    stroke: RGBAColor,
    fill: RGBAColor,
    line_width: f64,
    font_size: f64,
    path: Vec<(i32, i32)>,
}

impl<'a> SvgSurface<'a> {
    pub fn new<P: AsRef<Path> + ?Sized>(path: &'a P, size: (u32, u32)) -> Self {
        Self {
            backend: SVGBackend::new(path, size),
            stroke: BLACK.to_rgba(),
            fill: BLACK.to_rgba(),
            line_width: 1.,
            font_size: 10.,
            path: Vec::new(),
        }
    }

    /// Flushes the document to disk.
    pub fn present(&mut self) -> Result<(), SvgError> {
        self.backend.present()?;
        Ok(())
    }

    fn stroke_style(&self) -> ShapeStyle {
        ShapeStyle {
            color: self.stroke,
            filled: false,
            stroke_width: self.line_width.round().max(1.) as u32,
        }
    }
}

fn coord(x: f64, y: f64) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

impl Surface for SvgSurface<'_> {
    type Error = SvgError;

    fn size(&self) -> (f64, f64) {
        let (w, h) = self.backend.get_size();
        (w as f64, h as f64)
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), SvgError> {
        // SVG has no erase; paint the page colour over the area instead.
        self.backend
            .draw_rect(coord(x, y), coord(x + width, y + height), &WHITE.filled(), true)?;
        Ok(())
    }

    fn set_stroke_style(&mut self, color: RGBAColor) {
        self.stroke = color;
    }

    fn set_fill_style(&mut self, color: RGBAColor) {
        self.fill = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push(coord(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.push(coord(x, y));
    }

    fn stroke(&mut self) -> Result<(), SvgError> {
        if self.path.len() < 2 {
            return Ok(());
        }

        let style = self.stroke_style();
        self.backend.draw_path(self.path.iter().copied(), &style)?;
        Ok(())
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64) -> Result<(), SvgError> {
        let style = ShapeStyle {
            color: self.fill,
            filled: true,
            stroke_width: 1,
        };

        self.backend
            .draw_circle(coord(cx, cy), radius.round().max(1.) as u32, &style, true)?;
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), SvgError> {
        let style = ("sans-serif", self.font_size)
            .into_font()
            .color(&self.fill)
            .pos(Pos::new(HPos::Left, VPos::Bottom));

        self.backend.draw_text(text, &style, coord(x, y))?;
        Ok(())
    }
}

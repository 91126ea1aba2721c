//! Immediate-mode 2D drawing contexts the renderer draws onto.

mod pixmap;
mod recording;
mod svg;

pub use pixmap::{PixmapError, PixmapSurface};
pub use recording::{DrawCommand, RecordingSurface};
pub use svg::{SvgError, SvgSurface};

use plotters::style::RGBAColor;

/// Canvas-like drawing context.
///
/// Path commands accumulate between [`Surface::begin_path`] and
/// [`Surface::stroke`]; the style setters apply to every later command.
pub trait Surface {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Width and height in pixels.
    fn size(&self) -> (f64, f64);

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), Self::Error>;

    fn set_stroke_style(&mut self, color: RGBAColor);

    fn set_fill_style(&mut self, color: RGBAColor);

    fn set_line_width(&mut self, width: f64);

    fn set_font_size(&mut self, size: f64);

    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    /// Strokes the current path with the stroke style and line width.
    fn stroke(&mut self) -> Result<(), Self::Error>;

    /// Fills a full circle with the fill style.
    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64) -> Result<(), Self::Error>;

    /// Draws text with its baseline starting at `(x, y)` in the fill style.
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Self::Error>;

    fn clear(&mut self) -> Result<(), Self::Error> {
        let (width, height) = self.size();
        self.clear_rect(0., 0., width, height)
    }
}

use std::convert::Infallible;

use plotters::style::RGBAColor;

use super::Surface;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    SetStrokeStyle(RGBAColor),
    SetFillStyle(RGBAColor),
    SetLineWidth(f64),
    SetFontSize(f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke,
    FillCircle {
        cx: f64,
        cy: f64,
        radius: f64,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
    },
}

/// Surface that draws nothing and remembers every call, for headless tests.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(c)).count()
    }

    /// Vertices of every stroked path, in stroke order.
    pub fn stroked_paths(&self) -> Vec<Vec<(f64, f64)>> {
        let mut paths = Vec::new();
        let mut current = Vec::new();

        for command in &self.commands {
            match *command {
                DrawCommand::BeginPath => current.clear(),
                DrawCommand::MoveTo(x, y) | DrawCommand::LineTo(x, y) => current.push((x, y)),
                DrawCommand::Stroke => paths.push(current.clone()),
                _ => {}
            }
        }

        paths
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), Infallible> {
        self.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
        Ok(())
    }

    fn set_stroke_style(&mut self, color: RGBAColor) {
        self.push(DrawCommand::SetStrokeStyle(color));
    }

    fn set_fill_style(&mut self, color: RGBAColor) {
        self.push(DrawCommand::SetFillStyle(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.push(DrawCommand::SetLineWidth(width));
    }

    fn set_font_size(&mut self, size: f64) {
        self.push(DrawCommand::SetFontSize(size));
    }

    fn begin_path(&mut self) {
        self.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::LineTo(x, y));
    }

    fn stroke(&mut self) -> Result<(), Infallible> {
        self.push(DrawCommand::Stroke);
        Ok(())
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64) -> Result<(), Infallible> {
        self.push(DrawCommand::FillCircle { cx, cy, radius });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Infallible> {
        self.push(DrawCommand::FillText {
            text: text.to_owned(),
            x,
            y,
        });
        Ok(())
    }
}

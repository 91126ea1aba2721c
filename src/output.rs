//! Writes a rendered scene to an image file chosen by extension.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::config::DemoConfig;
use crate::render::RenderError;
use crate::scene::{plot_rect, Scene};
use crate::surface::{PixmapError, PixmapSurface, SvgError, SvgSurface};

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("unsupported output format {0:?}, expected .svg or .png")]
    UnsupportedFormat(String),
    #[error("cannot create output directory: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Svg(#[from] SvgError),
    #[error(transparent)]
    Pixmap(#[from] PixmapError),
}

/// Numbered sibling of `path` for one frame of a sequence:
/// `plots/train.svg` becomes `plots/train_003.svg` for frame 3.
pub fn frame_path(path: &Path, frame: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    let mut name = format!("{stem}_{frame:03}");
    if let Some(ext) = path.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }

    path.with_file_name(name)
}

pub fn write_scene(scene: &Scene, path: &Path, config: &DemoConfig) -> Result<(), OutputError> {
    let size = (config.canvas_width, config.canvas_height);
    let rect = plot_rect(config);

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    match extension.as_str() {
        "svg" => {
            let mut surface = SvgSurface::new(path, size);
            scene.render(&mut surface, rect)?;
            surface.present()?;
        }
        "png" => {
            let mut surface = PixmapSurface::new(size.0, size.1)?;
            scene.render(&mut surface, rect)?;
            surface.save_png(path)?;
        }
        _ => return Err(OutputError::UnsupportedFormat(extension)),
    }

    info!("wrote {}", path.display());
    Ok(())
}

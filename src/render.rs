//! Chart redraw pipeline: clear, map, draw layers in order.

use log::debug;
use thiserror::Error;

use crate::layer::{AxisStyle, Layer, LegendEntry, LegendStyle, LineStyle, MarkerStyle};
use crate::mapper::{AffineMapper, DegenerateExtentError, Extent, PixelRect};
use crate::point::Point;
use crate::surface::Surface;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Extent(#[from] DegenerateExtentError),
    #[error("drawing surface failed: {0}")]
    Surface(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Redraws the whole surface from `layers`.
///
/// All layers share one mapper built from `x`, `y` and `rect`, and later
/// layers paint over earlier ones. The surface is left untouched when either
/// extent is degenerate.
pub fn render<S: Surface>(
    surface: &mut S,
    layers: &[Layer],
    x: Extent,
    y: Extent,
    rect: PixelRect,
) -> Result<(), RenderError> {
    let mapper = AffineMapper::build(x, y, rect)?;

    debug!(
        "rendering {} layers, x {:.2}..{:.2}, y {:.2}..{:.2}",
        layers.len(),
        x.min,
        x.max,
        y.min,
        y.max
    );

    draw_layers(surface, &mapper, layers).map_err(|e| RenderError::Surface(Box::new(e)))
}

fn draw_layers<S: Surface>(
    surface: &mut S,
    mapper: &AffineMapper,
    layers: &[Layer],
) -> Result<(), S::Error> {
    surface.clear()?;

    for layer in layers {
        match layer {
            Layer::Axis(style) => draw_axis(surface, mapper, style)?,
            Layer::Scatter(points, style) => draw_scatter(surface, mapper, points, style)?,
            Layer::Polyline(points, style) => draw_polyline(surface, mapper, points, style)?,
            Layer::Legend(entries, style) => draw_legend(surface, mapper, entries, style)?,
        }
    }

    Ok(())
}

fn draw_axis<S: Surface>(
    surface: &mut S,
    mapper: &AffineMapper,
    style: &AxisStyle,
) -> Result<(), S::Error> {
    let rect = mapper.rect();
    let (left, bottom) = (rect.x, rect.bottom());

    surface.set_stroke_style(style.line_color);
    surface.set_line_width(style.line_width);

    // y-axis down to the origin corner, then the x-axis
    surface.begin_path();
    surface.move_to(left, rect.y);
    surface.line_to(left, bottom);
    surface.line_to(rect.right(), bottom);
    surface.stroke()?;

    surface.set_fill_style(style.label_color);
    surface.set_font_size(style.font_size);

    let ticks = style.ticks.max(1);
    for i in 0..=ticks {
        let t = i as f64 / ticks as f64;

        let tx = mapper.x_extent().lerp(t);
        let px = mapper.map_x(tx);
        surface.begin_path();
        surface.move_to(px, bottom);
        surface.line_to(px, bottom + style.tick_length);
        surface.stroke()?;
        surface.fill_text(
            &format!("{:.*}", style.x_precision, tx),
            px - 10.,
            bottom + 15.,
        )?;

        let ty = mapper.y_extent().lerp(t);
        let py = mapper.map_y(ty);
        surface.begin_path();
        surface.move_to(left - style.tick_length, py);
        surface.line_to(left, py);
        surface.stroke()?;
        surface.fill_text(
            &format!("{:.*}", style.y_precision, ty),
            left - style.y_label_offset,
            py + 3.,
        )?;
    }

    if let Some(title) = &style.x_title {
        surface.fill_text(title, left + rect.width / 2., bottom + 32.)?;
    }
    if let Some(title) = &style.y_title {
        surface.fill_text(title, left - style.y_label_offset, rect.y - 12.)?;
    }

    Ok(())
}

fn draw_scatter<S: Surface>(
    surface: &mut S,
    mapper: &AffineMapper,
    points: &[Point],
    style: &MarkerStyle,
) -> Result<(), S::Error> {
    surface.set_fill_style(style.color);

    for (px, py) in mapped_finite(mapper, points) {
        surface.fill_circle(px, py, style.radius)?;
    }

    Ok(())
}

/// Pixel positions of `points`, leaving out any that land on a non-finite
/// coordinate.
fn mapped_finite<'a>(
    mapper: &'a AffineMapper,
    points: &'a [Point],
) -> impl Iterator<Item = (f64, f64)> + 'a {
    points
        .iter()
        .map(move |&point| mapper.map(point))
        .filter(|(px, py)| px.is_finite() && py.is_finite())
}

fn draw_polyline<S: Surface>(
    surface: &mut S,
    mapper: &AffineMapper,
    points: &[Point],
    style: &LineStyle,
) -> Result<(), S::Error> {
    let mut mapped = mapped_finite(mapper, points);
    let (Some(first), Some(second)) = (mapped.next(), mapped.next()) else {
        return Ok(());
    };

    surface.set_stroke_style(style.color);
    surface.set_line_width(style.width);

    surface.begin_path();
    surface.move_to(first.0, first.1);
    surface.line_to(second.0, second.1);
    for (px, py) in mapped {
        surface.line_to(px, py);
    }
    surface.stroke()
}

fn draw_legend<S: Surface>(
    surface: &mut S,
    mapper: &AffineMapper,
    entries: &[LegendEntry],
    style: &LegendStyle,
) -> Result<(), S::Error> {
    let rect = mapper.rect();
    surface.set_font_size(style.font_size);

    for (i, entry) in entries.iter().enumerate() {
        let cy = rect.y + style.row_height * (i as f64 + 0.5);

        surface.set_fill_style(entry.color);
        surface.fill_circle(rect.x + 12., cy, style.swatch_radius)?;

        surface.set_fill_style(style.label_color);
        surface.fill_text(&entry.label, rect.x + 22., cy + 4.)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use plotters::style::RGBAColor;

    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};

    const BLUE: RGBAColor = RGBAColor(0, 0, 255, 1.);
    const RED: RGBAColor = RGBAColor(255, 0, 0, 1.);

    fn unit() -> (Extent, Extent, PixelRect) {
        (
            Extent::new(0., 10.),
            Extent::new(0., 10.),
            PixelRect::new(0., 0., 100., 100.),
        )
    }

    #[test]
    fn clears_before_drawing() {
        let (x, y, rect) = unit();
        let mut surface = RecordingSurface::new(100., 100.);

        render(&mut surface, &[Layer::Axis(AxisStyle::default())], x, y, rect).unwrap();

        assert!(matches!(
            surface.commands()[0],
            DrawCommand::ClearRect { .. }
        ));
    }

    #[test]
    fn degenerate_extent_leaves_surface_untouched() {
        let (x, _, rect) = unit();
        let mut surface = RecordingSurface::new(100., 100.);

        let err = render(
            &mut surface,
            &[Layer::Axis(AxisStyle::default())],
            x,
            Extent::new(2., 2.),
            rect,
        )
        .unwrap_err();

        assert!(matches!(err, RenderError::Extent(_)));
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn axis_draws_borders_ticks_and_labels() {
        let (x, y, rect) = unit();
        let mut surface = RecordingSurface::new(100., 100.);
        let style = AxisStyle {
            ticks: 4,
            ..AxisStyle::default()
        };

        render(&mut surface, &[Layer::Axis(style)], x, y, rect).unwrap();

        let paths = surface.stroked_paths();
        assert_eq!(paths.len(), 1 + 2 * 5);
        assert_eq!(paths[0], vec![(0., 0.), (0., 100.), (100., 100.)]);
        // first x tick at the origin, first y tick at the bottom
        assert_eq!(paths[1], vec![(0., 100.), (0., 105.)]);
        assert_eq!(paths[2], vec![(-5., 100.), (0., 100.)]);

        assert_eq!(
            surface.texts(),
            vec!["0.0", "0.0", "2.5", "2.5", "5.0", "5.0", "7.5", "7.5", "10.0", "10.0"]
        );
    }

    #[test]
    fn scatter_draws_one_circle_per_point() {
        let (x, y, rect) = unit();
        let mut surface = RecordingSurface::new(100., 100.);
        let points = vec![Point::new(0., 0.), Point::new(5., 5.), Point::new(10., 10.)];

        render(
            &mut surface,
            &[Layer::Scatter(points, MarkerStyle::new(BLUE, 3.))],
            x,
            y,
            rect,
        )
        .unwrap();

        let circles: Vec<_> = surface
            .commands()
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::FillCircle { cx, cy, radius } => Some((cx, cy, radius)),
                _ => None,
            })
            .collect();

        assert_eq!(
            circles,
            vec![(0., 100., 3.), (50., 50., 3.), (100., 0., 3.)]
        );
    }

    #[test]
    fn polyline_is_one_open_stroke_in_order() {
        let (x, y, rect) = unit();
        let mut surface = RecordingSurface::new(100., 100.);
        let points = vec![Point::new(0., 10.), Point::new(5., 0.), Point::new(10., 10.)];

        render(
            &mut surface,
            &[Layer::Polyline(points, LineStyle::new(RED, 2.))],
            x,
            y,
            rect,
        )
        .unwrap();

        assert_eq!(
            surface.stroked_paths(),
            vec![vec![(0., 0.), (50., 100.), (100., 0.)]]
        );
    }

    #[test]
    fn polyline_with_one_point_draws_nothing() {
        let (x, y, rect) = unit();
        let mut surface = RecordingSurface::new(100., 100.);

        render(
            &mut surface,
            &[Layer::Polyline(vec![Point::new(1., 1.)], LineStyle::new(RED, 2.))],
            x,
            y,
            rect,
        )
        .unwrap();

        assert_eq!(surface.count(|c| *c == DrawCommand::Stroke), 0);
    }

    #[test]
    fn non_finite_points_are_left_out() {
        let (x, y, rect) = unit();
        let mut surface = RecordingSurface::new(100., 100.);
        let points = vec![
            Point::new(0., 10.),
            Point::new(f64::NAN, 5.),
            Point::new(5., f64::INFINITY),
            Point::new(10., 10.),
        ];

        render(
            &mut surface,
            &[
                Layer::Polyline(points.clone(), LineStyle::new(RED, 2.)),
                Layer::Scatter(points, MarkerStyle::new(BLUE, 3.)),
            ],
            x,
            y,
            rect,
        )
        .unwrap();

        assert_eq!(surface.stroked_paths(), vec![vec![(0., 0.), (100., 0.)]]);
        assert_eq!(
            surface.count(|c| matches!(c, DrawCommand::FillCircle { .. })),
            2
        );
    }

    #[test]
    fn polyline_with_one_finite_point_draws_nothing() {
        let (x, y, rect) = unit();
        let mut surface = RecordingSurface::new(100., 100.);

        render(
            &mut surface,
            &[Layer::Polyline(
                vec![Point::new(1., 1.), Point::new(f64::NAN, f64::NAN)],
                LineStyle::new(RED, 2.),
            )],
            x,
            y,
            rect,
        )
        .unwrap();

        assert_eq!(surface.count(|c| *c == DrawCommand::Stroke), 0);
    }

    #[test]
    fn axis_titles_are_written_outside_the_plot() {
        let (x, y, rect) = unit();
        let mut surface = RecordingSurface::new(100., 100.);

        render(&mut surface, &[Layer::Axis(AxisStyle::titled(2))], x, y, rect).unwrap();

        let texts = surface.texts();
        assert_eq!(texts[texts.len() - 2..], ["x", "y"]);
        assert!(surface.commands().contains(&DrawCommand::FillText {
            text: "x".to_owned(),
            x: 50.,
            y: 132.,
        }));
    }

    #[test]
    fn legend_stacks_swatch_and_label_rows() {
        let (x, y, rect) = unit();
        let mut surface = RecordingSurface::new(100., 100.);

        render(
            &mut surface,
            &[Layer::Legend(
                vec![LegendEntry::new("Class 0", BLUE), LegendEntry::new("Class 1", RED)],
                LegendStyle::default(),
            )],
            x,
            y,
            rect,
        )
        .unwrap();

        assert_eq!(surface.texts(), vec!["Class 0", "Class 1"]);
        let swatches: Vec<_> = surface
            .commands()
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::FillCircle { cx, cy, .. } => Some((cx, cy)),
                _ => None,
            })
            .collect();
        assert_eq!(swatches, vec![(12., 8.), (12., 24.)]);
        assert!(surface.commands().contains(&DrawCommand::SetFillStyle(RED)));
    }

    #[test]
    fn layers_are_drawn_in_given_order() {
        let (x, y, rect) = unit();
        let mut surface = RecordingSurface::new(100., 100.);

        render(
            &mut surface,
            &[
                Layer::Polyline(
                    vec![Point::new(0., 0.), Point::new(10., 10.)],
                    LineStyle::new(RED, 2.),
                ),
                Layer::Scatter(vec![Point::new(5., 5.)], MarkerStyle::new(BLUE, 3.)),
            ],
            x,
            y,
            rect,
        )
        .unwrap();

        let stroke_at = surface
            .commands()
            .iter()
            .position(|c| *c == DrawCommand::Stroke)
            .unwrap();
        let circle_at = surface
            .commands()
            .iter()
            .position(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .unwrap();

        assert!(stroke_at < circle_at);
    }
}

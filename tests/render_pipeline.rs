use plotters::style::RGBAColor;

use ml_primer_demos::config::DemoConfig;
use ml_primer_demos::layer::{AxisStyle, Layer, LineStyle, MarkerStyle};
use ml_primer_demos::mapper::{Extent, PixelRect};
use ml_primer_demos::point::Point;
use ml_primer_demos::regression::{least_squares, step, LinearModel};
use ml_primer_demos::render::{render, RenderError};
use ml_primer_demos::scene::{self, plot_rect};
use ml_primer_demos::surface::{DrawCommand, PixmapSurface, RecordingSurface};

const BLUE: RGBAColor = RGBAColor(0, 0, 255, 1.);
const RED: RGBAColor = RGBAColor(255, 0, 0, 1.);

fn window() -> (Extent, Extent, PixelRect) {
    (
        Extent::new(0., 10.),
        Extent::new(0., 10.),
        PixelRect::new(0., 0., 100., 100.),
    )
}

#[test]
fn empty_scatter_renders_axes_only() {
    let (x, y, rect) = window();
    let mut surface = RecordingSurface::new(100., 100.);

    render(
        &mut surface,
        &[
            Layer::Axis(AxisStyle::default()),
            Layer::Scatter(Vec::new(), MarkerStyle::new(BLUE, 3.)),
            Layer::Polyline(Vec::new(), LineStyle::new(RED, 2.)),
        ],
        x,
        y,
        rect,
    )
    .unwrap();

    assert_eq!(
        surface.count(|c| matches!(c, DrawCommand::ClearRect { .. })),
        1
    );
    assert_eq!(
        surface.count(|c| matches!(c, DrawCommand::FillCircle { .. })),
        0
    );
    // border path plus two tick marks for each of the six tick positions
    assert_eq!(surface.stroked_paths().len(), 1 + 2 * 6);
}

#[test]
fn later_layer_wins_where_layers_overlap() {
    let (x, y, rect) = window();
    let mut surface = PixmapSurface::new(100, 100).unwrap();

    render(
        &mut surface,
        &[
            Layer::Scatter(vec![Point::new(5., 5.)], MarkerStyle::new(BLUE, 3.)),
            Layer::Polyline(
                vec![Point::new(0., 5.), Point::new(10., 5.)],
                LineStyle::new(RED, 4.),
            ),
        ],
        x,
        y,
        rect,
    )
    .unwrap();

    assert_eq!(surface.pixel(50, 50), Some([255, 0, 0, 255]));
}

#[test]
fn reversed_order_puts_scatter_on_top() {
    let (x, y, rect) = window();
    let mut surface = PixmapSurface::new(100, 100).unwrap();

    render(
        &mut surface,
        &[
            Layer::Polyline(
                vec![Point::new(0., 5.), Point::new(10., 5.)],
                LineStyle::new(RED, 4.),
            ),
            Layer::Scatter(vec![Point::new(5., 5.)], MarkerStyle::new(BLUE, 3.)),
        ],
        x,
        y,
        rect,
    )
    .unwrap();

    assert_eq!(surface.pixel(50, 50), Some([0, 0, 255, 255]));
}

#[test]
fn rerender_starts_from_a_clean_surface() {
    let (x, y, rect) = window();
    let mut surface = PixmapSurface::new(100, 100).unwrap();

    render(
        &mut surface,
        &[Layer::Scatter(vec![Point::new(5., 5.)], MarkerStyle::new(BLUE, 3.))],
        x,
        y,
        rect,
    )
    .unwrap();
    render(
        &mut surface,
        &[Layer::Scatter(vec![Point::new(1., 1.)], MarkerStyle::new(BLUE, 3.))],
        x,
        y,
        rect,
    )
    .unwrap();

    assert_eq!(surface.pixel(50, 50), Some([0, 0, 0, 0]));
    assert_eq!(surface.pixel(10, 90), Some([0, 0, 255, 255]));
}

#[test]
fn degenerate_x_extent_is_reported() {
    let (_, y, rect) = window();
    let mut surface = RecordingSurface::new(100., 100.);

    let err = render(&mut surface, &[], Extent::new(3., 3.), y, rect).unwrap_err();

    assert!(matches!(err, RenderError::Extent(e) if e.min == 3. && e.max == 3.));
}

#[test]
fn regression_demo_points_land_inside_plot_area() {
    let config = DemoConfig::default();
    let data: Vec<Point> = (0..30)
        .map(|i| {
            let x = i as f64 / 29. * 10.;
            Point::new(x, 1.5 * x - 2. + if i % 2 == 0 { 1. } else { -1. })
        })
        .collect();

    let scene = scene::regression_fit(&data, LinearModel::new(3., 5.), &config);
    let rect = plot_rect(&config);
    let mut surface = RecordingSurface::new(600., 400.);
    scene.render(&mut surface, rect).unwrap();

    let circles: Vec<(f64, f64)> = surface
        .commands()
        .iter()
        .filter_map(|c| match *c {
            DrawCommand::FillCircle { cx, cy, .. } => Some((cx, cy)),
            _ => None,
        })
        .collect();
    assert_eq!(circles.len(), 30);
    for (cx, cy) in circles {
        assert!(cx >= rect.x - 1e-9 && cx <= rect.right() + 1e-9);
        assert!(cy >= rect.y && cy <= rect.bottom());
    }

    // the candidate line is the last stroke and spans the full plot width
    let line = surface.stroked_paths().pop().unwrap();
    assert_eq!(line.len(), 2);
    assert!((line[0].0 - rect.x).abs() < 1e-9);
    assert!((line[1].0 - rect.right()).abs() < 1e-9);
    // with padding the line endpoints stay off the top and bottom edges
    assert!(line[1].1 > rect.y);
}

#[test]
fn trainer_line_converges_towards_least_squares() {
    let data: Vec<Point> = (0..20)
        .map(|i| {
            let x = i as f64 * 0.25;
            Point::new(x, 3. * x + 1. + if i % 3 == 0 { 0.5 } else { -0.25 })
        })
        .collect();
    let best = least_squares(&data).unwrap();

    let model = (0..5000).fold(LinearModel::default(), |model, _| step(model, &data, 0.02));

    assert!((model.m - best.m).abs() < 1e-6);
    assert!((model.b - best.b).abs() < 1e-6);
}

#[test]
fn descent_scene_marks_every_visited_weight() {
    let config = DemoConfig::default();
    let scene = scene::gradient_descent(0.3, &config);
    let mut surface = RecordingSurface::new(600., 400.);

    scene.render(&mut surface, plot_rect(&config)).unwrap();

    assert_eq!(
        surface.count(|c| matches!(c, DrawCommand::FillCircle { .. })),
        config.descent.steps + 1
    );
    // y labels use whole numbers on the descent chart
    assert!(surface.texts().contains(&"16"));
    assert!(surface.texts().contains(&"-4.0"));
}

#[test]
fn runaway_descent_path_still_shows_on_png() {
    let config = DemoConfig::default();
    let mut surface = PixmapSurface::new(600, 400).unwrap();

    // alpha 10 sends the later weights far past what f32 can hold
    scene::gradient_descent(10., &config)
        .render(&mut surface, plot_rect(&config))
        .unwrap();

    // first segment leaves (527.5, 115) almost straight upwards
    let [r, g, b, a] = surface.pixel(526, 100).unwrap();
    assert!(a > 200);
    assert!(r > 250 && (188..=198).contains(&g) && b < 15);
}

#[test]
fn diverged_trainer_renders_data_without_a_line() {
    let config = DemoConfig::default();
    let data: Vec<Point> = (0..50)
        .map(|i| Point::new(i as f64 * 0.1, 3. * i as f64 * 0.1 + 1.))
        .collect();

    let model = (0..2000).fold(LinearModel::default(), |model, _| step(model, &data, 0.5));
    assert!(!model.m.is_finite());

    let scene = scene::trainer(&data, model, &config);
    let mut surface = RecordingSurface::new(600., 400.);
    scene.render(&mut surface, plot_rect(&config)).unwrap();

    // data markers plus the two legend swatches, no model line
    assert_eq!(
        surface.count(|c| matches!(c, DrawCommand::FillCircle { .. })),
        52
    );
    assert!(scene.y.max < 20.);
}

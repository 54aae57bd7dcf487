use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use delaunay_sketch::render::{Color, RenderStyle, Renderer, SvgRenderer};
use delaunay_sketch::{
    super_triangle, Circle, Point2, RandomPointSource, Rectangle, Triangulation,
};
use tracing_subscriber::EnvFilter;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;
const NUM_POINTS: usize = 40;
const SEED: [u8; 32] = *b"delaunay-sketch demo seed 000001";

/// Renders a few svg files into the directory given as first argument (default: `images`).
///
/// * `construction.svg`: a rectangle, its bounding circle, its center and the enclosing
///   super-triangle
/// * `step_NN.svg`: the working set after each of the first few insertions
/// * `triangulation.svg`: the final triangulation of all points and its circumcircles
fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let directory = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("images"));
    std::fs::create_dir_all(&directory)
        .with_context(|| format!("could not create {}", directory.display()))?;

    construction_sketch(&directory)?;
    triangulation_sketches(&directory)?;
    Ok(())
}

fn construction_sketch(directory: &Path) -> Result<()> {
    let mut renderer = SvgRenderer::new(WIDTH, HEIGHT).with_background(Color::WHITE);
    let rect = Rectangle::from_xywh(80.0, 100.0, 150.0, 50.0);
    let style = RenderStyle::stroke(Color::DIM_GRAY);

    renderer.draw_rectangle(&rect, &style);
    renderer.draw_circle(&Circle::bounding(&rect), &style);
    renderer.draw_point(rect.center(), &RenderStyle::stroke(Color::CRIMSON));
    renderer.draw_triangle(
        &super_triangle(&rect, 1.0),
        &RenderStyle::stroke(Color::DODGER_BLUE),
    );

    renderer.save(directory.join("construction.svg"))?;
    Ok(())
}

fn triangulation_sketches(directory: &Path) -> Result<()> {
    let canvas = Rectangle::from_xywh(0.0, 0.0, WIDTH, HEIGHT);
    let area = Rectangle::from_xywh(100.0, 100.0, WIDTH - 200.0, HEIGHT - 200.0);
    let points: Vec<Point2<f64>> = RandomPointSource::from_seed(SEED).points_in(&area, NUM_POINTS);
    let bounds =
        Rectangle::enclosing(points.iter().copied(), 1.0).context("no points to triangulate")?;

    let edge_style = RenderStyle::stroke(Color::DIM_GRAY);
    let scaffold_style = RenderStyle::stroke(Color::LIGHT_GRAY);
    let point_style = RenderStyle::stroke(Color::CRIMSON).with_point_radius(3.0);

    let mut triangulation = Triangulation::new(bounds);
    for (index, point) in points.iter().enumerate() {
        let affected = triangulation.affected_triangles(*point)?;
        triangulation.insert(*point)?;

        if index < 5 {
            let mut renderer = SvgRenderer::new(WIDTH, HEIGHT).with_background(Color::WHITE);
            renderer.draw_rectangle(&canvas, &scaffold_style);
            renderer.draw_triangles(
                &affected,
                &RenderStyle::stroke(Color::CORAL)
                    .with_fill(Color::CORAL)
                    .with_fill_opacity(0.3),
            );
            renderer.draw_triangles(triangulation.triangles(), &scaffold_style);
            renderer.draw_triangles(&triangulation.result_triangles(), &edge_style);
            renderer.draw_points(triangulation.vertices(), &point_style);
            renderer.save(directory.join(format!("step_{:02}.svg", index)))?;
        }
    }

    let statistics = triangulation.statistics();
    let triangles = triangulation.finish()?;
    tracing::info!(
        points = points.len(),
        triangles = triangles.len(),
        flips = statistics.flips,
        cancelled = statistics.cancelled_duplicates,
        "triangulated random points"
    );

    let mut renderer = SvgRenderer::new(WIDTH, HEIGHT).with_background(Color::WHITE);
    let circle_style = RenderStyle::stroke(Color::LAWN_GREEN).with_stroke_width(0.5);
    for triangle in &triangles {
        renderer.draw_circle(&triangle.circumcircle()?, &circle_style);
    }
    renderer.draw_triangles(&triangles, &edge_style.with_stroke_width(1.5));
    renderer.draw_points(&points, &point_style);
    renderer.save(directory.join("triangulation.svg"))?;
    Ok(())
}

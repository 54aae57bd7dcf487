//! Drawing of triangulations and their construction geometry.
//!
//! The [Renderer] trait describes a drawing surface for the crate's primitives. Each draw
//! call receives an explicit [RenderStyle]; renderers do not keep any implicit "current"
//! stroke or fill state between calls.
//!
//! [SvgRenderer] is the only built-in renderer. It collects all primitives into an svg
//! document which can be written to a file or converted into a string.
//!
//! Coordinates are passed through unchanged. Since svg uses a y-down coordinate system,
//! counterclockwise triangles appear clockwise in the rendered image.
use std::fmt::Display;
use std::path::Path;

use svg::node::element::{
    Circle as SvgCircle, Group, Line, Polygon, Rectangle as SvgRectangle,
};
use svg::{Document, Node};

use crate::{Circle, Point2, Rectangle, SketchNum, Triangle};

/// An rgb color.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
pub struct Color {
    /// The red channel
    pub red: u8,
    /// The green channel
    pub green: u8,
    /// The blue channel
    pub blue: u8,
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({} {} {})", self.red, self.green, self.blue)
    }
}

impl Color {
    /// Creates a color from its channels.
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    #[allow(missing_docs)]
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    #[allow(missing_docs)]
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    #[allow(missing_docs)]
    pub const DIM_GRAY: Self = Self::from_rgb(105, 105, 105);
    #[allow(missing_docs)]
    pub const LIGHT_GRAY: Self = Self::from_rgb(211, 211, 211);
    #[allow(missing_docs)]
    pub const DODGER_BLUE: Self = Self::from_rgb(30, 144, 255);
    #[allow(missing_docs)]
    pub const CORAL: Self = Self::from_rgb(255, 127, 80);
    #[allow(missing_docs)]
    pub const LAWN_GREEN: Self = Self::from_rgb(124, 252, 0);
    #[allow(missing_docs)]
    pub const CRIMSON: Self = Self::from_rgb(220, 20, 60);
}

/// Stroke and fill settings for a single draw call.
///
/// The default style draws a black, one unit wide outline without fill. Points are drawn
/// as filled circles with [point_radius](Self::point_radius), using the stroke color if no
/// fill is set.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderStyle {
    /// The outline color
    pub stroke: Color,
    /// The stroke width
    pub stroke_width: f64,
    /// The fill color. `None` leaves the shape unfilled.
    pub fill: Option<Color>,
    /// The opacity of the fill, between 0 and 1
    pub fill_opacity: f64,
    /// The radius used when drawing points
    pub point_radius: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            stroke: Color::BLACK,
            stroke_width: 1.0,
            fill: None,
            fill_opacity: 1.0,
            point_radius: 2.0,
        }
    }
}

impl RenderStyle {
    /// Creates the default style with the given stroke color.
    pub fn stroke(color: Color) -> Self {
        Self {
            stroke: color,
            ..Default::default()
        }
    }

    /// Sets the stroke width.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the fill color.
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Sets the fill opacity. The value is clamped into `0.0..=1.0`.
    pub fn with_fill_opacity(mut self, fill_opacity: f64) -> Self {
        self.fill_opacity = fill_opacity.clamp(0.0, 1.0);
        self
    }

    /// Sets the radius used for drawing points.
    pub fn with_point_radius(mut self, point_radius: f64) -> Self {
        self.point_radius = point_radius;
        self
    }

    fn shape_attribute_string(&self) -> String {
        let fill = match self.fill {
            Some(color) => color.to_string(),
            None => "none".to_string(),
        };
        format!(
            "stroke: {}; stroke-width: {}; fill: {}; fill-opacity: {}",
            self.stroke, self.stroke_width, fill, self.fill_opacity
        )
    }

    fn point_attribute_string(&self) -> String {
        format!(
            "stroke: none; fill: {}; fill-opacity: {}",
            self.fill.unwrap_or(self.stroke),
            self.fill_opacity
        )
    }
}

/// A drawing surface for points, triangles, circles and rectangles.
pub trait Renderer<S: SketchNum> {
    /// Draws a single point.
    fn draw_point(&mut self, point: Point2<S>, style: &RenderStyle);

    /// Draws the outline of a triangle.
    fn draw_triangle(&mut self, triangle: &Triangle<S>, style: &RenderStyle);

    /// Draws a circle.
    fn draw_circle(&mut self, circle: &Circle<S>, style: &RenderStyle);

    /// Draws an axis aligned rectangle.
    fn draw_rectangle(&mut self, rectangle: &Rectangle<S>, style: &RenderStyle);

    /// Draws a straight line between two points.
    fn draw_line(&mut self, from: Point2<S>, to: Point2<S>, style: &RenderStyle);

    /// Draws all given points with the same style.
    fn draw_points(&mut self, points: &[Point2<S>], style: &RenderStyle) {
        for point in points {
            self.draw_point(*point, style);
        }
    }

    /// Draws all given triangles with the same style.
    fn draw_triangles(&mut self, triangles: &[Triangle<S>], style: &RenderStyle) {
        for triangle in triangles {
            self.draw_triangle(triangle, style);
        }
    }
}

/// Renders primitives into an svg document.
///
/// # Example
/// ```
/// use delaunay_sketch::render::{Color, RenderStyle, Renderer, SvgRenderer};
/// use delaunay_sketch::{Point2, Triangle};
///
/// let mut renderer = SvgRenderer::new(100.0, 100.0);
/// let triangle = Triangle::new(
///     Point2::new(10.0, 10.0),
///     Point2::new(90.0, 10.0),
///     Point2::new(50.0, 80.0),
/// );
/// renderer.draw_triangle(&triangle, &RenderStyle::stroke(Color::DODGER_BLUE));
/// assert!(renderer.to_document().to_string().contains("<polygon"));
/// ```
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    width: f64,
    height: f64,
    background: Option<Color>,
    content: Group,
    num_elements: usize,
}

impl SvgRenderer {
    /// Creates an empty renderer for a canvas of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: None,
            content: Group::new(),
            num_elements: 0,
        }
    }

    /// Fills the canvas with a background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// The number of primitives drawn so far.
    pub fn num_elements(&self) -> usize {
        self.num_elements
    }

    /// Removes all drawn primitives.
    pub fn clear(&mut self) {
        self.content = Group::new();
        self.num_elements = 0;
    }

    /// Creates an svg document containing everything drawn so far.
    pub fn to_document(&self) -> Document {
        let mut document = Document::new()
            .set("width", self.width)
            .set("height", self.height)
            .set("viewBox", format!("0 0 {} {}", self.width, self.height));

        if let Some(background) = self.background {
            document = document.add(
                SvgRectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("style", format!("fill: {}", background)),
            );
        }
        document.add(self.content.clone())
    }

    /// Writes the svg document into a file.
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let path = path.as_ref();
        svg::save(path, &self.to_document())?;
        tracing::info!(path = %path.display(), elements = self.num_elements, "saved svg");
        Ok(())
    }

    fn push<T>(&mut self, node: T)
    where
        T: Into<Box<dyn Node>>,
    {
        let content = std::mem::replace(&mut self.content, Group::new());
        self.content = content.add(node);
        self.num_elements += 1;
    }
}

fn to_f64<S: SketchNum>(point: Point2<S>) -> (f64, f64) {
    (point.x.into(), point.y.into())
}

impl<S: SketchNum> Renderer<S> for SvgRenderer {
    fn draw_point(&mut self, point: Point2<S>, style: &RenderStyle) {
        let (x, y) = to_f64(point);
        self.push(
            SvgCircle::new()
                .set("cx", x)
                .set("cy", y)
                .set("r", style.point_radius)
                .set("style", style.point_attribute_string()),
        );
    }

    fn draw_triangle(&mut self, triangle: &Triangle<S>, style: &RenderStyle) {
        let points = triangle
            .vertices()
            .iter()
            .map(|vertex| {
                let (x, y) = to_f64(*vertex);
                format!("{},{}", x, y)
            })
            .collect::<Vec<_>>()
            .join(" ");
        self.push(
            Polygon::new()
                .set("points", points)
                .set("style", style.shape_attribute_string()),
        );
    }

    fn draw_circle(&mut self, circle: &Circle<S>, style: &RenderStyle) {
        let (x, y) = to_f64(circle.center);
        let radius: f64 = circle.radius.into();
        self.push(
            SvgCircle::new()
                .set("cx", x)
                .set("cy", y)
                .set("r", radius)
                .set("style", style.shape_attribute_string()),
        );
    }

    fn draw_rectangle(&mut self, rectangle: &Rectangle<S>, style: &RenderStyle) {
        let (x, y) = to_f64(rectangle.position());
        let width: f64 = rectangle.size().width.into();
        let height: f64 = rectangle.size().height.into();
        self.push(
            SvgRectangle::new()
                .set("x", x)
                .set("y", y)
                .set("width", width)
                .set("height", height)
                .set("style", style.shape_attribute_string()),
        );
    }

    fn draw_line(&mut self, from: Point2<S>, to: Point2<S>, style: &RenderStyle) {
        let (x1, y1) = to_f64(from);
        let (x2, y2) = to_f64(to);
        self.push(
            Line::new()
                .set("x1", x1)
                .set("y1", y1)
                .set("x2", x2)
                .set("y2", y2)
                .set("style", style.shape_attribute_string()),
        );
    }
}

#[cfg(test)]
mod test {
    use super::{Color, RenderStyle, Renderer, SvgRenderer};
    use crate::{Circle, Point2, Rectangle, Triangle};

    #[test]
    fn test_color_display() {
        assert_eq!(Color::from_rgb(1, 2, 3).to_string(), "rgb(1 2 3)");
    }

    #[test]
    fn test_style_attributes() {
        let style = RenderStyle::stroke(Color::CORAL)
            .with_stroke_width(2.5)
            .with_fill(Color::WHITE)
            .with_fill_opacity(3.0);
        assert_eq!(style.fill_opacity, 1.0);
        assert_eq!(
            style.shape_attribute_string(),
            "stroke: rgb(255 127 80); stroke-width: 2.5; fill: rgb(255 255 255); fill-opacity: 1"
        );
        assert!(RenderStyle::default()
            .shape_attribute_string()
            .contains("fill: none"));
        assert!(RenderStyle::default()
            .point_attribute_string()
            .contains("fill: rgb(0 0 0)"));
    }

    #[test]
    fn test_svg_output() {
        let mut renderer = SvgRenderer::new(200.0, 100.0).with_background(Color::WHITE);
        let style = RenderStyle::default();
        let rect = Rectangle::from_xywh(10.0f64, 20.0, 30.0, 40.0);

        renderer.draw_rectangle(&rect, &style);
        renderer.draw_circle(&Circle::bounding(&rect), &style);
        renderer.draw_point(rect.center(), &style);
        renderer.draw_line(Point2::new(0.0, 0.0), Point2::new(5.0, 5.0), &style);
        renderer.draw_triangle(
            &Triangle::new(
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(0.0, 10.0),
            ),
            &style,
        );
        assert_eq!(renderer.num_elements(), 5);

        let output = renderer.to_document().to_string();
        for tag in ["<svg", "<rect", "<circle", "<line", "<polygon", "<g"] {
            assert!(output.contains(tag), "missing {} in {}", tag, output);
        }
        assert!(output.contains("viewBox=\"0 0 200 100\""));
        assert!(output.contains("points=\"0,0 10,0 0,10\""));

        renderer.clear();
        assert_eq!(renderer.num_elements(), 0);
        assert!(!renderer.to_document().to_string().contains("<polygon"));
    }

    #[test]
    fn test_draw_many() {
        let mut renderer = SvgRenderer::new(10.0, 10.0);
        let points = [Point2::new(1.0f32, 1.0), Point2::new(2.0, 2.0)];
        renderer.draw_points(&points, &RenderStyle::default());
        assert_eq!(renderer.num_elements(), 2);
    }
}

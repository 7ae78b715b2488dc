//! # VecKit SVG
//!
//! SVG document boundary for the VecKit drawing engine.
//!
//! ## Features
//!
//! - **Document parsing**: lightweight scanning of SVG markup
//! - **Basic shapes**: rect, circle, ellipse, line, polyline
//! - **Paths**: delegated to `veckit-path`
//! - **Styling**: fill, stroke, stroke-width with color normalization
//!
//! ## Architecture
//!
//! ```text
//! SVG markup
//!    └── SvgDocument (width, height)
//!           └── SvgElement list
//!                  ├── typed shape structs
//!                  └── SvgPath (PathProgram)
//!                         └── DrawingContext calls
//! ```
//!
//! Every shape parses into an explicit typed struct with validated, defaulted
//! fields, then draws itself against a [`DrawingContext`] with the shared
//! fill/stroke issuance order: fill (preserved when a stroke follows), then
//! stroke.

use std::collections::HashMap;
use std::f32::consts::PI;
use thiserror::Error;
use tracing::debug;
use veckit_canvas::DrawingContext;
use veckit_geometry::Point;
use veckit_path::{PathError, PathProgram};

// ==================== Errors ====================

/// Errors that can occur in SVG operations.
#[derive(Error, Debug)]
pub enum SvgError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid attribute: {0}")]
    InvalidAttribute(String),

    #[error("Invalid path: {0}")]
    InvalidPath(#[from] PathError),
}

// ==================== Color ====================

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to 0..1, the range the drawing context consumes.
    pub fn to_rgb_f32(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }

    /// Parse a color in any supported textual form: `#rgb`, `#rrggbb`,
    /// `rgb(r,g,b)`, or a color name.
    pub fn parse(value: &str) -> Option<Color> {
        let value = value.trim().to_lowercase();

        if let Some(hex) = value.strip_prefix('#') {
            return match hex.len() {
                3 => {
                    let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
                    let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
                    let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
                    Some(Color::from_rgb(r, g, b))
                }
                6 => {
                    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                    Some(Color::from_rgb(r, g, b))
                }
                _ => None,
            };
        }

        if let Some(inner) = value.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
            let parts: Vec<&str> = inner.split(',').collect();
            if parts.len() == 3 {
                let r: u8 = parts[0].trim().parse().ok()?;
                let g: u8 = parts[1].trim().parse().ok()?;
                let b: u8 = parts[2].trim().parse().ok()?;
                return Some(Color::from_rgb(r, g, b));
            }
            return None;
        }

        match value.as_str() {
            "black" => Some(Color::from_rgb(0, 0, 0)),
            "white" => Some(Color::from_rgb(255, 255, 255)),
            "red" => Some(Color::from_rgb(255, 0, 0)),
            "green" => Some(Color::from_rgb(0, 128, 0)),
            "blue" => Some(Color::from_rgb(0, 0, 255)),
            "yellow" => Some(Color::from_rgb(255, 255, 0)),
            "cyan" => Some(Color::from_rgb(0, 255, 255)),
            "magenta" => Some(Color::from_rgb(255, 0, 255)),
            "gray" | "grey" => Some(Color::from_rgb(128, 128, 128)),
            "orange" => Some(Color::from_rgb(255, 165, 0)),
            "purple" => Some(Color::from_rgb(128, 0, 128)),
            "pink" => Some(Color::from_rgb(255, 192, 203)),
            "brown" => Some(Color::from_rgb(165, 42, 42)),
            _ => None,
        }
    }
}

// ==================== Paint Style ====================

/// Fill and stroke configuration shared by every element kind.
///
/// Defaults follow the SVG rendering model the engine supports: elements fill
/// black unless `fill="none"`, stroke only when a stroke color is given, and
/// stroke width defaults to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintStyle {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f32,
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self {
            fill: Some(Color::BLACK),
            stroke: None,
            stroke_width: 1.0,
        }
    }
}

impl PaintStyle {
    fn from_attributes(attrs: &HashMap<String, String>) -> Result<Self, SvgError> {
        let fill = match attrs.get("fill").map(String::as_str) {
            Some("none") => None,
            Some(value) => Some(parse_color_attribute("fill", value)?),
            None => Some(Color::BLACK),
        };

        let stroke = match attrs.get("stroke").map(String::as_str) {
            Some("none") | None => None,
            Some(value) => Some(parse_color_attribute("stroke", value)?),
        };

        let stroke_width = optional_f32(attrs, "stroke-width", 1.0)?;

        Ok(Self { fill, stroke, stroke_width })
    }

    /// Issue the fill/stroke calls for the current path. The fill is
    /// preserved when a stroke follows so both paint the same path.
    pub fn paint(&self, ctx: &mut dyn DrawingContext) {
        if let Some(color) = self.fill {
            let (r, g, b) = color.to_rgb_f32();
            ctx.set_source_rgb(r, g, b);
            if self.stroke.is_some() {
                ctx.fill_preserve();
            } else {
                ctx.fill();
            }
        }

        if let Some(color) = self.stroke {
            let (r, g, b) = color.to_rgb_f32();
            ctx.set_source_rgb(r, g, b);
            ctx.set_line_width(self.stroke_width);
            ctx.stroke();
        }
    }
}

// ==================== Attribute Helpers ====================

fn parse_color_attribute(name: &str, value: &str) -> Result<Color, SvgError> {
    Color::parse(value)
        .ok_or_else(|| SvgError::InvalidAttribute(format!("unrecognized {name} color `{value}`")))
}

fn required<'a>(
    attrs: &'a HashMap<String, String>,
    name: &str,
    element: &str,
) -> Result<&'a str, SvgError> {
    attrs
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| SvgError::InvalidAttribute(format!("<{element}> is missing `{name}`")))
}

fn parse_f32(name: &str, value: &str) -> Result<f32, SvgError> {
    value
        .trim()
        .parse()
        .map_err(|_| SvgError::InvalidAttribute(format!("`{name}` is not a number: `{value}`")))
}

/// A missing attribute falls back to `default`; a malformed one is an error.
fn optional_f32(
    attrs: &HashMap<String, String>,
    name: &str,
    default: f32,
) -> Result<f32, SvgError> {
    match attrs.get(name) {
        Some(value) => parse_f32(name, value),
        None => Ok(default),
    }
}

/// Parse a length that may be a percentage of `reference`.
fn parse_length(name: &str, value: &str, reference: f32) -> Result<f32, SvgError> {
    match value.trim().strip_suffix('%') {
        Some(percent) => Ok(parse_f32(name, percent)? / 100.0 * reference),
        None => parse_f32(name, value),
    }
}

// ==================== Shapes ====================

/// Rectangle element (`<rect>`).
#[derive(Debug, Clone, PartialEq)]
pub struct SvgRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub style: PaintStyle,
}

impl SvgRect {
    /// `x`/`y` default to 0; `width`/`height` are required and may be
    /// percentages of the canvas size.
    pub fn from_attributes(
        attrs: &HashMap<String, String>,
        canvas: (f32, f32),
    ) -> Result<Self, SvgError> {
        let (canvas_width, canvas_height) = canvas;
        Ok(Self {
            x: optional_f32(attrs, "x", 0.0)?,
            y: optional_f32(attrs, "y", 0.0)?,
            width: parse_length("width", required(attrs, "width", "rect")?, canvas_width)?,
            height: parse_length("height", required(attrs, "height", "rect")?, canvas_height)?,
            style: PaintStyle::from_attributes(attrs)?,
        })
    }

    pub fn draw(&self, ctx: &mut dyn DrawingContext) {
        ctx.rectangle(self.x, self.y, self.width, self.height);
        self.style.paint(ctx);
    }
}

/// Circle element (`<circle>`).
#[derive(Debug, Clone, PartialEq)]
pub struct SvgCircle {
    pub cx: f32,
    pub cy: f32,
    pub r: f32,
    pub style: PaintStyle,
}

impl SvgCircle {
    /// `cx`/`cy` default to 0; `r` is required.
    pub fn from_attributes(attrs: &HashMap<String, String>) -> Result<Self, SvgError> {
        Ok(Self {
            cx: optional_f32(attrs, "cx", 0.0)?,
            cy: optional_f32(attrs, "cy", 0.0)?,
            r: parse_f32("r", required(attrs, "r", "circle")?)?,
            style: PaintStyle::from_attributes(attrs)?,
        })
    }

    pub fn draw(&self, ctx: &mut dyn DrawingContext) {
        ctx.arc(Point::new(self.cx, self.cy), self.r, 0.0, 2.0 * PI);
        self.style.paint(ctx);
    }
}

/// Ellipse element (`<ellipse>`).
#[derive(Debug, Clone, PartialEq)]
pub struct SvgEllipse {
    pub cx: f32,
    pub cy: f32,
    pub rx: f32,
    pub ry: f32,
    pub style: PaintStyle,
}

impl SvgEllipse {
    /// `cx`/`cy` default to 0; `rx`/`ry` are required.
    pub fn from_attributes(attrs: &HashMap<String, String>) -> Result<Self, SvgError> {
        Ok(Self {
            cx: optional_f32(attrs, "cx", 0.0)?,
            cy: optional_f32(attrs, "cy", 0.0)?,
            rx: parse_f32("rx", required(attrs, "rx", "ellipse")?)?,
            ry: parse_f32("ry", required(attrs, "ry", "ellipse")?)?,
            style: PaintStyle::from_attributes(attrs)?,
        })
    }

    /// An ellipse is a unit circle drawn inside a scoped translate + scale.
    /// The fill happens inside the scope; the stroke after restoring, so the
    /// stroke width is not distorted by the scale.
    pub fn draw(&self, ctx: &mut dyn DrawingContext) {
        ctx.save();
        ctx.translate(self.cx, self.cy);
        ctx.scale(self.rx, self.ry);
        ctx.arc(Point::ORIGIN, 1.0, 0.0, 2.0 * PI);

        if let Some(color) = self.style.fill {
            let (r, g, b) = color.to_rgb_f32();
            ctx.set_source_rgb(r, g, b);
            if self.style.stroke.is_some() {
                ctx.fill_preserve();
            } else {
                ctx.fill();
            }
        }

        ctx.restore();

        if let Some(color) = self.style.stroke {
            let (r, g, b) = color.to_rgb_f32();
            ctx.set_source_rgb(r, g, b);
            ctx.set_line_width(self.style.stroke_width);
            ctx.stroke();
        }
    }
}

/// Line element (`<line>`).
#[derive(Debug, Clone, PartialEq)]
pub struct SvgLine {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub style: PaintStyle,
}

impl SvgLine {
    /// All coordinates default to 0. Lines never fill.
    pub fn from_attributes(attrs: &HashMap<String, String>) -> Result<Self, SvgError> {
        Ok(Self {
            x1: optional_f32(attrs, "x1", 0.0)?,
            y1: optional_f32(attrs, "y1", 0.0)?,
            x2: optional_f32(attrs, "x2", 0.0)?,
            y2: optional_f32(attrs, "y2", 0.0)?,
            style: PaintStyle {
                fill: None,
                ..PaintStyle::from_attributes(attrs)?
            },
        })
    }

    pub fn draw(&self, ctx: &mut dyn DrawingContext) {
        ctx.move_to(self.x1, self.y1);
        ctx.line_to(self.x2, self.y2);
        self.style.paint(ctx);
    }
}

/// Polyline element (`<polyline>`).
#[derive(Debug, Clone, PartialEq)]
pub struct SvgPolyline {
    pub points: Vec<Point>,
    pub style: PaintStyle,
}

impl SvgPolyline {
    pub fn from_attributes(attrs: &HashMap<String, String>) -> Result<Self, SvgError> {
        Ok(Self {
            points: parse_points(required(attrs, "points", "polyline")?)?,
            style: PaintStyle::from_attributes(attrs)?,
        })
    }

    pub fn draw(&self, ctx: &mut dyn DrawingContext) {
        let mut points = self.points.iter();
        if let Some(first) = points.next() {
            ctx.move_to(first.x, first.y);
            for point in points {
                ctx.line_to(point.x, point.y);
            }
        }
        self.style.paint(ctx);
    }
}

/// Parse a `points` attribute: whitespace-separated `x,y` pairs.
fn parse_points(value: &str) -> Result<Vec<Point>, SvgError> {
    let mut points = Vec::new();
    for pair in value.split_whitespace() {
        let (x, y) = pair.split_once(',').ok_or_else(|| {
            SvgError::InvalidAttribute(format!("`points` entry is not an x,y pair: `{pair}`"))
        })?;
        points.push(Point::new(parse_f32("points", x)?, parse_f32("points", y)?));
    }
    Ok(points)
}

/// Path element (`<path>`).
#[derive(Debug, Clone, PartialEq)]
pub struct SvgPath {
    pub program: PathProgram,
    pub style: PaintStyle,
}

impl SvgPath {
    /// `d` is required; malformed path data fails the element.
    pub fn from_attributes(attrs: &HashMap<String, String>) -> Result<Self, SvgError> {
        Ok(Self {
            program: PathProgram::parse(required(attrs, "d", "path")?)?,
            style: PaintStyle::from_attributes(attrs)?,
        })
    }

    pub fn draw(&self, ctx: &mut dyn DrawingContext) {
        self.program.interpret(ctx);
        self.style.paint(ctx);
    }
}

// ==================== Elements ====================

/// A drawable SVG element.
#[derive(Debug, Clone, PartialEq)]
pub enum SvgElement {
    Rect(SvgRect),
    Circle(SvgCircle),
    Ellipse(SvgEllipse),
    Line(SvgLine),
    Polyline(SvgPolyline),
    Path(SvgPath),
}

impl SvgElement {
    pub fn draw(&self, ctx: &mut dyn DrawingContext) {
        match self {
            SvgElement::Rect(rect) => rect.draw(ctx),
            SvgElement::Circle(circle) => circle.draw(ctx),
            SvgElement::Ellipse(ellipse) => ellipse.draw(ctx),
            SvgElement::Line(line) => line.draw(ctx),
            SvgElement::Polyline(polyline) => polyline.draw(ctx),
            SvgElement::Path(path) => path.draw(ctx),
        }
    }
}

// ==================== Document ====================

/// A parsed SVG document: canvas dimensions plus drawable children of the
/// root element, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    pub width: f32,
    pub height: f32,
    pub elements: Vec<SvgElement>,
}

impl SvgDocument {
    /// Parse SVG markup.
    ///
    /// The root `<svg>` element must declare `width` and `height`. Supported
    /// child elements become typed shapes; anything else is skipped.
    pub fn parse(xml: &str) -> Result<Self, SvgError> {
        let xml = xml.trim();

        let svg_start = xml
            .find("<svg")
            .ok_or_else(|| SvgError::ParseError("no <svg> element found".into()))?;
        let root_end = xml[svg_start..]
            .find('>')
            .ok_or_else(|| SvgError::ParseError("unterminated <svg> tag".into()))?;
        let root_tag = &xml[svg_start..svg_start + root_end + 1];
        let root_attr_str = match tag_body(root_tag).split_once(char::is_whitespace) {
            Some((_, rest)) => rest,
            None => "",
        };
        let root_attrs = parse_attributes(root_attr_str);

        let width = parse_f32("width", required(&root_attrs, "width", "svg")?)?;
        let height = parse_f32("height", required(&root_attrs, "height", "svg")?)?;

        let mut elements = Vec::new();
        let mut pos = svg_start + root_end + 1;
        while let Some(offset) = xml[pos..].find('<') {
            let tag_start = pos + offset;

            if xml[tag_start..].starts_with("<!--") {
                match xml[tag_start..].find("-->") {
                    Some(end) => {
                        pos = tag_start + end + 3;
                        continue;
                    }
                    None => break,
                }
            }

            if xml[tag_start..].starts_with("</") {
                match xml[tag_start..].find('>') {
                    Some(end) => {
                        pos = tag_start + end + 1;
                        continue;
                    }
                    None => break,
                }
            }

            let tag_end = match xml[tag_start..].find('>') {
                Some(end) => end,
                None => return Err(SvgError::ParseError("unterminated element tag".into())),
            };
            let tag = &xml[tag_start..tag_start + tag_end + 1];

            if let Some(element) = parse_element(tag, (width, height))? {
                elements.push(element);
            }

            pos = tag_start + tag_end + 1;
        }

        Ok(Self { width, height, elements })
    }

    /// Draw every element against the context, in document order.
    pub fn render(&self, ctx: &mut dyn DrawingContext) {
        for element in &self.elements {
            element.draw(ctx);
        }
    }
}

/// The inside of a tag, without angle brackets or self-closing slash.
fn tag_body(tag: &str) -> &str {
    tag.trim_start_matches('<')
        .trim_end_matches('>')
        .trim_end_matches('/')
        .trim()
}

/// Element tag name without a namespace prefix.
fn local_name(name: &str) -> &str {
    match name.rsplit_once(':') {
        Some((_, local)) => local,
        None => name,
    }
}

/// Parse a single element tag into a typed shape, or `None` for unsupported
/// elements.
fn parse_element(tag: &str, canvas: (f32, f32)) -> Result<Option<SvgElement>, SvgError> {
    let body = tag_body(tag);
    let (name, attr_str) = match body.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest),
        None => (body, ""),
    };
    let attrs = parse_attributes(attr_str);

    match local_name(name) {
        "rect" => Ok(Some(SvgElement::Rect(SvgRect::from_attributes(&attrs, canvas)?))),
        "circle" => Ok(Some(SvgElement::Circle(SvgCircle::from_attributes(&attrs)?))),
        "ellipse" => Ok(Some(SvgElement::Ellipse(SvgEllipse::from_attributes(&attrs)?))),
        "line" => Ok(Some(SvgElement::Line(SvgLine::from_attributes(&attrs)?))),
        "polyline" => Ok(Some(SvgElement::Polyline(SvgPolyline::from_attributes(&attrs)?))),
        "path" => Ok(Some(SvgElement::Path(SvgPath::from_attributes(&attrs)?))),
        other => {
            debug!(element = other, "skipping unsupported element");
            Ok(None)
        }
    }
}

/// Parse the attribute portion of a tag into a key/value map.
fn parse_attributes(attr_str: &str) -> HashMap<String, String> {
    let mut attrs = HashMap::new();
    let mut rest = attr_str;
    while let Some((key, value, remaining)) = parse_attr(rest) {
        attrs.insert(key, value);
        rest = remaining;
    }
    attrs
}

/// Parse a single `key="value"` attribute, returning the remainder.
fn parse_attr(s: &str) -> Option<(String, String, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }

    let eq = s.find('=')?;
    let key = s[..eq].trim();
    let rest = s[eq + 1..].trim_start();

    let quote = rest.chars().next()?;
    if quote != '"' && quote != '\'' {
        return None;
    }

    let value_end = rest[1..].find(quote)? + 1;
    let value = &rest[1..value_end];

    Some((key.to_string(), value.to_string(), &rest[value_end + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::parse("#ff0000"), Some(Color::from_rgb(255, 0, 0)));
        assert_eq!(Color::parse("#f00"), Some(Color::from_rgb(255, 0, 0)));
        assert_eq!(Color::parse("#ACDEDF"), Some(Color::from_rgb(172, 222, 223)));
        assert_eq!(Color::parse("#ff00"), None);
    }

    #[test]
    fn test_color_rgb_function() {
        assert_eq!(Color::parse("rgb(12, 34, 56)"), Some(Color::from_rgb(12, 34, 56)));
        assert_eq!(Color::parse("rgb(1,2)"), None);
    }

    #[test]
    fn test_color_named() {
        assert_eq!(Color::parse("blue"), Some(Color::from_rgb(0, 0, 255)));
        assert_eq!(Color::parse("Orange"), Some(Color::from_rgb(255, 165, 0)));
        assert_eq!(Color::parse("no-such-color"), None);
    }

    #[test]
    fn test_paint_style_defaults() {
        let style = PaintStyle::from_attributes(&attrs(&[])).unwrap();
        assert_eq!(style.fill, Some(Color::BLACK));
        assert_eq!(style.stroke, None);
        assert_eq!(style.stroke_width, 1.0);
    }

    #[test]
    fn test_paint_style_fill_none() {
        let style = PaintStyle::from_attributes(&attrs(&[("fill", "none")])).unwrap();
        assert_eq!(style.fill, None);
    }

    #[test]
    fn test_paint_style_bad_color_is_error() {
        assert!(PaintStyle::from_attributes(&attrs(&[("fill", "bogus")])).is_err());
    }

    #[test]
    fn test_rect_percent_size() {
        let rect = SvgRect::from_attributes(
            &attrs(&[("width", "50%"), ("height", "25%")]),
            (200.0, 100.0),
        )
        .unwrap();
        assert_eq!(rect.width, 100.0);
        assert_eq!(rect.height, 25.0);
        assert_eq!(rect.x, 0.0);
    }

    #[test]
    fn test_rect_requires_size() {
        assert!(SvgRect::from_attributes(&attrs(&[("width", "10")]), (10.0, 10.0)).is_err());
    }

    #[test]
    fn test_parse_points() {
        assert_eq!(
            parse_points("0,0 10,5 20,0").unwrap(),
            vec![Point::new(0.0, 0.0), Point::new(10.0, 5.0), Point::new(20.0, 0.0)]
        );
        assert!(parse_points("0,0 10").is_err());
    }

    #[test]
    fn test_parse_attributes() {
        let attrs = parse_attributes(r#"cx="5" cy='7' fill="red""#);
        assert_eq!(attrs.get("cx").map(String::as_str), Some("5"));
        assert_eq!(attrs.get("cy").map(String::as_str), Some("7"));
        assert_eq!(attrs.get("fill").map(String::as_str), Some("red"));
    }

    #[test]
    fn test_document_parse() {
        let doc = SvgDocument::parse(
            r#"<svg width="100" height="50"><circle cx="10" cy="10" r="5"/></svg>"#,
        )
        .unwrap();
        assert_eq!(doc.width, 100.0);
        assert_eq!(doc.height, 50.0);
        assert_eq!(doc.elements.len(), 1);
    }

    #[test]
    fn test_document_requires_dimensions() {
        assert!(SvgDocument::parse(r#"<svg width="100"></svg>"#).is_err());
        assert!(SvgDocument::parse("<p>hello</p>").is_err());
    }

    #[test]
    fn test_document_skips_unsupported_elements() {
        let doc = SvgDocument::parse(
            r#"<svg width="10" height="10">
                 <!-- a comment -->
                 <text x="1" y="1">hi</text>
                 <line x1="0" y1="0" x2="5" y2="5" stroke="red"/>
               </svg>"#,
        )
        .unwrap();
        assert_eq!(doc.elements.len(), 1);
        assert!(matches!(doc.elements[0], SvgElement::Line(_)));
    }

    #[test]
    fn test_document_bad_path_aborts_parse() {
        let result = SvgDocument::parse(
            r#"<svg width="10" height="10"><path d="M0 0 X9 9"/></svg>"#,
        );
        assert!(matches!(result, Err(SvgError::InvalidPath(_))));
    }
}

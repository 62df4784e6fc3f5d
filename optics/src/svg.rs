//! SVG output for a draw list.

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

use crate::draw::{Primitive, Stroke};
use crate::geometry::Point;

/// Serialize `primitives` as a standalone SVG document with a
/// `0 0 width height` viewbox.
#[must_use]
pub fn to_svg(primitives: &[Primitive], width: f64, height: f64) -> String {
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">\n",
        num(width),
        num(height)
    );
    for primitive in primitives {
        out.push_str("  ");
        out.push_str(&element(primitive));
        out.push('\n');
    }
    out.push_str("</svg>\n");
    out
}

fn element(primitive: &Primitive) -> String {
    match primitive {
        Primitive::Rect { origin, width, height, fill } => format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{fill}\"/>",
            num(origin.x),
            num(origin.y),
            num(*width),
            num(*height)
        ),
        Primitive::Polygon { points, fill, stroke } => {
            format!("<path d=\"{}\" fill=\"{fill}\"{}/>", polygon_path(points), stroke_attrs(stroke))
        }
        Primitive::Segments { segments, stroke } => {
            format!("<path d=\"{}\" fill=\"none\"{}/>", segments_path(segments), stroke_attrs(stroke))
        }
        Primitive::Circle { center, radius, fill } => format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{fill}\"/>",
            num(center.x),
            num(center.y),
            num(*radius)
        ),
    }
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let mut attrs = format!(" stroke=\"{}\" stroke-width=\"{}\"", stroke.color, num(stroke.width));
    if stroke.opacity < 1.0 {
        attrs.push_str(&format!(" opacity=\"{}\"", num(stroke.opacity)));
    }
    attrs
}

fn polygon_path(points: &[Point]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        push_command(&mut d, cmd, *p);
    }
    if !points.is_empty() {
        d.push('Z');
    }
    d
}

fn segments_path(segments: &[(Point, Point)]) -> String {
    let mut d = String::new();
    for &(a, b) in segments {
        push_command(&mut d, 'M', a);
        push_command(&mut d, 'L', b);
    }
    d.trim_end().to_owned()
}

fn push_command(d: &mut String, cmd: char, p: Point) {
    d.push(cmd);
    d.push_str(&num(p.x));
    d.push(',');
    d.push_str(&num(p.y));
    d.push(' ');
}

/// Format a coordinate with at most three decimals and no trailing zeros.
fn num(v: f64) -> String {
    let s = format!("{v:.3}");
    if !s.contains('.') {
        return s;
    }
    match s.trim_end_matches('0').trim_end_matches('.') {
        "-0" => "0".to_owned(),
        trimmed => trimmed.to_owned(),
    }
}

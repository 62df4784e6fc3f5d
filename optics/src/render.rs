//! Rendering: draws a draw list to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a finished draw list and the viewport mapping and produces
//! pixels. It does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::draw::{Primitive, Stroke};
use crate::geometry::Point;
use crate::viewport::Viewport;

/// Draw `primitives` in order, bottom layer first.
///
/// `dpr` is the device pixel ratio; the viewport maps scene units to CSS pixels.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    primitives: &[Primitive],
    viewport: &Viewport,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    let canvas_w = f64::from(ctx.canvas().map_or(0, |c| c.width()));
    let canvas_h = f64::from(ctx.canvas().map_or(0, |c| c.height()));
    ctx.clear_rect(0.0, 0.0, canvas_w / dpr, canvas_h / dpr);
    ctx.translate(viewport.pan_x, viewport.pan_y)?;
    ctx.scale(viewport.zoom, viewport.zoom)?;

    for primitive in primitives {
        draw_primitive(ctx, primitive)?;
    }
    Ok(())
}

fn draw_primitive(ctx: &CanvasRenderingContext2d, primitive: &Primitive) -> Result<(), JsValue> {
    match primitive {
        Primitive::Rect { origin, width, height, fill } => {
            ctx.set_fill_style_str(fill);
            ctx.fill_rect(origin.x, origin.y, *width, *height);
            Ok(())
        }
        Primitive::Polygon { points, fill, stroke } => {
            draw_polygon(ctx, points, fill, stroke);
            Ok(())
        }
        Primitive::Segments { segments, stroke } => {
            draw_segments(ctx, segments, stroke);
            Ok(())
        }
        Primitive::Circle { center, radius, fill } => {
            ctx.begin_path();
            ctx.arc(center.x, center.y, *radius, 0.0, 2.0 * PI)?;
            ctx.set_fill_style_str(fill);
            ctx.fill();
            Ok(())
        }
    }
}

fn draw_polygon(ctx: &CanvasRenderingContext2d, points: &[Point], fill: &str, stroke: &Stroke) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    ctx.close_path();

    ctx.set_fill_style_str(fill);
    ctx.fill();

    apply_stroke_style(ctx, stroke);
    ctx.stroke();
    ctx.set_global_alpha(1.0);
}

fn draw_segments(ctx: &CanvasRenderingContext2d, segments: &[(Point, Point)], stroke: &Stroke) {
    if segments.is_empty() {
        return;
    }
    ctx.begin_path();
    for (a, b) in segments {
        ctx.move_to(a.x, a.y);
        ctx.line_to(b.x, b.y);
    }
    apply_stroke_style(ctx, stroke);
    ctx.stroke();
    ctx.set_global_alpha(1.0);
}

fn apply_stroke_style(ctx: &CanvasRenderingContext2d, stroke: &Stroke) {
    ctx.set_stroke_style_str(stroke.color);
    ctx.set_line_width(stroke.width);
    ctx.set_global_alpha(stroke.opacity);
}

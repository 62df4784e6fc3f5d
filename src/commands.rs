//! Command bodies. Each returns its output instead of printing so the
//! behavior can be tested without capturing stdout.

use optics::consts::{SOURCE_START_X, SOURCE_START_Y};
use optics::engine::{EngineCore, Frame};
use optics::geometry::{self, Point};
use optics::scene::Scene;
use optics::shape::SourceShape;
use optics::svg;
use serde_json::{Value, json};

use crate::CliError;
use crate::replay::{self, PointerEvent};

/// Project a single point through the scene's pinhole.
pub fn project(scene: &Scene, x: f64, y: f64) -> Value {
    let p = Point::new(x, y);
    let projected = geometry::project_point(p, scene.pinhole, scene.screen_x);
    json!({
        "input": p,
        "projected": projected,
        "ratio": scene.ratio_at(x),
        "distance_to_pinhole": scene.pinhole.x - x,
        "distance_to_screen": scene.distance_to_screen(),
    })
}

/// Full frame for the flag with its origin at `(x, y)`, after clamping.
///
/// With `strict`, the frame is rejected if any anchor would be degenerate.
pub fn trace(scene: &Scene, x: f64, y: f64, strict: bool) -> Result<Frame, CliError> {
    let core = engine_at(scene, x, y);
    if strict {
        scene.try_project(&core.source)?;
    }
    Ok(core.frame())
}

/// SVG document for the flag with its origin at `(x, y)`, after clamping.
pub fn render(scene: &Scene, x: f64, y: f64) -> String {
    let core = engine_at(scene, x, y);
    svg::to_svg(&core.draw_list(), scene.bounds.width, scene.bounds.height)
}

/// Magnification and image size as the origin walks from `from` to `to` at
/// height `y`. Positions are clamped, so a sweep past the pinhole flattens out
/// at the closest allowed position.
pub fn sweep(scene: &Scene, y: f64, from: f64, to: f64, steps: u32) -> Result<Vec<Value>, CliError> {
    if steps == 0 {
        return Err(CliError::InvalidArgument("--steps must be at least 1".into()));
    }
    let mut rows = Vec::with_capacity(steps as usize + 1);
    for i in 0..=steps {
        let t = f64::from(i) / f64::from(steps);
        let core = engine_at(scene, from + (to - from) * t, y);
        let frame = core.frame();
        rows.push(json!({
            "x": frame.origin.x,
            "y": frame.origin.y,
            "magnification": frame.image.magnification,
            "projected_height": frame.projection.projected.height(),
        }));
    }
    Ok(rows)
}

/// Replay pointer events against a fresh engine and report the final frame.
pub fn drag(scene: &Scene, events: &[PointerEvent]) -> Value {
    let mut core = engine_at(scene, SOURCE_START_X, SOURCE_START_Y);
    let stats = replay::replay(&mut core, events);
    tracing::info!(events = stats.events, moves = stats.moves, "replay finished");
    json!({
        "events": stats.events,
        "moves": stats.moves,
        "renders": stats.renders,
        "frame": core.frame(),
    })
}

fn engine_at(scene: &Scene, x: f64, y: f64) -> EngineCore {
    EngineCore::with_source(*scene, SourceShape::flag(Point::new(x, y)))
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;

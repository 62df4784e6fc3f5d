#![allow(clippy::float_cmp)]

use optics::scene::SceneBounds;

use super::*;

fn scene() -> Scene {
    Scene::default()
}

// =============================================================
// project
// =============================================================

#[test]
fn project_unit_ratio_example() {
    let out = project(&scene(), 100.0, 150.0);
    assert_eq!(out["projected"]["x"], 700.0);
    assert_eq!(out["projected"]["y"], 350.0);
    assert_eq!(out["ratio"], 1.0);
    assert_eq!(out["distance_to_pinhole"], 300.0);
    assert_eq!(out["distance_to_screen"], 300.0);
}

#[test]
fn project_magnified_example() {
    let out = project(&scene(), 350.0, 200.0);
    assert_eq!(out["ratio"], 6.0);
    assert_eq!(out["projected"]["y"], 550.0);
}

#[test]
fn project_does_not_clamp() {
    let out = project(&scene(), 390.0, 250.0);
    assert_eq!(out["input"]["x"], 390.0);
    assert_eq!(out["ratio"], 30.0);
}

// =============================================================
// trace
// =============================================================

#[test]
fn trace_returns_full_frame() {
    let frame = trace(&scene(), 100.0, 250.0, false).unwrap();
    assert_eq!(frame.projection.rays.len(), 5);
    assert_eq!(frame.image.anchors.len(), 5);
}

#[test]
fn trace_clamps_origin() {
    let frame = trace(&scene(), 600.0, 0.0, true).unwrap();
    assert_eq!(frame.origin, Point::new(350.0, 100.0));
}

#[test]
fn trace_small_gap_keeps_tips_left_of_pinhole() {
    // A 10-unit origin gap would let the 40-unit flag bars reach past the
    // pinhole; the clamp narrows the range by the flag's reach instead.
    let bounds = SceneBounds { min_gap: 10.0, ..SceneBounds::default() };
    let tight = Scene::new(Point::new(400.0, 250.0), 700.0, bounds).unwrap();
    let frame = trace(&tight, 999.0, 250.0, true).unwrap();
    assert_eq!(frame.origin.x, 350.0);
    let json = serde_json::to_string(&trace(&tight, 999.0, 250.0, false).unwrap()).unwrap();
    assert!(!json.contains("null"));
    assert!(!render(&tight, 999.0, 250.0).contains("inf"));
}

// =============================================================
// render
// =============================================================

#[test]
fn render_produces_svg_with_viewbox() {
    let svg = render(&scene(), 100.0, 250.0);
    assert!(svg.contains("viewBox=\"0 0 800 500\""));
    assert!(svg.contains("<circle cx=\"400\" cy=\"250\""));
}

// =============================================================
// sweep
// =============================================================

#[test]
fn sweep_rejects_zero_steps() {
    assert!(matches!(sweep(&scene(), 250.0, 50.0, 350.0, 0), Err(CliError::InvalidArgument(_))));
}

#[test]
fn sweep_magnification_grows_toward_pinhole() {
    let rows = sweep(&scene(), 250.0, 100.0, 350.0, 5).unwrap();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0]["magnification"], 1.0);
    assert_eq!(rows[5]["magnification"], 6.0);
    let mags: Vec<f64> = rows.iter().map(|r| r["magnification"].as_f64().unwrap()).collect();
    assert!(mags.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn sweep_flattens_past_clamp() {
    let rows = sweep(&scene(), 250.0, 300.0, 500.0, 2).unwrap();
    assert_eq!(rows[1]["x"], 350.0);
    assert_eq!(rows[2]["x"], 350.0);
}

// =============================================================
// drag
// =============================================================

#[test]
fn drag_reports_final_frame() {
    let events = [
        PointerEvent::Down { x: 100.0, y: 250.0 },
        PointerEvent::Move { x: 350.0, y: 200.0 },
        PointerEvent::Up { x: 350.0, y: 200.0 },
    ];
    let out = drag(&scene(), &events);
    assert_eq!(out["events"], 3);
    assert_eq!(out["moves"], 1);
    assert_eq!(out["frame"]["origin"]["x"], 350.0);
    assert_eq!(out["frame"]["image"]["magnification"], 6.0);
}

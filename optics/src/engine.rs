use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{SOURCE_START_X, SOURCE_START_Y};
use crate::draw;
use crate::geometry::{Point, Projection};
use crate::hit;
use crate::image::ScreenImage;
use crate::input::{Button, InputState, UiState};
use crate::render;
use crate::scene::Scene;
use crate::shape::SourceShape;
use crate::viewport::Viewport;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    SourceMoved { origin: Point },
    SetCursor(String),
    RenderNeeded,
}

/// Everything computed for one source position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub origin: Point,
    pub projection: Projection,
    pub image: ScreenImage,
}

/// Engine state and input handling, independent of the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub scene: Scene,
    pub source: SourceShape,
    pub ui: UiState,
    pub input: InputState,
    pub viewport: Viewport,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        let scene = Scene::default();
        let source = SourceShape::flag(Point::new(SOURCE_START_X, SOURCE_START_Y));
        Self::with_source(scene, source)
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine over a custom scene and shape. The shape's origin is clamped
    /// into the scene's source range.
    #[must_use]
    pub fn with_source(scene: Scene, mut source: SourceShape) -> Self {
        source.move_to(scene.clamp_origin(&source, source.origin()));
        Self {
            scene,
            source,
            ui: UiState::default(),
            input: InputState::default(),
            viewport: Viewport::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
        }
    }

    // --- Viewport ---

    /// Record the host element size (CSS pixels) and refit the scene into it.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64) -> Action {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.viewport = Viewport::fit(width_css, height_css, self.scene.bounds.width, self.scene.bounds.height);
        Action::RenderNeeded
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary || self.input.is_dragging() {
            return Vec::new();
        }
        let scene_pt = self.viewport.screen_to_scene(screen_pt);
        let Some(part) = hit::hit_source(scene_pt, &self.source, &self.viewport) else {
            return Vec::new();
        };
        let orig = self.source.origin();
        tracing::debug!(?part, x = orig.x, y = orig.y, "source drag started");
        self.input = InputState::DraggingSource { orig };
        self.ui.hovering_source = false;
        vec![Action::SetCursor("grabbing".into())]
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let scene_pt = self.viewport.screen_to_scene(screen_pt);
        match self.input {
            InputState::DraggingSource { .. } => match self.move_source(scene_pt) {
                Action::None => Vec::new(),
                moved => vec![moved, Action::RenderNeeded],
            },
            InputState::Idle => {
                let hovering = hit::hit_source(scene_pt, &self.source, &self.viewport).is_some();
                if hovering == self.ui.hovering_source {
                    return Vec::new();
                }
                self.ui.hovering_source = hovering;
                let cursor = if hovering { "grab" } else { "default" };
                vec![Action::SetCursor(cursor.into())]
            }
        }
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        self.end_drag(screen_pt)
    }

    /// The pointer left the host element; ends any drag in progress.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.ui.hovering_source = false;
        let InputState::DraggingSource { orig } = self.input else {
            return Vec::new();
        };
        self.input = InputState::Idle;
        self.log_drag_end(orig);
        vec![Action::SetCursor("default".into())]
    }

    fn end_drag(&mut self, screen_pt: Point) -> Vec<Action> {
        let InputState::DraggingSource { orig } = self.input else {
            return Vec::new();
        };
        self.input = InputState::Idle;
        self.log_drag_end(orig);
        let scene_pt = self.viewport.screen_to_scene(screen_pt);
        let hovering = hit::hit_source(scene_pt, &self.source, &self.viewport).is_some();
        self.ui.hovering_source = hovering;
        let cursor = if hovering { "grab" } else { "default" };
        vec![Action::SetCursor(cursor.into())]
    }

    fn log_drag_end(&self, orig: Point) {
        let origin = self.source.origin();
        tracing::debug!(x = origin.x, y = origin.y, moved = origin.distance_to(orig), "source drag ended");
    }

    /// Place the source origin at `scene_pt`, clamped into the allowed range.
    ///
    /// Returns [`Action::None`] when the clamped position equals the current one.
    pub fn move_source(&mut self, scene_pt: Point) -> Action {
        let origin = self.scene.clamp_origin(&self.source, scene_pt);
        if origin == self.source.origin() {
            return Action::None;
        }
        self.source.move_to(origin);
        Action::SourceMoved { origin }
    }

    // --- Queries ---

    #[must_use]
    pub fn source_origin(&self) -> Point {
        self.source.origin()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    /// Recompute rays, projected shape and screen image from the current
    /// source position.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame {
            origin: self.source.origin(),
            projection: self.scene.project(&self.source),
            image: ScreenImage::new(&self.scene, &self.source),
        }
    }

    /// The draw list for the current state.
    #[must_use]
    pub fn draw_list(&self) -> Vec<draw::Primitive> {
        draw::build(&self.scene, &self.source, &self.frame())
    }
}

/// The full engine. Wraps `EngineCore` and owns the browser canvas element.
///
/// This is the entry point for a browser host built with the `cdylib`
/// target: the host forwards pointer and resize events, applies the returned
/// [`Action`]s (cursor changes, redraws) and calls [`Engine::render`]. Native
/// hosts such as the `pinhole` CLI drive [`EngineCore`] directly.
pub struct Engine {
    canvas: HtmlCanvasElement,
    dpr: f64,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, dpr: 1.0, core: EngineCore::new() }
    }

    /// Update viewport dimensions and device pixel ratio, resizing the
    /// canvas backing store to match.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Action {
        self.dpr = if dpr > 0.0 { dpr } else { 1.0 };
        self.canvas.set_width(backing_size(width_css, self.dpr));
        self.canvas.set_height(backing_size(height_css, self.dpr));
        self.core.set_viewport(width_css, height_css)
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        render::draw(&ctx, &self.core.draw_list(), &self.core.viewport, self.dpr)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn frame(&self) -> Frame {
        self.core.frame()
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn backing_size(css: f64, dpr: f64) -> u32 {
    (css * dpr).round().max(0.0) as u32
}

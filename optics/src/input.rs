//! Input model: mouse buttons, hover state, and the drag state machine.
//!
//! `InputState` is the gesture being tracked between pointer-down and
//! pointer-up. There is only one draggable thing in the scene, the light
//! source, so the machine has a single active state.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// UI state that outlives a single gesture.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiState {
    /// The pointer is over the source while no drag is active.
    pub hovering_source: bool,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging the light source.
    DraggingSource {
        /// Source origin when the drag started.
        orig: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::DraggingSource { .. })
    }
}

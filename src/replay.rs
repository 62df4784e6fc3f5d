//! Pointer-event replay: drives an [`EngineCore`] from a JSON-lines script.
//!
//! Each non-blank line is one event:
//!
//! ```text
//! {"kind":"down","x":100,"y":250}
//! {"kind":"move","x":180,"y":260}
//! {"kind":"up","x":180,"y":260}
//! {"kind":"leave"}
//! {"kind":"resize","width":400,"height":250}
//! ```
//!
//! Coordinates are CSS pixels, mapped through the engine's viewport. Lines
//! starting with `#` are comments.

use std::io::BufRead;

use optics::engine::{Action, EngineCore};
use optics::geometry::Point;
use optics::input::Button;
use serde::Deserialize;

use crate::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PointerEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    Leave,
    Resize { width: f64, height: f64 },
}

/// What a replay did, for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub events: usize,
    pub moves: usize,
    pub renders: usize,
}

/// Parse one script line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<PointerEvent>, CliError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|source| CliError::Replay { line: line_no, source })
}

/// Parse a whole script.
pub fn read_events(reader: impl BufRead) -> Result<Vec<PointerEvent>, CliError> {
    let mut events = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        if let Some(event) = parse_line(idx + 1, &line?)? {
            events.push(event);
        }
    }
    Ok(events)
}

/// Feed `events` to `core` in order.
pub fn replay(core: &mut EngineCore, events: &[PointerEvent]) -> ReplayStats {
    let mut stats = ReplayStats::default();
    for event in events {
        let actions = match *event {
            PointerEvent::Down { x, y } => core.on_pointer_down(Point::new(x, y), Button::Primary),
            PointerEvent::Move { x, y } => core.on_pointer_move(Point::new(x, y)),
            PointerEvent::Up { x, y } => core.on_pointer_up(Point::new(x, y), Button::Primary),
            PointerEvent::Leave => core.on_pointer_leave(),
            PointerEvent::Resize { width, height } => vec![core.set_viewport(width, height)],
        };
        stats.events += 1;
        for action in &actions {
            match action {
                Action::SourceMoved { .. } => stats.moves += 1,
                Action::RenderNeeded => stats.renders += 1,
                Action::SetCursor(_) | Action::None => {}
            }
        }
        tracing::trace!(?event, ?actions, "replayed event");
    }
    stats
}

#[cfg(test)]
#[path = "replay_test.rs"]
mod tests;

//! Pointer input mapping
//!
//! Translates surface-local pointer events into drag-start, drag-update and
//! launch transitions. Each event applies immediately and synchronously;
//! there is no buffering between an event and the next frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{BallMode, DragSession, GameState};
use crate::consts::LAUNCH_POWER;

/// A pointer event in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down(Vec2),
    Move(Vec2),
    Up(Vec2),
}

/// Apply one pointer event to the game state.
///
/// A down outside the ball's hit circle, or any move/up while not dragging,
/// is ignored by policy rather than reported as an error.
pub fn apply_pointer(state: &mut GameState, event: PointerEvent) {
    match event {
        PointerEvent::Down(p) => {
            if state.ball.mode == BallMode::Resting && state.ball.hit_test(p) {
                state.ball.mode = BallMode::Dragging;
                state.drag = Some(DragSession { start: p });
            }
        }
        PointerEvent::Move(p) => {
            // The held ball snaps to the pointer; no velocity implied yet
            if state.ball.mode == BallMode::Dragging {
                state.ball.pos = p;
            }
        }
        PointerEvent::Up(p) => {
            if state.ball.mode == BallMode::Dragging {
                if let Some(drag) = state.drag.take() {
                    // Slingshot: pull back and release
                    state.ball.vel = (drag.start - p) * LAUNCH_POWER;
                    state.prev_y = state.ball.pos.y;
                    state.ball.mode = BallMode::Flying;
                }
            }
        }
    }
}

//! Drag-time trajectory preview
//!
//! A pure function of the current drag vector, recomputed fresh every frame
//! while the ball is held and never cached. The preview integrates the same
//! gravity and launch scaling as real flight but skips damping, so the dots
//! slightly overshoot the true path on long throws.

use glam::Vec2;

use super::state::{BallMode, GameState};
use crate::consts::{GRAVITY, LAUNCH_POWER, TRAJECTORY_STEPS};

/// Opacity of the first predicted dot
const FADE_START: f32 = 0.8;
/// Total opacity fall-off across the horizon
const FADE_SPAN: f32 = 0.7;

/// One predicted point with its rendering opacity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    pub pos: Vec2,
    pub opacity: f32,
}

/// Predict the flight path for the current drag, if any.
///
/// Empty unless the ball is held. Yields up to [`TRAJECTORY_STEPS`] points
/// with linearly fading opacity, lazily as the renderer consumes them.
pub fn preview(state: &GameState) -> impl Iterator<Item = TrajectoryPoint> + use<> {
    let mut cursor = match (state.ball.mode, state.drag) {
        (BallMode::Dragging, Some(drag)) => {
            let vel = (drag.start - state.ball.pos) * LAUNCH_POWER;
            Some((state.ball.pos, vel))
        }
        _ => None,
    };

    (0..TRAJECTORY_STEPS).filter_map(move |i| {
        let (pos, vel) = cursor.as_mut()?;
        vel.y += GRAVITY;
        *pos += *vel;
        Some(TrajectoryPoint {
            pos: *pos,
            opacity: FADE_START - (i as f32 / TRAJECTORY_STEPS as f32) * FADE_SPAN,
        })
    })
}

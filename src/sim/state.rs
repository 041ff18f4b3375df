//! Game state and core simulation types
//!
//! One ball, one basket, one transient drag session. Everything the frame
//! loop touches lives in [`GameState`]; there are no ambient globals.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// What the ball is currently doing. Exactly one mode holds at any tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallMode {
    /// Sitting at the start position, waiting to be grabbed
    Resting,
    /// Held by the pointer; position tracks the pointer
    Dragging,
    /// Free flight under gravity and damping
    Flying,
    /// Basket made; terminal until an explicit reset
    Scored,
}

/// The ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in surface units per frame
    pub vel: Vec2,
    pub radius: f32,
    pub mode: BallMode,
    /// One-shot latch so a flight scores at most once
    pub has_scored: bool,
}

impl Ball {
    pub fn new(start: Vec2) -> Self {
        Self {
            pos: start,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            mode: BallMode::Resting,
            has_scored: false,
        }
    }

    /// Circular hit-test used to decide draggability
    pub fn hit_test(&self, point: Vec2) -> bool {
        self.pos.distance_squared(point) <= self.radius * self.radius
    }
}

/// Scoring target; fixed rectangle derived from the surface size
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Basket {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Basket {
    pub fn for_surface(width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(width - BASKET_INSET_X, height / 2.0),
            width: BASKET_WIDTH,
            height: BASKET_HEIGHT,
        }
    }

    /// Rim height; a scoring flight must have been above this one tick ago
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    /// Strict interior test against the scoring rectangle
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.pos.x
            && point.x < self.pos.x + self.width
            && point.y > self.pos.y
            && point.y < self.pos.y + self.height
    }
}

/// Pointer position captured at drag-down; alive only while dragging
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DragSession {
    pub start: Vec2,
}

/// Celebration overlay: active flag plus an animation clock
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WinOverlay {
    pub active: bool,
    /// Advances by a fixed step each frame while active
    pub anim_time: f32,
}

impl WinOverlay {
    pub fn advance(&mut self) {
        if self.active {
            self.anim_time += ANIM_TIME_STEP;
        }
    }

    /// Background zoom: ramps 1.0 -> 1.25 over the first 2.0 of animation
    /// time, clamped thereafter.
    pub fn background_scale(&self) -> f32 {
        if !self.active {
            return 1.0;
        }
        1.0 + (WIN_ZOOM_MAX - 1.0) * (self.anim_time / WIN_ZOOM_RAMP).min(1.0)
    }
}

/// Complete game state for one play session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub width: f32,
    pub height: f32,
    pub ball: Ball,
    pub basket: Basket,
    /// Present exactly while `ball.mode == Dragging`
    pub drag: Option<DragSession>,
    pub win: WinOverlay,
    /// Ball center height one tick earlier; the rim-crossing guard
    pub prev_y: f32,
}

impl GameState {
    /// Create a fresh session on a surface of the given logical size
    pub fn new(width: f32, height: f32) -> Self {
        let start = Vec2::new(BALL_START_X, height - BALL_START_RAISE);
        Self {
            width,
            height,
            ball: Ball::new(start),
            basket: Basket::for_surface(width, height),
            drag: None,
            win: WinOverlay::default(),
            prev_y: start.y,
        }
    }

    /// Where the ball rests between flights
    pub fn ball_start(&self) -> Vec2 {
        Vec2::new(BALL_START_X, self.height - BALL_START_RAISE)
    }

    /// Put the ball back at the start, ready for the next grab. Used for
    /// the out-of-bounds transition; leaves the win overlay alone.
    pub(crate) fn rest_ball(&mut self) {
        self.ball.pos = self.ball_start();
        self.ball.vel = Vec2::ZERO;
        self.ball.mode = BallMode::Resting;
        self.ball.has_scored = false;
        self.prev_y = self.ball.pos.y;
        self.drag = None;
    }

    /// Full in-place session restart: ball re-created, overlay discarded.
    pub fn reset(&mut self) {
        self.rest_ball();
        self.win = WinOverlay::default();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(SURFACE_WIDTH, SURFACE_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::default();
        assert_eq!(state.ball.pos, Vec2::new(100.0, 530.0));
        assert_eq!(state.ball.mode, BallMode::Resting);
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.basket.pos, Vec2::new(680.0, 325.0));
        assert_eq!(state.basket.width, 60.0);
        assert_eq!(state.basket.height, 40.0);
        assert!(state.drag.is_none());
        assert!(!state.win.active);
    }

    #[test]
    fn test_hit_test_boundary() {
        let ball = Ball::new(Vec2::new(100.0, 530.0));
        assert!(ball.hit_test(Vec2::new(100.0, 530.0)));
        // Exactly on the rim of the hit circle still counts
        assert!(ball.hit_test(Vec2::new(115.0, 530.0)));
        assert!(!ball.hit_test(Vec2::new(115.1, 530.0)));
        assert!(!ball.hit_test(Vec2::new(111.0, 541.0)));
    }

    #[test]
    fn test_basket_contains_is_strict() {
        let basket = Basket::for_surface(800.0, 650.0);
        assert!(basket.contains(Vec2::new(710.0, 345.0)));
        // Edges are outside
        assert!(!basket.contains(Vec2::new(680.0, 345.0)));
        assert!(!basket.contains(Vec2::new(710.0, 325.0)));
        assert!(!basket.contains(Vec2::new(740.0, 345.0)));
        assert!(!basket.contains(Vec2::new(710.0, 365.0)));
    }

    #[test]
    fn test_background_scale_ramp() {
        let mut win = WinOverlay::default();
        assert_eq!(win.background_scale(), 1.0);

        win.active = true;
        assert_eq!(win.background_scale(), 1.0);
        win.anim_time = 1.0;
        assert!((win.background_scale() - 1.125).abs() < 1e-6);
        win.anim_time = 2.0;
        assert!((win.background_scale() - 1.25).abs() < 1e-6);
        win.anim_time = 7.5;
        assert!((win.background_scale() - 1.25).abs() < 1e-6);

        // Monotone non-decreasing across the ramp
        let mut last = 0.0;
        for i in 0..40 {
            win.anim_time = i as f32 * 0.1;
            let scale = win.background_scale();
            assert!(scale >= last);
            last = scale;
        }
    }

    #[test]
    fn test_reset_discards_everything() {
        let mut state = GameState::default();
        state.ball.pos = Vec2::new(400.0, 200.0);
        state.ball.vel = Vec2::new(5.0, -3.0);
        state.ball.mode = BallMode::Scored;
        state.ball.has_scored = true;
        state.win.active = true;
        state.win.anim_time = 3.7;

        state.reset();
        assert_eq!(state.ball.pos, state.ball_start());
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.ball.mode, BallMode::Resting);
        assert!(!state.ball.has_scored);
        assert!(!state.win.active);
        assert_eq!(state.win.anim_time, 0.0);
    }

    #[test]
    fn test_state_json_round_trip() {
        let mut state = GameState::default();
        state.ball.mode = BallMode::Flying;
        state.ball.vel = Vec2::new(12.0, -15.0);

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ball.mode, BallMode::Flying);
        assert_eq!(back.ball.vel, state.ball.vel);
        assert_eq!(back.basket.pos, state.basket.pos);
    }
}

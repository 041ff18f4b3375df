//! Hoop Shot - a drag-and-release basketball mini-game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, drag input, scoring)
//! - `render`: Scene pass over an abstract 2D drawing surface
//! - `game`: Frame controller composing update + draw, owns reset

pub mod game;
pub mod render;
pub mod sim;

pub use game::Game;

/// Game configuration constants
pub mod consts {
    /// Logical surface size, established once at startup
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 650.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_START_X: f32 = 100.0;
    /// Ball rests this far above the floor
    pub const BALL_START_RAISE: f32 = 120.0;

    /// Downward acceleration per tick while flying
    pub const GRAVITY: f32 = 0.4;
    /// Scalar converting a drag displacement into launch velocity
    pub const LAUNCH_POWER: f32 = 0.3;
    /// Per-tick multiplicative velocity decay (air drag approximation)
    pub const DAMPING: f32 = 0.99;

    /// Basket rectangle, hung off the right edge at vertical center
    pub const BASKET_INSET_X: f32 = 120.0;
    pub const BASKET_WIDTH: f32 = 60.0;
    pub const BASKET_HEIGHT: f32 = 40.0;

    /// Predicted steps in the drag-time trajectory preview
    pub const TRAJECTORY_STEPS: usize = 20;

    /// Win overlay animation-time increment per tick
    pub const ANIM_TIME_STEP: f32 = 0.1;
    /// Animation-time at which the background zoom finishes ramping
    pub const WIN_ZOOM_RAMP: f32 = 2.0;
    /// Background zoom factor once fully ramped
    pub const WIN_ZOOM_MAX: f32 = 1.25;
    /// Confetti rectangles drawn per frame while celebrating
    pub const CONFETTI_COUNT: usize = 20;
}

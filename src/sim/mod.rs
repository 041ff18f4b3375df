//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One update per display frame
//! - Pointer events applied synchronously between frames
//! - No rendering or platform dependencies (the RNG the confetti overlay
//!   needs lives at the render layer, injected by the caller)

pub mod input;
pub mod state;
pub mod tick;
pub mod trajectory;

pub use input::{PointerEvent, apply_pointer};
pub use state::{Ball, BallMode, Basket, DragSession, GameState, WinOverlay};
pub use tick::update;
pub use trajectory::{TrajectoryPoint, preview};

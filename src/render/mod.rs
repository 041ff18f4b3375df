//! Canvas-style 2D rendering
//!
//! The scene pass in `draw` emits primitive calls against the `Surface`
//! contract; backends (browser canvas, the test/headless recorder) turn
//! those calls into pixels.

pub mod draw;
pub mod surface;

pub use draw::draw;
pub use surface::{Color, DrawCommand, Recording, Sprite, Surface, TextAlign};

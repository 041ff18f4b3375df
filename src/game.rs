//! Frame controller
//!
//! Composes simulation and scene pass into the fixed per-frame order
//! (update, then draw) and owns the reset operation. The hosting platform
//! drives [`Game::frame`] once per display refresh and forwards pointer
//! events as they arrive.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::render::{self, Surface};
use crate::sim::{self, GameState, PointerEvent};

pub struct Game {
    pub state: GameState,
    /// Drives the confetti overlay only; gameplay is RNG-free
    rng: Pcg32,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::default(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// One display frame: simulation update, then scene draw, in that order.
    pub fn frame(&mut self, surface: &mut impl Surface) {
        sim::update(&mut self.state);
        render::draw(&self.state, surface, &mut self.rng);
    }

    /// Apply a pointer event immediately, ahead of the next frame.
    pub fn pointer(&mut self, event: PointerEvent) {
        sim::apply_pointer(&mut self.state, event);
    }

    /// Restart the play session in place: ball back to the start, win
    /// overlay discarded. The RNG stream is left alone; it only feeds
    /// visuals.
    pub fn reset(&mut self) {
        log::info!("session reset");
        self.state.reset();
    }
}

//! Scene pass: game state in, primitive draw calls out
//!
//! Invoked once per frame after the simulation update. Paint order matters:
//! backdrop, start marker, basket, ball, trajectory preview, win overlay.

use glam::Vec2;
use rand::Rng;

use super::surface::{Color, Sprite, Surface, TextAlign};
use crate::consts::*;
use crate::sim::{BallMode, GameState, trajectory};

/// Crowd strip height at scale 1.0, anchored to the bottom edge
const BACKDROP_HEIGHT: f32 = 200.0;
const BACKDROP_ALPHA: f32 = 0.6;

/// Dashed marker ring at the ball's start position
const MARKER_RADIUS: f32 = 20.0;
const MARKER_WIDTH: f32 = 5.0;

const TRAJECTORY_DOT_RADIUS: f32 = 3.0;

const CONFETTI_SIZE: f32 = 8.0;
/// Vertical spread of the confetti columns per index
const CONFETTI_STRIDE: f32 = 30.0;
/// Confetti fall speed in surface units per animation-time unit
const CONFETTI_FALL: f32 = 50.0;

const TEXT_BOUNCE: f32 = 10.0;
const TITLE_SIZE_PX: f32 = 48.0;
const SUBTITLE_SIZE_PX: f32 = 24.0;
const SUBTITLE_DROP: f32 = 50.0;

/// Draw one frame of the scene.
///
/// Pure with respect to the game state; the RNG drives only the confetti
/// overlay, whose rectangles are redrawn fresh every frame rather than
/// persisted as entities.
pub fn draw(state: &GameState, surface: &mut impl Surface, rng: &mut impl Rng) {
    surface.clear();

    draw_backdrop(state, surface);

    surface.stroke_circle(
        state.ball_start(),
        MARKER_RADIUS,
        Color::BLUE,
        MARKER_WIDTH,
        true,
    );

    surface.draw_sprite(
        Sprite::Basket,
        state.basket.pos,
        Vec2::new(state.basket.width, state.basket.height),
        1.0,
    );

    let r = state.ball.radius;
    surface.draw_sprite(
        Sprite::Ball,
        state.ball.pos - Vec2::splat(r),
        Vec2::splat(r * 2.0),
        1.0,
    );

    if state.ball.mode == BallMode::Dragging {
        for point in trajectory::preview(state) {
            surface.fill_circle(
                point.pos,
                TRAJECTORY_DOT_RADIUS,
                Color::Rgba(248, 61, 61, point.opacity),
            );
        }
    }

    if state.win.active {
        draw_win_overlay(state, surface, rng);
    }
}

/// Crowd image along the bottom, zooming in once the win overlay is active.
/// The scaled strip stays horizontally centered and bottom-anchored.
fn draw_backdrop(state: &GameState, surface: &mut impl Surface) {
    let scale = state.win.background_scale();
    let size = Vec2::new(state.width * scale, BACKDROP_HEIGHT * scale);
    let pos = Vec2::new((state.width - size.x) / 2.0, state.height - size.y);
    surface.draw_sprite(Sprite::Background, pos, size, BACKDROP_ALPHA);
}

/// Confetti rain plus bouncing celebration text
fn draw_win_overlay(state: &GameState, surface: &mut impl Surface, rng: &mut impl Rng) {
    let t = state.win.anim_time;

    for i in 0..CONFETTI_COUNT {
        let x = rng.random_range(0.0..state.width);
        let y = (t * CONFETTI_FALL + i as f32 * CONFETTI_STRIDE) % state.height;
        let hue = rng.random_range(0.0..360.0);
        surface.fill_rect(
            Vec2::new(x, y),
            Vec2::splat(CONFETTI_SIZE),
            Color::Hsl(hue, 70.0, 60.0),
        );
    }

    let bounce = t.sin() * TEXT_BOUNCE;
    let center = Vec2::new(state.width / 2.0, state.height / 2.0);
    surface.fill_text(
        "GOAL!",
        center + Vec2::new(0.0, bounce),
        TITLE_SIZE_PX,
        Color::GOLD,
        TextAlign::Center,
    );
    surface.fill_text(
        "Amazing Shot!",
        center + Vec2::new(0.0, SUBTITLE_DROP + bounce),
        SUBTITLE_SIZE_PX,
        Color::WHITE,
        TextAlign::Center,
    );
}

//! Tuning values for the segment chain.

use bevy::color::Color;

// Geometry
pub const BASE_RADIUS: f32 = 8.0;
pub const HEAD_RADIUS_SCALE: f32 = 1.2;
pub const TAIL_RADIUS_SCALE: f32 = 0.7;
/// Applied to the squared head radius, so the head hit area is a bit larger than drawn.
pub const HEAD_HIT_MARGIN: f32 = 1.2;
pub const INITIAL_SEGMENTS: usize = 4;

// Movement
pub const BASE_SPEED: f32 = 100.0;
pub const SPEED_INCREMENT: f32 = 10.0;

pub const CHAIN_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

/// Parameters a [`Chain`](super::Chain) is built with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChainConfig {
    pub radius: f32,
    pub head_radius_scale: f32,
    pub tail_radius_scale: f32,
    pub head_hit_margin: f32,
    pub initial_segments: usize,
    pub base_speed: f32,
    pub speed_increment: f32,
    pub color: Color,
}

impl ChainConfig {
    pub fn head_radius(&self) -> f32 {
        self.radius * self.head_radius_scale
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        ChainConfig {
            radius: BASE_RADIUS,
            head_radius_scale: HEAD_RADIUS_SCALE,
            tail_radius_scale: TAIL_RADIUS_SCALE,
            head_hit_margin: HEAD_HIT_MARGIN,
            initial_segments: INITIAL_SEGMENTS,
            base_speed: BASE_SPEED,
            speed_increment: SPEED_INCREMENT,
            color: CHAIN_COLOR,
        }
    }
}

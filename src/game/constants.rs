//! Game constants for arena size, colors and rendering layers.

use bevy::prelude::*;

// Arena dimensions, in chain units
pub const ARENA_WIDTH: f32 = 500.0;
pub const ARENA_HEIGHT: f32 = 500.0;
pub const WINDOW_PADDING: f32 = 20.0;

// Initial head position (screen-like coordinates, y down)
pub const INITIAL_HEAD_POSITION: Vec2 = Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0);

// Food
pub const FOOD_RADIUS: f32 = 8.0;
pub const FOOD_SPAWN_MARGIN: f32 = 2.0 * FOOD_RADIUS;

// Colors
pub const SNAKE_HEAD_COLOR: Color = Color::srgba(0.9, 0.9, 0.9, 1.0);
pub const FOOD_COLOR: Color = Color::srgba(0.3, 1.0, 0.3, 1.0);
pub const FOOD_EATEN_COLOR: Color = Color::srgba(1.0, 1.0, 0.3, 0.8);
pub const ARENA_COLOR: Color = Color::srgba(0.1, 0.1, 0.1, 1.0);
pub const ARENA_BORDER_COLOR: Color = Color::srgba(0.3, 0.3, 0.8, 1.0);
pub const BACKGROUND_COLOR: Color = Color::srgba(0.04, 0.04, 0.04, 1.0);

// Z-index constants for rendering layers
pub const Z_BACKGROUND: f32 = 0.0;
pub const Z_FOOD: f32 = 1.0;
pub const Z_SNAKE_SEGMENT: f32 = 1.5;
pub const Z_SNAKE_HEAD: f32 = 2.0;

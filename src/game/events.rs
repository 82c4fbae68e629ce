//! Game events (messages).

use bevy::prelude::*;

/// Message triggered when the snake should grow.
#[derive(Message)]
pub struct GrowthEvent;

/// Message triggered when food is eaten (for visual effects).
#[derive(Message)]
pub struct FoodEatenEvent {
    pub position: Vec2,
}

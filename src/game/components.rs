//! ECS components for the snake game.

use bevy::prelude::*;

use crate::chain::Chain;

/// The player's chain. One entity per round, despawned on restart.
#[derive(Component, Deref, DerefMut, Default)]
pub struct Snake(pub Chain);

/// Food entity, positioned in chain coordinates.
#[derive(Component, Clone, Copy, Debug)]
pub struct Food {
    pub position: Vec2,
}

/// Component for food pulsing animation.
#[derive(Component)]
pub struct FoodPulse {
    pub timer: Timer,
}

/// Expanding ring drawn where food was eaten.
#[derive(Component)]
pub struct PulseEffect {
    pub timer: Timer,
    pub position: Vec2,
    pub start_scale: f32,
    pub end_scale: f32,
}

/// Component to mark the score display UI element.
#[derive(Component)]
pub struct ScoreText;

/// Component to mark the game over overlay UI.
#[derive(Component)]
pub struct GameOverUI;

/// Component to mark the start menu UI.
#[derive(Component)]
pub struct MenuUI;

//! Food plugin - handles food spawning, collision detection, and related effects.

use bevy::prelude::*;
use rand::prelude::*;

use crate::chain::Chain;
use crate::game::{
    ARENA_HEIGHT, ARENA_WIDTH, FOOD_SPAWN_MARGIN, Food, FoodEatenEvent, FoodPulse, GamePhase,
    GameState, GrowthEvent, Snake,
};
use crate::snake::{snake_growth, snake_movement};

/// Plugin for food-related systems.
pub struct FoodPlugin;

impl Plugin for FoodPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            food_collision.after(snake_movement).before(snake_growth),
        );
    }
}

/// Picks a random position inside the arena that the chain does not cover.
pub fn random_food_position(rng: &mut impl Rng, chain: &Chain) -> Vec2 {
    loop {
        let position = Vec2::new(
            rng.random_range(FOOD_SPAWN_MARGIN..ARENA_WIDTH - FOOD_SPAWN_MARGIN),
            rng.random_range(FOOD_SPAWN_MARGIN..ARENA_HEIGHT - FOOD_SPAWN_MARGIN),
        );

        // An uninitialized chain covers nothing
        if !chain.hit(position).unwrap_or(false) {
            return position;
        }
    }
}

/// Spawns food at a random position that doesn't overlap with the snake.
pub fn spawn_food(commands: &mut Commands, chain: &Chain) {
    let position = random_food_position(&mut rand::rng(), chain);

    commands.spawn((
        Food { position },
        FoodPulse {
            timer: Timer::from_seconds(0.8, TimerMode::Repeating),
        },
    ));
}

/// System to detect food collision and trigger growth.
fn food_collision(
    mut commands: Commands,
    mut growth_writer: MessageWriter<GrowthEvent>,
    mut food_eaten_writer: MessageWriter<FoodEatenEvent>,
    mut game_state: ResMut<GameState>,
    snakes: Query<&Snake>,
    foods: Query<(Entity, &Food)>,
) {
    if game_state.phase != GamePhase::Playing {
        return;
    }

    let Ok(snake) = snakes.single() else {
        return;
    };
    for (food_entity, food) in foods.iter() {
        match snake.hit(food.position) {
            Ok(true) => {
                commands.entity(food_entity).despawn();
                game_state.score += 1;
                growth_writer.write(GrowthEvent);
                food_eaten_writer.write(FoodEatenEvent {
                    position: food.position,
                });
                debug!("food eaten at {}, score {}", food.position, game_state.score);

                spawn_food(&mut commands, snake);
            }
            Ok(false) => {}
            Err(err) => warn!("food collision check failed: {err}"),
        }
    }
}

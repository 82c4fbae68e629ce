//! Snake plugin - drives the chain: input, steering, movement, growth and game over.

use bevy::prelude::*;

use crate::chain::{Chain, Direction};
use crate::game::{
    ARENA_HEIGHT, ARENA_WIDTH, GamePhase, GameState, GrowthEvent, INITIAL_HEAD_POSITION,
    InputBuffer, Snake,
};

/// Plugin for snake-related systems.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                snake_movement_input,
                snake_steering,
                snake_movement,
                game_over_check,
                snake_growth,
            )
                .chain(),
        );
    }
}

/// Builds a fresh snake for a new round.
pub fn new_snake() -> Snake {
    let mut chain = Chain::new();
    chain.init(
        INITIAL_HEAD_POSITION.x,
        INITIAL_HEAD_POSITION.y,
        ARENA_WIDTH,
        ARENA_HEIGHT,
    );
    Snake(chain)
}

/// Reads keyboard input and returns the corresponding direction.
fn direction_from_input(keyboard_input: &ButtonInput<KeyCode>, current: Direction) -> Direction {
    if keyboard_input.pressed(KeyCode::ArrowLeft) || keyboard_input.pressed(KeyCode::KeyA) {
        Direction::Left
    } else if keyboard_input.pressed(KeyCode::ArrowRight) || keyboard_input.pressed(KeyCode::KeyD)
    {
        Direction::Right
    } else if keyboard_input.pressed(KeyCode::ArrowUp) || keyboard_input.pressed(KeyCode::KeyW) {
        Direction::Up
    } else if keyboard_input.pressed(KeyCode::ArrowDown) || keyboard_input.pressed(KeyCode::KeyS)
    {
        Direction::Down
    } else {
        current
    }
}

/// System to read keyboard input and queue direction changes.
fn snake_movement_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut input_buffer: ResMut<InputBuffer>,
    snakes: Query<&Snake>,
    game_state: Res<GameState>,
) {
    if game_state.phase != GamePhase::Playing {
        return;
    }

    if let Ok(snake) = snakes.single() {
        let last_direction = input_buffer.last_direction().unwrap_or(snake.heading());
        let new_direction = direction_from_input(&keyboard_input, last_direction);

        // Reversing would drive the head straight into the neck
        if new_direction != last_direction && new_direction != last_direction.opposite() {
            input_buffer.queue_direction(new_direction);
        }
    }
}

/// System to apply one buffered direction per frame.
fn snake_steering(
    game_state: Res<GameState>,
    mut input_buffer: ResMut<InputBuffer>,
    mut snakes: Query<&mut Snake>,
) {
    if game_state.phase != GamePhase::Playing {
        return;
    }

    let Ok(mut snake) = snakes.single_mut() else {
        return;
    };
    if let Some(direction) = input_buffer.pop_direction()
        && let Err(err) = snake.set_direction(direction)
    {
        warn!("ignoring direction {direction}: {err}");
    }
}

/// System to advance the snake by the frame time.
pub fn snake_movement(
    time: Res<Time>,
    game_state: Res<GameState>,
    mut snakes: Query<&mut Snake>,
) {
    if game_state.phase != GamePhase::Playing {
        return;
    }

    if let Ok(mut snake) = snakes.single_mut()
        && let Err(err) = snake.update(time.delta_secs())
    {
        warn!("skipping snake update: {err}");
    }
}

/// System to handle snake growth when GrowthEvent is received.
///
/// Runs after the collision checks of the frame. Grown segments are pinned behind the
/// tail right away, before anything draws them.
pub fn snake_growth(mut growth_reader: MessageReader<GrowthEvent>, mut snakes: Query<&mut Snake>) {
    let Ok(mut snake) = snakes.single_mut() else {
        growth_reader.clear();
        return;
    };

    let mut grown = false;
    for _ in growth_reader.read() {
        match snake.eat_food() {
            Ok(()) => grown = true,
            Err(err) => warn!("snake could not grow: {err}"),
        }
    }

    // Zero-length step: the head stays put, only the body is re-pinned
    if grown && let Err(err) = snake.update(0.0) {
        warn!("could not pin grown segment: {err}");
    }
}

/// System to check for game over (self-collision or leaving the arena).
fn game_over_check(mut game_state: ResMut<GameState>, snakes: Query<&Snake>) {
    if game_state.phase != GamePhase::Playing {
        return;
    }

    let Ok(snake) = snakes.single() else {
        return;
    };
    let crashed = match (snake.hits_self(), snake.is_out_of_bounds()) {
        (Ok(hit_self), Ok(hit_wall)) => hit_self || hit_wall,
        (Err(err), _) | (_, Err(err)) => {
            warn!("collision check failed: {err}");
            false
        }
    };

    if crashed {
        game_state.phase = GamePhase::GameOver;
        info!(
            "Game Over! Final score: {}, length {}",
            game_state.score,
            snake.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<GameState>()
            .init_resource::<InputBuffer>()
            .add_message::<GrowthEvent>()
            .add_plugins(SnakePlugin);
        app
    }

    fn snake(app: &mut App) -> &Chain {
        let mut query = app.world_mut().query::<&Snake>();
        query.single(app.world()).unwrap()
    }

    #[test]
    fn direction_from_input_prefers_pressed_key() {
        let mut input = ButtonInput::<KeyCode>::default();
        assert_eq!(direction_from_input(&input, Direction::Up), Direction::Up);

        input.press(KeyCode::KeyD);
        assert_eq!(direction_from_input(&input, Direction::Up), Direction::Right);
    }

    #[test]
    fn growth_message_grows_the_snake() {
        let mut app = app();
        app.world_mut().spawn(new_snake());
        app.world_mut().write_message(GrowthEvent);

        app.update();

        let chain = snake(&mut app);
        assert_eq!(chain.len(), 5);
        assert_ne!(chain.tail().unwrap(), Vec2::ZERO);
    }

    #[test]
    fn input_steers_the_snake() {
        let mut app = app();
        app.world_mut().resource_mut::<GameState>().start_round();
        app.world_mut().spawn(new_snake());
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::ArrowUp);

        app.update();

        assert_eq!(snake(&mut app).heading(), Direction::Up);
    }

    #[test]
    fn leaving_the_arena_ends_the_round() {
        let mut app = app();
        app.world_mut().resource_mut::<GameState>().start_round();
        let mut chain = Chain::new();
        chain.init(-10.0, 100.0, ARENA_WIDTH, ARENA_HEIGHT);
        app.world_mut().spawn(Snake(chain));

        app.update();

        assert_eq!(
            app.world().resource::<GameState>().phase,
            GamePhase::GameOver
        );
    }
}

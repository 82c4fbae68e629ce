//! UI plugin - handles camera, arena frame, menus, game over screen, score display, and game flow.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::food::spawn_food;
use crate::game::{
    ARENA_BORDER_COLOR, ARENA_COLOR, ARENA_HEIGHT, ARENA_WIDTH, Food, GameOverUI, GamePhase,
    GameState, InputBuffer, MenuUI, ScoreText, Snake, Z_BACKGROUND,
};
use crate::snake::new_snake;

/// Plugin for UI and game flow systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_system).add_systems(
            Update,
            (
                start_game_from_menu,
                restart_game,
                update_score_text,
                spawn_game_over_screen_system,
            )
                .chain(),
        );
    }
}

// Type alias for querying entities that belong to one round
type RoundEntityQuery<'w, 's> = Query<'w, 's, Entity, Or<(With<Snake>, With<Food>)>>;

/// Initial setup system - camera, arena, score text.
fn setup_system(mut commands: Commands, game_state: Res<GameState>) {
    commands.spawn(Camera2d);

    // Arena background
    commands.spawn((
        Sprite {
            color: ARENA_COLOR,
            custom_size: Some(Vec2::new(ARENA_WIDTH, ARENA_HEIGHT)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, Z_BACKGROUND),
    ));

    // Glowing arena border using hollow rectangle
    commands.spawn(ShapeBundle::rect(
        &ShapeConfig {
            color: ARENA_BORDER_COLOR,
            alpha_mode: ShapeAlphaMode::Add,
            hollow: true,
            thickness: 4.0,
            transform: Transform::from_xyz(0.0, 0.0, Z_BACKGROUND + 0.1),
            ..ShapeConfig::default_2d()
        },
        Vec2::new(ARENA_WIDTH + 4.0, ARENA_HEIGHT + 4.0),
    ));

    commands.spawn((
        Text::from("Score: 0"),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        ScoreText,
    ));

    if game_state.phase == GamePhase::Menu {
        spawn_overlay(
            &mut commands,
            MenuUI,
            "SNAKE",
            Color::srgba(0.3, 1.0, 0.3, 1.0),
            "Arrow Keys or WASD to steer, eat to grow\nPress SPACE to start".to_string(),
        );
    }
}

/// Spawns a full-screen overlay with a title and a line of instructions.
fn spawn_overlay(
    commands: &mut Commands,
    marker: impl Component,
    title: &str,
    title_color: Color,
    body: String,
) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.75)),
            marker,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::from(title),
                TextFont {
                    font_size: 60.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::from(body),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgba(0.8, 0.8, 0.8, 1.0)),
            ));
        });
}

/// System to spawn game over screen when game ends.
fn spawn_game_over_screen_system(
    mut commands: Commands,
    game_state: Res<GameState>,
    game_over_ui: Query<Entity, With<GameOverUI>>,
) {
    // Only spawn if game just ended and no UI exists yet
    if game_state.is_changed() && game_state.phase == GamePhase::GameOver && game_over_ui.is_empty()
    {
        spawn_overlay(
            &mut commands,
            GameOverUI,
            "GAME OVER",
            Color::srgba(1.0, 0.3, 0.3, 1.0),
            format!("Final Score: {}\nPress SPACE to restart", game_state.score),
        );
    }
}

/// Spawns the snake and its first food.
fn start_round(commands: &mut Commands, game_state: &mut GameState) {
    game_state.start_round();

    let snake = new_snake();
    spawn_food(commands, &snake);
    commands.spawn(snake);
    info!("Round started");
}

/// System to start the game from the menu.
fn start_game_from_menu(
    mut commands: Commands,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<GameState>,
    menu_ui: Query<Entity, With<MenuUI>>,
) {
    if game_state.phase == GamePhase::Menu && keyboard_input.just_pressed(KeyCode::Space) {
        for entity in menu_ui.iter() {
            commands.entity(entity).despawn();
        }

        start_round(&mut commands, &mut game_state);
    }
}

/// System to restart the game from game over screen.
fn restart_game(
    mut commands: Commands,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<GameState>,
    mut input_buffer: ResMut<InputBuffer>,
    round_entities: RoundEntityQuery,
    game_over_ui: Query<Entity, With<GameOverUI>>,
) {
    if game_state.phase == GamePhase::GameOver && keyboard_input.just_pressed(KeyCode::Space) {
        for entity in round_entities.iter().chain(game_over_ui.iter()) {
            commands.entity(entity).despawn();
        }

        input_buffer.clear();
        start_round(&mut commands, &mut game_state);
    }
}

/// System to update the score display.
fn update_score_text(game_state: Res<GameState>, mut query: Query<&mut Text, With<ScoreText>>) {
    if let Ok(mut text) = query.single_mut() {
        *text = Text::from(format!("Score: {}", game_state.score));
    }
}

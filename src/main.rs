use bevy::{prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;

use chain_snake::food::FoodPlugin;
use chain_snake::game::{
    ARENA_HEIGHT, ARENA_WIDTH, BACKGROUND_COLOR, FoodEatenEvent, GameState, GrowthEvent,
    InputBuffer, WINDOW_PADDING,
};
use chain_snake::rendering::RenderingPlugin;
use chain_snake::snake::SnakePlugin;
use chain_snake::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    resolution: WindowResolution::new(
                        (ARENA_WIDTH + WINDOW_PADDING) as u32,
                        (ARENA_HEIGHT + WINDOW_PADDING) as u32,
                    ),
                    title: "Snake".to_string(),
                    ..Default::default()
                }),
                ..default()
            }),
            Shape2dPlugin::default(),
        ))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .init_resource::<GameState>()
        .init_resource::<InputBuffer>()
        .add_message::<GrowthEvent>()
        .add_message::<FoodEatenEvent>()
        .add_plugins((SnakePlugin, FoodPlugin, RenderingPlugin, UiPlugin))
        .run();
}

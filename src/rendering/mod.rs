//! Rendering plugin - draws the chain and food every frame and plays food effects.
//!
//! Drawing runs after the snake systems, once growth has pinned any new segment. The
//! extra circles between segments are cosmetic and never fed back into the chain.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::chain::Chain;
use crate::game::{
    ARENA_HEIGHT, ARENA_WIDTH, FOOD_COLOR, FOOD_EATEN_COLOR, FOOD_RADIUS, Food, FoodEatenEvent,
    FoodPulse, PulseEffect, SNAKE_HEAD_COLOR, Snake, Z_FOOD, Z_SNAKE_HEAD, Z_SNAKE_SEGMENT,
};
use crate::snake::snake_growth;

/// Plugin for rendering and visual effects.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                food_pulse_animation,
                spawn_food_eaten_effect,
                pulse_effect_system,
                draw_snake,
            )
                .chain()
                .after(snake_growth),
        );
    }
}

/// Maps chain coordinates (origin top-left, y down) to world coordinates (centered, y up).
pub fn arena_to_world(position: Vec2, z: f32) -> Vec3 {
    Vec3::new(
        position.x - ARENA_WIDTH / 2.0,
        ARENA_HEIGHT / 2.0 - position.y,
        z,
    )
}

/// A circle to draw, in chain coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disc {
    pub center: Vec2,
    pub radius: f32,
    pub is_head: bool,
}

/// Circles making up the chain: one per segment plus a smaller one halfway to the
/// previous segment, head first.
pub fn chain_discs(chain: &Chain) -> Vec<Disc> {
    let segments = chain.segments();
    let mut discs = Vec::with_capacity(segments.len() * 2);

    for (i, &center) in segments.iter().enumerate() {
        let radius = chain.effective_radius(i);
        discs.push(Disc {
            center,
            radius,
            is_head: i == 0,
        });

        if i > 0 {
            let prev = segments[i - 1];
            let offset = (center - prev).normalize_or_zero() * radius;
            discs.push(Disc {
                center: prev + offset,
                radius: radius * 0.7,
                is_head: false,
            });
        }
    }
    discs
}

/// System to draw the snake.
fn draw_snake(mut painter: ShapePainter, snakes: Query<&Snake>) {
    for snake in snakes.iter() {
        // Tail first so the head ends up on top
        for disc in chain_discs(snake).into_iter().rev() {
            let (color, z) = if disc.is_head {
                (SNAKE_HEAD_COLOR, Z_SNAKE_HEAD)
            } else {
                (snake.color(), Z_SNAKE_SEGMENT)
            };
            painter.hollow = false;
            painter.color = color;
            painter.transform = Transform::from_translation(arena_to_world(disc.center, z));
            painter.circle(disc.radius);
        }
    }
}

/// System to animate and draw food with a pulsing effect.
fn food_pulse_animation(
    time: Res<Time>,
    mut painter: ShapePainter,
    mut foods: Query<(&Food, &mut FoodPulse)>,
) {
    for (food, mut pulse) in foods.iter_mut() {
        pulse.timer.tick(time.delta());

        // Use sine wave for smooth pulsing
        let progress = pulse.timer.fraction();
        let scale = 1.0 + (progress * std::f32::consts::PI * 2.0).sin() * 0.15;

        painter.hollow = false;
        painter.color = FOOD_COLOR;
        painter.transform = Transform::from_translation(arena_to_world(food.position, Z_FOOD));
        painter.circle(FOOD_RADIUS * scale);
    }
}

/// System to spawn visual effect when food is eaten.
fn spawn_food_eaten_effect(
    mut commands: Commands,
    mut food_eaten_reader: MessageReader<FoodEatenEvent>,
) {
    for event in food_eaten_reader.read() {
        commands.spawn(PulseEffect {
            timer: Timer::from_seconds(0.3, TimerMode::Once),
            position: event.position,
            start_scale: 1.0,
            end_scale: 2.5,
        });
    }
}

/// System to grow and fade the eaten-food rings.
fn pulse_effect_system(
    mut commands: Commands,
    time: Res<Time>,
    mut painter: ShapePainter,
    mut effects: Query<(Entity, &mut PulseEffect)>,
) {
    for (entity, mut effect) in effects.iter_mut() {
        effect.timer.tick(time.delta());

        if effect.timer.is_finished() {
            commands.entity(entity).despawn();
        } else {
            let progress = effect.timer.fraction();
            let scale = effect.start_scale + (effect.end_scale - effect.start_scale) * progress;

            painter.hollow = true;
            painter.thickness = 2.0;
            painter.color = FOOD_EATEN_COLOR.with_alpha(0.8 * (1.0 - progress));
            painter.transform =
                Transform::from_translation(arena_to_world(effect.position, Z_FOOD + 0.5));
            painter.circle(FOOD_RADIUS * scale);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::Direction;

    #[test]
    fn arena_corners_map_to_world_corners() {
        assert_eq!(
            arena_to_world(Vec2::ZERO, 0.0),
            Vec3::new(-ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0, 0.0)
        );
        assert_eq!(
            arena_to_world(Vec2::new(ARENA_WIDTH, ARENA_HEIGHT), 1.0),
            Vec3::new(ARENA_WIDTH / 2.0, -ARENA_HEIGHT / 2.0, 1.0)
        );
    }

    #[test]
    fn discs_cover_segments_and_midpoints() {
        let mut chain = Chain::new();
        chain.init(100.0, 100.0, 500.0, 500.0);

        let discs = chain_discs(&chain);

        assert_eq!(discs.len(), 2 * chain.len() - 1);
        assert!(discs[0].is_head);
        assert_eq!(discs[0].radius, chain.head_radius());
        // Midpoint between head and neck, one base radius below the head.
        assert_eq!(discs[2].center, Vec2::new(100.0, 108.0));
        assert!((discs[2].radius - 5.6).abs() < 1e-4);
        // Tail is drawn shrunk.
        let tail = discs[discs.len() - 2];
        assert_eq!(tail.center, chain.tail().unwrap());
        assert!((tail.radius - 5.6).abs() < 1e-4);
    }

    #[test]
    fn midpoints_sit_halfway_along_links_after_a_turn() {
        let mut chain = Chain::new();
        chain.init(100.0, 100.0, 500.0, 500.0);
        chain.set_direction(Direction::Right).unwrap();
        for _ in 0..10 {
            chain.update(0.05).unwrap();
        }

        let segments = chain.segments();
        let discs = chain_discs(&chain);
        for i in 1..segments.len() {
            // Discs go head, then (segment i, midpoint i) pairs.
            let midpoint = discs[2 * i];
            let halfway = (segments[i - 1] + segments[i]) / 2.0;
            assert!(
                midpoint.center.abs_diff_eq(halfway, 1e-3),
                "midpoint {i} at {}, expected {halfway}",
                midpoint.center
            );
            assert!((midpoint.radius - 0.7 * chain.effective_radius(i)).abs() < 1e-4);
        }
    }
}

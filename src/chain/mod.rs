//! Segment chain - the moving body of the snake.
//!
//! The chain is a dense, index-addressed list of points. Index 0 is the head and is the
//! only segment driven directly; every other segment is re-pinned each frame at a fixed
//! link distance from its predecessor, which gives the trailing "wormy" follow motion.
//!
//! Coordinates are screen-like: x grows to the right and y grows downwards, so
//! [`Direction::Up`] moves the head towards negative y.

mod config;
mod direction;
mod error;

use bevy::color::Color;
use bevy::log::debug;
use bevy::math::Vec2;

pub use config::*;
pub use direction::Direction;
pub use error::{ChainError, ChainResult};

/// A segment is just its center point.
pub type Segment = Vec2;

/// Size of the playable area, used to place the aim point outside of it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Bounds { width, height }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    fn max_extent(&self) -> f32 {
        self.width.max(self.height)
    }
}

/// The snake body. Build one per game round and drive it with [`Chain::update`].
#[derive(Clone, Debug)]
pub struct Chain {
    segments: Vec<Segment>,
    config: ChainConfig,
    heading: Direction,
    aim: Vec2,
    speed: f32,
    bounds: Bounds,
}

impl Default for Chain {
    fn default() -> Self {
        Chain::with_config(ChainConfig::default())
    }
}

impl Chain {
    /// Creates an empty chain. It has to be [`init`](Chain::init)ialized before use.
    pub fn new() -> Self {
        Chain::default()
    }

    pub fn with_config(config: ChainConfig) -> Self {
        Chain {
            segments: Vec::new(),
            heading: Direction::Left,
            aim: Vec2::ZERO,
            speed: config.base_speed,
            bounds: Bounds::default(),
            config,
        }
    }

    /// Resets the chain for a new round: head at `(x, y)`, the rest of the body hanging
    /// straight below it, heading left.
    pub fn init(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let spacing = 2.0 * self.config.radius;
        let count = self.config.initial_segments.max(1);

        self.segments.clear();
        self.segments
            .extend((0..count).map(|i| Vec2::new(x, y + spacing * i as f32)));
        self.speed = self.config.base_speed;
        self.heading = Direction::Left;
        self.bounds = Bounds::new(width, height);
        self.aim = Vec2::new(x - width, y);

        debug!(
            "chain initialized at ({x}, {y}) with {count} segments in {width}x{height} bounds"
        );
    }

    pub fn is_initialized(&self) -> bool {
        !self.segments.is_empty()
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn head(&self) -> ChainResult<Segment> {
        self.segments
            .first()
            .copied()
            .ok_or(ChainError::UninitializedChain)
    }

    pub fn tail(&self) -> ChainResult<Segment> {
        self.segments
            .last()
            .copied()
            .ok_or(ChainError::UninitializedChain)
    }

    pub fn radius(&self) -> f32 {
        self.config.radius
    }

    pub fn head_radius(&self) -> f32 {
        self.config.head_radius()
    }

    pub fn color(&self) -> Color {
        self.config.color
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn aim(&self) -> Vec2 {
        self.aim
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Radius of the segment at `index`: enlarged for the head, shrunk for the tail.
    pub fn effective_radius(&self, index: usize) -> f32 {
        if index == 0 {
            self.config.head_radius()
        } else if index + 1 == self.segments.len() {
            self.config.radius * self.config.tail_radius_scale
        } else {
            self.config.radius
        }
    }

    /// Points the chain towards `direction` by moving the aim far outside the bounds,
    /// keeping the head's perpendicular coordinate.
    pub fn set_direction(&mut self, direction: Direction) -> ChainResult<()> {
        let head = self.head()?;
        let max = self.bounds.max_extent();

        self.heading = direction;
        self.aim = match direction {
            Direction::Left => Vec2::new(-max, head.y),
            Direction::Up => Vec2::new(head.x, -max),
            Direction::Right => Vec2::new(2.0 * max, head.y),
            Direction::Down => Vec2::new(head.x, 2.0 * max),
        };

        debug!("chain heading {direction}, aiming at {}", self.aim);
        Ok(())
    }

    /// Same as [`set_direction`](Chain::set_direction) for a textual token such as
    /// `"left"`. Unknown tokens leave heading and aim untouched.
    pub fn set_direction_token(&mut self, token: &str) -> ChainResult<()> {
        let direction = token.parse::<Direction>()?;
        self.set_direction(direction)
    }

    /// Advances the head towards the aim at constant speed for `dt` seconds, then drags
    /// the body along. No clamping against the bounds happens here.
    pub fn update(&mut self, dt: f32) -> ChainResult<()> {
        let head = self.head()?;
        if !dt.is_finite() || dt < 0.0 {
            return Err(ChainError::InvalidTimeDelta { dt });
        }

        let velocity = unit_towards(head, self.aim) * self.speed;
        self.set_head(head + velocity * dt)
    }

    /// Moves the head to `point` and re-pins the rest of the chain.
    pub fn set_head(&mut self, point: Vec2) -> ChainResult<()> {
        let head = self
            .segments
            .first_mut()
            .ok_or(ChainError::UninitializedChain)?;
        *head = point;
        self.propagate();
        Ok(())
    }

    // Must run front to back: each segment follows the already-moved previous one.
    fn propagate(&mut self) {
        for i in 1..self.segments.len() {
            let link = 2.0 * self.effective_radius(i);
            let prev = self.segments[i - 1];
            self.segments[i] = prev + unit_towards(prev, self.segments[i]) * link;
        }
    }

    /// Appends a segment and speeds the chain up.
    ///
    /// The new segment sits at the origin until the next [`update`](Chain::update) pins
    /// it behind the tail, so collision queries should only run after that update.
    pub fn eat_food(&mut self) -> ChainResult<()> {
        if !self.is_initialized() {
            return Err(ChainError::UninitializedChain);
        }

        self.segments.push(Vec2::ZERO);
        self.speed += self.config.speed_increment;

        debug!(
            "chain grew to {} segments, speed {}",
            self.segments.len(),
            self.speed
        );
        Ok(())
    }

    /// Whether `point` is within the (generously inflated) head circle.
    pub fn hit_head(&self, point: Vec2) -> ChainResult<bool> {
        let head = self.head()?;
        let radius = self.config.head_radius();
        Ok(head.distance_squared(point) <= radius * radius * self.config.head_hit_margin)
    }

    /// Whether `point` is within the base radius of any non-head segment, tail included.
    pub fn hit_body(&self, point: Vec2) -> ChainResult<bool> {
        if !self.is_initialized() {
            return Err(ChainError::UninitializedChain);
        }

        let radius_squared = self.config.radius * self.config.radius;
        Ok(self
            .segments
            .iter()
            .skip(1)
            .any(|segment| segment.distance_squared(point) <= radius_squared))
    }

    pub fn hit(&self, point: Vec2) -> ChainResult<bool> {
        Ok(self.hit_head(point)? || self.hit_body(point)?)
    }

    /// Whether the head has run into its own body.
    pub fn hits_self(&self) -> ChainResult<bool> {
        if !self.is_initialized() {
            return Err(ChainError::UninitializedChain);
        }

        for &segment in self.segments.iter().skip(1) {
            if self.hit_head(segment)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether the head has left the playable area.
    pub fn is_out_of_bounds(&self) -> ChainResult<bool> {
        Ok(!self.bounds.contains(self.head()?))
    }
}

/// Unit vector along the angle from `from` to `to`. Coincident points yield +x.
fn unit_towards(from: Vec2, to: Vec2) -> Vec2 {
    let delta = to - from;
    let angle = delta.y.atan2(delta.x);
    Vec2::new(angle.cos(), angle.sin())
}

//! Movement and collision core of a continuous-motion snake, plus the Bevy plugins that
//! drive, draw and frame it.

pub mod chain;
pub mod food;
pub mod game;
pub mod rendering;
pub mod snake;
pub mod ui;

pub use chain::{Bounds, Chain, ChainConfig, ChainError, ChainResult, Direction, Segment};

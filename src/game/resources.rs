//! Game resources (singleton state).

use bevy::prelude::*;

use crate::chain::Direction;

/// Game phase enum to track which state the game is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// Main game state resource.
#[derive(Resource, Default)]
pub struct GameState {
    pub score: usize,
    pub phase: GamePhase,
}

impl GameState {
    /// Resets the score and enters the playing phase.
    pub fn start_round(&mut self) {
        self.score = 0;
        self.phase = GamePhase::Playing;
    }
}

/// Input buffer to queue direction changes.
#[derive(Resource, Default)]
pub struct InputBuffer {
    queued_directions: Vec<Direction>,
}

impl InputBuffer {
    /// Queue a direction change (max 2 buffered inputs).
    pub fn queue_direction(&mut self, direction: Direction) {
        if self.queued_directions.len() < 2 {
            self.queued_directions.push(direction);
        }
    }

    /// Pop the next queued direction.
    pub fn pop_direction(&mut self) -> Option<Direction> {
        if !self.queued_directions.is_empty() {
            Some(self.queued_directions.remove(0))
        } else {
            None
        }
    }

    /// Get the last queued direction without removing it.
    pub fn last_direction(&self) -> Option<Direction> {
        self.queued_directions.last().copied()
    }

    /// Clear all queued directions.
    pub fn clear(&mut self) {
        self.queued_directions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_buffer_keeps_two_in_order() {
        let mut buffer = InputBuffer::default();
        buffer.queue_direction(Direction::Up);
        buffer.queue_direction(Direction::Right);
        buffer.queue_direction(Direction::Down);

        assert_eq!(buffer.last_direction(), Some(Direction::Right));
        assert_eq!(buffer.pop_direction(), Some(Direction::Up));
        assert_eq!(buffer.pop_direction(), Some(Direction::Right));
        assert_eq!(buffer.pop_direction(), None);
    }

    #[test]
    fn start_round_resets_score() {
        let mut state = GameState {
            score: 7,
            phase: GamePhase::GameOver,
        };
        state.start_round();
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Playing);
    }
}

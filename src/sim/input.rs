//! Directional input routing
//!
//! Input only ever writes the pending direction. The step latches it once,
//! so the last valid turn between two steps wins.

use serde::{Deserialize, Serialize};

use super::cell::Direction;

/// Directional symbol coming from the host (keyboard, gamepad, touch...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirectionInput {
    Up,
    Down,
    Left,
    Right,
}

impl DirectionInput {
    /// Grid direction for this symbol (up is toward -Z)
    pub fn direction(self) -> Direction {
        match self {
            DirectionInput::Up => Direction::MinusZ,
            DirectionInput::Down => Direction::PlusZ,
            DirectionInput::Left => Direction::MinusX,
            DirectionInput::Right => Direction::PlusX,
        }
    }
}

/// Pending/current direction pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRouter {
    /// Direction used by the most recent step
    current: Direction,
    /// Direction the next step will use
    pending: Direction,
}

impl InputRouter {
    pub fn new(initial: Direction) -> Self {
        Self {
            current: initial,
            pending: initial,
        }
    }

    /// Request a turn. Returns false (and changes nothing) for a reversal.
    pub fn set_direction(&mut self, input: DirectionInput) -> bool {
        let candidate = input.direction();
        if candidate.is_opposite(self.current) {
            return false;
        }
        self.pending = candidate;
        true
    }

    /// Commit the pending direction for the step about to run
    pub fn latch(&mut self) -> Direction {
        self.current = self.pending;
        self.current
    }

    pub fn current(&self) -> Direction {
        self.current
    }

    pub fn pending(&self) -> Direction {
        self.pending
    }
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new(Direction::PlusX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversal_rejected() {
        let mut input = InputRouter::new(Direction::PlusX);
        assert!(!input.set_direction(DirectionInput::Left));
        assert_eq!(input.pending(), Direction::PlusX);
        assert_eq!(input.current(), Direction::PlusX);
    }

    #[test]
    fn test_latest_valid_input_wins() {
        let mut input = InputRouter::new(Direction::PlusX);
        assert!(input.set_direction(DirectionInput::Up));
        assert!(input.set_direction(DirectionInput::Down));
        assert_eq!(input.latch(), Direction::PlusZ);
    }

    #[test]
    fn test_reversal_checked_against_latched_direction() {
        // Heading +X: Up is accepted as pending, but Left is still the
        // reverse of the latched direction and must not sneak through.
        let mut input = InputRouter::new(Direction::PlusX);
        assert!(input.set_direction(DirectionInput::Up));
        assert!(!input.set_direction(DirectionInput::Left));
        assert_eq!(input.latch(), Direction::MinusZ);

        // After the latch, Left is a legal turn from -Z
        assert!(input.set_direction(DirectionInput::Left));
        assert_eq!(input.latch(), Direction::MinusX);
    }

    #[test]
    fn test_symbol_mapping() {
        assert_eq!(DirectionInput::Up.direction(), Direction::MinusZ);
        assert_eq!(DirectionInput::Down.direction(), Direction::PlusZ);
        assert_eq!(DirectionInput::Left.direction(), Direction::MinusX);
        assert_eq!(DirectionInput::Right.direction(), Direction::PlusX);
    }
}

//! Move directions.
//!
//! External drivers speak integers: `0 = Up`, `1 = Left`, `2 = Down`,
//! `3 = Right`. The keyboard driver binds the same order to W/A/S/D.
//! Both mappings are fixed and converted here, nowhere else.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// A sliding direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Left = 1,
    Down = 2,
    Right = 3,
}

impl Direction {
    /// All directions in action-index order.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

    /// Direction for an action index, `None` if out of range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Action index of this direction.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction bound to a W/A/S/D key (case-insensitive).
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            'a' => Some(Direction::Left),
            's' => Some(Direction::Down),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }

    /// True for Up/Down, which operate on columns.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// True for Right/Down, whose leading edge is the far end of the line.
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    /// Upper-case name, as used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Left => "LEFT",
            Direction::Down => "DOWN",
            Direction::Right => "RIGHT",
        }
    }
}

impl TryFrom<i64> for Direction {
    type Error = GameError;

    fn try_from(action: i64) -> Result<Self, Self::Error> {
        usize::try_from(action)
            .ok()
            .and_then(Direction::from_index)
            .ok_or(GameError::InvalidDirection(action))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

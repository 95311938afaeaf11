//! Whole-board moves and terminal detection.
//!
//! These are pure functions over a [`Board`]: no spawning, no score
//! bookkeeping. The session layers randomness and state on top.

use crate::core::{can_merge, Board, Direction, Tile};

use super::line::slide_line;

/// Result of sliding a board in one direction, before any spawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shifted {
    /// Board after every line was compacted and merged.
    pub board: Board,
    /// Sum of merged tile values.
    pub gained: Tile,
    /// False for a no-op move.
    pub changed: bool,
}

/// Slide every line of `board` in `direction`.
///
/// Lines are independent: each row (Left/Right) or column (Up/Down) is read
/// in travel order, merged, and written back.
#[must_use]
pub fn shift(board: &Board, direction: Direction) -> Shifted {
    let vertical = direction.is_vertical();
    let reversed = direction.is_reversed();

    let mut next = board.clone();
    let mut gained: Tile = 0;
    let mut line = Vec::with_capacity(board.line_len(vertical));

    for index in 0..board.line_count(vertical) {
        board.read_line(index, vertical, reversed, &mut line);
        gained = gained.saturating_add(slide_line(&mut line));
        next.write_line(index, vertical, reversed, &line);
    }

    let changed = next != *board;
    Shifted {
        board: next,
        gained,
        changed,
    }
}

/// True if sliding in `direction` would change the board.
#[must_use]
pub fn can_move(board: &Board, direction: Direction) -> bool {
    let vertical = direction.is_vertical();
    let reversed = direction.is_reversed();
    let mut line = Vec::with_capacity(board.line_len(vertical));

    (0..board.line_count(vertical)).any(|index| {
        board.read_line(index, vertical, reversed, &mut line);
        line_can_slide(&line)
    })
}

/// A line changes iff a gap precedes a tile or two equal tiles meet.
fn line_can_slide(line: &[Tile]) -> bool {
    let mut seen_gap = false;
    let mut previous: Option<Tile> = None;
    for &value in line {
        if value == 0 {
            seen_gap = true;
            continue;
        }
        if seen_gap || previous.is_some_and(|p| can_merge(p, value)) {
            return true;
        }
        previous = Some(value);
    }
    false
}

/// Directions that would change the board, in action-index order.
#[must_use]
pub fn legal_moves(board: &Board) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| can_move(board, dir))
        .collect()
}

/// True iff no direction changes the board: full and no adjacent equal pair.
#[must_use]
pub fn is_stuck(board: &Board) -> bool {
    board.is_full() && !board.has_adjacent_pair()
}

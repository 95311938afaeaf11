//! Compact-and-merge for a single line.
//!
//! Every move reduces to this routine: the caller reads each row or column
//! in travel order (index 0 is the edge tiles slide toward), runs
//! [`slide_line`], and writes it back.

use crate::core::{can_merge, Tile};

/// Slide a line toward index 0, merging equal neighbours once each.
///
/// Returns the score gained, i.e. the sum of the merged tile values.
/// Tiles at [`MAX_TILE`](crate::core::MAX_TILE) slide but never merge.
///
/// ```
/// use rust_2048::rules::slide_line;
///
/// let mut line = [2, 2, 2, 2];
/// assert_eq!(slide_line(&mut line), 8);
/// assert_eq!(line, [4, 4, 0, 0]);
/// ```
pub fn slide_line(line: &mut [Tile]) -> Tile {
    let mut gained: Tile = 0;
    let mut write = 0;
    // Whether the tile at `write - 1` was produced by a merge this move.
    let mut last_merged = false;

    for read in 0..line.len() {
        let value = line[read];
        if value == 0 {
            continue;
        }
        line[read] = 0;

        if write > 0 && !last_merged && can_merge(line[write - 1], value) {
            let merged = value * 2;
            line[write - 1] = merged;
            gained = gained.saturating_add(merged);
            last_merged = true;
        } else {
            line[write] = value;
            write += 1;
            last_merged = false;
        }
    }

    gained
}

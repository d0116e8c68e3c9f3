use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Render-ready copy of the engine state.
///
/// `symbols` covers the whole grid, wall ring included, so row `0` and row
/// `size.0 + 1` are walls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub symbols: Array2<Symbol>,
    /// Interior `(height, width)`
    pub size: Coord2,
    pub cursor: Coord2,
    pub mine_count: CellCount,
    pub flagged_count: CellCount,
    pub discovered_count: CellCount,
    pub safe_tile_total: CellCount,
    /// Safe tiles uncovered, in percent
    pub completion: f64,
    pub is_over: bool,
    pub won: Option<bool>,
}

impl Snapshot {
    pub fn symbol_at(&self, coords: Coord2) -> Symbol {
        self.symbols[coords.to_nd_index()]
    }

    /// Whole percent solved, rounded down.
    pub fn completion_floor(&self) -> u8 {
        self.completion.clamp(0.0, 100.0) as u8
    }

    /// Mines minus flags, negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        self.mine_count as isize - self.flagged_count as isize
    }

    pub fn is_cursor(&self, coords: Coord2) -> bool {
        !self.is_over && self.cursor == coords
    }
}

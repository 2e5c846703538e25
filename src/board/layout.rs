//! Static board layout.
//!
//! The shared track has 52 cells traversed in increasing order and
//! wrapping from 51 back to 0. Cell sets never change; only the
//! `special_enabled` switch differs between matches.

use serde::{Deserialize, Serialize};

use crate::core::Seat;

/// Number of cells on the shared track.
pub const TRACK_LENGTH: u8 = 52;

/// Home-relative distance at which a token leaves the shared track.
pub const FINAL_ENTRY: u8 = 51;

/// Number of cells in each seat's final stretch.
pub const FINAL_LENGTH: u8 = 6;

/// Final-stretch index of the goal cell.
pub const GOAL: u8 = FINAL_LENGTH - 1;

/// Cells where each seat's tokens enter play.
pub const START_CELLS: [u8; 4] = [0, 13, 26, 39];

/// Cells granting a bonus throw.
pub const GLOBE_CELLS: [u8; 4] = [8, 21, 34, 47];

/// Cells that send the landing token on to the next star.
pub const STAR_CELLS: [u8; 8] = [5, 11, 18, 24, 31, 37, 44, 50];

/// A Ludo board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    special_enabled: bool,
}

impl Board {
    #[must_use]
    pub const fn new(special_enabled: bool) -> Self {
        Self { special_enabled }
    }

    /// Whether star/globe/start-cell effects apply.
    #[must_use]
    pub const fn special_enabled(&self) -> bool {
        self.special_enabled
    }

    pub(crate) fn set_special_enabled(&mut self, enabled: bool) {
        self.special_enabled = enabled;
    }

    #[must_use]
    pub fn is_star(&self, cell: u8) -> bool {
        STAR_CELLS.contains(&cell)
    }

    #[must_use]
    pub fn is_globe(&self, cell: u8) -> bool {
        GLOBE_CELLS.contains(&cell)
    }

    #[must_use]
    pub fn is_start(&self, cell: u8) -> bool {
        START_CELLS.contains(&cell)
    }

    /// Start cell of the given seat.
    #[must_use]
    pub const fn start_cell(&self, seat: Seat) -> u8 {
        seat.start_offset()
    }

    /// The first star strictly after `cell` in travel order, wrapping.
    #[must_use]
    pub fn next_star(&self, cell: u8) -> u8 {
        STAR_CELLS
            .iter()
            .copied()
            .find(|&star| star > cell)
            .unwrap_or(STAR_CELLS[0])
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(true)
    }
}

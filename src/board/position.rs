//! Token positions.
//!
//! A token is in exactly one of three places: its seat's home area,
//! a shared-track cell, or a cell of its seat's private final stretch.
//! Encoding this as an enum makes "on the final stretch with a track
//! cell" unrepresentable.

use serde::{Deserialize, Serialize};

use super::layout::{FINAL_ENTRY, GOAL, TRACK_LENGTH};
use crate::core::Seat;

/// Where a token is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Not yet in play (or sent back).
    #[default]
    Home,
    /// Absolute shared-track cell, `0..52`.
    Track(u8),
    /// Final-stretch cell, `0..6`; `GOAL` is the last one.
    Final(u8),
}

impl Position {
    #[must_use]
    pub const fn is_home(self) -> bool {
        matches!(self, Position::Home)
    }

    #[must_use]
    pub const fn is_on_track(self) -> bool {
        matches!(self, Position::Track(_))
    }

    #[must_use]
    pub const fn is_on_final(self) -> bool {
        matches!(self, Position::Final(_))
    }

    /// On the goal cell.
    #[must_use]
    pub const fn is_goal(self) -> bool {
        matches!(self, Position::Final(GOAL))
    }

    /// Shared-track cell, if on the shared track.
    #[must_use]
    pub const fn track_cell(self) -> Option<u8> {
        match self {
            Position::Track(cell) => Some(cell),
            _ => None,
        }
    }

    /// Home-relative distance traveled on the shared track by `seat`.
    #[must_use]
    pub fn distance(self, seat: Seat) -> Option<u8> {
        self.track_cell().map(|cell| track_distance(cell, seat))
    }

    /// Overall progress from the start cell, `0..=56`.
    ///
    /// Shared-track distances map to `0..=50` and final-stretch cells to
    /// `51..=56`. Home has no progress.
    #[must_use]
    pub fn progress(self, seat: Seat) -> Option<u8> {
        match self {
            Position::Home => None,
            Position::Track(cell) => Some(track_distance(cell, seat)),
            Position::Final(index) => Some(FINAL_ENTRY + index),
        }
    }
}

/// `(52 + cell - start_offset) mod 52`.
pub(crate) fn track_distance(cell: u8, seat: Seat) -> u8 {
    (TRACK_LENGTH + cell - seat.start_offset()) % TRACK_LENGTH
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Home => f.write_str("home"),
            Position::Track(cell) => write!(f, "track {cell}"),
            Position::Final(index) => write!(f, "final {index}"),
        }
    }
}

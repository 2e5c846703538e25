//! Board layout, token positions, and tokens.
//!
//! Track coordinates:
//! - Shared track: absolute cells `0..52`, circular.
//! - Each seat starts at `seat * 13` and measures its own distance from there.
//! - Once a token's distance plus the roll reaches 51 it moves onto the
//!   seat's private six-cell final stretch, whose last cell is the goal.

pub mod layout;
pub mod position;
pub mod token;

pub use layout::{
    Board, FINAL_ENTRY, FINAL_LENGTH, GLOBE_CELLS, GOAL, START_CELLS, STAR_CELLS, TRACK_LENGTH,
};
pub use position::Position;
pub use token::Token;

//! Players: seat-owned token sets and single-token movement.

pub mod movement;
pub mod state;

pub use movement::{SpecialEffect, Step};
pub use state::{Eligible, Player};

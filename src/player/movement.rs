//! Outcomes of moving a single token.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::core::TokenIndex;

/// The repositioning of one token by one roll, before any capture or
/// special-tile effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    pub token: TokenIndex,
    pub roll: u8,
    pub from: Position,
    pub to: Position,
}

impl Step {
    /// The token left home this step.
    #[must_use]
    pub fn entered_play(&self) -> bool {
        self.from.is_home() && !self.to.is_home()
    }

    /// The token crossed from the shared track onto the final stretch.
    #[must_use]
    pub fn entered_final(&self) -> bool {
        self.from.is_on_track() && self.to.is_on_final()
    }
}

/// Effect of the special tile a token landed on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialEffect {
    /// Plain cell, or special tiles disabled.
    #[default]
    None,
    /// Landed on a star and jumped ahead to the next one.
    StarHop { from: u8, to: u8 },
    /// Landed on a globe: the seat throws again.
    Globe,
    /// Landed on its own start cell: protected until it moves again.
    Protected,
}

impl SpecialEffect {
    /// Whether the effect keeps the turn with the moving seat.
    #[must_use]
    pub fn grants_bonus(self) -> bool {
        matches!(self, SpecialEffect::Globe)
    }
}

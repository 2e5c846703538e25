//! Policies that ignore the board.

use super::AutoPolicy;
use crate::core::{GameRng, TokenIndex};
use crate::rules::Snapshot;

/// Always moves the lowest-indexed eligible token.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstEligible;

impl AutoPolicy for FirstEligible {
    fn choose_token(&mut self, snapshot: &Snapshot) -> Option<TokenIndex> {
        snapshot.eligible.first().copied()
    }

    fn name(&self) -> &'static str {
        "first-eligible"
    }
}

/// Picks uniformly among eligible tokens.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl AutoPolicy for RandomPolicy {
    fn choose_token(&mut self, snapshot: &Snapshot) -> Option<TokenIndex> {
        self.rng.choose(&snapshot.eligible).copied()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

//! The match's six-sided die.

use crate::core::{GameRng, LudoError, Result};

/// A fair die with a debug override.
///
/// Owned by one engine; the only state besides the RNG is the last face
/// shown.
#[derive(Clone, Debug)]
pub struct Dice {
    rng: GameRng,
    last: Option<u8>,
}

impl Dice {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng, last: None }
    }

    /// Roll uniformly in `1..=6`.
    pub fn roll(&mut self) -> u8 {
        let value = self.rng.roll_die();
        self.last = Some(value);
        value
    }

    /// Show an exact face instead of rolling.
    pub fn roll_forced(&mut self, value: u8) -> Result<u8> {
        if !(1..=6).contains(&value) {
            return Err(LudoError::invalid_input(format!(
                "dice value {value} is outside 1..=6"
            )));
        }
        self.last = Some(value);
        Ok(value)
    }

    /// Last face shown, if any.
    #[must_use]
    pub fn last(&self) -> Option<u8> {
        self.last
    }

    /// The last face shown was a six.
    #[must_use]
    pub fn is_six(&self) -> bool {
        self.last == Some(6)
    }

    /// Seed of the underlying RNG stream.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub(crate) fn clear(&mut self) {
        self.last = None;
    }
}

//! Match configuration.
//!
//! Everything here is an input to initialization only:
//! - `Theme`: presentation style, passed through to renderers untouched
//! - `SeatConfig`: whether a seat plays, and whether a policy drives it
//! - `MatchConfig`: combines the above with board and dice settings
//!
//! `MatchBuilder` offers the same settings as a consuming builder.

use serde::{Deserialize, Serialize};

use super::error::{LudoError, Result};
use super::seat::{Seat, SeatMap};
use crate::rules::TurnEngine;

/// Visual theme. The rules engine never interprets it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Plain,
    Solid,
    Fruits,
}

/// Which automatic policy drives a seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyKind {
    /// Always the lowest eligible token index.
    FirstEligible,
    /// Uniformly random among eligible tokens.
    Random,
    /// Prefers finishing, capturing, entering, then the most advanced token.
    #[default]
    Heuristic,
    /// Scores moves with a loaded `PreferenceTable`.
    Table,
}

/// Per-seat settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatConfig {
    /// Seat takes part in the match.
    pub active: bool,
    /// Seat is driven by an automatic policy instead of input events.
    pub auto: bool,
    /// Policy used when `auto` is set.
    pub policy: PolicyKind,
}

impl Default for SeatConfig {
    fn default() -> Self {
        Self {
            active: true,
            auto: false,
            policy: PolicyKind::default(),
        }
    }
}

/// Complete match configuration.
///
/// Defaults: all four seats active and manual, special tiles on,
/// entropy-seeded dice, forced rolls disabled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Presentation theme.
    pub theme: Theme,

    /// Enable star/globe/start-cell effects.
    pub special_board: bool,

    /// Per-seat settings.
    pub seats: SeatMap<SeatConfig>,

    /// Dice seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Opt in to `TurnEngine::roll_forced`. Meant for tests and debugging.
    pub allow_forced_rolls: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            special_board: true,
            seats: SeatMap::with_default(),
            seed: None,
            allow_forced_rolls: false,
        }
    }
}

impl MatchConfig {
    /// Seats marked active, in turn order.
    pub fn active_seats(&self) -> impl Iterator<Item = Seat> + '_ {
        self.seats
            .iter()
            .filter(|(_, seat)| seat.active)
            .map(|(seat, _)| seat)
    }

    /// Check the configuration describes a playable match.
    pub fn validate(&self) -> Result<()> {
        if self.active_seats().next().is_none() {
            return Err(LudoError::invalid_input("a match needs at least one active seat"));
        }
        Ok(())
    }
}

/// Builder for a `TurnEngine`.
///
/// ```
/// use ludo_engine::core::{MatchBuilder, PolicyKind, Seat};
///
/// let engine = MatchBuilder::new()
///     .seats(&[Seat::ALL[0], Seat::ALL[2]])
///     .auto(Seat::ALL[2], PolicyKind::Random)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.active_seats(), &[Seat::ALL[0], Seat::ALL[2]]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MatchBuilder {
    config: MatchConfig,
}

impl MatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.config.theme = theme;
        self
    }

    pub fn special_board(mut self, enabled: bool) -> Self {
        self.config.special_board = enabled;
        self
    }

    /// Mark exactly these seats active.
    pub fn seats(mut self, seats: &[Seat]) -> Self {
        for (seat, cfg) in self.config.seats.iter_mut() {
            cfg.active = seats.contains(&seat);
        }
        self
    }

    /// Hand a seat to an automatic policy.
    pub fn auto(mut self, seat: Seat, policy: PolicyKind) -> Self {
        let cfg = &mut self.config.seats[seat];
        cfg.auto = true;
        cfg.policy = policy;
        self
    }

    /// Hand every seat to the same automatic policy.
    pub fn all_auto(mut self, policy: PolicyKind) -> Self {
        for seat in Seat::ALL {
            self = self.auto(seat, policy);
        }
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn allow_forced_rolls(mut self) -> Self {
        self.config.allow_forced_rolls = true;
        self
    }

    /// Validate and return the configuration.
    pub fn config(self) -> Result<MatchConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build the engine.
    pub fn build(self) -> Result<TurnEngine> {
        TurnEngine::new(self.config)
    }
}

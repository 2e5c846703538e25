//! Driving automatic seats.
//!
//! `Autoplayer` holds one policy per automatic player and advances an engine
//! whenever the current seat is one of them: roll when a roll is due,
//! otherwise let the seat's policy choose. Manual seats are left alone.

use std::sync::Arc;

use tracing::{debug, instrument};

use super::engine::TurnEngine;
use super::outcome::{EngineEvent, Placement};
use crate::core::{GameRng, LudoError, Phase, PolicyKind, Result, Seat, SeatMap};
use crate::policy::{
    AutoPolicy, FirstEligible, HeuristicPolicy, PreferenceTable, RandomPolicy, TablePolicy,
};

/// Policies for the automatic seats of one match.
pub struct Autoplayer {
    policies: SeatMap<Option<Box<dyn AutoPolicy>>>,
}

impl Default for Autoplayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Autoplayer {
    /// No seat is automatic.
    #[must_use]
    pub fn new() -> Self {
        Self {
            policies: SeatMap::new(|_| None),
        }
    }

    /// One policy per automatic player of `engine`, of the kind its seat
    /// is configured with.
    ///
    /// `PolicyKind::Table` needs `table`. Random policies draw from streams
    /// forked off the match seed, so seeded matches replay exactly.
    pub fn for_engine(
        engine: &TurnEngine,
        table: Option<Arc<PreferenceTable>>,
    ) -> Result<Self> {
        let config = engine.config();
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let mut autoplayer = Self::new();

        for (seat, player) in engine.players().iter() {
            if !player.is_auto() {
                continue;
            }
            let policy: Box<dyn AutoPolicy> = match config.seats[seat].policy {
                PolicyKind::FirstEligible => Box::new(FirstEligible),
                PolicyKind::Random => Box::new(RandomPolicy::new(rng.fork())),
                PolicyKind::Heuristic => Box::new(HeuristicPolicy),
                PolicyKind::Table => {
                    let Some(table) = table.clone() else {
                        return Err(LudoError::invalid_input(format!(
                            "{seat} uses a table policy but no table was provided"
                        )));
                    };
                    Box::new(TablePolicy::new(table))
                }
            };
            autoplayer.policies[seat] = Some(policy);
        }

        Ok(autoplayer)
    }

    /// Hand `seat` to `policy`, replacing any previous one.
    #[must_use]
    pub fn with_policy(mut self, seat: Seat, policy: Box<dyn AutoPolicy>) -> Self {
        self.policies[seat] = Some(policy);
        self
    }

    /// `seat` is driven by a policy.
    #[must_use]
    pub fn controls(&self, seat: Seat) -> bool {
        self.policies[seat].is_some()
    }

    /// Advance the engine by one roll or one move if the current seat is
    /// automatic. Returns `None` when it is a manual seat's turn or the
    /// match is over.
    #[instrument(skip_all, fields(seat = %engine.current_seat()))]
    pub fn step(&mut self, engine: &mut TurnEngine) -> Result<Option<EngineEvent>> {
        let seat = engine.current_seat();
        let Some(policy) = self.policies[seat].as_deref_mut() else {
            return Ok(None);
        };

        match engine.phase() {
            Phase::Finished => Ok(None),
            Phase::AwaitingRoll => engine.roll().map(|roll| Some(EngineEvent::Rolled(roll))),
            Phase::AwaitingSelection => {
                debug!(policy = policy.name(), "choosing");
                engine
                    .auto_move(policy)
                    .map(|outcome| Some(EngineEvent::Moved(outcome)))
            }
        }
    }

    /// Step until the match ends, a manual seat is to play, or `max_steps`
    /// steps were taken. Returns the placement if the match ended.
    pub fn play_out(
        &mut self,
        engine: &mut TurnEngine,
        max_steps: usize,
    ) -> Result<Option<Placement>> {
        for _ in 0..max_steps {
            if self.step(engine)?.is_none() {
                break;
            }
        }
        Ok(engine.placement())
    }
}

impl std::fmt::Debug for Autoplayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<Option<&'static str>> = self
            .policies
            .values()
            .map(|p| p.as_ref().map(|p| p.name()))
            .collect();
        f.debug_struct("Autoplayer").field("policies", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchBuilder;

    #[test]
    fn test_for_engine_builds_auto_seats_only() {
        let engine = MatchBuilder::new()
            .auto(Seat::ALL[1], PolicyKind::Random)
            .auto(Seat::ALL[3], PolicyKind::FirstEligible)
            .seed(4)
            .build()
            .unwrap();
        assert!(engine.player(Seat::ALL[1]).is_auto());
        assert!(!engine.player(Seat::ALL[2]).is_auto());
        let autoplayer = Autoplayer::for_engine(&engine, None).unwrap();

        assert!(!autoplayer.controls(Seat::ALL[0]));
        assert!(autoplayer.controls(Seat::ALL[1]));
        assert!(!autoplayer.controls(Seat::ALL[2]));
        assert!(autoplayer.controls(Seat::ALL[3]));
    }

    #[test]
    fn test_table_policy_needs_table() {
        let engine = MatchBuilder::new()
            .auto(Seat::ALL[0], PolicyKind::Table)
            .build()
            .unwrap();
        let err = Autoplayer::for_engine(&engine, None).unwrap_err();
        assert!(matches!(err, LudoError::InvalidInput { .. }));

        let table = Arc::new(PreferenceTable::new());
        assert!(Autoplayer::for_engine(&engine, Some(table)).is_ok());
    }

    #[test]
    fn test_step_waits_for_manual_seat() {
        let mut engine = MatchBuilder::new()
            .auto(Seat::ALL[1], PolicyKind::Heuristic)
            .seed(8)
            .build()
            .unwrap();
        let mut autoplayer = Autoplayer::for_engine(&engine, None).unwrap();

        assert_eq!(autoplayer.step(&mut engine).unwrap(), None);
        assert_eq!(engine.phase(), Phase::AwaitingRoll);
        assert_eq!(engine.turn_count(), 0);
    }

    #[test]
    fn test_play_out_finishes_match() {
        let mut engine = MatchBuilder::new()
            .all_auto(PolicyKind::Heuristic)
            .seed(21)
            .build()
            .unwrap();
        let mut autoplayer = Autoplayer::for_engine(&engine, None).unwrap();

        let placement = autoplayer.play_out(&mut engine, 100_000).unwrap().unwrap();
        assert_eq!(placement.ranking().len(), 4);
        assert!(!engine.is_playing());
    }

    #[test]
    fn test_with_policy_overrides() {
        let mut engine = MatchBuilder::new()
            .seats(&[Seat::ALL[0]])
            .seed(3)
            .build()
            .unwrap();
        let mut autoplayer = Autoplayer::new().with_policy(Seat::ALL[0], Box::new(FirstEligible));

        let placement = autoplayer.play_out(&mut engine, 100_000).unwrap().unwrap();
        assert_eq!(placement.winner(), Some(Seat::ALL[0]));
    }
}

//! The turn engine: the match state machine.
//!
//! `TurnEngine` is the only component that mutates cross-seat state. It
//! owns the four players, the board, the dice, the active-seat list and
//! the finishing order, and decides every phase transition:
//! - `roll` computes the eligible tokens, passing the turn when there are none
//! - `select` resolves a move: reposition, capture, special tile, goal
//! - the seat keeps the turn after a six or a globe, otherwise it passes
//!
//! Only tokens from the eligible set computed by `roll` can be moved, so
//! no sequence of calls can break the board invariants.

use im::Vector;
use tracing::{debug, info, instrument, warn};

use super::dice::Dice;
use super::outcome::{Capture, Captures, EngineEvent, MoveOutcome, MoveRecord, Placement, RollOutcome};
use super::snapshot::{token_views, Snapshot, TokenView};
use crate::board::Board;
use crate::core::{
    Color, GameRng, InputEvent, LudoError, MatchConfig, Phase, Result, Seat, SeatMap, TokenIndex,
};
use crate::player::{Eligible, Player, SpecialEffect};
use crate::policy::AutoPolicy;

/// A single match of Ludo.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    config: MatchConfig,
    board: Board,
    dice: Dice,
    players: SeatMap<Player>,
    /// Seats still playing, in seat order.
    active_seats: Vec<Seat>,
    current: Seat,
    turn_count: u32,
    phase: Phase,
    eligible: Eligible,
    finished: Vec<Seat>,
    history: Vector<MoveRecord>,
}

impl TurnEngine {
    /// Start a match from a validated configuration.
    pub fn new(config: MatchConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let players = SeatMap::new(|seat| {
            let seat_config = &config.seats[seat];
            Player::new(seat, seat_config.active, seat_config.auto)
        });
        let active_seats: Vec<Seat> = config.active_seats().collect();
        let current = active_seats.first().copied().unwrap_or(Seat::ALL[0]);

        info!(
            seats = active_seats.len(),
            special = config.special_board,
            seed = rng.seed(),
            "match created"
        );

        Ok(Self {
            board: Board::new(config.special_board),
            dice: Dice::new(rng),
            players,
            active_seats,
            current,
            turn_count: 0,
            phase: Phase::AwaitingRoll,
            eligible: Eligible::new(),
            finished: Vec::new(),
            history: Vector::new(),
            config,
        })
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The match is still running.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.phase != Phase::Finished
    }

    #[must_use]
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// Number of times the turn has passed between seats.
    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Last rolled value.
    #[must_use]
    pub fn dice_value(&self) -> Option<u8> {
        self.dice.last()
    }

    /// Tokens the current seat may move. Empty unless awaiting selection.
    #[must_use]
    pub fn eligible_tokens(&self) -> &[TokenIndex] {
        &self.eligible
    }

    #[must_use]
    pub fn active_seats(&self) -> &[Seat] {
        &self.active_seats
    }

    /// Seats that finished, in finishing order.
    #[must_use]
    pub fn finished_ranking(&self) -> &[Seat] {
        &self.finished
    }

    #[must_use]
    pub fn players(&self) -> &SeatMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat]
    }

    #[must_use]
    pub fn player_by_color(&self, color: Color) -> &Player {
        &self.players[color.seat()]
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Final standings once every seat has finished.
    #[must_use]
    pub fn placement(&self) -> Option<Placement> {
        (self.phase == Phase::Finished).then(|| Placement::new(self.finished.clone()))
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            phase: self.phase,
            current_seat: self.current,
            turn_count: self.turn_count,
            dice_value: self.dice.last(),
            eligible: self.eligible.clone(),
            players: self.players.clone(),
            active_seats: self.active_seats.clone(),
            finished_ranking: self.finished.clone(),
            history: self.history.clone(),
        }
    }

    #[must_use]
    pub fn token_views(&self) -> Vec<TokenView> {
        token_views(&self.players)
    }

    // === Turn flow ===

    /// Roll the dice for the current seat.
    #[instrument(skip(self), fields(seat = %self.current))]
    pub fn roll(&mut self) -> Result<RollOutcome> {
        self.expect_phase(Phase::AwaitingRoll)?;
        let value = self.dice.roll();
        Ok(self.after_roll(value))
    }

    /// Roll an exact value. Requires `allow_forced_rolls` in the config.
    #[instrument(skip(self), fields(seat = %self.current))]
    pub fn roll_forced(&mut self, value: u8) -> Result<RollOutcome> {
        if !self.config.allow_forced_rolls {
            return Err(LudoError::ForcedRollDisabled);
        }
        self.expect_phase(Phase::AwaitingRoll)?;
        let value = self.dice.roll_forced(value)?;
        Ok(self.after_roll(value))
    }

    fn after_roll(&mut self, value: u8) -> RollOutcome {
        let seat = self.current;
        self.eligible = self.players[seat].eligible_tokens(value);
        debug!(value, eligible = self.eligible.len(), "rolled");

        if self.eligible.is_empty() {
            debug!("no movable token, passing");
            self.pass_turn();
            return RollOutcome {
                seat,
                value,
                eligible: Eligible::new(),
                passed: true,
            };
        }

        self.phase = Phase::AwaitingSelection;
        RollOutcome {
            seat,
            value,
            eligible: self.eligible.clone(),
            passed: false,
        }
    }

    /// Move an eligible token of the current seat by the rolled value.
    #[instrument(skip(self), fields(seat = %self.current))]
    pub fn select(&mut self, token: TokenIndex) -> Result<MoveOutcome> {
        self.expect_phase(Phase::AwaitingSelection)?;
        if !self.eligible.contains(&token) {
            warn!(%token, "rejected selection");
            return Err(LudoError::invalid_selection(format!(
                "{token} of {} cannot move this turn",
                self.current
            )));
        }
        let Some(roll) = self.dice.last() else {
            return Err(LudoError::invalid_selection("no dice value to move by"));
        };

        let seat = self.current;
        let step = self.players[seat].move_token(token, roll);
        debug!(from = %step.from, to = %step.to, roll, "moved");

        let mut captures = Captures::new();
        let mut special = SpecialEffect::None;
        if let Some(cell) = step.to.track_cell() {
            captures = self.capture_at(seat, cell);
            if self.board.special_enabled() {
                special = self.players[seat].apply_special(token, &self.board);
                if let SpecialEffect::StarHop { from, to } = special {
                    debug!(from, to, "star hop");
                }
            }
        }

        let landed = self.players[seat].token(token).position();
        let reached_goal = landed.is_goal();
        let seat_finished = reached_goal && self.players[seat].has_finished();
        if seat_finished {
            self.finish_seat(seat);
        }

        let bonus_turn = !seat_finished && (self.dice.is_six() || special.grants_bonus());
        self.history.push_back(MoveRecord {
            turn: self.turn_count,
            seat,
            token,
            roll,
            from: step.from,
            to: landed,
            captures: captures.clone(),
            bonus_turn,
        });

        self.eligible.clear();
        let placement = if self.active_seats.is_empty() {
            self.phase = Phase::Finished;
            let placement = Placement::new(self.finished.clone());
            info!(ranking = ?placement.ranking(), "match over");
            Some(placement)
        } else if bonus_turn {
            self.phase = Phase::AwaitingRoll;
            None
        } else {
            self.pass_turn();
            None
        };

        Ok(MoveOutcome {
            seat,
            step,
            landed,
            captures,
            special,
            reached_goal,
            seat_finished,
            bonus_turn,
            placement,
        })
    }

    /// Let a policy choose the current seat's token, then move it.
    ///
    /// A choice outside the eligible set is rejected like any other
    /// invalid selection; the engine does not substitute a default.
    pub fn auto_move(&mut self, policy: &mut dyn AutoPolicy) -> Result<MoveOutcome> {
        self.expect_phase(Phase::AwaitingSelection)?;
        let snapshot = self.snapshot();
        let Some(token) = policy.choose_token(&snapshot) else {
            warn!(policy = policy.name(), "policy made no choice");
            return Err(LudoError::invalid_selection(format!(
                "policy {} made no choice",
                policy.name()
            )));
        };
        self.select(token)
    }

    /// Dispatch an input event.
    pub fn handle(&mut self, event: InputEvent) -> Result<EngineEvent> {
        match event {
            InputEvent::Roll => self.roll().map(EngineEvent::Rolled),
            InputEvent::Choose(token) => self.select(token).map(EngineEvent::Moved),
        }
    }

    // === Roster ===

    /// Bring an inactive seat into the running match, tokens at home.
    #[instrument(skip(self))]
    pub fn add_player(&mut self, seat: Seat) -> Result<()> {
        self.expect_phase(Phase::AwaitingRoll)?;
        if self.players[seat].is_active() {
            return Err(LudoError::invalid_selection(format!("{seat} is already playing")));
        }

        let player = &mut self.players[seat];
        player.reset();
        player.set_active(true);
        let at = self.active_seats.partition_point(|&s| s < seat);
        self.active_seats.insert(at, seat);
        info!("player added");
        Ok(())
    }

    /// Take a seat out of the running match.
    ///
    /// Removing the current seat hands the roll to the next one. The last
    /// active seat cannot be removed.
    #[instrument(skip(self))]
    pub fn remove_player(&mut self, seat: Seat) -> Result<()> {
        self.expect_phase(Phase::AwaitingRoll)?;
        let Some(at) = self.active_seats.iter().position(|&s| s == seat) else {
            return Err(LudoError::invalid_selection(format!("{seat} is not playing")));
        };
        if self.active_seats.len() == 1 {
            return Err(LudoError::invalid_selection(format!(
                "{seat} is the last active seat"
            )));
        }

        self.active_seats.remove(at);
        self.players[seat].set_active(false);
        if self.current == seat {
            self.current = self.next_seat_after(seat);
        }
        info!("player removed");
        Ok(())
    }

    /// Start over with every participating seat back home.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        for (_, player) in self.players.iter_mut() {
            player.reset();
        }
        self.active_seats = self
            .players
            .iter()
            .filter(|(_, p)| p.is_active())
            .map(|(seat, _)| seat)
            .collect();
        if let Some(&first) = self.active_seats.first() {
            self.current = first;
        }
        self.finished.clear();
        self.turn_count = 0;
        self.phase = Phase::AwaitingRoll;
        self.eligible.clear();
        self.dice.clear();
        self.history = Vector::new();
        info!(seats = self.active_seats.len(), "match restarted");
    }

    /// Switch special tiles on or off. Only allowed before the first move
    /// or after the match is over.
    pub fn set_special_board(&mut self, enabled: bool) -> Result<()> {
        if !self.between_matches() {
            return Err(LudoError::invalid_input(
                "the board layout can only change between matches",
            ));
        }
        self.board.set_special_enabled(enabled);
        self.config.special_board = enabled;
        Ok(())
    }

    // === Internals ===

    fn between_matches(&self) -> bool {
        match self.phase {
            Phase::Finished => true,
            Phase::AwaitingRoll => self.turn_count == 0 && self.dice.last().is_none(),
            Phase::AwaitingSelection => false,
        }
    }

    fn expect_phase(&self, expected: Phase) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(LudoError::IllegalStateTransition {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Send home every unprotected opposing token on `cell`.
    fn capture_at(&mut self, mover: Seat, cell: u8) -> Captures {
        let mut captures = Captures::new();
        for &seat in self.active_seats.iter().filter(|&&s| s != mover) {
            let player = &mut self.players[seat];
            for token in player.capturable_at(cell) {
                if player.send_home(token) {
                    info!(victim = %seat, %token, cell, "captured");
                    captures.push(Capture { seat, token, cell });
                }
            }
        }
        captures
    }

    fn finish_seat(&mut self, seat: Seat) {
        self.active_seats.retain(|&s| s != seat);
        self.finished.push(seat);
        info!(%seat, place = self.finished.len(), "seat finished");
    }

    /// Next active seat after `seat` in seat order, wrapping. `seat` itself
    /// need not be active.
    fn next_seat_after(&self, seat: Seat) -> Seat {
        self.active_seats
            .iter()
            .copied()
            .find(|&s| s > seat)
            .or_else(|| self.active_seats.first().copied())
            .unwrap_or(seat)
    }

    fn pass_turn(&mut self) {
        self.turn_count += 1;
        self.current = self.next_seat_after(self.current);
        self.phase = Phase::AwaitingRoll;
        self.eligible.clear();
    }

    #[cfg(test)]
    pub(crate) fn place_for_test(
        &mut self,
        seat: Seat,
        token: TokenIndex,
        position: crate::board::Position,
    ) {
        self.players[seat].place_for_test(token, position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Position, GOAL};
    use crate::core::MatchBuilder;

    const S0: Seat = Seat::ALL[0];
    const S1: Seat = Seat::ALL[1];
    const S2: Seat = Seat::ALL[2];
    const T0: TokenIndex = TokenIndex::ALL[0];
    const T1: TokenIndex = TokenIndex::ALL[1];

    fn engine(special: bool) -> TurnEngine {
        MatchBuilder::new()
            .special_board(special)
            .seed(1)
            .allow_forced_rolls()
            .build()
            .unwrap()
    }

    fn finish_all_but(engine: &mut TurnEngine, seat: Seat, last: TokenIndex, at: Position) {
        for token in TokenIndex::ALL {
            let position = if token == last { at } else { Position::Final(GOAL) };
            engine.place_for_test(seat, token, position);
        }
    }

    #[test]
    fn test_new_engine() {
        let e = engine(true);
        assert_eq!(e.phase(), Phase::AwaitingRoll);
        assert_eq!(e.current_seat(), S0);
        assert_eq!(e.turn_count(), 0);
        assert_eq!(e.active_seats().len(), 4);
        assert!(e.is_playing());
        assert!(e.placement().is_none());
    }

    #[test]
    fn test_enter_on_six() {
        let mut e = engine(false);
        let roll = e.roll_forced(6).unwrap();
        assert!(!roll.passed);
        assert_eq!(roll.eligible.len(), 4);

        let outcome = e.select(T0).unwrap();
        assert_eq!(outcome.landed, Position::Track(0));
        assert!(e.player(S0).token(T0).in_play());
        assert!(outcome.bonus_turn);
        assert_eq!(e.current_seat(), S0);
        assert_eq!(e.phase(), Phase::AwaitingRoll);
    }

    #[test]
    fn test_no_movable_token_passes() {
        let mut e = engine(false);
        let roll = e.roll_forced(4).unwrap();
        assert!(roll.passed);
        assert!(roll.eligible.is_empty());
        assert_eq!(e.current_seat(), S1);
        assert_eq!(e.turn_count(), 1);
        assert_eq!(e.phase(), Phase::AwaitingRoll);
    }

    #[test]
    fn test_globe_landing_scenario() {
        // Leaving a globe grants nothing.
        let mut e = engine(false);
        e.place_for_test(S0, T0, Position::Track(47));
        e.roll_forced(3).unwrap();
        let outcome = e.select(T0).unwrap();
        assert_eq!(outcome.landed, Position::Track(50));
        assert!(!outcome.bonus_turn);
        assert_eq!(e.current_seat(), S1);
    }

    #[test]
    fn test_globe_grants_bonus_on_special_board() {
        let mut e = engine(true);
        e.place_for_test(S0, T0, Position::Track(4));
        e.roll_forced(4).unwrap();
        let outcome = e.select(T0).unwrap();
        assert_eq!(outcome.special, SpecialEffect::Globe);
        assert!(outcome.bonus_turn);
        assert_eq!(e.current_seat(), S0);
        assert_eq!(e.turn_count(), 0);
    }

    #[test]
    fn test_enter_final_stretch_scenario() {
        let mut e = engine(true);
        e.place_for_test(S1, T0, Position::Track(9)); // distance 48 for seat 1
        e.roll_forced(1).unwrap(); // seat 0 has nothing out
        assert_eq!(e.current_seat(), S1);

        e.roll_forced(5).unwrap();
        let outcome = e.select(T0).unwrap();
        assert_eq!(outcome.landed, Position::Final(2));
        assert!(outcome.captures.is_empty());
        assert_eq!(outcome.special, SpecialEffect::None);
    }

    #[test]
    fn test_capture_sends_opponent_home() {
        let mut e = engine(false);
        e.place_for_test(S1, T0, Position::Track(10));
        e.place_for_test(S0, T0, Position::Track(7));

        e.roll_forced(3).unwrap();
        let outcome = e.select(T0).unwrap();
        assert_eq!(outcome.captures.len(), 1);
        assert_eq!(outcome.captures[0].seat, S1);
        assert!(e.player(S1).token(T0).position().is_home());
        assert!(!e.player(S1).token(T0).in_play());
    }

    #[test]
    fn test_capture_takes_every_opponent_on_cell() {
        let mut e = engine(false);
        e.place_for_test(S1, T0, Position::Track(10));
        e.place_for_test(S1, T1, Position::Track(10));
        e.place_for_test(S2, T0, Position::Track(10));
        e.place_for_test(S0, T0, Position::Track(8));
        e.place_for_test(S0, T1, Position::Track(10));

        e.roll_forced(2).unwrap();
        let outcome = e.select(T0).unwrap();
        assert_eq!(outcome.captures.len(), 3);
        assert_eq!(e.player(S0).token(T1).position(), Position::Track(10));
    }

    #[test]
    fn test_protection_blocks_capture() {
        let mut e = engine(true);
        e.roll_forced(1).unwrap(); // seat 0 has nothing out
        e.roll_forced(6).unwrap();
        let outcome = e.select(T0).unwrap();
        assert_eq!(outcome.special, SpecialEffect::Protected);
        assert!(e.player(S1).token(T0).is_protected());

        // Bonus roll spent on another token; token 0 stays on its start cell.
        e.place_for_test(S1, T1, Position::Track(30));
        e.roll_forced(1).unwrap();
        e.select(T1).unwrap();
        e.roll_forced(1).unwrap(); // seat 2
        e.roll_forced(1).unwrap(); // seat 3

        e.place_for_test(S0, T0, Position::Track(10));
        e.roll_forced(3).unwrap();
        let outcome = e.select(T0).unwrap();
        assert!(outcome.captures.is_empty());
        assert_eq!(e.player(S1).token(T0).position(), Position::Track(13));
    }

    #[test]
    fn test_protection_lapses_after_moving() {
        let mut e = engine(true);
        e.roll_forced(1).unwrap();
        e.roll_forced(6).unwrap();
        e.select(T0).unwrap();
        e.roll_forced(1).unwrap();
        e.select(T0).unwrap(); // 13 -> 14
        assert!(!e.player(S1).token(T0).is_protected());

        e.roll_forced(1).unwrap();
        e.roll_forced(1).unwrap();
        e.place_for_test(S0, T0, Position::Track(12));
        e.roll_forced(2).unwrap();
        let outcome = e.select(T0).unwrap();
        assert_eq!(outcome.captures.len(), 1);
        assert!(e.player(S1).token(T0).position().is_home());
    }

    #[test]
    fn test_start_cell_token_unprotected_without_special_board() {
        let mut e = engine(false);
        e.roll_forced(1).unwrap();
        e.roll_forced(6).unwrap();
        e.select(T0).unwrap();
        assert!(!e.player(S1).token(T0).is_protected());
    }

    #[test]
    fn test_star_hop_does_not_capture_at_destination() {
        let mut e = engine(true);
        e.place_for_test(S1, T0, Position::Track(11));
        e.place_for_test(S0, T0, Position::Track(2));
        e.roll_forced(3).unwrap();
        let outcome = e.select(T0).unwrap();
        assert_eq!(outcome.special, SpecialEffect::StarHop { from: 5, to: 11 });
        assert_eq!(outcome.landed, Position::Track(11));
        assert!(outcome.captures.is_empty());
        assert_eq!(e.player(S1).token(T0).position(), Position::Track(11));
    }

    #[test]
    fn test_overshoot_reflects_scenario() {
        let mut e = engine(false);
        e.place_for_test(S0, T0, Position::Final(4));
        e.roll_forced(3).unwrap();
        let outcome = e.select(T0).unwrap();
        assert_eq!(outcome.landed, Position::Final(3));
        assert!(!outcome.reached_goal);
    }

    #[test]
    fn test_goal_retires_token() {
        let mut e = engine(false);
        e.place_for_test(S0, T0, Position::Final(2));
        e.roll_forced(3).unwrap();
        let outcome = e.select(T0).unwrap();
        assert!(outcome.reached_goal);
        assert_eq!(e.player(S0).goal_count(), 1);
        assert!(!e.player(S0).eligible_tokens(6).contains(&T0));
    }

    #[test]
    fn test_finishing_seat_leaves_rotation() {
        let mut e = engine(false);
        finish_all_but(&mut e, S0, T0, Position::Final(0));
        e.roll_forced(5).unwrap();
        let outcome = e.select(T0).unwrap();

        assert!(outcome.seat_finished);
        assert!(outcome.placement.is_none());
        assert_eq!(e.finished_ranking(), &[S0]);
        assert!(!e.active_seats().contains(&S0));
        assert_eq!(e.current_seat(), S1);
    }

    #[test]
    fn test_finishing_on_six_still_passes() {
        let mut e = engine(false);
        finish_all_but(&mut e, S0, T0, Position::Track(50));
        e.roll_forced(6).unwrap();
        let outcome = e.select(T0).unwrap();
        assert!(outcome.seat_finished);
        assert!(!outcome.bonus_turn);
        assert_eq!(e.current_seat(), S1);
    }

    #[test]
    fn test_last_seat_finishing_ends_match() {
        let mut e = MatchBuilder::new()
            .seats(&[S2])
            .allow_forced_rolls()
            .build()
            .unwrap();
        finish_all_but(&mut e, S2, T1, Position::Final(4));
        e.roll_forced(1).unwrap();
        let outcome = e.select(T1).unwrap();

        let placement = outcome.placement.unwrap();
        assert_eq!(placement.ranking(), &[S2]);
        assert!(!e.is_playing());
        assert_eq!(e.phase(), Phase::Finished);
        assert_eq!(e.placement(), Some(placement));
        assert!(matches!(
            e.roll(),
            Err(LudoError::IllegalStateTransition { actual: Phase::Finished, .. })
        ));
    }

    #[test]
    fn test_invalid_selection_leaves_state() {
        let mut e = engine(false);
        e.place_for_test(S0, T0, Position::Track(20));
        e.roll_forced(3).unwrap();
        assert_eq!(e.eligible_tokens(), &[T0]);

        let err = e.select(T1).unwrap_err();
        assert!(matches!(err, LudoError::InvalidSelection { .. }));
        assert_eq!(e.phase(), Phase::AwaitingSelection);
        assert_eq!(e.eligible_tokens(), &[T0]);
        assert_eq!(e.player(S0).token(T0).position(), Position::Track(20));
    }

    #[test]
    fn test_phase_errors() {
        let mut e = engine(false);
        assert!(matches!(
            e.select(T0),
            Err(LudoError::IllegalStateTransition { expected: Phase::AwaitingSelection, .. })
        ));

        e.roll_forced(6).unwrap();
        assert!(matches!(
            e.roll(),
            Err(LudoError::IllegalStateTransition { expected: Phase::AwaitingRoll, .. })
        ));
        assert!(e.add_player(S0).is_err());
    }

    #[test]
    fn test_forced_roll_requires_opt_in() {
        let mut e = MatchBuilder::new().seed(3).build().unwrap();
        assert_eq!(e.roll_forced(6), Err(LudoError::ForcedRollDisabled));
        assert_eq!(e.phase(), Phase::AwaitingRoll);
    }

    #[test]
    fn test_forced_roll_out_of_range() {
        let mut e = engine(false);
        assert!(matches!(e.roll_forced(0), Err(LudoError::InvalidInput { .. })));
        assert!(matches!(e.roll_forced(7), Err(LudoError::InvalidInput { .. })));
        assert_eq!(e.phase(), Phase::AwaitingRoll);
        assert_eq!(e.dice_value(), None);
    }

    #[test]
    fn test_rotation_skips_inactive_seats() {
        let mut e = MatchBuilder::new()
            .seats(&[S0, Seat::ALL[3]])
            .allow_forced_rolls()
            .build()
            .unwrap();
        e.roll_forced(2).unwrap();
        assert_eq!(e.current_seat(), Seat::ALL[3]);
        e.roll_forced(2).unwrap();
        assert_eq!(e.current_seat(), S0);
        assert_eq!(e.turn_count(), 2);
    }

    #[test]
    fn test_add_and_remove_player() {
        let mut e = MatchBuilder::new()
            .seats(&[S0, S2])
            .allow_forced_rolls()
            .build()
            .unwrap();

        e.add_player(S1).unwrap();
        assert_eq!(e.active_seats(), &[S0, S1, S2]);
        assert!(matches!(e.add_player(S1), Err(LudoError::InvalidSelection { .. })));

        e.remove_player(S0).unwrap();
        assert_eq!(e.current_seat(), S1);
        assert!(!e.player(S0).is_active());
        assert!(matches!(e.remove_player(S0), Err(LudoError::InvalidSelection { .. })));

        e.remove_player(S2).unwrap();
        assert!(matches!(e.remove_player(S1), Err(LudoError::InvalidSelection { .. })));
    }

    #[test]
    fn test_restart() {
        let mut e = engine(false);
        finish_all_but(&mut e, S0, T0, Position::Final(0));
        e.roll_forced(5).unwrap();
        e.select(T0).unwrap();
        e.roll_forced(2).unwrap();

        e.restart();
        assert_eq!(e.active_seats().len(), 4);
        assert!(e.finished_ranking().is_empty());
        assert_eq!(e.turn_count(), 0);
        assert_eq!(e.current_seat(), S0);
        assert!(e.history().is_empty());
        assert_eq!(e.dice_value(), None);
        assert!(e.token_views().iter().all(|v| v.position.is_home()));
    }

    #[test]
    fn test_history_records_moves() {
        let mut e = engine(false);
        e.roll_forced(6).unwrap();
        e.select(T0).unwrap();
        e.roll_forced(4).unwrap();
        e.select(T0).unwrap();

        let history = e.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].from, Position::Home);
        assert_eq!(history[1].to, Position::Track(4));
        assert!(history[0].bonus_turn);
        assert!(!history[1].bonus_turn);
    }

    #[test]
    fn test_set_special_board_between_matches_only() {
        let mut e = engine(false);
        e.set_special_board(true).unwrap();
        assert!(e.board().special_enabled());

        e.roll_forced(6).unwrap();
        assert!(e.set_special_board(false).is_err());

        e.restart();
        e.set_special_board(false).unwrap();
        assert!(!e.config().special_board);
    }

    #[test]
    fn test_handle_dispatches() {
        let mut e = engine(false);
        e.place_for_test(S0, T1, Position::Track(3));
        match e.handle(InputEvent::Roll).unwrap() {
            EngineEvent::Rolled(roll) => assert!(!roll.passed),
            other => panic!("unexpected {other:?}"),
        }
        match e.handle(InputEvent::Choose(T1)).unwrap() {
            EngineEvent::Moved(outcome) => assert_eq!(outcome.step.token, T1),
            other => panic!("unexpected {other:?}"),
        }
    }
}

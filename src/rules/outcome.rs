//! Results reported by engine operations.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Position;
use crate::core::{Seat, TokenIndex};
use crate::player::{Eligible, SpecialEffect, Step};

/// An opposing token sent home by a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capture {
    pub seat: Seat,
    pub token: TokenIndex,
    pub cell: u8,
}

pub type Captures = SmallVec<[Capture; 4]>;

/// Result of a roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Seat that rolled.
    pub seat: Seat,
    pub value: u8,
    /// Tokens the seat may move. Empty when the turn passed.
    pub eligible: Eligible,
    /// Nothing could move and the turn went to the next seat.
    pub passed: bool,
}

/// Result of moving a token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub seat: Seat,
    /// Repositioning by the roll, before any star hop.
    pub step: Step,
    /// Final resting position after special effects.
    pub landed: Position,
    pub captures: Captures,
    pub special: SpecialEffect,
    /// The token reached the goal cell with this move.
    pub reached_goal: bool,
    /// The seat's fourth token reached the goal with this move.
    pub seat_finished: bool,
    /// The seat rolls again.
    pub bonus_turn: bool,
    /// Set once the last active seat finishes.
    pub placement: Option<Placement>,
}

/// Either kind of outcome, for input-event dispatch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    Rolled(RollOutcome),
    Moved(MoveOutcome),
}

/// A resolved move, kept in the match history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// `turn_count` when the move was made.
    pub turn: u32,
    pub seat: Seat,
    pub token: TokenIndex,
    pub roll: u8,
    pub from: Position,
    pub to: Position,
    pub captures: Captures,
    pub bonus_turn: bool,
}

/// Final standings, in finishing order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    ranking: Vec<Seat>,
}

impl Placement {
    #[must_use]
    pub fn new(ranking: Vec<Seat>) -> Self {
        Self { ranking }
    }

    /// Seats from first to last place.
    #[must_use]
    pub fn ranking(&self) -> &[Seat] {
        &self.ranking
    }

    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        self.ranking.first().copied()
    }

    /// 1-based place of a seat.
    #[must_use]
    pub fn place_of(&self, seat: Seat) -> Option<usize> {
        self.ranking.iter().position(|&s| s == seat).map(|i| i + 1)
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, seat) in self.ranking.iter().enumerate() {
            writeln!(f, "{} place - {} player", i + 1, seat.color().key())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_queries() {
        let placement = Placement::new(vec![Seat::ALL[2], Seat::ALL[0]]);

        assert_eq!(placement.winner(), Some(Seat::ALL[2]));
        assert_eq!(placement.place_of(Seat::ALL[0]), Some(2));
        assert_eq!(placement.place_of(Seat::ALL[1]), None);
    }

    #[test]
    fn test_placement_display() {
        let placement = Placement::new(vec![Seat::ALL[3], Seat::ALL[1]]);
        assert_eq!(
            placement.to_string(),
            "1 place - blue player\n2 place - red player\n"
        );
    }

    #[test]
    fn test_move_record_serialization() {
        let mut captures = Captures::new();
        captures.push(Capture {
            seat: Seat::ALL[1],
            token: TokenIndex::ALL[3],
            cell: 10,
        });
        let record = MoveRecord {
            turn: 4,
            seat: Seat::ALL[0],
            token: TokenIndex::ALL[0],
            roll: 4,
            from: Position::Track(6),
            to: Position::Track(10),
            captures,
            bonus_turn: false,
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}

//! Turn-flow vocabulary: engine phases and input events.
//!
//! The engine is an explicit two-phase state machine. Each match
//! alternates between waiting for a roll and waiting for a token choice
//! until every active seat has finished:
//!
//! ```text
//! AwaitingRoll --roll, something movable--> AwaitingSelection
//! AwaitingRoll --roll, nothing movable----> AwaitingRoll (next seat)
//! AwaitingSelection --select-------------> AwaitingRoll | Finished
//! ```

use serde::{Deserialize, Serialize};

use super::entity::TokenIndex;

/// Which call the engine accepts next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The current seat must roll the dice.
    AwaitingRoll,
    /// The current seat must choose one of the eligible tokens.
    AwaitingSelection,
    /// Every seat has finished; only queries and `restart` are accepted.
    Finished,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Phase::AwaitingRoll => "awaiting roll",
            Phase::AwaitingSelection => "awaiting selection",
            Phase::Finished => "finished",
        })
    }
}

/// An event from an input collaborator (keyboard, mouse, network).
///
/// Index validity is checked by the engine, never by the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// Roll the dice for the current seat.
    Roll,
    /// Move the given token of the current seat.
    Choose(TokenIndex),
}

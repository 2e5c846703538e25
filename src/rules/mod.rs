//! The rules state machine and everything it reports.
//!
//! - `Dice`: the match's die
//! - `TurnEngine`: turn sequencing, move resolution, placement
//! - `Snapshot`, `TokenView`: read-only views for policies and renderers
//! - `Autoplayer`: drives the seats handed to automatic policies

pub mod autoplay;
pub mod dice;
pub mod engine;
pub mod outcome;
pub mod snapshot;

pub use autoplay::Autoplayer;
pub use dice::Dice;
pub use engine::TurnEngine;
pub use outcome::{
    Capture, Captures, EngineEvent, MoveOutcome, MoveRecord, Placement, RollOutcome,
};
pub use snapshot::{BoardRenderer, Occupants, Preview, Snapshot, TokenView};

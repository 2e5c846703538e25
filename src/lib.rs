//! # ludo-engine
//!
//! A rules engine for four-seat Ludo.
//!
//! ## Design Principles
//!
//! 1. **One Mutator**: `TurnEngine` owns all cross-seat state. Players only
//!    move their own tokens; captures go through the engine.
//!
//! 2. **Explicit Phases**: every operation checks the engine's `Phase` and
//!    fails with a typed error instead of silently doing nothing.
//!
//! 3. **Presentation Free**: renderers and input handlers sit outside the
//!    crate and talk to it through `TokenView`, `BoardRenderer` and
//!    `InputEvent`.
//!
//! ## Architecture
//!
//! - **Deterministic Dice**: a seeded ChaCha stream, so matches replay.
//!
//! - **Persistent History**: moves are kept in an `im::Vector`, making
//!   snapshots cheap to hand to policies.
//!
//! ## Modules
//!
//! - `core`: seats, token indices, phases, errors, RNG, configuration
//! - `board`: track layout, special cells, positions, tokens
//! - `player`: per-seat token state and movement
//! - `rules`: dice, the turn engine, outcomes, snapshots, autoplay
//! - `policy`: automatic token-selection policies

pub mod core;
pub mod board;
pub mod player;
pub mod rules;
pub mod policy;

// Re-export commonly used types
pub use crate::core::{
    Color, Seat, SeatMap, TokenIndex,
    GameRng,
    InputEvent, Phase,
    MatchBuilder, MatchConfig, PolicyKind, SeatConfig, Theme,
    LudoError, Result,
};

pub use crate::board::{Board, Position, Token};

pub use crate::player::{Player, SpecialEffect, Step};

pub use crate::rules::{
    Autoplayer, Dice, TurnEngine,
    Capture, EngineEvent, MoveOutcome, MoveRecord, Placement, RollOutcome,
    BoardRenderer, Preview, Snapshot, TokenView,
};

pub use crate::policy::{
    AutoPolicy, FirstEligible, RandomPolicy, HeuristicPolicy,
    PreferenceTable, TableError, TablePolicy,
};

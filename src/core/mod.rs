//! Core engine types: seats, tokens ids, RNG, configuration, errors.
//!
//! This module holds the vocabulary shared by the board, the players,
//! and the turn engine.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod rng;
pub mod seat;

pub use action::{InputEvent, Phase};
pub use config::{MatchBuilder, MatchConfig, PolicyKind, SeatConfig, Theme};
pub use entity::{TokenIndex, TOKENS_PER_SEAT};
pub use error::{LudoError, Result};
pub use rng::GameRng;
pub use seat::{Color, Seat, SeatMap, SEAT_COUNT, START_DISTANCE};

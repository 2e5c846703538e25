//! Read-only views of a match for collaborators.
//!
//! - `Snapshot`: full state handed to automatic policies
//! - `TokenView`: per-token facts handed to renderers
//!
//! Snapshots are cheap to take: players are small fixed arrays and the
//! move history is a persistent `im::Vector` shared with the engine.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::outcome::MoveRecord;
use crate::board::{Board, Position};
use crate::core::{Phase, Seat, SeatMap, TokenIndex};
use crate::player::{Eligible, Player, SpecialEffect};

/// Tokens on one shared-track cell.
pub type Occupants = SmallVec<[(Seat, TokenIndex); 4]>;

/// Complete, immutable match state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub phase: Phase,
    pub current_seat: Seat,
    pub turn_count: u32,
    pub dice_value: Option<u8>,
    /// Tokens the current seat may move; empty unless awaiting selection.
    pub eligible: Eligible,
    pub players: SeatMap<Player>,
    pub active_seats: Vec<Seat>,
    pub finished_ranking: Vec<Seat>,
    pub history: Vector<MoveRecord>,
}

/// What moving one eligible token would do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preview {
    pub token: TokenIndex,
    pub from: Position,
    /// Resting position after any star hop.
    pub to: Position,
    /// Opposing tokens that would be sent home.
    pub captures: usize,
    pub enters_play: bool,
    pub reaches_goal: bool,
    pub special: SpecialEffect,
}

impl Snapshot {
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_seat]
    }

    /// Shared-track occupancy of all active seats, keyed by cell.
    #[must_use]
    pub fn occupancy(&self) -> FxHashMap<u8, Occupants> {
        let mut cells: FxHashMap<u8, Occupants> = FxHashMap::default();
        for &seat in &self.active_seats {
            for token in self.players[seat].tokens() {
                if let Some(cell) = token.position().track_cell() {
                    cells.entry(cell).or_default().push((seat, token.index()));
                }
            }
        }
        cells
    }

    /// Predict the effect of moving `token` with the current dice value.
    ///
    /// Returns `None` unless `token` is eligible.
    #[must_use]
    pub fn preview(&self, token: TokenIndex) -> Option<Preview> {
        let roll = self.dice_value?;
        if !self.eligible.contains(&token) {
            return None;
        }

        let mut player = self.current_player().clone();
        let step = player.move_token(token, roll);
        let mut captures = 0;
        let mut special = SpecialEffect::None;

        if let Some(cell) = step.to.track_cell() {
            captures = self
                .active_seats
                .iter()
                .filter(|&&seat| seat != self.current_seat)
                .map(|&seat| self.players[seat].capturable_at(cell).len())
                .sum();
            if self.board.special_enabled() {
                special = player.apply_special(token, &self.board);
            }
        }

        let to = player.token(token).position();
        Some(Preview {
            token,
            from: step.from,
            to,
            captures,
            enters_play: step.entered_play(),
            reaches_goal: to.is_goal(),
            special,
        })
    }

    /// Previews for every eligible token, in index order.
    #[must_use]
    pub fn previews(&self) -> Vec<Preview> {
        self.eligible
            .iter()
            .filter_map(|&token| self.preview(token))
            .collect()
    }

    /// Per-token views for rendering.
    #[must_use]
    pub fn token_views(&self) -> Vec<TokenView> {
        token_views(&self.players)
    }
}

/// What a renderer needs to place one token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenView {
    pub seat: Seat,
    pub token: TokenIndex,
    pub position: Position,
    pub on_final: bool,
}

/// Maps token views to screen coordinates (or any other output).
///
/// Themes and assets belong to the implementor, fixed at construction.
pub trait BoardRenderer {
    type Output;

    fn locate(&self, view: &TokenView) -> Self::Output;

    /// Locate every token in `views`.
    fn locate_all(&self, views: &[TokenView]) -> Vec<Self::Output> {
        views.iter().map(|view| self.locate(view)).collect()
    }
}

pub(crate) fn token_views(players: &SeatMap<Player>) -> Vec<TokenView> {
    players
        .iter()
        .flat_map(|(seat, player)| {
            player.tokens().iter().map(move |token| TokenView {
                seat,
                token: token.index(),
                position: token.position(),
                on_final: token.on_final(),
            })
        })
        .collect()
}

//! Per-seat player state: the seat's four tokens and its flags.
//!
//! A `Player` only ever mutates its own tokens. Cross-seat effects
//! (captures) are driven by the turn engine, which calls `send_home` on
//! the victim's `Player`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::movement::{SpecialEffect, Step};
use crate::board::position::track_distance;
use crate::board::{Board, Position, Token, FINAL_ENTRY};
use crate::core::{Color, Seat, TokenIndex, TOKENS_PER_SEAT};

/// Eligible-token set; never more than four entries.
pub type Eligible = SmallVec<[TokenIndex; TOKENS_PER_SEAT]>;

/// One of the four seats.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    seat: Seat,
    tokens: [Token; TOKENS_PER_SEAT],
    active: bool,
    auto: bool,
}

impl Player {
    /// Create a player with all tokens at home.
    #[must_use]
    pub fn new(seat: Seat, active: bool, auto: bool) -> Self {
        Self {
            seat,
            tokens: TokenIndex::ALL.map(Token::new),
            active,
            auto,
        }
    }

    #[must_use]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.seat.color()
    }

    /// Takes part in the current match (finished seats stay active).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Driven by an automatic policy.
    #[must_use]
    pub fn is_auto(&self) -> bool {
        self.auto
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token; TOKENS_PER_SEAT] {
        &self.tokens
    }

    #[must_use]
    pub fn token(&self, index: TokenIndex) -> &Token {
        &self.tokens[index.index()]
    }

    /// Number of tokens on the goal cell.
    #[must_use]
    pub fn goal_count(&self) -> u8 {
        self.tokens.iter().filter(|t| t.is_finished()).count() as u8
    }

    /// All four tokens reached the goal.
    #[must_use]
    pub fn has_finished(&self) -> bool {
        self.tokens.iter().all(Token::is_finished)
    }

    /// Opposing tokens a mover landing on `cell` would send home.
    ///
    /// Only shared-track tokens are reachable, and protection exempts them.
    #[must_use]
    pub fn capturable_at(&self, cell: u8) -> Eligible {
        self.tokens
            .iter()
            .filter(|t| t.position().track_cell() == Some(cell) && !t.is_protected())
            .map(Token::index)
            .collect()
    }

    /// Tokens allowed to move with the given roll, in index order.
    ///
    /// A six frees every unfinished token, including those at home. Any
    /// other value only moves tokens already in play.
    #[must_use]
    pub fn eligible_tokens(&self, roll: u8) -> Eligible {
        self.tokens
            .iter()
            .filter(|t| {
                if roll == 6 {
                    !t.is_finished()
                } else {
                    t.in_play()
                }
            })
            .map(Token::index)
            .collect()
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Put every token back home.
    pub(crate) fn reset(&mut self) {
        self.tokens = TokenIndex::ALL.map(Token::new);
    }

    /// Reposition a token by `roll`.
    ///
    /// The caller must only pass tokens from `eligible_tokens(roll)`.
    /// Captures and special tiles are not applied here.
    pub(crate) fn move_token(&mut self, index: TokenIndex, roll: u8) -> Step {
        let seat = self.seat;
        let token = &mut self.tokens[index.index()];
        let from = token.position();
        token.set_protected(false);

        match from {
            Position::Home => {
                debug_assert_eq!(roll, 6, "tokens leave home only on a six");
                token.place(Position::Track(seat.start_offset()));
            }
            Position::Track(cell) => {
                let reach = track_distance(cell, seat) + roll;
                if reach >= FINAL_ENTRY {
                    token.place(Position::Final(reach % FINAL_ENTRY));
                } else {
                    token.step_track(roll);
                }
            }
            Position::Final(_) => token.step_final(roll),
        }

        Step {
            token: index,
            roll,
            from,
            to: token.position(),
        }
    }

    /// Send a captured token home. Tokens on the final stretch are out of
    /// reach and stay put.
    pub(crate) fn send_home(&mut self, index: TokenIndex) -> bool {
        let token = &mut self.tokens[index.index()];
        if token.on_final() || token.position().is_home() {
            return false;
        }
        token.send_home();
        true
    }

    /// Apply the effect of the tile the token stands on.
    ///
    /// Protection is re-derived on every call. A star hop jumps straight to
    /// the next star; the cells in between and the landing star itself
    /// trigger nothing further.
    pub(crate) fn apply_special(&mut self, index: TokenIndex, board: &Board) -> SpecialEffect {
        let start = board.start_cell(self.seat);
        let token = &mut self.tokens[index.index()];
        token.set_protected(false);

        let Some(cell) = token.position().track_cell() else {
            return SpecialEffect::None;
        };

        if board.is_star(cell) {
            let to = board.next_star(cell);
            token.place(Position::Track(to));
            SpecialEffect::StarHop { from: cell, to }
        } else if board.is_globe(cell) {
            SpecialEffect::Globe
        } else if cell == start {
            token.set_protected(true);
            SpecialEffect::Protected
        } else {
            SpecialEffect::None
        }
    }

    #[cfg(test)]
    pub(crate) fn place_for_test(&mut self, index: TokenIndex, position: Position) {
        self.tokens[index.index()].place(position);
    }
}

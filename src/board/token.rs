//! A single movable piece.

use serde::{Deserialize, Serialize};

use super::layout::{GOAL, TRACK_LENGTH};
use super::position::Position;
use crate::core::TokenIndex;

/// One token of a seat.
///
/// `in_play` and `on_final` are derived from the position, so a token at
/// home can never be flagged as in play or on the final stretch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    index: TokenIndex,
    position: Position,
    protected: bool,
}

impl Token {
    /// A fresh token at home.
    #[must_use]
    pub const fn new(index: TokenIndex) -> Self {
        Self {
            index,
            position: Position::Home,
            protected: false,
        }
    }

    #[must_use]
    pub const fn index(&self) -> TokenIndex {
        self.index
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// On the board and not yet retired at the goal.
    #[must_use]
    pub const fn in_play(&self) -> bool {
        !self.position.is_home() && !self.position.is_goal()
    }

    #[must_use]
    pub const fn on_final(&self) -> bool {
        self.position.is_on_final()
    }

    /// Reached the goal cell. Finished tokens never move again.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.position.is_goal()
    }

    /// Cannot be captured. Only meaningful on the shared track.
    #[must_use]
    pub const fn is_protected(&self) -> bool {
        self.protected
    }

    pub(crate) fn set_protected(&mut self, protected: bool) {
        self.protected = protected;
    }

    pub(crate) fn place(&mut self, position: Position) {
        self.position = position;
    }

    /// Send back to the home area.
    pub(crate) fn send_home(&mut self) {
        self.position = Position::Home;
        self.protected = false;
    }

    /// Advance along the shared track, wrapping from 51 to 0.
    ///
    /// No-op off the shared track.
    pub(crate) fn step_track(&mut self, steps: u8) {
        if let Position::Track(cell) = self.position {
            self.position = Position::Track((cell + steps) % TRACK_LENGTH);
        }
    }

    /// Advance along the final stretch, bouncing back off the goal.
    ///
    /// Overshooting by `k` lands on `GOAL - k`. Rolls are at most 6 and
    /// the stretch has 6 cells, so one reflection is always enough.
    pub(crate) fn step_final(&mut self, steps: u8) {
        if let Position::Final(index) = self.position {
            let target = index + steps;
            let landed = if target > GOAL {
                GOAL - (target - GOAL)
            } else {
                target
            };
            self.position = Position::Final(landed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_at(position: Position) -> Token {
        let mut token = Token::new(TokenIndex::ALL[0]);
        token.place(position);
        token
    }

    #[test]
    fn test_new_token_is_home() {
        let token = Token::new(TokenIndex::ALL[2]);
        assert_eq!(token.index(), TokenIndex::ALL[2]);
        assert!(token.position().is_home());
        assert!(!token.in_play());
        assert!(!token.on_final());
        assert!(!token.is_protected());
    }

    #[test]
    fn test_step_track_wraps() {
        let mut token = token_at(Position::Track(49));
        token.step_track(5);
        assert_eq!(token.position(), Position::Track(2));
    }

    #[test]
    fn test_step_final_exact_goal() {
        let mut token = token_at(Position::Final(1));
        token.step_final(4);
        assert!(token.is_finished());
        assert!(!token.in_play());
    }

    #[test]
    fn test_step_final_reflects() {
        let mut token = token_at(Position::Final(4));
        token.step_final(3);
        assert_eq!(token.position(), Position::Final(3));

        let mut token = token_at(Position::Final(0));
        token.step_final(6);
        assert_eq!(token.position(), Position::Final(4));
    }

    #[test]
    fn test_send_home_clears_protection() {
        let mut token = token_at(Position::Track(13));
        token.set_protected(true);
        token.send_home();
        assert!(token.position().is_home());
        assert!(!token.is_protected());
    }

    #[test]
    fn test_steps_ignore_wrong_lane() {
        let mut token = token_at(Position::Final(2));
        token.step_track(3);
        assert_eq!(token.position(), Position::Final(2));

        let mut token = token_at(Position::Home);
        token.step_final(3);
        assert!(token.position().is_home());
    }
}

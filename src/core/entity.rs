//! Token identification.
//!
//! Every seat owns four tokens, addressed by a `TokenIndex` in `0..=3`.
//! A token is only ever identified by `(Seat, TokenIndex)`; tokens never
//! hold references to their owner or to the engine.

use serde::{Deserialize, Serialize};

use super::error::LudoError;

/// Number of tokens each seat owns.
pub const TOKENS_PER_SEAT: usize = 4;

/// Index of a token within its owner's set, in `0..=3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TokenIndex(u8);

impl TokenIndex {
    /// All token indices in order.
    pub const ALL: [TokenIndex; TOKENS_PER_SEAT] =
        [TokenIndex(0), TokenIndex(1), TokenIndex(2), TokenIndex(3)];

    /// Create a token index from a raw value.
    ///
    /// An out-of-range value is an invalid selection: the caller named a
    /// token that does not exist.
    pub fn new(index: u8) -> Result<Self, LudoError> {
        if (index as usize) < TOKENS_PER_SEAT {
            Ok(Self(index))
        } else {
            Err(LudoError::invalid_selection(format!(
                "token index {index} does not exist"
            )))
        }
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for TokenIndex {
    type Error = LudoError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<TokenIndex> for u8 {
    fn from(token: TokenIndex) -> Self {
        token.0
    }
}

impl std::fmt::Display for TokenIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {}", self.0)
    }
}

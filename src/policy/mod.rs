//! Automatic token-selection policies.
//!
//! A policy sees a `Snapshot` of a match awaiting selection and names one
//! of the eligible tokens. The engine validates the choice like any
//! other selection.
//!
//! - `FirstEligible`: lowest index
//! - `RandomPolicy`: uniform over the eligible set
//! - `HeuristicPolicy`: ranks moves by their previewed effect
//! - `TablePolicy`: scores moves with a `PreferenceTable`

pub mod heuristic;
pub mod simple;
pub mod table;

pub use heuristic::HeuristicPolicy;
pub use simple::{FirstEligible, RandomPolicy};
pub use table::{PreferenceTable, TableError, TablePolicy};

use crate::core::TokenIndex;
use crate::rules::Snapshot;

/// Chooses a token for the current seat.
pub trait AutoPolicy: Send {
    /// Pick one of `snapshot.eligible`. `None` means no choice was made.
    fn choose_token(&mut self, snapshot: &Snapshot) -> Option<TokenIndex>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

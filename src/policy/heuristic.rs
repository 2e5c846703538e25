//! Rule-of-thumb policy built on move previews.

use std::cmp::Reverse;

use super::AutoPolicy;
use crate::core::TokenIndex;
use crate::rules::{Preview, Snapshot};

type Rank = (bool, usize, bool, u8, Reverse<TokenIndex>);

/// Ranks each eligible move, in order of preference:
/// 1. reaching the goal
/// 2. capturing the most opposing tokens
/// 3. bringing a token into play
/// 4. advancing the token that is furthest along
///
/// Ties go to the lowest token index.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicPolicy;

impl HeuristicPolicy {
    fn rank(snapshot: &Snapshot, preview: &Preview) -> Rank {
        let progress = preview.from.progress(snapshot.current_seat).unwrap_or(0);
        (
            preview.reaches_goal,
            preview.captures,
            preview.enters_play,
            progress,
            Reverse(preview.token),
        )
    }
}

impl AutoPolicy for HeuristicPolicy {
    fn choose_token(&mut self, snapshot: &Snapshot) -> Option<TokenIndex> {
        snapshot
            .previews()
            .iter()
            .max_by_key(|preview| Self::rank(snapshot, preview))
            .map(|preview| preview.token)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

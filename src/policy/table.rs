//! Learned preference scores and the policy that consults them.
//!
//! A `PreferenceTable` maps `(progress, dice)` to a score, where progress
//! is the token's distance from its start cell (`0..=56`, home counts as
//! 0). The engine never reads the table; only `TablePolicy` does.
//!
//! Tables are stored with `bincode`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::AutoPolicy;
use crate::core::TokenIndex;
use crate::rules::Snapshot;

/// Progress values, `0..=56`.
pub const PROGRESS_SLOTS: usize = 57;

/// Dice faces.
pub const DICE_SLOTS: usize = 6;

/// Failure to read, write, or index a preference table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("table I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("table encoding failed: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("table has shape {rows}x{cols}, expected {PROGRESS_SLOTS}x{DICE_SLOTS}")]
    Shape { rows: usize, cols: usize },

    #[error("no table slot for progress {progress} and dice {dice}")]
    OutOfRange { progress: u8, dice: u8 },
}

/// Score grid indexed by `(progress, dice)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreferenceTable {
    rows: usize,
    cols: usize,
    scores: Vec<f64>,
}

impl Default for PreferenceTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceTable {
    /// All-zero table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: PROGRESS_SLOTS,
            cols: DICE_SLOTS,
            scores: vec![0.0; PROGRESS_SLOTS * DICE_SLOTS],
        }
    }

    fn slot(progress: u8, dice: u8) -> Option<usize> {
        let row = usize::from(progress);
        let col = usize::from(dice).checked_sub(1)?;
        (row < PROGRESS_SLOTS && col < DICE_SLOTS).then_some(row * DICE_SLOTS + col)
    }

    /// Score for moving a token at `progress` by `dice`.
    #[must_use]
    pub fn score(&self, progress: u8, dice: u8) -> Option<f64> {
        Self::slot(progress, dice).map(|i| self.scores[i])
    }

    pub fn set(&mut self, progress: u8, dice: u8, value: f64) -> Result<(), TableError> {
        let i = Self::slot(progress, dice).ok_or(TableError::OutOfRange { progress, dice })?;
        self.scores[i] = value;
        Ok(())
    }

    pub fn save<W: Write>(&self, writer: W) -> Result<(), TableError> {
        bincode::serialize_into(writer, self)?;
        Ok(())
    }

    pub fn load<R: Read>(reader: R) -> Result<Self, TableError> {
        let table: Self = bincode::deserialize_from(reader)?;
        if table.rows != PROGRESS_SLOTS
            || table.cols != DICE_SLOTS
            || table.scores.len() != PROGRESS_SLOTS * DICE_SLOTS
        {
            return Err(TableError::Shape {
                rows: table.rows,
                cols: table.cols,
            });
        }
        Ok(table)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), TableError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.save(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn load_from_path(path: &Path) -> Result<Self, TableError> {
        Self::load(BufReader::new(File::open(path)?))
    }
}

/// Moves the eligible token whose `(progress, dice)` slot scores highest.
///
/// Ties go to the lowest token index.
#[derive(Clone, Debug)]
pub struct TablePolicy {
    table: Arc<PreferenceTable>,
}

impl TablePolicy {
    #[must_use]
    pub fn new(table: Arc<PreferenceTable>) -> Self {
        Self { table }
    }

    #[must_use]
    pub fn table(&self) -> &PreferenceTable {
        &self.table
    }
}

impl AutoPolicy for TablePolicy {
    fn choose_token(&mut self, snapshot: &Snapshot) -> Option<TokenIndex> {
        let dice = snapshot.dice_value?;
        let player = snapshot.current_player();

        let mut best: Option<(TokenIndex, f64)> = None;
        for &token in &snapshot.eligible {
            let progress = player
                .token(token)
                .position()
                .progress(snapshot.current_seat)
                .unwrap_or(0);
            let score = self.table.score(progress, dice).unwrap_or(f64::NEG_INFINITY);
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((token, score));
            }
        }
        best.map(|(token, _)| token)
    }

    fn name(&self) -> &'static str {
        "table"
    }
}

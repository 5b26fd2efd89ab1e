//! Ranking - attaches scores and competition ranks to the dataset rows.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{Dataset, MooraError};
use crate::domain::foundation::{RankingId, Timestamp};

/// How rows with equal rank are ordered in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Tied rows keep their original input order.
    #[default]
    InputOrder,
    /// Tied rows are ordered by label, then input order.
    Label,
}

/// A dataset row with its score and rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    /// Zero-based row index in the input dataset.
    pub position: usize,
    pub label: String,
    pub values: Vec<f64>,
    pub score: f64,
    pub rank: u32,
}

/// The scored dataset in rank order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub ranking_id: RankingId,
    pub identity_column: String,
    pub criteria: Vec<String>,
    /// Every input row, best first.
    pub rows: Vec<RankedRow>,
    pub computed_at: Timestamp,
}

impl RankedResult {
    /// The first `k` rows in rank order.
    pub fn top(&self, k: usize) -> &[RankedRow] {
        &self.rows[..k.min(self.rows.len())]
    }

    /// The best row, if any. Ties resolve by the tie-break policy.
    pub fn best(&self) -> Option<&RankedRow> {
        self.rows.first()
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Ranks in original input order.
    pub fn ranks_in_input_order(&self) -> Vec<u32> {
        let mut ranks = vec![0; self.rows.len()];
        for row in &self.rows {
            ranks[row.position] = row.rank;
        }
        ranks
    }
}

/// Result assembly functions.
pub struct Ranker;

impl Ranker {
    /// Competition ("min") ranks for scores, higher score first.
    ///
    /// Tied scores share the better rank and the next distinct score skips
    /// ahead: `[0.25, 0.15, 0.25]` ranks as `[1, 3, 1]`.
    pub fn competition_ranks(scores: &[f64]) -> Vec<u32> {
        let order = Self::descending_order(scores);
        let mut ranks = vec![0u32; scores.len()];

        for (pos, &i) in order.iter().enumerate() {
            ranks[i] = match pos {
                0 => 1,
                _ => {
                    let prev = order[pos - 1];
                    if Self::same_score(scores[prev], scores[i]) {
                        ranks[prev]
                    } else {
                        pos as u32 + 1
                    }
                }
            };
        }

        ranks
    }

    /// Attaches scores and ranks to the dataset rows and sorts best-first.
    ///
    /// No row is dropped or merged. Rows of equal rank are ordered by
    /// `tie_break`.
    pub fn assemble(
        dataset: &Dataset,
        scores: &[f64],
        tie_break: TieBreak,
    ) -> Result<RankedResult, MooraError> {
        if scores.len() != dataset.alternative_count() {
            return Err(MooraError::ScoreCountMismatch {
                expected: dataset.alternative_count(),
                actual: scores.len(),
            });
        }

        let ranks = Self::competition_ranks(scores);
        let mut rows: Vec<RankedRow> = dataset
            .alternatives()
            .iter()
            .enumerate()
            .map(|(i, alt)| RankedRow {
                position: i,
                label: alt.label.clone(),
                values: alt.values.clone(),
                score: scores[i],
                rank: ranks[i],
            })
            .collect();

        match tie_break {
            TieBreak::InputOrder => rows.sort_by_key(|r| r.rank),
            TieBreak::Label => rows.sort_by(|a, b| {
                a.rank
                    .cmp(&b.rank)
                    .then_with(|| a.label.cmp(&b.label))
                    .then_with(|| a.position.cmp(&b.position))
            }),
        }

        Ok(RankedResult {
            ranking_id: RankingId::new(),
            identity_column: dataset.identity_column().to_string(),
            criteria: dataset.criteria().to_vec(),
            rows,
            computed_at: Timestamp::now(),
        })
    }

    /// Row indices sorted by score descending, input order among equals.
    /// NaN scores sort last and tie with each other.
    fn descending_order(scores: &[f64]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| Self::better_first(scores[a], scores[b]));
        order
    }

    fn better_first(a: f64, b: f64) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        }
    }

    fn same_score(a: f64, b: f64) -> bool {
        a == b || (a.is_nan() && b.is_nan())
    }
}

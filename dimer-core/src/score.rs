//! Pairwise scoring of one aligned overlap

use crate::params::WeightTable;
use crate::types::DimerScore;

/// Scores facing symbol pairs of an alignment.
///
/// A position pairs when both symbols are identical: the second primer is
/// handed over already complemented, so equality stands for Watson-Crick
/// pairing. Symbols missing from the weight table never pair.
#[derive(Debug, Clone, Copy)]
pub struct PairScorer<'w> {
    weights: &'w WeightTable,
}

impl<'w> PairScorer<'w> {
    pub fn new(weights: &'w WeightTable) -> Self {
        Self { weights }
    }

    /// Weight contributed by one facing pair, 0 when it does not pair
    pub fn pairing_weight(&self, s1: u8, s2: u8) -> u32 {
        if s1 == s2 {
            self.weights.weight(s1).unwrap_or(0)
        } else {
            0
        }
    }

    /// Total pairing weight and the weight of the strongest uninterrupted run.
    ///
    /// Runs are ranked by summed weight, not length.
    pub fn score<I>(&self, pairs: I) -> DimerScore
    where
        I: IntoIterator<Item = (u8, u8)>,
    {
        let mut total = 0u64;
        let mut current_run = 0u64;
        let mut best_run = 0u64;

        for (s1, s2) in pairs {
            let weight = u64::from(self.pairing_weight(s1, s2));
            if weight == 0 {
                current_run = 0;
                continue;
            }
            total += weight;
            current_run += weight;
            best_run = best_run.max(current_run);
        }

        DimerScore::new(total, best_run)
    }
}

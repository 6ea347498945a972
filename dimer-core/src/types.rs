use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Relative shift of the reversed second primer against the first.
///
/// At shift `s`, `primer_1[i]` faces `reversed(primer_2)[i - s]`. Shifts run
/// from `len(primer_1) - 1` (only the 3' end of primer 1 overlaps) down to
/// `-(len(primer_2) - 1)`.
pub type Shift = isize;

/// Worst-case dimerization strength of a primer pair.
///
/// Both maxima are taken independently over all alignments; the alignment
/// with the highest `total` need not be the one holding the strongest `run`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimerScore {
    /// Highest summed pairing weight of any single alignment
    pub total: u64,
    /// Highest weight of any uninterrupted complementary run
    pub run: u64,
}

impl DimerScore {
    pub fn new(total: u64, run: u64) -> Self {
        Self { total, run }
    }

    /// Fold another alignment's score into the running maxima
    pub fn absorb(&mut self, other: DimerScore) {
        self.total = self.total.max(other.total);
        self.run = self.run.max(other.run);
    }

    pub fn is_zero(&self) -> bool {
        self.total == 0 && self.run == 0
    }
}

/// Positions of both primers that face each other at one shift.
///
/// Ranges are in the coordinates the caller supplied the primers in; the
/// `primer_2` range therefore covers the same bases read back to front.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Overlap {
    pub primer_1: Range<usize>,
    pub primer_2: Range<usize>,
}

impl Overlap {
    pub fn len(&self) -> usize {
        self.primer_1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primer_1.is_empty()
    }
}

/// Score of a single alignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentScore {
    pub shift: Shift,
    pub overlap: Overlap,
    pub total: u64,
    pub run: u64,
}

impl AlignmentScore {
    pub fn score(&self) -> DimerScore {
        DimerScore::new(self.total, self.run)
    }
}

/// Reduced score together with where each maximum was first reached
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimerReport {
    pub score: DimerScore,
    /// Shift of the first alignment reaching `score.total`
    pub total_shift: Option<Shift>,
    /// Shift of the first alignment reaching `score.run`
    pub run_shift: Option<Shift>,
    /// Number of alignments examined
    pub alignments: usize,
}

//! Primer dimerization scoring
//!
//! Slides the second primer across the first and scores every alignment for
//! complementary pairing. The worst case over all alignments is reported as
//! two independent maxima: the summed pairing weight and the weight of the
//! strongest uninterrupted run.

use crate::params::{DimerParams, SymbolPolicy};
use crate::scan::AlignmentScanner;
use crate::score::PairScorer;
use crate::types::{AlignmentScore, DimerReport, DimerScore};
use thiserror::Error;

/// Errors that can occur during dimerization scoring
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DimerError {
    #[error("Invalid symbol '{}' at position {position} of primer {primer}", display_symbol(.symbol))]
    InvalidSymbol {
        /// Which input carries the symbol, 1 or 2
        primer: u8,
        /// Index in the sequence as supplied
        position: usize,
        symbol: u8,
    },

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

pub type DimerResult<T> = Result<T, DimerError>;

fn display_symbol(symbol: &u8) -> char {
    char::from(*symbol)
}

/// Dimerization scoring engine
#[derive(Debug, Clone, Default)]
pub struct Dimerizer {
    params: DimerParams,
}

impl Dimerizer {
    pub fn new(params: DimerParams) -> DimerResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &DimerParams {
        &self.params
    }

    /// Worst-case dimerization score of `primer_1` (5'→3') against
    /// `primer_2`, which the caller supplies already complemented.
    pub fn score(&self, primer_1: impl AsRef<[u8]>, primer_2: impl AsRef<[u8]>) -> DimerResult<DimerScore> {
        let (primer_1, primer_2) = (primer_1.as_ref(), primer_2.as_ref());
        self.check_symbols(primer_1, primer_2)?;

        let scorer = PairScorer::new(&self.params.weights);
        let mut best = DimerScore::default();
        for alignment in AlignmentScanner::new(primer_1, primer_2) {
            let score = scorer.score(alignment.pairs());
            log::trace!("shift {}: total={} run={}", alignment.shift(), score.total, score.run);
            best.absorb(score);
        }

        log::debug!(
            "Scored {}bp x {}bp primers: total={} run={}",
            primer_1.len(),
            primer_2.len(),
            best.total,
            best.run
        );
        Ok(best)
    }

    /// Score of every alignment, in scan order
    pub fn scan_alignments(
        &self,
        primer_1: impl AsRef<[u8]>,
        primer_2: impl AsRef<[u8]>,
    ) -> DimerResult<Vec<AlignmentScore>> {
        let (primer_1, primer_2) = (primer_1.as_ref(), primer_2.as_ref());
        self.check_symbols(primer_1, primer_2)?;

        let scorer = PairScorer::new(&self.params.weights);
        let alignments = AlignmentScanner::new(primer_1, primer_2)
            .map(|alignment| {
                let score = scorer.score(alignment.pairs());
                AlignmentScore {
                    shift: alignment.shift(),
                    overlap: alignment.overlap(),
                    total: score.total,
                    run: score.run,
                }
            })
            .collect();
        Ok(alignments)
    }

    /// Reduced score plus the shifts where each maximum is first reached
    pub fn report(&self, primer_1: impl AsRef<[u8]>, primer_2: impl AsRef<[u8]>) -> DimerResult<DimerReport> {
        let alignments = self.scan_alignments(primer_1, primer_2)?;
        Ok(reduce(&alignments))
    }

    fn check_symbols(&self, primer_1: &[u8], primer_2: &[u8]) -> DimerResult<()> {
        let weights = &self.params.weights;
        let mut unsupported = [(1u8, primer_1), (2u8, primer_2)]
            .into_iter()
            .flat_map(|(primer, seq)| {
                seq.iter()
                    .enumerate()
                    .filter(move |(_, symbol)| weights.weight(**symbol).is_none())
                    .map(move |(position, &symbol)| DimerError::InvalidSymbol {
                        primer,
                        position,
                        symbol,
                    })
            });

        match self.params.symbol_policy {
            SymbolPolicy::Strict => match unsupported.next() {
                Some(err) => Err(err),
                None => Ok(()),
            },
            SymbolPolicy::Lenient => {
                let count = unsupported.count();
                if count > 0 {
                    log::warn!("{} unsupported symbols will be scored as unpaired", count);
                }
                Ok(())
            }
        }
    }
}

/// Fold per-alignment scores into independent maxima
pub fn reduce(alignments: &[AlignmentScore]) -> DimerReport {
    let mut report = DimerReport {
        alignments: alignments.len(),
        ..Default::default()
    };

    for alignment in alignments {
        if report.total_shift.is_none() || alignment.total > report.score.total {
            report.total_shift = Some(alignment.shift);
        }
        if report.run_shift.is_none() || alignment.run > report.score.run {
            report.run_shift = Some(alignment.shift);
        }
        report.score.absorb(alignment.score());
    }

    report
}

/// Score a primer pair with the default weights, rejecting unsupported symbols.
///
/// `primer_2` must already be complemented by the caller.
pub fn score_dimerization(primer_1: impl AsRef<[u8]>, primer_2: impl AsRef<[u8]>) -> DimerResult<DimerScore> {
    Dimerizer::default().score(primer_1, primer_2)
}

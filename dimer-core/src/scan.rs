//! Sliding alignment enumeration
//!
//! Walks the second primer (read back to front) across the first, one base at
//! a time, from the alignment where only the 3' end of primer 1 overlaps to the
//! one where only its 5' end does. Every shift is visited exactly once and the
//! overlapping span is derived by index arithmetic, so nothing is padded or
//! copied.

use crate::types::{Overlap, Shift};
use std::iter::FusedIterator;
use std::ops::Range;

/// One relative placement of the two primers
#[derive(Debug, Clone, Copy)]
pub struct Alignment<'a> {
    primer_1: &'a [u8],
    primer_2: &'a [u8],
    shift: Shift,
}

impl<'a> Alignment<'a> {
    pub fn shift(&self) -> Shift {
        self.shift
    }

    /// Indices of primer 1 that face primer 2 at this shift
    fn primer_1_span(&self) -> Range<usize> {
        let n = self.primer_1.len() as isize;
        let m = self.primer_2.len() as isize;
        let start = self.shift.max(0);
        let end = (self.shift + m).min(n).max(start);
        start as usize..end as usize
    }

    pub fn overlap(&self) -> Overlap {
        let span = self.primer_1_span();
        let m = self.primer_2.len() as isize;
        // reversed index j = i - shift maps back to m - 1 - j
        let start = (m - (span.end as isize - self.shift)) as usize;
        let end = (m - (span.start as isize - self.shift)) as usize;
        Overlap {
            primer_1: span,
            primer_2: start..end.max(start),
        }
    }

    /// Facing symbol pairs, 5' to 3' along primer 1
    pub fn pairs(&self) -> impl Iterator<Item = (u8, u8)> + 'a {
        let overlap = self.overlap();
        let (primer_1, primer_2): (&'a [u8], &'a [u8]) = (self.primer_1, self.primer_2);
        primer_1[overlap.primer_1]
            .iter()
            .copied()
            .zip(primer_2[overlap.primer_2].iter().rev().copied())
    }
}

/// Iterator over all `n + m - 1` alignments of two primers
#[derive(Debug, Clone)]
pub struct AlignmentScanner<'a> {
    primer_1: &'a [u8],
    primer_2: &'a [u8],
    next_shift: Shift,
    remaining: usize,
}

impl<'a> AlignmentScanner<'a> {
    pub fn new(primer_1: &'a [u8], primer_2: &'a [u8]) -> Self {
        Self {
            primer_1,
            primer_2,
            next_shift: primer_1.len() as isize - 1,
            remaining: (primer_1.len() + primer_2.len()).saturating_sub(1),
        }
    }
}

impl<'a> Iterator for AlignmentScanner<'a> {
    type Item = Alignment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let alignment = Alignment {
            primer_1: self.primer_1,
            primer_2: self.primer_2,
            shift: self.next_shift,
        };
        self.next_shift -= 1;
        self.remaining -= 1;
        Some(alignment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for AlignmentScanner<'_> {}

impl FusedIterator for AlignmentScanner<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs_at(alignment: &Alignment) -> Vec<(u8, u8)> {
        alignment.pairs().collect()
    }

    #[test]
    fn test_alignment_count() {
        assert_eq!(AlignmentScanner::new(b"ACGT", b"TTG").count(), 6);
        assert_eq!(AlignmentScanner::new(b"A", b"C").count(), 1);
        assert_eq!(AlignmentScanner::new(b"", b"").count(), 0);
        assert_eq!(AlignmentScanner::new(b"ACG", b"").len(), 2);
    }

    #[test]
    fn test_shift_order() {
        let shifts: Vec<_> = AlignmentScanner::new(b"ACG", b"TT").map(|a| a.shift()).collect();
        assert_eq!(shifts, vec![2, 1, 0, -1]);
    }

    #[test]
    fn test_first_and_last_alignments_overlap_one_base() {
        let alignments: Vec<_> = AlignmentScanner::new(b"ACGT", b"GGC").collect();

        // 3' end of primer 1 against the 3' end of primer 2
        let first = &alignments[0];
        assert_eq!(first.overlap(), Overlap { primer_1: 3..4, primer_2: 2..3 });
        assert_eq!(pairs_at(first), vec![(b'T', b'C')]);

        // 5' end of primer 1 against the 5' end of primer 2
        let last = alignments.last().unwrap();
        assert_eq!(last.overlap(), Overlap { primer_1: 0..1, primer_2: 0..1 });
        assert_eq!(pairs_at(last), vec![(b'A', b'G')]);
    }

    #[test]
    fn test_full_overlap_reads_primer_2_backwards() {
        let alignment = AlignmentScanner::new(b"AATT", b"AACC")
            .find(|a| a.shift() == 0)
            .unwrap();
        assert_eq!(alignment.overlap().len(), 4);
        assert_eq!(
            pairs_at(&alignment),
            vec![(b'A', b'C'), (b'A', b'C'), (b'T', b'A'), (b'T', b'A')]
        );
    }

    #[test]
    fn test_longer_second_primer() {
        let overlaps: Vec<_> = AlignmentScanner::new(b"AC", b"GTAC").map(|a| a.overlap()).collect();
        assert_eq!(overlaps.len(), 5);
        assert!(overlaps.iter().all(|o| o.primer_1.len() == o.primer_2.len()));
        assert_eq!(overlaps.iter().map(Overlap::len).max(), Some(2));
        // primer 1 fully contained at both interior shifts
        assert_eq!(overlaps[1], Overlap { primer_1: 0..2, primer_2: 2..4 });
        assert_eq!(overlaps[3], Overlap { primer_1: 0..2, primer_2: 0..2 });
    }

    #[test]
    fn test_empty_primer_yields_empty_overlaps() {
        for alignment in AlignmentScanner::new(b"", b"ACGT") {
            assert!(alignment.overlap().is_empty());
            assert_eq!(alignment.pairs().count(), 0);
        }
        for alignment in AlignmentScanner::new(b"ACGT", b"") {
            assert!(alignment.overlap().is_empty());
            assert_eq!(alignment.pairs().count(), 0);
        }
    }
}

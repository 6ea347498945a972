//! DimerX Core Library
//!
//! Sliding-alignment scoring of primer pairs for dimerization risk.

pub mod types;
pub mod params;
pub mod scan;
pub mod score;
pub mod dimer;

// Re-export commonly used types and functions
pub use types::{AlignmentScore, DimerReport, DimerScore, Overlap, Shift};
pub use params::{DimerParams, DimerPresets, SymbolPolicy, WeightTable};
pub use scan::{Alignment, AlignmentScanner};
pub use score::PairScorer;
pub use dimer::{reduce, score_dimerization, DimerError, DimerResult, Dimerizer};

/// Version information for the DimerX core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dimerizer>();
        assert_send_sync::<DimerScore>();
    }
}

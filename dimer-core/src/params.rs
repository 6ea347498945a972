//! Scoring parameters: base pairing weights and symbol handling

use crate::dimer::{DimerError, DimerResult};
use serde::{Deserialize, Serialize};

/// Pairing weight per nucleotide, reflecting relative bond strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightTable {
    pub a: u32,
    pub c: u32,
    pub g: u32,
    pub t: u32,
}

impl Default for WeightTable {
    /// A/T pairs form two hydrogen bonds, C/G pairs three; weighted 2 and 4
    fn default() -> Self {
        Self { a: 2, c: 4, g: 4, t: 2 }
    }
}

impl WeightTable {
    /// Same weight for every nucleotide
    pub fn uniform(weight: u32) -> Self {
        Self {
            a: weight,
            c: weight,
            g: weight,
            t: weight,
        }
    }

    /// Look up the weight of an uppercase nucleotide symbol
    pub fn weight(&self, symbol: u8) -> Option<u32> {
        match symbol {
            b'A' => Some(self.a),
            b'C' => Some(self.c),
            b'G' => Some(self.g),
            b'T' => Some(self.t),
            _ => None,
        }
    }

    pub fn validate(&self) -> DimerResult<()> {
        for (symbol, weight) in [('A', self.a), ('C', self.c), ('G', self.g), ('T', self.t)] {
            if weight == 0 {
                return Err(DimerError::InvalidParams(format!(
                    "weight for {} must be positive",
                    symbol
                )));
            }
        }
        Ok(())
    }
}

/// How symbols outside the weight table are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPolicy {
    /// Reject the pair before scanning
    #[default]
    Strict,
    /// Score unsupported symbols as never pairing
    Lenient,
}

/// Parameters for dimerization scoring
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimerParams {
    pub weights: WeightTable,
    pub symbol_policy: SymbolPolicy,
}

impl DimerParams {
    pub fn validate(&self) -> DimerResult<()> {
        self.weights.validate()
    }
}

/// Preset configurations
pub struct DimerPresets;

impl DimerPresets {
    /// Default weights, unsupported symbols rejected
    pub fn standard() -> DimerParams {
        DimerParams::default()
    }

    /// Default weights, unsupported symbols (N, IUPAC codes, lowercase) never pair
    pub fn lenient() -> DimerParams {
        DimerParams {
            symbol_policy: SymbolPolicy::Lenient,
            ..Default::default()
        }
    }

    /// Every match weighs 1, so totals count paired positions
    pub fn match_count() -> DimerParams {
        DimerParams {
            weights: WeightTable::uniform(1),
            ..Default::default()
        }
    }
}

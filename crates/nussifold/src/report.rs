use std::fmt;
use colored::*;
use serde::{Deserialize, Serialize};

use nf_fold::FoldResult;
use nf_fold::NucleotideVec;

/// Printable summary of one folded sequence.
///
/// Pair indices are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoldReport {
    pub name: String,
    pub sequence: String,
    pub structure: String,
    pub max_pairs: usize,
    pub pairs: Vec<(usize, usize)>,
}

impl FoldReport {
    /// Pairs are listed in traceback order, or by left position if `sorted`.
    pub fn new(name: &str, sequence: &NucleotideVec, result: &FoldResult, sorted: bool) -> Self {
        let pairs = if sorted {
            result.pairs.sorted().iter().map(|p| p.one_based()).collect()
        } else {
            result.pairs.one_based().collect()
        };
        Self {
            name: name.to_string(),
            sequence: sequence.to_string(),
            structure: result.structure.to_string(),
            max_pairs: result.max_pairs,
            pairs,
        }
    }
}

impl fmt::Display for FoldReport {
    /// Text report; the alternate form (`{:#}`) colours structure and count.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.sequence)?;
        if f.alternate() {
            writeln!(f, "{}", self.structure.green())?;
            writeln!(f, "Max pairs: {}", self.max_pairs.to_string().green())?;
        } else {
            writeln!(f, "{}", self.structure)?;
            writeln!(f, "Max pairs: {}", self.max_pairs)?;
        }
        writeln!(f, "Indices:")?;
        for (i, j) in &self.pairs {
            writeln!(f, "({}, {})", i, j)?;
        }
        Ok(())
    }
}

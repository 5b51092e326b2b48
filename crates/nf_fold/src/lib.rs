//! The nf_fold crate.
//!
//! Nussinov-style base-pair maximization for a single RNA strand:
//!  - nucleotides and the base-pairing rule,
//!  - the interval score table and its bottom-up fill,
//!  - a deterministic traceback of one optimal structure.
//!
//! ```
//! use nf_fold::{fold_str, FoldParams};
//!
//! let result = fold_str("ACCGGUAGU", &FoldParams::default()).unwrap();
//! assert_eq!(result.max_pairs, 2);
//! assert_eq!(result.structure.to_string(), "((.....))");
//! ```

/// Base, NucleotideVec, PairingRule, ...
mod nucleotides;

/// Folding parameters.
mod params;

/// Error types of the folding pipeline.
mod error;

/// The memoized interval table.
mod score_table;

/// Recurrence evaluation and traceback.
mod nussinov;

pub use nucleotides::*;
pub use params::*;
pub use error::*;
pub use score_table::*;
pub use nussinov::*;

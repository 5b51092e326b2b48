//! # nussifold
//!
//! Maximum base-pair folding of RNA sequences.
//!
//! This crate re-exports the main functionality from its submodules and
//! provides the input/output helpers used by the command line tools.

pub mod input_parsers;
pub mod report;

pub mod structure {
    pub use ::nf_structure::*;
}

pub mod fold {
    pub use ::nf_fold::*;
}

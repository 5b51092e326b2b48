//! The nf_structure crate.
//!
//! Secondary structure representations for a single nucleic acid strand:
//!  - dot-bracket annotations,
//!  - pair lists (ordered base pairs).
//!

mod dotbracket;
mod pair_list;

pub use dotbracket::*;
pub use pair_list::*;

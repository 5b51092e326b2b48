use std::fmt;
use std::borrow::Borrow;
use std::ops::Deref;

use log::warn;
use colored::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    InvalidChar(char, usize),
    Separator(char, usize),
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::InvalidChar(c, i) => {
                write!(f, "Unsupported nucleotide '{}' at position {}", c, i)
            }
            SequenceError::Separator(c, i) => {
                write!(f, "Unexpected strand separation character '{}' at position {}", c, i)
            }
        }
    }
}

impl std::error::Error for SequenceError {}

/// A nucleotide. `N` only enters a sequence through lenient parsing and
/// never forms a base pair.
#[derive(Clone, Hash, Copy, Debug, Eq, PartialEq)]
pub enum Base { A, C, G, U, N }

impl TryFrom<char> for Base {
    type Error = SequenceError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Base::A),
            'C' => Ok(Base::C),
            'G' => Ok(Base::G),
            'U' | 'T' => Ok(Base::U),
            '&' | '+' => Err(SequenceError::Separator(c, 0)),
            _ => Err(SequenceError::InvalidChar(c, 0)),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::U => 'U',
            Base::N => 'N',
        };
        write!(f, "{}", c)
    }
}

/// Watson-Crick complementarity: A-U, U-A, C-G and G-C.
pub fn can_pair(x: Base, y: Base) -> bool {
    use Base::*;
    matches!((x, y), (A, U) | (U, A) | (C, G) | (G, C))
}

/// Which base combinations may close a pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PairingRule {
    #[default]
    WatsonCrick,
    /// Watson-Crick plus G-U wobble pairs.
    Wobble,
}

impl PairingRule {
    pub fn can_pair(&self, x: Base, y: Base) -> bool {
        match self {
            PairingRule::WatsonCrick => can_pair(x, y),
            PairingRule::Wobble => {
                can_pair(x, y) || matches!((x, y), (Base::G, Base::U) | (Base::U, Base::G))
            }
        }
    }
}

/// An immutable RNA sequence.
#[derive(Clone, Hash, Debug, Eq, PartialEq)]
pub struct NucleotideVec(Vec<Base>);

impl Deref for NucleotideVec {
    type Target = [Base];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<[Base]> for NucleotideVec {
    fn borrow(&self) -> &[Base] {
        &self.0
    }
}

impl From<Vec<Base>> for NucleotideVec {
    fn from(bases: Vec<Base>) -> Self {
        NucleotideVec(bases)
    }
}

impl TryFrom<&str> for NucleotideVec {
    type Error = SequenceError;

    /// Strict parsing: fails at the first symbol outside of ACGU (T reads as U).
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut vec = Vec::with_capacity(s.len());
        for (i, c) in s.chars().enumerate() {
            match Base::try_from(c) {
                Ok(b) => vec.push(b),
                Err(SequenceError::InvalidChar(c, _)) => {
                    return Err(SequenceError::InvalidChar(c, i));
                }
                Err(SequenceError::Separator(c, _)) => {
                    return Err(SequenceError::Separator(c, i));
                }
            }
        }
        Ok(NucleotideVec(vec))
    }
}

impl fmt::Display for NucleotideVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.0 {
            write!(f, "{}", base)?;
        }
        Ok(())
    }
}

impl NucleotideVec {
    /// Lenient parsing: unsupported symbols become `N`, which never pairs.
    pub fn from_lossy(s: &str) -> Self {
        let vec = s.chars().enumerate().map(|(i, c)| {
            Base::try_from(c).unwrap_or_else(|_| {
                warn!("{} {} -> converted to 'N'", "WARNING:".red(), SequenceError::InvalidChar(c, i));
                Base::N
            })
        }).collect();
        NucleotideVec(vec)
    }

    pub fn count_unknown(&self) -> usize {
        self.0.iter().filter(|&&b| b == Base::N).count()
    }
}

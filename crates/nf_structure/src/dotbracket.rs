use std::fmt;
use std::ops::Deref;
use std::ops::DerefMut;

use crate::PairList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DotBracket {
    Unpaired, // '.'
    Open,     // '('
    Close,    // ')'
}

impl From<DotBracket> for char {
    fn from(db: DotBracket) -> Self {
        match db {
            DotBracket::Open => '(',
            DotBracket::Close => ')',
            DotBracket::Unpaired => '.',
        }
    }
}

/// A dot-bracket annotation, one symbol per sequence position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DotBracketVec(pub Vec<DotBracket>);

impl DotBracketVec {
    /// The open chain: every position unpaired.
    pub fn unpaired(length: usize) -> Self {
        DotBracketVec(vec![DotBracket::Unpaired; length])
    }

    pub fn num_pairs(&self) -> usize {
        self.0.iter().filter(|&&db| db == DotBracket::Open).count()
    }
}

impl Deref for DotBracketVec {
    type Target = [DotBracket];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DotBracketVec {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<&PairList> for DotBracketVec {
    fn from(pl: &PairList) -> Self {
        let mut dbv = DotBracketVec::unpaired(pl.sequence_len());
        for pair in pl.iter() {
            dbv[pair.left] = DotBracket::Open;
            dbv[pair.right] = DotBracket::Close;
        }
        dbv
    }
}

impl fmt::Display for DotBracketVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for db in &self.0 {
            write!(f, "{}", char::from(*db))?;
        }
        Ok(())
    }
}

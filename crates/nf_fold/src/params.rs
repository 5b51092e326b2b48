use crate::PairingRule;

/// Minimum number of unpaired bases enclosed by a hairpin.
pub const MIN_HAIRPIN: usize = 4;

/// Parameters shared by the score table fill and the traceback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldParams {
    /// A pair (i, j) requires `j - i > min_hairpin`.
    pub min_hairpin: usize,
    pub pairing: PairingRule,
}

impl Default for FoldParams {
    fn default() -> Self {
        Self {
            min_hairpin: MIN_HAIRPIN,
            pairing: PairingRule::WatsonCrick,
        }
    }
}

impl FoldParams {
    pub fn new(min_hairpin: usize, pairing: PairingRule) -> Self {
        Self { min_hairpin, pairing }
    }

    /// The smallest span `j - i` of a valid base pair.
    pub fn min_span(&self) -> usize {
        self.min_hairpin.saturating_add(1)
    }
}

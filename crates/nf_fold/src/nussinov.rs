//! Nussinov-style base-pair maximization.
//!
//! The score of an interval `[i, j]` is the larger of leaving `j` unpaired,
//! `score(i, j-1)`, and pairing `j` with some `t` at least `min_span` away,
//! `1 + score(i, t-1) + score(t+1, j-1)`.

use std::time::Instant;
use log::debug;

use nf_structure::BasePair;
use nf_structure::PairList;
use nf_structure::DotBracketVec;

use crate::FoldError;
use crate::FoldParams;
use crate::ScoreTable;
use crate::NucleotideVec;

/// Fills the score table bottom-up, by increasing interval span.
pub fn nussinov(seq: &NucleotideVec, params: &FoldParams) -> ScoreTable {
    let start = Instant::now();
    let n = seq.len();
    let min_span = params.min_span();
    let mut table = ScoreTable::new(n);

    // No sharp turns: short intervals cannot enclose a pair.
    for i in 0..n {
        for j in i..n.min(i.saturating_add(min_span)) {
            table.resolve(i, j, 0);
        }
    }

    for span in min_span..n {
        for i in 0..n - span {
            let j = i + span;
            let exclude = table.resolved(i, j - 1);
            let mut max_include = 0;
            for t in i..=j - min_span {
                if params.pairing.can_pair(seq[t], seq[j]) {
                    let left = if t > i { table.resolved(i, t - 1) } else { 0 };
                    let include = 1 + left + table.resolved(t + 1, j - 1);
                    max_include = max_include.max(include);
                }
            }
            table.resolve(i, j, exclude.max(max_include));
        }
    }

    debug!("Filled {n}x{n} score table in {:?}", start.elapsed());
    table
}

/// Recovers one optimal structure from a filled score table.
///
/// Ties are broken deterministically: `j` stays unpaired whenever that
/// keeps the optimum, otherwise it pairs with the lowest valid partner.
/// Pairs are reported in discovery order.
pub fn traceback(
    seq: &NucleotideVec,
    table: &ScoreTable,
    params: &FoldParams,
) -> Result<PairList, FoldError> {
    let n = seq.len();
    if table.len() != n {
        return Err(FoldError::LengthMismatch { sequence: n, table: table.len() });
    }
    let start = Instant::now();
    let mut pairs = PairList::new(n);
    let mut stack: Vec<(usize, usize)> = Vec::new();
    if n > 0 {
        stack.push((0, n - 1));
    }

    while let Some((i, j)) = stack.pop() {
        if i >= j {
            continue;
        }
        let score = table.score(i, j)?;
        if score == table.score(i, j - 1)? {
            stack.push((i, j - 1));
            continue;
        }

        let mut partner = None;
        for k in i..j.saturating_sub(params.min_hairpin) {
            if !params.pairing.can_pair(seq[k], seq[j]) {
                continue;
            }
            let left = if k > i { table.score(i, k - 1)? } else { 0 };
            if score == 1 + left + table.score(k + 1, j - 1)? {
                partner = Some(k);
                break;
            }
        }
        let k = partner.ok_or(FoldError::Inconsistent { i, j })?;

        pairs.push(BasePair::new(k, j));
        // LIFO: the left interval [i, k-1] is visited first.
        stack.push((k + 1, j - 1));
        if k > i {
            stack.push((i, k - 1));
        }
    }

    debug!("Traceback of {} pairs in {:?}", pairs.len(), start.elapsed());
    Ok(pairs)
}

/// The optimum, one optimal pair list and its dot-bracket annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldResult {
    pub max_pairs: usize,
    pub pairs: PairList,
    pub structure: DotBracketVec,
}

/// Fills the score table and traces back one optimal structure.
pub fn fold(seq: &NucleotideVec, params: &FoldParams) -> Result<FoldResult, FoldError> {
    let table = nussinov(seq, params);
    let max_pairs = table.max_pairs()?;
    let pairs = traceback(seq, &table, params)?;
    debug_assert_eq!(pairs.len(), max_pairs);
    debug_assert!(pairs.is_non_crossing() && pairs.is_index_disjoint());
    let structure = DotBracketVec::from(&pairs);
    Ok(FoldResult { max_pairs, pairs, structure })
}

/// Strictly parses `s` and folds it.
pub fn fold_str(s: &str, params: &FoldParams) -> Result<FoldResult, FoldError> {
    let seq = NucleotideVec::try_from(s)?;
    fold(&seq, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use reference::TopDown;
    use crate::Base;
    use crate::PairingRule;
    use crate::SequenceError;

    /// Independent top-down memoized recursion, for cross-checking.
    mod reference {
        use std::collections::HashMap;
        use crate::FoldParams;
        use crate::NucleotideVec;

        pub struct TopDown<'a> {
            pub seq: &'a NucleotideVec,
            pub params: FoldParams,
            pub memo: HashMap<(usize, usize), usize>,
        }

        impl TopDown<'_> {
            pub fn opt(&mut self, i: usize, j: usize) -> usize {
                if i > j || j - i <= self.params.min_hairpin {
                    return 0;
                }
                if let Some(&v) = self.memo.get(&(i, j)) {
                    return v;
                }
                let mut best = self.opt(i, j - 1);
                for t in i..j - self.params.min_hairpin {
                    if self.params.pairing.can_pair(self.seq[t], self.seq[j]) {
                        let left = if t > i { self.opt(i, t - 1) } else { 0 };
                        best = best.max(1 + left + self.opt(t + 1, j - 1));
                    }
                }
                self.memo.insert((i, j), best);
                best
            }
        }
    }

    fn random_sequence(rng: &mut StdRng, len: usize) -> NucleotideVec {
        const BASES: [Base; 4] = [Base::A, Base::C, Base::G, Base::U];
        (0..len)
            .map(|_| BASES[rng.random_range(0..4)])
            .collect::<Vec<_>>()
            .into()
    }

    fn check_structure(seq: &NucleotideVec, result: &FoldResult, params: &FoldParams) {
        let n = seq.len();
        assert!(result.max_pairs <= n / 2);
        assert_eq!(result.pairs.len(), result.max_pairs);
        assert!(result.pairs.is_index_disjoint());
        assert!(result.pairs.is_non_crossing());
        for p in result.pairs.iter() {
            assert!(p.right - p.left >= params.min_span(), "sharp turn in {p}");
            assert!(params.pairing.can_pair(seq[p.left], seq[p.right]), "invalid pair {p}");
        }
        assert_eq!(result.structure.len(), n);
        assert_eq!(result.structure.num_pairs(), result.max_pairs);
    }

    #[test]
    fn test_reference_example() {
        let result = fold_str("ACCGGUAGU", &FoldParams::default()).unwrap();
        assert_eq!(result.max_pairs, 2);
        assert_eq!(result.structure.to_string(), "((.....))");
        assert_eq!(result.pairs.one_based().collect::<Vec<_>>(), vec![(1, 9), (2, 8)]);
    }

    #[test]
    fn test_short_sequences_have_no_pairs() {
        let params = FoldParams::default();
        for s in ["", "A", "AU", "GCG", "AUAU", "GAAAC"] {
            let result = fold_str(s, &params).unwrap();
            if s.len() <= 4 {
                assert_eq!(result.max_pairs, 0, "{s}");
                assert!(result.pairs.is_empty());
                assert_eq!(result.structure.to_string(), ".".repeat(s.len()));
            }
        }
        // G-C four positions apart is a sharp turn.
        assert_eq!(fold_str("GAAAC", &params).unwrap().max_pairs, 0);
        assert_eq!(fold_str("GAAAAC", &params).unwrap().max_pairs, 1);
    }

    #[test]
    fn test_no_complementary_bases() {
        let result = fold_str("AAAAAAAAAA", &FoldParams::default()).unwrap();
        assert_eq!(result.max_pairs, 0);
        assert_eq!(result.structure.to_string(), "..........");
    }

    #[test]
    fn test_nested_stem() {
        let result = fold_str("GCGCAAAAAGCGC", &FoldParams::default()).unwrap();
        assert_eq!(result.max_pairs, 4);
        assert_eq!(result.structure.to_string(), "((((.....))))");
        assert_eq!(
            result.pairs.one_based().collect::<Vec<_>>(),
            vec![(1, 13), (2, 12), (3, 11), (4, 10)]
        );
    }

    #[test]
    fn test_two_disjoint_stems() {
        let params = FoldParams::default();
        let result = fold_str("GCGCAAAAGCGCAGCGCAAAAGCGC", &params).unwrap();
        assert_eq!(result.max_pairs, 8);
        assert_eq!(result.structure.to_string(), "((((....)))).((((....))))");
        // Discovery order: the closing pair of the outer interval comes first.
        assert_eq!(result.pairs[0], BasePair::new(13, 24));
        assert_eq!(result.pairs[1], BasePair::new(0, 11));
        check_structure(&NucleotideVec::try_from("GCGCAAAAGCGCAGCGCAAAAGCGC").unwrap(), &result, &params);
    }

    #[test]
    fn test_multiloop() {
        let seq = "GGGAAAAUCCCAAAAAAGGGAAAAUCCC";
        let result = fold_str(seq, &FoldParams::default()).unwrap();
        assert_eq!(result.max_pairs, 8);
        assert_eq!(result.structure.to_string(), "((((...((((......))))...))))");
    }

    #[test]
    fn test_tie_break_prefers_unpaired_end() {
        // Position 0 can pair with 6 or 12; leaving 12 unpaired wins.
        let result = fold_str("GAAAAACAAAAAC", &FoldParams::default()).unwrap();
        assert_eq!(result.max_pairs, 1);
        assert_eq!(result.structure.to_string(), "(.....)......");
    }

    #[test]
    fn test_determinism() {
        let params = FoldParams::default();
        let seq = NucleotideVec::try_from("GGGAAAUCCAGCUAGCUAGGCUAAAUCGAUCGGAUC").unwrap();
        let first = fold(&seq, &params).unwrap();
        for _ in 0..5 {
            assert_eq!(fold(&seq, &params).unwrap(), first);
        }
    }

    #[test]
    fn test_invalid_symbol_fails_fast() {
        let err = fold_str("ACXGUAAAAAAU", &FoldParams::default()).unwrap_err();
        assert_eq!(err, FoldError::Sequence(SequenceError::InvalidChar('X', 2)));
    }

    #[test]
    fn test_lenient_symbol_never_pairs() {
        let seq = NucleotideVec::from_lossy("ACXGUAAAAAAU");
        let result = fold(&seq, &FoldParams::default()).unwrap();
        assert_eq!(result.max_pairs, 2);
        assert_eq!(result.structure.to_string(), "(...(....).)");
    }

    #[test]
    fn test_parameters() {
        let wobble = FoldParams::new(4, PairingRule::Wobble);
        assert_eq!(fold_str("GGGGGGU", &FoldParams::default()).unwrap().max_pairs, 0);
        assert_eq!(fold_str("GGGGGGU", &wobble).unwrap().structure.to_string(), "(.....)");

        let short_loops = FoldParams::new(3, PairingRule::WatsonCrick);
        assert_eq!(fold_str("GAAAC", &short_loops).unwrap().structure.to_string(), "(...)");
    }

    #[test]
    fn test_table_is_complete_and_monotone() {
        let seq = NucleotideVec::try_from("GGGAAAUCCAGCUAGCUAGGCUAAAUC").unwrap();
        let table = nussinov(&seq, &FoldParams::default());
        let n = seq.len();
        assert!(table.is_complete());
        for i in 0..n {
            for j in i..n {
                let s = table.score(i, j).unwrap();
                if j + 1 < n {
                    assert!(table.score(i, j + 1).unwrap() >= s);
                }
                if i + 1 <= j {
                    assert!(table.score(i + 1, j).unwrap() <= s);
                }
            }
        }
    }

    #[test]
    fn test_traceback_requires_filled_table() {
        let seq = NucleotideVec::try_from("ACCGGUAGU").unwrap();
        let table = ScoreTable::new(seq.len());
        let err = traceback(&seq, &table, &FoldParams::default()).unwrap_err();
        assert_eq!(err, FoldError::Unresolved { i: 0, j: 8 });

        let table = ScoreTable::new(3);
        let err = traceback(&seq, &table, &FoldParams::default()).unwrap_err();
        assert_eq!(err, FoldError::LengthMismatch { sequence: 9, table: 3 });
    }

    #[test]
    fn test_random_sequences_against_top_down() {
        let mut rng = StdRng::seed_from_u64(42);
        for params in [
            FoldParams::default(),
            FoldParams::new(3, PairingRule::Wobble),
        ] {
            for len in 0..60 {
                let seq = random_sequence(&mut rng, len);
                let result = fold(&seq, &params).unwrap();
                let mut reference = TopDown { seq: &seq, params, memo: Default::default() };
                let expected = if len == 0 { 0 } else { reference.opt(0, len - 1) };
                assert_eq!(result.max_pairs, expected, "{seq}");
                check_structure(&seq, &result, &params);
            }
        }
    }
}

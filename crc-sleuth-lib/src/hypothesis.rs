//! Hypotheses and the per-block evaluator.

use crate::corpus::Block;
use crate::error::SearchError;
use crate::registry::{AlgorithmId, AlgorithmRegistry};

/// A candidate explanation for a block's checksum byte: `algorithm` computed
/// over `bytes[start..end]`, optionally one's-complemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hypothesis {
    pub algorithm: AlgorithmId,
    pub negated: bool,
    pub start: usize,
    pub end: usize,
}

impl Hypothesis {
    /// Number of bytes the range covers.
    pub fn range_len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_single_byte(&self) -> bool {
        self.range_len() == 1
    }

    /// Whether `index` falls inside `[start, end)`.
    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }

    /// Report label: the algorithm name, prefixed with `"negation "` for
    /// complemented matches.
    pub fn label(&self, registry: &AlgorithmRegistry) -> String {
        let name = registry.name(self.algorithm);
        if self.negated {
            format!("negation {name}")
        } else {
            name.to_string()
        }
    }

    /// Textual form `(<label>, <start>, <end>)`.
    pub fn render(&self, registry: &AlgorithmRegistry) -> String {
        format!("({}, {}, {})", self.label(registry), self.start, self.end)
    }
}

/// Every hypothesis that holds for one block.
///
/// Ranges run over `start in 0..len` and `end in start + 1..len`, so the
/// final byte of the block never takes part in a range and a block shorter
/// than two bytes yields nothing. Ranges covering `checksum_index` are still
/// produced here; the report drops them.
///
/// `block_no` is only used to identify the block in an
/// [`SearchError::IndexOutOfRange`] error.
pub fn evaluate_block(
    block: &Block,
    block_no: usize,
    checksum_index: usize,
    registry: &AlgorithmRegistry,
) -> Result<Vec<Hypothesis>, SearchError> {
    let bytes = block.bytes();
    let target = *bytes
        .get(checksum_index)
        .ok_or(SearchError::IndexOutOfRange {
            index: checksum_index,
            len: bytes.len(),
            block: block_no,
        })?;

    let mut matches = Vec::new();
    for start in 0..bytes.len() {
        for end in start + 1..bytes.len() {
            let range = &bytes[start..end];
            for (algorithm, checksum) in registry.iter() {
                let value = checksum.compute(range);
                // Both checks run every time; neither suppresses the other.
                if value == target {
                    matches.push(Hypothesis {
                        algorithm,
                        negated: false,
                        start,
                        end,
                    });
                }
                if 0xFF - value == target {
                    matches.push(Hypothesis {
                        algorithm,
                        negated: true,
                        start,
                        end,
                    });
                }
            }
        }
    }
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crc_sleuth_core::{Algorithm, FnChecksum};

    fn sum8_only() -> AlgorithmRegistry {
        let mut registry = AlgorithmRegistry::new();
        registry.register(Algorithm::Sum8);
        registry
    }

    fn rendered(matches: &[Hypothesis], registry: &AlgorithmRegistry) -> Vec<String> {
        matches.iter().map(|h| h.render(registry)).collect()
    }

    #[test]
    fn direct_and_negated_matches_at_0x7f() {
        // sum8([0x7F]) == 0x7F directly; sum8([0x80]) == 0x80 == !0x7F.
        let registry = sum8_only();
        let block = Block::new(vec![0x7F, 0x80, 0x7F]);
        let matches = evaluate_block(&block, 0, 2, &registry).unwrap();
        assert_eq!(
            rendered(&matches, &registry),
            vec!["(sum8, 0, 1)", "(negation sum8, 1, 2)"]
        );
    }

    #[test]
    fn negated_and_direct_matches_share_a_range() {
        // Target 0x80: const7f matches negated, const80 matches directly,
        // on every one of the three ranges.
        let mut registry = AlgorithmRegistry::new();
        registry
            .register(FnChecksum::new("const7f", |_| 0x7F))
            .register(FnChecksum::new("const80", |_| 0x80));
        let block = Block::new(vec![0x00, 0x80, 0x00]);
        let matches = evaluate_block(&block, 0, 1, &registry).unwrap();
        let labels = rendered(&matches, &registry);
        assert!(labels.contains(&"(negation const7f, 0, 1)".to_string()));
        assert!(labels.contains(&"(const80, 0, 1)".to_string()));
        assert_eq!(labels.len(), 2 * 3);
    }

    #[test]
    fn last_byte_never_enters_a_range() {
        let registry = sum8_only();
        let block = Block::new(vec![0x01, 0x01, 0x01, 0x01]);
        let matches = evaluate_block(&block, 0, 0, &registry).unwrap();
        assert!(matches.iter().all(|h| h.end < block.len()));
    }

    #[test]
    fn ranges_over_the_checksum_byte_are_kept() {
        let registry = sum8_only();
        let block = Block::new(vec![0x05, 0x00, 0x00]);
        let matches = evaluate_block(&block, 0, 0, &registry).unwrap();
        assert!(matches.iter().any(|h| h.contains(0)));
    }

    #[test]
    fn short_blocks_yield_nothing() {
        let registry = AlgorithmRegistry::builtin();
        let block = Block::new(vec![0x00]);
        assert!(evaluate_block(&block, 0, 0, &registry).unwrap().is_empty());
    }

    #[test]
    fn index_out_of_range_is_an_error() {
        let registry = sum8_only();
        let block = Block::new(vec![0x01, 0x02]);
        let err = evaluate_block(&block, 3, 2, &registry).unwrap_err();
        assert!(matches!(
            err,
            SearchError::IndexOutOfRange {
                index: 2,
                len: 2,
                block: 3
            }
        ));
    }

    #[test]
    fn example_block_has_no_sum8_match_over_first_two_bytes() {
        // sum8(AA 55) == 0xFF; neither 0xFF nor 0x00 equals 0x0F.
        let registry = sum8_only();
        let block = Block::from_hex("AA550F", 1).unwrap();
        let matches = evaluate_block(&block, 0, 2, &registry).unwrap();
        assert!(!matches.iter().any(|h| h.start == 0 && h.end == 2));
    }

    #[test]
    fn hypothesis_geometry() {
        let h = Hypothesis {
            algorithm: AlgorithmId(0),
            negated: false,
            start: 2,
            end: 5,
        };
        assert_eq!(h.range_len(), 3);
        assert!(!h.is_single_byte());
        assert!(h.contains(2));
        assert!(h.contains(4));
        assert!(!h.contains(5));
        assert!(!h.contains(1));
    }
}

use super::*;
use crate::corpus::Block;
use crc_sleuth_core::Algorithm;

fn registry_of(algorithms: &[Algorithm]) -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();
    for &algorithm in algorithms {
        registry.register(algorithm);
    }
    registry
}

/// Deterministic pseudo-random corpus (LCG), `blocks` records of `width` bytes.
fn noisy_corpus(blocks: usize, width: usize) -> Corpus {
    let mut state: u32 = 0x1234_5678;
    (0..blocks)
        .map(|_| {
            let bytes = (0..width)
                .map(|_| {
                    state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                    (state >> 16) as u8
                })
                .collect::<Vec<u8>>();
            Block::new(bytes)
        })
        .collect()
}

fn hyp(
    registry: &AlgorithmRegistry,
    name: &str,
    negated: bool,
    start: usize,
    end: usize,
) -> Hypothesis {
    Hypothesis {
        algorithm: registry.require(name).unwrap(),
        negated,
        start,
        end,
    }
}

#[test]
fn counts_one_per_block() {
    let registry = registry_of(&[Algorithm::Xor8]);
    let corpus = Corpus::parse("010203\n102030\n050a0f\n").unwrap();
    let table = FrequencyTable::build(&corpus, 2, &registry).unwrap();
    assert_eq!(table.count(&hyp(&registry, "xor8", false, 0, 2)), 3);
    assert_eq!(table.count(&hyp(&registry, "xor8", true, 0, 2)), 0);
    assert_eq!(table.len(), 1);
}

#[test]
fn report_renders_in_text_format() {
    let registry = registry_of(&[Algorithm::Xor8]);
    let corpus = Corpus::parse("010203\n102030\n050a0f\n").unwrap();
    let report = aggregate(&corpus, &registry, &SearchOptions::new(2).threshold(3)).unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report.blocks, 3);
    assert_eq!(report.entries[0].to_string(), "index:2 (xor8, 0, 2): 3");
    assert_eq!(report.to_string(), "index:2 (xor8, 0, 2): 3\n");
}

#[test]
fn negated_entries_carry_the_prefix() {
    let entry = ReportEntry {
        index: 4,
        algorithm: "crc8".to_string(),
        negated: true,
        start: 0,
        end: 3,
        count: 7,
    };
    assert_eq!(entry.label(), "negation crc8");
    assert_eq!(entry.to_string(), "index:4 (negation crc8, 0, 3): 7");
}

#[test]
fn ranking_orders_by_count_then_rendered_length() {
    let registry = registry_of(&[Algorithm::Crc16Ccitt, Algorithm::Xor8]);
    let long = hyp(&registry, "crc16_ccitt", false, 0, 1);
    let short = hyp(&registry, "xor8", false, 0, 1);
    let negated = hyp(&registry, "xor8", true, 0, 1);
    let frequent = hyp(&registry, "crc16_ccitt", true, 10, 12);

    let mut table = FrequencyTable::new();
    table.record(long);
    table.record(negated);
    table.record(short);
    table.record(frequent);
    table.record(frequent);

    let order: Vec<Hypothesis> = table.ranked(&registry).into_iter().map(|(h, _)| h).collect();
    // "(xor8, 0, 1)" < "(crc16_ccitt, 0, 1)" < "(negation xor8, 0, 1)"
    assert_eq!(order, vec![frequent, short, long, negated]);
}

#[test]
fn equal_rank_keeps_first_seen_order() {
    let registry = registry_of(&[Algorithm::Xor8]);
    let later = hyp(&registry, "xor8", false, 2, 3);
    let earlier = hyp(&registry, "xor8", false, 0, 1);

    let mut table = FrequencyTable::new();
    table.record(later);
    table.record(earlier);

    let order: Vec<Hypothesis> = table.ranked(&registry).into_iter().map(|(h, _)| h).collect();
    assert_eq!(order, vec![later, earlier]);
}

#[test]
fn ranges_covering_the_checksum_index_are_excluded() {
    // sum8 matches b[1] == 7 over [0,1), [1,2) and [1,3); only [0,1)
    // leaves index 1 outside the range.
    let registry = registry_of(&[Algorithm::Sum8]);
    let corpus = Corpus::parse("07070000\n").unwrap();
    let table = FrequencyTable::build(&corpus, 1, &registry).unwrap();
    assert_eq!(table.len(), 3);

    let report = aggregate(&corpus, &registry, &SearchOptions::new(1)).unwrap();
    let lines: Vec<String> = report.entries.iter().map(|e| e.to_string()).collect();
    assert_eq!(lines, vec!["index:1 (sum8, 0, 1): 1"]);
}

#[test]
fn no_reported_range_contains_the_index() {
    let registry = AlgorithmRegistry::builtin();
    let corpus = noisy_corpus(6, 8);
    for index in 0..corpus.width() {
        let report = aggregate(&corpus, &registry, &SearchOptions::new(index)).unwrap();
        for entry in &report.entries {
            assert!(
                !(entry.start..entry.end).contains(&index),
                "{entry} covers its own checksum byte"
            );
        }
    }
}

#[test]
fn raising_threshold_never_grows_the_report() {
    let registry = AlgorithmRegistry::builtin();
    let corpus = noisy_corpus(6, 8);
    for index in [0, 3, 7] {
        let sizes: Vec<usize> = (0..=corpus.len() + 1)
            .map(|t| {
                aggregate(&corpus, &registry, &SearchOptions::new(index).threshold(t))
                    .unwrap()
                    .len()
            })
            .collect();
        assert!(
            sizes.windows(2).all(|w| w[1] <= w[0]),
            "index {index}: {sizes:?}"
        );
        assert_eq!(*sizes.last().unwrap(), 0);
    }
}

#[test]
fn skip_single_byte_removes_exactly_single_byte_ranges() {
    let registry = AlgorithmRegistry::builtin();
    let corpus = noisy_corpus(4, 7);
    for index in 0..corpus.width() {
        let all = aggregate(&corpus, &registry, &SearchOptions::new(index)).unwrap();
        let skipped = aggregate(
            &corpus,
            &registry,
            &SearchOptions::new(index).skip_single_byte(true),
        )
        .unwrap();
        let expected: Vec<ReportEntry> = all
            .entries
            .iter()
            .filter(|e| e.end - e.start != 1)
            .cloned()
            .collect();
        assert_eq!(skipped.entries, expected);
    }
}

#[test]
fn aggregation_is_idempotent() {
    let registry = AlgorithmRegistry::builtin();
    let corpus = noisy_corpus(5, 6);
    let options = SearchOptions::new(5).threshold(1);
    let first = aggregate(&corpus, &registry, &options).unwrap();
    let second = aggregate(&corpus, &registry, &options).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn empty_corpus_gives_empty_report() {
    let registry = AlgorithmRegistry::builtin();
    let report = aggregate(&Corpus::default(), &registry, &SearchOptions::new(3)).unwrap();
    assert!(report.is_empty());
    assert_eq!(report.blocks, 0);
}

#[test]
fn short_block_aborts_the_search() {
    let registry = AlgorithmRegistry::builtin();
    let corpus = Corpus::parse("0102\n01\n").unwrap();
    let err = aggregate(&corpus, &registry, &SearchOptions::new(1)).unwrap_err();
    assert!(matches!(
        err,
        SearchError::IndexOutOfRange {
            index: 1,
            len: 1,
            block: 1
        }
    ));
}

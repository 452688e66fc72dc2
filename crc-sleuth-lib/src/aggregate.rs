//! Corpus-wide frequency counting, ranking and report filtering.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use serde::Serialize;

use crate::corpus::Corpus;
use crate::error::SearchError;
use crate::hypothesis::{Hypothesis, evaluate_block};
use crate::registry::AlgorithmRegistry;

/// Parameters for a search at one checksum index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Byte offset holding the checksum under test.
    pub checksum_index: usize,
    /// Minimum number of blocks a hypothesis must hold for. 0 reports everything.
    pub threshold: usize,
    /// Drop hypotheses whose range is a single byte.
    pub skip_single_byte: bool,
}

impl SearchOptions {
    pub fn new(checksum_index: usize) -> Self {
        Self {
            checksum_index,
            ..Self::default()
        }
    }

    pub fn threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn skip_single_byte(mut self, skip: bool) -> Self {
        self.skip_single_byte = skip;
        self
    }
}

/// Number of blocks each hypothesis held for, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<(Hypothesis, usize)>,
    positions: HashMap<Hypothesis, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate every block of `corpus` at `checksum_index` and count matches.
    pub fn build(
        corpus: &Corpus,
        checksum_index: usize,
        registry: &AlgorithmRegistry,
    ) -> Result<Self, SearchError> {
        let mut table = Self::new();
        for (block_no, block) in corpus.blocks().iter().enumerate() {
            for hypothesis in evaluate_block(block, block_no, checksum_index, registry)? {
                table.record(hypothesis);
            }
        }
        log::debug!(
            "index {}: {} distinct hypotheses over {} blocks",
            checksum_index,
            table.len(),
            corpus.len()
        );
        Ok(table)
    }

    /// Add one occurrence of `hypothesis`.
    pub fn record(&mut self, hypothesis: Hypothesis) {
        match self.positions.entry(hypothesis) {
            Entry::Occupied(pos) => self.entries[*pos.get()].1 += 1,
            Entry::Vacant(slot) => {
                slot.insert(self.entries.len());
                self.entries.push((hypothesis, 1));
            }
        }
    }

    pub fn count(&self, hypothesis: &Hypothesis) -> usize {
        self.positions
            .get(hypothesis)
            .map_or(0, |&pos| self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by count, highest first.
    ///
    /// Equal counts are ordered by the length of the rendered hypothesis,
    /// shortest first, then by first appearance. The tie-break carries no
    /// meaning beyond making output reproducible.
    pub fn ranked(&self, registry: &AlgorithmRegistry) -> Vec<(Hypothesis, usize)> {
        let mut ranked: Vec<(usize, Hypothesis, usize)> = self
            .entries
            .iter()
            .enumerate()
            .map(|(pos, &(h, count))| (pos, h, count))
            .collect();
        ranked.sort_by_cached_key(|&(pos, h, count)| {
            (Reverse(count), h.render(registry).len(), pos)
        });
        ranked.into_iter().map(|(_, h, count)| (h, count)).collect()
    }
}

/// One reported hypothesis with its block count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub index: usize,
    pub algorithm: String,
    pub negated: bool,
    pub start: usize,
    pub end: usize,
    pub count: usize,
}

impl ReportEntry {
    pub fn label(&self) -> String {
        if self.negated {
            format!("negation {}", self.algorithm)
        } else {
            self.algorithm.clone()
        }
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index:{} ({}, {}, {}): {}",
            self.index,
            self.label(),
            self.start,
            self.end,
            self.count
        )
    }
}

/// Ranked, filtered result for one checksum index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub checksum_index: usize,
    pub threshold: usize,
    pub blocks: usize,
    pub entries: Vec<ReportEntry>,
}

impl Report {
    /// Rank `table` and apply the report filters, in order: count below the
    /// threshold, range covering the checksum index, single-byte range.
    pub fn from_table(
        table: &FrequencyTable,
        registry: &AlgorithmRegistry,
        options: &SearchOptions,
        blocks: usize,
    ) -> Self {
        let entries = table
            .ranked(registry)
            .into_iter()
            .filter(|&(_, count)| count >= options.threshold)
            .filter(|(h, _)| !h.contains(options.checksum_index))
            .filter(|(h, _)| !(options.skip_single_byte && h.is_single_byte()))
            .map(|(h, count)| ReportEntry {
                index: options.checksum_index,
                algorithm: registry.name(h.algorithm).to_string(),
                negated: h.negated,
                start: h.start,
                end: h.end,
                count,
            })
            .collect();

        Self {
            checksum_index: options.checksum_index,
            threshold: options.threshold,
            blocks,
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Search the whole corpus at one checksum index.
pub fn aggregate(
    corpus: &Corpus,
    registry: &AlgorithmRegistry,
    options: &SearchOptions,
) -> Result<Report, SearchError> {
    let table = FrequencyTable::build(corpus, options.checksum_index, registry)?;
    Ok(Report::from_table(&table, registry, options, corpus.len()))
}

#[cfg(test)]
#[path = "tests/aggregate_tests.rs"]
mod tests;

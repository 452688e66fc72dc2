//! Index sweep: repeat the corpus search at every byte position.

use std::time::Instant;

use crate::aggregate::{Report, SearchOptions, aggregate};
use crate::corpus::Corpus;
use crate::error::SearchError;
use crate::registry::AlgorithmRegistry;

/// Options for [`sweep`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepOptions {
    /// Explicit threshold. `None` or `Some(0)` means the hypothesis must
    /// hold for every block.
    pub threshold: Option<usize>,
    pub skip_single_byte: bool,
}

impl SweepOptions {
    /// Threshold actually applied for a corpus of `blocks` blocks.
    pub fn effective_threshold(&self, blocks: usize) -> usize {
        match self.threshold {
            Some(n) if n > 0 => n,
            _ => blocks,
        }
    }
}

/// Run the search once per index in `0..corpus.width()`, handing each report
/// to `on_report` as soon as it is ready.
///
/// The first block sets the width. A narrower block later in the corpus fails
/// with [`SearchError::IndexOutOfRange`] once the sweep reaches past its end.
pub fn sweep_with<F>(
    corpus: &Corpus,
    registry: &AlgorithmRegistry,
    options: &SweepOptions,
    mut on_report: F,
) -> Result<(), SearchError>
where
    F: FnMut(&Report),
{
    let width = corpus.width();
    let threshold = options.effective_threshold(corpus.len());

    if corpus.blocks().iter().any(|b| b.len() != width) {
        log::warn!("Blocks differ in width; sweeping {} indices from the first block", width);
    }
    log::debug!(
        "Sweeping {} indices over {} blocks with {} algorithms (threshold {})",
        width,
        corpus.len(),
        registry.len(),
        threshold
    );

    for index in 0..width {
        let started = Instant::now();
        let search = SearchOptions::new(index)
            .threshold(threshold)
            .skip_single_byte(options.skip_single_byte);
        let report = aggregate(corpus, registry, &search)?;
        log::debug!(
            "index {}: {} entries in {:.1?}",
            index,
            report.len(),
            started.elapsed()
        );
        on_report(&report);
    }
    Ok(())
}

/// Collecting form of [`sweep_with`]: one report per index.
pub fn sweep(
    corpus: &Corpus,
    registry: &AlgorithmRegistry,
    options: &SweepOptions,
) -> Result<Vec<Report>, SearchError> {
    let mut reports = Vec::with_capacity(corpus.width());
    sweep_with(corpus, registry, options, |report| reports.push(report.clone()))?;
    Ok(reports)
}

//! Checksum reverse-engineering engine.
//!
//! Given a corpus of equal-width binary records, each carrying a one-byte
//! checksum at some offset, enumerate every (algorithm, start, end)
//! hypothesis and report the ones that hold across the corpus.
//!
//! ```
//! use crc_sleuth_lib::{AlgorithmRegistry, Corpus, SearchOptions, aggregate};
//!
//! let corpus = Corpus::parse("0102030a\n10203005\n").unwrap();
//! let registry = AlgorithmRegistry::builtin();
//! let report = aggregate(&corpus, &registry, &SearchOptions::new(3).threshold(2)).unwrap();
//! assert!(report.entries.iter().all(|e| e.count == 2));
//! ```

pub mod aggregate;
pub mod corpus;
pub mod error;
pub mod hypothesis;
pub mod registry;
pub mod settings;
pub mod sweep;

pub use aggregate::{FrequencyTable, Report, ReportEntry, SearchOptions, aggregate};
pub use corpus::{Block, Corpus};
pub use error::SearchError;
pub use hypothesis::{Hypothesis, evaluate_block};
pub use registry::{AlgorithmId, AlgorithmRegistry};
pub use settings::{SearchSettings, Settings, settings_path};
pub use sweep::{SweepOptions, sweep, sweep_with};

// Re-export the algorithm catalogue so frontends need only this crate.
pub use crc_sleuth_core::{Algorithm, AlgorithmParseError, ByteChecksum, FnChecksum};

use thiserror::Error;

use crc_sleuth_core::AlgorithmParseError;

/// Errors that can occur while loading a corpus or running a search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// I/O error while reading the corpus or settings file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An input line is not valid hex
    #[error("Invalid hex on line {line}: {source}")]
    InvalidHex {
        line: usize,
        #[source]
        source: hex::FromHexError,
    },

    /// The checksum index does not fit inside a block
    #[error("Checksum index {index} out of range for block {block} ({len} bytes)")]
    IndexOutOfRange {
        index: usize,
        len: usize,
        block: usize,
    },

    /// An algorithm name is not in the registry
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// A search was requested with no algorithms registered
    #[error("No algorithms selected")]
    EmptyRegistry,

    /// The settings file could not be parsed
    #[error("Settings error: {0}")]
    Settings(String),
}

impl SearchError {
    pub fn unknown_algorithm(name: impl Into<String>) -> Self {
        Self::UnknownAlgorithm(name.into())
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}

impl From<AlgorithmParseError> for SearchError {
    fn from(e: AlgorithmParseError) -> Self {
        Self::UnknownAlgorithm(e.0)
    }
}

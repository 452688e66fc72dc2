//! Corpus loading: one hex-encoded block per line.
//!
//! Loading is all-or-nothing. A single malformed line fails the whole corpus,
//! because silently dropping a block would skew every frequency count.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::SearchError;

/// One decoded record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    bytes: Vec<u8>,
}

impl Block {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Decode a block from hex text. Surrounding whitespace is ignored.
    ///
    /// `line` is the 1-based line number reported on failure.
    pub fn from_hex(text: &str, line: usize) -> Result<Self, SearchError> {
        let bytes =
            hex::decode(text.trim()).map_err(|source| SearchError::InvalidHex { line, source })?;
        Ok(Self { bytes })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for Block {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

/// An ordered collection of blocks, read fully before any search starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    blocks: Vec<Block>,
}

impl Corpus {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Read a corpus file.
    pub fn load(path: &Path) -> Result<Self, SearchError> {
        let file = File::open(path)?;
        let corpus = Self::from_reader(BufReader::new(file))?;
        log::debug!(
            "Loaded {} blocks from {} (width {})",
            corpus.len(),
            path.display(),
            corpus.width()
        );
        Ok(corpus)
    }

    /// Read a corpus from any line-oriented source.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, SearchError> {
        let mut blocks = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                log::warn!("Skipping blank line {}", i + 1);
                continue;
            }
            blocks.push(Block::from_hex(&line, i + 1)?);
        }
        Ok(Self { blocks })
    }

    /// Parse a corpus held in memory.
    pub fn parse(text: &str) -> Result<Self, SearchError> {
        Self::from_reader(text.as_bytes())
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Record width used by the index sweep: the length of the first block.
    pub fn width(&self) -> usize {
        self.blocks.first().map_or(0, Block::len)
    }
}

impl FromIterator<Block> for Corpus {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

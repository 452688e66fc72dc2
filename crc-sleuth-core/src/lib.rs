//! Checksum algorithm catalogue for crc-sleuth.
//!
//! Everything here maps a byte slice to a single byte. The search engine in
//! `crc-sleuth-lib` only sees the [`ByteChecksum`] trait, so algorithms
//! outside the built-in [`Algorithm`] set can be plugged in without touching it.

pub mod algorithm;
pub mod checksum;

pub use algorithm::{Algorithm, AlgorithmParseError};

/// A named, pure function from a byte sequence to one checksum byte.
///
/// Implementations must not keep state between calls: the search invokes
/// them many times per block, in no particular order.
pub trait ByteChecksum: Send + Sync {
    /// Name shown in reports. Must be unique within a registry.
    fn name(&self) -> &str;

    /// Compute the checksum byte for `data`.
    fn compute(&self, data: &[u8]) -> u8;
}

/// Adapter that turns a plain function into a [`ByteChecksum`].
///
/// ```
/// use crc_sleuth_core::{ByteChecksum, FnChecksum};
///
/// let first = FnChecksum::new("first_byte", |data| data[0]);
/// assert_eq!(first.compute(&[0x42, 0x00]), 0x42);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnChecksum {
    name: &'static str,
    func: fn(&[u8]) -> u8,
}

impl FnChecksum {
    pub const fn new(name: &'static str, func: fn(&[u8]) -> u8) -> Self {
        Self { name, func }
    }
}

impl ByteChecksum for FnChecksum {
    fn name(&self) -> &str {
        self.name
    }

    fn compute(&self, data: &[u8]) -> u8 {
        (self.func)(data)
    }
}

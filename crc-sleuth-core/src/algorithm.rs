use crate::ByteChecksum;
use crate::checksum;

/// Built-in single-byte checksum algorithms.
///
/// This enum is the closed catalogue the search draws from: each variant has
/// a canonical name, a handful of accepted aliases, and a pure function from
/// a byte slice to one output byte. Algorithms with a wider natural output are
/// narrowed to their low 8 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Sum8,
    Xor8,
    Crc16Ccitt,
    Lrc,
    Fletcher16,
    Adler32,
    Crc32,
    Crc8,
    Crc16Iso14443,
    Crc16Xmodem,
    Mod11,
    Md5Derived,
    Sha1Derived,
    Sha256Derived,
}

/// All algorithm variants in registration order.
const ALL_ALGORITHMS: &[Algorithm] = &[
    Algorithm::Sum8,
    Algorithm::Xor8,
    Algorithm::Crc16Ccitt,
    Algorithm::Lrc,
    Algorithm::Fletcher16,
    Algorithm::Adler32,
    Algorithm::Crc32,
    Algorithm::Crc8,
    Algorithm::Crc16Iso14443,
    Algorithm::Crc16Xmodem,
    Algorithm::Mod11,
    Algorithm::Md5Derived,
    Algorithm::Sha1Derived,
    Algorithm::Sha256Derived,
];

impl Algorithm {
    /// Canonical name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sum8 => "sum8",
            Self::Xor8 => "xor8",
            Self::Crc16Ccitt => "crc16_ccitt",
            Self::Lrc => "lrc",
            Self::Fletcher16 => "fletcher16",
            Self::Adler32 => "adler32",
            Self::Crc32 => "crc32",
            Self::Crc8 => "crc8",
            Self::Crc16Iso14443 => "crc16_iso14443",
            Self::Crc16Xmodem => "crc16_xmodem",
            Self::Mod11 => "mod11",
            Self::Md5Derived => "md5_derived",
            Self::Sha1Derived => "sha1_derived",
            Self::Sha256Derived => "sha256_derived",
        }
    }

    /// Alternative names accepted when parsing (lowercase).
    ///
    /// Includes the function names older versions of the tool printed in
    /// their reports.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Sum8 => &["sum", "checksum8", "cumulative_sum"],
            Self::Xor8 => &["xor", "bcc", "calculate_xor_checksum"],
            Self::Crc16Ccitt => &["crc16", "crc16_ccitt_false"],
            Self::Lrc => &["calculate_lrc"],
            Self::Fletcher16 => &["fletcher"],
            Self::Adler32 => &["adler"],
            Self::Crc32 => &["crc32_iso_hdlc"],
            Self::Crc8 => &["crc8_smbus"],
            Self::Crc16Iso14443 => &["crc16_mcrf4xx"],
            Self::Crc16Xmodem => &["xmodem"],
            Self::Mod11 => &["mod11_check"],
            Self::Md5Derived => &["md5", "md5_checksum"],
            Self::Sha1Derived => &["sha1", "calculate_sha1"],
            Self::Sha256Derived => &["sha256", "calculate_sha256"],
        }
    }

    /// Compute this algorithm over `data`, narrowed to one byte.
    pub fn compute(&self, data: &[u8]) -> u8 {
        match self {
            Self::Sum8 => checksum::sum8(data),
            Self::Xor8 => checksum::xor8(data),
            Self::Crc16Ccitt => checksum::crc16_ccitt(data) as u8,
            Self::Lrc => checksum::lrc(data),
            Self::Fletcher16 => checksum::fletcher16(data) as u8,
            Self::Adler32 => checksum::adler32(data) as u8,
            Self::Crc32 => checksum::crc32(data) as u8,
            Self::Crc8 => checksum::crc8(data),
            Self::Crc16Iso14443 => checksum::crc16_iso14443(data) as u8,
            Self::Crc16Xmodem => checksum::crc16_xmodem(data) as u8,
            Self::Mod11 => checksum::mod11(data),
            Self::Md5Derived => checksum::md5_prefix(data) as u8,
            Self::Sha1Derived => checksum::sha1_prefix(data) as u8,
            Self::Sha256Derived => checksum::sha256_prefix(data) as u8,
        }
    }

    /// All 14 built-in algorithms.
    pub fn all() -> &'static [Algorithm] {
        ALL_ALGORITHMS
    }
}

impl ByteChecksum for Algorithm {
    fn name(&self) -> &str {
        Algorithm::name(self)
    }

    fn compute(&self, data: &[u8]) -> u8 {
        Algorithm::compute(self, data)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a string cannot be parsed into an `Algorithm`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm: '{0}'")]
pub struct AlgorithmParseError(pub String);

impl std::str::FromStr for Algorithm {
    type Err = AlgorithmParseError;

    /// Parse an algorithm from its canonical name or any alias
    /// (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_ALGORITHMS
            .iter()
            .copied()
            .find(|a| a.name() == lower || a.aliases().contains(&lower.as_str()))
            .ok_or_else(|| AlgorithmParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/algorithm_tests.rs"]
mod tests;

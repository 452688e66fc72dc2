//! Checksum primitives.
//!
//! Each function computes its algorithm at natural width. Narrowing to the
//! single byte the search compares against happens in [`crate::Algorithm`].

use sha1::Digest;

/// Arithmetic sum of all bytes, mod 256.
pub fn sum8(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}

/// Bytewise XOR of all bytes.
pub fn xor8(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// Longitudinal Redundancy Check: two's complement of the 8-bit sum.
pub fn lrc(data: &[u8]) -> u8 {
    (sum8(data) ^ 0xFF).wrapping_add(1)
}

/// Generic MSB-first CRC-8.
pub fn crc8_with(data: &[u8], poly: u8, init: u8) -> u8 {
    let mut crc = init;
    for &byte in data {
        crc ^= byte;
        for _ in 0..8 {
            if crc & 0x80 != 0 {
                crc = (crc << 1) ^ poly;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// CRC-8 with polynomial 0x07 and initial value 0x00.
pub fn crc8(data: &[u8]) -> u8 {
    crc8_with(data, 0x07, 0x00)
}

/// MSB-first CRC-16 shared by the CCITT and XMODEM variants.
fn crc16_msb(data: &[u8], poly: u16, init: u16) -> u16 {
    let mut crc = init;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ poly;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// CRC-16/CCITT-FALSE
/// Polynomial: 0x1021, Init: 0xFFFF, MSB first
pub fn crc16_ccitt(data: &[u8]) -> u16 {
    crc16_msb(data, 0x1021, 0xFFFF)
}

/// CRC-16/XMODEM
/// Polynomial: 0x1021, Init: 0x0000, MSB first
pub fn crc16_xmodem(data: &[u8]) -> u16 {
    crc16_msb(data, 0x1021, 0x0000)
}

/// CRC-16 as used by ISO/IEC 14443 readers
/// Polynomial: 0x8408 (reflected 0x1021), Init: 0xFFFF, LSB first, no final XOR
pub fn crc16_iso14443(data: &[u8]) -> u16 {
    let mut crc: u16 = 0xFFFF;
    for &byte in data {
        crc ^= byte as u16;
        for _ in 0..8 {
            if crc & 0x0001 != 0 {
                crc = (crc >> 1) ^ 0x8408;
            } else {
                crc >>= 1;
            }
        }
    }
    crc
}

/// Fletcher-16, returned as `(sum2 << 8) | sum1`.
pub fn fletcher16(data: &[u8]) -> u16 {
    let mut sum1: u16 = 0;
    let mut sum2: u16 = 0;
    for &byte in data {
        sum1 = (sum1 + byte as u16) % 255;
        sum2 = (sum2 + sum1) % 255;
    }
    (sum2 << 8) | sum1
}

const MOD_ADLER: u32 = 65521;

/// Adler-32.
pub fn adler32(data: &[u8]) -> u32 {
    let mut a: u32 = 1;
    let mut b: u32 = 0;
    for &byte in data {
        a = (a + byte as u32) % MOD_ADLER;
        b = (b + a) % MOD_ADLER;
    }
    (b << 16) | a
}

/// CRC-32 (ISO-HDLC, reflected).
pub fn crc32(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}

/// Weight table for [`mod11`]. Not taken from any published standard.
pub const MOD11_WEIGHTS: [u32; 12] = [2, 3, 4, 5, 6, 7, 2, 3, 4, 5, 6, 7];

/// Weighted sum of the first 12 bytes, mod 11. Later bytes are ignored.
pub fn mod11(data: &[u8]) -> u8 {
    let total: u32 = data
        .iter()
        .zip(MOD11_WEIGHTS.iter())
        .map(|(&b, &w)| b as u32 * w)
        .sum();
    (total % 11) as u8
}

/// First four digest bytes as a big-endian integer.
fn digest_prefix(digest: &[u8]) -> u32 {
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// MD5 digest prefix.
pub fn md5_prefix(data: &[u8]) -> u32 {
    digest_prefix(&md5::compute(data).0)
}

/// SHA-1 digest prefix.
pub fn sha1_prefix(data: &[u8]) -> u32 {
    digest_prefix(&sha1::Sha1::digest(data))
}

/// SHA-256 digest prefix.
pub fn sha256_prefix(data: &[u8]) -> u32 {
    digest_prefix(&sha2::Sha256::digest(data))
}

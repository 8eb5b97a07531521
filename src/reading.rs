//! Conversion result decoding.

use crate::config::{Config, SampleRate};
use crate::register;

/// Longest read made from the device: two data bytes and the echoed
/// configuration register.
pub(crate) const MAX_READ_LEN: usize = 3;

/// A conversion result read together with the echoed configuration register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Signed output code, at the resolution of the last configuration written.
    pub value: i16,
    /// True if this result had not been read before.
    ///
    /// In one-shot mode this becomes true once the requested conversion finishes.
    pub is_fresh: bool,
    /// Configuration register as reported by the device.
    ///
    /// Its `ready` field is the raw RDY bit, which is the inverse of `is_fresh`.
    pub config: Config,
}

impl Reading {
    /// Decode a three-byte read (data high, data low, configuration).
    pub(crate) fn from_buffer(buf: &[u8; MAX_READ_LEN], rate: SampleRate) -> Self {
        let config = register::decode(buf[2]);
        Self {
            value: decode_output_code([buf[0], buf[1]], rate),
            is_fresh: !config.ready,
            config,
        }
    }
}

/// Interpret the two data bytes of a result at the resolution of `rate`.
///
/// The device repeats the sign bit above the result, but only the low
/// `rate.resolution_bits()` bits are used here.
pub fn decode_output_code(data: [u8; 2], rate: SampleRate) -> i16 {
    let bits = rate.resolution_bits();
    let mask = u16::MAX >> (16 - bits);
    sign_extend(u16::from_be_bytes(data) & mask, bits)
}

/// Reinterpret the low `bits` bits of `value` as a two's complement number.
///
/// Returns `value` if it is below `2^(bits-1)`, otherwise `value - 2^bits`.
///
/// ```
/// # use mcp342x::sign_extend;
/// assert_eq!(sign_extend(2047, 12), 2047);
/// assert_eq!(sign_extend(2048, 12), -2048);
/// assert_eq!(sign_extend(0xFFFF, 16), -1);
/// ```
pub fn sign_extend(value: u16, bits: u8) -> i16 {
    debug_assert!((1..=16).contains(&bits), "Width must be 1 to 16 bits.");
    let shift = 16 - u32::from(bits);
    ((value << shift) as i16) >> shift
}

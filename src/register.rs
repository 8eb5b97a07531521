//! Configuration register bit layout.
//!
//! | Bit   | Name    | Meaning                                                     |
//! | :---  | :---    | :---                                                        |
//! | 7     | RDY     | Write: 1 starts a one-shot conversion. Read: 0 if the result is new. |
//! | 6-5   | C1-C0   | Channel selection, 0 to 3.                                  |
//! | 4     | O/C     | 1 for continuous conversions, 0 for one-shot.               |
//! | 3-2   | S1-S0   | Sample rate: 00 = 240 SPS, 01 = 60 SPS, 10 = 15 SPS.        |
//! | 1-0   | G1-G0   | PGA gain: 00 = x1, 01 = x2, 10 = x4, 11 = x8.               |
//!
//! The two-channel MCP3426 and MCP3427 ignore C1, so channels 2 and 3 read as
//! channels 0 and 1 there. The driver clears C1 itself for those parts.
//!
//! # Datasheet
//!
//! See section 5.2 and register 5-1.

use core::ops::RangeInclusive;

use bit_field::BitField;

use crate::Variant;
use crate::config::{Config, ConversionMode, Gain, SampleRate};

/// Ready / start conversion bit.
pub const READY_BIT: usize = 7;
/// Channel selection bits.
pub const CHANNEL_BITS: RangeInclusive<usize> = 5..=6;
/// Conversion mode bit.
pub const MODE_BIT: usize = 4;
/// Sample rate selection bits.
pub const RATE_BITS: RangeInclusive<usize> = 2..=3;
/// PGA gain selection bits.
pub const GAIN_BITS: RangeInclusive<usize> = 0..=1;

/// Pack the settings into the configuration byte for the given chip variant.
pub fn encode(config: &Config, variant: Variant) -> u8 {
    let mut byte = 0u8;
    byte.set_bit(READY_BIT, config.ready)
        .set_bits(CHANNEL_BITS, variant.wrap_channel(config.channel))
        .set_bit(MODE_BIT, config.mode.into())
        .set_bits(RATE_BITS, config.rate.code())
        .set_bits(GAIN_BITS, config.gain.into());
    byte
}

/// Unpack a configuration byte echoed by the device.
///
/// The returned `ready` field holds the RDY bit as read, which is set when the
/// accompanying result has already been read (or no conversion has completed).
/// The 18-bit rate code `11` of the related MCP3421 family decodes as 15 SPS.
pub fn decode(byte: u8) -> Config {
    Config {
        mode: ConversionMode::from(byte.get_bit(MODE_BIT)),
        ready: byte.get_bit(READY_BIT),
        channel: byte.get_bits(CHANNEL_BITS),
        rate: SampleRate::from_code(byte.get_bits(RATE_BITS)),
        gain: Gain::from(byte.get_bits(GAIN_BITS)),
    }
}

use core::ops::RangeInclusive;

/// Default 7-bit I2C address (`0b1101_000`) of all parts in the family.
pub const DEFAULT_ADDRESS: u8 = 0x68;

/// 7-bit I2C addresses that an MCP342x can respond to.
///
/// The upper four bits are fixed at `1101`. The lower three are set by the factory
/// on the MCP3426, or by the Adr0 and Adr1 pins on the MCP3427 and MCP3428.
pub const ADDRESS_RANGE: RangeInclusive<u8> = 0x68..=0x6F;

/// Supported parts of the MCP342x family.
///
/// The parts share a register map and differ in their number of input channels
/// and address pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Variant {
    /// Two differential inputs, no address pins.
    Mcp3426,
    /// Two differential inputs, two address pins.
    Mcp3427,
    /// Four differential inputs, two address pins.
    Mcp3428,
}

impl Variant {
    /// Number of input channels on this part.
    pub fn channel_count(self) -> u8 {
        match self {
            Variant::Mcp3426 | Variant::Mcp3427 => 2,
            Variant::Mcp3428 => 4,
        }
    }

    /// Reduce a channel number to one present on this part.
    ///
    /// The two-channel parts ignore the upper channel bit, so channel 2 behaves as
    /// channel 0 and channel 3 as channel 1.
    pub fn wrap_channel(self, channel: u8) -> u8 {
        channel % self.channel_count()
    }
}

/// Whether `address` is a valid 7-bit address for an MCP342x.
pub fn is_valid_address(address: u8) -> bool {
    ADDRESS_RANGE.contains(&address)
}

use crate::adc::ConversionArgs;
use crate::util;

use clap::{Parser, ValueEnum};

/// CLI for the MCP3426/7/8 analog-to-digital converters
///
/// Talks to a single MCP342x on a Linux I2C bus (/dev/i2c-N). Each command writes
/// the configuration register built from the conversion options, then (except for
/// encode) reads back a result.
///
/// Results are printed as signed output codes at the selected resolution. Codes
/// are not converted to voltages.
#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct Cli {
    /// I2C bus number
    #[arg(short, long, default_value_t = 1)]
    pub(crate) bus: u8,
    /// Device 7-bit address in hexadecimal (0x68 to 0x6F)
    #[arg(short, long, default_value = "0x68", value_parser = util::u8_from_hex)]
    pub(crate) address: u8,
    /// Which part of the family is attached
    #[arg(long, default_value = "mcp3428")]
    pub(crate) variant: Variant,
    /// I2C bus clock speed the bus has been set up with
    #[arg(long, default_value = "fast")]
    pub(crate) speed: I2cSpeed,
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Parser)]
pub(crate) enum Commands {
    /// Configure the device, wait for one conversion, and print the result.
    Read(ConversionArgs),
    /// Configure the device and print the result with the echoed register.
    Status(ConversionArgs),
    /// Print the configuration byte for the given options without using the bus.
    Encode(ConversionArgs),
}

/// Part number.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Variant {
    /// Two channels, fixed address
    Mcp3426,
    /// Two channels, address pins
    Mcp3427,
    /// Four channels, address pins
    Mcp3428,
}

impl From<Variant> for mcp342x::Variant {
    fn from(value: Variant) -> mcp342x::Variant {
        match value {
            Variant::Mcp3426 => mcp342x::Variant::Mcp3426,
            Variant::Mcp3427 => mcp342x::Variant::Mcp3427,
            Variant::Mcp3428 => mcp342x::Variant::Mcp3428,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum I2cSpeed {
    /// 100kbps "standard" mode
    Standard,
    /// 400kbps "fast" mode
    Fast,
    /// 3.4Mbps "high-speed" mode
    High,
}

impl From<I2cSpeed> for mcp342x::i2c::I2cSpeed {
    fn from(value: I2cSpeed) -> mcp342x::i2c::I2cSpeed {
        match value {
            I2cSpeed::Standard => mcp342x::i2c::I2cSpeed::Standard_100kbps,
            I2cSpeed::Fast => mcp342x::i2c::I2cSpeed::Fast_400kbps,
            I2cSpeed::High => mcp342x::i2c::I2cSpeed::HighSpeed_3400kbps,
        }
    }
}

//! Configuration register settings.
//!
//! The MCP342x has a single 8-bit configuration register. [`Config`] is the typed
//! form of that register, and is what the driver stores as its record of the last
//! configuration written to the device. See [`crate::register`] for the bit layout.

use core::time::Duration;

use crate::Variant;

/// Conversion mode (the O/C bit).
///
/// # Datasheet
///
/// See section 5.1 for a description of the two modes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionMode {
    /// The device performs conversions continuously.
    ///
    /// Each read returns the most recent result.
    #[default]
    Continuous,
    /// The device performs a single conversion when the ready bit is written as 1,
    /// then enters a low-power standby mode until the next request.
    OneShot,
}

impl From<bool> for ConversionMode {
    fn from(value: bool) -> Self {
        if value { Self::Continuous } else { Self::OneShot }
    }
}

impl From<ConversionMode> for bool {
    fn from(value: ConversionMode) -> Self {
        match value {
            ConversionMode::Continuous => true,
            ConversionMode::OneShot => false,
        }
    }
}

/// Sample rate selection (the S1-S0 bits).
///
/// The MCP342x trades conversion speed for resolution, so the sample rate also
/// fixes the width of the conversion result.
///
/// | Variant        | Rate code | Samples per second | Resolution |
/// | :---           | :---      | :---               | :---       |
/// | [`Sps240`]     | 0         | 240                | 12 bits    |
/// | [`Sps60`]      | 1         | 60                 | 14 bits    |
/// | [`Sps15`]      | 2         | 15                 | 16 bits    |
///
/// [`Sps240`]: SampleRate::Sps240
/// [`Sps60`]: SampleRate::Sps60
/// [`Sps15`]: SampleRate::Sps15
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleRate {
    /// 240 samples per second, 12-bit results.
    Sps240,
    /// 60 samples per second, 14-bit results.
    Sps60,
    /// 15 samples per second, 16-bit results.
    #[default]
    Sps15,
}

impl SampleRate {
    /// Sample rate from its rate code (`0..=2`).
    ///
    /// Codes above 2 select 15 SPS (16 bits), the highest resolution available
    /// on the MCP3426/7/8.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Sps240,
            1 => Self::Sps60,
            _ => Self::Sps15,
        }
    }

    /// The rate code (`0..=2`), as written to the S1-S0 bits.
    pub fn code(self) -> u8 {
        match self {
            Self::Sps240 => 0b00,
            Self::Sps60 => 0b01,
            Self::Sps15 => 0b10,
        }
    }

    /// Width in bits of conversion results at this sample rate.
    pub fn resolution_bits(self) -> u8 {
        match self {
            Self::Sps240 => 12,
            Self::Sps60 => 14,
            Self::Sps15 => 16,
        }
    }

    /// Smallest result the device can report at this sample rate.
    pub fn min_code(self) -> i16 {
        (-1i32 << (self.resolution_bits() - 1)) as i16
    }

    /// Largest result the device can report at this sample rate.
    pub fn max_code(self) -> i16 {
        ((1i32 << (self.resolution_bits() - 1)) - 1) as i16
    }

    /// Number of bytes read from the device for a plain result read.
    ///
    /// At 16 bits the device's echoed configuration byte is read along with the two
    /// data bytes.
    pub fn read_len(self) -> usize {
        match self {
            Self::Sps240 | Self::Sps60 => 2,
            Self::Sps15 => 3,
        }
    }

    /// Samples per second.
    pub fn samples_per_second(self) -> u16 {
        match self {
            Self::Sps240 => 240,
            Self::Sps60 => 60,
            Self::Sps15 => 15,
        }
    }

    /// Nominal time taken by a single conversion at this rate.
    ///
    /// In one-shot mode this is how long to wait after starting a conversion
    /// before the result is ready.
    pub fn conversion_time(self) -> Duration {
        match self {
            Self::Sps240 => Duration::from_micros(4_167),
            Self::Sps60 => Duration::from_micros(16_667),
            Self::Sps15 => Duration::from_micros(66_667),
        }
    }
}

/// Programmable gain amplifier setting (the G1-G0 bits).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gain {
    /// Unity gain.
    #[default]
    X1,
    /// Gain of 2.
    X2,
    /// Gain of 4.
    X4,
    /// Gain of 8.
    X8,
}

impl Gain {
    /// Gain from its multiplication factor.
    ///
    /// Factors other than 1, 2, 4 and 8 fall back to unity gain.
    ///
    /// ```
    /// # use mcp342x::Gain;
    /// assert_eq!(Gain::from_factor(4), Gain::X4);
    /// assert_eq!(Gain::from_factor(3), Gain::X1);
    /// ```
    pub fn from_factor(factor: u8) -> Self {
        match factor {
            2 => Self::X2,
            4 => Self::X4,
            8 => Self::X8,
            _ => Self::X1,
        }
    }

    /// The multiplication factor of this gain setting.
    pub fn factor(self) -> u8 {
        match self {
            Self::X1 => 1,
            Self::X2 => 2,
            Self::X4 => 4,
            Self::X8 => 8,
        }
    }
}

/// Gain from the two G1-G0 register bits (not the gain factor).
impl From<u8> for Gain {
    fn from(value: u8) -> Self {
        assert!(value <= 0b11, "Incorrect use of the from constructor.");
        match value {
            0b00 => Self::X1,
            0b01 => Self::X2,
            0b10 => Self::X4,
            0b11 => Self::X8,
            _ => unreachable!(),
        }
    }
}

/// The two G1-G0 register bits for the gain.
impl From<Gain> for u8 {
    fn from(value: Gain) -> Self {
        match value {
            Gain::X1 => 0b00,
            Gain::X2 => 0b01,
            Gain::X4 => 0b10,
            Gain::X8 => 0b11,
        }
    }
}

/// Contents of the configuration register.
///
/// This offers a builder-like interface, starting from the defaults of [`Config::new`]:
///
/// ```
/// # use mcp342x::{Config, ConversionMode, Gain, SampleRate};
/// let config = Config::new()
///     .with_mode(ConversionMode::OneShot)
///     .with_ready(true)
///     .with_channel(2)
///     .with_rate(SampleRate::Sps240)
///     .with_gain(Gain::X8);
/// assert_eq!(config.rate.resolution_bits(), 12);
/// ```
///
/// Any channel number is accepted here. It is reduced to the channels available on
/// the chip when the register is encoded (see [`Config::to_register`]).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Continuous or one-shot conversions.
    pub mode: ConversionMode,
    /// Ready bit.
    ///
    /// In one-shot mode, writing this as `true` starts a new conversion. It has no
    /// effect in continuous mode.
    pub ready: bool,
    /// Input channel, counting from 0.
    pub channel: u8,
    /// Sample rate, which also selects the resolution of results.
    pub rate: SampleRate,
    /// PGA gain.
    pub gain: Gain,
}

impl Config {
    /// Power-on defaults of this driver: continuous conversions of channel 0 at
    /// 15 SPS (16 bits) with unity gain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the conversion mode.
    pub fn with_mode(mut self, mode: ConversionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the ready bit.
    pub fn with_ready(mut self, ready: bool) -> Self {
        self.ready = ready;
        self
    }

    /// Set the input channel.
    pub fn with_channel(mut self, channel: u8) -> Self {
        self.channel = channel;
        self
    }

    /// Set the sample rate and resolution.
    pub fn with_rate(mut self, rate: SampleRate) -> Self {
        self.rate = rate;
        self
    }

    /// Set the PGA gain.
    pub fn with_gain(mut self, gain: Gain) -> Self {
        self.gain = gain;
        self
    }

    /// The configuration byte written to the given chip variant for these settings.
    pub fn to_register(&self, variant: Variant) -> u8 {
        crate::register::encode(self, variant)
    }

    /// Copy of these settings with the channel reduced to those on `variant`.
    pub(crate) fn normalized(mut self, variant: Variant) -> Self {
        self.channel = variant.wrap_channel(self.channel);
        self
    }
}

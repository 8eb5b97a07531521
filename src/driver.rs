use embedded_hal::i2c::ErrorType;

use crate::config::Config;
use crate::error::Error;
use crate::i2c::I2cSpeed;
use crate::reading::{MAX_READ_LEN, Reading, decode_output_code};
use crate::variant::{DEFAULT_ADDRESS, Variant, is_valid_address};

#[cfg(feature = "async")]
mod asynch;
mod blocking;

/// Driver for the MCP3426, MCP3427 and MCP3428.
///
/// # Quick start
///
/// Create the driver with [`Mcp342x::new`] for a chip at the default address of
/// `0x68`, or [`Mcp342x::with_address`] if its address pins are strapped
/// differently. Then write a [`Config`] with [`Mcp342x::configure`] and read results
/// with [`Mcp342x::read_raw`].
///
/// The driver takes ownership of the I2C bus. Use [`Mcp342x::release`] to get it
/// back, or pass in a shared bus device (such as those from `embedded-hal-bus`) if
/// other devices sit on the same bus.
///
/// # Resolution tracking
///
/// Conversion results do not carry their resolution, and the device cannot be
/// asked for it separately from a result. The driver keeps the last configuration
/// it successfully wrote and decodes every result at that configuration's
/// resolution. Until the first [`configure`](Mcp342x::configure) call, results are
/// decoded at the 16-bit resolution of [`Config::new`].
///
/// If the device was left at another resolution by an earlier program, configure
/// it before reading.
#[derive(Debug)]
pub struct Mcp342x<I2C> {
    /// Bus the device is attached to.
    i2c: I2C,
    /// Which part of the family this is.
    variant: Variant,
    /// 7-bit I2C address.
    address: u8,
    /// Bus clock speed, as reported by the caller.
    bus_speed: I2cSpeed,
    /// Last configuration written to the device.
    config: Config,
}

impl<I2C: ErrorType> Mcp342x<I2C> {
    ////////////////////////////////////////////////////////////////////////////////
    // Constructors
    ////////////////////////////////////////////////////////////////////////////////

    /// Create a driver for a chip at the default address (`0x68`).
    ///
    /// No bus traffic occurs until the first configure or read.
    pub fn new(i2c: I2C, variant: Variant) -> Self {
        Self {
            i2c,
            variant,
            address: DEFAULT_ADDRESS,
            bus_speed: I2cSpeed::default(),
            config: Config::new(),
        }
    }

    /// Create a driver for a chip at the given 7-bit address.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AddressOutOfRange`] if the address is outside `0x68..=0x6F`.
    pub fn with_address(
        i2c: I2C,
        variant: Variant,
        address: u8,
    ) -> Result<Self, Error<I2C::Error>> {
        if !is_valid_address(address) {
            return Err(Error::AddressOutOfRange(address));
        }
        Ok(Self {
            address,
            ..Self::new(i2c, variant)
        })
    }

    /// Record the clock speed that the bus has been set up with.
    ///
    /// This has no effect on bus traffic. The default is 400kbps.
    pub fn with_bus_speed(mut self, speed: I2cSpeed) -> Self {
        self.bus_speed = speed;
        self
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Accessors
    ////////////////////////////////////////////////////////////////////////////////

    /// Last configuration written to the device.
    ///
    /// The channel is as encoded, so channels 2 and 3 appear as 0 and 1 on the
    /// two-channel parts.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Width in bits of results returned by the next read.
    pub fn resolution_bits(&self) -> u8 {
        self.config.rate.resolution_bits()
    }

    /// The part this driver was created for.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// 7-bit I2C address of the device.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Bus clock speed given in [`Mcp342x::with_bus_speed`].
    pub fn bus_speed(&self) -> I2cSpeed {
        self.bus_speed
    }

    /// Destroy the driver and return the I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Helpers shared by the blocking and async methods
    ////////////////////////////////////////////////////////////////////////////////

    /// Channel-reduced copy of `config` and the byte to write for it.
    fn prepare(&self, config: Config) -> (Config, u8) {
        let config = config.normalized(self.variant);
        (config, config.to_register(self.variant))
    }

    /// Store the configuration once it has been written to the device.
    fn commit(&mut self, config: Config) {
        #[cfg(feature = "defmt")]
        if config.rate != self.config.rate {
            defmt::debug!(
                "MCP342x {=u8:#x}: resolution now {=u8} bits",
                self.address,
                config.rate.resolution_bits()
            );
        }
        self.config = config;
    }

    /// Decode the start of a plain read at the stored resolution.
    fn decode(&self, buf: &[u8; MAX_READ_LEN]) -> i16 {
        decode_output_code([buf[0], buf[1]], self.config.rate)
    }

    /// Decode a read that includes the configuration byte.
    fn decode_with_status(&self, buf: &[u8; MAX_READ_LEN]) -> Reading {
        Reading::from_buffer(buf, self.config.rate)
    }
}

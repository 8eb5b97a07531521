//! Async driver methods, for buses implementing the `embedded-hal-async` I2C trait.
//!
//! These behave exactly as their blocking counterparts in [`blocking`](super::blocking)
//! and share the same stored configuration.
use embedded_hal_async::i2c::I2c as AsyncI2c;

use super::Mcp342x;
use crate::config::Config;
use crate::error::Error;
use crate::reading::{MAX_READ_LEN, Reading};

impl<I2C: AsyncI2c> Mcp342x<I2C> {
    /// Write the configuration register.
    ///
    /// See [`Mcp342x::configure`].
    pub async fn configure_async(&mut self, config: Config) -> Result<(), Error<I2C::Error>> {
        let (config, byte) = self.prepare(config);
        #[cfg(feature = "defmt")]
        defmt::trace!("MCP342x {=u8:#x}: write config {=u8:#b}", self.address, byte);
        self.i2c.write(self.address, &[byte]).await?;
        self.commit(config);
        Ok(())
    }

    /// Read the latest conversion result.
    ///
    /// See [`Mcp342x::read_raw`].
    pub async fn read_raw_async(&mut self) -> Result<i16, Error<I2C::Error>> {
        let mut buf = [0u8; MAX_READ_LEN];
        let len = self.config.rate.read_len();
        self.i2c.read(self.address, &mut buf[..len]).await?;
        Ok(self.decode(&buf))
    }

    /// Read the latest conversion result and the configuration register.
    ///
    /// See [`Mcp342x::read_with_status`].
    pub async fn read_with_status_async(&mut self) -> Result<Reading, Error<I2C::Error>> {
        let mut buf = [0u8; MAX_READ_LEN];
        self.i2c.read(self.address, &mut buf).await?;
        Ok(self.decode_with_status(&buf))
    }
}

//! Blocking driver methods.
use embedded_hal::i2c::I2c;

use super::Mcp342x;
use crate::config::Config;
use crate::error::Error;
use crate::reading::{MAX_READ_LEN, Reading};

impl<I2C: I2c> Mcp342x<I2C> {
    /// Write the configuration register.
    ///
    /// The settings are packed into a single byte and sent in a one-byte write. Once
    /// the write succeeds, `config` becomes the driver's record of the device state,
    /// and the following reads are decoded at its resolution.
    ///
    /// Channel numbers are reduced to those present on the chip (channel 2 selects
    /// channel 0 on the two-channel parts, and so on). In one-shot mode, set
    /// [`Config::ready`] to start a conversion.
    ///
    /// # Errors
    ///
    /// [`Error::I2c`] if the write fails, in which case the stored configuration is
    /// left unchanged.
    ///
    /// # Datasheet
    ///
    /// See section 5.3.2 for the write format and register 5-1 for the register.
    pub fn configure(&mut self, config: Config) -> Result<(), Error<I2C::Error>> {
        let (config, byte) = self.prepare(config);
        #[cfg(feature = "defmt")]
        defmt::trace!("MCP342x {=u8:#x}: write config {=u8:#b}", self.address, byte);
        self.i2c.write(self.address, &[byte])?;
        self.commit(config);
        Ok(())
    }

    /// Read the latest conversion result.
    ///
    /// The result is sign-extended at the resolution of the last configuration
    /// written (16 bits if none has been), giving values in:
    ///
    /// | Sample rate | Resolution | Range             |
    /// | :---        | :---       | :---              |
    /// | 240 SPS     | 12 bits    | `-2048..=2047`    |
    /// | 60 SPS      | 14 bits    | `-8192..=8191`    |
    /// | 15 SPS      | 16 bits    | `-32768..=32767`  |
    ///
    /// Two bytes are read at 12 and 14 bits, three at 16 bits (the third being the
    /// configuration register, which is discarded here).
    ///
    /// # Errors
    ///
    /// [`Error::I2c`] if the read fails.
    ///
    /// # Datasheet
    ///
    /// See section 5.3.3 and table 5-3 for the output codes.
    pub fn read_raw(&mut self) -> Result<i16, Error<I2C::Error>> {
        let mut buf = [0u8; MAX_READ_LEN];
        let len = self.config.rate.read_len();
        self.i2c.read(self.address, &mut buf[..len])?;
        let value = self.decode(&buf);
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "MCP342x {=u8:#x}: read {=[u8]:#x} -> {=i16}",
            self.address,
            &buf[..len],
            value
        );
        Ok(value)
    }

    /// Read the latest conversion result and the configuration register.
    ///
    /// This always reads three bytes. The value is decoded exactly as by
    /// [`Mcp342x::read_raw`]. The returned [`Reading`] also says whether the result
    /// is new, which in one-shot mode tells you the requested conversion has
    /// finished.
    ///
    /// # Errors
    ///
    /// [`Error::I2c`] if the read fails.
    pub fn read_with_status(&mut self) -> Result<Reading, Error<I2C::Error>> {
        let mut buf = [0u8; MAX_READ_LEN];
        self.i2c.read(self.address, &mut buf)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("MCP342x {=u8:#x}: read {=[u8]:#x}", self.address, &buf[..]);
        Ok(self.decode_with_status(&buf))
    }
}

use core::fmt;

/// Wrapper for problems when communicating with the MCP342x.
///
/// `E` is the error type of the I2C bus implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The underlying I2C transfer failed.
    ///
    /// This covers a device that does not acknowledge its address, a bus timeout,
    /// or anything else reported by the bus implementation. Failed transfers are not
    /// retried by the driver.
    I2c(E),
    /// The given 7-bit address is not one an MCP342x can respond to.
    ///
    /// Valid addresses are `0x68..=0x6F`. See [`ADDRESS_RANGE`].
    ///
    /// [`ADDRESS_RANGE`]: crate::ADDRESS_RANGE
    AddressOutOfRange(u8),
}

#[doc(hidden)]
impl<E> From<E> for Error<E> {
    fn from(value: E) -> Self {
        Self::I2c(value)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C error: {e:?}"),
            Error::AddressOutOfRange(address) => {
                write!(f, "Address {address:#04x} is outside 0x68..=0x6F")
            }
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::I2c(e) => defmt::write!(f, "I2C error: {}", e),
            Error::AddressOutOfRange(address) => {
                defmt::write!(f, "Address {=u8:#x} is outside 0x68..=0x6F", address)
            }
        }
    }
}

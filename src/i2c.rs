//! I2C bus settings.

/// Clock speed of the I2C bus the device is attached to.
///
/// The MCP342x supports all three speeds. The driver does not configure the bus
/// itself. This records the speed the caller set up on its transport so that it
/// can be reported alongside the device.
#[allow(non_camel_case_types)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cSpeed {
    /// 100kbps ("Standard-mode")
    Standard_100kbps,
    /// 400kbps ("Fast-mode")
    #[default]
    Fast_400kbps,
    /// 3.4Mbps ("High-speed mode")
    HighSpeed_3400kbps,
}

impl I2cSpeed {
    /// Bus clock frequency in hertz.
    pub fn hertz(&self) -> u32 {
        match self {
            I2cSpeed::Standard_100kbps => 100_000,
            I2cSpeed::Fast_400kbps => 400_000,
            I2cSpeed::HighSpeed_3400kbps => 3_400_000,
        }
    }
}

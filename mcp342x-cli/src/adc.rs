use std::thread::sleep;

use clap::{Args, ValueEnum};
use embedded_hal::i2c::I2c;
use mcp342x::{Config, ConversionMode, Gain, Mcp342x, SampleRate};

/// Settings written to the configuration register.
#[derive(Debug, Args)]
pub(crate) struct ConversionArgs {
    /// Input channel, from 0.
    ///
    /// Channels 2 and 3 select channels 0 and 1 on the two-channel parts.
    #[arg(short, long, default_value_t = 0)]
    channel: u8,
    /// Sample rate, which also sets the resolution.
    #[arg(short, long, default_value = "16")]
    resolution: Resolution,
    /// PGA gain factor: 1, 2, 4 or 8.
    ///
    /// Any other value gives unity gain.
    #[arg(short, long, default_value_t = 1)]
    gain: u8,
    /// Use one-shot mode and start a single conversion.
    #[arg(long)]
    one_shot: bool,
}

impl ConversionArgs {
    pub(crate) fn to_config(&self) -> Config {
        let (mode, ready) = if self.one_shot {
            (ConversionMode::OneShot, true)
        } else {
            (ConversionMode::Continuous, false)
        };
        Config::new()
            .with_mode(mode)
            .with_ready(ready)
            .with_channel(self.channel)
            .with_rate(self.resolution.into())
            .with_gain(Gain::from_factor(self.gain))
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Resolution {
    /// 12 bits at 240 samples per second
    #[value(name = "12")]
    Bits12,
    /// 14 bits at 60 samples per second
    #[value(name = "14")]
    Bits14,
    /// 16 bits at 15 samples per second
    #[value(name = "16")]
    Bits16,
}

impl From<Resolution> for SampleRate {
    fn from(value: Resolution) -> SampleRate {
        match value {
            Resolution::Bits12 => SampleRate::Sps240,
            Resolution::Bits14 => SampleRate::Sps60,
            Resolution::Bits16 => SampleRate::Sps15,
        }
    }
}

/// Configure, wait one conversion period, and print the result.
pub(crate) fn read<I2C>(adc: &mut Mcp342x<I2C>, args: &ConversionArgs) -> anyhow::Result<()>
where
    I2C: I2c,
    I2C::Error: Send + Sync + 'static,
{
    let config = args.to_config();
    adc.configure(config)?;
    sleep(config.rate.conversion_time());
    let value = adc.read_raw()?;
    let applied = adc.config();
    println!(
        "channel {}: {value} ({} bits at {} SPS, gain x{})",
        applied.channel,
        adc.resolution_bits(),
        applied.rate.samples_per_second(),
        applied.gain.factor()
    );
    Ok(())
}

/// Configure, wait one conversion period, and print the result with the register.
pub(crate) fn status<I2C>(adc: &mut Mcp342x<I2C>, args: &ConversionArgs) -> anyhow::Result<()>
where
    I2C: I2c,
    I2C::Error: Send + Sync + 'static,
{
    let config = args.to_config();
    adc.configure(config)?;
    sleep(config.rate.conversion_time());
    let reading = adc.read_with_status()?;
    println!(
        "{:?} at {:#04x} ({} Hz bus)",
        adc.variant(),
        adc.address(),
        adc.bus_speed().hertz()
    );
    println!("{reading:#?}");
    Ok(())
}

/// Print the register byte for the options.
pub(crate) fn encode(variant: mcp342x::Variant, args: &ConversionArgs) {
    let byte = args.to_config().to_register(variant);
    println!("{byte:#04x} ({byte:#010b})");
}

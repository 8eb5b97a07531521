use anyhow::Context;
use clap::Parser;
use mcp342x::Mcp342x;
use rppal::i2c::I2c;

use cli::Commands;

mod adc;
mod cli;
mod util;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let variant = cli.variant.into();

    if let Commands::Encode(args) = &cli.command {
        adc::encode(variant, args);
        return Ok(());
    }

    let bus = I2c::with_bus(cli.bus)
        .with_context(|| format!("Failed to open /dev/i2c-{}.", cli.bus))?;
    let mut device =
        Mcp342x::with_address(bus, variant, cli.address)?.with_bus_speed(cli.speed.into());

    match cli.command {
        Commands::Read(args) => adc::read(&mut device, &args)?,
        Commands::Status(args) => adc::status(&mut device, &args)?,
        Commands::Encode(_) => unreachable!("Handled before opening the bus."),
    }
    Ok(())
}

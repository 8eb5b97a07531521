//! Driver behaviour against a mocked I2C bus.
//!
//! Each test lists the exact bus transactions it expects. The mock panics on any
//! unexpected transfer (including a read of the wrong length), and `done` checks that
//! every expected transfer happened.
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use mcp342x::{Config, ConversionMode, Error, Gain, Mcp342x, SampleRate, Variant};

const ADDRESS: u8 = 0x68;

fn driver(variant: Variant, expectations: &[I2cTransaction]) -> Mcp342x<I2cMock> {
    Mcp342x::new(I2cMock::new(expectations), variant)
}

fn config(channel: u8, rate: SampleRate, gain: Gain) -> Config {
    Config::new()
        .with_channel(channel)
        .with_rate(rate)
        .with_gain(gain)
}

/// With no configuration written, results are read as 16-bit (three bytes).
#[test]
fn unconfigured_driver_reads_16_bit() {
    let mut adc = driver(
        Variant::Mcp3428,
        &[
            I2cTransaction::read(ADDRESS, vec![0x80, 0x00, 0x18]),
            I2cTransaction::read(ADDRESS, vec![0x7F, 0xFF, 0x18]),
        ],
    );
    assert_eq!(adc.resolution_bits(), 16);
    assert_eq!(adc.read_raw(), Ok(-32768));
    assert_eq!(adc.read_raw(), Ok(32767));
    adc.release().done();
}

/// Configuring writes exactly one byte with the packed register value.
#[test]
fn configure_writes_register_byte() {
    let settings = Config::new()
        .with_mode(ConversionMode::OneShot)
        .with_ready(true)
        .with_channel(2)
        .with_rate(SampleRate::Sps60)
        .with_gain(Gain::X4);
    let mut adc = driver(
        Variant::Mcp3428,
        &[I2cTransaction::write(ADDRESS, vec![0b1100_0110])],
    );
    adc.configure(settings).unwrap();
    assert_eq!(adc.config(), &settings);
    adc.release().done();
}

/// Configuring twice with the same settings writes the same byte twice.
#[test]
fn configure_is_idempotent_on_the_wire() {
    let settings = config(1, SampleRate::Sps240, Gain::X2);
    let byte = settings.to_register(Variant::Mcp3428);
    let mut adc = driver(
        Variant::Mcp3428,
        &[
            I2cTransaction::write(ADDRESS, vec![byte]),
            I2cTransaction::write(ADDRESS, vec![byte]),
        ],
    );
    adc.configure(settings).unwrap();
    adc.configure(settings).unwrap();
    adc.release().done();
}

/// The same data bytes decode differently as the configured resolution changes.
#[test]
fn decode_width_follows_last_configuration() {
    let sixteen = config(0, SampleRate::Sps15, Gain::X1);
    let twelve = config(0, SampleRate::Sps240, Gain::X1);
    let fourteen = config(0, SampleRate::Sps60, Gain::X1);
    let mut adc = driver(
        Variant::Mcp3428,
        &[
            I2cTransaction::write(ADDRESS, vec![0b0001_1000]),
            I2cTransaction::read(ADDRESS, vec![0x08, 0x00, 0b0001_1000]),
            I2cTransaction::write(ADDRESS, vec![0b0001_0000]),
            I2cTransaction::read(ADDRESS, vec![0x08, 0x00]),
            // Still 12 bits: nothing was configured in between.
            I2cTransaction::read(ADDRESS, vec![0x0F, 0xFF]),
            I2cTransaction::write(ADDRESS, vec![0b0001_0100]),
            I2cTransaction::read(ADDRESS, vec![0x20, 0x00]),
        ],
    );

    adc.configure(sixteen).unwrap();
    assert_eq!(adc.read_raw(), Ok(2048));

    adc.configure(twelve).unwrap();
    assert_eq!(adc.resolution_bits(), 12);
    assert_eq!(adc.read_raw(), Ok(-2048));
    assert_eq!(adc.read_raw(), Ok(-1));

    adc.configure(fourteen).unwrap();
    assert_eq!(adc.read_raw(), Ok(-8192));
    adc.release().done();
}

/// Results at each resolution stay within the documented output range.
#[test]
fn results_within_range_for_each_rate() {
    let cases = [
        (SampleRate::Sps240, 0b0001_0000, -2048, 2047),
        (SampleRate::Sps60, 0b0001_0100, -8192, 8191),
        (SampleRate::Sps15, 0b0001_1000, -32768, 32767),
    ];
    for (rate, byte, min, max) in cases {
        let len = rate.read_len();
        let mut expectations = vec![I2cTransaction::write(ADDRESS, vec![byte])];
        for data in [[0xFF, 0xFF, byte], [0x80, 0x00, byte], [0x7F, 0xFF, byte]] {
            expectations.push(I2cTransaction::read(ADDRESS, data[..len].to_vec()));
        }
        let mut adc = driver(Variant::Mcp3428, &expectations);
        adc.configure(config(0, rate, Gain::X1)).unwrap();
        for _ in 0..3 {
            let value = adc.read_raw().unwrap();
            assert!((min..=max).contains(&value), "{value} out of range at {rate:?}");
        }
        adc.release().done();
    }
}

/// The sign-extension boundary values at each resolution.
#[test]
fn boundary_codes_through_driver() {
    let cases: [(SampleRate, u8, [u8; 2], [u8; 2]); 3] = [
        (SampleRate::Sps240, 0b0001_0000, [0x07, 0xFF], [0x08, 0x00]),
        (SampleRate::Sps60, 0b0001_0100, [0x1F, 0xFF], [0x20, 0x00]),
        (SampleRate::Sps15, 0b0001_1000, [0x7F, 0xFF], [0x80, 0x00]),
    ];
    for (rate, byte, max_positive, min_negative) in cases {
        let len = rate.read_len();
        let with_config = |data: [u8; 2]| [data[0], data[1], byte][..len].to_vec();
        let mut adc = driver(
            Variant::Mcp3428,
            &[
                I2cTransaction::write(ADDRESS, vec![byte]),
                I2cTransaction::read(ADDRESS, with_config(max_positive)),
                I2cTransaction::read(ADDRESS, with_config(min_negative)),
            ],
        );
        adc.configure(config(0, rate, Gain::X1)).unwrap();
        // 2^(b-1) - 1 and -2^(b-1).
        assert_eq!(adc.read_raw(), Ok(rate.max_code()));
        assert_eq!(adc.read_raw(), Ok(rate.min_code()));
        adc.release().done();
    }
}

/// Unsupported gain factors are written as unity gain.
#[test]
fn invalid_gain_written_as_unity() {
    let byte = config(0, SampleRate::Sps15, Gain::X1).to_register(Variant::Mcp3428);
    let mut adc = driver(
        Variant::Mcp3428,
        &[
            I2cTransaction::write(ADDRESS, vec![byte]),
            I2cTransaction::write(ADDRESS, vec![byte]),
        ],
    );
    adc.configure(config(0, SampleRate::Sps15, Gain::from_factor(3)))
        .unwrap();
    adc.configure(config(0, SampleRate::Sps15, Gain::from_factor(1)))
        .unwrap();
    assert_eq!(adc.config().gain, Gain::X1);
    adc.release().done();
}

/// Channels 2 and 3 select channels 0 and 1 on the two-channel parts.
#[test]
fn two_channel_parts_wrap_channel_on_the_wire() {
    for variant in [Variant::Mcp3426, Variant::Mcp3427] {
        let ch0 = config(0, SampleRate::Sps15, Gain::X1).to_register(variant);
        let ch1 = config(1, SampleRate::Sps15, Gain::X1).to_register(variant);
        let mut adc = driver(
            variant,
            &[
                I2cTransaction::write(ADDRESS, vec![ch0]),
                I2cTransaction::write(ADDRESS, vec![ch1]),
            ],
        );
        adc.configure(config(2, SampleRate::Sps15, Gain::X1)).unwrap();
        assert_eq!(adc.config().channel, 0);
        adc.configure(config(3, SampleRate::Sps15, Gain::X1)).unwrap();
        assert_eq!(adc.config().channel, 1);
        adc.release().done();
    }
}

/// A failed configuration write is reported and leaves the decode width alone.
#[test]
fn configure_failure_is_reported() {
    let mut adc = driver(
        Variant::Mcp3428,
        &[
            I2cTransaction::write(ADDRESS, vec![0b0001_0000]).with_error(ErrorKind::Other),
            // Still decoded as 16 bits, so three bytes are read.
            I2cTransaction::read(ADDRESS, vec![0x08, 0x00, 0x18]),
        ],
    );
    let result = adc.configure(config(0, SampleRate::Sps240, Gain::X1));
    assert_eq!(result, Err(Error::I2c(ErrorKind::Other)));
    assert_eq!(adc.config(), &Config::new());
    assert_eq!(adc.read_raw(), Ok(2048));
    adc.release().done();
}

/// A failed read is reported rather than replaced with a default value.
#[test]
fn read_failure_is_reported() {
    let mut adc = driver(
        Variant::Mcp3428,
        &[
            I2cTransaction::read(ADDRESS, vec![0x00, 0x00, 0x00]).with_error(ErrorKind::Other),
            I2cTransaction::read(ADDRESS, vec![0x00, 0x00, 0x00]).with_error(ErrorKind::Bus),
        ],
    );
    assert_eq!(adc.read_raw(), Err(Error::I2c(ErrorKind::Other)));
    assert!(matches!(
        adc.read_with_status(),
        Err(Error::I2c(ErrorKind::Bus))
    ));
    adc.release().done();
}

/// The status read returns the echoed register and whether the result is new.
#[test]
fn read_with_status_in_one_shot_mode() {
    let one_shot = Config::new()
        .with_mode(ConversionMode::OneShot)
        .with_ready(true)
        .with_channel(1)
        .with_rate(SampleRate::Sps240)
        .with_gain(Gain::X8);
    let mut adc = driver(
        Variant::Mcp3428,
        &[
            I2cTransaction::write(ADDRESS, vec![0b1010_0011]),
            // Conversion still in progress: RDY set.
            I2cTransaction::read(ADDRESS, vec![0x00, 0x00, 0b1010_0011]),
            // Conversion done: RDY clear.
            I2cTransaction::read(ADDRESS, vec![0xFF, 0x9C, 0b0010_0011]),
        ],
    );
    adc.configure(one_shot).unwrap();

    let pending = adc.read_with_status().unwrap();
    assert!(!pending.is_fresh);

    let done = adc.read_with_status().unwrap();
    assert!(done.is_fresh);
    assert_eq!(done.value, -100);
    assert_eq!(done.config.mode, ConversionMode::OneShot);
    assert_eq!(done.config.channel, 1);
    assert_eq!(done.config.rate, SampleRate::Sps240);
    assert_eq!(done.config.gain, Gain::X8);
    adc.release().done();
}

/// The status read decodes at the stored resolution, like the plain read.
#[test]
fn read_with_status_uses_stored_resolution() {
    let mut adc = driver(
        Variant::Mcp3428,
        &[
            I2cTransaction::write(ADDRESS, vec![0b0001_0000]),
            // Device claims 16 bits, but the driver configured 12.
            I2cTransaction::read(ADDRESS, vec![0x08, 0x00, 0b0001_1000]),
        ],
    );
    adc.configure(config(0, SampleRate::Sps240, Gain::X1)).unwrap();
    let reading = adc.read_with_status().unwrap();
    assert_eq!(reading.value, -2048);
    assert_eq!(reading.config.rate, SampleRate::Sps15);
    adc.release().done();
}

/// Transfers go to the address the driver was created with.
#[test]
fn custom_address_is_used() {
    let mut adc = Mcp342x::with_address(
        I2cMock::new(&[
            I2cTransaction::write(0x6E, vec![0b0001_1000]),
            I2cTransaction::read(0x6E, vec![0x00, 0x2A, 0b0001_1000]),
        ]),
        Variant::Mcp3427,
        0x6E,
    )
    .unwrap();
    assert_eq!(adc.address(), 0x6E);
    adc.configure(Config::new()).unwrap();
    assert_eq!(adc.read_raw(), Ok(42));
    adc.release().done();
}

/// Addresses outside 0x68..=0x6F are refused before any bus traffic.
#[test]
fn out_of_range_address_is_rejected() {
    for address in [0x00, 0x48, 0x67, 0x70, 0x7F] {
        let mut i2c = I2cMock::new(&[]);
        let result = Mcp342x::with_address(i2c.clone(), Variant::Mcp3428, address);
        assert!(matches!(result, Err(Error::AddressOutOfRange(a)) if a == address));
        i2c.done();
    }
}

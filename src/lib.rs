#![doc = include_str!("../README.md")]
#![no_std]
#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
mod driver;
mod error;
pub mod i2c;
mod reading;
pub mod register;
mod variant;

pub use config::{Config, ConversionMode, Gain, SampleRate};
pub use driver::Mcp342x;
pub use error::Error;
pub use reading::{Reading, decode_output_code, sign_extend};
pub use variant::{ADDRESS_RANGE, DEFAULT_ADDRESS, Variant, is_valid_address};

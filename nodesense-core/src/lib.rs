//! Sensor decoding core for NodeSense monitoring nodes
//!
//! Two independent pieces that turn bus bytes and serial text into values:
//!
//! - [`bme280`]: register driver for the Bosch BME280. Checks the chip id,
//!   reads factory calibration, configures sampling and compensates raw
//!   counts into °C, %RH and hPa with the vendor's fixed-point formulas.
//! - [`nmea`]: `$GPGGA` sentence parser producing a [`PositionFix`] in
//!   signed decimal degrees.
//!
//! Key constraints:
//! - `no_std`, no heap allocation
//! - The driver borrows the bus per call and never retries
//! - Parsing works on a bounded stack buffer
//!
//! ```no_run
//! use nodesense_core::{parse_fix, ParseError};
//!
//! match parse_fix("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47") {
//!     Ok(fix) => {}, // Position update
//!     Err(ParseError::WrongSentenceType) => {}, // Some other sentence
//!     Err(e) => {}, // No fix this cycle
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod bme280;
pub mod constants;
pub mod errors;
pub mod nmea;
pub mod traits;

// Public API
pub use bme280::{Bme280, DriverConfig, SensorReading};
pub use errors::{DriverError, DriverResult, ParseError, ParseResult};
pub use nmea::{parse_fix, parse_fix_bytes, GgaParser, Hemisphere, PositionFix};
pub use traits::{I2cBus, RegisterBus};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}

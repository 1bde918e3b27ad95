//! Error Types for Sensor Decoding Failures
//!
//! ## Design Philosophy
//!
//! Both halves of the crate report failures the same way:
//!
//! 1. **Terminal per call**: every error ends the call that produced it. Nothing
//!    retries internally; the caller decides whether the next cycle tries again.
//!
//! 2. **No Heap Allocation**: error payloads are inline. Driver errors carry the
//!    bus error by value, parser errors carry only indices and counts.
//!
//! 3. **All-or-nothing**: an `Err` never comes with a partially filled reading
//!    or fix.
//!
//! ## Error Categories
//!
//! ### Register Driver
//! - `IdentityReadFailed`: the identity register could not be read at all
//! - `IdentityMismatch`: something answered, but it is not a BME280
//! - `CalibrationReadFailed`: one of the three calibration windows failed
//! - `ConfigWriteFailed`: a configuration register write failed
//! - `ReadFailed`: the measurement burst read failed
//!
//! ### Sentence Parser
//! - `WrongSentenceType`: not a `$GPGGA,` sentence
//! - `IncompleteSentence`: fewer than eight fields
//! - `FieldFormat`: a numeric field was malformed (strict mode only)
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use nodesense_core::{ParseError, parse_fix};
//!
//! match parse_fix("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A") {
//!     Ok(fix) => {
//!         // publish(fix);
//!     }
//!     Err(ParseError::WrongSentenceType) => {
//!         // Another sentence type on the same UART, skip it
//!     }
//!     Err(_) => {
//!         // No new position this cycle
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for register driver operations
pub type DriverResult<T, E> = Result<T, DriverError<E>>;

/// Result type for sentence parsing
pub type ParseResult<T> = Result<T, ParseError>;

/// Register driver errors, generic over the bus error `E`
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverError<E> {
    /// Identity register transfer failed
    #[error("Identity register read failed: {0:?}")]
    IdentityReadFailed(E),

    /// Identity register answered with an unexpected chip id
    #[error("Chip id {found:#04x} does not match expected {expected:#04x}")]
    IdentityMismatch {
        /// Value read from the identity register
        found: u8,
        /// Documented chip id
        expected: u8,
    },

    /// A calibration window could not be read
    #[error("Calibration read failed: {0:?}")]
    CalibrationReadFailed(E),

    /// A configuration register could not be written
    #[error("Configuration write failed: {0:?}")]
    ConfigWriteFailed(E),

    /// The measurement burst read failed
    #[error("Measurement read failed: {0:?}")]
    ReadFailed(E),
}

impl<E> DriverError<E> {
    /// Short static description, usable without formatting the bus error
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IdentityReadFailed(_) => "Identity read failed",
            Self::IdentityMismatch { .. } => "Identity mismatch",
            Self::CalibrationReadFailed(_) => "Calibration read failed",
            Self::ConfigWriteFailed(_) => "Config write failed",
            Self::ReadFailed(_) => "Read failed",
        }
    }

    /// The underlying bus error, if this was a transfer failure
    pub fn bus_error(&self) -> Option<&E> {
        match self {
            Self::IdentityReadFailed(e)
            | Self::CalibrationReadFailed(e)
            | Self::ConfigWriteFailed(e)
            | Self::ReadFailed(e) => Some(e),
            Self::IdentityMismatch { .. } => None,
        }
    }
}

/// Sentence parser errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Sentence does not start with the GGA talker/type prefix
    #[error("Not a GGA sentence")]
    WrongSentenceType,

    /// Too few comma-separated fields for a fix record
    #[error("Incomplete sentence: {fields} fields, need {required}")]
    IncompleteSentence {
        /// Number of fields found
        fields: usize,
        /// Minimum number of fields for a fix
        required: usize,
    },

    /// Numeric field is not a number (strict mode only)
    #[error("Malformed numeric field at index {index}")]
    FieldFormat {
        /// Zero-based field index
        index: usize,
    },
}

#[cfg(feature = "defmt")]
impl<E> defmt::Format for DriverError<E> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::IdentityMismatch { found, expected } =>
                defmt::write!(fmt, "Chip id {=u8:#x} != {=u8:#x}", found, expected),
            other => defmt::write!(fmt, "{}", other.as_str()),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ParseError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::WrongSentenceType =>
                defmt::write!(fmt, "Not a GGA sentence"),
            Self::IncompleteSentence { fields, required } =>
                defmt::write!(fmt, "Incomplete: {} of {} fields", fields, required),
            Self::FieldFormat { index } =>
                defmt::write!(fmt, "Malformed field {}", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bus_error_is_exposed_for_transfer_failures() {
        let err: DriverError<u8> = DriverError::ReadFailed(7);
        assert_eq!(err.bus_error(), Some(&7));

        let err: DriverError<u8> = DriverError::IdentityMismatch { found: 0x58, expected: 0x60 };
        assert_eq!(err.bus_error(), None);
        assert_eq!(err.as_str(), "Identity mismatch");
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_messages() {
        let err: DriverError<()> = DriverError::IdentityMismatch { found: 0x58, expected: 0x60 };
        assert_eq!(err.to_string(), "Chip id 0x58 does not match expected 0x60");

        let err = ParseError::IncompleteSentence { fields: 5, required: 8 };
        assert_eq!(err.to_string(), "Incomplete sentence: 5 fields, need 8");
    }
}

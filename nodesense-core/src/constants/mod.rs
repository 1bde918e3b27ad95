//! Constants for NodeSense Core
//!
//! Centralized register maps, protocol limits and field positions. All
//! numeric values used by the driver and the parser are defined here.
//!
//! ## Organization
//!
//! - **bme280**: register offsets, calibration windows, chip id
//! - **nmea**: GGA prefix, working buffer size, field indices
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Reference the datasheet or standard the value comes from
//! 3. Use descriptive names that include units where they apply

/// BME280 register map and protocol values.
pub mod bme280;

/// NMEA 0183 GGA sentence layout.
pub mod nmea;

// Re-export commonly used constants for convenience
pub use bme280::{ADDRESS_PRIMARY, ADDRESS_SECONDARY, CHIP_ID, DEFAULT_TIMEOUT_MS};

pub use nmea::{GGA_PREFIX, MAX_SENTENCE_LEN, MIN_FIX_FIELDS, SENTENCE_BUFFER_SIZE};

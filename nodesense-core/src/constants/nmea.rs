//! NMEA 0183 GGA Sentence Constants
//!
//! Field positions and limits for the `$GPGGA` fix sentence:
//!
//! ```text
//! $GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47
//!   0      1       2     3     4     5 6  7  ...
//! ```

/// Talker + sentence type prefix, including the first delimiter.
pub const GGA_PREFIX: &str = "$GPGGA,";

/// Field delimiter.
pub const FIELD_DELIMITER: char = ',';

/// Working buffer size in bytes, including the slot the receiver reserves
/// for its terminator.
pub const SENTENCE_BUFFER_SIZE: usize = 100;

/// Longest sentence text kept before truncation.
pub const MAX_SENTENCE_LEN: usize = SENTENCE_BUFFER_SIZE - 1;

/// Minimum field count for a usable fix record (indices 0..=7).
pub const MIN_FIX_FIELDS: usize = 8;

// ===== FIELD INDICES =====

/// Latitude magnitude, `DDMM.MMMM`.
pub const FIELD_LATITUDE: usize = 2;

/// Latitude hemisphere, `N` or `S`.
pub const FIELD_LATITUDE_HEMISPHERE: usize = 3;

/// Longitude magnitude, `DDDMM.MMMM`.
pub const FIELD_LONGITUDE: usize = 4;

/// Longitude hemisphere, `E` or `W`.
pub const FIELD_LONGITUDE_HEMISPHERE: usize = 5;

/// Fix quality, 0 = invalid.
pub const FIELD_FIX_QUALITY: usize = 6;

/// Number of satellites in use.
pub const FIELD_SATELLITES: usize = 7;

/// Minutes per degree.
pub const MINUTES_PER_DEGREE: f64 = 60.0;

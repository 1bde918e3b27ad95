//! NMEA GGA Fix Parser
//!
//! ## Scope
//!
//! Only `$GPGGA` sentences are accepted; anything else is rejected with
//! [`ParseError::WrongSentenceType`] so a UART pipeline can feed every line
//! through the parser and keep what matches. The checksum, time and
//! altitude fields are not interpreted.
//!
//! ## Processing
//!
//! 1. Prefix check against `$GPGGA,`
//! 2. Copy into a fixed-capacity working buffer, truncating overlong input
//! 3. Split on `,`, keeping empty fields so indices stay positional
//! 4. Convert fields 2..=7, then degrees-minutes to decimal degrees
//!
//! A sentence with fewer than eight fields carries no fix record and fails
//! with [`ParseError::IncompleteSentence`].
//!
//! ## Numeric Fields
//!
//! By default malformed numbers read as zero (see [`ParseMode::Lenient`]).
//! [`ParseMode::Strict`] turns them into [`ParseError::FieldFormat`] instead.
//!
//! ```rust
//! use nodesense_core::nmea::{parse_fix, GgaParser, Hemisphere};
//!
//! let fix = parse_fix("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47")?;
//! assert!((fix.latitude - 48.1173).abs() < 1e-4);
//! assert_eq!(fix.latitude_hemisphere, Some(Hemisphere::North));
//! assert_eq!(fix.satellites, 8);
//!
//! // Reject corrupted numbers instead of zeroing them
//! let strict = GgaParser::strict();
//! assert!(strict.parse("$GPGGA,123519,48O7.038,N,01131.000,E,1,08").is_err());
//! # Ok::<(), nodesense_core::ParseError>(())
//! ```

mod coordinate;
mod fields;

pub use coordinate::{to_decimal_degrees, Hemisphere};

use heapless::String;

use crate::constants::nmea::{
    FIELD_DELIMITER, FIELD_FIX_QUALITY, FIELD_LATITUDE, FIELD_LATITUDE_HEMISPHERE,
    FIELD_LONGITUDE, FIELD_LONGITUDE_HEMISPHERE, FIELD_SATELLITES, GGA_PREFIX,
    MAX_SENTENCE_LEN, MIN_FIX_FIELDS,
};
use crate::errors::{ParseError, ParseResult};

/// Position report from one GGA sentence
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionFix {
    /// Decimal degrees, negative south of the equator
    pub latitude: f64,
    /// Decimal degrees, negative west of Greenwich
    pub longitude: f64,
    pub latitude_hemisphere: Option<Hemisphere>,
    pub longitude_hemisphere: Option<Hemisphere>,
    /// 0 = no fix, 1 = GPS, 2 = DGPS, ...
    pub fix_quality: u8,
    /// Satellites in use
    pub satellites: u8,
}

impl PositionFix {
    /// Receiver reports a valid solution
    pub fn has_fix(&self) -> bool {
        self.fix_quality != 0
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PositionFix {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "{}, {} (q={}, sats={})",
            self.latitude, self.longitude, self.fix_quality, self.satellites
        )
    }
}

/// Numeric field handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Malformed numbers read as their numeric prefix, or zero
    #[default]
    Lenient,
    /// Malformed numbers fail the sentence
    Strict,
}

/// GGA sentence parser
///
/// Holds only its mode; every call works on its own stack buffer, so one
/// parser can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct GgaParser {
    mode: ParseMode,
}

impl GgaParser {
    /// Lenient parser
    pub const fn new() -> Self {
        Self { mode: ParseMode::Lenient }
    }

    /// Parser that rejects malformed numeric fields
    pub const fn strict() -> Self {
        Self { mode: ParseMode::Strict }
    }

    pub const fn with_mode(mode: ParseMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Parse one sentence
    ///
    /// Text after an embedded NUL is ignored.
    pub fn parse(&self, sentence: &str) -> ParseResult<PositionFix> {
        let sentence = match sentence.find('\0') {
            Some(end) => &sentence[..end],
            None => sentence,
        };

        if !sentence.starts_with(GGA_PREFIX) {
            log_debug!("Skipping non-GGA sentence");
            return Err(ParseError::WrongSentenceType);
        }

        let buffer = bounded_copy(sentence);

        let mut latitude = "";
        let mut latitude_hemisphere = "";
        let mut longitude = "";
        let mut longitude_hemisphere = "";
        let mut fix_quality = "";
        let mut satellites = "";
        let mut count = 0;

        for (index, field) in buffer.split(FIELD_DELIMITER).enumerate() {
            match index {
                FIELD_LATITUDE => latitude = field,
                FIELD_LATITUDE_HEMISPHERE => latitude_hemisphere = field,
                FIELD_LONGITUDE => longitude = field,
                FIELD_LONGITUDE_HEMISPHERE => longitude_hemisphere = field,
                FIELD_FIX_QUALITY => fix_quality = field,
                FIELD_SATELLITES => satellites = field,
                _ => {}
            }
            count = index + 1;
        }

        if count < MIN_FIX_FIELDS {
            return Err(ParseError::IncompleteSentence {
                fields: count,
                required: MIN_FIX_FIELDS,
            });
        }

        let latitude_hemisphere = Hemisphere::from_field(latitude_hemisphere);
        let longitude_hemisphere = Hemisphere::from_field(longitude_hemisphere);

        Ok(PositionFix {
            latitude: to_decimal_degrees(
                self.number(FIELD_LATITUDE, latitude)?,
                latitude_hemisphere,
            ),
            longitude: to_decimal_degrees(
                self.number(FIELD_LONGITUDE, longitude)?,
                longitude_hemisphere,
            ),
            latitude_hemisphere,
            longitude_hemisphere,
            fix_quality: self.count(FIELD_FIX_QUALITY, fix_quality)?,
            satellites: self.count(FIELD_SATELLITES, satellites)?,
        })
    }

    /// Parse a raw receive buffer
    ///
    /// Stops at the first NUL. Bytes that are not valid UTF-8 end the
    /// sentence at the last valid character.
    pub fn parse_bytes(&self, bytes: &[u8]) -> ParseResult<PositionFix> {
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        let bytes = &bytes[..end];

        let text = match core::str::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => core::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or(""),
        };

        self.parse(text)
    }

    fn number(&self, index: usize, field: &str) -> ParseResult<f64> {
        match self.mode {
            ParseMode::Lenient => Ok(fields::lenient_f64(field)),
            ParseMode::Strict => {
                fields::strict_f64(field).ok_or(ParseError::FieldFormat { index })
            }
        }
    }

    fn count(&self, index: usize, field: &str) -> ParseResult<u8> {
        match self.mode {
            // Narrowed to 8 bits the way the receiver firmware stores it
            ParseMode::Lenient => Ok(fields::lenient_i32(field) as u8),
            ParseMode::Strict => {
                fields::strict_u8(field).ok_or(ParseError::FieldFormat { index })
            }
        }
    }
}

/// Parse a GGA sentence with the lenient parser
pub fn parse_fix(sentence: &str) -> ParseResult<PositionFix> {
    GgaParser::new().parse(sentence)
}

/// Parse a NUL-terminated or length-bounded receive buffer with the lenient parser
pub fn parse_fix_bytes(bytes: &[u8]) -> ParseResult<PositionFix> {
    GgaParser::new().parse_bytes(bytes)
}

/// Copy at most `MAX_SENTENCE_LEN` bytes, cutting on a character boundary
fn bounded_copy(sentence: &str) -> String<MAX_SENTENCE_LEN> {
    let mut buffer = String::new();
    for ch in sentence.chars() {
        if buffer.push(ch).is_err() {
            log_debug!("Sentence truncated to {} bytes", MAX_SENTENCE_LEN);
            break;
        }
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";

    #[test]
    fn parses_reference_sentence() {
        let fix = parse_fix(SAMPLE).unwrap();
        assert!((fix.latitude - 48.1173).abs() < 1e-4);
        assert!((fix.longitude - 11.516_667).abs() < 1e-4);
        assert_eq!(fix.fix_quality, 1);
        assert_eq!(fix.satellites, 8);
        assert!(fix.has_fix());
    }

    #[test]
    fn rejects_other_sentence_types() {
        assert_eq!(
            parse_fix("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A"),
            Err(ParseError::WrongSentenceType)
        );
        assert_eq!(parse_fix("$GNGGA,123519,4807.038,N"), Err(ParseError::WrongSentenceType));
        assert_eq!(parse_fix("GPGGA,123519"), Err(ParseError::WrongSentenceType));
        assert_eq!(parse_fix(""), Err(ParseError::WrongSentenceType));
    }

    #[test]
    fn rejects_short_sentences() {
        assert_eq!(
            parse_fix("$GPGGA,123519,4807.038,N,01131.000"),
            Err(ParseError::IncompleteSentence { fields: 5, required: 8 })
        );
        assert_eq!(
            parse_fix("$GPGGA,"),
            Err(ParseError::IncompleteSentence { fields: 2, required: 8 })
        );
    }

    #[test]
    fn empty_fields_keep_their_position() {
        let fix = parse_fix("$GPGGA,002153.000,,,,,0,00,,,M,,M,,*7B").unwrap();
        assert_eq!(fix.latitude, 0.0);
        assert_eq!(fix.longitude, 0.0);
        assert_eq!(fix.latitude_hemisphere, None);
        assert_eq!(fix.fix_quality, 0);
        assert_eq!(fix.satellites, 0);
        assert!(!fix.has_fix());
    }

    #[test]
    fn exactly_eight_fields_is_enough() {
        let fix = parse_fix("$GPGGA,123519,3352.128,S,15112.558,W,2,11").unwrap();
        assert!(fix.latitude < 0.0);
        assert!(fix.longitude < 0.0);
        assert_eq!(fix.fix_quality, 2);
        assert_eq!(fix.satellites, 11);
    }

    #[test]
    fn lenient_mode_zeroes_garbage() {
        let fix = parse_fix("$GPGGA,123519,abc,N,01131.000,E,x,8z").unwrap();
        assert_eq!(fix.latitude, 0.0);
        assert!((fix.longitude - 11.516_667).abs() < 1e-4);
        assert_eq!(fix.fix_quality, 0);
        assert_eq!(fix.satellites, 8);
    }

    #[test]
    fn strict_mode_reports_field_index() {
        let strict = GgaParser::strict();
        assert_eq!(strict.mode(), ParseMode::Strict);
        assert!(strict.parse(SAMPLE).is_ok());
        assert_eq!(
            strict.parse("$GPGGA,123519,4807.038,N,011x1.000,E,1,08"),
            Err(ParseError::FieldFormat { index: 4 })
        );
        assert_eq!(
            strict.parse("$GPGGA,123519,4807.038,N,01131.000,E,1,8z"),
            Err(ParseError::FieldFormat { index: 7 })
        );
    }

    #[test]
    fn stops_at_nul() {
        let fix = parse_fix("$GPGGA,123519,4807.038,N,01131.000,E,1,08\0,garbage").unwrap();
        assert_eq!(fix.satellites, 8);
        assert_eq!(
            parse_fix("$GPGGA,123519\0,4807.038,N,01131.000,E,1,08"),
            Err(ParseError::IncompleteSentence { fields: 2, required: 8 })
        );
    }

    #[test]
    fn bounded_copy_truncates() {
        let long = "$GPGGA,".repeat(30);
        let copy = bounded_copy(&long);
        assert_eq!(copy.len(), MAX_SENTENCE_LEN);
        assert!(long.starts_with(copy.as_str()));
    }

    #[test]
    fn byte_input() {
        let mut buf = [0u8; 128];
        buf[..SAMPLE.len()].copy_from_slice(SAMPLE.as_bytes());
        let fix = parse_fix_bytes(&buf).unwrap();
        assert_eq!(fix.satellites, 8);

        let mut bad = SAMPLE.as_bytes().to_vec();
        bad[42] = 0xFF;
        let fix = parse_fix_bytes(&bad).unwrap();
        assert_eq!(fix.satellites, 8);
    }
}

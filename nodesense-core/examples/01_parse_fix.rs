//! GGA Fix Parsing Example
//!
//! Feeds a captured GPS receiver log through the sentence parser the way a
//! UART task would: every line goes in, only `$GPGGA` fixes come out.
//!
//! ## What You'll Learn
//!
//! - Filtering a mixed NMEA stream with `WrongSentenceType`
//! - Reading signed decimal degrees and hemispheres from a fix
//! - Lenient vs strict handling of corrupted numeric fields
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_parse_fix
//! ```

use nodesense_core::{
    errors::ParseError,
    nmea::{GgaParser, ParseMode},
};

const RECEIVER_LOG: &str = "\
$GPRMC,002153.000,V,,,,,0.00,0.00,010180,,,N*49
$GPGGA,002153.000,,,,,0,00,,,M,,M,,*7B
$GPGSA,A,1,,,,,,,,,,,,,,,*1E
$GPGGA,002154.000,3352.1280,S,15112.5580,E,1,05,1.8,40.2,M,22.1,M,,*4B
$GPGGA,002155.000,3352.1281,S
$GPGGA,002156.000,33S2.1282,S,15112.5584,E,1,06,1.2,40.5,M,22.1,M,,*00
$GPGGA,002157.000,3352.1283,S,15112.5585,E,2,09,0.9,40.4,M,22.1,M,,*49";

fn main() {
    println!("NodeSense GGA Parsing Example");
    println!("=============================\n");

    for mode in [ParseMode::Lenient, ParseMode::Strict] {
        println!("{mode:?} parser:");
        let parser = GgaParser::with_mode(mode);

        for line in RECEIVER_LOG.lines() {
            match parser.parse(line) {
                Ok(fix) if fix.has_fix() => {
                    println!(
                        "  ✓ {:>10.5}, {:>10.5}  quality={} satellites={}",
                        fix.latitude, fix.longitude, fix.fix_quality, fix.satellites
                    );
                }
                Ok(_) => println!("  · receiver has no fix yet"),
                Err(ParseError::WrongSentenceType) => {
                    // Other talkers share the UART
                }
                Err(e) => println!("  ✗ {e}"),
            }
        }
        println!();
    }

    println!("Note: the lenient parser reads '33S2.1282' as 33 minutes,");
    println!("the strict parser rejects the sentence instead.");
}

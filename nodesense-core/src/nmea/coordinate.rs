//! Degrees-minutes to decimal degrees

use crate::constants::nmea::MINUTES_PER_DEGREE;

/// Compass hemisphere of a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Hemisphere from the first character of an indicator field
    pub fn from_field(field: &str) -> Option<Self> {
        match field.chars().next()? {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            'E' => Some(Self::East),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// South and West carry a negative sign in decimal degrees
    pub fn is_negative(self) -> bool {
        matches!(self, Self::South | Self::West)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Hemisphere {
    fn format(&self, fmt: defmt::Formatter) {
        let letter = match self {
            Self::North => "N",
            Self::South => "S",
            Self::East => "E",
            Self::West => "W",
        };
        defmt::write!(fmt, "{}", letter)
    }
}

/// Convert `DDMM.MMMM` / `DDDMM.MMMM` to signed decimal degrees
///
/// Whole degrees are the magnitude divided by 100, truncated; the rest is
/// minutes. A magnitude of exactly zero means "no position" and is returned
/// unchanged whatever the hemisphere says.
pub fn to_decimal_degrees(magnitude: f64, hemisphere: Option<Hemisphere>) -> f64 {
    if magnitude == 0.0 {
        return 0.0;
    }

    let degrees = (magnitude / 100.0) as i32;
    let minutes = magnitude - f64::from(degrees) * 100.0;
    let decimal = f64::from(degrees) + minutes / MINUTES_PER_DEGREE;

    match hemisphere {
        Some(h) if h.is_negative() => -decimal,
        _ => decimal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn converts_latitude_and_longitude() {
        assert!(close(to_decimal_degrees(4807.038, Some(Hemisphere::North)), 48.1173));
        assert!(close(to_decimal_degrees(1131.0, Some(Hemisphere::East)), 11.516_667));
        assert!(close(to_decimal_degrees(12_000.5, Some(Hemisphere::East)), 120.008_333));
    }

    #[test]
    fn south_and_west_are_negative() {
        assert!(close(to_decimal_degrees(3352.128, Some(Hemisphere::South)), -33.8688));
        assert!(close(to_decimal_degrees(15112.558, Some(Hemisphere::West)), -151.209_3));
    }

    #[test]
    fn zero_is_never_negated() {
        let south = to_decimal_degrees(0.0, Some(Hemisphere::South));
        assert_eq!(south, 0.0);
        assert!(south.is_sign_positive());
        assert_eq!(to_decimal_degrees(0.0, None), 0.0);
    }

    #[test]
    fn unknown_hemisphere_stays_positive() {
        assert!(close(to_decimal_degrees(4807.038, None), 48.1173));
        assert_eq!(Hemisphere::from_field("X"), None);
        assert_eq!(Hemisphere::from_field(""), None);
        assert_eq!(Hemisphere::from_field("South"), Some(Hemisphere::South));
    }
}

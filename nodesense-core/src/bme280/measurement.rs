//! Raw samples and compensated readings

use crate::constants::bme280::DATA_LEN;

/// Uncompensated ADC counts from one burst read
///
/// Pressure and temperature are 20-bit, humidity is 16-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSample {
    /// adc_P
    pub pressure: u32,
    /// adc_T
    pub temperature: u32,
    /// adc_H
    pub humidity: u32,
}

impl RawSample {
    /// Unpack the 8-byte burst starting at press_msb
    ///
    /// ```text
    /// [0] press_msb  [1] press_lsb  [2] press_xlsb[7:4]
    /// [3] temp_msb   [4] temp_lsb   [5] temp_xlsb[7:4]
    /// [6] hum_msb    [7] hum_lsb
    /// ```
    pub fn from_bytes(data: &[u8; DATA_LEN]) -> Self {
        let be20 = |msb: u8, lsb: u8, xlsb: u8| {
            (u32::from(msb) << 12) | (u32::from(lsb) << 4) | (u32::from(xlsb) >> 4)
        };

        Self {
            pressure: be20(data[0], data[1], data[2]),
            temperature: be20(data[3], data[4], data[5]),
            humidity: (u32::from(data[6]) << 8) | u32::from(data[7]),
        }
    }
}

/// One compensated measurement
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorReading {
    /// Degrees Celsius
    pub temperature: f32,
    /// Relative humidity in percent, always within [0, 100]
    pub humidity: f32,
    /// Hectopascal
    pub pressure: f32,
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorReading {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "{} C, {} %RH, {} hPa",
            self.temperature, self.humidity, self.pressure
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_burst() {
        let raw = RawSample::from_bytes(&[0x65, 0x5A, 0xC0, 0x7E, 0xED, 0x00, 0x75, 0x30]);
        assert_eq!(raw.pressure, 415_148);
        assert_eq!(raw.temperature, 519_888);
        assert_eq!(raw.humidity, 30_000);
    }

    #[test]
    fn low_nibble_of_xlsb_is_ignored() {
        let a = RawSample::from_bytes(&[0x80, 0x00, 0x00, 0x80, 0x00, 0x00, 0x80, 0x00]);
        let b = RawSample::from_bytes(&[0x80, 0x00, 0x0F, 0x80, 0x00, 0x0F, 0x80, 0x00]);
        assert_eq!(a, b);
        assert_eq!(a.pressure, 0x80000);
    }

    #[test]
    fn full_scale() {
        let raw = RawSample::from_bytes(&[0xFF; DATA_LEN]);
        assert_eq!(raw.pressure, 0xF_FFFF);
        assert_eq!(raw.temperature, 0xF_FFFF);
        assert_eq!(raw.humidity, 0xFFFF);
    }
}

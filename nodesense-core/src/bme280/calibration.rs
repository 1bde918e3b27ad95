//! Factory trimming parameters
//!
//! Every BME280 is trimmed at the factory and stores eighteen compensation
//! coefficients in NVM. They are spread over three windows:
//!
//! ```text
//! 0x88..0x9F  dig_T1..dig_T3, dig_P1..dig_P9   little-endian 16-bit pairs
//! 0xA1        dig_H1                           u8
//! 0xE1..0xE7  dig_H2..dig_H6                   mixed, H4/H5 nibble-packed
//! ```
//!
//! dig_H4 and dig_H5 are 12-bit signed values sharing register 0xE5:
//!
//! ```text
//! 0xE4      0xE5           0xE6
//! H4[11:4]  H5[3:0]|H4[3:0]  H5[11:4]
//! ```
//!
//! The high byte of each is sign-extended before the shift so that negative
//! coefficients survive reassembly.

use crate::constants::bme280::{
    CALIB_H1_LEN, CALIB_H_LEN, CALIB_TP_LEN, REG_CALIB_H, REG_CALIB_H1, REG_CALIB_TP,
};
use crate::traits::RegisterBus;

/// Decoded trimming parameters of one device
///
/// Read once at initialization and never modified afterwards. A value of
/// this type is always complete: there is no way to build one with fields
/// missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationSet {
    pub dig_t1: u16,
    pub dig_t2: i16,
    pub dig_t3: i16,
    pub dig_p1: u16,
    pub dig_p2: i16,
    pub dig_p3: i16,
    pub dig_p4: i16,
    pub dig_p5: i16,
    pub dig_p6: i16,
    pub dig_p7: i16,
    pub dig_p8: i16,
    pub dig_p9: i16,
    pub dig_h1: u8,
    pub dig_h2: i16,
    pub dig_h3: u8,
    pub dig_h4: i16,
    pub dig_h5: i16,
    pub dig_h6: i8,
}

impl CalibrationSet {
    /// Decode the three raw calibration windows
    pub fn from_registers(
        tp: &[u8; CALIB_TP_LEN],
        h1: u8,
        h: &[u8; CALIB_H_LEN],
    ) -> Self {
        let u16_at = |i: usize| u16::from_le_bytes([tp[i], tp[i + 1]]);
        let i16_at = |i: usize| i16::from_le_bytes([tp[i], tp[i + 1]]);

        Self {
            dig_t1: u16_at(0),
            dig_t2: i16_at(2),
            dig_t3: i16_at(4),
            dig_p1: u16_at(6),
            dig_p2: i16_at(8),
            dig_p3: i16_at(10),
            dig_p4: i16_at(12),
            dig_p5: i16_at(14),
            dig_p6: i16_at(16),
            dig_p7: i16_at(18),
            dig_p8: i16_at(20),
            dig_p9: i16_at(22),
            dig_h1: h1,
            dig_h2: i16::from_le_bytes([h[0], h[1]]),
            dig_h3: h[2],
            dig_h4: (i16::from(h[3] as i8) << 4) | i16::from(h[4] & 0x0F),
            dig_h5: (i16::from(h[5] as i8) << 4) | i16::from(h[4] >> 4),
            dig_h6: h[6] as i8,
        }
    }

    /// Fetch all three windows from the device
    ///
    /// Each window is a separate transfer. The first failure aborts the read.
    pub(crate) fn read<B: RegisterBus>(
        bus: &mut B,
        address: u8,
        timeout_ms: u32,
    ) -> Result<Self, B::Error> {
        let mut tp = [0u8; CALIB_TP_LEN];
        let mut h1 = [0u8; CALIB_H1_LEN];
        let mut h = [0u8; CALIB_H_LEN];

        bus.read_register(address, REG_CALIB_TP, &mut tp, timeout_ms)?;
        bus.read_register(address, REG_CALIB_H1, &mut h1, timeout_ms)?;
        bus.read_register(address, REG_CALIB_H, &mut h, timeout_ms)?;

        Ok(Self::from_registers(&tp, h1[0], &h))
    }
}

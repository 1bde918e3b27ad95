//! Fixed-point compensation
//!
//! Integer versions of the Bosch compensation formulas (BST-BME280-DS002,
//! section 4.2.3 and 8.2). The published C code relies on two's-complement
//! wraparound and arithmetic right shifts of negative values, so every
//! multiply/add/subtract here is explicitly wrapping and every shift is on a
//! signed type. Results match the reference code bit for bit.
//!
//! Temperature must be compensated first: it yields the [`FineTemperature`]
//! that pressure and humidity compensation take as input. The type can only
//! be obtained from [`compensate_temperature`], so the ordering is enforced
//! by the signatures.

use crate::constants::bme280::HUMIDITY_Q_MAX;

use super::calibration::CalibrationSet;

/// Fine-resolution temperature carried between compensation stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FineTemperature(i32);

impl FineTemperature {
    /// Raw `t_fine` value
    pub fn value(self) -> i32 {
        self.0
    }
}

/// Compensate a 20-bit temperature sample
///
/// Returns hundredths of a degree Celsius ("5123" = 51.23 °C) together with
/// the fine temperature for the pressure and humidity stages.
pub fn compensate_temperature(adc_t: u32, cal: &CalibrationSet) -> (i32, FineTemperature) {
    let adc = adc_t as i32;
    let t1 = i32::from(cal.dig_t1);
    let t2 = i32::from(cal.dig_t2);
    let t3 = i32::from(cal.dig_t3);

    let var1 = (adc >> 3).wrapping_sub(t1 << 1).wrapping_mul(t2) >> 11;
    let delta = (adc >> 4).wrapping_sub(t1);
    let var2 = (delta.wrapping_mul(delta) >> 12).wrapping_mul(t3) >> 14;

    let t_fine = var1.wrapping_add(var2);
    let centi = t_fine.wrapping_mul(5).wrapping_add(128) >> 8;

    (centi, FineTemperature(t_fine))
}

/// Compensate a 20-bit pressure sample
///
/// Returns pascal in Q24.8 ("24674867" = 24674867 / 256 = 96386.2 Pa).
/// When the calibration drives the divisor to zero the result is `0`.
pub fn compensate_pressure(adc_p: u32, t_fine: FineTemperature, cal: &CalibrationSet) -> i64 {
    let p1 = i64::from(cal.dig_p1);
    let p2 = i64::from(cal.dig_p2);
    let p3 = i64::from(cal.dig_p3);
    let p4 = i64::from(cal.dig_p4);
    let p5 = i64::from(cal.dig_p5);
    let p6 = i64::from(cal.dig_p6);
    let p7 = i64::from(cal.dig_p7);
    let p8 = i64::from(cal.dig_p8);
    let p9 = i64::from(cal.dig_p9);

    let mut var1 = i64::from(t_fine.0) - 128_000;
    let mut var2 = var1.wrapping_mul(var1).wrapping_mul(p6);
    var2 = var2.wrapping_add(var1.wrapping_mul(p5) << 17);
    var2 = var2.wrapping_add(p4 << 35);
    var1 = (var1.wrapping_mul(var1).wrapping_mul(p3) >> 8).wrapping_add(var1.wrapping_mul(p2) << 12);
    var1 = (1i64 << 47).wrapping_add(var1).wrapping_mul(p1) >> 33;

    if var1 == 0 {
        log_warn!("BME280 pressure divisor is zero, reporting 0");
        return 0;
    }

    let mut p = 1_048_576 - i64::from(adc_p);
    p = (p << 31).wrapping_sub(var2).wrapping_mul(3125).wrapping_div(var1);
    var1 = p9.wrapping_mul(p >> 13).wrapping_mul(p >> 13) >> 25;
    var2 = p8.wrapping_mul(p) >> 19;

    (p.wrapping_add(var1).wrapping_add(var2) >> 8).wrapping_add(p7 << 4)
}

/// Compensate a 16-bit humidity sample
///
/// Returns %RH in Q22.10 ("47445" = 47445 / 1024 = 46.333 %RH). The
/// intermediate saturates at [0, 100 %RH] before the final shift, so the
/// result never exceeds 102400.
pub fn compensate_humidity(adc_h: u32, t_fine: FineTemperature, cal: &CalibrationSet) -> u32 {
    let adc = adc_h as i32;
    let h1 = i32::from(cal.dig_h1);
    let h2 = i32::from(cal.dig_h2);
    let h3 = i32::from(cal.dig_h3);
    let h4 = i32::from(cal.dig_h4);
    let h5 = i32::from(cal.dig_h5);
    let h6 = i32::from(cal.dig_h6);

    let v = t_fine.0.wrapping_sub(76_800);

    let offset = (adc << 14)
        .wrapping_sub(h4 << 20)
        .wrapping_sub(h5.wrapping_mul(v))
        .wrapping_add(16_384)
        >> 15;
    let gain_t = (v.wrapping_mul(h6) >> 10)
        .wrapping_mul((v.wrapping_mul(h3) >> 11).wrapping_add(32_768))
        >> 10;
    let gain = gain_t
        .wrapping_add(2_097_152)
        .wrapping_mul(h2)
        .wrapping_add(8_192)
        >> 14;

    let mut x = offset.wrapping_mul(gain);
    let square = (x >> 15).wrapping_mul(x >> 15) >> 7;
    x = x.wrapping_sub(square.wrapping_mul(h1) >> 4);

    (x.clamp(0, HUMIDITY_Q_MAX) >> 12) as u32
}

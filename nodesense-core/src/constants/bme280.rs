//! BME280 Register Map and Protocol Constants
//!
//! Register offsets, block lengths and fixed values for the Bosch BME280
//! combined temperature/pressure/humidity sensor.
//!
//! Source: Bosch BST-BME280-DS002, sections 4.2 (trimming) and 5.3/5.4 (memory map)

// ===== BUS ADDRESSES =====

/// 7-bit I2C address with SDO tied to GND.
pub const ADDRESS_PRIMARY: u8 = 0x76;

/// 7-bit I2C address with SDO tied to VDDIO.
pub const ADDRESS_SECONDARY: u8 = 0x77;

// ===== IDENTITY =====

/// Chip identification register.
pub const REG_CHIP_ID: u8 = 0xD0;

/// Value every BME280 reports in `REG_CHIP_ID`.
///
/// A BMP280 answers 0x58 at the same address and would otherwise pass
/// every other step of initialization.
pub const CHIP_ID: u8 = 0x60;

// ===== CONTROL =====

/// Soft reset register.
pub const REG_RESET: u8 = 0xE0;

/// Magic value that triggers a power-on-reset sequence.
pub const SOFT_RESET_COMMAND: u8 = 0xB6;

/// Humidity oversampling. Only latched by a following `REG_CTRL_MEAS` write.
pub const REG_CTRL_HUM: u8 = 0xF2;

/// Device status (`measuring`, `im_update`).
pub const REG_STATUS: u8 = 0xF3;

/// Temperature/pressure oversampling and power mode.
pub const REG_CTRL_MEAS: u8 = 0xF4;

/// Standby time, IIR filter and 3-wire SPI enable.
pub const REG_CONFIG: u8 = 0xF5;

/// `REG_STATUS` bit 3: a conversion is running.
pub const STATUS_MEASURING: u8 = 0x08;

/// `REG_STATUS` bit 0: NVM data is being copied to image registers.
pub const STATUS_IM_UPDATE: u8 = 0x01;

// ===== CALIBRATION WINDOWS =====
//
// Trimming parameters live in two non-contiguous NVM regions. The first
// region also holds dig_H1 at 0xA1, one byte past its end plus a gap.

/// First calibration window: dig_T1..dig_T3, dig_P1..dig_P9 (0x88..0x9F).
pub const REG_CALIB_TP: u8 = 0x88;

/// Length of the temperature/pressure window.
pub const CALIB_TP_LEN: usize = 24;

/// dig_H1.
pub const REG_CALIB_H1: u8 = 0xA1;

/// Length of the dig_H1 window.
pub const CALIB_H1_LEN: usize = 1;

/// Second calibration window: dig_H2..dig_H6 (0xE1..0xE7).
pub const REG_CALIB_H: u8 = 0xE1;

/// Length of the humidity window.
pub const CALIB_H_LEN: usize = 7;

// ===== MEASUREMENT DATA =====

/// First byte of the burst: press_msb. Followed by press_lsb, press_xlsb,
/// temp_msb, temp_lsb, temp_xlsb, hum_msb, hum_lsb.
pub const REG_DATA: u8 = 0xF7;

/// Burst length covering pressure, temperature and humidity.
pub const DATA_LEN: usize = 8;

// ===== COMPENSATION =====

/// Saturation bound of the humidity intermediate before the final `>> 12`.
///
/// Equals 100 %RH << 22, which becomes 102400 (100.0 in Q22.10) after the shift.
pub const HUMIDITY_Q_MAX: i32 = 419_430_400;

/// Default per-transfer timeout handed to the bus (ms).
pub const DEFAULT_TIMEOUT_MS: u32 = 100;

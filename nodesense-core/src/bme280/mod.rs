//! BME280 Register Driver
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized --initialize()--> Ready --read()--> Ready
//!        ^                          |
//!        +------- soft_reset() -----+
//! ```
//!
//! There is no uninitialized driver value. [`Bme280::initialize`] either
//! returns a ready driver holding a complete [`CalibrationSet`] or an error,
//! so a reading can never be computed from missing or partial calibration.
//!
//! ## Bus Ownership
//!
//! The driver borrows the bus per call instead of owning it. Several devices
//! (or a BME280 and something else) can share one bus, and two BME280s at
//! 0x76 and 0x77 are just two driver values. Calls are blocking; the caller
//! serializes access to the bus and to each driver.
//!
//! ## Read Cycle
//!
//! One 8-byte burst from 0xF7, unpacked into a [`RawSample`], compensated in
//! the fixed order temperature, pressure, humidity. Any transfer failure
//! fails the whole cycle; there is no partial reading and no retry.
//!
//! ```rust,ignore
//! use nodesense_core::bme280::{Bme280, DriverConfig};
//! use nodesense_core::traits::I2cBus;
//!
//! let mut bus = I2cBus::new(i2c);
//! let sensor = Bme280::initialize(&mut bus, DriverConfig::default())?;
//!
//! loop {
//!     match sensor.read(&mut bus) {
//!         Ok(reading) => publish(reading),
//!         Err(_) => {} // no new data this cycle
//!     }
//! }
//! ```

mod calibration;
mod compensation;
mod config;
mod measurement;

pub use calibration::CalibrationSet;
pub use compensation::{
    compensate_humidity, compensate_pressure, compensate_temperature, FineTemperature,
};
pub use config::{DriverConfig, Filter, Mode, Oversampling, Standby};
pub use measurement::{RawSample, SensorReading};

use crate::constants::bme280::{
    CHIP_ID, DATA_LEN, REG_CHIP_ID, REG_CONFIG, REG_CTRL_HUM, REG_CTRL_MEAS, REG_DATA,
    REG_RESET, REG_STATUS, SOFT_RESET_COMMAND, STATUS_IM_UPDATE, STATUS_MEASURING,
};
use crate::errors::{DriverError, DriverResult};
use crate::traits::RegisterBus;

/// Decoded status register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    /// A conversion is running
    pub measuring: bool,
    /// NVM is being copied to the image registers
    pub im_update: bool,
}

/// Initialized BME280
#[derive(Debug, Clone)]
pub struct Bme280 {
    config: DriverConfig,
    calibration: CalibrationSet,
}

impl Bme280 {
    /// Check identity, read calibration and apply `config`
    ///
    /// Configuration registers are written humidity first: the device only
    /// latches `ctrl_hum` on the following `ctrl_meas` write.
    pub fn initialize<B: RegisterBus>(
        bus: &mut B,
        config: DriverConfig,
    ) -> DriverResult<Self, B::Error> {
        let address = config.address;
        let timeout = config.timeout_ms;

        let mut id = [0u8; 1];
        bus.read_register(address, REG_CHIP_ID, &mut id, timeout)
            .map_err(|e| {
                log_warn!("BME280 at {}: chip id read failed", address);
                DriverError::IdentityReadFailed(e)
            })?;

        if id[0] != CHIP_ID {
            log_warn!("BME280 at {}: unexpected chip id {}", address, id[0]);
            return Err(DriverError::IdentityMismatch {
                found: id[0],
                expected: CHIP_ID,
            });
        }

        let calibration = CalibrationSet::read(bus, address, timeout).map_err(|e| {
            log_warn!("BME280 at {}: calibration read failed", address);
            DriverError::CalibrationReadFailed(e)
        })?;

        let writes = [
            (REG_CTRL_HUM, config.ctrl_hum()),
            (REG_CTRL_MEAS, config.ctrl_meas()),
            (REG_CONFIG, config.config()),
        ];
        for (register, value) in writes {
            bus.write_register(address, register, &[value], timeout)
                .map_err(|e| {
                    log_warn!("BME280 at {}: write to register {} failed", address, register);
                    DriverError::ConfigWriteFailed(e)
                })?;
        }

        log_debug!(
            "BME280 at {} ready: ctrl_hum={} ctrl_meas={} config={}",
            address,
            config.ctrl_hum(),
            config.ctrl_meas(),
            config.config()
        );

        Ok(Self { config, calibration })
    }

    /// Burst-read one raw sample triple
    pub fn read_raw<B: RegisterBus>(&self, bus: &mut B) -> DriverResult<RawSample, B::Error> {
        let mut data = [0u8; DATA_LEN];
        bus.read_register(self.config.address, REG_DATA, &mut data, self.config.timeout_ms)
            .map_err(|e| {
                log_warn!("BME280 at {}: data read failed", self.config.address);
                DriverError::ReadFailed(e)
            })?;

        Ok(RawSample::from_bytes(&data))
    }

    /// Read and compensate one measurement
    pub fn read<B: RegisterBus>(&self, bus: &mut B) -> DriverResult<SensorReading, B::Error> {
        let raw = self.read_raw(bus)?;
        Ok(self.compensate(&raw))
    }

    /// Compensate a raw sample with this device's calibration
    pub fn compensate(&self, raw: &RawSample) -> SensorReading {
        let cal = &self.calibration;

        let (centi, t_fine) = compensate_temperature(raw.temperature, cal);
        let pressure = compensate_pressure(raw.pressure, t_fine, cal);
        let humidity = compensate_humidity(raw.humidity, t_fine, cal);

        SensorReading {
            temperature: centi as f32 / 100.0,
            humidity: humidity as f32 / 1024.0,
            pressure: pressure as f32 / 256.0 / 100.0,
        }
    }

    /// Read the status register
    pub fn status<B: RegisterBus>(&self, bus: &mut B) -> DriverResult<Status, B::Error> {
        let mut status = [0u8; 1];
        bus.read_register(self.config.address, REG_STATUS, &mut status, self.config.timeout_ms)
            .map_err(DriverError::ReadFailed)?;

        Ok(Status {
            measuring: status[0] & STATUS_MEASURING != 0,
            im_update: status[0] & STATUS_IM_UPDATE != 0,
        })
    }

    /// Reset the device to its power-on state
    ///
    /// Consumes the driver: after a reset the device is back in sleep mode
    /// with default settings and must go through [`Bme280::initialize`] again.
    pub fn soft_reset<B: RegisterBus>(self, bus: &mut B) -> DriverResult<(), B::Error> {
        bus.write_register(
            self.config.address,
            REG_RESET,
            &[SOFT_RESET_COMMAND],
            self.config.timeout_ms,
        )
        .map_err(DriverError::ConfigWriteFailed)
    }

    /// Trimming parameters read at initialization
    pub fn calibration(&self) -> &CalibrationSet {
        &self.calibration
    }

    /// Settings applied at initialization
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }
}

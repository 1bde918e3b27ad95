//! Measurement configuration
//!
//! Three registers control how the device samples:
//!
//! ```text
//! ctrl_hum  (0xF2)  ----- osrs_h[2:0]
//! ctrl_meas (0xF4)  osrs_t[7:5] osrs_p[4:2] mode[1:0]
//! config    (0xF5)  t_sb[7:5]   filter[4:2] spi3w_en[0]
//! ```
//!
//! The default is what a slow monitoring node wants: one sample per channel,
//! continuous conversions once a second, no IIR filtering.
//!
//! ```rust
//! use nodesense_core::bme280::{DriverConfig, Oversampling, Standby};
//!
//! let config = DriverConfig::default();
//! assert_eq!((config.ctrl_hum(), config.ctrl_meas(), config.config()), (0x01, 0x27, 0xA0));
//!
//! // Faster, quieter pressure for an altimeter
//! let altimeter = DriverConfig::default()
//!     .with_pressure_oversampling(Oversampling::X16)
//!     .with_standby(Standby::Ms62_5);
//! ```

use crate::constants::bme280::{ADDRESS_PRIMARY, DEFAULT_TIMEOUT_MS};

/// Samples averaged per reported measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Oversampling {
    /// Channel disabled, output reads 0x80000
    Skipped,
    #[default]
    X1,
    X2,
    X4,
    X8,
    X16,
}

impl Oversampling {
    /// Register field value
    pub const fn bits(self) -> u8 {
        match self {
            Self::Skipped => 0b000,
            Self::X1 => 0b001,
            Self::X2 => 0b010,
            Self::X4 => 0b011,
            Self::X8 => 0b100,
            Self::X16 => 0b101,
        }
    }
}

/// Power mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// No conversions
    Sleep,
    /// One conversion, then back to sleep
    Forced,
    /// Continuous conversions separated by the standby interval
    #[default]
    Normal,
}

impl Mode {
    /// Register field value
    pub const fn bits(self) -> u8 {
        match self {
            Self::Sleep => 0b00,
            Self::Forced => 0b01,
            Self::Normal => 0b11,
        }
    }
}

/// Inactive time between conversions in normal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Standby {
    Ms0_5,
    Ms62_5,
    Ms125,
    Ms250,
    Ms500,
    #[default]
    Ms1000,
    Ms10,
    Ms20,
}

impl Standby {
    /// Register field value
    pub const fn bits(self) -> u8 {
        match self {
            Self::Ms0_5 => 0b000,
            Self::Ms62_5 => 0b001,
            Self::Ms125 => 0b010,
            Self::Ms250 => 0b011,
            Self::Ms500 => 0b100,
            Self::Ms1000 => 0b101,
            Self::Ms10 => 0b110,
            Self::Ms20 => 0b111,
        }
    }
}

/// IIR filter coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Filter {
    #[default]
    Off,
    X2,
    X4,
    X8,
    X16,
}

impl Filter {
    /// Register field value
    pub const fn bits(self) -> u8 {
        match self {
            Self::Off => 0b000,
            Self::X2 => 0b001,
            Self::X4 => 0b010,
            Self::X8 => 0b011,
            Self::X16 => 0b100,
        }
    }
}

/// Driver settings applied during initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriverConfig {
    /// 7-bit device address
    pub address: u8,
    /// Timeout handed to every bus transfer (ms)
    pub timeout_ms: u32,
    pub humidity_oversampling: Oversampling,
    pub temperature_oversampling: Oversampling,
    pub pressure_oversampling: Oversampling,
    pub mode: Mode,
    pub standby: Standby,
    pub filter: Filter,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            address: ADDRESS_PRIMARY,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            humidity_oversampling: Oversampling::X1,
            temperature_oversampling: Oversampling::X1,
            pressure_oversampling: Oversampling::X1,
            mode: Mode::Normal,
            standby: Standby::Ms1000,
            filter: Filter::Off,
        }
    }
}

impl DriverConfig {
    /// Use another device address (e.g. `ADDRESS_SECONDARY`)
    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    pub const fn with_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub const fn with_humidity_oversampling(mut self, osrs: Oversampling) -> Self {
        self.humidity_oversampling = osrs;
        self
    }

    pub const fn with_temperature_oversampling(mut self, osrs: Oversampling) -> Self {
        self.temperature_oversampling = osrs;
        self
    }

    pub const fn with_pressure_oversampling(mut self, osrs: Oversampling) -> Self {
        self.pressure_oversampling = osrs;
        self
    }

    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub const fn with_standby(mut self, standby: Standby) -> Self {
        self.standby = standby;
        self
    }

    pub const fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// `ctrl_hum` register value
    pub const fn ctrl_hum(&self) -> u8 {
        self.humidity_oversampling.bits()
    }

    /// `ctrl_meas` register value
    pub const fn ctrl_meas(&self) -> u8 {
        (self.temperature_oversampling.bits() << 5)
            | (self.pressure_oversampling.bits() << 2)
            | self.mode.bits()
    }

    /// `config` register value, 3-wire SPI always disabled
    pub const fn config(&self) -> u8 {
        (self.standby.bits() << 5) | (self.filter.bits() << 2)
    }
}

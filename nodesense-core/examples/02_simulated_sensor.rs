//! Simulated BME280 Example
//!
//! Runs the register driver against an in-memory device loaded with the
//! datasheet calibration, so the full initialize/read cycle can be tried
//! without hardware.
//!
//! ## What You'll Learn
//!
//! - Implementing `RegisterBus` for your own transport
//! - Initializing with a custom `DriverConfig`
//! - Handling identity and transfer errors
//!
//! On real hardware wrap an embedded-hal I2C peripheral in `I2cBus` instead.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_simulated_sensor
//! ```

use nodesense_core::{
    bme280::{Bme280, DriverConfig, Filter, Oversampling},
    constants::bme280::{ADDRESS_PRIMARY, ADDRESS_SECONDARY, CHIP_ID, REG_CHIP_ID, REG_DATA},
    errors::DriverError,
    traits::RegisterBus,
};

/// One BME280 as a register file
struct SimulatedBme280 {
    address: u8,
    registers: [u8; 256],
}

/// Nothing acknowledged the address
#[derive(Debug)]
struct Nack;

impl SimulatedBme280 {
    fn new(address: u8) -> Self {
        let mut registers = [0u8; 256];
        registers[REG_CHIP_ID as usize] = CHIP_ID;
        registers[0x88..0xA0].copy_from_slice(&[
            0x70, 0x6B, 0x43, 0x67, 0x18, 0xFC, 0x7D, 0x8E, 0x43, 0xD6, 0xD0, 0x0B,
            0x27, 0x0B, 0x8C, 0x00, 0xF9, 0xFF, 0x8C, 0x3C, 0xF8, 0xC6, 0x70, 0x17,
        ]);
        registers[0xA1] = 75;
        registers[0xE1..0xE8].copy_from_slice(&[0x6A, 0x01, 0x00, 0x13, 0x29, 0x03, 0x1E]);
        Self { address, registers }
    }

    /// Latch a new conversion result into the data registers
    fn convert(&mut self, adc_p: u32, adc_t: u32, adc_h: u16) {
        let p = adc_p << 4;
        let t = adc_t << 4;
        let data = [
            (p >> 16) as u8,
            (p >> 8) as u8,
            p as u8,
            (t >> 16) as u8,
            (t >> 8) as u8,
            t as u8,
            (adc_h >> 8) as u8,
            adc_h as u8,
        ];
        let start = REG_DATA as usize;
        self.registers[start..start + data.len()].copy_from_slice(&data);
    }
}

impl RegisterBus for SimulatedBme280 {
    type Error = Nack;

    fn read_register(
        &mut self,
        address: u8,
        register: u8,
        buf: &mut [u8],
        _timeout_ms: u32,
    ) -> Result<(), Nack> {
        if address != self.address {
            return Err(Nack);
        }
        let start = register as usize;
        buf.copy_from_slice(&self.registers[start..start + buf.len()]);
        Ok(())
    }

    fn write_register(
        &mut self,
        address: u8,
        register: u8,
        bytes: &[u8],
        _timeout_ms: u32,
    ) -> Result<(), Nack> {
        if address != self.address {
            return Err(Nack);
        }
        let start = register as usize;
        self.registers[start..start + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }
}

fn main() {
    println!("NodeSense Simulated BME280 Example");
    println!("==================================\n");

    let mut bus = SimulatedBme280::new(ADDRESS_PRIMARY);

    // Probing the wrong address fails at the identity read
    let probe = DriverConfig::default().with_address(ADDRESS_SECONDARY);
    match Bme280::initialize(&mut bus, probe) {
        Err(DriverError::IdentityReadFailed(e)) => {
            println!("No device at {ADDRESS_SECONDARY:#04x}: {e:?}");
        }
        other => println!("Unexpected probe result: {other:?}"),
    }

    let config = DriverConfig::default()
        .with_humidity_oversampling(Oversampling::X2)
        .with_pressure_oversampling(Oversampling::X4)
        .with_filter(Filter::X4);

    let sensor = match Bme280::initialize(&mut bus, config) {
        Ok(sensor) => sensor,
        Err(e) => {
            println!("Initialization failed: {e}");
            return;
        }
    };
    println!(
        "Initialized at {ADDRESS_PRIMARY:#04x}: ctrl_hum={:#04x} ctrl_meas={:#04x} config={:#04x}",
        config.ctrl_hum(),
        config.ctrl_meas(),
        config.config()
    );
    println!("dig_T1={} dig_P1={}\n", sensor.calibration().dig_t1, sensor.calibration().dig_p1);

    // A warming afternoon
    let samples = [
        (415_148, 519_888, 30_000),
        (400_000, 525_000, 29_500),
        (380_000, 532_000, 28_800),
        (350_000, 540_000, 28_000),
    ];

    println!("{:>10} {:>10} {:>12}", "°C", "%RH", "hPa");
    for (adc_p, adc_t, adc_h) in samples {
        bus.convert(adc_p, adc_t, adc_h);
        match sensor.read(&mut bus) {
            Ok(r) => println!("{:>10.2} {:>10.2} {:>12.2}", r.temperature, r.humidity, r.pressure),
            Err(e) => println!("Read failed: {}", e.as_str()),
        }
    }
}

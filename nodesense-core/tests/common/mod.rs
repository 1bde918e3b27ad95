//! Common test utilities for integration tests
//!
//! This module provides:
//! - A scripted register-map bus with failure injection
//! - A fake embedded-hal I2C device backed by the same register map
//! - The Bosch datasheet calibration dataset and matching raw sample

#![allow(dead_code)]

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

use nodesense_core::bme280::CalibrationSet;
use nodesense_core::constants::bme280::{
    ADDRESS_PRIMARY, CHIP_ID, REG_CALIB_H, REG_CALIB_H1, REG_CALIB_TP, REG_CHIP_ID, REG_DATA,
};
use nodesense_core::traits::RegisterBus;

/// Datasheet trimming values for the temperature/pressure window (0x88..0x9F)
pub const CALIB_TP: [u8; 24] = [
    0x70, 0x6B, 0x43, 0x67, 0x18, 0xFC, 0x7D, 0x8E, 0x43, 0xD6, 0xD0, 0x0B,
    0x27, 0x0B, 0x8C, 0x00, 0xF9, 0xFF, 0x8C, 0x3C, 0xF8, 0xC6, 0x70, 0x17,
];

/// dig_H1 (0xA1)
pub const CALIB_H1: u8 = 75;

/// H2=362, H3=0, H4=313, H5=50, H6=30 (0xE1..0xE7)
pub const CALIB_H: [u8; 7] = [0x6A, 0x01, 0x00, 0x13, 0x29, 0x03, 0x1E];

/// adc_P=415148, adc_T=519888, adc_H=30000
pub const RAW_DATA: [u8; 8] = [0x65, 0x5A, 0xC0, 0x7E, 0xED, 0x00, 0x75, 0x30];

/// Expected integer-stage results for `RAW_DATA` with the datasheet calibration
pub const EXPECTED_T_FINE: i32 = 128_422;
pub const EXPECTED_CENTI_C: i32 = 2508;
pub const EXPECTED_PRESSURE_Q24_8: i64 = 25_767_233;
pub const EXPECTED_HUMIDITY_Q22_10: u32 = 56_317;

pub fn datasheet_calibration() -> CalibrationSet {
    CalibrationSet {
        dig_t1: 27504,
        dig_t2: 26435,
        dig_t3: -1000,
        dig_p1: 36477,
        dig_p2: -10685,
        dig_p3: 3024,
        dig_p4: 2855,
        dig_p5: 140,
        dig_p6: -7,
        dig_p7: 15500,
        dig_p8: -14600,
        dig_p9: 6000,
        dig_h1: 75,
        dig_h2: 362,
        dig_h3: 0,
        dig_h4: 313,
        dig_h5: 50,
        dig_h6: 30,
    }
}

/// Transport failure injected by the mock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// Nobody answered at the address
    NoDevice,
    /// Injected failure
    Timeout,
}

/// Direction of a recorded transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

/// One recorded transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub access: Access,
    pub address: u8,
    pub register: u8,
    pub len: usize,
    pub timeout_ms: u32,
}

/// BME280 simulated as a 256-byte register file
pub struct MockBus {
    pub address: u8,
    pub registers: [u8; 256],
    pub log: Vec<Transfer>,
    pub writes: Vec<(u8, Vec<u8>)>,
    fail: Option<(Access, u8)>,
}

impl MockBus {
    /// Empty register file answering at `address`
    pub fn blank(address: u8) -> Self {
        Self {
            address,
            registers: [0; 256],
            log: Vec::new(),
            writes: Vec::new(),
            fail: None,
        }
    }

    /// Device with chip id, datasheet calibration and a loaded sample
    pub fn datasheet() -> Self {
        let mut bus = Self::blank(ADDRESS_PRIMARY);
        bus.registers[REG_CHIP_ID as usize] = CHIP_ID;
        bus.load(REG_CALIB_TP, &CALIB_TP);
        bus.registers[REG_CALIB_H1 as usize] = CALIB_H1;
        bus.load(REG_CALIB_H, &CALIB_H);
        bus.load(REG_DATA, &RAW_DATA);
        bus
    }

    /// Overwrite registers starting at `register`
    pub fn load(&mut self, register: u8, bytes: &[u8]) {
        let start = register as usize;
        self.registers[start..start + bytes.len()].copy_from_slice(bytes);
    }

    /// Fail the next transfer of this kind that starts at `register`
    pub fn fail_on(mut self, access: Access, register: u8) -> Self {
        self.inject(access, register);
        self
    }

    /// Arm a one-shot failure on an existing bus
    pub fn inject(&mut self, access: Access, register: u8) {
        self.fail = Some((access, register));
    }

    /// Registers written, in order
    pub fn written_registers(&self) -> Vec<u8> {
        self.writes.iter().map(|(register, _)| *register).collect()
    }

    fn check(&mut self, access: Access, address: u8, register: u8) -> Result<(), BusError> {
        if address != self.address {
            return Err(BusError::NoDevice);
        }
        if self.fail == Some((access, register)) {
            self.fail = None;
            return Err(BusError::Timeout);
        }
        Ok(())
    }
}

impl RegisterBus for MockBus {
    type Error = BusError;

    fn read_register(
        &mut self,
        address: u8,
        register: u8,
        buf: &mut [u8],
        timeout_ms: u32,
    ) -> Result<(), Self::Error> {
        self.log.push(Transfer {
            access: Access::Read,
            address,
            register,
            len: buf.len(),
            timeout_ms,
        });
        self.check(Access::Read, address, register)?;

        let start = register as usize;
        buf.copy_from_slice(&self.registers[start..start + buf.len()]);
        Ok(())
    }

    fn write_register(
        &mut self,
        address: u8,
        register: u8,
        bytes: &[u8],
        timeout_ms: u32,
    ) -> Result<(), Self::Error> {
        self.log.push(Transfer {
            access: Access::Write,
            address,
            register,
            len: bytes.len(),
            timeout_ms,
        });
        self.check(Access::Write, address, register)?;

        self.load(register, bytes);
        self.writes.push((register, bytes.to_vec()));
        Ok(())
    }
}

/// Register file behind an embedded-hal I2C interface
///
/// The first written byte of a transaction sets the register pointer;
/// further writes and reads auto-increment it.
pub struct FakeI2c {
    pub address: u8,
    pub registers: [u8; 256],
    pub transactions: usize,
}

impl FakeI2c {
    pub fn from_mock(mock: &MockBus) -> Self {
        Self {
            address: mock.address,
            registers: mock.registers,
            transactions: 0,
        }
    }
}

impl ErrorType for FakeI2c {
    type Error = ErrorKind;
}

impl I2c for FakeI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if address != self.address {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }
        self.transactions += 1;

        let mut pointer: Option<usize> = None;
        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => {
                    for &byte in bytes.iter() {
                        match pointer {
                            None => pointer = Some(byte as usize),
                            Some(p) => {
                                self.registers[p] = byte;
                                pointer = Some(p + 1);
                            }
                        }
                    }
                }
                Operation::Read(buf) => {
                    let p = pointer.unwrap_or(0);
                    buf.copy_from_slice(&self.registers[p..p + buf.len()]);
                    pointer = Some(p + buf.len());
                }
            }
        }
        Ok(())
    }
}

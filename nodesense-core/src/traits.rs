//! Core traits for bus access
//!
//! The driver never owns the bus. Callers hand it something that can read and
//! write device registers, and the driver borrows it for the duration of one
//! operation. Keep this seam small - embedded targets supply their own.

use embedded_hal::i2c::{I2c, Operation};

/// Blocking register-level transfer capability
///
/// Addresses are 7-bit device addresses, registers are 8-bit offsets. A
/// transfer that times out is reported as an ordinary `Err`.
pub trait RegisterBus {
    /// Transport error type
    type Error: core::fmt::Debug;

    /// Fill `buf` starting at `register`, auto-incrementing
    fn read_register(
        &mut self,
        address: u8,
        register: u8,
        buf: &mut [u8],
        timeout_ms: u32,
    ) -> Result<(), Self::Error>;

    /// Write `bytes` starting at `register`
    fn write_register(
        &mut self,
        address: u8,
        register: u8,
        bytes: &[u8],
        timeout_ms: u32,
    ) -> Result<(), Self::Error>;
}

impl<B: RegisterBus + ?Sized> RegisterBus for &mut B {
    type Error = B::Error;

    fn read_register(
        &mut self,
        address: u8,
        register: u8,
        buf: &mut [u8],
        timeout_ms: u32,
    ) -> Result<(), Self::Error> {
        (**self).read_register(address, register, buf, timeout_ms)
    }

    fn write_register(
        &mut self,
        address: u8,
        register: u8,
        bytes: &[u8],
        timeout_ms: u32,
    ) -> Result<(), Self::Error> {
        (**self).write_register(address, register, bytes, timeout_ms)
    }
}

/// `RegisterBus` over any blocking embedded-hal 1.0 I2C peripheral
///
/// The timeout argument is advisory here: embedded-hal buses carry their own
/// timeout configuration, set up by the HAL that built them.
#[derive(Debug)]
pub struct I2cBus<I> {
    i2c: I,
}

impl<I: I2c> I2cBus<I> {
    /// Wrap an I2C peripheral
    pub const fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Borrow the wrapped peripheral
    pub fn inner(&self) -> &I {
        &self.i2c
    }

    /// Mutably borrow the wrapped peripheral
    pub fn inner_mut(&mut self) -> &mut I {
        &mut self.i2c
    }

    /// Give the peripheral back
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> RegisterBus for I2cBus<I> {
    type Error = I::Error;

    fn read_register(
        &mut self,
        address: u8,
        register: u8,
        buf: &mut [u8],
        _timeout_ms: u32,
    ) -> Result<(), Self::Error> {
        self.i2c.write_read(address, &[register], buf)
    }

    fn write_register(
        &mut self,
        address: u8,
        register: u8,
        bytes: &[u8],
        _timeout_ms: u32,
    ) -> Result<(), Self::Error> {
        // Adjacent writes in one transaction go out without a repeated start
        self.i2c.transaction(
            address,
            &mut [Operation::Write(&[register]), Operation::Write(bytes)],
        )
    }
}

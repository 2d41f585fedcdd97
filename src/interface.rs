use embedded_hal::i2c::{I2c, Operation};

use crate::command::{CONTROL_COMMAND, CONTROL_DATA};

/// 7-bit address of SSD1306 modules with the SA0 pin low.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x3C;

/// Byte transport between the driver and the display controller.
///
/// Implementations do not retry; errors go straight back to the caller.
pub trait DisplayInterface {
    type Error: core::fmt::Debug;

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error>;

    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

/// [`DisplayInterface`] over an `embedded-hal` I2C bus.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> I2cInterface<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_I2C_ADDRESS)
    }

    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> DisplayInterface for I2cInterface<I2C> {
    type Error = I2C::Error;

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[CONTROL_COMMAND, command])
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        // Adjacent writes in one transaction go out without a repeated start,
        // so the control byte and the payload form a single I2C message.
        self.i2c.transaction(
            self.address,
            &mut [Operation::Write(&[CONTROL_DATA]), Operation::Write(data)],
        )
    }
}

//! Bus interface implementations for the LSM6DSOX
//!
//! Both adapters implement the `device-driver` register interface traits, which
//! is the only view of the bus the rest of the driver has: a block read and a
//! block write starting at an 8-bit register address. The LSM6DSOX
//! auto-increments the register address during multi-byte transfers
//! (`CTRL3_C.IF_INC`, set by default), so one transaction covers a run of
//! consecutive registers.

use crate::access::MAX_BLOCK_LEN;
use crate::{Error, I2C_ADDRESS_SA0_HIGH, I2C_ADDRESS_SA0_LOW};
use device_driver::RegisterInterface;

/// SPI read flag (bit 7 of the address byte)
const SPI_READ: u8 = 0x80;

/// Prefix `data` with the register address byte
///
/// Data beyond [`MAX_BLOCK_LEN`] is dropped in release builds and panics in
/// debug builds. Returns the frame buffer and the number of valid bytes in it.
fn frame(address: u8, data: &[u8]) -> ([u8; MAX_BLOCK_LEN + 1], usize) {
    debug_assert!(
        data.len() <= MAX_BLOCK_LEN,
        "register write exceeds the 32-byte block limit"
    );
    let mut buffer = [0u8; MAX_BLOCK_LEN + 1];
    buffer[0] = address;
    let len = data.len().min(MAX_BLOCK_LEN);
    buffer[1..=len].copy_from_slice(&data[..len]);
    (buffer, len + 1)
}

/// I2C interface for the LSM6DSOX
///
/// Register writes carry at most 32 data bytes per transaction.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface with the default address (0x6A, SA0 pin LOW)
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut imu = Lsm6dsox::new(interface, &mut delay)?;
    /// ```
    pub const fn default(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_SA0_LOW,
        }
    }

    /// Create a new I2C interface with the alternative address (0x6B, SA0 pin HIGH)
    ///
    /// Most breakout boards (Adafruit, SparkFun) pull SA0 high only when the
    /// address jumper is closed.
    pub const fn alternative(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_SA0_HIGH,
        }
    }

    /// Create a new I2C interface with a custom device address
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    /// * `address` - The 7-bit I2C device address
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// The 7-bit device address in use
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c.write_read(self.address, &[address], read_data)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let (buffer, len) = frame(address, write_data);
        self.i2c.write(self.address, &buffer[..len])
    }
}

#[cfg(feature = "async")]
impl<I2C, E> device_driver::AsyncRegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal_async::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    async fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c
            .write_read(self.address, &[address], read_data)
            .await
    }

    async fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let (buffer, len) = frame(address, write_data);
        self.i2c.write(self.address, &buffer[..len]).await
    }
}

/// SPI interface for the LSM6DSOX
///
/// Register writes carry at most 32 data bytes per transaction.
///
/// Chip select is owned by the `SpiDevice` implementation you provide, e.g.
/// with `embedded-hal-bus`:
/// ```ignore
/// let spi_device = embedded_hal_bus::spi::ExclusiveDevice::new(spi_bus, cs_pin, delay);
/// let interface = SpiInterface::new(spi_device);
/// ```
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Create a new SPI interface with the given SPI device
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Consume the interface and return the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI, E> RegisterInterface for SpiInterface<SPI>
where
    SPI: embedded_hal::spi::SpiDevice<Error = E>,
{
    type Error = Error<E>;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let mut operations = [
            embedded_hal::spi::Operation::Write(&[address | SPI_READ]),
            embedded_hal::spi::Operation::Read(read_data),
        ];

        self.spi.transaction(&mut operations).map_err(Error::Bus)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let (buffer, len) = frame(address & !SPI_READ, write_data);
        self.spi.write(&buffer[..len]).map_err(Error::Bus)
    }
}

#[cfg(feature = "async")]
impl<SPI, E> device_driver::AsyncRegisterInterface for SpiInterface<SPI>
where
    SPI: embedded_hal_async::spi::SpiDevice<Error = E>,
{
    type Error = Error<E>;
    type AddressType = u8;

    async fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let mut operations = [
            embedded_hal_async::spi::Operation::Write(&[address | SPI_READ]),
            embedded_hal_async::spi::Operation::Read(read_data),
        ];

        self.spi
            .transaction(&mut operations)
            .await
            .map_err(Error::Bus)
    }

    async fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let (buffer, len) = frame(address & !SPI_READ, write_data);
        self.spi.write(&buffer[..len]).await.map_err(Error::Bus)
    }
}

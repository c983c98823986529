//! Bit-packed fields within a single register

#[cfg(feature = "async")]
use device_driver::AsyncRegisterInterface;
use device_driver::RegisterInterface;

use crate::Error;

/// Register width in bits
const REGISTER_BITS: u8 = 8;

/// A `width`-bit field starting at bit `offset` of register `address`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Bitfield {
    address: u8,
    width: u8,
    offset: u8,
}

impl Bitfield {
    /// Describe a field; panics (at compile time in a `const`) if it does not
    /// fit in one register
    pub(crate) const fn new(address: u8, width: u8, offset: u8) -> Self {
        assert!(width >= 1, "bitfield must be at least one bit wide");
        assert!(
            width + offset <= REGISTER_BITS,
            "bitfield does not fit in an 8-bit register"
        );
        Self {
            address,
            width,
            offset,
        }
    }

    /// Unshifted mask covering `width` bits
    pub(crate) const fn mask(self) -> u8 {
        // width <= 8, so the shift happens in u16 to keep width == 8 defined
        ((1u16 << self.width) - 1) as u8
    }

    /// Largest value the field can hold
    pub(crate) const fn max_value(self) -> u8 {
        self.mask()
    }

    /// Pull the field out of a full register value
    pub(crate) const fn extract(self, register: u8) -> u8 {
        (register >> self.offset) & self.mask()
    }

    /// Replace the field inside `register` with `value`, keeping all other bits
    ///
    /// `value` is masked to the field width; callers check the range first.
    pub(crate) const fn insert(self, register: u8, value: u8) -> u8 {
        let mask = self.mask();
        (register & !(mask << self.offset)) | ((value & mask) << self.offset)
    }

    /// Read the field
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    #[cfg_attr(feature = "async", allow(dead_code))]
    pub(crate) fn read<I>(self, interface: &mut I) -> Result<u8, Error<I::Error>>
    where
        I: RegisterInterface<AddressType = u8>,
    {
        let mut buffer = [0u8; 1];
        interface.read_register(self.address, 8, &mut buffer)?;
        Ok(self.extract(buffer[0]))
    }

    /// Write the field, re-reading the register first so other bits survive
    ///
    /// The read and the write are two separate transactions; a change made by
    /// someone else in between is overwritten.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSetting` without touching the bus if `value` does not
    /// fit in the field, or an error if communication with the device fails.
    #[cfg_attr(feature = "async", allow(dead_code))]
    pub(crate) fn write<I>(self, interface: &mut I, value: u8) -> Result<(), Error<I::Error>>
    where
        I: RegisterInterface<AddressType = u8>,
    {
        if value > self.max_value() {
            return Err(Error::InvalidSetting);
        }

        let mut buffer = [0u8; 1];
        interface.read_register(self.address, 8, &mut buffer)?;
        buffer[0] = self.insert(buffer[0], value);
        interface.write_register(self.address, 8, &buffer)?;
        Ok(())
    }

    /// Read the field (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    #[cfg(feature = "async")]
    pub(crate) async fn read_async<I>(self, interface: &mut I) -> Result<u8, Error<I::Error>>
    where
        I: AsyncRegisterInterface<AddressType = u8>,
    {
        let mut buffer = [0u8; 1];
        interface
            .read_register(self.address, 8, &mut buffer)
            .await?;
        Ok(self.extract(buffer[0]))
    }

    /// Write the field (async), see [`Bitfield::write`]
    ///
    /// # Errors
    ///
    /// Returns `InvalidSetting` without touching the bus if `value` does not
    /// fit in the field, or an error if communication with the device fails.
    #[cfg(feature = "async")]
    pub(crate) async fn write_async<I>(
        self,
        interface: &mut I,
        value: u8,
    ) -> Result<(), Error<I::Error>>
    where
        I: AsyncRegisterInterface<AddressType = u8>,
    {
        if value > self.max_value() {
            return Err(Error::InvalidSetting);
        }

        let mut buffer = [0u8; 1];
        interface
            .read_register(self.address, 8, &mut buffer)
            .await?;
        buffer[0] = self.insert(buffer[0], value);
        interface.write_register(self.address, 8, &buffer).await?;
        Ok(())
    }
}

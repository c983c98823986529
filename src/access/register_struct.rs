//! Multi-byte little-endian values spanning consecutive registers

use core::marker::PhantomData;

#[cfg(feature = "async")]
use device_driver::AsyncRegisterInterface;
use device_driver::RegisterInterface;

use super::MAX_BLOCK_LEN;
use crate::Error;

/// Fixed-width integer that can be carried in a register block
pub(crate) trait Element: Copy + Default {
    /// Width in bytes
    const SIZE: usize;

    /// Decode from the first `SIZE` bytes of `bytes`, little-endian
    fn from_le_slice(bytes: &[u8]) -> Self;

    /// Encode into the first `SIZE` bytes of `out`, little-endian
    fn write_le_slice(self, out: &mut [u8]);
}

macro_rules! impl_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                const SIZE: usize = core::mem::size_of::<$ty>();

                fn from_le_slice(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; core::mem::size_of::<$ty>()];
                    raw.copy_from_slice(&bytes[..Self::SIZE]);
                    <$ty>::from_le_bytes(raw)
                }

                fn write_le_slice(self, out: &mut [u8]) {
                    out[..Self::SIZE].copy_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_element!(u8, i8, u16, i16, u32, i32);

/// `N` values of type `T` stored back to back from register `address`
///
/// Element order on the wire is declaration order; each element is
/// little-endian.
#[derive(Debug)]
pub(crate) struct RegisterStruct<T, const N: usize> {
    address: u8,
    _element: PhantomData<T>,
}

impl<T, const N: usize> Clone for RegisterStruct<T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize> Copy for RegisterStruct<T, N> {}

impl<T: Element, const N: usize> RegisterStruct<T, N> {
    /// Describe a block; panics (at compile time in a `const`) if it is empty
    /// or longer than one transfer
    pub(crate) const fn new(address: u8) -> Self {
        assert!(N >= 1, "register struct needs at least one element");
        assert!(
            N * T::SIZE <= MAX_BLOCK_LEN,
            "register struct exceeds the block transfer limit"
        );
        Self {
            address,
            _element: PhantomData,
        }
    }

    /// Total length in bytes
    pub(crate) const fn byte_len(self) -> usize {
        N * T::SIZE
    }

    /// Transfer size as passed to the register interface
    const fn size_bits(self) -> u32 {
        (self.byte_len() * 8) as u32
    }

    /// Decode a block; `bytes` must hold at least [`byte_len`](Self::byte_len) bytes
    pub(crate) fn decode(bytes: &[u8]) -> [T; N] {
        core::array::from_fn(|i| T::from_le_slice(&bytes[i * T::SIZE..]))
    }

    /// Encode `values` into `out`; `out` must hold at least
    /// [`byte_len`](Self::byte_len) bytes
    pub(crate) fn encode(values: &[T; N], out: &mut [u8]) {
        for (i, value) in values.iter().enumerate() {
            value.write_le_slice(&mut out[i * T::SIZE..]);
        }
    }

    /// Block-read and decode all elements
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    #[cfg_attr(feature = "async", allow(dead_code))]
    pub(crate) fn read<I>(self, interface: &mut I) -> Result<[T; N], Error<I::Error>>
    where
        I: RegisterInterface<AddressType = u8>,
    {
        let mut buffer = [0u8; MAX_BLOCK_LEN];
        let data = &mut buffer[..self.byte_len()];
        interface.read_register(self.address, self.size_bits(), data)?;
        Ok(Self::decode(data))
    }

    /// Encode and block-write all elements
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    #[allow(dead_code)]
    pub(crate) fn write<I>(self, interface: &mut I, values: &[T; N]) -> Result<(), Error<I::Error>>
    where
        I: RegisterInterface<AddressType = u8>,
    {
        let mut buffer = [0u8; MAX_BLOCK_LEN];
        let data = &mut buffer[..self.byte_len()];
        Self::encode(values, data);
        interface.write_register(self.address, self.size_bits(), data)?;
        Ok(())
    }

    /// Block-read and decode all elements (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    #[cfg(feature = "async")]
    pub(crate) async fn read_async<I>(self, interface: &mut I) -> Result<[T; N], Error<I::Error>>
    where
        I: AsyncRegisterInterface<AddressType = u8>,
    {
        let mut buffer = [0u8; MAX_BLOCK_LEN];
        let data = &mut buffer[..self.byte_len()];
        interface
            .read_register(self.address, self.size_bits(), data)
            .await?;
        Ok(Self::decode(data))
    }

    /// Encode and block-write all elements (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    #[cfg(feature = "async")]
    #[allow(dead_code)]
    pub(crate) async fn write_async<I>(
        self,
        interface: &mut I,
        values: &[T; N],
    ) -> Result<(), Error<I::Error>>
    where
        I: AsyncRegisterInterface<AddressType = u8>,
    {
        let mut buffer = [0u8; MAX_BLOCK_LEN];
        let data = &mut buffer[..self.byte_len()];
        Self::encode(values, data);
        interface
            .write_register(self.address, self.size_bits(), data)
            .await?;
        Ok(())
    }
}

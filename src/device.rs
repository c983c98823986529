//! High-level driver API for the LSM6DSOX
//!
//! This module provides the `Lsm6dsox` driver: validated settings, scaled
//! readings, and the cached conversion factors that tie the two together.
//!
//! ## Cached ranges
//!
//! The driver remembers the last acceleration and gyro range it wrote along
//! with the matching conversion factor, so a reading costs a single block read.
//! The cache is only updated right after the corresponding register write
//! succeeded, and is put back to the power-on ranges after a reset.

use crate::registers;
use crate::sensors::{
    AccelData, AccelRange, DataRate, GyroData, GyroRange, HighPassFilter, temperature_celsius,
};
use crate::{Error, WHO_AM_I_VALUE};

// Only import RegisterInterface when not using async feature
#[cfg(not(feature = "async"))]
use device_driver::RegisterInterface;

/// Wait after a range or accelerometer rate change before readings are valid
const SETTLING_DELAY_MS: u32 = 200;

/// Interval between `SW_RESET` polls
const RESET_POLL_INTERVAL_MS: u32 = 1;

/// `SW_RESET` polls before giving up (typical reset time is 50 µs)
const RESET_MAX_POLLS: u32 = 100;

/// Data rate applied to both sensors during construction
const DEFAULT_DATA_RATE: DataRate = DataRate::Hz104;

/// Convert a requested setting, mapping a failed conversion to `InvalidSetting`
fn resolve<T, R, E>(setting: R) -> Result<T, Error<E>>
where
    R: TryInto<T>,
{
    setting.try_into().map_err(|_| Error::InvalidSetting)
}

/// Main driver for the LSM6DSOX
///
/// One instance owns the interface to one physical device. Every
/// read-modify-write goes through `&mut self`, so two field updates on the
/// same instance can never interleave; sharing the bus with other devices is
/// the interface's concern.
pub struct Lsm6dsox<I> {
    interface: I,
    accel_range: AccelRange,
    accel_factor: f32,
    gyro_range: GyroRange,
    gyro_factor: f32,
}

impl<I> Lsm6dsox<I> {
    /// Power-on values of `FS_XL` and `FS_G`
    const RESET_ACCEL_RANGE: AccelRange = AccelRange::G2;
    const RESET_GYRO_RANGE: GyroRange = GyroRange::Dps250;

    fn with_interface(interface: I) -> Self {
        Self {
            interface,
            accel_range: Self::RESET_ACCEL_RANGE,
            accel_factor: Self::RESET_ACCEL_RANGE.conversion_factor(),
            gyro_range: Self::RESET_GYRO_RANGE,
            gyro_factor: Self::RESET_GYRO_RANGE.conversion_factor(),
        }
    }

    /// Record a range that was just written to `FS_XL`
    fn cache_accel_range(&mut self, range: AccelRange) {
        self.accel_range = range;
        self.accel_factor = range.conversion_factor();
    }

    /// Record a range that was just written to `FS_G`
    fn cache_gyro_range(&mut self, range: GyroRange) {
        self.gyro_range = range;
        self.gyro_factor = range.conversion_factor();
    }

    /// Current acceleration range
    ///
    /// Served from the cache; no bus traffic.
    #[must_use]
    pub const fn acceleration_range(&self) -> AccelRange {
        self.accel_range
    }

    /// Current gyro range
    ///
    /// Served from the cache; no bus traffic.
    #[must_use]
    pub const fn gyro_range(&self) -> GyroRange {
        self.gyro_range
    }

    /// Cached acceleration conversion factor in mg/LSB
    #[must_use]
    pub const fn acceleration_conversion_factor(&self) -> f32 {
        self.accel_factor
    }

    /// Cached gyro conversion factor in mdps/LSB
    #[must_use]
    pub const fn gyro_conversion_factor(&self) -> f32 {
        self.gyro_factor
    }

    /// Consume the driver and return the interface
    pub fn release(self) -> I {
        self.interface
    }
}

#[cfg(not(feature = "async"))]
impl<I> Lsm6dsox<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Create a new LSM6DSOX driver instance
    ///
    /// Verifies `WHO_AM_I`, performs a software reset, then brings the device
    /// to a known state:
    /// - block data update enabled
    /// - `FS_MODE` cleared (±2/4/8/16 g encoding)
    /// - accelerometer and gyroscope at 104 Hz
    /// - acceleration range ±4g, gyro range ±250°/s
    ///
    /// Each range change waits out the 200 ms settling delay, so construction
    /// takes a little over 400 ms.
    ///
    /// # Arguments
    ///
    /// * `interface` - Bus interface (see [`crate::interface`])
    /// * `delay` - Delay provider implementing `embedded_hal::delay::DelayNs`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `WHO_AM_I` does not read 0x6C (`DeviceNotFound`, nothing is written)
    /// - The reset does not complete (`ResetTimeout`)
    /// - Communication with the device fails
    ///
    /// # Example
    ///
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut imu = Lsm6dsox::new(interface, &mut delay)?;
    /// ```
    pub fn new<D>(interface: I, delay: &mut D) -> Result<Self, Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        let mut driver = Self::with_interface(interface);

        let who_am_i = driver.read_who_am_i()?;
        if who_am_i != WHO_AM_I_VALUE {
            #[cfg(feature = "defmt")]
            defmt::warn!("LSM6DSOX not found: WHO_AM_I = {=u8:#x}", who_am_i);
            return Err(Error::DeviceNotFound(who_am_i));
        }

        driver.reset(delay)?;

        registers::BLOCK_DATA_UPDATE.write(&mut driver.interface, 1)?;
        registers::ACCEL_FULL_SCALE_MODE.write(&mut driver.interface, 0)?;
        registers::ACCEL_DATA_RATE.write(&mut driver.interface, DEFAULT_DATA_RATE.bits())?;
        registers::GYRO_DATA_RATE.write(&mut driver.interface, DEFAULT_DATA_RATE.bits())?;

        driver.set_acceleration_range(AccelRange::G4, delay)?;
        driver.set_gyro_range(GyroRange::Dps250, delay)?;

        Ok(driver)
    }

    /// Read the `WHO_AM_I` register
    ///
    /// Should return 0x6C for a valid LSM6DSOX
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_who_am_i(&mut self) -> Result<u8, Error<I::Error>> {
        let [who_am_i] = registers::DEVICE_ID.read(&mut self.interface)?;
        Ok(who_am_i)
    }

    /// Software reset
    ///
    /// Sets `SW_RESET` and polls it every millisecond until the device clears
    /// it. Control registers return to their power-on values, and so do the
    /// cached ranges.
    ///
    /// # Errors
    ///
    /// Returns `ResetTimeout` if the bit is still set after 100 polls, or an
    /// error if communication with the device fails. On timeout the cached
    /// ranges are reloaded from the range fields before the error is returned.
    pub fn reset<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        registers::SW_RESET.write(&mut self.interface, 1)?;

        for _ in 0..RESET_MAX_POLLS {
            if registers::SW_RESET.read(&mut self.interface)? == 0 {
                self.cache_accel_range(Self::RESET_ACCEL_RANGE);
                self.cache_gyro_range(Self::RESET_GYRO_RANGE);

                #[cfg(feature = "defmt")]
                defmt::debug!("LSM6DSOX reset complete");

                return Ok(());
            }
            delay.delay_ms(RESET_POLL_INTERVAL_MS);
        }

        #[cfg(feature = "defmt")]
        defmt::warn!("LSM6DSOX reset timed out");

        self.sync_ranges()?;
        Err(Error::ResetTimeout)
    }

    /// Reload the cached ranges from `FS_XL` and `FS_G`
    fn sync_ranges(&mut self) -> Result<(), Error<I::Error>> {
        let accel = registers::ACCEL_RANGE.read(&mut self.interface)?;
        let gyro = registers::GYRO_RANGE.read(&mut self.interface)?;
        self.cache_accel_range(AccelRange::from_bits(accel).ok_or(Error::InvalidSetting)?);
        self.cache_gyro_range(GyroRange::from_bits(gyro).ok_or(Error::InvalidSetting)?);
        Ok(())
    }

    /// Whether block data update (`BDU`) is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn block_data_update(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(registers::BLOCK_DATA_UPDATE.read(&mut self.interface)? != 0)
    }

    /// Enable or disable block data update (`BDU`)
    ///
    /// With BDU on, the output registers are not refreshed between the reads of
    /// a sample's low and high bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_block_data_update(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        registers::BLOCK_DATA_UPDATE.write(&mut self.interface, u8::from(enable))
    }

    /// Read raw accelerometer data
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accel_raw(&mut self) -> Result<AccelData, Error<I::Error>> {
        Ok(AccelData::from(registers::RAW_ACCEL.read(&mut self.interface)?))
    }

    /// Read acceleration in m/s² as (x, y, z)
    ///
    /// Scaled with the cached factor of the current acceleration range.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn acceleration(&mut self) -> Result<(f32, f32, f32), Error<I::Error>> {
        let raw = self.read_accel_raw()?;
        Ok(raw.to_meters_per_second_squared(self.accel_factor))
    }

    /// Read raw gyroscope data
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_gyro_raw(&mut self) -> Result<GyroData, Error<I::Error>> {
        Ok(GyroData::from(registers::RAW_GYRO.read(&mut self.interface)?))
    }

    /// Read angular rate in rad/s as (x, y, z)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn gyro(&mut self) -> Result<(f32, f32, f32), Error<I::Error>> {
        let raw = self.read_gyro_raw()?;
        Ok(raw.to_radians_per_second(self.gyro_factor))
    }

    /// Read the raw temperature sensor value
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temperature_raw(&mut self) -> Result<i16, Error<I::Error>> {
        let [raw] = registers::RAW_TEMP.read(&mut self.interface)?;
        Ok(raw)
    }

    /// Read temperature in °C
    ///
    /// Temperature in °C = `OUT_TEMP` / 256 + 25
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn temperature(&mut self) -> Result<f32, Error<I::Error>> {
        Ok(temperature_celsius(self.read_temperature_raw()?))
    }

    /// Set the acceleration range
    ///
    /// Accepts an [`AccelRange`] or its raw `FS_XL` code. Writes the register,
    /// updates the cached conversion factor, then waits 200 ms for the output
    /// to settle.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSetting` for an unknown code (nothing is written and the
    /// cache is unchanged), or an error if communication with the device fails.
    pub fn set_acceleration_range<R, D>(
        &mut self,
        range: R,
        delay: &mut D,
    ) -> Result<(), Error<I::Error>>
    where
        R: TryInto<AccelRange>,
        D: embedded_hal::delay::DelayNs,
    {
        let range: AccelRange = resolve(range)?;
        registers::ACCEL_RANGE.write(&mut self.interface, range.bits())?;
        self.cache_accel_range(range);

        #[cfg(feature = "defmt")]
        defmt::debug!("Acceleration range set to {}", range);

        delay.delay_ms(SETTLING_DELAY_MS);
        Ok(())
    }

    /// Set the gyro range
    ///
    /// Accepts a [`GyroRange`] or its raw `FS_G` code. Same sequence as
    /// [`set_acceleration_range`](Self::set_acceleration_range).
    ///
    /// # Errors
    ///
    /// Returns `InvalidSetting` for an unknown code (nothing is written and the
    /// cache is unchanged), or an error if communication with the device fails.
    pub fn set_gyro_range<R, D>(&mut self, range: R, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        R: TryInto<GyroRange>,
        D: embedded_hal::delay::DelayNs,
    {
        let range: GyroRange = resolve(range)?;
        registers::GYRO_RANGE.write(&mut self.interface, range.bits())?;
        self.cache_gyro_range(range);

        #[cfg(feature = "defmt")]
        defmt::debug!("Gyro range set to {}", range);

        delay.delay_ms(SETTLING_DELAY_MS);
        Ok(())
    }

    /// Read the accelerometer output data rate
    ///
    /// # Errors
    ///
    /// Returns `InvalidSetting` if `ODR_XL` holds an undefined code, or an
    /// error if communication with the device fails.
    pub fn acceleration_data_rate(&mut self) -> Result<DataRate, Error<I::Error>> {
        let bits = registers::ACCEL_DATA_RATE.read(&mut self.interface)?;
        DataRate::from_bits(bits).ok_or(Error::InvalidSetting)
    }

    /// Set the accelerometer output data rate, then wait 200 ms to settle
    ///
    /// # Errors
    ///
    /// Returns `InvalidSetting` for an unknown code (nothing is written), or an
    /// error if communication with the device fails.
    pub fn set_acceleration_data_rate<R, D>(
        &mut self,
        rate: R,
        delay: &mut D,
    ) -> Result<(), Error<I::Error>>
    where
        R: TryInto<DataRate>,
        D: embedded_hal::delay::DelayNs,
    {
        let rate: DataRate = resolve(rate)?;
        registers::ACCEL_DATA_RATE.write(&mut self.interface, rate.bits())?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Acceleration data rate set to {}", rate);

        delay.delay_ms(SETTLING_DELAY_MS);
        Ok(())
    }

    /// Read the gyroscope output data rate
    ///
    /// # Errors
    ///
    /// Returns `InvalidSetting` if `ODR_G` holds an undefined code, or an
    /// error if communication with the device fails.
    pub fn gyro_data_rate(&mut self) -> Result<DataRate, Error<I::Error>> {
        let bits = registers::GYRO_DATA_RATE.read(&mut self.interface)?;
        DataRate::from_bits(bits).ok_or(Error::InvalidSetting)
    }

    /// Set the gyroscope output data rate
    ///
    /// # Errors
    ///
    /// Returns `InvalidSetting` for an unknown code (nothing is written), or an
    /// error if communication with the device fails.
    pub fn set_gyro_data_rate<R>(&mut self, rate: R) -> Result<(), Error<I::Error>>
    where
        R: TryInto<DataRate>,
    {
        let rate: DataRate = resolve(rate)?;
        registers::GYRO_DATA_RATE.write(&mut self.interface, rate.bits())
    }

    /// Read the accelerometer high-pass filter cutoff
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn high_pass_filter(&mut self) -> Result<HighPassFilter, Error<I::Error>> {
        let bits = registers::HIGH_PASS_FILTER.read(&mut self.interface)?;
        HighPassFilter::from_bits(bits).ok_or(Error::InvalidSetting)
    }

    /// Set the accelerometer high-pass filter cutoff
    ///
    /// # Errors
    ///
    /// Returns `InvalidSetting` for an unknown code (nothing is written), or an
    /// error if communication with the device fails.
    pub fn set_high_pass_filter<F>(&mut self, filter: F) -> Result<(), Error<I::Error>>
    where
        F: TryInto<HighPassFilter>,
    {
        let filter: HighPassFilter = resolve(filter)?;
        registers::HIGH_PASS_FILTER.write(&mut self.interface, filter.bits())
    }
}

#[cfg(feature = "async")]
impl<I> Lsm6dsox<I>
where
    I: device_driver::AsyncRegisterInterface<AddressType = u8>,
{
    /// Create a new LSM6DSOX driver instance
    ///
    /// Verifies `WHO_AM_I`, performs a software reset, then enables block data
    /// update, clears `FS_MODE`, sets both data rates to 104 Hz and the ranges
    /// to ±4g / ±250°/s.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `WHO_AM_I` does not read 0x6C (`DeviceNotFound`, nothing is written)
    /// - The reset does not complete (`ResetTimeout`)
    /// - Communication with the device fails
    pub async fn new<D>(interface: I, delay: &mut D) -> Result<Self, Error<I::Error>>
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        let mut driver = Self::with_interface(interface);

        let who_am_i = driver.read_who_am_i().await?;
        if who_am_i != WHO_AM_I_VALUE {
            #[cfg(feature = "defmt")]
            defmt::warn!("LSM6DSOX not found: WHO_AM_I = {=u8:#x}", who_am_i);
            return Err(Error::DeviceNotFound(who_am_i));
        }

        driver.reset(delay).await?;

        registers::BLOCK_DATA_UPDATE
            .write_async(&mut driver.interface, 1)
            .await?;
        registers::ACCEL_FULL_SCALE_MODE
            .write_async(&mut driver.interface, 0)
            .await?;
        registers::ACCEL_DATA_RATE
            .write_async(&mut driver.interface, DEFAULT_DATA_RATE.bits())
            .await?;
        registers::GYRO_DATA_RATE
            .write_async(&mut driver.interface, DEFAULT_DATA_RATE.bits())
            .await?;

        driver.set_acceleration_range(AccelRange::G4, delay).await?;
        driver.set_gyro_range(GyroRange::Dps250, delay).await?;

        Ok(driver)
    }

    /// Read the `WHO_AM_I` register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_who_am_i(&mut self) -> Result<u8, Error<I::Error>> {
        let [who_am_i] = registers::DEVICE_ID.read_async(&mut self.interface).await?;
        Ok(who_am_i)
    }

    /// Software reset, polling `SW_RESET` until it clears
    ///
    /// On timeout the cached ranges are reloaded from the range fields.
    ///
    /// # Errors
    ///
    /// Returns `ResetTimeout` if the bit is still set after 100 polls, or an
    /// error if communication with the device fails.
    pub async fn reset<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        registers::SW_RESET
            .write_async(&mut self.interface, 1)
            .await?;

        for _ in 0..RESET_MAX_POLLS {
            if registers::SW_RESET.read_async(&mut self.interface).await? == 0 {
                self.cache_accel_range(Self::RESET_ACCEL_RANGE);
                self.cache_gyro_range(Self::RESET_GYRO_RANGE);

                #[cfg(feature = "defmt")]
                defmt::debug!("LSM6DSOX reset complete");

                return Ok(());
            }
            delay.delay_ms(RESET_POLL_INTERVAL_MS).await;
        }

        #[cfg(feature = "defmt")]
        defmt::warn!("LSM6DSOX reset timed out");

        self.sync_ranges().await?;
        Err(Error::ResetTimeout)
    }

    /// Reload the cached ranges from `FS_XL` and `FS_G`
    async fn sync_ranges(&mut self) -> Result<(), Error<I::Error>> {
        let accel = registers::ACCEL_RANGE
            .read_async(&mut self.interface)
            .await?;
        let gyro = registers::GYRO_RANGE
            .read_async(&mut self.interface)
            .await?;
        self.cache_accel_range(AccelRange::from_bits(accel).ok_or(Error::InvalidSetting)?);
        self.cache_gyro_range(GyroRange::from_bits(gyro).ok_or(Error::InvalidSetting)?);
        Ok(())
    }

    /// Whether block data update (`BDU`) is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn block_data_update(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(registers::BLOCK_DATA_UPDATE
            .read_async(&mut self.interface)
            .await?
            != 0)
    }

    /// Enable or disable block data update (`BDU`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_block_data_update(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        registers::BLOCK_DATA_UPDATE
            .write_async(&mut self.interface, u8::from(enable))
            .await
    }

    /// Read raw accelerometer data
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_accel_raw(&mut self) -> Result<AccelData, Error<I::Error>> {
        Ok(AccelData::from(
            registers::RAW_ACCEL.read_async(&mut self.interface).await?,
        ))
    }

    /// Read acceleration in m/s² as (x, y, z)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn acceleration(&mut self) -> Result<(f32, f32, f32), Error<I::Error>> {
        let raw = self.read_accel_raw().await?;
        Ok(raw.to_meters_per_second_squared(self.accel_factor))
    }

    /// Read raw gyroscope data
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_gyro_raw(&mut self) -> Result<GyroData, Error<I::Error>> {
        Ok(GyroData::from(
            registers::RAW_GYRO.read_async(&mut self.interface).await?,
        ))
    }

    /// Read angular rate in rad/s as (x, y, z)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn gyro(&mut self) -> Result<(f32, f32, f32), Error<I::Error>> {
        let raw = self.read_gyro_raw().await?;
        Ok(raw.to_radians_per_second(self.gyro_factor))
    }

    /// Read the raw temperature sensor value
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_temperature_raw(&mut self) -> Result<i16, Error<I::Error>> {
        let [raw] = registers::RAW_TEMP.read_async(&mut self.interface).await?;
        Ok(raw)
    }

    /// Read temperature in °C
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn temperature(&mut self) -> Result<f32, Error<I::Error>> {
        Ok(temperature_celsius(self.read_temperature_raw().await?))
    }

    /// Set the acceleration range, then wait 200 ms to settle
    ///
    /// # Errors
    ///
    /// Returns `InvalidSetting` for an unknown code (nothing is written and the
    /// cache is unchanged), or an error if communication with the device fails.
    pub async fn set_acceleration_range<R, D>(
        &mut self,
        range: R,
        delay: &mut D,
    ) -> Result<(), Error<I::Error>>
    where
        R: TryInto<AccelRange>,
        D: embedded_hal_async::delay::DelayNs,
    {
        let range: AccelRange = resolve(range)?;
        registers::ACCEL_RANGE
            .write_async(&mut self.interface, range.bits())
            .await?;
        self.cache_accel_range(range);

        #[cfg(feature = "defmt")]
        defmt::debug!("Acceleration range set to {}", range);

        delay.delay_ms(SETTLING_DELAY_MS).await;
        Ok(())
    }

    /// Set the gyro range, then wait 200 ms to settle
    ///
    /// # Errors
    ///
    /// Returns `InvalidSetting` for an unknown code (nothing is written and the
    /// cache is unchanged), or an error if communication with the device fails.
    pub async fn set_gyro_range<R, D>(
        &mut self,
        range: R,
        delay: &mut D,
    ) -> Result<(), Error<I::Error>>
    where
        R: TryInto<GyroRange>,
        D: embedded_hal_async::delay::DelayNs,
    {
        let range: GyroRange = resolve(range)?;
        registers::GYRO_RANGE
            .write_async(&mut self.interface, range.bits())
            .await?;
        self.cache_gyro_range(range);

        #[cfg(feature = "defmt")]
        defmt::debug!("Gyro range set to {}", range);

        delay.delay_ms(SETTLING_DELAY_MS).await;
        Ok(())
    }

    /// Read the accelerometer output data rate
    ///
    /// # Errors
    ///
    /// Returns `InvalidSetting` if `ODR_XL` holds an undefined code, or an
    /// error if communication with the device fails.
    pub async fn acceleration_data_rate(&mut self) -> Result<DataRate, Error<I::Error>> {
        let bits = registers::ACCEL_DATA_RATE
            .read_async(&mut self.interface)
            .await?;
        DataRate::from_bits(bits).ok_or(Error::InvalidSetting)
    }

    /// Set the accelerometer output data rate, then wait 200 ms to settle
    ///
    /// # Errors
    ///
    /// Returns `InvalidSetting` for an unknown code (nothing is written), or an
    /// error if communication with the device fails.
    pub async fn set_acceleration_data_rate<R, D>(
        &mut self,
        rate: R,
        delay: &mut D,
    ) -> Result<(), Error<I::Error>>
    where
        R: TryInto<DataRate>,
        D: embedded_hal_async::delay::DelayNs,
    {
        let rate: DataRate = resolve(rate)?;
        registers::ACCEL_DATA_RATE
            .write_async(&mut self.interface, rate.bits())
            .await?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Acceleration data rate set to {}", rate);

        delay.delay_ms(SETTLING_DELAY_MS).await;
        Ok(())
    }

    /// Read the gyroscope output data rate
    ///
    /// # Errors
    ///
    /// Returns `InvalidSetting` if `ODR_G` holds an undefined code, or an
    /// error if communication with the device fails.
    pub async fn gyro_data_rate(&mut self) -> Result<DataRate, Error<I::Error>> {
        let bits = registers::GYRO_DATA_RATE
            .read_async(&mut self.interface)
            .await?;
        DataRate::from_bits(bits).ok_or(Error::InvalidSetting)
    }

    /// Set the gyroscope output data rate
    ///
    /// # Errors
    ///
    /// Returns `InvalidSetting` for an unknown code (nothing is written), or an
    /// error if communication with the device fails.
    pub async fn set_gyro_data_rate<R>(&mut self, rate: R) -> Result<(), Error<I::Error>>
    where
        R: TryInto<DataRate>,
    {
        let rate: DataRate = resolve(rate)?;
        registers::GYRO_DATA_RATE
            .write_async(&mut self.interface, rate.bits())
            .await
    }

    /// Read the accelerometer high-pass filter cutoff
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn high_pass_filter(&mut self) -> Result<HighPassFilter, Error<I::Error>> {
        let bits = registers::HIGH_PASS_FILTER
            .read_async(&mut self.interface)
            .await?;
        HighPassFilter::from_bits(bits).ok_or(Error::InvalidSetting)
    }

    /// Set the accelerometer high-pass filter cutoff
    ///
    /// # Errors
    ///
    /// Returns `InvalidSetting` for an unknown code (nothing is written), or an
    /// error if communication with the device fails.
    pub async fn set_high_pass_filter<F>(&mut self, filter: F) -> Result<(), Error<I::Error>>
    where
        F: TryInto<HighPassFilter>,
    {
        let filter: HighPassFilter = resolve(filter)?;
        registers::HIGH_PASS_FILTER
            .write_async(&mut self.interface, filter.bits())
            .await
    }
}

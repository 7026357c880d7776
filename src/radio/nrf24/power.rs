use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use super::{bit_fields::Config, registers, Nrf24Error, Nrf24l01};
use crate::radio::prelude::EsbPower;

/// Tpd2stby: leaving power down takes up to 5ms per the 1.0 datasheet.
pub(super) const POWER_UP_DELAY_US: u32 = 5000;

impl<SPI, DO, DELAY> EsbPower for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PowerErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// In full power down mode (a sleep state), the radio will consume approximately
    /// 900nA (.0009mA). Registers keep their values and remain accessible.
    ///
    /// The RX/TX role is kept. CE is dropped first, so a later
    /// [`EsbPower::power_up()`] lands in standby.
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType> {
        self.ensure_configured()?;
        // PWR_UP may only change while CE is low
        if self._ce_active {
            self.set_ce(false)?;
        }
        self.spi_read(1, registers::CONFIG)?;
        let config = Config::from_bits(self._buf[1]).with_pwr_up(false);
        self.spi_write_byte(registers::CONFIG, config.into_bits())?;
        #[cfg(feature = "defmt")]
        defmt::trace!("powered down");
        Ok(())
    }

    fn power_up(&mut self) -> Result<(), Self::PowerErrorType> {
        self.ensure_configured()?;
        self.spi_read(1, registers::CONFIG)?;
        let config = Config::from_bits(self._buf[1]);
        if config.pwr_up() {
            return Ok(());
        }
        self.spi_write_byte(registers::CONFIG, config.with_pwr_up(true).into_bits())?;

        self._delay_impl.delay_us(POWER_UP_DELAY_US);
        #[cfg(feature = "defmt")]
        defmt::trace!("powered up");
        Ok(())
    }

    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType> {
        self.spi_read(1, registers::CONFIG)?;
        Ok(Config::from_bits(self._buf[1]).pwr_up())
    }
}

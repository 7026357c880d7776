use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use super::{bit_fields::RfSetup, registers, Nrf24Error, Nrf24l01};
use crate::{radio::prelude::EsbPaLevel, PaLevel};

impl<SPI, DO, DELAY> EsbPaLevel for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PaLevelErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn get_pa_level(&mut self) -> Result<PaLevel, Self::PaLevelErrorType> {
        self.spi_read(1, registers::RF_SETUP)?;
        Ok(RfSetup::from_bits(self._buf[1]).pa_level())
    }

    /// The LNA bit and the data rate are left as they are.
    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::PaLevelErrorType> {
        self.spi_read(1, registers::RF_SETUP)?;
        let setup = RfSetup::from_bits(self._buf[1]).with_pa_level(pa_level);
        self.spi_write_byte(registers::RF_SETUP, setup.into_bits())?;
        Ok(())
    }
}

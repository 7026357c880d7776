use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use super::{bit_fields::Config, registers, Nrf24Error, Nrf24l01};
use crate::{radio::prelude::EsbCrcLength, CrcLength};

impl<SPI, DO, DELAY> EsbCrcLength for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type CrcLengthErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn get_crc_length(&mut self) -> Result<CrcLength, Self::CrcLengthErrorType> {
        self.spi_read(1, registers::CONFIG)?;
        Ok(Config::from_bits(self._buf[1]).crc_length())
    }

    /// The radio forces CRC on while auto-ack is enabled for any pipe,
    /// so [`CrcLength::Disabled`] only sticks with auto-ack off.
    fn set_crc_length(&mut self, crc_length: CrcLength) -> Result<(), Self::CrcLengthErrorType> {
        self.spi_read(1, registers::CONFIG)?;
        let config = Config::from_bits(self._buf[1]).with_crc_length(crc_length);
        self.spi_write_byte(registers::CONFIG, config.into_bits())?;
        Ok(())
    }
}

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use super::{registers, Nrf24Error, Nrf24l01, CHANNELS};
use crate::radio::prelude::EsbChannel;

impl<SPI, DO, DELAY> Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    pub(super) fn validate_channel(channel: u8) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        if (channel as usize) < CHANNELS {
            Ok(())
        } else {
            Err(Nrf24Error::InvalidChannel(channel))
        }
    }
}

impl<SPI, DO, DELAY> EsbChannel for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type ChannelErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// The nRF24L01 support 128 channels. Any `channel` above 127
    /// is rejected without touching the radio.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType> {
        Self::validate_channel(channel)?;
        self.spi_write_byte(registers::RF_CH, channel)?;
        Ok(())
    }

    /// See also [`EsbChannel::set_channel()`].
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType> {
        self.spi_read(1, registers::RF_CH)?;
        Ok(self._buf[1])
    }
}

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use super::{bit_fields::Config, registers, Nrf24Error, Nrf24l01};
use crate::{
    radio::{
        prelude::{EsbFifo, EsbInit},
        RadioConfig,
    },
    RetransmitPolicy,
};

impl<SPI, DO, DELAY> EsbInit for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type ConfigErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// Program the radio with the given `config`, leaving it in standby.
    ///
    /// The auto-retransmit policy is always [`RetransmitPolicy::RELIABLE`]
    /// and the CRC length is always 8 bit (if CRC is enabled at all).
    /// The FEATURE register is cleared, disabling dynamic payloads and
    /// payloads without ACK, and both FIFOs are flushed.
    fn configure(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType> {
        Self::validate_channel(config.channel())?;
        self._configured = false;

        self.set_ce(false)?;
        self._csn_pin.set_high().map_err(Nrf24Error::Gpo)?;

        self.spi_write_byte(registers::SETUP_RETR, RetransmitPolicy::RELIABLE.into_bits())?;

        self.spi_read(1, registers::CONFIG)?;
        let config_reg = Config::from_bits(self._buf[1]).with_crc_8bit();
        self.spi_write_byte(registers::CONFIG, config_reg.into_bits())?;

        self.spi_write_byte(registers::RF_CH, config.channel())?;
        self.spi_write_byte(registers::RF_SETUP, config.rf_setup())?;
        self.spi_write_byte(registers::FEATURE, 0)?;

        self.flush_rx()?;
        self.flush_tx()?;

        self.set_ce(false)?;
        self._configured = true;
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "configured channel {=u8}, {}, PA {}",
            config.channel(),
            config.data_rate(),
            config.pa_level()
        );
        Ok(())
    }
}

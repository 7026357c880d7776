use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use super::{
    bit_fields::Config, commands, mnemonics, power::POWER_UP_DELAY_US, registers, Nrf24Error,
    Nrf24l01,
};
use crate::{radio::prelude::EsbRadio, Mode};

/// The time (in microseconds) the radio's PLL needs to settle after
/// switching between RX and TX.
const SETTLING_DELAY_US: u32 = 130;

impl<SPI, DO, DELAY> Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Shared part of [`EsbRadio::as_rx()`] and [`EsbRadio::as_tx()`].
    ///
    /// Returns `false` if the radio was already active in the requested role.
    /// Waking the radio from power down here also waits out Tpd2stby.
    fn enter_role(&mut self, rx: bool) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        self.ensure_configured()?;
        self.spi_read(1, registers::CONFIG)?;
        let current = Config::from_bits(self._buf[1]);
        let target = current.with_pwr_up(true).with_prim_rx(rx);
        if current == target && self._ce_active {
            return Ok(false);
        }
        // PWR_UP and PRIM_RX may only change while CE is low
        if self._ce_active {
            self.set_ce(false)?;
        }
        self.spi_write_byte(registers::CONFIG, target.into_bits())?;
        if !current.pwr_up() {
            self._delay_impl.delay_us(POWER_UP_DELAY_US);
        }
        Ok(true)
    }
}

impl<SPI, DO, DELAY> EsbRadio for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type RadioErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// Calling this again while already in RX mode sends nothing but
    /// a read of the CONFIG register.
    fn as_rx(&mut self) -> Result<(), Self::RadioErrorType> {
        if self.enter_role(true)? {
            self._delay_impl.delay_us(SETTLING_DELAY_US);
            self.set_ce(true)?;
            #[cfg(feature = "defmt")]
            defmt::trace!("entered RX mode");
        }
        Ok(())
    }

    /// Calling this again while already in TX mode sends nothing but
    /// a read of the CONFIG register.
    fn as_tx(&mut self) -> Result<(), Self::RadioErrorType> {
        if self.enter_role(false)? {
            self.set_ce(true)?;
            self._delay_impl.delay_us(SETTLING_DELAY_US);
            #[cfg(feature = "defmt")]
            defmt::trace!("entered TX mode");
        }
        Ok(())
    }

    fn standby(&mut self) -> Result<(), Self::RadioErrorType> {
        self.ensure_configured()?;
        self.set_ce(false)
    }

    fn get_mode(&mut self) -> Result<Mode, Self::RadioErrorType> {
        self.spi_read(1, registers::CONFIG)?;
        Ok(Config::from_bits(self._buf[1]).mode(self._ce_active))
    }

    /// The payload is only queued here. In TX mode (CE high) the radio
    /// sends it as soon as it lands in the TX FIFO.
    fn transmit(&mut self, buf: &[u8], with_ack: bool) -> Result<(), Self::RadioErrorType> {
        self.ensure_configured()?;
        Self::validate_buf_len(buf.len())?;
        let command = if with_ack {
            commands::W_TX_PAYLOAD
        } else {
            commands::W_TX_PAYLOAD_NO_ACK
        };
        self.spi_write_buf(command, buf)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("queued {=usize} byte payload, ack: {=bool}", buf.len(), with_ack);
        Ok(())
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<(), Self::RadioErrorType> {
        self.ensure_configured()?;
        Self::validate_buf_len(buf.len())?;
        let len = buf.len();
        self.spi_read(len, commands::R_RX_PAYLOAD)?;
        buf.copy_from_slice(&self._buf[1..=len]);
        #[cfg(feature = "defmt")]
        defmt::trace!("read {=usize} byte payload", len);
        Ok(())
    }

    fn get_last_arc(&mut self) -> Result<u8, Self::RadioErrorType> {
        self.spi_read(1, registers::OBSERVE_TX)?;
        Ok(self._buf[1] & mnemonics::ARC_CNT)
    }
}

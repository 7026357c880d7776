use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use super::{mnemonics, registers, Nrf24Error, Nrf24l01};
use crate::{radio::prelude::EsbAutoAck, RetransmitPolicy};

impl<SPI, DO, DELAY> Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Set (or clear) the bits of `mask` in a register, leaving its other bits alone.
    pub(super) fn update_register_bits(
        &mut self,
        register: u8,
        mask: u8,
        enable: bool,
    ) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_read(1, register)?;
        let value = if enable {
            self._buf[1] | mask
        } else {
            self._buf[1] & !mask
        };
        self.spi_write_byte(register, value)?;
        Ok(value)
    }
}

impl<SPI, DO, DELAY> EsbAutoAck for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type AutoAckErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn set_auto_ack(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType> {
        let value = if enable { mnemonics::ALL_PIPES } else { 0 };
        self.spi_write_byte(registers::EN_AA, value)?;
        Ok(())
    }

    fn set_auto_ack_pipes(&mut self, pipes: u8, enable: bool) -> Result<(), Self::AutoAckErrorType> {
        Self::validate_pipe_mask(pipes)?;
        self.update_register_bits(registers::EN_AA, pipes, enable)?;
        Ok(())
    }

    fn allow_ask_no_ack(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType> {
        self.update_register_bits(registers::FEATURE, mnemonics::EN_DYN_ACK, enable)?;
        Ok(())
    }

    fn set_auto_retries(&mut self, delay: u8, count: u8) -> Result<(), Self::AutoAckErrorType> {
        let policy = RetransmitPolicy::from_parts(delay, count)
            .ok_or(Nrf24Error::InvalidRetransmit { delay, count })?;
        self.spi_write_byte(registers::SETUP_RETR, policy.into_bits())?;
        Ok(())
    }

    fn get_auto_retries(&mut self) -> Result<RetransmitPolicy, Self::AutoAckErrorType> {
        self.spi_read(1, registers::SETUP_RETR)?;
        Ok(RetransmitPolicy::from_bits(self._buf[1]))
    }
}

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use super::{
    commands,
    constants::MAX_PAYLOAD,
    mnemonics, registers, Nrf24Error, Nrf24l01,
};
use crate::radio::prelude::EsbPayloadLength;

impl<SPI, DO, DELAY> Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    pub(super) fn validate_width(width: u8) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        if width as usize <= MAX_PAYLOAD {
            Ok(())
        } else {
            Err(Nrf24Error::InvalidLength(width as usize))
        }
    }

    /// The radio ignores DYNPD unless EN_DPL is set in FEATURE.
    fn sync_dynamic_payloads_feature(
        &mut self,
        dynpd: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.update_register_bits(registers::FEATURE, mnemonics::EN_DPL, dynpd != 0)?;
        Ok(())
    }
}

impl<SPI, DO, DELAY> EsbPayloadLength for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PayloadLengthErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn set_payload_length(&mut self, pipe: u8, width: u8) -> Result<(), Self::PayloadLengthErrorType> {
        Self::validate_pipe(pipe)?;
        Self::validate_width(width)?;
        self.spi_write_byte(registers::RX_PW_P0 + pipe, width)?;
        Ok(())
    }

    fn get_payload_length(&mut self, pipe: u8) -> Result<u8, Self::PayloadLengthErrorType> {
        Self::validate_pipe(pipe)?;
        self.spi_read(1, registers::RX_PW_P0 + pipe)?;
        Ok(self._buf[1] & 0x3F)
    }

    fn set_dynamic_payloads(&mut self, enable: bool) -> Result<(), Self::PayloadLengthErrorType> {
        let dynpd = if enable { mnemonics::ALL_PIPES } else { 0 };
        self.spi_write_byte(registers::DYNPD, dynpd)?;
        self.sync_dynamic_payloads_feature(dynpd)
    }

    fn set_dynamic_payloads_pipes(
        &mut self,
        pipes: u8,
        enable: bool,
    ) -> Result<(), Self::PayloadLengthErrorType> {
        Self::validate_pipe_mask(pipes)?;
        let dynpd = self.update_register_bits(registers::DYNPD, pipes, enable)?;
        self.sync_dynamic_payloads_feature(dynpd)
    }

    /// Returns [`Nrf24Error::BinaryCorruption`] if the radio reports more than 32 bytes.
    /// The datasheet advises flushing the RX FIFO in that case.
    fn get_dynamic_payload_length(&mut self) -> Result<u8, Self::PayloadLengthErrorType> {
        self.spi_read(1, commands::R_RX_PL_WID)?;
        let width = self._buf[1];
        if width as usize > MAX_PAYLOAD {
            return Err(Nrf24Error::BinaryCorruption);
        }
        Ok(width)
    }
}

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use super::{mnemonics, registers, Nrf24Error, Nrf24l01};
use crate::radio::{
    prelude::{EsbPayloadLength, EsbPipe},
    PipeConfig,
};

impl<SPI, DO, DELAY> Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Check an address length for `pipe` against the configured address length.
    ///
    /// Pipes 2-5 only need their least significant byte, but nothing longer
    /// than 5 bytes is accepted.
    fn validate_address_length(
        &mut self,
        pipe: u8,
        len: usize,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let valid = if pipe < 2 {
            len == self.get_address_length()? as usize
        } else {
            (1..=5).contains(&len)
        };
        if valid {
            Ok(())
        } else {
            Err(Nrf24Error::InvalidAddressLength(len))
        }
    }

    fn read_pipe_bit(
        &mut self,
        register: u8,
        pipe: u8,
    ) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_read(1, register)?;
        Ok(self._buf[1] & (1 << pipe) != 0)
    }
}

impl<SPI, DO, DELAY> EsbPipe for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PipeErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn set_rx_addresses(&mut self, enable: bool) -> Result<(), Self::PipeErrorType> {
        let value = if enable { mnemonics::ALL_PIPES } else { 0 };
        self.spi_write_byte(registers::EN_RXADDR, value)?;
        Ok(())
    }

    fn set_rx_address_pipes(&mut self, pipes: u8, enable: bool) -> Result<(), Self::PipeErrorType> {
        Self::validate_pipe_mask(pipes)?;
        self.update_register_bits(registers::EN_RXADDR, pipes, enable)?;
        Ok(())
    }

    fn get_rx_address_byte(&mut self, pipe: u8) -> Result<u8, Self::PipeErrorType> {
        Self::validate_pipe(pipe)?;
        self.spi_read(1, registers::RX_ADDR_P0 + pipe)?;
        Ok(self._buf[1])
    }

    fn set_rx_address_byte(&mut self, pipe: u8, address: u8) -> Result<(), Self::PipeErrorType> {
        Self::validate_pipe(pipe)?;
        self.spi_write_byte(registers::RX_ADDR_P0 + pipe, address)?;
        Ok(())
    }

    fn get_rx_address(&mut self, pipe: u8, address: &mut [u8]) -> Result<usize, Self::PipeErrorType> {
        Self::validate_pipe(pipe)?;
        let width = self.get_address_length()? as usize;
        if address.len() < width {
            return Err(Nrf24Error::InvalidAddressLength(address.len()));
        }
        if pipe < 2 {
            self.read_register_buf(registers::RX_ADDR_P0 + pipe, &mut address[..width])?;
        } else {
            self.read_register_buf(registers::RX_ADDR_P1, &mut address[..width])?;
            address[0] = self.get_rx_address_byte(pipe)?;
        }
        Ok(width)
    }

    fn set_rx_address(&mut self, pipe: u8, address: &[u8]) -> Result<(), Self::PipeErrorType> {
        Self::validate_pipe(pipe)?;
        self.validate_address_length(pipe, address.len())?;
        if pipe < 2 {
            self.write_register_buf(registers::RX_ADDR_P0 + pipe, address)
        } else {
            self.set_rx_address_byte(pipe, address[0])
        }
    }

    fn open_tx_pipe(&mut self, address: &[u8]) -> Result<(), Self::PipeErrorType> {
        if address.len() != self.get_address_length()? as usize {
            return Err(Nrf24Error::InvalidAddressLength(address.len()));
        }
        self.write_register_buf(registers::TX_ADDR, address)
    }

    fn set_address_length(&mut self, length: u8) -> Result<(), Self::PipeErrorType> {
        if !(3..=5).contains(&length) {
            return Err(Nrf24Error::InvalidAddressLength(length as usize));
        }
        self.spi_write_byte(registers::SETUP_AW, length - 2)?;
        Ok(())
    }

    /// Returns [`Nrf24Error::BinaryCorruption`] if SETUP_AW holds the illegal value `0`.
    fn get_address_length(&mut self) -> Result<u8, Self::PipeErrorType> {
        self.spi_read(1, registers::SETUP_AW)?;
        match self._buf[1] & 3 {
            0 => Err(Nrf24Error::BinaryCorruption),
            aw => Ok(aw + 2),
        }
    }

    fn get_pipe_config(&mut self, pipe: u8) -> Result<PipeConfig, Self::PipeErrorType> {
        Self::validate_pipe(pipe)?;
        let auto_ack = self.read_pipe_bit(registers::EN_AA, pipe)?;
        let rx_address_enabled = self.read_pipe_bit(registers::EN_RXADDR, pipe)?;
        let mut address = [0u8; 5];
        let width = self.get_rx_address(pipe, &mut address)?;
        let payload_width = self.get_payload_length(pipe)?;
        let dynamic_payloads = self.read_pipe_bit(registers::DYNPD, pipe)?;
        Ok(PipeConfig::default()
            .with_auto_ack(auto_ack)
            .with_rx_address_enabled(rx_address_enabled)
            .with_address(&address[..width])
            .with_payload_width(payload_width)
            .with_dynamic_payloads(dynamic_payloads))
    }

    /// Arguments are checked before anything is written.
    /// Only the bits of `pipe` change in the shared EN_AA, EN_RXADDR and DYNPD registers.
    fn set_pipe_config(&mut self, pipe: u8, config: &PipeConfig) -> Result<(), Self::PipeErrorType> {
        Self::validate_pipe(pipe)?;
        Self::validate_width(config.payload_width())?;
        self.validate_address_length(pipe, config.address_length())?;

        let mask = 1 << pipe;
        self.update_register_bits(registers::EN_AA, mask, config.auto_ack())?;
        self.update_register_bits(registers::EN_RXADDR, mask, config.rx_address_enabled())?;
        self.set_rx_address(pipe, config.address())?;
        self.set_payload_length(pipe, config.payload_width())?;
        self.set_dynamic_payloads_pipes(mask, config.dynamic_payloads())?;
        #[cfg(feature = "defmt")]
        defmt::trace!("configured pipe {=u8}", pipe);
        Ok(())
    }
}

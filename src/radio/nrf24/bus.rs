use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use super::{commands, constants::MAX_PAYLOAD, registers, Nrf24Error, Nrf24l01, Operation};

impl<SPI, DO, DELAY> Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Exchange the first `len` bytes of the scratch buffer inside one CSN low period.
    ///
    /// CSN is released even if the exchange fails. Returns the STATUS byte
    /// clocked out alongside the command byte.
    fn spi_transfer(&mut self, len: usize) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        let op = Operation::from_command(self._buf[0]);
        self._csn_pin.set_low().map_err(Nrf24Error::Gpo)?;
        let result = self
            ._spi
            .transfer_in_place(&mut self._buf[..len])
            .and_then(|_| self._spi.flush());
        let released = self._csn_pin.set_high();
        result.map_err(|source| Nrf24Error::Bus { op, source })?;
        released.map_err(Nrf24Error::Gpo)?;
        Ok(self._buf[0])
    }

    /// Send a `command` followed by `len` NOP bytes.
    ///
    /// The bytes received after the STATUS byte land in `self._buf[1..=len]`.
    /// This is also used to send commands that consist of 1 byte:
    /// ```ignore
    /// self.spi_read(0, commands::FLUSH_TX)?;
    /// ```
    pub(super) fn spi_read(
        &mut self,
        len: usize,
        command: u8,
    ) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        self._buf[0] = command;
        self._buf[1..=len].fill(commands::NOP);
        self.spi_transfer(len + 1)
    }

    pub(super) fn spi_write_byte(
        &mut self,
        register: u8,
        byte: u8,
    ) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        self._buf[0] = register | commands::W_REGISTER;
        self._buf[1] = byte;
        self.spi_transfer(2)
    }

    /// Send a `command` followed by `buf` (at most 32 bytes).
    pub(super) fn spi_write_buf(
        &mut self,
        command: u8,
        buf: &[u8],
    ) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        let buf_len = buf.len();
        self._buf[0] = command;
        self._buf[1..=buf_len].copy_from_slice(buf);
        self.spi_transfer(buf_len + 1)
    }

    pub(super) fn validate_register(register: u8) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        if register <= registers::LAST {
            Ok(())
        } else {
            Err(Nrf24Error::InvalidRegister(register))
        }
    }

    pub(super) fn validate_buf_len(len: usize) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        if (1..=MAX_PAYLOAD).contains(&len) {
            Ok(())
        } else {
            Err(Nrf24Error::InvalidLength(len))
        }
    }

    /// Read a single byte register at the given address (0x00 to 0x1D).
    pub fn read_register(&mut self, register: u8) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        Self::validate_register(register)?;
        self.spi_read(1, register | commands::R_REGISTER)?;
        Ok(self._buf[1])
    }

    /// Write a single byte `value` to the register at the given address (0x00 to 0x1D).
    pub fn write_register(
        &mut self,
        register: u8,
        value: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        Self::validate_register(register)?;
        self.spi_write_byte(register, value)?;
        Ok(())
    }

    /// Read `buf.len()` bytes (1 to 32) from the register at the given address.
    ///
    /// This is meant for the multi-byte address registers; the least significant byte
    /// comes first.
    pub fn read_register_buf(
        &mut self,
        register: u8,
        buf: &mut [u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        Self::validate_register(register)?;
        Self::validate_buf_len(buf.len())?;
        let len = buf.len();
        self.spi_read(len, register | commands::R_REGISTER)?;
        buf.copy_from_slice(&self._buf[1..=len]);
        Ok(())
    }

    /// Write `buf` (1 to 32 bytes) to the register at the given address.
    pub fn write_register_buf(
        &mut self,
        register: u8,
        buf: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        Self::validate_register(register)?;
        Self::validate_buf_len(buf.len())?;
        self.spi_write_buf(register | commands::W_REGISTER, buf)?;
        Ok(())
    }

    /// Fetch the STATUS register by sending a NOP command.
    ///
    /// See also [`EsbStatus::get_status_flags()`](fn@crate::radio::prelude::EsbStatus::get_status_flags).
    pub fn read_status(&mut self) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_read(0, commands::NOP)
    }

    /// Send any `command` byte in one CSN low period.
    ///
    /// The `write` bytes follow the command byte. Then NOP bytes are clocked out to fill
    /// `read`. At most 32 bytes may follow the command. Returns the STATUS byte.
    ///
    /// This is an escape hatch for commands this driver does not wrap.
    pub fn transfer_raw(
        &mut self,
        command: u8,
        write: &[u8],
        read: &mut [u8],
    ) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        let total = write.len() + read.len();
        if total > MAX_PAYLOAD {
            return Err(Nrf24Error::InvalidLength(total));
        }
        self._buf[0] = command;
        self._buf[1..=write.len()].copy_from_slice(write);
        self._buf[write.len() + 1..=total].fill(commands::NOP);
        let status = self.spi_transfer(total + 1)?;
        read.copy_from_slice(&self._buf[write.len() + 1..=total]);
        Ok(status)
    }
}

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use super::{registers, Nrf24Error, Nrf24l01};
use crate::{radio::prelude::EsbStatus, StatusFlags};

impl<SPI, DO, DELAY> EsbStatus for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type StatusErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn get_status_flags(&mut self) -> Result<StatusFlags, Self::StatusErrorType> {
        Ok(StatusFlags::from_bits(self.read_status()?))
    }

    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType> {
        // the IRQ flags are cleared by writing 1 to them
        self.spi_write_byte(
            registers::STATUS,
            flags.into_bits() & StatusFlags::IRQ_MASK,
        )?;
        Ok(())
    }
}

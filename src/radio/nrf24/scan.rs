use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use super::{registers, Nrf24Error, Nrf24l01, CHANNELS};
use crate::radio::prelude::{EsbChannel, EsbFifo};

impl<SPI, DO, DELAY> Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Received Power Detection.
    ///
    /// Returns `true` if a signal above -64 dBm was present on the current channel
    /// while the radio was listening in RX mode.
    pub fn rpd(&mut self) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_read(1, registers::RPD)?;
        Ok(self._buf[1] & 1 == 1)
    }

    /// Sweep all 128 channels and report which ones carry a signal.
    ///
    /// Each channel is listened to for 1 millisecond. The radio should be in RX mode
    /// (see [`EsbRadio::as_rx()`](fn@crate::radio::prelude::EsbRadio::as_rx)) for the
    /// carrier detection to work. The radio is left tuned to channel 127.
    pub fn scan_channels(&mut self) -> Result<[bool; CHANNELS], Nrf24Error<SPI::Error, DO::Error>> {
        let mut found = [false; CHANNELS];
        for (channel, signal) in (0u8..).zip(found.iter_mut()) {
            self.set_channel(channel)?;
            self.flush_rx()?;
            self.flush_tx()?;
            self._delay_impl.delay_us(1000);
            *signal = self.rpd()?;
        }
        #[cfg(feature = "defmt")]
        defmt::trace!("scanned {=usize} channels", CHANNELS);
        Ok(found)
    }
}

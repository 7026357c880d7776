use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use super::{bit_fields::RfSetup, registers, Nrf24Error, Nrf24l01};
use crate::{radio::prelude::EsbDataRate, DataRate};

impl<SPI, DO, DELAY> EsbDataRate for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type DataRateErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// Returns [`Nrf24Error::BinaryCorruption`] if the RF_SETUP register
    /// holds the reserved data rate encoding.
    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType> {
        self.spi_read(1, registers::RF_SETUP)?;
        RfSetup::from_bits(self._buf[1])
            .data_rate()
            .ok_or(Nrf24Error::BinaryCorruption)
    }

    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType> {
        self.spi_read(1, registers::RF_SETUP)?;
        let setup = RfSetup::from_bits(self._buf[1]).with_data_rate(data_rate);
        self.spi_write_byte(registers::RF_SETUP, setup.into_bits())?;
        Ok(())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{registers, DataRate, EsbDataRate, Nrf24Error};
    use crate::radio::commands;
    use crate::{spi_test_expects, test::mk_radio};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    fn set_data_rate_parametrized(data_rate: DataRate, expected: u8) {
        let spi_expectations = spi_test_expects![
            // the PA level and LNA bits survive
            (vec![registers::RF_SETUP, 0xFFu8], vec![0xEu8, 0x2Fu8]),
            (
                vec![registers::RF_SETUP | commands::W_REGISTER, expected],
                vec![0xEu8, 0u8],
            ),
        ];
        let mut mocks = mk_radio(&[], &spi_expectations);
        let radio = &mut mocks.0;
        radio.set_data_rate(data_rate).unwrap();
        mocks.done();
    }

    #[test]
    fn data_rate_1mbps() {
        set_data_rate_parametrized(DataRate::Mbps1, 0x07);
    }

    #[test]
    fn data_rate_2mbps() {
        set_data_rate_parametrized(DataRate::Mbps2, 0x0F);
    }

    #[test]
    fn data_rate_250kbps() {
        set_data_rate_parametrized(DataRate::Kbps250, 0x27);
    }

    #[test]
    fn get_data_rate() {
        let spi_expectations = spi_test_expects![
            (vec![registers::RF_SETUP, 0xFFu8], vec![0xEu8, 0x27u8]),
            (vec![registers::RF_SETUP, 0xFFu8], vec![0xEu8, 0x0Fu8]),
            (vec![registers::RF_SETUP, 0xFFu8], vec![0xEu8, 0x2Fu8]),
        ];
        let mut mocks = mk_radio(&[], &spi_expectations);
        let radio = &mut mocks.0;
        assert_eq!(radio.get_data_rate(), Ok(DataRate::Kbps250));
        assert_eq!(radio.get_data_rate(), Ok(DataRate::Mbps2));
        assert_eq!(radio.get_data_rate(), Err(Nrf24Error::BinaryCorruption));
        mocks.done();
    }
}

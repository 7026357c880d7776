use super::{registers, Nrf24Error, Nrf24l01};
use crate::radio::prelude::EsbDetails;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

#[cfg(any(feature = "defmt", feature = "std"))]
use super::{
    bit_fields::{Config, FifoStatus, RfSetup},
    constants::PIPES,
    mnemonics,
};
#[cfg(any(feature = "defmt", feature = "std"))]
use crate::RetransmitPolicy;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
macro_rules! print_line {
    ($($arg:tt)*) => {
        std::println!($($arg)*)
    };
}

#[cfg(all(feature = "defmt", not(feature = "std")))]
macro_rules! print_line {
    ($($arg:tt)*) => {
        defmt::println!($($arg)*)
    };
}

impl<SPI, DO, DELAY> Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Read every register (0x00 to 0x1D) and pass each address with its
    /// value (or the error that prevented reading it) to `report`.
    ///
    /// A failed read does not stop the dump. Returns the number of failed reads.
    /// ```ignore
    /// let failures = radio.dump_registers(|register, value| {
    ///     if let Ok(value) = value {
    ///         println!("0x{register:02X} = 0x{value:02X}");
    ///     }
    /// });
    /// ```
    pub fn dump_registers<F>(&mut self, mut report: F) -> usize
    where
        F: FnMut(u8, Result<u8, Nrf24Error<SPI::Error, DO::Error>>),
    {
        let mut failures = 0;
        for register in 0..=registers::LAST {
            let value = self.read_register(register);
            if value.is_err() {
                failures += 1;
            }
            report(register, value);
        }
        failures
    }

    #[cfg(any(feature = "defmt", feature = "std"))]
    fn print_snapshot(&mut self) {
        let mut snapshot = [None; registers::LAST as usize + 1];
        let failures = self.dump_registers(|register, value| match value {
            Ok(value) => snapshot[register as usize] = Some(value),
            Err(_) => print_line!("Register {} could not be read", register),
        });
        let get = |register: u8| snapshot[register as usize];

        if let Some(channel) = get(registers::RF_CH) {
            print_line!(
                "Channel___________________{} ~ {} MHz",
                channel,
                channel as u16 + 2400u16
            );
        }
        if let Some(setup) = get(registers::RF_SETUP).map(RfSetup::from_bits) {
            match setup.data_rate() {
                Some(data_rate) => print_line!("RF Data Rate______________{}", data_rate),
                None => print_line!("RF Data Rate______________invalid"),
            }
            print_line!("RF Power Amplifier________{}", setup.pa_level());
            print_line!("RF LNA enabled____________{}", setup.lna_enable());
        }
        if let Some(config) = get(registers::CONFIG).map(Config::from_bits) {
            print_line!("CRC Length________________{}", config.crc_length());
            print_line!("Mode______________________{}", config.mode(self._ce_active));
        }
        if let Some(setup_aw) = get(registers::SETUP_AW) {
            print_line!("Address length____________{} bytes", (setup_aw & 3) + 2);
        }
        if let Some(setup_retr) = get(registers::SETUP_RETR) {
            print_line!(
                "Auto retransmit___________{}",
                RetransmitPolicy::from_bits(setup_retr)
            );
        }
        if let Some(observer) = get(registers::OBSERVE_TX) {
            print_line!("Packets lost\n    on current channel____{}", observer >> 4);
            print_line!(
                "Retry attempts made\n    for last transmission_{}",
                observer & mnemonics::ARC_CNT
            );
        }
        if let Some(fifo) = get(registers::FIFO_STATUS).map(FifoStatus::from_bits) {
            print_line!("TX FIFO___________________{}", fifo.state(true));
            print_line!("RX FIFO___________________{}", fifo.state(false));
        }
        if let Some(features) = get(registers::FEATURE) {
            print_line!(
                "Ask no ACK allowed________{}",
                features & mnemonics::EN_DYN_ACK > 0
            );
            print_line!(
                "Dynamic Payloads allowed__{}",
                features & mnemonics::EN_DPL > 0
            );
        }
        if let (Some(en_aa), Some(en_rxaddr), Some(dynpd)) = (
            get(registers::EN_AA),
            get(registers::EN_RXADDR),
            get(registers::DYNPD),
        ) {
            for pipe in 0..PIPES {
                let bit = 1u8 << pipe;
                print_line!(
                    "Pipe {} ({}) address byte {}, auto-ack {}, dynamic payloads {}, width {}",
                    pipe,
                    if en_rxaddr & bit > 0 { " open " } else { "closed" },
                    get(registers::RX_ADDR_P0 + pipe).unwrap_or_default(),
                    en_aa & bit > 0,
                    dynpd & bit > 0,
                    get(registers::RX_PW_P0 + pipe).unwrap_or_default()
                );
            }
        }
        if failures > 0 {
            print_line!("{} registers could not be read", failures);
        }
    }
}

impl<SPI, DO, DELAY> EsbDetails for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type DetailsErrorType = Nrf24Error<SPI::Error, DO::Error>;

    #[cfg(any(feature = "defmt", feature = "std"))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        self.print_snapshot();
        Ok(())
    }

    #[cfg(not(any(feature = "defmt", feature = "std")))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        Ok(())
    }
}

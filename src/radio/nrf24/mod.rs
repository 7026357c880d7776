use core::fmt::{Display, Formatter};

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};
mod auto_ack;
pub(crate) mod bit_fields;
mod bus;
mod channel;
mod constants;
mod crc_length;
mod data_rate;
mod details;
mod fifo;
mod init;
mod pa_level;
mod payload_length;
mod pipe;
mod power;
mod radio;
mod scan;
#[cfg(test)]
pub(crate) mod sim;
mod status;
pub use constants::{commands, mnemonics, registers, CHANNELS};

/// The bus command that was in flight when an SPI exchange failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operation {
    /// Reading the register at the given address.
    ReadRegister(u8),
    /// Writing the register at the given address.
    WriteRegister(u8),
    /// Reading the payload at the top of the RX FIFO.
    ReadPayload,
    /// Reading the width of the payload at the top of the RX FIFO.
    ReadPayloadWidth,
    /// Loading a payload into the TX FIFO.
    WritePayload,
    /// Loading a payload into the TX FIFO that asks for no ACK.
    WritePayloadNoAck,
    /// Discarding every payload in the TX FIFO.
    FlushTx,
    /// Discarding every payload in the RX FIFO.
    FlushRx,
    /// Re-sending the last transmitted payload (only reachable through
    /// [`Nrf24l01::transfer_raw()`]).
    ReuseTxPayload,
    /// A NOP used to fetch the STATUS register.
    Status,
    /// Any other command byte.
    Unknown(u8),
}

impl Operation {
    /// Describe the given command byte.
    pub const fn from_command(command: u8) -> Self {
        match command {
            0x00..=0x1F => Operation::ReadRegister(command & commands::REGISTER_MASK),
            0x20..=0x3F => Operation::WriteRegister(command & commands::REGISTER_MASK),
            commands::R_RX_PL_WID => Operation::ReadPayloadWidth,
            commands::R_RX_PAYLOAD => Operation::ReadPayload,
            commands::W_TX_PAYLOAD => Operation::WritePayload,
            commands::W_TX_PAYLOAD_NO_ACK => Operation::WritePayloadNoAck,
            commands::FLUSH_TX => Operation::FlushTx,
            commands::FLUSH_RX => Operation::FlushRx,
            commands::REUSE_TX_PL => Operation::ReuseTxPayload,
            commands::NOP => Operation::Status,
            _ => Operation::Unknown(command),
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Operation::ReadRegister(addr) => write!(f, "read register 0x{addr:02X}"),
            Operation::WriteRegister(addr) => write!(f, "write register 0x{addr:02X}"),
            Operation::ReadPayload => write!(f, "read payload"),
            Operation::ReadPayloadWidth => write!(f, "read payload width"),
            Operation::WritePayload => write!(f, "write payload"),
            Operation::WritePayloadNoAck => write!(f, "write payload (no ACK)"),
            Operation::FlushTx => write!(f, "flush TX FIFO"),
            Operation::FlushRx => write!(f, "flush RX FIFO"),
            Operation::ReuseTxPayload => write!(f, "reuse TX payload"),
            Operation::Status => write!(f, "read status"),
            Operation::Unknown(command) => write!(f, "command 0x{command:02X}"),
        }
    }
}

/// An collection of error types to describe hardware malfunctions
/// and arguments the radio cannot accept.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24Error<SPI, DO> {
    /// Represents a SPI transaction error during the given [`Operation`].
    Bus { op: Operation, source: SPI },
    /// Represents a DigitalOutput error (CSN or CE pin).
    Gpo(DO),
    /// Represents a corruption of binary data (as it was transferred over the SPI bus' MISO)
    BinaryCorruption,
    /// A mode transition or payload operation was attempted before
    /// [`EsbInit::configure()`](fn@crate::radio::prelude::EsbInit::configure) succeeded.
    NotConfigured,
    /// A register address above 0x1D.
    InvalidRegister(u8),
    /// A channel above 127.
    InvalidChannel(u8),
    /// A pipe number above 5.
    InvalidPipe(u8),
    /// A pipe mask with bits set above pipe 5.
    InvalidPipeMask(u8),
    /// A payload or buffer length outside [1, 32] (or a payload width above 32).
    InvalidLength(usize),
    /// An address that does not match the configured address length
    /// (or an address length outside [3, 5]).
    InvalidAddressLength(usize),
    /// An auto-retransmit delay or count above 15.
    InvalidRetransmit { delay: u8, count: u8 },
}

impl<SPI, DO> Display for Nrf24Error<SPI, DO>
where
    SPI: core::fmt::Debug,
    DO: core::fmt::Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Nrf24Error::Bus { op, source } => write!(f, "SPI error during {op}: {source:?}"),
            Nrf24Error::Gpo(e) => write!(f, "output pin error: {e:?}"),
            Nrf24Error::BinaryCorruption => write!(f, "corrupted data read from the radio"),
            Nrf24Error::NotConfigured => write!(f, "radio is not configured"),
            Nrf24Error::InvalidRegister(addr) => write!(f, "invalid register 0x{addr:02X}"),
            Nrf24Error::InvalidChannel(channel) => write!(f, "invalid channel {channel}"),
            Nrf24Error::InvalidPipe(pipe) => write!(f, "invalid pipe {pipe}"),
            Nrf24Error::InvalidPipeMask(mask) => write!(f, "invalid pipe mask 0x{mask:02X}"),
            Nrf24Error::InvalidLength(len) => write!(f, "invalid length {len}"),
            Nrf24Error::InvalidAddressLength(len) => write!(f, "invalid address length {len}"),
            Nrf24Error::InvalidRetransmit { delay, count } => {
                write!(f, "invalid auto-retransmit delay {delay} or count {count}")
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl<SPI, DO> defmt::Format for Nrf24Error<SPI, DO>
where
    SPI: core::fmt::Debug,
    DO: core::fmt::Debug,
{
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Nrf24Error::Bus { op, source } => defmt::write!(
                fmt,
                "SPI error during {}: {}",
                op,
                defmt::Debug2Format(source)
            ),
            Nrf24Error::Gpo(e) => defmt::write!(fmt, "output pin error: {}", defmt::Debug2Format(e)),
            Nrf24Error::BinaryCorruption => defmt::write!(fmt, "corrupted data read from the radio"),
            Nrf24Error::NotConfigured => defmt::write!(fmt, "radio is not configured"),
            Nrf24Error::InvalidRegister(addr) => defmt::write!(fmt, "invalid register {=u8:#X}", addr),
            Nrf24Error::InvalidChannel(channel) => defmt::write!(fmt, "invalid channel {=u8}", channel),
            Nrf24Error::InvalidPipe(pipe) => defmt::write!(fmt, "invalid pipe {=u8}", pipe),
            Nrf24Error::InvalidPipeMask(mask) => {
                defmt::write!(fmt, "invalid pipe mask {=u8:#X}", mask)
            }
            Nrf24Error::InvalidLength(len) => defmt::write!(fmt, "invalid length {=usize}", len),
            Nrf24Error::InvalidAddressLength(len) => {
                defmt::write!(fmt, "invalid address length {=usize}", len)
            }
            Nrf24Error::InvalidRetransmit { delay, count } => defmt::write!(
                fmt,
                "invalid auto-retransmit delay {=u8} or count {=u8}",
                delay,
                count
            ),
        }
    }
}

/// This struct implements the [`Esb*` traits](mod@crate::radio::prelude)
/// for the nRF24L01 transceiver.
///
/// Additionally, there are some functions implemented that are specific to the nRF24L01.
///
/// The driver owns the SPI bus outright and drives the radio's CSN pin itself,
/// so every command is framed by exactly one CSN low period.
pub struct Nrf24l01<SPI, DO, DELAY> {
    _spi: SPI,
    _csn_pin: DO,
    _ce_pin: DO,
    _delay_impl: DELAY,
    _buf: [u8; 33],
    _ce_active: bool,
    _configured: bool,
}

impl<SPI, DO, DELAY> Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Instantiate an [`Nrf24l01`] object for use on the specified
    /// `spi` bus with the given `csn_pin` and `ce_pin`.
    ///
    /// Nothing is sent to the radio until
    /// [`EsbInit::configure()`](fn@crate::radio::prelude::EsbInit::configure)
    /// (or a bus primitive) is called.
    pub fn new(spi: SPI, csn_pin: DO, ce_pin: DO, delay_impl: DELAY) -> Nrf24l01<SPI, DO, DELAY> {
        Nrf24l01 {
            _spi: spi,
            _csn_pin: csn_pin,
            _ce_pin: ce_pin,
            _delay_impl: delay_impl,
            _buf: [0u8; 33],
            _ce_active: false,
            _configured: false,
        }
    }

    /// Has [`EsbInit::configure()`](fn@crate::radio::prelude::EsbInit::configure)
    /// succeeded?
    pub fn is_configured(&self) -> bool {
        self._configured
    }

    /// Destroy the driver and hand back the bus, the CSN pin, the CE pin and the delay.
    pub fn release(self) -> (SPI, DO, DO, DELAY) {
        (self._spi, self._csn_pin, self._ce_pin, self._delay_impl)
    }

    fn ensure_configured(&self) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        if self._configured {
            Ok(())
        } else {
            Err(Nrf24Error::NotConfigured)
        }
    }

    fn validate_pipe(pipe: u8) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        if pipe < constants::PIPES {
            Ok(())
        } else {
            Err(Nrf24Error::InvalidPipe(pipe))
        }
    }

    fn validate_pipe_mask(pipes: u8) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        if pipes & !mnemonics::ALL_PIPES == 0 {
            Ok(())
        } else {
            Err(Nrf24Error::InvalidPipeMask(pipes))
        }
    }

    fn set_ce(&mut self, active: bool) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        if active {
            self._ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        } else {
            self._ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        }
        self._ce_active = active;
        Ok(())
    }
}

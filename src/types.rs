//! This module defines types used by various traits.
//! These types are meant to be agnostic of the trait implementation.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

use bitfield_struct::bitfield;

/// Power Amplifier level. The units dBm (decibel-milliwatts or dB<sub>mW</sub>)
/// represents a logarithmic signal loss.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaLevel {
    /// -18 dBm
    Min,
    /// -12 dBm
    Low,
    /// -6 dBm
    High,
    /// 0 dBm
    Max,
}

#[cfg(feature = "defmt")]
impl defmt::Format for PaLevel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PaLevel::Min => defmt::write!(fmt, "Min"),
            PaLevel::Low => defmt::write!(fmt, "Low"),
            PaLevel::High => defmt::write!(fmt, "High"),
            PaLevel::Max => defmt::write!(fmt, "Max"),
        }
    }
}

impl PaLevel {
    /// The RF_PWR bits of the RF_SETUP register.
    pub(crate) const MASK: u8 = 6;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            PaLevel::Min => 0,
            PaLevel::Low => 2,
            PaLevel::High => 4,
            PaLevel::Max => 6,
        }
    }
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0 => PaLevel::Min,
            2 => PaLevel::Low,
            4 => PaLevel::High,
            _ => PaLevel::Max,
        }
    }
}

impl Display for PaLevel {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PaLevel::Min => write!(f, "Min"),
            PaLevel::Low => write!(f, "Low"),
            PaLevel::High => write!(f, "High"),
            PaLevel::Max => write!(f, "Max"),
        }
    }
}

/// How fast data moves through the air. Units are in bits per second (bps).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DataRate {
    /// represents 1 Mbps
    Mbps1,
    /// represents 2 Mbps
    Mbps2,
    /// represents 250 Kbps
    Kbps250,
}

impl DataRate {
    /// The RF_DR_LOW and RF_DR_HIGH bits of the RF_SETUP register.
    pub(crate) const MASK: u8 = 0x28;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            DataRate::Mbps1 => 0,
            DataRate::Mbps2 => 0x8,
            DataRate::Kbps250 => 0x20,
        }
    }
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0x8 => DataRate::Mbps2,
            0x20 => DataRate::Kbps250,
            _ => DataRate::Mbps1,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DataRate {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DataRate::Mbps1 => defmt::write!(fmt, "1 Mbps"),
            DataRate::Mbps2 => defmt::write!(fmt, "2 Mbps"),
            DataRate::Kbps250 => defmt::write!(fmt, "250 Kbps"),
        }
    }
}

impl Display for DataRate {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            DataRate::Mbps1 => write!(f, "1 Mbps"),
            DataRate::Mbps2 => write!(f, "2 Mbps"),
            DataRate::Kbps250 => write!(f, "250 Kbps"),
        }
    }
}

/// The length of a CRC checksum that is used (if any).
///
/// Cyclical Redundancy Checking (CRC) is commonly used to ensure data integrity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CrcLength {
    /// represents no CRC checksum is used
    Disabled,
    /// represents CRC 8 bit checksum is used
    Bit8,
    /// represents CRC 16 bit checksum is used
    Bit16,
}

impl CrcLength {
    /// The EN_CRC and CRCO bits of the CONFIG register.
    pub(crate) const MASK: u8 = 0b1100;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            CrcLength::Disabled => 0,
            CrcLength::Bit8 => 8,
            CrcLength::Bit16 => 12,
        }
    }
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0 | 4 => CrcLength::Disabled,
            8 => CrcLength::Bit8,
            _ => CrcLength::Bit16,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CrcLength {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            CrcLength::Disabled => defmt::write!(fmt, "disabled"),
            CrcLength::Bit8 => defmt::write!(fmt, "8 bit"),
            CrcLength::Bit16 => defmt::write!(fmt, "16 bit"),
        }
    }
}

impl Display for CrcLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            CrcLength::Disabled => write!(f, "disabled"),
            CrcLength::Bit8 => write!(f, "8 bit"),
            CrcLength::Bit16 => write!(f, "16 bit"),
        }
    }
}

/// The possible states of a FIFO.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FifoState {
    /// Represent the state of a FIFO when it is full.
    Full,
    /// Represent the state of a FIFO when it is empty.
    Empty,
    /// Represent the state of a FIFO when it is not full but not empty either.
    Occupied,
}

#[cfg(feature = "defmt")]
impl defmt::Format for FifoState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            FifoState::Empty => defmt::write!(fmt, "Empty"),
            FifoState::Full => defmt::write!(fmt, "Full"),
            FifoState::Occupied => defmt::write!(fmt, "Occupied"),
        }
    }
}

impl Display for FifoState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            FifoState::Empty => write!(f, "Empty"),
            FifoState::Full => write!(f, "Full"),
            FifoState::Occupied => write!(f, "Occupied"),
        }
    }
}

/// The operating mode of the radio.
///
/// This is derived from the PWR_UP and PRIM_RX bits of the CONFIG register
/// and the level of the CE pin.
///
/// | mode | PWR_UP | PRIM_RX | CE |
/// |-----:|:------:|:-------:|:--:|
/// | [`Mode::PowerDown`] | 0 | - | - |
/// | [`Mode::Standby`] | 1 | - | low |
/// | [`Mode::Rx`] | 1 | 1 | high |
/// | [`Mode::Tx`] | 1 | 0 | high |
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    /// Lowest current draw. Registers remain accessible.
    PowerDown,
    /// Powered up but neither receiving nor transmitting.
    Standby,
    /// Actively listening as a primary receiver.
    Rx,
    /// Actively transmitting as a primary transmitter.
    Tx,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Mode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Mode::PowerDown => defmt::write!(fmt, "PowerDown"),
            Mode::Standby => defmt::write!(fmt, "Standby"),
            Mode::Rx => defmt::write!(fmt, "RX"),
            Mode::Tx => defmt::write!(fmt, "TX"),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Mode::PowerDown => write!(f, "PowerDown"),
            Mode::Standby => write!(f, "Standby"),
            Mode::Rx => write!(f, "RX"),
            Mode::Tx => write!(f, "TX"),
        }
    }
}

/// A struct used to describe the different interrupt events.
///
/// To instantiate an object with flags that have different values:
/// ```
/// use nrf24l01::StatusFlags;
/// let flags = StatusFlags::default() // all flags are false
///     .with_rx_dr(true); // assert only `rx_dr` flags
/// ```
/// Use [`StatusFlags::default`] to instantiate all flags set to false.
/// Use [`StatusFlags::new`] to instantiate all flags set to true.
#[bitfield(u8, new = false, order = Msb)]
#[derive(PartialEq, Eq)]
pub struct StatusFlags {
    #[bits(1)]
    __: u8,

    /// A flag to describe if RX Data Ready to read.
    pub rx_dr: bool,

    /// A flag to describe if TX Data Sent.
    pub tx_ds: bool,

    /// A flag to describe if TX Data Failed (the maximum number of retries was reached).
    pub tx_df: bool,

    /// The pipe number of the payload at the top of the RX FIFO.
    ///
    /// `7` means the RX FIFO is empty.
    #[bits(3, access = RO)]
    pub rx_pipe: u8,

    /// Is the TX FIFO full?
    #[bits(1, access = RO)]
    pub tx_full: bool,
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StatusFlags rx_dr: {}, tx_ds: {}, tx_df: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.tx_df()
        )
    }
}

impl StatusFlags {
    /// A mask to isolate only the IRQ flags of the STATUS register.
    pub(crate) const IRQ_MASK: u8 = 0x70;

    /// A convenience constructor similar to [`StatusFlags::default`] except
    /// all fields are set to `true`.
    pub fn new() -> Self {
        Self::from_bits(Self::IRQ_MASK)
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "StatusFlags rx_dr: {}, tx_ds: {}, tx_df: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.tx_df()
        )
    }
}

/// The hardware auto-retransmission policy, as stored in the SETUP_RETR register.
///
/// The radio executes these retries on its own when a payload is sent
/// with auto-ack. There is no software retry loop.
///
/// - `delay`: wait between retries in steps of 250 microseconds
///   (`0` waits 250us, `15` waits 4000us).
/// - `count`: maximum number of retries (`0` disables retransmission).
#[bitfield(u8, order = Msb)]
#[derive(PartialEq, Eq)]
pub struct RetransmitPolicy {
    /// The Auto Retransmit Delay (ARD) step.
    #[bits(4)]
    pub delay: u8,

    /// The Auto Retransmit Count (ARC).
    #[bits(4)]
    pub count: u8,
}

impl RetransmitPolicy {
    /// The longest delay and the most retries.
    ///
    /// 250 Kbps with auto-ack and 32 byte payloads needs at least 1500us
    /// between retries; anything shorter loses ACK packets.
    pub const RELIABLE: Self = Self::from_bits(0xFF);

    /// Build a policy from its `delay` step and retry `count`.
    ///
    /// Returns [`None`] if either value exceeds 15.
    pub fn from_parts(delay: u8, count: u8) -> Option<Self> {
        if delay > 15 || count > 15 {
            return None;
        }
        Some(Self::from_bits(delay << 4 | count))
    }

    /// The delay between retries in microseconds.
    pub const fn delay_us(&self) -> u16 {
        ((self.into_bits() >> 4) as u16 + 1) * 250
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RetransmitPolicy {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "RetransmitPolicy delay: {=u16} us, count: {=u8}",
            self.delay_us(),
            self.count()
        )
    }
}

impl Display for RetransmitPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "RetransmitPolicy delay: {} us, count: {}",
            self.delay_us(),
            self.count()
        )
    }
}

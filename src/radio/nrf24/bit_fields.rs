use bitfield_struct::bitfield;

use crate::{CrcLength, DataRate, FifoState, Mode, PaLevel};

/// The CONFIG register.
///
/// The IRQ mask bits are active high: a set bit hides that event from the IRQ pin.
#[bitfield(u8, order = Msb)]
#[derive(PartialEq, Eq)]
pub(crate) struct Config {
    #[bits(1)]
    _padding: u8,

    pub mask_rx_dr: bool,

    pub mask_tx_ds: bool,

    pub mask_max_rt: bool,

    #[bits(2, access = None)]
    crc: u8,

    pub pwr_up: bool,

    pub prim_rx: bool,
}

impl Config {
    /// The CRCO bit (set means a 16 bit checksum).
    pub(crate) const CRCO: u8 = 1 << 2;

    pub const fn crc_length(&self) -> CrcLength {
        CrcLength::from_bits(self.into_bits())
    }

    pub fn with_crc_length(self, length: CrcLength) -> Self {
        Self::from_bits(self.into_bits() & !CrcLength::MASK | length.into_bits())
    }

    /// Select the 8 bit checksum without touching EN_CRC.
    pub fn with_crc_8bit(self) -> Self {
        Self::from_bits(self.into_bits() & !Self::CRCO)
    }

    /// The mode this register describes, given the level of the CE pin.
    pub fn mode(&self, ce_active: bool) -> Mode {
        if !self.pwr_up() {
            Mode::PowerDown
        } else if !ce_active {
            Mode::Standby
        } else if self.prim_rx() {
            Mode::Rx
        } else {
            Mode::Tx
        }
    }
}

/// The RF_SETUP register.
#[bitfield(u8, order = Msb)]
#[derive(PartialEq, Eq)]
pub(crate) struct RfSetup {
    pub cont_wave: bool,

    #[bits(1)]
    _padding: u8,

    #[bits(3, access = None)]
    data_rate: u8,

    #[bits(2, access = None)]
    pa_level: u8,

    pub lna_enable: bool,
}

impl RfSetup {
    /// Returns [`None`] when both RF_DR_LOW and RF_DR_HIGH are set.
    pub const fn data_rate(&self) -> Option<DataRate> {
        if self.into_bits() & DataRate::MASK == DataRate::MASK {
            None
        } else {
            Some(DataRate::from_bits(self.into_bits()))
        }
    }

    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self::from_bits(self.into_bits() & !DataRate::MASK | data_rate.into_bits())
    }

    pub const fn pa_level(&self) -> PaLevel {
        PaLevel::from_bits(self.into_bits())
    }

    pub fn with_pa_level(self, level: PaLevel) -> Self {
        Self::from_bits(self.into_bits() & !PaLevel::MASK | level.into_bits())
    }
}

/// The FIFO_STATUS register.
#[bitfield(u8, order = Msb)]
#[derive(PartialEq, Eq)]
pub(crate) struct FifoStatus {
    #[bits(1)]
    _padding: u8,

    pub tx_reuse: bool,

    pub tx_full: bool,

    pub tx_empty: bool,

    #[bits(2)]
    _reserved: u8,

    pub rx_full: bool,

    pub rx_empty: bool,
}

impl FifoStatus {
    pub fn state(&self, about_tx: bool) -> FifoState {
        let (full, empty) = if about_tx {
            (self.tx_full(), self.tx_empty())
        } else {
            (self.rx_full(), self.rx_empty())
        };
        if empty {
            FifoState::Empty
        } else if full {
            FifoState::Full
        } else {
            FifoState::Occupied
        }
    }
}

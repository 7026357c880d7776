/// Register addresses of the nRF24L01.
///
/// Every address fits in the low 5 bits of a command byte.
pub mod registers {
    pub const CONFIG: u8 = 0x00;
    pub const EN_AA: u8 = 0x01;
    pub const EN_RXADDR: u8 = 0x02;
    pub const SETUP_AW: u8 = 0x03;
    pub const SETUP_RETR: u8 = 0x04;
    pub const RF_CH: u8 = 0x05;
    pub const RF_SETUP: u8 = 0x06;
    pub const STATUS: u8 = 0x07;
    pub const OBSERVE_TX: u8 = 0x08;
    pub const RPD: u8 = 0x09;
    pub const RX_ADDR_P0: u8 = 0x0A;
    pub const RX_ADDR_P1: u8 = 0x0B;
    pub const RX_ADDR_P2: u8 = 0x0C;
    pub const RX_ADDR_P3: u8 = 0x0D;
    pub const RX_ADDR_P4: u8 = 0x0E;
    pub const RX_ADDR_P5: u8 = 0x0F;
    pub const TX_ADDR: u8 = 0x10;
    pub const RX_PW_P0: u8 = 0x11;
    pub const RX_PW_P1: u8 = 0x12;
    pub const RX_PW_P2: u8 = 0x13;
    pub const RX_PW_P3: u8 = 0x14;
    pub const RX_PW_P4: u8 = 0x15;
    pub const RX_PW_P5: u8 = 0x16;
    pub const FIFO_STATUS: u8 = 0x17;
    pub const DYNPD: u8 = 0x1C;
    pub const FEATURE: u8 = 0x1D;

    /// The highest register address.
    pub const LAST: u8 = FEATURE;
}

/// SPI command bytes of the nRF24L01.
pub mod commands {
    pub const R_REGISTER: u8 = 0x00;
    pub const W_REGISTER: u8 = 0x20;
    pub const R_RX_PL_WID: u8 = 0x60;
    pub const R_RX_PAYLOAD: u8 = 0x61;
    pub const W_TX_PAYLOAD: u8 = 0xA0;
    pub const W_TX_PAYLOAD_NO_ACK: u8 = 0xB0;
    pub const FLUSH_TX: u8 = 0xE1;
    pub const FLUSH_RX: u8 = 0xE2;
    pub const REUSE_TX_PL: u8 = 0xE3;
    pub const NOP: u8 = 0xFF;

    /// The bits of a register command that hold the register address.
    pub const REGISTER_MASK: u8 = 0x1F;
}

/// Bit mnemonics
pub mod mnemonics {
    pub const MASK_RX_DR: u8 = 1 << 6;
    pub const MASK_TX_DS: u8 = 1 << 5;
    pub const MASK_MAX_RT: u8 = 1 << 4;

    /// One bit per data pipe, pipes 0 through 5.
    pub const ALL_PIPES: u8 = 0x3F;

    /// FEATURE: enable dynamic payload length.
    pub const EN_DPL: u8 = 1 << 2;
    /// FEATURE: enable payloads sent without asking for an ACK.
    pub const EN_DYN_ACK: u8 = 1;

    /// OBSERVE_TX: retransmission count of the last packet.
    pub const ARC_CNT: u8 = 0x0F;

    /// RF_SETUP: LNA gain.
    pub const LNA_HCURR: u8 = 1;
}

/// The number of channels the radio can tune to.
pub const CHANNELS: usize = 128;

/// The largest payload (and the largest multi-byte register) in bytes.
pub const MAX_PAYLOAD: usize = 32;

/// The number of data pipes.
pub const PIPES: u8 = 6;

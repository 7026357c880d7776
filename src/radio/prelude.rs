//! This module defines the generic traits that may
//! need to imported to use radio implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use nrf24l01::radio::prelude::*;
//! ```

use crate::types::{CrcLength, DataRate, FifoState, Mode, PaLevel, RetransmitPolicy, StatusFlags};

use super::{PipeConfig, RadioConfig};

/// A trait to represent the one-time initialization sequence of a transceiver.
pub trait EsbInit {
    type ConfigErrorType;

    /// Bring the radio into a known state (standby) using the given `config`.
    ///
    /// This must succeed before any mode transition or payload operation is
    /// attempted. If it fails, the radio is left partially configured and
    /// the session should be considered lost.
    fn configure(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType>;
}

/// A trait to represent manipulation of data pipes
/// for an ESB capable transceiver.
pub trait EsbPipe {
    type PipeErrorType;

    /// Enable (or disable) the RX address of all pipes at once.
    fn set_rx_addresses(&mut self, enable: bool) -> Result<(), Self::PipeErrorType>;

    /// Enable (or disable) the RX address of the pipes in `pipes`.
    ///
    /// `pipes` is a bit mask where bit `n` represents pipe `n`, e.g.
    /// `0b0000_0010` is pipe 1. Pipes not in the mask keep their setting.
    fn set_rx_address_pipes(&mut self, pipes: u8, enable: bool) -> Result<(), Self::PipeErrorType>;

    /// Get the least significant byte of the specified `pipe`'s RX address.
    fn get_rx_address_byte(&mut self, pipe: u8) -> Result<u8, Self::PipeErrorType>;

    /// Set only the least significant byte of the specified `pipe`'s RX address.
    ///
    /// For pipes 2-5 this is the only address byte they own.
    fn set_rx_address_byte(&mut self, pipe: u8, address: u8) -> Result<(), Self::PipeErrorType>;

    /// Read the full RX address of a `pipe` into `address`.
    ///
    /// The number of bytes written (the configured address length) is returned.
    /// `address` must be at least that long.
    ///
    /// Pipes 2-5 borrow their high bytes from pipe 1, so for those pipes the result
    /// is pipe 1's address with the least significant (first) byte replaced.
    fn get_rx_address(&mut self, pipe: u8, address: &mut [u8]) -> Result<usize, Self::PipeErrorType>;

    /// Write the full RX address of a `pipe`.
    ///
    /// For pipes 0 and 1, the `address` length must equal the configured address length.
    /// For pipes 2-5, only `address[0]` is written; the remaining bytes come from pipe 1.
    fn set_rx_address(&mut self, pipe: u8, address: &[u8]) -> Result<(), Self::PipeErrorType>;

    /// Set the address used for transmitting when radio is in TX mode.
    ///
    /// The `address` length must equal the configured address length.
    fn open_tx_pipe(&mut self, address: &[u8]) -> Result<(), Self::PipeErrorType>;

    /// Set the address length (applies to all pipes).
    ///
    /// Valid lengths are 3, 4 and 5 bytes.
    fn set_address_length(&mut self, length: u8) -> Result<(), Self::PipeErrorType>;

    /// Get the currently configured address length (applied to all pipes).
    fn get_address_length(&mut self) -> Result<u8, Self::PipeErrorType>;

    /// Read everything the radio knows about a `pipe` as one [`PipeConfig`].
    fn get_pipe_config(&mut self, pipe: u8) -> Result<PipeConfig, Self::PipeErrorType>;

    /// Write a [`PipeConfig`] to a `pipe`, leaving every other pipe untouched.
    fn set_pipe_config(&mut self, pipe: u8, config: &PipeConfig) -> Result<(), Self::PipeErrorType>;
}

/// A trait to represent manipulation of a channel (aka frequency)
/// for an ESB capable transceiver.
pub trait EsbChannel {
    type ChannelErrorType;

    /// Set the radio's currently selected channel.
    ///
    /// These channels translate to the RF frequency as an offset of MHz from 2400 MHz.
    /// Valid channels are in range [0, 127].
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType>;

    /// Get the radio's currently selected channel.
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType>;
}

/// A trait to represent manipulation of [`StatusFlags`]
/// for an ESB capable transceiver.
pub trait EsbStatus {
    type StatusErrorType;

    /// Fetch the radio's current [`StatusFlags`].
    fn get_status_flags(&mut self) -> Result<StatusFlags, Self::StatusErrorType>;

    /// Clear the radio's IRQ status flags
    ///
    /// Set any member of [`StatusFlags`] to `true` to clear the corresponding
    /// interrupt event. Setting any member of [`StatusFlags`] to `false` will leave
    /// the corresponding status flag untouched.
    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType>;
}

/// A trait to represent manipulation of RX and TX FIFOs
/// for an ESB capable transceiver.
pub trait EsbFifo {
    type FifoErrorType;

    /// Flush the radio's RX FIFO.
    ///
    /// <div class="warning">
    ///
    /// Never flush the RX FIFO between receiving a payload and the radio
    /// sending its automatic ACK packet. The ACK would not be completed.
    ///
    /// </div>
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Flush the radio's TX FIFO.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Get the state of the specified FIFO.
    ///
    /// - Pass `true` to `about_tx` parameter to get the state of the TX FIFO.
    /// - Pass `false` to `about_tx` parameter to get the state of the RX FIFO.
    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType>;

    /// Is there a payload available in the radio's RX FIFO?
    fn available(&mut self) -> Result<bool, Self::FifoErrorType>;
}

/// A trait to represent manipulation of payload lengths (static or dynamic)
/// for an ESB capable transceiver.
pub trait EsbPayloadLength {
    type PayloadLengthErrorType;

    /// Set the static payload `width` expected on a `pipe`.
    ///
    /// `0` marks the pipe as unused; otherwise the width is in range [1, 32].
    /// Buffers given to [`EsbRadio::receive()`] must match this width.
    fn set_payload_length(&mut self, pipe: u8, width: u8) -> Result<(), Self::PayloadLengthErrorType>;

    /// Get the static payload width configured on a `pipe`.
    fn get_payload_length(&mut self, pipe: u8) -> Result<u8, Self::PayloadLengthErrorType>;

    /// Set the dynamic payloads feature for all pipes.
    fn set_dynamic_payloads(&mut self, enable: bool) -> Result<(), Self::PayloadLengthErrorType>;

    /// Set the dynamic payloads feature for the pipes in the `pipes` bit mask.
    ///
    /// Pipes not in the mask keep their setting.
    fn set_dynamic_payloads_pipes(
        &mut self,
        pipes: u8,
        enable: bool,
    ) -> Result<(), Self::PayloadLengthErrorType>;

    /// Get the length of the payload at the top of the RX FIFO.
    ///
    /// Only meaningful when dynamic payloads are enabled.
    fn get_dynamic_payload_length(&mut self) -> Result<u8, Self::PayloadLengthErrorType>;
}

/// A trait to represent manipulation of the automatic acknowledgement feature
/// for an ESB capable transceiver.
pub trait EsbAutoAck {
    type AutoAckErrorType;

    /// Enable or disable the auto-ack feature for all pipes.
    fn set_auto_ack(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType>;

    /// Enable or disable the auto-ack feature for the pipes in the `pipes` bit mask.
    ///
    /// Pipes not in the mask keep their setting.
    fn set_auto_ack_pipes(&mut self, pipes: u8, enable: bool) -> Result<(), Self::AutoAckErrorType>;

    /// Allow (or disallow) payloads sent without requesting an ACK.
    ///
    /// The radio ignores [`EsbRadio::transmit()`] calls with `with_ack` as `false`
    /// unless this is enabled.
    fn allow_ask_no_ack(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType>;

    /// Set the hardware auto-retransmission policy.
    ///
    /// - `delay` is the wait between retries in steps of 250 microseconds, range [0, 15].
    /// - `count` is the maximum number of retries, range [0, 15].
    fn set_auto_retries(&mut self, delay: u8, count: u8) -> Result<(), Self::AutoAckErrorType>;

    /// Get the hardware auto-retransmission policy.
    fn get_auto_retries(&mut self) -> Result<RetransmitPolicy, Self::AutoAckErrorType>;
}

/// A trait to represent manipulation of the power amplitude level
/// for an ESB capable transceiver.
pub trait EsbPaLevel {
    type PaLevelErrorType;

    /// Get the radio's current Power Amplifier level.
    fn get_pa_level(&mut self) -> Result<PaLevel, Self::PaLevelErrorType>;

    /// Set the radio's Power Amplifier level.
    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::PaLevelErrorType>;
}

/// A trait to represent manipulation of the radio's power state.
pub trait EsbPower {
    type PowerErrorType;

    /// Clear the PWR_UP bit, leaving the RX/TX role untouched.
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Set the PWR_UP bit, leaving the RX/TX role untouched,
    /// and wait for the radio's oscillator to start.
    fn power_up(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Is the radio powered up?
    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType>;
}

/// A trait to represent manipulation of Cyclical Redundancy Checksums
/// for an ESB capable transceiver.
pub trait EsbCrcLength {
    type CrcLengthErrorType;

    /// Get the current setting of the radio's CRC Length.
    fn get_crc_length(&mut self) -> Result<CrcLength, Self::CrcLengthErrorType>;

    /// Set the radio's CRC Length.
    fn set_crc_length(&mut self, crc_length: CrcLength) -> Result<(), Self::CrcLengthErrorType>;
}

/// A trait to represent manipulation of data rate
/// for an ESB capable transceiver.
pub trait EsbDataRate {
    type DataRateErrorType;

    /// Get the radio's current data rate.
    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType>;

    /// Set the radio's data rate.
    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType>;
}

/// A trait to represent the mode state machine and payload transfer
/// of an ESB capable transceiver.
pub trait EsbRadio {
    type RadioErrorType;

    /// Put the radio into active RX mode.
    ///
    /// Powers the radio up as a primary receiver and then asserts CE.
    fn as_rx(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Put the radio into active TX mode.
    ///
    /// Powers the radio up as a primary transmitter and then asserts CE.
    fn as_tx(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Leave active RX or TX mode by deasserting CE.
    fn standby(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Get the radio's current [`Mode`].
    fn get_mode(&mut self) -> Result<Mode, Self::RadioErrorType>;

    /// Put a payload in the TX FIFO.
    ///
    /// If `with_ack` is `false`, the receiver is told not to send an ACK packet
    /// (see [`EsbAutoAck::allow_ask_no_ack()`]).
    ///
    /// The `buf` length must equal the payload width of the receiving pipe.
    /// A mismatch is not detected here; the receiver truncates or pads the data.
    fn transmit(&mut self, buf: &[u8], with_ack: bool) -> Result<(), Self::RadioErrorType>;

    /// Read exactly `buf.len()` bytes from the top of the RX FIFO.
    ///
    /// The `buf` length must equal the payload width of the receiving pipe
    /// (see [`EsbPayloadLength::set_payload_length()`]).
    fn receive(&mut self, buf: &mut [u8]) -> Result<(), Self::RadioErrorType>;

    /// Get the number of retries made during the last transmission.
    fn get_last_arc(&mut self) -> Result<u8, Self::RadioErrorType>;
}

/// A trait to print a human readable summary of the radio's configuration.
pub trait EsbDetails {
    type DetailsErrorType;

    /// Print details about radio's current configuration.
    ///
    /// This does nothing unless the `std` or `defmt` feature is enabled.
    /// Registers that cannot be read are reported and skipped.
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType>;
}

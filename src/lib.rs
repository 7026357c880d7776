#![doc = include_str!("../README.md")]
//!
//! ## Bus primitives
//!
//! - [`Nrf24l01::new()`](fn@crate::radio::Nrf24l01::new)
//! - [`Nrf24l01::read_register()`](fn@crate::radio::Nrf24l01::read_register)
//! - [`Nrf24l01::write_register()`](fn@crate::radio::Nrf24l01::write_register)
//! - [`Nrf24l01::read_status()`](fn@crate::radio::Nrf24l01::read_status)
//! - [`Nrf24l01::transfer_raw()`](fn@crate::radio::Nrf24l01::transfer_raw)
//! - [`Nrf24l01::release()`](fn@crate::radio::Nrf24l01::release)
//!
//! ## Basic API
//!
//! - [`Nrf24l01::configure()`](radio/struct.Nrf24l01.html#method.configure)
//! - [`Nrf24l01::as_rx()`](radio/struct.Nrf24l01.html#method.as_rx)
//! - [`Nrf24l01::as_tx()`](radio/struct.Nrf24l01.html#method.as_tx)
//! - [`Nrf24l01::standby()`](radio/struct.Nrf24l01.html#method.standby)
//! - [`Nrf24l01::get_mode()`](radio/struct.Nrf24l01.html#method.get_mode)
//! - [`Nrf24l01::transmit()`](radio/struct.Nrf24l01.html#method.transmit)
//! - [`Nrf24l01::receive()`](radio/struct.Nrf24l01.html#method.receive)
//! - [`Nrf24l01::flush_rx()`](radio/struct.Nrf24l01.html#method.flush_rx)
//! - [`Nrf24l01::flush_tx()`](radio/struct.Nrf24l01.html#method.flush_tx)
//! - [`Nrf24l01::set_channel()`](radio/struct.Nrf24l01.html#method.set_channel)
//! - [`Nrf24l01::get_channel()`](radio/struct.Nrf24l01.html#method.get_channel)
//!
//! ## Pipe API
//!
//! - [`Nrf24l01::get_pipe_config()`](radio/struct.Nrf24l01.html#method.get_pipe_config)
//! - [`Nrf24l01::set_pipe_config()`](radio/struct.Nrf24l01.html#method.set_pipe_config)
//! - [`Nrf24l01::set_auto_ack_pipes()`](radio/struct.Nrf24l01.html#method.set_auto_ack_pipes)
//! - [`Nrf24l01::set_dynamic_payloads_pipes()`](radio/struct.Nrf24l01.html#method.set_dynamic_payloads_pipes)
//! - [`Nrf24l01::set_rx_address_pipes()`](radio/struct.Nrf24l01.html#method.set_rx_address_pipes)
//! - [`Nrf24l01::set_payload_length()`](radio/struct.Nrf24l01.html#method.set_payload_length)
//! - [`Nrf24l01::get_payload_length()`](radio/struct.Nrf24l01.html#method.get_payload_length)
//!
//! ## Diagnostics
//!
//! - [`Nrf24l01::rpd()`](fn@crate::radio::Nrf24l01::rpd)
//! - [`Nrf24l01::scan_channels()`](fn@crate::radio::Nrf24l01::scan_channels)
//! - [`Nrf24l01::dump_registers()`](fn@crate::radio::Nrf24l01::dump_registers)
//! - [`Nrf24l01::print_details()`](radio/struct.Nrf24l01.html#method.print_details)
//!
#![no_std]

mod types;
pub use types::{CrcLength, DataRate, FifoState, Mode, PaLevel, RetransmitPolicy, StatusFlags};
pub mod radio;

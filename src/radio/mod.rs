//! A module to encapsulate all things related to radio operation.
pub mod prelude;

mod nrf24;
pub use nrf24::{commands, mnemonics, registers, Nrf24Error, Nrf24l01, Operation, CHANNELS};

mod config;
pub use config::RadioConfig;

mod pipe_config;
pub use pipe_config::PipeConfig;

//! A simulated nRF24L01 for tests that check whole sequences of bus traffic.
//!
//! The register file is plain storage: whatever is written reads back unchanged.
//! The FIFOs only track payloads written or flushed over the bus.
extern crate std;

use core::convert::Infallible;
use std::{cell::RefCell, rc::Rc, vec::Vec};

use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType as PinErrorType, OutputPin},
    spi::{ErrorKind, ErrorType as SpiErrorType, SpiBus},
};

use super::{commands, registers, Nrf24l01};

/// Something observed on the simulated bus or lines, in order.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Event {
    /// CSN driven (`true` means high).
    Csn(bool),
    /// CE driven (`true` means high).
    Ce(bool),
    /// Bytes clocked out on MOSI in one exchange.
    Transfer(Vec<u8>),
    Flush,
    /// A delay in nanoseconds.
    Delay(u32),
}

pub(crate) struct SimState {
    pub registers: [[u8; 5]; registers::LAST as usize + 1],
    pub tx_fifo: Vec<Vec<u8>>,
    pub rx_fifo: Vec<Vec<u8>>,
    /// Fail every exchange that starts with this command byte.
    pub fail_command: Option<u8>,
    pub events: Vec<Event>,
}

impl Default for SimState {
    /// Power-on reset values from the datasheet.
    fn default() -> Self {
        let mut regs = [[0u8; 5]; registers::LAST as usize + 1];
        regs[registers::CONFIG as usize][0] = 0x08;
        regs[registers::EN_AA as usize][0] = 0x3F;
        regs[registers::EN_RXADDR as usize][0] = 0x03;
        regs[registers::SETUP_AW as usize][0] = 0x03;
        regs[registers::SETUP_RETR as usize][0] = 0x03;
        regs[registers::RF_CH as usize][0] = 0x02;
        regs[registers::RF_SETUP as usize][0] = 0x0F;
        regs[registers::STATUS as usize][0] = 0x0E;
        regs[registers::RX_ADDR_P0 as usize] = [0xE7; 5];
        regs[registers::RX_ADDR_P1 as usize] = [0xC2; 5];
        regs[registers::RX_ADDR_P2 as usize][0] = 0xC3;
        regs[registers::RX_ADDR_P3 as usize][0] = 0xC4;
        regs[registers::RX_ADDR_P4 as usize][0] = 0xC5;
        regs[registers::RX_ADDR_P5 as usize][0] = 0xC6;
        regs[registers::TX_ADDR as usize] = [0xE7; 5];
        regs[registers::FIFO_STATUS as usize][0] = 0x11;
        Self {
            registers: regs,
            tx_fifo: Vec::new(),
            rx_fifo: Vec::new(),
            fail_command: None,
            events: Vec::new(),
        }
    }
}

impl SimState {
    pub fn register(&self, register: u8) -> u8 {
        self.registers[register as usize][0]
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        core::mem::take(&mut self.events)
    }

    fn exchange(&mut self, words: &mut [u8]) -> Result<(), ErrorKind> {
        self.events.push(Event::Transfer(words.to_vec()));
        let Some(&command) = words.first() else {
            return Ok(());
        };
        if self.fail_command == Some(command) {
            return Err(ErrorKind::Other);
        }
        let (head, data) = words.split_at_mut(1);
        head[0] = self.register(registers::STATUS);
        match command {
            0x00..=0x1F => {
                let register = (command & commands::REGISTER_MASK) as usize;
                for (i, byte) in data.iter_mut().enumerate() {
                    *byte = self
                        .registers
                        .get(register)
                        .and_then(|value| value.get(i))
                        .copied()
                        .unwrap_or_default();
                }
            }
            0x20..=0x3F => {
                let register = (command & commands::REGISTER_MASK) as usize;
                if let Some(value) = self.registers.get_mut(register) {
                    for (slot, byte) in value.iter_mut().zip(data.iter()) {
                        *slot = *byte;
                    }
                }
                data.fill(0);
            }
            commands::R_RX_PL_WID => {
                let width = self.rx_fifo.first().map_or(0, |payload| payload.len() as u8);
                data.fill(width);
            }
            commands::R_RX_PAYLOAD => {
                let payload = if self.rx_fifo.is_empty() {
                    Vec::new()
                } else {
                    self.rx_fifo.remove(0)
                };
                for (i, byte) in data.iter_mut().enumerate() {
                    *byte = payload.get(i).copied().unwrap_or_default();
                }
            }
            commands::W_TX_PAYLOAD | commands::W_TX_PAYLOAD_NO_ACK => {
                if self.tx_fifo.len() < 3 {
                    self.tx_fifo.push(data.to_vec());
                }
                data.fill(0);
            }
            commands::FLUSH_TX => self.tx_fifo.clear(),
            commands::FLUSH_RX => self.rx_fifo.clear(),
            _ => {}
        }
        Ok(())
    }
}

pub(crate) type Shared = Rc<RefCell<SimState>>;

pub(crate) struct SimBus(Shared);

impl SpiErrorType for SimBus {
    type Error = ErrorKind;
}

impl SpiBus for SimBus {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        words.fill(commands::NOP);
        self.transfer_in_place(words)
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        let mut buf = words.to_vec();
        self.transfer_in_place(&mut buf)
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        let mut buf = write.to_vec();
        buf.resize(read.len().max(write.len()), commands::NOP);
        self.transfer_in_place(&mut buf)?;
        let len = read.len();
        read.copy_from_slice(&buf[..len]);
        Ok(())
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        self.0.borrow_mut().exchange(words)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().events.push(Event::Flush);
        Ok(())
    }
}

pub(crate) struct SimPin {
    state: Shared,
    is_csn: bool,
}

impl SimPin {
    fn record(&mut self, high: bool) {
        let event = if self.is_csn {
            Event::Csn(high)
        } else {
            Event::Ce(high)
        };
        self.state.borrow_mut().events.push(event);
    }
}

impl PinErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.record(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.record(true);
        Ok(())
    }
}

pub(crate) struct SimDelay(Shared);

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().events.push(Event::Delay(ns));
    }
}

pub(crate) type SimRadio = Nrf24l01<SimBus, SimPin, SimDelay>;

/// Create a driver wired to a freshly reset simulated radio.
pub(crate) fn mk_sim() -> (SimRadio, Shared) {
    let state: Shared = Rc::new(RefCell::new(SimState::default()));
    let radio = Nrf24l01::new(
        SimBus(state.clone()),
        SimPin {
            state: state.clone(),
            is_csn: true,
        },
        SimPin {
            state: state.clone(),
            is_csn: false,
        },
        SimDelay(state.clone()),
    );
    (radio, state)
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{mk_sim, Event};
    use crate::{
        radio::{
            commands, mnemonics, prelude::*, registers, Nrf24Error, Operation, PipeConfig,
            RadioConfig,
        },
        DataRate, Mode,
    };
    use std::{vec, vec::Vec};

    fn ce_events(events: &[Event]) -> Vec<bool> {
        events
            .iter()
            .filter_map(|event| match event {
                Event::Ce(high) => Some(*high),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn register_round_trip() {
        let (mut radio, state) = mk_sim();
        for register in 0..=registers::LAST {
            let value = register.wrapping_mul(37) ^ 0xA5;
            radio.write_register(register, value).unwrap();
            assert_eq!(radio.read_register(register), Ok(value));
        }
        assert_eq!(
            state.borrow().register(registers::FEATURE),
            registers::FEATURE.wrapping_mul(37) ^ 0xA5
        );
    }

    #[test]
    fn configure_sequence() {
        let (mut radio, state) = mk_sim();
        radio.configure(&RadioConfig::default()).unwrap();
        let sim = state.borrow();
        assert_eq!(sim.register(registers::SETUP_RETR), 0xFF);
        // reset value 0x08 already selects 8 bit CRC
        assert_eq!(sim.register(registers::CONFIG), 0x08);
        assert_eq!(sim.register(registers::RF_CH), 76);
        assert_eq!(sim.register(registers::RF_SETUP), 0x07);
        assert_eq!(sim.register(registers::FEATURE), 0);
        assert_eq!(ce_events(&sim.events), vec![false, false]);
        assert_eq!(sim.events[1], Event::Csn(true));
    }

    #[test]
    fn rx_tx_rx() {
        let (mut radio, state) = mk_sim();
        radio.configure(&RadioConfig::default()).unwrap();
        radio.as_rx().unwrap();
        assert_eq!(radio.get_mode(), Ok(Mode::Rx));
        radio.as_tx().unwrap();
        assert_eq!(radio.get_mode(), Ok(Mode::Tx));
        radio.as_rx().unwrap();
        let config = state.borrow().register(registers::CONFIG);
        assert_eq!(config & 3, 3);
        assert_eq!(radio.get_mode(), Ok(Mode::Rx));

        // re-entry does not touch CE or CONFIG
        state.borrow_mut().take_events();
        radio.as_rx().unwrap();
        let events = state.borrow_mut().take_events();
        assert!(ce_events(&events).is_empty());
        assert_eq!(
            events
                .iter()
                .filter(|event| matches!(event, Event::Transfer(_)))
                .count(),
            1
        );
    }

    #[test]
    fn mode_switch_order() {
        let (mut radio, state) = mk_sim();
        radio.configure(&RadioConfig::default()).unwrap();
        radio.as_rx().unwrap();
        state.borrow_mut().take_events();
        radio.as_tx().unwrap();
        let events = state.borrow_mut().take_events();
        let config_write = events
            .iter()
            .position(|event| {
                *event == Event::Transfer(vec![registers::CONFIG | commands::W_REGISTER, 0x0A])
            })
            .unwrap();
        let ce_low = events.iter().position(|e| *e == Event::Ce(false)).unwrap();
        let ce_high = events.iter().position(|e| *e == Event::Ce(true)).unwrap();
        let settle = events
            .iter()
            .position(|e| *e == Event::Delay(130_000))
            .unwrap();
        // CE is low while PRIM_RX changes; settling follows CE rising
        assert!(ce_low < config_write);
        assert!(config_write < ce_high);
        assert!(ce_high < settle);
    }

    #[test]
    fn standby_and_power() {
        let (mut radio, state) = mk_sim();
        radio.configure(&RadioConfig::default()).unwrap();
        radio.as_tx().unwrap();
        radio.standby().unwrap();
        assert_eq!(radio.get_mode(), Ok(Mode::Standby));
        radio.power_down().unwrap();
        assert_eq!(radio.get_mode(), Ok(Mode::PowerDown));
        assert!(!radio.is_powered().unwrap());
        state.borrow_mut().take_events();
        radio.power_up().unwrap();
        assert!(radio.is_powered().unwrap());
        assert!(state.borrow().events.contains(&Event::Delay(5_000_000)));
        // PRIM_RX is untouched by power changes
        assert_eq!(state.borrow().register(registers::CONFIG) & 1, 0);
    }

    #[test]
    fn auto_ack_preserves_siblings() {
        let (mut radio, state) = mk_sim();
        state.borrow_mut().registers[registers::EN_AA as usize][0] = 0b10_0001;
        radio.set_auto_ack_pipes(0b00_0110, true).unwrap();
        assert_eq!(state.borrow().register(registers::EN_AA), 0b10_0111);
        radio.set_auto_ack_pipes(0b00_0010, false).unwrap();
        assert_eq!(state.borrow().register(registers::EN_AA), 0b10_0101);
    }

    #[test]
    fn payload_width_per_pipe() {
        let (mut radio, _state) = mk_sim();
        for pipe in 0..6 {
            radio.set_payload_length(pipe, pipe + 1).unwrap();
        }
        radio.set_payload_length(3, 12).unwrap();
        assert_eq!(radio.get_payload_length(3), Ok(12));
        for pipe in [0, 1, 2, 4, 5] {
            assert_eq!(radio.get_payload_length(pipe), Ok(pipe + 1));
        }
    }

    #[test]
    fn flush_then_transmit() {
        let (mut radio, state) = mk_sim();
        radio.configure(&RadioConfig::default()).unwrap();
        radio.transmit(&[1, 2, 3, 4], true).unwrap();
        radio.transmit(&[5, 6, 7, 8], true).unwrap();
        radio.flush_tx().unwrap();
        radio.transmit(&[9, 10, 11, 12], true).unwrap();
        assert_eq!(state.borrow().tx_fifo, vec![vec![9u8, 10, 11, 12]]);
    }

    #[test]
    fn no_ack_scenario() {
        let (mut radio, state) = mk_sim();
        radio
            .configure(
                &RadioConfig::default()
                    .with_channel(100)
                    .with_data_rate(DataRate::Kbps250),
            )
            .unwrap();
        radio.set_payload_length(0, 4).unwrap();
        radio.allow_ask_no_ack(true).unwrap();
        radio.as_tx().unwrap();
        state.borrow_mut().take_events();

        radio.transmit(&[0x80, 0x40, 0x20, 0x10], false).unwrap();
        let events = state.borrow_mut().take_events();
        assert_eq!(
            events,
            vec![
                Event::Csn(false),
                Event::Transfer(vec![
                    commands::W_TX_PAYLOAD_NO_ACK,
                    0x80,
                    0x40,
                    0x20,
                    0x10
                ]),
                Event::Flush,
                Event::Csn(true),
            ]
        );
        let sim = state.borrow();
        assert_eq!(sim.register(registers::RF_CH), 100);
        assert_eq!(sim.register(registers::RF_SETUP) & 0x28, 0x20);
        assert_eq!(
            sim.register(registers::FEATURE) & mnemonics::EN_DYN_ACK,
            mnemonics::EN_DYN_ACK
        );
    }

    #[test]
    fn invalid_channel_touches_nothing() {
        let (mut radio, state) = mk_sim();
        assert_eq!(radio.set_channel(200), Err(Nrf24Error::InvalidChannel(200)));
        assert!(state.borrow().events.is_empty());
        assert_eq!(state.borrow().register(registers::RF_CH), 2);
    }

    #[test]
    fn csn_released_after_failure() {
        let (mut radio, state) = mk_sim();
        state.borrow_mut().fail_command = Some(commands::FLUSH_TX);
        assert_eq!(
            radio.flush_tx(),
            Err(Nrf24Error::Bus {
                op: Operation::FlushTx,
                source: embedded_hal::spi::ErrorKind::Other
            })
        );
        assert_eq!(state.borrow().events.last(), Some(&Event::Csn(true)));
    }

    #[test]
    fn failed_configure_stays_unconfigured() {
        let (mut radio, state) = mk_sim();
        state.borrow_mut().fail_command = Some(commands::FLUSH_RX);
        assert!(radio.configure(&RadioConfig::default()).is_err());
        assert!(!radio.is_configured());
        assert_eq!(radio.as_rx(), Err(Nrf24Error::NotConfigured));
    }

    #[test]
    fn dump_continues_after_failure() {
        let (mut radio, state) = mk_sim();
        state.borrow_mut().fail_command = Some(registers::STATUS);
        let mut values = Vec::new();
        let failures = radio.dump_registers(|register, value| values.push((register, value)));
        assert_eq!(failures, 1);
        assert_eq!(values.len(), registers::LAST as usize + 1);
        assert!(values[registers::STATUS as usize].1.is_err());
        assert_eq!(values[registers::RF_CH as usize].1, Ok(2));
    }

    #[test]
    fn receive_payload() {
        let (mut radio, state) = mk_sim();
        radio.configure(&RadioConfig::default()).unwrap();
        state.borrow_mut().rx_fifo.push(vec![0xDE, 0xAD]);
        radio.set_dynamic_payloads(true).unwrap();
        assert_eq!(radio.get_dynamic_payload_length(), Ok(2));
        let mut buf = [0u8; 2];
        radio.receive(&mut buf).unwrap();
        assert_eq!(buf, [0xDE, 0xAD]);
        assert!(state.borrow().rx_fifo.is_empty());
        assert_eq!(state.borrow().register(registers::FEATURE), mnemonics::EN_DPL);
    }

    #[test]
    fn pipe_config_round_trip() {
        let (mut radio, state) = mk_sim();
        let config = PipeConfig::default()
            .with_auto_ack(false)
            .with_rx_address_enabled(true)
            .with_address(&[0x11, 0x22, 0x33, 0x44, 0x55])
            .with_payload_width(16)
            .with_dynamic_payloads(true);
        radio.set_pipe_config(1, &config).unwrap();
        assert_eq!(radio.get_pipe_config(1), Ok(config));

        radio
            .set_pipe_config(4, &config.with_address_byte(0x99))
            .unwrap();
        let pipe4 = radio.get_pipe_config(4).unwrap();
        assert_eq!(pipe4.address(), &[0x99, 0x22, 0x33, 0x44, 0x55]);

        // pipe 0 keeps its reset state
        let sim = state.borrow();
        assert_eq!(sim.register(registers::EN_AA), 0x2D);
        assert_eq!(sim.register(registers::EN_RXADDR), 0x13);
        assert_eq!(sim.register(registers::DYNPD), 0x12);
    }

    #[test]
    fn scan_reports_carrier() {
        let (mut radio, state) = mk_sim();
        state.borrow_mut().registers[registers::RPD as usize][0] = 1;
        let found = radio.scan_channels().unwrap();
        assert!(found.iter().all(|signal| *signal));
        assert_eq!(state.borrow().register(registers::RF_CH), 127);
    }

    #[test]
    fn power_down_from_rx() {
        let (mut radio, state) = mk_sim();
        radio.configure(&RadioConfig::default()).unwrap();
        radio.as_rx().unwrap();
        state.borrow_mut().take_events();
        radio.power_down().unwrap();
        let events = state.borrow_mut().take_events();
        let ce_low = events.iter().position(|e| *e == Event::Ce(false)).unwrap();
        let config_write = events
            .iter()
            .position(|event| {
                *event == Event::Transfer(vec![registers::CONFIG | commands::W_REGISTER, 0x09])
            })
            .unwrap();
        assert!(ce_low < config_write);

        radio.power_up().unwrap();
        assert_eq!(radio.get_mode(), Ok(Mode::Standby));
        // PRIM_RX survives the power cycle
        assert_eq!(state.borrow().register(registers::CONFIG) & 3, 3);
    }

    #[test]
    fn wake_into_role() {
        let (mut radio, state) = mk_sim();
        radio.configure(&RadioConfig::default()).unwrap();
        state.borrow_mut().take_events();
        radio.as_tx().unwrap();
        let events = state.borrow_mut().take_events();
        let wake = events
            .iter()
            .position(|e| *e == Event::Delay(5_000_000))
            .unwrap();
        let ce_high = events.iter().position(|e| *e == Event::Ce(true)).unwrap();
        assert!(wake < ce_high);

        // already powered; only the settling delay
        radio.as_rx().unwrap();
        let events = state.borrow_mut().take_events();
        assert!(!events.contains(&Event::Delay(5_000_000)));
        assert!(events.contains(&Event::Delay(130_000)));
    }

    #[test]
    fn oversized_pipe_address() {
        let (mut radio, state) = mk_sim();
        let config = PipeConfig::default().with_address(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(
            radio.set_pipe_config(1, &config),
            Err(Nrf24Error::InvalidAddressLength(6))
        );
        assert_eq!(
            radio.set_pipe_config(3, &config),
            Err(Nrf24Error::InvalidAddressLength(6))
        );
        let sim = state.borrow();
        assert_eq!(sim.registers[registers::RX_ADDR_P1 as usize], [0xC2; 5]);
        assert_eq!(sim.register(registers::RX_ADDR_P3), 0xC4);
        assert!(!sim
            .events
            .iter()
            .any(|event| matches!(event, Event::Transfer(bytes) if bytes[0] & commands::W_REGISTER != 0)));
    }

    #[test]
    fn pipe_config_round_trip_short_address() {
        let (mut radio, _state) = mk_sim();
        radio.set_address_length(3).unwrap();
        let config = PipeConfig::default()
            .with_rx_address_enabled(true)
            .with_address(&[9; 5])
            .with_address(&[1, 2, 3])
            .with_payload_width(4);
        radio.set_pipe_config(1, &config).unwrap();
        assert_eq!(radio.get_pipe_config(1), Ok(config));
        assert_eq!(radio.get_pipe_config(1).unwrap().address(), &[1, 2, 3]);
    }
}

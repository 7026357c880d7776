/// Everything the radio knows about one data pipe.
///
/// This struct follows a builder pattern, like [`RadioConfig`](crate::radio::RadioConfig).
/// It is read and written as one value with
/// [`EsbPipe::get_pipe_config()`](fn@crate::radio::prelude::EsbPipe::get_pipe_config) and
/// [`EsbPipe::set_pipe_config()`](fn@crate::radio::prelude::EsbPipe::set_pipe_config).
/// ```
/// use nrf24l01::radio::PipeConfig;
/// let config = PipeConfig::default()
///     .with_rx_address_enabled(true)
///     .with_address(b"1Node")
///     .with_payload_width(4);
/// assert_eq!(config.address(), b"1Node");
/// assert_eq!(config.address_byte(), b'1');
/// ```
///
/// <div class="warning">
///
/// Pipes 2-5 only own the least significant address byte. When read back, their
/// [`PipeConfig::address()`] is pipe 1's address with the first byte replaced.
/// When written, only [`PipeConfig::address_byte()`] is sent to the radio.
///
/// </div>
#[derive(Debug, Clone, Copy)]
pub struct PipeConfig {
    auto_ack: bool,
    rx_address_enabled: bool,
    address: [u8; 5],
    address_length: u8,
    payload_width: u8,
    dynamic_payloads: bool,
}

impl Default for PipeConfig {
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`PipeConfig::auto_ack()`] | `true` |
    /// | [`PipeConfig::rx_address_enabled()`] | `false` |
    /// | [`PipeConfig::address()`] | `[0xE7; 5]` |
    /// | [`PipeConfig::payload_width()`] | `0` (unused) |
    /// | [`PipeConfig::dynamic_payloads()`] | `false` |
    fn default() -> Self {
        Self {
            auto_ack: true,
            rx_address_enabled: false,
            address: [0xE7; 5],
            address_length: 5,
            payload_width: 0,
            dynamic_payloads: false,
        }
    }
}

/// Address bytes past [`PipeConfig::address_length()`] are not compared.
impl PartialEq for PipeConfig {
    fn eq(&self, other: &Self) -> bool {
        self.auto_ack == other.auto_ack
            && self.rx_address_enabled == other.rx_address_enabled
            && self.address_length == other.address_length
            && self.address() == other.address()
            && self.payload_width == other.payload_width
            && self.dynamic_payloads == other.dynamic_payloads
    }
}

impl Eq for PipeConfig {}

impl PipeConfig {
    pub const fn auto_ack(&self) -> bool {
        self.auto_ack
    }

    pub fn with_auto_ack(self, enable: bool) -> Self {
        Self {
            auto_ack: enable,
            ..self
        }
    }

    /// Does the pipe listen for its address?
    pub const fn rx_address_enabled(&self) -> bool {
        self.rx_address_enabled
    }

    pub fn with_rx_address_enabled(self, enable: bool) -> Self {
        Self {
            rx_address_enabled: enable,
            ..self
        }
    }

    /// The full address, least significant byte first.
    ///
    /// At most 5 bytes are stored; see [`PipeConfig::address_length()`].
    pub fn address(&self) -> &[u8] {
        &self.address[..self.address_length.min(5) as usize]
    }

    /// The length of the address given to [`PipeConfig::with_address()`].
    ///
    /// This may exceed 5, in which case writing this config fails with
    /// [`Nrf24Error::InvalidAddressLength`](crate::radio::Nrf24Error::InvalidAddressLength).
    pub const fn address_length(&self) -> usize {
        self.address_length as usize
    }

    /// The least significant address byte.
    pub const fn address_byte(&self) -> u8 {
        self.address[0]
    }

    /// Set the full address, least significant byte first.
    ///
    /// The length is checked against the radio's configured address length
    /// when this config is written, so an address longer than 5 bytes is
    /// rejected then rather than cut short.
    pub fn with_address(self, address: &[u8]) -> Self {
        let len = address.len().min(5);
        let mut buf = self.address;
        buf[..len].copy_from_slice(&address[..len]);
        Self {
            address: buf,
            address_length: address.len().min(u8::MAX as usize) as u8,
            ..self
        }
    }

    /// Replace only the least significant address byte.
    pub fn with_address_byte(self, byte: u8) -> Self {
        let mut address = self.address;
        address[0] = byte;
        Self {
            address,
            address_length: self.address_length.max(1),
            ..self
        }
    }

    /// The static payload width. `0` means the pipe is unused.
    pub const fn payload_width(&self) -> u8 {
        self.payload_width
    }

    pub fn with_payload_width(self, width: u8) -> Self {
        Self {
            payload_width: width,
            ..self
        }
    }

    pub const fn dynamic_payloads(&self) -> bool {
        self.dynamic_payloads
    }

    pub fn with_dynamic_payloads(self, enable: bool) -> Self {
        Self {
            dynamic_payloads: enable,
            ..self
        }
    }
}

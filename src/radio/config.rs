use crate::{DataRate, PaLevel};

/// An object to configure the radio.
///
/// This struct follows a builder pattern. Since all fields are private, users should
/// start with the [`RadioConfig::default`] constructor, then mutate the object accordingly.
/// ```
/// use nrf24l01::radio::RadioConfig;
/// let mut config = RadioConfig::default();
/// config = config.with_channel(42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadioConfig {
    channel: u8,
    data_rate: DataRate,
    pa_level: PaLevel,
    lna_enable: bool,
}

impl Default for RadioConfig {
    /// Instantiate a [`RadioConfig`] object with library defaults.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`RadioConfig::channel()`] | `76` |
    /// | [`RadioConfig::data_rate()`] | [`DataRate::Mbps1`] |
    /// | [`RadioConfig::pa_level()`] | [`PaLevel::Max`] |
    /// | [`RadioConfig::lna_enable()`] | `true` |
    fn default() -> Self {
        Self {
            channel: 76,
            data_rate: DataRate::Mbps1,
            pa_level: PaLevel::Max,
            lna_enable: true,
        }
    }
}

impl RadioConfig {
    /// The channel (aka frequency offset from 2400 MHz) the radio is tuned to.
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Set the channel. Valid channels are in range [0, 127].
    ///
    /// This value is checked by [`EsbInit::configure()`](fn@crate::radio::prelude::EsbInit::configure).
    pub fn with_channel(self, channel: u8) -> Self {
        Self { channel, ..self }
    }

    /// The over-the-air data rate.
    pub const fn data_rate(&self) -> DataRate {
        self.data_rate
    }

    /// Set the over-the-air data rate.
    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self { data_rate, ..self }
    }

    /// The power amplifier level.
    pub const fn pa_level(&self) -> PaLevel {
        self.pa_level
    }

    /// Set the power amplifier level.
    pub fn with_pa_level(self, pa_level: PaLevel) -> Self {
        Self { pa_level, ..self }
    }

    /// Is the LNA gain bit of the RF_SETUP register set?
    ///
    /// This bit only has an effect on older non-plus nRF24L01 modules and clones.
    pub const fn lna_enable(&self) -> bool {
        self.lna_enable
    }

    /// Set the LNA gain bit of the RF_SETUP register.
    pub fn with_lna(self, enable: bool) -> Self {
        Self {
            lna_enable: enable,
            ..self
        }
    }

    /// The value written to the RF_SETUP register.
    pub(crate) const fn rf_setup(&self) -> u8 {
        self.data_rate.into_bits() | self.pa_level.into_bits() | self.lna_enable as u8
    }
}

//! Bus parameters and their derivation into driver descriptors.
//!
//! [`BusParameters`] is the immutable description of one duplex bus: audio
//! format plus the five signal pins. It is supplied by the configuration
//! layer before [`initialize()`](crate::controller::DuplexBusController::initialize)
//! and never changes afterwards.
//!
//! The [`descriptor`] submodule turns it into the two structures a driver
//! needs (timing/mode and pin roles).
//!
//! ## Example
//!
//! ```
//! use i2s_duplex::config::{BusParameters, ChannelLayout};
//!
//! let params = BusParameters::builder()
//!     .sample_rate_hz(16_000)
//!     .channel_layout(ChannelLayout::Stereo)
//!     .master_clock_line(255)
//!     .build();
//!
//! assert!(params.validate().is_ok());
//! assert!(!params.has_master_clock());
//! ```

pub mod descriptor;

use core::fmt;
use core::str::FromStr;

use crate::constants::{
    DEFAULT_CLOCK_PIN, DEFAULT_DATA_IN_PIN, DEFAULT_DATA_OUT_PIN, DEFAULT_FRAME_SYNC_PIN,
    DEFAULT_MASTER_CLOCK_PIN, DEFAULT_SAMPLE_RATE, MAX_GPIO, MAX_SAMPLE_RATE, MIN_SAMPLE_RATE,
    PIN_NOT_PRESENT,
};
use crate::error::ConfigError;

pub use descriptor::{
    build_mode_descriptor, build_pin_descriptor, BusRole, DmaBuffering, FrameFormat,
    PinAssignment, PinDescriptor, TimingDescriptor,
};

// ── Audio format ───────────────────────────────────────────────────────────

/// Which channel slots of each frame carry samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelLayout {
    /// Left slot only (mono).
    LeftOnly,
    /// Right slot only (mono).
    RightOnly,
    /// Both slots, interleaved as L, R.
    #[default]
    Stereo,
}

impl ChannelLayout {
    /// Number of interleaved samples per frame.
    pub const fn channels(self) -> usize {
        match self {
            ChannelLayout::LeftOnly | ChannelLayout::RightOnly => 1,
            ChannelLayout::Stereo => 2,
        }
    }

    /// Human-readable name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            ChannelLayout::LeftOnly => "Left",
            ChannelLayout::RightOnly => "Right",
            ChannelLayout::Stereo => "Stereo",
        }
    }
}

impl fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses the configuration names `left`, `right` and `stereo`.
impl FromStr for ChannelLayout {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(ChannelLayout::LeftOnly),
            "right" => Ok(ChannelLayout::RightOnly),
            "stereo" => Ok(ChannelLayout::Stereo),
            _ => Err(ConfigError::UnknownChannelLayout),
        }
    }
}

/// Sample word width on the bus.
///
/// Transfers through the controller are always `i16`; wider words are
/// accepted here so the configuration layer can describe them, but only
/// [`BitsPerSample::Bits16`] produces meaningful sample buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitsPerSample {
    #[default]
    Bits16 = 16,
    Bits24 = 24,
    Bits32 = 32,
}

impl BitsPerSample {
    /// Width in bits.
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for BitsPerSample {
    type Error = ConfigError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            16 => Ok(BitsPerSample::Bits16),
            24 => Ok(BitsPerSample::Bits24),
            32 => Ok(BitsPerSample::Bits32),
            other => Err(ConfigError::UnsupportedBitDepth(other)),
        }
    }
}

// ── Parameters ─────────────────────────────────────────────────────────────

/// Immutable description of one duplex bus.
///
/// Pins are raw GPIO indices. The master clock is optional: the raw value
/// [`PIN_NOT_PRESENT`] (255) means it is not connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusParameters {
    sample_rate_hz: u32,
    bits_per_sample: BitsPerSample,
    channel_layout: ChannelLayout,
    clock_line: u8,
    frame_sync_line: u8,
    master_clock_line: u8,
    data_in_line: u8,
    data_out_line: u8,
}

impl Default for BusParameters {
    fn default() -> Self {
        BusParameters {
            sample_rate_hz: DEFAULT_SAMPLE_RATE,
            bits_per_sample: BitsPerSample::Bits16,
            channel_layout: ChannelLayout::Stereo,
            clock_line: DEFAULT_CLOCK_PIN,
            frame_sync_line: DEFAULT_FRAME_SYNC_PIN,
            master_clock_line: DEFAULT_MASTER_CLOCK_PIN,
            data_in_line: DEFAULT_DATA_IN_PIN,
            data_out_line: DEFAULT_DATA_OUT_PIN,
        }
    }
}

impl BusParameters {
    /// Start from the default parameter set.
    pub fn builder() -> BusParametersBuilder {
        BusParametersBuilder {
            params: BusParameters::default(),
        }
    }

    pub const fn sample_rate_hz(&self) -> u32 {
        self.sample_rate_hz
    }

    pub const fn bits_per_sample(&self) -> BitsPerSample {
        self.bits_per_sample
    }

    pub const fn channel_layout(&self) -> ChannelLayout {
        self.channel_layout
    }

    /// Bit clock (BCLK) pin.
    pub const fn clock_line(&self) -> u8 {
        self.clock_line
    }

    /// Word select (LRCLK) pin.
    pub const fn frame_sync_line(&self) -> u8 {
        self.frame_sync_line
    }

    /// Raw master clock pin, [`PIN_NOT_PRESENT`] when unused.
    pub const fn master_clock_line(&self) -> u8 {
        self.master_clock_line
    }

    /// Microphone data pin.
    pub const fn data_in_line(&self) -> u8 {
        self.data_in_line
    }

    /// Speaker data pin.
    pub const fn data_out_line(&self) -> u8 {
        self.data_out_line
    }

    /// Whether a master clock pin is connected.
    pub const fn has_master_clock(&self) -> bool {
        self.master_clock_line != PIN_NOT_PRESENT
    }

    /// Check the parameters against the hardware limits.
    ///
    /// Descriptor derivation never calls this; it is the configuration
    /// layer's job to reject bad values before a controller is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&self.sample_rate_hz) {
            return Err(ConfigError::SampleRateOutOfRange(self.sample_rate_hz));
        }

        let required = [
            Some(self.clock_line),
            Some(self.frame_sync_line),
            self.has_master_clock().then_some(self.master_clock_line),
            Some(self.data_in_line),
            Some(self.data_out_line),
        ];

        let mut pins = [0u8; 5];
        let mut count = 0;
        for pin in required.into_iter().flatten() {
            if pin > MAX_GPIO {
                return Err(ConfigError::PinOutOfRange(pin));
            }
            if pins[..count].contains(&pin) {
                return Err(ConfigError::DuplicatePin(pin));
            }
            pins[count] = pin;
            count += 1;
        }

        Ok(())
    }
}

/// Builder for [`BusParameters`], seeded with the defaults.
#[derive(Debug, Clone, Copy)]
pub struct BusParametersBuilder {
    params: BusParameters,
}

impl BusParametersBuilder {
    pub fn sample_rate_hz(mut self, hz: u32) -> Self {
        self.params.sample_rate_hz = hz;
        self
    }

    pub fn bits_per_sample(mut self, bits: BitsPerSample) -> Self {
        self.params.bits_per_sample = bits;
        self
    }

    pub fn channel_layout(mut self, layout: ChannelLayout) -> Self {
        self.params.channel_layout = layout;
        self
    }

    pub fn clock_line(mut self, pin: u8) -> Self {
        self.params.clock_line = pin;
        self
    }

    pub fn frame_sync_line(mut self, pin: u8) -> Self {
        self.params.frame_sync_line = pin;
        self
    }

    /// Pass [`PIN_NOT_PRESENT`] to leave the master clock unconnected.
    pub fn master_clock_line(mut self, pin: u8) -> Self {
        self.params.master_clock_line = pin;
        self
    }

    pub fn data_in_line(mut self, pin: u8) -> Self {
        self.params.data_in_line = pin;
        self
    }

    pub fn data_out_line(mut self, pin: u8) -> Self {
        self.params.data_out_line = pin;
        self
    }

    /// Finish without validating. See [`BusParameters::validate`].
    pub fn build(self) -> BusParameters {
        self.params
    }
}

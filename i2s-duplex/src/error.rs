//! Error types for configuration, initialization and transfers.
//!
//! Driver failures are reduced to a [`DriverErrorKind`] so the controller's
//! error types stay independent of the concrete driver.
//!
//! A short read is not an error: it is reported by returning fewer samples.

use core::fmt;

use crate::driver::DriverErrorKind;

/// Rejected configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Sample rate outside 8000..=96000 Hz.
    SampleRateOutOfRange(u32),
    /// Bit depth other than 16, 24 or 32.
    UnsupportedBitDepth(u8),
    /// Channel name other than `left`, `right` or `stereo`.
    UnknownChannelLayout,
    /// GPIO index above the highest usable pin.
    PinOutOfRange(u8),
    /// The same GPIO assigned to two signals.
    DuplicatePin(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::SampleRateOutOfRange(hz) => {
                write!(f, "sample rate {hz} Hz out of range")
            }
            ConfigError::UnsupportedBitDepth(bits) => {
                write!(f, "unsupported bits per sample: {bits}")
            }
            ConfigError::UnknownChannelLayout => f.write_str("unknown channel layout"),
            ConfigError::PinOutOfRange(pin) => write!(f, "GPIO{pin} out of range"),
            ConfigError::DuplicatePin(pin) => write!(f, "GPIO{pin} assigned twice"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Failure of one step of the initialization sequence.
///
/// Any resource acquired earlier in the same attempt has been released by
/// the time this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError {
    DriverInstallFailed(DriverErrorKind),
    PinBindFailed(DriverErrorKind),
    BusStartFailed(DriverErrorKind),
}

impl InitError {
    /// Driver-reported cause.
    pub fn kind(&self) -> DriverErrorKind {
        match *self {
            InitError::DriverInstallFailed(k)
            | InitError::PinBindFailed(k)
            | InitError::BusStartFailed(k) => k,
        }
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::DriverInstallFailed(k) => write!(f, "failed to install I2S driver: {k}"),
            InitError::PinBindFailed(k) => write!(f, "failed to set I2S pins: {k}"),
            InitError::BusStartFailed(k) => write!(f, "failed to start I2S: {k}"),
        }
    }
}

impl core::error::Error for InitError {}

/// Microphone read failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadError {
    /// Controller is not in the ready state.
    NotReady,
    /// Driver reported an I/O error.
    TransferFailed(DriverErrorKind),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::NotReady => f.write_str("I2S not initialized, cannot read microphone"),
            ReadError::TransferFailed(k) => write!(f, "failed to read from microphone: {k}"),
        }
    }
}

impl core::error::Error for ReadError {}

/// Speaker write failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WriteError {
    /// Controller is not in the ready state.
    NotReady,
    /// Driver accepted fewer bytes than requested. Counts are in bytes.
    ShortWrite { written: usize, expected: usize },
    /// Driver reported an I/O error.
    TransferFailed(DriverErrorKind),
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteError::NotReady => f.write_str("I2S not initialized, cannot write to speaker"),
            WriteError::ShortWrite { written, expected } => {
                write!(f, "wrote fewer bytes than expected: {written}/{expected}")
            }
            WriteError::TransferFailed(k) => write!(f, "failed to write to speaker: {k}"),
        }
    }
}

impl core::error::Error for WriteError {}

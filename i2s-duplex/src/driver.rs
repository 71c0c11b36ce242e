//! Hardware driver seam.
//!
//! [`I2sDriver`] is the set of calls the controller makes into the vendor
//! I2S driver. A board support crate implements it on top of its HAL; the
//! tests implement it with scripted mocks.
//!
//! Every call names the peripheral explicitly through a [`BusPort`], so a
//! driver serving several I2S units needs no hidden global state.
//!
//! ## Transfer contract
//!
//! [`read`](I2sDriver::read) and [`write`](I2sDriver::write) block until the
//! whole slice has been transferred or the driver reports completion with
//! fewer bytes. There is no timeout: a bus that stops clocking blocks the
//! caller forever. Both return the number of **bytes** moved.

use core::fmt;

use crate::config::{PinDescriptor, TimingDescriptor};

/// Index of the physical I2S peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusPort(pub u8);

impl BusPort {
    /// First I2S unit.
    pub const I2S0: BusPort = BusPort(0);
    /// Second I2S unit, where present.
    pub const I2S1: BusPort = BusPort(1);
}

impl fmt::Display for BusPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I2S{}", self.0)
    }
}

/// Driver error categories.
///
/// Driver implementations map their native status codes onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum DriverErrorKind {
    /// A descriptor field or pin was rejected.
    InvalidArgument,
    /// Call not valid in the driver's current state (e.g. not installed).
    InvalidState,
    /// Allocation of DMA buffers or interrupt failed.
    NoMemory,
    /// Hardware did not respond in time.
    Timeout,
    /// Peripheral does not exist.
    NotFound,
    /// Anything else.
    Other,
}

impl fmt::Display for DriverErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DriverErrorKind::InvalidArgument => "invalid argument",
            DriverErrorKind::InvalidState => "invalid state",
            DriverErrorKind::NoMemory => "out of memory",
            DriverErrorKind::Timeout => "timeout",
            DriverErrorKind::NotFound => "not found",
            DriverErrorKind::Other => "driver error",
        })
    }
}

/// Driver error type.
pub trait DriverError: fmt::Debug {
    /// Convert to a generic category.
    fn kind(&self) -> DriverErrorKind;
}

impl DriverError for DriverErrorKind {
    fn kind(&self) -> DriverErrorKind {
        *self
    }
}

impl DriverError for core::convert::Infallible {
    fn kind(&self) -> DriverErrorKind {
        match *self {}
    }
}

/// Calls the controller makes into the I2S driver.
pub trait I2sDriver {
    /// Driver error type.
    type Error: DriverError;

    /// Allocate DMA buffers and configure the peripheral.
    fn install(&mut self, port: BusPort, timing: &TimingDescriptor) -> Result<(), Self::Error>;

    /// Route signals to GPIOs.
    fn set_pins(&mut self, port: BusPort, pins: &PinDescriptor) -> Result<(), Self::Error>;

    /// Start clocking. From here on the DMA rings run in both directions.
    fn start(&mut self, port: BusPort) -> Result<(), Self::Error>;

    /// Stop clocking.
    fn stop(&mut self, port: BusPort) -> Result<(), Self::Error>;

    /// Release everything [`install`](Self::install) acquired.
    fn uninstall(&mut self, port: BusPort) -> Result<(), Self::Error>;

    /// Blocking read from the RX ring. Returns bytes read.
    fn read(&mut self, port: BusPort, samples: &mut [i16]) -> Result<usize, Self::Error>;

    /// Blocking write to the TX ring. Returns bytes written.
    fn write(&mut self, port: BusPort, samples: &[i16]) -> Result<usize, Self::Error>;
}

impl<T: I2sDriver + ?Sized> I2sDriver for &mut T {
    type Error = T::Error;

    fn install(&mut self, port: BusPort, timing: &TimingDescriptor) -> Result<(), Self::Error> {
        T::install(self, port, timing)
    }

    fn set_pins(&mut self, port: BusPort, pins: &PinDescriptor) -> Result<(), Self::Error> {
        T::set_pins(self, port, pins)
    }

    fn start(&mut self, port: BusPort) -> Result<(), Self::Error> {
        T::start(self, port)
    }

    fn stop(&mut self, port: BusPort) -> Result<(), Self::Error> {
        T::stop(self, port)
    }

    fn uninstall(&mut self, port: BusPort) -> Result<(), Self::Error> {
        T::uninstall(self, port)
    }

    fn read(&mut self, port: BusPort, samples: &mut [i16]) -> Result<usize, Self::Error> {
        T::read(self, port, samples)
    }

    fn write(&mut self, port: BusPort, samples: &[i16]) -> Result<usize, Self::Error> {
        T::write(self, port, samples)
    }
}

//! Duplex bus lifecycle and blocking transfers.
//!
//! [`DuplexBusController`] owns one I2S peripheral through an [`I2sDriver`]
//! and walks it through a small state machine:
//!
//! ```text
//!                 initialize() ok
//! Uninitialized ───────────────────► Ready
//!       │    ▲                         │
//!       │    └──────── shutdown() ─────┘
//!       │ initialize() err
//!       ▼
//!     Failed   (terminal for this instance)
//! ```
//!
//! Transfers are only accepted in `Ready`. As soon as `initialize()`
//! succeeds the bus is clocking and the DMA rings run in both directions,
//! whether or not anyone reads or writes.
//!
//! ## Usage
//!
//! ```ignore
//! let params = BusParameters::builder().master_clock_line(255).build();
//! let mut bus = DuplexBusController::new(driver, BusPort::I2S0, params);
//! bus.initialize()?;
//!
//! let mic = bus.read_microphone(160)?;   // may be shorter than 160
//! bus.write_speaker(&mic)?;
//!
//! bus.shutdown();
//! ```
//!
//! Calls block without timeout. One owner, `&mut self` everywhere: at most
//! one read and one write can be in flight.

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};

use log::{debug, error, info, warn};

use crate::config::{build_mode_descriptor, build_pin_descriptor, BitsPerSample, BusParameters};
use crate::constants::SAMPLE_BYTES;
use crate::diagnostics::BusReport;
use crate::driver::{BusPort, DriverError, DriverErrorKind, I2sDriver};
use crate::error::{InitError, ReadError, WriteError};

const TAG: &str = "i2s_duplex";

/// Lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerState {
    #[default]
    Uninitialized,
    Ready,
    Failed,
}

/// Owner of one duplex I2S bus.
pub struct DuplexBusController<D> {
    driver: D,
    port: BusPort,
    params: BusParameters,
    state: ControllerState,
    /// Set when install succeeds, cleared only when uninstall succeeds.
    driver_installed: bool,
    /// Cause of the transition to `Failed`.
    failure: Option<InitError>,
}

impl<D> DuplexBusController<D>
where
    D: I2sDriver,
{
    /// Create an uninitialized controller. No hardware is touched.
    pub fn new(driver: D, port: BusPort, params: BusParameters) -> Self {
        Self {
            driver,
            port,
            params,
            state: ControllerState::Uninitialized,
            driver_installed: false,
            failure: None,
        }
    }

    /// Install the driver, bind pins and start the bus.
    ///
    /// Does nothing if already ready. After a failure the controller stays
    /// `Failed` and every further call returns the same error without
    /// touching the driver.
    ///
    /// On error, anything installed during this attempt has been uninstalled.
    pub fn initialize(&mut self) -> Result<(), InitError> {
        match self.state {
            ControllerState::Ready => return Ok(()),
            ControllerState::Failed => {
                if let Some(e) = self.failure {
                    return Err(e);
                }
            }
            ControllerState::Uninitialized => {}
        }

        debug!(target: TAG, "Setting up I2S duplex on {}...", self.port);

        if self.params.bits_per_sample() != BitsPerSample::Bits16 {
            warn!(
                target: TAG,
                "{} bits per sample configured, transfers are 16-bit only",
                self.params.bits_per_sample().bits()
            );
        }

        match self.configure() {
            Ok(()) => {
                self.state = ControllerState::Ready;
                info!(target: TAG, "I2S duplex setup completed successfully");
                Ok(())
            }
            Err(e) => {
                error!(target: TAG, "Failed to configure I2S: {}", e);
                self.state = ControllerState::Failed;
                self.failure = Some(e);
                Err(e)
            }
        }
    }

    fn configure(&mut self) -> Result<(), InitError> {
        if self.driver_installed {
            // A previous shutdown could not uninstall; never install twice.
            return Err(InitError::DriverInstallFailed(DriverErrorKind::InvalidState));
        }

        let timing = build_mode_descriptor(&self.params);
        self.driver
            .install(self.port, &timing)
            .map_err(|e| InitError::DriverInstallFailed(e.kind()))?;
        self.driver_installed = true;

        let pins = build_pin_descriptor(&self.params);
        if let Err(e) = self.driver.set_pins(self.port, &pins) {
            self.uninstall();
            return Err(InitError::PinBindFailed(e.kind()));
        }

        if let Err(e) = self.driver.start(self.port) {
            self.uninstall();
            return Err(InitError::BusStartFailed(e.kind()));
        }

        Ok(())
    }

    fn uninstall(&mut self) {
        match self.driver.uninstall(self.port) {
            Ok(()) => self.driver_installed = false,
            Err(e) => error!(target: TAG, "Failed to uninstall I2S driver: {}", e.kind()),
        }
    }

    /// Stop the bus and uninstall the driver. No-op unless ready.
    ///
    /// Driver errors are logged, not returned. The controller always ends
    /// up `Uninitialized` and may be initialized again.
    pub fn shutdown(&mut self) {
        if self.state != ControllerState::Ready {
            return;
        }

        if let Err(e) = self.driver.stop(self.port) {
            warn!(target: TAG, "Failed to stop I2S: {}", e.kind());
        }
        self.uninstall();

        self.state = ControllerState::Uninitialized;
        info!(target: TAG, "I2S duplex stopped");
    }

    /// Periodic hook. Nothing to do between transfers.
    pub fn tick(&mut self) {}

    // ── Transfers ──────────────────────────────────────────────────────

    /// Read microphone samples into `buffer`, blocking until it is full or
    /// the driver completes short.
    ///
    /// Returns the number of samples delivered, which may be less than
    /// `buffer.len()`. A short read is logged, not an error.
    pub fn read_microphone_into(&mut self, buffer: &mut [i16]) -> Result<usize, ReadError> {
        if !self.is_ready() {
            warn!(target: TAG, "I2S not initialized, cannot read microphone");
            return Err(ReadError::NotReady);
        }

        if buffer.is_empty() {
            return Ok(0);
        }

        let expected = buffer.len() * SAMPLE_BYTES;
        let read = self.driver.read(self.port, buffer).map_err(|e| {
            let kind = e.kind();
            error!(target: TAG, "Failed to read from microphone: {}", kind);
            ReadError::TransferFailed(kind)
        })?;

        let read = read.min(expected);
        if read != expected {
            warn!(target: TAG, "Read fewer bytes than expected: {}/{}", read, expected);
        }

        Ok(read / SAMPLE_BYTES)
    }

    /// Read `sample_count` microphone samples.
    ///
    /// The returned buffer is truncated to what was actually delivered;
    /// always compare its length with the request.
    #[cfg(feature = "alloc")]
    pub fn read_microphone(&mut self, sample_count: usize) -> Result<Vec<i16>, ReadError> {
        if !self.is_ready() {
            warn!(target: TAG, "I2S not initialized, cannot read microphone");
            return Err(ReadError::NotReady);
        }

        let mut buffer = vec![0i16; sample_count];
        let delivered = self.read_microphone_into(&mut buffer)?;
        buffer.truncate(delivered);
        Ok(buffer)
    }

    /// Write speaker samples, blocking until the driver has accepted them.
    ///
    /// An empty buffer succeeds without calling the driver. Accepting fewer
    /// bytes than requested is [`WriteError::ShortWrite`]: a partial frame
    /// would break the output framing.
    pub fn write_speaker(&mut self, samples: &[i16]) -> Result<(), WriteError> {
        if !self.is_ready() {
            warn!(target: TAG, "I2S not initialized, cannot write to speaker");
            return Err(WriteError::NotReady);
        }

        if samples.is_empty() {
            return Ok(());
        }

        let expected = samples.len() * SAMPLE_BYTES;
        let written = self.driver.write(self.port, samples).map_err(|e| {
            let kind = e.kind();
            error!(target: TAG, "Failed to write to speaker: {}", kind);
            WriteError::TransferFailed(kind)
        })?;

        if written < expected {
            warn!(target: TAG, "Wrote fewer bytes than expected: {}/{}", written, expected);
            return Err(WriteError::ShortWrite { written, expected });
        }

        Ok(())
    }

    // ── Queries ────────────────────────────────────────────────────────

    pub fn is_ready(&self) -> bool {
        self.state == ControllerState::Ready
    }

    pub fn sample_rate(&self) -> u32 {
        self.params.sample_rate_hz()
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn params(&self) -> &BusParameters {
        &self.params
    }

    pub fn port(&self) -> BusPort {
        self.port
    }

    /// Snapshot of pins, format and readiness for display.
    pub fn report(&self) -> BusReport {
        BusReport {
            port: self.port,
            params: self.params,
            state: self.state,
        }
    }

    /// Log the configuration report at info level.
    pub fn dump_config(&self) {
        let report = self.report();
        info!(target: TAG, "{}", report);
    }

    /// Give back the driver. Does not shut the bus down.
    pub fn release(self) -> D {
        self.driver
    }

    #[cfg(test)]
    pub(crate) fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}

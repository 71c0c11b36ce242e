//! Host lifecycle seam.
//!
//! A host scheduler drives long-lived hardware components through
//! [`Component`]: `setup()` once in priority order, `tick()` from its main
//! loop, `dump_config()` when asked for a config report, `shutdown()` before
//! reboot.

use log::error;

use crate::controller::{ControllerState, DuplexBusController};
use crate::driver::I2sDriver;

/// Relative order in which the host runs `setup()`; higher runs first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetupPriority {
    Late = -100,
    Processor = 400,
    Data = 600,
    Hardware = 800,
    Io = 900,
    Bus = 1000,
}

/// Trait for components driven by a host scheduler.
pub trait Component {
    /// One-time setup. Failures mark the component failed; they do not panic.
    fn setup(&mut self);

    /// Periodic call from the host loop.
    fn tick(&mut self) {}

    /// Log a human-readable configuration report.
    fn dump_config(&self) {}

    /// Release hardware before the host stops.
    fn shutdown(&mut self) {}

    fn setup_priority(&self) -> SetupPriority {
        SetupPriority::Data
    }

    /// Whether `setup()` failed.
    fn is_failed(&self) -> bool {
        false
    }
}

impl<D: I2sDriver> Component for DuplexBusController<D> {
    fn setup(&mut self) {
        if let Err(e) = self.initialize() {
            error!(target: "i2s_duplex", "I2S duplex marked failed: {}", e);
        }
    }

    fn tick(&mut self) {
        DuplexBusController::tick(self)
    }

    fn dump_config(&self) {
        DuplexBusController::dump_config(self)
    }

    fn shutdown(&mut self) {
        DuplexBusController::shutdown(self)
    }

    fn setup_priority(&self) -> SetupPriority {
        SetupPriority::Hardware
    }

    fn is_failed(&self) -> bool {
        self.state() == ControllerState::Failed
    }
}

//! Human-readable configuration report.
//!
//! [`BusReport`] is a snapshot taken by
//! [`DuplexBusController::report`](crate::controller::DuplexBusController::report).
//! Its `Display` output is meant for a config dump in the log, not for
//! machine parsing:
//!
//! ```text
//! I2S Duplex Configuration:
//!   Port: I2S0
//!   LRCLK Pin: GPIO45
//!   BCLK Pin: GPIO17
//!   MCLK Pin: unused
//!   DIN Pin (Microphone): GPIO16
//!   DOUT Pin (Speaker): GPIO15
//!   Sample Rate: 16000 Hz
//!   Bits per Sample: 16
//!   Channel Format: Stereo
//!   Status: Ready
//! ```

use core::fmt;

use crate::config::{BusParameters, PinAssignment};
use crate::controller::ControllerState;
use crate::driver::BusPort;

/// Snapshot of a controller's configuration and readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusReport {
    pub port: BusPort,
    pub params: BusParameters,
    pub state: ControllerState,
}

impl BusReport {
    pub fn is_ready(&self) -> bool {
        self.state == ControllerState::Ready
    }

    fn status(&self) -> &'static str {
        match self.state {
            ControllerState::Ready => "Ready",
            ControllerState::Uninitialized => "Not initialized",
            ControllerState::Failed => "Failed",
        }
    }
}

impl fmt::Display for BusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.params;
        writeln!(f, "I2S Duplex Configuration:")?;
        writeln!(f, "  Port: {}", self.port)?;
        writeln!(f, "  LRCLK Pin: GPIO{}", p.frame_sync_line())?;
        writeln!(f, "  BCLK Pin: GPIO{}", p.clock_line())?;
        match PinAssignment::from_raw(p.master_clock_line()) {
            PinAssignment::Gpio(n) => writeln!(f, "  MCLK Pin: GPIO{n}")?,
            PinAssignment::Unused => writeln!(f, "  MCLK Pin: unused")?,
        }
        writeln!(f, "  DIN Pin (Microphone): GPIO{}", p.data_in_line())?;
        writeln!(f, "  DOUT Pin (Speaker): GPIO{}", p.data_out_line())?;
        writeln!(f, "  Sample Rate: {} Hz", p.sample_rate_hz())?;
        writeln!(f, "  Bits per Sample: {}", p.bits_per_sample().bits())?;
        writeln!(f, "  Channel Format: {}", p.channel_layout())?;
        write!(f, "  Status: {}", self.status())
    }
}

//! Scripted driver used by the unit and integration tests.

use crate::config::{PinDescriptor, TimingDescriptor};
use crate::driver::{BusPort, DriverErrorKind, I2sDriver};

/// One recorded driver call. Transfers carry the requested byte count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Install,
    SetPins,
    Start,
    Stop,
    Uninstall,
    Read(usize),
    Write(usize),
}

const LOG_LEN: usize = 64;
const SINK_LEN: usize = 1024;

/// Mock I2S driver with a call log and per-call failure injection.
///
/// Reads fill the buffer with a ramp (0, 1, 2, ...). Writes are captured
/// into a fixed sink so tests can check what reached the "speaker".
pub struct MockDriver {
    log: [Call; LOG_LEN],
    log_count: usize,
    sink: [i16; SINK_LEN],
    sink_count: usize,

    pub fail_install: Option<DriverErrorKind>,
    pub fail_set_pins: Option<DriverErrorKind>,
    pub fail_start: Option<DriverErrorKind>,
    pub fail_stop: Option<DriverErrorKind>,
    pub fail_uninstall: Option<DriverErrorKind>,
    pub fail_read: Option<DriverErrorKind>,
    pub fail_write: Option<DriverErrorKind>,

    /// Cap on bytes reported per read.
    pub read_limit: Option<usize>,
    /// Cap on bytes reported per write.
    pub write_limit: Option<usize>,

    pub last_port: Option<BusPort>,
    pub timing: Option<TimingDescriptor>,
    pub pins: Option<PinDescriptor>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self {
            log: [Call::Install; LOG_LEN],
            log_count: 0,
            sink: [0; SINK_LEN],
            sink_count: 0,
            fail_install: None,
            fail_set_pins: None,
            fail_start: None,
            fail_stop: None,
            fail_uninstall: None,
            fail_read: None,
            fail_write: None,
            read_limit: None,
            write_limit: None,
            last_port: None,
            timing: None,
            pins: None,
        }
    }

    /// Calls in chronological order.
    pub fn calls(&self) -> &[Call] {
        &self.log[..self.log_count]
    }

    /// Number of times `call` was made.
    pub fn count(&self, call: Call) -> usize {
        self.calls().iter().filter(|&&c| c == call).count()
    }

    /// Samples accepted by all writes so far.
    pub fn written(&self) -> &[i16] {
        &self.sink[..self.sink_count]
    }

    fn record(&mut self, port: BusPort, call: Call) {
        self.log[self.log_count] = call;
        self.log_count += 1;
        self.last_port = Some(port);
    }

    fn outcome(fail: Option<DriverErrorKind>) -> Result<(), DriverErrorKind> {
        match fail {
            Some(kind) => Err(kind),
            None => Ok(()),
        }
    }
}

impl I2sDriver for MockDriver {
    type Error = DriverErrorKind;

    fn install(&mut self, port: BusPort, timing: &TimingDescriptor) -> Result<(), Self::Error> {
        self.record(port, Call::Install);
        Self::outcome(self.fail_install)?;
        self.timing = Some(*timing);
        Ok(())
    }

    fn set_pins(&mut self, port: BusPort, pins: &PinDescriptor) -> Result<(), Self::Error> {
        self.record(port, Call::SetPins);
        Self::outcome(self.fail_set_pins)?;
        self.pins = Some(*pins);
        Ok(())
    }

    fn start(&mut self, port: BusPort) -> Result<(), Self::Error> {
        self.record(port, Call::Start);
        Self::outcome(self.fail_start)
    }

    fn stop(&mut self, port: BusPort) -> Result<(), Self::Error> {
        self.record(port, Call::Stop);
        Self::outcome(self.fail_stop)
    }

    fn uninstall(&mut self, port: BusPort) -> Result<(), Self::Error> {
        self.record(port, Call::Uninstall);
        Self::outcome(self.fail_uninstall)
    }

    fn read(&mut self, port: BusPort, samples: &mut [i16]) -> Result<usize, Self::Error> {
        let requested = samples.len() * 2;
        self.record(port, Call::Read(requested));
        Self::outcome(self.fail_read)?;

        let bytes = self.read_limit.map_or(requested, |limit| limit.min(requested));
        for (i, s) in samples[..bytes / 2].iter_mut().enumerate() {
            *s = i as i16;
        }
        Ok(bytes)
    }

    fn write(&mut self, port: BusPort, samples: &[i16]) -> Result<usize, Self::Error> {
        let requested = samples.len() * 2;
        self.record(port, Call::Write(requested));
        Self::outcome(self.fail_write)?;

        let bytes = self.write_limit.map_or(requested, |limit| limit.min(requested));
        let accepted = &samples[..bytes / 2];
        self.sink[self.sink_count..self.sink_count + accepted.len()].copy_from_slice(accepted);
        self.sink_count += accepted.len();
        Ok(bytes)
    }
}

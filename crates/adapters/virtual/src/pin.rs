//! Virtual pin — a single simulated digital output.

use std::sync::{Mutex, MutexGuard, PoisonError};

use ledbridge_app::ports::OutputPin;
use ledbridge_domain::output::{OutputLevel, PinId};

/// A simulated output wired to one pin.
///
/// Writes addressed to any other pin are logged and dropped.
pub struct VirtualOutput {
    pin: PinId,
    state: Mutex<PinState>,
}

#[derive(Default)]
struct PinState {
    level: OutputLevel,
    writes: usize,
}

impl VirtualOutput {
    /// Configure `pin` as an output. It reads as off until first written.
    #[must_use]
    pub fn new(pin: PinId) -> Self {
        tracing::debug!(%pin, "virtual output configured");
        Self {
            pin,
            state: Mutex::new(PinState::default()),
        }
    }

    /// The pin this output is wired to.
    #[must_use]
    pub fn pin(&self) -> PinId {
        self.pin
    }

    /// Level most recently written to the pin.
    #[must_use]
    pub fn level(&self) -> OutputLevel {
        self.lock_state().level
    }

    /// Number of writes accepted so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.lock_state().writes
    }

    fn lock_state(&self) -> MutexGuard<'_, PinState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl OutputPin for VirtualOutput {
    fn set_output(&self, pin: PinId, level: OutputLevel) {
        if pin != self.pin {
            tracing::warn!(%pin, wired = %self.pin, "write to unwired pin dropped");
            return;
        }

        let mut state = self.lock_state();
        state.level = level;
        state.writes += 1;
        tracing::info!(%pin, %level, bit = level.as_bit(), "virtual output driven");
    }
}

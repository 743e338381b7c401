//! Output port — the digital pin the router drives.

use ledbridge_domain::output::{OutputLevel, PinId};

/// A digital output the router can drive high or low.
///
/// Writes are infallible at this layer; an adapter that can fail must log
/// and absorb the failure itself.
pub trait OutputPin {
    /// Drive `pin` to `level`.
    fn set_output(&self, pin: PinId, level: OutputLevel);
}

impl<T: OutputPin + ?Sized> OutputPin for &T {
    fn set_output(&self, pin: PinId, level: OutputLevel) {
        (**self).set_output(pin, level);
    }
}

impl<T: OutputPin + ?Sized> OutputPin for std::sync::Arc<T> {
    fn set_output(&self, pin: PinId, level: OutputLevel) {
        (**self).set_output(pin, level);
    }
}

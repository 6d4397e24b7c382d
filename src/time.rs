//! Time abstraction for platform-agnostic animation pacing.

use std::time::Duration;

/// Trait for abstracting blocking sleeps.
///
/// Animation timing is real-time blocking holds, so the capability injected
/// here is "block for this long" rather than "read the clock". Tests inject
/// a recording implementation and run the full show with zero wall-clock
/// delay.
pub trait Clock {
    /// Blocks the current thread for `duration`.
    fn sleep(&mut self, duration: Duration);
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn sleep(&mut self, duration: Duration) {
        (**self).sleep(duration);
    }
}

/// Wall-clock implementation backed by [`std::thread::sleep`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

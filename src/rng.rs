//! Randomness abstraction for jittered animation timing.

/// Trait for abstracting the engine's randomness.
///
/// The show leans on randomness for pacing (jittered holds) and visuals
/// (which pixel flickers, the order the wall goes dark). Injecting it lets
/// tests substitute a deterministic source and assert exact operation
/// sequences.
pub trait Rng {
    /// Uniform draw from the inclusive range `[lo, hi]`. Independent per call.
    fn pick(&mut self, lo: u64, hi: u64) -> u64;

    /// Uniform random permutation of `items` in place.
    fn shuffle(&mut self, items: &mut [usize]);
}

impl<R: Rng + ?Sized> Rng for &mut R {
    fn pick(&mut self, lo: u64, hi: u64) -> u64 {
        (**self).pick(lo, hi)
    }

    fn shuffle(&mut self, items: &mut [usize]) {
        (**self).shuffle(items);
    }
}

/// Production randomness backed by the `fastrand` crate.
#[derive(Debug)]
pub struct FastRng(fastrand::Rng);

impl FastRng {
    /// Creates a source seeded from process entropy.
    pub fn new() -> Self {
        Self(fastrand::Rng::new())
    }

    /// Creates a deterministically seeded source, useful for reproducing a
    /// particular show in tests.
    pub fn with_seed(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }
}

impl Default for FastRng {
    fn default() -> Self {
        Self::new()
    }
}

impl Rng for FastRng {
    fn pick(&mut self, lo: u64, hi: u64) -> u64 {
        self.0.u64(lo..=hi)
    }

    fn shuffle(&mut self, items: &mut [usize]) {
        self.0.shuffle(items);
    }
}

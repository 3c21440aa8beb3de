//! Core data types for populating containers with random values.

use rand::RngCore;
use std::fmt;

/// Count of distinct values a generator can produce, or of elements requested.
pub type Count = usize;

/// SplitMix64 seed used as the state of a [`RandomSource`].
///
/// The first component is the running state, the second the (odd) gamma
/// added to it on every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed(pub u64, pub u64);

impl Seed {
    /// Create a new seed from a single value.
    pub fn from_u64(value: u64) -> Self {
        let state = splitmix64_mix(value);
        let gamma = mix_gamma(state);
        Seed(state, gamma)
    }

    /// Draw a seed from the platform entropy source.
    pub fn from_entropy() -> Self {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        Seed(rng.gen(), mix_gamma(rng.gen()))
    }

    /// Generate the next random value and advance the seed.
    /// Uses SplitMix64 algorithm for high-quality randomness.
    pub fn next_u64(self) -> (u64, Self) {
        let Seed(state, gamma) = self;
        let new_state = state.wrapping_add(gamma);
        let output = splitmix64_mix(new_state);
        (output, Seed(new_state, gamma))
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({}, {})", self.0, self.1)
    }
}

/// The pseudorandom stream every value generator draws from.
///
/// A source is seeded once from platform entropy and never reseeded. It is
/// owned by exactly one [`Engine`](crate::Engine) and implements
/// [`RngCore`] so `rand` distributions can sample from it directly.
#[derive(Debug, Clone)]
pub struct RandomSource {
    seed: Seed,
    state: Seed,
}

impl RandomSource {
    /// Create a source seeded from the platform entropy source.
    pub fn new() -> Self {
        Self::from_seed(Seed::from_entropy())
    }

    pub(crate) fn from_seed(seed: Seed) -> Self {
        RandomSource { seed, state: seed }
    }

    /// The seed this source started from.
    pub fn seed(&self) -> Seed {
        self.seed
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for RandomSource {
    fn next_u32(&mut self) -> u32 {
        (RngCore::next_u64(self) >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let (value, next) = self.state.next_u64();
        self.state = next;
        value
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = RngCore::next_u64(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Configuration for an [`Engine`](crate::Engine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of discarded collisions per set or map generation.
    ///
    /// `None` retries until the requested size is reached; the feasibility
    /// check is then the only guard against looping forever.
    pub retry_limit: Option<usize>,

    /// Reserve capacity up front for containers that support it.
    pub reserve: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            retry_limit: None,
            reserve: true,
        }
    }
}

impl Config {
    /// Create a new config with the given retry limit.
    pub fn with_retry_limit(mut self, limit: usize) -> Self {
        self.retry_limit = Some(limit);
        self
    }

    /// Create a new config that retries without bound.
    pub fn without_retry_limit(mut self) -> Self {
        self.retry_limit = None;
        self
    }

    /// Create a new config with capacity reservation switched on or off.
    pub fn with_reserve(mut self, reserve: bool) -> Self {
        self.reserve = reserve;
        self
    }
}

/// SplitMix64 mixing function for high-quality output.
fn splitmix64_mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Generate a good gamma value for SplitMix64 splitting.
fn mix_gamma(mut z: u64) -> u64 {
    z = splitmix64_mix(z);
    // Ensure gamma is odd for maximal period
    (z | 1).wrapping_mul(0x9e3779b97f4a7c15)
}

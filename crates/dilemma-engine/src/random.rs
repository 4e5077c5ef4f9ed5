//! Seeded pseudo-random number generator
//!
//! Deterministic PRNG for reproducible match execution.
//! Uses a simple but effective xorshift algorithm.

/// Seeded random number generator
///
/// Deterministic: same seed + stream index = same sequence.
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 64-bit seed.
    pub fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9e3779b97f4a7c15;
        if state == 0 {
            state = 0x9e3779b97f4a7c15;
        }

        // Warm up the generator
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }

        rng
    }

    /// Derive an independent substream from this generator.
    ///
    /// Does not advance `self`; each (generator, index) pair yields its
    /// own deterministic sequence. The runner uses one stream per match
    /// and one per (round, player).
    pub fn stream(&self, index: u64) -> Self {
        let mut state = self.state ^ index.wrapping_mul(0x517cc1b727220a95);
        if state == 0 {
            state = 0x517cc1b727220a95;
        }

        let mut rng = Self { state };
        rng.next_u64(); // Mix
        rng
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    /// Generate next u32
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Generate a value 0-99 (for percentage checks)
    pub fn next_percent(&mut self) -> u8 {
        (self.next_u32() % 100) as u8
    }

    /// Generate a value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }

    /// True with the given percent probability (0 = never, 100 = always).
    pub fn chance(&mut self, percent: u8) -> bool {
        self.next_percent() < percent.min(100)
    }

    /// Uniform draw in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Fair coin flip.
    pub fn coin_flip(&mut self) -> bool {
        self.next_u64() & 1 == 1
    }
}

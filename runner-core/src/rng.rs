//! Small xorshift generator for obstacle selection.

/// xorshift32. Seeded once per game by the caller.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rng(u32);

impl Rng {
    // xorshift never leaves the all-zero state
    const FALLBACK_SEED: u32 = 0xDEAD_BEEF;

    pub const fn new(seed: u32) -> Self {
        if seed == 0 {
            Self(Self::FALLBACK_SEED)
        } else {
            Self(seed)
        }
    }

    pub fn next(&mut self) -> u32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        self.0
    }

    /// Fair coin.
    pub fn coin(&mut self) -> bool {
        // low bit of xorshift32 is weak, take one from the top
        self.next() >> 31 == 1
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Caller-owned `xoroshiro128+` pseudo-random number generator.
///
/// * Not cryptographically secure; intended for gameplay jitter, spawn
///   positions, and test data.
/// * Seeded once by the caller. Nothing reads the clock or touches global
///   state, so identical seeds yield identical sequences on every platform.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prng {
    state: [u64; 2],
}

/// Replacement state word for the forbidden all-zero state.
const NONZERO_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

impl Prng {
    /// Constructs a PRNG from two 64-bit seeds.
    ///
    /// An all-zero seed is replaced so the generator never sticks at zero.
    pub fn from_seed(seed0: u64, seed1: u64) -> Self {
        let mut state = [seed0, seed1];
        if state == [0, 0] {
            state[0] = NONZERO_SEED;
        }
        Self { state }
    }

    /// Constructs a PRNG from a single 64-bit seed via SplitMix64 expansion.
    pub fn from_seed_u64(seed: u64) -> Self {
        fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }

        let mut sm_state = seed;
        let first = splitmix64(&mut sm_state);
        let second = splitmix64(&mut sm_state);
        Self::from_seed(first, second)
    }

    /// Returns the next raw 64-bit output.
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        result
    }

    /// Returns the next float in `[0, 1)`.
    ///
    /// Fills the mantissa from the high 23 bits of the output.
    pub fn next_f32(&mut self) -> f32 {
        let raw = self.next_u64();
        let bits = ((raw >> 41) as u32) | 0x3f80_0000;
        f32::from_bits(bits) - 1.0
    }

    /// Returns the next float in `[min, max)`.
    pub fn next_range_f32(&mut self, min: f32, max: f32) -> f32 {
        debug_assert!(min <= max, "invalid range: {min}..{max}");
        min + (max - min) * self.next_f32()
    }

    /// Returns the next integer in the inclusive range `[min, max]`.
    ///
    /// Uses rejection sampling to avoid modulo bias. An inverted range is
    /// treated as `[max, min]`.
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    pub fn next_int(&mut self, min: i32, max: i32) -> i32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        let span = (i64::from(hi) - i64::from(lo)).unsigned_abs() + 1;
        if span == 1 {
            return lo;
        }

        let value = if span.is_power_of_two() {
            self.next_u64() & (span - 1)
        } else {
            let bound = u64::MAX - u64::MAX % span;
            loop {
                let candidate = self.next_u64();
                if candidate < bound {
                    break candidate % span;
                }
            }
        };

        // `value < span <= 2^32`, so the sum lands back inside `[lo, hi]`.
        (value as i64 + i64::from(lo)) as i32
    }
}

//! Injectable random sources.
//!
//! The simulation draws randomness at exactly four sites: map generation,
//! spawn placement, enemy direction choice, and attack rolls. Each site takes
//! a `&mut dyn RngSource`, so hosts can seed a [`PcgRng`] for reproducible
//! sessions and tests can script exact outcomes with [`SequenceRng`].
//!
//! # Determinism
//!
//! Implementations must be deterministic: given the same seed they produce
//! the same sequence, so a `(seed, intents)` pair always replays identically.

use std::collections::VecDeque;

/// Stream of random numbers consumed by the rules.
pub trait RngSource {
    /// Next raw 32-bit value in the stream.
    fn next_u32(&mut self) -> u32;

    /// Roll a die with `sides` faces (1..=sides inclusive).
    ///
    /// A zero-sided die always rolls 0.
    fn roll_die(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        (self.next_u32() % sides) + 1
    }

    /// Uniform value in `0..bound`. Returns 0 when `bound` is 0.
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next_u32() % bound
    }

    /// True with probability `1 / n`.
    fn one_in(&mut self, n: u32) -> bool {
        self.below(n) == 0
    }
}

/// Picks one element uniformly, or `None` for an empty slice.
pub fn pick<'a, T>(rng: &mut dyn RngSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let index = rng.below(items.len() as u32) as usize;
    items.get(index)
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 64 bits of LCG state, 32-bit permuted output.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces same stream
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a stream from a session seed.
    ///
    /// The seed is avalanche-mixed first so nearby seeds (0, 1, 2, …) start
    /// from unrelated states.
    pub fn new(seed: u64) -> Self {
        Self {
            state: mix_seed(seed),
        }
    }

    /// `state' = state × multiplier + increment (mod 2^64)`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// SplitMix64-style finalizer.
fn mix_seed(seed: u64) -> u64 {
    let mut hash = seed ^ 0x9e3779b97f4a7c15;
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;
    hash
}

/// Scripted source that replays fixed *outcomes*, cycling when exhausted.
///
/// Unlike [`PcgRng`], the scripted values are interpreted per call site:
/// `roll_die(sides)` returns the value clamped into `1..=sides`, and
/// `below(bound)` returns the value modulo `bound`. A script of `[20]` makes
/// every attack roll a natural 20.
#[derive(Clone, Debug, Default)]
pub struct SequenceRng {
    script: VecDeque<u32>,
}

impl SequenceRng {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: values.into_iter().collect(),
        }
    }

    fn advance(&mut self) -> u32 {
        match self.script.pop_front() {
            Some(value) => {
                self.script.push_back(value);
                value
            }
            None => 0,
        }
    }
}

impl RngSource for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        self.advance()
    }

    fn roll_die(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        self.advance().clamp(1, sides)
    }

    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.advance() % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_reproducible() {
        let mut a = PcgRng::new(42);
        let mut b = PcgRng::new(42);
        let first: Vec<u32> = (0..16).map(|_| a.next_u32()).collect();
        let second: Vec<u32> = (0..16).map(|_| b.next_u32()).collect();
        assert_eq!(first, second);

        let mut c = PcgRng::new(43);
        let third: Vec<u32> = (0..16).map(|_| c.next_u32()).collect();
        assert_ne!(first, third);
    }

    #[test]
    fn die_rolls_stay_in_range() {
        let mut rng = PcgRng::new(7);
        for _ in 0..1_000 {
            let roll = rng.roll_die(20);
            assert!((1..=20).contains(&roll));
        }
    }

    #[test]
    fn every_die_face_appears() {
        let mut rng = PcgRng::new(99);
        let mut seen = [false; 20];
        for _ in 0..2_000 {
            seen[(rng.roll_die(20) - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn sequence_replays_outcomes_in_a_cycle() {
        let mut rng = SequenceRng::new([20, 3]);
        assert_eq!(rng.roll_die(20), 20);
        assert_eq!(rng.roll_die(20), 3);
        assert_eq!(rng.roll_die(20), 20);
        assert_eq!(rng.below(2), 1);
    }

    #[test]
    fn pick_handles_empty_slices() {
        let mut rng = SequenceRng::new([1]);
        let empty: [u8; 0] = [];
        assert_eq!(pick(&mut rng, &empty), None);
        assert_eq!(pick(&mut rng, &['a', 'b', 'c']), Some(&'b'));
    }
}

//! Random value generation.
//!
//! Every generator takes the random source as `&mut R` so callers choose
//! between the process-wide [`thread_rng`] and a reproducible [`seeded_rng`].
//! Nothing here holds state between calls.

use rand::distributions::Standard;
use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::RandomError;

pub const ASCII_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
/// The 32 ASCII punctuation characters.
pub const PUNCTUATION: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

pub const DEFAULT_MIN: i64 = 0;
pub const DEFAULT_MAX: i64 = 100;
pub const DEFAULT_LIST_SIZE: usize = 5;
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Process-wide random source, seeded from the OS.
pub fn thread_rng() -> ThreadRng {
    rand::thread_rng()
}

/// Deterministic random source for reproducible runs.
pub fn seeded_rng(seed: u64) -> StdRng {
    debug!(seed, "seeding rng");
    StdRng::seed_from_u64(seed)
}

/// Shape of the string produced by [`generate_random_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomStringOptions {
    /// Number of characters to draw.
    pub length: usize,
    /// Add `0-9` to the alphabet.
    pub include_digits: bool,
    /// Add ASCII punctuation to the alphabet.
    pub include_special: bool,
}

impl Default for RandomStringOptions {
    fn default() -> Self {
        Self {
            length: 10,
            include_digits: true,
            include_special: false,
        }
    }
}

impl RandomStringOptions {
    /// Characters eligible for sampling. Always contains the ASCII letters.
    pub fn alphabet(&self) -> Vec<u8> {
        let mut alphabet = ASCII_LETTERS.to_vec();
        if self.include_digits {
            alphabet.extend_from_slice(DIGITS);
        }
        if self.include_special {
            alphabet.extend_from_slice(PUNCTUATION);
        }
        alphabet
    }
}

/// Sample `options.length` characters uniformly, with replacement, from
/// `options.alphabet()`.
pub fn generate_random_string<R: Rng + ?Sized>(
    rng: &mut R,
    options: &RandomStringOptions,
) -> String {
    let alphabet = options.alphabet();
    (0..options.length)
        .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
        .collect()
}

/// Uniform integer in `[min, max]`.
pub fn generate_random_number<R: Rng + ?Sized>(
    rng: &mut R,
    min: i64,
    max: i64,
) -> Result<i64, RandomError> {
    check_range(min, max)?;
    Ok(rng.gen_range(min..=max))
}

/// `size` independent draws from `[min, max]`.
///
/// The range is checked even when `size` is zero.
pub fn generate_random_list<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    min: i64,
    max: i64,
) -> Result<Vec<i64>, RandomError> {
    check_range(min, max)?;
    Ok((0..size).map(|_| rng.gen_range(min..=max)).collect())
}

/// A shuffled copy of `items`; the input is left untouched.
pub fn shuffle_list<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// A copy of one uniformly chosen element, or `None` for an empty slice.
pub fn random_choice<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> Option<T> {
    items.choose(rng).cloned()
}

/// Uniform float in `[min, max]`.
///
/// Any pair of finite bounds works, including spans wider than `f64::MAX`.
pub fn generate_random_float<R: Rng + ?Sized>(
    rng: &mut R,
    min: f64,
    max: f64,
) -> Result<f64, RandomError> {
    if min.is_nan() || max.is_nan() || min > max {
        return Err(RandomError::InvalidFloatRange { min, max });
    }
    if !min.is_finite() || !max.is_finite() {
        return Err(RandomError::NonFiniteRange { min, max });
    }
    if min == max {
        return Ok(min);
    }
    // Weighted sum instead of `min + span * draw`: `max - min` overflows for
    // bounds near `f64::MAX` even though both bounds are finite.
    let draw: f64 = rng.sample(Standard);
    let value = (1.0 - draw) * min + draw * max;
    Ok(value.clamp(min, max))
}

/// `true` with the given probability.
///
/// Draws from `[0, 1)` and compares against `probability`, so values at or
/// below zero never succeed and values at or above one always do.
pub fn generate_random_boolean<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    let draw: f64 = rng.sample(Standard);
    draw < probability
}

fn check_range(min: i64, max: i64) -> Result<(), RandomError> {
    if min > max {
        return Err(RandomError::InvalidRange { min, max });
    }
    Ok(())
}

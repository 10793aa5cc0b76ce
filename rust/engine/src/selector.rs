//! Level-driven deterministic selection.
//!
//! Every function here maps a level number (plus an optional salt or step
//! seed) onto indices, rotations or samples of a caller-supplied list. The
//! functions are pure: identical arguments always produce identical results,
//! so quiz content is reproducible across runs without storing any history.
//!
//! Degenerate inputs never panic. Empty lists and zero lengths or moduli clamp
//! to index `0`, an empty result, or a step of `1`.
//!
//! ```rust
//! use lumo_engine::selector::{cycle_pick, level_index, rotate_array, unique_index};
//!
//! assert_eq!(level_index(7, 5), 1);
//! assert_eq!(rotate_array(&[1, 2, 3, 4], -1), vec![4, 1, 2, 3]);
//! assert_eq!(cycle_pick(&['a', 'b', 'c'], 2, 5), vec!['b', 'c', 'a', 'b', 'c']);
//!
//! // Ten consecutive levels visit every slot of a ten-item list once.
//! let mut seen: Vec<usize> = (1..=10).map(|level| unique_index(level, 10, 97)).collect();
//! seen.sort_unstable();
//! assert_eq!(seen, (0..10).collect::<Vec<_>>());
//! ```

/// Step seed used when a caller has no reason to pick another one.
pub const DEFAULT_STEP_SEED: u64 = 97;

/// Multiplier of the linear-congruential mix in [`number_for_level`].
const LCG_MULTIPLIER: u32 = 1_103_515_245;

/// Decorrelates independent selections that share a level.
///
/// Numeric salts hash to `|n| + 1`; text salts hash with a djb2-style rolling
/// hash over their UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Salt<'a> {
    Number(i64),
    Text(&'a str),
}

impl<'a> Salt<'a> {
    /// Interprets `raw` as a numeric salt when it parses as an integer and as
    /// a text salt otherwise.
    pub fn parse(raw: &'a str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(n) => Salt::Number(n),
            Err(_) => Salt::Text(raw),
        }
    }

    fn hash(self) -> u32 {
        match self {
            // Reduced mod 2^32; only the low 32 bits survive the mix anyway.
            Salt::Number(n) => n.unsigned_abs().wrapping_add(1) as u32,
            Salt::Text(s) => {
                let mut hash: i32 = 0;
                for unit in s.encode_utf16() {
                    hash = hash.wrapping_mul(33).wrapping_add(i32::from(unit));
                }
                hash.unsigned_abs()
            }
        }
    }
}

impl Default for Salt<'_> {
    fn default() -> Self {
        Salt::Number(0)
    }
}

impl From<i64> for Salt<'_> {
    fn from(n: i64) -> Self {
        Salt::Number(n)
    }
}

impl From<i32> for Salt<'_> {
    fn from(n: i32) -> Self {
        Salt::Number(i64::from(n))
    }
}

impl From<u32> for Salt<'_> {
    fn from(n: u32) -> Self {
        Salt::Number(i64::from(n))
    }
}

impl<'a> From<&'a str> for Salt<'a> {
    fn from(s: &'a str) -> Self {
        Salt::Text(s)
    }
}

impl<'a> From<&'a String> for Salt<'a> {
    fn from(s: &'a String) -> Self {
        Salt::Text(s.as_str())
    }
}

/// Position of `level` within a list of `length` items.
///
/// Returns `(level - 1) mod length` as a non-negative remainder, so levels
/// `1, 2, 3, ...` walk the list in order and wrap every `length` levels. Zero
/// and negative levels stay in range as well. Returns `0` when `length` is 0.
pub fn level_index(level: i64, length: usize) -> usize {
    if length == 0 {
        return 0;
    }
    let offset = i128::from(level) - 1;
    offset.rem_euclid(length as i128) as usize
}

/// Reads `count` consecutive items starting at [`level_index`], wrapping
/// around the end of `list`.
///
/// Items repeat once `count` exceeds `list.len()`. An empty `list` yields an
/// empty vector.
pub fn cycle_pick<T: Clone>(list: &[T], level: i64, count: usize) -> Vec<T> {
    if list.is_empty() {
        return Vec::new();
    }
    let start = level_index(level, list.len());
    (0..count)
        .map(|i| list[(start + i) % list.len()].clone())
        .collect()
}

/// Returns a copy of `items` rotated left by `rotations` positions.
///
/// Negative rotations turn right. The amount is normalised into
/// `[0, len)` first, so any integer is accepted.
pub fn rotate_array<T: Clone>(items: &[T], rotations: i64) -> Vec<T> {
    let mut rotated = items.to_vec();
    if rotated.is_empty() {
        return rotated;
    }
    let len = rotated.len() as i128;
    let shift = i128::from(rotations).rem_euclid(len) as usize;
    rotated.rotate_left(shift);
    rotated
}

/// Deterministic integer in `[min, max_exclusive)` for a level and salt.
///
/// The salt hash is mixed with `level * 1103515245` in unsigned 32-bit
/// arithmetic and reduced into the requested range. Different salts on the
/// same level usually land on different values. Returns `min` when the range
/// is empty.
pub fn number_for_level<'a>(
    level: i64,
    min: i64,
    max_exclusive: i64,
    salt: impl Into<Salt<'a>>,
) -> i64 {
    if max_exclusive <= min {
        return min;
    }
    let mixed = (level as u32)
        .wrapping_mul(LCG_MULTIPLIER)
        .wrapping_add(salt.into().hash());
    let range = (i128::from(max_exclusive) - i128::from(min)) as u128;
    let offset = u128::from(mixed) % range;
    (i128::from(min) + offset as i128) as i64
}

/// Greatest common divisor by Euclid's algorithm. `gcd(0, 0)` is 0.
pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Smallest step at or after `max(2, seed mod modulus)` that is coprime to
/// `modulus`, searching upward and wrapping back to 2.
///
/// Walking a list with a coprime step visits every position before repeating.
/// Moduli of 0, 1 and 2 return 1: for 2 the search range `[2, 2)` is empty
/// and 1 is the only coprime residue.
pub fn coprime_step(modulus: usize, seed: u64) -> usize {
    if modulus <= 2 {
        return 1;
    }
    let mut step = ((seed % modulus as u64) as usize).max(2);
    // modulus - 1 is always coprime to modulus, so the search terminates.
    while gcd(step, modulus) != 1 {
        step += 1;
        if step >= modulus {
            step = 2;
        }
    }
    step
}

/// Full-cycle index: `((level - 1) * coprime_step(modulus, seed)) mod modulus`.
///
/// For `level = 1..=modulus` the results are a permutation of
/// `0..modulus`, repeating with period exactly `modulus`. Returns `0` when
/// `modulus` is 0.
pub fn unique_index(level: i64, modulus: usize, seed: u64) -> usize {
    if modulus == 0 {
        return 0;
    }
    let step = coprime_step(modulus, seed) as u128;
    let base = level_index(level, modulus) as u128;
    ((base * step) % modulus as u128) as usize
}

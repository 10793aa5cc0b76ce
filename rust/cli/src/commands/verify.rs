//! Selector property verification command.
//!
//! The `verify` command checks the guarantees the games rely on:
//!
//! - `unique_index` visits every position once per `modulus` levels
//! - `unique_index` repeats with period `modulus`
//! - `level_index` stays within `[0, length)` for any level
//! - `number_for_level` stays within `[min, max)`
//! - rotating by `k` and then by `len - k` restores the list
//!
//! Sampled checks draw levels, bounds and salts from a ChaCha20 RNG whose
//! seed is printed, so a failing run can be reproduced with `--rng-seed`.

use crate::config;
use crate::error::CliError;
use lumo_engine::selector::{
    coprime_step, level_index, number_for_level, rotate_array, unique_index,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::io::Write;
use tracing::warn;

const LEVEL_SPAN: i64 = 1_000_000;

/// Handle the verify command.
///
/// Prints one line per property and fails with `CliError::Verification`
/// naming the broken properties if any check does not hold.
pub fn handle_verify_command(
    modulus: usize,
    seed: Option<u64>,
    samples: u32,
    rng_seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = match seed {
        Some(s) => s,
        None => config::load()?.step_seed,
    };
    let rng_seed = rng_seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha20Rng::seed_from_u64(rng_seed);

    writeln!(
        out,
        "verify: modulus={} step={} samples={} rng_seed={}",
        modulus,
        coprime_step(modulus, seed),
        samples,
        rng_seed
    )?;

    let mut failures = Vec::new();

    report(out, &mut failures, "full-cycle", check_full_cycle(modulus, seed))?;
    report(
        out,
        &mut failures,
        "period",
        check_sampled(&mut rng, samples, |rng| {
            let level = rng.random_range(-LEVEL_SPAN..LEVEL_SPAN);
            let a = unique_index(level, modulus, seed);
            let b = unique_index(level + modulus as i64, modulus, seed);
            (a != b).then(|| format!("level {} gave {} then {}", level, a, b))
        }),
    )?;
    report(
        out,
        &mut failures,
        "level-index-range",
        check_sampled(&mut rng, samples, |rng| {
            let level = rng.random_range(i64::MIN..=i64::MAX);
            let length = rng.random_range(1..=1000usize);
            let idx = level_index(level, length);
            (idx >= length).then(|| format!("level {} length {} gave {}", level, length, idx))
        }),
    )?;
    report(
        out,
        &mut failures,
        "number-bounds",
        check_sampled(&mut rng, samples, |rng| {
            let level = rng.random_range(-LEVEL_SPAN..LEVEL_SPAN);
            let min = rng.random_range(-1000..1000i64);
            let max = min + rng.random_range(1..1000i64);
            let salt: i64 = rng.random();
            let n = number_for_level(level, min, max, salt);
            (n < min || n >= max)
                .then(|| format!("level {} salt {} gave {} outside [{}, {})", level, salt, n, min, max))
        }),
    )?;
    report(
        out,
        &mut failures,
        "rotation-round-trip",
        check_sampled(&mut rng, samples, |rng| {
            let len = rng.random_range(1..=32usize);
            let items: Vec<usize> = (0..len).collect();
            let k = rng.random_range(-1000..1000i64);
            let back = len as i64 - k.rem_euclid(len as i64);
            let restored = rotate_array(&rotate_array(&items, k), back);
            (restored != items).then(|| format!("len {} k {}", len, k))
        }),
    )?;

    if failures.is_empty() {
        writeln!(out, "all properties hold")?;
        Ok(())
    } else {
        Err(CliError::Verification(failures.join(", ")))
    }
}

/// Prints the outcome of one property and records its name on failure.
fn report(
    out: &mut dyn Write,
    failures: &mut Vec<String>,
    name: &str,
    problem: Option<String>,
) -> std::io::Result<()> {
    match problem {
        None => writeln!(out, "{}: ok", name),
        Some(p) => {
            warn!(property = name, problem = %p, "selector property failed");
            failures.push(name.to_string());
            writeln!(out, "{}: FAILED ({})", name, p)
        }
    }
}

fn check_full_cycle(modulus: usize, seed: u64) -> Option<String> {
    let mut seen = vec![false; modulus];
    for level in 1..=modulus as i64 {
        let idx = unique_index(level, modulus, seed);
        if idx >= modulus {
            return Some(format!("level {} gave out-of-range {}", level, idx));
        }
        if seen[idx] {
            return Some(format!("level {} repeated index {}", level, idx));
        }
        seen[idx] = true;
    }
    None
}

/// Runs `check` `samples` times and returns the first problem it reports.
fn check_sampled<F>(rng: &mut ChaCha20Rng, samples: u32, mut check: F) -> Option<String>
where
    F: FnMut(&mut ChaCha20Rng) -> Option<String>,
{
    (0..samples).find_map(|_| check(rng))
}

//! Provides a set of patterns useful for testing and benchmarking sorting algorithms.
//! Currently limited to i32 values.

use std::env;
use std::ops::Range;

use once_cell::sync::OnceCell;
use rand::prelude::*;
use zipf::ZipfDistribution;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_seeded_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    // :.:.:.::

    let mut rng = new_seeded_rng();

    // Abstracting over ranges in Rust :(
    let dist = rand::distributions::Uniform::from(range);
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_seeded_rng();

    let dist = ZipfDistribution::new(len, exponent).unwrap();
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    //  ^      ^
    //  |      |
    // sorted  |
    //     unsorted

    // Simulate pre-existing sorted slice, where len - sorted_percent are the new unsorted values
    // and part of the overall distribution.
    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_len].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);
    let chunk_size = (len / saw_count.max(1)).max(1);
    let saw_directions = random_uniform((len / chunk_size) + 1, 0..2);

    for (i, chunk) in vals.chunks_mut(chunk_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(len);

    let first_half = &mut vals[0..(len / 2)];
    first_half.sort_unstable();

    let second_half = &mut vals[(len / 2)..len];
    second_half.sort_unstable_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Returns the seed used for every pattern in this process.
///
/// Set `OVERRIDE_SEED` to reproduce a failing run.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| {
        let seed = env::var("OVERRIDE_SEED")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or_else(|| thread_rng().gen());

        println!("Seed: {seed}");
        seed
    })
}

// --- Private ---

fn new_seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

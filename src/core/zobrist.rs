//! Zobrist key generation.
//!
//! Keys are drawn once from a fixed seed, so hashes are reproducible across
//! runs. Games keep their tables in a `OnceLock` and only read them.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Build a `ROWS x COLS` table of random 64-bit keys.
#[must_use]
pub fn key_table<const ROWS: usize, const COLS: usize>(seed: u64) -> [[u64; COLS]; ROWS] {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut table = [[0u64; COLS]; ROWS];
    for row in table.iter_mut() {
        for key in row.iter_mut() {
            *key = rng.next_u64();
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_table_is_reproducible() {
        let a: [[u64; 9]; 2] = key_table(11);
        let b: [[u64; 9]; 2] = key_table(11);
        assert_eq!(a, b);
    }

    #[test]
    fn test_keys_are_distinct() {
        let table: [[u64; 16]; 16] = key_table(5);
        let mut keys: Vec<u64> = table.iter().flatten().copied().collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 256);
    }
}

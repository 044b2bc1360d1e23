//! Note identifier generation.

use rand::Rng;

/// URL-safe alphabet used for generated ids.
const ALPHABET: &[u8; 64] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_-";

/// Length of ids produced by [`ShortIdGenerator`].
pub const SHORT_ID_LEN: usize = 10;

/// Source of note ids.
pub trait IdGenerator: Send + Sync + std::fmt::Debug {
    /// Produce a new non-empty id.
    fn generate(&self) -> String;
}

/// Random short ids over a 64-symbol URL-safe alphabet (60 bits each).
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortIdGenerator;

impl IdGenerator for ShortIdGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..SHORT_ID_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

//! Short code generation.
//!
//! Codes are six characters drawn uniformly from `[A-Za-z0-9]` using OS entropy,
//! so active mappings cannot be guessed or enumerated from previously issued codes.

/// Number of characters in a generated code.
pub const CODE_LENGTH: usize = 6;

/// Symbols a code is drawn from.
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Largest multiple of the alphabet size that fits in a byte. Bytes at or above
/// this value are discarded so every symbol is equally likely.
const REJECTION_THRESHOLD: u8 = (256 / ALPHABET.len() * ALPHABET.len()) as u8;

/// Source of codes for new mappings.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Returns a fresh code. No uniqueness check is made against the backend.
    fn generate(&self) -> String;
}

/// Cryptographically secure generator backed by `getrandom`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl RandomCodeGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        generate_code()
    }
}

/// Generates a cryptographically secure random short code.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    let mut code = String::with_capacity(CODE_LENGTH);
    // 248/256 acceptance; 16 bytes covers six symbols almost always
    let mut buffer = [0u8; 16];

    while code.len() < CODE_LENGTH {
        getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

        for &byte in &buffer {
            if byte >= REJECTION_THRESHOLD {
                continue;
            }

            code.push(ALPHABET[usize::from(byte) % ALPHABET.len()] as char);
            if code.len() == CODE_LENGTH {
                break;
            }
        }
    }

    code
}

/// Returns true if `code` has the shape of a generated code.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rejection_threshold() {
        assert_eq!(REJECTION_THRESHOLD, 248);
    }

    #[test]
    fn test_alphabet_is_alphanumeric_and_distinct() {
        let distinct: HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(distinct.len(), 62);
        assert!(ALPHABET.iter().all(u8::is_ascii_alphanumeric));
    }

    #[test]
    fn test_generate_code_has_correct_length() {
        for _ in 0..100 {
            assert_eq!(generate_code().len(), CODE_LENGTH);
        }
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        for _ in 0..1000 {
            let code = generate_code();
            assert!(is_valid_code(&code), "unexpected code shape: {code}");
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let codes: HashSet<_> = (0..1000).map(|_| generate_code()).collect();
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_trait_impl_delegates() {
        let generator = RandomCodeGenerator::new();
        assert!(is_valid_code(&generator.generate()));
    }

    /// Chi-square test per character position across the 62 symbols.
    ///
    /// With 61 degrees of freedom the 99.99th percentile is about 118,
    /// so an unbiased generator fails this with negligible probability.
    #[test]
    fn test_generate_code_positions_are_uniform() {
        const SAMPLES: usize = 62_000;
        let mut counts = [[0usize; 62]; CODE_LENGTH];

        for _ in 0..SAMPLES {
            for (position, byte) in generate_code().bytes().enumerate() {
                let index = ALPHABET.iter().position(|&c| c == byte).unwrap();
                counts[position][index] += 1;
            }
        }

        let expected = SAMPLES as f64 / 62.0;
        for (position, row) in counts.iter().enumerate() {
            let chi_square: f64 = row
                .iter()
                .map(|&observed| {
                    let diff = observed as f64 - expected;
                    diff * diff / expected
                })
                .sum();

            assert!(
                chi_square < 118.0,
                "position {position} looks biased (chi-square {chi_square:.1})"
            );
        }
    }

    #[test]
    fn test_is_valid_code() {
        assert!(is_valid_code("ab12XY"));
        assert!(!is_valid_code("ab12X"));
        assert!(!is_valid_code("ab12XYZ"));
        assert!(!is_valid_code("ab-2XY"));
        assert!(!is_valid_code(""));
    }
}

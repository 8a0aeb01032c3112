//! Entropy estimate and strength tiers.
//!
//! The estimate treats a password as `length` independent uniform draws from
//! the whole alphabet. Forcing one character per category makes the true
//! figure marginally lower; the gap is negligible at practical lengths and
//! this is the usual approximation strength meters report.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very weak",
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Password entropy in bits, rounded to two decimals.
pub fn estimate_entropy(length: usize, alphabet_size: usize) -> f64 {
    if alphabet_size <= 1 || length == 0 {
        return 0.0;
    }
    round_centi(length as f64 * (alphabet_size as f64).log2())
}

/// Map entropy bits to a strength tier.
pub fn classify(bits: f64) -> Strength {
    // Tier bounds are whole bits, so truncating keeps [lower, upper) intact.
    match bits as u32 {
        0..=27 => Strength::VeryWeak,
        28..=35 => Strength::Weak,
        36..=59 => Strength::Medium,
        60..=127 => Strength::Strong,
        _ => Strength::VeryStrong,
    }
}

#[inline]
fn round_centi(bits: f64) -> f64 {
    (bits * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_inputs_are_zero() {
        assert_eq!(estimate_entropy(0, 92), 0.0);
        assert_eq!(estimate_entropy(12, 1), 0.0);
        assert_eq!(estimate_entropy(12, 0), 0.0);
    }

    #[test]
    fn known_values() {
        assert_eq!(estimate_entropy(1, 10), 3.32);
        assert_eq!(estimate_entropy(12, 92), 78.28);
        assert_eq!(estimate_entropy(20, 24), 91.7);
        assert_eq!(estimate_entropy(8, 2), 8.0);
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(round_centi(1.005_000_1), 1.01);
        assert_eq!(round_centi(2.344), 2.34);
        assert_eq!(round_centi(2.345_000_1), 2.35);
    }

    #[test]
    fn monotonic_in_length_and_alphabet() {
        for alphabet in [2, 10, 24, 62, 92] {
            let mut last = 0.0;
            for length in 0..200 {
                let bits = estimate_entropy(length, alphabet);
                assert!(bits >= last, "length {length}, alphabet {alphabet}");
                last = bits;
            }
        }
        for length in [1, 8, 16, 64] {
            let mut last = 0.0;
            for alphabet in 0..200 {
                let bits = estimate_entropy(length, alphabet);
                assert!(bits >= last, "length {length}, alphabet {alphabet}");
                last = bits;
            }
        }
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(classify(0.0), Strength::VeryWeak);
        assert_eq!(classify(27.99), Strength::VeryWeak);
        assert_eq!(classify(28.0), Strength::Weak);
        assert_eq!(classify(35.99), Strength::Weak);
        assert_eq!(classify(36.0), Strength::Medium);
        assert_eq!(classify(59.99), Strength::Medium);
        assert_eq!(classify(60.0), Strength::Strong);
        assert_eq!(classify(127.99), Strength::Strong);
        assert_eq!(classify(128.0), Strength::VeryStrong);
        assert_eq!(classify(4096.0), Strength::VeryStrong);
    }

    #[test]
    fn tiers_order_with_bits() {
        let mut last = Strength::VeryWeak;
        for centi in 0..20_000 {
            let tier = classify(centi as f64 / 100.0);
            assert!(tier >= last);
            last = tier;
        }
    }

    #[test]
    fn labels() {
        assert_eq!(Strength::VeryStrong.to_string(), "Very strong");
        assert_eq!(Strength::Medium.to_string(), "Medium");
    }
}

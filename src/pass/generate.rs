//! Password generation.

use std::fmt;

use thiserror::Error;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use super::entropy::{Strength, classify, estimate_entropy};
use super::pool::{Pools, Selection, build_pools};
use crate::rng::RandomSource;

/// Length and composition of one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub selection: Selection,
}

impl GenerationRequest {
    pub fn new(length: usize, selection: Selection) -> Self {
        Self { length, selection }
    }
}

/// Longest password `generate` accepts.
pub const MAX_LENGTH: usize = 65_536;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("select at least one character category")]
    NoCategorySelected,
    #[error(
        "length {length} cannot hold one character from each of the {required} selected categories; minimum length is {required}"
    )]
    LengthBelowCategoryCount { length: usize, required: usize },
    #[error("length {length} is too long; maximum length is {max}")]
    LengthAboveMaximum { length: usize, max: usize },
}

/// A generated password with its strength estimate.
///
/// The password buffer is wiped when this value is dropped.
pub struct Generated {
    password: Zeroizing<String>,
    entropy_bits: f64,
    strength: Strength,
    alphabet_size: usize,
}

impl Generated {
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn entropy_bits(&self) -> f64 {
        self.entropy_bits
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    /// Distinct characters the password was drawn from.
    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }
}

impl fmt::Debug for Generated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generated")
            .field("password", &"<redacted>")
            .field("entropy_bits", &self.entropy_bits)
            .field("strength", &self.strength)
            .field("alphabet_size", &self.alphabet_size)
            .finish()
    }
}

/// Generate one password that holds at least one character of every
/// selected category whose filtered pool is non-empty.
///
/// Validation happens before any draw: a failed request never touches `rng`.
pub fn generate<R: RandomSource + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<Generated, GenerateError> {
    let pools = build_pools(&request.selection);
    generate_from_pools(request.length, &pools, rng)
}

pub(crate) fn generate_from_pools<R: RandomSource + ?Sized>(
    length: usize,
    pools: &Pools,
    rng: &mut R,
) -> Result<Generated, GenerateError> {
    if pools.union.is_empty() {
        return Err(GenerateError::NoCategorySelected);
    }

    let required = pools.required_length();
    if length < required {
        return Err(GenerateError::LengthBelowCategoryCount { length, required });
    }
    if length > MAX_LENGTH {
        return Err(GenerateError::LengthAboveMaximum {
            length,
            max: MAX_LENGTH,
        });
    }

    debug!(
        length,
        categories = required,
        alphabet = pools.alphabet_size(),
        "generating password"
    );

    let mut buf: Vec<u8> = Vec::with_capacity(length);
    buf.extend(pools.effective().map(|pool| rng.pick(&pool.chars)));
    buf.extend((required..length).map(|_| rng.pick(&pools.union)));

    // Without this the first `required` positions would each be known to
    // come from a distinct category.
    rng.shuffle(&mut buf);

    let password = Zeroizing::new(buf.iter().copied().map(char::from).collect::<String>());
    buf.zeroize();

    let entropy_bits = estimate_entropy(length, pools.alphabet_size());
    Ok(Generated {
        password,
        entropy_bits,
        strength: classify(entropy_bits),
        alphabet_size: pools.alphabet_size(),
    })
}

//! Constrained password generation.
//!
//! Passwords are drawn from up to four fixed character categories with an
//! optional ambiguous-character filter. Every selected category contributes
//! at least one character, the mandatory characters are shuffled into random
//! positions, and each result carries an entropy estimate and strength tier.
//!
//! ```no_run
//! use passgen::{CryptoSource, GenerationRequest, Selection, generate};
//!
//! let selection = Selection::all().avoid_ambiguous(true);
//! let request = GenerationRequest::new(16, selection);
//! let generated = generate(&request, &mut CryptoSource::system()).unwrap();
//! println!("{} ({:.2} bits)", generated.password(), generated.entropy_bits());
//! ```

pub mod output;
pub mod pass;
pub mod rng;

pub use output::{ClipboardSink, FileSink, OutputSink};
pub use pass::{
    AMBIGUOUS, Category, CategoryPool, GenerateError, Generated, GenerationRequest, MAX_LENGTH,
    Pools, Selection, Strength, build_pools, classify, estimate_entropy, generate,
};
pub use rng::{CryptoSource, RandomSource};

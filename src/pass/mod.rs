//! Password generation and scoring.

pub mod charset;
pub mod entropy;
mod generate;
pub mod pool;

pub use charset::{AMBIGUOUS, Category, is_ambiguous};
pub use entropy::{Strength, classify, estimate_entropy};
pub use generate::{GenerateError, Generated, GenerationRequest, MAX_LENGTH, generate};
pub use pool::{CategoryPool, Pools, Selection, build_pools};

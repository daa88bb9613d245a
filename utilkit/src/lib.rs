//! Stateless helpers for formatting text and drawing random values.
//!
//! - **[`strings`]**: capitalization, truncation, palindromes, case conversion.
//! - **[`random`]**: random strings, numbers, lists and booleans. The random
//!   source is always passed in, so seeded runs are reproducible.
//! - **[`config`]**: TOML-backed defaults and an optional seed.

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod greet;
pub mod logging;
pub mod random;
pub mod strings;

pub use config::{UtilsConfig, load_config};
pub use error::RandomError;
pub use greet::greet;
pub use random::RandomStringOptions;

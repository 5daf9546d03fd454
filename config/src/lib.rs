//! # Config Crate
//!
//! Centralized configuration for the low-poly figure generator. All base
//! dimensions, segment counts and tunable settings are defined here so the
//! mesh builder, the part generators and the assembler agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{BASE_HEAD_HEIGHT, HEAD_SEGMENTS};
//! use config::GeneratorConfig;
//!
//! let head_height = BASE_HEAD_HEIGHT * 1.1;
//! assert!(head_height > BASE_HEAD_HEIGHT);
//! assert_eq!(HEAD_SEGMENTS, 8);
//!
//! let config = GeneratorConfig::default().sequential();
//! assert!(!config.parallel_parts);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure values, usable from every crate
//! - **Validated Settings**: Runtime settings are checked on construction

pub mod constants;
pub mod generator;

pub use generator::{ConfigError, GeneratorConfig};

#[cfg(test)]
mod tests;

//! # Error Types
//!
//! Errors raised while generating or assembling a figure.
//!
//! ## Error Policy
//!
//! - A failing part aborts the whole generation pass
//! - Unknown style values are rejected, never mapped to a default
//! - A bald figure is not an error: the hair part is simply absent

use config::ConfigError;
use lowpoly_mesh::MeshError;
use thiserror::Error;

use crate::materials::MaterialSlot;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during figure generation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FigureError {
    /// Mesh construction rejected its input.
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),

    /// Generator settings are out of range.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Style discriminant or name that no generator handles.
    #[error("Unsupported {kind} style: {value}")]
    UnsupportedStyle {
        /// Which style enumeration was being parsed
        kind: &'static str,
        /// The rejected value
        value: String,
    },

    /// Cross-section profile violates its ordering or size rules.
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// A placed part references a slot the material set does not hold.
    #[error("No texture for material slot {0:?}")]
    MissingMaterial(MaterialSlot),

    /// The texture collaborator failed.
    #[error("Texture error: {0}")]
    Texture(String),
}

impl FigureError {
    /// Creates an unsupported style error.
    pub fn unsupported(kind: &'static str, value: impl ToString) -> Self {
        Self::UnsupportedStyle {
            kind,
            value: value.to_string(),
        }
    }
}

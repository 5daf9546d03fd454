//! Validated generator settings shared by the figure pipeline.
//!
//! Tunables that callers may legitimately change per run live here; fixed
//! geometry lives in [`crate::constants`].

use std::fmt;

use crate::constants::{MAX_SPHERE_SUBDIVISIONS, MAX_TEXTURE_SCALE, MIN_SPHERE_SUBDIVISIONS};

/// Immutable snapshot of generator settings.
///
/// # Examples
/// ```
/// use config::GeneratorConfig;
/// let config = GeneratorConfig::default();
/// assert!(config.parallel_parts);
/// assert_eq!(config.joint_subdivisions, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Generate independent parts on the rayon thread pool.
    pub parallel_parts: bool,
    /// Subdivision depth of the shoulder joint spheres.
    pub joint_subdivisions: u32,
    /// Multiplier applied to every texture edge length.
    pub texture_scale: u32,
}

impl GeneratorConfig {
    /// Builds a configuration, rejecting values outside the supported ranges.
    ///
    /// # Examples
    /// ```
    /// use config::GeneratorConfig;
    /// let cfg = GeneratorConfig::new(false, 2, 1).expect("valid config");
    /// assert_eq!(cfg.joint_subdivisions, 2);
    /// assert!(GeneratorConfig::new(true, 4, 1).is_err());
    /// ```
    pub fn new(
        parallel_parts: bool,
        joint_subdivisions: u32,
        texture_scale: u32,
    ) -> Result<Self, ConfigError> {
        if !(MIN_SPHERE_SUBDIVISIONS..=MAX_SPHERE_SUBDIVISIONS).contains(&joint_subdivisions) {
            return Err(ConfigError::InvalidSubdivisions(joint_subdivisions));
        }
        if texture_scale == 0 || texture_scale > MAX_TEXTURE_SCALE {
            return Err(ConfigError::InvalidTextureScale(texture_scale));
        }
        Ok(Self {
            parallel_parts,
            joint_subdivisions,
            texture_scale,
        })
    }

    /// Same settings with parallel part generation switched off.
    pub fn sequential(self) -> Self {
        Self {
            parallel_parts: false,
            ..self
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            parallel_parts: true,
            joint_subdivisions: MIN_SPHERE_SUBDIVISIONS,
            texture_scale: 1,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the joint subdivision depth is outside the faceted range.
    InvalidSubdivisions(u32),
    /// Raised when the texture scale is zero or too large.
    InvalidTextureScale(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSubdivisions(value) => write!(
                f,
                "joint_subdivisions must be in {}..={}: {value}",
                MIN_SPHERE_SUBDIVISIONS, MAX_SPHERE_SUBDIVISIONS
            ),
            ConfigError::InvalidTextureScale(value) => {
                write!(f, "texture_scale must be in 1..={MAX_TEXTURE_SCALE}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

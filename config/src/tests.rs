//! # Tests for Config Constants
//!
//! Unit tests verifying the consistency of configuration constants
//! and the generator settings validation.

use crate::constants::*;
use crate::generator::{ConfigError, GeneratorConfig};

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
    assert!(DEGENERATE_AREA_EPSILON > 0.0);
}

#[test]
fn test_approx_equal() {
    assert!(approx_equal(0.5, 0.5 + 1e-12));
    assert!(!approx_equal(0.5, 0.51));
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_segment_counts_keep_low_poly_range() {
    for segments in [
        HEAD_SEGMENTS,
        TORSO_SEGMENTS,
        LIMB_SEGMENTS,
        HAIR_SEGMENTS,
        LONG_HAIR_SEGMENTS,
    ] {
        assert!((5..=10).contains(&segments), "segment count {segments}");
    }
}

#[test]
fn test_cylinder_minimum_covers_rings() {
    assert!(MIN_CYLINDER_SEGMENTS >= MIN_RING_SEGMENTS);
}

#[test]
fn test_sphere_subdivision_bounds() {
    assert_eq!(MIN_SPHERE_SUBDIVISIONS, 1);
    assert_eq!(MAX_SPHERE_SUBDIVISIONS, 3);
}

// =============================================================================
// DIMENSION TESTS
// =============================================================================

#[test]
fn test_torso_split_fits_inside_torso() {
    assert!(UPPER_TORSO_FRACTION + LOWER_TORSO_FRACTION <= 1.0);
}

#[test]
fn test_limb_segments_fit_inside_limb() {
    assert!(UPPER_ARM_FRACTION + FOREARM_FRACTION <= 1.0);
    assert!(THIGH_FRACTION + CALF_FRACTION <= 1.0);
}

#[test]
fn test_shoulder_anchor_inside_shoulders() {
    assert!(SHOULDER_X_OFFSET < BASE_SHOULDER_WIDTH / 2.0);
    assert!(HIP_X_OFFSET < BASE_HIP_WIDTH / 2.0);
}

// =============================================================================
// GENERATOR CONFIG TESTS
// =============================================================================

#[test]
fn test_default_config_is_valid() {
    let cfg = GeneratorConfig::default();
    let rebuilt = GeneratorConfig::new(
        cfg.parallel_parts,
        cfg.joint_subdivisions,
        cfg.texture_scale,
    );
    assert_eq!(rebuilt, Ok(cfg));
}

#[test]
fn test_config_rejects_bad_values() {
    assert_eq!(
        GeneratorConfig::new(true, 0, 1).unwrap_err(),
        ConfigError::InvalidSubdivisions(0)
    );
    assert_eq!(
        GeneratorConfig::new(true, 1, 0).unwrap_err(),
        ConfigError::InvalidTextureScale(0)
    );
    assert_eq!(
        GeneratorConfig::new(true, 1, MAX_TEXTURE_SCALE + 1).unwrap_err(),
        ConfigError::InvalidTextureScale(MAX_TEXTURE_SCALE + 1)
    );
}

#[test]
fn test_config_error_display() {
    let message = ConfigError::InvalidSubdivisions(9).to_string();
    assert!(message.contains("joint_subdivisions"));
    assert!(message.contains('9'));
}

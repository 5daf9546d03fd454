//! # Configuration Constants
//!
//! Centralized constants for the figure generator. Every base dimension,
//! tessellation count and seam offset used by the part generators and the
//! assembler is defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Ring segment counts and sphere subdivision bounds
//! - **Dimensions**: Base body-part sizes in metres, scaled by shape parameters
//! - **Seams**: Cap centroid offsets
//! - **Textures**: Low-resolution texture sizes per material slot

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Minimum triangle area (as cross-product length) accepted by mesh
/// validation. Smaller triangles are reported as degenerate.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Minimum number of vertices in a lofting ring.
pub const MIN_RING_SEGMENTS: usize = 3;

/// Minimum segment count accepted by the cylinder primitive.
pub const MIN_CYLINDER_SEGMENTS: usize = 4;

/// Lowest subdivision depth of the low-poly sphere.
pub const MIN_SPHERE_SUBDIVISIONS: u32 = 1;

/// Highest subdivision depth of the low-poly sphere. Deeper levels lose the
/// faceted look.
///
/// # Example
///
/// ```rust
/// use config::constants::{MAX_SPHERE_SUBDIVISIONS, MIN_SPHERE_SUBDIVISIONS};
///
/// let requested = 7u32;
/// let depth = requested.clamp(MIN_SPHERE_SUBDIVISIONS, MAX_SPHERE_SUBDIVISIONS);
/// assert_eq!(depth, 3);
/// ```
pub const MAX_SPHERE_SUBDIVISIONS: u32 = 3;

/// Ring segments around the head.
pub const HEAD_SEGMENTS: usize = 8;

/// Ring segments around both torso halves.
pub const TORSO_SEGMENTS: usize = 6;

/// Ring segments for limb tubes, hands, feet and the neck.
pub const LIMB_SEGMENTS: usize = 6;

/// Ring segments for the short, medium, spiky and slicked hair styles.
pub const HAIR_SEGMENTS: usize = 8;

/// Ring segments for long hair.
pub const LONG_HAIR_SEGMENTS: usize = 10;

/// Number of individually placed spikes on spiky hair.
pub const SPIKE_COUNT: usize = 6;

// =============================================================================
// DIMENSION CONSTANTS (metres at parameter value 1.0)
// =============================================================================

/// Head width.
pub const BASE_HEAD_WIDTH: f64 = 0.18;
/// Head height, crown to chin tip.
pub const BASE_HEAD_HEIGHT: f64 = 0.22;
/// Head depth, back to face.
pub const BASE_HEAD_DEPTH: f64 = 0.20;

/// Torso height before the upper/lower split.
pub const BASE_TORSO_HEIGHT: f64 = 0.55;
/// Fraction of the torso height taken by the upper body (neck to waist).
pub const UPPER_TORSO_FRACTION: f64 = 0.55;
/// Fraction of the torso height taken by the lower body (waist to crotch).
pub const LOWER_TORSO_FRACTION: f64 = 0.35;
/// Full shoulder width.
pub const BASE_SHOULDER_WIDTH: f64 = 0.40;
/// Full hip width.
pub const BASE_HIP_WIDTH: f64 = 0.32;
/// Torso depth, front to back.
pub const BASE_TORSO_DEPTH: f64 = 0.22;

/// Neck height.
pub const BASE_NECK_HEIGHT: f64 = 0.06;
/// Neck radius at the collar; the top narrows to 90%.
pub const BASE_NECK_RADIUS: f64 = 0.045;

/// Whole-arm length, shoulder to wrist.
pub const BASE_ARM_LENGTH: f64 = 0.55;
/// Whole-leg length, hip to ankle.
pub const BASE_LEG_LENGTH: f64 = 0.85;
/// Reference arm radius.
pub const BASE_ARM_RADIUS: f64 = 0.032;
/// Reference leg radius.
pub const BASE_LEG_RADIUS: f64 = 0.05;
/// Share of the arm length taken by the upper arm.
pub const UPPER_ARM_FRACTION: f64 = 0.45;
/// Share of the arm length taken by the forearm.
pub const FOREARM_FRACTION: f64 = 0.43;
/// Share of the leg length taken by the thigh.
pub const THIGH_FRACTION: f64 = 0.45;
/// Share of the leg length taken by the calf.
pub const CALF_FRACTION: f64 = 0.43;
/// Shoulder joint sphere radius as a multiple of the arm radius.
pub const SHOULDER_JOINT_RADIUS_FACTOR: f64 = 1.5;

/// Palm length, wrist to finger base.
pub const BASE_HAND_LENGTH: f64 = 0.075;
/// Finger block length.
pub const BASE_FINGER_LENGTH: f64 = 0.04;
/// Palm width.
pub const BASE_HAND_WIDTH: f64 = 0.04;
/// Palm thickness.
pub const BASE_HAND_THICKNESS: f64 = 0.02;

/// Foot length, heel to toe.
pub const BASE_FOOT_LENGTH: f64 = 0.11;
/// Foot width.
pub const BASE_FOOT_WIDTH: f64 = 0.045;
/// Foot height, sole to ankle.
pub const BASE_FOOT_HEIGHT: f64 = 0.035;

/// Lateral shoulder anchor at `shoulder_width == 1.0`.
pub const SHOULDER_X_OFFSET: f64 = 0.18;
/// Lateral hip anchor at `hip_width == 1.0`.
pub const HIP_X_OFFSET: f64 = 0.09;
/// Height of the shoulder joint as a fraction of the upper torso height,
/// measured from the waist.
pub const SHOULDER_LEVEL_FRACTION: f64 = 0.85;

// =============================================================================
// SEAM CONSTANTS
// =============================================================================

/// Cap centroid offset for the head and hair shells.
pub const HEAD_CAP_OFFSET: f64 = 0.005;
/// Cap centroid offset for the torso halves.
pub const TORSO_CAP_OFFSET: f64 = 0.01;
/// Cap centroid offset for limb tubes, hands and feet.
pub const LIMB_CAP_OFFSET: f64 = 0.002;

// =============================================================================
// TEXTURE CONSTANTS
// =============================================================================

/// Edge length of the face texture in pixels.
pub const FACE_TEXTURE_SIZE: u32 = 64;
/// Edge length of the skin texture in pixels.
pub const SKIN_TEXTURE_SIZE: u32 = 32;
/// Edge length of hair and clothing textures in pixels.
pub const CLOTHING_TEXTURE_SIZE: u32 = 64;
/// Edge length of the footwear texture in pixels.
pub const FOOTWEAR_TEXTURE_SIZE: u32 = 32;
/// Largest accepted texture scale multiplier.
pub const MAX_TEXTURE_SCALE: u32 = 8;

/// Footwear color (dark brown), RGB in [0, 1].
pub const FOOTWEAR_COLOR: [f32; 3] = [0.2, 0.15, 0.1];

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

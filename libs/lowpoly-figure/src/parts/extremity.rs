//! # Hands, Feet and Shoulder Joints
//!
//! Extremities are small composite shapes rather than plain tubes.
//!
//! - **Hand**: wrist → palm → finger base → finger tip rings, closed
//! - **Foot**: ankle → instep → sole rings swept forward, plus a toe wedge
//!   and a heel wedge
//! - **Shoulder joint**: faceted sphere centered on its pivot

use std::f64::consts::TAU;

use config::constants::{
    BASE_ARM_RADIUS, BASE_LEG_RADIUS, LIMB_CAP_OFFSET, LIMB_SEGMENTS, SHOULDER_JOINT_RADIUS_FACTOR,
};
use glam::{DVec2, DVec3};
use lowpoly_mesh::{CapOrientation, MeshBuilder};

use super::{PartGenerator, PartMesh};
use crate::dimensions::BodyDimensions;
use crate::error::FigureError;
use crate::params::ShapeParameters;
use crate::profile::{end_rings, CrossSectionProfile, ProfileLevel};

// =============================================================================
// HAND
// =============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct HandGenerator;

impl HandGenerator {
    pub fn profile(dims: &BodyDimensions) -> Result<CrossSectionProfile, FigureError> {
        let w = dims.hand_width;
        let t = dims.hand_thickness;
        let total = dims.hand();

        CrossSectionProfile::new(vec![
            ProfileLevel::new(total, w * 0.85, t * 0.9), // wrist
            ProfileLevel::new(total - dims.palm * 0.5, w, t),
            ProfileLevel::new(dims.fingers, w * 0.9, t * 0.8),
            ProfileLevel::new(0.0, w * 0.6, t * 0.5), // finger tips
        ])
    }
}

impl PartGenerator for HandGenerator {
    fn name(&self) -> &'static str {
        "hand"
    }

    fn generate(&self, params: &ShapeParameters) -> Result<PartMesh, FigureError> {
        let dims = BodyDimensions::from_params(params);
        let total = dims.hand();

        let mut builder = MeshBuilder::new();
        let rings = Self::profile(&dims)?.loft(&mut builder, LIMB_SEGMENTS, 0.0, |p| {
            (p.base, DVec2::new(p.around(LIMB_SEGMENTS), p.base.y / total))
        })?;
        let (wrist, tips) = end_rings(&rings)?;

        builder.add_cap(
            wrist,
            DVec3::new(0.0, total + LIMB_CAP_OFFSET, 0.0),
            DVec2::new(0.5, 1.0),
            CapOrientation::Top,
        )?;
        builder.add_cap(
            tips,
            DVec3::new(0.0, -LIMB_CAP_OFFSET, 0.0),
            DVec2::new(0.5, 0.0),
            CapOrientation::Bottom,
        )?;

        Ok(PartMesh {
            mesh: builder.build("Hand"),
            extent: total,
        })
    }
}

// =============================================================================
// FOOT
// =============================================================================

/// Ankle radius, matching the bottom ring of the calf.
const ANKLE_RADIUS: f64 = BASE_LEG_RADIUS * 0.55;

const TOE_SEGMENTS: [usize; 2] = [1, 2];
const HEEL_SEGMENTS: [usize; 2] = [4, 5];

#[derive(Debug, Default, Clone, Copy)]
pub struct FootGenerator;

/// Foot rings and their forward shift.
struct FootShape {
    profile: CrossSectionProfile,
    centers: [f64; 3],
}

impl FootShape {
    fn new(dims: &BodyDimensions) -> Result<Self, FigureError> {
        let length = dims.foot_length;
        let height = dims.foot_height;
        let width = dims.foot_width;

        let profile = CrossSectionProfile::new(vec![
            ProfileLevel::round(height, ANKLE_RADIUS),
            ProfileLevel::new(height * 0.45, width, length * 0.6), // instep
            ProfileLevel::new(0.0, width, length * 0.9),           // sole
        ])?;

        Ok(Self {
            profile,
            centers: [0.0, length * 0.2, length * 0.25],
        })
    }

    fn point(&self, level: usize, segment: usize) -> DVec3 {
        let section = self.profile.levels()[level];
        let angle = segment as f64 / LIMB_SEGMENTS as f64 * TAU;
        DVec3::new(
            angle.cos() * section.width * 0.5,
            section.offset,
            angle.sin() * section.depth * 0.5 + self.centers[level],
        )
    }
}

impl PartGenerator for FootGenerator {
    fn name(&self) -> &'static str {
        "foot"
    }

    fn generate(&self, params: &ShapeParameters) -> Result<PartMesh, FigureError> {
        let dims = BodyDimensions::from_params(params);
        let length = dims.foot_length;
        let height = dims.foot_height;
        let shape = FootShape::new(&dims)?;

        let mut builder = MeshBuilder::new();
        let rings = shape.profile.loft(&mut builder, LIMB_SEGMENTS, 0.0, |p| {
            let uv = DVec2::new(p.around(LIMB_SEGMENTS), p.base.y / height);
            (shape.point(p.level, p.segment), uv)
        })?;
        let (ankle, sole) = end_rings(&rings)?;

        builder.add_cap(
            ankle,
            DVec3::new(0.0, height + LIMB_CAP_OFFSET, 0.0),
            DVec2::new(0.5, 1.0),
            CapOrientation::Top,
        )?;
        builder.add_cap(
            sole,
            DVec3::new(0.0, -LIMB_CAP_OFFSET, length * 0.25),
            DVec2::new(0.5, 0.0),
            CapOrientation::Bottom,
        )?;

        let interior = DVec3::new(0.0, height * 0.4, length * 0.2);
        let toe = DVec3::new(0.0, height * 0.15, length * 0.85);
        let heel = DVec3::new(0.0, height * 0.25, -length * 0.3);

        add_wedge(&mut builder, &shape, TOE_SEGMENTS, toe, interior);
        add_wedge(&mut builder, &shape, HEEL_SEGMENTS, heel, interior);

        Ok(PartMesh {
            mesh: builder.build("Foot"),
            extent: height,
        })
    }
}

/// Pyramid from the instep/sole quad between two segments out to `apex`.
fn add_wedge(
    builder: &mut MeshBuilder,
    shape: &FootShape,
    [a, b]: [usize; 2],
    apex: DVec3,
    interior: DVec3,
) {
    let sole_a = shape.point(2, a);
    let sole_b = shape.point(2, b);
    let instep_a = shape.point(1, a);
    let instep_b = shape.point(1, b);

    let uvs = [DVec2::new(0.3, 0.0), DVec2::new(0.7, 0.0), DVec2::new(0.5, 0.5)];
    for [p, q] in [
        [sole_a, sole_b],
        [sole_b, instep_b],
        [instep_b, instep_a],
        [instep_a, sole_a],
    ] {
        builder.add_tri_face_outward([p, q, apex], uvs, interior);
    }
}

// =============================================================================
// SHOULDER JOINT
// =============================================================================

/// Faceted sphere covering the seam between torso and upper arm.
#[derive(Debug, Clone, Copy)]
pub struct ShoulderJointGenerator {
    pub subdivisions: u32,
}

impl ShoulderJointGenerator {
    pub fn new(subdivisions: u32) -> Self {
        Self { subdivisions }
    }

    pub fn radius() -> f64 {
        BASE_ARM_RADIUS * SHOULDER_JOINT_RADIUS_FACTOR
    }
}

impl PartGenerator for ShoulderJointGenerator {
    fn name(&self) -> &'static str {
        "shoulder"
    }

    /// The sphere is centered on the pivot; `extent` is its diameter.
    fn generate(&self, _params: &ShapeParameters) -> Result<PartMesh, FigureError> {
        let radius = Self::radius();
        let mut builder = MeshBuilder::new();
        builder.add_icosphere(DVec3::ZERO, DVec3::splat(radius), self.subdivisions)?;

        Ok(PartMesh {
            mesh: builder.build("Shoulder"),
            extent: radius * 2.0,
        })
    }
}

//! # Head
//!
//! Eight-level lofted skull from crown to chin tip, sampled with eight
//! segments starting at the back of the head (-π/2) so the face sits in the
//! middle of the UV strip. A separate six-vertex nose is attached to the
//! front.
//!
//! Deformation rules:
//! - jaw width changes only the cheek (5) and jaw (6) levels, and nudges
//!   the lateral vertices of those levels outward
//! - chin pointiness changes only the chin tip (7): narrower, shallower
//!   and pushed forward
//! - face profile angle shifts the front half of levels 2..=6, scaled by
//!   how far forward each vertex already sits

use std::f64::consts::{FRAC_PI_2, TAU};

use config::constants::{HEAD_CAP_OFFSET, HEAD_SEGMENTS};
use glam::{DVec2, DVec3};
use lowpoly_mesh::{CapOrientation, MeshBuilder};

use super::{PartGenerator, PartMesh};
use crate::dimensions::BodyDimensions;
use crate::error::FigureError;
use crate::params::ShapeParameters;
use crate::profile::{end_rings, CrossSectionProfile, ProfileLevel};

/// Level heights as fractions of head height, relative to the head center.
const LEVEL_HEIGHTS: [f64; 8] = [0.5, 0.38, 0.25, 0.08, -0.08, -0.22, -0.38, -0.5];

const JAW_LEVELS: std::ops::RangeInclusive<usize> = 5..=6;
const PROFILE_LEVELS: std::ops::RangeInclusive<usize> = 2..=6;
const CHIN_LEVEL: usize = 7;

/// Lateral vertices are those with |cos θ| above this.
const JAW_CORNER_THRESHOLD: f64 = 0.7;

#[derive(Debug, Default, Clone, Copy)]
pub struct HeadGenerator;

impl HeadGenerator {
    /// Head profile for the given head size and face parameters.
    pub fn profile(
        size: DVec3,
        params: &ShapeParameters,
    ) -> Result<CrossSectionProfile, FigureError> {
        let jaw = params.jaw_width;
        let chin = params.chin_pointiness;

        let width_factors = [
            0.55,
            0.85,
            0.95,
            1.0,
            0.95,
            0.75 + jaw * 0.25,
            0.45 + jaw * 0.15,
            0.15 + (1.0 - chin) * 0.15,
        ];
        let depth_factors = [
            0.65,
            0.88,
            0.95,
            1.0,
            0.98,
            0.85 + jaw * 0.1,
            0.65,
            0.35 + (1.0 - chin) * 0.1,
        ];

        let levels = LEVEL_HEIGHTS
            .iter()
            .zip(width_factors.iter().zip(depth_factors.iter()))
            .map(|(&y, (&w, &d))| ProfileLevel::new((y + 0.5) * size.y, size.x * w, size.z * d))
            .collect();

        CrossSectionProfile::new(levels)
    }
}

impl PartGenerator for HeadGenerator {
    fn name(&self) -> &'static str {
        "head"
    }

    fn generate(&self, params: &ShapeParameters) -> Result<PartMesh, FigureError> {
        let size = BodyDimensions::from_params(params).head;
        let (width, height, depth) = (size.x, size.y, size.z);
        let jaw = params.jaw_width;
        let chin = params.chin_pointiness;
        let profile_shift = params.face_profile_angle * depth * 0.3;

        let mut builder = MeshBuilder::new();
        let profile = Self::profile(size, params)?;

        let rings = profile.loft(&mut builder, HEAD_SEGMENTS, -FRAC_PI_2, |p| {
            let mut pos = p.base;
            let lateral = p.angle.cos().abs();

            if JAW_LEVELS.contains(&p.level) && lateral > JAW_CORNER_THRESHOLD {
                pos.x += pos.x.signum() * jaw * 0.015 * lateral;
            }

            if PROFILE_LEVELS.contains(&p.level) && pos.z > 0.0 {
                pos.z += profile_shift * (pos.z / (p.section.depth * 0.5 + 0.001));
            }

            if p.level == CHIN_LEVEL {
                pos.z += chin * 0.01;
            }

            let u = (p.angle + FRAC_PI_2) / TAU;
            (pos, DVec2::new(u, pos.y / height))
        })?;

        let (top, bottom) = end_rings(&rings)?;

        builder.add_cap(
            top,
            DVec3::new(0.0, height + HEAD_CAP_OFFSET, -depth * 0.05),
            DVec2::new(0.5, 1.0),
            CapOrientation::Top,
        )?;
        builder.add_cap(
            bottom,
            DVec3::new(0.0, -HEAD_CAP_OFFSET, depth * (0.05 + chin * 0.08)),
            DVec2::new(0.5, 0.0),
            CapOrientation::Bottom,
        )?;

        add_nose(&mut builder, params, height, depth);

        log::trace!("head {width:.3}x{height:.3}x{depth:.3}");

        Ok(PartMesh {
            mesh: builder.build("Head"),
            extent: height,
        })
    }
}

/// Six-vertex wedge on the face, built from separate triangles.
fn add_nose(
    builder: &mut MeshBuilder,
    params: &ShapeParameters,
    head_height: f64,
    head_depth: f64,
) {
    let length = 0.025 * params.nose_length;
    let width = 0.022 * params.nose_width;
    let height = 0.035 * params.nose_length;

    let y = head_height * (params.nose_height * 0.15 - 0.05) + head_height * 0.5;
    let z = head_depth * 0.48;

    let tip = DVec3::new(0.0, y - height * 0.3, z + length);
    let top = DVec3::new(0.0, y + height * 0.5, z + length * 0.4);
    let left_base = DVec3::new(-width * 0.5, y - height * 0.5, z);
    let right_base = DVec3::new(width * 0.5, y - height * 0.5, z);
    let left_top = DVec3::new(-width * 0.3, y + height * 0.3, z);
    let right_top = DVec3::new(width * 0.3, y + height * 0.3, z);

    let uv_tip = DVec2::new(0.5, 0.4);
    let uv_top = DVec2::new(0.5, 0.55);
    let uv_left_base = DVec2::new(0.45, 0.35);
    let uv_right_base = DVec2::new(0.55, 0.35);
    let uv_left_top = DVec2::new(0.47, 0.5);
    let uv_right_top = DVec2::new(0.53, 0.5);

    // Bridge
    builder.add_tri_face([top, left_top, tip], [uv_top, uv_left_top, uv_tip]);
    builder.add_tri_face([top, tip, right_top], [uv_top, uv_tip, uv_right_top]);
    // Sides
    builder.add_tri_face(
        [left_top, left_base, tip],
        [uv_left_top, uv_left_base, uv_tip],
    );
    builder.add_tri_face(
        [right_top, tip, right_base],
        [uv_right_top, uv_tip, uv_right_base],
    );
    // Underside
    builder.add_tri_face(
        [tip, left_base, right_base],
        [uv_tip, uv_left_base, uv_right_base],
    );
}

//! # Torso and Neck
//!
//! The torso is two independent six-segment lofts that meet at the waist
//! only through their placement: the upper half runs from the neck line
//! down to the waist, the lower half from the waist to the crotch. Both
//! halves are capped at both ends.

use config::constants::{BASE_NECK_RADIUS, BASE_TORSO_DEPTH, TORSO_CAP_OFFSET, TORSO_SEGMENTS};
use glam::{DVec2, DVec3};
use lowpoly_mesh::{CapOrientation, MeshBuilder};

use super::{PartGenerator, PartMesh};
use crate::dimensions::BodyDimensions;
use crate::error::FigureError;
use crate::params::ShapeParameters;
use crate::profile::{end_rings, CrossSectionProfile, ProfileLevel};

#[derive(Debug, Default, Clone, Copy)]
pub struct UpperTorsoGenerator;

#[derive(Debug, Default, Clone, Copy)]
pub struct LowerTorsoGenerator;

#[derive(Debug, Default, Clone, Copy)]
pub struct NeckGenerator;

/// Builds a profile from (height fraction, width, depth) rows.
fn torso_profile(
    height: f64,
    rows: &[(f64, f64, f64)],
) -> Result<CrossSectionProfile, FigureError> {
    CrossSectionProfile::new(
        rows.iter()
            .map(|&(fraction, width, depth)| ProfileLevel::new(fraction * height, width, depth))
            .collect(),
    )
}

fn loft_torso(profile: &CrossSectionProfile, name: &str) -> Result<PartMesh, FigureError> {
    let mut builder = MeshBuilder::new();
    let last = (profile.len() - 1) as f64;

    let rings = profile.loft(&mut builder, TORSO_SEGMENTS, 0.0, |p| {
        let v = 1.0 - p.level as f64 / last;
        (p.base, DVec2::new(p.around(TORSO_SEGMENTS), v))
    })?;
    let (top, bottom) = end_rings(&rings)?;

    let height = profile.span();
    builder.add_cap(
        top,
        DVec3::new(0.0, height + TORSO_CAP_OFFSET, 0.0),
        DVec2::new(0.5, 1.0),
        CapOrientation::Top,
    )?;
    builder.add_cap(
        bottom,
        DVec3::new(0.0, -TORSO_CAP_OFFSET, 0.0),
        DVec2::new(0.5, 0.0),
        CapOrientation::Bottom,
    )?;

    Ok(PartMesh {
        mesh: builder.build(name),
        extent: height,
    })
}

impl UpperTorsoGenerator {
    pub fn profile(dims: &BodyDimensions) -> Result<CrossSectionProfile, FigureError> {
        let sw = dims.shoulder_span;
        let hw = dims.hip_span;
        let d = BASE_TORSO_DEPTH;

        torso_profile(
            dims.upper_torso,
            &[
                (1.0, sw * 0.35, d * 0.4), // neck line
                (0.85, sw, d),             // shoulders
                (0.6, sw * 0.9, d * 1.1),  // chest
                (0.3, sw * 0.75, d * 0.95),
                (0.0, hw * 0.95, d * 0.9), // waist
            ],
        )
    }
}

impl PartGenerator for UpperTorsoGenerator {
    fn name(&self) -> &'static str {
        "upper torso"
    }

    fn generate(&self, params: &ShapeParameters) -> Result<PartMesh, FigureError> {
        let dims = BodyDimensions::from_params(params);
        loft_torso(&Self::profile(&dims)?, "UpperBody")
    }
}

impl LowerTorsoGenerator {
    pub fn profile(dims: &BodyDimensions) -> Result<CrossSectionProfile, FigureError> {
        let hw = dims.hip_span;
        let d = BASE_TORSO_DEPTH;

        torso_profile(
            dims.lower_torso,
            &[
                (1.0, hw * 0.95, d * 0.9), // waist
                (0.6, hw, d),
                (0.2, hw * 0.95, d * 1.1), // seat
                (0.0, hw * 0.7, d * 0.8),  // crotch
            ],
        )
    }
}

impl PartGenerator for LowerTorsoGenerator {
    fn name(&self) -> &'static str {
        "lower torso"
    }

    fn generate(&self, params: &ShapeParameters) -> Result<PartMesh, FigureError> {
        let dims = BodyDimensions::from_params(params);
        loft_torso(&Self::profile(&dims)?, "LowerBody")
    }
}

impl PartGenerator for NeckGenerator {
    fn name(&self) -> &'static str {
        "neck"
    }

    fn generate(&self, params: &ShapeParameters) -> Result<PartMesh, FigureError> {
        let height = BodyDimensions::from_params(params).neck;

        let mut builder = MeshBuilder::new();
        builder.add_cylinder(
            DVec3::new(0.0, height * 0.5, 0.0),
            BASE_NECK_RADIUS,
            BASE_NECK_RADIUS * 0.9,
            height,
            TORSO_SEGMENTS,
        )?;

        Ok(PartMesh {
            mesh: builder.build("Neck"),
            extent: height,
        })
    }
}

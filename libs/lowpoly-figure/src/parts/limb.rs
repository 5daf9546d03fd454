//! # Limb Segments
//!
//! Upper arm, forearm, thigh and calf share one shape: a four-level,
//! six-segment tube that narrows from the proximal joint to the distal
//! one. Each segment only differs in its length and radius table.

use config::constants::{BASE_ARM_RADIUS, BASE_LEG_RADIUS, LIMB_CAP_OFFSET, LIMB_SEGMENTS};
use glam::{DVec2, DVec3};
use lowpoly_mesh::{CapOrientation, MeshBuilder};

use super::{PartGenerator, PartMesh};
use crate::dimensions::BodyDimensions;
use crate::error::FigureError;
use crate::params::ShapeParameters;
use crate::profile::{end_rings, CrossSectionProfile, ProfileLevel};

const ARM_LEVELS: [f64; 4] = [1.0, 0.65, 0.35, 0.0];
const LEG_LEVELS: [f64; 4] = [1.0, 0.6, 0.35, 0.0];

/// Which limb segment to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimbSegment {
    UpperArm,
    Forearm,
    Thigh,
    Calf,
}

impl LimbSegment {
    /// Segment length for the given body.
    pub fn length(self, dims: &BodyDimensions) -> f64 {
        match self {
            LimbSegment::UpperArm => dims.upper_arm,
            LimbSegment::Forearm => dims.forearm,
            LimbSegment::Thigh => dims.thigh,
            LimbSegment::Calf => dims.calf,
        }
    }

    /// Ring radii from the proximal end down.
    pub fn radii(self) -> [f64; 4] {
        let (base, table) = match self {
            LimbSegment::UpperArm => (BASE_ARM_RADIUS, [1.4, 1.1, 1.045, 0.9]),
            LimbSegment::Forearm => (BASE_ARM_RADIUS, [0.95, 0.85, 0.8075, 0.7]),
            LimbSegment::Thigh => (BASE_LEG_RADIUS, [1.4, 1.15, 1.035, 0.85]),
            LimbSegment::Calf => (BASE_LEG_RADIUS, [0.95, 0.85, 0.765, 0.55]),
        };
        table.map(|factor| base * factor)
    }

    fn levels(self) -> [f64; 4] {
        match self {
            LimbSegment::UpperArm | LimbSegment::Forearm => ARM_LEVELS,
            LimbSegment::Thigh | LimbSegment::Calf => LEG_LEVELS,
        }
    }

    fn mesh_name(self) -> &'static str {
        match self {
            LimbSegment::UpperArm => "UpperArm",
            LimbSegment::Forearm => "Forearm",
            LimbSegment::Thigh => "Thigh",
            LimbSegment::Calf => "Calf",
        }
    }
}

/// Tapered tube generator for one [`LimbSegment`].
#[derive(Debug, Clone, Copy)]
pub struct LimbGenerator {
    pub segment: LimbSegment,
}

impl LimbGenerator {
    pub fn new(segment: LimbSegment) -> Self {
        Self { segment }
    }

    pub fn profile(&self, length: f64) -> Result<CrossSectionProfile, FigureError> {
        let levels = self
            .segment
            .levels()
            .iter()
            .zip(self.segment.radii())
            .map(|(&fraction, radius)| ProfileLevel::round(fraction * length, radius))
            .collect();
        CrossSectionProfile::new(levels)
    }
}

impl PartGenerator for LimbGenerator {
    fn name(&self) -> &'static str {
        self.segment.mesh_name()
    }

    fn generate(&self, params: &ShapeParameters) -> Result<PartMesh, FigureError> {
        let length = self.segment.length(&BodyDimensions::from_params(params));
        let profile = self.profile(length)?;

        let mut builder = MeshBuilder::new();
        let rings = profile.loft(&mut builder, LIMB_SEGMENTS, 0.0, |p| {
            let v = p.section.offset / length;
            (p.base, DVec2::new(p.around(LIMB_SEGMENTS), v))
        })?;
        let (top, bottom) = end_rings(&rings)?;

        builder.add_cap(
            top,
            DVec3::new(0.0, length + LIMB_CAP_OFFSET, 0.0),
            DVec2::new(0.5, 1.0),
            CapOrientation::Top,
        )?;
        builder.add_cap(
            bottom,
            DVec3::new(0.0, -LIMB_CAP_OFFSET, 0.0),
            DVec2::new(0.5, 0.0),
            CapOrientation::Bottom,
        )?;

        Ok(PartMesh {
            mesh: builder.build(self.segment.mesh_name()),
            extent: length,
        })
    }
}

//! Medium hair: falls to just below the ears.

use config::constants::HAIR_SEGMENTS;
use glam::{DVec2, DVec3};
use lowpoly_mesh::{CapOrientation, MeshBuilder};

use super::{ring_u, HairFrame, START_ANGLE};
use crate::error::FigureError;
use crate::params::ShapeParameters;
use crate::parts::{PartGenerator, PartMesh};
use crate::profile::end_rings;

/// Levels up to this one stop at the forehead.
const FOREHEAD_LEVELS: usize = 2;

#[derive(Debug, Default, Clone, Copy)]
pub struct MediumHair;

impl PartGenerator for MediumHair {
    fn name(&self) -> &'static str {
        "medium hair"
    }

    fn generate(&self, params: &ShapeParameters) -> Result<PartMesh, FigureError> {
        let frame = HairFrame::new(params);
        let h = frame.height;
        let offset = 0.015 * frame.volume;
        let hair_length = 0.08 + frame.length * 0.06;

        let profile = frame.shell(
            offset,
            &[
                (h * 0.55, 0.55, 0.65),
                (h * 0.35, 1.0, 0.95),
                (h * 0.1, 1.05, 1.0),
                (-h * 0.1, 1.0, 1.0),
                (-h * 0.3 - hair_length, 0.9, 0.95),
            ],
        )?;

        let forehead = frame.depth * 0.35;
        let mut builder = MeshBuilder::new();
        let rings = profile.loft(&mut builder, HAIR_SEGMENTS, START_ANGLE, |p| {
            let mut pos = p.base;
            if p.level <= FOREHEAD_LEVELS {
                pos.z = pos.z.min(forehead);
            }
            (pos, DVec2::new(ring_u(p.angle), pos.y / h))
        })?;

        let (crown, _) = end_rings(&rings)?;
        builder.add_cap(
            crown,
            DVec3::new(0.0, frame.y(h * 0.58), -frame.depth * 0.1),
            DVec2::new(0.5, 1.0),
            CapOrientation::Top,
        )?;

        Ok(frame.finish(builder))
    }
}

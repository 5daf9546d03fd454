//! Slicked-back hair: a shell swept toward the back of the head, whose
//! lowest ring trails further back and down as hair length grows.

use config::constants::HAIR_SEGMENTS;
use glam::{DVec2, DVec3};
use lowpoly_mesh::{CapOrientation, MeshBuilder};

use super::{ring_u, HairFrame, START_ANGLE};
use crate::error::FigureError;
use crate::params::ShapeParameters;
use crate::parts::{PartGenerator, PartMesh};
use crate::profile::end_rings;

const FOREHEAD_LEVELS: usize = 1;

#[derive(Debug, Default, Clone, Copy)]
pub struct SlickedHair;

impl PartGenerator for SlickedHair {
    fn name(&self) -> &'static str {
        "slicked hair"
    }

    fn generate(&self, params: &ShapeParameters) -> Result<PartMesh, FigureError> {
        let frame = HairFrame::new(params);
        let h = frame.height;
        let offset = 0.01 * frame.volume;
        let back = frame.length * 0.1;

        let profile = frame.shell(
            offset,
            &[
                (h * 0.52, 0.6, 0.7),
                (h * 0.4, 0.9, 0.95),
                (h * 0.2, 1.0, 1.05),
                (0.0, 0.95, 1.1),
                (-h * 0.15 - back, 0.85, 1.0 + frame.length * 0.1),
            ],
        )?;
        let z_offsets = [-0.02, -0.01, 0.0, 0.01, 0.02 - back * 0.3];

        let forehead = frame.depth * 0.4;
        let mut builder = MeshBuilder::new();
        let rings = profile.loft(&mut builder, HAIR_SEGMENTS, START_ANGLE, |p| {
            let mut pos = p.base;
            pos.z += z_offsets[p.level];
            if p.level <= FOREHEAD_LEVELS {
                pos.z = pos.z.min(forehead);
            }
            (pos, DVec2::new(ring_u(p.angle), pos.y / h))
        })?;

        let (crown, _) = end_rings(&rings)?;
        builder.add_cap(
            crown,
            DVec3::new(0.0, frame.y(h * 0.54), -frame.depth * 0.15),
            DVec2::new(0.5, 1.0),
            CapOrientation::Top,
        )?;

        Ok(frame.finish(builder))
    }
}

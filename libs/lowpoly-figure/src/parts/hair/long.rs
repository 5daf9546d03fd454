//! Long hair: a ten-segment shell down to the shoulders, closed at the tips.

use config::constants::LONG_HAIR_SEGMENTS;
use glam::{DVec2, DVec3};
use lowpoly_mesh::{CapOrientation, MeshBuilder};

use super::{ring_u, HairFrame, START_ANGLE};
use crate::error::FigureError;
use crate::params::ShapeParameters;
use crate::parts::{PartGenerator, PartMesh};
use crate::profile::end_rings;

const FOREHEAD_LEVELS: usize = 2;

#[derive(Debug, Default, Clone, Copy)]
pub struct LongHair;

impl PartGenerator for LongHair {
    fn name(&self) -> &'static str {
        "long hair"
    }

    fn generate(&self, params: &ShapeParameters) -> Result<PartMesh, FigureError> {
        let frame = HairFrame::new(params);
        let h = frame.height;
        let offset = 0.02 * frame.volume;
        let hair_length = 0.15 + frame.length * 0.15;
        let tips = -h * 0.5 - hair_length;

        let profile = frame.shell(
            offset,
            &[
                (h * 0.55, 0.5, 0.6),
                (h * 0.35, 1.0, 0.95),
                (h * 0.1, 1.1, 1.0),
                (-h * 0.15, 1.1, 1.0),
                (-h * 0.35, 1.05, 0.95),
                (-h * 0.5 - hair_length * 0.5, 0.95, 0.85),
                (tips, 0.8, 0.7),
            ],
        )?;

        // V runs from the tips (0) to the crown of the head (1)
        let v_span = h + hair_length;
        let forehead = frame.depth * 0.4;
        let mut builder = MeshBuilder::new();
        let rings = profile.loft(&mut builder, LONG_HAIR_SEGMENTS, START_ANGLE, |p| {
            let mut pos = p.base;
            if p.level <= FOREHEAD_LEVELS {
                pos.z = pos.z.min(forehead);
            }
            (pos, DVec2::new(ring_u(p.angle), (pos.y + hair_length) / v_span))
        })?;

        let (crown, ends) = end_rings(&rings)?;
        builder.add_cap(
            crown,
            DVec3::new(0.0, frame.y(h * 0.58), -frame.depth * 0.1),
            DVec2::new(0.5, 1.0),
            CapOrientation::Top,
        )?;
        builder.add_cap(
            ends,
            DVec3::new(0.0, frame.y(tips) - 0.01, -frame.depth * 0.2),
            DVec2::new(0.5, 0.0),
            CapOrientation::Bottom,
        )?;

        Ok(frame.finish(builder))
    }
}

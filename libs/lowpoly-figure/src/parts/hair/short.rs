//! Short hair: a three-level cap that stops at the hairline in front.

use std::f64::consts::{FRAC_PI_2, PI};

use config::constants::HAIR_SEGMENTS;
use glam::{DVec2, DVec3};
use lowpoly_mesh::{CapOrientation, MeshBuilder};

use super::{ring_u, HairFrame, START_ANGLE};
use crate::error::FigureError;
use crate::params::ShapeParameters;
use crate::parts::{PartGenerator, PartMesh};
use crate::profile::end_rings;

/// Vertices this close to the face direction are held at the hairline.
const FRONT_HALF_ANGLE: f64 = PI * 0.3;

#[derive(Debug, Default, Clone, Copy)]
pub struct ShortHair;

impl PartGenerator for ShortHair {
    fn name(&self) -> &'static str {
        "short hair"
    }

    fn generate(&self, params: &ShapeParameters) -> Result<PartMesh, FigureError> {
        let frame = HairFrame::new(params);
        let h = frame.height;
        let offset = 0.01 * frame.volume;
        let top = h * 0.5 + offset;
        let bottom_extend = frame.length * 0.08;

        let profile = frame.shell(
            offset,
            &[
                (top + 0.02, 0.5, 0.6),
                (h * 0.35, 0.95, 0.9),
                (h * 0.15 - bottom_extend, 1.0, 0.95),
            ],
        )?;

        let hairline = frame.depth * 0.3;
        let mut builder = MeshBuilder::new();
        let rings = profile.loft(&mut builder, HAIR_SEGMENTS, START_ANGLE, |p| {
            let mut pos = p.base;
            if (p.angle - FRAC_PI_2).abs() < FRONT_HALF_ANGLE {
                pos.z = pos.z.min(hairline);
            }
            (pos, DVec2::new(ring_u(p.angle), pos.y / h))
        })?;

        let (crown, _) = end_rings(&rings)?;
        builder.add_cap(
            crown,
            DVec3::new(0.0, frame.y(top + 0.03), -frame.depth * 0.1),
            DVec2::new(0.5, 1.0),
            CapOrientation::Top,
        )?;

        Ok(frame.finish(builder))
    }
}

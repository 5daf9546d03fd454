//! Spiky hair: a flat base ring fanned shut at the crown, with separate
//! three-sided spikes fanned across the top and back of the head.

use std::f64::consts::{PI, TAU};

use config::constants::{HAIR_SEGMENTS, SPIKE_COUNT};
use glam::{DVec2, DVec3};
use lowpoly_mesh::{CapOrientation, MeshBuilder};

use super::{ring_u, HairFrame, START_ANGLE};
use crate::error::FigureError;
use crate::params::ShapeParameters;
use crate::parts::{PartGenerator, PartMesh};

/// Half side of each spike's triangular footprint.
const SPIKE_BASE: f64 = 0.025;

#[derive(Debug, Default, Clone, Copy)]
pub struct SpikyHair;

impl SpikyHair {
    /// Angular slot of spike `i`: six slots stepping 45° from -135° to +90°.
    pub fn spike_angle(i: usize) -> f64 {
        i as f64 / SPIKE_COUNT as f64 * PI * 1.5 - PI * 0.75
    }
}

impl PartGenerator for SpikyHair {
    fn name(&self) -> &'static str {
        "spiky hair"
    }

    fn generate(&self, params: &ShapeParameters) -> Result<PartMesh, FigureError> {
        let frame = HairFrame::new(params);
        let (w, h, d) = (frame.width, frame.height, frame.depth);
        let offset = 0.01 * frame.volume;
        let spike_height = 0.04 * frame.volume + frame.length * 0.04;
        let base_y = frame.y(h * 0.3);
        let top_y = frame.y(h * 0.5 + offset);

        let mut builder = MeshBuilder::new();

        // Base ring, held back at the forehead
        let ring_w = (w + offset * 2.0) * 0.95;
        let ring_d = (d + offset * 2.0) * 0.9;
        let forehead = d * 0.35;
        let ring: Vec<u32> = (0..HAIR_SEGMENTS)
            .map(|seg| {
                let angle = START_ANGLE + seg as f64 / HAIR_SEGMENTS as f64 * TAU;
                let x = angle.cos() * ring_w * 0.5;
                let z = (angle.sin() * ring_d * 0.5).min(forehead);
                builder.add_vertex(DVec3::new(x, base_y, z), DVec2::new(ring_u(angle), 0.3))
            })
            .collect();

        builder.add_cap(
            &ring,
            DVec3::new(0.0, top_y, -d * 0.05),
            DVec2::new(0.5, 0.8),
            CapOrientation::Top,
        )?;

        let uv_tip = DVec2::new(0.5, 1.0);
        let uv_base = DVec2::new(0.5, 0.5);
        for i in 0..SPIKE_COUNT {
            let angle = Self::spike_angle(i);
            let (sin, cos) = angle.sin_cos();
            let x = cos * w * 0.4 * 0.3;
            let z = sin * d * 0.25 - d * 0.1;

            let tip = DVec3::new(
                x + cos * spike_height * 0.5,
                top_y + spike_height,
                z + sin * spike_height * 0.3,
            );
            let b1 = DVec3::new(x - SPIKE_BASE, top_y, z);
            let b2 = DVec3::new(x + SPIKE_BASE, top_y, z);
            let b3 = DVec3::new(x, top_y, z - SPIKE_BASE);

            builder.add_tri_face([tip, b1, b2], [uv_tip, uv_base, uv_base]);
            builder.add_tri_face([tip, b2, b3], [uv_tip, uv_base, uv_base]);
            builder.add_tri_face([tip, b3, b1], [uv_tip, uv_base, uv_base]);
            builder.add_tri_face([b1, b3, b2], [uv_base; 3]);
        }

        Ok(frame.finish(builder))
    }
}

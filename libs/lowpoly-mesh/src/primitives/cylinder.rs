//! # Cylinder Primitive
//!
//! Capped cylinder or cone frustum along the Y axis.

use std::f64::consts::TAU;

use config::constants::MIN_CYLINDER_SEGMENTS;
use glam::{DVec2, DVec3};

use super::require_positive;
use crate::builder::{CapOrientation, MeshBuilder};
use crate::error::MeshError;

impl MeshBuilder {
    /// Appends a capped cylinder centered at `center`.
    ///
    /// # Arguments
    ///
    /// * `bottom_radius` / `top_radius` - Ring radii (equal for a true cylinder)
    /// * `height` - Extent along Y, split evenly around `center`
    /// * `segments` - Ring vertex count, at least 4
    ///
    /// # Returns
    ///
    /// `2 * segments` ring vertices plus two cap centers, and
    /// `4 * segments` triangles.
    pub fn add_cylinder(
        &mut self,
        center: DVec3,
        bottom_radius: f64,
        top_radius: f64,
        height: f64,
        segments: usize,
    ) -> Result<(), MeshError> {
        require_positive("cylinder bottom radius", bottom_radius)?;
        require_positive("cylinder top radius", top_radius)?;
        require_positive("cylinder height", height)?;

        if segments < MIN_CYLINDER_SEGMENTS {
            return Err(MeshError::invalid_argument(format!(
                "cylinder needs at least {MIN_CYLINDER_SEGMENTS} segments, got {segments}"
            )));
        }

        let half = height / 2.0;
        let top = self.cylinder_ring(center + DVec3::Y * half, top_radius, segments, 1.0);
        let bottom = self.cylinder_ring(center - DVec3::Y * half, bottom_radius, segments, 0.0);

        self.connect_rings(&top, &bottom, segments)?;
        self.add_cap(
            &top,
            center + DVec3::Y * half,
            DVec2::new(0.5, 1.0),
            CapOrientation::Top,
        )?;
        self.add_cap(
            &bottom,
            center - DVec3::Y * half,
            DVec2::new(0.5, 0.0),
            CapOrientation::Bottom,
        )?;
        Ok(())
    }

    fn cylinder_ring(&mut self, center: DVec3, radius: f64, segments: usize, v: f64) -> Vec<u32> {
        (0..segments)
            .map(|i| {
                let t = i as f64 / segments as f64;
                let angle = t * TAU;
                let offset = DVec3::new(angle.cos() * radius, 0.0, angle.sin() * radius);
                self.add_vertex(center + offset, DVec2::new(t, v))
            })
            .collect()
    }
}

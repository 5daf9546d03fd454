//! # Box Primitives
//!
//! Axis-aligned box and tapered box. Each face gets its own four vertices
//! so the faceted shading stays flat and every face carries a full UV quad.

use glam::{DVec2, DVec3};

use super::require_positive;
use crate::builder::MeshBuilder;
use crate::error::MeshError;

const FACE_UVS: [DVec2; 4] = [
    DVec2::new(0.0, 0.0),
    DVec2::new(1.0, 0.0),
    DVec2::new(1.0, 1.0),
    DVec2::new(0.0, 1.0),
];

impl MeshBuilder {
    /// Appends an axis-aligned box centered at `center`.
    ///
    /// # Returns
    ///
    /// 24 vertices and 12 triangles (2 per face).
    ///
    /// # Example
    ///
    /// ```rust
    /// use lowpoly_mesh::MeshBuilder;
    /// use glam::DVec3;
    ///
    /// let mut builder = MeshBuilder::new();
    /// builder.add_box(DVec3::ZERO, DVec3::splat(2.0)).unwrap();
    /// let mesh = builder.build("Box");
    /// assert_eq!(mesh.triangle_count(), 12);
    /// ```
    pub fn add_box(&mut self, center: DVec3, size: DVec3) -> Result<(), MeshError> {
        self.add_tapered_box(
            center,
            DVec2::new(size.x, size.z),
            DVec2::new(size.x, size.z),
            size.y,
        )
    }

    /// Appends a box whose bottom and top rectangles are sized independently.
    ///
    /// `bottom` and `top` are (width along X, depth along Z).
    pub fn add_tapered_box(
        &mut self,
        center: DVec3,
        bottom: DVec2,
        top: DVec2,
        height: f64,
    ) -> Result<(), MeshError> {
        require_positive("box bottom width", bottom.x)?;
        require_positive("box bottom depth", bottom.y)?;
        require_positive("box top width", top.x)?;
        require_positive("box top depth", top.y)?;
        require_positive("box height", height)?;

        let corners = |half: DVec2, y: f64| {
            [
                center + DVec3::new(-half.x, y, -half.y),
                center + DVec3::new(half.x, y, -half.y),
                center + DVec3::new(half.x, y, half.y),
                center + DVec3::new(-half.x, y, half.y),
            ]
        };
        let [b0, b1, b2, b3] = corners(bottom / 2.0, -height / 2.0);
        let [t0, t1, t2, t3] = corners(top / 2.0, height / 2.0);

        // Counter-clockwise seen from outside
        let faces = [
            [b0, b1, b2, b3], // bottom (-Y)
            [t0, t3, t2, t1], // top (+Y)
            [b3, b2, t2, t3], // front (+Z)
            [b1, b0, t0, t1], // back (-Z)
            [b2, b1, t1, t2], // right (+X)
            [b0, b3, t3, t0], // left (-X)
        ];

        for face in faces {
            self.add_quad_face(face, FACE_UVS);
        }
        Ok(())
    }
}

//! # Sphere Primitive
//!
//! Low-poly sphere built by subdividing an octahedron. Each pass splits
//! every triangle into four and pushes the new midpoints onto the unit
//! sphere. Midpoints are cached per undirected edge so neighbouring
//! triangles share them.

use std::collections::HashMap;

use config::constants::{MAX_SPHERE_SUBDIVISIONS, MIN_SPHERE_SUBDIVISIONS};
use glam::{DVec2, DVec3};

use super::require_positive;
use crate::builder::MeshBuilder;
use crate::error::MeshError;

const OCTAHEDRON_VERTICES: [DVec3; 6] = [
    DVec3::new(0.0, 1.0, 0.0),
    DVec3::new(0.0, -1.0, 0.0),
    DVec3::new(1.0, 0.0, 0.0),
    DVec3::new(-1.0, 0.0, 0.0),
    DVec3::new(0.0, 0.0, 1.0),
    DVec3::new(0.0, 0.0, -1.0),
];

const OCTAHEDRON_FACES: [[u32; 3]; 8] = [
    [0, 4, 2],
    [0, 2, 5],
    [0, 5, 3],
    [0, 3, 4],
    [1, 2, 4],
    [1, 5, 2],
    [1, 3, 5],
    [1, 4, 3],
];

/// Unit-sphere geometry shared by every sphere of one subdivision depth.
struct UnitSphere {
    points: Vec<DVec3>,
    faces: Vec<[u32; 3]>,
    midpoints: HashMap<(u32, u32), u32>,
}

impl UnitSphere {
    fn octahedron() -> Self {
        Self {
            points: OCTAHEDRON_VERTICES.to_vec(),
            faces: OCTAHEDRON_FACES.to_vec(),
            midpoints: HashMap::new(),
        }
    }

    fn midpoint(&mut self, a: u32, b: u32) -> u32 {
        let key = (a.min(b), a.max(b));
        if let Some(&index) = self.midpoints.get(&key) {
            return index;
        }

        let mid = (self.points[a as usize] + self.points[b as usize]).normalize();
        let index = self.points.len() as u32;
        self.points.push(mid);
        self.midpoints.insert(key, index);
        index
    }

    fn subdivide(&mut self) {
        let faces = std::mem::take(&mut self.faces);
        self.faces.reserve(faces.len() * 4);

        for [f0, f1, f2] in faces {
            let m01 = self.midpoint(f0, f1);
            let m12 = self.midpoint(f1, f2);
            let m20 = self.midpoint(f2, f0);

            self.faces.push([f0, m01, m20]);
            self.faces.push([m01, f1, m12]);
            self.faces.push([m20, m12, f2]);
            self.faces.push([m01, m12, m20]);
        }
    }
}

impl MeshBuilder {
    /// Appends a faceted sphere or ellipsoid.
    ///
    /// `radius` holds the semi-axes along X, Y and Z. `subdivisions` is
    /// clamped to `1..=3`; depth 1, 2 and 3 give 18, 66 and 258 vertices.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lowpoly_mesh::MeshBuilder;
    /// use glam::DVec3;
    ///
    /// let mut builder = MeshBuilder::new();
    /// builder.add_icosphere(DVec3::ZERO, DVec3::splat(1.0), 1).unwrap();
    /// let mesh = builder.build("Sphere");
    /// assert_eq!(mesh.vertex_count(), 18);
    /// assert_eq!(mesh.triangle_count(), 32);
    /// ```
    pub fn add_icosphere(
        &mut self,
        center: DVec3,
        radius: DVec3,
        subdivisions: u32,
    ) -> Result<(), MeshError> {
        require_positive("sphere radius x", radius.x)?;
        require_positive("sphere radius y", radius.y)?;
        require_positive("sphere radius z", radius.z)?;

        let depth = subdivisions.clamp(MIN_SPHERE_SUBDIVISIONS, MAX_SPHERE_SUBDIVISIONS);
        let mut sphere = UnitSphere::octahedron();
        for _ in 0..depth {
            sphere.subdivide();
        }

        let base = self.vertex_count() as u32;
        for p in &sphere.points {
            let uv = DVec2::new((p.x + 1.0) * 0.5, (p.y + 1.0) * 0.5);
            // Ellipsoid normal is the gradient of the implicit surface
            let normal = *p / radius;
            self.add_vertex_with_normal(center + *p * radius, uv, normal);
        }

        for [a, b, c] in sphere.faces {
            self.add_triangle(base + a, base + b, base + c)?;
        }
        Ok(())
    }
}

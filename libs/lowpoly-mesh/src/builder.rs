//! # Mesh Builder
//!
//! Append-only accumulator for vertices, texture coordinates and triangles.
//! Ring lofting ([`MeshBuilder::connect_rings`]) and fan caps
//! ([`MeshBuilder::add_cap`]) are the two operations every part generator
//! is made of; the primitive constructors live in [`crate::primitives`].

use config::constants::MIN_RING_SEGMENTS;
use glam::{DVec2, DVec3};

use crate::error::MeshError;
use crate::mesh::{averaged_normals, face_normal, Mesh};

/// Which end of a lofted tube a cap closes.
///
/// Profiles run from the top level down, so a `Top` cap faces +Y and a
/// `Bottom` cap faces -Y for a vertical tube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapOrientation {
    /// Closes the first ring of a profile.
    Top,
    /// Closes the last ring of a profile.
    Bottom,
}

/// Accumulates geometry for one mesh.
///
/// Vertices are never deduplicated. Ring seams share vertices only where
/// the caller passes the same indices twice.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    vertices: Vec<DVec3>,
    uvs: Vec<DVec2>,
    normals: Vec<Option<DVec3>>,
    triangles: Vec<[u32; 3]>,
}

impl MeshBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices added so far.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles added so far.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Appends a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3, uv: DVec2) -> u32 {
        self.push_vertex(position, uv, None)
    }

    /// Appends a vertex carrying an explicit normal.
    pub fn add_vertex_with_normal(&mut self, position: DVec3, uv: DVec2, normal: DVec3) -> u32 {
        self.push_vertex(position, uv, Some(normal.normalize_or_zero()))
    }

    fn push_vertex(&mut self, position: DVec3, uv: DVec2, normal: Option<DVec3>) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.uvs.push(uv);
        self.normals.push(normal);
        index
    }

    /// Records a triangle from existing vertex indices.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::IndexOutOfRange`] if any index has not been
    /// added yet.
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) -> Result<(), MeshError> {
        self.check_indices(&[i0, i1, i2])?;
        self.triangles.push([i0, i1, i2]);
        Ok(())
    }

    /// Records a quad as the triangles (i0, i1, i2) and (i0, i2, i3).
    ///
    /// Nothing is recorded if any index is out of range.
    pub fn add_quad(&mut self, i0: u32, i1: u32, i2: u32, i3: u32) -> Result<(), MeshError> {
        self.check_indices(&[i0, i1, i2, i3])?;
        self.triangles.push([i0, i1, i2]);
        self.triangles.push([i0, i2, i3]);
        Ok(())
    }

    /// Fails on the first index that does not name an added vertex.
    fn check_indices(&self, indices: &[u32]) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();
        match indices.iter().find(|&&index| index as usize >= vertex_count) {
            Some(&index) => Err(MeshError::IndexOutOfRange {
                index,
                vertex_count,
            }),
            None => Ok(()),
        }
    }

    /// Adds a triangle made of three fresh vertices.
    pub fn add_tri_face(&mut self, positions: [DVec3; 3], uvs: [DVec2; 3]) -> [u32; 3] {
        let indices = [0, 1, 2].map(|k| self.add_vertex(positions[k], uvs[k]));
        self.triangles.push(indices);
        indices
    }

    /// Adds a triangle of fresh vertices wound away from `interior`.
    ///
    /// Used for one-off wedges whose corner order depends on the side of
    /// the body they sit on.
    pub fn add_tri_face_outward(
        &mut self,
        positions: [DVec3; 3],
        uvs: [DVec2; 3],
        interior: DVec3,
    ) -> [u32; 3] {
        let centroid = (positions[0] + positions[1] + positions[2]) / 3.0;
        let normal = (positions[1] - positions[0]).cross(positions[2] - positions[0]);

        if normal.dot(centroid - interior) < 0.0 {
            self.add_tri_face(
                [positions[0], positions[2], positions[1]],
                [uvs[0], uvs[2], uvs[1]],
            )
        } else {
            self.add_tri_face(positions, uvs)
        }
    }

    /// Adds a quad made of four fresh vertices.
    pub fn add_quad_face(&mut self, positions: [DVec3; 4], uvs: [DVec2; 4]) -> [u32; 4] {
        let [i0, i1, i2, i3] = [0, 1, 2, 3].map(|k| self.add_vertex(positions[k], uvs[k]));
        self.triangles.push([i0, i1, i2]);
        self.triangles.push([i0, i2, i3]);
        [i0, i1, i2, i3]
    }

    /// Lofts a band of quads between two rings.
    ///
    /// For each segment i this emits quad(a[i], a[i+1], b[i+1], b[i]) with
    /// indices taken modulo the ring size. With rings at ascending angle
    /// and `ring_a` above `ring_b` the faces point outward.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::RingMismatch`] if either ring does not hold
    /// exactly `segment_count` indices, [`MeshError::InvalidArgument`]
    /// for fewer than three segments and [`MeshError::IndexOutOfRange`]
    /// for an unknown vertex. The builder is left untouched on error.
    pub fn connect_rings(
        &mut self,
        ring_a: &[u32],
        ring_b: &[u32],
        segment_count: usize,
    ) -> Result<(), MeshError> {
        check_ring(ring_a, segment_count)?;
        check_ring(ring_b, segment_count)?;
        self.check_indices(ring_a)?;
        self.check_indices(ring_b)?;

        for i in 0..segment_count {
            let next = (i + 1) % segment_count;
            self.triangles.push([ring_a[i], ring_a[next], ring_b[next]]);
            self.triangles.push([ring_a[i], ring_b[next], ring_b[i]]);
        }
        Ok(())
    }

    /// Closes a ring with a triangle fan around a new center vertex.
    ///
    /// Returns the index of the center vertex. The fan always has one
    /// triangle per ring vertex.
    pub fn add_cap(
        &mut self,
        ring: &[u32],
        center: DVec3,
        center_uv: DVec2,
        orientation: CapOrientation,
    ) -> Result<u32, MeshError> {
        check_ring(ring, ring.len())?;
        self.check_indices(ring)?;
        let hub = self.add_vertex(center, center_uv);

        let n = ring.len();
        for i in 0..n {
            let next = ring[(i + 1) % n];
            self.triangles.push(match orientation {
                CapOrientation::Top => [hub, next, ring[i]],
                CapOrientation::Bottom => [hub, ring[i], next],
            });
        }
        Ok(hub)
    }

    /// Position of an already added vertex.
    #[inline]
    pub fn position(&self, index: u32) -> Option<DVec3> {
        self.vertices.get(index as usize).copied()
    }

    /// Finalizes the accumulated geometry into an immutable [`Mesh`].
    ///
    /// Explicit normals are kept only when every vertex supplied one;
    /// otherwise normals are the normalized sum of adjacent face normals.
    pub fn build(self, name: impl Into<String>) -> Mesh {
        let explicit: Option<Vec<DVec3>> = if self.normals.is_empty() {
            None
        } else {
            self.normals.iter().copied().collect()
        };

        let normals = explicit.unwrap_or_else(|| averaged_normals(&self.vertices, &self.triangles));

        Mesh::from_parts(name.into(), self.vertices, self.uvs, self.triangles, normals)
    }

    /// Area-weighted normal of a recorded triangle.
    pub fn triangle_normal(&self, triangle: usize) -> Option<DVec3> {
        self.triangles
            .get(triangle)
            .map(|tri| face_normal(&self.vertices, tri))
    }
}

fn check_ring(ring: &[u32], segment_count: usize) -> Result<(), MeshError> {
    if segment_count < MIN_RING_SEGMENTS {
        return Err(MeshError::invalid_argument(format!(
            "a ring needs at least {MIN_RING_SEGMENTS} segments, got {segment_count}"
        )));
    }
    if ring.len() != segment_count {
        return Err(MeshError::RingMismatch {
            expected: segment_count,
            found: ring.len(),
        });
    }
    Ok(())
}

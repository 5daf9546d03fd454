//! # Mesh Data Structure
//!
//! Immutable triangle mesh with positions, texture coordinates and
//! per-vertex normals, as emitted by [`MeshBuilder::build`].
//!
//! [`MeshBuilder::build`]: crate::MeshBuilder::build

use std::collections::HashMap;

use config::constants::DEGENERATE_AREA_EPSILON;
use glam::{DVec2, DVec3};

use crate::error::MeshError;

/// A named triangle mesh.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the host boundary through the `*_f32` helpers.
///
/// Invariants upheld by the builder: `uvs` and `normals` have one entry per
/// vertex, and every triangle references existing vertices.
///
/// # Example
///
/// ```rust
/// use lowpoly_mesh::MeshBuilder;
/// use glam::{DVec2, DVec3};
///
/// let mut builder = MeshBuilder::new();
/// let a = builder.add_vertex(DVec3::ZERO, DVec2::ZERO);
/// let b = builder.add_vertex(DVec3::X, DVec2::X);
/// let c = builder.add_vertex(DVec3::Y, DVec2::Y);
/// builder.add_triangle(a, b, c).unwrap();
/// let mesh = builder.build("Triangle");
/// assert_eq!(mesh.triangle_count(), 1);
/// assert_eq!(mesh.normals()[0], DVec3::Z);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    name: String,
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Texture coordinates, one per vertex
    uvs: Vec<DVec2>,
    /// Triangle indices, counter-clockwise seen from outside
    triangles: Vec<[u32; 3]>,
    /// Unit vertex normals, one per vertex
    normals: Vec<DVec3>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::new(),
            uvs: Vec::new(),
            triangles: Vec::new(),
            normals: Vec::new(),
        }
    }

    pub(crate) fn from_parts(
        name: String,
        vertices: Vec<DVec3>,
        uvs: Vec<DVec2>,
        triangles: Vec<[u32; 3]>,
        normals: Vec<DVec3>,
    ) -> Self {
        Self {
            name,
            vertices,
            uvs,
            triangles,
            normals,
        }
    }

    /// Returns the mesh name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the texture coordinates.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Returns the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Returns a copy of the mesh moved by `offset`.
    pub fn translated(&self, offset: DVec3) -> Mesh {
        let mut moved = self.clone();
        for v in &mut moved.vertices {
            *v += offset;
        }
        moved
    }

    /// Appends another mesh, re-basing its triangle indices.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.uvs.extend_from_slice(&other.uvs);
        self.normals.extend_from_slice(&other.normals);

        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Attribute arrays match the vertex count
    /// - All triangle indices are valid
    /// - No triangle repeats a vertex or has zero area
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();

        if self.uvs.len() != vertex_count || self.normals.len() != vertex_count {
            return Err(MeshError::invalid_topology(format!(
                "attribute count mismatch: {} vertices, {} uvs, {} normals",
                vertex_count,
                self.uvs.len(),
                self.normals.len()
            )));
        }

        for (t, tri) in self.triangles.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::IndexOutOfRange {
                    index,
                    vertex_count,
                });
            }

            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return Err(MeshError::invalid_topology(format!(
                    "triangle {t} repeats a vertex: {tri:?}"
                )));
            }

            if face_normal(&self.vertices, tri).length() < DEGENERATE_AREA_EPSILON {
                return Err(MeshError::invalid_topology(format!(
                    "triangle {t} has zero area"
                )));
            }
        }

        Ok(())
    }

    /// Signed volume enclosed by the triangles.
    ///
    /// Positive for a closed mesh whose triangles face outward.
    pub fn signed_volume(&self) -> f64 {
        self.triangles
            .iter()
            .map(|tri| {
                let [a, b, c] = tri.map(|i| self.vertices[i as usize]);
                a.dot(b.cross(c))
            })
            .sum::<f64>()
            / 6.0
    }

    /// Counts directed edges that have no matching opposite edge.
    ///
    /// Zero for a closed mesh with consistent winding. Open borders and
    /// flipped triangles both raise the count.
    pub fn boundary_edge_count(&self) -> usize {
        let mut edges: HashMap<(u32, u32), usize> = HashMap::new();
        for tri in &self.triangles {
            for k in 0..3 {
                *edges.entry((tri[k], tri[(k + 1) % 3])).or_insert(0) += 1;
            }
        }

        edges
            .iter()
            .map(|(&(a, b), &count)| {
                let opposite = edges.get(&(b, a)).copied().unwrap_or(0);
                count.saturating_sub(opposite)
            })
            .sum()
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        flatten3(&self.vertices)
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten3(&self.normals)
    }

    /// Exports texture coordinates as a flattened [u, v, ...] f32 array.
    pub fn uvs_f32(&self) -> Vec<f32> {
        self.uvs
            .iter()
            .flat_map(|uv| [uv.x as f32, uv.y as f32])
            .collect()
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

/// Unnormalized face normal following the right-hand rule.
#[inline]
pub(crate) fn face_normal(vertices: &[DVec3], tri: &[u32; 3]) -> DVec3 {
    let v0 = vertices[tri[0] as usize];
    let v1 = vertices[tri[1] as usize];
    let v2 = vertices[tri[2] as usize];
    (v1 - v0).cross(v2 - v0)
}

/// Averages the face normals around every vertex.
pub(crate) fn averaged_normals(vertices: &[DVec3], triangles: &[[u32; 3]]) -> Vec<DVec3> {
    let mut normals = vec![DVec3::ZERO; vertices.len()];

    for tri in triangles {
        let normal = face_normal(vertices, tri);
        for &i in tri {
            normals[i as usize] += normal;
        }
    }

    // Unreferenced vertices keep a zero normal
    for normal in &mut normals {
        *normal = normal.normalize_or_zero();
    }

    normals
}

fn flatten3(values: &[DVec3]) -> Vec<f32> {
    values
        .iter()
        .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
        .collect()
}

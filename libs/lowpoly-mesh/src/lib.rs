//! # Low-Poly Mesh
//!
//! Mesh construction for deliberately faceted geometry.
//!
//! ## Architecture
//!
//! ```text
//! MeshBuilder (append-only) → build(name) → Mesh (immutable)
//! ```
//!
//! ## Building blocks
//!
//! - **Rings**: [`MeshBuilder::connect_rings`] lofts a quad band between two
//!   rings of equal size, [`MeshBuilder::add_cap`] closes a ring with a fan
//! - **Faces**: one-off triangles and quads with fresh vertices
//! - **Primitives**: box, tapered box, cylinder, subdivided octahedron sphere
//!
//! All positions are f64; export buffers convert to f32 at the boundary.
//!
//! ## Usage
//!
//! ```rust
//! use lowpoly_mesh::MeshBuilder;
//! use glam::DVec3;
//!
//! let mut builder = MeshBuilder::new();
//! builder.add_cylinder(DVec3::ZERO, 0.5, 0.5, 1.0, 6)?;
//! let mesh = builder.build("Post");
//! assert_eq!(mesh.boundary_edge_count(), 0);
//! # Ok::<(), lowpoly_mesh::MeshError>(())
//! ```

pub mod builder;
pub mod error;
pub mod mesh;
pub mod primitives;

pub use builder::{CapOrientation, MeshBuilder};
pub use error::MeshError;
pub use mesh::Mesh;

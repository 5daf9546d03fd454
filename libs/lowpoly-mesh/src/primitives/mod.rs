//! # Primitives
//!
//! Closed low-poly solids appended to a [`MeshBuilder`](crate::MeshBuilder):
//! box, tapered box, cylinder and the subdivided octahedron sphere.

pub mod cube;
pub mod cylinder;
pub mod sphere;

use crate::error::MeshError;

/// Rejects non-positive or non-finite dimensions.
pub(crate) fn require_positive(what: &str, value: f64) -> Result<(), MeshError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(MeshError::degenerate(format!(
            "{what} must be positive, got {value}"
        )))
    }
}

//! # Mesh Errors
//!
//! Error types for mesh construction. Every variant describes a programmer
//! error: the builder fails fast instead of emitting degenerate geometry.

use thiserror::Error;

/// Errors that can occur while building a mesh.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Out-of-contract argument to a builder operation or primitive
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument
        message: String,
    },

    /// Triangle index does not reference an existing vertex
    #[error("Vertex index {index} out of range (vertex count: {vertex_count})")]
    IndexOutOfRange {
        /// The offending index
        index: u32,
        /// Vertices present when the index was checked
        vertex_count: usize,
    },

    /// Ring handed to a lofting operation has the wrong cardinality
    #[error("Ring has {found} vertices, expected {expected}")]
    RingMismatch {
        /// Segment count of the operation
        expected: usize,
        /// Length of the ring that was passed
        found: usize,
    },

    /// Non-positive size, radius or length
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry {
        /// Which dimension collapsed
        message: String,
    },

    /// Mesh validation failed
    #[error("Invalid topology: {message}")]
    InvalidTopology {
        /// The first violation found
        message: String,
    },
}

impl MeshError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::IndexOutOfRange {
            index: 7,
            vertex_count: 3,
        };
        assert!(err.to_string().contains('7'));
        assert!(err.to_string().contains("vertex count: 3"));

        let err = MeshError::degenerate("radius must be positive");
        assert!(err.to_string().starts_with("Degenerate geometry"));

        let err = MeshError::RingMismatch {
            expected: 6,
            found: 5,
        };
        assert_eq!(err.to_string(), "Ring has 5 vertices, expected 6");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}

//! # Part Generators
//!
//! One generator per anatomical part. Every generator reads the shared
//! [`ShapeParameters`], owns its own [`MeshBuilder`](lowpoly_mesh::MeshBuilder)
//! for the duration of the call, and returns a [`PartMesh`] whose pivot is
//! the local origin.
//!
//! ## Pivot convention
//!
//! Chained parts (legs, torso, neck, head, arm segments) span
//! `y ∈ [0, extent]` with the lower joint at the origin, so stacking two
//! parts is a translation by the lower part's extent.

pub mod extremity;
pub mod hair;
pub mod head;
pub mod limb;
pub mod torso;

#[cfg(test)]
mod tests;

use std::fmt;

use lowpoly_mesh::Mesh;

use crate::error::FigureError;
use crate::params::ShapeParameters;

pub use extremity::{FootGenerator, HandGenerator, ShoulderJointGenerator};
pub use head::HeadGenerator;
pub use limb::{LimbGenerator, LimbSegment};
pub use torso::{LowerTorsoGenerator, NeckGenerator, UpperTorsoGenerator};

/// Mesh of one part plus its declared axial length.
#[derive(Debug, Clone, PartialEq)]
pub struct PartMesh {
    pub mesh: Mesh,
    /// Distance from the pivot to the joint the next part attaches to.
    pub extent: f64,
}

/// Builds one part from the shape parameters.
///
/// Implementations hold no mutable state, so one generator may run on
/// many threads at once.
pub trait PartGenerator: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn generate(&self, params: &ShapeParameters) -> Result<PartMesh, FigureError>;
}

/// Body side of a paired part, as seen by the figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign of the lateral offset. The figure faces +Z, so its left is +X.
    pub fn sign(self) -> f64 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Identifies a placed part of the figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartId {
    Head,
    Hair,
    Neck,
    UpperTorso,
    LowerTorso,
    Shoulder(Side),
    UpperArm(Side),
    Forearm(Side),
    Hand(Side),
    Thigh(Side),
    Calf(Side),
    Foot(Side),
}

impl PartId {
    /// Every part in assembly order, hair included.
    pub const ALL: [PartId; 19] = [
        PartId::LowerTorso,
        PartId::UpperTorso,
        PartId::Neck,
        PartId::Head,
        PartId::Hair,
        PartId::Shoulder(Side::Left),
        PartId::UpperArm(Side::Left),
        PartId::Forearm(Side::Left),
        PartId::Hand(Side::Left),
        PartId::Shoulder(Side::Right),
        PartId::UpperArm(Side::Right),
        PartId::Forearm(Side::Right),
        PartId::Hand(Side::Right),
        PartId::Thigh(Side::Left),
        PartId::Calf(Side::Left),
        PartId::Foot(Side::Left),
        PartId::Thigh(Side::Right),
        PartId::Calf(Side::Right),
        PartId::Foot(Side::Right),
    ];

    pub fn side(self) -> Option<Side> {
        match self {
            PartId::Shoulder(side)
            | PartId::UpperArm(side)
            | PartId::Forearm(side)
            | PartId::Hand(side)
            | PartId::Thigh(side)
            | PartId::Calf(side)
            | PartId::Foot(side) => Some(side),
            _ => None,
        }
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.side() {
            Some(Side::Left) => "Left",
            Some(Side::Right) => "Right",
            None => "",
        };
        let base = match self {
            PartId::Head => "Head",
            PartId::Hair => "Hair",
            PartId::Neck => "Neck",
            PartId::UpperTorso => "UpperBody",
            PartId::LowerTorso => "LowerBody",
            PartId::Shoulder(_) => "Shoulder",
            PartId::UpperArm(_) => "UpperArm",
            PartId::Forearm(_) => "Forearm",
            PartId::Hand(_) => "Hand",
            PartId::Thigh(_) => "Thigh",
            PartId::Calf(_) => "Calf",
            PartId::Foot(_) => "Foot",
        };
        write!(f, "{prefix}{base}")
    }
}

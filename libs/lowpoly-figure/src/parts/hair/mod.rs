//! # Hair
//!
//! One generator per hair style, each with its own level table. Shells are
//! lofted around the head in the head's local frame (the head spans
//! `y ∈ [0, height]`), so the hair part shares the head's offset.
//!
//! Shells stay open where they meet the face or neck, except long hair
//! which is closed at its tips. Spiky hair is not a shell at all but a
//! capped base ring with separate spike pyramids.

mod long;
mod medium;
mod short;
mod slicked;
mod spiky;

use std::f64::consts::FRAC_PI_2;

use lowpoly_mesh::MeshBuilder;

use super::{PartGenerator, PartMesh};
use crate::dimensions::BodyDimensions;
use crate::error::FigureError;
use crate::params::{HairStyle, ShapeParameters};
use crate::profile::{CrossSectionProfile, ProfileLevel};

pub use long::LongHair;
pub use medium::MediumHair;
pub use short::ShortHair;
pub use slicked::SlickedHair;
pub use spiky::SpikyHair;

/// Rings start at the back of the head, like the head itself.
pub(crate) const START_ANGLE: f64 = -FRAC_PI_2;

/// Picks the generator for `style`. Bald has none.
///
/// # Example
///
/// ```rust
/// use lowpoly_figure::parts::hair::generator_for;
/// use lowpoly_figure::HairStyle;
///
/// assert!(generator_for(HairStyle::Bald).is_none());
/// assert_eq!(generator_for(HairStyle::Long).map(|g| g.name()), Some("long hair"));
/// ```
pub fn generator_for(style: HairStyle) -> Option<Box<dyn PartGenerator>> {
    match style {
        HairStyle::Bald => None,
        HairStyle::Short => Some(Box::new(ShortHair)),
        HairStyle::Medium => Some(Box::new(MediumHair)),
        HairStyle::Long => Some(Box::new(LongHair)),
        HairStyle::Spiky => Some(Box::new(SpikyHair)),
        HairStyle::Slicked => Some(Box::new(SlickedHair)),
    }
}

/// Generates the hair part for the parameters' style, if any.
pub fn generate_hair(params: &ShapeParameters) -> Result<Option<PartMesh>, FigureError> {
    generator_for(params.hair_style)
        .map(|generator| generator.generate(params))
        .transpose()
}

/// Head size and hair parameters every style starts from.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HairFrame {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub volume: f64,
    pub length: f64,
}

impl HairFrame {
    pub fn new(params: &ShapeParameters) -> Self {
        let head = BodyDimensions::from_params(params).head;
        Self {
            width: head.x,
            height: head.y,
            depth: head.z,
            volume: params.hair_volume,
            length: params.hair_length,
        }
    }

    /// Height above the head base of a level given relative to the head
    /// center.
    pub fn y(&self, centered: f64) -> f64 {
        centered + self.height * 0.5
    }

    /// Shell profile from (centered height, width factor, depth factor)
    /// rows, inflated by `offset` on every side.
    pub fn shell(
        &self,
        offset: f64,
        rows: &[(f64, f64, f64)],
    ) -> Result<CrossSectionProfile, FigureError> {
        let width = self.width + offset * 2.0;
        let depth = self.depth + offset * 2.0;

        CrossSectionProfile::new(
            rows.iter()
                .map(|&(y, wf, df)| ProfileLevel::new(self.y(y), width * wf, depth * df))
                .collect(),
        )
    }

    pub fn finish(&self, builder: MeshBuilder) -> PartMesh {
        PartMesh {
            mesh: builder.build("Hair"),
            extent: self.height,
        }
    }
}

/// U coordinate shared by every hair ring: 0 at the back of the head.
pub(crate) fn ring_u(angle: f64) -> f64 {
    (angle - START_ANGLE) / std::f64::consts::TAU
}

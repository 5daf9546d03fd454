//! # Cross-Section Profiles
//!
//! A profile is the lofting spine of one part: an ordered list of levels,
//! each with an axial offset and the width and depth of the elliptical
//! ring sampled there. Levels run from the top (proximal) end down.
//!
//! [`CrossSectionProfile::loft`] samples every level into a ring, lets the
//! caller deform each ring point, and stitches consecutive rings with
//! [`MeshBuilder::connect_rings`].

use std::f64::consts::TAU;

use config::constants::MIN_RING_SEGMENTS;
use glam::{DVec2, DVec3};
use lowpoly_mesh::MeshBuilder;

use crate::error::FigureError;

/// One level of a profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileLevel {
    /// Position along the axis (Y for every part in the rest pose).
    pub offset: f64,
    /// Full ring extent along X.
    pub width: f64,
    /// Full ring extent along Z.
    pub depth: f64,
}

impl ProfileLevel {
    pub const fn new(offset: f64, width: f64, depth: f64) -> Self {
        Self {
            offset,
            width,
            depth,
        }
    }

    /// Circular level of the given radius.
    pub const fn round(offset: f64, radius: f64) -> Self {
        Self::new(offset, radius * 2.0, radius * 2.0)
    }
}

/// Validated, strictly descending list of levels.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSectionProfile {
    levels: Vec<ProfileLevel>,
}

/// A ring vertex before the caller places it.
#[derive(Debug, Clone, Copy)]
pub struct RingPoint {
    /// Index of the level, 0 at the top.
    pub level: usize,
    /// Index around the ring.
    pub segment: usize,
    /// Sample angle in radians, ascending with `segment`.
    pub angle: f64,
    /// The level this point belongs to.
    pub section: ProfileLevel,
    /// Undeformed position: (cos·width/2, offset, sin·depth/2).
    pub base: DVec3,
}

impl RingPoint {
    /// `segment / segments`, the usual U coordinate.
    pub fn around(&self, segments: usize) -> f64 {
        self.segment as f64 / segments as f64
    }
}

impl CrossSectionProfile {
    /// Validates and wraps a level list.
    ///
    /// # Errors
    ///
    /// Fails with [`FigureError::InvalidProfile`] for fewer than two
    /// levels, offsets that do not strictly decrease, or a non-positive
    /// width or depth.
    pub fn new(levels: Vec<ProfileLevel>) -> Result<Self, FigureError> {
        if levels.len() < 2 {
            return Err(FigureError::InvalidProfile(format!(
                "a profile needs at least two levels, got {}",
                levels.len()
            )));
        }

        for (i, level) in levels.iter().enumerate() {
            let sized = level.width > 0.0 && level.depth > 0.0;
            let finite =
                level.offset.is_finite() && level.width.is_finite() && level.depth.is_finite();
            if !sized || !finite {
                return Err(FigureError::InvalidProfile(format!(
                    "level {i} has a degenerate cross-section: {level:?}"
                )));
            }
        }

        if let Some(i) = levels.windows(2).position(|pair| pair[1].offset >= pair[0].offset) {
            return Err(FigureError::InvalidProfile(format!(
                "level {} does not lie below level {i}",
                i + 1
            )));
        }

        Ok(Self { levels })
    }

    /// The levels, top first.
    pub fn levels(&self) -> &[ProfileLevel] {
        &self.levels
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false; a profile holds at least two levels.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Axial distance between the first and last level.
    pub fn span(&self) -> f64 {
        match (self.levels.first(), self.levels.last()) {
            (Some(top), Some(bottom)) => top.offset - bottom.offset,
            _ => 0.0,
        }
    }

    /// Lofts the profile into `builder` and returns the rings, top first.
    ///
    /// Ring points are sampled at `start_angle + segment / segments · 2π`.
    /// `place` maps each sample to its final position and UV, which is
    /// where per-part deformation happens. The first and last ring are
    /// left open for the caller to cap.
    pub fn loft<F>(
        &self,
        builder: &mut MeshBuilder,
        segments: usize,
        start_angle: f64,
        mut place: F,
    ) -> Result<Vec<Vec<u32>>, FigureError>
    where
        F: FnMut(&RingPoint) -> (DVec3, DVec2),
    {
        if segments < MIN_RING_SEGMENTS {
            return Err(FigureError::InvalidProfile(format!(
                "{segments} segments cannot form a ring"
            )));
        }

        let rings: Vec<Vec<u32>> = self
            .levels
            .iter()
            .enumerate()
            .map(|(level, section)| {
                (0..segments)
                    .map(|segment| {
                        let angle = start_angle + segment as f64 / segments as f64 * TAU;
                        let base = DVec3::new(
                            angle.cos() * section.width * 0.5,
                            section.offset,
                            angle.sin() * section.depth * 0.5,
                        );
                        let point = RingPoint {
                            level,
                            segment,
                            angle,
                            section: *section,
                            base,
                        };
                        let (position, uv) = place(&point);
                        builder.add_vertex(position, uv)
                    })
                    .collect()
            })
            .collect();

        for pair in rings.windows(2) {
            builder.connect_rings(&pair[0], &pair[1], segments)?;
        }

        Ok(rings)
    }
}

/// First and last ring of a loft.
pub fn end_rings(rings: &[Vec<u32>]) -> Result<(&[u32], &[u32]), FigureError> {
    match (rings.first(), rings.last()) {
        (Some(first), Some(last)) if rings.len() >= 2 => Ok((first, last)),
        _ => Err(FigureError::InvalidProfile(format!(
            "expected at least two rings, got {}",
            rings.len()
        ))),
    }
}

//! # Shape Parameters
//!
//! The flat record describing one figure: body proportions, head and face
//! shape, hair, skin and clothing. Values are plain multipliers around 1.0
//! (or 0..1 blends) applied to the base dimensions in [`config::constants`].
//!
//! Parameters are built either explicitly (start from `Default` and use
//! [`ShapeParameters::set`]) or from a seed with
//! [`ShapeParameters::create_random`].

mod random;
mod style;

#[cfg(test)]
mod tests;

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

pub use random::{create_rng, fresh_seed, CLOTHING_PALETTE};
pub use style::{HairStyle, LowerClothing, UpperClothing};

// =============================================================================
// COLORS
// =============================================================================

/// Linear RGB color with components in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
}

impl Rgb {
    /// Pure white.
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    /// Pure black.
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    /// Creates a color from its components.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Multiplies every channel by `factor`.
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    /// Opaque 8-bit RGBA.
    pub fn to_rgba8(self) -> [u8; 4] {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b), 255]
    }
}

impl From<[f32; 3]> for Rgb {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

// =============================================================================
// CONTINUOUS FIELDS
// =============================================================================

/// Every continuous shape field, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeField {
    Height,
    ShoulderWidth,
    HipWidth,
    ArmLength,
    LegLength,
    TorsoLength,
    HeadWidth,
    HeadHeight,
    HeadDepth,
    JawWidth,
    ChinPointiness,
    NoseLength,
    NoseWidth,
    NoseHeight,
    FaceProfileAngle,
    HairVolume,
    HairLength,
}

impl ShapeField {
    /// All fields, body first, then head, face and hair.
    pub const ALL: [ShapeField; 17] = [
        ShapeField::Height,
        ShapeField::ShoulderWidth,
        ShapeField::HipWidth,
        ShapeField::ArmLength,
        ShapeField::LegLength,
        ShapeField::TorsoLength,
        ShapeField::HeadWidth,
        ShapeField::HeadHeight,
        ShapeField::HeadDepth,
        ShapeField::JawWidth,
        ShapeField::ChinPointiness,
        ShapeField::NoseLength,
        ShapeField::NoseWidth,
        ShapeField::NoseHeight,
        ShapeField::FaceProfileAngle,
        ShapeField::HairVolume,
        ShapeField::HairLength,
    ];

    /// Field name as written in presets.
    pub fn name(self) -> &'static str {
        match self {
            ShapeField::Height => "height",
            ShapeField::ShoulderWidth => "shoulder_width",
            ShapeField::HipWidth => "hip_width",
            ShapeField::ArmLength => "arm_length",
            ShapeField::LegLength => "leg_length",
            ShapeField::TorsoLength => "torso_length",
            ShapeField::HeadWidth => "head_width",
            ShapeField::HeadHeight => "head_height",
            ShapeField::HeadDepth => "head_depth",
            ShapeField::JawWidth => "jaw_width",
            ShapeField::ChinPointiness => "chin_pointiness",
            ShapeField::NoseLength => "nose_length",
            ShapeField::NoseWidth => "nose_width",
            ShapeField::NoseHeight => "nose_height",
            ShapeField::FaceProfileAngle => "face_profile_angle",
            ShapeField::HairVolume => "hair_volume",
            ShapeField::HairLength => "hair_length",
        }
    }

    /// Range an author may set. Generators must accept both ends.
    pub fn authoring_range(self) -> RangeInclusive<f64> {
        match self {
            ShapeField::Height
            | ShapeField::ArmLength
            | ShapeField::LegLength
            | ShapeField::HeadWidth
            | ShapeField::HeadHeight
            | ShapeField::HeadDepth => 0.8..=1.2,
            ShapeField::ShoulderWidth | ShapeField::HipWidth | ShapeField::TorsoLength => {
                0.7..=1.3
            }
            ShapeField::JawWidth
            | ShapeField::ChinPointiness
            | ShapeField::NoseHeight
            | ShapeField::HairLength => 0.0..=1.0,
            ShapeField::NoseLength | ShapeField::NoseWidth => 0.5..=1.5,
            ShapeField::FaceProfileAngle => -0.3..=0.3,
            ShapeField::HairVolume => 0.8..=1.5,
        }
    }

    /// Narrower range sampled by [`ShapeParameters::create_random`].
    pub fn draw_range(self) -> RangeInclusive<f64> {
        match self {
            ShapeField::Height
            | ShapeField::HeadWidth
            | ShapeField::HeadHeight
            | ShapeField::HeadDepth => 0.85..=1.15,
            ShapeField::ShoulderWidth | ShapeField::HipWidth => 0.8..=1.2,
            ShapeField::ArmLength | ShapeField::LegLength | ShapeField::TorsoLength => 0.9..=1.1,
            ShapeField::JawWidth | ShapeField::NoseHeight => 0.3..=0.7,
            ShapeField::ChinPointiness => 0.2..=0.8,
            ShapeField::NoseLength | ShapeField::NoseWidth => 0.7..=1.3,
            ShapeField::FaceProfileAngle => -0.15..=0.15,
            ShapeField::HairVolume => 0.9..=1.3,
            ShapeField::HairLength => 0.2..=0.9,
        }
    }

    /// Value in [`ShapeParameters::default`].
    pub fn default_value(self) -> f64 {
        match self {
            ShapeField::JawWidth
            | ShapeField::ChinPointiness
            | ShapeField::NoseHeight
            | ShapeField::HairLength => 0.5,
            ShapeField::FaceProfileAngle => 0.0,
            _ => 1.0,
        }
    }
}

// =============================================================================
// PARAMETER RECORD
// =============================================================================

/// Parameters of one figure.
///
/// Generators read this record but never write it. Continuous values are
/// expected inside [`ShapeField::authoring_range`]; use
/// [`ShapeParameters::clamped`] on untrusted input.
///
/// # Example
///
/// ```rust
/// use lowpoly_figure::{ShapeField, ShapeParameters};
///
/// let a = ShapeParameters::create_random(Some(7));
/// let b = ShapeParameters::create_random(Some(7));
/// assert_eq!(a, b);
/// assert!(ShapeField::Height.draw_range().contains(&a.height));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeParameters {
    // Body proportions
    pub height: f64,
    pub shoulder_width: f64,
    pub hip_width: f64,
    pub arm_length: f64,
    pub leg_length: f64,
    pub torso_length: f64,

    // Head
    pub head_width: f64,
    pub head_height: f64,
    pub head_depth: f64,
    pub jaw_width: f64,
    pub chin_pointiness: f64,

    // Face
    pub nose_length: f64,
    pub nose_width: f64,
    pub nose_height: f64,
    pub face_profile_angle: f64,

    // Hair
    pub hair_style: HairStyle,
    pub hair_volume: f64,
    pub hair_length: f64,
    pub hair_color: Rgb,

    // Skin
    pub skin_color: Rgb,
    /// Darker tone for face shading. Not drawn; random records derive it
    /// from `skin_color`.
    pub skin_shade_color: Rgb,

    // Clothing
    pub upper_clothing: UpperClothing,
    pub lower_clothing: LowerClothing,
    pub upper_clothing_color: Rgb,
    pub lower_clothing_color: Rgb,

    /// Seed the record was drawn from, 0 for hand-authored records.
    pub seed: i32,
}

/// Shade tone relative to the base skin color.
pub(crate) const SKIN_SHADE_FACTOR: f32 = 0.85;

impl Default for ShapeParameters {
    fn default() -> Self {
        let skin_color = Rgb::new(0.87, 0.72, 0.60);
        Self {
            height: 1.0,
            shoulder_width: 1.0,
            hip_width: 1.0,
            arm_length: 1.0,
            leg_length: 1.0,
            torso_length: 1.0,
            head_width: 1.0,
            head_height: 1.0,
            head_depth: 1.0,
            jaw_width: 0.5,
            chin_pointiness: 0.5,
            nose_length: 1.0,
            nose_width: 1.0,
            nose_height: 0.5,
            face_profile_angle: 0.0,
            hair_style: HairStyle::Short,
            hair_volume: 1.0,
            hair_length: 0.5,
            hair_color: Rgb::BLACK,
            skin_color,
            skin_shade_color: skin_color.scaled(SKIN_SHADE_FACTOR),
            upper_clothing: UpperClothing::TShirt,
            lower_clothing: LowerClothing::Pants,
            upper_clothing_color: Rgb::WHITE,
            lower_clothing_color: Rgb::new(0.2, 0.2, 0.4),
            seed: 0,
        }
    }
}

impl ShapeParameters {
    /// Reads one continuous field.
    pub fn get(&self, field: ShapeField) -> f64 {
        match field {
            ShapeField::Height => self.height,
            ShapeField::ShoulderWidth => self.shoulder_width,
            ShapeField::HipWidth => self.hip_width,
            ShapeField::ArmLength => self.arm_length,
            ShapeField::LegLength => self.leg_length,
            ShapeField::TorsoLength => self.torso_length,
            ShapeField::HeadWidth => self.head_width,
            ShapeField::HeadHeight => self.head_height,
            ShapeField::HeadDepth => self.head_depth,
            ShapeField::JawWidth => self.jaw_width,
            ShapeField::ChinPointiness => self.chin_pointiness,
            ShapeField::NoseLength => self.nose_length,
            ShapeField::NoseWidth => self.nose_width,
            ShapeField::NoseHeight => self.nose_height,
            ShapeField::FaceProfileAngle => self.face_profile_angle,
            ShapeField::HairVolume => self.hair_volume,
            ShapeField::HairLength => self.hair_length,
        }
    }

    /// Writes one continuous field as given, without clamping.
    pub fn set(&mut self, field: ShapeField, value: f64) {
        let slot = match field {
            ShapeField::Height => &mut self.height,
            ShapeField::ShoulderWidth => &mut self.shoulder_width,
            ShapeField::HipWidth => &mut self.hip_width,
            ShapeField::ArmLength => &mut self.arm_length,
            ShapeField::LegLength => &mut self.leg_length,
            ShapeField::TorsoLength => &mut self.torso_length,
            ShapeField::HeadWidth => &mut self.head_width,
            ShapeField::HeadHeight => &mut self.head_height,
            ShapeField::HeadDepth => &mut self.head_depth,
            ShapeField::JawWidth => &mut self.jaw_width,
            ShapeField::ChinPointiness => &mut self.chin_pointiness,
            ShapeField::NoseLength => &mut self.nose_length,
            ShapeField::NoseWidth => &mut self.nose_width,
            ShapeField::NoseHeight => &mut self.nose_height,
            ShapeField::FaceProfileAngle => &mut self.face_profile_angle,
            ShapeField::HairVolume => &mut self.hair_volume,
            ShapeField::HairLength => &mut self.hair_length,
        };
        *slot = value;
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, field: ShapeField, value: f64) -> Self {
        self.set(field, value);
        self
    }

    /// Copy with every continuous field clamped to its authoring range.
    pub fn clamped(&self) -> Self {
        let mut out = self.clone();
        for field in ShapeField::ALL {
            let range = field.authoring_range();
            out.set(field, self.get(field).clamp(*range.start(), *range.end()));
        }
        out
    }

    /// Display name of the assembled figure.
    pub fn display_name(&self) -> String {
        format!("Figure_{}", self.seed)
    }
}

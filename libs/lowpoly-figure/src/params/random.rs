//! Deterministic seed → parameter mapping.
//!
//! Every draw goes through one locally owned PCG32 generator, in a fixed
//! order. Changing the order or any draw range changes every figure.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{
    HairStyle, LowerClothing, Rgb, ShapeField, ShapeParameters, UpperClothing, SKIN_SHADE_FACTOR,
};

/// Clothing colors, picked uniformly.
pub const CLOTHING_PALETTE: [Rgb; 8] = [
    Rgb::WHITE,
    Rgb::BLACK,
    Rgb::new(0.2, 0.2, 0.4),   // navy
    Rgb::new(0.6, 0.1, 0.1),   // dark red
    Rgb::new(0.1, 0.4, 0.2),   // forest green
    Rgb::new(0.3, 0.3, 0.3),   // gray
    Rgb::new(0.9, 0.85, 0.7),  // beige
    Rgb::new(0.4, 0.25, 0.15), // brown
];

/// Continuous fields drawn before the hair style, in order.
const SHAPE_FIELDS: &[ShapeField] = &[
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
];

/// Creates a PCG32 generator from a 32-bit seed.
///
/// The seed is duplicated into both halves of the 64-bit state seed.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Draws a fresh non-negative seed from the thread-local source.
pub fn fresh_seed() -> i32 {
    let seed = rand::thread_rng().gen_range(0..i32::MAX);
    log::trace!("drew fresh seed {seed}");
    seed
}

impl ShapeParameters {
    /// Draws a complete parameter set from `seed`.
    ///
    /// `None` or a negative seed draws a fresh one first; the seed actually
    /// used is stored in [`ShapeParameters::seed`]. The same seed always
    /// yields the same record.
    pub fn create_random(seed: Option<i32>) -> Self {
        let seed = match seed {
            Some(seed) if seed >= 0 => seed,
            _ => fresh_seed(),
        };

        let mut rng = create_rng(seed as u32);
        let mut params = ShapeParameters {
            seed,
            ..ShapeParameters::default()
        };

        // Body, head, face
        for &field in SHAPE_FIELDS {
            params.set(field, rng.gen_range(field.draw_range()));
        }

        // Hair
        params.hair_style = HairStyle::ALL[rng.gen_range(0..HairStyle::ALL.len())];
        params.hair_volume = rng.gen_range(ShapeField::HairVolume.draw_range());
        params.hair_length = rng.gen_range(ShapeField::HairLength.draw_range());
        params.hair_color = hair_color(rng.gen());

        // Skin
        params.skin_color = skin_color(rng.gen());
        params.skin_shade_color = params.skin_color.scaled(SKIN_SHADE_FACTOR);

        // Clothing
        params.upper_clothing = UpperClothing::ALL[rng.gen_range(0..UpperClothing::ALL.len())];
        params.lower_clothing = LowerClothing::ALL[rng.gen_range(0..LowerClothing::ALL.len())];
        params.upper_clothing_color = CLOTHING_PALETTE[rng.gen_range(0..CLOTHING_PALETTE.len())];
        params.lower_clothing_color = CLOTHING_PALETTE[rng.gen_range(0..CLOTHING_PALETTE.len())];

        params
    }
}

/// Weighted hair palette keyed by one uniform draw.
pub(crate) fn hair_color(r: f64) -> Rgb {
    if r < 0.3 {
        Rgb::new(0.1, 0.08, 0.06) // black
    } else if r < 0.5 {
        Rgb::new(0.35, 0.22, 0.12) // brown
    } else if r < 0.65 {
        Rgb::new(0.55, 0.35, 0.2) // light brown
    } else if r < 0.75 {
        Rgb::new(0.85, 0.7, 0.4) // blonde
    } else if r < 0.85 {
        Rgb::new(0.6, 0.3, 0.15) // auburn
    } else {
        Rgb::new(0.5, 0.5, 0.5) // gray
    }
}

/// Skin palette in four equal bands.
pub(crate) fn skin_color(r: f64) -> Rgb {
    if r < 0.25 {
        Rgb::new(0.96, 0.87, 0.78)
    } else if r < 0.5 {
        Rgb::new(0.87, 0.72, 0.60)
    } else if r < 0.75 {
        Rgb::new(0.72, 0.55, 0.42)
    } else {
        Rgb::new(0.45, 0.32, 0.22)
    }
}

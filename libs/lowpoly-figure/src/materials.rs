//! # Materials
//!
//! Every placed part references one [`MaterialSlot`]. Which slot a limb
//! segment uses depends on the clothing style: a T-shirt leaves the
//! forearms bare, shorts leave the calves bare.
//!
//! Texture pixels come from a [`TextureProvider`]. The geometry core only
//! needs one buffer per referenced slot; [`FlatColorTextures`] is the
//! built-in provider that fills each buffer from the parameter colors.

use std::collections::HashMap;

use config::constants::{
    CLOTHING_TEXTURE_SIZE, FACE_TEXTURE_SIZE, FOOTWEAR_COLOR, FOOTWEAR_TEXTURE_SIZE,
    SKIN_TEXTURE_SIZE,
};

use crate::error::FigureError;
use crate::params::{LowerClothing, Rgb, ShapeParameters, UpperClothing};
use crate::parts::PartId;

/// Surface category of a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialSlot {
    Face,
    Skin,
    Hair,
    UpperClothing,
    LowerClothing,
    Footwear,
}

impl MaterialSlot {
    pub const ALL: [MaterialSlot; 6] = [
        MaterialSlot::Face,
        MaterialSlot::Skin,
        MaterialSlot::Hair,
        MaterialSlot::UpperClothing,
        MaterialSlot::LowerClothing,
        MaterialSlot::Footwear,
    ];

    /// Texture edge length before scaling.
    pub fn texture_size(self) -> u32 {
        match self {
            MaterialSlot::Face => FACE_TEXTURE_SIZE,
            MaterialSlot::Skin | MaterialSlot::Hair => SKIN_TEXTURE_SIZE,
            MaterialSlot::UpperClothing | MaterialSlot::LowerClothing => CLOTHING_TEXTURE_SIZE,
            MaterialSlot::Footwear => FOOTWEAR_TEXTURE_SIZE,
        }
    }

    /// Base color of the slot for the given parameters.
    pub fn color(self, params: &ShapeParameters) -> Rgb {
        match self {
            MaterialSlot::Face | MaterialSlot::Skin => params.skin_color,
            MaterialSlot::Hair => params.hair_color,
            MaterialSlot::UpperClothing => params.upper_clothing_color,
            MaterialSlot::LowerClothing => params.lower_clothing_color,
            MaterialSlot::Footwear => Rgb::from(FOOTWEAR_COLOR),
        }
    }
}

/// Material slot of a part under the given clothing.
pub fn slot_for(part: PartId, params: &ShapeParameters) -> MaterialSlot {
    match part {
        PartId::Head => MaterialSlot::Face,
        PartId::Hair => MaterialSlot::Hair,
        PartId::Neck | PartId::Hand(_) => MaterialSlot::Skin,
        PartId::UpperTorso | PartId::Shoulder(_) | PartId::UpperArm(_) => {
            MaterialSlot::UpperClothing
        }
        PartId::Forearm(_) => match params.upper_clothing {
            UpperClothing::TShirt => MaterialSlot::Skin,
            UpperClothing::LongSleeve | UpperClothing::Jacket => MaterialSlot::UpperClothing,
        },
        PartId::LowerTorso | PartId::Thigh(_) => MaterialSlot::LowerClothing,
        PartId::Calf(_) => match params.lower_clothing {
            LowerClothing::Shorts => MaterialSlot::Skin,
            LowerClothing::Pants => MaterialSlot::LowerClothing,
        },
        PartId::Foot(_) => MaterialSlot::Footwear,
    }
}

// =============================================================================
// TEXTURES
// =============================================================================

/// Square RGBA8 pixel buffer, rows bottom to top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureBuffer {
    size: u32,
    pixels: Vec<[u8; 4]>,
}

impl TextureBuffer {
    /// Buffer of `size × size` pixels set to `fill`.
    pub fn filled(size: u32, fill: Rgb) -> Self {
        Self {
            size,
            pixels: vec![fill.to_rgba8(); (size as usize) * (size as usize)],
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.pixels.get((y * self.size + x) as usize).copied()
    }

    /// Paints rows `rows` (bottom-up) with `color`.
    pub fn fill_rows(&mut self, rows: std::ops::Range<u32>, color: Rgb) {
        let rgba = color.to_rgba8();
        let size = self.size as usize;
        let start = (rows.start.min(self.size) as usize) * size;
        let end = (rows.end.min(self.size) as usize) * size;
        if start < end {
            self.pixels[start..end].fill(rgba);
        }
    }
}

/// Supplies one texture per material slot.
///
/// Pixel content is up to the provider; the figure only checks that a
/// buffer exists for every slot it references.
pub trait TextureProvider: Send + Sync {
    fn texture(
        &self,
        slot: MaterialSlot,
        params: &ShapeParameters,
        scale: u32,
    ) -> Result<TextureBuffer, FigureError>;
}

/// Single-color textures; the face gets a shaded lower band.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlatColorTextures;

impl TextureProvider for FlatColorTextures {
    fn texture(
        &self,
        slot: MaterialSlot,
        params: &ShapeParameters,
        scale: u32,
    ) -> Result<TextureBuffer, FigureError> {
        let size = slot
            .texture_size()
            .checked_mul(scale)
            .filter(|&size| size > 0)
            .ok_or_else(|| FigureError::Texture(format!("texture scale {scale} for {slot:?}")))?;

        let mut texture = TextureBuffer::filled(size, slot.color(params));
        if slot == MaterialSlot::Face {
            texture.fill_rows(0..size / 4, params.skin_shade_color);
        }
        Ok(texture)
    }
}

/// One texture per material slot used by a figure.
#[derive(Debug, Clone, Default)]
pub struct MaterialSet {
    textures: HashMap<MaterialSlot, TextureBuffer>,
}

impl MaterialSet {
    /// Asks `provider` for a texture for every slot in `slots`.
    pub fn build(
        provider: &dyn TextureProvider,
        params: &ShapeParameters,
        slots: impl IntoIterator<Item = MaterialSlot>,
        scale: u32,
    ) -> Result<Self, FigureError> {
        let mut textures = HashMap::new();
        for slot in slots {
            if !textures.contains_key(&slot) {
                textures.insert(slot, provider.texture(slot, params, scale)?);
            }
        }
        Ok(Self { textures })
    }

    pub fn get(&self, slot: MaterialSlot) -> Result<&TextureBuffer, FigureError> {
        self.textures
            .get(&slot)
            .ok_or(FigureError::MissingMaterial(slot))
    }

    pub fn contains(&self, slot: MaterialSlot) -> bool {
        self.textures.contains_key(&slot)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::Side;

    #[test]
    fn test_tshirt_exposes_forearms() {
        let params = ShapeParameters::default();
        assert_eq!(params.upper_clothing, UpperClothing::TShirt);
        assert_eq!(
            slot_for(PartId::UpperArm(Side::Left), &params),
            MaterialSlot::UpperClothing
        );
        assert_eq!(slot_for(PartId::Forearm(Side::Left), &params), MaterialSlot::Skin);

        let jacket = ShapeParameters {
            upper_clothing: UpperClothing::Jacket,
            ..ShapeParameters::default()
        };
        assert_eq!(
            slot_for(PartId::Forearm(Side::Right), &jacket),
            MaterialSlot::UpperClothing
        );
    }

    #[test]
    fn test_shorts_expose_calves() {
        let shorts = ShapeParameters {
            lower_clothing: LowerClothing::Shorts,
            ..ShapeParameters::default()
        };
        assert_eq!(slot_for(PartId::Calf(Side::Left), &shorts), MaterialSlot::Skin);
        assert_eq!(
            slot_for(PartId::Thigh(Side::Left), &shorts),
            MaterialSlot::LowerClothing
        );
        assert_eq!(
            slot_for(PartId::Calf(Side::Left), &ShapeParameters::default()),
            MaterialSlot::LowerClothing
        );
    }

    #[test]
    fn test_fixed_slots() {
        let params = ShapeParameters::default();
        assert_eq!(slot_for(PartId::Head, &params), MaterialSlot::Face);
        assert_eq!(slot_for(PartId::Hand(Side::Right), &params), MaterialSlot::Skin);
        assert_eq!(slot_for(PartId::Foot(Side::Left), &params), MaterialSlot::Footwear);
        assert_eq!(slot_for(PartId::Hair, &params), MaterialSlot::Hair);
    }

    #[test]
    fn test_flat_textures() {
        let params = ShapeParameters::default();
        let texture = FlatColorTextures
            .texture(MaterialSlot::UpperClothing, &params, 2)
            .unwrap();
        assert_eq!(texture.size(), 128);
        assert_eq!(texture.pixels().len(), 128 * 128);
        assert_eq!(texture.pixel(5, 5), Some([255, 255, 255, 255]));
        assert_eq!(texture.pixel(128, 0), None);
    }

    #[test]
    fn test_face_texture_is_shaded_below() {
        let params = ShapeParameters::default();
        let face = FlatColorTextures.texture(MaterialSlot::Face, &params, 1).unwrap();
        assert_eq!(face.pixel(0, 0), Some(params.skin_shade_color.to_rgba8()));
        assert_eq!(face.pixel(0, 63), Some(params.skin_color.to_rgba8()));
    }

    #[test]
    fn test_face_uses_authored_shade() {
        let params = ShapeParameters {
            skin_shade_color: Rgb::new(0.5, 0.1, 0.1),
            ..ShapeParameters::default()
        };
        let face = FlatColorTextures.texture(MaterialSlot::Face, &params, 1).unwrap();
        assert_eq!(face.pixel(3, 2), Some(Rgb::new(0.5, 0.1, 0.1).to_rgba8()));
        assert_eq!(face.pixel(3, 40), Some(params.skin_color.to_rgba8()));
    }

    #[test]
    fn test_zero_scale_is_rejected() {
        let result = FlatColorTextures.texture(MaterialSlot::Skin, &ShapeParameters::default(), 0);
        assert!(matches!(result, Err(FigureError::Texture(_))));
    }

    #[test]
    fn test_material_set_reports_missing_slot() {
        let params = ShapeParameters::default();
        let set = MaterialSet::build(
            &FlatColorTextures,
            &params,
            [MaterialSlot::Skin, MaterialSlot::Skin, MaterialSlot::Face],
            1,
        )
        .unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.get(MaterialSlot::Face).is_ok());
        assert_eq!(
            set.get(MaterialSlot::Hair),
            Err(FigureError::MissingMaterial(MaterialSlot::Hair))
        );
    }
}

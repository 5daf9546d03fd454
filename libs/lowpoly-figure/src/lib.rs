//! # Low-Poly Figure
//!
//! Procedural low-poly humanoid figures from a small set of shape
//! parameters.
//!
//! ## Architecture
//!
//! ```text
//! seed → ShapeParameters → part generators (rayon) → Assembler → AssembledFigure
//!                                                       ↓
//!                                                 MaterialSet (textures)
//! ```
//!
//! ## Conventions
//!
//! - Right-handed, +Y up, the figure faces +Z
//! - Triangles wind counter-clockwise seen from outside
//! - Every part is built around its own pivot and placed by translation
//!
//! ## Usage
//!
//! ```rust
//! use lowpoly_figure::generate_figure;
//!
//! let figure = generate_figure(42)?;
//! assert_eq!(figure.name(), "Figure_42");
//! assert!(figure.triangle_count() > 0);
//! # Ok::<(), lowpoly_figure::FigureError>(())
//! ```

pub mod assembler;
pub mod dimensions;
pub mod error;
pub mod materials;
pub mod params;
pub mod parts;
pub mod profile;

pub use assembler::{placement, AssembledFigure, Assembler, FigureExporter, PlacedPart};
pub use dimensions::{Anchors, BodyDimensions};
pub use error::FigureError;
pub use materials::{FlatColorTextures, MaterialSet, MaterialSlot, TextureBuffer, TextureProvider};
pub use params::{HairStyle, LowerClothing, Rgb, ShapeField, ShapeParameters, UpperClothing};
pub use parts::{PartGenerator, PartId, PartMesh, Side};

use config::GeneratorConfig;

/// Builds the figure for `seed` with the default configuration.
///
/// This is the main entry point for one-off generation. Use an
/// [`Assembler`] to keep a figure around and regenerate it.
pub fn generate_figure(seed: i32) -> Result<AssembledFigure, FigureError> {
    Assembler::new(GeneratorConfig::default()).assemble(ShapeParameters::create_random(Some(seed)))
}

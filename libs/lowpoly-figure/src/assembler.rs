//! # Assembler
//!
//! Generates every part of a figure, places each one at its joint anchor
//! and resolves its material slot.
//!
//! ## Placement
//!
//! Anchor heights come from [`BodyDimensions::anchors`], accumulated from
//! the ground up, so `offset(upper) - offset(lower) == extent(lower)` holds
//! for every stacked pair whatever the proportions.
//!
//! ## Lifetime
//!
//! The assembler owns at most one figure. [`Assembler::regenerate`] drops
//! the current figure before building the next one.
//!
//! ## Failure
//!
//! Any failing part aborts the whole pass; no partial figure is kept.

use config::GeneratorConfig;
use glam::DVec3;
use lowpoly_mesh::Mesh;
use rayon::prelude::*;

use crate::dimensions::BodyDimensions;
use crate::error::FigureError;
use crate::materials::{slot_for, FlatColorTextures, MaterialSet, MaterialSlot, TextureProvider};
use crate::params::ShapeParameters;
use crate::parts::hair::generator_for;
use crate::parts::{
    FootGenerator, HandGenerator, HeadGenerator, LimbGenerator, LimbSegment, LowerTorsoGenerator,
    NeckGenerator, PartGenerator, PartId, PartMesh, ShoulderJointGenerator, UpperTorsoGenerator,
};

/// A generated part at its place in the figure.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPart {
    pub id: PartId,
    /// Mesh in the part's local frame, pivot at the origin.
    pub mesh: Mesh,
    /// Translation of the pivot in figure space.
    pub offset: DVec3,
    pub extent: f64,
    pub material: MaterialSlot,
}

/// Receives a finished figure, e.g. to write it to an asset format.
pub trait FigureExporter {
    fn export(
        &mut self,
        name: &str,
        parts: &[PlacedPart],
        materials: &MaterialSet,
    ) -> Result<(), FigureError>;
}

/// One complete figure.
#[derive(Debug, Clone)]
pub struct AssembledFigure {
    name: String,
    params: ShapeParameters,
    parts: Vec<PlacedPart>,
    materials: MaterialSet,
}

impl AssembledFigure {
    /// Display name, `Figure_<seed>`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &ShapeParameters {
        &self.params
    }

    pub fn parts(&self) -> &[PlacedPart] {
        &self.parts
    }

    pub fn part(&self, id: PartId) -> Option<&PlacedPart> {
        self.parts.iter().find(|part| part.id == id)
    }

    pub fn materials(&self) -> &MaterialSet {
        &self.materials
    }

    pub fn triangle_count(&self) -> usize {
        self.parts.iter().map(|part| part.mesh.triangle_count()).sum()
    }

    /// All parts moved to their offsets and merged into one mesh.
    pub fn merged_mesh(&self) -> Mesh {
        let mut merged = Mesh::new(self.name.clone());
        for part in &self.parts {
            merged.merge(&part.mesh.translated(part.offset));
        }
        merged
    }

    /// Hands the figure to an export collaborator.
    pub fn export_with<E: FigureExporter + ?Sized>(
        &self,
        exporter: &mut E,
    ) -> Result<(), FigureError> {
        exporter.export(&self.name, &self.parts, &self.materials)
    }
}

/// Offset of a part's pivot in figure space.
pub fn placement(id: PartId, dims: &BodyDimensions) -> DVec3 {
    let anchors = dims.anchors();
    let side_x = |offset: f64| id.side().map_or(0.0, |side| side.sign() * offset);

    match id {
        PartId::LowerTorso => DVec3::new(0.0, anchors.hip, 0.0),
        PartId::UpperTorso => DVec3::new(0.0, anchors.waist, 0.0),
        PartId::Neck => DVec3::new(0.0, anchors.neck_base, 0.0),
        PartId::Head | PartId::Hair => DVec3::new(0.0, anchors.head_base, 0.0),
        PartId::Shoulder(_) => DVec3::new(side_x(dims.shoulder_offset), anchors.shoulder, 0.0),
        PartId::UpperArm(_) => DVec3::new(side_x(dims.shoulder_offset), anchors.elbow, 0.0),
        PartId::Forearm(_) => DVec3::new(side_x(dims.shoulder_offset), anchors.wrist, 0.0),
        PartId::Hand(_) => DVec3::new(side_x(dims.shoulder_offset), anchors.hand_base, 0.0),
        PartId::Thigh(_) => DVec3::new(side_x(dims.hip_offset), anchors.knee, 0.0),
        PartId::Calf(_) => DVec3::new(side_x(dims.hip_offset), anchors.ankle, 0.0),
        PartId::Foot(_) => DVec3::new(side_x(dims.hip_offset), anchors.ground, 0.0),
    }
}

type Job = (PartId, Box<dyn PartGenerator>);

/// Builds and owns the current figure.
pub struct Assembler {
    config: GeneratorConfig,
    textures: Box<dyn TextureProvider>,
    current: Option<AssembledFigure>,
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl Assembler {
    /// Assembler using flat-color textures.
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_textures(config, FlatColorTextures)
    }

    pub fn with_textures(
        config: GeneratorConfig,
        textures: impl TextureProvider + 'static,
    ) -> Self {
        Self {
            config,
            textures: Box::new(textures),
            current: None,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn current(&self) -> Option<&AssembledFigure> {
        self.current.as_ref()
    }

    /// Hands the current figure to the caller.
    pub fn take(&mut self) -> Option<AssembledFigure> {
        self.current.take()
    }

    /// Drops the current figure.
    pub fn clear(&mut self) {
        if let Some(old) = self.current.take() {
            log::debug!("released {}", old.name);
        }
    }

    /// Replaces the current figure with one built from `params`.
    ///
    /// The previous figure is released first. On error no figure is kept.
    pub fn regenerate(&mut self, params: ShapeParameters) -> Result<&AssembledFigure, FigureError> {
        self.clear();
        let figure = self.assemble(params)?;
        let current: &AssembledFigure = self.current.insert(figure);
        Ok(current)
    }

    /// Draws parameters from `seed` and regenerates.
    pub fn generate_random(&mut self, seed: Option<i32>) -> Result<&AssembledFigure, FigureError> {
        self.regenerate(ShapeParameters::create_random(seed))
    }

    /// Builds a figure without touching the current one.
    pub fn assemble(&self, params: ShapeParameters) -> Result<AssembledFigure, FigureError> {
        let jobs = self.jobs(&params);

        let generated: Vec<(PartId, PartMesh)> = if self.config.parallel_parts {
            jobs.par_iter()
                .map(|(id, generator)| run_job(*id, generator.as_ref(), &params))
                .collect::<Result<_, _>>()?
        } else {
            jobs.iter()
                .map(|(id, generator)| run_job(*id, generator.as_ref(), &params))
                .collect::<Result<_, _>>()?
        };

        let dims = BodyDimensions::from_params(&params);
        let parts: Vec<PlacedPart> = generated
            .into_iter()
            .map(|(id, part)| PlacedPart {
                id,
                offset: placement(id, &dims),
                extent: part.extent,
                material: slot_for(id, &params),
                mesh: part.mesh,
            })
            .collect();

        let materials = MaterialSet::build(
            self.textures.as_ref(),
            &params,
            parts.iter().map(|part| part.material),
            self.config.texture_scale,
        )?;

        let figure = AssembledFigure {
            name: params.display_name(),
            params,
            parts,
            materials,
        };

        log::info!(
            "assembled {} from seed {}: {} parts, {} triangles",
            figure.name,
            figure.params.seed,
            figure.parts.len(),
            figure.triangle_count()
        );

        Ok(figure)
    }

    fn jobs(&self, params: &ShapeParameters) -> Vec<Job> {
        let mut jobs = Vec::with_capacity(PartId::ALL.len());

        for id in PartId::ALL {
            let generator: Box<dyn PartGenerator> = match id {
                PartId::Head => Box::new(HeadGenerator),
                PartId::Hair => match generator_for(params.hair_style) {
                    Some(generator) => generator,
                    None => continue,
                },
                PartId::Neck => Box::new(NeckGenerator),
                PartId::UpperTorso => Box::new(UpperTorsoGenerator),
                PartId::LowerTorso => Box::new(LowerTorsoGenerator),
                PartId::Shoulder(_) => {
                    Box::new(ShoulderJointGenerator::new(self.config.joint_subdivisions))
                }
                PartId::UpperArm(_) => Box::new(LimbGenerator::new(LimbSegment::UpperArm)),
                PartId::Forearm(_) => Box::new(LimbGenerator::new(LimbSegment::Forearm)),
                PartId::Hand(_) => Box::new(HandGenerator),
                PartId::Thigh(_) => Box::new(LimbGenerator::new(LimbSegment::Thigh)),
                PartId::Calf(_) => Box::new(LimbGenerator::new(LimbSegment::Calf)),
                PartId::Foot(_) => Box::new(FootGenerator),
            };
            jobs.push((id, generator));
        }

        jobs
    }
}

fn run_job(
    id: PartId,
    generator: &dyn PartGenerator,
    params: &ShapeParameters,
) -> Result<(PartId, PartMesh), FigureError> {
    let part = generator.generate(params)?;
    log::debug!(
        "generated {id} ({}): {} vertices, {} triangles",
        generator.name(),
        part.mesh.vertex_count(),
        part.mesh.triangle_count()
    );
    Ok((id, part))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::HairStyle;
    use crate::parts::Side;

    fn sequential() -> Assembler {
        Assembler::new(GeneratorConfig::default().sequential())
    }

    #[test]
    fn test_regenerate_keeps_one_figure() {
        let mut assembler = sequential();
        assert!(assembler.current().is_none());

        let first = assembler.generate_random(Some(1)).unwrap().name().to_string();
        assert_eq!(first, "Figure_1");
        let second = assembler.generate_random(Some(2)).unwrap().name().to_string();
        assert_eq!(second, "Figure_2");
        assert_eq!(assembler.current().map(|f| f.name()), Some("Figure_2"));

        let taken = assembler.take().unwrap();
        assert_eq!(taken.name(), "Figure_2");
        assert!(assembler.current().is_none());
    }

    #[test]
    fn test_clear() {
        let mut assembler = sequential();
        assembler.regenerate(ShapeParameters::default()).unwrap();
        assembler.clear();
        assert!(assembler.current().is_none());
    }

    #[test]
    fn test_part_list() {
        let figure = sequential().assemble(ShapeParameters::default()).unwrap();
        assert_eq!(figure.parts().len(), PartId::ALL.len());
        assert!(figure.part(PartId::Hair).is_some());

        let bald = ShapeParameters {
            hair_style: HairStyle::Bald,
            ..ShapeParameters::default()
        };
        let figure = sequential().assemble(bald).unwrap();
        assert_eq!(figure.parts().len(), PartId::ALL.len() - 1);
        assert!(figure.part(PartId::Hair).is_none());
        assert!(!figure.materials().contains(MaterialSlot::Hair));
    }

    #[test]
    fn test_sides_are_mirrored() {
        let dims = BodyDimensions::from_params(&ShapeParameters::default());
        let left = placement(PartId::Hand(Side::Left), &dims);
        let right = placement(PartId::Hand(Side::Right), &dims);
        assert_eq!(left.x, -right.x);
        assert!(left.x > 0.0);
        assert_eq!(left.y, right.y);
    }

    #[test]
    fn test_every_material_is_present() {
        let figure = sequential().assemble(ShapeParameters::default()).unwrap();
        for part in figure.parts() {
            assert!(figure.materials().get(part.material).is_ok(), "{}", part.id);
        }
    }

    #[test]
    fn test_merged_mesh() {
        let figure = sequential().assemble(ShapeParameters::default()).unwrap();
        let merged = figure.merged_mesh();
        assert_eq!(merged.name(), "Figure_0");
        assert_eq!(merged.triangle_count(), figure.triangle_count());
        assert!(merged.validate().is_ok());

        let anchors = BodyDimensions::from_params(figure.params()).anchors();
        let (min, max) = merged.bounding_box();
        assert!(min.y.abs() < 0.01);
        assert!(max.y > anchors.head_base);
    }

    struct Recorder {
        name: String,
        parts: usize,
    }

    impl FigureExporter for Recorder {
        fn export(
            &mut self,
            name: &str,
            parts: &[PlacedPart],
            materials: &MaterialSet,
        ) -> Result<(), FigureError> {
            self.name = name.to_string();
            self.parts = parts.len();
            for part in parts {
                materials.get(part.material)?;
            }
            Ok(())
        }
    }

    #[test]
    fn test_export_with() {
        let figure = sequential().assemble(ShapeParameters::create_random(Some(5))).unwrap();
        let mut recorder = Recorder {
            name: String::new(),
            parts: 0,
        };
        figure.export_with(&mut recorder).unwrap();
        assert_eq!(recorder.name, "Figure_5");
        assert_eq!(recorder.parts, figure.parts().len());
    }
}

use glam::DVec3;

use super::hair::{generate_hair, generator_for, SpikyHair};
use super::*;
use crate::dimensions::BodyDimensions;
use crate::params::{HairStyle, ShapeField};
use config::constants::{HEAD_SEGMENTS, SPIKE_COUNT};

fn closed_generators() -> Vec<Box<dyn PartGenerator>> {
    vec![
        Box::new(UpperTorsoGenerator),
        Box::new(LowerTorsoGenerator),
        Box::new(NeckGenerator),
        Box::new(LimbGenerator::new(LimbSegment::UpperArm)),
        Box::new(LimbGenerator::new(LimbSegment::Forearm)),
        Box::new(LimbGenerator::new(LimbSegment::Thigh)),
        Box::new(LimbGenerator::new(LimbSegment::Calf)),
        Box::new(HandGenerator),
        Box::new(ShoulderJointGenerator::new(1)),
    ]
}

/// Ring vertices of the head, level-major.
fn head_ring(params: &ShapeParameters, level: usize) -> Vec<DVec3> {
    let part = HeadGenerator.generate(params).unwrap();
    let start = level * HEAD_SEGMENTS;
    part.mesh.vertices()[start..start + HEAD_SEGMENTS].to_vec()
}

#[test]
fn test_closed_parts_are_watertight() {
    let params = ShapeParameters::default();
    for generator in closed_generators() {
        let part = generator.generate(&params).unwrap();
        assert!(part.mesh.validate().is_ok(), "{}", generator.name());
        assert_eq!(part.mesh.boundary_edge_count(), 0, "{}", generator.name());
        assert!(part.mesh.signed_volume() > 0.0, "{} is inside out", generator.name());
    }
}

#[test]
fn test_head_is_closed_apart_from_nose() {
    let part = HeadGenerator.generate(&ShapeParameters::default()).unwrap();
    assert!(part.mesh.validate().is_ok());
    // Five loose nose triangles
    assert_eq!(part.mesh.boundary_edge_count(), 15);
    assert!(part.mesh.signed_volume() > 0.0);
    assert_eq!(part.mesh.name(), "Head");
}

#[test]
fn test_foot_shell_is_closed_apart_from_wedges() {
    let part = FootGenerator.generate(&ShapeParameters::default()).unwrap();
    assert!(part.mesh.validate().is_ok());
    // Two wedges of four loose triangles
    assert_eq!(part.mesh.boundary_edge_count(), 24);
    assert!(part.mesh.signed_volume() > 0.0);

    let dims = BodyDimensions::from_params(&ShapeParameters::default());
    let (min, max) = part.mesh.bounding_box();
    assert!(max.z > dims.foot_length * 0.5, "toe reaches forward");
    assert!(min.z < 0.0, "heel reaches back");
}

#[test]
fn test_extents_follow_dimensions() {
    let params = ShapeParameters::default()
        .with(ShapeField::Height, 1.1)
        .with(ShapeField::ArmLength, 0.9);
    let dims = BodyDimensions::from_params(&params);

    let cases: Vec<(Box<dyn PartGenerator>, f64)> = vec![
        (Box::new(HeadGenerator), dims.head.y),
        (Box::new(NeckGenerator), dims.neck),
        (Box::new(UpperTorsoGenerator), dims.upper_torso),
        (Box::new(LowerTorsoGenerator), dims.lower_torso),
        (Box::new(LimbGenerator::new(LimbSegment::UpperArm)), dims.upper_arm),
        (Box::new(LimbGenerator::new(LimbSegment::Forearm)), dims.forearm),
        (Box::new(LimbGenerator::new(LimbSegment::Thigh)), dims.thigh),
        (Box::new(LimbGenerator::new(LimbSegment::Calf)), dims.calf),
        (Box::new(HandGenerator), dims.hand()),
        (Box::new(FootGenerator), dims.foot_height),
    ];

    for (generator, expected) in cases {
        let part = generator.generate(&params).unwrap();
        assert!(
            (part.extent - expected).abs() < 1e-12,
            "{}: {} != {}",
            generator.name(),
            part.extent,
            expected
        );

        // Pivot at the bottom, top joint at the extent
        let (min, max) = part.mesh.bounding_box();
        assert!(min.y.abs() < 0.015, "{} min {}", generator.name(), min.y);
        assert!((max.y - expected).abs() < 0.02, "{} max {}", generator.name(), max.y);
    }
}

#[test]
fn test_shoulder_joint_is_centered() {
    let part = ShoulderJointGenerator::new(2)
        .generate(&ShapeParameters::default())
        .unwrap();
    let radius = ShoulderJointGenerator::radius();
    assert_eq!(part.extent, radius * 2.0);
    for v in part.mesh.vertices() {
        assert!((v.length() - radius).abs() < 1e-9);
    }
}

#[test]
fn test_jaw_width_changes_only_lower_face() {
    let narrow = ShapeParameters::default().with(ShapeField::JawWidth, 0.0);
    let wide = ShapeParameters::default().with(ShapeField::JawWidth, 1.0);

    for level in 0..HEAD_SEGMENTS {
        let changed = head_ring(&narrow, level) != head_ring(&wide, level);
        assert_eq!(changed, level == 5 || level == 6, "level {level}");
    }

    let cheek_narrow = head_ring(&narrow, 6);
    let cheek_wide = head_ring(&wide, 6);
    let max_x = |ring: &[DVec3]| ring.iter().map(|v| v.x).fold(f64::MIN, f64::max);
    assert!(max_x(&cheek_wide) > max_x(&cheek_narrow));
}

#[test]
fn test_chin_changes_only_chin_tip() {
    let round = ShapeParameters::default().with(ShapeField::ChinPointiness, 0.0);
    let pointed = ShapeParameters::default().with(ShapeField::ChinPointiness, 1.0);

    for level in 0..HEAD_SEGMENTS {
        let changed = head_ring(&round, level) != head_ring(&pointed, level);
        assert_eq!(changed, level == 7, "level {level}");
    }
}

#[test]
fn test_profile_angle_moves_only_the_face() {
    let flat = ShapeParameters::default();
    let forward = flat.clone().with(ShapeField::FaceProfileAngle, 0.3);

    for level in 0..HEAD_SEGMENTS {
        let before = head_ring(&flat, level);
        let after = head_ring(&forward, level);
        for (a, b) in before.iter().zip(&after) {
            if a.z.abs() < 1e-9 {
                continue;
            }
            let expect_shift = (2..=6).contains(&level) && a.z > 0.0;
            assert_eq!(a != b, expect_shift, "level {level} vertex {a:?}");
            if expect_shift {
                assert!(b.z > a.z);
            }
        }
    }
}

#[test]
fn test_hair_styles() {
    let head_height = BodyDimensions::from_params(&ShapeParameters::default()).head.y;

    for &style in HairStyle::ALL {
        let params = ShapeParameters {
            hair_style: style,
            ..ShapeParameters::default()
        };
        let hair = generate_hair(&params).unwrap();

        if style == HairStyle::Bald {
            assert!(hair.is_none());
            assert!(generator_for(style).is_none());
            continue;
        }

        let hair = hair.unwrap();
        assert_eq!(hair.mesh.name(), "Hair");
        assert!(hair.mesh.triangle_count() > 0, "{style}");
        assert!(hair.mesh.validate().is_ok(), "{style}");
        assert_eq!(hair.extent, head_height);
    }
}

#[test]
fn test_short_hair_is_open_at_the_bottom() {
    let hair = generator_for(HairStyle::Short)
        .unwrap()
        .generate(&ShapeParameters::default())
        .unwrap();
    assert_eq!(hair.mesh.boundary_edge_count(), 8);
}

#[test]
fn test_long_hair_is_closed() {
    let hair = generator_for(HairStyle::Long)
        .unwrap()
        .generate(&ShapeParameters::default())
        .unwrap();
    assert_eq!(hair.mesh.boundary_edge_count(), 0);
    assert!(hair.mesh.signed_volume() > 0.0);
}

#[test]
fn test_spiky_hair_triangles() {
    let hair = SpikyHair.generate(&ShapeParameters::default()).unwrap();
    assert_eq!(hair.mesh.triangle_count(), 8 + SPIKE_COUNT * 4);

    let first = SpikyHair::spike_angle(0);
    let last = SpikyHair::spike_angle(SPIKE_COUNT - 1);
    assert!((first + std::f64::consts::PI * 0.75).abs() < 1e-12);
    assert!((last - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn test_part_names() {
    assert_eq!(PartId::UpperArm(Side::Left).to_string(), "LeftUpperArm");
    assert_eq!(PartId::Foot(Side::Right).to_string(), "RightFoot");
    assert_eq!(PartId::UpperTorso.to_string(), "UpperBody");
    assert_eq!(PartId::Head.side(), None);
    assert_eq!(Side::Left.sign(), -Side::Right.sign());
}

#[test]
fn test_extreme_parameters_still_build() {
    for field in ShapeField::ALL {
        for value in [*field.authoring_range().start(), *field.authoring_range().end()] {
            let params = ShapeParameters::default().with(field, value);
            let mut generators = closed_generators();
            generators.push(Box::new(HeadGenerator));
            generators.push(Box::new(FootGenerator));
            for generator in generators {
                let part = generator.generate(&params).unwrap();
                assert!(
                    part.mesh.validate().is_ok(),
                    "{} at {}={value}",
                    generator.name(),
                    field.name()
                );
            }
            generate_hair(&params).unwrap();
        }
    }
}

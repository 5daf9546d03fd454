use super::random::{hair_color, skin_color};
use super::*;
use crate::error::FigureError;

#[test]
fn test_defaults_match_field_table() {
    let params = ShapeParameters::default();
    for field in ShapeField::ALL {
        assert_eq!(params.get(field), field.default_value(), "{}", field.name());
        assert!(field.authoring_range().contains(&field.default_value()));
    }
    assert_eq!(params.hair_style, HairStyle::Short);
    assert_eq!(params.upper_clothing, UpperClothing::TShirt);
    assert_eq!(params.lower_clothing, LowerClothing::Pants);
}

#[test]
fn test_draw_range_inside_authoring_range() {
    for field in ShapeField::ALL {
        let draw = field.draw_range();
        let authoring = field.authoring_range();
        assert!(authoring.contains(draw.start()), "{}", field.name());
        assert!(authoring.contains(draw.end()), "{}", field.name());
    }
}

#[test]
fn test_set_and_get_every_field() {
    let mut params = ShapeParameters::default();
    for (i, field) in ShapeField::ALL.into_iter().enumerate() {
        params.set(field, i as f64);
    }
    for (i, field) in ShapeField::ALL.into_iter().enumerate() {
        assert_eq!(params.get(field), i as f64);
    }
}

#[test]
fn test_clamped() {
    let params = ShapeParameters::default()
        .with(ShapeField::Height, 3.0)
        .with(ShapeField::FaceProfileAngle, -1.0)
        .with(ShapeField::JawWidth, 0.25);
    let clamped = params.clamped();
    assert_eq!(clamped.height, 1.2);
    assert_eq!(clamped.face_profile_angle, -0.3);
    assert_eq!(clamped.jaw_width, 0.25);
}

#[test]
fn test_create_random_is_deterministic() {
    for seed in [0, 1, 42, 1234, i32::MAX - 1] {
        let a = ShapeParameters::create_random(Some(seed));
        let b = ShapeParameters::create_random(Some(seed));
        assert_eq!(a, b);
        assert_eq!(a.seed, seed);
    }
}

#[test]
fn test_different_seeds_differ() {
    let a = ShapeParameters::create_random(Some(1));
    let b = ShapeParameters::create_random(Some(2));
    assert_ne!(a, b);
}

#[test]
fn test_draws_stay_in_draw_ranges() {
    for seed in 0..200 {
        let params = ShapeParameters::create_random(Some(seed));
        for field in ShapeField::ALL {
            assert!(
                field.draw_range().contains(&params.get(field)),
                "seed {seed}: {} = {}",
                field.name(),
                params.get(field)
            );
        }
        assert!(CLOTHING_PALETTE.contains(&params.upper_clothing_color));
        assert!(CLOTHING_PALETTE.contains(&params.lower_clothing_color));
    }
}

#[test]
fn test_height_is_first_draw() {
    // The first value out of the generator decides the height
    let mut rng = create_rng(42);
    let expected = rand::Rng::gen_range(&mut rng, ShapeField::Height.draw_range());
    let params = ShapeParameters::create_random(Some(42));
    assert_eq!(params.height, expected);

    let shoulder = rand::Rng::gen_range(&mut rng, ShapeField::ShoulderWidth.draw_range());
    assert_eq!(params.shoulder_width, shoulder);
}

#[test]
fn test_negative_seed_draws_fresh_seed() {
    let params = ShapeParameters::create_random(Some(-5));
    assert!(params.seed >= 0);
    let again = ShapeParameters::create_random(Some(params.seed));
    assert_eq!(params, again);

    assert!(ShapeParameters::create_random(None).seed >= 0);
}

#[test]
fn test_every_style_is_reachable() {
    let mut seen = std::collections::HashSet::new();
    for seed in 0..500 {
        seen.insert(ShapeParameters::create_random(Some(seed)).hair_style);
    }
    assert_eq!(seen.len(), HairStyle::ALL.len());
}

#[test]
fn test_palettes() {
    assert_eq!(hair_color(0.0), Rgb::new(0.1, 0.08, 0.06));
    assert_eq!(hair_color(0.7), Rgb::new(0.85, 0.7, 0.4));
    assert_eq!(hair_color(0.99), Rgb::new(0.5, 0.5, 0.5));
    assert_eq!(skin_color(0.3), Rgb::new(0.87, 0.72, 0.60));
    assert_eq!(skin_color(0.9), Rgb::new(0.45, 0.32, 0.22));
}

#[test]
fn test_skin_shade_is_darker() {
    let params = ShapeParameters::default();
    let shade = params.skin_shade_color;
    assert!(shade.r < params.skin_color.r);
    assert!(shade.g < params.skin_color.g);
    assert!(shade.b < params.skin_color.b);
}

#[test]
fn test_random_shade_follows_skin() {
    for seed in [0, 42, 1234] {
        let params = ShapeParameters::create_random(Some(seed));
        assert_eq!(params.skin_shade_color, params.skin_color.scaled(0.85));
    }
}

#[test]
fn test_shade_can_be_authored() {
    let partial: ShapeParameters =
        serde_json::from_str(r#"{"skin_shade_color": {"r": 0.3, "g": 0.2, "b": 0.1}}"#).unwrap();
    assert_eq!(partial.skin_shade_color, Rgb::new(0.3, 0.2, 0.1));
    assert_eq!(partial.skin_color, ShapeParameters::default().skin_color);
}

#[test]
fn test_rgba8() {
    assert_eq!(Rgb::WHITE.to_rgba8(), [255, 255, 255, 255]);
    assert_eq!(Rgb::new(2.0, -1.0, 0.5).to_rgba8(), [255, 0, 128, 255]);
}

#[test]
fn test_style_parsing() {
    assert_eq!(HairStyle::try_from(0).unwrap(), HairStyle::Bald);
    assert_eq!(HairStyle::try_from(5).unwrap(), HairStyle::Slicked);
    assert_eq!("Spiky".parse::<HairStyle>().unwrap(), HairStyle::Spiky);
    assert_eq!(" shorts ".parse::<LowerClothing>().unwrap(), LowerClothing::Shorts);
    assert_eq!(UpperClothing::try_from(2).unwrap(), UpperClothing::Jacket);

    assert!(matches!(
        HairStyle::try_from(6),
        Err(FigureError::UnsupportedStyle { kind: "hair", .. })
    ));
    assert!(matches!(
        "kilt".parse::<LowerClothing>(),
        Err(FigureError::UnsupportedStyle { .. })
    ));
    assert!(UpperClothing::try_from(3).is_err());
}

#[test]
fn test_preset_serde() {
    let params = ShapeParameters {
        hair_style: HairStyle::Spiky,
        lower_clothing: LowerClothing::Shorts,
        seed: 99,
        ..ShapeParameters::default()
    }
    .with(ShapeField::Height, 1.1);
    let json = serde_json::to_string(&params).unwrap();
    let back: ShapeParameters = serde_json::from_str(&json).unwrap();
    assert_eq!(params, back);

    // Missing fields fall back to defaults
    let partial: ShapeParameters =
        serde_json::from_str(r#"{"height": 1.1, "hair_style": "Long"}"#).unwrap();
    assert_eq!(partial.height, 1.1);
    assert_eq!(partial.hair_style, HairStyle::Long);
    assert_eq!(partial.jaw_width, 0.5);
}

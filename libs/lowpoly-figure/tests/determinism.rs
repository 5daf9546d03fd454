use config::GeneratorConfig;
use lowpoly_figure::{generate_figure, Assembler, ShapeField, ShapeParameters};

#[test]
fn same_seed_same_figure() {
    let first = generate_figure(42).unwrap();
    let second = generate_figure(42).unwrap();

    assert_eq!(first.params(), second.params());
    assert_eq!(first.parts(), second.parts());
    assert_eq!(first.merged_mesh(), second.merged_mesh());
}

#[test]
fn different_seeds_differ() {
    let a = ShapeParameters::create_random(Some(1));
    let b = ShapeParameters::create_random(Some(2));
    assert_ne!(a, b);
}

#[test]
fn seed_42_draws_inside_ranges() {
    let params = ShapeParameters::create_random(Some(42));
    assert_eq!(params.seed, 42);
    for field in ShapeField::ALL {
        let value = params.get(field);
        assert!(
            field.draw_range().contains(&value),
            "{} = {value} outside {:?}",
            field.name(),
            field.draw_range()
        );
    }
}

#[test]
fn parallel_matches_sequential() {
    let params = ShapeParameters::create_random(Some(7));
    let parallel = Assembler::new(GeneratorConfig::default())
        .assemble(params.clone())
        .unwrap();
    let sequential = Assembler::new(GeneratorConfig::default().sequential())
        .assemble(params)
        .unwrap();

    assert_eq!(parallel.parts(), sequential.parts());
}

#[test]
fn fresh_seed_is_recorded() {
    let params = ShapeParameters::create_random(None);
    assert!(params.seed >= 0);
    assert_eq!(ShapeParameters::create_random(Some(params.seed)), params);
}

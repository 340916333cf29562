use atoms::{AtomError, AtomScene, Nucleon, NucleusConfig, PlacementStrategy};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn scene(seed: u64) -> AtomScene {
    AtomScene::new(StdRng::seed_from_u64(seed))
}

#[test]
fn hydrogen_then_thorium_leaves_only_thorium() {
    let mut scene = scene(1);

    let hydrogen = scene.select(1).unwrap();
    assert_eq!(hydrogen.nucleus.placed(), 1);
    assert_eq!(hydrogen.electrons.len(), 1);

    let thorium = scene.select(90).unwrap();
    assert_eq!(thorium.element.name, "Thorium");
    assert_eq!(thorium.counts.electrons, 90);
    assert_eq!(thorium.electrons.len(), 60);
    assert_eq!(thorium.electrons.dropped, 30);
    assert!(thorium.nucleus.placed() <= 232);
    assert!(thorium.nucleus.count(Nucleon::Proton) <= 90);
}

#[test]
fn every_element_builds_within_limits() {
    let mut scene = scene(2);
    for z in 1..=118u8 {
        let atom = scene.select(z).unwrap();
        assert!(atom.nucleus.placed() as u32 <= atom.counts.nucleons());
        assert_eq!(atom.electrons.len() as u32, atom.counts.electrons.min(60));
    }
}

#[test]
fn grid_preset_oxygen() {
    let mut scene = scene(3);
    scene.set_nucleus_config(NucleusConfig::sparse_grid()).unwrap();
    assert_eq!(scene.nucleus_config.strategy, PlacementStrategy::Grid);

    let oxygen = scene.select(8).unwrap();
    assert!(oxygen.nucleus.placed() <= 16);
    assert!(oxygen.nucleus.particle_radius < 1.75);
}

#[test]
fn out_of_range_selection_is_rejected() {
    let mut scene = scene(4);
    assert!(matches!(scene.select(0), Err(AtomError::UnknownElement(0))));
    assert!(scene.current().is_none());
}

//! Current selection and its animation state, independent of the GPU

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::atom::{assemble, AnimationConfig, AtomGroup};
use crate::electrons::OrbitConfig;
use crate::elements::{self, ParticleCounts};
use crate::error::AtomError;
use crate::nucleus::NucleusConfig;

pub struct AtomScene {
    pub nucleus_config: NucleusConfig,
    pub orbit_config: OrbitConfig,
    pub animation: AnimationConfig,
    pub paused: bool,
    rng: StdRng,
    current: Option<AtomGroup>,
}

impl AtomScene {
    pub fn new(rng: StdRng) -> Self {
        Self {
            nucleus_config: NucleusConfig::default(),
            orbit_config: OrbitConfig::default(),
            animation: AnimationConfig::default(),
            paused: false,
            rng,
            current: None,
        }
    }

    /// Scene seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn current(&self) -> Option<&AtomGroup> {
        self.current.as_ref()
    }

    /// Replace the displayed atom with a freshly built one for `atomic_number`.
    ///
    /// On error the previous atom stays in place.
    pub fn select(&mut self, atomic_number: u8) -> Result<&AtomGroup, AtomError> {
        let element = elements::element(atomic_number)?;
        let counts = ParticleCounts::for_element(element)?;

        log::info!(
            "Selected {} ({}): {} protons, {} neutrons, {} electrons",
            element.name,
            element.symbol,
            counts.protons,
            counts.neutrons,
            counts.electrons
        );

        let atom = assemble(
            element,
            counts,
            self.nucleus_config,
            &self.orbit_config,
            &mut self.rng,
        );
        Ok(self.current.insert(atom))
    }

    /// Rebuild the current element with fresh random draws
    pub fn rebuild(&mut self) -> Result<(), AtomError> {
        if let Some(atomic_number) = self.current.as_ref().map(|atom| atom.element.atomic_number) {
            self.select(atomic_number)?;
        }
        Ok(())
    }

    pub fn set_nucleus_config(&mut self, config: NucleusConfig) -> Result<(), AtomError> {
        self.nucleus_config = config;
        self.rebuild()
    }

    /// One animation frame
    pub fn update(&mut self) {
        if self.paused {
            return;
        }
        if let Some(atom) = self.current.as_mut() {
            atom.update(&self.animation, self.orbit_config.angular_step);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nucleus::PlacementStrategy;

    fn scene() -> AtomScene {
        AtomScene::new(StdRng::seed_from_u64(5))
    }

    #[test]
    fn selection_replaces_previous_atom() {
        let mut scene = scene();
        scene.select(1).unwrap();
        let hydrogen_radius = scene.current().unwrap().nucleus.particle_radius;
        assert_eq!(hydrogen_radius, scene.nucleus_config.nucleus_radius);

        let thorium = scene.select(90).unwrap();
        assert_eq!(thorium.element.symbol, "Th");
        assert_eq!(thorium.counts.protons, 90);
        assert_eq!(thorium.electrons.len(), 60);
        assert!(thorium.nucleus.placed() > 1);
        assert!(thorium.nucleus.placed() <= 232);
        assert!(thorium.nucleus.particle_radius < hydrogen_radius);
    }

    #[test]
    fn failed_selection_keeps_current_atom() {
        let mut scene = scene();
        scene.select(8).unwrap();
        assert!(matches!(scene.select(200), Err(AtomError::UnknownElement(200))));
        assert_eq!(scene.current().unwrap().element.symbol, "O");
    }

    #[test]
    fn config_change_rebuilds_same_element() {
        let mut scene = scene();
        scene.select(8).unwrap();
        let config = NucleusConfig {
            strategy: PlacementStrategy::Grid,
            ..scene.nucleus_config
        };
        scene.set_nucleus_config(config).unwrap();

        let atom = scene.current().unwrap();
        assert_eq!(atom.element.symbol, "O");
        assert_eq!(scene.nucleus_config.strategy, PlacementStrategy::Grid);
    }

    #[test]
    fn paused_scene_does_not_move() {
        let mut scene = scene();
        scene.select(3).unwrap();
        scene.paused = true;
        let before = scene.current().unwrap().electrons.electrons[0].angle;
        scene.update();
        assert_eq!(scene.current().unwrap().electrons.electrons[0].angle, before);

        scene.paused = false;
        scene.update();
        assert!(scene.current().unwrap().electrons.electrons[0].angle > before);
    }

    #[test]
    fn rebuild_without_selection_is_a_no_op() {
        let mut scene = scene();
        scene.rebuild().unwrap();
        assert!(scene.current().is_none());
    }
}

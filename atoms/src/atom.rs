//! A complete atom: nucleus plus orbiting electrons

use glam::Vec2;
use rand::Rng;

use crate::electrons::{ElectronModel, ElectronOrbitController, OrbitConfig};
use crate::elements::{Element, ParticleCounts};
use crate::nucleus::{NucleusBuilder, NucleusConfig, NucleusModel};

/// Per-frame motion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    /// Nucleus rotation added each frame about X and Y, radians
    pub nucleus_spin: Vec2,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            nucleus_spin: Vec2::splat(0.025),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AtomGroup {
    pub element: &'static Element,
    pub counts: ParticleCounts,
    pub nucleus: NucleusModel,
    pub electrons: ElectronModel,
}

impl AtomGroup {
    /// Advance one rendered frame
    pub fn update(&mut self, animation: &AnimationConfig, orbit_step: f32) {
        self.nucleus.rotate(animation.nucleus_spin);
        self.electrons.advance(orbit_step);
    }
}

/// Build a fresh atom for `element`. Nothing is carried over from any previous atom.
pub fn assemble<R: Rng + ?Sized>(
    element: &'static Element,
    counts: ParticleCounts,
    nucleus_config: NucleusConfig,
    orbit_config: &OrbitConfig,
    rng: &mut R,
) -> AtomGroup {
    let nucleus = NucleusBuilder::new(nucleus_config).build(counts.protons, counts.neutrons, rng);
    let electrons = ElectronOrbitController::new(orbit_config.clone()).build(counts.electrons, rng);

    AtomGroup {
        element,
        counts,
        nucleus,
        electrons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn carbon() -> AtomGroup {
        let element = elements::element(6).unwrap();
        let counts = ParticleCounts::for_element(element).unwrap();
        assemble(
            element,
            counts,
            NucleusConfig::default(),
            &OrbitConfig::default(),
            &mut StdRng::seed_from_u64(11),
        )
    }

    #[test]
    fn composes_nucleus_and_electrons() {
        let atom = carbon();
        assert_eq!(atom.element.symbol, "C");
        assert_eq!(atom.nucleus.placed(), 12);
        assert_eq!(atom.electrons.len(), 6);
    }

    #[test]
    fn update_spins_nucleus_and_moves_electrons() {
        let mut atom = carbon();
        let start = atom.electrons.electrons[0].angle;
        let animation = AnimationConfig::default();

        atom.update(&animation, 0.05);
        atom.update(&animation, 0.05);

        assert!((atom.nucleus.rotation - Vec2::splat(0.05)).length() < 1e-6);
        assert!((atom.electrons.electrons[0].angle - start - 0.1).abs() < 1e-6);
    }
}

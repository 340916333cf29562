//! Nucleus packing
//!
//! Builds the nucleus as a cluster of equal spheres inside a bounding sphere:
//! - particle radius back-derived from a target packing efficiency
//! - candidates scanned on a simple cubic or HCP-like lattice
//! - proton/neutron categories drawn at random in placement order

use glam::{EulerRot, Quat, Vec2, Vec3};
use rand::Rng;

/// Nuclei up to this many particles use the tight HCP spacing and wide scan bounds
pub const SMALL_NUCLEUS: u32 = 13;

/// Grid spacing as a multiple of the particle radius
const GRID_SPACING: f32 = 1.8;

/// Candidate lattice used to place particles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementStrategy {
    /// Simple cubic grid over `[-R, R]`
    Grid,
    /// Hexagonal-close-packed-like layers with alternating row offsets
    Hcp,
}

impl PlacementStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            PlacementStrategy::Grid => "Grid",
            PlacementStrategy::Hcp => "HCP",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            PlacementStrategy::Grid => PlacementStrategy::Hcp,
            PlacementStrategy::Hcp => PlacementStrategy::Grid,
        }
    }
}

/// Tunable nucleus constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NucleusConfig {
    /// Fraction of the bounding sphere volume filled by particles
    pub efficiency: f32,
    /// Radius of the bounding sphere
    pub nucleus_radius: f32,
    pub strategy: PlacementStrategy,
}

impl NucleusConfig {
    /// Half-filled sphere of radius 3 on the HCP lattice
    pub fn hcp() -> Self {
        Self {
            efficiency: 0.5,
            nucleus_radius: 3.0,
            strategy: PlacementStrategy::Hcp,
        }
    }

    /// Loosely packed small nucleus on a cubic grid
    pub fn sparse_grid() -> Self {
        Self {
            efficiency: 0.33,
            nucleus_radius: 1.75,
            strategy: PlacementStrategy::Grid,
        }
    }

    /// FCC-like efficiency in a large sphere on a cubic grid
    pub fn dense_grid() -> Self {
        Self {
            efficiency: 0.74,
            nucleus_radius: 10.0,
            strategy: PlacementStrategy::Grid,
        }
    }

    /// Radius at which `count` spheres fill `efficiency` of the bounding volume
    pub fn particle_radius(&self, count: u32) -> f32 {
        let count = count.max(1) as f32;
        (3.0 * self.efficiency * self.nucleus_radius.powi(3) / (4.0 * count)).cbrt()
    }
}

impl Default for NucleusConfig {
    fn default() -> Self {
        Self::hcp()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nucleon {
    Proton,
    Neutron,
}

/// A placed proton or neutron, in nucleus-local coordinates
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub position: Vec3,
    pub kind: Nucleon,
}

/// Built nucleus: placed particles plus the boundary sphere
#[derive(Debug, Clone)]
pub struct NucleusModel {
    pub particles: Vec<Particle>,
    pub particle_radius: f32,
    pub boundary_radius: f32,
    /// Number of particles asked for; may exceed `particles.len()`
    pub requested: u32,
    /// Rigid rotation about X and Y, radians
    pub rotation: Vec2,
}

impl NucleusModel {
    pub fn placed(&self) -> usize {
        self.particles.len()
    }

    /// Whether every requested particle found a lattice site
    pub fn is_complete(&self) -> bool {
        self.placed() as u64 == u64::from(self.requested)
    }

    pub fn count(&self, kind: Nucleon) -> usize {
        self.particles.iter().filter(|p| p.kind == kind).count()
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0)
    }

    pub fn rotate(&mut self, delta: Vec2) {
        self.rotation += delta;
    }

    /// Particle positions with the rigid rotation applied
    pub fn world_particles(&self) -> impl Iterator<Item = Particle> + '_ {
        let orientation = self.orientation();
        self.particles.iter().map(move |p| Particle {
            position: orientation * p.position,
            kind: p.kind,
        })
    }
}

/// Remaining protons and neutrons, drawn without replacement.
///
/// Drawing one entry at a time yields the same distribution as shuffling the
/// whole multiset up front, without allocating it for huge counts.
#[derive(Debug, Clone, Copy)]
struct NucleonBag {
    protons: u64,
    neutrons: u64,
}

impl NucleonBag {
    fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Nucleon> {
        let total = self.protons + self.neutrons;
        if total == 0 {
            return None;
        }
        if rng.gen_range(0..total) < self.neutrons {
            self.neutrons -= 1;
            Some(Nucleon::Neutron)
        } else {
            self.protons -= 1;
            Some(Nucleon::Proton)
        }
    }
}

pub struct NucleusBuilder {
    config: NucleusConfig,
}

impl NucleusBuilder {
    pub fn new(config: NucleusConfig) -> Self {
        Self { config }
    }

    /// Place `protons + neutrons` particles inside the bounding sphere.
    ///
    /// Stops at the requested count; if the lattice runs out first the
    /// remaining particles are simply not placed.
    pub fn build<R: Rng + ?Sized>(&self, protons: u32, neutrons: u32, rng: &mut R) -> NucleusModel {
        let requested = protons.saturating_add(neutrons);
        let nucleus_radius = self.config.nucleus_radius;
        let mut bag = NucleonBag {
            protons: u64::from(protons),
            neutrons: u64::from(neutrons),
        };

        let mut model = NucleusModel {
            particles: Vec::new(),
            particle_radius: self.config.particle_radius(requested),
            boundary_radius: nucleus_radius,
            requested,
            rotation: Vec2::ZERO,
        };

        match requested {
            0 => {}
            // A lone nucleon fills the whole nucleus
            1 => {
                if let Some(kind) = bag.draw(rng) {
                    model.particle_radius = nucleus_radius;
                    model.particles.push(Particle {
                        position: Vec3::ZERO,
                        kind,
                    });
                }
            }
            _ => {
                let particle_radius = model.particle_radius;
                let accepted = self
                    .candidates(particle_radius, requested)
                    .filter(|position| position.length() + particle_radius <= nucleus_radius)
                    .take(requested as usize);

                for position in accepted {
                    let Some(kind) = bag.draw(rng) else { break };
                    model.particles.push(Particle { position, kind });
                }
            }
        }

        log::info!(
            "Nucleus created with {} particles out of {} ({} lattice)",
            model.placed(),
            requested,
            self.config.strategy.name()
        );
        if !model.is_complete() {
            log::debug!(
                "Lattice exhausted: {} particles left unplaced",
                u64::from(requested) - model.placed() as u64
            );
        }

        model
    }

    /// Lattice points in scan order
    fn candidates(&self, particle_radius: f32, count: u32) -> Box<dyn Iterator<Item = Vec3>> {
        let radius = self.config.nucleus_radius;
        let small = count <= SMALL_NUCLEUS;

        match self.config.strategy {
            PlacementStrategy::Grid => {
                let step = GRID_SPACING * particle_radius;
                if !usable_step(step) {
                    return Box::new(std::iter::empty());
                }
                Box::new(axis(-radius, radius, step).flat_map(move |x| {
                    axis(-radius, radius, step).flat_map(move |y| {
                        axis(-radius, radius, step).map(move |z| Vec3::new(x, y, z))
                    })
                }))
            }
            PlacementStrategy::Hcp => {
                // Overlapping spheres pack small nuclei more convincingly
                let spacing = particle_radius * if small { 0.9 } else { 1.2 };
                let bound = radius * if small { 1.75 } else { 1.2 };
                let layer_step = spacing * (2.0f32 / 3.0).sqrt();
                let row_step = spacing * 3.0f32.sqrt();
                if !usable_step(layer_step) {
                    return Box::new(std::iter::empty());
                }
                Box::new(axis(-bound, bound, layer_step).flat_map(move |z| {
                    let even_layer = ((z / layer_step).round() as i64).rem_euclid(2) == 0;
                    let offset = if even_layer { spacing / 2.0 } else { 0.0 };
                    axis(-bound, bound, spacing).flat_map(move |y| {
                        axis(-bound, bound, row_step).map(move |x| Vec3::new(x + offset, y, z))
                    })
                }))
            }
        }
    }
}

fn usable_step(step: f32) -> bool {
    step.is_finite() && step > 0.0
}

/// `start, start + step, ...` up to and including `end`
fn axis(start: f32, end: f32, step: f32) -> impl Iterator<Item = f32> {
    std::iter::successors(Some(start), move |v| Some(v + step)).take_while(move |v| *v <= end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn assert_inside(model: &NucleusModel) {
        for p in &model.particles {
            assert!(
                p.position.length() + model.particle_radius <= model.boundary_radius + 1e-4,
                "particle at {:?} pokes out of the nucleus",
                p.position
            );
        }
    }

    #[test]
    fn particle_radius_matches_packing_formula() {
        let config = NucleusConfig::hcp();
        let r = config.particle_radius(16);
        let filled = 16.0 * r.powi(3);
        let target = 0.75 * config.efficiency * config.nucleus_radius.powi(3);
        assert!((filled - target).abs() < 1e-3);
        assert!((r - 0.8585).abs() < 1e-3);
    }

    fn sorted_unique(values: impl Iterator<Item = f32>) -> Vec<f32> {
        let mut values: Vec<f32> = values.collect();
        values.sort_by(|a, b| a.total_cmp(b));
        values.dedup_by(|a, b| (*a - *b).abs() < 1e-4);
        values
    }

    fn assert_steps(values: &[f32], step: f32) {
        assert!(values.len() > 1);
        for pair in values.windows(2) {
            assert!((pair[1] - pair[0] - step).abs() < 1e-3, "step {} != {}", pair[1] - pair[0], step);
        }
    }

    fn check_hcp_lattice(count: u32, spacing_factor: f32, bound_factor: f32) {
        let config = NucleusConfig::hcp();
        let r = config.particle_radius(count);
        let spacing = r * spacing_factor;
        let bound = config.nucleus_radius * bound_factor;
        let layer_step = spacing * (2.0f32 / 3.0).sqrt();
        let row_step = spacing * 3.0f32.sqrt();

        let points: Vec<Vec3> = NucleusBuilder::new(config).candidates(r, count).collect();
        assert!(!points.is_empty());

        let layers = sorted_unique(points.iter().map(|p| p.z));
        assert_steps(&layers, layer_step);
        assert!((layers[0] + bound).abs() < 1e-4);
        assert!(*layers.last().unwrap() <= bound);

        let rows = sorted_unique(points.iter().map(|p| p.y));
        assert_steps(&rows, spacing);
        assert!((rows[0] + bound).abs() < 1e-4);

        for z in &layers {
            let even = ((z / layer_step).round() as i64).rem_euclid(2) == 0;
            let offset = if even { spacing / 2.0 } else { 0.0 };
            let xs = sorted_unique(points.iter().filter(|p| (p.z - z).abs() < 1e-4).map(|p| p.x));
            assert_steps(&xs, row_step);
            assert!((xs[0] - (-bound + offset)).abs() < 1e-4, "layer {z} starts at {}", xs[0]);
        }
    }

    #[test]
    fn hcp_lattice_small_nucleus_geometry() {
        check_hcp_lattice(SMALL_NUCLEUS, 0.9, 1.75);
    }

    #[test]
    fn hcp_lattice_large_nucleus_geometry() {
        check_hcp_lattice(SMALL_NUCLEUS + 1, 1.2, 1.2);
    }

    #[test]
    fn oxygen_places_all_sixteen() {
        let model = NucleusBuilder::new(NucleusConfig::default()).build(8, 8, &mut rng());
        assert_eq!(model.placed(), 16);
        assert_eq!(model.count(Nucleon::Proton), 8);
        assert_eq!(model.count(Nucleon::Neutron), 8);
        assert!(model.is_complete());
        assert_inside(&model);
    }

    #[test]
    fn never_places_more_than_requested() {
        for config in [
            NucleusConfig::hcp(),
            NucleusConfig::sparse_grid(),
            NucleusConfig::dense_grid(),
        ] {
            let builder = NucleusBuilder::new(config);
            for (protons, neutrons) in [(2, 2), (6, 6), (7, 7), (26, 30), (92, 146)] {
                let model = builder.build(protons, neutrons, &mut rng());
                assert!(model.placed() <= (protons + neutrons) as usize);
                assert!(model.count(Nucleon::Proton) <= protons as usize);
                assert!(model.count(Nucleon::Neutron) <= neutrons as usize);
                assert_inside(&model);
            }
        }
    }

    #[test]
    fn hydrogen_sits_at_origin() {
        let model = NucleusBuilder::new(NucleusConfig::default()).build(1, 0, &mut rng());
        assert_eq!(model.placed(), 1);
        assert_eq!(model.particles[0].position, Vec3::ZERO);
        assert_eq!(model.particles[0].kind, Nucleon::Proton);
        assert_eq!(model.particle_radius, model.boundary_radius);
    }

    #[test]
    fn empty_nucleus_keeps_boundary() {
        let model = NucleusBuilder::new(NucleusConfig::default()).build(0, 0, &mut rng());
        assert_eq!(model.placed(), 0);
        assert_eq!(model.boundary_radius, 3.0);
        assert!(model.is_complete());
    }

    #[test]
    fn same_seed_same_placement_order() {
        let builder = NucleusBuilder::new(NucleusConfig::default());
        let a = builder.build(20, 22, &mut StdRng::seed_from_u64(42));
        let b = builder.build(20, 22, &mut StdRng::seed_from_u64(42));
        let kinds = |m: &NucleusModel| m.particles.iter().map(|p| p.kind).collect::<Vec<_>>();
        let positions = |m: &NucleusModel| m.particles.iter().map(|p| p.position).collect::<Vec<_>>();
        assert_eq!(kinds(&a), kinds(&b));
        assert_eq!(positions(&a), positions(&b));
    }

    #[test]
    fn grid_scan_covers_small_nuclei() {
        let model = NucleusBuilder::new(NucleusConfig::sparse_grid()).build(3, 4, &mut rng());
        assert!(model.placed() > 0);
        assert_inside(&model);
    }

    #[test]
    fn degenerate_config_places_nothing() {
        let config = NucleusConfig {
            efficiency: 0.0,
            ..NucleusConfig::default()
        };
        let model = NucleusBuilder::new(config).build(4, 4, &mut rng());
        assert_eq!(model.placed(), 0);
        assert!(!model.is_complete());
    }

    #[test]
    fn rotation_is_rigid() {
        let mut model = NucleusBuilder::new(NucleusConfig::default()).build(8, 8, &mut rng());
        let before: Vec<f32> = model.particles.iter().map(|p| p.position.length()).collect();
        model.rotate(Vec2::new(0.3, -1.1));
        let after: Vec<f32> = model.world_particles().map(|p| p.position.length()).collect();
        for (b, a) in before.iter().zip(&after) {
            assert!((a - b).abs() < 1e-4);
        }
    }
}

//! Electron shells and tilted circular orbits

use glam::{Quat, Vec3};
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Shell layout and orbital speed
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitConfig {
    /// Electrons per shell, innermost first
    pub shell_capacities: Vec<u32>,
    /// Orbit radius of each shell
    pub shell_distances: Vec<f32>,
    /// Angle added to every electron each frame, radians
    pub angular_step: f32,
}

impl OrbitConfig {
    pub fn capacity(&self) -> u32 {
        self.shells().map(|(capacity, _)| capacity).sum()
    }

    fn shells(&self) -> impl Iterator<Item = (u32, f32)> + '_ {
        self.shell_capacities
            .iter()
            .copied()
            .zip(self.shell_distances.iter().copied())
    }
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            shell_capacities: vec![2, 8, 18, 32],
            shell_distances: vec![3.0, 5.0, 7.0, 9.0],
            angular_step: 0.05,
        }
    }
}

/// One orbiting electron. Only `angle` changes after creation.
#[derive(Debug, Clone)]
pub struct Electron {
    pub angle: f32,
    pub shell: usize,
    pub shell_distance: f32,
    pub tilt_axis: Vec3,
    pub tilt_angle: f32,
    pub position: Vec3,
}

impl Electron {
    pub fn new(angle: f32, shell: usize, shell_distance: f32, tilt_axis: Vec3, tilt_angle: f32) -> Self {
        let mut electron = Self {
            angle,
            shell,
            shell_distance,
            tilt_axis,
            tilt_angle,
            position: Vec3::ZERO,
        };
        electron.position = electron.orbit_position();
        electron
    }

    /// Point on the planar circle, rotated into this electron's orbital plane
    pub fn orbit_position(&self) -> Vec3 {
        let planar = Vec3::new(
            self.angle.cos() * self.shell_distance,
            self.angle.sin() * self.shell_distance,
            0.0,
        );
        Quat::from_axis_angle(self.tilt_axis, self.tilt_angle) * planar
    }

    pub fn advance(&mut self, step: f32) {
        self.angle += step;
        self.position = self.orbit_position();
    }
}

#[derive(Debug, Clone, Default)]
pub struct ElectronModel {
    pub electrons: Vec<Electron>,
    /// Electrons that did not fit in any shell
    pub dropped: u32,
}

impl ElectronModel {
    pub fn len(&self) -> usize {
        self.electrons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.electrons.is_empty()
    }

    pub fn shell_occupancy(&self, shell: usize) -> usize {
        self.electrons.iter().filter(|e| e.shell == shell).count()
    }

    pub fn advance(&mut self, step: f32) {
        for electron in &mut self.electrons {
            electron.advance(step);
        }
    }
}

pub struct ElectronOrbitController {
    config: OrbitConfig,
}

impl ElectronOrbitController {
    pub fn new(config: OrbitConfig) -> Self {
        Self { config }
    }

    /// Fill shells in order, each to capacity, with evenly spaced electrons
    /// on randomly tilted orbits.
    pub fn build<R: Rng + ?Sized>(&self, count: u32, rng: &mut R) -> ElectronModel {
        let mut model = ElectronModel::default();
        let mut remaining = count;

        for (shell, (capacity, distance)) in self.config.shells().enumerate() {
            if remaining == 0 {
                break;
            }
            let in_shell = capacity.min(remaining);
            for i in 0..in_shell {
                let angle = (i as f32 / capacity as f32) * TAU;
                let (tilt_axis, tilt_angle) = random_tilt(rng);
                model
                    .electrons
                    .push(Electron::new(angle, shell, distance, tilt_axis, tilt_angle));
            }
            remaining -= in_shell;
        }

        model.dropped = remaining;
        if remaining > 0 {
            log::debug!("{} electrons exceed shell capacity and were dropped", remaining);
        }

        model
    }

    pub fn advance(&self, model: &mut ElectronModel) {
        model.advance(self.config.angular_step);
    }
}

fn random_tilt<R: Rng + ?Sized>(rng: &mut R) -> (Vec3, f32) {
    let axis = Vec3::new(
        rng.gen::<f32>() - 0.5,
        rng.gen::<f32>() - 0.5,
        rng.gen::<f32>() - 0.5,
    )
    .try_normalize()
    .unwrap_or(Vec3::Z);
    (axis, rng.gen::<f32>() * PI)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn build(count: u32) -> ElectronModel {
        ElectronOrbitController::new(OrbitConfig::default()).build(count, &mut StdRng::seed_from_u64(3))
    }

    #[test]
    fn neon_fills_first_two_shells() {
        let model = build(10);
        assert_eq!(model.shell_occupancy(0), 2);
        assert_eq!(model.shell_occupancy(1), 8);
        assert_eq!(model.shell_occupancy(2), 0);
    }

    #[test]
    fn excess_electrons_are_dropped() {
        let model = build(90);
        assert_eq!(model.len(), 60);
        assert_eq!(model.dropped, 30);
        assert_eq!(model.shell_occupancy(3), 32);
    }

    #[test]
    fn starting_angles_are_evenly_spaced() {
        let model = build(10);
        let second_shell: Vec<f32> = model.electrons.iter().filter(|e| e.shell == 1).map(|e| e.angle).collect();
        for (i, angle) in second_shell.iter().enumerate() {
            assert!((angle - i as f32 * TAU / 8.0).abs() < 1e-6);
        }
    }

    #[test]
    fn tilts_are_unit_axes_within_half_turn() {
        for electron in &build(60).electrons {
            assert!((electron.tilt_axis.length() - 1.0).abs() < 1e-5);
            assert!((0.0..PI).contains(&electron.tilt_angle));
        }
    }

    #[test]
    fn electrons_stay_on_their_shell() {
        let mut model = build(28);
        for _ in 0..50 {
            model.advance(0.05);
        }
        for electron in &model.electrons {
            assert!((electron.position.length() - electron.shell_distance).abs() < 1e-3);
        }
    }

    #[test]
    fn advance_is_additive() {
        let mut stepped = build(18);
        let mut jumped = stepped.clone();
        for _ in 0..40 {
            stepped.advance(0.05);
        }
        jumped.advance(40.0 * 0.05);

        for (a, b) in stepped.electrons.iter().zip(&jumped.electrons) {
            assert!((a.angle - b.angle).abs() < 1e-4);
            assert!((a.position - b.position).length() < 1e-3);
        }
    }

    #[test]
    fn controller_advances_by_configured_step() {
        let config = OrbitConfig {
            angular_step: 0.2,
            ..OrbitConfig::default()
        };
        let controller = ElectronOrbitController::new(config);
        let mut model = controller.build(2, &mut StdRng::seed_from_u64(1));
        controller.advance(&mut model);
        assert!((model.electrons[0].angle - 0.2).abs() < 1e-6);
        assert!((model.electrons[1].angle - (PI + 0.2)).abs() < 1e-5);
    }

    #[test]
    fn zero_electrons() {
        let model = build(0);
        assert!(model.is_empty());
        assert_eq!(model.dropped, 0);
    }
}

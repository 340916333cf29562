//! Interactive atom viewer
//!
//! Pick an element from the periodic table and see a stylized model of it:
//!
//! - **Nucleus**: protons and neutrons packed on a lattice inside a bounding sphere
//! - **Electrons**: shells of 2/8/18/32 on randomly tilted circular orbits
//! - **Scene**: the current selection, rebuilt from scratch on every pick
//! - **Viewer**: wgpu sphere impostors with an egui periodic table on top

pub mod atom;
pub mod electrons;
pub mod elements;
pub mod error;
pub mod nucleus;
pub mod periodic_table;
pub mod renderer;
pub mod scene;
pub mod ui;
pub mod viewer;

pub use atom::{assemble, AnimationConfig, AtomGroup};
pub use electrons::{Electron, ElectronModel, ElectronOrbitController, OrbitConfig};
pub use elements::{AtomicMass, BondingType, Element, ParticleCounts, StandardState};
pub use error::AtomError;
pub use nucleus::{Nucleon, NucleusBuilder, NucleusConfig, NucleusModel, Particle, PlacementStrategy};
pub use scene::AtomScene;
pub use viewer::{ViewerConfig, ViewerContext};

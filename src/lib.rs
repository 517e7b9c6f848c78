//! Verlet cloth hanging from a pole, stepped once per render frame.
//!
//! `clothy` simulates a rectangular cloth of particles linked by distance
//! constraints, pinned along one edge to a vertical pole and blown by a
//! wind that follows the camera. It is meant to be driven by an external
//! render loop, which owns the mesh the cloth writes into.
//!
//! # Features
//!
//! - **Verlet integration**: Fixed timestep, implicit velocity, air drag
//! - **Constraint relaxation**: One pass per frame over structural links
//! - **Camera wind**: Oscillating wind blowing toward the camera's left
//! - **Pins**: Leading edge held against the pole every frame
//! - **Pole collision**: Particles pushed out of an infinite cylinder
//! - **Host lifecycle**: Mount, per-frame stepping and scoped teardown via
//!   the `SimulationContext` trait
//! - **Observable**: Monitor each stage via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//!
//! ```
//! use clothy::{Cloth, ClothConfig, CameraPose, NoOpStepObserver};
//!
//! let mut cloth: Cloth<f32> = Cloth::from_config(&ClothConfig::default()).unwrap();
//! let camera = CameraPose::looking_down_negative_z();
//! for frame in 0..60 {
//!     let elapsed_ms = frame as f32 * 16.0;
//!     cloth.step(elapsed_ms, &camera, None, &mut NoOpStepObserver);
//! }
//! assert_eq!(cloth.positions().len(), 170);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod quat;
pub mod particle;
pub mod grid;
pub mod constraint;
pub mod solver;
pub mod force;
pub mod pin;
pub mod collider;
pub mod cloth;
pub mod material;
pub mod mesh;
pub mod context;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec2, Vec3};
pub use quat::Quat;
pub use particle::Particle;
pub use grid::{ParticleGrid, Plane, Surface};
pub use constraint::{ConstraintSet, DistanceConstraint};
pub use solver::ConstraintSolver;
pub use force::{CameraPose, ForceModel, FrameForces};
pub use pin::{Pin, PinController};
pub use collider::{ColliderResolver, Pole};
pub use cloth::Cloth;
pub use material::{Color, MaterialConfig, Phong, TextureSource};
pub use mesh::{MeshSync, RenderMesh};
pub use context::{MeshDesc, SimulationContext, StepHandle};
pub use simulation::{ClothSimulation, Phase};
pub use config::ClothConfig;
pub use observer::{NoOpStepObserver, StepObserver, TracingObserver};
pub use error::ClothError;

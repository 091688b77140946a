//! # Whorl - Interactive Spiral Galaxy
//!
//! A GPU point-cloud toy: a procedurally generated spiral galaxy you can
//! orbit, restyle from a parameter panel, and distort by pulling stars
//! toward the mouse cursor.
//!
//! ## Quick Start
//!
//! ```ignore
//! fn main() {
//!     if let Err(e) = whorl::run() {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(1);
//!     }
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Generation
//!
//! [`galaxy::generate`] builds flat position and color arrays from a
//! [`GalaxyParams`] record: particles along spiral arms, scattered outward
//! with a power-law bias, colored by distance from the core. Generation is
//! pure CPU code over a caller-supplied RNG, so it is deterministic under a
//! seeded RNG and trivial to test.
//!
//! ### Simulation
//!
//! [`physics::integrate`] advances a velocity per particle each frame,
//! accelerating everything toward the cursor's projection onto the z = 0
//! plane with softened inverse-power gravity and heavy damping. Positions
//! live in the same flat array the GPU renders, re-uploaded every frame.
//!
//! ### Interaction
//!
//! Panel edits to shape parameters rebuild the galaxy only when committed
//! (drag released), never mid-drag. Point size and gravity apply live.
//! Left-drag orbits the camera, the scroll wheel zooms.

pub mod app;
pub mod camera;
pub mod error;
pub mod galaxy;
pub mod gpu;
pub mod input;
pub mod panel;
pub mod params;
pub mod physics;
pub mod pointer;
pub mod time;

pub use app::run;
pub use camera::Camera;
pub use error::{AppError, GpuError};
pub use galaxy::{generate, ParticleBuffer};
pub use params::GalaxyParams;
pub use physics::{integrate, VelocityField};
pub use pointer::PointerTarget;

// Re-export math types used in the public API.
pub use glam::{Vec2, Vec3};

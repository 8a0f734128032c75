//! Progressive Monte Carlo path tracer.
//!
//! The core is a recursive light-transport integrator over a closed set of
//! primitives and materials, plus a per-pixel accumulation buffer that lets
//! a presentation layer converge an image over successive frames. The
//! bundled binary drives the core headlessly and writes a PNG.

pub mod camera;
pub mod cli;
pub mod config;
pub mod integrator;
pub mod logger;
pub mod material;
pub mod primitives;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod textures;

pub use camera::Camera;
pub use material::{MaterialId, Materials};
pub use ray::{Hit, Ray};
pub use renderer::{render_frame, AccumBuffer, RenderOptions};
pub use scene::{Light, Scene};

/// The rng every render worker owns. Seeded per worker so streams never
/// correlate and reruns reproduce.
pub type DefaultRng = rand_xoshiro::Xoshiro256Plus;

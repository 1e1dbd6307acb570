//! # BB Core
//!
//! Physics for a bouncing, squashing ball, driven one frame at a time by a
//! host renderer.
//!
//! ## Architecture
//!
//! - `types`: Core data structures (Vec3, state, ball parameters)
//! - `simulator`: Per-frame update (gravity, ground bounce, restitution)
//! - `deformation`: Squash-and-stretch scale computation and recovery
//! - `presets`: YAML-based ball parameter loader
//!
//! The host owns the frame loop: it calls
//! [`simulator::BallPhysicsSimulator::update`] once per frame with its frame
//! delta, then reads back `position()` and `scale()` to build the model
//! transform. The crate does no rendering, asset loading, or camera math.

pub mod deformation;
pub mod presets;
pub mod simulator;
pub mod types;

//! Core types for the ball simulation.
//!
//! Units:
//! - Position: world units (the renderer decides what a unit means)
//! - Velocity: world units per second
//! - Mass: kilograms (kg)
//! - Scale: unitless multipliers applied to the model transform

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

// =============================================================================
// Vec3 - 3D Vector
// =============================================================================

/// A 3D vector used for positions and non-uniform scales.
///
/// Coordinate system:
/// - X: horizontal
/// - Y: vertical (positive upward)
/// - Z: horizontal, orthogonal to X
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Unit scale, i.e. an undeformed model transform.
    pub const ONE: Vec3 = Vec3 {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Squared magnitude (avoids sqrt for comparisons)
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Magnitude (length) of the vector
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }
}

// Operator overloads for Vec3
impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Self::ZERO
    }
}

// =============================================================================
// Ball Parameters
// =============================================================================

/// Physical parameters of a ball.
///
/// These stay constant over a simulation run and can be loaded from YAML
/// preset files (see the `presets` module).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallParams {
    pub name: String,
    pub mass: f64,
    pub diameter: f64,
    pub bounciness: f64,
    pub air_friction: f64,
}

impl BallParams {
    /// Rest height of the ball center above the ground plane.
    ///
    /// The ball's origin is at its center, so the center sits half a
    /// diameter above the ground when the ball touches it.
    pub fn half_height(&self) -> f64 {
        self.diameter / 2.0
    }

    /// Soft beach ball, roughly 0.7 units across.
    pub fn beachball() -> Self {
        Self {
            name: "Beachball".to_string(),
            mass: 0.05,
            diameter: 0.7,
            bounciness: 0.9,
            air_friction: 0.2,
        }
    }
}

impl Default for BallParams {
    fn default() -> Self {
        Self::beachball()
    }
}

// =============================================================================
// Simulation State
// =============================================================================

/// Complete mutable state of the ball at a given instant.
///
/// Velocity sign convention: `velocity_y` is positive while the ball falls,
/// because position is integrated as `position.y -= velocity_y * dt`. A
/// bounce therefore flips `velocity_y` negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Decorative animation clock; advances at `CLOCK_SCALE` times
    /// wall-clock speed and takes no part in the physics integration.
    pub time: f64,
    pub position: Vec3,
    pub velocity_y: f64,
    /// Peak |velocity_y| ever observed. Normalizes squash intensity so the
    /// hardest impact seen so far produces the deepest squash.
    pub max_speed: f64,
    pub scale: Vec3,
}

impl SimulationState {
    /// Ball at rest in the air at the given height, undeformed.
    pub fn at_height(height: f64) -> Self {
        Self {
            time: 0.0,
            position: Vec3::new(0.0, height, 0.0),
            velocity_y: 0.0,
            max_speed: 0.0,
            scale: Vec3::ONE,
        }
    }
}

// =============================================================================
// Physical Constants
// =============================================================================

/// Process-wide constants used in the simulation.
pub mod constants {
    /// Gravitational acceleration (m/s²)
    pub const GRAVITY: f64 = 9.8;

    /// Internal integration step. The simulator always integrates with this
    /// step, independent of the frame delta it is handed (see
    /// `BallPhysicsSimulator::update`).
    pub const FIXED_TIME_STEP: f64 = 1.0 / 600.0;

    /// The animation clock runs this many times faster than wall time.
    pub const CLOCK_SCALE: f64 = 4.0;

    /// How strongly impact speed translates into vertical compression.
    pub const SQUASH_GAIN: f64 = 0.8;

    /// Hardest allowed compression of the vertical axis.
    pub const MIN_SQUASH: f64 = 0.5;

    /// Vertical scale regained per frame while the ball re-inflates.
    pub const RECOVERY_STEP: f64 = 0.07;

    /// Small value for floating-point comparisons
    pub const EPSILON: f64 = 1e-10;
}

// =============================================================================
// Tests
// =============================================================================

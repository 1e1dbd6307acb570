//! Python bindings for the bb-core bouncing ball simulator.
//!
//! Provides a simple Python API:
//!
//! ```python
//! from bb_physics import Simulation
//!
//! sim = Simulation()
//! for _ in range(100):
//!     sim.step(1 / 60)
//!     pos = sim.position()
//!     scale = sim.scale()
//!     print(f"Ball at y={pos.y:.3f}, squash={scale.y:.3f}")
//! ```

use pyo3::prelude::*;
use pyo3::types::PyDict;

use bb_core::presets::PresetLoader;
use bb_core::simulator::BallPhysicsSimulator;
use bb_core::types::{BallParams, Vec3 as CoreVec3};

/// 3D vector for positions and scales.
#[pyclass]
#[derive(Clone, Copy)]
pub struct Vec3 {
    #[pyo3(get, set)]
    pub x: f64,
    #[pyo3(get, set)]
    pub y: f64,
    #[pyo3(get, set)]
    pub z: f64,
}

#[pymethods]
impl Vec3 {
    #[new]
    fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    fn __repr__(&self) -> String {
        format!("Vec3({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }

    fn to_tuple(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }
}

impl From<CoreVec3> for Vec3 {
    fn from(v: CoreVec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// Main simulation class.
///
/// Wraps the per-frame physics and exposes the position/scale read-back the
/// renderer-side code would consume.
#[pyclass]
pub struct Simulation {
    sim: BallPhysicsSimulator,
}

const DEFAULT_START_HEIGHT: f64 = 3.0;

#[pymethods]
impl Simulation {
    /// Create a new simulation with the default beachball at height 3.
    #[new]
    #[pyo3(signature = (start_height = DEFAULT_START_HEIGHT))]
    fn new(start_height: f64) -> Self {
        Self {
            sim: BallPhysicsSimulator::new(BallParams::default(), start_height),
        }
    }

    /// Create a simulation from a YAML ball preset.
    ///
    /// `presets_dir` is the directory containing `balls/<name>.yaml`.
    #[staticmethod]
    #[pyo3(signature = (presets_dir, name, start_height = DEFAULT_START_HEIGHT))]
    fn from_preset(presets_dir: &str, name: &str, start_height: f64) -> PyResult<Self> {
        let params = PresetLoader::new(presets_dir)
            .load_ball(name)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
        Ok(Self {
            sim: BallPhysicsSimulator::new(params, start_height),
        })
    }

    /// Animation clock in seconds (runs at 4x wall time).
    #[getter]
    fn time(&self) -> f64 {
        self.sim.state().time
    }

    /// Get ball position as Vec3.
    fn position(&self) -> Vec3 {
        self.sim.position().into()
    }

    /// Get the squash-and-stretch scale as Vec3.
    fn scale(&self) -> Vec3 {
        self.sim.scale().into()
    }

    /// Get ball speed in world units per second.
    fn speed(&self) -> f64 {
        self.sim.speed()
    }

    /// Peak speed observed since the start (or the last reset).
    fn max_speed(&self) -> f64 {
        self.sim.max_speed()
    }

    /// Name of the ball preset in use.
    fn ball_name(&self) -> String {
        self.sim.params().name.clone()
    }

    /// Height the ball drops from on reset.
    #[getter]
    fn start_height(&self) -> f64 {
        self.sim.start_height()
    }

    /// Set the drop height for the next reset. Does not move the ball.
    #[setter]
    fn set_start_height(&mut self, height: f64) {
        self.sim.set_start_height(height);
    }

    /// Reset the simulation to its starting state.
    fn reset(&mut self) {
        self.sim.reset();
    }

    /// Advance the simulation by one frame with the given frame delta.
    fn step(&mut self, delta_time: f64) {
        self.sim.update(delta_time);
    }

    /// Run multiple frames at once (more efficient).
    fn step_n(&mut self, delta_time: f64, steps: usize) {
        for _ in 0..steps {
            self.sim.update(delta_time);
        }
    }

    /// Get current state as dict for easy inspection.
    fn state_dict(&self, py: Python<'_>) -> PyResult<Py<PyDict>> {
        let state = self.sim.state();
        let dict = PyDict::new_bound(py);
        dict.set_item("time", state.time)?;
        dict.set_item("y", state.position.y)?;
        dict.set_item("velocity_y", state.velocity_y)?;
        dict.set_item("max_speed", state.max_speed)?;
        dict.set_item("scale_x", state.scale.x)?;
        dict.set_item("scale_y", state.scale.y)?;
        dict.set_item("scale_z", state.scale.z)?;
        Ok(dict.unbind())
    }
}

/// Python module definition.
#[pymodule]
fn bb_physics(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Vec3>()?;
    m.add_class::<Simulation>()?;
    Ok(())
}

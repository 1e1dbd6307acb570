//! Per-frame ball physics.
//!
//! The simulator advances one rigid ball per call: gravity pulls it down,
//! the ground reflects and damps its velocity, and each impact feeds the
//! squash-and-stretch deformation in the `deformation` module. The host
//! renderer calls [`BallPhysicsSimulator::update`] once per frame and reads
//! back `position()` and `scale()` for the model transform.
//!
//! ## Fixed internal timestep
//!
//! Integration always uses `constants::FIXED_TIME_STEP`, no matter what
//! frame delta the host passes in. The frame delta only advances the
//! decorative animation clock (at `CLOCK_SCALE` speed). Two hosts stepping
//! the simulator the same number of times will therefore see identical
//! trajectories even at different frame rates. This is a deliberate
//! contract of the simulator, not an approximation knob; see the tests.
//!
//! The velocity increment `(gravity / mass) * dt / air_friction` is applied
//! on every call, including while the ball is moving upward. The constant
//! models a friction-damped gravitational pull, not a true drag force.

use log::debug;

use crate::deformation;
use crate::types::{constants, BallParams, SimulationState, Vec3};

/// Advances a single ball's vertical motion and deformation each frame.
///
/// Owns its [`SimulationState`] exclusively; the host reads the state back
/// through accessors after each `update`. Single-threaded by construction,
/// no interior mutability, no I/O.
#[derive(Debug, Clone)]
pub struct BallPhysicsSimulator {
    params: BallParams,
    start_height: f64,
    state: SimulationState,
}

impl BallPhysicsSimulator {
    /// Create a simulator with the ball hanging at `start_height`, at rest
    /// and undeformed.
    pub fn new(params: BallParams, start_height: f64) -> Self {
        Self {
            params,
            start_height,
            state: SimulationState::at_height(start_height),
        }
    }

    /// Advance the simulation by one frame.
    ///
    /// `delta_time` is the host's frame delta in seconds (typically
    /// `1 / preferred_frame_rate`). It is accepted without validation and
    /// only scales the animation clock; the physics integrates with the
    /// fixed internal step (see module docs).
    pub fn update(&mut self, delta_time: f64) {
        let state = &mut self.state;
        state.time += delta_time * constants::CLOCK_SCALE;

        // F = m*a, so the constant pull is a = F_gravity / m, damped by the
        // air friction divisor.
        let acceleration = constants::GRAVITY / self.params.mass;
        state.velocity_y += (acceleration * constants::FIXED_TIME_STEP) / self.params.air_friction;
        state.max_speed = state.max_speed.max(state.velocity_y.abs());

        state.position.y -= state.velocity_y * constants::FIXED_TIME_STEP;

        let rest_height = self.params.half_height();
        if state.position.y <= rest_height {
            // Ground is an impenetrable half-space: clamp, then reflect the
            // velocity with the restitution loss.
            state.position.y = rest_height;
            state.velocity_y = state.velocity_y * -1.0 * self.params.bounciness;

            state.scale = deformation::squash(state.velocity_y, state.max_speed);
            debug!(
                "bounce: rebound speed {:.3}, squash {:.3}",
                state.velocity_y.abs(),
                state.scale.y
            );
        }

        // Re-inflation runs every frame the ball is still compressed,
        // including the bounce frame itself.
        deformation::recover(&mut state.scale);
    }

    /// Put the ball back at its start height, at rest and undeformed, with
    /// the clock and the peak-speed record cleared.
    pub fn reset(&mut self) {
        self.state = SimulationState::at_height(self.start_height);
    }

    /// Change where the ball drops from. The running state is untouched;
    /// the new height takes effect on the next `reset`.
    pub fn set_start_height(&mut self, height: f64) {
        self.start_height = height;
    }

    /// Height the ball drops from on `reset`.
    pub fn start_height(&self) -> f64 {
        self.start_height
    }

    /// Current world-space position of the ball center.
    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    /// Current non-uniform scale for the model transform.
    pub fn scale(&self) -> Vec3 {
        self.state.scale
    }

    /// Current speed in world units per second.
    pub fn speed(&self) -> f64 {
        self.state.velocity_y.abs()
    }

    /// Peak speed observed since construction or the last `reset`.
    pub fn max_speed(&self) -> f64 {
        self.state.max_speed
    }

    /// Full simulation state, for inspection.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Ball parameters in use.
    pub fn params(&self) -> &BallParams {
        &self.params
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn drop_from(height: f64) -> BallPhysicsSimulator {
        BallPhysicsSimulator::new(BallParams::beachball(), height)
    }

    /// Step until the next bounce (downward velocity flipping upward),
    /// returning how many frames it took. Panics if no bounce happens
    /// within `max_frames`.
    fn step_until_bounce(sim: &mut BallPhysicsSimulator, max_frames: usize) -> usize {
        let mut prev_velocity = sim.state().velocity_y;
        for frame in 1..=max_frames {
            sim.update(FRAME);
            let velocity = sim.state().velocity_y;
            if prev_velocity > 0.0 && velocity < 0.0 {
                return frame;
            }
            prev_velocity = velocity;
        }
        panic!("no bounce within {} frames", max_frames);
    }

    #[test]
    fn test_drop_reaches_ground_and_bounces() {
        let mut sim = drop_from(3.0);
        let rest_height = sim.params().half_height();

        let frames = step_until_bounce(&mut sim, 10_000);

        // On the bounce frame the ball sits exactly on the ground, moving
        // up, visibly squashed.
        assert!(frames > 1, "bounce can't happen on the first frame");
        assert!((sim.position().y - rest_height).abs() < 1e-12);
        assert!(sim.state().velocity_y < 0.0, "velocity should have flipped");
        assert!(
            sim.scale().y < 1.0,
            "ball should be squashed right after the bounce, got scale.y={}",
            sim.scale().y
        );
    }

    #[test]
    fn test_invariants_hold_over_many_frames() {
        let mut sim = drop_from(3.0);
        let rest_height = sim.params().half_height();
        let mut prev_max_speed = 0.0;

        // Long enough to cover several bounces and recoveries.
        for frame in 0..5_000 {
            sim.update(FRAME);
            let state = sim.state();

            assert_eq!(
                state.scale.x, state.scale.z,
                "radial symmetry broken at frame {}",
                frame
            );
            assert!(
                state.scale.y >= 0.5 && state.scale.y <= 1.0,
                "scale.y out of range at frame {}: {}",
                frame,
                state.scale.y
            );
            assert!(
                state.position.y >= rest_height - 1e-9,
                "ball below ground at frame {}: y={}",
                frame,
                state.position.y
            );
            assert!(
                state.max_speed >= prev_max_speed,
                "max_speed decreased at frame {}",
                frame
            );
            prev_max_speed = state.max_speed;
        }
    }

    #[test]
    fn test_recovery_settles_at_unit_scale() {
        let mut sim = drop_from(3.0);
        step_until_bounce(&mut sim, 10_000);

        // Rebound from a high drop sends the ball up for far longer than
        // recovery needs; within 8 frames the scale must be back to one.
        for _ in 0..8 {
            sim.update(FRAME);
        }
        assert_eq!(sim.scale(), Vec3::ONE);

        // And it stays there while the ball is airborne.
        let position_before = sim.position();
        sim.update(FRAME);
        assert_eq!(sim.scale(), Vec3::ONE);
        assert!(sim.position().y > position_before.y, "ball should still rise");
    }

    #[test]
    fn test_frame_delta_only_moves_the_clock() {
        // The preserved fixed-timestep contract: the same number of calls
        // yields the same trajectory regardless of the delta passed in.
        let mut at_60 = drop_from(3.0);
        let mut at_30 = drop_from(3.0);

        for _ in 0..1_000 {
            at_60.update(1.0 / 60.0);
            at_30.update(1.0 / 30.0);
        }

        assert_eq!(at_60.position(), at_30.position());
        assert_eq!(at_60.scale(), at_30.scale());
        assert_eq!(at_60.state().velocity_y, at_30.state().velocity_y);
        assert!(
            (at_30.state().time - 2.0 * at_60.state().time).abs() < 1e-9,
            "clock should scale with the delta"
        );
    }

    #[test]
    fn test_clock_runs_at_four_times_wall_time() {
        let mut sim = drop_from(3.0);
        sim.update(FRAME);
        assert!((sim.state().time - FRAME * 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_velocity_increment_applies_while_airborne() {
        // The quirk: the gravity increment is unconditional, so an upward
        // (negative) velocity shrinks toward zero every frame even though
        // the ball is far from the ground.
        let mut sim = drop_from(100.0);
        sim.state.velocity_y = -50.0;
        sim.state.max_speed = 50.0;

        sim.update(FRAME);

        let expected = -50.0
            + (constants::GRAVITY / sim.params().mass) * constants::FIXED_TIME_STEP
                / sim.params().air_friction;
        assert!((sim.state().velocity_y - expected).abs() < 1e-9);
    }

    #[test]
    fn test_bounces_decay_with_restitution() {
        let mut sim = drop_from(3.0);

        step_until_bounce(&mut sim, 10_000);
        let first_rebound = sim.speed();
        let peak = sim.max_speed();

        // Restitution ate 10% of the impact speed.
        assert!((first_rebound - peak * sim.params().bounciness).abs() < 1e-9);

        step_until_bounce(&mut sim, 10_000);
        let second_rebound = sim.speed();
        assert!(
            second_rebound < first_rebound,
            "each bounce should be slower: {} then {}",
            first_rebound,
            second_rebound
        );
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut sim = drop_from(3.0);
        step_until_bounce(&mut sim, 10_000);
        assert_ne!(sim.state().max_speed, 0.0);

        sim.reset();

        assert_eq!(*sim.state(), SimulationState::at_height(3.0));
    }

    #[test]
    fn test_set_start_height_applies_on_next_reset() {
        let mut sim = drop_from(3.0);
        step_until_bounce(&mut sim, 10_000);

        // Re-aiming the drop leaves the running state alone...
        let position_before = sim.position();
        sim.set_start_height(5.0);
        assert_eq!(sim.position(), position_before);
        assert_eq!(sim.start_height(), 5.0);

        // ...and lands the ball at the new height on reset.
        sim.reset();
        assert_eq!(*sim.state(), SimulationState::at_height(5.0));
    }
}

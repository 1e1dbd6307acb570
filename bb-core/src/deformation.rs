//! Squash-and-stretch deformation of the ball.
//!
//! A soft ball flattens on impact and bulges sideways, then re-inflates on
//! the way back up. We approximate this with a non-uniform scale applied to
//! the model transform:
//!
//! - **Squash**: compress the vertical axis in proportion to impact speed,
//!   and widen the two horizontal axes by half the lost height so the
//!   apparent volume stays roughly constant.
//! - **Recovery**: step the vertical axis back up by a fixed amount each
//!   frame until the scale snaps to exactly `(1, 1, 1)`.
//!
//! ```text
//!      falling          impact           recovering
//!        ●              ▬▬▬▬▬              ◗◖
//!        │             ═══════            ═════
//!   ═════╧═════     (y: 0.5-1.0,
//!                    x,z: widened)
//! ```
//!
//! Deformation is radially symmetric about the vertical axis: `scale.x` and
//! `scale.z` are always equal.

use crate::types::{constants, Vec3};

/// Scale vector for an impact at `impact_speed`, normalized against the
/// fastest speed observed so far.
///
/// The compression is `SQUASH_GAIN * |impact_speed| / max_speed`, floored at
/// `MIN_SQUASH` so even the hardest hit keeps half the ball's height. The
/// horizontal axes gain half of whatever the vertical axis lost.
///
/// A `max_speed` of zero (nothing observed yet) yields no squash at all
/// rather than dividing by zero.
pub fn squash(impact_speed: f64, max_speed: f64) -> Vec3 {
    if max_speed < constants::EPSILON {
        return Vec3::ONE;
    }

    let squash_y =
        (1.0 - constants::SQUASH_GAIN * impact_speed.abs() / max_speed).max(constants::MIN_SQUASH);
    let bulge_xz = 1.0 + (1.0 - squash_y) / 2.0;

    Vec3::new(bulge_xz, squash_y, bulge_xz)
}

/// Advance one frame of re-inflation.
///
/// Does nothing once the ball is back to unit scale. While compressed, the
/// vertical axis regains `RECOVERY_STEP` per call and the horizontal axes
/// give back half of it; an overshoot past 1.0 snaps the whole vector to
/// exactly `(1, 1, 1)` so the ball never ends up stretched.
pub fn recover(scale: &mut Vec3) {
    if scale.y >= 1.0 {
        return;
    }

    scale.y += constants::RECOVERY_STEP;
    scale.z -= constants::RECOVERY_STEP / 2.0;
    scale.x = scale.z;

    if scale.y > 1.0 {
        *scale = Vec3::ONE;
    }
}

// =============================================================================
// Tests
// =============================================================================

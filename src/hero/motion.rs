//! Per-frame motion of the scene group and camera

use std::f64::consts::TAU;

use cgmath::Vector2;

/// Pitch oscillation frequency relative to the rotation accumulator
const PITCH_FREQUENCY: f64 = 0.4;
const PITCH_AMPLITUDE: f64 = 0.18;
/// Float oscillation frequency relative to the rotation accumulator
const FLOAT_FREQUENCY: f64 = 0.8;

/// Orientation and height of the scene group for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupPose {
    /// Rotation about Y, wrapped to [0, 2pi)
    pub yaw: f32,
    /// Rotation about X
    pub pitch: f32,
    /// Vertical offset
    pub bob: f32,
}

/// Frame-counted rotation accumulator
///
/// Stores the number of ticks instead of a running float sum so the angle
/// after N ticks is exactly `N * increment`, however irregular the frames.
#[derive(Debug, Clone, Copy)]
pub struct MotionState {
    ticks: u64,
    increment: f64,
    float_amplitude: f64,
}

impl MotionState {
    pub fn new(increment: f32, float_amplitude: f32) -> Self {
        Self {
            ticks: 0,
            increment: f64::from(increment),
            float_amplitude: f64::from(float_amplitude),
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Unwrapped accumulator value
    pub fn angle(&self) -> f64 {
        self.ticks as f64 * self.increment
    }

    pub fn pose(&self) -> GroupPose {
        let angle = self.angle();
        GroupPose {
            yaw: angle.rem_euclid(TAU) as f32,
            pitch: ((angle * PITCH_FREQUENCY).sin() * PITCH_AMPLITUDE) as f32,
            bob: ((angle * FLOAT_FREQUENCY).sin() * self.float_amplitude) as f32,
        }
    }

    /// Advances one frame and returns the new pose
    pub fn advance(&mut self) -> GroupPose {
        self.ticks += 1;
        self.pose()
    }
}

/// One smoothing step of the camera toward the pointer-derived target
///
/// Each axis moves `smoothing` of the way from `current` to
/// `pointer * weights`.
pub fn parallax_step(
    current: Vector2<f32>,
    pointer: Vector2<f32>,
    weights: [f32; 2],
    smoothing: f32,
) -> Vector2<f32> {
    let target = Vector2::new(pointer.x * weights[0], pointer.y * weights[1]);
    current + (target - current) * smoothing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pose_after_n_ticks_matches_formula() {
        let mut motion = MotionState::new(0.004, 0.12);
        for _ in 0..250 {
            motion.advance();
        }
        let pose = motion.pose();
        assert!((pose.yaw - 1.0).abs() < 1e-6);
        assert!((pose.pitch - (0.4f32).sin() * 0.18).abs() < 1e-6);
        assert!((pose.bob - (0.8f32).sin() * 0.12).abs() < 1e-6);
    }

    #[test]
    fn yaw_wraps_around() {
        let mut motion = MotionState::new(1.0, 0.0);
        for _ in 0..7 {
            motion.advance();
        }
        assert!((f64::from(motion.pose().yaw) - (7.0 - TAU)).abs() < 1e-6);
    }

    #[test]
    fn parallax_moves_five_percent_per_step() {
        let next = parallax_step(Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0), [0.5, 0.3], 0.05);
        assert!((next.x - 0.025).abs() < 1e-6);
        assert!((next.y - 0.015).abs() < 1e-6);
    }
}

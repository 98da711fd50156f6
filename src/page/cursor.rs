//! Custom cursor: a dot at the pointer and a lagging follower ring

use cgmath::Vector2;

/// Fraction of the remaining distance the follower covers each frame
pub const FOLLOW_FACTOR: f32 = 0.12;
pub const DOT_RADIUS: f32 = 5.0;
pub const FOLLOWER_RADIUS: f32 = 18.0;
/// Size multiplier while hovering something clickable
pub const HOVER_SCALE: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFollower {
    pub dot: Vector2<f32>,
    pub follower: Vector2<f32>,
    pub hovered: bool,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self {
            dot: Vector2::new(0.0, 0.0),
            follower: Vector2::new(0.0, 0.0),
            hovered: false,
        }
    }
}

impl CursorFollower {
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.dot = Vector2::new(x, y);
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// One frame of follower easing
    pub fn tick(&mut self) {
        self.follower += (self.dot - self.follower) * FOLLOW_FACTOR;
    }

    fn scale(&self) -> f32 {
        if self.hovered {
            HOVER_SCALE
        } else {
            1.0
        }
    }

    pub fn dot_radius(&self) -> f32 {
        DOT_RADIUS * self.scale()
    }

    pub fn follower_radius(&self) -> f32 {
        FOLLOWER_RADIUS * self.scale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follower_lags_then_converges() {
        let mut cursor = CursorFollower::default();
        cursor.move_to(100.0, 50.0);
        cursor.tick();
        assert!((cursor.follower.x - 12.0).abs() < 1e-4);
        for _ in 0..200 {
            cursor.tick();
        }
        assert!((cursor.follower.x - 100.0).abs() < 1e-2);
        assert!((cursor.follower.y - 50.0).abs() < 1e-2);
    }

    #[test]
    fn hover_enlarges_both_rings() {
        let mut cursor = CursorFollower::default();
        let (dot, ring) = (cursor.dot_radius(), cursor.follower_radius());
        cursor.set_hovered(true);
        assert!(cursor.dot_radius() > dot && cursor.follower_radius() > ring);
    }
}

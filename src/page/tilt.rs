//! Pointer-driven tilt of the skill cards

pub const MAX_TILT_DEGREES: f32 = 10.0;
pub const HOVER_LIFT: f32 = 6.0;

/// Card transform while the pointer is over it
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    /// Degrees about the horizontal axis
    pub rotate_x: f32,
    /// Degrees about the vertical axis
    pub rotate_y: f32,
    /// Upward offset in pixels
    pub lift: f32,
}

impl Tilt {
    /// Tilt for a pointer at (`px`, `py`) over a card whose rectangle starts
    /// at `origin` with `size`; points outside the card are clamped to its edge
    pub fn from_pointer(px: f32, py: f32, origin: [f32; 2], size: [f32; 2]) -> Self {
        if size[0] <= 0.0 || size[1] <= 0.0 {
            return Self::default();
        }
        let half_w = size[0] / 2.0;
        let half_h = size[1] / 2.0;
        let x = ((px - origin[0] - half_w) / half_w).clamp(-1.0, 1.0);
        let y = ((py - origin[1] - half_h) / half_h).clamp(-1.0, 1.0);

        Self {
            rotate_x: -y * MAX_TILT_DEGREES,
            rotate_y: x * MAX_TILT_DEGREES,
            lift: HOVER_LIFT,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_reach_full_tilt() {
        let tilt = Tilt::from_pointer(200.0, 100.0, [0.0, 0.0], [200.0, 100.0]);
        assert_eq!(tilt.rotate_y, 10.0);
        assert_eq!(tilt.rotate_x, -10.0);
        assert_eq!(tilt.lift, 6.0);

        let centered = Tilt::from_pointer(100.0, 50.0, [0.0, 0.0], [200.0, 100.0]);
        assert_eq!(centered.rotate_x, 0.0);
        assert_eq!(centered.rotate_y, 0.0);
    }

    #[test]
    fn reset_flattens_the_card() {
        let mut tilt = Tilt::from_pointer(10.0, 10.0, [0.0, 0.0], [100.0, 100.0]);
        tilt.reset();
        assert_eq!(tilt, Tilt::default());
    }
}

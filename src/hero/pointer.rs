use cgmath::Vector2;

/// Latest pointer sample in normalized window coordinates
///
/// x runs -1 (left) to 1 (right), y runs -1 (bottom) to 1 (top). Each
/// sample replaces the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Records a pointer position given in pixels within a `width` x `height`
    /// window. Samples from a zero-sized window are ignored.
    pub fn update(&mut self, px: f64, py: f64, width: f64, height: f64) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.x = (((px / width - 0.5) * 2.0) as f32).clamp(-1.0, 1.0);
        self.y = ((-(py / height - 0.5) * 2.0) as f32).clamp(-1.0, 1.0);
    }

    pub fn as_vector(&self) -> Vector2<f32> {
        Vector2::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_unit_square() {
        let mut pointer = PointerState::default();
        pointer.update(0.0, 0.0, 800.0, 600.0);
        assert_eq!((pointer.x, pointer.y), (-1.0, 1.0));
        pointer.update(800.0, 600.0, 800.0, 600.0);
        assert_eq!((pointer.x, pointer.y), (1.0, -1.0));
        pointer.update(400.0, 300.0, 800.0, 600.0);
        assert_eq!((pointer.x, pointer.y), (0.0, 0.0));
    }

    #[test]
    fn positions_outside_the_window_are_clamped() {
        let mut pointer = PointerState::default();
        pointer.update(-400.0, 1200.0, 800.0, 600.0);
        assert_eq!((pointer.x, pointer.y), (-1.0, -1.0));
    }

    #[test]
    fn zero_sized_window_keeps_last_sample() {
        let mut pointer = PointerState { x: 0.5, y: -0.25 };
        pointer.update(10.0, 10.0, 0.0, 600.0);
        assert_eq!(pointer, PointerState { x: 0.5, y: -0.25 });
    }
}

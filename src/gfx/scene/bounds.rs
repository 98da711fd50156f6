use cgmath::{Point3, Vector3};

/// Axis-aligned bounding box
///
/// The empty box has `min = +inf` and `max = -inf` so that expanding it by
/// any point yields that point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

impl Aabb {
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Point3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    pub fn from_points(points: impl IntoIterator<Item = Point3<f32>>) -> Self {
        let mut bounds = Self::empty();
        for point in points {
            bounds.expand(point);
        }
        bounds
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn expand(&mut self, point: Point3<f32>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    pub fn size(&self) -> Vector3<f32> {
        if self.is_empty() {
            return Vector3::new(0.0, 0.0, 0.0);
        }
        self.max - self.min
    }

    pub fn center(&self) -> Point3<f32> {
        if self.is_empty() {
            return Point3::new(0.0, 0.0, 0.0);
        }
        Point3::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    /// Largest edge length, 0 for an empty or degenerate box
    pub fn max_dimension(&self) -> f32 {
        let size = self.size();
        size.x.max(size.y).max(size.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_box_reports_zero_size() {
        let bounds = Aabb::empty();
        assert!(bounds.is_empty());
        assert_eq!(bounds.max_dimension(), 0.0);
    }

    #[test]
    fn expand_tracks_extremes() {
        let bounds = Aabb::from_points([Point3::new(-1.0, 2.0, 0.5), Point3::new(3.0, -2.0, 0.0)]);
        assert_eq!(bounds.size(), Vector3::new(4.0, 4.0, 0.5));
        assert_eq!(bounds.center(), Point3::new(1.0, 0.0, 0.25));
        assert_eq!(bounds.max_dimension(), 4.0);
    }
}

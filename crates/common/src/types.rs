use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The window-space rectangle sprites bounce inside: `[0, width] x [0, height]`.
///
/// Origin is the bottom-left corner, matching the orthographic projection the
/// renderer uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both dimensions as a vector.
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Whether a point lies inside the rectangle (bounds inclusive).
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive() {
        let b = Bounds::new(1920.0, 1080.0);
        assert!(b.contains(Vec2::ZERO));
        assert!(b.contains(Vec2::new(1920.0, 1080.0)));
        assert!(b.contains(Vec2::new(960.0, 540.0)));
        assert!(!b.contains(Vec2::new(-0.1, 540.0)));
        assert!(!b.contains(Vec2::new(960.0, 1080.1)));
    }
}

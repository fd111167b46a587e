use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One simulated sprite.
///
/// Velocity is constant in magnitude per axis; only its sign changes when the
/// sprite bounces off a window bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    /// Position of the sprite's bottom-left corner in window space.
    pub position: Vec2,
    /// Per-frame displacement in pixels.
    pub velocity: Vec2,
    /// RGB tint in `[0, 1)`, multiplied into the texture at draw time.
    pub tint: [f32; 3],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprite_is_plain_data() {
        let s = Sprite {
            position: Vec2::new(1.0, 2.0),
            velocity: Vec2::new(-3.0, 4.0),
            tint: [0.5, 0.25, 0.75],
        };
        let copy = s;
        assert_eq!(s, copy);
    }
}

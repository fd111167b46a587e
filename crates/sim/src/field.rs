use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use spritemark_common::{BenchConfig, Bounds};

use crate::sprite::Sprite;

/// The authoritative simulation state: a flat, fixed-population array of
/// sprites plus the bounds they bounce inside.
///
/// All N sprites are created once at spawn and mutated in place every frame.
/// Iteration order is the spawn order, so a run is fully determined by the
/// seed and the sprite count.
#[derive(Debug, Clone)]
pub struct SpriteField {
    sprites: Vec<Sprite>,
    bounds: Bounds,
    extent: Vec2,
}

impl SpriteField {
    /// Spawn N sprites from the configured seed.
    ///
    /// Positions are uniform over the window rectangle; velocity components
    /// are uniform in `[-speed_scale, +speed_scale)` per axis; tints are
    /// uniform in `[0, 1)` per channel. Deterministic for a given seed and
    /// count.
    pub fn spawn(config: &BenchConfig) -> Self {
        assert!(
            config.width > 0 && config.height > 0,
            "window dimensions must be positive"
        );
        let bounds = config.bounds();
        let mut rng = Pcg32::seed_from_u64(config.seed);
        let sprites = (0..config.sprites)
            .map(|_| Sprite {
                position: Vec2::new(
                    rng.random_range(0.0..bounds.width),
                    rng.random_range(0.0..bounds.height),
                ),
                velocity: Vec2::new(
                    config.speed_scale * rng.random_range(-1.0..1.0),
                    config.speed_scale * rng.random_range(-1.0..1.0),
                ),
                tint: [
                    rng.random_range(0.0..1.0),
                    rng.random_range(0.0..1.0),
                    rng.random_range(0.0..1.0),
                ],
            })
            .collect();
        tracing::debug!(
            sprites = config.sprites,
            seed = config.seed,
            "spawned sprite field"
        );
        Self {
            sprites,
            bounds,
            extent: config.sprite_extent(),
        }
    }

    /// Build a field from explicit sprites. Used by tests and state dumps.
    pub fn with_sprites(sprites: Vec<Sprite>, bounds: Bounds, extent: Vec2) -> Self {
        Self {
            sprites,
            bounds,
            extent,
        }
    }

    /// Advance every sprite by one frame: integrate, then reflect velocity
    /// components that crossed a bound.
    ///
    /// The upper-bound test accounts for the sprite's drawn extent; position
    /// itself is never clamped, so a sprite may sit one velocity-step past a
    /// bound for the frame in which the bounce is applied.
    pub fn step(&mut self) {
        for s in &mut self.sprites {
            s.position += s.velocity;
            if s.position.x <= 0.0 || s.position.x + self.extent.x >= self.bounds.width {
                s.velocity.x = -s.velocity.x;
            }
            if s.position.y <= 0.0 || s.position.y + self.extent.y >= self.bounds.height {
                s.velocity.y = -s.velocity.y;
            }
        }
    }

    /// Read-only access to the sprites in spawn order.
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// The rectangle sprites bounce inside.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Drawn sprite extent used by the upper-bound bounce test.
    pub fn extent(&self) -> Vec2 {
        self.extent
    }

    /// Compute a deterministic hash of the field for comparison across runs.
    /// Iterates in spawn order, so equal fields hash equally on any platform.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        mix(&mut h, &(self.sprites.len() as u64).to_le_bytes());
        for s in &self.sprites {
            mix(&mut h, &s.position.x.to_le_bytes());
            mix(&mut h, &s.position.y.to_le_bytes());
            mix(&mut h, &s.velocity.x.to_le_bytes());
            mix(&mut h, &s.velocity.y.to_le_bytes());
            for c in s.tint {
                mix(&mut h, &c.to_le_bytes());
            }
        }
        h
    }
}

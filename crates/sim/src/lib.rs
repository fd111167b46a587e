//! Sprite simulation: deterministic spawn, per-frame integration, boundary bounce.
//!
//! # Invariants
//! - Spawning is deterministic: the same seed and count yield bit-identical sprites.
//! - Integration never changes a velocity component's magnitude, only its sign.
//! - Sprites are never added or removed after spawn.

pub mod field;
pub mod sprite;

pub use field::SpriteField;
pub use sprite::Sprite;

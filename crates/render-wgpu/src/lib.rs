//! wgpu render backend for the sprite benchmark.
//!
//! One quad mesh, one texture, one pipeline, all shared and bound once per
//! frame. Per-sprite translations stream through an instance buffer and are
//! drawn either as one submission per sprite or as a single instanced call.

pub mod context;
pub mod shaders;
pub mod sprite;
pub mod texture;

pub use context::{GpuContext, GpuContextError};
pub use sprite::{DrawMode, SpriteRenderer};
pub use texture::{SPRITE_TEXTURE_HEIGHT, SPRITE_TEXTURE_WIDTH, TexturePixels, load_texture};

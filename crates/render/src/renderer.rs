use spritemark_sim::SpriteField;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads the sprite field and produces output. It never mutates
/// the field; simulation truth is owned by the sim crate.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given field state.
    fn render(&mut self, field: &SpriteField) -> Self::Output;
}

/// Renderer that does nothing.
///
/// Used for headless timing runs where only the integration step should be
/// measured, and as the zero-draw baseline in tests.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl NullRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for NullRenderer {
    type Output = ();

    fn render(&mut self, _field: &SpriteField) {}
}

/// Text renderer producing a human-readable dump of the field state.
///
/// Useful for CLI output and for asserting deterministic state in tests.
#[derive(Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&mut self, field: &SpriteField) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Sprite Field (sprites={}, hash={:#018x}) ===\n",
            field.len(),
            field.state_hash()
        ));
        for (i, s) in field.sprites().iter().enumerate() {
            out.push_str(&format!(
                "  [{i}] pos=({:.2}, {:.2}) vel=({:.2}, {:.2})\n",
                s.position.x, s.position.y, s.velocity.x, s.velocity.y
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use spritemark_common::Bounds;
    use spritemark_sim::Sprite;

    #[test]
    fn text_renderer_empty_field() {
        let field = SpriteField::with_sprites(
            Vec::new(),
            Bounds::new(1920.0, 1080.0),
            Vec2::new(40.0, 50.0),
        );
        let output = TextRenderer::new().render(&field);
        assert!(output.contains("sprites=0"));
    }

    #[test]
    fn text_renderer_lists_each_sprite() {
        let sprites = vec![
            Sprite {
                position: Vec2::new(10.0, 20.0),
                velocity: Vec2::new(1.0, -1.0),
                tint: [1.0; 3],
            },
            Sprite {
                position: Vec2::new(30.0, 40.0),
                velocity: Vec2::new(-2.0, 2.0),
                tint: [1.0; 3],
            },
        ];
        let field =
            SpriteField::with_sprites(sprites, Bounds::new(100.0, 100.0), Vec2::new(4.0, 4.0));
        let output = TextRenderer::new().render(&field);
        assert!(output.contains("sprites=2"));
        assert!(output.contains("[0] pos=(10.00, 20.00)"));
        assert!(output.contains("[1] pos=(30.00, 40.00)"));
    }
}

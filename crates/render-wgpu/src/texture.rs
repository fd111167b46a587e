use std::path::Path;

/// Native sprite texture width in texels.
pub const SPRITE_TEXTURE_WIDTH: u32 = 160;
/// Native sprite texture height in texels.
pub const SPRITE_TEXTURE_HEIGHT: u32 = 200;

/// A decoded RGBA8 pixel buffer ready for GPU upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TexturePixels {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Load the sprite texture, falling back to the built-in pattern.
///
/// A missing or corrupt file is logged and the run continues; the benchmark
/// must work with no assets on disk at all.
pub fn load_texture(path: Option<&Path>) -> TexturePixels {
    match path {
        Some(p) => match image::open(p) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                let (width, height) = rgba.dimensions();
                tracing::debug!(path = %p.display(), width, height, "loaded sprite texture");
                TexturePixels {
                    width,
                    height,
                    data: rgba.into_raw(),
                }
            }
            Err(e) => {
                tracing::warn!(
                    path = %p.display(),
                    error = %e,
                    "failed to load sprite texture; using built-in pattern"
                );
                fallback_pixels()
            }
        },
        None => fallback_pixels(),
    }
}

/// Procedurally generated stand-in sprite: a blocky figure on a transparent
/// background, at the native 160x200 size.
pub fn fallback_pixels() -> TexturePixels {
    const SKIN: [u8; 4] = [232, 178, 110, 255];
    const SHIRT: [u8; 4] = [58, 110, 196, 255];
    const TROUSERS: [u8; 4] = [40, 44, 60, 255];
    const CLEAR: [u8; 4] = [0, 0, 0, 0];

    let (w, h) = (SPRITE_TEXTURE_WIDTH, SPRITE_TEXTURE_HEIGHT);
    let mut data = Vec::with_capacity((w * h * 4) as usize);
    for y in 0..h {
        for x in 0..w {
            let texel = if (16..64).contains(&y) && (56..104).contains(&x) {
                SKIN // head
            } else if (64..152).contains(&y) && (44..116).contains(&x) {
                SHIRT // torso
            } else if (72..128).contains(&y) && ((24..44).contains(&x) || (116..136).contains(&x)) {
                SHIRT // arms
            } else if (152..192).contains(&y) && ((52..76).contains(&x) || (84..108).contains(&x)) {
                TROUSERS // legs
            } else {
                CLEAR
            };
            data.extend_from_slice(&texel);
        }
    }
    TexturePixels {
        width: w,
        height: h,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_has_native_dimensions() {
        let px = fallback_pixels();
        assert_eq!(px.width, SPRITE_TEXTURE_WIDTH);
        assert_eq!(px.height, SPRITE_TEXTURE_HEIGHT);
        assert_eq!(px.data.len(), (px.width * px.height * 4) as usize);
    }

    #[test]
    fn fallback_mixes_opaque_and_transparent_texels() {
        let px = fallback_pixels();
        let alphas: Vec<u8> = px.data.iter().skip(3).step_by(4).copied().collect();
        assert!(alphas.contains(&255));
        assert!(alphas.contains(&0));
        // Corners are background.
        assert_eq!(alphas[0], 0);
        assert_eq!(*alphas.last().unwrap(), 0);
    }

    #[test]
    fn missing_file_falls_back() {
        let px = load_texture(Some(Path::new("/nonexistent/sprite.png")));
        assert_eq!(px, fallback_pixels());
    }

    #[test]
    fn no_path_uses_fallback() {
        assert_eq!(load_texture(None), fallback_pixels());
    }
}

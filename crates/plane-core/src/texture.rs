use crate::error::{Result, ViewerError};
use std::future::Future;

/// RGBA8 pixels ready for upload, rows top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    #[inline]
    pub fn bytes_per_row(&self) -> u32 {
        4 * self.width
    }

    /// Reject empty images and images larger than `max_dim` on either side,
    /// which the GPU could not allocate.
    pub fn ensure_fits(&self, src: &str, max_dim: u32) -> Result<()> {
        let side_ok = |n: u32| (1..=max_dim).contains(&n);
        if side_ok(self.width) && side_ok(self.height) {
            return Ok(());
        }
        Err(ViewerError::TextureSize {
            src: src.to_string(),
            width: self.width,
            height: self.height,
            max: max_dim,
        })
    }
}

/// Decode an encoded image (PNG or JPEG) into RGBA8.
pub fn decode_rgba(src: &str, bytes: &[u8]) -> Result<DecodedImage> {
    let img = image::load_from_memory(bytes)
        .map_err(|source| ViewerError::TextureDecode {
            src: src.to_string(),
            source,
        })?
        .to_rgba8();
    Ok(DecodedImage {
        width: img.width(),
        height: img.height(),
        pixels: img.into_raw(),
    })
}

/// Turns a source identifier into a ready-to-draw texture handle.
///
/// Each call resolves exactly once. There is no retry and no timeout.
pub trait TextureLoader {
    type Texture;

    fn load(&self, src: &str) -> impl Future<Output = Result<Self::Texture>>;
}

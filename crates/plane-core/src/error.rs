use crate::plane::PlaneId;

/// Failures surfaced by the viewer core.
///
/// Texture failures are logged by the caller and leave the scene untouched;
/// nothing here is fatal to the frame loop.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("failed to fetch texture `{src}`: {reason}")]
    TextureFetch { src: String, reason: String },
    #[error("failed to decode texture `{src}`")]
    TextureDecode {
        src: String,
        #[source]
        source: image::ImageError,
    },
    #[error("texture `{src}` is {width}x{height}, outside 1..={max} per side")]
    TextureSize {
        src: String,
        width: u32,
        height: u32,
        max: u32,
    },
    #[error("unknown plane {0}")]
    UnknownPlane(PlaneId),
    #[error("render failed: {0}")]
    Render(String),
}

pub type Result<T, E = ViewerError> = std::result::Result<T, E>;

pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod frame_loop;
pub mod grid;
pub mod pick;
pub mod plane;
pub mod texture;
pub mod tone;
pub mod viewer;

pub use camera::*;
pub use config::ViewerConfig;
pub use error::{Result, ViewerError};
pub use frame_loop::*;
pub use pick::*;
pub use plane::*;
pub use texture::*;
pub use tone::*;
pub use viewer::*;

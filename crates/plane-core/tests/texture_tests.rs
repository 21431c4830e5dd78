use plane_core::{
    add_image_plane, decode_rgba, DecodedImage, PlaneDesc, PlaneId, TextureLoader, Viewer,
    ViewerConfig, ViewerError, Viewport,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::{ready, Future};
use std::io::Cursor;

fn png_bytes(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_fn(w, h, |x, y| image::Rgba([x as u8, y as u8, 7, 255]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

/// Serves encoded images from memory and decodes them like the browser loader,
/// including the device texture size check.
struct MemoryLoader {
    files: HashMap<String, Vec<u8>>,
    max_dim: u32,
}

impl TextureLoader for MemoryLoader {
    type Texture = DecodedImage;

    fn load(&self, src: &str) -> impl Future<Output = plane_core::Result<DecodedImage>> {
        let out = match self.files.get(src) {
            Some(bytes) => decode_rgba(src, bytes).and_then(|img| {
                img.ensure_fits(src, self.max_dim)?;
                Ok(img)
            }),
            None => Err(ViewerError::TextureFetch {
                src: src.to_string(),
                reason: "404".into(),
            }),
        };
        ready(out)
    }
}

fn loader() -> MemoryLoader {
    let mut files = HashMap::new();
    files.insert("image.png".to_string(), png_bytes(4, 2));
    files.insert("broken.png".to_string(), b"not a png".to_vec());
    files.insert("wide.png".to_string(), png_bytes(40, 2));
    MemoryLoader { files, max_dim: 16 }
}

fn viewer() -> RefCell<Viewer<DecodedImage>> {
    RefCell::new(Viewer::new(ViewerConfig::default(), Viewport::new(800.0, 600.0)))
}

#[test]
fn decode_produces_rgba_rows() {
    let img = decode_rgba("x.png", &png_bytes(3, 5)).unwrap();
    assert_eq!((img.width, img.height), (3, 5));
    assert_eq!(img.pixels.len(), 3 * 5 * 4);
    assert_eq!(img.bytes_per_row(), 12);
    assert_eq!(&img.pixels[4..8], &[1, 0, 7, 255]);
}

#[test]
fn decode_failure_names_the_source() {
    let err = decode_rgba("broken.png", b"nope").unwrap_err();
    assert!(matches!(err, ViewerError::TextureDecode { .. }));
    assert!(err.to_string().contains("broken.png"));
}

#[test]
fn successful_load_appends_plane() {
    let v = viewer();
    let id = pollster::block_on(add_image_plane(
        &v,
        &loader(),
        PlaneDesc::new("image.png", 40.0, 40.0),
    ));
    assert_eq!(id, Some(PlaneId(0)));
    let v = v.borrow();
    let plane = v.planes().get(PlaneId(0)).unwrap();
    assert_eq!(plane.texture.width, 4);
    assert_eq!(plane.size, glam::Vec2::new(40.0, 40.0));
    assert!(!plane.shading.selected);
    assert_eq!(plane.shading.opacity, 1.0);
}

#[test]
fn failed_loads_leave_registry_unchanged() {
    let v = viewer();
    let l = loader();
    assert!(pollster::block_on(add_image_plane(&v, &l, PlaneDesc::new("missing.png", 1.0, 1.0))).is_none());
    assert!(pollster::block_on(add_image_plane(&v, &l, PlaneDesc::new("broken.png", 1.0, 1.0))).is_none());
    assert!(v.borrow().planes().is_empty());

    pollster::block_on(add_image_plane(&v, &l, PlaneDesc::new("image.png", 1.0, 1.0)));
    assert_eq!(v.borrow().planes().len(), 1);
}

#[test]
fn panel_actions_target_last_plane_without_selection() {
    let v = viewer();
    let l = loader();
    for _ in 0..2 {
        pollster::block_on(add_image_plane(&v, &l, PlaneDesc::new("image.png", 1.0, 1.0)));
    }
    let mut v = v.into_inner();
    assert_eq!(v.action_target(), Some(PlaneId(1)));
    v.flip().unwrap();
    assert!(v.planes().get(PlaneId(1)).unwrap().rotation.y > 3.0);
    assert_eq!(v.planes().get(PlaneId(0)).unwrap().rotation.y, 0.0);

    v.planes_mut().set_selected(PlaneId(0)).unwrap();
    v.mirror().unwrap();
    assert!(v.planes().get(PlaneId(0)).unwrap().rotation.x > 3.0);
}

#[test]
fn texture_size_is_checked_against_device_limit() {
    let img = decode_rgba("x.png", &png_bytes(16, 3)).unwrap();
    assert!(img.ensure_fits("x.png", 16).is_ok());

    let err = img.ensure_fits("x.png", 8).unwrap_err();
    assert!(matches!(
        err,
        ViewerError::TextureSize {
            width: 16,
            height: 3,
            max: 8,
            ..
        }
    ));
    assert!(err.to_string().contains("x.png"));

    let empty = DecodedImage {
        width: 0,
        height: 4,
        pixels: Vec::new(),
    };
    assert!(empty.ensure_fits("empty.png", 8192).is_err());
}

#[test]
fn oversized_texture_is_not_added() {
    let v = viewer();
    let l = loader();
    let id = pollster::block_on(add_image_plane(&v, &l, PlaneDesc::new("wide.png", 40.0, 2.0)));
    assert!(id.is_none());
    assert!(v.borrow().planes().is_empty());
}

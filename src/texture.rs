use crate::render::{GpuState, PlaneResources};
use plane_core::{decode_rgba, TextureLoader, ViewerError};
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Fetches an image over HTTP, decodes it and uploads it to the GPU.
#[derive(Clone)]
pub struct WebTextureLoader {
    gpu: Rc<RefCell<GpuState>>,
}

impl WebTextureLoader {
    pub fn new(gpu: Rc<RefCell<GpuState>>) -> Self {
        Self { gpu }
    }
}

impl TextureLoader for WebTextureLoader {
    type Texture = PlaneResources;

    fn load(&self, src: &str) -> impl Future<Output = plane_core::Result<PlaneResources>> {
        let gpu = self.gpu.clone();
        let src = src.to_string();
        async move {
            let bytes = fetch_bytes(&src).await?;
            let image = decode_rgba(&src, &bytes)?;
            log::info!("[texture] `{}` {}x{}", src, image.width, image.height);
            let resources = gpu.borrow().upload_plane(&src, &image)?;
            Ok(resources)
        }
    }
}

async fn fetch_bytes(src: &str) -> plane_core::Result<Vec<u8>> {
    let fail = |reason: String| ViewerError::TextureFetch {
        src: src.to_string(),
        reason,
    };
    let window = web::window().ok_or_else(|| fail("no window".into()))?;
    let resp_val = JsFuture::from(window.fetch_with_str(src))
        .await
        .map_err(|e| fail(format!("{:?}", e)))?;
    let resp: web::Response = resp_val
        .dyn_into()
        .map_err(|_| fail("fetch did not return a Response".into()))?;
    if !resp.ok() {
        return Err(fail(format!("HTTP {}", resp.status())));
    }
    let body = resp.array_buffer().map_err(|e| fail(format!("{:?}", e)))?;
    let buf = JsFuture::from(body)
        .await
        .map_err(|e| fail(format!("{:?}", e)))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

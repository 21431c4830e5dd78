#![cfg(target_arch = "wasm32")]
use glam::Vec3;
use plane_core::{
    PlaneDesc, RenderLoop, SelectionPolicy, StopToken, Viewer, ViewerConfig, Viewport,
};
use render::PlaneResources;
use std::cell::RefCell;
use std::rc::Rc;
use texture::WebTextureLoader;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod keymap;
mod overlay;
mod render;
mod shaders;
mod texture;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("plane-viewer-web starting");
    Ok(())
}

/// Handle returned to the page. Its accessors and actions are what the
/// debug panel binds to.
#[wasm_bindgen]
pub struct PlaneViewer {
    viewer: Rc<RefCell<Viewer<PlaneResources>>>,
    loader: WebTextureLoader,
    stop: StopToken,
}

#[wasm_bindgen]
impl PlaneViewer {
    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> f32 {
        self.viewer.borrow().tone.brightness
    }

    #[wasm_bindgen(setter)]
    pub fn set_brightness(&self, value: f32) {
        self.update_tone(|t| t.brightness = value);
    }

    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> f32 {
        self.viewer.borrow().tone.contrast
    }

    #[wasm_bindgen(setter)]
    pub fn set_contrast(&self, value: f32) {
        self.update_tone(|t| t.contrast = value);
    }

    #[wasm_bindgen(getter)]
    pub fn opacity(&self) -> f32 {
        self.viewer.borrow().tone.opacity
    }

    #[wasm_bindgen(setter)]
    pub fn set_opacity(&self, value: f32) {
        self.update_tone(|t| t.opacity = value);
    }

    pub fn flip(&self) {
        if let Err(e) = self.viewer.borrow_mut().flip() {
            log::error!("flip: {}", e);
        }
    }

    pub fn mirror(&self) {
        if let Err(e) = self.viewer.borrow_mut().mirror() {
            log::error!("mirror: {}", e);
        }
    }

    #[wasm_bindgen(js_name = clearSelection)]
    pub fn clear_selection(&self) {
        let mut v = self.viewer.borrow_mut();
        v.clear_selection();
        overlay::refresh(&*v);
    }

    /// Selected plane id, if any.
    #[wasm_bindgen(getter)]
    pub fn selected(&self) -> Option<u32> {
        self.viewer.borrow().planes().selected_id().map(|id| id.0)
    }

    /// Load `src` and add it as a `width` x `height` plane at (x, y, z).
    /// Resolves to the new plane id, or `undefined` if the texture failed.
    #[wasm_bindgen(js_name = addImagePlane)]
    pub fn add_image_plane(
        &self,
        src: String,
        width: f32,
        height: f32,
        x: Option<f32>,
        y: Option<f32>,
        z: Option<f32>,
    ) -> js_sys::Promise {
        let viewer = self.viewer.clone();
        let loader = self.loader.clone();
        let position = Vec3::new(x.unwrap_or(0.0), y.unwrap_or(0.0), z.unwrap_or(0.0));
        let desc = PlaneDesc::new(src, width, height).at(position);
        future_to_promise(async move {
            let id = plane_core::add_image_plane(&viewer, &loader, desc).await;
            overlay::refresh(&*viewer.borrow());
            Ok(id.map_or(JsValue::UNDEFINED, |id| JsValue::from(id.0)))
        })
    }

    /// End the frame loop. Input handlers stay attached but nothing redraws.
    pub fn stop(&self) {
        self.stop.stop();
    }
}

impl PlaneViewer {
    fn update_tone(&self, f: impl FnOnce(&mut plane_core::ToneSettings)) {
        let mut v = self.viewer.borrow_mut();
        f(&mut v.tone);
        overlay::refresh(&*v);
    }
}

/// `[min, max]` for the named tone slider, or `undefined` for an unknown name.
#[wasm_bindgen(js_name = sliderRange)]
pub fn slider_range(control: &str) -> Option<Vec<f32>> {
    plane_core::slider_range(control).map(|(lo, hi)| vec![lo, hi])
}

/// Create a viewer. Omitted sizes track the browser viewport. A click on
/// empty space keeps the selection unless `clear_on_miss` is true.
#[wasm_bindgen(js_name = createViewer)]
pub async fn create_viewer(
    width: Option<u32>,
    height: Option<u32>,
    background: Option<u32>,
    background_alpha: Option<f32>,
    clear_on_miss: Option<bool>,
) -> Result<PlaneViewer, JsValue> {
    let defaults = ViewerConfig::default();
    let config = ViewerConfig {
        width,
        height,
        background: background.unwrap_or(defaults.background),
        background_alpha: background_alpha.unwrap_or(defaults.background_alpha),
        selection: clear_on_miss.map_or(defaults.selection, SelectionPolicy::from_clear_on_miss),
        ..defaults
    };
    init(config).await.map_err(|e| {
        log::error!("init error: {:?}", e);
        JsValue::from_str(&format!("{:#}", e))
    })
}

async fn init(config: ViewerConfig) -> anyhow::Result<PlaneViewer> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::mount_canvas(&document, constants::CANVAS_ID, config.fixed_size())?;
    dom::wire_canvas_resize(&canvas);

    let gpu = Rc::new(RefCell::new(frame::init_gpu(&canvas, &config).await?));
    let viewport = Viewport::new(canvas.width() as f32, canvas.height() as f32);
    let viewer = Rc::new(RefCell::new(Viewer::new(config, viewport)));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        viewer: viewer.clone(),
    });
    events::wire_global_keydown(viewer.clone());
    overlay::refresh(&*viewer.borrow());

    let stop = StopToken::new();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        viewer: viewer.clone(),
        gpu: gpu.clone(),
        canvas,
        render_loop: RenderLoop::new(stop.clone()),
    }));
    // Start RAF loop
    frame::start_loop(frame_ctx);

    Ok(PlaneViewer {
        viewer,
        loader: WebTextureLoader::new(gpu),
        stop,
    })
}

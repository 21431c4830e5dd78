use crate::render::{GpuState, PlaneResources};
use plane_core::{LoopControl, RenderLoop, Viewer, ViewerConfig, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub struct FrameContext {
    pub viewer: Rc<RefCell<Viewer<PlaneResources>>>,
    pub gpu: Rc<RefCell<GpuState>>,
    pub canvas: web::HtmlCanvasElement,
    pub render_loop: RenderLoop,
}

impl FrameContext {
    pub fn frame(&mut self) -> LoopControl {
        let w = self.canvas.width();
        let h = self.canvas.height();
        let mut gpu = self.gpu.borrow_mut();
        gpu.resize_if_needed(w, h);
        let mut viewer = self.viewer.borrow_mut();
        viewer.set_viewport(Viewport::new(w as f32, h as f32));
        self.render_loop.tick(&mut *viewer, &mut *gpu)
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement, cfg: &ViewerConfig) -> anyhow::Result<GpuState> {
    GpuState::new(canvas, cfg).await.map_err(|e| {
        log::error!("WebGPU init error: {:?}", e);
        e
    })
}

/// Drive `frame_ctx` from requestAnimationFrame until its loop reports `Stop`.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if frame_ctx.borrow_mut().frame() == LoopControl::Stop {
            log::info!("[frame] loop stopped");
            // The closure is still running; release it once this callback returns.
            let released = tick_clone.borrow_mut().take();
            spawn_local(async move {
                drop(released);
            });
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

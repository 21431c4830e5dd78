use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Find the viewer canvas, or create one and append it to `<body>`.
pub fn mount_canvas(
    document: &web::Document,
    id: &str,
    fixed_size: Option<(u32, u32)>,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = match document.get_element_by_id(id) {
        Some(el) => el,
        None => {
            let el = document
                .create_element("canvas")
                .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?;
            el.set_id(id);
            let body = document
                .body()
                .ok_or_else(|| anyhow::anyhow!("no <body>"))?;
            body.append_child(&el)
                .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
            el
        }
    };
    let canvas: web::HtmlCanvasElement = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let (w, h) = match fixed_size {
        Some((w, h)) => (format!("{w}px"), format!("{h}px")),
        None => ("100vw".to_string(), "100vh".to_string()),
    };
    let style = canvas.style();
    _ = style.set_property("width", &w);
    _ = style.set_property("height", &h);
    _ = style.set_property("display", "block");
    _ = style.set_property("touch-action", "none");
    Ok(canvas)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

// Maintain canvas internal pixel size to match CSS size * devicePixelRatio
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

use crate::keymap::{action_for_key, KeyAction};
use crate::overlay;
use crate::render::PlaneResources;
use plane_core::Viewer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, viewer: &Rc<RefCell<Viewer<PlaneResources>>>) {
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    let mut v = viewer.borrow_mut();
    let res = match action {
        KeyAction::Flip => v.flip(),
        KeyAction::Mirror => v.mirror(),
        KeyAction::ClearSelection => {
            v.clear_selection();
            Ok(())
        }
        KeyAction::ResetCamera => {
            v.reset_camera();
            log::info!("[keys] camera reset");
            Ok(())
        }
        KeyAction::ToggleHint => {
            if let Some(document) = web::window().and_then(|w| w.document()) {
                overlay::toggle(&document);
            }
            Ok(())
        }
    };
    if let Err(e) = res {
        log::error!("[keys] {:?}: {}", action, e);
    }
    overlay::refresh(&*v);
}

pub fn wire_global_keydown(viewer: Rc<RefCell<Viewer<PlaneResources>>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &viewer);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

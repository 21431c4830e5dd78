use plane_core::{PlaneId, ToneSettings, Viewer};
use web_sys as web;

const HINT_ID: &str = "hint-overlay";

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

pub fn hint_text(selected: Option<PlaneId>, planes: usize, tone: &ToneSettings) -> String {
    let selected_text = match selected {
        Some(id) => format!("Selected: {}", id),
        None => "Selected: none".to_string(),
    };
    let count = match planes {
        1 => "1 plane".to_string(),
        n => format!("{} planes", n),
    };
    format!(
        "{} ({}) • Brightness: {:.2} • Contrast: {:.2} • Opacity: {:.2}",
        selected_text, count, tone.brightness, tone.contrast, tone.opacity
    )
}

/// Update the hint overlay with the current selection and tone
pub fn refresh<T>(viewer: &Viewer<T>) {
    let Some(document) = web::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        let planes = viewer.planes();
        el.set_text_content(Some(&hint_text(
            planes.selected_id(),
            planes.len(),
            &viewer.tone,
        )));
    }
}

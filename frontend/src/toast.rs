//! Transient toast notifications, injected straight into the DOM so any
//! component can report an outcome without threading callbacks upward.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Confirmation toast (dark green).
pub fn show_success(message: &str) {
    show(message, "#1b5e20");
}

/// Failure toast (dark red).
pub fn show_error(message: &str) {
    show(message, "#b71c1c");
}

fn show(message: &str, background: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("top", "20px").ok();
                style.set_property("right", "20px").ok();
                style.set_property("background", background).ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();
                style.set_property("box-shadow", "0 2px 8px rgba(0,0,0,0.3)").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(4000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

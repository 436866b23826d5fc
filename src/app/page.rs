//! Static page elements: lookup, the loading screen and the startup error banner.

use leptos::wasm_bindgen::JsCast;
use leptos::web_sys::HtmlElement;

use super::error::StartupError;

pub const LEPTOS_ROOT_ID: &str = "leptos-app";
pub const CANVAS_ID: &str = "three-canvas";
pub const CANVAS_CONTAINER_ID: &str = "three-container";
const LOADING_SCREEN_ID: &str = "loading-screen";
const ERROR_BANNER_CLASS: &str = "error-message";

pub fn element_by_id<T: JsCast>(id: &'static str) -> Result<T, StartupError> {
    leptos::tachys::dom::document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or(StartupError::MissingElement(id))
}

pub fn hide_loading_screen() {
    if let Ok(screen) = element_by_id::<HtmlElement>(LOADING_SCREEN_ID) {
        let _ = screen.style().set_property("display", "none");
    }
}

/// Show `message` in a banner that removes itself after `display_ms`.
pub fn show_error_message(message: &str, display_ms: u32) {
    let document = leptos::tachys::dom::document();
    let Some(body) = document.body() else {
        return;
    };
    let Ok(banner) = document.create_element("div") else {
        return;
    };
    banner.set_class_name(ERROR_BANNER_CLASS);
    banner.set_text_content(Some(message));
    if body.append_child(&banner).is_err() {
        return;
    }
    leptos::prelude::set_timeout(
        move || banner.remove(),
        std::time::Duration::from_millis(display_ms.into()),
    );
}

//! DOM helpers shared by the browser tests.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, KeyboardEventInit, MouseEvent, MouseEventInit};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Fresh `<div>` appended to `<body>` for one test's app.
pub(crate) fn mount_point() -> Element {
    let host = gloo::utils::document()
        .create_element("div")
        .expect("create mount point");
    gloo::utils::body()
        .append_child(&host)
        .expect("attach mount point");
    host
}

/// Let the scheduler render pending updates.
pub(crate) async fn flush() {
    TimeoutFuture::new(0).await;
}

pub(crate) fn find(host: &Element, selector: &str) -> HtmlElement {
    host.query_selector(selector)
        .expect("valid selector")
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .dyn_into::<HtmlElement>()
        .expect("html element")
}

pub(crate) fn press_key(key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("keyboard event");
    gloo::utils::document()
        .dispatch_event(&event)
        .expect("dispatch keydown");
}

pub(crate) fn pointer_down(target: &Element) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    let event =
        MouseEvent::new_with_mouse_event_init_dict("mousedown", &init).expect("mouse event");
    target.dispatch_event(&event).expect("dispatch mousedown");
}

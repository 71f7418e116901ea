use gloo_timers::future::sleep;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlTextAreaElement};

/// Fresh `<div>` appended to the test page body.
pub fn container() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&container).unwrap();
    container.unchecked_into()
}

pub fn by_test_id(root: &Element, id: &str) -> Option<Element> {
    root.query_selector(&format!("[data-testid='{}']", id)).unwrap()
}

pub fn count_prefixed(root: &Element, prefix: &str) -> u32 {
    root.query_selector_all(&format!("[data-testid^='{}']", prefix))
        .unwrap()
        .length()
}

pub fn text_of(root: &Element, id: &str) -> Option<String> {
    by_test_id(root, id).and_then(|el| el.text_content())
}

pub fn click(root: &Element, id: &str) {
    let el = by_test_id(root, id).unwrap_or_else(|| panic!("no element {}", id));
    el.unchecked_into::<HtmlElement>().click();
}

pub fn type_into(root: &Element, id: &str, text: &str) {
    let el = by_test_id(root, id).unwrap_or_else(|| panic!("no element {}", id));
    let textarea: HtmlTextAreaElement = el.unchecked_into();
    textarea.set_value(text);
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("input", &init).unwrap();
    textarea.dispatch_event(&event).unwrap();
}

/// Polls `condition` for up to a second.
pub async fn wait_for(mut condition: impl FnMut() -> bool) -> bool {
    for _ in 0..40 {
        if condition() {
            return true;
        }
        sleep(Duration::from_millis(25)).await;
    }
    condition()
}

/// Points the browser at `path` before a router is mounted.
pub fn visit(path: &str) {
    web_sys::window()
        .unwrap()
        .history()
        .unwrap()
        .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
        .unwrap();
}

pub fn current_path() -> String {
    web_sys::window().unwrap().location().pathname().unwrap()
}

pub async fn pause(millis: u64) {
    sleep(Duration::from_millis(millis)).await;
}

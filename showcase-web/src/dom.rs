/// Small helpers over `web_sys` element lookup and event wiring
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, EventTarget, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))
}

pub fn document(window: &Window) -> Result<Document, JsValue> {
    window
        .document()
        .ok_or_else(|| JsValue::from_str("document not available"))
}

/// Look up an element by id and cast it; `None` when absent or of another type
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let element = document.get_element_by_id(id)?;
    match element.dyn_into::<T>() {
        Ok(typed) => Some(typed),
        Err(_) => {
            log::warn!("#{} is not the expected element type", id);
            None
        }
    }
}

/// Attach a listener that lives as long as the page
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

use crate::overlay;
use crate::state::AppState;
use galaxy_core::action_for_key;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, state: &Rc<RefCell<AppState>>) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() || ev.repeat() {
        return;
    }
    let key = ev.key();
    if key == "h" || key == "H" {
        if let Some(document) = crate::dom::window_document() {
            overlay::toggle_hint(&document);
        }
        ev.prevent_default();
        return;
    }
    if let Some(action) = action_for_key(&key) {
        log::debug!("[keys] {} -> {:?}", key, action);
        super::apply_action(state, action);
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(state: Rc<RefCell<AppState>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &state);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

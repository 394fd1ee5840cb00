use crate::dom;
use crate::state::{panel_bindings, AppState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_panel_buttons(document: &web::Document, state: &Rc<RefCell<AppState>>) {
    for (id, action) in panel_bindings() {
        let state = state.clone();
        dom::add_click_listener(document, id, move || super::apply_action(&state, action));
    }
}

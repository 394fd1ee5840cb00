//! Bridge to the host page's WebXR session handling.
//!
//! The page only negotiates and ends sessions; scene content is not rendered
//! into an immersive session. This side announces requests as DOM events and
//! listens for the page reporting that a session has ended or was refused.

use crate::constants::{XR_END_EVENT, XR_ENDED_EVENT, XR_REQUEST_EVENT};
use crate::{dom, overlay};
use crate::state::AppState;
use galaxy_core::{PanelEffect, XrMode};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Whether the browser exposes `navigator.xr` at all.
pub fn xr_available() -> bool {
    web::window()
        .map(|w| js_sys::Reflect::has(&w.navigator(), &JsValue::from_str("xr")).unwrap_or(false))
        .unwrap_or(false)
}

fn dispatch(name: &str, detail: Option<&str>) -> Result<(), JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let init = web::CustomEventInit::new();
    if let Some(detail) = detail {
        init.set_detail(&JsValue::from_str(detail));
    }
    let event = web::CustomEvent::new_with_event_init_dict(name, &init)?;
    window.dispatch_event(&event)?;
    Ok(())
}

fn request_session(mode: XrMode) -> Result<(), JsValue> {
    if !xr_available() {
        return Err(JsValue::from_str("navigator.xr is not available"));
    }
    dispatch(XR_REQUEST_EVENT, Some(mode.session_mode()))
}

/// Carry out the follow-up of a panel dispatch.
pub fn handle_effect(state: &Rc<RefCell<AppState>>, effect: PanelEffect) {
    match effect {
        PanelEffect::None => {}
        PanelEffect::RequestXrSession(mode) => {
            if let Err(e) = request_session(mode) {
                log::warn!("[xr] {} unavailable: {:?}", mode.session_mode(), e);
                state.borrow_mut().panel.xr_session_ended();
            }
        }
        PanelEffect::EndXrSession => {
            if let Err(e) = dispatch(XR_END_EVENT, None) {
                log::error!("[xr] could not signal session end: {:?}", e);
            }
        }
    }
}

/// The page reports the session ended (user left, or the request was denied).
pub fn wire_session_ended(state: Rc<RefCell<AppState>>) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        state.borrow_mut().panel.xr_session_ended();
        log::info!("[xr] session ended by host");
        if let Some(document) = dom::window_document() {
            overlay::refresh(&document, &state.borrow());
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback(XR_ENDED_EVENT, closure.as_ref().unchecked_ref());
    closure.forget();
}

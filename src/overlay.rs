use crate::constants::{HINT_ID, PANEL_ID};
use crate::dom;
use crate::state::{layer_button_id, speed_button_id, AppState};
use galaxy_core::{SpeedTier, VisualLayer, XrState};
use web_sys as web;

#[inline]
pub fn show_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        _ = el.class_list().remove_1("hidden");
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hint_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(HINT_ID)
        .map(|el| el.class_list().contains("hidden"))
        .unwrap_or(false)
}

#[inline]
pub fn toggle_hint(document: &web::Document) {
    if is_hint_hidden(document) {
        show_hint(document);
    } else {
        hide_hint(document);
    }
}

/// Write the status line into the hint overlay.
pub fn update_hint(document: &web::Document, status: &str) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        el.set_text_content(Some(status));
    }
}

/// Mark the active speed tier, enabled layers and XR state on the panel buttons.
pub fn sync_buttons(document: &web::Document, state: &AppState) {
    let current = SpeedTier::from_multiplier(state.controls.speed_multiplier());
    for tier in SpeedTier::ALL {
        dom::set_class(document, speed_button_id(tier), "active", current == Some(tier));
    }
    for layer in VisualLayer::ALL {
        dom::set_class(
            document,
            layer_button_id(layer),
            "active",
            state.controls.is_enabled(layer),
        );
    }
    let in_xr = matches!(state.panel.xr_state(), XrState::Requested(_));
    dom::set_class(document, PANEL_ID, "xr-active", in_xr);
}

pub fn refresh(document: &web::Document, state: &AppState) {
    update_hint(document, &state.status_line());
    sync_buttons(document, state);
}

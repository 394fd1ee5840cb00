use crate::state::AppState;
use crate::{dom, overlay, xr};
use galaxy_core::PanelAction;
use std::cell::RefCell;
use std::rc::Rc;

pub mod keyboard;
pub mod panel;

pub use keyboard::wire_global_keydown;
pub use panel::wire_panel_buttons;

/// Route an action from any input source through the panel and refresh the UI.
pub fn apply_action(state: &Rc<RefCell<AppState>>, action: PanelAction) {
    let effect = state.borrow_mut().apply(action);
    xr::handle_effect(state, effect);
    if let Some(document) = dom::window_document() {
        overlay::refresh(&document, &state.borrow());
        overlay::show_hint(&document);
    }
}

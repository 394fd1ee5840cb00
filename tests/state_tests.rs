// Host-side tests for shared front-end state and panel button bindings.

#![allow(dead_code)]
mod state {
    include!("../src/state.rs");
}

use galaxy_core::{PanelAction, PanelEffect, SpeedTier, VisualLayer, XrMode};
use state::*;

#[test]
fn every_panel_action_has_exactly_one_button() {
    let bindings = panel_bindings();
    assert_eq!(bindings.len(), SpeedTier::ALL.len() + VisualLayer::ALL.len() + 3);

    let mut ids: Vec<_> = bindings.iter().map(|(id, _)| *id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), bindings.len(), "button ids must be unique");

    for tier in SpeedTier::ALL {
        assert!(bindings.contains(&(speed_button_id(tier), PanelAction::SetSpeed(tier))));
    }
    for layer in VisualLayer::ALL {
        assert!(bindings.contains(&(layer_button_id(layer), PanelAction::Toggle(layer))));
    }
    assert!(bindings.contains(&("exit-xr", PanelAction::ExitXr)));
}

#[test]
fn index_page_has_every_bound_button() {
    let html = include_str!("../index.html");
    for (id, _) in panel_bindings() {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
    }
}

#[test]
fn apply_updates_controls_and_status() {
    let mut app = AppState::default();
    assert_eq!(app.apply(PanelAction::SetSpeed(SpeedTier::Double)), PanelEffect::None);
    assert_eq!(app.controls.speed_multiplier(), 2.0);
    app.apply(PanelAction::Toggle(VisualLayer::Nebula));
    let line = app.status_line();
    assert!(line.starts_with("Speed: 2x"));
    assert!(line.contains("Nebula off"));
}

#[test]
fn apply_reports_xr_effects() {
    let mut app = AppState::default();
    assert_eq!(
        app.apply(PanelAction::EnterXr(XrMode::Ar)),
        PanelEffect::RequestXrSession(XrMode::Ar)
    );
    assert!(app.status_line().ends_with("XR: immersive-ar"));
    assert_eq!(app.apply(PanelAction::ExitXr), PanelEffect::EndXrSession);
}

use galaxy_core::{
    AnimationControls, ControlPanel, PanelAction, PanelEffect, SpeedTier, VisualLayer, XrMode,
};

/// State shared between input handlers and the frame loop.
#[derive(Debug, Default)]
pub struct AppState {
    pub controls: AnimationControls,
    pub panel: ControlPanel,
}

impl AppState {
    pub fn apply(&mut self, action: PanelAction) -> PanelEffect {
        self.panel.dispatch(action, &mut self.controls)
    }

    pub fn status_line(&self) -> String {
        self.panel.status_line(&self.controls)
    }
}

/// DOM id of the button bound to each panel action.
pub fn panel_bindings() -> Vec<(&'static str, PanelAction)> {
    let mut out = Vec::new();
    for tier in SpeedTier::ALL {
        out.push((speed_button_id(tier), PanelAction::SetSpeed(tier)));
    }
    for layer in VisualLayer::ALL {
        out.push((layer_button_id(layer), PanelAction::Toggle(layer)));
    }
    out.push(("enter-ar", PanelAction::EnterXr(XrMode::Ar)));
    out.push(("enter-vr", PanelAction::EnterXr(XrMode::Vr)));
    out.push(("exit-xr", PanelAction::ExitXr));
    out
}

#[inline]
pub fn speed_button_id(tier: SpeedTier) -> &'static str {
    match tier {
        SpeedTier::Tenth => "speed-0-1",
        SpeedTier::Half => "speed-0-5",
        SpeedTier::Normal => "speed-1",
        SpeedTier::Double => "speed-2",
        SpeedTier::Fivefold => "speed-5",
    }
}

#[inline]
pub fn layer_button_id(layer: VisualLayer) -> &'static str {
    match layer {
        VisualLayer::Dust => "toggle-dust",
        VisualLayer::Trails => "toggle-trails",
        VisualLayer::Sparkles => "toggle-sparkles",
        VisualLayer::Nebula => "toggle-nebula",
        VisualLayer::Glow => "toggle-glow",
    }
}

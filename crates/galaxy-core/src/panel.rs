//! Control panel actions.
//!
//! The panel is an actuator only: it rewrites `AnimationControls` and tracks
//! whether an immersive session was requested. Layout and input delivery
//! belong to the front-end.

use crate::controls::{AnimationControls, SpeedTier, VisualLayer};
use std::fmt::Write as _;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XrMode {
    Ar,
    Vr,
}

impl XrMode {
    /// WebXR session mode string.
    pub fn session_mode(self) -> &'static str {
        match self {
            XrMode::Ar => "immersive-ar",
            XrMode::Vr => "immersive-vr",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum XrState {
    #[default]
    Inactive,
    Requested(XrMode),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanelAction {
    SetSpeed(SpeedTier),
    Toggle(VisualLayer),
    EnterXr(XrMode),
    ExitXr,
}

/// Follow-up the front-end has to carry out after a dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelEffect {
    None,
    RequestXrSession(XrMode),
    EndXrSession,
}

#[derive(Debug, Default)]
pub struct ControlPanel {
    xr: XrState,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn xr_state(&self) -> XrState {
        self.xr
    }

    pub fn dispatch(
        &mut self,
        action: PanelAction,
        controls: &mut AnimationControls,
    ) -> PanelEffect {
        match action {
            PanelAction::SetSpeed(tier) => {
                controls.set_speed_multiplier(tier.multiplier());
                PanelEffect::None
            }
            PanelAction::Toggle(layer) => {
                controls.toggle(layer);
                PanelEffect::None
            }
            PanelAction::EnterXr(mode) => match self.xr {
                XrState::Inactive => {
                    self.xr = XrState::Requested(mode);
                    log::info!("[panel] requesting {} session", mode.session_mode());
                    PanelEffect::RequestXrSession(mode)
                }
                XrState::Requested(_) => PanelEffect::None,
            },
            PanelAction::ExitXr => match self.xr {
                XrState::Requested(mode) => {
                    self.xr = XrState::Inactive;
                    log::info!("[panel] ending {} session", mode.session_mode());
                    PanelEffect::EndXrSession
                }
                XrState::Inactive => PanelEffect::None,
            },
        }
    }

    /// The host ended or refused the session on its own.
    pub fn xr_session_ended(&mut self) {
        self.xr = XrState::Inactive;
    }

    /// One-line summary for the hint overlay.
    pub fn status_line(&self, controls: &AnimationControls) -> String {
        let mut line = format!("Speed: {}x", format_multiplier(controls.speed_multiplier()));
        for layer in VisualLayer::ALL {
            let state = if controls.is_enabled(layer) { "on" } else { "off" };
            _ = write!(line, " • {} {}", layer, state);
        }
        if let XrState::Requested(mode) = self.xr {
            _ = write!(line, " • XR: {}", mode.session_mode());
        }
        line
    }
}

fn format_multiplier(m: f32) -> String {
    if (m - m.round()).abs() < 1e-4 {
        format!("{:.0}", m)
    } else {
        format!("{}", m)
    }
}

/// Keyboard shortcut for a panel action.
#[inline]
pub fn action_for_key(key: &str) -> Option<PanelAction> {
    let action = match key {
        "1" => PanelAction::SetSpeed(SpeedTier::Tenth),
        "2" => PanelAction::SetSpeed(SpeedTier::Half),
        "3" => PanelAction::SetSpeed(SpeedTier::Normal),
        "4" => PanelAction::SetSpeed(SpeedTier::Double),
        "5" => PanelAction::SetSpeed(SpeedTier::Fivefold),
        "d" | "D" => PanelAction::Toggle(VisualLayer::Dust),
        "t" | "T" => PanelAction::Toggle(VisualLayer::Trails),
        "s" | "S" => PanelAction::Toggle(VisualLayer::Sparkles),
        "n" | "N" => PanelAction::Toggle(VisualLayer::Nebula),
        "g" | "G" => PanelAction::Toggle(VisualLayer::Glow),
        "a" | "A" => PanelAction::EnterXr(XrMode::Ar),
        "v" | "V" => PanelAction::EnterXr(XrMode::Vr),
        "Escape" => PanelAction::ExitXr,
        _ => return None,
    };
    Some(action)
}

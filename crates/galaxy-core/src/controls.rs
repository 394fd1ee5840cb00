//! Session-wide animation controls.
//!
//! One `AnimationControls` value is created when the scene starts and is
//! handed explicitly to the composer (read every frame) and to the control
//! panel (written on user actions). Nothing here is global.

use crate::constants::{DEFAULT_SPEED_MULTIPLIER, SPEED_TIERS};
use std::fmt;

/// Optional visual layers that can be switched on and off at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisualLayer {
    Dust,
    Trails,
    Sparkles,
    Nebula,
    Glow,
}

impl VisualLayer {
    pub const ALL: [VisualLayer; 5] = [
        VisualLayer::Dust,
        VisualLayer::Trails,
        VisualLayer::Sparkles,
        VisualLayer::Nebula,
        VisualLayer::Glow,
    ];

    #[inline]
    fn bit(self) -> u8 {
        match self {
            VisualLayer::Dust => 1 << 0,
            VisualLayer::Trails => 1 << 1,
            VisualLayer::Sparkles => 1 << 2,
            VisualLayer::Nebula => 1 << 3,
            VisualLayer::Glow => 1 << 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VisualLayer::Dust => "Dust",
            VisualLayer::Trails => "Trails",
            VisualLayer::Sparkles => "Sparkles",
            VisualLayer::Nebula => "Nebula",
            VisualLayer::Glow => "Glow",
        }
    }
}

impl fmt::Display for VisualLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of enabled layers, stored as a bitmask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LayerSet(u8);

impl LayerSet {
    pub const EMPTY: LayerSet = LayerSet(0);

    pub fn all() -> Self {
        VisualLayer::ALL
            .iter()
            .fold(Self::EMPTY, |set, layer| set.with(*layer))
    }

    #[inline]
    pub fn contains(self, layer: VisualLayer) -> bool {
        self.0 & layer.bit() != 0
    }

    #[inline]
    pub fn with(self, layer: VisualLayer) -> Self {
        LayerSet(self.0 | layer.bit())
    }

    #[inline]
    pub fn without(self, layer: VisualLayer) -> Self {
        LayerSet(self.0 & !layer.bit())
    }

    #[inline]
    pub fn toggled(self, layer: VisualLayer) -> Self {
        LayerSet(self.0 ^ layer.bit())
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = VisualLayer> {
        VisualLayer::ALL
            .into_iter()
            .filter(move |layer| self.contains(*layer))
    }

    /// Layers whose membership differs between `self` and `other`.
    pub fn changed(self, other: LayerSet) -> impl Iterator<Item = VisualLayer> {
        LayerSet(self.0 ^ other.0).iter()
    }
}

impl fmt::Debug for LayerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Discrete speed settings offered by the control panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeedTier {
    Tenth,
    Half,
    Normal,
    Double,
    Fivefold,
}

impl SpeedTier {
    pub const ALL: [SpeedTier; 5] = [
        SpeedTier::Tenth,
        SpeedTier::Half,
        SpeedTier::Normal,
        SpeedTier::Double,
        SpeedTier::Fivefold,
    ];

    pub fn multiplier(self) -> f32 {
        SPEED_TIERS[self.index()]
    }

    pub fn index(self) -> usize {
        match self {
            SpeedTier::Tenth => 0,
            SpeedTier::Half => 1,
            SpeedTier::Normal => 2,
            SpeedTier::Double => 3,
            SpeedTier::Fivefold => 4,
        }
    }

    /// Tier whose multiplier equals `value`, if any.
    pub fn from_multiplier(value: f32) -> Option<SpeedTier> {
        Self::ALL
            .into_iter()
            .find(|tier| (tier.multiplier() - value).abs() < 1e-6)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationControls {
    speed_multiplier: f32,
    layers: LayerSet,
}

impl Default for AnimationControls {
    fn default() -> Self {
        Self {
            speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
            layers: LayerSet::all(),
        }
    }
}

impl AnimationControls {
    #[inline]
    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    #[inline]
    pub fn layers(&self) -> LayerSet {
        self.layers
    }

    #[inline]
    pub fn is_enabled(&self, layer: VisualLayer) -> bool {
        self.layers.contains(layer)
    }

    /// Replace the multiplier. Any value is accepted; negative values run
    /// orbits and spins backwards.
    pub fn set_speed_multiplier(&mut self, value: f32) {
        log::debug!(
            "[controls] speed multiplier {} -> {}",
            self.speed_multiplier,
            value
        );
        self.speed_multiplier = value;
    }

    /// Flip one layer and return whether it is now enabled.
    pub fn toggle(&mut self, layer: VisualLayer) -> bool {
        self.layers = self.layers.toggled(layer);
        let enabled = self.layers.contains(layer);
        log::debug!("[controls] {} enabled={}", layer, enabled);
        enabled
    }
}

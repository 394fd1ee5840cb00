//! Scene composition: which animated objects exist this frame and what pose
//! each of them gets.
//!
//! The composer owns the object list and pushes results into a `PoseSink`,
//! the renderer-side store of scene nodes. `SceneNodes` is the reference
//! sink used by the web front-end and by tests.

use crate::clock::FrameTick;
use crate::config::SceneConfig;
use crate::constants::*;
use crate::controls::{AnimationControls, LayerSet, VisualLayer};
use crate::effects::ParticleField;
use crate::params::AnimationParams;
use crate::pose::{self, Transform};
use fnv::FnvHashMap;
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

#[derive(Clone, Debug)]
pub enum ObjectKind {
    /// Circles the galaxy centre.
    Orbiter(AnimationParams),
    /// Turns in place above the centre.
    Spinner(AnimationParams),
    /// Pulsing translucent halo at the centre.
    Glow { color_rgb: [f32; 3], size: f32 },
    /// Particle layer animated as a whole.
    Particles(ParticleField),
    /// Fading path behind an orbiter.
    Trail(AnimationParams),
}

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub id: NodeId,
    pub kind: ObjectKind,
}

impl SceneObject {
    /// Layer gating this object; `None` for objects that are always present.
    pub fn layer(&self) -> Option<VisualLayer> {
        match &self.kind {
            ObjectKind::Orbiter(_) | ObjectKind::Spinner(_) => None,
            ObjectKind::Glow { .. } => Some(VisualLayer::Glow),
            ObjectKind::Particles(field) => Some(field.layer),
            ObjectKind::Trail(_) => Some(VisualLayer::Trails),
        }
    }

    pub fn is_active(&self, layers: LayerSet) -> bool {
        self.layer().map_or(true, |layer| layers.contains(layer))
    }
}

/// Receiver of composed poses, implemented by the renderer's node store.
pub trait PoseSink {
    fn apply_pose(&mut self, node: NodeId, pose: &Transform);
    fn apply_trail(&mut self, node: NodeId, points: &[Vec3]);
    fn set_visible(&mut self, node: NodeId, visible: bool);
}

pub type TrailPoints = SmallVec<[Vec3; TRAIL_SAMPLES]>;

pub struct SceneComposer {
    objects: Vec<SceneObject>,
    applied_layers: Option<LayerSet>,
    trail_scratch: TrailPoints,
}

impl SceneComposer {
    pub fn new(objects: Vec<SceneObject>) -> Self {
        Self {
            objects,
            applied_layers: None,
            trail_scratch: TrailPoints::new(),
        }
    }

    /// Assemble the scene described by a preset: orbiters, the centre
    /// spinner, the glow, the particle layers and one trail per orbiter.
    pub fn from_config(config: &SceneConfig) -> Self {
        let mut objects = Vec::new();
        let mut next_id = 0u32;
        let mut push = |kind: ObjectKind| {
            objects.push(SceneObject {
                id: NodeId(next_id),
                kind,
            });
            next_id += 1;
        };
        for params in &config.orbiters {
            push(ObjectKind::Orbiter(params.clone()));
        }
        if let Some(center) = &config.center {
            push(ObjectKind::Spinner(center.clone()));
        }
        if let Some(glow) = &config.glow {
            push(ObjectKind::Glow {
                color_rgb: glow.color_rgb,
                size: glow.size,
            });
        }
        let fields = [
            (VisualLayer::Dust, &config.dust, DUST_SEED),
            (VisualLayer::Sparkles, &config.sparkles, SPARKLE_SEED),
            (VisualLayer::Nebula, &config.nebula, NEBULA_SEED),
        ];
        for (layer, spec, seed) in fields {
            if let Some(spec) = spec {
                push(ObjectKind::Particles(ParticleField::generate(layer, spec, seed)));
            }
        }
        if config.trails {
            for params in &config.orbiters {
                push(ObjectKind::Trail(params.clone()));
            }
        }
        log::info!("[scene] composed {} objects", objects.len());
        Self::new(objects)
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Objects present under the given controls.
    pub fn active_objects<'a>(
        &'a self,
        controls: &AnimationControls,
    ) -> impl Iterator<Item = &'a SceneObject> + 'a {
        let layers = controls.layers();
        self.objects.iter().filter(move |o| o.is_active(layers))
    }

    /// Evaluate one frame and push the results into `sink`.
    ///
    /// Visibility of layer-bound objects is pushed on the first frame and on
    /// every frame where the enabled layer set changed. Objects of disabled
    /// layers are not evaluated, so their last pose stays as it was.
    /// Returns the number of objects evaluated.
    pub fn compose<S: PoseSink>(
        &mut self,
        tick: FrameTick,
        controls: &AnimationControls,
        sink: &mut S,
    ) -> usize {
        let layers = controls.layers();
        if self.applied_layers != Some(layers) {
            self.sync_visibility(layers, sink);
        }

        let mut evaluated = 0;
        for obj in &self.objects {
            if !obj.is_active(layers) {
                continue;
            }
            match &obj.kind {
                ObjectKind::Orbiter(params) => {
                    sink.apply_pose(obj.id, &pose::orbit_pose(params, controls, tick));
                }
                ObjectKind::Spinner(params) => {
                    sink.apply_pose(obj.id, &pose::spin_pose(params, controls, tick));
                }
                ObjectKind::Glow { .. } => {
                    sink.apply_pose(obj.id, &pose::glow_pose(tick.elapsed));
                }
                ObjectKind::Particles(field) => {
                    let p = match field.layer {
                        VisualLayer::Nebula => {
                            pose::field_spin_pose(NEBULA_SPIN_RATE, NEBULA_OPACITY, controls, tick)
                        }
                        VisualLayer::Dust => {
                            pose::field_spin_pose(DUST_SPIN_RATE, DUST_OPACITY, controls, tick)
                        }
                        _ => Transform::default(),
                    };
                    sink.apply_pose(obj.id, &p);
                }
                ObjectKind::Trail(params) => {
                    self.trail_scratch.clear();
                    pose::trail_points(
                        params,
                        controls.speed_multiplier(),
                        tick.elapsed,
                        TRAIL_SPACING_SEC,
                        &mut self.trail_scratch,
                    );
                    sink.apply_trail(obj.id, &self.trail_scratch);
                }
            }
            evaluated += 1;
        }
        evaluated
    }

    fn sync_visibility<S: PoseSink>(&mut self, layers: LayerSet, sink: &mut S) {
        for obj in &self.objects {
            let Some(layer) = obj.layer() else {
                continue;
            };
            let changed = match self.applied_layers {
                Some(prev) => prev.contains(layer) != layers.contains(layer),
                None => true,
            };
            if changed {
                sink.set_visible(obj.id, layers.contains(layer));
            }
        }
        log::debug!("[scene] layers {:?} -> {:?}", self.applied_layers, layers);
        self.applied_layers = Some(layers);
    }
}

/// Renderer-side state of one node. Rotation accumulates across frames.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeState {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
    pub opacity: f32,
    pub visible: bool,
    pub trail: TrailPoints,
}

impl Default for NodeState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
            opacity: 1.0,
            visible: true,
            trail: TrailPoints::new(),
        }
    }
}

impl NodeState {
    pub fn apply(&mut self, pose: &Transform) {
        self.position = pose.position;
        self.rotation += pose.rotation_delta;
        self.scale = pose.scale;
        self.opacity = pose.opacity;
    }
}

#[derive(Default)]
pub struct SceneNodes {
    nodes: FnvHashMap<NodeId, NodeState>,
}

impl SceneNodes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeState> {
        self.nodes.get(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node_mut(&mut self, id: NodeId) -> &mut NodeState {
        self.nodes.entry(id).or_default()
    }
}

impl PoseSink for SceneNodes {
    fn apply_pose(&mut self, node: NodeId, pose: &Transform) {
        self.node_mut(node).apply(pose);
    }

    fn apply_trail(&mut self, node: NodeId, points: &[Vec3]) {
        let n = self.node_mut(node);
        n.trail.clear();
        n.trail.extend_from_slice(points);
    }

    fn set_visible(&mut self, node: NodeId, visible: bool) {
        self.node_mut(node).visible = visible;
    }
}

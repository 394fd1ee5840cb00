// Host-side tests for scene composition and layer gating.

use galaxy_core::*;
use glam::Vec3;

#[derive(Default)]
struct RecordingSink {
    poses: Vec<(NodeId, Transform)>,
    trails: Vec<(NodeId, usize)>,
    visibility: Vec<(NodeId, bool)>,
}

impl PoseSink for RecordingSink {
    fn apply_pose(&mut self, node: NodeId, pose: &Transform) {
        self.poses.push((node, *pose));
    }

    fn apply_trail(&mut self, node: NodeId, points: &[Vec3]) {
        self.trails.push((node, points.len()));
    }

    fn set_visible(&mut self, node: NodeId, visible: bool) {
        self.visibility.push((node, visible));
    }
}

fn galaxy() -> SceneComposer {
    SceneComposer::from_config(&SceneConfig::galaxy().expect("bundled preset"))
}

fn glow_id(composer: &SceneComposer) -> NodeId {
    composer
        .objects()
        .iter()
        .find(|o| matches!(o.kind, ObjectKind::Glow { .. }))
        .map(|o| o.id)
        .expect("galaxy has a glow")
}

fn tick(frame: u32) -> FrameTick {
    let dt = 1.0 / 60.0;
    FrameTick::new(frame as f64 * dt, dt as f32)
}

#[test]
fn preset_builds_every_object_kind() {
    let config = SceneConfig::galaxy().unwrap();
    let composer = SceneComposer::from_config(&config);
    let orbiters = config.orbiters.len();
    let count = |pred: fn(&ObjectKind) -> bool| {
        composer.objects().iter().filter(|o| pred(&o.kind)).count()
    };
    assert_eq!(count(|k| matches!(k, ObjectKind::Orbiter(_))), orbiters);
    assert_eq!(count(|k| matches!(k, ObjectKind::Trail(_))), orbiters);
    assert_eq!(count(|k| matches!(k, ObjectKind::Spinner(_))), 1);
    assert_eq!(count(|k| matches!(k, ObjectKind::Glow { .. })), 1);
    assert_eq!(count(|k| matches!(k, ObjectKind::Particles(_))), 3);

    let mut ids: Vec<_> = composer.objects().iter().map(|o| o.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), composer.objects().len(), "node ids must be unique");
}

#[test]
fn first_frame_pushes_visibility_for_layer_objects_only() {
    let mut composer = galaxy();
    let controls = AnimationControls::default();
    let mut sink = RecordingSink::default();
    composer.compose(tick(0), &controls, &mut sink);
    let layered = composer
        .objects()
        .iter()
        .filter(|o| o.layer().is_some())
        .count();
    assert_eq!(sink.visibility.len(), layered);
    assert!(sink.visibility.iter().all(|(_, v)| *v));

    // unchanged controls: no further visibility updates
    sink.visibility.clear();
    composer.compose(tick(1), &controls, &mut sink);
    assert!(sink.visibility.is_empty());
}

#[test]
fn all_objects_evaluated_when_every_layer_is_on() {
    let mut composer = galaxy();
    let controls = AnimationControls::default();
    let mut sink = RecordingSink::default();
    let evaluated = composer.compose(tick(0), &controls, &mut sink);
    assert_eq!(evaluated, composer.objects().len());
    assert_eq!(sink.poses.len() + sink.trails.len(), evaluated);
    assert!(sink.trails.iter().all(|(_, n)| *n == TRAIL_SAMPLES));
}

#[test]
fn disabled_layers_are_skipped_entirely() {
    let mut composer = galaxy();
    let mut controls = AnimationControls::default();
    for layer in VisualLayer::ALL {
        controls.toggle(layer);
    }
    let mut sink = RecordingSink::default();
    let evaluated = composer.compose(tick(0), &controls, &mut sink);
    let always_on = composer
        .objects()
        .iter()
        .filter(|o| o.layer().is_none())
        .count();
    assert_eq!(evaluated, always_on);
    assert!(sink.trails.is_empty());
    assert_eq!(
        composer.active_objects(&controls).count(),
        always_on,
        "active set must match evaluated set"
    );
}

#[test]
fn toggle_is_picked_up_on_the_next_frame() {
    let mut composer = galaxy();
    let mut controls = AnimationControls::default();
    let mut sink = RecordingSink::default();
    composer.compose(tick(0), &controls, &mut sink);
    sink.visibility.clear();

    controls.toggle(VisualLayer::Trails);
    composer.compose(tick(1), &controls, &mut sink);
    let trail_ids: Vec<_> = composer
        .objects()
        .iter()
        .filter(|o| matches!(o.kind, ObjectKind::Trail(_)))
        .map(|o| o.id)
        .collect();
    assert_eq!(sink.visibility.len(), trail_ids.len());
    for (id, visible) in &sink.visibility {
        assert!(trail_ids.contains(id));
        assert!(!visible);
    }
}

#[test]
fn glow_freezes_at_last_pose_after_toggle_off() {
    let mut composer = galaxy();
    let mut controls = AnimationControls::default();
    let mut nodes = SceneNodes::new();
    let glow = glow_id(&composer);

    for frame in 0..=10 {
        composer.compose(tick(frame), &controls, &mut nodes);
    }
    let frozen = nodes.get(glow).cloned().expect("glow node exists");
    assert!(frozen.visible);
    assert!((frozen.scale - glow_scale(tick(10).elapsed)).abs() < 1e-6);

    controls.toggle(VisualLayer::Glow);
    for frame in 11..40 {
        composer.compose(tick(frame), &controls, &mut nodes);
    }
    let after = nodes.get(glow).unwrap();
    assert!(!after.visible);
    assert_eq!(after.scale, frozen.scale);
    assert_eq!(after.opacity, frozen.opacity);

    // re-enabling resumes the pulse from the current time
    controls.toggle(VisualLayer::Glow);
    composer.compose(tick(40), &controls, &mut nodes);
    let resumed = nodes.get(glow).unwrap();
    assert!(resumed.visible);
    assert!((resumed.opacity - glow_opacity(tick(40).elapsed)).abs() < 1e-6);
}

#[test]
fn node_rotation_accumulates_per_frame() {
    let params = AnimationParams::orbiting(2.0, 1.0, 0.0, 0.0).with_rotation_speed(1.0);
    let mut composer = SceneComposer::new(vec![SceneObject {
        id: NodeId(7),
        kind: ObjectKind::Orbiter(params),
    }]);
    let controls = AnimationControls::default();
    let mut nodes = SceneNodes::new();
    for frame in 0..100 {
        composer.compose(tick(frame), &controls, &mut nodes);
    }
    let node = nodes.get(NodeId(7)).unwrap();
    assert!((node.rotation.x - 1.0).abs() < 1e-4);
    assert!((node.rotation.z - 0.5).abs() < 1e-4);
    let r = (node.position.x.powi(2) + node.position.z.powi(2)).sqrt();
    assert!((r - 2.0).abs() < 1e-4);
}

#[test]
fn speed_change_applies_to_the_very_next_frame() {
    let params = AnimationParams::orbiting(1.0, 1.0, 0.0, 0.0);
    let mut composer = SceneComposer::new(vec![SceneObject {
        id: NodeId(0),
        kind: ObjectKind::Orbiter(params.clone()),
    }]);
    let mut controls = AnimationControls::default();
    let mut nodes = SceneNodes::new();
    composer.compose(FrameTick::new(1.0, 0.016), &controls, &mut nodes);
    controls.set_speed_multiplier(0.1);
    composer.compose(FrameTick::new(10.0, 0.016), &controls, &mut nodes);
    let pos = nodes.get(NodeId(0)).unwrap().position;
    let expected = orbit_position(&params, 0.1, 10.0);
    assert!((pos - expected).length() < 1e-6);
}

#[test]
fn dust_field_spins_slowly_with_the_multiplier() {
    let config = SceneConfig::galaxy().unwrap();
    let mut composer = SceneComposer::from_config(&config);
    let dust = composer
        .objects()
        .iter()
        .find(|o| o.layer() == Some(VisualLayer::Dust))
        .map(|o| o.id)
        .unwrap();
    let mut controls = AnimationControls::default();
    controls.set_speed_multiplier(2.0);
    let mut nodes = SceneNodes::new();
    for frame in 0..60 {
        composer.compose(tick(frame), &controls, &mut nodes);
    }
    let node = nodes.get(dust).unwrap();
    // one second at 2x
    assert!((node.rotation.y - DUST_SPIN_RATE * 2.0).abs() < 1e-4);
    assert_eq!(node.rotation.x, 0.0);
}

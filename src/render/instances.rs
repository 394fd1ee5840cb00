use crate::constants::{TRAIL_HEAD_ALPHA, TRAIL_SIZE_FACTOR, TRAIL_TAIL_SHRINK};
use galaxy_core::{NodeState, ObjectKind, SceneComposer, SceneNodes, VisualLayer};
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Per-instance data for the cube pipeline: model matrix columns and RGBA.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl InstanceRaw {
    fn new(model: Mat4, rgb: [f32; 3], alpha: f32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [rgb[0], rgb[1], rgb[2], alpha.clamp(0.0, 1.0)],
        }
    }
}

/// Instances for one frame. Opaque cubes come first so they can be drawn
/// with depth writes before the translucent ones.
#[derive(Default)]
pub struct InstanceBatch {
    pub instances: Vec<InstanceRaw>,
    pub opaque_count: usize,
}

impl InstanceBatch {
    pub fn translucent_count(&self) -> usize {
        self.instances.len() - self.opaque_count
    }
}

#[inline]
fn node_matrix(node: &NodeState, size: f32) -> Mat4 {
    let r = node.rotation;
    Mat4::from_scale_rotation_translation(
        Vec3::splat(size * node.scale),
        Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
        node.position,
    )
}

/// Flatten the visible scene nodes into cube instances.
pub fn build_instances(
    composer: &SceneComposer,
    nodes: &SceneNodes,
    elapsed: f64,
    batch: &mut InstanceBatch,
) {
    batch.instances.clear();
    let visible = move |id| nodes.get(id).filter(|n| n.visible);

    for obj in composer.objects() {
        let Some(node) = visible(obj.id) else {
            continue;
        };
        match &obj.kind {
            ObjectKind::Orbiter(p) | ObjectKind::Spinner(p) => {
                batch
                    .instances
                    .push(InstanceRaw::new(node_matrix(node, p.size), p.color_rgb, 1.0));
            }
            _ => {}
        }
    }
    batch.opaque_count = batch.instances.len();

    for obj in composer.objects() {
        let Some(node) = visible(obj.id) else {
            continue;
        };
        match &obj.kind {
            ObjectKind::Glow { color_rgb, size } => {
                batch.instances.push(InstanceRaw::new(
                    node_matrix(node, *size),
                    *color_rgb,
                    node.opacity,
                ));
            }
            ObjectKind::Particles(field) => {
                let r = node.rotation;
                let spin = Mat4::from_quat(Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z));
                let size = Vec3::splat(field.particle_size * node.scale);
                for (i, p) in field.positions().iter().enumerate() {
                    let alpha = match field.layer {
                        VisualLayer::Sparkles => field.particle_opacity(i, elapsed),
                        _ => node.opacity,
                    };
                    let model = spin * Mat4::from_scale_rotation_translation(size, Quat::IDENTITY, *p);
                    batch
                        .instances
                        .push(InstanceRaw::new(model, field.color_rgb, alpha));
                }
            }
            ObjectKind::Trail(p) => {
                let len = node.trail.len().max(1) as f32;
                // skip the head; the orbiter itself sits there
                for (k, pt) in node.trail.iter().enumerate().skip(1) {
                    let fade = 1.0 - k as f32 / len;
                    let size = p.size * TRAIL_SIZE_FACTOR * (1.0 - (1.0 - fade) * TRAIL_TAIL_SHRINK);
                    let model = Mat4::from_scale_rotation_translation(
                        Vec3::splat(size),
                        Quat::IDENTITY,
                        *pt,
                    );
                    batch
                        .instances
                        .push(InstanceRaw::new(model, p.color_rgb, TRAIL_HEAD_ALPHA * fade));
                }
            }
            ObjectKind::Orbiter(_) | ObjectKind::Spinner(_) => {}
        }
    }
}

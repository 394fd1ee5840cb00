use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

pub const CUBE_VERTEX_COUNT: u32 = 36;

/// Unit cube centred on the origin, two counter-clockwise triangles per face.
pub fn cube_vertices() -> Vec<Vertex> {
    // (normal, u, v) with u x v == normal
    let faces = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];
    let mut out = Vec::with_capacity(CUBE_VERTEX_COUNT as usize);
    for (n, u, v) in faces {
        let corner = |su: f32, sv: f32| Vertex {
            position: (n * 0.5 + u * (0.5 * su) + v * (0.5 * sv)).to_array(),
            normal: n.to_array(),
        };
        out.extend_from_slice(&[
            corner(-1.0, -1.0),
            corner(1.0, -1.0),
            corner(1.0, 1.0),
            corner(-1.0, -1.0),
            corner(1.0, 1.0),
            corner(-1.0, 1.0),
        ]);
    }
    out
}

//! CPU-side mesh construction for the viewport.
//!
//! All builders append into an existing [`MeshData`] so a whole layout ends
//! up in one vertex/index buffer pair per draw group.

use glam::{Quat, Vec3};

/// Interleaved triangle mesh: [pos.x, pos.y, pos.z, norm.x, norm.y, norm.z, r, g, b]
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// 9 floats per vertex: position(3) + normal(3) + color(3)
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 9
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Lines mesh: interleaved [pos.x, pos.y, pos.z, r, g, b, a]
#[derive(Debug, Clone, Default)]
pub struct LineMeshData {
    /// 7 floats per vertex: position(3) + color(4)
    pub vertices: Vec<f32>,
}

impl LineMeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 7
    }
}

/// Append an axis-aligned box given by center and full size.
pub fn push_box(mesh: &mut MeshData, center: Vec3, size: Vec3, color: [f32; 3]) {
    let h = size * 0.5;

    let faces: [([Vec3; 4], Vec3); 6] = [
        // Front (+Z)
        ([Vec3::new(-h.x, -h.y, h.z), Vec3::new(h.x, -h.y, h.z), Vec3::new(h.x, h.y, h.z), Vec3::new(-h.x, h.y, h.z)], Vec3::Z),
        // Back (-Z)
        ([Vec3::new(h.x, -h.y, -h.z), Vec3::new(-h.x, -h.y, -h.z), Vec3::new(-h.x, h.y, -h.z), Vec3::new(h.x, h.y, -h.z)], Vec3::NEG_Z),
        // Right (+X)
        ([Vec3::new(h.x, -h.y, h.z), Vec3::new(h.x, -h.y, -h.z), Vec3::new(h.x, h.y, -h.z), Vec3::new(h.x, h.y, h.z)], Vec3::X),
        // Left (-X)
        ([Vec3::new(-h.x, -h.y, -h.z), Vec3::new(-h.x, -h.y, h.z), Vec3::new(-h.x, h.y, h.z), Vec3::new(-h.x, h.y, -h.z)], Vec3::NEG_X),
        // Top (+Y)
        ([Vec3::new(-h.x, h.y, h.z), Vec3::new(h.x, h.y, h.z), Vec3::new(h.x, h.y, -h.z), Vec3::new(-h.x, h.y, -h.z)], Vec3::Y),
        // Bottom (-Y)
        ([Vec3::new(-h.x, -h.y, -h.z), Vec3::new(h.x, -h.y, -h.z), Vec3::new(h.x, -h.y, h.z), Vec3::new(-h.x, -h.y, h.z)], Vec3::NEG_Y),
    ];

    for (quad, normal) in &faces {
        let base = (mesh.vertices.len() / 9) as u32;
        for v in quad {
            push_vert(&mut mesh.vertices, center + *v, *normal, color);
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Append a UV sphere at `center`.
pub fn push_sphere(
    mesh: &mut MeshData,
    center: Vec3,
    radius: f32,
    rings: u32,
    sectors: u32,
    color: [f32; 3],
) {
    let start = (mesh.vertices.len() / 9) as u32;

    for r in 0..=rings {
        let phi = std::f32::consts::PI * r as f32 / rings as f32;
        let sp = phi.sin();
        let cp = phi.cos();

        for s in 0..=sectors {
            let theta = std::f32::consts::TAU * s as f32 / sectors as f32;
            let n = Vec3::new(sp * theta.cos(), cp, sp * theta.sin());
            push_vert(&mut mesh.vertices, center + radius * n, n, color);
        }
    }

    for r in 0..rings {
        for s in 0..sectors {
            let i0 = start + r * (sectors + 1) + s;
            let i1 = i0 + 1;
            let i2 = i0 + sectors + 1;
            let i3 = i2 + 1;
            mesh.indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }
}

/// Append an arrow starting at `anchor` and pointing along the unit
/// `direction`: a cylindrical shaft plus a cone head of `head_length`.
pub fn push_arrow(
    mesh: &mut MeshData,
    anchor: Vec3,
    direction: Vec3,
    length: f32,
    head_length: f32,
    head_radius: f32,
    color: [f32; 3],
) {
    const SEGMENTS: u32 = 16;
    let shaft_len = (length - head_length).max(0.0);
    let shaft_radius = head_radius * 0.25;
    let rot = Quat::from_rotation_arc(Vec3::Y, direction);

    // Shaft: open tube from y=0 to y=shaft_len, built along +Y then rotated.
    for i in 0..SEGMENTS {
        let a0 = i as f32 * std::f32::consts::TAU / SEGMENTS as f32;
        let a1 = (i + 1) as f32 * std::f32::consts::TAU / SEGMENTS as f32;
        let n0 = Vec3::new(a0.cos(), 0.0, a0.sin());
        let n1 = Vec3::new(a1.cos(), 0.0, a1.sin());

        let base = (mesh.vertices.len() / 9) as u32;
        for (n, y) in [(n0, 0.0), (n1, 0.0), (n1, shaft_len), (n0, shaft_len)] {
            let p = anchor + rot * (shaft_radius * n + Vec3::new(0.0, y, 0.0));
            push_vert(&mut mesh.vertices, p, rot * n, color);
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    // Head: cone from the shaft end to the tip.
    let slope = head_radius / head_length;
    for i in 0..SEGMENTS {
        let a0 = i as f32 * std::f32::consts::TAU / SEGMENTS as f32;
        let a1 = (i + 1) as f32 * std::f32::consts::TAU / SEGMENTS as f32;
        let r0 = Vec3::new(a0.cos(), 0.0, a0.sin());
        let r1 = Vec3::new(a1.cos(), 0.0, a1.sin());
        let n0 = Vec3::new(r0.x, slope, r0.z).normalize();
        let n1 = Vec3::new(r1.x, slope, r1.z).normalize();
        let n_tip = (n0 + n1).normalize();

        let base = (mesh.vertices.len() / 9) as u32;
        let tip = anchor + rot * Vec3::new(0.0, length, 0.0);
        push_vert(&mut mesh.vertices, tip, rot * n_tip, color);
        let p0 = anchor + rot * (head_radius * r0 + Vec3::new(0.0, shaft_len, 0.0));
        let p1 = anchor + rot * (head_radius * r1 + Vec3::new(0.0, shaft_len, 0.0));
        push_vert(&mut mesh.vertices, p0, rot * n0, color);
        push_vert(&mut mesh.vertices, p1, rot * n1, color);
        mesh.indices.extend_from_slice(&[base, base + 2, base + 1]);
    }
}

/// Ground grid under the block footprint: `span` cells per side, anchored at
/// the origin so cell (1,1) sits over the first module.
pub fn grid_floor(span: u32, cell_x: f32, cell_z: f32, opacity: f32) -> LineMeshData {
    let mut vertices = Vec::new();
    // Slate line color, slightly below the blocks to avoid z-fighting.
    let color = [0.278_f32, 0.333, 0.412, opacity];
    let y = -0.01;
    let extent_x = span as f32 * cell_x;
    let extent_z = span as f32 * cell_z;

    for i in 0..=span {
        let x = i as f32 * cell_x;
        push_line_vert(&mut vertices, Vec3::new(x, y, 0.0), color);
        push_line_vert(&mut vertices, Vec3::new(x, y, extent_z), color);

        let z = i as f32 * cell_z;
        push_line_vert(&mut vertices, Vec3::new(0.0, y, z), color);
        push_line_vert(&mut vertices, Vec3::new(extent_x, y, z), color);
    }

    LineMeshData { vertices }
}

pub fn axes(length: f32) -> LineMeshData {
    let mut vertices = Vec::new();
    let r = [0.9_f32, 0.2, 0.2, 1.0];
    let g = [0.2_f32, 0.8, 0.2, 1.0];
    let b = [0.2_f32, 0.3, 0.9, 1.0];

    push_line_vert(&mut vertices, Vec3::ZERO, r);
    push_line_vert(&mut vertices, Vec3::new(length, 0.0, 0.0), r);
    push_line_vert(&mut vertices, Vec3::ZERO, g);
    push_line_vert(&mut vertices, Vec3::new(0.0, length, 0.0), g);
    push_line_vert(&mut vertices, Vec3::ZERO, b);
    push_line_vert(&mut vertices, Vec3::new(0.0, 0.0, length), b);

    LineMeshData { vertices }
}

fn push_vert(v: &mut Vec<f32>, p: Vec3, n: Vec3, c: [f32; 3]) {
    v.extend_from_slice(&[p.x, p.y, p.z, n.x, n.y, n.z, c[0], c[1], c[2]]);
}

fn push_line_vert(v: &mut Vec<f32>, p: Vec3, c: [f32; 4]) {
    v.extend_from_slice(&[p.x, p.y, p.z, c[0], c[1], c[2], c[3]]);
}

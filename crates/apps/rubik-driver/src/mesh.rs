//! Unit cube mesh shared by every voxel
//!
//! Four vertices per face, faces in the same order as [`rubik::Face::ALL`], so
//! vertex `v` lines up with entry `v` of a voxel's color span.

use glam::Vec3;
use rubik::{Face, VERTICES_PER_FACE, VERTICES_PER_VOXEL};

/// Triangle indices per voxel (two triangles per face)
pub const INDICES_PER_VOXEL: usize = 36;

#[rustfmt::skip]
const POSITIONS: [[f32; 3]; VERTICES_PER_VOXEL] = [
    // +x
    [ 0.5,  0.5,  0.5], [ 0.5, -0.5,  0.5], [ 0.5, -0.5, -0.5], [ 0.5,  0.5, -0.5],
    // -x
    [-0.5,  0.5,  0.5], [-0.5, -0.5,  0.5], [-0.5, -0.5, -0.5], [-0.5,  0.5, -0.5],
    // +y
    [ 0.5,  0.5,  0.5], [-0.5,  0.5,  0.5], [-0.5,  0.5, -0.5], [ 0.5,  0.5, -0.5],
    // -y
    [ 0.5, -0.5,  0.5], [-0.5, -0.5,  0.5], [-0.5, -0.5, -0.5], [ 0.5, -0.5, -0.5],
    // +z
    [ 0.5,  0.5,  0.5], [-0.5,  0.5,  0.5], [-0.5, -0.5,  0.5], [ 0.5, -0.5,  0.5],
    // -z
    [ 0.5,  0.5, -0.5], [-0.5,  0.5, -0.5], [-0.5, -0.5, -0.5], [ 0.5, -0.5, -0.5],
];

/// Vertex positions of a voxel centered on the origin with side 1
pub fn positions() -> [Vec3; VERTICES_PER_VOXEL] {
    POSITIONS.map(Vec3::from_array)
}

/// Triangle list over [`positions`]
pub fn indices() -> [u32; INDICES_PER_VOXEL] {
    const QUAD: [u32; 6] = [0, 1, 2, 2, 3, 0];
    std::array::from_fn(|i| {
        let face = (i / QUAD.len()) as u32;
        face * VERTICES_PER_FACE as u32 + QUAD[i % QUAD.len()]
    })
}

/// Face that owns mesh vertex `v`
pub fn vertex_face(v: usize) -> Face {
    Face::ALL[v / VERTICES_PER_FACE]
}

use crate::mesh;
use glam::{Mat4, Vec3, Vec4};
use rubik::{voxel_color_span, RubiksCube, VoxelId, LATTICE_SIZE, VERTICES_PER_VOXEL};
use std::ops::Range;

/// One voxel draw: the shared mesh under `model`, colored from `colors`
#[derive(Debug, Clone, PartialEq)]
pub struct Draw {
    pub voxel: VoxelId,
    /// World model matrix (global orientation applied)
    pub model: Mat4,
    /// Range into [`Frame::vertex_colors`]
    pub colors: Range<usize>,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub positions: [Vec3; VERTICES_PER_VOXEL],
    pub indices: [u32; mesh::INDICES_PER_VOXEL],
    pub vertex_colors: Vec<Vec4>,
    pub draws: Vec<Draw>,
}

impl Frame {
    pub fn capture(cube: &RubiksCube) -> Self {
        let transforms = cube.world_transforms();
        let draws = VoxelId::iter()
            .map(|voxel| Draw {
                voxel,
                model: transforms[voxel.index()],
                colors: voxel_color_span(voxel),
            })
            .collect::<Vec<_>>();
        debug_assert_eq!(draws.len(), LATTICE_SIZE);

        Self {
            positions: mesh::positions(),
            indices: mesh::indices(),
            vertex_colors: cube.vertex_colors().to_vec(),
            draws,
        }
    }

    pub fn draw_colors(&self, draw: &Draw) -> &[Vec4] {
        &self.vertex_colors[draw.colors.clone()]
    }

    /// World-space position of mesh vertex `v` of `draw`
    pub fn world_vertex(&self, draw: &Draw, v: usize) -> Vec3 {
        draw.model.transform_point3(self.positions[v])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;
    use rubik::Face;

    #[test]
    fn test_capture_has_one_draw_per_voxel() {
        let cube = RubiksCube::new();
        let frame = Frame::capture(&cube);
        assert_eq!(frame.draws.len(), LATTICE_SIZE);
        assert_eq!(frame.vertex_colors.len(), rubik::VERTEX_COLOR_COUNT);
        for draw in &frame.draws {
            assert_eq!(frame.draw_colors(draw), cube.voxel_colors(draw.voxel));
        }
    }

    #[test]
    fn test_stickers_face_outward_after_turn() {
        let mut cube = RubiksCube::new();
        cube.turn(Face::PosY, -std::f32::consts::FRAC_PI_2);
        cube.commit(Face::PosY);
        cube.set_global_orientation(Quat::from_rotation_z(0.4));
        let frame = Frame::capture(&cube);

        // every painted vertex sits on the outer surface of the assembled cube
        let half_extent = cube.config().voxel_spacing + 0.5 * cube.config().voxel_scale;
        let inverse = cube.global_orientation().inverse();
        for draw in &frame.draws {
            for (v, color) in frame.draw_colors(draw).iter().enumerate() {
                if *color == rubik::UNASSIGNED_COLOR {
                    continue;
                }
                let local = inverse * frame.world_vertex(draw, v);
                assert!(
                    Face::iter().any(|f| (local.dot(f.axis()) - half_extent).abs() < 1e-4),
                    "sticker vertex {} of voxel {} is inside the cube",
                    v,
                    draw.voxel
                );
            }
        }

        // the turned face keeps its own color on top
        let top = cube.identities_on(Face::PosY)[rubik::CENTER_SLOT];
        let draw = &frame.draws[top.index()];
        let first_top_vertex = Face::PosY.index() * rubik::VERTICES_PER_FACE;
        assert_eq!(frame.draw_colors(draw)[first_top_vertex], Face::PosY.color());
    }
}

//! State engine for a 3x3x3 twisty cube
//!
//! Faces are turned continuously with [`RubiksCube::turn`] and snapped to a
//! legal quarter, half or no turn with [`RubiksCube::commit`]. Renderers read
//! per-voxel transforms and vertex colors; they never mutate the cube.

mod angle;
mod commit;
mod config;
mod cube;
mod error;
mod face;
mod lattice;
mod pose;
mod position_map;

pub use angle::principal_angle;
pub use commit::Outcome;
pub use config::CubeConfig;
pub use cube::{
    vertex_color_index, voxel_color_span, CommitReport, FaceState, RubiksCube, Stickers,
    UNASSIGNED_COLOR, VERTEX_COLOR_COUNT, VERTICES_PER_FACE, VERTICES_PER_VOXEL,
};
pub use error::FaceError;
pub use face::{Face, CENTER_SLOT, FACE_COUNT, SLOTS_PER_FACE};
pub use lattice::{LatticePos, VoxelId, LATTICE_SIZE};
pub use pose::Pose;
pub use position_map::PositionMap;

// Re-export glam for convenience
pub use glam;

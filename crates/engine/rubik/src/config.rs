use serde::{Deserialize, Serialize};

/// Geometry settings for a cube
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    /// Distance between neighboring voxel centers
    pub voxel_spacing: f32,
    /// Uniform scale of each voxel's unit mesh
    pub voxel_scale: f32,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            voxel_spacing: 1.3,
            voxel_scale: 1.0,
        }
    }
}

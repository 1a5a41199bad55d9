use crate::error::FaceError;
use crate::lattice::LatticePos;
use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of cube faces
pub const FACE_COUNT: usize = 6;

/// Number of slots on one face
pub const SLOTS_PER_FACE: usize = 9;

/// Index of the center slot in a face raster
pub const CENTER_SLOT: usize = 4;

/// Outer face of the cube, named by its outward normal
///
/// The discriminant order is also the per-face vertex order of the voxel mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Face {
    PosX = 0, // blue
    NegX = 1, // green
    PosY = 2, // white
    NegY = 3, // yellow
    PosZ = 4, // red
    NegZ = 5, // orange
}

const fn p(x: i32, y: i32, z: i32) -> LatticePos {
    LatticePos::new(x, y, z)
}

/// Row-major 3x3 rasters, one per face.
///
/// Each raster is laid out so that turning its face by -90 degrees about the
/// face axis carries raster cell (r, c) to (c, 2 - r).
#[rustfmt::skip]
const FACE_SLOTS: [[LatticePos; SLOTS_PER_FACE]; FACE_COUNT] = [
    // +x
    [
        p(1, 1, 1), p(1, 1, 0), p(1, 1, -1),
        p(1, 0, 1), p(1, 0, 0), p(1, 0, -1),
        p(1, -1, 1), p(1, -1, 0), p(1, -1, -1),
    ],
    // -x
    [
        p(-1, 1, -1), p(-1, 1, 0), p(-1, 1, 1),
        p(-1, 0, -1), p(-1, 0, 0), p(-1, 0, 1),
        p(-1, -1, -1), p(-1, -1, 0), p(-1, -1, 1),
    ],
    // +y
    [
        p(-1, 1, -1), p(0, 1, -1), p(1, 1, -1),
        p(-1, 1, 0), p(0, 1, 0), p(1, 1, 0),
        p(-1, 1, 1), p(0, 1, 1), p(1, 1, 1),
    ],
    // -y
    [
        p(1, -1, -1), p(0, -1, -1), p(-1, -1, -1),
        p(1, -1, 0), p(0, -1, 0), p(-1, -1, 0),
        p(1, -1, 1), p(0, -1, 1), p(-1, -1, 1),
    ],
    // +z
    [
        p(-1, 1, 1), p(0, 1, 1), p(1, 1, 1),
        p(-1, 0, 1), p(0, 0, 1), p(1, 0, 1),
        p(-1, -1, 1), p(0, -1, 1), p(1, -1, 1),
    ],
    // -z
    [
        p(1, 1, -1), p(0, 1, -1), p(-1, 1, -1),
        p(1, 0, -1), p(0, 0, -1), p(-1, 0, -1),
        p(1, -1, -1), p(0, -1, -1), p(-1, -1, -1),
    ],
];

impl Face {
    /// All six faces in table order
    pub const ALL: [Face; FACE_COUNT] = [
        Face::PosX,
        Face::NegX,
        Face::PosY,
        Face::NegY,
        Face::PosZ,
        Face::NegZ,
    ];

    /// Table index of this face
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Rotation axis (the outward face normal)
    #[inline]
    pub fn axis(self) -> Vec3 {
        match self {
            Face::PosX => Vec3::X,
            Face::NegX => Vec3::NEG_X,
            Face::PosY => Vec3::Y,
            Face::NegY => Vec3::NEG_Y,
            Face::PosZ => Vec3::Z,
            Face::NegZ => Vec3::NEG_Z,
        }
    }

    /// Base sticker color
    #[inline]
    pub fn color(self) -> Vec4 {
        match self {
            Face::PosX => Vec4::new(0.0, 0.0, 1.0, 1.0),
            Face::NegX => Vec4::new(0.0, 1.0, 0.0, 1.0),
            Face::PosY => Vec4::new(1.0, 1.0, 1.0, 1.0),
            Face::NegY => Vec4::new(1.0, 1.0, 0.0, 1.0),
            Face::PosZ => Vec4::new(1.0, 0.0, 0.0, 1.0),
            Face::NegZ => Vec4::new(1.0, 0.65, 0.0, 1.0),
        }
    }

    /// Color name of the face, as used for key bindings
    pub fn color_name(self) -> &'static str {
        match self {
            Face::PosX => "blue",
            Face::NegX => "green",
            Face::PosY => "white",
            Face::NegY => "yellow",
            Face::PosZ => "red",
            Face::NegZ => "orange",
        }
    }

    /// The face's 9 slots in canonical raster order
    #[inline]
    pub fn slots(self) -> &'static [LatticePos; SLOTS_PER_FACE] {
        &FACE_SLOTS[self.index()]
    }

    /// Whether `pos` lies on this face
    pub fn contains(self, pos: LatticePos) -> bool {
        pos.as_ivec3().as_vec3().dot(self.axis()) > 0.5
    }

    /// Get the opposite face
    pub fn opposite(self) -> Self {
        match self {
            Face::PosX => Face::NegX,
            Face::NegX => Face::PosX,
            Face::PosY => Face::NegY,
            Face::NegY => Face::PosY,
            Face::PosZ => Face::NegZ,
            Face::NegZ => Face::PosZ,
        }
    }

    /// Iterator over all faces
    #[inline]
    pub fn iter() -> impl Iterator<Item = Face> {
        Self::ALL.iter().copied()
    }
}

impl TryFrom<u8> for Face {
    type Error = FaceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Face::ALL
            .get(value as usize)
            .copied()
            .ok_or(FaceError::IndexOutOfRange(value))
    }
}

impl FromStr for Face {
    type Err = FaceError;

    /// Accepts axis names (`+x`, `-y`, `pos_z`, `neg_x`) and color names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let face = match name.as_str() {
            "+x" | "pos_x" | "blue" => Face::PosX,
            "-x" | "neg_x" | "green" => Face::NegX,
            "+y" | "pos_y" | "white" => Face::PosY,
            "-y" | "neg_y" | "yellow" => Face::NegY,
            "+z" | "pos_z" | "red" => Face::PosZ,
            "-z" | "neg_z" | "orange" => Face::NegZ,
            _ => return Err(FaceError::UnknownName(s.to_string())),
        };
        Ok(face)
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let axis = match self {
            Face::PosX => "+x",
            Face::NegX => "-x",
            Face::PosY => "+y",
            Face::NegY => "-y",
            Face::PosZ => "+z",
            Face::NegZ => "-z",
        };
        write!(f, "{} ({})", axis, self.color_name())
    }
}

//! Lattice slots and voxel handles

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// Number of slots (and voxels) in a 3x3x3 cube
pub const LATTICE_SIZE: usize = 27;

/// One of the 27 integer slots of the cube
///
/// Every coordinate lies in `{-1, 0, 1}` with the cube center at the origin.
/// A slot names a place in the cube, not the piece currently sitting there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LatticePos(IVec3);

impl LatticePos {
    /// The center slot (0, 0, 0)
    pub const CENTER: LatticePos = LatticePos(IVec3::ZERO);

    /// Create a slot from coordinates in `{-1, 0, 1}`
    ///
    /// Only used by the constant face tables, which are checked by tests.
    pub(crate) const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(IVec3::new(x, y, z))
    }

    /// Dense index in `0..27`: `(x+1)*9 + (y+1)*3 + (z+1)`
    #[inline]
    pub fn index(self) -> usize {
        ((self.0.x + 1) * 9 + (self.0.y + 1) * 3 + (self.0.z + 1)) as usize
    }

    /// Inverse of [`LatticePos::index`]
    ///
    /// Indices are reduced modulo 27 so the lookup is total.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        let i = (index % LATTICE_SIZE) as i32;
        Self(IVec3::new(i / 9 - 1, (i / 3) % 3 - 1, i % 3 - 1))
    }

    /// Integer coordinates
    #[inline]
    pub fn as_ivec3(self) -> IVec3 {
        self.0
    }

    /// Cube-local position of this slot for the given voxel spacing
    #[inline]
    pub fn to_vec3(self, spacing: f32) -> Vec3 {
        self.0.as_vec3() * spacing
    }

    /// Iterator over all 27 slots in index order
    pub fn iter() -> impl Iterator<Item = LatticePos> {
        (0..LATTICE_SIZE).map(LatticePos::from_index)
    }
}

/// Handle to a physical cubie
///
/// The voxel that starts at slot `p` has id `p.index()`. Ids never change;
/// only the slot a voxel occupies does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoxelId(u8);

impl VoxelId {
    /// Id of the voxel that starts at `pos`
    #[inline]
    pub fn home_of(pos: LatticePos) -> Self {
        Self(pos.index() as u8)
    }

    /// Try to create an id from a raw value in `0..27`
    pub fn new(raw: u8) -> Option<Self> {
        ((raw as usize) < LATTICE_SIZE).then_some(Self(raw))
    }

    /// Array index for per-voxel storage
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Raw id value
    #[inline]
    pub fn raw(self) -> u8 {
        self.0
    }

    /// Slot this voxel occupies before any turn
    #[inline]
    pub fn home(self) -> LatticePos {
        LatticePos::from_index(self.index())
    }

    /// Iterator over all 27 ids
    pub fn iter() -> impl Iterator<Item = VoxelId> {
        (0..LATTICE_SIZE as u8).map(VoxelId)
    }
}

impl std::fmt::Display for VoxelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

use crate::commit::Outcome;
use crate::face::{Face, SLOTS_PER_FACE};
use crate::lattice::{LatticePos, VoxelId, LATTICE_SIZE};

/// Bijection from lattice slots to the voxels occupying them
///
/// Stored as a flat array indexed by [`LatticePos::index`], so every lookup is
/// total and allocation free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionMap {
    slots: [VoxelId; LATTICE_SIZE],
}

impl PositionMap {
    /// Solved cube: every voxel in its home slot
    pub fn solved() -> Self {
        Self {
            slots: std::array::from_fn(|i| VoxelId::home_of(LatticePos::from_index(i))),
        }
    }

    /// Voxel currently in `pos`
    #[inline]
    pub fn get(&self, pos: LatticePos) -> VoxelId {
        self.slots[pos.index()]
    }

    /// Voxels on `face` in canonical raster order
    pub fn face(&self, face: Face) -> [VoxelId; SLOTS_PER_FACE] {
        let slots = face.slots();
        std::array::from_fn(|i| self.get(slots[i]))
    }

    /// Move the voxels of `face` according to `outcome`
    pub fn apply(&mut self, face: Face, outcome: Outcome) {
        let before = self.face(face);
        let slots = face.slots();
        for (from, &to) in outcome.destinations().iter().enumerate() {
            self.slots[slots[to].index()] = before[from];
        }
    }

    /// Whether every voxel appears exactly once
    pub fn is_bijective(&self) -> bool {
        let mut seen: u32 = 0;
        for voxel in &self.slots {
            let bit = 1u32 << voxel.index();
            if seen & bit != 0 {
                return false;
            }
            seen |= bit;
        }
        seen == (1u32 << LATTICE_SIZE) - 1
    }

    /// Panic unless the map is a bijection
    ///
    /// A broken map means the engine itself is wrong; there is nothing a
    /// caller could do to recover.
    pub(crate) fn assert_bijective(&self, context: &str) {
        assert!(
            self.is_bijective(),
            "position map is not a bijection {}: {:?}",
            context,
            self.slots
        );
    }

    /// Whether every voxel sits in its home slot
    pub fn is_solved(&self) -> bool {
        *self == Self::solved()
    }

    /// Iterate `(slot, voxel)` pairs in slot index order
    pub fn iter(&self) -> impl Iterator<Item = (LatticePos, VoxelId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, v)| (LatticePos::from_index(i), *v))
    }
}

impl Default for PositionMap {
    fn default() -> Self {
        Self::solved()
    }
}

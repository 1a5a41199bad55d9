//! Cube state: who sits where, how each voxel is posed, and what it is painted
//!
//! The cube is driven by three primitives: [`RubiksCube::turn`] accumulates a
//! continuous rotation of one face, [`RubiksCube::commit`] snaps it to a legal
//! outcome, and [`RubiksCube::cancel`] throws it away. Everything else is a
//! read-only view for renderers.
//!
//! Only one face can be in flight at a time. Switching to another face while a
//! turn is unfinished commits the unfinished face first.

use crate::angle::principal_angle;
use crate::commit::Outcome;
use crate::config::CubeConfig;
use crate::face::{Face, FACE_COUNT, SLOTS_PER_FACE};
use crate::lattice::{LatticePos, VoxelId, LATTICE_SIZE};
use crate::pose::Pose;
use crate::position_map::PositionMap;
use glam::{Mat4, Quat, Vec4};
use std::ops::Range;

/// Mesh vertices per voxel face
pub const VERTICES_PER_FACE: usize = 4;

/// Mesh vertices per voxel (4 per face, 6 faces)
pub const VERTICES_PER_VOXEL: usize = VERTICES_PER_FACE * FACE_COUNT;

/// Length of the flat per-vertex color array
pub const VERTEX_COLOR_COUNT: usize = LATTICE_SIZE * VERTICES_PER_VOXEL;

/// Color of voxel faces that carry no sticker
pub const UNASSIGNED_COLOR: Vec4 = Vec4::ZERO;

/// Index into [`RubiksCube::vertex_colors`] for one vertex of one voxel face
///
/// Layout is voxel-major, then face in [`Face::ALL`] order, then vertex.
#[inline]
pub fn vertex_color_index(voxel: VoxelId, face: Face, vertex: usize) -> usize {
    voxel.index() * VERTICES_PER_VOXEL + face.index() * VERTICES_PER_FACE + vertex
}

/// Range of [`RubiksCube::vertex_colors`] belonging to one voxel
#[inline]
pub fn voxel_color_span(voxel: VoxelId) -> Range<usize> {
    let start = voxel.index() * VERTICES_PER_VOXEL;
    start..start + VERTICES_PER_VOXEL
}

/// Stickers of one voxel, one optional color per face
pub type Stickers = [Option<Vec4>; FACE_COUNT];

/// Rotation bookkeeping for the selected face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceState {
    selected: Face,
    accumulated: f32,
    settled: bool,
}

impl FaceState {
    fn new(selected: Face) -> Self {
        Self {
            selected,
            accumulated: 0.0,
            settled: true,
        }
    }

    /// Face that turns and commits act on
    pub fn selected(&self) -> Face {
        self.selected
    }

    /// Signed rotation (radians) since the last commit, unbounded
    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }

    /// True when nothing is in flight
    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

/// What a commit did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommitReport {
    pub face: Face,
    /// Accumulated rotation before the commit, radians
    pub accumulated: f32,
    /// Principal value of `accumulated`, radians
    pub principal: f32,
    pub outcome: Outcome,
}

/// Poses of a face's voxels when its current gesture started
#[derive(Debug, Clone, Copy)]
struct Gesture {
    face: Face,
    start: [Pose; SLOTS_PER_FACE],
}

/// A 3x3x3 twisty cube
#[derive(Debug, Clone)]
pub struct RubiksCube {
    config: CubeConfig,
    map: PositionMap,
    poses: [Pose; LATTICE_SIZE],
    stickers: [Stickers; LATTICE_SIZE],
    vertex_colors: Vec<Vec4>,
    face_state: FaceState,
    gesture: Option<Gesture>,
    global_orientation: Quat,
}

impl RubiksCube {
    /// Solved cube with default geometry
    pub fn new() -> Self {
        Self::with_config(CubeConfig::default())
    }

    /// Solved cube with the given geometry
    pub fn with_config(config: CubeConfig) -> Self {
        let map = PositionMap::solved();
        // voxel i starts in slot i
        let poses = std::array::from_fn(|i| {
            let home = LatticePos::from_index(i);
            Pose::new(home.to_vec3(config.voxel_spacing), config.voxel_scale)
        });

        // Paint each voxel with the colors of the faces its home slot lies on
        let mut stickers: [Stickers; LATTICE_SIZE] = [[None; FACE_COUNT]; LATTICE_SIZE];
        for face in Face::iter() {
            for pos in face.slots() {
                stickers[VoxelId::home_of(*pos).index()][face.index()] = Some(face.color());
            }
        }

        let mut vertex_colors = vec![UNASSIGNED_COLOR; VERTEX_COLOR_COUNT];
        for voxel in VoxelId::iter() {
            for face in Face::iter() {
                let color = stickers[voxel.index()][face.index()].unwrap_or(UNASSIGNED_COLOR);
                for vertex in 0..VERTICES_PER_FACE {
                    vertex_colors[vertex_color_index(voxel, face, vertex)] = color;
                }
            }
        }

        map.assert_bijective("after construction");

        Self {
            config,
            map,
            poses,
            stickers,
            vertex_colors,
            face_state: FaceState::new(Face::PosX),
            gesture: None,
            global_orientation: Quat::IDENTITY,
        }
    }

    pub fn config(&self) -> &CubeConfig {
        &self.config
    }

    pub fn position_map(&self) -> &PositionMap {
        &self.map
    }

    pub fn face_state(&self) -> &FaceState {
        &self.face_state
    }

    pub fn selected_face(&self) -> Face {
        self.face_state.selected
    }

    pub fn is_settled(&self) -> bool {
        self.face_state.settled
    }

    /// Voxels currently on `face`, in canonical raster order
    pub fn identities_on(&self, face: Face) -> [VoxelId; SLOTS_PER_FACE] {
        self.map.face(face)
    }

    /// Voxel currently in `pos`
    pub fn identity_at(&self, pos: LatticePos) -> VoxelId {
        self.map.get(pos)
    }

    pub fn pose(&self, voxel: VoxelId) -> &Pose {
        &self.poses[voxel.index()]
    }

    /// All poses, indexed by voxel
    pub fn poses(&self) -> &[Pose; LATTICE_SIZE] {
        &self.poses
    }

    pub fn stickers(&self, voxel: VoxelId) -> &Stickers {
        &self.stickers[voxel.index()]
    }

    /// Make `face` the target of subsequent turns
    ///
    /// If a different face is still in flight it is committed first and its
    /// report returned.
    pub fn select_face(&mut self, face: Face) -> Option<CommitReport> {
        if face == self.face_state.selected {
            return None;
        }
        let previous = self.face_state.selected;
        let report = if self.face_state.settled {
            None
        } else {
            tracing::warn!(
                "Face {} switched to {} mid-turn, committing {} first",
                previous,
                face,
                previous
            );
            Some(self.snap(previous))
        };
        self.face_state.selected = face;
        report
    }

    /// Rotate the voxels on `face` by `radians` about the face axis
    ///
    /// Positive angles turn counter-clockwise when looking at the face. The
    /// rotation is added to the face's running total; nothing is snapped.
    pub fn turn(&mut self, face: Face, radians: f32) -> Option<CommitReport> {
        let report = self.select_face(face);

        let voxels = self.map.face(face);
        if self.gesture.is_none() {
            self.gesture = Some(Gesture {
                face,
                start: voxels.map(|v| self.poses[v.index()]),
            });
        }

        let rotation = Quat::from_axis_angle(face.axis(), radians);
        for voxel in voxels {
            self.poses[voxel.index()].rotate_about_center(rotation);
        }

        self.face_state.accumulated += radians;
        self.face_state.settled = false;
        tracing::trace!(
            "Turn {} by {:.3} rad (total {:.3})",
            face,
            radians,
            self.face_state.accumulated
        );
        report
    }

    /// Snap `face` to the nearest legal turn and update the position map
    ///
    /// Committing a settled face only re-quantizes its voxels. If another face
    /// is still in flight it is committed first; call [`select_face`] before
    /// committing to receive that report.
    ///
    /// [`select_face`]: RubiksCube::select_face
    pub fn commit(&mut self, face: Face) -> CommitReport {
        if let Some(report) = self.select_face(face) {
            tracing::debug!(
                "Commit of {} auto-committed {} as {}",
                face,
                report.face,
                report.outcome
            );
        }
        self.snap(face)
    }

    /// Drop the in-flight rotation of `face` without permuting anything
    ///
    /// Returns false when there was nothing to cancel.
    pub fn cancel(&mut self, face: Face) -> bool {
        if face != self.face_state.selected || self.face_state.settled {
            return false;
        }
        if let Some(gesture) = self.gesture.take() {
            if gesture.face == face {
                for (voxel, pose) in self.map.face(face).into_iter().zip(gesture.start) {
                    self.poses[voxel.index()] = pose;
                }
            }
        }
        tracing::debug!(
            "Cancelled {} turn of {:.1} degrees",
            face,
            self.face_state.accumulated.to_degrees()
        );
        self.face_state.accumulated = 0.0;
        self.face_state.settled = true;
        true
    }

    fn snap(&mut self, face: Face) -> CommitReport {
        self.map.assert_bijective("before commit");

        let accumulated = self.face_state.accumulated;
        let principal = principal_angle(accumulated);
        let outcome = Outcome::classify(principal);
        self.map.apply(face, outcome);

        // principal and accumulated differ by whole turns, so folding in
        // target - principal lands on the same rotation without a 2π jump
        let remaining = outcome.target_angle(principal) - principal;
        let correction = Quat::from_axis_angle(face.axis(), remaining);
        let spacing = self.config.voxel_spacing;
        let voxels = self.map.face(face);
        for (pos, voxel) in face.slots().iter().zip(voxels) {
            let pose = &mut self.poses[voxel.index()];
            pose.position = pos.to_vec3(spacing);
            pose.rotation = (correction * pose.rotation).normalize();
            pose.snap_rotation();
        }

        self.face_state.accumulated = 0.0;
        self.face_state.settled = true;
        self.gesture = None;

        self.map.assert_bijective("after commit");
        tracing::debug!(
            "Committed {}: {:.1} degrees -> {}",
            face,
            principal.to_degrees(),
            outcome
        );

        CommitReport {
            face,
            accumulated,
            principal,
            outcome,
        }
    }

    /// Orientation applied to the whole assembly at render time
    pub fn global_orientation(&self) -> Quat {
        self.global_orientation
    }

    pub fn set_global_orientation(&mut self, orientation: Quat) {
        self.global_orientation = orientation.normalize();
    }

    /// Compose `rotation` onto the global orientation (applied last)
    pub fn rotate_global(&mut self, rotation: Quat) {
        self.global_orientation = (rotation * self.global_orientation).normalize();
    }

    /// Cube-local model matrices, indexed by voxel
    pub fn local_transforms(&self) -> [Mat4; LATTICE_SIZE] {
        self.poses.map(|pose| pose.matrix())
    }

    /// World model matrices (global orientation applied), indexed by voxel
    pub fn world_transforms(&self) -> [Mat4; LATTICE_SIZE] {
        let global = Mat4::from_quat(self.global_orientation);
        self.poses.map(|pose| global * pose.matrix())
    }

    /// Per-vertex colors for all voxels; see [`vertex_color_index`]
    pub fn vertex_colors(&self) -> &[Vec4] {
        &self.vertex_colors
    }

    /// Colors of one voxel's 24 mesh vertices
    pub fn voxel_colors(&self, voxel: VoxelId) -> &[Vec4] {
        &self.vertex_colors[voxel_color_span(voxel)]
    }
}

impl Default for RubiksCube {
    fn default() -> Self {
        Self::new()
    }
}

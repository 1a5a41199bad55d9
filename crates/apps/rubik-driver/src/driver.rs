//! Per-tick control loop
//!
//! Mirrors an interactive viewer: face keys pick the face, direction keys turn
//! it at a fixed speed while held, releasing any key commits, and mouse drags
//! orbit the whole cube.

use crate::camera::ViewCamera;
use crate::config::DriverConfig;
use crate::error::DriverError;
use crate::frame::Frame;
use crate::input::{Action, InputState};
use crate::report::{CommitCounts, Report};
use crate::session::Session;
use rubik::{CommitReport, RubiksCube};

pub struct Driver {
    cube: RubiksCube,
    input: InputState,
    camera: ViewCamera,
    rotation_speed: f32,
    mouse_sensitivity: f32,
    commits: CommitCounts,
    ticks: u64,
}

impl Driver {
    pub fn new(config: &DriverConfig) -> Result<Self, DriverError> {
        config.validate()?;
        let mut cube = RubiksCube::with_config(config.cube);
        cube.select_face(config.controls.start_face()?);
        Ok(Self {
            cube,
            input: InputState::new(&config.bindings),
            camera: ViewCamera::new(),
            rotation_speed: config.controls.rotation_speed(),
            mouse_sensitivity: config.controls.mouse_sensitivity,
            commits: CommitCounts::default(),
            ticks: 0,
        })
    }

    pub fn cube(&self) -> &RubiksCube {
        &self.cube
    }

    pub fn camera(&self) -> &ViewCamera {
        &self.camera
    }

    pub fn commits(&self) -> CommitCounts {
        self.commits
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance one tick of `dt` seconds with `held` keys down
    pub fn tick<'a>(
        &mut self,
        held: impl IntoIterator<Item = &'a str>,
        drag: Option<[f32; 2]>,
        dt: f32,
    ) {
        self.ticks += 1;
        for key in self.input.update(held) {
            tracing::debug!("Ignoring unbound key {:?}", key);
        }

        if let Some(face) = self.input.face_just_pressed() {
            if let Some(report) = self.cube.select_face(face) {
                self.record(report);
            }
            tracing::debug!("Selected {}", face);
        }

        let selected = self.cube.selected_face();
        let delta = if self.input.pressed(Action::Clockwise) {
            Some(-self.rotation_speed * dt)
        } else if self.input.pressed(Action::CounterClockwise) {
            Some(self.rotation_speed * dt)
        } else {
            None
        };
        if let Some(radians) = delta {
            if let Some(report) = self.cube.turn(selected, radians) {
                self.record(report);
            }
        }

        if self.input.any_just_released() {
            let report = self.cube.commit(selected);
            self.record(report);
        }
        if self.input.just_pressed(Action::Cancel) {
            self.cube.cancel(selected);
        }

        let orbit = drag.and_then(|[dx, dy]| {
            self.camera
                .drag_rotation(dx, dy, self.mouse_sensitivity, dt)
        });
        if let Some(rotation) = orbit {
            self.cube.rotate_global(rotation);
        }
    }

    fn record(&mut self, report: CommitReport) {
        // a commit with nothing in flight is just a key release
        if report.accumulated != 0.0 {
            self.commits.record(&report);
        }
    }

    /// Play every tick of `session`
    pub fn run(&mut self, session: &Session) {
        tracing::info!(
            "Running session: {} frames, {} ticks of {:.4}s",
            session.frames.len(),
            session.tick_count(),
            session.tick_seconds
        );
        for frame in session.ticks() {
            self.tick(
                frame.keys.iter().map(String::as_str),
                frame.drag,
                session.tick_seconds,
            );
        }
        tracing::info!(
            "Session finished after {} ticks, {} commits",
            self.ticks,
            self.commits.total()
        );
    }

    pub fn frame(&self) -> Frame {
        Frame::capture(&self.cube)
    }

    pub fn report(&self) -> Report {
        Report::new(&self.cube, self.ticks, self.commits)
    }
}

use rubik::{CommitReport, Face, Outcome, RubiksCube, SLOTS_PER_FACE};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Number of commits per outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CommitCounts {
    pub none: u32,
    pub clockwise: u32,
    pub counter_clockwise: u32,
    pub half: u32,
}

impl CommitCounts {
    pub fn record(&mut self, report: &CommitReport) {
        match report.outcome {
            Outcome::None => self.none += 1,
            Outcome::Clockwise => self.clockwise += 1,
            Outcome::CounterClockwise => self.counter_clockwise += 1,
            Outcome::Half => self.half += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.none + self.clockwise + self.counter_clockwise + self.half
    }
}

/// Summary of a driver run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub ticks: u64,
    /// Voxel ids on each face, canonical raster order, keyed by color name
    pub faces: BTreeMap<&'static str, [u8; SLOTS_PER_FACE]>,
    pub selected_face: Face,
    pub settled: bool,
    pub accumulated_degrees: f32,
    pub solved: bool,
    pub commits: CommitCounts,
    /// Global orientation as `[x, y, z, w]`
    pub orientation: [f32; 4],
}

impl Report {
    pub fn new(cube: &RubiksCube, ticks: u64, commits: CommitCounts) -> Self {
        let faces = Face::ALL
            .iter()
            .map(|face| (face.color_name(), cube.identities_on(*face).map(|v| v.raw())))
            .collect();
        Self {
            ticks,
            faces,
            selected_face: cube.selected_face(),
            settled: cube.is_settled(),
            accumulated_degrees: cube.face_state().accumulated().to_degrees(),
            solved: cube.position_map().is_solved(),
            commits,
            orientation: cube.global_orientation().to_array(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ticks: {}", self.ticks)?;
        for face in Face::ALL {
            if let Some(ids) = self.faces.get(face.color_name()) {
                writeln!(f, "{:>7} {:?}", face.color_name(), ids)?;
            }
        }
        writeln!(
            f,
            "selected: {} ({})",
            self.selected_face,
            if self.settled { "settled" } else { "turning" }
        )?;
        if !self.settled {
            writeln!(f, "accumulated: {:.1} degrees", self.accumulated_degrees)?;
        }
        writeln!(
            f,
            "commits: {} (cw {}, ccw {}, half {}, none {})",
            self.commits.total(),
            self.commits.clockwise,
            self.commits.counter_clockwise,
            self.commits.half,
            self.commits.none
        )?;
        write!(f, "solved: {}", self.solved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_report() {
        let cube = RubiksCube::new();
        let report = Report::new(&cube, 0, CommitCounts::default());
        assert!(report.solved && report.settled);
        assert_eq!(report.faces.len(), 6);
        assert_eq!(report.faces["blue"][4], 22);
        assert_eq!(report.orientation, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_json_shape() {
        let mut cube = RubiksCube::new();
        cube.turn(Face::NegZ, 1.0);
        let mut commits = CommitCounts::default();
        commits.record(&cube.commit(Face::NegZ));
        let report = Report::new(&cube, 12, commits);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["ticks"], 12);
        assert_eq!(json["selected_face"], "neg_z");
        assert_eq!(json["commits"]["counter_clockwise"], 1);
        assert_eq!(json["commits"]["none"], 0);
        assert_eq!(json["solved"], false);
        assert_eq!(json["settled"], true);
        assert_eq!(json["faces"]["orange"].as_array().unwrap().len(), 9);
    }
}

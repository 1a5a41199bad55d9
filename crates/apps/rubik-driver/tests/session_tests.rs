//! Replays the bundled demo session end to end

use rubik::glam::Quat;
use rubik::Face;
use rubik_driver::{load_config, Driver, DriverConfig, Session};
use std::path::{Path, PathBuf};

fn crate_file(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(name)
}

#[test]
fn test_bundled_config_matches_defaults() {
    let loaded = load_config(&crate_file("config.toml")).unwrap();
    let defaults = DriverConfig::default();
    assert_eq!(loaded.cube, defaults.cube);
    assert_eq!(
        loaded.bindings.entries(),
        defaults.bindings.entries()
    );
    assert_eq!(
        loaded.controls.start_face().unwrap(),
        defaults.controls.start_face().unwrap()
    );
}

#[test]
fn test_demo_session() {
    let session = Session::load(&crate_file("sessions/demo.toml")).unwrap();
    let mut driver = Driver::new(&DriverConfig::default()).unwrap();
    driver.run(&session);

    let report = driver.report();
    assert_eq!(report.ticks, session.tick_count());
    assert_eq!(report.commits.clockwise, 1);
    assert_eq!(report.commits.half, 1);
    assert_eq!(report.commits.counter_clockwise, 0);
    assert_eq!(report.commits.none, 0);
    assert!(report.settled);
    assert!(!report.solved);
    assert_eq!(report.selected_face, Face::NegX);

    let orientation = Quat::from_array(report.orientation);
    assert!(!orientation.abs_diff_eq(Quat::IDENTITY, 1e-3));
    assert!((orientation.length() - 1.0).abs() < 1e-5);

    // every face still holds nine distinct voxels
    let cube = driver.cube();
    assert!(cube.position_map().is_bijective());
    for face in Face::iter() {
        let mut ids = cube.identities_on(face).map(|v| v.raw());
        ids.sort_unstable();
        assert!(ids.windows(2).all(|w| w[0] != w[1]));
    }
}

#[test]
fn test_json_report_shape() {
    let session = Session::load(&crate_file("sessions/demo.toml")).unwrap();
    let mut driver = Driver::new(&DriverConfig::default()).unwrap();
    driver.run(&session);

    let json = serde_json::to_string(&driver.report()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["selected_face"], "neg_x");
    assert_eq!(value["faces"].as_object().unwrap().len(), 6);
}

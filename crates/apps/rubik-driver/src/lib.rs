//! Headless driver for the rubik cube engine
//!
//! Replays keyboard and mouse sessions against a [`rubik::RubiksCube`] the way
//! an interactive viewer would, then reports the resulting cube state.

pub mod camera;
pub mod config;
pub mod driver;
pub mod error;
pub mod frame;
pub mod input;
pub mod mesh;
pub mod report;
pub mod session;

pub use config::{load_config, load_config_or_default, DriverConfig};
pub use driver::Driver;
pub use error::DriverError;
pub use frame::{Draw, Frame};
pub use report::{CommitCounts, Report};
pub use session::{Session, SessionFrame};

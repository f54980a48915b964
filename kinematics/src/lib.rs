//! Forward kinematics for a two-link planar arm, driven by joint angles recorded over time.

#[macro_use]
extern crate log;

mod animation;
mod arm;
mod error;
mod frame;
mod series;

pub use self::animation::{Animation, DEFAULT_INTERVAL};
pub use self::arm::{ArmConfig, Pt, Segment};
pub use self::error::{Error, Result};
pub use self::frame::{compute_frame, FrameState};
pub use self::series::TimeSeries;

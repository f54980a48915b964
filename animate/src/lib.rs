//! Renders a two-link arm following recorded joint angles, as a looping GIF plus a still of the
//! final trajectory.

#[macro_use]
extern crate log;

mod export;
mod figure;

use std::path::Path;
use std::time::Duration;

use abstutil::Timer;
use anyhow::{Context, Result};
use structopt::StructOpt;
use thiserror::Error;

use kinematics::{Animation, ArmConfig, TimeSeries};

pub use self::export::{export_gif, export_png};
pub use self::figure::{draw_frame, Figure};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("couldn't create {path}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },

    #[error("drawing failed: {0}")]
    Draw(String),

    #[error("frame interval {0:?} is too long for a GIF")]
    IntervalTooLong(Duration),

    #[error(transparent)]
    Animation(#[from] kinematics::Error),
}

impl RenderError {
    fn draw<E: std::fmt::Display>(err: E) -> Self {
        Self::Draw(err.to_string())
    }
}

#[derive(Debug, StructOpt)]
struct Args {
    /// CSV with time and the first joint's angle in degrees, no header
    #[structopt(long, default_value = "data/theta1.csv")]
    theta1: String,
    /// CSV with time and the second joint's angle in degrees, relative to the first link
    #[structopt(long, default_value = "data/theta2.csv")]
    theta2: String,
    /// Length of the first link, in millimeters
    #[structopt(long, default_value = "150")]
    l1: f64,
    /// Length of the second link, in millimeters
    #[structopt(long, default_value = "150")]
    l2: f64,
    /// How long to show each frame
    #[structopt(long, default_value = "100")]
    interval_ms: u64,
    /// Where to write the animation
    #[structopt(long, default_value = "graph/animation.gif")]
    gif: String,
    /// Where to write the final trajectory
    #[structopt(long, default_value = "graph/trajectory.png")]
    png: String,
}

impl Args {
    fn run(self, timer: &mut Timer) -> Result<()> {
        let config = ArmConfig::new(self.l1, self.l2)?;

        timer.start("load joint angles");
        let series = TimeSeries::load(&self.theta1, &self.theta2);
        timer.stop("load joint angles");
        let series =
            series.with_context(|| format!("loading {} and {}", self.theta1, self.theta2))?;

        let figure = Figure::new(&config);
        let mut animation = Animation::new(series, config)
            .with_interval(Duration::from_millis(self.interval_ms));
        export_gif(Path::new(&self.gif), &mut animation, &figure, timer)
            .with_context(|| format!("rendering {}", self.gif))?;

        let state = animation.finish();
        export_png(Path::new(&self.png), &figure, &state)
            .with_context(|| format!("rendering {}", self.png))?;
        Ok(())
    }
}

pub fn main() -> Result<()> {
    abstutil::logger::setup();

    let args = Args::from_iter(abstutil::cli_args());
    let mut timer = Timer::new("animate two-link arm");
    args.run(&mut timer)
}

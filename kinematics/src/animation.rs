use std::time::Duration;

use crate::{compute_frame, ArmConfig, Error, FrameState, Result, TimeSeries};

/// How long each frame is shown
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Steps through a time series one frame at a time, accumulating the end effector's trajectory.
/// A renderer asks for frames 0, 1, 2, ... and draws whatever comes back.
pub struct Animation {
    series: TimeSeries,
    config: ArmConfig,
    interval: Duration,
    state: FrameState,
    next_frame: usize,
}

impl Animation {
    pub fn new(series: TimeSeries, config: ArmConfig) -> Self {
        Self {
            series,
            config,
            interval: DEFAULT_INTERVAL,
            state: FrameState::new(),
            next_frame: 0,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// The number of frames, one per row of input
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn config(&self) -> &ArmConfig {
        &self.config
    }

    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    /// Computes frame `idx`. The trajectory depends on every earlier frame, so frames must be
    /// requested in order, each exactly once.
    pub fn frame(&mut self, idx: usize) -> Result<&FrameState> {
        if idx != self.next_frame {
            return Err(Error::FrameOutOfOrder {
                expected: self.next_frame,
                got: idx,
            });
        }
        let (time, angles) = self.series.get(idx).ok_or(Error::FrameOutOfRange {
            got: idx,
            len: self.series.len(),
        })?;

        let state = std::mem::take(&mut self.state);
        self.state = compute_frame(&self.config, angles, time, state);
        self.next_frame += 1;
        debug!("Frame {}: {}", idx, self.state.label);
        Ok(&self.state)
    }

    /// Whatever has been computed so far
    pub fn state(&self) -> &FrameState {
        &self.state
    }

    /// Computes all remaining frames and returns the final state
    pub fn finish(self) -> FrameState {
        let mut state = self.state;
        for idx in self.next_frame..self.series.len() {
            state = compute_frame(
                &self.config,
                (self.series.angle1_deg()[idx], self.series.angle2_deg()[idx]),
                self.series.time()[idx],
                state,
            );
        }
        state
    }
}

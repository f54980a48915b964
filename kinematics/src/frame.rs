use crate::{ArmConfig, Pt, Segment};

/// Everything needed to draw one frame of the animation. The trajectory accumulates across
/// frames.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameState {
    pub time: f64,
    pub joint: Pt,
    pub end_effector: Pt,
    pub label: String,
    trajectory: Vec<Pt>,
}

impl FrameState {
    /// Nothing processed yet; the arm is collapsed at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Base to elbow, then elbow to end effector
    pub fn segments(&self) -> [Segment; 2] {
        [
            Segment {
                from: Pt::ORIGIN,
                to: self.joint,
            },
            Segment {
                from: self.joint,
                to: self.end_effector,
            },
        ]
    }

    /// Every end effector position so far, oldest first
    pub fn trajectory(&self) -> &[Pt] {
        &self.trajectory
    }
}

/// Poses the arm for one frame and appends the end effector to the trajectory. Must be called
/// once per frame, in order. NaN or infinite inputs aren't checked and just flow through.
pub fn compute_frame(
    config: &ArmConfig,
    (theta1_deg, theta2_deg): (f64, f64),
    time: f64,
    mut state: FrameState,
) -> FrameState {
    let (joint, end_effector) = config.forward(theta1_deg, theta2_deg);
    state.trajectory.push(end_effector);
    state.time = time;
    state.joint = joint;
    state.end_effector = end_effector;
    state.label = label(time, end_effector);
    state
}

fn label(time: f64, pos: Pt) -> String {
    format!("t = {:3.2} [s], (x, y) = ({:4.0}, {:4.0})", time, pos.x, pos.y)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn first_frame() {
        let arm = ArmConfig::new(100.0, 50.0).unwrap();
        let state = compute_frame(&arm, (0.0, 0.0), 0.0, FrameState::new());
        assert_eq!(state.trajectory(), &[Pt::new(150.0, 0.0)]);
        let [l1, l2] = state.segments();
        assert_eq!(l1.from, Pt::ORIGIN);
        assert_eq!(l1.to, Pt::new(100.0, 0.0));
        assert_eq!(l2.from, Pt::new(100.0, 0.0));
        assert_eq!(l2.to, Pt::new(150.0, 0.0));
        assert_eq!(state.label, "t = 0.00 [s], (x, y) = ( 150,    0)");
    }

    #[test]
    fn trajectory_grows_by_one_per_frame() {
        let arm = ArmConfig::new(100.0, 100.0).unwrap();
        let mut state = FrameState::new();
        for (idx, theta1) in [0.0, 30.0, 60.0, 90.0].into_iter().enumerate() {
            state = compute_frame(&arm, (theta1, 45.0), idx as f64 * 0.1, state);
            assert_eq!(state.trajectory().len(), idx + 1);
            assert_eq!(*state.trajectory().last().unwrap(), state.end_effector);
        }
        assert_abs_diff_eq!(state.time, 0.3, epsilon = 1e-12);
    }

    #[test]
    fn label_rounding() {
        assert_eq!(
            label(12.346, Pt::new(-99.6, 1234.4)),
            "t = 12.35 [s], (x, y) = (-100, 1234)"
        );
    }
}

use crate::{Error, Result};

/// A point in the plane of the arm, in millimeters. The base joint sits at the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pt {
    pub x: f64,
    pub y: f64,
}

impl Pt {
    pub const ORIGIN: Pt = Pt { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dist_to(self, other: Pt) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Pt,
    pub to: Pt,
}

/// Link lengths of a two-link planar arm
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArmConfig {
    l1: f64,
    l2: f64,
}

impl ArmConfig {
    pub fn new(l1: f64, l2: f64) -> Result<Self> {
        // Also catches NaN
        if !(l1 > 0.0 && l2 > 0.0) || !l1.is_finite() || !l2.is_finite() {
            return Err(Error::InvalidLinkLength { l1, l2 });
        }
        Ok(Self { l1, l2 })
    }

    pub fn l1(&self) -> f64 {
        self.l1
    }

    pub fn l2(&self) -> f64 {
        self.l2
    }

    /// The furthest the end effector can get from the base
    pub fn reach(&self) -> f64 {
        self.l1 + self.l2
    }

    /// Returns the elbow joint and end effector positions. `theta2_deg` is measured relative to
    /// the first link, not the global frame.
    pub fn forward(&self, theta1_deg: f64, theta2_deg: f64) -> (Pt, Pt) {
        let theta1 = theta1_deg.to_radians();
        let theta2 = theta2_deg.to_radians();

        let x1 = self.l1 * theta1.cos();
        let y1 = self.l1 * theta1.sin();
        let x2 = x1 + self.l2 * (theta1 + theta2).cos();
        let y2 = y1 + self.l2 * (theta1 + theta2).sin();
        (Pt::new(x1, y1), Pt::new(x2, y2))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn straight_along_x() {
        let arm = ArmConfig::new(100.0, 50.0).unwrap();
        let (joint, end) = arm.forward(0.0, 0.0);
        assert_abs_diff_eq!(joint.x, 100.0);
        assert_abs_diff_eq!(joint.y, 0.0);
        assert_abs_diff_eq!(end.x, 150.0);
        assert_abs_diff_eq!(end.y, 0.0);
    }

    #[test]
    fn straight_up() {
        let arm = ArmConfig::new(100.0, 50.0).unwrap();
        let (joint, end) = arm.forward(90.0, 0.0);
        assert_abs_diff_eq!(joint.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(joint.y, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(end.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(end.y, 150.0, epsilon = 1e-9);
    }

    #[test]
    fn elbow_angle_is_relative_to_first_link() {
        let arm = ArmConfig::new(100.0, 50.0).unwrap();
        // First link points up, second link bends back to point along -x
        let (joint, end) = arm.forward(90.0, 90.0);
        assert_abs_diff_eq!(end.x, joint.x - 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(end.y, joint.y, epsilon = 1e-9);
    }

    #[test]
    fn link_lengths_are_preserved() {
        let arm = ArmConfig::new(140.0, 160.0).unwrap();
        for theta1 in (-180..=180).step_by(15) {
            for theta2 in (-180..=180).step_by(15) {
                let (joint, end) = arm.forward(theta1 as f64, theta2 as f64);
                assert_abs_diff_eq!(joint.dist_to(Pt::ORIGIN), 140.0, epsilon = 1e-9);
                assert_abs_diff_eq!(end.dist_to(joint), 160.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn nan_propagates() {
        let arm = ArmConfig::new(100.0, 50.0).unwrap();
        let (joint, end) = arm.forward(f64::NAN, 0.0);
        assert!(joint.x.is_nan());
        assert!(end.y.is_nan());
    }

    #[test]
    fn invalid_link_lengths() {
        for (l1, l2) in [(0.0, 1.0), (1.0, -1.0), (f64::NAN, 1.0), (1.0, f64::INFINITY)] {
            assert!(matches!(
                ArmConfig::new(l1, l2),
                Err(Error::InvalidLinkLength { .. })
            ));
        }
        assert_eq!(ArmConfig::new(150.0, 150.0).unwrap().reach(), 300.0);
    }
}

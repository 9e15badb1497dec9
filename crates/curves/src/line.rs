use glam::DVec3;
use sinew_core::{ContinuousMap, DifferentiableMap};

/// A straight line `point + t * direction`.
///
/// The direction need not be unit length; its magnitude sets how fast the
/// parameter moves along the line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    point: DVec3,
    direction: DVec3,
}

impl Line {
    #[must_use]
    pub const fn new(point: DVec3, direction: DVec3) -> Self {
        Self { point, direction }
    }

    /// Returns the point at `t = 0`.
    #[must_use]
    pub const fn point(&self) -> DVec3 {
        self.point
    }

    #[must_use]
    pub const fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Returns the parameter of the point on the line closest to `target`.
    ///
    /// Returns zero for a degenerate line with no direction.
    #[must_use]
    pub fn closest_parameter(&self, target: DVec3) -> f64 {
        let length_squared = self.direction.length_squared();
        if length_squared == 0.0 {
            return 0.0;
        }
        (target - self.point).dot(self.direction) / length_squared
    }
}

impl ContinuousMap for Line {
    type Domain = f64;
    type Codomain = DVec3;

    fn evaluate(&self, t: f64) -> DVec3 {
        self.point + self.direction * t
    }
}

impl DifferentiableMap for Line {
    fn derivative(&self, _t: f64) -> DVec3 {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn evaluates_along_direction() {
        let line = Line::new(DVec3::new(1.0, 0.0, 0.0), DVec3::new(0.0, 2.0, 0.0));
        assert_eq!(line.evaluate(1.5), DVec3::new(1.0, 3.0, 0.0));
        assert_eq!(line.derivative(-4.0), DVec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn finds_closest_parameter() {
        let line = Line::new(DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0));
        assert_relative_eq!(line.closest_parameter(DVec3::new(3.0, 5.0, -1.0)), 1.5);

        let degenerate = Line::new(DVec3::ONE, DVec3::ZERO);
        assert_eq!(degenerate.closest_parameter(DVec3::X), 0.0);
    }
}

use glam::DVec3;
use sinew_curves::Line;
use sinew_solvers::polynomial::{QuadraticFunction, Roots, solve_quartic};

/// A half-line `origin + t * direction` for `t >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: DVec3,
    direction: DVec3,
}

impl Ray {
    #[must_use]
    pub const fn new(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    #[must_use]
    pub const fn origin(&self) -> DVec3 {
        self.origin
    }

    #[must_use]
    pub const fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Returns the point at parameter `t`.
    #[must_use]
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }

    /// Finds where the ray meets a surface of revolution.
    ///
    /// The surface surrounds `axis` at distance `|profile(s)|`, where `s` is
    /// the parameter along the axis. Returns the ray parameters `t >= 0` of
    /// the crossings, ascending.
    ///
    /// Writing the axis parameter and the distance from the axis as functions
    /// of `t`, the crossing condition `profile(s(t))² = distance(t)²` is a
    /// quartic in `t`. Linear and constant profiles lower its degree.
    ///
    /// # Example
    ///
    /// ```
    /// use glam::DVec3;
    /// use sinew_curves::Line;
    /// use sinew_mesh::Ray;
    /// use sinew_solvers::polynomial::QuadraticFunction;
    ///
    /// // A cone of half-angle 45° around the z axis.
    /// let axis = Line::new(DVec3::ZERO, DVec3::Z);
    /// let cone = QuadraticFunction::new(0.0, 1.0, 0.0);
    ///
    /// let ray = Ray::new(DVec3::new(-5.0, 0.0, 2.0), DVec3::X);
    /// let hits = ray.intersect_revolution(&axis, &cone);
    /// assert_eq!(hits.len(), 2);
    /// assert!((hits[0] - 3.0).abs() < 1e-9);
    /// assert!((hits[1] - 7.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn intersect_revolution(&self, axis: &Line, profile: &QuadraticFunction) -> Roots {
        let along = axis.direction();
        let length_squared = along.length_squared();
        if length_squared == 0.0 {
            log::trace!("axis has no direction, ray cannot intersect");
            return Roots::new();
        }

        // Axis parameter s(t) = s0 + s1 * t and offset from the axis e0 + t * e1.
        let offset = self.origin - axis.point();
        let s0 = offset.dot(along) / length_squared;
        let s1 = self.direction.dot(along) / length_squared;
        let e0 = offset - along * s0;
        let e1 = self.direction - along * s1;

        // Radius along the ray, r(t) = r2 * t² + r1 * t + r0.
        let [a, b, c] = profile.coefficients();
        let r2 = a * s1 * s1;
        let r1 = (2.0 * a * s0 + b) * s1;
        let r0 = (a * s0 + b) * s0 + c;

        solve_quartic(
            r2 * r2,
            2.0 * r2 * r1,
            r1 * r1 + 2.0 * r2 * r0 - e1.dot(e1),
            2.0 * (r1 * r0 - e0.dot(e1)),
            r0 * r0 - e0.dot(e0),
        )
        .filter(|t| t >= 0.0)
    }

    /// Finds where the ray meets an infinite cylinder around `axis`.
    #[must_use]
    pub fn intersect_cylinder(&self, axis: &Line, radius: f64) -> Roots {
        self.intersect_revolution(axis, &QuadraticFunction::new(0.0, 0.0, radius))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn z_axis() -> Line {
        Line::new(DVec3::ZERO, DVec3::Z)
    }

    fn assert_hits(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "got {actual:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert_relative_eq!(*a, *e, epsilon = 1e-9);
        }
    }

    #[test]
    fn hits_cylinder_twice() {
        let ray = Ray::new(DVec3::new(5.0, 0.0, 0.0), DVec3::NEG_X);
        let hits = ray.intersect_cylinder(&z_axis(), 1.0);
        assert_hits(&hits, &[4.0, 6.0]);
        assert_relative_eq!(ray.at(hits[0]).x, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn axis_direction_need_not_be_unit() {
        let axis = Line::new(DVec3::ZERO, DVec3::new(0.0, 0.0, 2.0));
        let ray = Ray::new(DVec3::new(3.0, 4.0, 0.0), DVec3::new(-3.0, -4.0, 0.0));
        assert_hits(&ray.intersect_cylinder(&axis, 1.0), &[0.8, 1.2]);
    }

    #[test]
    fn ignores_hits_behind_origin() {
        let inside = Ray::new(DVec3::ZERO, DVec3::new(1.0, 1.0, 0.0));
        assert_hits(&inside.intersect_cylinder(&z_axis(), 1.0), &[0.5_f64.sqrt()]);

        let away = Ray::new(DVec3::new(3.0, 0.0, 0.0), DVec3::X);
        assert!(away.intersect_cylinder(&z_axis(), 1.0).is_empty());
    }

    #[test]
    fn ray_along_axis_never_hits_cylinder() {
        let ray = Ray::new(DVec3::new(0.0, 0.0, -3.0), DVec3::new(0.0, 0.0, 2.0));
        assert!(ray.intersect_cylinder(&z_axis(), 1.0).is_empty());
    }

    #[test_log::test]
    fn quadratic_profile_gives_four_crossings() {
        // Radius 4 - s², crossed at distance 1 where s² is 3 or 5.
        let profile = QuadraticFunction::new(-1.0, 0.0, 4.0);
        let (r3, r5) = (3.0_f64.sqrt(), 5.0_f64.sqrt());

        let from_below = Ray::new(DVec3::new(1.0, 0.0, -10.0), DVec3::Z);
        assert_hits(
            &from_below.intersect_revolution(&z_axis(), &profile),
            &[10.0 - r5, 10.0 - r3, 10.0 + r3, 10.0 + r5],
        );

        let from_middle = Ray::new(DVec3::new(1.0, 0.0, 0.0), DVec3::Z);
        assert_hits(&from_middle.intersect_revolution(&z_axis(), &profile), &[r3, r5]);
    }

    #[test]
    fn degenerate_axis_has_no_hits() {
        let axis = Line::new(DVec3::ZERO, DVec3::ZERO);
        let ray = Ray::new(DVec3::X, DVec3::NEG_X);
        assert!(ray.intersect_cylinder(&axis, 1.0).is_empty());
    }
}

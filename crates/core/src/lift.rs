use std::marker::PhantomData;

use glam::{DVec2, DVec3, DVec4};

use crate::ContinuousMap;

/// Reduces a point in a higher-dimensional space to a lower-dimensional one.
///
/// A projection is the first half of lifting: [`Lifted`] projects its input
/// and then delegates to a map defined on the smaller domain.
///
/// Direction vectors project by dot product, so they need not be unit length;
/// their magnitude sets the scale of the lifted parameterization.
pub trait Projection {
    type Input;
    type Output;

    fn project(&self, point: Self::Input) -> Self::Output;
}

impl Projection for DVec2 {
    type Input = DVec2;
    type Output = f64;

    fn project(&self, point: DVec2) -> f64 {
        self.dot(point)
    }
}

impl Projection for DVec3 {
    type Input = DVec3;
    type Output = f64;

    fn project(&self, point: DVec3) -> f64 {
        self.dot(point)
    }
}

impl Projection for DVec4 {
    type Input = DVec4;
    type Output = f64;

    fn project(&self, point: DVec4) -> f64 {
        self.dot(point)
    }
}

/// Projects a 3D point onto the plane spanned by two directions.
impl Projection for [DVec3; 2] {
    type Input = DVec3;
    type Output = DVec2;

    fn project(&self, point: DVec3) -> DVec2 {
        DVec2::new(self[0].dot(point), self[1].dot(point))
    }
}

/// Projects a 4D point onto the subspace spanned by three directions.
impl Projection for [DVec4; 3] {
    type Input = DVec4;
    type Output = DVec3;

    fn project(&self, point: DVec4) -> DVec3 {
        DVec3::new(self[0].dot(point), self[1].dot(point), self[2].dot(point))
    }
}

/// Dot-product projection in any fixed dimension.
impl<const N: usize> Projection for [f64; N] {
    type Input = [f64; N];
    type Output = f64;

    fn project(&self, point: [f64; N]) -> f64 {
        self.iter().zip(point.iter()).map(|(d, p)| d * p).sum()
    }
}

/// Extracts one coordinate of a 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis2 {
    U,
    V,
}

impl Projection for Axis2 {
    type Input = DVec2;
    type Output = f64;

    fn project(&self, point: DVec2) -> f64 {
        match self {
            Self::U => point.x,
            Self::V => point.y,
        }
    }
}

/// Extracts one coordinate of a 3D point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis3 {
    X,
    Y,
    Z,
}

impl Projection for Axis3 {
    type Input = DVec3;
    type Output = f64;

    fn project(&self, point: DVec3) -> f64 {
        match self {
            Self::X => point.x,
            Self::Y => point.y,
            Self::Z => point.z,
        }
    }
}

/// A projection backed by a closure.
///
/// Used by [`ContinuousMap::lift_with()`] for arbitrary sub-coordinate
/// extraction.
pub struct Extract<F, I> {
    extract: F,
    _marker: PhantomData<fn(I)>,
}

impl<F, I> Extract<F, I> {
    pub const fn new(extract: F) -> Self {
        Self {
            extract,
            _marker: PhantomData,
        }
    }
}

impl<F, I, O> Projection for Extract<F, I>
where
    F: Fn(I) -> O,
{
    type Input = I;
    type Output = O;

    fn project(&self, point: I) -> O {
        (self.extract)(point)
    }
}

/// A map on a higher-dimensional domain built from a lower-dimensional one.
///
/// `evaluate(p) = map.evaluate(projection.project(p))`. The output is constant
/// along every level set of the projection; for a direction vector that means
/// every line (or hyperplane) perpendicular to it.
#[derive(Debug, Clone, Copy)]
pub struct Lifted<P, M> {
    projection: P,
    map: M,
}

/// Stretches a 1D map over a 2D domain along a direction vector.
///
/// Lets a 1D profile, such as a radius-versus-length spline, stand in where
/// a 2D height or radius field is expected.
///
/// # Example
///
/// ```
/// use glam::DVec2;
/// use sinew_core::{ContinuousMap, DomainToVector2, from_fn};
///
/// let corrugation = from_fn(|t: f64| t.sin());
/// let sheet = DomainToVector2::new(DVec2::Y, corrugation);
///
/// assert_eq!(
///     sheet.evaluate(DVec2::new(0.0, 0.5)),
///     sheet.evaluate(DVec2::new(7.0, 0.5)),
/// );
/// ```
pub type DomainToVector2<M> = Lifted<DVec2, M>;

impl<P, M> Lifted<P, M> {
    /// Creates a lifted map from a projection and the map it delegates to.
    pub const fn new(projection: P, map: M) -> Self {
        Self { projection, map }
    }

    /// Returns the projection applied to each input.
    pub fn projection(&self) -> &P {
        &self.projection
    }

    /// Returns the lower-dimensional map.
    pub fn map(&self) -> &M {
        &self.map
    }
}

impl<P, M> ContinuousMap for Lifted<P, M>
where
    P: Projection,
    M: ContinuousMap<Domain = P::Output>,
{
    type Domain = P::Input;
    type Codomain = M::Codomain;

    fn evaluate(&self, input: Self::Domain) -> Self::Codomain {
        self.map.evaluate(self.projection.project(input))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::from_fn;

    fn wavy() -> impl ContinuousMap<Domain = f64, Codomain = f64> + Copy {
        from_fn(|t: f64| (3.0 * t).sin() + 0.5 * t * t)
    }

    #[test]
    fn lifted_evaluates_at_dot_product() {
        let direction = DVec2::new(2.0, -0.5);
        let lifted = DomainToVector2::new(direction, wavy());

        let point = DVec2::new(0.3, 1.2);
        assert_eq!(lifted.evaluate(point), wavy().evaluate(direction.dot(point)));
    }

    #[test]
    fn constant_along_perpendicular_lines() {
        let directions = [
            DVec2::new(1.0, 0.0),
            DVec2::new(0.0, 3.0),
            DVec2::new(-0.7, 0.2),
            DVec2::new(1.5, 1.5),
        ];

        for direction in directions {
            let lifted = DomainToVector2::new(direction, wavy());
            let perpendicular = direction.perp();

            for base in [DVec2::ZERO, DVec2::new(0.4, -0.9), DVec2::new(-2.0, 1.0)] {
                let reference = lifted.evaluate(base);
                for step in [-3.0, -0.5, 0.25, 10.0] {
                    let moved = base + perpendicular * step;
                    assert_relative_eq!(lifted.evaluate(moved), reference, epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn direction_length_scales_parameterization() {
        let unit = DomainToVector2::new(DVec2::X, wavy());
        let doubled = DomainToVector2::new(DVec2::X * 2.0, wavy());

        assert_eq!(doubled.evaluate(DVec2::new(0.25, 9.0)), unit.evaluate(DVec2::new(0.5, -4.0)));
    }

    #[test]
    fn lifts_two_dimensional_maps_into_three_dimensions() {
        let height = from_fn(|p: DVec2| p.x * p.y);
        let lifted = height.lift([DVec3::X, DVec3::Z]);

        assert_eq!(lifted.evaluate(DVec3::new(2.0, 100.0, 3.0)), 6.0);
        assert_eq!(lifted.evaluate(DVec3::new(2.0, -5.0, 3.0)), 6.0);
    }

    #[test]
    fn lifts_three_dimensional_maps_into_four_dimensions() {
        let length = from_fn(|p: DVec3| p.length());
        let lifted = length.lift([DVec4::X, DVec4::Y, DVec4::W]);

        assert_relative_eq!(lifted.evaluate(DVec4::new(3.0, 4.0, 99.0, 12.0)), 13.0);
    }

    #[test]
    fn array_projection_in_n_dimensions() {
        let lifted = from_fn(|t: f64| t + 1.0).lift([1.0, 2.0, 0.0, -1.0, 0.5]);
        assert_relative_eq!(lifted.evaluate([1.0, 1.0, 7.0, 1.0, 2.0]), 4.0);
    }

    #[test]
    fn axis_and_closure_extraction() {
        let along_v = wavy().lift(Axis2::V);
        assert_eq!(along_v.evaluate(DVec2::new(8.0, 0.3)), wavy().evaluate(0.3));

        let along_z = wavy().lift(Axis3::Z);
        assert_eq!(along_z.evaluate(DVec3::new(1.0, 2.0, 0.7)), wavy().evaluate(0.7));

        let radial = wavy().lift_with(|p: DVec3| p.truncate().length());
        assert_eq!(radial.evaluate(DVec3::new(3.0, 4.0, -2.0)), wavy().evaluate(5.0));
    }
}

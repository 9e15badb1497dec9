use glam::{DVec2, DVec3};
use sinew_core::ContinuousMap;

use crate::MeshError;

/// The parameter rectangle `[u0, u1] x [v0, v1]` of a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UvDomain {
    u: [f64; 2],
    v: [f64; 2],
}

impl UvDomain {
    /// The unit square `[0, 1] x [0, 1]`.
    pub const UNIT: Self = Self {
        u: [0.0, 1.0],
        v: [0.0, 1.0],
    };

    /// Creates a domain from its `u` and `v` ranges.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidRange`] unless both ranges are finite and
    /// strictly increasing.
    pub fn new(u: [f64; 2], v: [f64; 2]) -> Result<Self, MeshError> {
        for [start, end] in [u, v] {
            if !(start.is_finite() && end.is_finite() && start < end) {
                return Err(MeshError::InvalidRange { start, end });
            }
        }
        Ok(Self { u, v })
    }

    #[must_use]
    pub const fn u(&self) -> [f64; 2] {
        self.u
    }

    #[must_use]
    pub const fn v(&self) -> [f64; 2] {
        self.v
    }

    /// Returns the width of each range.
    #[must_use]
    pub fn span(&self) -> DVec2 {
        DVec2::new(self.u[1] - self.u[0], self.v[1] - self.v[0])
    }

    /// Maps fractions `(s, t)` in `[0, 1]²` to a parameter point.
    ///
    /// Exact at the boundaries: `lerp(1.0, 1.0)` is the far corner.
    #[must_use]
    pub fn lerp(&self, s: f64, t: f64) -> DVec2 {
        let mix = |[start, end]: [f64; 2], f: f64| start * (1.0 - f) + end * f;
        DVec2::new(mix(self.u, s), mix(self.v, t))
    }
}

/// A map from a rectangle of `(u, v)` parameters to points in space.
///
/// Tessellation samples [`ContinuousMap::evaluate`] over [`Self::domain`];
/// `u` runs along the first grid axis and `v` along the second.
pub trait ParametricSurface: ContinuousMap<Domain = DVec2, Codomain = DVec3> {
    /// Returns the parameter rectangle the surface is defined on.
    fn domain(&self) -> UvDomain;
}

impl<S: ParametricSurface + ?Sized> ParametricSurface for &S {
    fn domain(&self) -> UvDomain {
        (**self).domain()
    }
}

/// Turns any `(u, v) -> point` map into a surface over a chosen domain.
///
/// # Example
///
/// ```
/// use glam::{DVec2, DVec3};
/// use sinew_core::from_fn;
/// use sinew_mesh::{MapSurface, Tessellate, UvDomain};
///
/// let plane = MapSurface::new(from_fn(|p: DVec2| p.extend(0.0)), UvDomain::UNIT);
/// let mesh = plane.generate_mesh(2, 2).unwrap();
/// assert_eq!(mesh.vertices[3].position, DVec3::new(1.0, 1.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MapSurface<M> {
    map: M,
    domain: UvDomain,
}

impl<M> MapSurface<M>
where
    M: ContinuousMap<Domain = DVec2, Codomain = DVec3>,
{
    pub const fn new(map: M, domain: UvDomain) -> Self {
        Self { map, domain }
    }
}

impl<M> ContinuousMap for MapSurface<M>
where
    M: ContinuousMap<Domain = DVec2, Codomain = DVec3>,
{
    type Domain = DVec2;
    type Codomain = DVec3;

    fn evaluate(&self, uv: DVec2) -> DVec3 {
        self.map.evaluate(uv)
    }
}

impl<M> ParametricSurface for MapSurface<M>
where
    M: ContinuousMap<Domain = DVec2, Codomain = DVec3>,
{
    fn domain(&self) -> UvDomain {
        self.domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_ranges() {
        assert!(UvDomain::new([0.0, 1.0], [-2.0, 2.0]).is_ok());
        assert_eq!(
            UvDomain::new([1.0, 1.0], [0.0, 1.0]),
            Err(MeshError::InvalidRange {
                start: 1.0,
                end: 1.0
            })
        );
        assert!(UvDomain::new([0.0, 1.0], [0.0, f64::NAN]).is_err());
    }

    #[test]
    fn lerp_hits_corners_exactly() {
        let domain = UvDomain::new([0.1, 0.7], [-3.0, 0.3]).unwrap();
        assert_eq!(domain.lerp(0.0, 0.0), DVec2::new(0.1, -3.0));
        assert_eq!(domain.lerp(1.0, 1.0), DVec2::new(0.7, 0.3));
        assert_eq!(domain.lerp(1.0, 0.0), DVec2::new(0.7, -3.0));
    }
}

use glam::{DQuat, DVec3};

/// Below this fraction of its length, a reference is treated as parallel to the tangent.
const PARALLEL_TOLERANCE: f64 = 1e-9;

/// An orthonormal frame at a point on a center curve.
///
/// `binormal = normal x tangent`, so a ring swept by increasing angle while
/// advancing along the tangent has `d/du x d/dv` pointing away from the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub tangent: DVec3,
    pub normal: DVec3,
    pub binormal: DVec3,
}

impl Frame {
    /// Builds a frame whose normal is `reference` with its tangential part removed.
    ///
    /// Falls back to the `+Z` tangent for a zero tangent, and to the coordinate
    /// axis least aligned with the tangent when `reference` is parallel to it.
    /// The result depends only on the inputs, so frames along a curve are
    /// reproducible point by point.
    #[must_use]
    pub fn new(tangent: DVec3, reference: DVec3) -> Self {
        let tangent = tangent.try_normalize().unwrap_or(DVec3::Z);
        let rejection = reference - tangent * tangent.dot(reference);
        let normal = if rejection.length() > PARALLEL_TOLERANCE * reference.length() {
            rejection.normalize()
        } else {
            least_aligned_perpendicular(tangent)
        };
        let binormal = normal.cross(tangent);

        Self {
            tangent,
            normal,
            binormal,
        }
    }

    /// Carries the frame onto `tangent` by the smallest rotation taking the
    /// current tangent there.
    ///
    /// Repeated over closely spaced tangents this follows a rotation-minimizing
    /// frame, so the normal turns with the curve instead of flipping. A zero
    /// `tangent` leaves the frame unchanged.
    #[must_use]
    pub fn transport(&self, tangent: DVec3) -> Self {
        let Some(tangent) = tangent.try_normalize() else {
            return *self;
        };
        let rotation = DQuat::from_rotation_arc(self.tangent, tangent);
        Self::new(tangent, rotation * self.normal)
    }

    /// Returns the unit direction at `angle` around the tangent, starting at
    /// the normal and turning towards the binormal.
    #[must_use]
    pub fn ring_direction(&self, angle: f64) -> DVec3 {
        let (sin, cos) = angle.sin_cos();
        self.normal * cos + self.binormal * sin
    }
}

/// Returns the coordinate axis least aligned with `v`.
pub(crate) fn least_aligned_axis(v: DVec3) -> DVec3 {
    let abs = v.abs();
    if abs.x <= abs.y && abs.x <= abs.z {
        DVec3::X
    } else if abs.y <= abs.z {
        DVec3::Y
    } else {
        DVec3::Z
    }
}

/// A unit vector perpendicular to the unit vector `v`.
fn least_aligned_perpendicular(v: DVec3) -> DVec3 {
    let axis = least_aligned_axis(v);
    // `axis` is at most 1/sqrt(3) aligned with `v`, so the rejection is non-zero.
    (axis - v * v.dot(axis)).normalize()
}

use std::f64::consts::TAU;

use glam::{DVec2, DVec3};
use sinew_core::{ContinuousMap, DifferentiableMap, DomainToVector2};
use sinew_curves::Line;

use crate::{Frame, MeshError, ParametricSurface, UvDomain, frame::least_aligned_axis};

/// Number of steps over the `u` range at which frames are transported.
const FRAME_STEPS: usize = 256;

/// A surface swept by a ring around a center curve.
///
/// `S(u, v) = C(u) + R(u, v) * (cos(v) * N(u) + sin(v) * B(u))`, where
/// `(T, N, B)` is the [`Frame`] of the center curve `C` at `u`.
///
/// Frames are parallel transported from the start of the `u` range once, at
/// construction, so the ring turns with the curve without flipping. Evaluation
/// interpolates the stored normals and re-orthogonalizes them against the
/// analytic tangent, which keeps it pure.
///
/// With a positive radius, `dS/du x dS/dv` points away from the center curve.
#[derive(Debug, Clone)]
pub struct SweepSurface<C, R> {
    center: C,
    radius: R,
    domain: UvDomain,
    reference: DVec3,
    normals: Vec<DVec3>,
}

impl<C, R> SweepSurface<C, R>
where
    C: DifferentiableMap<Domain = f64, Codomain = DVec3>,
    R: ContinuousMap<Domain = DVec2, Codomain = f64>,
{
    /// Creates a sweep over an explicit domain.
    ///
    /// The reference direction defaults to the coordinate axis least aligned
    /// with the center curve's tangent at the start of the `u` range.
    pub fn new(center: C, radius: R, domain: UvDomain) -> Self {
        let reference = least_aligned_axis(center.derivative(domain.u()[0]));
        let normals = transport_normals(&center, domain.u(), reference);
        Self {
            center,
            radius,
            domain,
            reference,
            normals,
        }
    }

    /// Sweeps a full ring, `v` in `[0, 2π]`, along `center` over `u_range`.
    ///
    /// Models a long bone shaft.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidRange`] if `u_range` is not finite and
    /// increasing.
    pub fn tube(center: C, radius: R, u_range: [f64; 2]) -> Result<Self, MeshError> {
        let domain = UvDomain::new(u_range, [0.0, TAU])?;
        log::debug!("built tube surface over u in {u_range:?}");
        Ok(Self::new(center, radius, domain))
    }

    /// Sets the direction the ring starts from (`v = 0`) at the start of the
    /// `u` range, and transports the frames again from there.
    #[must_use]
    pub fn with_reference(mut self, reference: DVec3) -> Self {
        self.normals = transport_normals(&self.center, self.domain.u(), reference);
        self.reference = reference;
        self
    }

    #[must_use]
    pub fn center(&self) -> &C {
        &self.center
    }

    #[must_use]
    pub fn radius(&self) -> &R {
        &self.radius
    }

    #[must_use]
    pub fn reference(&self) -> DVec3 {
        self.reference
    }

    /// Returns the center curve's frame at `u`.
    ///
    /// Outside the `u` range the frame keeps the normal of the nearest end.
    #[must_use]
    pub fn frame(&self, u: f64) -> Frame {
        Frame::new(self.center.derivative(u), self.transported_normal(u))
    }

    fn transported_normal(&self, u: f64) -> DVec3 {
        let [start, end] = self.domain.u();
        #[allow(clippy::cast_precision_loss)]
        let steps = FRAME_STEPS as f64;
        let position = ((u - start) / (end - start) * steps).clamp(0.0, steps);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = (position as usize).min(FRAME_STEPS - 1);
        #[allow(clippy::cast_precision_loss)]
        let fraction = position - index as f64;
        self.normals[index].lerp(self.normals[index + 1], fraction)
    }
}

/// Parallel transports a frame along `center` over `[start, end]` and returns
/// its normal at each of the evenly spaced steps, ends included.
fn transport_normals<C>(center: &C, [start, end]: [f64; 2], reference: DVec3) -> Vec<DVec3>
where
    C: DifferentiableMap<Domain = f64, Codomain = DVec3>,
{
    let mut frame = Frame::new(center.derivative(start), reference);
    let mut normals = Vec::with_capacity(FRAME_STEPS + 1);
    normals.push(frame.normal);

    for step in 1..=FRAME_STEPS {
        #[allow(clippy::cast_precision_loss)]
        let fraction = step as f64 / FRAME_STEPS as f64;
        let u = start * (1.0 - fraction) + end * fraction;
        frame = frame.transport(center.derivative(u));
        normals.push(frame.normal);
    }
    normals
}

impl<R> SweepSurface<Line, R>
where
    R: ContinuousMap<Domain = DVec2, Codomain = f64>,
{
    /// Sweeps a partial ring, `v` in `angle_range`, around a straight axis.
    ///
    /// Models the articular surface of a hinge joint, where `angle_range` is
    /// the joint's range of motion.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidAngleRange`] unless the angles are finite,
    /// increasing, and span at most `2π`, and [`MeshError::InvalidRange`] for
    /// an invalid `u_range`.
    pub fn revolution(
        axis: Line,
        radius: R,
        u_range: [f64; 2],
        angle_range: [f64; 2],
    ) -> Result<Self, MeshError> {
        let [start, end] = angle_range;
        if !(start.is_finite() && end.is_finite() && start < end && end - start <= TAU) {
            return Err(MeshError::InvalidAngleRange { start, end });
        }

        let domain = UvDomain::new(u_range, angle_range)?;
        log::debug!("built surface of revolution over u in {u_range:?}, angles {angle_range:?}");
        Ok(Self::new(axis, radius, domain))
    }
}

impl<C, P> SweepSurface<C, DomainToVector2<P>>
where
    C: DifferentiableMap<Domain = f64, Codomain = DVec3>,
    P: ContinuousMap<Domain = f64, Codomain = f64>,
{
    /// Like [`Self::tube`], with a radius that varies along `u` only.
    ///
    /// # Errors
    ///
    /// See [`Self::tube`].
    pub fn tube_with_profile(center: C, profile: P, u_range: [f64; 2]) -> Result<Self, MeshError> {
        Self::tube(center, DomainToVector2::new(DVec2::X, profile), u_range)
    }
}

impl<P> SweepSurface<Line, DomainToVector2<P>>
where
    P: ContinuousMap<Domain = f64, Codomain = f64>,
{
    /// Like [`Self::revolution`], with a radius that varies along `u` only.
    ///
    /// # Errors
    ///
    /// See [`Self::revolution`].
    pub fn revolution_with_profile(
        axis: Line,
        profile: P,
        u_range: [f64; 2],
        angle_range: [f64; 2],
    ) -> Result<Self, MeshError> {
        Self::revolution(
            axis,
            DomainToVector2::new(DVec2::X, profile),
            u_range,
            angle_range,
        )
    }
}

impl<C, R> ContinuousMap for SweepSurface<C, R>
where
    C: DifferentiableMap<Domain = f64, Codomain = DVec3>,
    R: ContinuousMap<Domain = DVec2, Codomain = f64>,
{
    type Domain = DVec2;
    type Codomain = DVec3;

    fn evaluate(&self, uv: DVec2) -> DVec3 {
        let offset = self.frame(uv.x).ring_direction(uv.y) * self.radius.evaluate(uv);
        self.center.evaluate(uv.x) + offset
    }
}

impl<C, R> ParametricSurface for SweepSurface<C, R>
where
    C: DifferentiableMap<Domain = f64, Codomain = DVec3>,
    R: ContinuousMap<Domain = DVec2, Codomain = f64>,
{
    fn domain(&self) -> UvDomain {
        self.domain
    }
}

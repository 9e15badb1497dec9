use glam::{DVec2, DVec3};
use rayon::prelude::*;
use thiserror::Error;

use crate::{MeshError, ParametricSurface, UvDomain, UvMesh, Vertex};

#[cfg(test)]
mod tests;

/// Grid size of a tessellation: `u` samples along the first parameter and
/// `v` along the second, both boundaries included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    u: usize,
    v: usize,
}

impl Resolution {
    /// Creates a validated resolution.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidResolution`] if either axis has fewer than
    /// two samples, and [`MeshError::ResolutionTooLarge`] if the grid cannot be
    /// indexed with `u32`.
    pub fn new(u: usize, v: usize) -> Result<Self, MeshError> {
        for (axis, value) in [('u', u), ('v', v)] {
            if value < 2 {
                return Err(MeshError::InvalidResolution { axis, value });
            }
        }

        let fits = u
            .checked_mul(v)
            .is_some_and(|count| u32::try_from(count - 1).is_ok());
        if !fits {
            return Err(MeshError::ResolutionTooLarge { u, v });
        }

        Ok(Self { u, v })
    }

    #[must_use]
    pub const fn u(&self) -> usize {
        self.u
    }

    #[must_use]
    pub const fn v(&self) -> usize {
        self.v
    }

    /// Returns the number of grid points, `u * v`.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.u * self.v
    }

    /// Returns the number of triangles, `2 * (u - 1) * (v - 1)`.
    #[must_use]
    pub const fn triangle_count(&self) -> usize {
        2 * (self.u - 1) * (self.v - 1)
    }
}

/// Tuning for [`Tessellator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TessellationConfig {
    parallel_threshold: usize,
    normal_step: f64,
}

/// Errors that can occur when validating a tessellation config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("normal_step must be finite and in (0, 0.5)")]
    NormalStep,
}

impl Default for TessellationConfig {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1024, 1e-4).unwrap()
    }
}

impl TessellationConfig {
    /// Creates a new config.
    ///
    /// Grids with at least `parallel_threshold` points are sampled in
    /// parallel. `normal_step` is the finite-difference step for normals, as a
    /// fraction of each parameter range.
    ///
    /// # Errors
    ///
    /// Returns an error if `normal_step` is not in `(0, 0.5)`.
    pub fn new(parallel_threshold: usize, normal_step: f64) -> Result<Self, ConfigError> {
        if !(normal_step > 0.0 && normal_step < 0.5) {
            return Err(ConfigError::NormalStep);
        }

        Ok(Self {
            parallel_threshold,
            normal_step,
        })
    }

    #[must_use]
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    #[must_use]
    pub fn normal_step(&self) -> f64 {
        self.normal_step
    }
}

/// Samples parametric surfaces into [`UvMesh`]es.
///
/// Vertex `i * v + j` is the sample at the `i`-th `u` and `j`-th `v`
/// parameter, with UV coordinate `(i / (u - 1), j / (v - 1))`. Each grid cell
/// with corners `a = (i, j)`, `b = (i + 1, j)`, `c = (i, j + 1)` and
/// `d = (i + 1, j + 1)` becomes triangles `[a, b, c]` and `[b, d, c]`, whose
/// face normals point along `dS/du x dS/dv`, the same side as the vertex
/// normals. Seen from that side, triangles are counter-clockwise.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tessellator {
    config: TessellationConfig,
}

impl Tessellator {
    #[must_use]
    pub const fn new(config: TessellationConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &TessellationConfig {
        &self.config
    }

    /// Samples `surface` on a regular grid and connects it into triangles.
    ///
    /// The result is the same whether or not sampling runs in parallel.
    pub fn tessellate<S>(&self, surface: &S, resolution: Resolution) -> UvMesh
    where
        S: ParametricSurface + Sync + ?Sized,
    {
        let domain = surface.domain();
        let count = resolution.vertex_count();
        let parallel = count >= self.config.parallel_threshold;

        log::debug!(
            "tessellating {}x{} grid ({count} vertices, parallel: {parallel})",
            resolution.u(),
            resolution.v(),
        );

        let sample = |index: usize| self.sample(surface, &domain, resolution, index);
        let vertices: Vec<Vertex> = if parallel {
            (0..count).into_par_iter().map(sample).collect()
        } else {
            (0..count).map(sample).collect()
        };

        UvMesh {
            vertices,
            triangles: triangles(resolution),
        }
    }

    fn sample<S>(
        &self,
        surface: &S,
        domain: &UvDomain,
        resolution: Resolution,
        index: usize,
    ) -> Vertex
    where
        S: ParametricSurface + ?Sized,
    {
        let (i, j) = (index / resolution.v(), index % resolution.v());
        #[allow(clippy::cast_precision_loss)]
        let uv = DVec2::new(
            i as f64 / (resolution.u() - 1) as f64,
            j as f64 / (resolution.v() - 1) as f64,
        );
        let point = domain.lerp(uv.x, uv.y);

        let step = domain.span() * self.config.normal_step;
        let d_u = difference(
            |u| surface.evaluate(DVec2::new(u, point.y)),
            point.x,
            step.x,
            domain.u(),
        );
        let d_v = difference(
            |v| surface.evaluate(DVec2::new(point.x, v)),
            point.y,
            step.y,
            domain.v(),
        );

        Vertex {
            position: surface.evaluate(point),
            normal: d_u.cross(d_v).normalize_or_zero(),
            uv,
        }
    }
}

/// Tessellates surfaces with the default [`Tessellator`].
pub trait Tessellate: ParametricSurface + Sync {
    /// Samples the surface on a `resolution_u x resolution_v` grid.
    ///
    /// Yields exactly `resolution_u * resolution_v` vertices and
    /// `2 * (resolution_u - 1) * (resolution_v - 1)` triangles.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidResolution`] if either resolution is below
    /// two. No mesh is produced.
    fn generate_mesh(
        &self,
        resolution_u: usize,
        resolution_v: usize,
    ) -> Result<UvMesh, MeshError> {
        let resolution = Resolution::new(resolution_u, resolution_v)?;
        Ok(Tessellator::default().tessellate(self, resolution))
    }
}

impl<S: ParametricSurface + Sync + ?Sized> Tessellate for S {}

/// Derivative of `f` at `x` by central difference, one-sided where a full
/// step would leave `[lo, hi]`.
fn difference(f: impl Fn(f64) -> DVec3, x: f64, step: f64, [lo, hi]: [f64; 2]) -> DVec3 {
    let (a, b) = ((x - step).max(lo), (x + step).min(hi));
    (f(b) - f(a)) / (b - a)
}

/// Two triangles per grid cell, in row-major cell order.
fn triangles(resolution: Resolution) -> Vec<[u32; 3]> {
    let (rows, columns) = (resolution.u(), resolution.v());
    // `Resolution` guarantees every index fits in `u32`.
    #[allow(clippy::cast_possible_truncation)]
    let index = |i: usize, j: usize| (i * columns + j) as u32;

    let mut triangles = Vec::with_capacity(resolution.triangle_count());
    for i in 0..rows - 1 {
        for j in 0..columns - 1 {
            let (a, b) = (index(i, j), index(i + 1, j));
            let (c, d) = (index(i, j + 1), index(i + 1, j + 1));
            triangles.push([a, b, c]);
            triangles.push([b, d, c]);
        }
    }
    triangles
}

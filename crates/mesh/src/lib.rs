//! Parametric surfaces and UV mesh tessellation for the Sinew geometry kernel.
//!
//! A [`ParametricSurface`] maps a `(u, v)` parameter rectangle to 3D points.
//! [`SweepSurface`] builds one by sweeping a ring of radius `R(u, v)` along a
//! center curve, which covers long bone shafts ([`SweepSurface::tube`]) and
//! joint surfaces of revolution ([`SweepSurface::revolution`]).
//!
//! [`Tessellator`] samples a surface on a regular grid and returns a
//! [`UvMesh`], a plain vertex and triangle list for a renderer to upload:
//!
//! ```
//! use glam::DVec3;
//! use sinew_core::Constant;
//! use sinew_curves::Line;
//! use sinew_mesh::{SweepSurface, Tessellate};
//!
//! let axis = Line::new(DVec3::ZERO, DVec3::Z);
//! let shaft = SweepSurface::tube(axis, Constant::new(0.5), [0.0, 4.0]).unwrap();
//!
//! let mesh = shaft.generate_mesh(8, 16).unwrap();
//! assert_eq!(mesh.vertices.len(), 8 * 16);
//! assert_eq!(mesh.triangles.len(), 2 * 7 * 15);
//! assert!(shaft.generate_mesh(1, 16).is_err());
//! ```
//!
//! [`Ray`] intersects rays with surfaces of revolution analytically, which is
//! how joints find the bones they attach to.

mod error;
mod frame;
mod mesh;
mod raycast;
mod surface;
mod sweep;
mod tessellate;

pub use error::MeshError;
pub use frame::Frame;
pub use mesh::{UvMesh, Vertex};
pub use raycast::Ray;
pub use surface::{MapSurface, ParametricSurface, UvDomain};
pub use sweep::SweepSurface;
pub use tessellate::{ConfigError, Resolution, Tessellate, TessellationConfig, Tessellator};

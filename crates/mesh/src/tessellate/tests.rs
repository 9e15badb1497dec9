use std::f64::consts::TAU;

use approx::assert_relative_eq;
use glam::{DVec2, DVec3};
use sinew_core::{Constant, ContinuousMap, from_fn};
use sinew_curves::Line;

use super::*;
use crate::{MapSurface, SweepSurface};

fn shaft() -> SweepSurface<Line, Constant<DVec2, f64>> {
    let axis = Line::new(DVec3::new(1.0, -2.0, 0.5), DVec3::new(0.0, 0.0, 3.0));
    SweepSurface::tube(axis, Constant::new(0.75), [0.0, 1.0]).unwrap()
}

fn tilted_plane() -> impl ParametricSurface + Sync {
    let domain = UvDomain::new([-1.0, 2.0], [0.0, 4.0]).unwrap();
    MapSurface::new(from_fn(|p: DVec2| DVec3::new(p.x, p.y, 0.5 * p.x)), domain)
}

fn sequential() -> Tessellator {
    Tessellator::new(TessellationConfig::new(usize::MAX, 1e-4).unwrap())
}

fn parallel() -> Tessellator {
    Tessellator::new(TessellationConfig::new(0, 1e-4).unwrap())
}

#[test_log::test]
fn counts_follow_resolution() {
    for (u, v) in [(2, 2), (2, 9), (5, 3), (17, 32), (64, 64)] {
        let mesh = shaft().generate_mesh(u, v).unwrap();
        assert_eq!(mesh.vertex_count(), u * v);
        assert_eq!(mesh.triangle_count(), 2 * (u - 1) * (v - 1));

        let resolution = Resolution::new(u, v).unwrap();
        assert_eq!(resolution.vertex_count(), u * v);
        assert_eq!(resolution.triangle_count(), mesh.triangle_count());
    }
}

#[test]
fn rejects_resolutions_below_two() {
    let surface = shaft();
    assert_eq!(
        surface.generate_mesh(1, 8),
        Err(MeshError::InvalidResolution { axis: 'u', value: 1 })
    );
    assert_eq!(
        surface.generate_mesh(8, 1),
        Err(MeshError::InvalidResolution { axis: 'v', value: 1 })
    );
    assert_eq!(
        surface.generate_mesh(0, 0),
        Err(MeshError::InvalidResolution { axis: 'u', value: 0 })
    );
}

#[test]
fn rejects_grids_too_large_to_index() {
    assert_eq!(
        Resolution::new(1 << 20, 1 << 20),
        Err(MeshError::ResolutionTooLarge {
            u: 1 << 20,
            v: 1 << 20,
        })
    );
    assert!(Resolution::new(usize::MAX, 2).is_err());
    assert!(Resolution::new(1 << 16, 1 << 16).is_ok());
}

#[test]
fn triangle_indices_are_in_bounds() {
    let mesh = shaft().generate_mesh(6, 7).unwrap();
    let count = u32::try_from(mesh.vertex_count()).unwrap();
    assert!(mesh.triangles.iter().flatten().all(|&index| index < count));
    assert_eq!(mesh.triangles[0], [0, 7, 1]);
    assert_eq!(mesh.triangles[1], [7, 8, 1]);
}

#[test]
fn uvs_span_unit_square() {
    let (u, v) = (4, 6);
    let mesh = tilted_plane().generate_mesh(u, v).unwrap();

    assert_eq!(mesh.vertices[0].uv, DVec2::ZERO);
    assert_eq!(mesh.vertices[u * v - 1].uv, DVec2::ONE);

    for i in 0..u {
        for j in 0..v {
            let vertex = mesh.vertices[i * v + j];
            assert_relative_eq!(vertex.uv.x, i as f64 / 3.0, epsilon = 1e-15);
            assert_relative_eq!(vertex.uv.y, j as f64 / 5.0, epsilon = 1e-15);
        }
    }
}

#[test]
fn samples_include_domain_boundaries() {
    let plane = tilted_plane();
    let mesh = plane.generate_mesh(3, 3).unwrap();

    assert_eq!(mesh.vertices[0].position, DVec3::new(-1.0, 0.0, -0.5));
    assert_eq!(mesh.vertices[8].position, DVec3::new(2.0, 4.0, 1.0));
    assert_eq!(mesh.vertices[4].position, plane.evaluate(DVec2::new(0.5, 2.0)));
}

#[test]
fn plane_normals_match_cross_product() {
    let mesh = tilted_plane().generate_mesh(5, 5).unwrap();
    let expected = DVec3::X.cross(DVec3::Y) + DVec3::new(-0.5, 0.0, 0.0);
    let expected = expected.normalize();

    for vertex in &mesh.vertices {
        assert_relative_eq!(vertex.normal.x, expected.x, epsilon = 1e-9);
        assert_relative_eq!(vertex.normal.y, expected.y, epsilon = 1e-9);
        assert_relative_eq!(vertex.normal.z, expected.z, epsilon = 1e-9);
    }
}

#[test]
fn winding_faces_outward_on_tube() {
    let surface = shaft();
    let mesh = surface.generate_mesh(8, 24).unwrap();
    let axis = surface.center();

    for &triangle in &mesh.triangles {
        let face = mesh.face_normal(triangle);
        let corners = triangle.map(|index| mesh.vertices[index as usize]);
        let centroid = corners.iter().map(|vertex| vertex.position).sum::<DVec3>() / 3.0;
        let outward = centroid - axis.evaluate(axis.closest_parameter(centroid));

        assert!(face.dot(outward) > 0.0);
        for corner in corners {
            assert!(face.dot(corner.normal) > 0.0);
        }
    }
}

#[test]
fn tube_normals_are_radial() {
    let surface = shaft();
    let mesh = surface.generate_mesh(5, 13).unwrap();
    let axis = surface.center();

    for vertex in &mesh.vertices {
        let radial = vertex.position - axis.evaluate(axis.closest_parameter(vertex.position));
        assert_relative_eq!(vertex.normal.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(vertex.normal.dot(radial.normalize()), 1.0, epsilon = 1e-6);
    }
}

#[test]
fn degenerate_points_get_zero_normals() {
    // A cone with its apex at u = 0.
    let axis = Line::new(DVec3::ZERO, DVec3::Z);
    let cone = SweepSurface::tube_with_profile(axis, from_fn(|u: f64| u), [0.0, 1.0]).unwrap();
    let mesh = cone.generate_mesh(3, 5).unwrap();

    for j in 0..5 {
        assert_eq!(mesh.vertices[j].position, DVec3::ZERO);
        assert_eq!(mesh.vertices[j].normal, DVec3::ZERO);
    }
    assert_relative_eq!(mesh.vertices[7].normal.length(), 1.0, epsilon = 1e-12);
}

#[test]
fn parallel_sampling_matches_sequential() {
    let surface = shaft();
    let resolution = Resolution::new(40, 60).unwrap();

    let expected = sequential().tessellate(&surface, resolution);
    assert_eq!(parallel().tessellate(&surface, resolution), expected);
    assert_eq!(
        Tessellator::default().tessellate(&surface, resolution),
        expected
    );
}

#[test]
fn tessellation_is_repeatable() {
    let surface = shaft();
    let first = surface.generate_mesh(10, 10).unwrap();
    let _ = tilted_plane().generate_mesh(30, 30).unwrap();
    assert_eq!(surface.generate_mesh(10, 10).unwrap(), first);
}

#[test]
fn config_validates_normal_step() {
    let config = TessellationConfig::default();
    assert_eq!(config.parallel_threshold(), 1024);
    assert_relative_eq!(config.normal_step(), 1e-4);

    for step in [0.0, -1e-3, 0.5, f64::NAN, f64::INFINITY] {
        assert_eq!(TessellationConfig::new(16, step), Err(ConfigError::NormalStep));
    }
}

#[test]
fn seam_closes_on_full_tube() {
    let mesh = shaft().generate_mesh(3, 9).unwrap();
    for i in 0..3 {
        let first = mesh.vertices[i * 9].position;
        let last = mesh.vertices[i * 9 + 8].position;
        assert_relative_eq!(first.distance(last), 0.0, epsilon = 1e-12);
    }
    assert_eq!(shaft().domain().v(), [0.0, TAU]);
}

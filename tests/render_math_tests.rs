// Host-side tests for the cube mesh and camera/model matrices.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod site {
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod mesh {
        include!("../src/core/mesh.rs");
    }
    pub mod rotation {
        include!("../src/core/rotation.rs");
    }
}

use glam::{Vec3, Vec4};
use site::camera::*;
use site::mesh::*;
use site::rotation::Face;

fn outward_normal(face: Face) -> Vec3 {
    match face {
        Face::Right => Vec3::X,
        Face::Left => Vec3::NEG_X,
        Face::Top => Vec3::Y,
        Face::Bottom => Vec3::NEG_Y,
        Face::Front => Vec3::Z,
        Face::Back => Vec3::NEG_Z,
    }
}

#[test]
fn cube_mesh_has_six_quads() {
    let (vertices, indices) = cube_mesh();
    assert_eq!(vertices.len(), 24);
    assert_eq!(indices.len(), 36);
    assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    for v in &vertices {
        let n = Vec3::from_array(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-6);
        let p = Vec3::from_array(v.position);
        // every vertex is a cube corner
        assert!(p.abs().abs_diff_eq(Vec3::splat(0.5), 1e-6));
        assert!((p.dot(n) - 0.5).abs() < 1e-6);
    }
}

#[test]
fn cube_triangles_wind_outwards() {
    let (vertices, indices) = cube_mesh();
    for tri in indices.chunks(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from_array(vertices[i as usize].position));
        let n = Vec3::from_array(vertices[tri[0] as usize].normal);
        assert!((b - a).cross(c - a).dot(n) > 0.0);
    }
}

#[test]
fn vertex_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<Vertex>(), 24);
}

#[test]
fn each_face_orientation_turns_that_face_to_the_camera() {
    for face in Face::ALL {
        let m = cube_model_matrix(face.angles(), 1.0);
        let n = m.transform_vector3(outward_normal(face));
        assert!(n.abs_diff_eq(Vec3::Z, 1e-5), "{face:?} -> {n:?}");
    }
}

#[test]
fn model_matrix_scales_uniformly() {
    let m = cube_model_matrix([0.0, 0.0], 2.0);
    assert!(m
        .transform_point3(Vec3::new(0.5, -0.5, 0.5))
        .abs_diff_eq(Vec3::new(1.0, -1.0, 1.0), 1e-6));
}

#[test]
fn camera_looks_at_origin() {
    let cam = Camera::for_viewport(1920, 1080);
    assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    let clip = cam.view_projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(clip.x.abs() < 1e-6 && clip.y.abs() < 1e-6);
    let ndc_z = clip.z / clip.w;
    assert!(ndc_z > 0.0 && ndc_z < 1.0);
}

#[test]
fn degenerate_viewport_keeps_finite_aspect() {
    let mut cam = Camera::for_viewport(0, 0);
    assert_eq!(cam.aspect, 1.0);
    cam.set_viewport(800, 0);
    assert!(cam.aspect.is_finite());
    assert!(cam.projection_matrix().is_finite());
}

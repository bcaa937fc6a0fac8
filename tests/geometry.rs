use glam::Vec3;
use wobble_wasm::geometry::{boundary_sample, fan_vertices, flatten};

const RADIUS: f32 = 0.5;
const AMPLITUDE: f32 = 0.2;
const EPS: f32 = 1e-6;

fn approx_eq3(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).abs().max_element() < eps
}

#[test]
fn fan_has_origin_plus_n_plus_one_samples() {
    for n in [1, 2, 3, 4, 7, 100, 257] {
        let vertices = fan_vertices(n, RADIUS, AMPLITUDE, 42.0);
        assert_eq!(vertices.len(), n as usize + 2, "n={n}");
        assert_eq!(vertices[0], Vec3::ZERO);
        assert!(vertices.iter().all(|v| v.z == 0.0));
    }
}

#[test]
fn zero_resolution_degenerates_to_origin() {
    assert_eq!(fan_vertices(0, RADIUS, AMPLITUDE, 0.0), vec![Vec3::ZERO]);
}

#[test]
fn base_points_lie_on_circle() {
    let n = 100;
    for i in 0..=n {
        let sample = boundary_sample(i, n, RADIUS, AMPLITUDE, 17.0);
        assert!((sample.base.length() - RADIUS).abs() < EPS, "i={i} base={:?}", sample.base);
    }
}

#[test]
fn deformation_is_bounded_and_radial() {
    let n = 64;
    for phase in [0.0, 45.0, 90.0, 133.0, 270.0, 359.0] {
        for i in 0..=n {
            let sample = boundary_sample(i, n, RADIUS, AMPLITUDE, phase);
            assert!(sample.deformation.length() <= AMPLITUDE + EPS);
            // Parallel to the undeformed base point.
            assert!(sample.base.perp_dot(sample.deformation).abs() < EPS);
        }
    }
}

#[test]
fn first_and_last_samples_close_the_fan() {
    let vertices = fan_vertices(12, RADIUS, AMPLITUDE, 30.0);
    let first = vertices[1];
    let last = vertices[vertices.len() - 1];
    assert!(approx_eq3(first, last, 1e-5), "first={first:?} last={last:?}");
}

#[test]
fn four_segments_at_zero_phase() {
    let vertices = fan_vertices(4, RADIUS, AMPLITUDE, 0.0);
    assert_eq!(vertices[0], Vec3::ZERO);
    // sin(0) = 0, so the first boundary vertex is undeformed.
    assert!(approx_eq3(vertices[1], Vec3::new(0.5, 0.0, 0.0), EPS));
    // Quarter turn: sin(pi/2) = 1 pushes the point out by the full amplitude.
    assert!(approx_eq3(vertices[2], Vec3::new(0.0, 0.7, 0.0), EPS));
    // Three-quarter turn: sin(3pi/2) = -1 pulls it in.
    assert!(approx_eq3(vertices[4], Vec3::new(0.0, -0.3, 0.0), EPS));
}

#[test]
fn phase_shifts_deformation() {
    let still = boundary_sample(0, 4, RADIUS, AMPLITUDE, 0.0);
    let shifted = boundary_sample(0, 4, RADIUS, AMPLITUDE, 90.0);
    assert_eq!(still.base, shifted.base);
    assert!((shifted.position().x - 0.7).abs() < EPS);
}

#[test]
fn flatten_packs_components_in_order() {
    let packed = flatten(&[Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)], |v| v.to_array());
    assert_eq!(packed, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

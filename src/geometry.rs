//! Triangle-fan geometry for the wobbling circle.
//!
//! The fan is rebuilt from scratch every frame: the origin, then `n + 1`
//! boundary samples so the last triangle closes back onto the first.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

/// One boundary vertex, split into its undeformed position and offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundarySample {
    /// Point on the circle of the configured radius.
    pub base: Vec2,
    /// Radial displacement applied on top of `base`.
    pub deformation: Vec2,
}

impl BoundarySample {
    pub fn position(&self) -> Vec3 {
        (self.base + self.deformation).extend(0.0)
    }
}

/// Computes boundary sample `i` of an `n`-segment fan.
///
/// The displacement direction is the normalized *undeformed* base point, so
/// it always points straight out from the center.
pub fn boundary_sample(
    i: u32,
    n: u32,
    radius: f32,
    amplitude: f32,
    phase_degrees: f32,
) -> BoundarySample {
    let angle = i as f32 * TAU / n as f32;
    let base = Vec2::new(radius * angle.cos(), radius * angle.sin());
    let offset = amplitude * (angle + phase_degrees.to_radians()).sin();
    BoundarySample {
        base,
        deformation: base.normalize_or_zero() * offset,
    }
}

/// Builds the full fan: origin first, then samples `0..=n`.
///
/// Returns `n + 2` vertices. With `n == 0` there is no boundary to sample and
/// only the origin is returned.
pub fn fan_vertices(n: u32, radius: f32, amplitude: f32, phase_degrees: f32) -> Vec<Vec3> {
    if n == 0 {
        return vec![Vec3::ZERO];
    }
    let mut vertices = Vec::with_capacity((n as usize).saturating_add(2));
    vertices.push(Vec3::ZERO);
    vertices.extend(
        (0..=n).map(|i| boundary_sample(i, n, radius, amplitude, phase_degrees).position()),
    );
    vertices
}

/// Packs vertices as tightly interleaved `f32`s for a buffer upload.
pub fn flatten<T, const D: usize>(items: &[T], to_array: impl Fn(&T) -> [f32; D]) -> Vec<f32> {
    items.iter().flat_map(to_array).collect()
}

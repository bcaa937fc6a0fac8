//! Static red-to-blue gradient for the fan.

use glam::Vec4;

/// Color of the fan's shared center vertex.
pub const ORIGIN_COLOR: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);

/// Color of boundary sample `i` out of `0..=n`.
///
/// Red falls off linearly with the index distance from `n / 2`, reaching 1 at
/// both ends of the fan and 0 at the midpoint; blue takes the remainder.
pub fn sample_color(i: u32, n: u32) -> Vec4 {
    let half = n as f32 / 2.0;
    let red = (i as f32 - half).abs() / half;
    Vec4::new(red, 0.0, 1.0 - red, 1.0)
}

/// One color per fan vertex, aligned with [`crate::geometry::fan_vertices`].
pub fn fan_colors(n: u32) -> Vec<Vec4> {
    if n == 0 {
        return vec![ORIGIN_COLOR];
    }
    let mut colors = Vec::with_capacity((n as usize).saturating_add(2));
    colors.push(ORIGIN_COLOR);
    colors.extend((0..=n).map(|i| sample_color(i, n)));
    colors
}

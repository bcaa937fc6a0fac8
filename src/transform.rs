//! Model-view and projection matrices uploaded with every draw.
//!
//! Both stay at identity. The projection stage is kept as a real uniform
//! upload even though it never changes anything, so the shader interface
//! matches what a perspective or ortho setup would need.

use glam::Mat4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transforms {
    pub model_view: Mat4,
    pub projection: Mat4,
}

impl Default for Transforms {
    fn default() -> Self {
        Self {
            model_view: Mat4::IDENTITY,
            projection: projection_stage(),
        }
    }
}

impl Transforms {
    /// Column-major arrays ready for `uniformMatrix4fv`.
    pub fn model_view_array(&self) -> [f32; 16] {
        self.model_view.to_cols_array()
    }

    pub fn projection_array(&self) -> [f32; 16] {
        self.projection.to_cols_array()
    }
}

/// No-op projection: clip space is used as-is.
pub fn projection_stage() -> Mat4 {
    Mat4::IDENTITY
}

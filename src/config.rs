//! Scene constants.
//!
//! Everything here is effectively compile-time: the page never passes
//! settings in, it just gets [`SceneConfig::default`].

use crate::error::ConfigError;

/// Largest accepted circle resolution; keeps `N + 2` vertex counts well inside
/// a 32-bit `usize` and a GL draw count.
pub const MAX_RESOLUTION: u32 = 1 << 16;

#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Number of boundary segments in the fan (N).
    pub resolution: u32,
    /// Peak radial displacement of a boundary vertex.
    pub amplitude: f32,
    /// Radius of the undeformed circle.
    pub radius: f32,
    /// Degrees added to the phase angle every tick.
    pub phase_step_degrees: f32,
    pub clear_color: [f32; 4],
    pub depth_test: bool,
    pub canvas_id: String,
    pub vertex_shader_id: String,
    pub fragment_shader_id: String,
    /// Context identifiers tried in order until one succeeds.
    pub context_ids: Vec<String>,
    pub position_attribute: String,
    pub color_attribute: String,
    pub model_view_uniform: String,
    pub projection_uniform: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            resolution: 100,
            amplitude: 0.2,
            radius: 0.5,
            phase_step_degrees: 1.0,
            clear_color: [1.0, 1.0, 1.0, 1.0],
            depth_test: true,
            canvas_id: "glcanvas".into(),
            vertex_shader_id: "shader-vs".into(),
            fragment_shader_id: "shader-fs".into(),
            context_ids: vec!["webgl2".into(), "experimental-webgl2".into()],
            position_attribute: "aVertexPosition".into(),
            color_attribute: "aVertexColor".into(),
            model_view_uniform: "uMVMatrix".into(),
            projection_uniform: "uPMatrix".into(),
        }
    }
}

impl SceneConfig {
    /// Number of vertices both generators produce for this config (N + 2).
    pub fn vertex_count(&self) -> usize {
        (self.resolution as usize).saturating_add(2)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolution == 0 {
            return Err(ConfigError::ZeroResolution);
        }
        if self.resolution > MAX_RESOLUTION {
            return Err(ConfigError::ResolutionTooLarge(self.resolution));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if !(self.amplitude.is_finite() && self.amplitude >= 0.0) {
            return Err(ConfigError::InvalidAmplitude(self.amplitude));
        }
        if !self.phase_step_degrees.is_finite() {
            return Err(ConfigError::InvalidPhaseStep(self.phase_step_degrees));
        }
        if self.context_ids.is_empty() {
            return Err(ConfigError::NoContextIds);
        }
        Ok(())
    }
}

use wasm_bindgen::JsValue;

use crate::shader::ShaderStage;

/// Rejected [`SceneConfig`](crate::config::SceneConfig) values.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("circle resolution must be at least 1")]
    ZeroResolution,

    #[error(
        "circle resolution must be at most {max}, got {0}",
        max = crate::config::MAX_RESOLUTION
    )]
    ResolutionTooLarge(u32),

    #[error("circle radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("deformation amplitude must be non-negative and finite, got {0}")]
    InvalidAmplitude(f32),

    #[error("phase step must be finite, got {0}")]
    InvalidPhaseStep(f32),

    #[error("no drawing context identifiers configured")]
    NoContextIds,
}

/// Failures while bringing up a render session.
///
/// Every variant is terminal: the entry point reports it to the user and
/// does not start the frame loop.
#[derive(thiserror::Error, Debug)]
pub enum SetupError {
    /// Unable to retrieve window.
    ///
    /// This error occurs when [`web_sys::window()`] returns `None`.
    #[error("Unable to retrieve window")]
    WindowMissing,

    /// Unable to retrieve document.
    #[error("Unable to retrieve document")]
    DocumentMissing,

    /// No canvas element with the configured id.
    #[error("Canvas element `{0}` not found")]
    CanvasMissing(String),

    /// None of the context identifiers produced a drawing context.
    #[error("Unable to initialize WebGL. Your browser may not support it (tried {tried:?})")]
    ContextUnavailable { tried: Vec<String> },

    /// The page has no shader block with this id.
    #[error("Shader element `{0}` not found")]
    ShaderSourceMissing(String),

    /// The shader block's `type` attribute names no known stage.
    #[error("Shader element `{id}` has unknown type `{ty}`")]
    ShaderStageUnknown { id: String, ty: String },

    /// The markup tags a shader block with the wrong stage.
    #[error("Shader element `{id}` is tagged as {found} but a {expected} shader is required")]
    ShaderStageMismatch {
        id: String,
        expected: ShaderStage,
        found: ShaderStage,
    },

    #[error("Unable to create {0} shader object")]
    ShaderCreate(ShaderStage),

    /// Compilation failed; `log` is the backend's info log.
    #[error("An error occurred compiling the {stage} shader: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    #[error("Unable to create shader program")]
    ProgramCreate,

    #[error("Unable to link the shader program: {log}")]
    ProgramLink { log: String },

    #[error("Vertex attribute `{0}` not found in program")]
    AttributeMissing(String),

    #[error("Uniform `{0}` not found in program")]
    UniformMissing(String),

    #[error("Unable to create {0} buffer")]
    BufferCreate(&'static str),

    /// Position and color buffers would disagree on the draw count.
    #[error("Vertex count mismatch: {positions} positions, {colors} colors")]
    VertexCountMismatch { positions: usize, colors: usize },

    #[error("Invalid scene configuration: {0}")]
    Config(#[from] ConfigError),

    /// JS value error.
    #[error("JS value error: {0:?}")]
    JsValue(JsValue),
}

/// Convert [`JsValue`] to [`SetupError`].
impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        Self::JsValue(value)
    }
}

/// Convert [`SetupError`] to [`JsValue`] so it can cross the wasm boundary.
impl From<SetupError> for JsValue {
    fn from(error: SetupError) -> Self {
        match error {
            SetupError::JsValue(value) => value,
            other => JsValue::from_str(&other.to_string()),
        }
    }
}

//! Shader stages as tagged in the page markup.
//!
//! The page supplies both stages as `<script>` blocks tagged
//! `x-shader/x-vertex` / `x-shader/x-fragment`; there is no built-in source.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// Parses the `type` attribute of a shader script block.
    pub fn from_script_type(ty: &str) -> Option<Self> {
        match ty.trim() {
            "x-shader/x-vertex" => Some(Self::Vertex),
            "x-shader/x-fragment" => Some(Self::Fragment),
            _ => None,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => f.write_str("vertex"),
            Self::Fragment => f.write_str("fragment"),
        }
    }
}

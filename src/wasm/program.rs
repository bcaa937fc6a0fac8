use wasm_bindgen::JsCast;
use web_sys::{
    console, Document, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlProgram, WebGlShader,
    WebGlUniformLocation,
};

use crate::config::SceneConfig;
use crate::error::SetupError;
use crate::shader::ShaderStage;

/// Linked program plus the handles the draw call needs.
#[derive(Debug)]
pub struct ShaderProgram {
    pub program: WebGlProgram,
    pub position_attribute: u32,
    pub color_attribute: u32,
    pub model_view_uniform: WebGlUniformLocation,
    pub projection_uniform: WebGlUniformLocation,
}

/// Tries each context identifier in turn and returns the first that works.
pub fn acquire_context(canvas: &HtmlCanvasElement, ids: &[String]) -> Result<GL, SetupError> {
    for id in ids {
        // Some browsers throw for unknown identifiers rather than returning null.
        let Ok(Some(context)) = canvas.get_context(id) else {
            continue;
        };
        if let Ok(gl) = context.dyn_into::<GL>() {
            console::log_1(&format!("acquired `{id}` drawing context").into());
            return Ok(gl);
        }
    }
    Err(SetupError::ContextUnavailable {
        tried: ids.to_vec(),
    })
}

/// Reads shader text from the markup block `id`.
///
/// The block must exist and its `type` attribute must name `expected`.
pub fn load_shader_source(
    document: &Document,
    id: &str,
    expected: ShaderStage,
) -> Result<String, SetupError> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| SetupError::ShaderSourceMissing(id.to_owned()))?;
    let ty = element.get_attribute("type").unwrap_or_default();
    match ShaderStage::from_script_type(&ty) {
        Some(found) if found == expected => Ok(element.text_content().unwrap_or_default()),
        Some(found) => Err(SetupError::ShaderStageMismatch {
            id: id.to_owned(),
            expected,
            found,
        }),
        None => Err(SetupError::ShaderStageUnknown {
            id: id.to_owned(),
            ty,
        }),
    }
}

fn gl_kind(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => GL::VERTEX_SHADER,
        ShaderStage::Fragment => GL::FRAGMENT_SHADER,
    }
}

pub fn compile_shader(
    gl: &GL,
    stage: ShaderStage,
    source: &str,
) -> Result<WebGlShader, SetupError> {
    let shader = gl
        .create_shader(gl_kind(stage))
        .ok_or(SetupError::ShaderCreate(stage))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(SetupError::ShaderCompile { stage, log })
    }
}

pub fn link_program(
    gl: &GL,
    vertex: &WebGlShader,
    fragment: &WebGlShader,
) -> Result<WebGlProgram, SetupError> {
    let program = gl.create_program().ok_or(SetupError::ProgramCreate)?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);

    let linked = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if linked {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(SetupError::ProgramLink { log })
    }
}

fn attribute(gl: &GL, program: &WebGlProgram, name: &str) -> Result<u32, SetupError> {
    let location = gl.get_attrib_location(program, name);
    u32::try_from(location).map_err(|_| SetupError::AttributeMissing(name.to_owned()))
}

fn uniform(
    gl: &GL,
    program: &WebGlProgram,
    name: &str,
) -> Result<WebGlUniformLocation, SetupError> {
    gl.get_uniform_location(program, name)
        .ok_or_else(|| SetupError::UniformMissing(name.to_owned()))
}

impl ShaderProgram {
    /// Compiles both stages, links them, resolves the attribute and uniform
    /// handles, then enables the attribute arrays and makes the program
    /// current.
    pub fn build(gl: &GL, document: &Document, config: &SceneConfig) -> Result<Self, SetupError> {
        let vertex_source =
            load_shader_source(document, &config.vertex_shader_id, ShaderStage::Vertex)?;
        let fragment_source =
            load_shader_source(document, &config.fragment_shader_id, ShaderStage::Fragment)?;

        let vertex = compile_shader(gl, ShaderStage::Vertex, &vertex_source)?;
        let fragment = compile_shader(gl, ShaderStage::Fragment, &fragment_source)?;
        let program = link_program(gl, &vertex, &fragment)?;

        let position_attribute = attribute(gl, &program, &config.position_attribute)?;
        let color_attribute = attribute(gl, &program, &config.color_attribute)?;
        let model_view_uniform = uniform(gl, &program, &config.model_view_uniform)?;
        let projection_uniform = uniform(gl, &program, &config.projection_uniform)?;

        gl.enable_vertex_attrib_array(position_attribute);
        gl.enable_vertex_attrib_array(color_attribute);
        gl.use_program(Some(&program));

        Ok(Self {
            program,
            position_attribute,
            color_attribute,
            model_view_uniform,
            projection_uniform,
        })
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Float32Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    console, Document, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, Window,
};

use super::program::{acquire_context, ShaderProgram};
use crate::color::fan_colors;
use crate::config::SceneConfig;
use crate::error::SetupError;
use crate::geometry::{fan_vertices, flatten};
use crate::phase::PhaseAngle;
use crate::transform::Transforms;

/// Everything the frame loop touches, owned in one place.
///
/// Holding a `RenderSession` means startup succeeded; [`run`] moves it into
/// the animation callback, which then owns it until the page goes away.
#[derive(Debug)]
pub struct RenderSession {
    gl: GL,
    program: ShaderProgram,
    position_buffer: WebGlBuffer,
    color_buffer: WebGlBuffer,
    /// Vertices in the last position upload; the draw count.
    vertex_count: usize,
    color_count: usize,
    transforms: Transforms,
    phase: PhaseAngle,
    frames: u64,
    config: SceneConfig,
}

fn upload(gl: &GL, buffer: &WebGlBuffer, data: &[f32], usage: u32) {
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &Float32Array::from(data), usage);
}

impl RenderSession {
    /// Looks up the configured canvas in `window`'s document and sets up a
    /// session on it.
    pub fn setup(window: &Window, config: SceneConfig) -> Result<Self, SetupError> {
        let document = window.document().ok_or(SetupError::DocumentMissing)?;
        let canvas = document
            .get_element_by_id(&config.canvas_id)
            .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| SetupError::CanvasMissing(config.canvas_id.clone()))?;
        Self::with_canvas(&document, &canvas, config)
    }

    pub fn with_canvas(
        document: &Document,
        canvas: &HtmlCanvasElement,
        config: SceneConfig,
    ) -> Result<Self, SetupError> {
        config.validate()?;

        let gl = acquire_context(canvas, &config.context_ids)?;
        let program = ShaderProgram::build(&gl, document, &config)?;

        let position_buffer = gl.create_buffer().ok_or(SetupError::BufferCreate("position"))?;
        let color_buffer = gl.create_buffer().ok_or(SetupError::BufferCreate("color"))?;

        let colors = fan_colors(config.resolution);
        upload(&gl, &color_buffer, &flatten(&colors, |c| c.to_array()), GL::STATIC_DRAW);

        gl.clear_color(
            config.clear_color[0],
            config.clear_color[1],
            config.clear_color[2],
            config.clear_color[3],
        );
        if config.depth_test {
            gl.enable(GL::DEPTH_TEST);
            gl.depth_func(GL::LEQUAL);
        }
        gl.viewport(0, 0, canvas.width() as i32, canvas.height() as i32);

        let mut session = Self {
            gl,
            program,
            position_buffer,
            color_buffer,
            vertex_count: 0,
            color_count: colors.len(),
            transforms: Transforms::default(),
            phase: PhaseAngle::default(),
            frames: 0,
            config,
        };
        session.regenerate();

        if session.vertex_count != session.color_count {
            return Err(SetupError::VertexCountMismatch {
                positions: session.vertex_count,
                colors: session.color_count,
            });
        }

        console::log_1(&format!("render session ready: {} vertices", session.vertex_count).into());
        Ok(session)
    }

    pub fn phase(&self) -> PhaseAngle {
        self.phase
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn color_count(&self) -> usize {
        self.color_count
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Recomputes the whole fan for the current phase and replaces the
    /// position buffer contents.
    fn regenerate(&mut self) {
        let vertices = fan_vertices(
            self.config.resolution,
            self.config.radius,
            self.config.amplitude,
            self.phase.degrees(),
        );
        let positions = flatten(&vertices, |v| v.to_array());
        upload(&self.gl, &self.position_buffer, &positions, GL::DYNAMIC_DRAW);
        self.vertex_count = vertices.len();
    }

    /// Clears and draws the fan with the current buffer contents.
    pub fn draw(&self) {
        let gl = &self.gl;
        let program = &self.program;
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
        gl.use_program(Some(&program.program));

        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.position_buffer));
        gl.vertex_attrib_pointer_with_i32(program.position_attribute, 3, GL::FLOAT, false, 0, 0);
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.color_buffer));
        gl.vertex_attrib_pointer_with_i32(program.color_attribute, 4, GL::FLOAT, false, 0, 0);

        gl.uniform_matrix4fv_with_f32_array(
            Some(&program.projection_uniform),
            false,
            &self.transforms.projection_array(),
        );
        gl.uniform_matrix4fv_with_f32_array(
            Some(&program.model_view_uniform),
            false,
            &self.transforms.model_view_array(),
        );

        gl.draw_arrays(GL::TRIANGLE_FAN, 0, self.vertex_count as i32);
    }

    /// Steps the phase and rebuilds the geometry for the next frame.
    pub fn animate(&mut self) {
        if self.phase.advance(self.config.phase_step_degrees) {
            console::debug_1(&format!("phase wrapped after {} frames", self.frames + 1).into());
        }
        self.regenerate();
    }

    /// One frame: draw what is buffered, then prepare the next one.
    pub fn tick(&mut self) {
        self.draw();
        self.animate();
        self.frames += 1;
    }
}

/// Starts the self-rescheduling animation loop.
///
/// The next frame is requested before the current one is drawn. The loop has
/// no stop condition; if the browser refuses to schedule a frame, the error
/// is logged and the loop ends there.
pub fn run(window: Window, session: RenderSession) -> Result<(), JsValue> {
    // `f` holds the animation-frame closure so that it can keep calling
    // `request_animation_frame` on itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let scheduler = window.clone();
    let mut session = session;
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(callback) = f.borrow().as_ref() {
            let scheduled = scheduler.request_animation_frame(callback.as_ref().unchecked_ref());
            if let Err(err) = scheduled {
                console::error_1(&err);
            }
        }
        session.tick();
    }) as Box<dyn FnMut()>));

    if let Some(callback) = g.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(())
}

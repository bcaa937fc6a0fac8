//! An animated, sine-deformed circle drawn as a WebGL triangle fan.
//!
//! The geometry, color and transform math is plain Rust and builds on any
//! target; only the `wasm` module talks to the browser.

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod phase;
pub mod shader;
pub mod transform;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;
    use web_sys::console;

    use crate::config::SceneConfig;
    use crate::error::SetupError;

    pub mod program;
    pub mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or(SetupError::WindowMissing)?;
        let session = match render::RenderSession::setup(&window, SceneConfig::default()) {
            Ok(session) => session,
            Err(err) => {
                // Setup failures are reported to the user and nothing is drawn.
                let message = err.to_string();
                console::error_1(&message.as_str().into());
                window.alert_with_message(&message)?;
                return Ok(());
            }
        };

        render::run(window, session)
    }
}

use glam::Mat4;
use wobble_wasm::color::fan_colors;
use wobble_wasm::config::{SceneConfig, MAX_RESOLUTION};
use wobble_wasm::error::{ConfigError, SetupError};
use wobble_wasm::geometry::fan_vertices;
use wobble_wasm::shader::ShaderStage;
use wobble_wasm::transform::{projection_stage, Transforms};

const INDEX_HTML: &str = include_str!("../static/index.html");

#[test]
fn default_config_is_valid() {
    let config = SceneConfig::default();
    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.resolution, 100);
    assert_eq!(config.vertex_count(), 102);
    assert_eq!(config.clear_color, [1.0, 1.0, 1.0, 1.0]);
    assert!(config.depth_test);
}

#[test]
fn rejects_bad_config() {
    let cases = [
        (
            SceneConfig {
                resolution: 0,
                ..Default::default()
            },
            ConfigError::ZeroResolution,
        ),
        (
            SceneConfig {
                radius: 0.0,
                ..Default::default()
            },
            ConfigError::InvalidRadius(0.0),
        ),
        (
            SceneConfig {
                amplitude: -0.1,
                ..Default::default()
            },
            ConfigError::InvalidAmplitude(-0.1),
        ),
        (
            SceneConfig {
                context_ids: vec![],
                ..Default::default()
            },
            ConfigError::NoContextIds,
        ),
    ];
    for (config, expected) in cases {
        assert_eq!(config.validate(), Err(expected));
    }
    let nan_step = SceneConfig {
        phase_step_degrees: f32::NAN,
        ..Default::default()
    };
    assert!(matches!(nan_step.validate(), Err(ConfigError::InvalidPhaseStep(_))));
}

#[test]
fn resolution_is_capped() {
    let largest = SceneConfig {
        resolution: MAX_RESOLUTION,
        ..Default::default()
    };
    assert_eq!(largest.validate(), Ok(()));
    assert_eq!(largest.vertex_count(), MAX_RESOLUTION as usize + 2);
    assert_eq!(fan_vertices(MAX_RESOLUTION, 0.5, 0.2, 0.0).len(), largest.vertex_count());
    assert_eq!(fan_colors(MAX_RESOLUTION).len(), largest.vertex_count());

    for resolution in [MAX_RESOLUTION + 1, u32::MAX - 1, u32::MAX] {
        let config = SceneConfig {
            resolution,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ResolutionTooLarge(resolution)));
    }
}

#[test]
fn config_errors_wrap_into_setup_errors() {
    let err: SetupError = ConfigError::ZeroResolution.into();
    assert_eq!(
        err.to_string(),
        "Invalid scene configuration: circle resolution must be at least 1"
    );
}

#[test]
fn setup_error_messages_carry_diagnostics() {
    let err = SetupError::ShaderCompile {
        stage: ShaderStage::Fragment,
        log: "ERROR: 0:1: syntax error".into(),
    };
    assert_eq!(
        err.to_string(),
        "An error occurred compiling the fragment shader: ERROR: 0:1: syntax error"
    );
    let err = SetupError::ContextUnavailable {
        tried: vec!["webgl2".into()],
    };
    assert!(err.to_string().contains("webgl2"));
    let err = SetupError::ShaderSourceMissing("shader-vs".into());
    assert_eq!(err.to_string(), "Shader element `shader-vs` not found");
}

#[test]
fn script_types_map_to_stages() {
    assert_eq!(
        ShaderStage::from_script_type("x-shader/x-vertex"),
        Some(ShaderStage::Vertex)
    );
    assert_eq!(
        ShaderStage::from_script_type(" x-shader/x-fragment "),
        Some(ShaderStage::Fragment)
    );
    assert_eq!(ShaderStage::from_script_type("text/javascript"), None);
    assert_eq!(ShaderStage::from_script_type(""), None);
}

#[test]
fn page_declares_configured_shader_interface() {
    let config = SceneConfig::default();
    for needle in [
        &config.canvas_id,
        &config.vertex_shader_id,
        &config.fragment_shader_id,
        &config.position_attribute,
        &config.color_attribute,
        &config.model_view_uniform,
        &config.projection_uniform,
    ] {
        assert!(INDEX_HTML.contains(needle.as_str()), "missing {needle}");
    }
    assert!(INDEX_HTML.contains(r#"id="shader-vs" type="x-shader/x-vertex""#));
    assert!(INDEX_HTML.contains(r#"id="shader-fs" type="x-shader/x-fragment""#));
}

#[test]
fn transforms_stay_identity() {
    let transforms = Transforms::default();
    assert_eq!(transforms.model_view, Mat4::IDENTITY);
    assert_eq!(transforms.projection, projection_stage());
    assert_eq!(transforms.projection_array(), Mat4::IDENTITY.to_cols_array());
    assert_eq!(transforms.model_view_array()[0], 1.0);
    assert_eq!(transforms.model_view_array()[1], 0.0);
}

//! Triangle demo application
//!
//! Opens a centered square window with an OpenGL 3.3 core-profile context,
//! draws one static triangle through a fixed shader pair, and composites the
//! GUI library's built-in demo panel on top. Press Q or close the window to
//! quit.

use gl_engine::overlay::{Overlay, OverlayError};
use gl_engine::render::{
    AttribLayout, GlContext, RenderError, Renderer, ShaderProgram, StaticMesh,
};
use gl_engine::window::{Window, WindowConfig, WindowError};
use gl_engine::LoopState;
use thiserror::Error;

const VERTEX_SHADER_SOURCE: &str = r"
    #version 330 core

    layout (location = 0) in vec2 aPos;

    void main()
    {
        gl_Position = vec4(aPos.x, aPos.y, 0.0, 1.0);
    }
";

const FRAGMENT_SHADER_SOURCE: &str = r"
    #version 330 core

    out vec4 FragColor;

    void main()
    {
        FragColor = vec4(1.0, 0.4, 0.2, 1.0);
    }
";

/// Three vertices packed in a three-float stride; only x and y reach the
/// shader's single vec2 attribute.
const TRIANGLE_VERTICES: [f32; 9] = [
    -0.5, -0.5, 0.0, // bottom left
    0.5, -0.5, 0.0, // bottom right
    0.0, 0.5, 0.0, // top
];

const TRIANGLE_LAYOUT: AttribLayout = AttribLayout {
    location: 0,
    components: 2,
    stride: 3,
};

const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Observed as pressed during any iteration, this key ends the loop.
const QUIT_KEY: glfw::Key = glfw::Key::Q;

#[derive(Error, Debug)]
enum DemoError {
    #[error("window error: {0}")]
    Window(#[from] WindowError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("overlay error: {0}")]
    Overlay(#[from] OverlayError),
}

/// Demo application state
///
/// Field order is teardown order: the overlay releases its GL objects first,
/// then the pipeline and geometry, then the renderer drops the shared
/// context, and the window (which terminates GLFW) goes last.
struct DemoApp {
    overlay: Overlay,
    program: ShaderProgram,
    triangle: StaticMesh,
    renderer: Renderer,
    window: Window,
    state: LoopState,
    demo_open: bool,
}

impl DemoApp {
    fn new() -> Result<Self, DemoError> {
        let mut window = Window::new(&WindowConfig::default())?;
        let ctx = GlContext::load(&mut window)?;

        let program =
            ShaderProgram::from_sources(&ctx, VERTEX_SHADER_SOURCE, FRAGMENT_SHADER_SOURCE)?;
        let triangle = StaticMesh::upload(&ctx, &TRIANGLE_VERTICES, &TRIANGLE_LAYOUT)?;
        let overlay = Overlay::new(&ctx, &window)?;
        let renderer = Renderer::new(ctx, CLEAR_COLOR);

        Ok(Self {
            overlay,
            program,
            triangle,
            renderer,
            window,
            state: LoopState::Running,
            demo_open: true,
        })
    }

    fn run(&mut self) {
        log::info!("entering render loop; press Q or close the window to quit");
        while self.state.is_running() {
            if let Err(err) = self.frame() {
                log::error!("leaving render loop: {err}");
                break;
            }
        }
    }

    /// One loop iteration, strictly ordered: viewport, clear, scene draw,
    /// overlay draw, present, event poll, quit-key check.
    fn frame(&mut self) -> Result<(), DemoError> {
        let (fb_width, fb_height) = self.window.framebuffer_size();
        self.renderer.begin_frame(fb_width, fb_height);
        self.renderer.draw(&self.program, &self.triangle);

        let demo_open = &mut self.demo_open;
        self.overlay.frame(&self.window, |ui| {
            ui.show_demo_window(demo_open);
        })?;

        self.window.swap_buffers();
        self.window.poll_events();
        for (_, event) in self.window.flush_events() {
            self.overlay.handle_event(&event);
        }

        let quit_pressed = self.window.key_pressed(QUIT_KEY);
        if quit_pressed {
            self.window.set_should_close(true);
        }
        self.state = self.state.step(self.window.should_close(), quit_pressed);
        Ok(())
    }
}

fn try_main() -> Result<(), DemoError> {
    let mut app = DemoApp::new()?;
    app.run();
    log::info!("clean shutdown");
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    if let Err(err) = try_main() {
        log::error!("{err}");
        std::process::exit(-1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gl_engine::render::ShaderStage;
    use gl_engine::window::SizePolicy;

    #[test]
    fn test_triangle_vertex_data_is_exact() {
        assert_eq!(TRIANGLE_VERTICES.len(), 9);
        assert_eq!(
            TRIANGLE_VERTICES,
            [-0.5, -0.5, 0.0, 0.5, -0.5, 0.0, 0.0, 0.5, 0.0]
        );
    }

    #[test]
    fn test_triangle_layout_consumes_two_of_three_floats() {
        assert_eq!(TRIANGLE_LAYOUT.location, 0);
        assert_eq!(TRIANGLE_LAYOUT.components, 2);
        assert_eq!(TRIANGLE_LAYOUT.stride, 3);
        assert_eq!(TRIANGLE_VERTICES.len() as i32 % TRIANGLE_LAYOUT.stride, 0);
    }

    #[test]
    fn test_shader_sources_target_gl33_core() {
        assert!(VERTEX_SHADER_SOURCE.contains("#version 330 core"));
        assert!(FRAGMENT_SHADER_SOURCE.contains("#version 330 core"));
        assert!(VERTEX_SHADER_SOURCE.contains("layout (location = 0) in vec2 aPos"));
        assert!(FRAGMENT_SHADER_SOURCE.contains("out vec4 FragColor"));
    }

    #[test]
    fn test_struct_fields_drop_in_declaration_order() {
        use std::cell::RefCell;
        use std::rc::Rc;

        struct Tracer(&'static str, Rc<RefCell<Vec<&'static str>>>);
        impl Drop for Tracer {
            fn drop(&mut self) {
                self.1.borrow_mut().push(self.0);
            }
        }

        // Same field arrangement as DemoApp; teardown relies on this
        // language guarantee.
        struct Teardown {
            _overlay: Tracer,
            _pipeline: Tracer,
            _window: Tracer,
        }

        let order = Rc::new(RefCell::new(Vec::new()));
        drop(Teardown {
            _overlay: Tracer("overlay", Rc::clone(&order)),
            _pipeline: Tracer("pipeline", Rc::clone(&order)),
            _window: Tracer("window", Rc::clone(&order)),
        });
        assert_eq!(*order.borrow(), ["overlay", "pipeline", "window"]);
    }

    // Display-bound checks for the GL pipeline itself. Run with
    // `cargo test -- --ignored` on a machine with a display and a 3.3 driver.
    fn gl_fixture() -> Result<(Window, GlContext), DemoError> {
        let mut window = Window::new(&WindowConfig {
            title: "triangle_app test".to_string(),
            size: SizePolicy::Fixed {
                width: 256,
                height: 256,
            },
            square_aspect: false,
            visible: false,
        })?;
        let ctx = GlContext::load(&mut window)?;
        Ok((window, ctx))
    }

    #[test]
    #[ignore = "requires a display and an OpenGL 3.3 driver"]
    fn test_fixed_shader_pair_compiles_and_links() {
        let (_window, ctx) = gl_fixture().unwrap();
        ShaderProgram::from_sources(&ctx, VERTEX_SHADER_SOURCE, FRAGMENT_SHADER_SOURCE)
            .expect("known-valid sources must compile and link");
    }

    #[test]
    #[ignore = "requires a display and an OpenGL 3.3 driver"]
    fn test_triangle_upload_round_trips_byte_for_byte() {
        let (_window, ctx) = gl_fixture().unwrap();
        let mesh = StaticMesh::upload(&ctx, &TRIANGLE_VERTICES, &TRIANGLE_LAYOUT).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.read_back(), TRIANGLE_VERTICES.to_vec());
    }

    #[test]
    #[ignore = "requires a display and an OpenGL 3.3 driver"]
    fn test_broken_shader_reports_compile_failure() {
        let (_window, ctx) = gl_fixture().unwrap();
        let err = ShaderProgram::from_sources(
            &ctx,
            "#version 330 core\nvoid main() { gl_Position = missing; }",
            FRAGMENT_SHADER_SOURCE,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            RenderError::ShaderCompile {
                stage: ShaderStage::Vertex,
                ..
            }
        ));
    }
}

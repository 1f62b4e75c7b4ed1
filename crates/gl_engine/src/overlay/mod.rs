//! Immediate-mode GUI overlay
//!
//! Dear ImGui context plus a glow-backed renderer, composited over the scene
//! each frame. Input reaches the overlay through [`Overlay::handle_event`]:
//! the application forwards every polled window event after its own handling,
//! the polling-model equivalent of chained input callbacks.

mod input;

use std::rc::Rc;
use std::time::Instant;

use thiserror::Error;

use crate::render::GlContext;
use crate::window::Window;

/// Texture handle type of the loaded GL context.
type GlTexture = <glow::Context as glow::HasContext>::Texture;

/// Overlay errors
#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("overlay renderer initialization failed: {0}")]
    Init(String),

    #[error("overlay rendering failed: {0}")]
    Render(String),
}

/// Immediate-mode GUI overlay bound to a window and its GL context
///
/// Dropping the overlay destroys the renderer's GL objects (font atlas,
/// program, buffers), so it must be dropped while the context is still live,
/// before the window.
pub struct Overlay {
    gl: Rc<glow::Context>,
    imgui: imgui::Context,
    /// `None` only once teardown has begun; `destroy` consumes the renderer.
    renderer: Option<imgui_glow_renderer::Renderer>,
    textures: imgui::Textures<GlTexture>,
    last_frame: Instant,
}

impl Overlay {
    /// Create the GUI context and its renderer against the loaded GL context.
    ///
    /// Keyboard navigation is enabled; the library's on-disk ini state is
    /// disabled because this application persists nothing.
    pub fn new(ctx: &GlContext, window: &Window) -> Result<Self, OverlayError> {
        let mut imgui = imgui::Context::create();
        imgui.set_ini_filename(None);
        imgui.io_mut().config_flags |= imgui::ConfigFlags::NAV_ENABLE_KEYBOARD;

        let mut textures = imgui::Textures::<GlTexture>::new();
        // Drawing straight to the default framebuffer in linear color, so the
        // renderer must not convert to sRGB.
        let renderer =
            imgui_glow_renderer::Renderer::initialize(ctx.raw(), &mut imgui, &mut textures, false)
                .map_err(|e| OverlayError::Init(e.to_string()))?;

        let mut overlay = Self {
            gl: ctx.share(),
            imgui,
            renderer: Some(renderer),
            textures,
            last_frame: Instant::now(),
        };
        overlay.update_display_metrics(window);
        log::info!("GUI overlay initialized");
        Ok(overlay)
    }

    fn update_display_metrics(&mut self, window: &Window) {
        let (width, height) = window.size();
        let (fb_width, fb_height) = window.framebuffer_size();
        let io = self.imgui.io_mut();
        io.display_size = [width as f32, height as f32];
        if width > 0 && height > 0 {
            io.display_framebuffer_scale =
                [fb_width as f32 / width as f32, fb_height as f32 / height as f32];
        }
    }

    /// Feed one polled window event into the GUI's input queue.
    pub fn handle_event(&mut self, event: &glfw::WindowEvent) {
        input::apply(self.imgui.io_mut(), event);
    }

    /// Build and render one overlay frame onto the current framebuffer.
    ///
    /// `draw` receives the frame's [`imgui::Ui`] to declare widgets with.
    /// The overlay is drawn after the scene, so it composites on top.
    pub fn frame(
        &mut self,
        window: &Window,
        draw: impl FnOnce(&mut imgui::Ui),
    ) -> Result<(), OverlayError> {
        self.update_display_metrics(window);

        let now = Instant::now();
        self.imgui.io_mut().update_delta_time(now - self.last_frame);
        self.last_frame = now;

        let ui = self.imgui.new_frame();
        draw(ui);

        let draw_data = self.imgui.render();
        let Some(renderer) = self.renderer.as_mut() else {
            return Ok(());
        };
        renderer
            .render(&self.gl, &self.textures, draw_data)
            .map_err(|e| OverlayError::Render(e.to_string()))
    }
}

impl Drop for Overlay {
    fn drop(&mut self) {
        if let Some(renderer) = self.renderer.take() {
            renderer.destroy(&self.gl);
        }
    }
}

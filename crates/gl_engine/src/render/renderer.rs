//! Per-frame draw helpers
//!
//! Owns the loaded context and issues the fixed per-frame GL sequence:
//! viewport to the current framebuffer size, clear, draw.

use glow::HasContext as _;

use crate::render::{GlContext, ShaderProgram, StaticMesh};

/// Frame renderer for the scene underneath the overlay
pub struct Renderer {
    ctx: GlContext,
}

impl Renderer {
    /// Wrap a loaded context; the clear color is set once and reused by
    /// every [`Self::begin_frame`].
    pub fn new(ctx: GlContext, clear_color: [f32; 4]) -> Self {
        unsafe {
            ctx.raw().clear_color(
                clear_color[0],
                clear_color[1],
                clear_color[2],
                clear_color[3],
            );
        }
        Self { ctx }
    }

    /// Resize the viewport to the framebuffer and clear the color buffer.
    ///
    /// The framebuffer size is queried every frame because it can differ
    /// from the window size under high-DPI scaling.
    pub fn begin_frame(&self, fb_width: i32, fb_height: i32) {
        unsafe {
            self.ctx.raw().viewport(0, 0, fb_width, fb_height);
            self.ctx.raw().clear(glow::COLOR_BUFFER_BIT);
        }
    }

    /// Draw `mesh` with `program` as a plain triangle list.
    pub fn draw(&self, program: &ShaderProgram, mesh: &StaticMesh) {
        program.bind();
        mesh.bind();
        unsafe {
            self.ctx
                .raw()
                .draw_arrays(glow::TRIANGLES, 0, mesh.vertex_count());
        }
    }
}

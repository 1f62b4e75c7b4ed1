//! OpenGL context loading
//!
//! Resolves GL function pointers from the window's current context and wraps
//! them in a shared [`glow::Context`]. Resource wrappers each hold a clone of
//! the shared context so they can release their handles on drop.

use std::rc::Rc;

use glow::HasContext as _;

use crate::render::{RenderError, RenderResult};
use crate::window::Window;

/// Entry points probed before handing the loader to glow; a null result for
/// any of these means the context is unusable.
const PROBED_ENTRY_POINTS: [&str; 3] = ["glGetString", "glCreateShader", "glDrawArrays"];

/// Shared handle to a loaded OpenGL 3.3 context
pub struct GlContext {
    gl: Rc<glow::Context>,
}

impl GlContext {
    /// Load GL function pointers from the window's current context.
    ///
    /// The window's context must have been made current on this thread,
    /// which [`Window::new`](crate::window::Window::new) guarantees.
    pub fn load(window: &mut Window) -> RenderResult<Self> {
        for name in PROBED_ENTRY_POINTS {
            if window.get_proc_address(name).is_null() {
                return Err(RenderError::LoaderFailed(name));
            }
        }

        let gl =
            unsafe { glow::Context::from_loader_function(|name| window.get_proc_address(name)) };

        let version = unsafe { gl.get_parameter_string(glow::VERSION) };
        log::info!("loaded OpenGL {version}");

        Ok(Self { gl: Rc::new(gl) })
    }

    /// Borrow the underlying glow context.
    pub fn raw(&self) -> &glow::Context {
        &self.gl
    }

    /// Clone the shared context for a resource wrapper to keep.
    pub(crate) fn share(&self) -> Rc<glow::Context> {
        Rc::clone(&self.gl)
    }
}

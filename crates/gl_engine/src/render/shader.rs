//! Shader compilation and pipeline linking
//!
//! GLSL source compilation and program linking following RAII patterns.
//! Driver info logs are fetched on failure and carried in the error value
//! rather than discarded.

use std::fmt;
use std::rc::Rc;

use glow::HasContext as _;

use crate::render::{GlContext, RenderError, RenderResult};

/// Pipeline stage a shader object belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Vertex stage
    Vertex,
    /// Fragment stage
    Fragment,
}

impl ShaderStage {
    const fn gl_enum(self) -> u32 {
        match self {
            Self::Vertex => glow::VERTEX_SHADER,
            Self::Fragment => glow::FRAGMENT_SHADER,
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

/// Compiled shader object with RAII cleanup
///
/// Only lives between compilation and linking; [`ShaderProgram::link`]
/// consumes it, so the intermediate GL object is deleted as soon as the
/// program no longer needs it.
pub struct Shader {
    gl: Rc<glow::Context>,
    handle: glow::NativeShader,
}

impl Shader {
    /// Compile a shader stage from GLSL source.
    pub fn compile(ctx: &GlContext, stage: ShaderStage, source: &str) -> RenderResult<Self> {
        let gl = ctx.share();
        let handle = unsafe { gl.create_shader(stage.gl_enum()) }.map_err(RenderError::Allocation)?;

        unsafe {
            gl.shader_source(handle, source);
            gl.compile_shader(handle);
            if !gl.get_shader_compile_status(handle) {
                let log = gl.get_shader_info_log(handle);
                gl.delete_shader(handle);
                return Err(RenderError::ShaderCompile { stage, log });
            }
        }

        log::debug!("compiled {stage} shader");
        Ok(Self { gl, handle })
    }

    pub(crate) fn handle(&self) -> glow::NativeShader {
        self.handle
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.handle);
        }
    }
}

/// Linked graphics pipeline program with RAII cleanup
pub struct ShaderProgram {
    gl: Rc<glow::Context>,
    handle: glow::NativeProgram,
}

impl ShaderProgram {
    /// Link a vertex and a fragment shader into a pipeline program.
    ///
    /// Consumes both stages; after a successful link the intermediate shader
    /// objects are deleted when the arguments drop.
    pub fn link(ctx: &GlContext, vertex: Shader, fragment: Shader) -> RenderResult<Self> {
        let gl = ctx.share();
        let handle = unsafe { gl.create_program() }.map_err(RenderError::Allocation)?;

        unsafe {
            gl.attach_shader(handle, vertex.handle());
            gl.attach_shader(handle, fragment.handle());
            gl.link_program(handle);
            if !gl.get_program_link_status(handle) {
                let log = gl.get_program_info_log(handle);
                gl.delete_program(handle);
                return Err(RenderError::ProgramLink { log });
            }
        }

        log::debug!("linked shader program");
        Ok(Self { gl, handle })
    }

    /// Compile both fixed sources and link them in one step.
    pub fn from_sources(
        ctx: &GlContext,
        vertex_source: &str,
        fragment_source: &str,
    ) -> RenderResult<Self> {
        let vertex = Shader::compile(ctx, ShaderStage::Vertex, vertex_source)?;
        let fragment = Shader::compile(ctx, ShaderStage::Fragment, fragment_source)?;
        Self::link(ctx, vertex, fragment)
    }

    /// Select this program for subsequent draw calls.
    pub fn bind(&self) {
        unsafe {
            self.gl.use_program(Some(self.handle));
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.handle);
        }
    }
}

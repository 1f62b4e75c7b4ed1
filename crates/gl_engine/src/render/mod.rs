//! OpenGL rendering backend
//!
//! Context loading, shader pipeline construction, geometry upload, and the
//! per-frame draw helpers. Every GPU handle is wrapped in an RAII type that
//! releases it on drop, so teardown happens on all paths without manual call
//! ordering.

pub mod context;
pub mod mesh;
pub mod renderer;
pub mod shader;

pub use context::GlContext;
pub use mesh::{AttribLayout, StaticMesh};
pub use renderer::Renderer;
pub use shader::{Shader, ShaderProgram, ShaderStage};

use thiserror::Error;

/// Rendering backend errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// A required GL entry point could not be resolved from the context.
    #[error("OpenGL loader failed: missing entry point `{0}`")]
    LoaderFailed(&'static str),

    /// GL object allocation failed (shader, program, buffer, vertex array).
    #[error("GL allocation failed: {0}")]
    Allocation(String),

    /// Shader compilation failed; `log` carries the driver's info log.
    #[error("{stage} shader compilation failed: {log}")]
    ShaderCompile {
        /// Stage that failed to compile
        stage: ShaderStage,
        /// Driver info log
        log: String,
    },

    /// Program linking failed; `log` carries the driver's info log.
    #[error("shader program link failed: {log}")]
    ProgramLink {
        /// Driver info log
        log: String,
    },
}

pub type RenderResult<T> = Result<T, RenderError>;

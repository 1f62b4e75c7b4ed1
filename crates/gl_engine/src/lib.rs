//! # GL Engine
//!
//! A small windowing and rendering toolkit for OpenGL 3.3 core-profile
//! applications, built on GLFW for windowing and glow for GL access, with an
//! optional Dear ImGui overlay.
//!
//! ## Features
//!
//! - **Windowing**: monitor-aware window creation with a locked aspect ratio
//! - **Shader Pipeline**: GLSL compilation and linking with driver diagnostics
//! - **Geometry**: static vertex buffer upload with RAII cleanup
//! - **Overlay**: immediate-mode GUI composited over the scene
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_engine::render::{GlContext, Renderer};
//! use gl_engine::window::{Window, WindowConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut window = Window::new(&WindowConfig::default())?;
//!     let ctx = GlContext::load(&mut window)?;
//!     let renderer = Renderer::new(ctx, [0.0, 0.0, 0.0, 1.0]);
//!     while !window.should_close() {
//!         let (width, height) = window.framebuffer_size();
//!         renderer.begin_frame(width, height);
//!         window.swap_buffers();
//!         window.poll_events();
//!     }
//!     Ok(())
//! }
//! ```

pub mod overlay;
pub mod render;
pub mod window;

mod run_loop;

pub use run_loop::LoopState;

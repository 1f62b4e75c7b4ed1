//! Window management using GLFW
//!
//! Provides window creation and event handling for an OpenGL 3.3 core-profile
//! context. Window dimensions are derived from the primary monitor by default:
//! a square of half the monitor height, centered on screen, with the aspect
//! ratio locked to 1:1 afterwards.

use glfw::Context as _;
use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    #[error("GLFW initialization failed")]
    InitializationFailed,

    #[error("window creation failed")]
    CreationFailed,

    #[error("no video mode available for the primary monitor")]
    VideoModeUnavailable,
}

pub type WindowResult<T> = Result<T, WindowError>;

/// How the window dimensions are chosen at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizePolicy {
    /// Square window, each side half the primary monitor's height.
    HalfScreenSquare,
    /// Explicit dimensions in screen coordinates.
    Fixed {
        /// Window width
        width: u32,
        /// Window height
        height: u32,
    },
}

/// Window configuration
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Sizing policy
    pub size: SizePolicy,

    /// Lock the aspect ratio to 1:1 after creation
    pub square_aspect: bool,

    /// Whether the window is shown; headless-ish test runs keep it hidden
    pub visible: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "OpenGL + GLFW".to_string(),
            size: SizePolicy::HalfScreenSquare,
            square_aspect: true,
            visible: true,
        }
    }
}

/// GLFW window wrapper with proper resource management
///
/// Dropping the window destroys it and terminates GLFW, so it must outlive
/// every GPU resource created against its context.
pub struct Window {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl Window {
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|_| WindowError::InitializationFailed)?;

        glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));
        #[cfg(target_os = "macos")]
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
        glfw.window_hint(glfw::WindowHint::Visible(config.visible));

        let screen = glfw.with_primary_monitor(|_, monitor| {
            monitor
                .and_then(glfw::Monitor::get_video_mode)
                .map(|mode| (mode.width, mode.height))
        });

        let (width, height) = match config.size {
            SizePolicy::HalfScreenSquare => {
                let (_, screen_height) = screen.ok_or(WindowError::VideoModeUnavailable)?;
                half_screen_square(screen_height)
            }
            SizePolicy::Fixed { width, height } => (width, height),
        };

        let (mut window, events) = glfw
            .create_window(width, height, &config.title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        if let Some((screen_width, screen_height)) = screen {
            let (x, y) = centered_origin(screen_width, screen_height, width, height);
            window.set_pos(x, y);
        }
        if config.square_aspect {
            window.set_aspect_ratio(1, 1);
        }

        // Some X11 setups leave the cursor unset over a fresh window
        window.set_cursor(Some(glfw::Cursor::standard(glfw::StandardCursor::Arrow)));

        window.make_current();

        window.set_key_polling(true);
        window.set_char_polling(true);
        window.set_mouse_button_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_scroll_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_close_polling(true);

        log::info!("created {}x{} window \"{}\"", width, height, config.title);

        Ok(Self {
            glfw,
            window,
            events,
        })
    }

    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    pub fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    pub fn flush_events(&self) -> glfw::FlushedMessages<(f64, glfw::WindowEvent)> {
        glfw::flush_messages(&self.events)
    }

    /// Whether `key` is currently held down (state poll, not event queue).
    pub fn key_pressed(&self, key: glfw::Key) -> bool {
        self.window.get_key(key) == glfw::Action::Press
    }

    /// Window client-area size in screen coordinates.
    pub fn size(&self) -> (i32, i32) {
        self.window.get_size()
    }

    /// Drawable surface size in pixels; differs from [`Self::size`] under
    /// high-DPI scaling.
    pub fn framebuffer_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }

    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    /// Look up a GL entry point in the current context.
    pub(crate) fn get_proc_address(&mut self, name: &str) -> *const std::ffi::c_void {
        self.window.get_proc_address(name).cast()
    }
}

/// Square window side length from the monitor height, per the sizing contract.
fn half_screen_square(screen_height: u32) -> (u32, u32) {
    let side = screen_height / 2;
    (side, side)
}

/// Top-left origin that centers a window on the screen.
fn centered_origin(screen_width: u32, screen_height: u32, width: u32, height: u32) -> (i32, i32) {
    (
        (screen_width.saturating_sub(width) / 2) as i32,
        (screen_height.saturating_sub(height) / 2) as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_screen_square_uses_monitor_height_only() {
        assert_eq!(half_screen_square(2160), (1080, 1080));
        assert_eq!(half_screen_square(1440), (720, 720));
    }

    #[test]
    fn test_centered_origin_centers_on_both_axes() {
        // 2560x1440 screen, 720x720 window
        assert_eq!(centered_origin(2560, 1440, 720, 720), (920, 360));
    }

    #[test]
    fn test_centered_origin_clamps_oversized_window() {
        assert_eq!(centered_origin(800, 600, 1024, 768), (0, 0));
    }

    #[test]
    fn test_default_config_matches_sizing_contract() {
        let config = WindowConfig::default();
        assert_eq!(config.size, SizePolicy::HalfScreenSquare);
        assert!(config.square_aspect);
        assert_eq!(config.title, "OpenGL + GLFW");
    }
}

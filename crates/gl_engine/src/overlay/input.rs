//! GLFW → imgui input translation
//!
//! Maps polled window events onto imgui's IO event queue. Key repeats are
//! skipped; imgui synthesizes its own repeats from press/release pairs.

use glfw::{Action, Modifiers, WindowEvent};
use imgui::Io;

pub(crate) fn apply(io: &mut Io, event: &WindowEvent) {
    match *event {
        WindowEvent::Key(key, _, action, mods) => {
            let pressed = match action {
                Action::Press => true,
                Action::Release => false,
                Action::Repeat => return,
            };
            update_modifiers(io, mods);
            if let Some(key) = map_key(key) {
                io.add_key_event(key, pressed);
            }
        }
        WindowEvent::Char(c) => io.add_input_character(c),
        WindowEvent::CursorPos(x, y) => io.add_mouse_pos_event([x as f32, y as f32]),
        WindowEvent::MouseButton(button, action, _) => {
            if let Some(button) = map_mouse_button(button) {
                io.add_mouse_button_event(button, action == Action::Press);
            }
        }
        WindowEvent::Scroll(x, y) => io.add_mouse_wheel_event([x as f32, y as f32]),
        _ => {}
    }
}

fn update_modifiers(io: &mut Io, mods: Modifiers) {
    io.add_key_event(imgui::Key::ModShift, mods.contains(Modifiers::Shift));
    io.add_key_event(imgui::Key::ModCtrl, mods.contains(Modifiers::Control));
    io.add_key_event(imgui::Key::ModAlt, mods.contains(Modifiers::Alt));
    io.add_key_event(imgui::Key::ModSuper, mods.contains(Modifiers::Super));
}

fn map_mouse_button(button: glfw::MouseButton) -> Option<imgui::MouseButton> {
    match button {
        glfw::MouseButton::Button1 => Some(imgui::MouseButton::Left),
        glfw::MouseButton::Button2 => Some(imgui::MouseButton::Right),
        glfw::MouseButton::Button3 => Some(imgui::MouseButton::Middle),
        glfw::MouseButton::Button4 => Some(imgui::MouseButton::Extra1),
        glfw::MouseButton::Button5 => Some(imgui::MouseButton::Extra2),
        _ => None,
    }
}

#[allow(clippy::too_many_lines)]
fn map_key(key: glfw::Key) -> Option<imgui::Key> {
    use glfw::Key as G;
    use imgui::Key as I;

    Some(match key {
        G::Tab => I::Tab,
        G::Left => I::LeftArrow,
        G::Right => I::RightArrow,
        G::Up => I::UpArrow,
        G::Down => I::DownArrow,
        G::PageUp => I::PageUp,
        G::PageDown => I::PageDown,
        G::Home => I::Home,
        G::End => I::End,
        G::Insert => I::Insert,
        G::Delete => I::Delete,
        G::Backspace => I::Backspace,
        G::Space => I::Space,
        G::Enter => I::Enter,
        G::Escape => I::Escape,
        G::Apostrophe => I::Apostrophe,
        G::Comma => I::Comma,
        G::Minus => I::Minus,
        G::Period => I::Period,
        G::Slash => I::Slash,
        G::Semicolon => I::Semicolon,
        G::Equal => I::Equal,
        G::LeftBracket => I::LeftBracket,
        G::Backslash => I::Backslash,
        G::RightBracket => I::RightBracket,
        G::GraveAccent => I::GraveAccent,
        G::CapsLock => I::CapsLock,
        G::ScrollLock => I::ScrollLock,
        G::NumLock => I::NumLock,
        G::PrintScreen => I::PrintScreen,
        G::Pause => I::Pause,
        G::LeftShift => I::LeftShift,
        G::LeftControl => I::LeftCtrl,
        G::LeftAlt => I::LeftAlt,
        G::LeftSuper => I::LeftSuper,
        G::RightShift => I::RightShift,
        G::RightControl => I::RightCtrl,
        G::RightAlt => I::RightAlt,
        G::RightSuper => I::RightSuper,
        G::Menu => I::Menu,
        G::Num0 => I::Alpha0,
        G::Num1 => I::Alpha1,
        G::Num2 => I::Alpha2,
        G::Num3 => I::Alpha3,
        G::Num4 => I::Alpha4,
        G::Num5 => I::Alpha5,
        G::Num6 => I::Alpha6,
        G::Num7 => I::Alpha7,
        G::Num8 => I::Alpha8,
        G::Num9 => I::Alpha9,
        G::A => I::A,
        G::B => I::B,
        G::C => I::C,
        G::D => I::D,
        G::E => I::E,
        G::F => I::F,
        G::G => I::G,
        G::H => I::H,
        G::I => I::I,
        G::J => I::J,
        G::K => I::K,
        G::L => I::L,
        G::M => I::M,
        G::N => I::N,
        G::O => I::O,
        G::P => I::P,
        G::Q => I::Q,
        G::R => I::R,
        G::S => I::S,
        G::T => I::T,
        G::U => I::U,
        G::V => I::V,
        G::W => I::W,
        G::X => I::X,
        G::Y => I::Y,
        G::Z => I::Z,
        G::F1 => I::F1,
        G::F2 => I::F2,
        G::F3 => I::F3,
        G::F4 => I::F4,
        G::F5 => I::F5,
        G::F6 => I::F6,
        G::F7 => I::F7,
        G::F8 => I::F8,
        G::F9 => I::F9,
        G::F10 => I::F10,
        G::F11 => I::F11,
        G::F12 => I::F12,
        G::Kp0 => I::Keypad0,
        G::Kp1 => I::Keypad1,
        G::Kp2 => I::Keypad2,
        G::Kp3 => I::Keypad3,
        G::Kp4 => I::Keypad4,
        G::Kp5 => I::Keypad5,
        G::Kp6 => I::Keypad6,
        G::Kp7 => I::Keypad7,
        G::Kp8 => I::Keypad8,
        G::Kp9 => I::Keypad9,
        G::KpDecimal => I::KeypadDecimal,
        G::KpDivide => I::KeypadDivide,
        G::KpMultiply => I::KeypadMultiply,
        G::KpSubtract => I::KeypadSubtract,
        G::KpAdd => I::KeypadAdd,
        G::KpEnter => I::KeypadEnter,
        G::KpEqual => I::KeypadEqual,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_key_maps_to_imgui_q() {
        assert_eq!(map_key(glfw::Key::Q), Some(imgui::Key::Q));
    }

    #[test]
    fn test_navigation_keys_map() {
        assert_eq!(map_key(glfw::Key::Tab), Some(imgui::Key::Tab));
        assert_eq!(map_key(glfw::Key::Up), Some(imgui::Key::UpArrow));
        assert_eq!(map_key(glfw::Key::Enter), Some(imgui::Key::Enter));
        assert_eq!(map_key(glfw::Key::Escape), Some(imgui::Key::Escape));
    }

    #[test]
    fn test_unmapped_keys_are_dropped() {
        assert_eq!(map_key(glfw::Key::World1), None);
        assert_eq!(map_key(glfw::Key::F25), None);
    }

    #[test]
    fn test_mouse_buttons_map_to_imgui_order() {
        assert_eq!(
            map_mouse_button(glfw::MouseButton::Button1),
            Some(imgui::MouseButton::Left)
        );
        assert_eq!(
            map_mouse_button(glfw::MouseButton::Button2),
            Some(imgui::MouseButton::Right)
        );
        assert_eq!(
            map_mouse_button(glfw::MouseButton::Button3),
            Some(imgui::MouseButton::Middle)
        );
    }
}

use crate::core::data::raster::Pixel;
use crate::core::zoom::commands::ZoomCommand;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::{Key, NamedKey};

/// Turns winit key and pointer events into zoom commands.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ZoomInputState {
    cursor: Option<Pixel>,
}

impl ZoomInputState {
    pub fn handle_cursor_moved(&mut self, pixel: Pixel) {
        self.cursor = Some(pixel);
    }

    pub fn handle_cursor_left(&mut self) {
        self.cursor = None;
    }

    /// Key repeats are ignored, so holding a key toggles once.
    #[must_use]
    pub fn handle_key_event(
        &self,
        key: &Key,
        state: ElementState,
        repeat: bool,
    ) -> Option<ZoomCommand> {
        if state != ElementState::Pressed || repeat {
            return None;
        }

        match key {
            Key::Named(NamedKey::Space) => Some(ZoomCommand::TogglePause),
            Key::Character(text) => match text.to_lowercase().as_str() {
                "z" => Some(ZoomCommand::ToggleDepth),
                "x" => Some(ZoomCommand::ToggleXAxis),
                "c" | "y" => Some(ZoomCommand::ToggleYAxis),
                _ => None,
            },
            _ => None,
        }
    }

    #[must_use]
    pub fn handle_mouse_button(
        &self,
        button: MouseButton,
        state: ElementState,
    ) -> Option<ZoomCommand> {
        if state != ElementState::Pressed {
            return None;
        }

        match button {
            MouseButton::Left => self.cursor.map(ZoomCommand::Aim),
            MouseButton::Right => Some(ZoomCommand::ToggleReverse),
            _ => None,
        }
    }
}

//! Mouse state tracking.
//!
//! Wraps raw window events into per-frame queryable state: which buttons
//! are held, where the cursor is in pixels and in normalized device
//! coordinates, how far it dragged this frame, and the scroll accumulated
//! since the last frame. The app reads this once per frame to drive the
//! orbit controls and the pointer target.

use glam::Vec2;
use std::collections::HashSet;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    fn from_winit(btn: WinitMouseButton) -> Option<Self> {
        match btn {
            WinitMouseButton::Left => Some(MouseButton::Left),
            WinitMouseButton::Right => Some(MouseButton::Right),
            WinitMouseButton::Middle => Some(MouseButton::Middle),
            _ => None,
        }
    }
}

/// Mouse state, updated from window events and cleared once per frame.
#[derive(Debug, Default)]
pub struct Input {
    held: HashSet<MouseButton>,

    position: Vec2,
    ndc: Vec2,
    delta: Vec2,
    cursor_seen: bool,

    scroll_delta: f32,

    window_size: (u32, u32),
}

impl Input {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            window_size: (width, height),
            ..Default::default()
        }
    }

    /// Button is currently held down.
    pub fn mouse_held(&self, button: MouseButton) -> bool {
        self.held.contains(&button)
    }

    /// Cursor position in normalized device coordinates.
    ///
    /// Origin at window center, x right, y up, both in [-1, 1].
    pub fn mouse_ndc(&self) -> Vec2 {
        self.ndc
    }

    /// Cursor movement accumulated this frame, in pixels (y down, matching
    /// the window coordinate system).
    pub fn mouse_delta(&self) -> Vec2 {
        self.delta
    }

    /// Scroll wheel delta accumulated this frame. Positive is up/forward.
    pub fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }

    /// Clear per-frame state. Call once after each rendered frame.
    pub fn begin_frame(&mut self) {
        self.delta = Vec2::ZERO;
        self.scroll_delta = 0.0;
    }

    /// Keep NDC math in sync with the window size.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }

    /// Feed a winit window event.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(btn) = MouseButton::from_winit(*button) {
                    match state {
                        ElementState::Pressed => {
                            self.held.insert(btn);
                        }
                        ElementState::Released => {
                            self.held.remove(&btn);
                        }
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let next = Vec2::new(position.x as f32, position.y as f32);
                // No delta on the very first move: there is nothing to
                // measure from.
                if self.cursor_seen {
                    self.delta += next - self.position;
                }
                self.cursor_seen = true;
                self.position = next;

                let (w, h) = self.window_size;
                if w > 0 && h > 0 {
                    self.ndc = Vec2::new(
                        (next.x / w as f32) * 2.0 - 1.0,
                        1.0 - (next.y / h as f32) * 2.0, // y flipped
                    );
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll_delta += match delta {
                    winit::event::MouseScrollDelta::LineDelta(_, y) => *y,
                    winit::event::MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                };
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_state_survives_frame_boundaries() {
        let mut input = Input::new(800, 600);
        assert!(!input.mouse_held(MouseButton::Left));

        input.held.insert(MouseButton::Left);
        input.begin_frame();
        assert!(input.mouse_held(MouseButton::Left));

        input.held.remove(&MouseButton::Left);
        assert!(!input.mouse_held(MouseButton::Left));
    }

    #[test]
    fn ndc_is_centered_and_y_up() {
        let mut input = Input::new(800, 600);
        input.ndc = Vec2::new(
            (400.0 / 800.0) * 2.0 - 1.0,
            1.0 - (300.0 / 600.0) * 2.0,
        );
        assert!(input.mouse_ndc().length() < 0.01);

        input.ndc = Vec2::new(
            (800.0 / 800.0) * 2.0 - 1.0,
            1.0 - (0.0 / 600.0) * 2.0,
        );
        let ndc = input.mouse_ndc();
        assert!((ndc.x - 1.0).abs() < 1e-6 && (ndc.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn drag_delta_accumulates_within_a_frame_and_clears() {
        let mut input = Input::new(800, 600);
        input.delta += Vec2::new(4.0, -2.0);
        input.delta += Vec2::new(1.0, 1.0);
        assert_eq!(input.mouse_delta(), Vec2::new(5.0, -1.0));

        input.begin_frame();
        assert_eq!(input.mouse_delta(), Vec2::ZERO);
    }

    #[test]
    fn scroll_accumulates_within_a_frame() {
        let mut input = Input::new(800, 600);
        input.scroll_delta = 1.0;
        input.scroll_delta += 0.5;
        assert_eq!(input.scroll_delta(), 1.5);
        input.begin_frame();
        assert_eq!(input.scroll_delta(), 0.0);
    }
}

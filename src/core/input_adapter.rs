use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use crate::camera::OrbitCamera;

/// Pixels of scroll treated as one wheel notch
const PIXELS_PER_LINE: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Rotate,
    Pan,
}

/// Camera gesture decoded from pointer input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    Rotate { dx: f32, dy: f32 },
    Pan { dx: f32, dy: f32 },
    Zoom { steps: f32 },
}

impl PointerAction {
    pub fn apply(self, camera: &mut OrbitCamera, viewport_height: f32) {
        match self {
            Self::Rotate { dx, dy } => camera.rotate(dx, dy, viewport_height),
            Self::Pan { dx, dy } => camera.pan(dx, dy, viewport_height),
            Self::Zoom { steps } => camera.zoom(steps),
        }
    }
}

/// Bridges winit pointer events to orbit camera gestures
///
/// Left drag rotates, right or middle drag pans, the wheel zooms.
#[derive(Debug, Clone, Default)]
pub struct PointerAdapter {
    drag: Option<DragMode>,
    cursor: Option<(f32, f32)>,
}

impl PointerAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process_event(&mut self, event: &WindowEvent) -> Option<PointerAction> {
        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                self.button(*button, *state == ElementState::Pressed);
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x as f32, position.y as f32)
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                self.drag = None;
                None
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_LINE,
                };
                self.wheel(lines)
            }
            _ => None,
        }
    }

    pub fn button(&mut self, button: MouseButton, pressed: bool) {
        let mode = match button {
            MouseButton::Left => DragMode::Rotate,
            MouseButton::Right | MouseButton::Middle => DragMode::Pan,
            _ => return,
        };
        if pressed {
            self.drag = Some(mode);
        } else if self.drag == Some(mode) {
            self.drag = None;
        }
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) -> Option<PointerAction> {
        let previous = self.cursor.replace((x, y))?;
        let (dx, dy) = (x - previous.0, y - previous.1);
        match self.drag? {
            DragMode::Rotate => Some(PointerAction::Rotate { dx, dy }),
            DragMode::Pan => Some(PointerAction::Pan { dx, dy }),
        }
    }

    /// Positive lines scroll away from the user and zoom in
    pub fn wheel(&mut self, lines: f32) -> Option<PointerAction> {
        (lines != 0.0).then_some(PointerAction::Zoom { steps: lines })
    }

    pub fn dragging(&self) -> Option<DragMode> {
        self.drag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut adapter = PointerAdapter::new();
        assert_eq!(adapter.cursor_moved(10.0, 10.0), None);
        assert_eq!(adapter.cursor_moved(20.0, 15.0), None);
    }

    #[test]
    fn test_left_drag_rotates() {
        let mut adapter = PointerAdapter::new();
        adapter.cursor_moved(10.0, 10.0);
        adapter.button(MouseButton::Left, true);
        assert_eq!(
            adapter.cursor_moved(14.0, 7.0),
            Some(PointerAction::Rotate { dx: 4.0, dy: -3.0 })
        );

        adapter.button(MouseButton::Left, false);
        assert_eq!(adapter.dragging(), None);
    }

    #[test]
    fn test_right_drag_pans() {
        let mut adapter = PointerAdapter::new();
        adapter.cursor_moved(0.0, 0.0);
        adapter.button(MouseButton::Right, true);
        assert_eq!(
            adapter.cursor_moved(5.0, 0.0),
            Some(PointerAction::Pan { dx: 5.0, dy: 0.0 })
        );
    }

    #[test]
    fn test_wheel_zoom() {
        let mut adapter = PointerAdapter::new();
        assert_eq!(adapter.wheel(0.0), None);

        let mut camera = OrbitCamera::default();
        let before = camera.distance();
        if let Some(action) = adapter.wheel(1.0) {
            action.apply(&mut camera, 600.0);
        }
        for _ in 0..200 {
            camera.update();
        }
        assert!(camera.distance() < before);
    }
}

use tactus_foundation::{PointerEvent, PointerEventKind, PointerId};
use tactus_geometry::Point;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};

/// Pointer id used for the left mouse button. Touch contacts keep the ids
/// winit assigns them.
pub const MOUSE_POINTER_ID: PointerId = u64::MAX;

/// Translates winit window events into region pointer events in logical
/// coordinates.
///
/// The mouse is reported as a single contact that exists while the left
/// button is held; hovering produces nothing.
pub struct DesktopWinitPlatform {
    scale_factor: f64,
    cursor: PhysicalPosition<f64>,
    mouse_down: bool,
}

impl DesktopWinitPlatform {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor,
            cursor: PhysicalPosition::new(0.0, 0.0),
            mouse_down: false,
        }
    }

    pub fn set_scale_factor(&mut self, factor: f64) {
        self.scale_factor = factor;
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn pointer_position(&self, position: PhysicalPosition<f64>) -> Point {
        Point {
            x: (position.x / self.scale_factor) as f32,
            y: (position.y / self.scale_factor) as f32,
        }
    }

    pub fn pointer_event(
        &self,
        kind: PointerEventKind,
        id: PointerId,
        position: PhysicalPosition<f64>,
    ) -> PointerEvent {
        PointerEvent::new(kind, self.pointer_position(position)).with_id(id)
    }

    pub fn touch_event(
        &self,
        phase: TouchPhase,
        id: u64,
        location: PhysicalPosition<f64>,
    ) -> PointerEvent {
        let kind = match phase {
            TouchPhase::Started => PointerEventKind::Down,
            TouchPhase::Moved => PointerEventKind::Move,
            TouchPhase::Ended => PointerEventKind::Up,
            TouchPhase::Cancelled => PointerEventKind::Cancel,
        };
        self.pointer_event(kind, id, location)
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> Option<PointerEvent> {
        self.cursor = position;
        self.mouse_down
            .then(|| self.pointer_event(PointerEventKind::Move, MOUSE_POINTER_ID, position))
    }

    pub fn mouse_button(&mut self, state: ElementState) -> Option<PointerEvent> {
        let kind = match (state, self.mouse_down) {
            (ElementState::Pressed, false) => PointerEventKind::Down,
            (ElementState::Released, true) => PointerEventKind::Up,
            _ => return None,
        };
        self.mouse_down = state == ElementState::Pressed;
        Some(self.pointer_event(kind, MOUSE_POINTER_ID, self.cursor))
    }

    /// A held button is abandoned when the cursor leaves the window.
    pub fn cursor_left(&mut self) -> Option<PointerEvent> {
        if !self.mouse_down {
            return None;
        }
        self.mouse_down = false;
        Some(self.pointer_event(PointerEventKind::Cancel, MOUSE_POINTER_ID, self.cursor))
    }

    /// Returns the pointer event for `event`, if it is one.
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::Touch(touch) => {
                Some(self.touch_event(touch.phase, touch.id, touch.location))
            }
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(*position),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => self.mouse_button(*state),
            WindowEvent::CursorLeft { .. } => self.cursor_left(),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.set_scale_factor(*scale_factor);
                None
            }
            _ => None,
        }
    }
}

impl Default for DesktopWinitPlatform {
    fn default() -> Self {
        Self::new(1.0)
    }
}

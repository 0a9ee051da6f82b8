use winit::event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::shape::ShapeKind;

/// Pixels per wheel "line", matching a browser's line-mode wheel events
pub const PIXELS_PER_LINE: f32 = 20.0;

/// Window input reduced to what the demo reacts to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    PointerMoved { x: f32, y: f32 },
    /// Browser-style wheel delta: positive when scrolling down
    Scrolled { delta_y: f32 },
    Resized { width: u32, height: u32 },
    SelectShape(ShapeKind),
    ClearShape,
    Exit,
}

/// Translate a winit window event into an action
pub fn translate(event: &WindowEvent) -> Option<InputAction> {
    match event {
        WindowEvent::CloseRequested => Some(InputAction::Exit),
        WindowEvent::Resized(size) => Some(InputAction::Resized {
            width: size.width,
            height: size.height,
        }),
        WindowEvent::CursorMoved { position, .. } => Some(InputAction::PointerMoved {
            x: position.x as f32,
            y: position.y as f32,
        }),
        WindowEvent::MouseWheel { delta, .. } => Some(InputAction::Scrolled {
            delta_y: scroll_delta(*delta),
        }),
        WindowEvent::KeyboardInput { event, .. } => key_action(event),
        _ => None,
    }
}

/// Convert a winit wheel delta into browser `deltaY` pixels
pub fn scroll_delta(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * PIXELS_PER_LINE,
        MouseScrollDelta::PixelDelta(position) => -position.y as f32,
    }
}

fn key_action(event: &KeyEvent) -> Option<InputAction> {
    if event.state != ElementState::Pressed || event.repeat {
        return None;
    }
    match event.physical_key {
        PhysicalKey::Code(code) => key_code_action(code),
        PhysicalKey::Unidentified(_) => None,
    }
}

/// Map a pressed key to an action
pub fn key_code_action(code: KeyCode) -> Option<InputAction> {
    match code {
        KeyCode::Escape => Some(InputAction::Exit),
        KeyCode::Digit0 | KeyCode::Numpad0 => Some(InputAction::ClearShape),
        _ => shape_for_key(code).map(InputAction::SelectShape),
    }
}

pub fn shape_for_key(code: KeyCode) -> Option<ShapeKind> {
    match code {
        KeyCode::Digit1 | KeyCode::Numpad1 => Some(ShapeKind::Cube),
        KeyCode::Digit2 | KeyCode::Numpad2 => Some(ShapeKind::Sphere),
        KeyCode::Digit3 | KeyCode::Numpad3 => Some(ShapeKind::Cone),
        KeyCode::Digit4 | KeyCode::Numpad4 => Some(ShapeKind::Cylinder),
        KeyCode::Digit5 | KeyCode::Numpad5 => Some(ShapeKind::Torus),
        _ => None,
    }
}

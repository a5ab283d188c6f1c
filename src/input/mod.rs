use std::collections::HashSet;

use glam::Vec2;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton};
pub use winit::keyboard::KeyCode;

use crate::material::MaterialId;
use crate::placement::Brush;

/// Pointer and brush state fed by window events
///
/// Cursor positions arrive in device pixels and are converted to
/// simulation space with a fixed scale factor.
#[derive(Debug)]
pub struct PointerState {
    mouse_buttons_pressed: HashSet<MouseButton>,
    cursor_position: Option<Vec2>,
    scale_factor: f32,
    brush: Brush,
}

impl PointerState {
    /// `scale_factor` is display width divided by grid width
    pub fn new(scale_factor: f32) -> Self {
        Self {
            mouse_buttons_pressed: HashSet::new(),
            cursor_position: None,
            scale_factor: if scale_factor > 0.0 { scale_factor } else { 1.0 },
            brush: Brush::Random,
        }
    }

    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.mouse_buttons_pressed.insert(button);
            }
            ElementState::Released => {
                self.mouse_buttons_pressed.remove(&button);
            }
        }
    }

    pub fn process_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor_position = Some(Vec2::new(position.x as f32, position.y as f32));
    }

    pub fn process_cursor_left(&mut self) {
        self.cursor_position = None;
    }

    /// Number keys pick the brush: 0 random, 1-4 a fixed material
    pub fn process_key(&mut self, key: KeyCode, state: ElementState) {
        if state != ElementState::Pressed {
            return;
        }
        let brush = match key {
            KeyCode::Digit0 => Brush::Random,
            KeyCode::Digit1 => Brush::Fixed(MaterialId::Air),
            KeyCode::Digit2 => Brush::Fixed(MaterialId::Water),
            KeyCode::Digit3 => Brush::Fixed(MaterialId::Smoke),
            KeyCode::Digit4 => Brush::Fixed(MaterialId::Sand),
            _ => return,
        };
        if brush != self.brush {
            log::info!("Brush set to {}", brush.label());
        }
        self.brush = brush;
    }

    pub fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons_pressed.contains(&button)
    }

    /// Last cursor position in device pixels
    pub fn cursor_position(&self) -> Option<Vec2> {
        self.cursor_position
    }

    /// Cursor position converted to simulation space
    pub fn simulation_position(&self) -> Option<Vec2> {
        self.cursor_position.map(|p| p / self.scale_factor)
    }

    /// Left button held over the window
    pub fn wants_to_paint(&self) -> bool {
        self.is_mouse_button_pressed(MouseButton::Left) && self.cursor_position.is_some()
    }

    pub fn brush(&self) -> Brush {
        self.brush
    }

    pub fn set_brush(&mut self, brush: Brush) {
        self.brush = brush;
    }
}

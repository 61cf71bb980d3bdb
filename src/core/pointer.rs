use std::cell::RefCell;
use std::rc::Rc;

/// Latest pointer position in scene-steering units.
///
/// Mouse input lands roughly in \[-1, 1\] on both axes (y up); touch input is
/// an offset from the window center scaled by a small sensitivity, with y
/// pointing down. Input handlers are the only writers.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

/// Single-writer handle shared by the event wiring and the render loop.
pub type SharedPointer = Rc<RefCell<PointerState>>;

pub fn shared_pointer() -> SharedPointer {
    Rc::new(RefCell::new(PointerState::default()))
}

/// Window-relative mouse position mapped to \[-1, 1\], y inverted.
#[inline]
pub fn from_mouse(client_x: f32, client_y: f32, window_w: f32, window_h: f32) -> PointerState {
    let w = window_w.max(1.0);
    let h = window_h.max(1.0);
    PointerState {
        x: (client_x / w) * 2.0 - 1.0,
        y: -(client_y / h) * 2.0 + 1.0,
    }
}

/// Touch position as a scaled offset from the window center. y is not inverted.
#[inline]
pub fn from_touch(
    page_x: f32,
    page_y: f32,
    window_w: f32,
    window_h: f32,
    sensitivity: f32,
) -> PointerState {
    PointerState {
        x: (page_x - window_w / 2.0) * sensitivity,
        y: (page_y - window_h / 2.0) * sensitivity,
    }
}

/// Multi-touch gestures leave the pointer untouched.
#[inline]
pub fn single_touch(touch_count: u32) -> bool {
    touch_count == 1
}

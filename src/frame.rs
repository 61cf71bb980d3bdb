use crate::core::{FrameScheduler, LoopState, RenderLoop};
use crate::dom::CanvasSurface;
use crate::render::GpuState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebLoop = RenderLoop<CanvasSurface, GpuState>;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Reschedules the shared tick closure with requestAnimationFrame.
struct RafScheduler {
    tick: TickSlot,
}

impl FrameScheduler for RafScheduler {
    fn schedule_next(&mut self) {
        let Some(w) = web::window() else {
            log::error!("[frame] no window; cannot schedule");
            return;
        };
        if let Some(cb) = self.tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}

pub fn start_loop(render_loop: Rc<RefCell<WebLoop>>) {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let loop_tick = render_loop.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let mut scheduler = RafScheduler {
            tick: tick_clone.clone(),
        };
        // A stopped loop simply isn't rescheduled; the closure stays parked.
        if loop_tick.borrow_mut().tick(&mut scheduler) == LoopState::Stopped {
            log::debug!("[frame] tick chain ended");
        }
    }) as Box<dyn FnMut()>));
    render_loop
        .borrow_mut()
        .start(&mut RafScheduler { tick });
}

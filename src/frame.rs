use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Something advanced and drawn once per animation frame.
pub trait FrameDriver {
    fn frame(&mut self);
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop that can be cancelled and resumed.
///
/// Resuming simply schedules the next frame; drivers keep their own time
/// basis so a pause leaves no gap in the simulation.
#[derive(Clone)]
pub struct FrameLoop {
    tick: Tick,
    handle: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start<D: FrameDriver + 'static>(driver: Rc<RefCell<D>>) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));
        let frame_loop = Self {
            tick: tick.clone(),
            handle: handle.clone(),
        };
        let next = frame_loop.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            next.handle.set(None);
            driver.borrow_mut().frame();
            next.schedule();
        }) as Box<dyn FnMut()>));
        frame_loop.schedule();
        frame_loop
    }

    fn schedule(&self) {
        if self.handle.get().is_some() {
            return;
        }
        let Some(w) = web::window() else {
            return;
        };
        if let Some(cb) = self.tick.borrow().as_ref() {
            if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                self.handle.set(Some(id));
            }
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }

    pub fn resume(&self) {
        self.schedule();
    }

    pub fn is_running(&self) -> bool {
        self.handle.get().is_some()
    }
}

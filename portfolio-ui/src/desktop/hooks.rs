//! Component-side glue for drags and one-shot loads.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use super::drag::DragController;
use super::geometry::{Anchor, Position};
use crate::interop::{pointer_point, PointerListeners};

/// One draggable element's controller, listeners and click gate.
#[derive(Clone)]
pub struct DragHandle {
    controller: Rc<RefCell<DragController>>,
    listeners: Rc<RefCell<Option<PointerListeners>>>,
    suppress_click: Rc<Cell<bool>>,
}

impl DragHandle {
    /// Begin a session from `from`; `apply` receives every new position.
    ///
    /// Clamping is left to `apply`, which hands the position to the desktop
    /// state that knows the element's bounds.
    pub fn start(&self, e: &PointerEvent, from: Position, mut apply: impl FnMut(Position) + 'static) {
        // Replaces (and thereby detaches) any session left over from a lost pointerup.
        self.listeners.borrow_mut().take();
        self.controller.borrow_mut().begin(pointer_point(e), from);
        self.suppress_click.set(false);

        let controller = self.controller.clone();
        let on_move = move |pointer| {
            if let Some(next) = controller.borrow_mut().update(pointer, |p| p) {
                apply(next);
            }
        };

        let controller = self.controller.clone();
        let listeners = self.listeners.clone();
        let suppress_click = self.suppress_click.clone();
        let on_up = move |_pointer| {
            let outcome = controller.borrow_mut().end();
            if outcome.suppresses_click() {
                suppress_click.set(true);
                let suppress_click = suppress_click.clone();
                // The click that follows this pointerup is dispatched before any timer.
                wasm_bindgen_futures::spawn_local(async move {
                    TimeoutFuture::new(0).await;
                    suppress_click.set(false);
                });
            }
            if let Some(active) = listeners.borrow_mut().take() {
                active.release();
            }
        };

        *self.listeners.borrow_mut() = PointerListeners::install(on_move, on_up);
    }

    /// Whether a click landing now ends a drag rather than a press.
    pub fn suppresses_click(&self) -> bool {
        self.suppress_click.get()
    }
}

/// Drag support for one element. Listeners never outlive the component.
pub fn use_drag(anchor: Anchor) -> DragHandle {
    let handle = use_hook(|| DragHandle {
        controller: Rc::new(RefCell::new(DragController::new(anchor))),
        listeners: Rc::new(RefCell::new(None)),
        suppress_click: Rc::new(Cell::new(false)),
    });

    {
        let listeners = handle.listeners.clone();
        use_drop(move || {
            listeners.borrow_mut().take();
        });
    }

    handle
}

/// Run `load` once per mount, keeping `initial` until it resolves.
///
/// The result is dropped if the component unmounted in the meantime.
pub fn use_loaded<T, F>(initial: impl FnOnce() -> T, load: impl FnOnce() -> F + 'static) -> Signal<T>
where
    T: 'static,
    F: Future<Output = T> + 'static,
{
    let mut value = use_signal(initial);
    let alive = use_hook(|| Rc::new(Cell::new(true)));

    {
        let alive = alive.clone();
        use_drop(move || {
            alive.set(false);
        });
    }

    use_hook(move || {
        spawn(async move {
            let loaded = load().await;
            if alive.get() {
                value.set(loaded);
            }
        });
    });

    value
}

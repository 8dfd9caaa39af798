//! Thin wrappers over browser APIs used by the desktop.

use dioxus::prelude::*;
use dioxus_web::WebEventExt;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::desktop::geometry::{Point, Viewport};

/// Milliseconds since the epoch, as the browser sees it.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub fn viewport() -> Viewport {
    current_viewport().unwrap_or_default()
}

fn current_viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;

    if width > 0.0 && height > 0.0 {
        return Some(Viewport::new(width, height));
    }

    let root = window.document()?.document_element()?;
    Some(Viewport::new(
        root.client_width().max(0) as f64,
        root.client_height().max(0) as f64,
    ))
}

/// Keep `viewport` in sync with the browser window for the app's lifetime.
pub fn track_viewport(mut viewport: Signal<Viewport>) {
    if let Some(current) = current_viewport() {
        viewport.set(current);
    }

    let Some(window) = web_sys::window() else {
        return;
    };

    let callback = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Some(current) = current_viewport() {
            viewport.set(current);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
    let _ = window
        .add_event_listener_with_callback("orientationchange", callback.as_ref().unchecked_ref());

    // Lives as long as the page.
    callback.forget();
}

/// Resolves on the next `requestAnimationFrame` tick.
pub async fn next_animation_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window()
            .map(|window| window.request_animation_frame(&resolve).is_ok())
            .unwrap_or(false);
        if !scheduled {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

pub async fn sleep_ms(ms: u32) {
    TimeoutFuture::new(ms).await;
}

/// Open `url` in a new tab. Inside an iframe the embedding page is asked to
/// do it instead, since popups from frames are often blocked.
pub fn open_external(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let top = window.top().ok().flatten();
    let in_frame = top.as_ref().is_some_and(|top| *top != window);
    if in_frame {
        let message = serde_json::json!({
            "type": "OPEN_EXTERNAL_URL",
            "data": { "url": url },
        });
        let parent = window.parent().ok().flatten();
        if let (Some(parent), Ok(message)) = (parent, js_sys::JSON::parse(&message.to_string())) {
            let _ = parent.post_message(&message, "*");
        }
        return;
    }

    let _ = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer");
}

pub fn pointer_point(e: &PointerEvent) -> Point {
    if let Some(point) = e.data().try_as_web_event().and_then(|event| {
        event
            .dyn_ref::<web_sys::PointerEvent>()
            .map(|pointer| Point::new(pointer.client_x() as f64, pointer.client_y() as f64))
    }) {
        return point;
    }

    let point = e.data().client_coordinates();
    Point::new(point.x, point.y)
}

pub fn mouse_point(e: &MouseEvent) -> Point {
    let point = e.data().client_coordinates();
    Point::new(point.x, point.y)
}

/// Left edge of a mounted element in client coordinates.
pub fn element_left(element: &web_sys::Element) -> f64 {
    element.get_bounding_client_rect().left()
}

type PointerCallback = Closure<dyn FnMut(web_sys::PointerEvent)>;

/// Window-level `pointermove`/`pointerup` listeners for one drag session.
///
/// Installing adds the listeners; dropping removes them. A session that ends
/// from inside its own `pointerup` handler must use [`Self::release`], which
/// detaches immediately but frees the closures after the handler returns.
pub struct PointerListeners {
    target: web_sys::Window,
    on_move: PointerCallback,
    on_up: PointerCallback,
}

impl PointerListeners {
    pub fn install(
        mut on_move: impl FnMut(Point) + 'static,
        mut on_up: impl FnMut(Point) + 'static,
    ) -> Option<Self> {
        let target = web_sys::window()?;

        let on_move = Closure::wrap(Box::new(move |e: web_sys::PointerEvent| {
            on_move(Point::new(e.client_x() as f64, e.client_y() as f64));
        }) as Box<dyn FnMut(web_sys::PointerEvent)>);
        let on_up = Closure::wrap(Box::new(move |e: web_sys::PointerEvent| {
            on_up(Point::new(e.client_x() as f64, e.client_y() as f64));
        }) as Box<dyn FnMut(web_sys::PointerEvent)>);

        let listeners = Self {
            target,
            on_move,
            on_up,
        };
        listeners.attach().ok()?;
        Some(listeners)
    }

    fn attach(&self) -> Result<(), JsValue> {
        let on_move = self.on_move.as_ref().unchecked_ref();
        let on_up = self.on_up.as_ref().unchecked_ref();
        self.target.add_event_listener_with_callback("pointermove", on_move)?;
        self.target.add_event_listener_with_callback("pointerup", on_up)?;
        self.target.add_event_listener_with_callback("pointercancel", on_up)?;
        Ok(())
    }

    fn detach(&self) {
        let on_move = self.on_move.as_ref().unchecked_ref();
        let on_up = self.on_up.as_ref().unchecked_ref();
        let _ = self.target.remove_event_listener_with_callback("pointermove", on_move);
        let _ = self.target.remove_event_listener_with_callback("pointerup", on_up);
        let _ = self.target.remove_event_listener_with_callback("pointercancel", on_up);
    }

    pub fn release(self) {
        self.detach();
        wasm_bindgen_futures::spawn_local(async move {
            drop(self);
        });
    }
}

impl Drop for PointerListeners {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Window-level `keydown` listener, removed on drop.
pub struct KeyListener {
    target: web_sys::Window,
    callback: Closure<dyn FnMut(web_sys::KeyboardEvent)>,
}

impl KeyListener {
    /// `on_key` receives the `KeyboardEvent.key` value, e.g. `"Escape"`.
    pub fn install(mut on_key: impl FnMut(&str) + 'static) -> Option<Self> {
        let target = web_sys::window()?;
        let callback = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
            on_key(&e.key());
        }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);
        target
            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { target, callback })
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref());
    }
}

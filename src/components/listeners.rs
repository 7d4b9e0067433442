use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    AddEventListenerOptions, Event, EventTarget, HtmlCanvasElement, PointerEvent, WheelEvent,
};
use yew::functional::UseReducerHandle;

use crate::error::ViewportError;
use crate::model::{Viewport, ViewportAction};
use crate::render::SurfaceSize;
use crate::state::{PointerId, PointerSample};

/// One registered DOM event listener, removed again when dropped.
pub struct DomListener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl DomListener {
    pub fn new(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, ViewportError> {
        Self::register(target, kind, true, handler)
    }

    /// Non-passive listener, needed for handlers that call `prevent_default`.
    pub fn blocking(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, ViewportError> {
        Self::register(target, kind, false, handler)
    }

    fn register(
        target: &EventTarget,
        kind: &'static str,
        passive: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, ViewportError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for DomListener {
    fn drop(&mut self) {
        let function: &js_sys::Function = self.callback.as_ref().unchecked_ref();
        let _ = self.target.remove_event_listener_with_callback(self.kind, function);
    }
}

pub type GestureListeners = Vec<DomListener>;

fn sample(e: &PointerEvent) -> PointerSample {
    PointerSample::new(e.pointer_id(), e.client_x() as f64, e.client_y() as f64)
}

/// Presses and wheel on the canvas; moves and releases on the window so a
/// drag keeps tracking after the pointer leaves the canvas.
pub fn attach_gestures(
    canvas: &HtmlCanvasElement,
    viewport: &UseReducerHandle<Viewport>,
) -> Result<GestureListeners, ViewportError> {
    let window = web_sys::window().ok_or(ViewportError::NoWindow)?;
    let mut listeners = Vec::with_capacity(5);

    let vp = viewport.clone();
    listeners.push(DomListener::new(canvas, "pointerdown", move |e: Event| {
        if let Some(e) = e.dyn_ref::<PointerEvent>() {
            vp.dispatch(ViewportAction::PointerDown(sample(e)));
        }
    })?);

    let vp = viewport.clone();
    listeners.push(DomListener::new(&window, "pointermove", move |e: Event| {
        if let Some(e) = e.dyn_ref::<PointerEvent>() {
            vp.dispatch(ViewportAction::PointerMove(sample(e)));
        }
    })?);

    for kind in ["pointerup", "pointercancel"] {
        let vp = viewport.clone();
        listeners.push(DomListener::new(&window, kind, move |e: Event| {
            if let Some(e) = e.dyn_ref::<PointerEvent>() {
                vp.dispatch(ViewportAction::PointerUp(PointerId(e.pointer_id())));
            }
        })?);
    }

    let vp = viewport.clone();
    listeners.push(DomListener::blocking(canvas, "wheel", move |e: Event| {
        if let Some(e) = e.dyn_ref::<WheelEvent>() {
            e.prevent_default();
            vp.dispatch(ViewportAction::Wheel {
                delta_y: e.delta_y(),
            });
        }
    })?);

    Ok(listeners)
}

/// Match the canvas backing store to its layout box. The store is only
/// reassigned when the size differs, since that clears the canvas.
pub fn fit_canvas(canvas: &HtmlCanvasElement) -> SurfaceSize {
    let width = canvas.client_width().max(0) as u32;
    let height = canvas.client_height().max(0) as u32;
    if canvas.width() != width {
        canvas.set_width(width);
    }
    if canvas.height() != height {
        canvas.set_height(height);
    }
    SurfaceSize {
        width: width as f64,
        height: height as f64,
    }
}

pub fn watch_resize(
    canvas: HtmlCanvasElement,
    on_resize: impl Fn(SurfaceSize) + 'static,
) -> Result<DomListener, ViewportError> {
    let window = web_sys::window().ok_or(ViewportError::NoWindow)?;
    DomListener::new(&window, "resize", move |_e: Event| {
        on_resize(fit_canvas(&canvas));
    })
}

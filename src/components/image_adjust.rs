use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlCanvasElement, HtmlImageElement};
use yew::prelude::*;

use crate::config::GestureTuning;
use crate::error::ViewportError;
use crate::model::{Transform, Viewport, ViewportAction};
use crate::render::{SurfaceSize, blank, context_2d, paint};
use crate::state::{BindingChange, GestureBinding, ImageSlot, ZoomDirection};

use super::listeners::{GestureListeners, attach_gestures, fit_canvas, watch_resize};
use super::zoom_controls::ZoomControls;

#[derive(Properties, PartialEq, Clone)]
pub struct ImageAdjustProps {
    /// Image source URL. Empty means no image.
    pub src: AttrValue,
    #[prop_or_default]
    pub offset_x: f64,
    #[prop_or_default]
    pub offset_y: f64,
    #[prop_or(1.0)]
    pub zoom: f64,
    /// Attach gesture handlers and show the zoom controls.
    #[prop_or_default]
    pub edit_mode: bool,
    #[prop_or_default]
    pub tuning: GestureTuning,
    /// Emitted after every transform change.
    #[prop_or_default]
    pub on_change: Callback<Transform>,
}

type SharedSlot = Rc<RefCell<ImageSlot<HtmlImageElement>>>;

// Keeps the onload/onerror closures alive for the image currently loading.
struct LoadCallbacks {
    _onload: Closure<dyn FnMut()>,
    _onerror: Closure<dyn FnMut()>,
}

fn unhook(image: &HtmlImageElement) {
    image.set_onload(None);
    image.set_onerror(None);
}

// Wipe the frame of an image that has just been dropped.
fn clear_canvas(canvas_ref: &NodeRef) {
    let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
        return;
    };
    let size = SurfaceSize {
        width: canvas.width() as f64,
        height: canvas.height() as f64,
    };
    match context_2d(&canvas) {
        Ok(ctx) => blank::<HtmlImageElement, _>(&ctx, size),
        Err(e) => log::error!("clear failed: {e}"),
    }
}

fn start_load(
    src: &str,
    slot: &SharedSlot,
    loaded: &UseStateHandle<Option<u64>>,
) -> Result<LoadCallbacks, ViewportError> {
    let img = HtmlImageElement::new()?;
    let (ticket, superseded) = slot.borrow_mut().begin(img.clone());
    if let Some(old) = superseded {
        unhook(&old);
    }
    let onload = {
        let slot = slot.clone();
        let loaded = loaded.clone();
        let src = src.to_string();
        Closure::wrap(Box::new(move || {
            if slot.borrow_mut().complete(ticket) {
                log::info!("loaded {src}");
                loaded.set(Some(ticket.generation()));
            } else {
                log::warn!("discarding stale load of {src}");
            }
        }) as Box<dyn FnMut()>)
    };
    let onerror = {
        let slot = slot.clone();
        let src = src.to_string();
        Closure::wrap(Box::new(move || {
            if slot.borrow_mut().fail(ticket) {
                log::warn!("failed to load {src}");
            }
        }) as Box<dyn FnMut()>)
    };
    img.set_onload(Some(onload.as_ref().unchecked_ref()));
    img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    img.set_src(src);
    Ok(LoadCallbacks {
        _onload: onload,
        _onerror: onerror,
    })
}

#[function_component(ImageAdjust)]
pub fn image_adjust(props: &ImageAdjustProps) -> Html {
    let canvas_ref = use_node_ref();
    let viewport = {
        let initial = Transform::new(props.offset_x, props.offset_y, props.zoom);
        let tuning = props.tuning;
        use_reducer(move || Viewport::new(initial, tuning))
    };
    let surface = use_state(SurfaceSize::default);
    // Generation of the image that is ready to draw, if any.
    let loaded = use_state(|| None::<u64>);
    let image: SharedSlot = use_mut_ref(ImageSlot::default);
    let load_callbacks = use_mut_ref(|| None::<LoadCallbacks>);
    let binding = use_mut_ref(GestureBinding::<GestureListeners>::default);

    // Effect: size canvas, follow window resizes, tear everything down on unmount
    {
        let canvas_ref = canvas_ref.clone();
        let surface = surface.clone();
        let image = image.clone();
        let load_callbacks = load_callbacks.clone();
        let binding = binding.clone();
        use_effect_with((), move |_| {
            let resize = match canvas_ref.cast::<HtmlCanvasElement>() {
                Some(canvas) => {
                    surface.set(fit_canvas(&canvas));
                    let surface = surface.clone();
                    watch_resize(canvas, move |size| surface.set(size))
                        .map_err(|e| log::error!("resize listener: {e}"))
                        .ok()
                }
                None => {
                    log::error!("{}", ViewportError::NoCanvas);
                    None
                }
            };
            move || {
                drop(resize);
                binding.borrow_mut().detach();
                if let Some(pending) = image.borrow_mut().discard() {
                    unhook(&pending);
                }
                load_callbacks.borrow_mut().take();
            }
        });
    }
    // Effect: replace the image whenever the source changes
    {
        let canvas_ref = canvas_ref.clone();
        let image = image.clone();
        let loaded = loaded.clone();
        let load_callbacks = load_callbacks.clone();
        use_effect_with(props.src.clone(), move |src| {
            loaded.set(None);
            if src.is_empty() {
                if let Some(pending) = image.borrow_mut().discard() {
                    unhook(&pending);
                }
                load_callbacks.borrow_mut().take();
            } else {
                match start_load(src, &image, &loaded) {
                    Ok(callbacks) => *load_callbacks.borrow_mut() = Some(callbacks),
                    Err(e) => log::error!("cannot load {src}: {e}"),
                }
            }
            clear_canvas(&canvas_ref);
            || ()
        });
    }
    // Effect: attach or detach gesture listeners with edit mode
    {
        let canvas_ref = canvas_ref.clone();
        let viewport = viewport.clone();
        let binding = binding.clone();
        use_effect_with(props.edit_mode, move |enabled| {
            let change = binding.borrow_mut().transition(*enabled, || {
                let canvas = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .ok_or(ViewportError::NoCanvas)?;
                attach_gestures(&canvas, &viewport)
            });
            match change {
                Ok(BindingChange::Attached) => log::debug!("gesture listeners attached"),
                Ok(BindingChange::Detached) => {
                    log::debug!("gesture listeners detached");
                    viewport.dispatch(ViewportAction::ReleaseGestures);
                }
                Ok(BindingChange::Unchanged) => {}
                Err(e) => log::error!("failed to attach gesture listeners: {e}"),
            }
            || ()
        });
    }
    // Effect: host-driven transform and tuning
    {
        let viewport = viewport.clone();
        use_effect_with(
            (props.offset_x, props.offset_y, props.zoom),
            move |(x, y, zoom)| {
                viewport.dispatch(ViewportAction::Sync(Transform::new(*x, *y, *zoom)));
                || ()
            },
        );
    }
    {
        let viewport = viewport.clone();
        use_effect_with(props.tuning, move |tuning| {
            viewport.dispatch(ViewportAction::Retune(*tuning));
            || ()
        });
    }
    // Effect: redraw only when something visible changed
    {
        let canvas_ref = canvas_ref.clone();
        let image = image.clone();
        use_effect_with(
            (viewport.transform, *loaded, *surface),
            move |(transform, _, size)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let drawn = context_2d(&canvas)
                        .and_then(|ctx| paint(&ctx, image.borrow().ready(), transform, *size));
                    if let Err(e) = drawn {
                        log::error!("draw failed: {e}");
                    }
                }
                || ()
            },
        );
    }
    {
        let on_change = props.on_change.clone();
        use_effect_with(viewport.transform, move |transform| {
            on_change.emit(*transform);
            || ()
        });
    }

    let zoom_cb = |direction: ZoomDirection| {
        let viewport = viewport.clone();
        Callback::from(move |()| viewport.dispatch(ViewportAction::Zoom(direction)))
    };
    let reset_cb = {
        let viewport = viewport.clone();
        Callback::from(move |()| viewport.dispatch(ViewportAction::Reset))
    };
    let canvas_style = if props.edit_mode {
        "display:block; width:100%; height:100%; touch-action:none;"
    } else {
        "display:block; width:100%; height:100%;"
    };

    html! {<div class="image-adjust" style="position:relative; width:100%; height:100%; overflow:hidden;">
        <canvas ref={canvas_ref} style={canvas_style}></canvas>
        <ZoomControls show={props.edit_mode} on_zoom_in={zoom_cb(ZoomDirection::In)} on_zoom_out={zoom_cb(ZoomDirection::Out)} on_reset={reset_cb} />
    </div>}
}

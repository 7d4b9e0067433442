use super::image_adjust::ImageAdjust;
use crate::config::ViewportConfig;
use crate::model::Transform;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: ViewportConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = &props.config;
    let edit_mode = use_state(|| config.edit_mode);
    let src = use_state(|| AttrValue::from(config.src.clone()));
    let transform = use_state(|| Transform::new(config.offset_x, config.offset_y, config.zoom));

    let toggle_edit = {
        let edit_mode = edit_mode.clone();
        Callback::from(move |_| edit_mode.set(!*edit_mode))
    };
    // Swap the image source when the input is committed
    let on_src_change = {
        let src = src.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                src.set(AttrValue::from(input.value()));
            }
        })
    };
    let on_change = {
        let transform = transform.clone();
        Callback::from(move |t: Transform| transform.set(t))
    };

    let edit_label = if *edit_mode { "Done" } else { "Edit" };
    let readout = format!(
        "zoom {:.3}  offset ({:.0}, {:.0})",
        transform.zoom, transform.offset_x, transform.offset_y
    );

    html! {<div style="position:relative; width:100vw; height:100vh;">
        <ImageAdjust
            src={(*src).clone()}
            offset_x={config.offset_x}
            offset_y={config.offset_y}
            zoom={config.zoom}
            edit_mode={*edit_mode}
            tuning={config.gestures}
            on_change={on_change}
        />
        <div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:8px; align-items:center;">
            <input type="text" placeholder="image url" value={(*src).clone()} onchange={on_src_change} />
            <button onclick={toggle_edit}>{ edit_label }</button>
            <span style="font-size:12px; opacity:0.8;">{ readout }</span>
        </div>
    </div>}
}

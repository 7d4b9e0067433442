use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ZoomControlsProps {
    pub show: bool,
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(ZoomControls)]
pub fn zoom_controls(props: &ZoomControlsProps) -> Html {
    if !props.show {
        return html! {};
    }
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let rs = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; left:50%; bottom:1rem; transform:translateX(-50%); display:flex; gap:1rem;">
        <button type="button" title="zoom in" onclick={zi}> {"+"} </button>
        <button type="button" title="zoom out" onclick={zo}> {"-"} </button>
        <button type="button" title="reset" onclick={rs}> {"Reset"} </button>
    </div>}
}

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MapControlsProps {
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_reset: Callback<()>,
}

const BUTTON_STYLE: &str = "width:44px; height:44px; background:rgba(255,255,255,0.05); color:#fff; \
    border:1px solid rgba(255,255,255,0.1); border-radius:12px; font-size:18px; cursor:pointer;";

#[function_component(MapControls)]
pub fn map_controls(props: &MapControlsProps) -> Html {
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let rs = {
        let cb = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {<div style="position:absolute; right:40px; bottom:180px; z-index:50; background:rgba(0,0,0,0.8); border:1px solid rgba(255,255,255,0.2); border-radius:16px; padding:8px; display:flex; flex-direction:column; gap:8px;">
        <button title="Zoom in" style={BUTTON_STYLE} onclick={zi}>{"+"}</button>
        <button title="Zoom out" style={BUTTON_STYLE} onclick={zo}>{"−"}</button>
        <div style="height:1px; background:rgba(255,255,255,0.2); margin:0 8px;"></div>
        <button title="Reset view" style={BUTTON_STYLE} onclick={rs}>{"⟲"}</button>
    </div>}
}

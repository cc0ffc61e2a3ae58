use yew::prelude::*;

use crate::catalog::ModuleDef;

#[derive(Properties, PartialEq, Clone)]
pub struct DockProps {
    pub modules: Vec<&'static ModuleDef>,
    /// (module id, client x, client y)
    pub on_pointer_down: Callback<(String, f64, f64)>,
}

#[function_component]
pub fn Dock(props: &DockProps) -> Html {
    let items = props.modules.iter().map(|m| {
        let onpointerdown = {
            let cb = props.on_pointer_down.clone();
            let id = m.id;
            Callback::from(move |e: PointerEvent| {
                e.prevent_default();
                e.stop_propagation();
                cb.emit((id.to_string(), e.client_x() as f64, e.client_y() as f64));
            })
        };
        html! {
            <div key={m.id} {onpointerdown} title={m.description}
                style="display:flex; flex-direction:column; align-items:center; gap:12px; cursor:grab;">
                <div style={format!("position:relative; width:56px; height:80px; border-radius:12px; background:linear-gradient(#1f2937, #030712); \
                    border:1px solid #374151; display:flex; align-items:center; justify-content:center; box-shadow:0 10px 30px -5px {}20;", m.color)}>
                    <div style="position:absolute; top:0; left:0; width:100%; height:1px; background:rgba(255,255,255,0.3);"></div>
                    <div style={format!("font-weight:900; font-size:14px; color:{};", m.color)}>{ m.glyph }</div>
                    <div style={format!("position:absolute; bottom:12px; width:6px; height:6px; border-radius:50%; background:{0}; box-shadow:0 0 8px {0};", m.color)}></div>
                </div>
                <span style="font-size:10px; color:#6b7280; font-family:monospace; text-transform:uppercase; letter-spacing:0.05em;">{ m.short_name() }</span>
            </div>
        }
    });

    html! {<div style="position:absolute; bottom:0; left:0; width:100%; height:160px; z-index:100; display:flex; align-items:flex-end; justify-content:center; padding-bottom:32px; box-sizing:border-box; pointer-events:none; background:linear-gradient(to top, #000, rgba(17,24,39,0.9), transparent);">
        <div style="pointer-events:auto; position:relative; max-width:90vw; background:rgba(0,0,0,0.6); border:1px solid rgba(255,255,255,0.1); border-radius:16px; box-shadow:0 10px 50px rgba(0,0,0,0.8); display:flex; flex-direction:column; align-items:center;">
            <div style="position:absolute; top:-12px; background:#003366; color:#fff; font-size:10px; font-weight:700; padding:4px 16px; border-radius:999px; border:1px solid rgba(255,255,255,0.2); text-transform:uppercase; letter-spacing:0.2em;">{"Module Repository"}</div>
            <div style="display:flex; gap:32px; padding:24px 32px; overflow-x:auto; align-items:center; max-width:100%;">
                { if props.modules.is_empty() {
                    html!{ <div style="color:rgba(255,255,255,0.3); font-size:12px; font-family:monospace; text-transform:uppercase; letter-spacing:0.1em; padding:0 32px;">{"All modules active"}</div> }
                } else { html!{} } }
                { for items }
            </div>
        </div>
    </div>}
}

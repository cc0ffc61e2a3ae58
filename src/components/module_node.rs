use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::catalog::ModuleDef;
use crate::model::ContentBlob;
use crate::state::panel::is_tap;
use crate::state::{ContentMode, NodePanel};

#[derive(Properties, PartialEq, Clone)]
pub struct ModuleNodeProps {
    pub instance_id: String,
    pub module: &'static ModuleDef,
    pub x: f64,
    pub y: f64,
    pub content: Option<ContentBlob>,
    pub loading: bool,
    /// (instance id, client x, client y)
    pub on_pointer_down: Callback<(String, f64, f64)>,
    pub on_remove: Callback<String>,
    /// Fired when a content mode becomes selected.
    pub on_select: Callback<String>,
}

fn panel_text(mode: ContentMode, content: &ContentBlob) -> &str {
    match mode {
        ContentMode::Status => &content.status_update,
        ContentMode::Metrics => &content.technical_metrics,
        ContentMode::Zone => &content.impact_analysis,
    }
}

fn mode_button_style(selected: bool) -> &'static str {
    if selected {
        "width:36px; height:36px; border-radius:50%; background:#fff; color:#000; border:none; \
         box-shadow:0 0 15px white; transform:translateY(-50%) scale(1.1); cursor:pointer;"
    } else {
        "width:36px; height:36px; border-radius:50%; background:rgba(0,0,0,0.9); color:#fff; \
         border:1px solid rgba(255,255,255,0.2); transform:translateY(-50%); cursor:pointer;"
    }
}

#[function_component(ModuleNode)]
pub fn module_node(props: &ModuleNodeProps) -> Html {
    let panel = use_state(NodePanel::default);
    let press = use_mut_ref(|| (0.0_f64, 0.0_f64));
    let dragged = use_mut_ref(|| false);
    let landed = use_state(|| false);

    {
        let landed = landed.clone();
        use_effect_with((), move |_| {
            let timer = Timeout::new(50, move || landed.set(true));
            move || drop(timer)
        });
    }

    let onpointerdown = {
        let press = press.clone();
        let dragged = dragged.clone();
        let cb = props.on_pointer_down.clone();
        let id = props.instance_id.clone();
        Callback::from(move |e: PointerEvent| {
            e.prevent_default();
            e.stop_propagation();
            let pos = (e.client_x() as f64, e.client_y() as f64);
            *press.borrow_mut() = pos;
            *dragged.borrow_mut() = false;
            cb.emit((id.clone(), pos.0, pos.1));
        })
    };
    let onpointerup = {
        let press = press.clone();
        let dragged = dragged.clone();
        Callback::from(move |e: PointerEvent| {
            let end = (e.client_x() as f64, e.client_y() as f64);
            *dragged.borrow_mut() = !is_tap(*press.borrow(), end);
        })
    };
    let on_body_click = {
        let panel = panel.clone();
        let dragged = dragged.clone();
        Callback::from(move |_: MouseEvent| {
            if *dragged.borrow() {
                return;
            }
            let mut next = *panel;
            next.tap();
            panel.set(next);
        })
    };
    let select = |mode: ContentMode| {
        let panel = panel.clone();
        let cb = props.on_select.clone();
        let id = props.instance_id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let mut next = *panel;
            if next.select(mode).is_some() {
                cb.emit(id.clone());
            }
            panel.set(next);
        })
    };
    let on_close = {
        let cb = props.on_remove.clone();
        let id = props.instance_id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(id.clone());
        })
    };
    let stop = Callback::from(|e: PointerEvent| e.stop_propagation());

    let m = props.module;
    let open = panel.open;
    let mode = panel.mode;
    let is_landed = *landed;

    let body_scale = match (is_landed, open) {
        (false, _) => "scale(0)",
        (true, true) => "scale(1.1)",
        (true, false) => "scale(1)",
    };
    let body_style = format!(
        "position:relative; width:80px; height:80px; border-radius:50%; cursor:pointer; \
         transition:all 700ms ease-out; transform:{}; opacity:{};",
        body_scale,
        if is_landed { 1 } else { 0 },
    );
    let core_style = format!(
        "position:absolute; inset:0; border-radius:50%; background:rgba(0,0,0,0.8); \
         border:1px solid {}; box-shadow:{}; display:flex; flex-direction:column; \
         align-items:center; justify-content:center; gap:2px; overflow:hidden; \
         background-image:radial-gradient(circle at center, {}40, transparent 70%);",
        if open { m.color } else { "rgba(255,255,255,0.1)" },
        if is_landed { format!("0 0 30px -5px {}60", m.color) } else { "none".to_string() },
        m.color,
    );
    let orbit_style = format!(
        "position:absolute; inset:0; pointer-events:none; z-index:20; transition:all 300ms; \
         opacity:{}; transform:{};",
        if open { 1 } else { 0 },
        if open { "rotate(0deg)" } else { "rotate(45deg) scale(0.5)" },
    );
    let interactive = if open { "auto" } else { "none" };

    let card = mode.map(|mode| {
        let body = if props.loading {
            html! {
                <div style="display:flex; align-items:center; gap:8px; color:rgba(255,255,255,0.7); font-family:monospace; font-size:10px; padding:4px 0;">
                    <span style="color:#ff9933;">{"◌"}</span>
                    <span>{"ESTABLISHING SECURE UPLINK..."}</span>
                </div>
            }
        } else {
            let text = props.content.as_ref().map(|c| panel_text(mode, c).to_string()).unwrap_or_default();
            html! {
                <div style="display:flex; flex-direction:column; gap:10px;">
                    <div style="display:flex; justify-content:space-between; padding-bottom:8px; border-bottom:1px solid rgba(255,255,255,0.1);">
                        <span style="font-size:10px; color:#ff9933; font-weight:700; letter-spacing:0.2em;">{ mode.title() }</span>
                        <span style="font-size:11px; color:rgba(255,255,255,0.4);">{"∿"}</span>
                    </div>
                    <div style="font-size:12px; color:rgba(255,255,255,0.9); line-height:1.5;">{ text }</div>
                </div>
            }
        };
        html! {
            <div onpointerdown={stop.clone()}
                style={format!("position:absolute; left:100%; top:50%; transform:translateY(-50%); margin-left:56px; width:240px; z-index:30; \
                    background:rgba(0,0,0,0.9); border:1px solid rgba(255,255,255,0.1); border-left:3px solid {}; \
                    border-radius:12px; padding:16px; box-shadow:0 20px 50px rgba(0,0,0,0.6);", m.color)}>
                { body }
            </div>
        }
    });

    html! {
        <div {onpointerdown} {onpointerup}
            style={format!("position:absolute; left:{}px; top:{}px; transform:translate(-50%, -50%); z-index:{}; user-select:none; touch-action:none;",
                props.x, props.y, if open { 100 } else { 50 })}>
            <div onclick={on_body_click} style={body_style}>
                <svg viewBox="0 0 160 160" style="position:absolute; inset:-34px; width:148px; height:148px; pointer-events:none;">
                    <defs>
                        <path id={format!("ring-{}", props.instance_id)} d="M 80,80 m -60,0 a 60,60 0 1,1 120,0 a 60,60 0 1,1 -120,0" />
                    </defs>
                    <text font-size="6.5" fill={m.color} letter-spacing="3" font-weight="600">
                        <textPath href={format!("#ring-{}", props.instance_id)} startOffset="0%">
                            { format!("BESCOM • SMART MODULE • {} •", m.name.to_uppercase()) }
                        </textPath>
                    </text>
                </svg>
                <div style={core_style}>
                    <span style="font-size:20px; color:#fff;">{ m.icon() }</span>
                    <span style="font-size:6px; color:rgba(255,255,255,0.9); font-family:monospace; letter-spacing:0.2em;">{ m.glyph }</span>
                </div>
            </div>
            <div style={orbit_style}>
                <div title="Remove" onpointerdown={stop.clone()} onclick={on_close}
                    style={format!("position:absolute; top:-28px; right:-28px; pointer-events:{interactive}; cursor:pointer; width:32px; height:32px; border-radius:50%; \
                        background:rgba(0,0,0,0.9); border:1px solid rgba(239,68,68,0.5); color:#ef4444; display:flex; align-items:center; justify-content:center;")}>
                    {"✕"}
                </div>
                <button title="Technical metrics" onpointerdown={stop.clone()} onclick={select(ContentMode::Metrics)}
                    style={format!("position:absolute; top:50%; left:-48px; pointer-events:{interactive}; {}", mode_button_style(mode == Some(ContentMode::Metrics)))}>
                    {"⌕"}
                </button>
                <button title="Zone impact" onpointerdown={stop.clone()} onclick={select(ContentMode::Zone)}
                    style={format!("position:absolute; top:50%; right:-48px; pointer-events:{interactive}; {}", mode_button_style(mode == Some(ContentMode::Zone)))}>
                    {"⌖"}
                </button>
            </div>
            { for card }
        </div>
    }
}

use gloo::events::EventListener;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{
    connector_overlay::ConnectorOverlay, dock::Dock, map_view::MapView, module_node::ModuleNode,
};
use crate::catalog;
use crate::config::ContentConfig;
use crate::input::PointerCapture;
use crate::model::{MapAction, MapState};
use crate::services::content::fetch_content;
use crate::state::Viewport;
use crate::util::{clog, window_size};

fn current_viewport() -> Viewport {
    let (width, height) = window_size();
    Viewport { width, height }
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(|| MapState::new(current_viewport()));
    let config = use_memo((), |_| ContentConfig::load());

    {
        let simulation = config.is_simulation();
        use_effect_with((), move |_| {
            if simulation {
                clog("content: no API key configured, running in simulation mode");
            } else {
                clog("content: live generation enabled");
            }
            || ()
        });
    }

    // Viewport tracking for clamping, the dock strip and the connector target
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_| {
                    let vp = current_viewport();
                    state.dispatch(MapAction::Resize { width: vp.width, height: vp.height });
                })
            });
            move || drop(listener)
        });
    }

    // Window pointer capture scoped to the drag session
    {
        let state = state.clone();
        let dragging = state.drag.is_some();
        use_effect_with(dragging, move |dragging| {
            let capture = if *dragging {
                let on_move = {
                    let state = state.clone();
                    Callback::from(move |(x, y): (f64, f64)| state.dispatch(MapAction::DragMove { x, y }))
                };
                let on_release = {
                    let state = state.clone();
                    Callback::from(move |(x, y): (f64, f64)| state.dispatch(MapAction::EndDrag { x, y }))
                };
                PointerCapture::acquire(on_move, on_release)
            } else {
                None
            };
            move || drop(capture)
        });
    }

    // Spawn fetches for newly requested modules; results land in the shared cache
    {
        let state = state.clone();
        let config = config.clone();
        use_effect_with(state.fetch_epoch, move |_| {
            for module_id in state.requested_modules() {
                let Some(module) = catalog::find_module(&module_id) else {
                    continue;
                };
                state.dispatch(MapAction::FetchStarted { module_id: module_id.clone() });
                let state = state.clone();
                let config = config.clone();
                spawn_local(async move {
                    let blob = fetch_content(&config, module.name).await;
                    state.dispatch(MapAction::ContentLoaded { module_id, blob });
                });
            }
            || ()
        });
    }

    let on_dock_pointer_down = {
        let state = state.clone();
        Callback::from(move |(module_id, x, y): (String, f64, f64)| {
            state.dispatch(MapAction::BeginDockDrag { module_id, x, y })
        })
    };
    let on_node_pointer_down = {
        let state = state.clone();
        Callback::from(move |(instance_id, x, y): (String, f64, f64)| {
            state.dispatch(MapAction::BeginNodeDrag { instance_id, x, y })
        })
    };
    let on_remove = {
        let state = state.clone();
        Callback::from(move |instance_id: String| state.dispatch(MapAction::Remove { instance_id }))
    };
    let on_select = {
        let state = state.clone();
        Callback::from(move |instance_id: String| {
            state.dispatch(MapAction::SelectContent { instance_id })
        })
    };

    let selection = &state.selection;
    let connector = selection
        .instance_id
        .as_deref()
        .and_then(|id| state.store.get(id))
        .and_then(|p| p.module().map(|m| (p, m)))
        .map(|(p, m)| {
            html! { <ConnectorOverlay start={(p.x, p.y)} target={state.viewport.center()} color={m.color} /> }
        });

    let nodes = state.store.iter().filter_map(|p| {
        let module = p.module()?;
        Some(html! {
            <ModuleNode
                key={p.instance_id.clone()}
                instance_id={p.instance_id.clone()}
                module={module}
                x={p.x}
                y={p.y}
                content={state.content_for(module.id).cloned()}
                loading={state.is_loading(module.id)}
                on_pointer_down={on_node_pointer_down.clone()}
                on_remove={on_remove.clone()}
                on_select={on_select.clone()}
            />
        })
    });

    let ghost = state.drag.as_ref().filter(|d| d.is_new()).map(|d| {
        let (cx, cy) = d.cursor;
        html! {
            <div style={format!("position:absolute; left:{cx}px; top:{cy}px; transform:translate(-50%, -50%); z-index:200; pointer-events:none;")}>
                <div style={format!("width:96px; height:96px; border-radius:50%; border:2px dashed {0}; background:rgba(0,0,0,0.2); display:flex; align-items:center; justify-content:center;", selection.color)}>
                    <div style={format!("width:12px; height:12px; border-radius:50%; background:{};", selection.color)}></div>
                </div>
            </div>
        }
    });

    let badge = config.is_simulation().then(|| html! {
        <div style="position:absolute; top:16px; right:16px; z-index:100; background:rgba(255,153,51,0.1); color:#ff9933; font-size:10px; font-family:monospace; padding:4px 12px; border:1px solid rgba(255,153,51,0.5); border-radius:4px;">
            {"SIMULATION MODE"}
        </div>
    });

    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh; overflow:hidden; touch-action:none; background:#0a0f1c; font-family:sans-serif;">
            <div style="position:absolute; inset:0; pointer-events:none; background-image:radial-gradient(#003366 1px, transparent 1px); background-size:40px 40px;"></div>
            <div style="position:absolute; inset:0; pointer-events:none; background:radial-gradient(circle at center, transparent 0%, #0a0f1c 90%);"></div>

            <div style="position:absolute; top:32px; left:32px; z-index:10; pointer-events:none; user-select:none; display:flex; align-items:center; gap:16px;">
                <div style="width:64px; height:64px; background:#fff; border-radius:50%; border:4px solid #ff9933; display:flex; align-items:center; justify-content:center; font-size:30px; color:#003366;">{"⚡"}</div>
                <div>
                    <h1 style="margin:0; font-size:36px; font-weight:900; color:#fff; line-height:1;">{"BESCOM"}</h1>
                    <div style="height:4px; width:100%; background:linear-gradient(to right, #ff9933, transparent); margin:4px 0;"></div>
                    <p style="margin:0; color:#ff9933; font-family:monospace; font-size:14px; letter-spacing:0.3em; text-transform:uppercase; opacity:0.8;">{"Smart Grid Command"}</p>
                </div>
            </div>

            <MapView active_zone={selection.zone_id} active_color={selection.color} />
            { for connector }
            { for badge }
            { for nodes }
            { for ghost }
            <Dock modules={state.dock_modules()} on_pointer_down={on_dock_pointer_down} />
        </div>
    }
}

use yew::prelude::*;

use super::map_controls::MapControls;
use crate::catalog::{find_zone, MAP_SIZE, ZONES};
use crate::input::PointerCapture;
use crate::state::{CameraAction, MapCamera};

const MAP_CSS: &str = "@keyframes dash-flow { to { stroke-dashoffset: -2000; } } \
    .zone-flow { animation: dash-flow 40s linear infinite; }";

/// Render parameters for one zone given the active selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneStyle {
    pub group_opacity: f64,
    pub fill: &'static str,
    pub fill_opacity: f64,
    pub stroke: &'static str,
    pub stroke_width: f64,
    pub stroke_opacity: f64,
    pub dash_width: f64,
    pub dash_opacity: f64,
    pub glow: bool,
}

pub fn zone_style(zone_id: &str, active_zone: Option<&str>, active_color: &'static str) -> ZoneStyle {
    let is_active = active_zone == Some(zone_id);
    if is_active {
        return ZoneStyle {
            group_opacity: 1.0,
            fill: active_color,
            fill_opacity: 0.15,
            stroke: active_color,
            stroke_width: 2.0,
            stroke_opacity: 0.8,
            dash_width: 3.0,
            dash_opacity: 1.0,
            glow: true,
        };
    }
    ZoneStyle {
        group_opacity: if active_zone.is_some() { 0.2 } else { 1.0 },
        fill: "#000000",
        fill_opacity: 0.0,
        stroke: "#ffffff",
        stroke_width: 1.0,
        stroke_opacity: 0.2,
        dash_width: 1.5,
        dash_opacity: 0.4,
        glow: false,
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct MapViewProps {
    pub active_zone: Option<&'static str>,
    pub active_color: &'static str,
}

#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let camera = use_reducer(MapCamera::default);

    // Window listeners only while a pan is in progress.
    {
        let camera = camera.clone();
        use_effect_with(camera.panning, move |panning| {
            let capture = if *panning {
                let on_move = {
                    let camera = camera.clone();
                    Callback::from(move |(x, y): (f64, f64)| camera.dispatch(CameraAction::PanTo { x, y }))
                };
                let on_release = {
                    let camera = camera.clone();
                    Callback::from(move |_: (f64, f64)| camera.dispatch(CameraAction::EndPan))
                };
                PointerCapture::acquire(on_move, on_release)
            } else {
                None
            };
            move || drop(capture)
        });
    }

    let onwheel = {
        let camera = camera.clone();
        Callback::from(move |e: WheelEvent| {
            e.stop_propagation();
            camera.dispatch(CameraAction::Wheel { delta_y: e.delta_y() });
        })
    };
    let onpointerdown = {
        let camera = camera.clone();
        Callback::from(move |e: PointerEvent| {
            e.prevent_default();
            camera.dispatch(CameraAction::BeginPan {
                x: e.client_x() as f64,
                y: e.client_y() as f64,
            });
        })
    };
    let on_zoom_in = {
        let camera = camera.clone();
        Callback::from(move |_: ()| camera.dispatch(CameraAction::ZoomIn))
    };
    let on_zoom_out = {
        let camera = camera.clone();
        Callback::from(move |_: ()| camera.dispatch(CameraAction::ZoomOut))
    };
    let on_reset = {
        let camera = camera.clone();
        Callback::from(move |_: ()| camera.dispatch(CameraAction::Reset))
    };

    let surface_style = format!(
        "position:relative; width:{size}px; height:{size}px; flex-shrink:0; transition:transform 100ms ease-out; \
         transform-origin:center; transform:{}; cursor:{};",
        camera.transform_css(),
        if camera.panning { "grabbing" } else { "grab" },
        size = MAP_SIZE,
    );
    let view_box = format!("0 0 {MAP_SIZE} {MAP_SIZE}");

    let ghost = ZONES.iter().map(|z| {
        html! { <path key={z.id} d={z.path} fill="none" stroke="white" stroke-width="2" /> }
    });
    let zones = ZONES.iter().map(|z| {
        let s = zone_style(z.id, props.active_zone, props.active_color);
        html! {
            <g key={z.id} style={format!("opacity:{}; transition:all 300ms ease-out;", s.group_opacity)}>
                <title>{ z.name }</title>
                <path d={z.path} fill={s.fill} fill-opacity={s.fill_opacity.to_string()} stroke="none" />
                <path d={z.path} fill="none" stroke={s.stroke}
                    stroke-width={s.stroke_width.to_string()}
                    stroke-opacity={s.stroke_opacity.to_string()}
                    stroke-linecap="round" stroke-linejoin="round" vector-effect="non-scaling-stroke" />
                <path class="zone-flow" d={z.path} fill="none" stroke={s.stroke}
                    stroke-width={s.dash_width.to_string()}
                    stroke-opacity={s.dash_opacity.to_string()}
                    stroke-dasharray="15, 15"
                    stroke-linecap="round" stroke-linejoin="round" vector-effect="non-scaling-stroke"
                    style={if s.glow { "filter:url(#glow-2d);" } else { "filter:none;" }} />
            </g>
        }
    });

    let zone_label = props.active_zone.and_then(find_zone).map(|z| {
        html! {
            <div style={format!("position:absolute; top:120px; left:32px; z-index:10; pointer-events:none; font-family:monospace; font-size:11px; letter-spacing:0.25em; color:{};", props.active_color)}>
                { format!("ZONE • {}", z.name.to_uppercase()) }
            </div>
        }
    });

    html! {
        <>
            <style>{ MAP_CSS }</style>
            <div {onwheel} style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; overflow:hidden; touch-action:none; z-index:0;">
                <div {onpointerdown} style={surface_style}>
                    <svg viewBox={view_box} style="width:100%; height:100%; overflow:visible;" shape-rendering="geometricPrecision">
                        <defs>
                            <filter id="glow-2d" x="-20%" y="-20%" width="140%" height="140%">
                                <feGaussianBlur stdDeviation="5" result="blur" />
                                <feComposite in="SourceGraphic" in2="blur" operator="over" />
                            </filter>
                        </defs>
                        <g style="opacity:0.1; pointer-events:none;">{ for ghost }</g>
                        { for zones }
                    </svg>
                </div>
            </div>
            { for zone_label }
            <MapControls {on_zoom_in} {on_zoom_out} {on_reset} />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_selection_draws_every_zone_neutral() {
        for z in ZONES {
            let s = zone_style(z.id, None, "#ff9933");
            assert_eq!(s.group_opacity, 1.0);
            assert_eq!(s.stroke, "#ffffff");
            assert!(!s.glow);
        }
    }

    #[test]
    fn active_zone_is_emphasized_and_others_dimmed() {
        let active = zone_style("east", Some("east"), "#af52de");
        assert_eq!(active.fill, "#af52de");
        assert_eq!(active.stroke, "#af52de");
        assert!(active.glow);
        assert!(active.stroke_width > 1.0);

        let other = zone_style("west", Some("east"), "#af52de");
        assert_eq!(other.group_opacity, 0.2);
        assert_eq!(other.fill_opacity, 0.0);
        assert!(!other.glow);
    }
}

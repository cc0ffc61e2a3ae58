// Decorative beams from the active node to the viewport center.
use yew::prelude::*;

pub fn circuit_path(start: (f64, f64), target: (f64, f64)) -> String {
    let mid_x = (start.0 + target.0) / 2.0;
    format!(
        "M {},{} L {},{} L {},{} L {},{}",
        start.0, start.1, mid_x, start.1, mid_x, target.1, target.0, target.1
    )
}

pub fn curve_path(start: (f64, f64), target: (f64, f64)) -> String {
    format!(
        "M {},{} Q {},{} {},{}",
        start.0, start.1, start.0, target.1, target.0, target.1
    )
}

pub fn offset_path(start: (f64, f64), target: (f64, f64)) -> String {
    let mid_y = (start.1 + target.1) / 2.0;
    format!(
        "M {},{} L {},{} L {},{} L {},{}",
        start.0, start.1, start.0, mid_y, target.0, mid_y, target.0, target.1
    )
}

#[derive(Properties, PartialEq, Clone)]
pub struct ConnectorOverlayProps {
    pub start: (f64, f64),
    pub target: (f64, f64),
    pub color: &'static str,
}

#[function_component(ConnectorOverlay)]
pub fn connector_overlay(props: &ConnectorOverlayProps) -> Html {
    let (sx, sy) = props.start;
    let (tx, ty) = props.target;
    let color = props.color;
    html! {
        <svg style="position:absolute; inset:0; width:100%; height:100%; pointer-events:none; z-index:10; overflow:visible;">
            <defs>
                <linearGradient id="beam-grad" x1="0%" y1="0%" x2="100%" y2="0%">
                    <stop offset="0%" stop-color={color} stop-opacity="0" />
                    <stop offset="50%" stop-color={color} stop-opacity="1" />
                    <stop offset="100%" stop-color={color} stop-opacity="0" />
                </linearGradient>
            </defs>
            <path d={circuit_path(props.start, props.target)} fill="none" stroke="url(#beam-grad)" stroke-width="1" opacity="0.6">
                <animate attributeName="stroke-dasharray" from="0, 1000" to="1000, 0" dur="2s" repeatCount="indefinite" />
            </path>
            <path d={curve_path(props.start, props.target)} fill="none" stroke={color} stroke-width="0.5" stroke-opacity="0.4" stroke-dasharray="5,5" />
            <path d={offset_path(props.start, props.target)} fill="none" stroke="white" stroke-width="0.5" stroke-opacity="0.2">
                <animate attributeName="opacity" values="0;1;0" dur="1.5s" repeatCount="indefinite" />
            </path>
            <circle cx={sx.to_string()} cy={sy.to_string()} r="3" fill={color} />
            <circle cx={tx.to_string()} cy={ty.to_string()} r="2" fill="white" />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beams_run_from_node_to_target() {
        let s = (100.0, 200.0);
        let t = (640.0, 400.0);
        assert_eq!(circuit_path(s, t), "M 100,200 L 370,200 L 370,400 L 640,400");
        assert_eq!(curve_path(s, t), "M 100,200 Q 100,400 640,400");
        assert_eq!(offset_path(s, t), "M 100,200 L 100,300 L 640,300 L 640,400");
    }
}

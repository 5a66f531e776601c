use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_swipe::{Isolation, SwipeConfig, SwipeOptions, Transport};

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsPanelProps {
    pub config: SwipeConfig,
    pub on_change: Callback<SwipeConfig>,
    pub on_reset: Callback<()>,
}

fn input_number(e: &Event) -> Option<f64> {
    e.target_unchecked_into::<HtmlInputElement>().value().parse().ok()
}

#[function_component]
pub fn SettingsPanel(props: &SettingsPanelProps) -> Html {
    let cfg = props.config;

    // Zero/blank values fall back to the current threshold, same as JS options
    let sensitivity_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |e: Event| {
            let opts = SwipeOptions {
                sensitivity: input_number(&e),
                ..Default::default()
            };
            cb.emit(cfg.with_options(&opts));
        })
    };
    let time_out_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |e: Event| {
            let opts = SwipeOptions {
                time_out: input_number(&e),
                ..Default::default()
            };
            cb.emit(cfg.with_options(&opts));
        })
    };
    let pointer_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |_| {
            let transport = match cfg.transport {
                Transport::Touch => Transport::Pointer,
                Transport::Pointer => Transport::Touch,
            };
            cb.emit(SwipeConfig { transport, ..cfg });
        })
    };
    let shared_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |_| {
            let isolation = match cfg.isolation {
                Isolation::PerElement => Isolation::Shared,
                Isolation::Shared => Isolation::PerElement,
            };
            cb.emit(SwipeConfig { isolation, ..cfg });
        })
    };
    let dom_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |_| {
            cb.emit(SwipeConfig {
                emit_dom_events: !cfg.emit_dom_events,
                ..cfg
            })
        })
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let label_style = "display:flex; align-items:center; gap:8px; cursor:pointer;";
    html! {<div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; display:flex; flex-direction:column; gap:12px;">
        <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
        <label style={label_style}>
            <span style="flex:1;">{"Sensitivity (px)"}</span>
            <input type="number" min="1" value={cfg.sensitivity.to_string()} onchange={sensitivity_cb} style="width:80px;" />
        </label>
        <label style={label_style}>
            <span style="flex:1;">{"Time-out (ms)"}</span>
            <input type="number" min="1" value={cfg.time_out.to_string()} onchange={time_out_cb} style="width:80px;" />
        </label>
        <label style={label_style}>
            <input type="checkbox" checked={cfg.transport == Transport::Pointer} onclick={pointer_cb} />
            <span>{"Use pointer events"}</span>
        </label>
        <label style={label_style}>
            <input type="checkbox" checked={cfg.isolation == Isolation::Shared} onclick={shared_cb} />
            <span>{"Share one gesture slot across elements"}</span>
        </label>
        <label style={label_style}>
            <input type="checkbox" checked={cfg.emit_dom_events} onclick={dom_cb} />
            <span>{"Re-dispatch as DOM events"}</span>
        </label>
        <button onclick={reset_cb}>{"Reset to defaults"}</button>
    </div>}
}

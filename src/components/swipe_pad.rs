use web_sys::Element;
use yew::prelude::*;
use yew_swipe::{SWIPE, SwipeConfig, SwipeDetail, Tracker, Transport};

#[derive(Properties, PartialEq, Clone)]
pub struct SwipePadProps {
    pub config: SwipeConfig,
    pub last: Option<SwipeDetail>,
    pub on_swipe: Callback<SwipeDetail>,
}

/// Touch area with a tracker bound to it. The tracker is rebuilt whenever the
/// config changes and detached when the pad unmounts.
#[function_component(SwipePad)]
pub fn swipe_pad(props: &SwipePadProps) -> Html {
    let pad_ref = use_node_ref();

    {
        let pad_ref = pad_ref.clone();
        let on_swipe = props.on_swipe.clone();
        use_effect_with(props.config, move |cfg| {
            let tracker = Tracker::new(pad_ref.cast::<Element>(), *cfg);
            tracker.on(SWIPE, move |e| on_swipe.emit(e.detail));
            move || drop(tracker)
        });
    }

    // Pointer events need the browser's own panning disabled
    let touch_action = match props.config.transport {
        Transport::Touch => "pan-x pan-y",
        Transport::Pointer => "none",
    };
    let (arrow, caption) = match &props.last {
        Some(d) => (
            d.direction.arrow(),
            format!("{} · {:.0}px · {:.0}ms", d.direction.as_str(), d.distance, d.duration),
        ),
        None => ("·", "Swipe in here".to_string()),
    };

    html! {
        <div ref={pad_ref}
            style={format!("width:min(90vw, 420px); height:420px; background:#161b22; border:1px solid #30363d; border-radius:12px; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:10px; user-select:none; touch-action:{};", touch_action)}>
            <div style="font-size:96px; line-height:1; color:#58a6ff;">{ arrow }</div>
            <div style="font-size:14px; opacity:0.8; font-variant-numeric:tabular-nums;">{ caption }</div>
        </div>
    }
}

use crate::history::SwipeHistory;
use yew::prelude::*;
use yew_swipe::Direction;

#[derive(Properties, PartialEq, Clone)]
pub struct SwipeLogProps {
    pub history: SwipeHistory,
    pub on_clear: Callback<()>,
}

#[function_component]
pub fn SwipeLog(props: &SwipeLogProps) -> Html {
    let clear_cb = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let row_style = "display:flex; align-items:center; gap:8px; font-size:13px;";
    let value_style = "min-width:60px; text-align:right; font-variant-numeric:tabular-nums;";
    let h = &props.history;
    let tally = [Direction::Left, Direction::Right, Direction::Up, Direction::Down]
        .iter()
        .map(|d| format!("{} {}", d.arrow(), h.count(*d)))
        .collect::<Vec<_>>()
        .join("  ");

    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:8px;">
        <div style="display:flex; justify-content:space-between; align-items:center;">
            <h3 style="margin:0; font-size:16px;">{ format!("Swipes ({})", h.total) }</h3>
            <button onclick={clear_cb} style="padding:2px 8px;">{"Clear"}</button>
        </div>
        <div style="font-size:12px; opacity:0.7;">{ tally }</div>
        { for h.entries.iter().map(|d| html! {
            <div style={row_style}>
                <span style="width:20px; text-align:center;">{ d.direction.arrow() }</span>
                <span style="flex:1;">{ d.direction.as_str() }</span>
                <span style={value_style}>{ format!("{:.0}px", d.distance) }</span>
                <span style={value_style}>{ format!("{:.0}ms", d.duration) }</span>
            </div>
        }) }
    </div>}
}

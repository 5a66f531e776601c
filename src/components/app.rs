use super::{settings_panel::SettingsPanel, swipe_log::SwipeLog, swipe_pad::SwipePad};
use crate::history::{HistoryAction, SwipeHistory};
use yew::prelude::*;
use yew_swipe::util::clog;
use yew_swipe::{SwipeConfig, SwipeDetail};

const CONFIG_KEY: &str = "swipe_config";

fn load_config() -> Option<SwipeConfig> {
    let store = web_sys::window()?.local_storage().ok()??;
    let raw = store.get_item(CONFIG_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(cfg) => Some(cfg),
        Err(err) => {
            clog(&format!("ignoring saved config: {err}"));
            None
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(|| load_config().unwrap_or_default());
    let history = use_reducer(SwipeHistory::default);

    // Persist config changes
    {
        use_effect_with(*config, move |cfg| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(s) = serde_json::to_string(cfg) {
                        let _ = store.set_item(CONFIG_KEY, &s);
                    }
                }
            }
            || ()
        });
    }

    let on_swipe = {
        let dispatcher = history.dispatcher();
        Callback::from(move |detail: SwipeDetail| dispatcher.dispatch(HistoryAction::Record(detail)))
    };
    let on_config = {
        let config = config.clone();
        Callback::from(move |next: SwipeConfig| config.set(next))
    };
    let on_clear = {
        let dispatcher = history.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(HistoryAction::Clear))
    };
    let on_reset = {
        let config = config.clone();
        Callback::from(move |_| config.set(SwipeConfig::default()))
    };

    html! {
        <div style="display:flex; flex-wrap:wrap; gap:16px; padding:16px; align-items:flex-start;">
            <SwipePad config={*config} last={history.last().copied()} on_swipe={on_swipe} />
            <div style="display:flex; flex-direction:column; gap:16px; min-width:260px;">
                <SettingsPanel config={*config} on_change={on_config} on_reset={on_reset} />
                <SwipeLog history={(*history).clone()} on_clear={on_clear} />
            </div>
        </div>
    }
}

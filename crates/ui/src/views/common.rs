use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;
use crate::vm::{CountdownVm, ItemTileVm, SpeedPreset};

#[component]
pub fn BackButton(to: Route) -> Element {
    let navigator = use_navigator();
    rsx! {
        button {
            class: "btn btn-back",
            r#type: "button",
            "aria-label": "ត្រលប់ក្រោយ",
            onclick: move |_| {
                let _ = navigator.push(to.clone());
            },
            "‹"
        }
    }
}

/// Slow-to-fast slider in whole seconds.
#[component]
pub fn SpeedControl(
    label: String,
    unit: String,
    preset: SpeedPreset,
    seconds: u64,
    on_change: EventHandler<u64>,
) -> Element {
    rsx! {
        div { class: "speed-control",
            label { r#for: "speed-slider", class: "speed-label",
                "{label}: "
                span { class: "speed-value", "{seconds}" }
                " {unit}"
            }
            div { class: "speed-row",
                span { class: "speed-end", "យឺត" }
                input {
                    id: "speed-slider",
                    r#type: "range",
                    min: "{preset.min_secs}",
                    max: "{preset.max_secs}",
                    value: "{seconds}",
                    oninput: move |evt| on_change.call(preset.parse_input(&evt.value(), seconds)),
                }
                span { class: "speed-end", "លឿន" }
            }
        }
    }
}

#[component]
pub fn CountdownBar(countdown: CountdownVm) -> Element {
    let fill_class = if countdown.full {
        "countdown-fill countdown-fill--full"
    } else {
        "countdown-fill"
    };
    let style = if countdown.full {
        String::new()
    } else {
        format!("animation-duration: {}s;", countdown.seconds)
    };
    rsx! {
        div { class: "countdown",
            div { key: "{countdown.key}", class: fill_class, style: "{style}" }
        }
    }
}

#[component]
pub fn ItemTiles(tiles: Vec<ItemTileVm>) -> Element {
    rsx! {
        div { class: "tiles",
            for (index, tile) in tiles.iter().enumerate() {
                div { key: "{index}", class: tile.state.class(), "{tile.text}" }
            }
        }
    }
}

/// Celebration shown when a paced screen or the game ends.
#[component]
pub fn FinishedBanner(message: String, back: Route, children: Element) -> Element {
    rsx! {
        div { class: "finished",
            div { class: "finished-check", "✔" }
            h2 { class: "finished-title", "{message}" }
            {children}
            div { class: "finished-actions",
                BackLink { to: back }
            }
        }
    }
}

#[component]
fn BackLink(to: Route) -> Element {
    let navigator = use_navigator();
    rsx! {
        button {
            class: "btn btn-secondary btn-large",
            r#type: "button",
            onclick: move |_| {
                let _ = navigator.push(to.clone());
            },
            "ត្រលប់ក្រោយ"
        }
    }
}

use dioxus::prelude::*;

use akson_core::model::{Activity, LessonIndex};
use akson_core::pacing::PacingPhase;
use services::PacingDriver;

use crate::app::use_lesson;
use crate::routes::Route;
use crate::views::ViewState;
use crate::views::common::{BackButton, CountdownBar, FinishedBanner, ItemTiles, SpeedControl};
use crate::views::pacing::{use_pacing, use_pacing_driver};
use crate::vm::{SpeedPreset, map_countdown, map_item_tiles};

/// Syllable or word drill for one lesson.
#[component]
pub fn PracticeView(lesson: LessonIndex, activity: Activity) -> Element {
    let state = use_lesson(lesson);
    let back = Route::Activities { lesson };

    match state {
        ViewState::Idle | ViewState::Loading => rsx! {
            div { class: "page", p { class: "status", "Loading Fun Lessons..." } }
        },
        ViewState::Error(err) => rsx! {
            div { class: "page",
                BackButton { to: back }
                p { class: "status status--error", "{err.message()}" }
            }
        },
        ViewState::Ready(data) => {
            let items = data
                .practice_items(activity)
                .filter(|_| activity.is_item_practice())
                .map(<[String]>::to_vec)
                .unwrap_or_default();
            rsx! {
                PracticePlayer { items, title: activity.label().to_string(), back }
            }
        }
    }
}

#[component]
pub fn PracticePlayer(items: Vec<String>, title: String, back: Route) -> Element {
    match use_pacing_driver(items, SpeedPreset::PRACTICE) {
        Ok(driver) => rsx! { PracticeStage { driver, title, back } },
        Err(err) => rsx! {
            div { class: "page",
                BackButton { to: back }
                p { class: "status status--error", "{err.message()}" }
            }
        },
    }
}

#[component]
fn PracticeStage(driver: PacingDriver, title: String, back: Route) -> Element {
    let pacing = use_pacing(&driver, SpeedPreset::PRACTICE);
    let snapshot = pacing.snapshot();

    match snapshot.phase {
        PacingPhase::Idle => {
            let has_items = !snapshot.items.is_empty();
            let starter = pacing.clone();
            let mut speed = pacing.clone();
            rsx! {
                div { class: "page card intro",
                    BackButton { to: back }
                    h1 { class: "view-title", "អនុវត្តន៍ {title}" }
                    SpeedControl {
                        label: "ល្បឿនពាក្យ",
                        unit: "វិនាទី",
                        preset: pacing.preset(),
                        seconds: pacing.seconds(),
                        on_change: move |secs| speed.set_seconds(secs),
                    }
                    button {
                        class: "btn btn-primary btn-large",
                        r#type: "button",
                        disabled: !has_items,
                        onclick: move |_| starter.start(),
                        if has_items { "ចាប់ផ្តើម!" } else { "គ្មានអ្វីសម្រាប់អនុវត្តន៍" }
                    }
                }
            }
        }
        PacingPhase::Finished => rsx! {
            FinishedBanner { message: "អានចប់ហើយ! ពូកែណាស់!", back }
        },
        PacingPhase::Running => {
            let current = snapshot.current_item().unwrap_or_default().to_string();
            let tiles = map_item_tiles(&snapshot);
            let countdown = map_countdown(&snapshot);
            let skipper = pacing.clone();
            rsx! {
                div { class: "page stage",
                    div { class: "stage-top", BackButton { to: back } }
                    div { class: "stage-center",
                        div { key: "{snapshot.current_index}", class: "stage-item bounce-in", "{current}" }
                        button {
                            class: "btn btn-next",
                            r#type: "button",
                            "aria-label": "Next",
                            onclick: move |_| skipper.advance(),
                            "›"
                        }
                    }
                    ItemTiles { tiles }
                    CountdownBar { countdown }
                }
            }
        }
    }
}

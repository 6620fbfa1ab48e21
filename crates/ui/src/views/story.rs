use dioxus::prelude::*;

use akson_core::model::LessonIndex;
use akson_core::pacing::PacingPhase;
use services::PacingDriver;

use crate::app::use_lesson;
use crate::routes::Route;
use crate::views::ViewState;
use crate::views::common::{BackButton, CountdownBar, FinishedBanner, SpeedControl};
use crate::views::pacing::{use_pacing, use_pacing_driver};
use crate::vm::{SpeedPreset, TileState, lines_label, map_countdown, map_item_tiles};

/// Line-by-line reading of a lesson's story.
#[component]
pub fn StoryView(lesson: LessonIndex) -> Element {
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
        ViewState::Ready(data) => rsx! {
            StoryPlayer {
                title: data.story().title().to_string(),
                lines: data.story().lines().to_vec(),
                back,
            }
        },
    }
}

#[component]
fn StoryPlayer(title: String, lines: Vec<String>, back: Route) -> Element {
    match use_pacing_driver(lines, SpeedPreset::STORY) {
        Ok(driver) => rsx! { StoryStage { driver, title, back } },
        Err(err) => rsx! {
            div { class: "page",
                BackButton { to: back }
                p { class: "status status--error", "{err.message()}" }
            }
        },
    }
}

#[component]
fn StoryStage(driver: PacingDriver, title: String, back: Route) -> Element {
    let pacing = use_pacing(&driver, SpeedPreset::STORY);
    let snapshot = pacing.snapshot();

    if snapshot.phase == PacingPhase::Idle {
        let has_lines = !snapshot.items.is_empty();
        let starter = pacing.clone();
        let mut speed = pacing.clone();
        return rsx! {
            div { class: "page card intro",
                BackButton { to: back }
                h1 { class: "view-title", "{title}" }
                h2 { class: "view-subtitle", "ការអានអត្ថបទខ្លី" }
                SpeedControl {
                    label: "ល្បឿន",
                    unit: "វិនាទីក្នុងមួយជួរ",
                    preset: pacing.preset(),
                    seconds: pacing.seconds(),
                    on_change: move |secs| speed.set_seconds(secs),
                }
                button {
                    class: "btn btn-primary btn-large",
                    r#type: "button",
                    disabled: !has_lines,
                    onclick: move |_| starter.start(),
                    if has_lines { "ចាប់ផ្តើមអាន!" } else { "គ្មានអត្ថបទ" }
                }
            }
        };
    }

    let finished = snapshot.is_finished();
    let current = snapshot.current_item().unwrap_or_default().to_string();
    let outline: Vec<(String, &'static str)> = map_item_tiles(&snapshot)
        .into_iter()
        .map(|line| {
            let class = match line.state {
                TileState::Current => "outline-line outline-line--current",
                TileState::Done if !finished => "outline-line outline-line--read",
                TileState::Done | TileState::Pending => "outline-line",
            };
            (line.text, class)
        })
        .collect();
    let countdown = map_countdown(&snapshot);
    let progress = lines_label(&snapshot);
    let skipper = pacing.clone();

    rsx! {
        div { class: "page stage story-stage",
            div { class: "stage-top", BackButton { to: back.clone() } }
            div { class: "story-body",
                main { class: "story-main",
                    if finished {
                        FinishedBanner { message: "អានចប់ហើយ! ពូកែណាស់!", back }
                    } else {
                        div { key: "{snapshot.current_index}", class: "story-line bounce-in", "{current}" }
                        button {
                            class: "btn btn-next",
                            r#type: "button",
                            "aria-label": "Next",
                            onclick: move |_| skipper.advance(),
                            "›"
                        }
                    }
                }
                aside { class: "story-outline",
                    h3 { class: "story-outline-title", "តារាងអត្ថបទខ្លី" }
                    for (index, (text, class)) in outline.into_iter().enumerate() {
                        p { key: "{index}", class, "{text}" }
                    }
                }
            }
            div { class: "stage-footer",
                CountdownBar { countdown }
                p { class: "progress-label", "{progress}" }
            }
        }
    }
}

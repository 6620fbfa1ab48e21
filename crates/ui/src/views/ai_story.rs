use dioxus::prelude::*;

use akson_core::model::{Lesson, LessonIndex};
use akson_core::pacing::PacingPhase;
use services::PacingDriver;

use crate::app::use_lesson;
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::common::{BackButton, CountdownBar, FinishedBanner, SpeedControl};
use crate::views::pacing::{use_pacing, use_pacing_driver};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{SpeedPreset, map_countdown, words_label};

/// A freshly generated story built from the lesson's vocabulary.
#[component]
pub fn AiStoryView(lesson: LessonIndex) -> Element {
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
            AiStoryPlayer { lesson: data, back }
        },
    }
}

#[component]
fn AiStoryPlayer(lesson: Lesson, back: Route) -> Element {
    match use_pacing_driver(Vec::new(), SpeedPreset::STORY) {
        Ok(driver) => rsx! { AiStoryStage { lesson, driver, back } },
        Err(err) => rsx! {
            div { class: "page",
                BackButton { to: back }
                p { class: "status status--error", "{err.message()}" }
            }
        },
    }
}

#[component]
fn AiStoryStage(lesson: Lesson, driver: PacingDriver, back: Route) -> Element {
    let ctx = use_context::<AppContext>();
    let pacing = use_pacing(&driver, SpeedPreset::STORY);

    let story = use_resource(move || {
        let stories = ctx.story_service();
        let lesson = lesson.clone();
        async move {
            stories
                .generate_for(&lesson)
                .await
                .map_err(ViewError::from)
        }
    });

    let loader = pacing.clone();
    use_effect(move || {
        if let Some(Ok(lines)) = story.value().read().as_ref() {
            loader.replace_items(lines.clone());
        }
    });

    let regenerate = move |_: MouseEvent| {
        let mut story = story;
        story.restart();
    };

    match view_state_from_resource(story) {
        ViewState::Idle | ViewState::Loading => rsx! {
            div { class: "page card ai-loading",
                div { class: "spinner" }
                h1 { class: "view-title", "AI is writing a story..." }
                p { class: "view-subtitle", "Please wait a moment!" }
            }
        },
        ViewState::Error(err) => rsx! {
            div { class: "page card ai-error",
                BackButton { to: back }
                h1 { class: "view-title status--error", "Oh no!" }
                p { "{err.message()}" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: regenerate,
                    "Try again"
                }
            }
        },
        ViewState::Ready(_) => {
            let snapshot = pacing.snapshot();
            match snapshot.phase {
                PacingPhase::Idle => {
                    let has_lines = !snapshot.items.is_empty();
                    let starter = pacing.clone();
                    let mut speed = pacing.clone();
                    rsx! {
                        div { class: "page card intro",
                            BackButton { to: back }
                            h1 { class: "view-title", "AI Story Time" }
                            h2 { class: "view-subtitle", "រឿងថ្មីសម្រាប់អ្នក!" }
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
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: regenerate,
                                "Generate new story"
                            }
                        }
                    }
                }
                PacingPhase::Finished => rsx! {
                    FinishedBanner { message: "អានចប់ហើយ! ពូកែណាស់!", back,
                        button {
                            class: "btn btn-primary btn-large",
                            r#type: "button",
                            onclick: regenerate,
                            "Generate new story"
                        }
                    }
                },
                PacingPhase::Running => {
                    let current = snapshot.current_item().unwrap_or_default().to_string();
                    let countdown = map_countdown(&snapshot);
                    let progress = words_label(&snapshot);
                    let skipper = pacing.clone();
                    rsx! {
                        div { class: "page stage",
                            div { class: "stage-top", BackButton { to: back } }
                            div { class: "stage-center",
                                div { key: "{snapshot.current_index}", class: "story-line bounce-in", "{current}" }
                                button {
                                    class: "btn btn-next",
                                    r#type: "button",
                                    "aria-label": "Next",
                                    onclick: move |_| skipper.advance(),
                                    "›"
                                }
                            }
                            div { class: "stage-footer",
                                CountdownBar { countdown }
                                p { class: "progress-label", "{progress}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

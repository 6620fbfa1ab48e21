use dioxus::prelude::*;
use dioxus_router::use_navigator;

use akson_core::model::{Activity, LessonIndex};

use crate::app::use_lesson;
use crate::routes::Route;
use crate::views::ViewState;
use crate::views::common::BackButton;
use crate::vm::{ActivityButtonVm, map_activity_buttons};

#[component]
pub fn ActivitySelectionView(lesson: LessonIndex) -> Element {
    let navigator = use_navigator();
    let state = use_lesson(lesson);

    rsx! {
        div { class: "page activities",
            header { class: "view-header",
                BackButton { to: Route::Lessons {} }
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "status", "Loading Fun Lessons..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "status status--error", "{err.message()}" }
                },
                ViewState::Ready(data) => rsx! {
                    h1 { class: "view-title", "{data.number()}" }
                    h2 { class: "view-subtitle", "{data.title()}" }
                    ActivityGrid {
                        buttons: map_activity_buttons(data.availability()),
                        on_select: move |activity: Activity| {
                            let _ = navigator.push(Route::for_activity(lesson, activity));
                        },
                    }
                },
            }
        }
    }
}

#[component]
pub fn ActivityGrid(buttons: Vec<ActivityButtonVm>, on_select: EventHandler<Activity>) -> Element {
    rsx! {
        div { class: "activity-grid",
            for item in buttons {
                button {
                    key: "{item.activity}",
                    class: "{item.class}",
                    r#type: "button",
                    disabled: !item.enabled,
                    onclick: move |_| on_select.call(item.activity),
                    span { class: "activity-label", "{item.label}" }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::app::use_lessons;
use crate::routes::Route;
use crate::views::ViewState;
use crate::views::common::BackButton;
use crate::vm::map_lesson_cards;

#[component]
pub fn LessonSelectionView() -> Element {
    let navigator = use_navigator();
    let lessons = use_lessons();

    rsx! {
        div { class: "page lessons",
            header { class: "view-header",
                BackButton { to: Route::Welcome {} }
                h1 { class: "view-title", "ជ្រើសរើសមេរៀន" }
            }
            match lessons {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "status", "Loading Fun Lessons..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "status status--error", "{err.message()}" }
                },
                ViewState::Ready(catalog) => {
                    let cards = map_lesson_cards(&catalog);
                    rsx! {
                        div { class: "lesson-grid",
                            for card in cards {
                                button {
                                    key: "{card.index}",
                                    class: "lesson-card",
                                    r#type: "button",
                                    onclick: move |_| {
                                        let _ = navigator.push(Route::Activities { lesson: card.index });
                                    },
                                    h2 { class: "lesson-number", "{card.number}" }
                                    p { class: "lesson-title", "{card.title}" }
                                    span { class: "lesson-page", "{card.page_label}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

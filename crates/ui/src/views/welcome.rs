use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::app::use_lessons;
use crate::routes::Route;
use crate::views::ViewState;

#[component]
pub fn WelcomeView() -> Element {
    let navigator = use_navigator();
    let lessons = use_lessons();
    let ready = matches!(lessons, ViewState::Ready(_));

    rsx! {
        div { class: "page welcome",
            h1 { class: "welcome-title", "តោះរៀនជាមួយប៉ាៗ" }
            p { class: "welcome-subtitle",
                "ត្រៀមខ្លួន​សម្រាប់​ការ​រៀន​អក្សរ​ខ្មែរ​ហើយ​ឬនៅ​ កូនប៉ាៗ?"
            }
            match lessons {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "status", "Loading Fun Lessons..." }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "status status--error",
                        h2 { "Oh no! Something went wrong." }
                        p { "{err.message()}" }
                    }
                },
                ViewState::Ready(_) => rsx! {},
            }
            button {
                class: "btn btn-primary btn-large",
                r#type: "button",
                disabled: !ready,
                onclick: move |_| {
                    let _ = navigator.push(Route::Lessons {});
                },
                "តោះចាប់ផ្តើម!"
            }
        }
    }
}

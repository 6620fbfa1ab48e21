use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::Router;

use akson_core::model::{Lesson, LessonCatalog, LessonIndex};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

/// The catalog load shared by every screen.
#[derive(Clone, Copy)]
pub struct LessonsResource(pub Resource<Result<Arc<LessonCatalog>, ViewError>>);

/// Start loading the catalog and expose it to descendants.
pub fn use_lessons_provider() -> LessonsResource {
    let ctx = use_context::<AppContext>();
    let resource = use_resource(move || {
        let lessons = ctx.lesson_service();
        async move {
            lessons
                .load_catalog()
                .await
                .map(Arc::new)
                .map_err(ViewError::from)
        }
    });
    use_context_provider(|| LessonsResource(resource))
}

/// Current state of the catalog load.
#[must_use]
pub fn use_lessons() -> ViewState<Arc<LessonCatalog>> {
    let LessonsResource(resource) = use_context::<LessonsResource>();
    view_state_from_resource(resource)
}

/// One lesson out of the loaded catalog.
#[must_use]
pub fn use_lesson(index: LessonIndex) -> ViewState<Lesson> {
    match use_lessons() {
        ViewState::Ready(catalog) => match catalog.get(index) {
            Ok(lesson) => ViewState::Ready(lesson.clone()),
            Err(err) => ViewState::Error(err.into()),
        },
        ViewState::Idle => ViewState::Idle,
        ViewState::Loading => ViewState::Loading,
        ViewState::Error(err) => ViewState::Error(err),
    }
}

#[component]
pub fn App() -> Element {
    use_lessons_provider();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "តោះរៀនជាមួយប៉ាៗ" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Oh no! Something went wrong." }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use akson_core::model::{Activity, LessonIndex};

use crate::views::{
    ActivitySelectionView, AiStoryView, LessonSelectionView, PracticeView, StoryView,
    WelcomeView, WordScrambleView,
};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", WelcomeView)] Welcome {},
        #[route("/lessons", LessonSelectionView)] Lessons {},
        #[route("/lessons/:lesson", ActivitySelectionView)] Activities { lesson: LessonIndex },
        #[route("/lessons/:lesson/practice/:activity", PracticeView)]
        Practice { lesson: LessonIndex, activity: Activity },
        #[route("/lessons/:lesson/story", StoryView)] Story { lesson: LessonIndex },
        #[route("/lessons/:lesson/ai-story", AiStoryView)] AiStory { lesson: LessonIndex },
        #[route("/lessons/:lesson/word-scramble", WordScrambleView)]
        WordScramble { lesson: LessonIndex },
}

impl Route {
    /// Screen an activity opens on.
    #[must_use]
    pub fn for_activity(lesson: LessonIndex, activity: Activity) -> Self {
        match activity {
            Activity::Syllables | Activity::Words => Route::Practice { lesson, activity },
            Activity::Story => Route::Story { lesson },
            Activity::WordScramble => Route::WordScramble { lesson },
            Activity::AiStory => Route::AiStory { lesson },
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        main { class: "app",
            Outlet::<Route> {}
        }
    }
}

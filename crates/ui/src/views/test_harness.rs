use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use akson_core::model::{Activity, Lesson, LessonData, LessonIndex, Story};
use services::{LessonService, StoryGenerator, StoryGeneratorError, StoryService, StoryVocabulary};
use storage::repository::{InMemoryRepository, LessonRepository};

use crate::app::use_lessons_provider;
use crate::context::{UiApp, build_app_context};
use crate::views::{
    ActivitySelectionView, AiStoryView, LessonSelectionView, PracticeView, StoryView,
    WelcomeView, WordScrambleView,
};

pub struct StubGenerator {
    pub enabled: bool,
    pub lines: Vec<String>,
}

#[async_trait]
impl StoryGenerator for StubGenerator {
    fn enabled(&self) -> bool {
        self.enabled
    }

    async fn generate(
        &self,
        _vocabulary: &StoryVocabulary,
    ) -> Result<Vec<String>, StoryGeneratorError> {
        if self.lines.is_empty() {
            Err(StoryGeneratorError::EmptyResponse)
        } else {
            Ok(self.lines.clone())
        }
    }
}

#[derive(Clone)]
struct TestApp {
    lesson_service: Arc<LessonService>,
    story_service: Arc<StoryService>,
}

impl UiApp for TestApp {
    fn lesson_service(&self) -> Arc<LessonService> {
        Arc::clone(&self.lesson_service)
    }

    fn story_service(&self) -> Arc<StoryService> {
        Arc::clone(&self.story_service)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Welcome,
    Lessons,
    Activities(usize),
    Practice(usize, Activity),
    Story(usize),
    AiStory(usize),
    WordScramble(usize),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_lessons_provider();
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Welcome => rsx! { WelcomeView {} },
        ViewKind::Lessons => rsx! { LessonSelectionView {} },
        ViewKind::Activities(index) => rsx! {
            ActivitySelectionView { lesson: LessonIndex::new(index) }
        },
        ViewKind::Practice(index, activity) => rsx! {
            PracticeView { lesson: LessonIndex::new(index), activity }
        },
        ViewKind::Story(index) => rsx! { StoryView { lesson: LessonIndex::new(index) } },
        ViewKind::AiStory(index) => rsx! { AiStoryView { lesson: LessonIndex::new(index) } },
        ViewKind::WordScramble(index) => rsx! {
            WordScrambleView { lesson: LessonIndex::new(index) }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then let pending resources settle.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

/// Two lessons: a full one, and one with syllables only.
pub fn sample_lessons() -> LessonData {
    LessonData {
        lessons: vec![
            Lesson::new(
                "មេរៀនទី ១",
                "ស្រៈ អា",
                12,
                strings(&["កា", "ខា", "គា"]),
                strings(&["ការ៉ុត", "តារា"]),
                Story::new("ឆ្មា និង ត្រី", strings(&["ឆ្មា ញ៉ាំ ត្រី", "ឆ្កែ រត់ លឿន"])),
            ),
            Lesson::new(
                "មេរៀនទី ២",
                "ស្រៈ ឥ",
                14,
                strings(&["កិ", "ខិ"]),
                Vec::new(),
                Story::default(),
            ),
        ],
    }
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_with(
        view,
        Arc::new(InMemoryRepository::with_lessons(sample_lessons())),
        StubGenerator {
            enabled: false,
            lines: Vec::new(),
        },
    )
}

pub fn setup_with(
    view: ViewKind,
    lessons: Arc<dyn LessonRepository>,
    generator: StubGenerator,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        lesson_service: Arc::new(LessonService::new(lessons)),
        story_service: Arc::new(StoryService::new(Arc::new(generator))),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom }
}

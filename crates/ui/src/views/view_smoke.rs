use std::sync::Arc;

use akson_core::model::Activity;
use storage::repository::InMemoryRepository;

use super::test_harness::{StubGenerator, ViewKind, sample_lessons, setup_view_harness, setup_with};

#[tokio::test(flavor = "current_thread")]
async fn welcome_view_shows_loading_then_start_button() {
    let mut harness = setup_view_harness(ViewKind::Welcome);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Loading Fun Lessons..."), "missing loading text in {html}");

    harness.settle().await;
    let html = harness.render();
    assert!(!html.contains("Loading Fun Lessons..."), "still loading in {html}");
    assert!(html.contains("តោះចាប់ផ្តើម!"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn welcome_view_reports_missing_lessons() {
    let mut harness = setup_with(
        ViewKind::Welcome,
        Arc::new(InMemoryRepository::new()),
        StubGenerator {
            enabled: false,
            lines: Vec::new(),
        },
    );
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Oh no! Something went wrong."), "missing error in {html}");
    assert!(html.contains("could not be loaded"), "missing message in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_selection_lists_every_lesson() {
    let mut harness = setup_view_harness(ViewKind::Lessons);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("ជ្រើសរើសមេរៀន"), "missing title in {html}");
    assert!(html.contains("មេរៀនទី ១"), "missing first lesson in {html}");
    assert!(html.contains("មេរៀនទី ២"), "missing second lesson in {html}");
    assert!(html.contains("ទំព័រ 14"), "missing page label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn activity_selection_disables_missing_content() {
    let mut harness = setup_view_harness(ViewKind::Activities(1));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("ស្រៈ ឥ"), "missing lesson title in {html}");
    assert!(html.contains("ការអានព្យាង្គ"), "missing syllables button in {html}");
    assert!(
        html.contains("activity-button--words activity-button--disabled"),
        "words should be disabled in {html}"
    );
    assert!(
        !html.contains("activity-button--syllables activity-button--disabled"),
        "syllables should be enabled in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_renders_intro() {
    let mut harness = setup_view_harness(ViewKind::Practice(0, Activity::Syllables));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("អនុវត្តន៍ ការអានព្យាង្គ"), "missing title in {html}");
    assert!(html.contains("ល្បឿនពាក្យ"), "missing speed control in {html}");
    assert!(html.contains("ចាប់ផ្តើម!"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_without_items_cannot_start() {
    let mut harness = setup_view_harness(ViewKind::Practice(1, Activity::Words));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("គ្មានអ្វីសម្រាប់អនុវត្តន៍"), "missing empty label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn story_view_renders_title_and_intro() {
    let mut harness = setup_view_harness(ViewKind::Story(0));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("ឆ្មា និង ត្រី"), "missing story title in {html}");
    assert!(html.contains("ចាប់ផ្តើមអាន!"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn story_view_reports_unknown_lesson() {
    let mut harness = setup_view_harness(ViewKind::Story(9));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("That lesson does not exist."), "missing error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn word_scramble_view_renders_intro() {
    let mut harness = setup_view_harness(ViewKind::WordScramble(0));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("ល្បែងរៀបពាក្យ"), "missing title in {html}");
    assert!(html.contains("ចាប់ផ្តើមលេង!"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn ai_story_view_explains_missing_key() {
    let mut harness = setup_view_harness(ViewKind::AiStory(0));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("API key is not configured"), "missing message in {html}");
    assert!(html.contains("Try again"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn ai_story_view_shows_intro_once_generated() {
    let mut harness = setup_with(
        ViewKind::AiStory(0),
        Arc::new(InMemoryRepository::with_lessons(sample_lessons())),
        StubGenerator {
            enabled: true,
            lines: vec!["កា ទៅ ផ្សារ".to_string(), "តារា ញ៉ាំ ការ៉ុត".to_string()],
        },
    );
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("AI Story Time"), "missing title in {html}");
    assert!(html.contains("ចាប់ផ្តើមអាន!"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn ai_story_intro_offers_a_fresh_story_before_reading() {
    let mut harness = setup_with(
        ViewKind::AiStory(0),
        Arc::new(InMemoryRepository::with_lessons(sample_lessons())),
        StubGenerator {
            enabled: true,
            lines: vec!["ឆ្មា ញ៉ាំ ត្រី".to_string()],
        },
    );
    harness.settle().await;
    let html = harness.render();
    let start = html.find("ចាប់ផ្តើមអាន!").expect("start button");
    let regenerate = html.find("Generate new story").expect("regenerate button");
    assert!(start < regenerate, "regenerate should follow start in {html}");
}

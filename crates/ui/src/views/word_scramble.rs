use dioxus::prelude::*;

use akson_core::model::{LessonIndex, TokenId};
use akson_core::scramble::{ScramblePhase, ScrambleSnapshot, Zone};
use services::ScrambleDriver;

use crate::app::use_lesson;
use crate::routes::Route;
use crate::views::ViewState;
use crate::views::common::{BackButton, FinishedBanner};
use crate::vm::{ScrambleBoardVm, TokenVm, final_score_label, map_scramble_board};

#[component]
pub fn WordScrambleView(lesson: LessonIndex) -> Element {
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
            WordScrambleGame { lines: data.story().lines().to_vec(), back }
        },
    }
}

#[component]
fn WordScrambleGame(lines: Vec<String>, back: Route) -> Element {
    let driver = use_hook(move || ScrambleDriver::from_story(&lines));
    let mut snapshot = use_signal(|| driver.snapshot());

    let listener = driver.clone();
    use_future(move || {
        let driver = listener.clone();
        async move {
            let mut updates = driver.subscribe();
            snapshot.set(updates.borrow_and_update().clone());
            while updates.changed().await.is_ok() {
                snapshot.set(updates.borrow_and_update().clone());
            }
        }
    });

    let stopper = driver.clone();
    use_drop(move || stopper.stop());

    let current: ScrambleSnapshot = snapshot();
    match current.phase {
        ScramblePhase::Intro => {
            let starter = driver.clone();
            let playable = current.score.total > 0;
            rsx! {
                div { class: "page card intro",
                    BackButton { to: back }
                    h1 { class: "view-title", "ល្បែងរៀបពាក្យ" }
                    p { class: "view-subtitle",
                        "សូមអូសពាក្យដើម្បីបង្កើតជាល្បះឱ្យបានត្រឹមត្រូវ។"
                    }
                    button {
                        class: "btn btn-accent btn-large",
                        r#type: "button",
                        disabled: !playable,
                        onclick: move |_| {
                            if let Err(err) = starter.start() {
                                tracing::warn!(error = %err, "word scramble could not start");
                            }
                        },
                        if playable { "ចាប់ផ្តើមលេង!" } else { "គ្មានល្បះសម្រាប់លេង" }
                    }
                }
            }
        }
        ScramblePhase::Finished => rsx! {
            FinishedBanner { message: "លេងចប់ហើយ! ពូកែណាស់!", back,
                p { class: "finished-score", "{final_score_label(&current)}" }
            }
        },
        ScramblePhase::Playing | ScramblePhase::Correct | ScramblePhase::Incorrect => {
            let mover = driver.clone();
            let resetter = driver.clone();
            rsx! {
                ScrambleBoard {
                    board: map_scramble_board(&current),
                    back,
                    on_move: move |(id, from, to): (TokenId, Zone, Zone)| {
                        if let Err(err) = mover.move_token(id, from, to) {
                            tracing::debug!(error = %err, "token move rejected");
                        }
                    },
                    on_reset: move |()| {
                        if let Err(err) = resetter.reset() {
                            tracing::debug!(error = %err, "reset rejected");
                        }
                    },
                }
            }
        }
    }
}

/// The play area: answer row, word bank and controls.
#[component]
pub fn ScrambleBoard(
    board: ScrambleBoardVm,
    back: Route,
    on_move: EventHandler<(TokenId, Zone, Zone)>,
    on_reset: EventHandler<()>,
) -> Element {
    let mut dragging = use_signal(|| None::<TokenVm>);
    let mut over_zone = use_signal(|| false);

    let mut drop_into = move |zone: Zone| {
        if let Some(token) = dragging.take() {
            if token.zone != zone {
                on_move.call((token.id, token.zone, zone));
            }
        }
    };

    let drop_zone_class = if over_zone() {
        format!("{} drop-zone--over", board.drop_zone_class)
    } else {
        board.drop_zone_class.to_string()
    };

    rsx! {
        div { class: "page scramble",
            header { class: "scramble-header",
                BackButton { to: back }
                div { class: "score-pill", "{board.score_label}" }
            }
            main { class: "scramble-main",
                div {
                    class: "{drop_zone_class}",
                    ondragover: move |evt| evt.prevent_default(),
                    ondragenter: move |_| over_zone.set(true),
                    ondragleave: move |_| over_zone.set(false),
                    ondrop: move |evt| {
                        evt.prevent_default();
                        over_zone.set(false);
                        drop_into(Zone::Answer);
                    },
                    if board.drop_zone.is_empty() {
                        p { class: "drop-hint", "អូសពាក្យមកទីនេះ" }
                    }
                    for token in board.drop_zone.clone() {
                        TokenButton {
                            key: "{token.id}",
                            token: token.clone(),
                            locked: board.locked,
                            on_pick: move |picked: TokenVm| dragging.set(Some(picked)),
                            on_move,
                        }
                    }
                    if board.phase == ScramblePhase::Correct {
                        div { class: "correct-mark bounce-in", "✅" }
                    }
                }
                div {
                    class: "word-bank",
                    ondragover: move |evt| evt.prevent_default(),
                    ondrop: move |evt| {
                        evt.prevent_default();
                        drop_into(Zone::Bank);
                    },
                    for token in board.word_bank.clone() {
                        TokenButton {
                            key: "{token.id}",
                            token: token.clone(),
                            locked: board.locked,
                            on_pick: move |picked: TokenVm| dragging.set(Some(picked)),
                            on_move,
                        }
                    }
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !board.can_reset,
                    onclick: move |_| on_reset.call(()),
                    "↻ រៀបចំឡើងវិញ"
                }
            }
            footer { class: "scramble-footer",
                p { class: "progress-label", "{board.sentence_label}" }
                div { class: "progress-track",
                    div {
                        class: "progress-fill",
                        style: "width: {board.progress_percent}%;",
                    }
                }
            }
        }
    }
}

/// A word tile; click sends it across, drag hands it to the board.
#[component]
fn TokenButton(
    token: TokenVm,
    locked: bool,
    on_pick: EventHandler<TokenVm>,
    on_move: EventHandler<(TokenId, Zone, Zone)>,
) -> Element {
    let class = match token.zone {
        Zone::Bank => "token token--bank",
        Zone::Answer => "token token--answer pop-in",
    };
    let picked = token.clone();
    let clicked = token.clone();
    rsx! {
        button {
            class,
            r#type: "button",
            disabled: locked,
            draggable: if locked { "false" } else { "true" },
            ondragstart: move |_| on_pick.call(picked.clone()),
            onclick: move |_| on_move.call((clicked.id, clicked.zone, clicked.destination())),
            "{token.word}"
        }
    }
}

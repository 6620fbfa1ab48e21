use std::time::Duration;

use akson_core::scramble::{MoveOutcome, ScrambleError, ScramblePhase, Zone, eligible_sentences};
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::ScrambleDriver;

const STORY: &[&str] = &["ឆ្មា ញ៉ាំ ត្រី", "ក", "ឆ្កែ រត់"];

fn driver() -> ScrambleDriver {
    let lines: Vec<String> = STORY.iter().map(|line| (*line).to_string()).collect();
    ScrambleDriver::with_rng(eligible_sentences(&lines), StdRng::seed_from_u64(11))
}

async fn wait_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

fn place_in_order(game: &ScrambleDriver) -> MoveOutcome {
    let sentence = game.current_sentence().unwrap();
    let mut outcome = MoveOutcome::Moved;
    for token in sentence.tokens() {
        outcome = game.move_token(token.id(), Zone::Bank, Zone::Answer).unwrap();
    }
    outcome
}

fn place_reversed(game: &ScrambleDriver) -> MoveOutcome {
    let sentence = game.current_sentence().unwrap();
    let mut outcome = MoveOutcome::Moved;
    for token in sentence.tokens().iter().rev() {
        outcome = game.move_token(token.id(), Zone::Bank, Zone::Answer).unwrap();
    }
    outcome
}

#[tokio::test(start_paused = true)]
async fn solved_sentence_moves_on_after_feedback() {
    let game = driver();
    game.start().unwrap();
    assert_eq!(game.snapshot().score.total, 2);

    assert!(matches!(place_in_order(&game), MoveOutcome::Solved(_)));
    let snapshot = game.snapshot();
    assert_eq!(snapshot.phase, ScramblePhase::Correct);
    assert_eq!(snapshot.score.solved, 1);

    wait_ms(1_990).await;
    assert_eq!(game.snapshot().phase, ScramblePhase::Correct);

    wait_ms(20).await;
    let snapshot = game.snapshot();
    assert_eq!(snapshot.phase, ScramblePhase::Playing);
    assert_eq!(snapshot.sentence_index, 1);
    assert_eq!(snapshot.word_bank.len(), 2);
    assert!(snapshot.drop_zone.is_empty());
}

#[tokio::test(start_paused = true)]
async fn last_solved_sentence_finishes_the_game() {
    let game = driver();
    game.start().unwrap();

    place_in_order(&game);
    wait_ms(2_010).await;
    place_in_order(&game);
    wait_ms(2_010).await;

    let snapshot = game.snapshot();
    assert_eq!(snapshot.phase, ScramblePhase::Finished);
    assert_eq!(snapshot.score.solved, 2);
    assert_eq!(snapshot.score.total, 2);
}

#[tokio::test(start_paused = true)]
async fn wrong_order_shakes_then_resumes_with_board_intact() {
    let game = driver();
    game.start().unwrap();

    assert!(matches!(place_reversed(&game), MoveOutcome::Mismatch(_)));
    let judged = game.snapshot();
    assert_eq!(judged.phase, ScramblePhase::Incorrect);

    let token = judged.drop_zone[0].id();
    assert_eq!(
        game.move_token(token, Zone::Answer, Zone::Bank).unwrap_err(),
        ScrambleError::NotPlaying
    );

    wait_ms(1_010).await;
    let resumed = game.snapshot();
    assert_eq!(resumed.phase, ScramblePhase::Playing);
    assert_eq!(resumed.drop_zone, judged.drop_zone);
    assert_eq!(resumed.score.solved, 0);

    // Pulling a token back lets the child try again.
    game.move_token(token, Zone::Answer, Zone::Bank).unwrap();
    assert_eq!(game.snapshot().word_bank.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn reset_during_shake_cancels_the_pending_resume() {
    let game = driver();
    game.start().unwrap();
    place_reversed(&game);

    game.reset().unwrap();
    let reset = game.snapshot();
    assert_eq!(reset.phase, ScramblePhase::Playing);
    assert!(reset.drop_zone.is_empty());
    assert_eq!(reset.word_bank.len(), 3);

    wait_ms(5_000).await;
    assert_eq!(game.snapshot(), reset);
}

#[tokio::test(start_paused = true)]
async fn stop_drops_pending_feedback() {
    let game = driver();
    game.start().unwrap();
    place_in_order(&game);
    game.stop();

    wait_ms(5_000).await;
    let snapshot = game.snapshot();
    assert_eq!(snapshot.phase, ScramblePhase::Correct);
    assert_eq!(snapshot.sentence_index, 0);
}

#[tokio::test(start_paused = true)]
async fn story_without_eligible_lines_cannot_start() {
    let game = ScrambleDriver::from_story(&["ក".to_string(), String::new()]);
    assert_eq!(game.start().unwrap_err(), ScrambleError::NoEligibleSentences);
    assert_eq!(game.snapshot().phase, ScramblePhase::Intro);
}

#[tokio::test(start_paused = true)]
async fn subscribers_see_feedback_expiry() {
    let game = driver();
    let mut updates = game.subscribe();
    game.start().unwrap();
    place_in_order(&game);
    updates.borrow_and_update();

    updates.changed().await.unwrap();
    let snapshot = updates.borrow_and_update().clone();
    assert_eq!(snapshot.phase, ScramblePhase::Playing);
    assert_eq!(snapshot.sentence_index, 1);
}

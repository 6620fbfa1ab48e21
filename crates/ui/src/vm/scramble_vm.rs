use akson_core::model::TokenId;
use akson_core::scramble::{ScramblePhase, ScrambleSnapshot, Token, Zone};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenVm {
    pub id: TokenId,
    pub word: String,
    pub zone: Zone,
}

impl TokenVm {
    /// Where a click sends this token.
    #[must_use]
    pub fn destination(&self) -> Zone {
        match self.zone {
            Zone::Bank => Zone::Answer,
            Zone::Answer => Zone::Bank,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrambleBoardVm {
    pub phase: ScramblePhase,
    pub drop_zone: Vec<TokenVm>,
    pub word_bank: Vec<TokenVm>,
    pub drop_zone_class: &'static str,
    pub score_label: String,
    pub sentence_label: String,
    pub progress_percent: usize,
    pub can_reset: bool,
    /// Tokens stay put while feedback is showing.
    pub locked: bool,
}

#[must_use]
pub fn map_scramble_board(snapshot: &ScrambleSnapshot) -> ScrambleBoardVm {
    ScrambleBoardVm {
        phase: snapshot.phase,
        drop_zone: map_tokens(&snapshot.drop_zone, Zone::Answer),
        word_bank: map_tokens(&snapshot.word_bank, Zone::Bank),
        drop_zone_class: drop_zone_class(snapshot.phase),
        score_label: format!("ពិន្ទុ: {}", snapshot.score.solved),
        sentence_label: sentence_label(snapshot),
        progress_percent: progress_percent(snapshot),
        can_reset: matches!(
            snapshot.phase,
            ScramblePhase::Playing | ScramblePhase::Incorrect
        ),
        locked: snapshot.phase.is_transient(),
    }
}

fn map_tokens(tokens: &[Token], zone: Zone) -> Vec<TokenVm> {
    tokens
        .iter()
        .map(|token| TokenVm {
            id: token.id(),
            word: token.word().to_string(),
            zone,
        })
        .collect()
}

#[must_use]
pub fn drop_zone_class(phase: ScramblePhase) -> &'static str {
    match phase {
        ScramblePhase::Correct => "drop-zone drop-zone--correct",
        ScramblePhase::Incorrect => "drop-zone drop-zone--incorrect",
        ScramblePhase::Intro | ScramblePhase::Playing | ScramblePhase::Finished => "drop-zone",
    }
}

/// "ល្បះ: n / total", never past the last sentence.
#[must_use]
pub fn sentence_label(snapshot: &ScrambleSnapshot) -> String {
    let total = snapshot.score.total;
    let current = (snapshot.sentence_index + 1).min(total);
    format!("ល្បះ: {current} / {total}")
}

/// Share of sentences already behind the child, 0 to 100.
#[must_use]
pub fn progress_percent(snapshot: &ScrambleSnapshot) -> usize {
    let total = snapshot.score.total;
    if total == 0 {
        return 0;
    }
    (snapshot.sentence_index.min(total) * 100) / total
}

/// "អ្នកបាន: solved / total ពិន្ទុ"
#[must_use]
pub fn final_score_label(snapshot: &ScrambleSnapshot) -> String {
    format!(
        "អ្នកបាន: {} / {} ពិន្ទុ",
        snapshot.score.solved, snapshot.score.total
    )
}

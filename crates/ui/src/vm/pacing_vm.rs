use std::time::Duration;

use akson_core::pacing::{PacingPhase, PacingSnapshot};

/// Speed slider bounds for one kind of paced screen, in whole seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpeedPreset {
    pub default_secs: u64,
    pub min_secs: u64,
    pub max_secs: u64,
}

impl SpeedPreset {
    /// Syllable and word drills.
    pub const PRACTICE: Self = Self {
        default_secs: 3,
        min_secs: 2,
        max_secs: 20,
    };

    /// Story reading, stock or generated.
    pub const STORY: Self = Self {
        default_secs: 5,
        min_secs: 2,
        max_secs: 30,
    };

    #[must_use]
    pub fn clamp(self, secs: u64) -> u64 {
        secs.clamp(self.min_secs, self.max_secs)
    }

    #[must_use]
    pub fn interval(self, secs: u64) -> Duration {
        Duration::from_secs(self.clamp(secs))
    }

    #[must_use]
    pub fn default_interval(self) -> Duration {
        self.interval(self.default_secs)
    }

    /// Parse slider input; anything unparsable keeps `current`.
    #[must_use]
    pub fn parse_input(self, raw: &str, current: u64) -> u64 {
        raw.trim()
            .parse::<u64>()
            .map_or(current, |secs| self.clamp(secs))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileState {
    Done,
    Current,
    Pending,
}

impl TileState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            TileState::Done => "tile tile--done",
            TileState::Current => "tile tile--current",
            TileState::Pending => "tile tile--pending",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemTileVm {
    pub text: String,
    pub state: TileState,
}

/// One tile per item, marking what has been shown.
#[must_use]
pub fn map_item_tiles(snapshot: &PacingSnapshot) -> Vec<ItemTileVm> {
    snapshot
        .items
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let state = match snapshot.phase {
                PacingPhase::Idle => TileState::Pending,
                PacingPhase::Finished => TileState::Done,
                PacingPhase::Running if index < snapshot.current_index => TileState::Done,
                PacingPhase::Running if index == snapshot.current_index => TileState::Current,
                PacingPhase::Running => TileState::Pending,
            };
            ItemTileVm {
                text: text.clone(),
                state,
            }
        })
        .collect()
}

/// "បន្ទាត់: n / total"
#[must_use]
pub fn lines_label(snapshot: &PacingSnapshot) -> String {
    let progress = snapshot.items_progress;
    format!("បន្ទាត់: {} / {}", progress.done, progress.total)
}

/// "ពាក្យ: read / total"
#[must_use]
pub fn words_label(snapshot: &PacingSnapshot) -> String {
    let progress = snapshot.words_progress;
    format!("ពាក្យ: {} / {}", progress.done, progress.total)
}

/// The countdown strip under a paced screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountdownVm {
    /// Changes on every advance so the animation restarts.
    pub key: String,
    pub seconds: u64,
    pub full: bool,
}

#[must_use]
pub fn map_countdown(snapshot: &PacingSnapshot) -> CountdownVm {
    CountdownVm {
        key: format!("countdown-{}", snapshot.epoch.value()),
        seconds: snapshot.interval.as_secs().max(1),
        full: snapshot.is_finished(),
    }
}

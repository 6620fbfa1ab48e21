mod activity_selection;
mod ai_story;
mod common;
mod lesson_selection;
mod pacing;
mod practice;
mod state;
mod story;
mod welcome;
mod word_scramble;

pub use activity_selection::{ActivityGrid, ActivitySelectionView};
pub use ai_story::AiStoryView;
pub use common::{BackButton, CountdownBar, FinishedBanner, ItemTiles, SpeedControl};
pub use lesson_selection::LessonSelectionView;
pub use practice::{PracticePlayer, PracticeView};
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use story::StoryView;
pub use welcome::WelcomeView;
pub use word_scramble::{ScrambleBoard, WordScrambleView};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

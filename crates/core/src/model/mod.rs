pub mod activity;
mod ids;
mod lesson;

pub use activity::{Activity, ActivityAvailability, UnknownActivity};
pub use ids::{LessonIndex, ParseIdError, TokenId};
pub use lesson::{Lesson, LessonCatalog, LessonData, LessonError, Story};

mod activity_vm;
mod pacing_vm;
mod scramble_vm;

pub use activity_vm::{ActivityButtonVm, LessonCardVm, map_activity_buttons, map_lesson_cards};
pub use pacing_vm::{
    CountdownVm, ItemTileVm, SpeedPreset, TileState, lines_label, map_countdown, map_item_tiles,
    words_label,
};
pub use scramble_vm::{
    ScrambleBoardVm, TokenVm, drop_zone_class, final_score_label, map_scramble_board,
    progress_percent, sentence_label,
};

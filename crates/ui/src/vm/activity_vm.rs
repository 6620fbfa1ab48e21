use akson_core::model::{Activity, ActivityAvailability, LessonCatalog, LessonIndex};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityButtonVm {
    pub activity: Activity,
    pub label: &'static str,
    pub enabled: bool,
    pub class: String,
}

#[must_use]
pub fn map_activity_buttons(availability: ActivityAvailability) -> Vec<ActivityButtonVm> {
    Activity::ALL
        .iter()
        .map(|&activity| {
            let enabled = availability.allows(activity);
            let mut class = format!("activity-button activity-button--{}", activity.slug());
            if !enabled {
                class.push_str(" activity-button--disabled");
            }
            ActivityButtonVm {
                activity,
                label: activity.label(),
                enabled,
                class,
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonCardVm {
    pub index: LessonIndex,
    pub number: String,
    pub title: String,
    pub page_label: String,
}

#[must_use]
pub fn map_lesson_cards(catalog: &LessonCatalog) -> Vec<LessonCardVm> {
    catalog
        .iter()
        .map(|(index, lesson)| LessonCardVm {
            index,
            number: lesson.number().to_string(),
            title: lesson.title().to_string(),
            page_label: format!("ទំព័រ {}", lesson.source_page()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use akson_core::model::{Lesson, LessonData, Story};

    use super::*;

    #[test]
    fn buttons_follow_availability() {
        let availability = ActivityAvailability {
            syllables: true,
            words: false,
            story: true,
            word_scramble: false,
            ai_story: true,
        };
        let buttons = map_activity_buttons(availability);
        assert_eq!(buttons.len(), 5);
        assert!(buttons[0].enabled);
        assert!(!buttons[1].enabled);
        assert!(buttons[1].class.ends_with("activity-button--disabled"));
        assert_eq!(buttons[3].activity, Activity::WordScramble);
        assert_eq!(buttons[4].label, "AI Story Time");
    }

    #[test]
    fn lesson_cards_keep_catalog_order() {
        let catalog = LessonCatalog::new(LessonData {
            lessons: vec![
                Lesson::new("មេរៀនទី ១", "ស្រៈ អា", 3, Vec::new(), Vec::new(), Story::default()),
                Lesson::new("មេរៀនទី ២", "ស្រៈ ឥ", 5, Vec::new(), Vec::new(), Story::default()),
            ],
        })
        .unwrap();

        let cards = map_lesson_cards(&catalog);
        assert_eq!(cards[1].index, LessonIndex::new(1));
        assert_eq!(cards[1].number, "មេរៀនទី ២");
        assert_eq!(cards[1].page_label, "ទំព័រ 5");
    }
}

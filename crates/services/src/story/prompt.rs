use akson_core::model::Lesson;

/// Persona sent as the system message of every story request.
pub const SYSTEM_INSTRUCTION: &str = "You are a storyteller for kids under 5 years old learning to read Khmer. \
You write very simple, happy, and short stories based ONLY on the provided vocabulary.";

/// Sampling temperature for story requests.
pub const TEMPERATURE: f32 = 0.8;

/// Vocabulary a generated story may draw on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryVocabulary {
    pub syllables: Vec<String>,
    pub words: Vec<String>,
    pub example_story: Vec<String>,
}

impl StoryVocabulary {
    #[must_use]
    pub fn from_lesson(lesson: &Lesson) -> Self {
        Self {
            syllables: lesson.syllables().to_vec(),
            words: lesson.words().to_vec(),
            example_story: lesson.story().lines().to_vec(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty() && self.words.is_empty() && self.example_story.is_empty()
    }
}

/// Build the user prompt, listing only the non-empty vocabulary groups.
#[must_use]
pub fn build_prompt(vocabulary: &StoryVocabulary) -> String {
    let mut parts = Vec::new();
    if !vocabulary.syllables.is_empty() {
        parts.push(format!(
            "- Syllables to use: {}",
            vocabulary.syllables.join(", ")
        ));
    }
    if !vocabulary.words.is_empty() {
        parts.push(format!("- Words to use: {}", vocabulary.words.join(", ")));
    }
    if !vocabulary.example_story.is_empty() {
        parts.push(format!(
            "- Example story for inspiration: \"{}\"",
            vocabulary.example_story.join(" ")
        ));
    }

    format!(
        "Please write a very short, new, and happy story (2-4 simple sentences) for a child learning Khmer.\n\
Each sentence must be on a new line.\n\
\n\
**Instructions:**\n\
1.  The story must be simple and easy to read.\n\
2.  You MUST primarily use vocabulary from the provided materials.\n\
3.  Do not use words that are not in the lists if possible.\n\
\n\
**Provided Vocabulary:**\n\
{}\n\
\n\
Generate the new story now.",
        parts.join("\n")
    )
}

/// Split generated text into display lines, dropping blank ones.
#[must_use]
pub fn parse_story_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn prompt_lists_only_present_groups() {
        let vocabulary = StoryVocabulary {
            syllables: strings(&["កា", "ខា"]),
            words: Vec::new(),
            example_story: strings(&["ឆ្មា ញ៉ាំ ត្រី", "ឆ្មា ដេក"]),
        };

        let prompt = build_prompt(&vocabulary);
        assert!(prompt.contains("- Syllables to use: កា, ខា"));
        assert!(!prompt.contains("Words to use"));
        assert!(prompt.contains("\"ឆ្មា ញ៉ាំ ត្រី ឆ្មា ដេក\""));
        assert!(prompt.ends_with("Generate the new story now."));
    }

    #[test]
    fn blank_lines_are_dropped() {
        let lines = parse_story_lines("ឆ្មា ដេក\n\n   \n  ឆ្កែ រត់ \r\n");
        assert_eq!(lines, strings(&["ឆ្មា ដេក", "ឆ្កែ រត់"]));
    }

    #[test]
    fn whitespace_only_text_has_no_lines() {
        assert!(parse_story_lines(" \n\t\n").is_empty());
    }

    #[test]
    fn vocabulary_is_empty_only_without_any_group() {
        assert!(StoryVocabulary::default().is_empty());
        let vocabulary = StoryVocabulary {
            words: strings(&["កាកា"]),
            ..StoryVocabulary::default()
        };
        assert!(!vocabulary.is_empty());
    }
}

// All LLM prompt templates for the Generation module.
// Placeholders `{title}` and `{topic}` are replaced before sending.

/// Lesson generation prompt.
pub const LESSON_PROMPT_TEMPLATE: &str = r#"Generate a structured lesson for the course "{title}" on the topic "{topic}". Include:
- A compelling lesson title
- A brief description
- 3 clear learning outcomes
- Key concepts
- A few engaging activities or examples"#;

/// Module breakdown prompt. Output is returned to the caller as-is.
pub const MODULES_PROMPT_TEMPLATE: &str = r#"Break down the course "{title}" on "{topic}" into 3-5 well-structured modules. For each module, include:
- Module Title
- A short overview (2-3 sentences)
- Prerequisites (if any)
- Difficulty level (Beginner/Intermediate/Advanced)
- Estimated time in minutes
Organize the modules in a logical sequence from easy to advanced. Return the output in readable format."#;

pub const DESCRIPTION_PROMPT_TEMPLATE: &str = r#"Write a concise but engaging description for a lesson titled "{title}" on the topic "{topic}". The description should be 2-3 sentences."#;

pub const KEY_CONCEPTS_PROMPT_TEMPLATE: &str = r#"List 4-6 key concepts for a lesson titled "{title}" on the topic "{topic}". Each concept should be clear and concise. Return only the list."#;

pub const ACTIVITIES_PROMPT_TEMPLATE: &str = r#"Create 1-2 engaging activities for a lesson titled "{title}" on the topic "{topic}". The activities should be practical and reinforce the lesson's main concepts."#;

/// Fills the `{title}` and `{topic}` placeholders.
pub fn render(template: &str, title: &str, topic: &str) -> String {
    template.replace("{title}", title).replace("{topic}", topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fills_placeholders() {
        let prompt = render(LESSON_PROMPT_TEMPLATE, "Botany 101", "Roots");
        assert!(prompt.contains(r#"course "Botany 101""#));
        assert!(prompt.contains(r#"topic "Roots""#));
        assert!(!prompt.contains("{title}"));
    }
}

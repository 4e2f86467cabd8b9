//! JD prompt assembly: embeds a formatted row block into the instruction template.

use crate::generation::prompts::{
    AI_EXPERIENCE_NOTE_EN, AI_EXPERIENCE_NOTE_JA, ENGLISH_REQUIREMENT_NOTE_EN,
    ENGLISH_REQUIREMENT_NOTE_JA, JD_PROMPT_TEMPLATE,
};

/// Fills the JD template. The submitted block goes in last so braces inside
/// form answers are never mistaken for placeholders.
pub fn build_jd_prompt(submitted_information: &str) -> String {
    JD_PROMPT_TEMPLATE
        .replace("{english_requirement_note_en}", ENGLISH_REQUIREMENT_NOTE_EN)
        .replace("{english_requirement_note_ja}", ENGLISH_REQUIREMENT_NOTE_JA)
        .replace("{ai_experience_note_en}", AI_EXPERIENCE_NOTE_EN)
        .replace("{ai_experience_note_ja}", AI_EXPERIENCE_NOTE_JA)
        .replace("{submitted_information}", submitted_information)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: &str = "職種タイトル / Job Title:\nAI Prompt Engineer";

    #[test]
    fn test_prompt_embeds_block_verbatim() {
        let prompt = build_jd_prompt(BLOCK);
        assert!(prompt.contains("The submitted information is below:"));
        assert!(prompt.ends_with(&format!("{BLOCK}\n")));
    }

    #[test]
    fn test_prompt_carries_both_boilerplate_appendices() {
        let prompt = build_jd_prompt(BLOCK);
        assert!(prompt.contains(ENGLISH_REQUIREMENT_NOTE_EN));
        assert!(prompt.contains(ENGLISH_REQUIREMENT_NOTE_JA));
        assert!(prompt.contains(AI_EXPERIENCE_NOTE_EN));
        assert!(prompt.contains(AI_EXPERIENCE_NOTE_JA));
    }

    #[test]
    fn test_prompt_keeps_bilingual_and_expansion_instructions() {
        let prompt = build_jd_prompt(BLOCK);
        assert!(prompt.contains("output two versions of the JD - one in Japanese and one in English"));
        assert!(prompt.contains("Please only output the section headers in that language"));
        assert!(prompt.contains("aim for 3-4 sentences"));
    }

    #[test]
    fn test_header_example_quotes_kept_verbatim() {
        let prompt = build_jd_prompt(BLOCK);
        assert!(prompt.contains("(Eg '募集背景 / Background of the Recruitment’)."));
    }

    #[test]
    fn test_no_placeholder_left_unfilled() {
        let prompt = build_jd_prompt(BLOCK);
        for placeholder in [
            "{english_requirement_note_en}",
            "{english_requirement_note_ja}",
            "{ai_experience_note_en}",
            "{ai_experience_note_ja}",
            "{submitted_information}",
        ] {
            assert!(!prompt.contains(placeholder), "{placeholder} left in prompt");
        }
    }

    #[test]
    fn test_braces_in_answers_are_not_expanded() {
        let prompt = build_jd_prompt("参考URL / Reference URL:\n{ai_experience_note_en}");
        assert!(prompt.ends_with("{ai_experience_note_en}\n"));
    }
}

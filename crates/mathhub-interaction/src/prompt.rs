//! Prompt and system-instruction builders for the tutor requests.

use mathhub_core::settings::Settings;

/// User-turn prompt for a formula explanation.
pub fn explanation_prompt(topic: &str, grade_level: u8) -> String {
    format!(
        "Explain the mathematical concept or formula: \"{topic}\" for a student in Class {grade_level}."
    )
}

/// System instruction accompanying every explanation request.
///
/// Embeds the target grade and depth, the ten required response keys and the
/// formatting rules the model must follow.
pub fn explanation_system_instruction(settings: &Settings) -> String {
    let grade = settings.grade_level;
    let depth = settings.explanation_depth;
    format!(
        "You are an expert Mathematics Formula Intelligence System for school students.\n\
         The current target student is in Grade/Class {grade}.\n\
         Explanation depth: {depth}.\n\
         \n\
         Provide a clean, structured JSON response with the following keys:\n\
         - formulaName: The common name.\n\
         - exactFormula: The mathematical expression in clear text format.\n\
         - intuitiveMeaning: A simple, logical explanation of what's happening.\n\
         - whenToUse: Contexts where this formula is the primary choice.\n\
         - whenNotToUse: Edge cases or similar concepts where it's inappropriate.\n\
         - commonMistake: The #1 error students make.\n\
         - solvedExample: An object with 'steps' (array of strings) and 'result' (string). Use simple numbers.\n\
         - trapQuestion: An object with 'question' and 'explanation' that highlights a misconception.\n\
         - memoryTrick: A visual analogy or mnemonic.\n\
         - relatedFormulas: Array of names of related concepts.\n\
         \n\
         RULES:\n\
         - Use simple, clear language appropriate for Grade {grade}.\n\
         - Focus on clarity and visual intuition.\n\
         - Do not copy textbook definitions.\n\
         - Strictly follow the JSON structure."
    )
}

/// User-turn prompt for the per-grade syllabus breakdown.
pub fn syllabus_prompt(grade_level: u8) -> String {
    format!("List the standard mathematics syllabus for Class {grade_level}.")
}

/// System instruction for the syllabus request.
pub fn syllabus_system_instruction(grade_level: u8) -> String {
    format!(
        "You are a school mathematics curriculum expert.\n\
         Break the standard Grade/Class {grade_level} mathematics syllabus into categories.\n\
         \n\
         Provide a clean, structured JSON response with a single key:\n\
         - categories: Array of objects, each with 'name' (the category name) and 'formulas' (array of 5-8 key formula or concept names).\n\
         \n\
         RULES:\n\
         - Cover the whole standard curriculum for Grade {grade_level}.\n\
         - Use short, recognizable formula names.\n\
         - Strictly follow the JSON structure."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathhub_core::settings::{ExplanationDepth, Settings};

    #[test]
    fn test_explanation_prompt_quotes_topic_and_grade() {
        let prompt = explanation_prompt("Pythagoras theorem", 8);
        assert!(prompt.contains("\"Pythagoras theorem\""));
        assert!(prompt.contains("Class 8"));
    }

    #[test]
    fn test_system_instruction_embeds_grade_and_depth() {
        let settings = Settings::default()
            .with_grade_level(11)
            .with_explanation_depth(ExplanationDepth::Comprehensive);
        let instruction = explanation_system_instruction(&settings);
        assert!(instruction.contains("Grade/Class 11"));
        assert!(instruction.contains("Explanation depth: comprehensive."));
        assert!(instruction.contains("Grade 11."));
    }

    #[test]
    fn test_system_instruction_lists_all_ten_keys() {
        let instruction = explanation_system_instruction(&Settings::default());
        for key in [
            "formulaName",
            "exactFormula",
            "intuitiveMeaning",
            "whenToUse",
            "whenNotToUse",
            "commonMistake",
            "solvedExample",
            "trapQuestion",
            "memoryTrick",
            "relatedFormulas",
        ] {
            assert!(instruction.contains(key), "missing {key}");
        }
    }

    #[test]
    fn test_syllabus_prompts_mention_grade() {
        assert!(syllabus_prompt(7).contains("Class 7"));
        let instruction = syllabus_system_instruction(12);
        assert!(instruction.contains("Grade/Class 12"));
        assert!(instruction.contains("categories"));
    }
}

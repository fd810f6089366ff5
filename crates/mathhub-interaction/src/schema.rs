//! Response schemas sent with each generateContent request.
//!
//! The upstream service is instructed to return a single JSON object
//! conforming exactly to these shapes; the parsed records live in
//! `mathhub_core::explanation` and `mathhub_core::syllabus`.

use once_cell::sync::Lazy;
use serde_json::{Value, json};

/// Schema for the structured formula explanation. All ten keys are required.
pub static EXPLANATION_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "OBJECT",
        "properties": {
            "formulaName": { "type": "STRING" },
            "exactFormula": { "type": "STRING" },
            "intuitiveMeaning": { "type": "STRING" },
            "whenToUse": { "type": "STRING" },
            "whenNotToUse": { "type": "STRING" },
            "commonMistake": { "type": "STRING" },
            "solvedExample": {
                "type": "OBJECT",
                "properties": {
                    "steps": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "result": { "type": "STRING" }
                },
                "required": ["steps", "result"]
            },
            "trapQuestion": {
                "type": "OBJECT",
                "properties": {
                    "question": { "type": "STRING" },
                    "explanation": { "type": "STRING" }
                },
                "required": ["question", "explanation"]
            },
            "memoryTrick": { "type": "STRING" },
            "relatedFormulas": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": [
            "formulaName", "exactFormula", "intuitiveMeaning", "whenToUse",
            "whenNotToUse", "commonMistake", "solvedExample", "trapQuestion",
            "memoryTrick", "relatedFormulas"
        ]
    })
});

/// Schema for the per-grade syllabus breakdown.
pub static SYLLABUS_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "OBJECT",
        "properties": {
            "categories": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "formulas": { "type": "ARRAY", "items": { "type": "STRING" } }
                    },
                    "required": ["name", "formulas"]
                }
            }
        },
        "required": ["categories"]
    })
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explanation_schema_requires_all_ten_keys() {
        let required = EXPLANATION_SCHEMA["required"].as_array().unwrap();
        assert_eq!(required.len(), 10);
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
            assert!(required.iter().any(|v| v == key), "missing {key}");
        }
    }

    #[test]
    fn test_nested_required_lists() {
        let example = &EXPLANATION_SCHEMA["properties"]["solvedExample"]["required"];
        assert_eq!(example.as_array().unwrap().len(), 2);

        let trap = &EXPLANATION_SCHEMA["properties"]["trapQuestion"]["required"];
        assert_eq!(trap.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_syllabus_schema_shape() {
        assert_eq!(SYLLABUS_SCHEMA["required"][0], "categories");
        let item_required =
            SYLLABUS_SCHEMA["properties"]["categories"]["items"]["required"].as_array();
        assert_eq!(item_required.unwrap().len(), 2);
    }
}

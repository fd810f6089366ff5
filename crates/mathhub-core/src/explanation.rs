//! Structured formula explanation returned by the tutor service.
//!
//! All fields are required; absence of any field in the upstream response is
//! a contract violation and fails deserialization. Wire names are camelCase
//! to match the schema sent with the request.

use serde::{Deserialize, Serialize};

/// One worked example, step by step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvedExample {
    /// Ordered solution steps.
    pub steps: Vec<String>,
    /// The final result.
    pub result: String,
}

/// A question designed around a common misconception.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrapQuestion {
    pub question: String,
    pub explanation: String,
}

/// An AI-generated structured explanation of one math formula for a given
/// grade and depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    /// The common name of the formula.
    pub formula_name: String,
    /// The mathematical expression in clear text format.
    pub exact_formula: String,
    /// A simple, logical explanation of what's happening.
    pub intuitive_meaning: String,
    /// Contexts where this formula is the primary choice.
    pub when_to_use: String,
    /// Edge cases or similar concepts where it's inappropriate.
    pub when_not_to_use: String,
    /// The #1 error students make.
    pub common_mistake: String,
    /// A worked example with simple numbers.
    pub solved_example: SolvedExample,
    /// A question highlighting a misconception.
    pub trap_question: TrapQuestion,
    /// A visual analogy or mnemonic.
    pub memory_trick: String,
    /// Names of related concepts.
    pub related_formulas: Vec<String>,
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Grammatical person of a subject, used to select the verb stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Person {
    First,
    FirstPlural,
    Second,
    Third,
}

/// Tense of the sentence. Present unless the matched verb's surface form
/// carries the past-tense marker or a time-marker word is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    #[default]
    Present,
    Past,
}

/// Dictionary entry for a subject pronoun.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectEntry {
    pub person: Person,
    /// Appended to the resolved verb stem during agreement.
    pub suffix: String,
}

/// Dictionary entry for a verb: fully inflected stems per tense and person.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerbEntry {
    pub present: HashMap<Person, String>,
    pub past: HashMap<Person, String>,
}

impl VerbEntry {
    pub fn stems(&self, tense: Tense) -> &HashMap<Person, String> {
        match tense {
            Tense::Present => &self.present,
            Tense::Past => &self.past,
        }
    }
}

/// Dictionary entry for an object. The payload is opaque; only key
/// membership matters.
pub type ObjectEntry = serde_json::Value;

/// Transient record of one correction request's classified tokens.
/// Created fresh per invocation and discarded after producing output.
#[derive(Debug, Clone, Serialize)]
pub struct IdentifiedComponents {
    pub subject: Option<String>,
    pub object: Option<String>,
    pub verb: Option<String>,
    pub time_word: Option<String>,
    pub tense: Tense,
    /// Fuzzy corrections applied, as (original, corrected) pairs in the
    /// order they were made.
    pub substitutions: Vec<(String, String)>,
    /// The input tokens with fuzzy corrections applied in place.
    pub tokens: Vec<String>,
}

/// Structured result of correcting one sentence.
#[derive(Debug, Clone, Serialize)]
pub struct CorrectionResponse {
    pub corrected: String,
    pub substitutions: Vec<(String, String)>,
    pub errors: Vec<String>,
}

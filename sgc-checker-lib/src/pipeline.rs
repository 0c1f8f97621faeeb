// Correction pipeline: tokenize, identify roles, reorder into canonical
// surface order, and substitute the agreement-resolved verb form.

use log::debug;

use crate::agreement;
use crate::dictionary::Dictionaries;
use crate::identify;
use crate::types::{CorrectionResponse, IdentifiedComponents};

/// Sentinel correction when no subject or verb could be identified.
pub const UNCORRECTABLE: &str = "Unable to correct sentence";

pub const NO_SUBJECT: &str = "No subject found in the sentence";
pub const NO_VERB: &str = "No verb found in the sentence";

/// Reorder identified role words into the canonical surface order: subject,
/// object, temporal adverb, verb. Missing slots are omitted, never padded.
pub fn reorder(components: &IdentifiedComponents) -> Vec<String> {
    let slots = [
        &components.subject,
        &components.object,
        &components.time_word,
        &components.verb,
    ];
    slots.into_iter().flatten().cloned().collect()
}

/// Correct a single sentence against the role dictionaries.
///
/// Tokenizes on whitespace (punctuation stays part of its token), identifies
/// roles, and validates that a subject and a verb were found — both checks
/// fire independently. With both present, the reordered words are joined
/// with the verb replaced by its agreed form; the verb is last by
/// construction, and an agreement failure leaves the unagreed form in place.
/// Stateless: every call builds its own transient components.
pub fn correct(sentence: &str, dicts: &Dictionaries) -> CorrectionResponse {
    let tokens: Vec<String> = sentence.split_whitespace().map(str::to_string).collect();
    let components = identify::identify_components(&tokens, dicts);

    let mut errors = Vec::new();
    if components.subject.is_none() {
        errors.push(NO_SUBJECT.to_string());
    }
    if components.verb.is_none() {
        errors.push(NO_VERB.to_string());
    }

    let corrected = match (&components.subject, &components.verb) {
        (Some(subject), Some(verb)) => {
            let mut ordered = reorder(&components);
            if let Some(agreed) = agreement::agree(verb, subject, components.tense, dicts) {
                if let Some(last) = ordered.last_mut() {
                    *last = agreed;
                }
            }
            ordered.join(" ")
        }
        _ => UNCORRECTABLE.to_string(),
    };

    debug!("corrected {sentence:?} -> {corrected:?}");
    CorrectionResponse {
        corrected,
        substitutions: components.substitutions,
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Person, SubjectEntry, Tense, VerbEntry};
    use std::collections::HashMap;

    fn dicts() -> Dictionaries {
        Dictionaries::from_parts(
            vec![(
                "මම".to_string(),
                SubjectEntry {
                    person: Person::First,
                    suffix: String::new(),
                },
            )],
            vec![("බත්".to_string(), serde_json::json!(true))],
            vec![(
                "කමි".to_string(),
                VerbEntry {
                    present: HashMap::from([(Person::First, "කන".to_string())]),
                    past: HashMap::from([(Person::First, "කෑ".to_string())]),
                },
            )],
        )
    }

    #[test]
    fn test_reorder_full() {
        let id = IdentifiedComponents {
            subject: Some("s".into()),
            object: Some("o".into()),
            verb: Some("v".into()),
            time_word: Some("t".into()),
            tense: Tense::Past,
            substitutions: vec![],
            tokens: vec![],
        };
        assert_eq!(reorder(&id), vec!["s", "o", "t", "v"]);
    }

    #[test]
    fn test_reorder_omits_missing_slots() {
        let id = IdentifiedComponents {
            subject: Some("s".into()),
            object: None,
            verb: Some("v".into()),
            time_word: None,
            tense: Tense::Present,
            substitutions: vec![],
            tokens: vec![],
        };
        assert_eq!(reorder(&id), vec!["s", "v"]);
    }

    #[test]
    fn test_correct_exact_sentence() {
        let d = dicts();
        let response = correct("මම බත් කමි", &d);
        assert_eq!(response.corrected, "මම බත් කන");
        assert!(response.substitutions.is_empty());
        assert!(response.errors.is_empty());
    }

    #[test]
    fn test_correct_misspelled_subject() {
        let d = dicts();
        let response = correct("මම් බත් කමි", &d);
        assert_eq!(response.corrected, "මම බත් කන");
        assert_eq!(
            response.substitutions,
            vec![("මම්".to_string(), "මම".to_string())]
        );
        assert!(response.errors.is_empty());
    }

    #[test]
    fn test_unrecognizable_sentence() {
        let d = dicts();
        let response = correct("xyzzy plugh", &d);
        assert_eq!(response.corrected, UNCORRECTABLE);
        assert_eq!(response.errors, vec![NO_SUBJECT, NO_VERB]);
    }

    #[test]
    fn test_empty_sentence() {
        let d = dicts();
        // Whitespace tokenization of an empty string yields zero tokens.
        let response = correct("", &d);
        assert_eq!(response.corrected, UNCORRECTABLE);
        assert_eq!(response.errors, vec![NO_SUBJECT, NO_VERB]);
    }

    #[test]
    fn test_missing_verb_only() {
        let d = dicts();
        let response = correct("මම බත්", &d);
        assert_eq!(response.corrected, UNCORRECTABLE);
        assert_eq!(response.errors, vec![NO_VERB]);
    }

    #[test]
    fn test_agreement_failure_keeps_verb() {
        // Verb has no first-person present stem, so agreement fails and the
        // matched verb form survives the join.
        let d = Dictionaries::from_parts(
            vec![(
                "මම".to_string(),
                SubjectEntry {
                    person: Person::First,
                    suffix: String::new(),
                },
            )],
            vec![],
            vec![(
                "කමි".to_string(),
                VerbEntry {
                    present: HashMap::new(),
                    past: HashMap::new(),
                },
            )],
        );
        let response = correct("කමි මම", &d);
        assert_eq!(response.corrected, "මම කමි");
        assert!(response.errors.is_empty());
    }

    #[test]
    fn test_time_word_ordering_and_past_agreement() {
        let d = dicts();
        let response = correct("මම ඊයෙ බත් කමි", &d);
        // subject, object, time word, then the past-agreed verb.
        assert_eq!(response.corrected, "මම බත් ඊයෙ කෑ");
        assert!(response.errors.is_empty());
    }
}

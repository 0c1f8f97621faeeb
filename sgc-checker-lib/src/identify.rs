// Two-pass role identification: exact dictionary membership first, then
// bounded fuzzy correction for whatever is left over.

use log::debug;

use crate::dictionary::Dictionaries;
use crate::types::{IdentifiedComponents, Tense};

/// Closed set of temporal adverbs. Any of these forces past tense.
pub const TIME_WORDS: &[&str] = &["පෙරෙදා", "ඊයෙ", "ඉස්සර"];

/// Vowel sign marking a past-tense verb surface form.
pub const PAST_MARKER: char = 'ා';

/// Assign each token of a sentence to at most one grammatical role.
///
/// Pass 1 takes exact dictionary members in token order, first matching
/// category wins per token (subject, object, verb, time marker), and a role
/// slot is never overwritten once filled. Pass 2 retries the remaining
/// tokens with fuzzy lookup in the fixed priority order object, subject,
/// verb — only into slots still empty. Exact membership is re-checked at the
/// start of pass 2 so an exact word can never be fuzzy-corrected into a
/// different role.
pub fn identify_components(tokens: &[String], dicts: &Dictionaries) -> IdentifiedComponents {
    let mut identified = IdentifiedComponents {
        subject: None,
        object: None,
        verb: None,
        time_word: None,
        tense: Tense::Present,
        substitutions: Vec::new(),
        tokens: tokens.to_vec(),
    };

    for token in tokens {
        if dicts.subjects.contains(token) {
            if identified.subject.is_none() {
                identified.subject = Some(token.clone());
            }
        } else if dicts.objects.contains(token) {
            if identified.object.is_none() {
                identified.object = Some(token.clone());
            }
        } else if dicts.verbs.contains(token) {
            if identified.verb.is_none() {
                identified.verb = Some(token.clone());
                if token.ends_with(PAST_MARKER) {
                    identified.tense = Tense::Past;
                }
            }
        } else if TIME_WORDS.contains(&token.as_str()) && identified.time_word.is_none() {
            identified.time_word = Some(token.clone());
            identified.tense = Tense::Past;
        }
    }

    for (index, token) in tokens.iter().enumerate() {
        if dicts.subjects.contains(token)
            || dicts.objects.contains(token)
            || dicts.verbs.contains(token)
            || TIME_WORDS.contains(&token.as_str())
        {
            continue;
        }

        // The object-first priority is deliberate: it reproduces the
        // upstream behavior, including the case where a misspelled subject
        // lands in an empty object slot.
        if identified.object.is_none() {
            let closest = dicts.objects.closest(token);
            if closest != token {
                identified.object = Some(closest.to_string());
                record_substitution(&mut identified, index, token, closest);
                continue;
            }
        }

        if identified.subject.is_none() {
            let closest = dicts.subjects.closest(token);
            if closest != token {
                identified.subject = Some(closest.to_string());
                record_substitution(&mut identified, index, token, closest);
                continue;
            }
        }

        if identified.verb.is_none() {
            let closest = dicts.verbs.closest(token);
            if closest != token {
                identified.verb = Some(closest.to_string());
                if closest.ends_with(PAST_MARKER) {
                    identified.tense = Tense::Past;
                }
                record_substitution(&mut identified, index, token, closest);
            }
        }
    }

    debug!(
        "identified subject={:?} object={:?} verb={:?} time={:?} tense={:?}",
        identified.subject,
        identified.object,
        identified.verb,
        identified.time_word,
        identified.tense
    );
    identified
}

fn record_substitution(
    identified: &mut IdentifiedComponents,
    index: usize,
    original: &str,
    corrected: &str,
) {
    identified
        .substitutions
        .push((original.to_string(), corrected.to_string()));
    identified.tokens[index] = corrected.to_string();
}

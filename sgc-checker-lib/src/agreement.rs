use crate::dictionary::Dictionaries;
use crate::types::Tense;

/// Resolve the inflected verb form for a subject and tense: the verb's stem
/// for the subject's grammatical person, with the subject's suffix appended.
///
/// Returns `None` when the verb or subject is not a dictionary key, or when
/// the verb has no stem for that person in the requested tense.
pub fn agree(verb: &str, subject: &str, tense: Tense, dicts: &Dictionaries) -> Option<String> {
    let verb_entry = dicts.verbs.get(verb)?;
    let subject_entry = dicts.subjects.get(subject)?;
    let stem = verb_entry.stems(tense).get(&subject_entry.person)?;
    Some(format!("{stem}{}", subject_entry.suffix))
}

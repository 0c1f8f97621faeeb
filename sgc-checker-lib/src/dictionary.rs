use std::collections::HashMap;

use serde::Deserialize;

use crate::distance::edit_distance;
use crate::types::{ObjectEntry, SubjectEntry, VerbEntry};

const EMBEDDED_JSON: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/dictionaries.json"));

/// Largest edit distance at which a fuzzy dictionary match is accepted.
pub const MAX_EDIT_DISTANCE: usize = 2;

/// An immutable role dictionary: canonical words mapped to entries, with a
/// stable iteration order (declaration order of the source data). The order
/// matters because fuzzy-match ties are broken by the first key encountered.
pub struct RoleDictionary<E> {
    entries: Vec<(String, E)>,
    index: HashMap<String, usize>,
}

impl<E> RoleDictionary<E> {
    /// Build a dictionary from (word, entry) pairs, preserving their order.
    /// A repeated word keeps its first entry.
    pub fn from_pairs(pairs: Vec<(String, E)>) -> Self {
        let mut entries: Vec<(String, E)> = Vec::with_capacity(pairs.len());
        let mut index = HashMap::with_capacity(pairs.len());
        for (word, entry) in pairs {
            if index.contains_key(&word) {
                continue;
            }
            index.insert(word.clone(), entries.len());
            entries.push((word, entry));
        }
        Self { entries, index }
    }

    pub fn get(&self, word: &str) -> Option<&E> {
        self.index.get(word).map(|&i| &self.entries[i].1)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &E)> {
        self.entries.iter().map(|(w, e)| (w.as_str(), e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the key nearest to `word` within [`MAX_EDIT_DISTANCE`].
    ///
    /// Exact keys short-circuit at cost zero. Otherwise every key is scanned
    /// and a candidate is accepted only if it strictly improves on the best
    /// distance so far, so ties go to the earlier-declared key. Returns
    /// `word` unchanged when no key qualifies (including the empty
    /// dictionary).
    pub fn closest<'a>(&'a self, word: &'a str) -> &'a str {
        if self.contains(word) {
            return word;
        }

        let mut best = word;
        let mut best_distance = usize::MAX;
        for (key, _) in &self.entries {
            let distance = edit_distance(word, key);
            if distance < best_distance && distance <= MAX_EDIT_DISTANCE {
                best_distance = distance;
                best = key;
            }
        }
        best
    }
}

#[derive(Deserialize)]
struct EmbeddedData {
    subjects: Vec<(String, SubjectEntry)>,
    objects: Vec<(String, ObjectEntry)>,
    verbs: Vec<(String, VerbEntry)>,
}

/// The three role dictionaries the pipeline runs against. Loaded once,
/// never mutated; safe to share across concurrent correction calls.
pub struct Dictionaries {
    pub subjects: RoleDictionary<SubjectEntry>,
    pub objects: RoleDictionary<ObjectEntry>,
    pub verbs: RoleDictionary<VerbEntry>,
}

impl Dictionaries {
    /// Load the dictionaries from compile-time embedded data.
    pub fn embedded() -> Self {
        let data: EmbeddedData =
            serde_json::from_slice(EMBEDDED_JSON).expect("embedded dictionary JSON is invalid");
        Self::from_parts(data.subjects, data.objects, data.verbs)
    }

    /// Build dictionaries from externally supplied (word, entry) pairs.
    pub fn from_parts(
        subjects: Vec<(String, SubjectEntry)>,
        objects: Vec<(String, ObjectEntry)>,
        verbs: Vec<(String, VerbEntry)>,
    ) -> Self {
        Self {
            subjects: RoleDictionary::from_pairs(subjects),
            objects: RoleDictionary::from_pairs(objects),
            verbs: RoleDictionary::from_pairs(verbs),
        }
    }
}

// Validates the role dictionary JSON files and embeds them at compile time.
//
// The data files are plain JSON objects (word → entry), but JSON object
// iteration order is implementation-defined, so each dictionary is re-emitted
// as an ordered list of (word, entry) pairs. The declaration order of the
// data files is frozen here and becomes the fuzzy-match tie-break order.

use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

const PERSONS: &[&str] = &["first", "firstPlural", "second", "third"];

fn main() {
    let data_dir = Path::new("../data");
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir).join("dictionaries.json");

    let subjects = load_object(&data_dir.join("subjects.json"));
    let objects = load_object(&data_dir.join("objects.json"));
    let verbs = load_object(&data_dir.join("verbs.json"));

    for (word, entry) in &subjects {
        validate_subject(word, entry);
    }
    for (word, entry) in &verbs {
        validate_verb(word, entry);
    }

    let data = serde_json::json!({
        "subjects": pairs(&subjects),
        "objects": pairs(&objects),
        "verbs": pairs(&verbs),
    });
    let json = serde_json::to_string(&data).expect("JSON serialization failed");
    fs::write(&out_path, json).expect("cannot write dictionaries.json");

    println!("cargo:rerun-if-changed=../data/subjects.json");
    println!("cargo:rerun-if-changed=../data/objects.json");
    println!("cargo:rerun-if-changed=../data/verbs.json");
    println!("cargo:rerun-if-changed=build.rs");
}

fn load_object(path: &Path) -> Map<String, Value> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    let value: Value = serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("invalid JSON in {}: {e}", path.display()));
    match value {
        Value::Object(map) => map,
        _ => panic!("{} must be a JSON object", path.display()),
    }
}

fn pairs(map: &Map<String, Value>) -> Vec<Value> {
    map.iter()
        .map(|(word, entry)| serde_json::json!([word, entry]))
        .collect()
}

fn validate_subject(word: &str, entry: &Value) {
    let person = entry
        .get("person")
        .and_then(Value::as_str)
        .unwrap_or_else(|| panic!("subject {word}: missing string field \"person\""));
    if !PERSONS.contains(&person) {
        panic!("subject {word}: unknown person {person:?}");
    }
    if entry.get("suffix").and_then(Value::as_str).is_none() {
        panic!("subject {word}: missing string field \"suffix\"");
    }
}

fn validate_verb(word: &str, entry: &Value) {
    for tense in ["present", "past"] {
        let stems = entry
            .get(tense)
            .and_then(Value::as_object)
            .unwrap_or_else(|| panic!("verb {word}: missing object field {tense:?}"));
        for (person, stem) in stems {
            if !PERSONS.contains(&person.as_str()) {
                panic!("verb {word}: unknown person {person:?} in {tense}");
            }
            if !stem.is_string() {
                panic!("verb {word}: stem for {person} in {tense} must be a string");
            }
        }
    }
}

// Output formatting for correction results.

use crate::types::CorrectionResponse;

/// Render a response as display text: the corrected sentence first, then one
/// `original → corrected` line per substitution, then any error messages.
pub fn to_display(response: &CorrectionResponse) -> String {
    let mut lines = vec![response.corrected.clone()];
    for (original, corrected) in &response.substitutions {
        lines.push(format!("{original} → {corrected}"));
    }
    for error in &response.errors {
        lines.push(error.clone());
    }
    lines.join("\n")
}

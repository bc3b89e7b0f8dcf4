//! CSV export of recorded observations.
//!
//! Pure serialization of the observation sequence for download; no
//! statistics are computed here.

use crate::observation::Observation;

/// Escape a CSV field (handle commas, quotes, newlines).
fn escape_field(field: &str) -> String {
    // If field contains comma, quote, or newline, wrap in quotes and escape quotes
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Serialize observations as CSV with an `id,group,value` header.
///
/// One row per observation, in insertion order. An empty snapshot yields
/// just the header line.
pub fn to_csv(observations: &[Observation]) -> String {
    let mut output = String::from("id,group,value\n");

    for obs in observations {
        output.push_str(&obs.id.to_string());
        output.push(',');
        output.push_str(&escape_field(obs.group.label()));
        output.push(',');
        output.push_str(&obs.value.to_string());
        output.push('\n');
    }

    output
}

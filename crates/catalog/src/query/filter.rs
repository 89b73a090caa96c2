//! Search filtering.

use std::borrow::Borrow;

use crate::types::{FieldValue, Record};

/// Keeps the records where any candidate field contains `term`.
///
/// Matching is a case-insensitive substring match on the trimmed term. The
/// candidate fields are `searchable_fields` when given, otherwise every text
/// field of the record. A blank term returns the input untouched.
pub fn filter<R: Borrow<Record>>(
    records: Vec<R>,
    term: &str,
    searchable_fields: &[String],
) -> Vec<R> {
    let term = term.trim();
    if term.is_empty() {
        return records;
    }
    let needle = term.to_lowercase();

    records
        .into_iter()
        .filter(|record| matches(record.borrow(), &needle, searchable_fields))
        .collect()
}

fn matches(record: &Record, needle: &str, searchable_fields: &[String]) -> bool {
    if searchable_fields.is_empty() {
        record
            .text_fields()
            .any(|field| field_contains(record.get(field), needle))
    } else {
        searchable_fields
            .iter()
            .any(|field| field_contains(record.get(field), needle))
    }
}

fn field_contains(value: Option<&FieldValue>, needle: &str) -> bool {
    match value {
        None | Some(FieldValue::Null) => false,
        Some(value) => value.to_string().to_lowercase().contains(needle),
    }
}

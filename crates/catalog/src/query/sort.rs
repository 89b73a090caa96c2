//! Field-aware, stable sorting.

use std::borrow::Borrow;
use std::cmp::Ordering;

use chrono::NaiveDateTime;
use icu_collator::{Collator, CollatorOptions, Strength};

use crate::types::{FieldValue, Record, SortDirection};

use super::date;

thread_local! {
    static COLLATOR: Option<Collator> = {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        Collator::try_new(&Default::default(), options).ok()
    };
}

/// How a column is compared, decided once per sort from its non-null values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    /// Every value is a number.
    Numeric,
    /// Every value is text on a date-valued field.
    Dated,
    /// Every value is text.
    Text,
    /// Anything else: values compare by string form.
    Mixed,
}

impl ColumnKind {
    fn of<'a>(values: impl Iterator<Item = &'a FieldValue>, dated: bool) -> Self {
        let mut numbers = false;
        let mut texts = false;
        for value in values {
            match value {
                FieldValue::Null => {}
                FieldValue::Number(_) => numbers = true,
                FieldValue::Text(_) => texts = true,
                FieldValue::Bool(_) => return ColumnKind::Mixed,
            }
        }
        match (numbers, texts) {
            (true, true) => ColumnKind::Mixed,
            (true, false) => ColumnKind::Numeric,
            (false, _) if dated => ColumnKind::Dated,
            (false, _) => ColumnKind::Text,
        }
    }
}

/// A per-record key. All keys of one sort come from the same [`ColumnKind`],
/// so comparing them is a total order.
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Missing,
    Number(f64),
    Date(NaiveDateTime),
    Text(String),
}

impl SortKey {
    fn new(value: Option<&FieldValue>, kind: ColumnKind) -> Self {
        let Some(value) = value.filter(|v| !v.is_null()) else {
            return SortKey::Missing;
        };
        match (kind, value) {
            (ColumnKind::Numeric, FieldValue::Number(n)) => {
                SortKey::Number(n.as_f64().unwrap_or(0.0))
            }
            (ColumnKind::Dated, FieldValue::Text(text)) => SortKey::Date(date::normalize(text)),
            (_, value) => SortKey::Text(value.to_string()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Missing => 0,
            SortKey::Number(_) => 1,
            SortKey::Date(_) => 2,
            SortKey::Text(_) => 3,
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => locale_compare(a, b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Sorts records by `field`.
///
/// The sort is stable: records that compare equal keep their input order in
/// both directions. An empty `field` returns the input untouched.
///
/// Missing or null values come first in ascending order. The remaining
/// values are compared according to the whole column:
/// - all numbers compare numerically
/// - all text on a date-valued field compares as dates
/// - all text compares with [`locale_compare`]
/// - a mix of types compares every value by string form
pub fn sort<R: Borrow<Record>>(records: Vec<R>, field: &str, direction: SortDirection) -> Vec<R> {
    if field.is_empty() {
        return records;
    }
    let kind = ColumnKind::of(
        records.iter().filter_map(|r| r.borrow().get(field)),
        date::is_date_field(field),
    );

    let mut keyed: Vec<(SortKey, R)> = records
        .into_iter()
        .map(|record| (SortKey::new(record.borrow().get(field), kind), record))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| direction.apply(a.compare(b)));
    keyed.into_iter().map(|(_, record)| record).collect()
}

/// Locale-aware string comparison using the root collation at tertiary
/// strength: accents and case break ties after base letters, lower-case
/// sorts before upper-case, and punctuation sorts before digits and letters.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| collator.as_ref().map(|c| c.compare(a, b)))
        .unwrap_or_else(|| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| b.cmp(a))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(records: &[Record]) -> Vec<String> {
        records
            .iter()
            .map(|r| r.get("name").map(ToString::to_string).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_empty_field_is_identity() {
        let records = vec![
            Record::new().with("name", "b"),
            Record::new().with("name", "a"),
        ];
        assert_eq!(sort(records.clone(), "", SortDirection::Ascending), records);
    }

    #[test]
    fn test_text_sort_is_case_insensitive() {
        let records = vec![
            Record::new().with("name", "charlie"),
            Record::new().with("name", "Bravo"),
            Record::new().with("name", "alpha"),
        ];
        let sorted = sort(records, "name", SortDirection::Ascending);
        assert_eq!(names(&sorted), vec!["alpha", "Bravo", "charlie"]);
    }

    #[test]
    fn test_numbers_sort_numerically() {
        let records = vec![
            Record::new().with("name", "ten").with("ram", 10),
            Record::new().with("name", "two").with("ram", 2),
            Record::new().with("name", "half").with("ram", 0.5),
        ];
        let sorted = sort(records, "ram", SortDirection::Ascending);
        assert_eq!(names(&sorted), vec!["half", "two", "ten"]);
    }

    #[test]
    fn test_nulls_first_ascending_last_descending() {
        let records = vec![
            Record::new().with("name", "b").with("owner", "Zed"),
            Record::new().with("name", "none").with("owner", FieldValue::Null),
            Record::new().with("name", "missing"),
            Record::new().with("name", "a").with("owner", "Amy"),
        ];

        let asc = sort(records.clone(), "owner", SortDirection::Ascending);
        assert_eq!(names(&asc), vec!["none", "missing", "a", "b"]);

        let desc = sort(records, "owner", SortDirection::Descending);
        assert_eq!(names(&desc), vec!["b", "a", "none", "missing"]);
    }

    #[test]
    fn test_stable_on_ties() {
        let records = vec![
            Record::new().with("name", "first").with("os", "Linux"),
            Record::new().with("name", "second").with("os", "Windows"),
            Record::new().with("name", "third").with("os", "linux"),
            Record::new().with("name", "fourth").with("os", "Windows"),
        ];
        let asc = sort(records.clone(), "os", SortDirection::Ascending);
        assert_eq!(names(&asc), vec!["third", "first", "second", "fourth"]);

        let desc = sort(records, "os", SortDirection::Descending);
        assert_eq!(names(&desc), vec!["second", "fourth", "first", "third"]);
    }

    #[test]
    fn test_descending_reverses_without_ties() {
        let records: Vec<Record> = ["delta", "alpha", "charlie", "bravo"]
            .into_iter()
            .map(|n| Record::new().with("name", n))
            .collect();
        let asc = sort(records.clone(), "name", SortDirection::Ascending);
        let mut desc = sort(records, "name", SortDirection::Descending);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_date_fields_mix_encodings() {
        let records = vec![
            Record::new().with("name", "local-pm").with("hireDate", "05/03/2024, 02:15 p.m."),
            Record::new().with("name", "bad").with("hireDate", "someday"),
            Record::new().with("name", "iso-next").with("hireDate", "2024-03-06T08:00:00.000Z"),
            Record::new().with("name", "iso-am").with("hireDate", "2024-03-05T10:00:00.000Z"),
        ];
        let sorted = sort(records, "hireDate", SortDirection::Ascending);
        assert_eq!(names(&sorted), vec!["bad", "iso-am", "local-pm", "iso-next"]);
    }

    #[test]
    fn test_date_strings_outside_allow_list_sort_as_text() {
        let records = vec![
            Record::new().with("name", "march").with("seen", "05/03/2024, 02:15 p.m."),
            Record::new().with("name", "jan-next-year").with("seen", "01/01/2025, 09:00 a.m."),
        ];
        let sorted = sort(records, "seen", SortDirection::Ascending);
        assert_eq!(names(&sorted), vec!["jan-next-year", "march"]);
    }

    #[test]
    fn test_mixed_types_compare_as_strings() {
        let records = vec![
            Record::new().with("name", "text").with("tag", "b"),
            Record::new().with("name", "number").with("tag", 10),
            Record::new().with("name", "flag").with("tag", true),
        ];
        let sorted = sort(records, "tag", SortDirection::Ascending);
        assert_eq!(names(&sorted), vec!["number", "text", "flag"]);
    }

    fn tags(records: &[Record]) -> Vec<String> {
        values_of(records, "tag")
    }

    fn values_of(records: &[Record], field: &str) -> Vec<String> {
        records
            .iter()
            .map(|r| r.get(field).map(ToString::to_string).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_mixed_numbers_and_text_in_a_large_column() {
        let values: [FieldValue; 3] = [9.into(), 10.into(), "5".into()];
        let records: Vec<Record> = (0..60)
            .map(|i| {
                Record::new()
                    .with("name", format!("r{i:02}"))
                    .with("tag", values[i % 3].clone())
            })
            .collect();

        let sorted = sort(records.clone(), "tag", SortDirection::Ascending);
        let expected: Vec<String> = ["10", "5", "9"]
            .iter()
            .flat_map(|t| std::iter::repeat_n(t.to_string(), 20))
            .collect();
        assert_eq!(tags(&sorted), expected);
        // Stable within each group.
        assert_eq!(names(&sorted[..2]), vec!["r01", "r04"]);

        let mut desc = sort(records, "tag", SortDirection::Descending);
        desc.reverse();
        assert_eq!(tags(&desc), expected);
    }

    #[test]
    fn test_numbers_and_numeric_strings_never_break_the_sort() {
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = move || {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            seed
        };

        for round in 0..40 {
            let len = 50 + (next() % 500) as usize;
            let records: Vec<Record> = (0..len)
                .map(|_| {
                    let n = (next() % 1000) as i64;
                    let tag: FieldValue = if next() % 2 == 0 {
                        n.into()
                    } else {
                        n.to_string().into()
                    };
                    Record::new().with("tag", tag)
                })
                .collect();

            let sorted = tags(&sort(records, "tag", SortDirection::Ascending));
            assert_eq!(sorted.len(), len, "round {round}");
            assert!(
                sorted
                    .windows(2)
                    .all(|w| locale_compare(&w[0], &w[1]) != Ordering::Greater),
                "round {round} is out of order"
            );
        }
    }

    #[test]
    fn test_large_numeric_column_sorts_numerically() {
        let records: Vec<Record> = (0..40)
            .rev()
            .map(|i| Record::new().with("name", format!("n{i}")).with("ram", i * 3))
            .collect();
        let sorted = sort(records, "ram", SortDirection::Ascending);
        assert_eq!(values_of(&sorted, "ram")[..4], ["0", "3", "6", "9"]);
    }

    #[test]
    fn test_locale_compare_accents_and_punctuation() {
        assert_eq!(locale_compare("Émile", "Zoe"), Ordering::Less);
        assert_eq!(locale_compare("éclair", "eclairs"), Ordering::Less);
        assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_compare("résumé", "resumes"), Ordering::Less);
        assert_eq!(locale_compare("a_b", "a1"), Ordering::Less);
        assert_eq!(locale_compare("co-op", "coop"), Ordering::Less);
    }

    #[test]
    fn test_accented_names_sort_with_their_base_letter() {
        let records: Vec<Record> = ["Zoe", "Émile", "Eve", "adam"]
            .into_iter()
            .map(|n| Record::new().with("name", n))
            .collect();
        let sorted = sort(records, "name", SortDirection::Ascending);
        assert_eq!(names(&sorted), vec!["adam", "Émile", "Eve", "Zoe"]);
    }

    #[test]
    fn test_locale_compare_orders_lower_before_upper() {
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("A", "a"), Ordering::Greater);
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }
}

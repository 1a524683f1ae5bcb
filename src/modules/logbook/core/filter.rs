// Filtered view of the logbook used by the list, print and search surfaces.
//
// Rules
// - Identifier: case-insensitive substring match, empty query matches all.
//   The query is taken as typed, so whitespace is part of it.
// - Date range: inclusive bounds, an absent bound imposes nothing.
// - An entry whose date is not a calendar date only passes when no bound is set.
// - Output keeps input order.

use chrono::NaiveDate;

use crate::modules::logbook::core::entry::LogEntry;
use crate::modules::logbook::core::validation::parse_date;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("{bound} must be YYYY-MM-DD, got {value:?}")]
    InvalidDate { bound: &'static str, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub identifier: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl EntryFilter {
    /// Build a filter from raw search bar values. Blank values are absent.
    pub fn from_raw(
        identifier: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Self, FilterError> {
        Ok(Self {
            identifier: identifier.unwrap_or_default().to_string(),
            start_date: parse_bound("start_date", start_date)?,
            end_date: parse_bound("end_date", end_date)?,
        })
    }

    pub fn matches(&self, entry: &LogEntry) -> bool {
        self.matches_identifier(entry) && self.matches_dates(entry)
    }

    pub fn apply<'a>(&self, entries: impl IntoIterator<Item = &'a LogEntry>) -> Vec<LogEntry> {
        entries
            .into_iter()
            .filter(|entry| self.matches(entry))
            .cloned()
            .collect()
    }

    fn matches_identifier(&self, entry: &LogEntry) -> bool {
        self.identifier.is_empty()
            || entry
                .identifier()
                .to_lowercase()
                .contains(&self.identifier.to_lowercase())
    }

    fn matches_dates(&self, entry: &LogEntry) -> bool {
        if self.start_date.is_none() && self.end_date.is_none() {
            return true;
        }
        let Some(date) = parse_date(&entry.date) else {
            return false;
        };
        self.start_date.is_none_or(|start| date >= start)
            && self.end_date.is_none_or(|end| date <= end)
    }
}

fn parse_bound(bound: &'static str, value: Option<&str>) -> Result<Option<NaiveDate>, FilterError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse_date(raw).map(Some).ok_or_else(|| FilterError::InvalidDate {
            bound,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod entry_filter_tests {
    use super::*;
    use crate::tests::fixtures::entries::{event_on, shift_change_on};
    use rstest::{fixture, rstest};

    #[fixture]
    fn entries() -> Vec<LogEntry> {
        vec![
            event_on("2024-01-14", "ABC"),
            shift_change_on("2024-01-15", "Maria Lopez"),
            event_on("2024-01-16", "PMPA"),
            event_on("2024-01-17", "XABC"),
        ]
    }

    fn date(value: &str) -> Option<NaiveDate> {
        parse_date(value)
    }

    #[rstest]
    fn it_should_return_everything_in_order_without_criteria(entries: Vec<LogEntry>) {
        let filtered = EntryFilter::default().apply(&entries);
        assert_eq!(filtered, entries);
    }

    #[rstest]
    fn it_should_match_identifiers_case_insensitively(entries: Vec<LogEntry>) {
        let filter = EntryFilter {
            identifier: "abc".into(),
            ..Default::default()
        };
        let filtered = filter.apply(&entries);
        let identifiers: Vec<&str> = filtered.iter().map(LogEntry::identifier).collect();
        assert_eq!(identifiers, vec!["ABC", "XABC"]);
    }

    #[rstest]
    fn it_should_not_treat_a_whitespace_query_as_empty(entries: Vec<LogEntry>) {
        let filter = EntryFilter::from_raw(Some(" "), None, None).unwrap();
        assert_eq!(filter.identifier, " ");
        assert!(filter.apply(&entries).is_empty());
    }

    #[rstest]
    fn it_should_match_shift_changes_by_their_fixed_identifier(entries: Vec<LogEntry>) {
        let filter = EntryFilter {
            identifier: "turno".into(),
            ..Default::default()
        };
        let filtered = filter.apply(&entries);
        assert_eq!(filtered.len(), 1);
        assert!(filtered[0].is_shift_change());
    }

    #[rstest]
    fn it_should_select_a_single_day_with_equal_bounds(entries: Vec<LogEntry>) {
        let filter = EntryFilter {
            start_date: date("2024-01-16"),
            end_date: date("2024-01-16"),
            ..Default::default()
        };
        assert_eq!(filter.apply(&entries), vec![entries[2].clone()]);
    }

    #[rstest]
    fn it_should_treat_bounds_as_inclusive_and_optional(entries: Vec<LogEntry>) {
        let from = EntryFilter {
            start_date: date("2024-01-16"),
            ..Default::default()
        };
        assert_eq!(from.apply(&entries), entries[2..].to_vec());

        let until = EntryFilter {
            end_date: date("2024-01-15"),
            ..Default::default()
        };
        assert_eq!(until.apply(&entries), entries[..2].to_vec());
    }

    #[rstest]
    fn it_should_combine_identifier_and_dates(entries: Vec<LogEntry>) {
        let filter = EntryFilter {
            identifier: "abc".into(),
            start_date: date("2024-01-15"),
            end_date: None,
        };
        assert_eq!(filter.apply(&entries), vec![entries[3].clone()]);
    }

    #[rstest]
    fn it_should_exclude_undated_entries_only_when_a_bound_is_set() {
        let entries = vec![event_on("yesterday", "ABC")];
        assert_eq!(EntryFilter::default().apply(&entries).len(), 1);

        let bounded = EntryFilter {
            start_date: date("2000-01-01"),
            ..Default::default()
        };
        assert!(bounded.apply(&entries).is_empty());
    }

    #[rstest]
    fn it_should_build_from_raw_values() {
        let filter = EntryFilter::from_raw(Some("ab"), Some(""), Some("2024-01-31")).unwrap();
        assert_eq!(filter.identifier, "ab");
        assert_eq!(filter.start_date, None);
        assert_eq!(filter.end_date, date("2024-01-31"));
    }

    #[rstest]
    fn it_should_reject_a_malformed_bound() {
        let result = EntryFilter::from_raw(None, Some("31/01/2024"), None);
        assert_eq!(
            result,
            Err(FilterError::InvalidDate {
                bound: "start_date",
                value: "31/01/2024".into()
            })
        );
    }
}

//! Search projection over the roster.

use crate::StudentRecord;

/// Check whether `record` matches an already lowercased query.
///
/// A record matches when its name or email contains the query.
pub fn matches_query(record: &StudentRecord, query_lower: &str) -> bool {
    record.name.to_lowercase().contains(query_lower)
        || record.email.to_lowercase().contains(query_lower)
}

/// Records matching `query` (case-insensitive), in roster order.
///
/// An empty query yields the whole roster.
pub fn filter_records<'a>(records: &'a [StudentRecord], query: &str) -> Vec<&'a StudentRecord> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let query_lower = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_query(record, &query_lower))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_roster;

    fn names(records: &[&StudentRecord]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_filter_by_name_substring() {
        let roster = sample_roster();
        let result = filter_records(&roster, "chen");
        assert_eq!(names(&result), vec!["Mike Chen"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let roster = sample_roster();
        assert_eq!(names(&filter_records(&roster, "CHEN")), vec!["Mike Chen"]);
        assert_eq!(names(&filter_records(&roster, "eMiLy")), vec!["Emily Davis"]);
    }

    #[test]
    fn test_filter_matches_email() {
        let roster = sample_roster();
        let result = filter_records(&roster, "sarah.j@");
        assert_eq!(names(&result), vec!["Sarah Johnson"]);
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let roster = sample_roster();
        let result = filter_records(&roster, "");
        let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_filter_preserves_roster_order() {
        let roster = sample_roster();
        let result = filter_records(&roster, "school.com");
        assert_eq!(result.len(), 5);
        assert_eq!(result[0].name, "John Mwangi");
        assert_eq!(result[4].name, "David Kim");
    }

    #[test]
    fn test_no_match_is_empty() {
        let roster = sample_roster();
        assert!(filter_records(&roster, "zzz").is_empty());
    }

    #[test]
    fn test_filter_does_not_touch_roster() {
        let roster = sample_roster();
        let before = roster.clone();
        let _ = filter_records(&roster, "mike");
        assert_eq!(roster, before);
    }
}

//! # Search
//!
//! Search is prefix-based over a small set of lowercase terms derived from a
//! record's name, email and course. Terms are always re-derived from the
//! record at query time; the `search_terms` field stored on a record is a
//! cache for clients and is never consulted here.
//!
//! Given `John Doe <john@example.com>` taking `React In Depth`, the terms are:
//!
//! ```text
//! john doe, john, doe, jd, john@example.com, react in depth, react, in, depth
//! ```
//!
//! so `jo`, `doe`, `jd` and `react` all match while `ohn` does not.
//!
//! ## Stale responses
//!
//! A client that fires searches while the user types can receive responses
//! out of order. [`SearchSequencer`] hands out a ticket per request and only
//! accepts the response carrying the newest one.

/// Anything search terms can be derived from.
pub trait SearchSource {
    fn name(&self) -> Option<&str>;
    fn email(&self) -> Option<&str>;
    fn course(&self) -> Option<&str>;
}

/// Lowercase, unique, non-empty terms in the order they were derived.
pub fn generate_search_terms<T: SearchSource + ?Sized>(source: &T) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();

    if let Some(name) = present(source.name()) {
        let name = name.to_lowercase();
        let parts: Vec<&str> = name.split_whitespace().collect();
        push_term(&mut terms, &name);
        for part in &parts {
            push_term(&mut terms, part);
        }
        if parts.len() > 1 {
            let initials: String = parts.iter().filter_map(|p| p.chars().next()).collect();
            push_term(&mut terms, &initials);
        }
    }

    if let Some(email) = present(source.email()) {
        let email = email.to_lowercase();
        push_term(&mut terms, &email);
        if let Some(username) = email.split('@').next() {
            push_term(&mut terms, username);
        }
    }

    if let Some(course) = present(source.course()) {
        let course = course.to_lowercase();
        push_term(&mut terms, &course);
        for word in course.split_whitespace() {
            push_term(&mut terms, word);
        }
    }

    terms
}

fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|s| !s.is_empty())
}

fn push_term(terms: &mut Vec<String>, term: &str) {
    if !term.is_empty() && !terms.iter().any(|t| t == term) {
        terms.push(term.to_string());
    }
}

/// Lowercased and trimmed. An empty result means "match everything".
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// True when any derived term starts with the already-normalized query.
pub fn matches_query<T: SearchSource + ?Sized>(source: &T, normalized: &str) -> bool {
    normalized.is_empty()
        || generate_search_terms(source)
            .iter()
            .any(|term| term.starts_with(normalized))
}

/// Stable filter of `items` by `query`.
pub fn filter_by_query<T: SearchSource>(items: Vec<T>, query: &str) -> Vec<T> {
    let normalized = normalize_query(query);
    if normalized.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| matches_query(item, &normalized))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

/// Orders search requests so an older response can never replace a newer one.
///
/// Only clients that keep several searches in flight (a dashboard firing one
/// request per keystroke) can see a stale ticket. The terminal session runs
/// each search to completion before reading the next line, so its tickets are
/// always current.
#[derive(Debug, Default)]
pub struct SearchSequencer {
    issued: u64,
}

impl SearchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request. Every earlier ticket becomes stale.
    pub fn begin(&mut self) -> SearchTicket {
        self.issued += 1;
        SearchTicket(self.issued)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Returns the results if `ticket` is still the newest, `None` if stale.
    pub fn accept<R>(&self, ticket: SearchTicket, results: R) -> Option<R> {
        if self.is_current(ticket) {
            Some(results)
        } else {
            tracing::warn!(
                ticket = ticket.0,
                latest = self.issued,
                "discarding stale search response"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fields {
        name: Option<&'static str>,
        email: Option<&'static str>,
        course: Option<&'static str>,
    }

    impl SearchSource for Fields {
        fn name(&self) -> Option<&str> {
            self.name
        }
        fn email(&self) -> Option<&str> {
            self.email
        }
        fn course(&self) -> Option<&str> {
            self.course
        }
    }

    fn john() -> Fields {
        Fields {
            name: Some("John Doe"),
            email: Some("John@Example.com"),
            course: Some("React In Depth"),
        }
    }

    #[test]
    fn derives_terms_in_order() {
        assert_eq!(
            generate_search_terms(&john()),
            vec![
                "john doe",
                "john",
                "doe",
                "jd",
                "john@example.com",
                "react in depth",
                "react",
                "in",
                "depth",
            ]
        );
    }

    #[test]
    fn single_word_name_has_no_initials() {
        let fields = Fields {
            name: Some("Cher"),
            email: None,
            course: None,
        };
        assert_eq!(generate_search_terms(&fields), vec!["cher"]);
    }

    #[test]
    fn missing_fields_are_skipped() {
        let fields = Fields {
            name: None,
            email: Some("@nobody"),
            course: Some(""),
        };
        // Empty username is dropped.
        assert_eq!(generate_search_terms(&fields), vec!["@nobody"]);
    }

    #[test]
    fn duplicates_are_removed() {
        let fields = Fields {
            name: Some("Ada Ada"),
            email: Some("ada@x.io"),
            course: Some("Ada"),
        };
        assert_eq!(
            generate_search_terms(&fields),
            vec!["ada ada", "ada", "aa", "ada@x.io"]
        );
    }

    #[test]
    fn every_term_is_lowercase_and_drawn_from_a_field() {
        let fields = john();
        let haystack = format!(
            "{} {} {}",
            fields.name.unwrap().to_lowercase(),
            fields.email.unwrap().to_lowercase(),
            fields.course.unwrap().to_lowercase()
        );
        for term in generate_search_terms(&fields) {
            assert_eq!(term, term.to_lowercase());
            assert!(!term.is_empty());
            // Initials are the one derived term that is not a substring.
            if term != "jd" {
                assert!(haystack.contains(&term), "{term} not found");
            }
        }
    }

    #[test]
    fn matches_by_prefix_only() {
        let fields = john();
        assert!(matches_query(&fields, "jo"));
        assert!(matches_query(&fields, "doe"));
        assert!(matches_query(&fields, "react"));
        assert!(matches_query(&fields, "dep"));
        assert!(!matches_query(&fields, "ohn"));
        assert!(!matches_query(&fields, "xyz"));
    }

    #[test]
    fn every_prefix_of_every_term_matches() {
        let fields = john();
        for term in generate_search_terms(&fields) {
            for (end, _) in term.char_indices().skip(1) {
                assert!(matches_query(&fields, &term[..end]));
            }
            assert!(matches_query(&fields, &term));
        }
    }

    #[test]
    fn every_prefix_matches_when_fields_are_missing() {
        let fields = Fields {
            name: Some("Mary Jane Watson"),
            email: None,
            course: Some("Node.js Essentials For Teams"),
        };
        let terms = generate_search_terms(&fields);
        assert!(terms.contains(&"mjw".to_string()));
        assert!(terms.contains(&"teams".to_string()));
        assert!(!terms.iter().any(|t| t.contains('@')));

        for term in &terms {
            for (end, _) in term.char_indices().skip(1) {
                assert!(matches_query(&fields, &term[..end]), "{} missed", &term[..end]);
            }
            assert!(matches_query(&fields, term));
        }
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize_query("  JoHn "), "john");
        let matched = filter_by_query(vec![john()], "  DOE ");
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn blank_query_keeps_everything_in_order() {
        let items = vec![
            Fields {
                name: Some("B"),
                email: None,
                course: None,
            },
            Fields {
                name: Some("A"),
                email: None,
                course: None,
            },
        ];
        let kept = filter_by_query(items, "   ");
        assert_eq!(kept[0].name, Some("B"));
        assert_eq!(kept[1].name, Some("A"));
    }

    #[test]
    fn sequencer_drops_out_of_order_responses() {
        let mut sequencer = SearchSequencer::new();
        let slow = sequencer.begin();
        let fast = sequencer.begin();

        assert_eq!(sequencer.accept(fast, "fresh"), Some("fresh"));
        assert_eq!(sequencer.accept(slow, "stale"), None);
        assert!(slow < fast);
    }
}

//! src/controller/share_link.rs
//! ============================================================================
//! # Share Link: Address Query Parameters ↔ Query State
//!
//! Inbound once at startup: the launch address seeds search text and active
//! filters. Outbound continuously: whenever either changes, the session
//! share link is rewritten to exactly reflect them — one `filter` pair per
//! active value in toggle order, one `search` pair iff the text is
//! non-empty. Price ceiling, sort mode and window size are session-only and
//! never appear in the address.
//!
//! The one-shot inbound guard lives in [`AppState::seed_from_address`];
//! writing a link can therefore never re-trigger a read.
//!
//! [`AppState::seed_from_address`]: crate::model::app_state::AppState::seed_from_address

use tracing::{debug, warn};
use url::form_urlencoded;

use crate::model::{catalog::Pricing, query_state::QueryState};

/// Search/filter state decoded from a launch address.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Seed {
    pub search: Option<String>,
    pub filters: Vec<Pricing>,
}

/// Decode `filter` (repeatable integer) and `search` parameters from an
/// address query string, with or without the leading `?` (a full address
/// is also accepted; everything before the last `?` is ignored).
///
/// Unknown parameter names and out-of-range filter integers are skipped
/// with a log line — a typed filter set has no way to carry them.
#[must_use]
pub fn parse(address: &str) -> Seed {
    let raw = address
        .rsplit_once('?')
        .map_or(address, |(_, query)| query);

    let mut seed = Seed::default();
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        match &*key {
            "filter" => {
                let parsed = value
                    .parse::<u8>()
                    .ok()
                    .and_then(|v| Pricing::try_from(v).ok());
                match parsed {
                    Some(pricing) => seed.filters.push(pricing),
                    None => warn!("skipping unknown filter value {value:?} in address"),
                }
            }
            "search" => {
                if !value.is_empty() {
                    seed.search = Some(value.into_owned());
                }
            }
            other => debug!("ignoring address parameter {other:?}"),
        }
    }

    seed
}

/// Encode the current search/filter state as an address query string.
/// Returns an empty string when there is nothing to share.
#[must_use]
pub fn write(query: &QueryState) -> String {
    if query.active_filters.is_empty() && query.search_text.is_empty() {
        return String::new();
    }

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for pricing in &query.active_filters {
        serializer.append_pair("filter", &pricing.as_u8().to_string());
    }
    if !query.search_text.is_empty() {
        serializer.append_pair("search", &query.search_text);
    }

    format!("?{}", serializer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexSet;

    #[test]
    fn parses_filters_and_search() {
        let seed = parse("?filter=0&filter=2&search=logo");
        assert_eq!(seed.filters, vec![Pricing::Paid, Pricing::ViewOnly]);
        assert_eq!(seed.search.as_deref(), Some("logo"));
    }

    #[test]
    fn leading_question_mark_is_optional() {
        assert_eq!(parse("filter=1"), parse("?filter=1"));
    }

    #[test]
    fn full_address_is_accepted() {
        let seed = parse("https://example.org/catalog?search=coat");
        assert_eq!(seed.search.as_deref(), Some("coat"));
    }

    #[test]
    fn absence_means_defaults() {
        let seed = parse("");
        assert!(seed.filters.is_empty());
        assert!(seed.search.is_none());
    }

    #[test]
    fn unknown_filter_values_are_skipped() {
        let seed = parse("?filter=7&filter=abc&filter=1");
        assert_eq!(seed.filters, vec![Pricing::Free]);
    }

    #[test]
    fn percent_encoded_search_is_decoded() {
        let seed = parse("?search=logo%20tee");
        assert_eq!(seed.search.as_deref(), Some("logo tee"));
    }

    #[test]
    fn writes_filters_in_toggle_order_then_search() {
        let query = QueryState {
            search_text: "logo tee".into(),
            active_filters: IndexSet::from([Pricing::ViewOnly, Pricing::Paid]),
            ..QueryState::default()
        };

        assert_eq!(write(&query), "?filter=2&filter=0&search=logo+tee");
    }

    #[test]
    fn empty_state_writes_nothing() {
        assert_eq!(write(&QueryState::default()), "");
    }

    #[test]
    fn search_only_when_non_empty() {
        let query = QueryState {
            active_filters: IndexSet::from([Pricing::Free]),
            ..QueryState::default()
        };
        assert_eq!(write(&query), "?filter=1");
    }

    #[test]
    fn round_trips_through_the_address() {
        let query = QueryState {
            search_text: "50% off & more".into(),
            active_filters: IndexSet::from([Pricing::Paid, Pricing::Free]),
            ..QueryState::default()
        };

        let seed = parse(&write(&query));
        assert_eq!(seed.search.as_deref(), Some("50% off & more"));
        assert_eq!(seed.filters, vec![Pricing::Paid, Pricing::Free]);
    }
}

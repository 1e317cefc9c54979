use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{BookStatus, ReportStatus, UserStatus};

/// Sentinel filter value meaning "no constraint"; never sent to the server.
pub const FILTER_ALL: &str = "all";

/// Broad-match search token sent when the search box is empty, requesting
/// the server's unfiltered defaults.
pub const MATCH_ALL: &str = "*";

pub const DEFAULT_PER_PAGE: u32 = 10;

/// Query state for a list endpoint: free-text search, active filters, and
/// the pagination window.
///
/// Filters set to [`FILTER_ALL`] (or left empty) are omitted from the
/// serialized query entirely, which the server reads as unconstrained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    /// Field names the server should match the search term against.
    pub search_fields: Vec<&'static str>,
    pub filters: BTreeMap<String, String>,
    pub page: u32,
    pub per_page: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            search_fields: Vec::new(),
            filters: BTreeMap::new(),
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl ListQuery {
    pub fn with_search_fields(fields: &[&'static str]) -> Self {
        Self {
            search_fields: fields.to_vec(),
            ..Self::default()
        }
    }

    pub fn filter(mut self, key: &str, value: &str) -> Self {
        self.filters.insert(key.to_string(), value.to_string());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Serialize into query pairs for the outgoing request.
    ///
    /// An empty search term becomes [`MATCH_ALL`]; filters holding the
    /// [`FILTER_ALL`] sentinel or an empty string are dropped.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        let search = if self.search.trim().is_empty() {
            MATCH_ALL.to_string()
        } else {
            self.search.trim().to_string()
        };
        pairs.push(("search".to_string(), search));

        if !self.search_fields.is_empty() {
            pairs.push((
                "search_fields".to_string(),
                self.search_fields.join(","),
            ));
        }

        for (key, value) in &self.filters {
            if value == FILTER_ALL || value.is_empty() {
                continue;
            }
            pairs.push((key.clone(), value.clone()));
        }

        pairs.push(("page".to_string(), self.page.to_string()));
        pairs.push(("per_page".to_string(), self.per_page.to_string()));

        pairs
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserStatus {
    pub status: UserStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookStatus {
    pub status: BookStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateReportStatus {
    pub status: ReportStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLocation {
    pub name: String,
    pub address: String,
    pub city: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLocation {
    pub name: String,
    pub address: String,
    pub city: String,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair_value<'a>(
        pairs: &'a [(String, String)],
        key: &str,
    ) -> Option<&'a str> {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn empty_search_becomes_broad_match_token() {
        let query = ListQuery::default();
        let pairs = query.query_pairs();
        assert_eq!(pair_value(&pairs, "search"), Some(MATCH_ALL));
    }

    #[test]
    fn search_term_is_trimmed_and_forwarded() {
        let query = ListQuery {
            search: "  gatsby ".to_string(),
            ..ListQuery::default()
        };
        let pairs = query.query_pairs();
        assert_eq!(pair_value(&pairs, "search"), Some("gatsby"));
    }

    #[test]
    fn all_sentinel_filters_are_omitted() {
        let query = ListQuery::default()
            .filter("availability", FILTER_ALL)
            .filter("genre", "mystery")
            .filter("status", "");
        let pairs = query.query_pairs();
        assert_eq!(pair_value(&pairs, "availability"), None);
        assert_eq!(pair_value(&pairs, "status"), None);
        assert_eq!(pair_value(&pairs, "genre"), Some("mystery"));
    }

    #[test]
    fn search_fields_serialize_comma_separated() {
        let query = ListQuery::with_search_fields(&["title", "author"]);
        let pairs = query.query_pairs();
        assert_eq!(pair_value(&pairs, "search_fields"), Some("title,author"));
    }

    #[test]
    fn pagination_window_is_always_present() {
        let query = ListQuery::default().page(3);
        let pairs = query.query_pairs();
        assert_eq!(pair_value(&pairs, "page"), Some("3"));
        assert_eq!(
            pair_value(&pairs, "per_page"),
            Some(&DEFAULT_PER_PAGE.to_string()[..])
        );
    }
}

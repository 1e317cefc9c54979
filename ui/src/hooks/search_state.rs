//! Pure state machine behind [`use_search`](super::use_search).
//!
//! All transitions live here, off the rendering layer, so the search,
//! debounce, filter, and pagination behavior is testable natively. The hook
//! only wires timers, effects, and network calls around this type.

use std::collections::BTreeMap;
use std::rc::Rc;

use payloads::requests::ListQuery;
use payloads::responses::Page;
use yew::prelude::*;

/// List-fetching state for one resource: accumulated items, the server's
/// pagination cursor, the live and debounced search terms, and the filter
/// map.
#[derive(Clone, PartialEq)]
pub struct SearchState<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub filter_counts: BTreeMap<String, u64>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Live-typed value, updated on every keystroke.
    pub search_term: String,
    /// Time-delayed shadow of `search_term`; the only term that drives
    /// outgoing requests.
    pub debounced_term: String,
    pub filters: BTreeMap<String, String>,
    pub page: u32,
    pub last_page: u32,
    /// Bumped on every keystroke; a debounce commit carrying an older
    /// generation is ignored.
    debounce_gen: u64,
    /// Bumped whenever the effective query changes. The fetch effect keys
    /// off this, so setters stay pure state mutation.
    version: u64,
    /// Sequence number of the request currently allowed to apply state.
    current_seq: u64,
}

impl<T> SearchState<T> {
    pub fn new(initial_filters: &[(&str, &str)]) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            filter_counts: BTreeMap::new(),
            is_loading: false,
            error: None,
            search_term: String::new(),
            debounced_term: String::new(),
            filters: initial_filters
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            page: 1,
            last_page: 1,
            debounce_gen: 0,
            version: 0,
            current_seq: 0,
        }
    }

    pub fn has_more(&self) -> bool {
        self.page < self.last_page
    }

    /// 0 until the first query change; the fetch effect uses this to honor
    /// `initial_load` consistently.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn debounce_gen(&self) -> u64 {
        self.debounce_gen
    }

    /// Build the outgoing query from the full current state.
    pub fn query(
        &self,
        search_fields: &[&'static str],
        per_page: u32,
    ) -> ListQuery {
        ListQuery {
            search: self.debounced_term.clone(),
            search_fields: search_fields.to_vec(),
            filters: self.filters.clone(),
            page: self.page,
            per_page,
        }
    }

    fn restart(&mut self) {
        self.items.clear();
        self.page = 1;
        self.last_page = 1;
        self.version += 1;
    }
}

pub enum SearchAction<T> {
    /// A keystroke: updates the live term only.
    TypeTerm(String),
    /// A debounce timer fired for the given generation.
    CommitDebounce(u64),
    /// Merge one filter key; `"all"` means unconstrained.
    SetFilter(String, String),
    /// Optimistically advance to the next page; resolved by the response.
    LoadMore,
    /// Reload from scratch after a mutation: back to page 1 with the same
    /// term and filters.
    Refetch,
    /// A request with this sequence number is in flight.
    Begin(u64),
    Loaded { seq: u64, page: Page<T> },
    Failed { seq: u64, message: String },
}

impl<T: Clone + PartialEq> Reducible for SearchState<T> {
    type Action = SearchAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

impl<T: Clone> SearchState<T> {
    pub fn apply(&mut self, action: SearchAction<T>) {
        match action {
            SearchAction::TypeTerm(term) => {
                self.search_term = term;
                self.debounce_gen += 1;
            }
            SearchAction::CommitDebounce(generation) => {
                // A newer keystroke supersedes this timer.
                if generation != self.debounce_gen {
                    return;
                }
                if self.debounced_term == self.search_term {
                    return;
                }
                self.debounced_term = self.search_term.clone();
                self.restart();
            }
            SearchAction::SetFilter(key, value) => {
                self.filters.insert(key, value);
                self.restart();
            }
            SearchAction::LoadMore => {
                if self.has_more() && !self.is_loading {
                    self.page += 1;
                    self.version += 1;
                }
            }
            SearchAction::Refetch => {
                self.restart();
            }
            SearchAction::Begin(seq) => {
                self.current_seq = seq;
                self.is_loading = true;
                self.error = None;
            }
            SearchAction::Loaded { seq, page } => {
                if seq != self.current_seq {
                    return;
                }
                if page.pagination.current_page > 1 {
                    self.items.extend(page.items);
                } else {
                    self.items = page.items;
                }
                self.total = page.pagination.total;
                self.filter_counts = page.filter_counts;
                self.page = page.pagination.current_page;
                self.last_page = page.pagination.last_page;
                self.is_loading = false;
                self.error = None;
            }
            SearchAction::Failed { seq, message } => {
                if seq != self.current_seq {
                    return;
                }
                self.items.clear();
                self.total = 0;
                self.error = Some(message);
                self.is_loading = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use payloads::requests::{FILTER_ALL, MATCH_ALL};
    use payloads::responses::Pagination;

    use super::*;

    fn page_of(
        items: Vec<&'static str>,
        current_page: u32,
        last_page: u32,
        total: u64,
    ) -> Page<String> {
        Page {
            pagination: Pagination {
                total,
                per_page: 10,
                current_page,
                last_page,
            },
            items: items.into_iter().map(String::from).collect(),
            filter_counts: BTreeMap::new(),
        }
    }

    fn ten_titles(page: u32) -> Vec<&'static str> {
        match page {
            1 => vec![
                "a1", "a2", "a3", "a4", "a5", "a6", "a7", "a8", "a9", "a10",
            ],
            _ => vec![
                "b1", "b2", "b3", "b4", "b5", "b6", "b7", "b8", "b9", "b10",
            ],
        }
    }

    #[test]
    fn burst_of_keystrokes_commits_once_with_last_value() {
        let mut state = SearchState::<String>::new(&[]);

        state.apply(SearchAction::TypeTerm("g".into()));
        let stale_gen = state.debounce_gen();
        state.apply(SearchAction::TypeTerm("ga".into()));
        state.apply(SearchAction::TypeTerm("gatsby".into()));
        let live_gen = state.debounce_gen();

        // Timers for superseded keystrokes fire into the void.
        state.apply(SearchAction::CommitDebounce(stale_gen));
        assert_eq!(state.version(), 0);
        assert_eq!(state.debounced_term, "");

        state.apply(SearchAction::CommitDebounce(live_gen));
        assert_eq!(state.version(), 1);
        assert_eq!(state.debounced_term, "gatsby");

        // The same generation firing again changes nothing.
        state.apply(SearchAction::CommitDebounce(live_gen));
        assert_eq!(state.version(), 1);
    }

    #[test]
    fn filter_change_resets_to_page_one() {
        let mut state = SearchState::<String>::new(&[("status", FILTER_ALL)]);
        state.apply(SearchAction::Begin(1));
        state.apply(SearchAction::Loaded {
            seq: 1,
            page: page_of(ten_titles(1), 1, 3, 25),
        });
        state.apply(SearchAction::LoadMore);
        assert_eq!(state.page, 2);

        state.apply(SearchAction::SetFilter(
            "status".into(),
            "suspended".into(),
        ));
        assert_eq!(state.page, 1);
        assert!(state.items.is_empty());
    }

    #[test]
    fn sentinel_filters_stay_out_of_the_query() {
        let mut state = SearchState::<String>::new(&[
            ("availability", FILTER_ALL),
            ("genre", FILTER_ALL),
        ]);
        state.apply(SearchAction::SetFilter(
            "genre".into(),
            "mystery".into(),
        ));

        let pairs = state.query(&["title", "author"], 10).query_pairs();
        assert!(pairs.iter().all(|(k, _)| k != "availability"));
        assert!(
            pairs
                .iter()
                .any(|(k, v)| k == "genre" && v == "mystery")
        );
        assert!(
            pairs
                .iter()
                .any(|(k, v)| k == "search" && v == MATCH_ALL)
        );
    }

    #[test]
    fn load_more_appends_and_query_change_clears() {
        let mut state = SearchState::<String>::new(&[]);
        state.apply(SearchAction::Begin(1));
        state.apply(SearchAction::Loaded {
            seq: 1,
            page: page_of(ten_titles(1), 1, 3, 25),
        });
        assert_eq!(state.items.len(), 10);
        assert_eq!(state.total, 25);
        assert!(state.has_more());

        state.apply(SearchAction::LoadMore);
        assert_eq!(state.query(&[], 10).page, 2);
        state.apply(SearchAction::Begin(2));
        state.apply(SearchAction::Loaded {
            seq: 2,
            page: page_of(ten_titles(2), 2, 3, 25),
        });
        assert_eq!(state.items.len(), 20);
        assert_eq!(state.items[0], "a1");
        assert_eq!(state.items[10], "b1");

        // The accumulated list is discarded before the next response.
        state.apply(SearchAction::TypeTerm("x".into()));
        state.apply(SearchAction::CommitDebounce(state.debounce_gen()));
        assert!(state.items.is_empty());
        assert_eq!(state.page, 1);
    }

    #[test]
    fn refetch_after_load_more_restarts_from_page_one() {
        let mut state = SearchState::<String>::new(&[]);
        state.apply(SearchAction::Begin(1));
        state.apply(SearchAction::Loaded {
            seq: 1,
            page: page_of(ten_titles(1), 1, 3, 25),
        });
        state.apply(SearchAction::LoadMore);
        state.apply(SearchAction::Begin(2));
        state.apply(SearchAction::Loaded {
            seq: 2,
            page: page_of(ten_titles(2), 2, 3, 25),
        });
        assert_eq!(state.items.len(), 20);

        // Reloading after a mutation must not re-append page 2 on top of
        // the accumulated list.
        let version = state.version();
        state.apply(SearchAction::Refetch);
        assert_eq!(state.query(&[], 10).page, 1);
        assert_eq!(state.version(), version + 1);

        state.apply(SearchAction::Begin(3));
        state.apply(SearchAction::Loaded {
            seq: 3,
            page: page_of(ten_titles(1), 1, 3, 25),
        });
        assert_eq!(state.items.len(), 10);
        let unique: std::collections::BTreeSet<_> =
            state.items.iter().collect();
        assert_eq!(unique.len(), state.items.len());
    }

    #[test]
    fn superseded_response_is_discarded() {
        let mut state = SearchState::<String>::new(&[]);

        // Request 1 issued, then request 2 supersedes it.
        state.apply(SearchAction::Begin(1));
        state.apply(SearchAction::Begin(2));

        state.apply(SearchAction::Loaded {
            seq: 2,
            page: page_of(vec!["newer"], 1, 1, 1),
        });
        // The slower first request resolves last and must not win.
        state.apply(SearchAction::Loaded {
            seq: 1,
            page: page_of(vec!["stale"], 1, 1, 1),
        });

        assert_eq!(state.items, vec!["newer".to_string()]);
        assert!(!state.is_loading);
    }

    #[test]
    fn stale_failure_does_not_clobber_newer_success() {
        let mut state = SearchState::<String>::new(&[]);
        state.apply(SearchAction::Begin(1));
        state.apply(SearchAction::Begin(2));
        state.apply(SearchAction::Loaded {
            seq: 2,
            page: page_of(vec!["kept"], 1, 1, 1),
        });
        state.apply(SearchAction::Failed {
            seq: 1,
            message: "timeout".into(),
        });

        assert_eq!(state.items.len(), 1);
        assert!(state.error.is_none());
    }

    #[test]
    fn failed_request_clears_results_and_total() {
        let mut state = SearchState::<String>::new(&[]);
        state.apply(SearchAction::Begin(1));
        state.apply(SearchAction::Loaded {
            seq: 1,
            page: page_of(ten_titles(1), 1, 3, 25),
        });

        state.apply(SearchAction::Begin(2));
        state.apply(SearchAction::Failed {
            seq: 2,
            message: "Request failed. Please check your connection.".into(),
        });
        assert!(state.items.is_empty());
        assert_eq!(state.total, 0);
        assert_eq!(
            state.error.as_deref(),
            Some("Request failed. Please check your connection.")
        );
    }

    #[test]
    fn committing_an_unchanged_term_does_not_refetch() {
        let mut state = SearchState::<String>::new(&[]);
        // Mount-time timer for the initial empty term.
        state.apply(SearchAction::CommitDebounce(0));
        assert_eq!(state.version(), 0);
    }
}

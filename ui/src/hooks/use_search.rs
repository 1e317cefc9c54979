use std::cell::Cell;
use std::collections::BTreeMap;
use std::future::Future;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use payloads::requests::DEFAULT_PER_PAGE;
use payloads::responses::{Envelope, Page};
use payloads::{ClientError, ListQuery};
use yew::prelude::*;
use yewdux::prelude::*;

use super::handle_client_error;
use super::search_state::{SearchAction, SearchState};
use crate::State;

pub const DEFAULT_DEBOUNCE_MS: u32 = 300;

/// Configuration for [`use_search`].
#[derive(Clone, PartialEq)]
pub struct SearchConfig {
    /// Field names the server matches the search term against.
    pub search_fields: Vec<&'static str>,
    /// Quiet period before a typed term becomes the request term.
    pub debounce_ms: u32,
    pub per_page: u32,
    /// Whether to issue a request on mount. When false, the first request
    /// comes from the first query change or an explicit refetch.
    pub initial_load: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_fields: Vec::new(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            per_page: DEFAULT_PER_PAGE,
            initial_load: true,
        }
    }
}

/// What a search-driven list view consumes.
pub struct SearchHookReturn<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub filter_counts: BTreeMap<String, u64>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub search_term: String,
    pub filters: BTreeMap<String, String>,
    pub has_more: bool,
    pub set_search_term: Callback<String>,
    /// Merge a single `(key, value)` into the filter map. `"all"` clears
    /// the constraint.
    pub set_filter: Callback<(String, String)>,
    pub load_more: Callback<()>,
    pub refetch: Callback<()>,
}

/// Debounced search plus filterable, incrementally-loadable list state for
/// one resource.
///
/// The setters only mutate local state; the network request runs from an
/// effect keyed on the state machine's query version, so every committed
/// query change issues exactly one request carrying the full current state.
/// Stale completions are discarded by sequence number.
#[hook]
pub fn use_search<T, F, Fut>(
    config: SearchConfig,
    initial_filters: &[(&str, &str)],
    fetch_page: F,
) -> SearchHookReturn<T>
where
    T: Clone + PartialEq + 'static,
    F: Fn(ListQuery) -> Fut + 'static,
    Fut: Future<Output = Result<Envelope<Page<T>>, ClientError>> + 'static,
{
    let (_, dispatch) = use_store::<State>();
    let state = use_reducer(|| SearchState::<T>::new(initial_filters));
    let next_seq = use_mut_ref(|| Rc::new(Cell::new(0u64)));
    let debounce_timer = use_mut_ref(|| None::<Timeout>);

    let run_fetch = {
        let state = state.clone();
        let dispatch = dispatch.clone();
        let next_seq = next_seq.borrow().clone();
        let fetch_page = Rc::new(fetch_page);
        let search_fields = config.search_fields.clone();
        let per_page = config.per_page;

        use_callback(state.version(), move |_, _| {
            let state = state.clone();
            let dispatch = dispatch.clone();
            let fetch_page = fetch_page.clone();
            let query = state.query(&search_fields, per_page);

            let seq = next_seq.get() + 1;
            next_seq.set(seq);
            state.dispatch(SearchAction::Begin(seq));

            yew::platform::spawn_local(async move {
                let result = fetch_page(query).await;
                let action = match result {
                    Ok(envelope) => match envelope.into_data() {
                        Ok(page) => SearchAction::Loaded { seq, page },
                        Err(message) => SearchAction::Failed { seq, message },
                    },
                    Err(err) => SearchAction::Failed {
                        seq,
                        message: handle_client_error(&dispatch, err),
                    },
                };
                state.dispatch(action);
            });
        })
    };

    // One request per committed query change. Version 0 is the mount state;
    // it fetches only when initial_load is set.
    {
        let initial_load = config.initial_load;

        use_effect_with(state.version(), move |version| {
            if *version > 0 || initial_load {
                run_fetch.emit(());
            }
        });
    }

    // Trailing debounce: each keystroke re-arms the timer; replacing the
    // handle cancels the previous one, and the generation number guards
    // against a timer that already fired for a superseded term.
    {
        let state = state.clone();
        let debounce_timer = debounce_timer.clone();
        let debounce_ms = config.debounce_ms;

        use_effect_with(state.search_term.clone(), move |_| {
            let generation = state.debounce_gen();
            let timer = Timeout::new(debounce_ms, move || {
                state.dispatch(SearchAction::CommitDebounce(generation));
            });
            *debounce_timer.borrow_mut() = Some(timer);
        });
    }

    let set_search_term = {
        let state = state.clone();
        Callback::from(move |term: String| {
            state.dispatch(SearchAction::TypeTerm(term));
        })
    };

    let set_filter = {
        let state = state.clone();
        Callback::from(move |(key, value): (String, String)| {
            state.dispatch(SearchAction::SetFilter(key, value));
        })
    };

    let load_more = {
        let state = state.clone();
        Callback::from(move |_| {
            state.dispatch(SearchAction::LoadMore);
        })
    };

    // A plain re-run of the current query would carry `page = state.page`
    // and re-append an already-loaded page, so refetch restarts from page 1
    // through the same versioned effect as any other query change.
    let refetch = {
        let state = state.clone();
        Callback::from(move |_| {
            state.dispatch(SearchAction::Refetch);
        })
    };

    SearchHookReturn {
        items: state.items.clone(),
        total: state.total,
        filter_counts: state.filter_counts.clone(),
        is_loading: state.is_loading,
        error: state.error.clone(),
        search_term: state.search_term.clone(),
        filters: state.filters.clone(),
        has_more: state.has_more(),
        set_search_term,
        set_filter,
        load_more,
        refetch,
    }
}

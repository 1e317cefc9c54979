use payloads::requests::{FILTER_ALL, UpdateBookStatus};
use payloads::{BookId, BookStatus, responses};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::filter_select::FilterOption;
use crate::components::{
    FilterSelect, LoadMoreButton, SearchInput, StatusBadge, StatusKind,
};
use crate::contexts::toast::use_toast;
use crate::hooks::{
    handle_client_error, use_books, use_genres, use_push_route,
};
use crate::{Route, State};

#[function_component]
pub fn BooksPage() -> Html {
    let books = use_books();
    let genres = use_genres();
    let (state, dispatch) = use_store::<State>();
    let toast = use_toast();
    let push_route = use_push_route();

    let filter_value = |key: &str| {
        books
            .filters
            .get(key)
            .cloned()
            .unwrap_or_else(|| FILTER_ALL.to_string())
    };

    let availability_options = vec![
        FilterOption::new(FILTER_ALL, "Any availability"),
        FilterOption::new("available", "Available")
            .with_count(books.filter_counts.get("available").copied()),
        FilterOption::new("borrowed", "Borrowed")
            .with_count(books.filter_counts.get("borrowed").copied()),
        FilterOption::new("unavailable", "Unavailable")
            .with_count(books.filter_counts.get("unavailable").copied()),
    ];

    let status_options = vec![
        FilterOption::new(FILTER_ALL, "All statuses"),
        FilterOption::new("active", "Active"),
        FilterOption::new("suspended", "Suspended"),
    ];

    // Genre options degrade to just the sentinel if the lookup fails.
    let mut genre_options = vec![FilterOption::new(FILTER_ALL, "All genres")];
    if let Some(list) = genres.data.as_ref() {
        for genre in list {
            genre_options.push(FilterOption::new(&genre.name, &genre.name));
        }
    }

    let set_filter_for = |key: &'static str| {
        let set_filter = books.set_filter.clone();
        Callback::from(move |value: String| {
            set_filter.emit((key.to_string(), value));
        })
    };

    let on_toggle_status = {
        let state = state.clone();
        let dispatch = dispatch.clone();
        let toast = toast.clone();
        let refetch = books.refetch.clone();

        Callback::from(move |(book_id, status): (BookId, BookStatus)| {
            let client = state.api_client();
            let dispatch = dispatch.clone();
            let toast = toast.clone();
            let refetch = refetch.clone();

            yew::platform::spawn_local(async move {
                let result = match client
                    .update_book_status(
                        book_id,
                        &UpdateBookStatus { status },
                    )
                    .await
                {
                    Ok(envelope) => envelope.into_data(),
                    Err(err) => Err(handle_client_error(&dispatch, err)),
                };

                match result {
                    Ok(book) => {
                        toast.success(format!(
                            "\"{}\" is now {}.",
                            book.title,
                            book.status.as_str()
                        ));
                        refetch.emit(());
                    }
                    Err(message) => toast.error(message),
                }
            });
        })
    };

    html! {
        <div>
            <h1 class="text-2xl font-semibold mb-6">{"Books"}</h1>

            <div class="flex flex-wrap items-center gap-4 mb-6">
                <SearchInput
                    value={books.search_term.clone()}
                    on_change={books.set_search_term.clone()}
                    placeholder="Search by title or author..."
                />
                <FilterSelect
                    label="Availability"
                    value={filter_value("availability")}
                    options={availability_options}
                    on_change={set_filter_for("availability")}
                />
                <FilterSelect
                    label="Genre"
                    value={filter_value("genre")}
                    options={genre_options}
                    on_change={set_filter_for("genre")}
                />
                <FilterSelect
                    label="Status"
                    value={filter_value("status")}
                    options={status_options}
                    on_change={set_filter_for("status")}
                />
            </div>

            if let Some(error) = &books.error {
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 \
                            border border-red-200 dark:border-red-800 mb-4">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {error}
                    </p>
                </div>
            }

            if books.items.is_empty() && books.is_loading {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Loading books..."}
                    </p>
                </div>
            } else if books.items.is_empty() && books.error.is_none() {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"No books match the current search."}
                    </p>
                </div>
            } else {
                <div class="space-y-3">
                    {books.items.iter().map(|book| {
                        book_row(book, &push_route, &on_toggle_status)
                    }).collect::<Html>()}
                </div>
            }

            <LoadMoreButton
                shown={books.items.len()}
                total={books.total}
                has_more={books.has_more}
                is_loading={books.is_loading}
                on_load_more={books.load_more.clone()}
            />
        </div>
    }
}

fn book_row(
    book: &responses::Book,
    push_route: &Callback<Route>,
    on_toggle_status: &Callback<(BookId, BookStatus)>,
) -> Html {
    let next_status = match book.status {
        BookStatus::Active => BookStatus::Suspended,
        BookStatus::Suspended => BookStatus::Active,
    };
    let action_label = match book.status {
        BookStatus::Active => "Suspend",
        BookStatus::Suspended => "Unsuspend",
    };

    let on_view = {
        let push_route = push_route.clone();
        let book_id = book.id;
        Callback::from(move |_: MouseEvent| {
            push_route.emit(Route::BookDetail { id: book_id.0 });
        })
    };

    let on_toggle = {
        let on_toggle_status = on_toggle_status.clone();
        let book_id = book.id;
        Callback::from(move |_: MouseEvent| {
            on_toggle_status.emit((book_id, next_status));
        })
    };

    let genre_name = book
        .genre
        .as_ref()
        .map(|genre| genre.name.clone())
        .unwrap_or_else(|| "Uncategorized".to_string());

    html! {
        <div
            key={book.id.0}
            class="bg-white dark:bg-neutral-800 p-4 rounded-lg border \
                   border-neutral-200 dark:border-neutral-700"
        >
            <div class="flex justify-between items-center">
                <div>
                    <p class="font-medium">{&book.title}</p>
                    <p class="text-sm text-neutral-500 \
                              dark:text-neutral-400">
                        {format!(
                            "{} · {} · listed by {}",
                            book.author, genre_name, book.owner.name
                        )}
                    </p>
                </div>
                <div class="flex items-center gap-4">
                    <span class="text-sm text-neutral-500 \
                                 dark:text-neutral-400 hidden sm:inline">
                        {format!("Deposit ${}", book.deposit_amount)}
                    </span>
                    <StatusBadge
                        status={StatusKind::from(book.availability)}
                    />
                    <StatusBadge status={StatusKind::from(book.status)} />
                    <button
                        onclick={on_view}
                        class="text-sm font-medium underline"
                    >
                        {"View"}
                    </button>
                    <button
                        onclick={on_toggle}
                        class="text-sm font-medium underline \
                               text-red-700 dark:text-red-400"
                    >
                        {action_label}
                    </button>
                </div>
            </div>
        </div>
    }
}

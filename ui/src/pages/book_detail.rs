use payloads::requests::UpdateBookStatus;
use payloads::responses::Book;
use payloads::{BookId, BookStatus};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::{StatusBadge, StatusKind};
use crate::contexts::toast::use_toast;
use crate::hooks::{handle_client_error, use_book, use_push_route};
use crate::utils::format_date;
use crate::{Route, State};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub book_id: BookId,
}

#[function_component]
pub fn BookDetailPage(props: &Props) -> Html {
    let book = use_book(props.book_id);
    let (state, dispatch) = use_store::<State>();
    let toast = use_toast();
    let push_route = use_push_route();

    let on_back = {
        let push_route = push_route.clone();
        Callback::from(move |_: MouseEvent| push_route.emit(Route::Books))
    };

    let on_toggle_status = {
        let state = state.clone();
        let dispatch = dispatch.clone();
        let toast = toast.clone();
        let refetch = book.refetch.clone();
        let book_id = props.book_id;

        Callback::from(move |next_status: BookStatus| {
            let client = state.api_client();
            let dispatch = dispatch.clone();
            let toast = toast.clone();
            let refetch = refetch.clone();

            yew::platform::spawn_local(async move {
                let result = match client
                    .update_book_status(
                        book_id,
                        &UpdateBookStatus {
                            status: next_status,
                        },
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
                    // Surfaces the server's message as-is, e.g. a
                    // validation rejection when the book is on loan.
                    Err(message) => toast.error(message),
                }
            });
        })
    };

    let on_view_owner = {
        let push_route = push_route.clone();
        Callback::from(move |owner_id: payloads::UserId| {
            push_route.emit(Route::UserDetail { id: owner_id.0 });
        })
    };

    html! {
        <div>
            <button
                onclick={on_back}
                class="text-sm font-medium underline mb-4"
            >
                {"← Back to books"}
            </button>

            {book.render("book", |book, _, _| {
                book_card(book, &state, &on_toggle_status, &on_view_owner)
            })}
        </div>
    }
}

fn book_card(
    book: &Book,
    state: &State,
    on_toggle_status: &Callback<BookStatus>,
    on_view_owner: &Callback<payloads::UserId>,
) -> Html {
    let next_status = match book.status {
        BookStatus::Active => BookStatus::Suspended,
        BookStatus::Suspended => BookStatus::Active,
    };
    let action_label = match book.status {
        BookStatus::Active => "Suspend listing",
        BookStatus::Suspended => "Unsuspend listing",
    };

    let on_toggle = {
        let on_toggle_status = on_toggle_status.clone();
        Callback::from(move |_: MouseEvent| {
            on_toggle_status.emit(next_status);
        })
    };

    let on_owner = {
        let on_view_owner = on_view_owner.clone();
        let owner_id = book.owner.id;
        Callback::from(move |_: MouseEvent| on_view_owner.emit(owner_id))
    };

    let cover = match &book.cover_image {
        Some(path) => {
            let src = state.api_client().storage_url(path);
            html! {
                <img
                    src={src}
                    alt={book.title.clone()}
                    class="w-32 h-44 rounded-md object-cover"
                />
            }
        }
        None => html! {
            <div class="w-32 h-44 rounded-md bg-neutral-200 \
                        dark:bg-neutral-700 flex items-center \
                        justify-center text-sm text-neutral-500 \
                        dark:text-neutral-400">
                {"No cover"}
            </div>
        },
    };

    let genre_name = book
        .genre
        .as_ref()
        .map(|genre| genre.name.clone())
        .unwrap_or_else(|| "Uncategorized".to_string());

    html! {
        <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg border \
                    border-neutral-200 dark:border-neutral-700 max-w-2xl">
            <div class="flex gap-6 mb-6">
                {cover}
                <div>
                    <div class="flex items-center gap-3 mb-1">
                        <h1 class="text-xl font-semibold">{&book.title}</h1>
                        <StatusBadge
                            status={StatusKind::from(book.status)}
                        />
                    </div>
                    <p class="text-sm text-neutral-500 \
                              dark:text-neutral-400 mb-4">
                        {format!("by {} · {}", book.author, genre_name)}
                    </p>
                    <div class="flex items-center gap-2 text-sm mb-2">
                        <span class="text-neutral-500 \
                                     dark:text-neutral-400">
                            {"Availability:"}
                        </span>
                        <StatusBadge
                            status={StatusKind::from(book.availability)}
                        />
                    </div>
                    <p class="text-sm mb-2">
                        <span class="text-neutral-500 \
                                     dark:text-neutral-400">
                            {"Deposit: "}
                        </span>
                        {format!("${}", book.deposit_amount)}
                    </p>
                    <p class="text-sm mb-2">
                        <span class="text-neutral-500 \
                                     dark:text-neutral-400">
                            {"Listed: "}
                        </span>
                        {format_date(&book.created_at)}
                    </p>
                    <p class="text-sm">
                        <span class="text-neutral-500 \
                                     dark:text-neutral-400">
                            {"Owner: "}
                        </span>
                        <button
                            onclick={on_owner}
                            class="font-medium underline"
                        >
                            {&book.owner.name}
                        </button>
                    </p>
                </div>
            </div>

            <button
                onclick={on_toggle}
                class="px-4 py-2 border border-red-300 dark:border-red-700 \
                       text-red-700 dark:text-red-400 rounded-md text-sm \
                       font-medium"
            >
                {action_label}
            </button>
        </div>
    }
}

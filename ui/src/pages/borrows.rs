use payloads::requests::FILTER_ALL;
use payloads::responses::BorrowActivity;
use payloads::{BorrowId, DepositStatus};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::filter_select::FilterOption;
use crate::components::{
    FilterSelect, LoadMoreButton, StatusBadge, StatusKind,
};
use crate::contexts::toast::use_toast;
use crate::hooks::{handle_client_error, use_borrows};
use crate::utils::format_date;
use crate::State;

#[function_component]
pub fn BorrowsPage() -> Html {
    let borrows = use_borrows();
    let (state, dispatch) = use_store::<State>();
    let toast = use_toast();

    let filter_value = |key: &str, default: &str| {
        borrows
            .filters
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    };

    let status_options = vec![
        FilterOption::new(FILTER_ALL, "All statuses"),
        FilterOption::new("pending", "Pending")
            .with_count(borrows.filter_counts.get("pending").copied()),
        FilterOption::new("active", "Active")
            .with_count(borrows.filter_counts.get("active").copied()),
        FilterOption::new("returned", "Returned")
            .with_count(borrows.filter_counts.get("returned").copied()),
        FilterOption::new("overdue", "Overdue")
            .with_count(borrows.filter_counts.get("overdue").copied()),
        FilterOption::new("cancelled", "Cancelled")
            .with_count(borrows.filter_counts.get("cancelled").copied()),
    ];

    let deposit_options = vec![
        FilterOption::new(FILTER_ALL, "Any deposit state"),
        FilterOption::new("pending", "Pending"),
        FilterOption::new("held", "Held"),
        FilterOption::new("confirmed", "Confirmed"),
        FilterOption::new("refunded", "Refunded"),
    ];

    let set_filter_for = |key: &'static str| {
        let set_filter = borrows.set_filter.clone();
        Callback::from(move |value: String| {
            set_filter.emit((key.to_string(), value));
        })
    };

    let date_input_for = |key: &'static str| {
        let set_filter = borrows.set_filter.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_filter.emit((key.to_string(), input.value()));
        })
    };

    let on_confirm_deposit = {
        let state = state.clone();
        let dispatch = dispatch.clone();
        let toast = toast.clone();
        let refetch = borrows.refetch.clone();

        Callback::from(move |borrow_id: BorrowId| {
            let client = state.api_client();
            let dispatch = dispatch.clone();
            let toast = toast.clone();
            let refetch = refetch.clone();

            yew::platform::spawn_local(async move {
                let result = match client.confirm_deposit(borrow_id).await {
                    Ok(envelope) => envelope.into_data(),
                    Err(err) => Err(handle_client_error(&dispatch, err)),
                };

                match result {
                    Ok(_) => {
                        toast.success("Deposit confirmed.");
                        refetch.emit(());
                    }
                    Err(message) => toast.error(message),
                }
            });
        })
    };

    html! {
        <div>
            <h1 class="text-2xl font-semibold mb-6">{"Borrow activity"}</h1>

            <div class="flex flex-wrap items-center gap-4 mb-6">
                <FilterSelect
                    label="Status"
                    value={filter_value("status", FILTER_ALL)}
                    options={status_options}
                    on_change={set_filter_for("status")}
                />
                <FilterSelect
                    label="Deposit"
                    value={filter_value("deposit_status", FILTER_ALL)}
                    options={deposit_options}
                    on_change={set_filter_for("deposit_status")}
                />
                <label class="flex items-center gap-2 text-sm \
                              text-neutral-700 dark:text-neutral-300">
                    {"From"}
                    <input
                        type="date"
                        value={filter_value("from", "")}
                        onchange={date_input_for("from")}
                        class="px-2 py-2 border border-neutral-300 \
                               dark:border-neutral-600 rounded-md bg-white \
                               dark:bg-neutral-800 text-sm"
                    />
                </label>
                <label class="flex items-center gap-2 text-sm \
                              text-neutral-700 dark:text-neutral-300">
                    {"To"}
                    <input
                        type="date"
                        value={filter_value("to", "")}
                        onchange={date_input_for("to")}
                        class="px-2 py-2 border border-neutral-300 \
                               dark:border-neutral-600 rounded-md bg-white \
                               dark:bg-neutral-800 text-sm"
                    />
                </label>
            </div>

            if let Some(error) = &borrows.error {
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 \
                            border border-red-200 dark:border-red-800 mb-4">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {error}
                    </p>
                </div>
            }

            if borrows.items.is_empty() && borrows.is_loading {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Loading borrow activity..."}
                    </p>
                </div>
            } else if borrows.items.is_empty() && borrows.error.is_none() {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"No borrow activity in this range."}
                    </p>
                </div>
            } else {
                <div class="space-y-3">
                    {borrows.items.iter().map(|borrow| {
                        borrow_row(borrow, &on_confirm_deposit)
                    }).collect::<Html>()}
                </div>
            }

            <LoadMoreButton
                shown={borrows.items.len()}
                total={borrows.total}
                has_more={borrows.has_more}
                is_loading={borrows.is_loading}
                on_load_more={borrows.load_more.clone()}
            />
        </div>
    }
}

fn borrow_row(
    borrow: &BorrowActivity,
    on_confirm_deposit: &Callback<BorrowId>,
) -> Html {
    let on_confirm = {
        let on_confirm_deposit = on_confirm_deposit.clone();
        let borrow_id = borrow.id;
        Callback::from(move |_: MouseEvent| {
            on_confirm_deposit.emit(borrow_id);
        })
    };

    let returned = borrow
        .returned_at
        .as_ref()
        .map(|ts| format!("returned {}", format_date(ts)))
        .unwrap_or_else(|| format!("due {}", format_date(&borrow.due_at)));

    html! {
        <div
            key={borrow.id.0}
            class="bg-white dark:bg-neutral-800 p-4 rounded-lg border \
                   border-neutral-200 dark:border-neutral-700"
        >
            <div class="flex justify-between items-center">
                <div>
                    <p class="font-medium">{&borrow.book.title}</p>
                    <p class="text-sm text-neutral-500 \
                              dark:text-neutral-400">
                        {format!(
                            "{} → {} · borrowed {} · {}",
                            borrow.lender.name,
                            borrow.borrower.name,
                            format_date(&borrow.borrowed_at),
                            returned,
                        )}
                    </p>
                </div>
                <div class="flex items-center gap-4">
                    <span class="text-sm text-neutral-500 \
                                 dark:text-neutral-400 hidden sm:inline">
                        {format!("Deposit ${}", borrow.deposit_amount)}
                    </span>
                    <StatusBadge status={StatusKind::from(borrow.status)} />
                    <StatusBadge
                        status={StatusKind::from(borrow.deposit_status)}
                    />
                    if borrow.deposit_status == DepositStatus::Held {
                        <button
                            onclick={on_confirm}
                            class="text-sm font-medium underline"
                        >
                            {"Confirm deposit"}
                        </button>
                    }
                </div>
            </div>
        </div>
    }
}

use payloads::requests::{FILTER_ALL, UpdateReportStatus};
use payloads::responses::Report;
use payloads::{ReportId, ReportStatus};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::filter_select::FilterOption;
use crate::components::{
    FilterSelect, LoadMoreButton, SearchInput, StatusBadge, StatusKind,
};
use crate::contexts::toast::use_toast;
use crate::hooks::{handle_client_error, use_reports};
use crate::utils::format_date;
use crate::State;

#[function_component]
pub fn ReportsPage() -> Html {
    let reports = use_reports();
    let (state, dispatch) = use_store::<State>();
    let toast = use_toast();

    let status_value = reports
        .filters
        .get("status")
        .cloned()
        .unwrap_or_else(|| FILTER_ALL.to_string());

    let status_options = vec![
        FilterOption::new(FILTER_ALL, "All reports"),
        FilterOption::new("open", "Open")
            .with_count(reports.filter_counts.get("open").copied()),
        FilterOption::new("resolved", "Resolved")
            .with_count(reports.filter_counts.get("resolved").copied()),
        FilterOption::new("dismissed", "Dismissed")
            .with_count(reports.filter_counts.get("dismissed").copied()),
    ];

    let on_status_filter = {
        let set_filter = reports.set_filter.clone();
        Callback::from(move |value: String| {
            set_filter.emit(("status".to_string(), value));
        })
    };

    let on_moderate = {
        let state = state.clone();
        let dispatch = dispatch.clone();
        let toast = toast.clone();
        let refetch = reports.refetch.clone();

        Callback::from(move |(report_id, status): (ReportId, ReportStatus)| {
            let client = state.api_client();
            let dispatch = dispatch.clone();
            let toast = toast.clone();
            let refetch = refetch.clone();

            yew::platform::spawn_local(async move {
                let result = match client
                    .update_report_status(
                        report_id,
                        &UpdateReportStatus { status },
                    )
                    .await
                {
                    Ok(envelope) => envelope.into_data(),
                    Err(err) => Err(handle_client_error(&dispatch, err)),
                };

                match result {
                    Ok(report) => {
                        toast.success(format!(
                            "Report {}.",
                            report.status.as_str()
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
            <h1 class="text-2xl font-semibold mb-6">{"Reports"}</h1>

            <div class="flex flex-wrap items-center gap-4 mb-6">
                <SearchInput
                    value={reports.search_term.clone()}
                    on_change={reports.set_search_term.clone()}
                    placeholder="Search by reason..."
                />
                <FilterSelect
                    label="Status"
                    value={status_value}
                    options={status_options}
                    on_change={on_status_filter}
                />
            </div>

            if let Some(error) = &reports.error {
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 \
                            border border-red-200 dark:border-red-800 mb-4">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {error}
                    </p>
                </div>
            }

            if reports.items.is_empty() && reports.is_loading {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Loading reports..."}
                    </p>
                </div>
            } else if reports.items.is_empty() && reports.error.is_none() {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"No reports match the current filters."}
                    </p>
                </div>
            } else {
                <div class="space-y-3">
                    {reports.items.iter().map(|report| {
                        report_row(report, &on_moderate)
                    }).collect::<Html>()}
                </div>
            }

            <LoadMoreButton
                shown={reports.items.len()}
                total={reports.total}
                has_more={reports.has_more}
                is_loading={reports.is_loading}
                on_load_more={reports.load_more.clone()}
            />
        </div>
    }
}

fn report_row(
    report: &Report,
    on_moderate: &Callback<(ReportId, ReportStatus)>,
) -> Html {
    let subject = if let Some(user) = &report.reported_user {
        format!("user {}", user.name)
    } else if let Some(book) = &report.reported_book {
        format!("book \"{}\"", book.title)
    } else {
        "(subject removed)".to_string()
    };

    let action_button = |label: &'static str, status: ReportStatus| {
        let on_moderate = on_moderate.clone();
        let report_id = report.id;
        let onclick = Callback::from(move |_: MouseEvent| {
            on_moderate.emit((report_id, status));
        });
        html! {
            <button onclick={onclick} class="text-sm font-medium underline">
                {label}
            </button>
        }
    };

    html! {
        <div
            key={report.id.0}
            class="bg-white dark:bg-neutral-800 p-4 rounded-lg border \
                   border-neutral-200 dark:border-neutral-700"
        >
            <div class="flex justify-between items-start">
                <div>
                    <p class="font-medium">
                        {format!("{} reported {}", report.reporter.name, subject)}
                    </p>
                    <p class="text-sm text-neutral-500 \
                              dark:text-neutral-400">
                        {format!(
                            "{} · {}",
                            report.reason,
                            format_date(&report.created_at)
                        )}
                    </p>
                    if let Some(details) = &report.details {
                        <p class="text-sm text-neutral-600 \
                                  dark:text-neutral-300 mt-2">
                            {details}
                        </p>
                    }
                </div>
                <div class="flex items-center gap-4">
                    <StatusBadge status={StatusKind::from(report.status)} />
                    if report.status == ReportStatus::Open {
                        {action_button("Resolve", ReportStatus::Resolved)}
                        {action_button("Dismiss", ReportStatus::Dismissed)}
                    }
                </div>
            </div>
        </div>
    }
}

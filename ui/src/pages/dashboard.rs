use payloads::responses::DashboardStats;
use yew::prelude::*;

use crate::components::StatCard;
use crate::hooks::use_dashboard_stats;
use crate::utils::percentage;

#[function_component]
pub fn DashboardPage() -> Html {
    let stats = use_dashboard_stats();

    html! {
        <div>
            <h1 class="text-2xl font-semibold mb-6">{"Dashboard"}</h1>
            {stats.render("dashboard stats", |stats, _, _| {
                dashboard_body(stats)
            })}
        </div>
    }
}

fn dashboard_body(stats: &DashboardStats) -> Html {
    let total_genre_books: u64 =
        stats.genre_distribution.iter().map(|g| g.count).sum();
    let max_monthly = stats
        .monthly_borrows
        .iter()
        .map(|m| m.count)
        .max()
        .unwrap_or(0);

    html! {
        <div>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 \
                        gap-4 mb-8">
                <StatCard
                    label="Total users"
                    value={stats.total_users.to_string()}
                />
                <StatCard
                    label="Total books"
                    value={stats.total_books.to_string()}
                />
                <StatCard
                    label="Active borrows"
                    value={stats.active_borrows.to_string()}
                />
                <StatCard
                    label="Open reports"
                    value={stats.open_reports.to_string()}
                />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg \
                            border border-neutral-200 \
                            dark:border-neutral-700">
                    <h2 class="text-lg font-semibold mb-4">
                        {"Books by genre"}
                    </h2>
                    if stats.genre_distribution.is_empty() {
                        <p class="text-sm text-neutral-500 \
                                  dark:text-neutral-400">
                            {"No listed books yet."}
                        </p>
                    } else {
                        <div class="space-y-3">
                            {stats.genre_distribution.iter().map(|genre| {
                                let pct =
                                    percentage(genre.count, total_genre_books);
                                html! {
                                    <div key={genre.genre.clone()}>
                                        <div class="flex justify-between \
                                                    text-sm mb-1">
                                            <span>{&genre.genre}</span>
                                            <span class="text-neutral-500 \
                                                         dark:text-neutral-400">
                                                {format!(
                                                    "{} ({}%)",
                                                    genre.count, pct
                                                )}
                                            </span>
                                        </div>
                                        <div class="h-2 rounded bg-neutral-200 \
                                                    dark:bg-neutral-700">
                                            <div
                                                class="h-2 rounded \
                                                       bg-neutral-900 \
                                                       dark:bg-neutral-100"
                                                style={format!(
                                                    "width: {pct}%"
                                                )}
                                            />
                                        </div>
                                    </div>
                                }
                            }).collect::<Html>()}
                        </div>
                    }
                </div>

                <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg \
                            border border-neutral-200 \
                            dark:border-neutral-700">
                    <h2 class="text-lg font-semibold mb-4">
                        {"Borrows per month"}
                    </h2>
                    if stats.monthly_borrows.is_empty() {
                        <p class="text-sm text-neutral-500 \
                                  dark:text-neutral-400">
                            {"No borrow activity yet."}
                        </p>
                    } else {
                        <div class="space-y-3">
                            {stats.monthly_borrows.iter().map(|month| {
                                // Bars scale to the busiest month, not a
                                // grand total.
                                let pct =
                                    percentage(month.count, max_monthly);
                                html! {
                                    <div key={month.month.clone()}>
                                        <div class="flex justify-between \
                                                    text-sm mb-1">
                                            <span>{&month.month}</span>
                                            <span class="text-neutral-500 \
                                                         dark:text-neutral-400">
                                                {month.count}
                                            </span>
                                        </div>
                                        <div class="h-2 rounded bg-neutral-200 \
                                                    dark:bg-neutral-700">
                                            <div
                                                class="h-2 rounded \
                                                       bg-neutral-900 \
                                                       dark:bg-neutral-100"
                                                style={format!(
                                                    "width: {pct}%"
                                                )}
                                            />
                                        </div>
                                    </div>
                                }
                            }).collect::<Html>()}
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}

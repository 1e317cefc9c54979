use yew::prelude::*;
use yew_router::prelude::*;

mod auth;
mod components;
mod contexts;
mod hooks;
mod logs;
mod pages;
mod state;
mod utils;

pub use state::{AuthState, Session, State};

use components::RequireAuth;
use components::layout::MainLayout;
use contexts::toast::ToastProvider;
use hooks::use_authentication;
use pages::{
    AdminsPage, BookDetailPage, BooksPage, BorrowsPage, DashboardPage,
    LocationsPage, LoginPage, NotFoundPage, ReportsPage, UserDetailPage,
    UsersPage,
};

/// Backend base address - configurable at build time, with a same-origin
/// fallback.
pub fn backend_address() -> String {
    option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            let window = web_sys::window().expect("no window");
            window.location().origin().unwrap_or_default()
        })
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/login")]
    Login,
    #[at("/users")]
    Users,
    #[at("/users/:id")]
    UserDetail { id: i64 },
    #[at("/books")]
    Books,
    #[at("/books/:id")]
    BookDetail { id: i64 },
    #[at("/borrows")]
    Borrows,
    #[at("/locations")]
    Locations,
    #[at("/reports")]
    Reports,
    #[at("/admins")]
    Admins,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();

    html! {
        <ToastProvider>
            <BrowserRouter>
                <AppShell />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[function_component]
fn AppShell() -> Html {
    // Restore the session from storage before anything renders data.
    use_authentication();

    html! {
        <Switch<Route> render={switch} />
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::NotFound => html! {
            <MainLayout>
                <NotFoundPage />
            </MainLayout>
        },
        guarded => html! {
            <MainLayout>
                <RequireAuth>
                    { guarded_page(guarded) }
                </RequireAuth>
            </MainLayout>
        },
    }
}

fn guarded_page(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Users => html! { <UsersPage /> },
        Route::UserDetail { id } => html! {
            <UserDetailPage user_id={payloads::UserId(id)} />
        },
        Route::Books => html! { <BooksPage /> },
        Route::BookDetail { id } => html! {
            <BookDetailPage book_id={payloads::BookId(id)} />
        },
        Route::Borrows => html! { <BorrowsPage /> },
        Route::Locations => html! { <LocationsPage /> },
        Route::Reports => html! { <ReportsPage /> },
        Route::Admins => html! { <AdminsPage /> },
        Route::Login | Route::NotFound => html! {},
    }
}

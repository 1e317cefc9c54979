pub mod admins;
pub mod book_detail;
pub mod books;
pub mod borrows;
pub mod dashboard;
pub mod locations;
pub mod login;
pub mod not_found;
pub mod reports;
pub mod user_detail;
pub mod users;

pub use admins::AdminsPage;
pub use book_detail::BookDetailPage;
pub use books::BooksPage;
pub use borrows::BorrowsPage;
pub use dashboard::DashboardPage;
pub use locations::LocationsPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use reports::ReportsPage;
pub use user_detail::UserDetailPage;
pub use users::UsersPage;

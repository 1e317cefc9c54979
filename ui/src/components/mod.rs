pub mod filter_select;
pub mod layout;
pub mod load_more_button;
pub mod modal;
pub mod require_auth;
pub mod search_input;
pub mod stat_card;
pub mod status_badge;
pub mod toast;

pub use filter_select::FilterSelect;
pub use load_more_button::LoadMoreButton;
pub use modal::Modal;
pub use require_auth::RequireAuth;
pub use search_input::SearchInput;
pub use stat_card::StatCard;
pub use status_badge::{StatusBadge, StatusKind};
pub use toast::ToastContainer;

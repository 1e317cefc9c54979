use payloads::{
    Availability, BookStatus, BorrowStatus, DepositStatus, ReportStatus,
    UserStatus,
};
use yew::prelude::*;

/// Every status enum that gets a badge, unified so the display mapping
/// lives in one table instead of per-view switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    User(UserStatus),
    Book(BookStatus),
    Availability(Availability),
    Borrow(BorrowStatus),
    Deposit(DepositStatus),
    Report(ReportStatus),
}

impl From<UserStatus> for StatusKind {
    fn from(status: UserStatus) -> Self {
        Self::User(status)
    }
}

impl From<BookStatus> for StatusKind {
    fn from(status: BookStatus) -> Self {
        Self::Book(status)
    }
}

impl From<Availability> for StatusKind {
    fn from(status: Availability) -> Self {
        Self::Availability(status)
    }
}

impl From<BorrowStatus> for StatusKind {
    fn from(status: BorrowStatus) -> Self {
        Self::Borrow(status)
    }
}

impl From<DepositStatus> for StatusKind {
    fn from(status: DepositStatus) -> Self {
        Self::Deposit(status)
    }
}

impl From<ReportStatus> for StatusKind {
    fn from(status: ReportStatus) -> Self {
        Self::Report(status)
    }
}

const GREEN: &str = "bg-green-100 text-green-800 dark:bg-green-900/40 \
                     dark:text-green-300";
const RED: &str =
    "bg-red-100 text-red-800 dark:bg-red-900/40 dark:text-red-300";
const AMBER: &str = "bg-amber-100 text-amber-800 dark:bg-amber-900/40 \
                     dark:text-amber-300";
const BLUE: &str =
    "bg-blue-100 text-blue-800 dark:bg-blue-900/40 dark:text-blue-300";
const NEUTRAL: &str = "bg-neutral-200 text-neutral-800 dark:bg-neutral-600 \
                       dark:text-neutral-200";

impl StatusKind {
    /// The single status-to-display lookup table.
    pub fn display(&self) -> (&'static str, &'static str) {
        match self {
            Self::User(UserStatus::Active) => ("Active", GREEN),
            Self::User(UserStatus::Suspended) => ("Suspended", RED),
            Self::Book(BookStatus::Active) => ("Active", GREEN),
            Self::Book(BookStatus::Suspended) => ("Suspended", RED),
            Self::Availability(Availability::Available) => {
                ("Available", GREEN)
            }
            Self::Availability(Availability::Borrowed) => ("Borrowed", BLUE),
            Self::Availability(Availability::Unavailable) => {
                ("Unavailable", NEUTRAL)
            }
            Self::Borrow(BorrowStatus::Pending) => ("Pending", AMBER),
            Self::Borrow(BorrowStatus::Active) => ("Active", BLUE),
            Self::Borrow(BorrowStatus::Returned) => ("Returned", GREEN),
            Self::Borrow(BorrowStatus::Overdue) => ("Overdue", RED),
            Self::Borrow(BorrowStatus::Cancelled) => ("Cancelled", NEUTRAL),
            Self::Deposit(DepositStatus::Pending) => ("Pending", AMBER),
            Self::Deposit(DepositStatus::Held) => ("Held", BLUE),
            Self::Deposit(DepositStatus::Confirmed) => ("Confirmed", GREEN),
            Self::Deposit(DepositStatus::Refunded) => ("Refunded", NEUTRAL),
            Self::Report(ReportStatus::Open) => ("Open", AMBER),
            Self::Report(ReportStatus::Resolved) => ("Resolved", GREEN),
            Self::Report(ReportStatus::Dismissed) => ("Dismissed", NEUTRAL),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub status: StatusKind,
}

#[function_component]
pub fn StatusBadge(props: &Props) -> Html {
    let (text, classes) = props.status.display();

    html! {
        <span class={format!(
            "px-2 py-1 text-xs font-medium rounded-full {}", classes
        )}>
            {text}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_their_variants() {
        assert_eq!(
            StatusKind::from(UserStatus::Suspended).display().0,
            "Suspended"
        );
        assert_eq!(
            StatusKind::from(Availability::Borrowed).display().0,
            "Borrowed"
        );
        assert_eq!(
            StatusKind::from(DepositStatus::Confirmed).display().0,
            "Confirmed"
        );
        assert_eq!(
            StatusKind::from(ReportStatus::Dismissed).display().0,
            "Dismissed"
        );
    }

    #[test]
    fn suspended_and_overdue_render_as_red() {
        assert_eq!(StatusKind::from(UserStatus::Suspended).display().1, RED);
        assert_eq!(StatusKind::from(BorrowStatus::Overdue).display().1, RED);
    }
}

use std::collections::BTreeMap;

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    AdminId, Availability, BookId, BookStatus, BorrowId, BorrowStatus,
    DepositStatus, GenreId, LocationId, ReportId, ReportStatus, UserId,
    UserStatus,
};

/// Standard response wrapper returned by every endpoint.
///
/// Returned verbatim by the client methods; callers are responsible for
/// interpreting `success` and surfacing `message` on failure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Unwrap the payload, turning a `success: false` body or a missing
    /// `data` field into the server-supplied message.
    pub fn into_data(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ if !self.message.is_empty() => Err(self.message),
            _ => Err("The server returned an unexpected response."
                .to_string()),
        }
    }
}

/// Pagination cursor as reported by the server, never computed locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    pub per_page: u32,
    pub current_page: u32,
    pub last_page: u32,
}

/// One page of a list endpoint, with server-computed per-bucket counts for
/// rendering filter-option badges.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    pub pagination: Pagination,
    pub items: Vec<T>,
    #[serde(default)]
    pub filter_counts: BTreeMap<String, u64>,
}

/// Minimal user reference embedded in other records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub status: UserStatus,
    pub books_listed: u32,
    pub borrows_count: u32,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

/// Minimal book reference embedded in borrow and report records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: BookId,
    pub title: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: Option<Genre>,
    pub owner: UserSummary,
    pub availability: Availability,
    pub status: BookStatus,
    pub deposit_amount: Decimal,
    pub cover_image: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorrowActivity {
    pub id: BorrowId,
    pub book: BookSummary,
    pub borrower: UserSummary,
    pub lender: UserSummary,
    pub status: BorrowStatus,
    pub deposit_status: DepositStatus,
    pub deposit_amount: Decimal,
    pub borrowed_at: Timestamp,
    pub due_at: Timestamp,
    pub returned_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub is_active: bool,
    pub books_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    pub id: AdminId,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
}

/// The signed-in staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminProfile {
    pub id: AdminId,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,
    pub reporter: UserSummary,
    pub reported_user: Option<UserSummary>,
    pub reported_book: Option<BookSummary>,
    pub reason: String,
    pub details: Option<String>,
    pub status: ReportStatus,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub admin: AdminProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    /// Month label as reported by the server, e.g. "2026-08".
    pub month: String,
    pub count: u64,
}

/// Aggregate counts for the dashboard landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_books: u64,
    pub active_borrows: u64,
    pub open_reports: u64,
    pub genre_distribution: Vec<GenreCount>,
    pub monthly_borrows: Vec<MonthlyCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_envelope_deserializes_with_filter_counts() {
        let body = serde_json::json!({
            "success": true,
            "message": "ok",
            "data": {
                "pagination": {
                    "total": 25,
                    "per_page": 10,
                    "current_page": 1,
                    "last_page": 3
                },
                "items": [
                    {
                        "id": 7,
                        "name": "Jamie Reader",
                        "email": "jamie@example.com",
                        "avatar": null,
                        "status": "active",
                        "books_listed": 4,
                        "borrows_count": 11,
                        "created_at": "2026-01-15T09:30:00Z"
                    }
                ],
                "filter_counts": { "active": 21, "suspended": 4 }
            }
        });

        let envelope: Envelope<Page<User>> =
            serde_json::from_value(body).unwrap();
        let page = envelope.into_data().unwrap();

        assert_eq!(page.pagination.total, 25);
        assert_eq!(page.pagination.last_page, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].status, UserStatus::Active);
        assert_eq!(page.filter_counts.get("suspended"), Some(&4));
    }

    #[test]
    fn missing_filter_counts_default_to_empty() {
        let body = serde_json::json!({
            "success": true,
            "message": "",
            "data": {
                "pagination": {
                    "total": 0,
                    "per_page": 10,
                    "current_page": 1,
                    "last_page": 1
                },
                "items": []
            }
        });

        let envelope: Envelope<Page<Location>> =
            serde_json::from_value(body).unwrap();
        let page = envelope.into_data().unwrap();
        assert!(page.filter_counts.is_empty());
    }

    #[test]
    fn failed_envelope_surfaces_server_message() {
        let body = serde_json::json!({
            "success": false,
            "message": "Cannot suspend this book while it is on loan."
        });

        let envelope: Envelope<Book> = serde_json::from_value(body).unwrap();
        assert_eq!(
            envelope.into_data().unwrap_err(),
            "Cannot suspend this book while it is on loan."
        );
    }
}

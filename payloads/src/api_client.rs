pub use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{
    AdminId, BookId, BorrowId, LocationId, ReportId, UserId, requests,
    responses,
    responses::{Envelope, Page},
};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// Acknowledgement body for endpoints whose `data` field carries nothing
/// the client uses.
pub type Ack = Envelope<serde_json::Value>;

/// An API client for interfacing with the backend.
///
/// Holds the session token explicitly; callers construct a client from the
/// current session rather than reading ambient storage on every request.
pub struct APIClient {
    pub address: String,
    pub token: Option<String>,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: impl Into<String>, token: Option<String>) -> Self {
        Self {
            address: address.into(),
            token,
            inner_client: reqwest::Client::new(),
        }
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/api/admin/{path}", &self.address)
    }

    fn authorize(
        &self,
        request: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get(&self, path: &str) -> ReqwestResult {
        self.authorize(self.inner_client.get(self.format_url(path)))
            .send()
            .await
    }

    async fn get_query(
        &self,
        path: &str,
        pairs: &[(String, String)],
    ) -> ReqwestResult {
        self.authorize(
            self.inner_client.get(self.format_url(path)).query(pairs),
        )
        .send()
        .await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.authorize(
            self.inner_client.post(self.format_url(path)).json(body),
        )
        .send()
        .await
    }

    async fn empty_post(&self, path: &str) -> ReqwestResult {
        self.authorize(self.inner_client.post(self.format_url(path)))
            .send()
            .await
    }

    async fn patch(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.authorize(
            self.inner_client.patch(self.format_url(path)).json(body),
        )
        .send()
        .await
    }

    async fn empty_patch(&self, path: &str) -> ReqwestResult {
        self.authorize(self.inner_client.patch(self.format_url(path)))
            .send()
            .await
    }

    async fn put(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.authorize(
            self.inner_client.put(self.format_url(path)).json(body),
        )
        .send()
        .await
    }

    async fn delete(&self, path: &str) -> ReqwestResult {
        self.authorize(self.inner_client.delete(self.format_url(path)))
            .send()
            .await
    }
}

/// Methods on the backend API
impl APIClient {
    // Session

    pub async fn login(
        &self,
        details: &requests::LoginCredentials,
    ) -> Result<Envelope<responses::LoginData>, ClientError> {
        let response = self.post("login", details).await?;
        ok_envelope(response).await
    }

    pub async fn logout(&self) -> Result<Ack, ClientError> {
        let response = self.empty_post("logout").await?;
        ok_envelope(response).await
    }

    /// Get the signed-in staff member's profile.
    pub async fn me(
        &self,
    ) -> Result<Envelope<responses::AdminProfile>, ClientError> {
        let response = self.get("me").await?;
        ok_envelope(response).await
    }

    // Users

    pub async fn list_users(
        &self,
        query: &requests::ListQuery,
    ) -> Result<Envelope<Page<responses::User>>, ClientError> {
        let response = self.get_query("users", &query.query_pairs()).await?;
        ok_envelope(response).await
    }

    pub async fn get_user(
        &self,
        user_id: UserId,
    ) -> Result<Envelope<responses::User>, ClientError> {
        let response = self.get(&format!("users/{user_id}")).await?;
        ok_envelope(response).await
    }

    pub async fn update_user_status(
        &self,
        user_id: UserId,
        details: &requests::UpdateUserStatus,
    ) -> Result<Envelope<responses::User>, ClientError> {
        let response = self
            .patch(&format!("users/{user_id}/status"), details)
            .await?;
        ok_envelope(response).await
    }

    // Books

    pub async fn list_books(
        &self,
        query: &requests::ListQuery,
    ) -> Result<Envelope<Page<responses::Book>>, ClientError> {
        let response = self.get_query("books", &query.query_pairs()).await?;
        ok_envelope(response).await
    }

    pub async fn get_book(
        &self,
        book_id: BookId,
    ) -> Result<Envelope<responses::Book>, ClientError> {
        let response = self.get(&format!("books/{book_id}")).await?;
        ok_envelope(response).await
    }

    /// Suspend or unsuspend a book. Rejects with a 422 when the book has a
    /// conflicting active state, e.g. it is currently on loan.
    pub async fn update_book_status(
        &self,
        book_id: BookId,
        details: &requests::UpdateBookStatus,
    ) -> Result<Envelope<responses::Book>, ClientError> {
        let response = self
            .patch(&format!("books/{book_id}/status"), details)
            .await?;
        ok_envelope(response).await
    }

    pub async fn list_genres(
        &self,
    ) -> Result<Envelope<Vec<responses::Genre>>, ClientError> {
        let response = self.get("genres").await?;
        ok_envelope(response).await
    }

    // Borrow activities

    pub async fn list_borrows(
        &self,
        query: &requests::ListQuery,
    ) -> Result<Envelope<Page<responses::BorrowActivity>>, ClientError> {
        let response = self.get_query("borrows", &query.query_pairs()).await?;
        ok_envelope(response).await
    }

    pub async fn get_borrow(
        &self,
        borrow_id: BorrowId,
    ) -> Result<Envelope<responses::BorrowActivity>, ClientError> {
        let response = self.get(&format!("borrows/{borrow_id}")).await?;
        ok_envelope(response).await
    }

    /// Mark the deposit of a borrow as confirmed.
    pub async fn confirm_deposit(
        &self,
        borrow_id: BorrowId,
    ) -> Result<Envelope<responses::BorrowActivity>, ClientError> {
        let response = self
            .empty_patch(&format!("borrows/{borrow_id}/deposit/confirm"))
            .await?;
        ok_envelope(response).await
    }

    // Locations

    pub async fn list_locations(
        &self,
    ) -> Result<Envelope<Vec<responses::Location>>, ClientError> {
        let response = self.get("locations").await?;
        ok_envelope(response).await
    }

    pub async fn get_location(
        &self,
        location_id: LocationId,
    ) -> Result<Envelope<responses::Location>, ClientError> {
        let response = self.get(&format!("locations/{location_id}")).await?;
        ok_envelope(response).await
    }

    pub async fn create_location(
        &self,
        details: &requests::CreateLocation,
    ) -> Result<Envelope<responses::Location>, ClientError> {
        let response = self.post("locations", details).await?;
        ok_envelope(response).await
    }

    pub async fn update_location(
        &self,
        location_id: LocationId,
        details: &requests::UpdateLocation,
    ) -> Result<Envelope<responses::Location>, ClientError> {
        let response = self
            .put(&format!("locations/{location_id}"), details)
            .await?;
        ok_envelope(response).await
    }

    // Reports

    pub async fn list_reports(
        &self,
        query: &requests::ListQuery,
    ) -> Result<Envelope<Page<responses::Report>>, ClientError> {
        let response = self.get_query("reports", &query.query_pairs()).await?;
        ok_envelope(response).await
    }

    pub async fn get_report(
        &self,
        report_id: ReportId,
    ) -> Result<Envelope<responses::Report>, ClientError> {
        let response = self.get(&format!("reports/{report_id}")).await?;
        ok_envelope(response).await
    }

    pub async fn update_report_status(
        &self,
        report_id: ReportId,
        details: &requests::UpdateReportStatus,
    ) -> Result<Envelope<responses::Report>, ClientError> {
        let response = self
            .patch(&format!("reports/{report_id}/status"), details)
            .await?;
        ok_envelope(response).await
    }

    // Admin accounts

    pub async fn list_admins(
        &self,
    ) -> Result<Envelope<Vec<responses::Admin>>, ClientError> {
        let response = self.get("admins").await?;
        ok_envelope(response).await
    }

    pub async fn create_admin(
        &self,
        details: &requests::CreateAdmin,
    ) -> Result<Envelope<responses::Admin>, ClientError> {
        let response = self.post("admins", details).await?;
        ok_envelope(response).await
    }

    pub async fn delete_admin(
        &self,
        admin_id: AdminId,
    ) -> Result<Ack, ClientError> {
        let response = self.delete(&format!("admins/{admin_id}")).await?;
        ok_envelope(response).await
    }

    // Dashboard

    pub async fn dashboard_stats(
        &self,
    ) -> Result<Envelope<responses::DashboardStats>, ClientError> {
        let response = self.get("dashboard").await?;
        ok_envelope(response).await
    }

    /// Returns the URL for fetching stored assets such as avatars and book
    /// covers. Use this for `<img src>` attributes in the UI.
    pub fn storage_url(&self, path: &str) -> String {
        format!("{}/storage/{}", self.address, path)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Missing, invalid, or expired token. The UI clears the session and
    /// redirects to login rather than showing this inline.
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
    #[error("Resource not found.")]
    NotFound,
    /// 422-class rejection; the server message is shown verbatim.
    #[error("{0}")]
    Validation(String),
    #[error("Something went wrong. Please try again later.")]
    Server(StatusCode),
    /// Any other non-2xx response, with the server message when present.
    #[error("{1}")]
    Api(StatusCode, String),
    #[error("Request failed. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}

/// Deserialize a successful response into the typed envelope, or map a
/// non-2xx status onto the error taxonomy.
pub async fn ok_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Envelope<T>, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<Envelope<T>>().await?);
    }

    let text = response.text().await.unwrap_or_default();
    // Prefer the server-supplied message field when the body parses.
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.message)
        .unwrap_or(text);

    Err(match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        StatusCode::NOT_FOUND => ClientError::NotFound,
        StatusCode::UNPROCESSABLE_ENTITY => ClientError::Validation(message),
        s if s.is_server_error() => ClientError::Server(s),
        s => ClientError::Api(s, message),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_server_message_verbatim() {
        let err = ClientError::Validation(
            "Cannot suspend this book while it is on loan.".to_string(),
        );
        assert_eq!(
            err.to_string(),
            "Cannot suspend this book while it is on loan."
        );
    }

    #[test]
    fn server_error_displays_generic_message() {
        let err = ClientError::Server(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "Something went wrong. Please try again later."
        );
    }

    #[test]
    fn error_body_message_is_preferred_over_raw_text() {
        let parsed = serde_json::from_str::<ErrorBody>(
            r#"{"success":false,"message":"Email already taken."}"#,
        )
        .map(|body| body.message)
        .unwrap_or_else(|_| "raw".to_string());
        assert_eq!(parsed, "Email already taken.");
    }

    #[test]
    fn client_formats_api_paths_under_admin_prefix() {
        let client = APIClient::new("https://api.shelfshare.test", None);
        assert_eq!(
            client.format_url("users/42/status"),
            "https://api.shelfshare.test/api/admin/users/42/status"
        );
        assert_eq!(
            client.storage_url("covers/42.jpg"),
            "https://api.shelfshare.test/storage/covers/42.jpg"
        );
    }
}

use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, StatusCode};
use shared::models::{
    CreateUserRequest, CurrentUser, LoginRequest, LoginResponse, MeResponse, SignupResponse,
};
use thiserror::Error;

use crate::config::FrontendConfig;

thread_local! {
    static SHARED_CLIENT: OnceCell<GatehouseClient> = OnceCell::new();
}

/// Failure modes for calls against the Gatehouse API.
///
/// The taxonomy is flat on purpose: every flow reacts the same way to a
/// transport failure, a non-2xx status, or a body-level `success: false`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable envelope (network failure or an
    /// unparseable body).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered, but refused the operation.
    #[error("{}", .message.as_deref().unwrap_or("request rejected"))]
    Rejected {
        /// HTTP status of the response.
        status: StatusCode,
        /// Server-supplied human-readable reason, when it gave one.
        message: Option<String>,
    },
}

impl ApiError {
    /// The server's reason for rejecting the call, if it gave one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            Self::Transport(_) => None,
        }
    }
}

/// Lightweight API client for the Gatehouse auth endpoints.
#[derive(Clone, Debug)]
pub struct GatehouseClient {
    base_url: String,
    client: Client,
}

impl GatehouseClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Process-wide client instance used by the pages.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::default().api_base_url()))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Ask the session-check endpoint who the current visitor is.
    ///
    /// Succeeds only while a valid session cookie exists.
    pub async fn current_user(&self) -> Result<CurrentUser, ApiError> {
        let url = self.api_url("users/me");
        let response = with_credentials(self.client.get(url)).send().await?;
        let status = response.status();
        let body: MeResponse = response.json().await?;
        check_envelope(status, body.success, body.error)?;
        require_user(status, body.user)
    }

    /// Authenticate with username/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<CurrentUser, ApiError> {
        let url = self.api_url("users/login");
        let response = with_credentials(self.client.post(url).json(payload))
            .send()
            .await?;
        let status = response.status();
        let body: LoginResponse = response.json().await?;
        check_envelope(status, body.success, body.error)?;
        require_user(status, body.user)
    }

    /// Create a new account. Returns the server's confirmation message.
    ///
    /// No session is established by this call; the visitor still has to log
    /// in afterwards.
    pub async fn signup(&self, payload: &CreateUserRequest) -> Result<String, ApiError> {
        let url = self.api_url("users");
        let response = self.client.post(url).json(payload).send().await?;
        let status = response.status();
        let body: SignupResponse = response.json().await?;
        check_envelope(status, body.success, body.error)?;
        Ok(body
            .message
            .unwrap_or_else(|| "User created successfully".to_string()))
    }

    /// Terminate the current session. The response body is ignored; callers
    /// clear local state whatever happens here.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let url = self.api_url("users/logout");
        with_credentials(self.client.post(url)).send().await?;
        Ok(())
    }
}

/// Browser fetch only attaches the session cookie when asked to.
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    #[cfg(target_arch = "wasm32")]
    {
        request.fetch_credentials_include()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        request
    }
}

/// The one envelope convention: a call succeeds iff the HTTP status is 2xx
/// AND the body-level `success` flag is set. Either failing rejects the call
/// with the server's error string, when present.
fn check_envelope(
    status: StatusCode,
    success: bool,
    error: Option<String>,
) -> Result<(), ApiError> {
    if status.is_success() && success {
        Ok(())
    } else {
        Err(ApiError::Rejected {
            status,
            message: error,
        })
    }
}

/// An accepted envelope that still lacks the user payload is a rejection,
/// not a panic.
fn require_user(status: StatusCode, user: Option<CurrentUser>) -> Result<CurrentUser, ApiError> {
    user.ok_or(ApiError::Rejected {
        status,
        message: Some("missing user payload".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_client_creation() {
        let client = GatehouseClient::new("http://localhost:8000/api");
        assert_eq!(client.api_url("users/me"), "http://localhost:8000/api/users/me");
    }

    #[test]
    fn test_api_url_normalizes_slashes() {
        let client = GatehouseClient::new("/api/");
        assert_eq!(client.api_url("/users/login"), "/api/users/login");
        assert_eq!(client.api_url("users"), "/api/users");
        assert_eq!(client.api_url("users/logout"), "/api/users/logout");
    }

    #[test]
    fn test_check_envelope_accepts_ok_status_and_flag() {
        assert!(check_envelope(StatusCode::OK, true, None).is_ok());
        assert!(check_envelope(StatusCode::CREATED, true, None).is_ok());
    }

    #[test]
    fn test_check_envelope_rejects_body_flag() {
        // 200 with success:false still counts as a rejection.
        let err = check_envelope(
            StatusCode::OK,
            false,
            Some("Invalid username or password".to_string()),
        )
        .unwrap_err();

        match err {
            ApiError::Rejected { status, message } => {
                assert_eq!(status, StatusCode::OK);
                assert_eq!(message.as_deref(), Some("Invalid username or password"));
            }
            ApiError::Transport(_) => panic!("expected a rejection"),
        }
    }

    #[test]
    fn test_check_envelope_rejects_error_status() {
        // success:true under a non-2xx status is equally a rejection.
        let err = check_envelope(StatusCode::UNAUTHORIZED, true, None).unwrap_err();

        match err {
            ApiError::Rejected { status, message } => {
                assert_eq!(status, StatusCode::UNAUTHORIZED);
                assert_eq!(message, None);
            }
            ApiError::Transport(_) => panic!("expected a rejection"),
        }
    }

    #[test]
    fn test_require_user_rejects_empty_payload() {
        let err = require_user(StatusCode::OK, None).unwrap_err();
        assert_eq!(err.server_message(), Some("missing user payload"));

        let user = CurrentUser {
            username: "alice".to_string(),
            email: "a@b.com".to_string(),
        };
        assert_eq!(require_user(StatusCode::OK, Some(user.clone())).unwrap(), user);
    }

    #[test]
    fn test_rejected_error_display() {
        let err = ApiError::Rejected {
            status: StatusCode::BAD_REQUEST,
            message: Some("Username or Email already exists".to_string()),
        };
        assert_eq!(err.to_string(), "Username or Email already exists");

        let bare = ApiError::Rejected {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        };
        assert_eq!(bare.to_string(), "request rejected");
    }

    #[test]
    fn test_rejection_pipeline_from_backend_json() {
        // Wire shape straight off the login endpoint, driven through the
        // same helpers the client methods use.
        let body: shared::models::LoginResponse =
            serde_json::from_str(r#"{"success":false,"error":"Invalid username or password"}"#)
                .unwrap();

        let outcome = check_envelope(StatusCode::UNAUTHORIZED, body.success, body.error);
        assert_eq!(
            outcome.unwrap_err().server_message(),
            Some("Invalid username or password")
        );
    }
}

use serde::{Deserialize, Serialize};

use super::user::CurrentUser;

/// Response envelope for the session-check endpoint (`GET /api/users/me`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeResponse {
    /// Body-level outcome flag.
    pub success: bool,

    /// The authenticated identity; present when `success` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<CurrentUser>,

    /// Human-readable failure reason; present when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response envelope for the login endpoint (`POST /api/users/login`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Body-level outcome flag.
    pub success: bool,

    /// The identity that just authenticated; present when `success` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<CurrentUser>,

    /// Human-readable failure reason; present when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response envelope for the user-creation endpoint (`POST /api/users`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupResponse {
    /// Body-level outcome flag.
    pub success: bool,

    /// Human-readable confirmation; present when `success` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Human-readable failure reason; present when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response envelope for the logout endpoint (`POST /api/users/logout`).
///
/// The client ignores this body entirely; the type exists so the wire
/// contract is written down in one place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogoutResponse {
    /// Body-level outcome flag.
    pub success: bool,

    /// Human-readable confirmation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

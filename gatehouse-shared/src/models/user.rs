use serde::{Deserialize, Serialize};

/// The authenticated visitor's identity as reported by the backend.
///
/// This is the whole of the client-side profile record: a flat cache of the
/// most recent successful authentication response. Fields the backend may
/// add (internal ids, claims) are ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentUser {
    /// The user's username.
    pub username: String,

    /// The user's email address.
    pub email: String,
}

/// Request to authenticate with username/password credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's username.
    pub username: String,

    /// The user's password.
    pub password: String,

    /// Ask the backend for a long-lived session cookie instead of a
    /// single-day one. Wire name is the backend's single word.
    pub rememberme: bool,
}

/// Request to create a new user account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateUserRequest {
    /// The user's username.
    pub username: String,

    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}
